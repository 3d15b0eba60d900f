use axum::extract::Request;
use axum::http::HeaderValue;
use axum::middleware::Next;
use axum::response::Response;
use chrono::Utc;
use std::time::Instant;
use uuid::Uuid;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Logs how long each request took and tags it with a request id.
///
/// An inbound `x-request-id` is reused, otherwise a UUID v7 is minted. The id
/// is echoed on the response.
pub async fn log_request_timing(mut req: Request, next: Next) -> Response {
    let started = Instant::now();
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let inbound = req.headers().get(REQUEST_ID_HEADER).cloned();
    let request_id = match inbound {
        Some(value) => value,
        None => {
            let minted = HeaderValue::from_str(&Uuid::now_v7().to_string())
                .unwrap_or_else(|_| HeaderValue::from_static("unknown"));
            req.headers_mut().insert(REQUEST_ID_HEADER, minted.clone());
            minted
        }
    };

    let mut response = next.run(req).await;

    tracing::info!(
        request_id = request_id.to_str().unwrap_or("invalid"),
        %method,
        path = %path,
        status = response.status().as_u16(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        finished_at = %Utc::now().to_rfc3339(),
        "request completed"
    );

    response.headers_mut().insert(REQUEST_ID_HEADER, request_id);
    response
}
