use crate::modules::employees::adapters::outbound::department_directory::{
    DepartmentDirectory, DirectoryError, HARD_TOKEN_HEADER, HardToken, UpstreamResponse,
};
use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};

/// Department service client over HTTP.
///
/// The underlying client carries no default headers. Every call gets its own
/// header map holding only the shared secret, so concurrent requests never
/// observe each other's credentials.
pub struct HttpDepartmentDirectory {
    client: Client,
    url: String,
}

impl HttpDepartmentDirectory {
    pub fn new(url: impl Into<String>) -> Result<Self, reqwest::Error> {
        Ok(Self {
            client: Client::builder().build()?,
            url: url.into(),
        })
    }
}

fn request_headers(token: &HardToken) -> Result<HeaderMap, DirectoryError> {
    let mut value =
        HeaderValue::from_str(token.expose()).map_err(|_| DirectoryError::InvalidHeader)?;
    value.set_sensitive(true);

    let mut headers = HeaderMap::with_capacity(1);
    headers.insert(HeaderName::from_static("hard-token"), value);
    Ok(headers)
}

#[async_trait]
impl DepartmentDirectory for HttpDepartmentDirectory {
    async fn fetch_all(&self, token: &HardToken) -> Result<UpstreamResponse, DirectoryError> {
        let headers = request_headers(token)?;

        tracing::debug!(url = %self.url, header = HARD_TOKEN_HEADER, "fetching departments");
        let response = self
            .client
            .get(&self.url)
            .headers(headers)
            .send()
            .await
            .map_err(|e| DirectoryError::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| DirectoryError::Transport(e.to_string()))?;

        Ok(UpstreamResponse { status, body })
    }
}
