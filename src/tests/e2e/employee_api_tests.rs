use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::response::Response;
use http_body_util::BodyExt;
use std::sync::Arc;
use tower::ServiceExt;

use crate::modules::employees::adapters::outbound::department_directory_in_memory::InMemoryDepartmentDirectory;
use crate::modules::employees::adapters::outbound::employee_store_in_memory::InMemoryEmployeeStore;
use crate::modules::employees::core::department::Department;
use crate::shell::http::router;
use crate::tests::fixtures::app::make_test_state;
use crate::tests::fixtures::tokens::bearer;

const ALL: &[&str] = &[
    "Employee.Read",
    "Employee.Create",
    "Employee.Update",
    "Employee.Delete",
];

async fn json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn creates_reads_and_enriches_employees_through_the_router() {
    let store = Arc::new(InMemoryEmployeeStore::new());
    let directory = Arc::new(InMemoryDepartmentDirectory::with_departments(&[
        Department {
            dept_id: 10,
            dept_name: "Sales".into(),
        },
    ]));
    let app = router(make_test_state(store, directory.clone()));

    for body in [
        r#"{"Empid":1,"Ename":"A","Dept_ID":10}"#,
        r#"{"Empid":2,"Ename":"B","Dept_ID":20}"#,
    ] {
        let created = app
            .clone()
            .oneshot(
                Request::post("/api/employee")
                    .header("authorization", bearer(ALL))
                    .header("content-type", "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(created.status(), StatusCode::OK);
    }

    let fetched = app
        .clone()
        .oneshot(
            Request::get("/api/employee/2")
                .header("authorization", bearer(ALL))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(fetched.status(), StatusCode::OK);
    assert_eq!(
        json(fetched).await,
        serde_json::json!({"Empid": 2, "Ename": "B", "Dept_ID": 20})
    );

    let enriched = app
        .oneshot(
            Request::get("/api/employee/with-dept-simple")
                .header("authorization", bearer(ALL))
                .header("Hard-Token", "s3cret")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(enriched.status(), StatusCode::OK);
    assert!(enriched.headers().contains_key("x-request-id"));
    assert_eq!(
        json(enriched).await,
        serde_json::json!([{"EmpId": 1, "Ename": "A", "DeptId": 10, "DeptName": "Sales"}])
    );
    assert_eq!(directory.received_tokens().await[0].expose(), "s3cret");
}

#[tokio::test]
async fn rejects_every_protected_route_without_a_token() {
    let app = router(make_test_state(
        Arc::new(InMemoryEmployeeStore::new()),
        Arc::new(InMemoryDepartmentDirectory::with_departments(&[])),
    ));

    let requests = [
        Request::get("/api/employee").body(Body::empty()).unwrap(),
        Request::get("/api/employee/1").body(Body::empty()).unwrap(),
        Request::get("/api/employee/with-dept-simple")
            .body(Body::empty())
            .unwrap(),
        Request::post("/api/employee")
            .header("content-type", "application/json")
            .body(Body::from(r#"{"Empid":1,"Ename":"A","Dept_ID":10}"#))
            .unwrap(),
        Request::put("/api/employee/1")
            .header("content-type", "application/json")
            .body(Body::from(r#"{"Empid":1,"Ename":"A","Dept_ID":10}"#))
            .unwrap(),
        Request::delete("/api/employee/1").body(Body::empty()).unwrap(),
    ];

    for request in requests {
        let response = app.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}

#[tokio::test]
async fn enforces_one_permission_per_route() {
    let store = Arc::new(InMemoryEmployeeStore::new());
    let app = router(make_test_state(
        store.clone(),
        Arc::new(InMemoryDepartmentDirectory::with_departments(&[])),
    ));

    let cases = [
        ("PUT", "Employee.Delete"),
        ("DELETE", "Employee.Update"),
        ("POST", "Employee.Read"),
    ];

    for (method, granted) in cases {
        let uri = if method == "POST" {
            "/api/employee"
        } else {
            "/api/employee/1"
        };
        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method(method)
                    .uri(uri)
                    .header("authorization", bearer(&[granted]))
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"Empid":1,"Ename":"A","Dept_ID":10}"#))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::FORBIDDEN, "{method}");
    }
    assert_eq!(store.mutation_count(), 0);
}

#[tokio::test]
async fn serves_health_without_authentication() {
    let app = router(make_test_state(
        Arc::new(InMemoryEmployeeStore::new()),
        Arc::new(InMemoryDepartmentDirectory::with_departments(&[])),
    ));

    let response = app
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}
