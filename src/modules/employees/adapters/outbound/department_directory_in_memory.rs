// Canned DepartmentDirectory for tests and local development.
//
// Replays one fixed upstream answer (or transport failure) and records every
// token it was called with.

use crate::modules::employees::adapters::outbound::department_directory::{
    DepartmentDirectory, DirectoryError, HardToken, UpstreamResponse,
};
use crate::modules::employees::core::department::Department;
use tokio::sync::Mutex;

pub struct InMemoryDepartmentDirectory {
    answer: Result<UpstreamResponse, String>,
    received: Mutex<Vec<HardToken>>,
}

impl InMemoryDepartmentDirectory {
    pub fn with_departments(departments: &[Department]) -> Self {
        let body = serde_json::to_string(departments).unwrap_or_else(|_| "[]".to_string());
        Self::with_response(200, body)
    }

    pub fn with_response(status: u16, body: impl Into<String>) -> Self {
        Self {
            answer: Ok(UpstreamResponse {
                status,
                body: body.into(),
            }),
            received: Mutex::new(Vec::new()),
        }
    }

    pub fn unreachable(reason: impl Into<String>) -> Self {
        Self {
            answer: Err(reason.into()),
            received: Mutex::new(Vec::new()),
        }
    }

    pub async fn call_count(&self) -> usize {
        self.received.lock().await.len()
    }

    pub async fn received_tokens(&self) -> Vec<HardToken> {
        self.received.lock().await.clone()
    }
}

#[async_trait::async_trait]
impl DepartmentDirectory for InMemoryDepartmentDirectory {
    async fn fetch_all(&self, token: &HardToken) -> Result<UpstreamResponse, DirectoryError> {
        self.received.lock().await.push(token.clone());
        self.answer.clone().map_err(DirectoryError::Transport)
    }
}
