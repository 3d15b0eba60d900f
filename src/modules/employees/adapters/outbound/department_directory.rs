use async_trait::async_trait;
use std::fmt;
use thiserror::Error;

/// Header carrying the shared secret to the Department service.
pub const HARD_TOKEN_HEADER: &str = "Hard-Token";

/// Shared secret forwarded to the Department service. Never empty.
#[derive(Clone, PartialEq, Eq)]
pub struct HardToken(String);

impl HardToken {
    /// Returns `None` for a missing or blank value.
    pub fn parse(raw: Option<&str>) -> Option<Self> {
        raw.filter(|value| !value.trim().is_empty())
            .map(|value| Self(value.to_string()))
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for HardToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("HardToken(***)")
    }
}

/// Raw upstream answer. Status and body are kept untouched so failures can be
/// passed through verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamResponse {
    pub status: u16,
    pub body: String,
}

impl UpstreamResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[derive(Debug, Error)]
pub enum DirectoryError {
    #[error("invalid {HARD_TOKEN_HEADER} header value")]
    InvalidHeader,

    #[error("department service unreachable: {0}")]
    Transport(String),
}

/// Outbound port to the external Department service.
#[async_trait]
pub trait DepartmentDirectory: Send + Sync {
    /// Issue one request for all departments. Headers are built per call from
    /// `token` alone.
    async fn fetch_all(&self, token: &HardToken) -> Result<UpstreamResponse, DirectoryError>;
}
