use crate::shared::auth::identity::Claims;
use chrono::{Duration, Utc};
use jsonwebtoken::{EncodingKey, Header, encode};

pub const TEST_SECRET: &str = "test-secret-test-secret-test-sec";

pub struct ClaimsBuilder {
    inner: Claims,
}

impl Default for ClaimsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl ClaimsBuilder {
    pub fn new() -> Self {
        Self {
            inner: Claims {
                sub: "user-0001".to_string(),
                username: "alice".to_string(),
                role: "hr".to_string(),
                permissions: Vec::new(),
                exp: (Utc::now() + Duration::minutes(30)).timestamp(),
                iss: None,
                aud: None,
            },
        }
    }

    pub fn permissions(mut self, v: &[&str]) -> Self {
        self.inner.permissions = v.iter().map(|p| p.to_string()).collect();
        self
    }

    pub fn expired(mut self) -> Self {
        self.inner.exp = (Utc::now() - Duration::hours(1)).timestamp();
        self
    }

    pub fn issuer(mut self, v: impl Into<String>) -> Self {
        self.inner.iss = Some(v.into());
        self
    }

    pub fn audience(mut self, v: impl Into<String>) -> Self {
        self.inner.aud = Some(v.into());
        self
    }

    pub fn build(self) -> Claims {
        self.inner
    }
}

pub fn sign(claims: &Claims, secret: &str) -> String {
    encode(
        &Header::default(),
        claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .unwrap()
}

/// `Authorization` header value for a caller holding `permissions`.
pub fn bearer(permissions: &[&str]) -> String {
    let token = sign(
        &ClaimsBuilder::new().permissions(permissions).build(),
        TEST_SECRET,
    );
    format!("Bearer {token}")
}
