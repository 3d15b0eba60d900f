//! Bearer token verification.
//!
//! Tokens are HS256 JWTs. The verified claims become an [`Identity`] whose
//! permission set holds only the permissions this service knows about.

use crate::shared::auth::policy::{Identity, Permission};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// User id.
    pub sub: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub role: String,
    #[serde(default, deserialize_with = "one_or_many")]
    pub permissions: Vec<String>,
    pub exp: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iss: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aud: Option<String>,
}

/// Issuers write a single-valued claim as a bare string.
fn one_or_many<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        One(String),
        Many(Vec<String>),
    }

    Ok(match OneOrMany::deserialize(deserializer)? {
        OneOrMany::One(permission) => vec![permission],
        OneOrMany::Many(permissions) => permissions,
    })
}

impl From<Claims> for Identity {
    fn from(claims: Claims) -> Self {
        let permissions = claims
            .permissions
            .iter()
            .filter_map(|raw| raw.parse::<Permission>().ok())
            .collect();
        Identity {
            user_id: claims.sub,
            username: claims.username,
            role: claims.role,
            permissions,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TokenError {
    #[error("missing bearer token")]
    Missing,

    #[error("token expired")]
    Expired,

    #[error("invalid token: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone)]
pub struct TokenSettings {
    pub secret: String,
    pub issuer: Option<String>,
    pub audience: Option<String>,
}

pub struct TokenVerifier {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenVerifier {
    pub fn new(settings: &TokenSettings) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_required_spec_claims(&["exp", "sub"]);
        if let Some(issuer) = &settings.issuer {
            validation.set_issuer(&[issuer]);
        }
        match &settings.audience {
            Some(audience) => validation.set_audience(&[audience]),
            None => validation.validate_aud = false,
        }

        Self {
            decoding_key: DecodingKey::from_secret(settings.secret.as_bytes()),
            validation,
        }
    }

    /// Extract the token from an `Authorization` header value.
    pub fn extract_bearer(header: &str) -> Option<&str> {
        let (scheme, token) = header.split_once(' ')?;
        let token = token.trim();
        (scheme.eq_ignore_ascii_case("bearer") && !token.is_empty()).then_some(token)
    }

    pub fn verify(&self, authorization: Option<&str>) -> Result<Identity, TokenError> {
        let token = authorization
            .and_then(Self::extract_bearer)
            .ok_or(TokenError::Missing)?;

        let data = decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
            match e.kind() {
                ErrorKind::ExpiredSignature => TokenError::Expired,
                _ => TokenError::Invalid(e.to_string()),
            }
        })?;

        Ok(Identity::from(data.claims))
    }
}
