//! Policy-checking extractor.
//!
//! Put `Authorized<P>` first in a handler's argument list. It verifies the
//! bearer token and evaluates policy `P` before the body is read, so a
//! rejected request never reaches handler logic.

use crate::shared::auth::policy::{AuthorizationError, Identity, Policy, authorize};
use crate::shell::error::ApiError;
use crate::shell::state::AppState;
use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use std::marker::PhantomData;

pub trait RequiredPolicy {
    const POLICY: Policy;
}

macro_rules! policy_marker {
    ($name:ident) => {
        pub struct $name;

        impl RequiredPolicy for $name {
            const POLICY: Policy = Policy::$name;
        }
    };
}

policy_marker!(CanReadEmployees);
policy_marker!(CanCreateEmployees);
policy_marker!(CanUpdateEmployees);
policy_marker!(CanDeleteEmployees);

pub struct Authorized<P>(pub Identity, PhantomData<P>);

impl<P> FromRequestParts<AppState> for Authorized<P>
where
    P: RequiredPolicy + Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok());

        let identity = state.tokens.verify(header).map_err(|e| {
            tracing::warn!(error = %e, uri = %parts.uri, "authentication failed");
            AuthorizationError::Unauthenticated
        })?;

        authorize(Some(&identity), P::POLICY).map_err(|e| {
            tracing::warn!(
                user_id = %identity.user_id,
                username = %identity.username,
                policy = P::POLICY.name(),
                uri = %parts.uri,
                "permission denied"
            );
            e
        })?;

        Ok(Self(identity, PhantomData))
    }
}
