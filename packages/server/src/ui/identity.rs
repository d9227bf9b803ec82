//! Caller identity extraction.
//!
//! Token verification happens upstream. By the time a request reaches this
//! server the verified user id is carried in the [`CALLER_ID_HEADER`] header.

use axum::{
    extract::FromRequestParts,
    http::request::Parts,
    response::{IntoResponse, Response},
};

use crate::domain::{BusinessError, ErrorCode, UserId};

use super::handler::response::business_failure;

/// Header carrying the verified caller id
pub const CALLER_ID_HEADER: &str = "x-user-id";

/// The authenticated user id of the current request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallerIdentity(pub UserId);

/// Rejection returned when no valid caller id accompanies the request
#[derive(Debug)]
pub struct IdentityRejection(BusinessError);

impl IntoResponse for IdentityRejection {
    fn into_response(self) -> Response {
        tracing::debug!("Rejected request without caller identity: {}", self.0);
        business_failure(&self.0)
    }
}

fn unauthenticated(detail: impl Into<String>) -> IdentityRejection {
    IdentityRejection(BusinessError::new(ErrorCode::Unauthenticated, detail))
}

impl<S> FromRequestParts<S> for CallerIdentity
where
    S: Send + Sync,
{
    type Rejection = IdentityRejection;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(CALLER_ID_HEADER)
            .ok_or_else(|| unauthenticated(format!("missing {CALLER_ID_HEADER} header")))?;

        let raw = header
            .to_str()
            .map_err(|_| unauthenticated(format!("{CALLER_ID_HEADER} header is not valid text")))?;

        let value = raw.trim().parse::<i64>().map_err(|_| {
            unauthenticated(format!("{CALLER_ID_HEADER} header is not an integer: '{raw}'"))
        })?;

        let user_id = UserId::try_from(value).map_err(|e| unauthenticated(e.to_string()))?;

        Ok(Self(user_id))
    }
}
