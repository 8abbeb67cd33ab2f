use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use domain::Agent;
use std::sync::Arc;

use crate::error::ApiError;
use crate::state::AppState;

/// The agent owning the bearer token of the current request.
///
/// Rejects with 401 when the header is missing, the token does not verify,
/// or its subject no longer exists.
pub struct CurrentAgent(pub Agent);

impl FromRequestParts<Arc<AppState>> for CurrentAgent {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .and_then(bearer_token)
            .ok_or(ApiError::Unauthorized("Not authenticated"))?;

        let agent = state.auth.authenticate(token).await?;
        Ok(CurrentAgent(agent))
    }
}

fn bearer_token(header: &str) -> Option<&str> {
    let (scheme, token) = header.split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }
    let token = token.trim();
    (!token.is_empty()).then_some(token)
}
