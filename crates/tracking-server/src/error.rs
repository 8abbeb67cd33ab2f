use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::Json;
use axum::extract::multipart::MultipartRejection;
use axum::extract::rejection::{FormRejection, JsonRejection};
use domain::DomainError;
use serde_json::json;
use tracing::error;

/// Request-level failure rendered as `{"detail": "..."}`.
#[derive(Debug)]
pub enum ApiError {
    Domain(DomainError),
    /// 401 with a caller-chosen detail message
    Unauthorized(&'static str),
    /// Malformed or missing request fields
    Validation(String),
}

impl From<DomainError> for ApiError {
    fn from(e: DomainError) -> Self {
        Self::Domain(e)
    }
}

impl From<FormRejection> for ApiError {
    fn from(e: FormRejection) -> Self {
        Self::Validation(e.body_text())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(e: JsonRejection) -> Self {
        Self::Validation(e.body_text())
    }
}

impl From<MultipartRejection> for ApiError {
    fn from(e: MultipartRejection) -> Self {
        Self::Validation(e.body_text())
    }
}

impl ApiError {
    fn status_and_detail(&self) -> (StatusCode, String) {
        match self {
            Self::Unauthorized(detail) => (StatusCode::UNAUTHORIZED, detail.to_string()),
            Self::Validation(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg.clone()),
            Self::Domain(e) => match e {
                DomainError::Unauthorized => (
                    StatusCode::UNAUTHORIZED,
                    "Invalid authentication".to_string(),
                ),
                DomainError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
                DomainError::Conflict(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
                DomainError::Validation(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg.clone()),
                DomainError::Database(_)
                | DomainError::Storage(_)
                | DomainError::Token(_)
                | DomainError::Hashing(_) => {
                    error!("Request failed: {}", e);
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "Internal server error".to_string(),
                    )
                }
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = self.status_and_detail();
        let body = Json(json!({ "detail": detail }));

        if status == StatusCode::UNAUTHORIZED {
            (status, [(header::WWW_AUTHENTICATE, "Bearer")], body).into_response()
        } else {
            (status, body).into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let cases = [
            (ApiError::from(DomainError::Unauthorized), StatusCode::UNAUTHORIZED),
            (
                ApiError::from(DomainError::Conflict("Agent exists".into())),
                StatusCode::BAD_REQUEST,
            ),
            (
                ApiError::from(DomainError::NotFound("Package 1".into())),
                StatusCode::NOT_FOUND,
            ),
            (
                ApiError::Validation("package_id: field required".into()),
                StatusCode::UNPROCESSABLE_ENTITY,
            ),
            (
                ApiError::from(DomainError::Database("boom".into())),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (err, expected) in cases {
            assert_eq!(err.into_response().status(), expected);
        }
    }

    #[test]
    fn test_internal_detail_is_not_leaked() {
        let err = ApiError::from(DomainError::Database("password=hunter2".into()));
        let (_, detail) = err.status_and_detail();
        assert_eq!(detail, "Internal server error");
    }

    #[test]
    fn test_unauthorized_sets_challenge_header() {
        let resp = ApiError::Unauthorized("Incorrect credentials").into_response();
        assert_eq!(
            resp.headers().get(header::WWW_AUTHENTICATE).unwrap(),
            "Bearer"
        );
    }
}
