use std::fmt;

use actix_web::{
    error::ResponseError,
    http::{header::ContentType, StatusCode},
    HttpResponse
};
use jsonwebtoken::errors::{ErrorKind, Error as JwtError};
use derive_more::Display;
use serde::Serialize;
use validator::ValidationErrors;

/// Body returned for every unexpected failure. Details only go to the logs.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

#[derive(Debug)]
pub enum AppError {
    ValidationError(Vec<FieldError>),
    NotFound(String),
    UnauthorizedAccess,
    InternalError(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::ValidationError(errors) => {
                let messages = errors.iter()
                    .map(|e| format!("{}:{}", e.field, e.message))
                    .collect::<Vec<_>>()
                    .join(", ");
                write!(f, "validation error: {}", messages)
            }
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppError::UnauthorizedAccess => write!(f, "Unauthorized access"),
            AppError::InternalError(msg) => write!(f, "Internal server error: {}", msg)
        }
    }
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        let body = match self {
            AppError::ValidationError(errors) => {
                serde_json::json!({
                    "error": "Validation failed",
                    "details": errors
                })
            }
            AppError::NotFound(msg) => {
                serde_json::json!({"error": msg})
            }
            AppError::UnauthorizedAccess => {
                serde_json::json!({"error": "Unauthorized access"})
            }
            AppError::InternalError(detail) => {
                tracing::error!(%detail, "Unexpected failure while handling request");
                serde_json::json!({"error": INTERNAL_ERROR_MESSAGE})
            }
        };
        HttpResponse::build(self.status_code())
            .insert_header(ContentType::json())
            .json(body)
    }

    fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::UnauthorizedAccess => StatusCode::UNAUTHORIZED,
            AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let mut field_errors: Vec<FieldError> = errors
            .field_errors()
            .iter()
            .flat_map(|(field, errors)| {
                errors.iter().map(|e| FieldError {
                    field: field.to_string(),
                    message: e
                        .message
                        .as_ref()
                        .map(|s| s.to_string())
                        .unwrap_or_else(|| "Invalid value".to_string()),
                })
            })
            .collect();
        field_errors.sort_by(|a, b| a.field.cmp(&b.field));

        AppError::ValidationError(field_errors)
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        AppError::InternalError(format!("Database error: {}", err))
    }
}

/// Why a session token was refused or could not be minted. Only logged;
/// clients see a plain 401.
#[derive(Debug, Display)]
pub enum AuthError {
    #[display("Invalid token")]
    InvalidToken,

    #[display("Token expired")]
    TokenExpired,

    #[display("Token creation error")]
    TokenCreation,

    #[display("Invalid token subject")]
    InvalidSubject,
}

impl From<JwtError> for AuthError {
    fn from(e: JwtError) -> Self {
        match e.kind() {
            ErrorKind::ExpiredSignature => AuthError::TokenExpired,
            _ => AuthError::InvalidToken,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;

    async fn body_json(response: HttpResponse) -> serde_json::Value {
        let bytes = to_bytes(response.into_body()).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[test]
    fn status_codes_follow_the_error_taxonomy() {
        assert_eq!(AppError::ValidationError(vec![]).status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(AppError::NotFound("x".into()).status_code(), StatusCode::NOT_FOUND);
        assert_eq!(AppError::UnauthorizedAccess.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(AppError::InternalError("x".into()).status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[actix_rt::test]
    async fn internal_errors_hide_their_detail() {
        let error = AppError::InternalError("connection refused at 10.0.0.7:5432".into());

        let body = body_json(error.error_response()).await;

        assert_eq!(body, serde_json::json!({"error": INTERNAL_ERROR_MESSAGE}));
    }

    #[actix_rt::test]
    async fn validation_errors_list_fields() {
        let error = AppError::ValidationError(vec![FieldError {
            field: "company".into(),
            message: "Company cannot be empty".into(),
        }]);

        let body = body_json(error.error_response()).await;

        assert_eq!(body["error"], "Validation failed");
        assert_eq!(body["details"][0]["field"], "company");
    }

    #[test]
    fn sqlx_errors_become_internal_errors() {
        let error = AppError::from(sqlx::Error::PoolTimedOut);
        assert!(matches!(error, AppError::InternalError(_)));
    }

    #[test]
    fn expired_jwt_maps_to_token_expired() {
        let error = AuthError::from(JwtError::from(ErrorKind::ExpiredSignature));
        assert!(matches!(error, AuthError::TokenExpired));
        assert_eq!(error.to_string(), "Token expired");

        let error = AuthError::from(JwtError::from(ErrorKind::InvalidSignature));
        assert!(matches!(error, AuthError::InvalidToken));
    }
}
