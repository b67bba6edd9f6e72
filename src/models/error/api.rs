use actix_web::{http::header::ContentType, http::StatusCode, HttpResponse, ResponseError};
use log::error;
use thiserror::Error;

use super::TransactionBuildError;

/// Errors surfaced by the action endpoints. Every variant renders as a
/// plain-text body.
#[derive(Error, Debug)]
pub enum ActionError {
    #[error("Invalid account: {0}")]
    InvalidAccount(String),

    #[error("Invalid request body: {0}")]
    InvalidRequestBody(String),

    #[error("Invalid parameters: {0}")]
    InvalidParameters(String),

    #[error("Not Found: {0}")]
    NotFound(String),

    #[error("Internal Server Error: {0}")]
    NetworkError(String),

    #[error("Internal Server Error: {0}")]
    InstructionConstructionError(String),

    #[error("Internal Server Error: {0}")]
    InternalError(String),
}

impl From<TransactionBuildError> for ActionError {
    fn from(error: TransactionBuildError) -> Self {
        match error {
            TransactionBuildError::InvalidAccount(msg) => ActionError::InvalidAccount(msg),
            TransactionBuildError::InvalidParameters(msg) => ActionError::InvalidParameters(msg),
            TransactionBuildError::Network(e) => ActionError::NetworkError(e.to_string()),
            e @ TransactionBuildError::InstructionConstruction { .. } => {
                ActionError::InstructionConstructionError(e.to_string())
            }
            e @ (TransactionBuildError::Signing(_) | TransactionBuildError::Serialization(_)) => {
                ActionError::InternalError(e.to_string())
            }
        }
    }
}

impl ResponseError for ActionError {
    fn status_code(&self) -> StatusCode {
        match self {
            ActionError::InvalidAccount(_)
            | ActionError::InvalidRequestBody(_)
            | ActionError::InvalidParameters(_) => StatusCode::BAD_REQUEST,
            ActionError::NotFound(_) => StatusCode::NOT_FOUND,
            ActionError::NetworkError(_)
            | ActionError::InstructionConstructionError(_)
            | ActionError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        error!("Action request failed ({}): {}", self.status_code(), self);
        HttpResponse::build(self.status_code())
            .content_type(ContentType::plaintext())
            .body(self.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::SolanaProviderError;
    use actix_web::body::to_bytes;

    async fn body_of(error: ActionError) -> (StatusCode, String) {
        let response = error.error_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body()).await.unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[actix_rt::test]
    async fn test_client_errors_are_bad_request() {
        let (status, body) = body_of(ActionError::InvalidAccount("bad".to_string())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, "Invalid account: bad");

        let (status, _) = body_of(ActionError::InvalidRequestBody("eof".to_string())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) = body_of(ActionError::InvalidParameters("x".to_string())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[actix_rt::test]
    async fn test_not_found() {
        let (status, body) = body_of(ActionError::NotFound("burn".to_string())).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, "Not Found: burn");
    }

    #[actix_rt::test]
    async fn test_network_error_embeds_detail() {
        let build_error = TransactionBuildError::Network(SolanaProviderError::NetworkError(
            "connection refused".to_string(),
        ));

        let (status, body) = body_of(ActionError::from(build_error)).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body.contains("connection refused"));
    }

    #[actix_rt::test]
    async fn test_instruction_error_names_step() {
        let build_error = TransactionBuildError::InstructionConstruction {
            step: "CreateTokenPool".to_string(),
            reason: "boom".to_string(),
        };

        let (status, body) = body_of(ActionError::from(build_error)).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body.contains("CreateTokenPool"));
        assert!(body.contains("boom"));
    }

    #[test]
    fn test_build_error_mapping() {
        assert!(matches!(
            ActionError::from(TransactionBuildError::InvalidAccount("x".to_string())),
            ActionError::InvalidAccount(_)
        ));
        assert!(matches!(
            ActionError::from(TransactionBuildError::Signing("x".to_string())),
            ActionError::InternalError(_)
        ));
    }
}
