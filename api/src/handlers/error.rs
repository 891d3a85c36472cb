//! Mapping of domain failures to HTTP responses

use actix_web::{error::InternalError, error::JsonPayloadError, http::StatusCode, HttpRequest, HttpResponse};

use ga_core::errors::{messages, DomainError, ErrorKind};
use ga_shared::error_codes;

use crate::dto::{ErrorResponse, ErrorResponseExt};

/// HTTP status for an error kind
pub fn status_for(kind: ErrorKind) -> StatusCode {
    match kind {
        ErrorKind::InvalidInput => StatusCode::UNPROCESSABLE_ENTITY,
        ErrorKind::InvalidCredentials | ErrorKind::InvalidToken | ErrorKind::Unauthorized => {
            StatusCode::UNAUTHORIZED
        }
        ErrorKind::NotFound => StatusCode::NOT_FOUND,
        ErrorKind::Storage | ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn error_code(kind: ErrorKind) -> &'static str {
    match kind {
        ErrorKind::InvalidInput => error_codes::INVALID_INPUT,
        ErrorKind::InvalidCredentials => error_codes::INVALID_CREDENTIALS,
        ErrorKind::InvalidToken => error_codes::INVALID_TOKEN,
        ErrorKind::Unauthorized => error_codes::UNAUTHORIZED,
        ErrorKind::NotFound => error_codes::NOT_FOUND,
        ErrorKind::Storage => error_codes::STORAGE_ERROR,
        ErrorKind::Internal => error_codes::INTERNAL_ERROR,
    }
}

/// Handle domain errors and convert them to appropriate HTTP responses
///
/// Server-side failures are logged with their full operation chain and
/// answered with a generic message.
pub fn handle_domain_error(error: DomainError) -> HttpResponse {
    let kind = error.kind();
    let status = status_for(kind);

    let body = if kind.is_client_error() {
        tracing::info!(kind = %kind, op = error.op(), "request rejected: {}", error.message());
        let body = ErrorResponse::new(error_code(kind), error.message());
        match error.field() {
            Some(field) => body.with_field_error(field, error.message()),
            None => body,
        }
    } else {
        tracing::error!(
            kind = %kind,
            ops = ?error.op_chain(),
            error = ?error,
            "request failed"
        );
        ErrorResponse::new(error_code(kind), messages::SOMETHING_WENT_WRONG)
    };

    body.to_response(status)
}

/// Turns malformed JSON bodies into `400` responses with the shared error body
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    tracing::debug!(error = %err, "rejected request body");
    let response = ErrorResponse::new(error_codes::BAD_REQUEST, err.to_string())
        .to_response(StatusCode::BAD_REQUEST);
    InternalError::from_response(err, response).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;

    #[test]
    fn test_status_mapping() {
        assert_eq!(status_for(ErrorKind::InvalidInput), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(status_for(ErrorKind::InvalidCredentials), StatusCode::UNAUTHORIZED);
        assert_eq!(status_for(ErrorKind::InvalidToken), StatusCode::UNAUTHORIZED);
        assert_eq!(status_for(ErrorKind::Unauthorized), StatusCode::UNAUTHORIZED);
        assert_eq!(status_for(ErrorKind::NotFound), StatusCode::NOT_FOUND);
        assert_eq!(status_for(ErrorKind::Storage), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(status_for(ErrorKind::Internal), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[actix_web::test]
    async fn test_field_error_in_body() {
        let err = DomainError::invalid_input("test", "phone_number", messages::PHONE_NUMBER_NOT_VALID);
        let response = handle_domain_error(err);
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let bytes = to_bytes(response.into_body()).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"], error_codes::INVALID_INPUT);
        assert_eq!(body["message"], messages::PHONE_NUMBER_NOT_VALID);
        assert_eq!(body["errors"]["phone_number"], messages::PHONE_NUMBER_NOT_VALID);
    }

    #[actix_web::test]
    async fn test_internal_details_are_hidden() {
        let err = DomainError::storage("mysql::register", "connection refused to 10.0.0.3");
        let response = handle_domain_error(err);
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = to_bytes(response.into_body()).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"], error_codes::STORAGE_ERROR);
        assert_eq!(body["message"], messages::SOMETHING_WENT_WRONG);
    }
}
