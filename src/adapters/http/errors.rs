use actix_web::{
  HttpResponse,
  error::ResponseError,
  http::{StatusCode, header::ContentType},
};
use std::fmt;

use crate::domain::account::errors::AccountError;
use crate::domain::admissions::errors::AdmissionsError;

use super::dtos::ErrorResponse;

/// API error type that maps domain errors to HTTP responses
#[derive(Debug)]
pub enum ApiError {
  /// Validation error (400 Bad Request)
  Validation(String),

  /// Authentication error (401 Unauthorized)
  Auth(AuthErrorKind),

  /// Authenticated but not allowed (403 Forbidden)
  Forbidden,

  /// Missing resource (404 Not Found)
  NotFound(String),

  /// Path exists but not for this method (405 Method Not Allowed)
  MethodNotAllowed,

  /// Uniqueness conflict (409 Conflict)
  Conflict(String),

  /// Internal server error (500 Internal Server Error)
  Internal(String),
}

/// Authentication error kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthErrorKind {
  /// Unknown email or wrong password
  InvalidCredentials,

  /// Missing, malformed, expired or revoked bearer token
  InvalidToken,
}

impl fmt::Display for ApiError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      ApiError::Validation(msg) => write!(f, "Validation error: {}", msg),
      ApiError::Auth(kind) => write!(f, "Authentication error: {:?}", kind),
      ApiError::Forbidden => write!(f, "Forbidden"),
      ApiError::NotFound(msg) => write!(f, "Not found: {}", msg),
      ApiError::MethodNotAllowed => write!(f, "Method not allowed"),
      ApiError::Conflict(msg) => write!(f, "Conflict: {}", msg),
      ApiError::Internal(msg) => write!(f, "Internal error: {}", msg),
    }
  }
}

impl ResponseError for ApiError {
  fn status_code(&self) -> StatusCode {
    match self {
      ApiError::Validation(_) => StatusCode::BAD_REQUEST,
      ApiError::Auth(_) => StatusCode::UNAUTHORIZED,
      ApiError::Forbidden => StatusCode::FORBIDDEN,
      ApiError::NotFound(_) => StatusCode::NOT_FOUND,
      ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
      ApiError::Conflict(_) => StatusCode::CONFLICT,
      ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
  }

  fn error_response(&self) -> HttpResponse {
    let status = self.status_code();
    let (error_type, message) = match self {
      ApiError::Validation(msg) => ("validation_error", msg.clone()),
      ApiError::Auth(AuthErrorKind::InvalidCredentials) => (
        "invalid_credentials",
        "Invalid email or password".to_string(),
      ),
      ApiError::Auth(AuthErrorKind::InvalidToken) => (
        "invalid_token",
        "Invalid or missing authorization token".to_string(),
      ),
      ApiError::Forbidden => (
        "forbidden",
        "You are not allowed to perform this action".to_string(),
      ),
      ApiError::NotFound(msg) => ("not_found", msg.clone()),
      ApiError::MethodNotAllowed => (
        "method_not_allowed",
        "Method not allowed on this resource".to_string(),
      ),
      ApiError::Conflict(msg) => ("conflict", msg.clone()),
      ApiError::Internal(msg) => {
        // Don't expose internal error details
        tracing::error!("Internal error: {}", msg);
        (
          "internal_error",
          "An internal server error occurred".to_string(),
        )
      }
    };

    let error_response = ErrorResponse {
      error: error_type.to_string(),
      message,
      details: None,
    };

    HttpResponse::build(status)
      .content_type(ContentType::json())
      .json(error_response)
  }
}

/// Convert AccountError to ApiError
impl From<AccountError> for ApiError {
  fn from(error: AccountError) -> Self {
    match error {
      AccountError::InvalidCredentials => ApiError::Auth(AuthErrorKind::InvalidCredentials),
      AccountError::InvalidToken => ApiError::Auth(AuthErrorKind::InvalidToken),
      AccountError::EmailAlreadyExists => {
        ApiError::Conflict("An account with this email already exists".to_string())
      }
      AccountError::UserNotFound => ApiError::NotFound("User not found".to_string()),
      AccountError::Forbidden => ApiError::Forbidden,
      AccountError::UnknownReference { .. } => ApiError::Validation(error.to_string()),
      AccountError::Validation(err) => ApiError::Validation(err.to_string()),
      AccountError::Repository(err) => ApiError::Internal(err.to_string()),
      AccountError::Hash(err) => ApiError::Internal(err.to_string()),
      AccountError::Token(err) => ApiError::Internal(err.to_string()),
    }
  }
}

/// Convert AdmissionsError to ApiError
impl From<AdmissionsError> for ApiError {
  fn from(error: AdmissionsError) -> Self {
    match error {
      AdmissionsError::ApplicationNotFound => {
        ApiError::NotFound("Application not found".to_string())
      }
      AdmissionsError::UnknownReference { .. } => ApiError::Validation(error.to_string()),
      AdmissionsError::DuplicateName(_) => ApiError::Conflict(error.to_string()),
      AdmissionsError::Validation(err) => ApiError::Validation(err.to_string()),
      AdmissionsError::Repository(err) => ApiError::Internal(err.to_string()),
      AdmissionsError::Account(err) => ApiError::from(err),
    }
  }
}

/// Convert validation errors from validator crate
impl From<validator::ValidationErrors> for ApiError {
  fn from(errors: validator::ValidationErrors) -> Self {
    let mut messages: Vec<String> = errors
      .field_errors()
      .iter()
      .flat_map(|(field, errors)| {
        errors
          .iter()
          .map(|error| {
            error
              .message
              .as_ref()
              .map(|m| m.to_string())
              .unwrap_or_else(|| format!("Invalid field: {}", field))
          })
          .collect::<Vec<_>>()
      })
      .collect();
    messages.sort();

    ApiError::Validation(messages.join(", "))
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::domain::account::errors::RepositoryError;
  use crate::domain::admissions::errors::ValidationError;

  #[test]
  fn test_api_error_status_codes() {
    assert_eq!(
      ApiError::Validation("test".to_string()).status_code(),
      StatusCode::BAD_REQUEST
    );
    assert_eq!(
      ApiError::Auth(AuthErrorKind::InvalidCredentials).status_code(),
      StatusCode::UNAUTHORIZED
    );
    assert_eq!(ApiError::Forbidden.status_code(), StatusCode::FORBIDDEN);
    assert_eq!(
      ApiError::MethodNotAllowed.status_code(),
      StatusCode::METHOD_NOT_ALLOWED
    );
    assert_eq!(
      ApiError::Conflict("taken".to_string()).status_code(),
      StatusCode::CONFLICT
    );
    assert_eq!(
      ApiError::Internal("test".to_string()).status_code(),
      StatusCode::INTERNAL_SERVER_ERROR
    );
  }

  #[test]
  fn test_account_error_conversion() {
    let api_error: ApiError = AccountError::InvalidCredentials.into();
    assert_eq!(api_error.status_code(), StatusCode::UNAUTHORIZED);

    let api_error: ApiError = AccountError::EmailAlreadyExists.into();
    assert_eq!(api_error.status_code(), StatusCode::CONFLICT);

    let api_error: ApiError = AccountError::UserNotFound.into();
    assert_eq!(api_error.status_code(), StatusCode::NOT_FOUND);

    let api_error: ApiError = AccountError::Repository(RepositoryError::NotFound).into();
    assert_eq!(api_error.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
  }

  #[test]
  fn test_admissions_error_conversion() {
    let api_error: ApiError = AdmissionsError::Account(AccountError::Forbidden).into();
    assert_eq!(api_error.status_code(), StatusCode::FORBIDDEN);

    let api_error: ApiError = AdmissionsError::UnknownReference { field: "school_id" }.into();
    assert_eq!(api_error.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(
      api_error.to_string(),
      "Validation error: Referenced school_id does not exist"
    );

    let api_error: ApiError =
      AdmissionsError::Validation(ValidationError::InvalidStatus { max: 50 }).into();
    assert_eq!(api_error.status_code(), StatusCode::BAD_REQUEST);
  }
}
