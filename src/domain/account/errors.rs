use thiserror::Error;

use super::value_objects::ValueObjectError;

/// Main account error type
#[derive(Debug, Error)]
pub enum AccountError {
  #[error("Invalid credentials provided")]
  InvalidCredentials,

  #[error("Invalid or expired token")]
  InvalidToken,

  #[error("Email already exists")]
  EmailAlreadyExists,

  #[error("User not found")]
  UserNotFound,

  #[error("You are not allowed to perform this action")]
  Forbidden,

  #[error("Referenced {field} does not exist")]
  UnknownReference { field: &'static str },

  #[error("Repository error: {0}")]
  Repository(#[from] RepositoryError),

  #[error("Hash error: {0}")]
  Hash(#[from] HashError),

  #[error("Token error: {0}")]
  Token(#[from] TokenError),

  #[error("Validation error: {0}")]
  Validation(#[from] ValueObjectError),
}

/// Repository-related errors
#[derive(Debug, Error)]
pub enum RepositoryError {
  #[error("Database connection failed: {0}")]
  ConnectionFailed(String),

  #[error("Query execution failed: {0}")]
  QueryFailed(String),

  #[error("Record not found")]
  NotFound,

  #[error("Duplicate key violation: {0}")]
  DuplicateKey(String),

  #[error("Foreign key violation: {0}")]
  ForeignKey(String),

  #[error("Database error: {0}")]
  DatabaseError(String),
}

/// Password hashing and verification errors
#[derive(Debug, Error)]
pub enum HashError {
  #[error("Failed to hash password: {0}")]
  HashingFailed(String),

  #[error("Failed to verify password: {0}")]
  VerificationFailed(String),
}

/// Token signing errors. Rejected tokens surface as `AccountError::InvalidToken`.
#[derive(Debug, Error)]
pub enum TokenError {
  #[error("Failed to sign token: {0}")]
  SigningFailed(String),
}

// Automatic conversions from external error types

impl From<sqlx::Error> for RepositoryError {
  fn from(error: sqlx::Error) -> Self {
    match error {
      sqlx::Error::RowNotFound => RepositoryError::NotFound,
      sqlx::Error::Database(db_err) => {
        if db_err.is_unique_violation() {
          RepositoryError::DuplicateKey(db_err.message().to_string())
        } else if db_err.is_foreign_key_violation() {
          RepositoryError::ForeignKey(db_err.message().to_string())
        } else {
          RepositoryError::DatabaseError(db_err.message().to_string())
        }
      }
      sqlx::Error::PoolTimedOut => RepositoryError::ConnectionFailed("Pool timed out".to_string()),
      sqlx::Error::PoolClosed => RepositoryError::ConnectionFailed("Pool closed".to_string()),
      _ => RepositoryError::QueryFailed(error.to_string()),
    }
  }
}

impl From<sqlx::Error> for AccountError {
  fn from(error: sqlx::Error) -> Self {
    AccountError::Repository(RepositoryError::from(error))
  }
}
