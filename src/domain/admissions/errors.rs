use thiserror::Error;

use crate::domain::account::errors::{AccountError, RepositoryError};

#[derive(Debug, Error)]
pub enum AdmissionsError {
  #[error("Application not found")]
  ApplicationNotFound,

  #[error("Referenced {field} does not exist")]
  UnknownReference { field: &'static str },

  #[error("A {0} with this name already exists")]
  DuplicateName(String),

  #[error("Repository error: {0}")]
  Repository(#[from] RepositoryError),

  #[error("Validation error: {0}")]
  Validation(#[from] ValidationError),

  #[error("Account error: {0}")]
  Account(#[from] AccountError),
}

#[derive(Debug, Error)]
pub enum ValidationError {
  #[error("Status must be between 1 and {max} characters")]
  InvalidStatus { max: usize },

  #[error("Name must be between 1 and {max} characters")]
  InvalidCatalogName { max: usize },
}

impl From<sqlx::Error> for AdmissionsError {
  fn from(error: sqlx::Error) -> Self {
    AdmissionsError::Repository(RepositoryError::from(error))
  }
}
