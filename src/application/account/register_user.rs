use std::sync::Arc;

use crate::domain::account::entities::User;
use crate::domain::account::errors::AccountError;
use crate::domain::account::services::AccountService;
use crate::domain::account::value_objects::{Email, Password, PersonName};

/// Command for registering a new user
#[derive(Debug, Clone)]
pub struct RegisterUserCommand {
  pub first_name: String,
  pub last_name: String,
  /// User's email address
  pub email: String,
  /// User's password (plain text, will be hashed)
  pub password: String,
}

/// Use case for registering a new user
pub struct RegisterUserUseCase {
  account_service: Arc<AccountService>,
}

impl RegisterUserUseCase {
  /// Creates a new instance of RegisterUserUseCase
  pub fn new(account_service: Arc<AccountService>) -> Self {
    Self { account_service }
  }

  /// Executes the user registration use case
  ///
  /// # Errors
  /// Returns `AccountError` if registration fails (e.g., email already exists, validation errors)
  pub async fn execute(&self, command: RegisterUserCommand) -> Result<User, AccountError> {
    let first_name = PersonName::new("first_name", command.first_name)?;
    let last_name = PersonName::new("last_name", command.last_name)?;
    let email = Email::new(command.email)?;
    let password = Password::new(command.password)?;

    let user = self
      .account_service
      .register(first_name, last_name, email, password)
      .await?;

    tracing::info!(user_id = %user.id, "User registered");

    Ok(user)
  }
}
