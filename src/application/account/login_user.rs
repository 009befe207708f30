use chrono::{DateTime, Utc};
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::account::errors::AccountError;
use crate::domain::account::services::AccountService;
use crate::domain::account::value_objects::{Email, Password};

/// Command for logging in a user
#[derive(Debug, Clone)]
pub struct LoginUserCommand {
  pub email: String,
  pub password: String,
}

/// Response after successful login
#[derive(Debug, Clone)]
pub struct LoginUserResponse {
  pub user_id: Uuid,
  /// Signed bearer token
  pub token: String,
  pub expires_at: DateTime<Utc>,
}

/// Use case for logging in a user
pub struct LoginUserUseCase {
  account_service: Arc<AccountService>,
}

impl LoginUserUseCase {
  pub fn new(account_service: Arc<AccountService>) -> Self {
    Self { account_service }
  }

  /// Executes the login use case
  ///
  /// # Errors
  /// Returns `AccountError::InvalidCredentials` for a malformed email, an
  /// unknown email or a wrong password alike.
  pub async fn execute(&self, command: LoginUserCommand) -> Result<LoginUserResponse, AccountError> {
    let email = Email::new(command.email).map_err(|_| AccountError::InvalidCredentials)?;

    // Length rules apply at registration only
    let password = Password::unchecked(command.password);

    let (user, token) = self.account_service.login(email, password).await?;

    tracing::info!(user_id = %user.id, "User logged in");

    Ok(LoginUserResponse {
      user_id: user.id,
      token: token.token,
      expires_at: token.expires_at,
    })
  }
}
