use std::sync::Arc;

use crate::domain::account::entities::User;
use crate::domain::account::errors::AccountError;
use crate::domain::account::services::AccountService;
use crate::domain::account::value_objects::{Email, Password, PersonName};

/// Bootstrap admin account details, usually taken from configuration
#[derive(Clone)]
pub struct EnsureAdminCommand {
  pub first_name: String,
  pub last_name: String,
  pub email: String,
  pub password: String,
}

/// Creates the configured admin account at startup if its email is free
pub struct EnsureAdminUseCase {
  account_service: Arc<AccountService>,
}

impl EnsureAdminUseCase {
  pub fn new(account_service: Arc<AccountService>) -> Self {
    Self { account_service }
  }

  pub async fn execute(&self, command: EnsureAdminCommand) -> Result<User, AccountError> {
    let first_name = PersonName::new("first_name", command.first_name)?;
    let last_name = PersonName::new("last_name", command.last_name)?;
    let email = Email::new(command.email)?;
    let password = Password::new(command.password)?;

    self
      .account_service
      .ensure_admin(first_name, last_name, email, password)
      .await
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::test_support::TestContext;

  #[tokio::test]
  async fn test_running_twice_keeps_one_admin() {
    let ctx = TestContext::new();
    let use_case = EnsureAdminUseCase::new(ctx.accounts.clone());
    let command = EnsureAdminCommand {
      first_name: "Site".to_string(),
      last_name: "Admin".to_string(),
      email: "admin@example.com".to_string(),
      password: "bootstrap password".to_string(),
    };

    let first = use_case.execute(command.clone()).await.unwrap();
    let second = use_case.execute(command).await.unwrap();

    assert!(first.is_admin);
    assert_eq!(first.id, second.id);
  }
}
