use std::sync::Arc;

use crate::domain::account::entities::{Requester, User};
use crate::domain::account::errors::AccountError;
use crate::domain::account::services::AccountService;

/// Lists every account (admin only)
pub struct ListUsersUseCase {
  account_service: Arc<AccountService>,
}

impl ListUsersUseCase {
  pub fn new(account_service: Arc<AccountService>) -> Self {
    Self { account_service }
  }

  pub async fn execute(&self, requester: &Requester) -> Result<Vec<User>, AccountError> {
    self.account_service.list_users(requester).await
  }
}
