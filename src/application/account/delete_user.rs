use std::sync::Arc;
use uuid::Uuid;

use crate::domain::account::entities::Requester;
use crate::domain::account::errors::AccountError;
use crate::domain::account::services::AccountService;

/// Permanently deletes an account together with its applications
pub struct DeleteUserUseCase {
  account_service: Arc<AccountService>,
}

impl DeleteUserUseCase {
  pub fn new(account_service: Arc<AccountService>) -> Self {
    Self { account_service }
  }

  pub async fn execute(&self, id: Uuid, requester: &Requester) -> Result<(), AccountError> {
    self.account_service.delete_user(id, requester).await?;

    tracing::info!(user_id = %id, "User deleted");

    Ok(())
  }
}
