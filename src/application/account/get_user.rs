use std::sync::Arc;
use uuid::Uuid;

use crate::domain::account::entities::{Requester, User};
use crate::domain::account::errors::AccountError;
use crate::domain::account::services::AccountService;

pub struct GetUserUseCase {
  account_service: Arc<AccountService>,
}

impl GetUserUseCase {
  pub fn new(account_service: Arc<AccountService>) -> Self {
    Self { account_service }
  }

  pub async fn execute(&self, id: Uuid, requester: &Requester) -> Result<User, AccountError> {
    self.account_service.get_user(id, requester).await
  }
}
