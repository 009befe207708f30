use std::sync::Arc;

use crate::domain::account::entities::Requester;
use crate::domain::account::errors::AccountError;
use crate::domain::account::services::AccountService;

/// Resolves a bearer token into the requester identity
pub struct AuthenticateRequestUseCase {
  account_service: Arc<AccountService>,
}

impl AuthenticateRequestUseCase {
  pub fn new(account_service: Arc<AccountService>) -> Self {
    Self { account_service }
  }

  pub async fn execute(&self, token: &str) -> Result<Requester, AccountError> {
    self.account_service.authenticate(token).await
  }
}
