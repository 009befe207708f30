use rust_decimal::Decimal;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::account::entities::{Requester, User, UserUpdate};
use crate::domain::account::errors::AccountError;
use crate::domain::account::services::AccountService;
use crate::domain::account::value_objects::{Email, Gpa, GreScore, PersonName};

/// Partial update; `None` leaves the stored value unchanged
#[derive(Debug, Clone, Default)]
pub struct UpdateUserCommand {
  pub first_name: Option<String>,
  pub last_name: Option<String>,
  pub email: Option<String>,
  pub undergrad_school_id: Option<Uuid>,
  pub undergrad_major_id: Option<Uuid>,
  pub undergrad_gpa: Option<Decimal>,
  pub top_extracurriculars: Option<String>,
  pub gre_scores: Option<i32>,
}

impl TryFrom<UpdateUserCommand> for UserUpdate {
  type Error = AccountError;

  fn try_from(command: UpdateUserCommand) -> Result<Self, Self::Error> {
    Ok(UserUpdate {
      first_name: command
        .first_name
        .map(|n| PersonName::new("first_name", n))
        .transpose()?,
      last_name: command
        .last_name
        .map(|n| PersonName::new("last_name", n))
        .transpose()?,
      email: command.email.map(Email::new).transpose()?,
      undergrad_school_id: command.undergrad_school_id,
      undergrad_major_id: command.undergrad_major_id,
      undergrad_gpa: command.undergrad_gpa.map(Gpa::new).transpose()?,
      top_extracurriculars: command.top_extracurriculars,
      gre_scores: command.gre_scores.map(GreScore::new).transpose()?,
    })
  }
}

pub struct UpdateUserUseCase {
  account_service: Arc<AccountService>,
}

impl UpdateUserUseCase {
  pub fn new(account_service: Arc<AccountService>) -> Self {
    Self { account_service }
  }

  pub async fn execute(
    &self,
    id: Uuid,
    requester: &Requester,
    command: UpdateUserCommand,
  ) -> Result<User, AccountError> {
    let update = UserUpdate::try_from(command)?;

    self.account_service.update_user(id, requester, update).await
  }
}
