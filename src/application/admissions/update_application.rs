use std::sync::Arc;
use uuid::Uuid;

use crate::domain::account::entities::Requester;
use crate::domain::admissions::entities::{ApplicationDetails, ApplicationUpdate};
use crate::domain::admissions::errors::AdmissionsError;
use crate::domain::admissions::services::AdmissionsService;
use crate::domain::admissions::value_objects::ApplicationStatus;

/// Partial update; `None` leaves the stored value unchanged
#[derive(Debug, Clone, Default)]
pub struct UpdateApplicationCommand {
  pub status: Option<String>,
  pub school_id: Option<Uuid>,
  pub major_id: Option<Uuid>,
  pub degree_id: Option<Uuid>,
}

pub struct UpdateApplicationUseCase {
  admissions_service: Arc<AdmissionsService>,
}

impl UpdateApplicationUseCase {
  pub fn new(admissions_service: Arc<AdmissionsService>) -> Self {
    Self { admissions_service }
  }

  pub async fn execute(
    &self,
    id: Uuid,
    requester: &Requester,
    command: UpdateApplicationCommand,
  ) -> Result<ApplicationDetails, AdmissionsError> {
    let update = ApplicationUpdate {
      status: command.status.map(ApplicationStatus::new).transpose()?,
      school_id: command.school_id,
      major_id: command.major_id,
      degree_id: command.degree_id,
    };

    self
      .admissions_service
      .update_application(id, requester, update)
      .await
  }
}
