use std::sync::Arc;
use uuid::Uuid;

use crate::domain::account::entities::Requester;
use crate::domain::admissions::errors::AdmissionsError;
use crate::domain::admissions::services::AdmissionsService;

pub struct DeleteApplicationUseCase {
  admissions_service: Arc<AdmissionsService>,
}

impl DeleteApplicationUseCase {
  pub fn new(admissions_service: Arc<AdmissionsService>) -> Self {
    Self { admissions_service }
  }

  pub async fn execute(&self, id: Uuid, requester: &Requester) -> Result<(), AdmissionsError> {
    self
      .admissions_service
      .delete_application(id, requester)
      .await?;

    tracing::info!(application_id = %id, "Application deleted");

    Ok(())
  }
}
