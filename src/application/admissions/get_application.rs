use std::sync::Arc;
use uuid::Uuid;

use crate::domain::account::entities::Requester;
use crate::domain::admissions::entities::ApplicationDetails;
use crate::domain::admissions::errors::AdmissionsError;
use crate::domain::admissions::services::AdmissionsService;

pub struct GetApplicationUseCase {
  admissions_service: Arc<AdmissionsService>,
}

impl GetApplicationUseCase {
  pub fn new(admissions_service: Arc<AdmissionsService>) -> Self {
    Self { admissions_service }
  }

  pub async fn execute(
    &self,
    id: Uuid,
    requester: &Requester,
  ) -> Result<ApplicationDetails, AdmissionsError> {
    self.admissions_service.get_application(id, requester).await
  }
}
