use std::sync::Arc;

use crate::domain::account::entities::Requester;
use crate::domain::admissions::entities::ApplicationDetails;
use crate::domain::admissions::errors::AdmissionsError;
use crate::domain::admissions::services::AdmissionsService;

/// Lists the requester's applications, or every application for admins
pub struct ListApplicationsUseCase {
  admissions_service: Arc<AdmissionsService>,
}

impl ListApplicationsUseCase {
  pub fn new(admissions_service: Arc<AdmissionsService>) -> Self {
    Self { admissions_service }
  }

  pub async fn execute(
    &self,
    requester: &Requester,
  ) -> Result<Vec<ApplicationDetails>, AdmissionsError> {
    self.admissions_service.list_applications(requester).await
  }
}
