use std::sync::Arc;
use uuid::Uuid;

use crate::domain::account::entities::Requester;
use crate::domain::admissions::entities::ApplicationDetails;
use crate::domain::admissions::errors::AdmissionsError;
use crate::domain::admissions::services::AdmissionsService;
use crate::domain::admissions::value_objects::ApplicationStatus;

/// Command for creating an application owned by the requester
#[derive(Debug, Clone)]
pub struct CreateApplicationCommand {
  pub status: String,
  pub school_id: Uuid,
  pub major_id: Uuid,
  pub degree_id: Uuid,
}

pub struct CreateApplicationUseCase {
  admissions_service: Arc<AdmissionsService>,
}

impl CreateApplicationUseCase {
  pub fn new(admissions_service: Arc<AdmissionsService>) -> Self {
    Self { admissions_service }
  }

  /// # Errors
  /// `AdmissionsError::UnknownReference` when the school, major or degree
  /// type does not exist
  pub async fn execute(
    &self,
    requester: &Requester,
    command: CreateApplicationCommand,
  ) -> Result<ApplicationDetails, AdmissionsError> {
    let status = ApplicationStatus::new(command.status)?;

    let details = self
      .admissions_service
      .create_application(
        requester,
        status,
        command.school_id,
        command.major_id,
        command.degree_id,
      )
      .await?;

    tracing::info!(
      application_id = %details.application.id,
      user_id = %requester.user_id,
      "Application created"
    );

    Ok(details)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::domain::admissions::entities::CatalogKind;
  use crate::domain::admissions::errors::ValidationError;
  use crate::test_support::TestContext;

  #[tokio::test]
  async fn test_blank_status_is_rejected() {
    let ctx = TestContext::new();
    let requester = ctx.seed_user("rosalind@example.com").await;
    let use_case = CreateApplicationUseCase::new(ctx.admissions.clone());

    let result = use_case
      .execute(
        &requester,
        CreateApplicationCommand {
          status: "   ".to_string(),
          school_id: ctx.seed_catalog(CatalogKind::School, "King's College").await.id,
          major_id: ctx.seed_catalog(CatalogKind::Major, "Chemistry").await.id,
          degree_id: ctx.seed_catalog(CatalogKind::DegreeType, "PhD").await.id,
        },
      )
      .await;

    assert!(matches!(
      result,
      Err(AdmissionsError::Validation(ValidationError::InvalidStatus { .. }))
    ));
  }
}
