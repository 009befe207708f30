use std::sync::Arc;

use crate::domain::account::entities::Requester;
use crate::domain::admissions::entities::{CatalogEntry, CatalogKind};
use crate::domain::admissions::errors::AdmissionsError;
use crate::domain::admissions::services::AdmissionsService;
use crate::domain::admissions::value_objects::CatalogName;

#[derive(Debug, Clone)]
pub struct CreateCatalogEntryCommand {
  pub kind: CatalogKind,
  pub name: String,
}

/// Adds a school, major or degree type (admin only)
pub struct CreateCatalogEntryUseCase {
  admissions_service: Arc<AdmissionsService>,
}

impl CreateCatalogEntryUseCase {
  pub fn new(admissions_service: Arc<AdmissionsService>) -> Self {
    Self { admissions_service }
  }

  pub async fn execute(
    &self,
    requester: &Requester,
    command: CreateCatalogEntryCommand,
  ) -> Result<CatalogEntry, AdmissionsError> {
    let name = CatalogName::new(command.name)?;

    self
      .admissions_service
      .create_catalog_entry(requester, command.kind, name)
      .await
  }
}
