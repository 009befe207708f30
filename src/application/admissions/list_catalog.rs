use std::sync::Arc;

use crate::domain::admissions::entities::{CatalogEntry, CatalogKind};
use crate::domain::admissions::errors::AdmissionsError;
use crate::domain::admissions::services::AdmissionsService;

/// Lists schools, majors or degree types, ordered by name
pub struct ListCatalogUseCase {
  admissions_service: Arc<AdmissionsService>,
}

impl ListCatalogUseCase {
  pub fn new(admissions_service: Arc<AdmissionsService>) -> Self {
    Self { admissions_service }
  }

  pub async fn execute(&self, kind: CatalogKind) -> Result<Vec<CatalogEntry>, AdmissionsError> {
    self.admissions_service.list_catalog(kind).await
  }
}
