use async_trait::async_trait;
use uuid::Uuid;

use super::entities::{Application, ApplicationDetails, CatalogEntry, CatalogKind};
use super::errors::AdmissionsError;
use crate::domain::account::errors::RepositoryError;

/// Repository trait for application persistence
///
/// `find_by_id` is a flat row read. The `*_details*` methods join the
/// school, major, degree type and owner in the same query.
#[async_trait]
pub trait ApplicationRepository: Send + Sync {
  async fn create(&self, application: Application) -> Result<Application, AdmissionsError>;

  async fn find_by_id(&self, id: Uuid) -> Result<Option<Application>, AdmissionsError>;

  async fn find_details_by_id(
    &self,
    id: Uuid,
  ) -> Result<Option<ApplicationDetails>, AdmissionsError>;

  /// Applications of one user, newest first
  async fn list_details_for_user(
    &self,
    user_id: Uuid,
  ) -> Result<Vec<ApplicationDetails>, AdmissionsError>;

  /// Every application, newest first
  async fn list_details_all(&self) -> Result<Vec<ApplicationDetails>, AdmissionsError>;

  async fn update(&self, application: Application) -> Result<Application, AdmissionsError>;

  async fn delete(&self, id: Uuid) -> Result<(), AdmissionsError>;
}

/// Repository trait for schools, majors and degree types
///
/// Shared by the account service (profile references) and the admissions
/// service, so it reports plain `RepositoryError`s.
#[async_trait]
pub trait CatalogRepository: Send + Sync {
  async fn exists(&self, kind: CatalogKind, id: Uuid) -> Result<bool, RepositoryError>;

  /// Entries of one kind, ordered by name
  async fn list(&self, kind: CatalogKind) -> Result<Vec<CatalogEntry>, RepositoryError>;

  /// Fails with `RepositoryError::DuplicateKey` when the name is taken
  async fn create(
    &self,
    kind: CatalogKind,
    entry: CatalogEntry,
  ) -> Result<CatalogEntry, RepositoryError>;
}
