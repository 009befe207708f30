use std::sync::Arc;
use uuid::Uuid;

use super::entities::{Application, ApplicationDetails, ApplicationUpdate, CatalogEntry, CatalogKind};
use super::errors::AdmissionsError;
use super::ports::{ApplicationRepository, CatalogRepository};
use super::value_objects::{ApplicationStatus, CatalogName};
use crate::domain::account::entities::Requester;
use crate::domain::account::errors::RepositoryError;
use crate::domain::account::policy;

/// Admissions service: applications and the catalog they reference
pub struct AdmissionsService {
  application_repo: Arc<dyn ApplicationRepository>,
  catalog_repo: Arc<dyn CatalogRepository>,
}

impl AdmissionsService {
  pub fn new(
    application_repo: Arc<dyn ApplicationRepository>,
    catalog_repo: Arc<dyn CatalogRepository>,
  ) -> Self {
    Self {
      application_repo,
      catalog_repo,
    }
  }

  /// Creates an application owned by the requester
  pub async fn create_application(
    &self,
    requester: &Requester,
    status: ApplicationStatus,
    school_id: Uuid,
    major_id: Uuid,
    degree_id: Uuid,
  ) -> Result<ApplicationDetails, AdmissionsError> {
    let application = Application::new(requester.user_id, status, school_id, major_id, degree_id);
    self.ensure_references(&application).await?;

    let created = self.application_repo.create(application).await?;
    self.load_details(created.id).await
  }

  /// Admins see every application, everyone else only their own
  pub async fn list_applications(
    &self,
    requester: &Requester,
  ) -> Result<Vec<ApplicationDetails>, AdmissionsError> {
    if policy::is_admin(requester) {
      self.application_repo.list_details_all().await
    } else {
      self
        .application_repo
        .list_details_for_user(requester.user_id)
        .await
    }
  }

  pub async fn get_application(
    &self,
    id: Uuid,
    requester: &Requester,
  ) -> Result<ApplicationDetails, AdmissionsError> {
    let details = self.load_details(id).await?;

    policy::authorize_owner_or_admin(requester, details.application.user_id).enforce()?;

    Ok(details)
  }

  /// Partial update by the owner; changed references must resolve
  pub async fn update_application(
    &self,
    id: Uuid,
    requester: &Requester,
    update: ApplicationUpdate,
  ) -> Result<ApplicationDetails, AdmissionsError> {
    let mut application = self
      .application_repo
      .find_by_id(id)
      .await?
      .ok_or(AdmissionsError::ApplicationNotFound)?;

    policy::authorize_owner(requester, application.user_id).enforce()?;

    application.apply_update(update);
    self.ensure_references(&application).await?;

    let updated = self.application_repo.update(application).await?;
    self.load_details(updated.id).await
  }

  pub async fn delete_application(
    &self,
    id: Uuid,
    requester: &Requester,
  ) -> Result<(), AdmissionsError> {
    let application = self
      .application_repo
      .find_by_id(id)
      .await?
      .ok_or(AdmissionsError::ApplicationNotFound)?;

    policy::authorize_owner(requester, application.user_id).enforce()?;

    self.application_repo.delete(application.id).await
  }

  pub async fn list_catalog(&self, kind: CatalogKind) -> Result<Vec<CatalogEntry>, AdmissionsError> {
    Ok(self.catalog_repo.list(kind).await?)
  }

  /// Adds a school, major or degree type (admin only)
  pub async fn create_catalog_entry(
    &self,
    requester: &Requester,
    kind: CatalogKind,
    name: CatalogName,
  ) -> Result<CatalogEntry, AdmissionsError> {
    policy::authorize_admin(requester).enforce()?;

    match self.catalog_repo.create(kind, CatalogEntry::new(name)).await {
      Ok(entry) => {
        tracing::info!(kind = %kind, id = %entry.id, "Catalog entry created");
        Ok(entry)
      }
      Err(RepositoryError::DuplicateKey(_)) => Err(AdmissionsError::DuplicateName(kind.to_string())),
      Err(e) => Err(e.into()),
    }
  }

  async fn ensure_references(&self, application: &Application) -> Result<(), AdmissionsError> {
    for (kind, id) in application.references() {
      if !self.catalog_repo.exists(kind, id).await? {
        return Err(AdmissionsError::UnknownReference {
          field: kind.field(),
        });
      }
    }
    Ok(())
  }

  async fn load_details(&self, id: Uuid) -> Result<ApplicationDetails, AdmissionsError> {
    self
      .application_repo
      .find_details_by_id(id)
      .await?
      .ok_or(AdmissionsError::ApplicationNotFound)
  }
}
