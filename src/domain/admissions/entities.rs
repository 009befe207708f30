use chrono::{DateTime, Utc};
use std::fmt;
use uuid::Uuid;

use super::value_objects::{ApplicationStatus, CatalogName};

/// The three reference tables an application points into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CatalogKind {
  School,
  Major,
  DegreeType,
}

impl CatalogKind {
  /// Field name used in validation errors and API payloads
  pub fn field(self) -> &'static str {
    match self {
      Self::School => "school_id",
      Self::Major => "major_id",
      Self::DegreeType => "degree_id",
    }
  }
}

impl fmt::Display for CatalogKind {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::School => write!(f, "school"),
      Self::Major => write!(f, "major"),
      Self::DegreeType => write!(f, "degree type"),
    }
  }
}

/// A school, major or degree type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
  pub id: Uuid,
  pub name: String,
}

impl CatalogEntry {
  pub fn new(name: CatalogName) -> Self {
    Self {
      id: Uuid::new_v4(),
      name: name.into_inner(),
    }
  }
}

/// Application entity linking a user to a school, major and degree type
#[derive(Debug, Clone)]
pub struct Application {
  pub id: Uuid,
  pub status: String,
  pub school_id: Uuid,
  pub major_id: Uuid,
  /// Owner of the application
  pub user_id: Uuid,
  pub degree_id: Uuid,
  pub created_at: DateTime<Utc>,
  pub updated_at: DateTime<Utc>,
}

impl Application {
  pub fn new(
    user_id: Uuid,
    status: ApplicationStatus,
    school_id: Uuid,
    major_id: Uuid,
    degree_id: Uuid,
  ) -> Self {
    let now = Utc::now();
    Self {
      id: Uuid::new_v4(),
      status: status.into_inner(),
      school_id,
      major_id,
      user_id,
      degree_id,
      created_at: now,
      updated_at: now,
    }
  }

  /// Applies the fields present in `update`
  pub fn apply_update(&mut self, update: ApplicationUpdate) {
    if let Some(status) = update.status {
      self.status = status.into_inner();
    }
    if let Some(school_id) = update.school_id {
      self.school_id = school_id;
    }
    if let Some(major_id) = update.major_id {
      self.major_id = major_id;
    }
    if let Some(degree_id) = update.degree_id {
      self.degree_id = degree_id;
    }
    self.updated_at = Utc::now();
  }

  /// References that must resolve before the application is persisted
  pub fn references(&self) -> [(CatalogKind, Uuid); 3] {
    [
      (CatalogKind::School, self.school_id),
      (CatalogKind::Major, self.major_id),
      (CatalogKind::DegreeType, self.degree_id),
    ]
  }
}

/// Validated partial update of an application
#[derive(Debug, Clone, Default)]
pub struct ApplicationUpdate {
  pub status: Option<ApplicationStatus>,
  pub school_id: Option<Uuid>,
  pub major_id: Option<Uuid>,
  pub degree_id: Option<Uuid>,
}

/// Public part of the owning user, without credentials
#[derive(Debug, Clone)]
pub struct ApplicantSummary {
  pub id: Uuid,
  pub first_name: String,
  pub last_name: String,
  pub email: String,
}

/// Application with its references eagerly loaded
#[derive(Debug, Clone)]
pub struct ApplicationDetails {
  pub application: Application,
  pub school: CatalogEntry,
  pub major: CatalogEntry,
  pub degree_type: CatalogEntry,
  pub user: ApplicantSummary,
}
