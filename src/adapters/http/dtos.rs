use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::domain::account::entities::User;
use crate::domain::admissions::entities::{ApplicantSummary, ApplicationDetails, CatalogEntry};

/// Request for user registration
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterRequest {
  #[validate(length(
    min = 1,
    max = 100,
    message = "First name must be between 1 and 100 characters"
  ))]
  pub first_name: String,

  #[validate(length(
    min = 1,
    max = 100,
    message = "Last name must be between 1 and 100 characters"
  ))]
  pub last_name: String,

  /// User's email address
  #[validate(email(message = "Invalid email format"))]
  pub email: String,

  /// User's password
  #[validate(length(
    min = 8,
    max = 128,
    message = "Password must be between 8 and 128 characters"
  ))]
  pub password: String,
}

/// Request for user login
///
/// Email format is not validated here so a malformed address fails the
/// same way as an unknown one.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
  #[validate(length(min = 1, message = "Email is required"))]
  pub email: String,

  #[validate(length(min = 1, message = "Password is required"))]
  pub password: String,
}

/// Partial profile update; absent fields are left unchanged
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateUserRequest {
  #[validate(length(
    min = 1,
    max = 100,
    message = "First name must be between 1 and 100 characters"
  ))]
  pub first_name: Option<String>,

  #[validate(length(
    min = 1,
    max = 100,
    message = "Last name must be between 1 and 100 characters"
  ))]
  pub last_name: Option<String>,

  #[validate(email(message = "Invalid email format"))]
  pub email: Option<String>,

  pub undergrad_school_id: Option<Uuid>,

  pub undergrad_major_id: Option<Uuid>,

  /// Range is checked by the `Gpa` value object
  pub undergrad_gpa: Option<Decimal>,

  #[validate(length(max = 2000, message = "Extracurriculars must be at most 2000 characters"))]
  pub top_extracurriculars: Option<String>,

  #[validate(range(min = 260, max = 340, message = "GRE score must be between 260 and 340"))]
  pub gre_scores: Option<i32>,
}

/// Public representation of a user; never carries the password hash
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
  pub id: Uuid,
  pub first_name: String,
  pub last_name: String,
  pub email: String,
  pub undergrad_school_id: Option<Uuid>,
  pub undergrad_major_id: Option<Uuid>,
  pub undergrad_gpa: Option<Decimal>,
  pub top_extracurriculars: Option<String>,
  pub gre_scores: Option<i32>,
  pub is_admin: bool,
  pub created_at: DateTime<Utc>,
  pub updated_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
  fn from(user: User) -> Self {
    Self {
      id: user.id,
      first_name: user.first_name,
      last_name: user.last_name,
      email: user.email,
      undergrad_school_id: user.undergrad_school_id,
      undergrad_major_id: user.undergrad_major_id,
      undergrad_gpa: user.undergrad_gpa,
      top_extracurriculars: user.top_extracurriculars,
      gre_scores: user.gre_scores,
      is_admin: user.is_admin,
      created_at: user.created_at,
      updated_at: user.updated_at,
    }
  }
}

/// Response after successful user login
#[derive(Debug, Clone, Serialize)]
pub struct LoginResponse {
  /// Bearer token for the Authorization header
  pub token: String,

  /// Token expiration timestamp
  pub expires_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateApplicationRequest {
  #[validate(length(min = 1, max = 50, message = "Status must be between 1 and 50 characters"))]
  pub status: String,

  pub school_id: Uuid,

  pub major_id: Uuid,

  pub degree_id: Uuid,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateApplicationRequest {
  #[validate(length(min = 1, max = 50, message = "Status must be between 1 and 50 characters"))]
  pub status: Option<String>,

  pub school_id: Option<Uuid>,

  pub major_id: Option<Uuid>,

  pub degree_id: Option<Uuid>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CatalogEntryRequest {
  #[validate(length(min = 1, max = 255, message = "Name must be between 1 and 255 characters"))]
  pub name: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct CatalogEntryResponse {
  pub id: Uuid,
  pub name: String,
}

impl From<CatalogEntry> for CatalogEntryResponse {
  fn from(entry: CatalogEntry) -> Self {
    Self {
      id: entry.id,
      name: entry.name,
    }
  }
}

/// Owner of an application, as embedded in application responses
#[derive(Debug, Clone, Serialize)]
pub struct ApplicantResponse {
  pub id: Uuid,
  pub first_name: String,
  pub last_name: String,
  pub email: String,
}

impl From<ApplicantSummary> for ApplicantResponse {
  fn from(user: ApplicantSummary) -> Self {
    Self {
      id: user.id,
      first_name: user.first_name,
      last_name: user.last_name,
      email: user.email,
    }
  }
}

/// Application with its school, major, degree type and owner
#[derive(Debug, Clone, Serialize)]
pub struct ApplicationResponse {
  pub id: Uuid,
  pub status: String,
  pub school_id: Uuid,
  pub major_id: Uuid,
  pub degree_id: Uuid,
  pub user_id: Uuid,
  pub school: CatalogEntryResponse,
  pub major: CatalogEntryResponse,
  pub degree_type: CatalogEntryResponse,
  pub user: ApplicantResponse,
  pub created_at: DateTime<Utc>,
  pub updated_at: DateTime<Utc>,
}

impl From<ApplicationDetails> for ApplicationResponse {
  fn from(details: ApplicationDetails) -> Self {
    let application = details.application;
    Self {
      id: application.id,
      status: application.status,
      school_id: application.school_id,
      major_id: application.major_id,
      degree_id: application.degree_id,
      user_id: application.user_id,
      school: details.school.into(),
      major: details.major.into(),
      degree_type: details.degree_type.into(),
      user: details.user.into(),
      created_at: application.created_at,
      updated_at: application.updated_at,
    }
  }
}

/// Standard success response for operations without data
#[derive(Debug, Clone, Serialize)]
pub struct SuccessResponse {
  /// Success message
  pub message: String,
}

/// Standard error response
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
  /// Error type/code
  pub error: String,

  /// Human-readable error message
  pub message: String,

  /// Optional detailed error information
  #[serde(skip_serializing_if = "Option::is_none")]
  pub details: Option<serde_json::Value>,
}
