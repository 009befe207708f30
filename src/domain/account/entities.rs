use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

use super::value_objects::{Email, Gpa, GreScore, PasswordHash, PersonName};

/// User entity representing an applicant account
///
/// Deliberately not `Serialize`: outward representations are built by the
/// HTTP adapter and never carry the password hash.
#[derive(Debug, Clone)]
pub struct User {
  /// Unique identifier for the user
  pub id: Uuid,
  pub first_name: String,
  pub last_name: String,
  /// User's email address (unique, lowercase)
  pub email: String,
  /// Argon2id PHC string
  pub password_hash: PasswordHash,
  pub undergrad_school_id: Option<Uuid>,
  pub undergrad_major_id: Option<Uuid>,
  pub undergrad_gpa: Option<Decimal>,
  pub top_extracurriculars: Option<String>,
  /// Combined GRE score
  pub gre_scores: Option<i32>,
  /// Whether the user may perform admin-only operations
  pub is_admin: bool,
  pub created_at: DateTime<Utc>,
  pub updated_at: DateTime<Utc>,
}

impl User {
  /// Creates a new, non-admin user with an empty profile
  pub fn new(
    first_name: PersonName,
    last_name: PersonName,
    email: Email,
    password_hash: PasswordHash,
  ) -> Self {
    let now = Utc::now();
    Self {
      id: Uuid::new_v4(),
      first_name: first_name.into_inner(),
      last_name: last_name.into_inner(),
      email: email.into_inner(),
      password_hash,
      undergrad_school_id: None,
      undergrad_major_id: None,
      undergrad_gpa: None,
      top_extracurriculars: None,
      gre_scores: None,
      is_admin: false,
      created_at: now,
      updated_at: now,
    }
  }

  /// Grants admin rights
  pub fn promote_to_admin(mut self) -> Self {
    self.is_admin = true;
    self
  }

  /// Applies the fields present in `update`, leaving the others untouched
  pub fn apply_update(&mut self, update: UserUpdate) {
    let UserUpdate {
      first_name,
      last_name,
      email,
      undergrad_school_id,
      undergrad_major_id,
      undergrad_gpa,
      top_extracurriculars,
      gre_scores,
    } = update;

    if let Some(first_name) = first_name {
      self.first_name = first_name.into_inner();
    }
    if let Some(last_name) = last_name {
      self.last_name = last_name.into_inner();
    }
    if let Some(email) = email {
      self.email = email.into_inner();
    }
    if let Some(school_id) = undergrad_school_id {
      self.undergrad_school_id = Some(school_id);
    }
    if let Some(major_id) = undergrad_major_id {
      self.undergrad_major_id = Some(major_id);
    }
    if let Some(gpa) = undergrad_gpa {
      self.undergrad_gpa = Some(gpa.value());
    }
    if let Some(extracurriculars) = top_extracurriculars {
      self.top_extracurriculars = Some(extracurriculars);
    }
    if let Some(score) = gre_scores {
      self.gre_scores = Some(score.value());
    }
    self.updated_at = Utc::now();
  }
}

/// Validated partial update of a user's account and profile
#[derive(Debug, Clone, Default)]
pub struct UserUpdate {
  pub first_name: Option<PersonName>,
  pub last_name: Option<PersonName>,
  pub email: Option<Email>,
  pub undergrad_school_id: Option<Uuid>,
  pub undergrad_major_id: Option<Uuid>,
  pub undergrad_gpa: Option<Gpa>,
  pub top_extracurriculars: Option<String>,
  pub gre_scores: Option<GreScore>,
}

/// Authenticated identity attached to a request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Requester {
  pub user_id: Uuid,
  pub is_admin: bool,
}

impl From<&User> for Requester {
  fn from(user: &User) -> Self {
    Self {
      user_id: user.id,
      is_admin: user.is_admin,
    }
  }
}

/// Signed token handed to the client after login
#[derive(Debug, Clone)]
pub struct IssuedToken {
  pub token: String,
  pub expires_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::domain::account::value_objects::Password;
  use argon2::password_hash::{PasswordHasher, SaltString};
  use rust_decimal_macros::dec;

  fn hash() -> PasswordHash {
    let salt = SaltString::generate(&mut rand::rngs::OsRng);
    let phc = argon2::Argon2::default()
      .hash_password(Password::new("password123").unwrap().as_str().as_bytes(), &salt)
      .unwrap()
      .to_string();
    PasswordHash::from_hash(phc).unwrap()
  }

  fn user() -> User {
    User::new(
      PersonName::new("first_name", "Ada").unwrap(),
      PersonName::new("last_name", "Lovelace").unwrap(),
      Email::new("ada@example.com").unwrap(),
      hash(),
    )
  }

  #[test]
  fn test_user_creation() {
    let user = user();

    assert_eq!(user.email, "ada@example.com");
    assert_eq!(user.first_name, "Ada");
    assert!(!user.is_admin);
    assert!(user.undergrad_gpa.is_none());
  }

  #[test]
  fn test_partial_update_keeps_missing_fields() {
    let mut user = user();
    user.apply_update(UserUpdate {
      last_name: Some(PersonName::new("last_name", "King").unwrap()),
      undergrad_gpa: Some(Gpa::new(dec!(3.9)).unwrap()),
      ..Default::default()
    });

    assert_eq!(user.first_name, "Ada");
    assert_eq!(user.last_name, "King");
    assert_eq!(user.email, "ada@example.com");
    assert_eq!(user.undergrad_gpa, Some(dec!(3.9)));
    assert!(user.gre_scores.is_none());
  }

  #[test]
  fn test_requester_from_user() {
    let admin = user().promote_to_admin();
    let requester = Requester::from(&admin);

    assert_eq!(requester.user_id, admin.id);
    assert!(requester.is_admin);
  }
}
