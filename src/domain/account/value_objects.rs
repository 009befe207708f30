use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::fmt;
use thiserror::Error;
use validator::ValidateEmail;
use zeroize::{Zeroize, ZeroizeOnDrop};

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, Error)]
pub enum ValueObjectError {
  #[error("Invalid email format: {0}")]
  InvalidEmail(String),

  #[error("Password is too short (minimum 8 characters)")]
  PasswordTooShort,

  #[error("Password is too long (maximum 128 characters)")]
  PasswordTooLong,

  #[error("{field} must be between 1 and {max} characters")]
  InvalidName { field: &'static str, max: usize },

  #[error("GPA must be between 0.00 and 4.00")]
  GpaOutOfRange,

  #[error("GRE score must be between 260 and 340")]
  GreScoreOutOfRange,

  #[error("Invalid password hash format")]
  InvalidPasswordHash,
}

// ============================================================================
// Email Value Object
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Email(String);

impl Email {
  /// Creates a new Email after validation
  pub fn new(email: impl Into<String>) -> Result<Self, ValueObjectError> {
    let email: String = email.into();
    let email = email.trim().to_string();

    if !email.validate_email() {
      return Err(ValueObjectError::InvalidEmail(email));
    }

    // Normalize to lowercase
    Ok(Self(email.to_lowercase()))
  }

  pub fn as_str(&self) -> &str {
    &self.0
  }

  pub fn into_inner(self) -> String {
    self.0
  }
}

impl fmt::Display for Email {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.0)
  }
}

// ============================================================================
// Password Value Object (Plain Password - Never Stored)
// ============================================================================

/// Plain text password, wiped from memory on drop
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Password(String);

impl Password {
  const MIN_LENGTH: usize = 8;
  const MAX_LENGTH: usize = 128;

  /// Creates a new Password, enforcing the registration length rules
  pub fn new(password: impl Into<String>) -> Result<Self, ValueObjectError> {
    let password = password.into();

    if password.chars().count() < Self::MIN_LENGTH {
      return Err(ValueObjectError::PasswordTooShort);
    }

    if password.chars().count() > Self::MAX_LENGTH {
      return Err(ValueObjectError::PasswordTooLong);
    }

    Ok(Self(password))
  }

  /// Wraps a login attempt without length rules, so a rule change never
  /// locks out existing accounts
  pub fn unchecked(password: impl Into<String>) -> Self {
    Self(password.into())
  }

  /// Returns the password as a string slice (use with caution)
  pub fn as_str(&self) -> &str {
    &self.0
  }
}

impl fmt::Debug for Password {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str("Password(***)")
  }
}

// ============================================================================
// PasswordHash Value Object (Argon2id PHC string)
// ============================================================================

#[derive(Clone, PartialEq, Eq)]
pub struct PasswordHash(String);

impl PasswordHash {
  /// Creates a new PasswordHash from an existing PHC hash string
  pub fn from_hash(hash: impl Into<String>) -> Result<Self, ValueObjectError> {
    let hash = hash.into();

    argon2::PasswordHash::new(&hash).map_err(|_| ValueObjectError::InvalidPasswordHash)?;

    Ok(Self(hash))
  }

  pub fn as_str(&self) -> &str {
    &self.0
  }

  pub fn into_inner(self) -> String {
    self.0
  }
}

impl fmt::Debug for PasswordHash {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str("PasswordHash(***)")
  }
}

// ============================================================================
// PersonName Value Object
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonName(String);

impl PersonName {
  const MAX_LENGTH: usize = 100;

  /// Creates a trimmed, non-empty name. `field` is used in the error message.
  pub fn new(field: &'static str, name: impl Into<String>) -> Result<Self, ValueObjectError> {
    let name: String = name.into();
    let name = name.trim().to_string();

    if name.is_empty() || name.chars().count() > Self::MAX_LENGTH {
      return Err(ValueObjectError::InvalidName {
        field,
        max: Self::MAX_LENGTH,
      });
    }

    Ok(Self(name))
  }

  pub fn into_inner(self) -> String {
    self.0
  }
}

// ============================================================================
// Gpa Value Object
// ============================================================================

/// Undergraduate GPA on a 4.0 scale, stored with two decimal places
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gpa(Decimal);

impl Gpa {
  pub fn new(value: Decimal) -> Result<Self, ValueObjectError> {
    if value < Decimal::ZERO || value > dec!(4.00) {
      return Err(ValueObjectError::GpaOutOfRange);
    }

    Ok(Self(value.round_dp(2)))
  }

  pub fn value(&self) -> Decimal {
    self.0
  }
}

// ============================================================================
// GreScore Value Object
// ============================================================================

/// Combined GRE verbal + quantitative score
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GreScore(i32);

impl GreScore {
  const MIN: i32 = 260;
  const MAX: i32 = 340;

  pub fn new(value: i32) -> Result<Self, ValueObjectError> {
    if !(Self::MIN..=Self::MAX).contains(&value) {
      return Err(ValueObjectError::GreScoreOutOfRange);
    }

    Ok(Self(value))
  }

  pub fn value(&self) -> i32 {
    self.0
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_email_validation() {
    assert!(Email::new("test@example.com").is_ok());
    assert!(Email::new("user.name@domain.co.uk").is_ok());

    assert!(Email::new("invalid").is_err());
    assert!(Email::new("@example.com").is_err());
    assert!(Email::new("test@").is_err());
  }

  #[test]
  fn test_email_normalization() {
    let email = Email::new("  Test@Example.COM ").unwrap();
    assert_eq!(email.as_str(), "test@example.com");
  }

  #[test]
  fn test_password_validation() {
    assert!(Password::new("password123").is_ok());

    assert!(matches!(
      Password::new("short"),
      Err(ValueObjectError::PasswordTooShort)
    ));

    let long_password = "a".repeat(129);
    assert!(matches!(
      Password::new(long_password),
      Err(ValueObjectError::PasswordTooLong)
    ));
  }

  #[test]
  fn test_password_debug_is_redacted() {
    let password = Password::new("supersecret").unwrap();
    assert_eq!(format!("{:?}", password), "Password(***)");
  }

  #[test]
  fn test_password_hash_rejects_garbage() {
    assert!(PasswordHash::from_hash("not-a-phc-string").is_err());
  }

  #[test]
  fn test_person_name_trims_and_rejects_blank() {
    let name = PersonName::new("first_name", "  Ada ").unwrap();
    assert_eq!(name.into_inner(), "Ada");

    assert!(matches!(
      PersonName::new("first_name", "   "),
      Err(ValueObjectError::InvalidName {
        field: "first_name",
        ..
      })
    ));
    assert!(PersonName::new("last_name", "x".repeat(101)).is_err());
  }

  #[test]
  fn test_gpa_range() {
    assert_eq!(Gpa::new(dec!(3.456)).unwrap().value(), dec!(3.46));
    assert!(Gpa::new(dec!(0)).is_ok());
    assert!(Gpa::new(dec!(4.00)).is_ok());
    assert!(Gpa::new(dec!(4.01)).is_err());
    assert!(Gpa::new(dec!(-0.5)).is_err());
  }

  #[test]
  fn test_gre_score_range() {
    assert!(GreScore::new(260).is_ok());
    assert!(GreScore::new(340).is_ok());
    assert!(GreScore::new(259).is_err());
    assert!(GreScore::new(341).is_err());
  }
}
