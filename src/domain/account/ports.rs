use async_trait::async_trait;
use uuid::Uuid;

use super::entities::{IssuedToken, User};
use super::errors::AccountError;
use super::value_objects::{Email, Password, PasswordHash};

/// Repository trait for user persistence operations
#[async_trait]
pub trait UserRepository: Send + Sync {
  /// Creates a new user in the repository
  async fn create(&self, user: User) -> Result<User, AccountError>;

  /// Finds a user by their unique identifier
  async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, AccountError>;

  /// Finds a user by their email address
  async fn find_by_email(&self, email: &Email) -> Result<Option<User>, AccountError>;

  /// Lists every user, oldest first
  async fn list_all(&self) -> Result<Vec<User>, AccountError>;

  /// Updates an existing user
  async fn update(&self, user: User) -> Result<User, AccountError>;

  /// Permanently removes a user; owned applications go with it
  async fn delete(&self, id: Uuid) -> Result<(), AccountError>;
}

/// Service trait for password hashing operations
#[async_trait]
pub trait PasswordHasher: Send + Sync {
  /// Hashes a plain text password with a fresh salt
  async fn hash(&self, password: &Password) -> Result<PasswordHash, AccountError>;

  /// Verifies a plain text password against a hashed password
  async fn verify(
    &self,
    password: &Password,
    hashed_password: &PasswordHash,
  ) -> Result<bool, AccountError>;
}

/// Mints and validates signed identity tokens
pub trait TokenIssuer: Send + Sync {
  /// Issues a token asserting `user_id`
  fn issue(&self, user_id: Uuid) -> Result<IssuedToken, AccountError>;

  /// Returns the user id a valid, unexpired token asserts.
  /// Any rejection is reported as `AccountError::InvalidToken`.
  fn validate(&self, token: &str) -> Result<Uuid, AccountError>;
}
