use std::sync::Arc;
use uuid::Uuid;

use super::entities::{IssuedToken, Requester, User, UserUpdate};
use super::errors::{AccountError, RepositoryError};
use super::policy;
use super::ports::{PasswordHasher, TokenIssuer, UserRepository};
use super::value_objects::{Email, Password, PasswordHash, PersonName};
use crate::domain::admissions::entities::CatalogKind;
use crate::domain::admissions::ports::CatalogRepository;

/// Verified against when the email is unknown so both login failures cost
/// one Argon2id run with production parameters
const DUMMY_PASSWORD_HASH: &str =
  "$argon2id$v=19$m=19456,t=2,p=1$c29tZXNhbHRzb21lc2FsdA$0N8GKAP0G2eQ4xY8uZV2dH5a2rjZxq0mGAvYz9l0H2E";

/// Account service implementing the account lifecycle and its authorization
pub struct AccountService {
  user_repo: Arc<dyn UserRepository>,
  catalog_repo: Arc<dyn CatalogRepository>,
  password_hasher: Arc<dyn PasswordHasher>,
  token_issuer: Arc<dyn TokenIssuer>,
}

impl AccountService {
  pub fn new(
    user_repo: Arc<dyn UserRepository>,
    catalog_repo: Arc<dyn CatalogRepository>,
    password_hasher: Arc<dyn PasswordHasher>,
    token_issuer: Arc<dyn TokenIssuer>,
  ) -> Self {
    Self {
      user_repo,
      catalog_repo,
      password_hasher,
      token_issuer,
    }
  }

  /// Registers a new user with a freshly salted password hash
  ///
  /// # Errors
  /// Returns `AccountError::EmailAlreadyExists` if email is already registered
  pub async fn register(
    &self,
    first_name: PersonName,
    last_name: PersonName,
    email: Email,
    password: Password,
  ) -> Result<User, AccountError> {
    if self.user_repo.find_by_email(&email).await?.is_some() {
      return Err(AccountError::EmailAlreadyExists);
    }

    let password_hash = self.password_hasher.hash(&password).await?;
    let user = User::new(first_name, last_name, email, password_hash);

    self.create_user(user).await
  }

  /// Authenticates a user by email and password and issues a token
  ///
  /// Unknown email and wrong password produce the same error.
  pub async fn login(
    &self,
    email: Email,
    password: Password,
  ) -> Result<(User, IssuedToken), AccountError> {
    let Some(user) = self.user_repo.find_by_email(&email).await? else {
      let dummy = PasswordHash::from_hash(DUMMY_PASSWORD_HASH)?;
      self.password_hasher.verify(&password, &dummy).await?;
      return Err(AccountError::InvalidCredentials);
    };

    if !self
      .password_hasher
      .verify(&password, &user.password_hash)
      .await?
    {
      return Err(AccountError::InvalidCredentials);
    }

    let token = self.token_issuer.issue(user.id)?;

    Ok((user, token))
  }

  /// Resolves a bearer token into the identity of a still-existing user
  pub async fn authenticate(&self, token: &str) -> Result<Requester, AccountError> {
    let user_id = self.token_issuer.validate(token)?;

    let user = self
      .user_repo
      .find_by_id(user_id)
      .await?
      .ok_or(AccountError::InvalidToken)?;

    Ok(Requester::from(&user))
  }

  /// Lists every user (admin only)
  pub async fn list_users(&self, requester: &Requester) -> Result<Vec<User>, AccountError> {
    policy::authorize_admin(requester).enforce()?;

    self.user_repo.list_all().await
  }

  /// Reads one user (owner or admin)
  pub async fn get_user(&self, id: Uuid, requester: &Requester) -> Result<User, AccountError> {
    let user = self
      .user_repo
      .find_by_id(id)
      .await?
      .ok_or(AccountError::UserNotFound)?;

    policy::authorize_owner_or_admin(requester, user.id).enforce()?;

    Ok(user)
  }

  /// Applies a partial update to the owner's own account
  pub async fn update_user(
    &self,
    id: Uuid,
    requester: &Requester,
    update: UserUpdate,
  ) -> Result<User, AccountError> {
    policy::authorize_owner(requester, id).enforce()?;

    let mut user = self
      .user_repo
      .find_by_id(id)
      .await?
      .ok_or(AccountError::UserNotFound)?;

    if let Some(email) = &update.email {
      if let Some(existing) = self.user_repo.find_by_email(email).await? {
        if existing.id != user.id {
          return Err(AccountError::EmailAlreadyExists);
        }
      }
    }

    if let Some(school_id) = update.undergrad_school_id {
      self.ensure_reference(CatalogKind::School, school_id).await?;
    }
    if let Some(major_id) = update.undergrad_major_id {
      self.ensure_reference(CatalogKind::Major, major_id).await?;
    }

    user.apply_update(update);

    match self.user_repo.update(user).await {
      Err(AccountError::Repository(RepositoryError::DuplicateKey(_))) => {
        Err(AccountError::EmailAlreadyExists)
      }
      result => result,
    }
  }

  /// Permanently deletes the owner's own account
  pub async fn delete_user(&self, id: Uuid, requester: &Requester) -> Result<(), AccountError> {
    policy::authorize_owner(requester, id).enforce()?;

    match self.user_repo.delete(id).await {
      Err(AccountError::Repository(RepositoryError::NotFound)) => Err(AccountError::UserNotFound),
      result => result,
    }
  }

  /// Makes sure an admin account exists for `email`
  ///
  /// Creates it when missing. An existing admin is returned as is; an
  /// existing regular account is left untouched and the call fails with
  /// `AccountError::EmailAlreadyExists`.
  pub async fn ensure_admin(
    &self,
    first_name: PersonName,
    last_name: PersonName,
    email: Email,
    password: Password,
  ) -> Result<User, AccountError> {
    if let Some(existing) = self.user_repo.find_by_email(&email).await? {
      if existing.is_admin {
        return Ok(existing);
      }
      tracing::warn!(
        user_id = %existing.id,
        "Admin email belongs to a regular account, refusing to promote it"
      );
      return Err(AccountError::EmailAlreadyExists);
    }

    let password_hash = self.password_hasher.hash(&password).await?;
    let admin = User::new(first_name, last_name, email, password_hash).promote_to_admin();

    self.create_user(admin).await
  }

  async fn create_user(&self, user: User) -> Result<User, AccountError> {
    match self.user_repo.create(user).await {
      Err(AccountError::Repository(RepositoryError::DuplicateKey(_))) => {
        Err(AccountError::EmailAlreadyExists)
      }
      result => result,
    }
  }

  async fn ensure_reference(&self, kind: CatalogKind, id: Uuid) -> Result<(), AccountError> {
    if self.catalog_repo.exists(kind, id).await? {
      Ok(())
    } else {
      Err(AccountError::UnknownReference {
        field: match kind {
          CatalogKind::School => "undergrad_school_id",
          CatalogKind::Major => "undergrad_major_id",
          CatalogKind::DegreeType => "degree_id",
        },
      })
    }
  }
}
