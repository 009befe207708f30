//! In-memory port implementations and fixtures shared by service and HTTP tests

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

use crate::domain::account::{
  AccountError, Email, Password, PersonName, RepositoryError, Requester, User,
  ports::{TokenIssuer, UserRepository},
  services::AccountService,
};
use crate::domain::admissions::{
  AdmissionsError, AdmissionsService, ApplicantSummary, Application, ApplicationDetails,
  CatalogEntry, CatalogKind, CatalogName,
  ports::{ApplicationRepository, CatalogRepository},
};
use crate::infrastructure::security::{Argon2PasswordHasher, JwtTokenIssuer};

pub const TEST_SECRET: &[u8] = b"test-secret-that-is-long-enough-32b";
pub const TEST_PASSWORD: &str = "correct horse battery";

/// Users, applications and catalog entries behind plain mutexes
///
/// Mirrors the database constraints that the services rely on: unique
/// emails, unique catalog names per kind, and applications removed along
/// with their owner.
#[derive(Default)]
pub struct InMemoryStore {
  users: Mutex<HashMap<Uuid, User>>,
  applications: Mutex<HashMap<Uuid, Application>>,
  catalog: Mutex<HashMap<CatalogKind, Vec<CatalogEntry>>>,
}

impl InMemoryStore {
  fn details(&self, application: &Application) -> Option<ApplicationDetails> {
    let users = self.users.lock().unwrap();
    let catalog = self.catalog.lock().unwrap();

    let lookup = |kind: CatalogKind, id: Uuid| {
      catalog
        .get(&kind)
        .and_then(|entries| entries.iter().find(|e| e.id == id))
        .cloned()
    };
    let owner = users.get(&application.user_id)?;

    Some(ApplicationDetails {
      school: lookup(CatalogKind::School, application.school_id)?,
      major: lookup(CatalogKind::Major, application.major_id)?,
      degree_type: lookup(CatalogKind::DegreeType, application.degree_id)?,
      user: ApplicantSummary {
        id: owner.id,
        first_name: owner.first_name.clone(),
        last_name: owner.last_name.clone(),
        email: owner.email.clone(),
      },
      application: application.clone(),
    })
  }

  fn details_where(&self, keep: impl Fn(&Application) -> bool) -> Vec<ApplicationDetails> {
    let mut matching: Vec<Application> = self
      .applications
      .lock()
      .unwrap()
      .values()
      .filter(|a| keep(a))
      .cloned()
      .collect();
    matching.sort_by(|a, b| b.created_at.cmp(&a.created_at));

    matching.iter().filter_map(|a| self.details(a)).collect()
  }
}

fn duplicate(what: &str) -> RepositoryError {
  RepositoryError::DuplicateKey(format!("{} already exists", what))
}

#[async_trait]
impl UserRepository for InMemoryStore {
  async fn create(&self, user: User) -> Result<User, AccountError> {
    let mut users = self.users.lock().unwrap();
    if users.values().any(|u| u.email == user.email) {
      return Err(duplicate("email").into());
    }
    users.insert(user.id, user.clone());
    Ok(user)
  }

  async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, AccountError> {
    Ok(self.users.lock().unwrap().get(&id).cloned())
  }

  async fn find_by_email(&self, email: &Email) -> Result<Option<User>, AccountError> {
    Ok(
      self
        .users
        .lock()
        .unwrap()
        .values()
        .find(|u| u.email == email.as_str())
        .cloned(),
    )
  }

  async fn list_all(&self) -> Result<Vec<User>, AccountError> {
    let mut users: Vec<User> = self.users.lock().unwrap().values().cloned().collect();
    users.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
    Ok(users)
  }

  async fn update(&self, user: User) -> Result<User, AccountError> {
    let mut users = self.users.lock().unwrap();
    if !users.contains_key(&user.id) {
      return Err(RepositoryError::NotFound.into());
    }
    if users
      .values()
      .any(|u| u.id != user.id && u.email == user.email)
    {
      return Err(duplicate("email").into());
    }
    users.insert(user.id, user.clone());
    Ok(user)
  }

  async fn delete(&self, id: Uuid) -> Result<(), AccountError> {
    if self.users.lock().unwrap().remove(&id).is_none() {
      return Err(RepositoryError::NotFound.into());
    }
    self
      .applications
      .lock()
      .unwrap()
      .retain(|_, a| a.user_id != id);
    Ok(())
  }
}

#[async_trait]
impl ApplicationRepository for InMemoryStore {
  async fn create(&self, application: Application) -> Result<Application, AdmissionsError> {
    self
      .applications
      .lock()
      .unwrap()
      .insert(application.id, application.clone());
    Ok(application)
  }

  async fn find_by_id(&self, id: Uuid) -> Result<Option<Application>, AdmissionsError> {
    Ok(self.applications.lock().unwrap().get(&id).cloned())
  }

  async fn find_details_by_id(
    &self,
    id: Uuid,
  ) -> Result<Option<ApplicationDetails>, AdmissionsError> {
    let application = self.applications.lock().unwrap().get(&id).cloned();
    Ok(application.and_then(|a| self.details(&a)))
  }

  async fn list_details_for_user(
    &self,
    user_id: Uuid,
  ) -> Result<Vec<ApplicationDetails>, AdmissionsError> {
    Ok(self.details_where(|a| a.user_id == user_id))
  }

  async fn list_details_all(&self) -> Result<Vec<ApplicationDetails>, AdmissionsError> {
    Ok(self.details_where(|_| true))
  }

  async fn update(&self, application: Application) -> Result<Application, AdmissionsError> {
    let mut applications = self.applications.lock().unwrap();
    match applications.get_mut(&application.id) {
      Some(stored) => {
        *stored = application.clone();
        Ok(application)
      }
      None => Err(AdmissionsError::ApplicationNotFound),
    }
  }

  async fn delete(&self, id: Uuid) -> Result<(), AdmissionsError> {
    match self.applications.lock().unwrap().remove(&id) {
      Some(_) => Ok(()),
      None => Err(AdmissionsError::ApplicationNotFound),
    }
  }
}

#[async_trait]
impl CatalogRepository for InMemoryStore {
  async fn exists(&self, kind: CatalogKind, id: Uuid) -> Result<bool, RepositoryError> {
    Ok(
      self
        .catalog
        .lock()
        .unwrap()
        .get(&kind)
        .is_some_and(|entries| entries.iter().any(|e| e.id == id)),
    )
  }

  async fn list(&self, kind: CatalogKind) -> Result<Vec<CatalogEntry>, RepositoryError> {
    let mut entries = self
      .catalog
      .lock()
      .unwrap()
      .get(&kind)
      .cloned()
      .unwrap_or_default();
    entries.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(entries)
  }

  async fn create(
    &self,
    kind: CatalogKind,
    entry: CatalogEntry,
  ) -> Result<CatalogEntry, RepositoryError> {
    let mut catalog = self.catalog.lock().unwrap();
    let entries = catalog.entry(kind).or_default();
    if entries.iter().any(|e| e.name == entry.name) {
      return Err(duplicate("name"));
    }
    entries.push(entry.clone());
    Ok(entry)
  }
}

/// Services wired against one shared `InMemoryStore`
pub struct TestContext {
  pub store: Arc<InMemoryStore>,
  pub tokens: Arc<JwtTokenIssuer>,
  pub accounts: Arc<AccountService>,
  pub admissions: Arc<AdmissionsService>,
}

impl TestContext {
  pub fn new() -> Self {
    let store = Arc::new(InMemoryStore::default());
    let tokens = Arc::new(JwtTokenIssuer::new(TEST_SECRET, 7200));

    let accounts = Arc::new(AccountService::new(
      store.clone(),
      store.clone(),
      Arc::new(Argon2PasswordHasher::weak()),
      tokens.clone(),
    ));
    let admissions = Arc::new(AdmissionsService::new(store.clone(), store.clone()));

    Self {
      store,
      tokens,
      accounts,
      admissions,
    }
  }

  pub async fn seed_catalog(&self, kind: CatalogKind, name: &str) -> CatalogEntry {
    CatalogRepository::create(
      self.store.as_ref(),
      kind,
      CatalogEntry::new(CatalogName::new(name).unwrap()),
    )
    .await
    .unwrap()
  }

  /// Registers a regular user with `TEST_PASSWORD`
  pub async fn seed_user(&self, email: &str) -> Requester {
    let user = self
      .accounts
      .register(
        PersonName::new("first_name", "Test").unwrap(),
        PersonName::new("last_name", "User").unwrap(),
        Email::new(email).unwrap(),
        Password::new(TEST_PASSWORD).unwrap(),
      )
      .await
      .unwrap();
    Requester::from(&user)
  }

  /// Registers an admin account that exists in the store
  pub async fn seed_admin(&self, email: &str) -> Requester {
    let admin = self
      .accounts
      .ensure_admin(
        PersonName::new("first_name", "Site").unwrap(),
        PersonName::new("last_name", "Admin").unwrap(),
        Email::new(email).unwrap(),
        Password::new(TEST_PASSWORD).unwrap(),
      )
      .await
      .unwrap();
    Requester::from(&admin)
  }

  pub fn bearer(&self, requester: &Requester) -> String {
    format!("Bearer {}", self.tokens.issue(requester.user_id).unwrap().token)
  }
}

/// An admin identity that is not backed by a stored user
pub fn admin_requester() -> Requester {
  Requester {
    user_id: Uuid::new_v4(),
    is_admin: true,
  }
}
