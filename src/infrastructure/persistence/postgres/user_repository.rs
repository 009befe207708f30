use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::account::{
  entities::User,
  errors::{AccountError, RepositoryError},
  ports::UserRepository,
  value_objects::{Email, PasswordHash},
};

/// PostgreSQL implementation of the UserRepository trait
pub struct PostgresUserRepository {
  pool: PgPool,
}

impl PostgresUserRepository {
  /// Creates a new instance of PostgresUserRepository
  pub fn new(pool: PgPool) -> Self {
    Self { pool }
  }
}

/// Database row structure for users table
#[derive(Debug, sqlx::FromRow)]
struct UserRow {
  id: Uuid,
  first_name: String,
  last_name: String,
  email: String,
  password_hash: String,
  undergrad_school_id: Option<Uuid>,
  undergrad_major_id: Option<Uuid>,
  undergrad_gpa: Option<Decimal>,
  top_extracurriculars: Option<String>,
  gre_scores: Option<i32>,
  is_admin: bool,
  created_at: DateTime<Utc>,
  updated_at: DateTime<Utc>,
}

impl TryFrom<UserRow> for User {
  type Error = AccountError;

  fn try_from(row: UserRow) -> Result<Self, Self::Error> {
    let password_hash = PasswordHash::from_hash(row.password_hash).map_err(|e| {
      AccountError::Repository(RepositoryError::DatabaseError(format!(
        "Stored password hash for user {} is unreadable: {}",
        row.id, e
      )))
    })?;

    Ok(User {
      id: row.id,
      first_name: row.first_name,
      last_name: row.last_name,
      email: row.email,
      password_hash,
      undergrad_school_id: row.undergrad_school_id,
      undergrad_major_id: row.undergrad_major_id,
      undergrad_gpa: row.undergrad_gpa,
      top_extracurriculars: row.top_extracurriculars,
      gre_scores: row.gre_scores,
      is_admin: row.is_admin,
      created_at: row.created_at,
      updated_at: row.updated_at,
    })
  }
}

const USER_COLUMNS: &str = r#"
                id,
                first_name,
                last_name,
                email,
                password_hash,
                undergrad_school_id,
                undergrad_major_id,
                undergrad_gpa,
                top_extracurriculars,
                gre_scores,
                is_admin,
                created_at,
                updated_at
"#;

#[async_trait]
impl UserRepository for PostgresUserRepository {
  async fn create(&self, user: User) -> Result<User, AccountError> {
    let query = format!(
      r#"
            INSERT INTO users (
                id,
                first_name,
                last_name,
                email,
                password_hash,
                undergrad_school_id,
                undergrad_major_id,
                undergrad_gpa,
                top_extracurriculars,
                gre_scores,
                is_admin,
                created_at,
                updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
            RETURNING {USER_COLUMNS}
            "#
    );

    let row = sqlx::query_as::<_, UserRow>(&query)
      .bind(user.id)
      .bind(&user.first_name)
      .bind(&user.last_name)
      .bind(&user.email)
      .bind(user.password_hash.as_str())
      .bind(user.undergrad_school_id)
      .bind(user.undergrad_major_id)
      .bind(user.undergrad_gpa)
      .bind(&user.top_extracurriculars)
      .bind(user.gre_scores)
      .bind(user.is_admin)
      .bind(user.created_at)
      .bind(user.updated_at)
      .fetch_one(&self.pool)
      .await?;

    row.try_into()
  }

  async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, AccountError> {
    let query = format!("SELECT {USER_COLUMNS} FROM users WHERE id = $1");

    let row = sqlx::query_as::<_, UserRow>(&query)
      .bind(id)
      .fetch_optional(&self.pool)
      .await?;

    row.map(User::try_from).transpose()
  }

  async fn find_by_email(&self, email: &Email) -> Result<Option<User>, AccountError> {
    let query = format!("SELECT {USER_COLUMNS} FROM users WHERE email = $1");

    let row = sqlx::query_as::<_, UserRow>(&query)
      .bind(email.as_str())
      .fetch_optional(&self.pool)
      .await?;

    row.map(User::try_from).transpose()
  }

  async fn list_all(&self) -> Result<Vec<User>, AccountError> {
    let query = format!("SELECT {USER_COLUMNS} FROM users ORDER BY created_at ASC, id ASC");

    let rows = sqlx::query_as::<_, UserRow>(&query)
      .fetch_all(&self.pool)
      .await?;

    rows.into_iter().map(User::try_from).collect()
  }

  async fn update(&self, user: User) -> Result<User, AccountError> {
    let query = format!(
      r#"
            UPDATE users
            SET
                first_name = $2,
                last_name = $3,
                email = $4,
                password_hash = $5,
                undergrad_school_id = $6,
                undergrad_major_id = $7,
                undergrad_gpa = $8,
                top_extracurriculars = $9,
                gre_scores = $10,
                is_admin = $11,
                updated_at = $12
            WHERE id = $1
            RETURNING {USER_COLUMNS}
            "#
    );

    let result = sqlx::query_as::<_, UserRow>(&query)
      .bind(user.id)
      .bind(&user.first_name)
      .bind(&user.last_name)
      .bind(&user.email)
      .bind(user.password_hash.as_str())
      .bind(user.undergrad_school_id)
      .bind(user.undergrad_major_id)
      .bind(user.undergrad_gpa)
      .bind(&user.top_extracurriculars)
      .bind(user.gre_scores)
      .bind(user.is_admin)
      .bind(user.updated_at)
      .fetch_one(&self.pool)
      .await;

    match result {
      Ok(row) => row.try_into(),
      Err(sqlx::Error::RowNotFound) => Err(AccountError::Repository(RepositoryError::NotFound)),
      Err(e) => Err(e.into()),
    }
  }

  async fn delete(&self, id: Uuid) -> Result<(), AccountError> {
    let result = sqlx::query("DELETE FROM users WHERE id = $1")
      .bind(id)
      .execute(&self.pool)
      .await?;

    if result.rows_affected() == 0 {
      Err(AccountError::Repository(RepositoryError::NotFound))
    } else {
      Ok(())
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::domain::account::value_objects::PersonName;
  use crate::infrastructure::persistence::postgres::test_db::setup_test_db;
  use rust_decimal_macros::dec;

  const HASH: &str = "$argon2id$v=19$m=19456,t=2,p=1$c29tZXNhbHRzb21lc2FsdA$0N8GKAP0G2eQ4xY8uZV2dH5a2rjZxq0mGAvYz9l0H2E";

  fn user(email: &str) -> User {
    User::new(
      PersonName::new("first_name", "Katherine").unwrap(),
      PersonName::new("last_name", "Johnson").unwrap(),
      Email::new(email).unwrap(),
      PasswordHash::from_hash(HASH).unwrap(),
    )
  }

  #[tokio::test]
  #[ignore = "requires docker"]
  async fn test_create_and_find_user() {
    let (pool, _container) = setup_test_db().await;
    let repo = PostgresUserRepository::new(pool);

    let created = repo.create(user("kj@example.com")).await.unwrap();

    let by_id = repo.find_by_id(created.id).await.unwrap().unwrap();
    assert_eq!(by_id.email, "kj@example.com");
    assert_eq!(by_id.password_hash.as_str(), HASH);

    let by_email = repo
      .find_by_email(&Email::new("KJ@example.com").unwrap())
      .await
      .unwrap();
    assert_eq!(by_email.map(|u| u.id), Some(created.id));
  }

  #[tokio::test]
  #[ignore = "requires docker"]
  async fn test_duplicate_email_is_duplicate_key() {
    let (pool, _container) = setup_test_db().await;
    let repo = PostgresUserRepository::new(pool);

    repo.create(user("kj@example.com")).await.unwrap();
    let result = repo.create(user("kj@example.com")).await;

    assert!(matches!(
      result,
      Err(AccountError::Repository(RepositoryError::DuplicateKey(_)))
    ));
  }

  #[tokio::test]
  #[ignore = "requires docker"]
  async fn test_update_persists_profile_fields() {
    let (pool, _container) = setup_test_db().await;
    let repo = PostgresUserRepository::new(pool);

    let mut stored = repo.create(user("kj@example.com")).await.unwrap();
    stored.undergrad_gpa = Some(dec!(3.90));
    stored.gre_scores = Some(331);
    stored.top_extracurriculars = Some("Math olympiad".to_string());

    let updated = repo.update(stored).await.unwrap();
    assert_eq!(updated.undergrad_gpa, Some(dec!(3.90)));
    assert_eq!(updated.gre_scores, Some(331));

    let missing = repo.update(user("ghost@example.com")).await;
    assert!(matches!(
      missing,
      Err(AccountError::Repository(RepositoryError::NotFound))
    ));
  }

  #[tokio::test]
  #[ignore = "requires docker"]
  async fn test_delete_user() {
    let (pool, _container) = setup_test_db().await;
    let repo = PostgresUserRepository::new(pool);

    let created = repo.create(user("kj@example.com")).await.unwrap();
    repo.delete(created.id).await.unwrap();

    assert!(repo.find_by_id(created.id).await.unwrap().is_none());
    assert!(matches!(
      repo.delete(created.id).await,
      Err(AccountError::Repository(RepositoryError::NotFound))
    ));
    assert!(repo.list_all().await.unwrap().is_empty());
  }
}
