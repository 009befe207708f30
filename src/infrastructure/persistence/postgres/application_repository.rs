use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::admissions::{
  entities::{ApplicantSummary, Application, ApplicationDetails, CatalogEntry},
  errors::AdmissionsError,
  ports::ApplicationRepository,
};

/// PostgreSQL implementation of the ApplicationRepository trait
pub struct PostgresApplicationRepository {
  pool: PgPool,
}

impl PostgresApplicationRepository {
  pub fn new(pool: PgPool) -> Self {
    Self { pool }
  }
}

/// Database row structure for applications table
#[derive(Debug, sqlx::FromRow)]
struct ApplicationRow {
  id: Uuid,
  status: String,
  school_id: Uuid,
  major_id: Uuid,
  user_id: Uuid,
  degree_id: Uuid,
  created_at: DateTime<Utc>,
  updated_at: DateTime<Utc>,
}

impl From<ApplicationRow> for Application {
  fn from(row: ApplicationRow) -> Self {
    Application {
      id: row.id,
      status: row.status,
      school_id: row.school_id,
      major_id: row.major_id,
      user_id: row.user_id,
      degree_id: row.degree_id,
      created_at: row.created_at,
      updated_at: row.updated_at,
    }
  }
}

/// Application joined with its school, major, degree type and owner
#[derive(Debug, sqlx::FromRow)]
struct ApplicationDetailsRow {
  id: Uuid,
  status: String,
  school_id: Uuid,
  major_id: Uuid,
  user_id: Uuid,
  degree_id: Uuid,
  created_at: DateTime<Utc>,
  updated_at: DateTime<Utc>,
  school_name: String,
  major_name: String,
  degree_name: String,
  user_first_name: String,
  user_last_name: String,
  user_email: String,
}

impl From<ApplicationDetailsRow> for ApplicationDetails {
  fn from(row: ApplicationDetailsRow) -> Self {
    ApplicationDetails {
      school: CatalogEntry {
        id: row.school_id,
        name: row.school_name,
      },
      major: CatalogEntry {
        id: row.major_id,
        name: row.major_name,
      },
      degree_type: CatalogEntry {
        id: row.degree_id,
        name: row.degree_name,
      },
      user: ApplicantSummary {
        id: row.user_id,
        first_name: row.user_first_name,
        last_name: row.user_last_name,
        email: row.user_email,
      },
      application: Application {
        id: row.id,
        status: row.status,
        school_id: row.school_id,
        major_id: row.major_id,
        user_id: row.user_id,
        degree_id: row.degree_id,
        created_at: row.created_at,
        updated_at: row.updated_at,
      },
    }
  }
}

const DETAILS_SELECT: &str = r#"
            SELECT
                a.id,
                a.status,
                a.school_id,
                a.major_id,
                a.user_id,
                a.degree_id,
                a.created_at,
                a.updated_at,
                s.name AS school_name,
                m.name AS major_name,
                d.name AS degree_name,
                u.first_name AS user_first_name,
                u.last_name AS user_last_name,
                u.email AS user_email
            FROM applications a
            JOIN schools s ON s.id = a.school_id
            JOIN majors m ON m.id = a.major_id
            JOIN degree_types d ON d.id = a.degree_id
            JOIN users u ON u.id = a.user_id
"#;

#[async_trait]
impl ApplicationRepository for PostgresApplicationRepository {
  async fn create(&self, application: Application) -> Result<Application, AdmissionsError> {
    let row = sqlx::query_as::<_, ApplicationRow>(
      r#"
            INSERT INTO applications (
                id,
                status,
                school_id,
                major_id,
                user_id,
                degree_id,
                created_at,
                updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING id, status, school_id, major_id, user_id, degree_id, created_at, updated_at
            "#,
    )
    .bind(application.id)
    .bind(&application.status)
    .bind(application.school_id)
    .bind(application.major_id)
    .bind(application.user_id)
    .bind(application.degree_id)
    .bind(application.created_at)
    .bind(application.updated_at)
    .fetch_one(&self.pool)
    .await?;

    Ok(row.into())
  }

  async fn find_by_id(&self, id: Uuid) -> Result<Option<Application>, AdmissionsError> {
    let row = sqlx::query_as::<_, ApplicationRow>(
      r#"
            SELECT id, status, school_id, major_id, user_id, degree_id, created_at, updated_at
            FROM applications
            WHERE id = $1
            "#,
    )
    .bind(id)
    .fetch_optional(&self.pool)
    .await?;

    Ok(row.map(Application::from))
  }

  async fn find_details_by_id(
    &self,
    id: Uuid,
  ) -> Result<Option<ApplicationDetails>, AdmissionsError> {
    let query = format!("{DETAILS_SELECT} WHERE a.id = $1");

    let row = sqlx::query_as::<_, ApplicationDetailsRow>(&query)
      .bind(id)
      .fetch_optional(&self.pool)
      .await?;

    Ok(row.map(ApplicationDetails::from))
  }

  async fn list_details_for_user(
    &self,
    user_id: Uuid,
  ) -> Result<Vec<ApplicationDetails>, AdmissionsError> {
    let query = format!("{DETAILS_SELECT} WHERE a.user_id = $1 ORDER BY a.created_at DESC");

    let rows = sqlx::query_as::<_, ApplicationDetailsRow>(&query)
      .bind(user_id)
      .fetch_all(&self.pool)
      .await?;

    Ok(rows.into_iter().map(ApplicationDetails::from).collect())
  }

  async fn list_details_all(&self) -> Result<Vec<ApplicationDetails>, AdmissionsError> {
    let query = format!("{DETAILS_SELECT} ORDER BY a.created_at DESC");

    let rows = sqlx::query_as::<_, ApplicationDetailsRow>(&query)
      .fetch_all(&self.pool)
      .await?;

    Ok(rows.into_iter().map(ApplicationDetails::from).collect())
  }

  async fn update(&self, application: Application) -> Result<Application, AdmissionsError> {
    let result = sqlx::query_as::<_, ApplicationRow>(
      r#"
            UPDATE applications
            SET
                status = $2,
                school_id = $3,
                major_id = $4,
                degree_id = $5,
                updated_at = $6
            WHERE id = $1
            RETURNING id, status, school_id, major_id, user_id, degree_id, created_at, updated_at
            "#,
    )
    .bind(application.id)
    .bind(&application.status)
    .bind(application.school_id)
    .bind(application.major_id)
    .bind(application.degree_id)
    .bind(application.updated_at)
    .fetch_one(&self.pool)
    .await;

    match result {
      Ok(row) => Ok(row.into()),
      Err(sqlx::Error::RowNotFound) => Err(AdmissionsError::ApplicationNotFound),
      Err(e) => Err(e.into()),
    }
  }

  async fn delete(&self, id: Uuid) -> Result<(), AdmissionsError> {
    let result = sqlx::query("DELETE FROM applications WHERE id = $1")
      .bind(id)
      .execute(&self.pool)
      .await?;

    if result.rows_affected() == 0 {
      Err(AdmissionsError::ApplicationNotFound)
    } else {
      Ok(())
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::domain::account::entities::User;
  use crate::domain::account::errors::RepositoryError;
  use crate::domain::account::ports::UserRepository;
  use crate::domain::account::value_objects::{Email, PasswordHash, PersonName};
  use crate::domain::admissions::entities::CatalogKind;
  use crate::domain::admissions::ports::CatalogRepository;
  use crate::domain::admissions::value_objects::{ApplicationStatus, CatalogName};
  use crate::infrastructure::persistence::postgres::test_db::setup_test_db;
  use crate::infrastructure::persistence::postgres::{
    PostgresCatalogRepository, PostgresUserRepository,
  };

  const HASH: &str = "$argon2id$v=19$m=19456,t=2,p=1$c29tZXNhbHRzb21lc2FsdA$0N8GKAP0G2eQ4xY8uZV2dH5a2rjZxq0mGAvYz9l0H2E";

  struct Fixture {
    user: User,
    school: CatalogEntry,
    major: CatalogEntry,
    degree: CatalogEntry,
  }

  async fn fixture(pool: &PgPool) -> Fixture {
    let users = PostgresUserRepository::new(pool.clone());
    let catalog = PostgresCatalogRepository::new(pool.clone());

    let user = users
      .create(User::new(
        PersonName::new("first_name", "Marie").unwrap(),
        PersonName::new("last_name", "Curie").unwrap(),
        Email::new("marie@example.com").unwrap(),
        PasswordHash::from_hash(HASH).unwrap(),
      ))
      .await
      .unwrap();

    let entry = |name: &str| CatalogEntry::new(CatalogName::new(name).unwrap());
    Fixture {
      user,
      school: catalog.create(CatalogKind::School, entry("Sorbonne")).await.unwrap(),
      major: catalog.create(CatalogKind::Major, entry("Physics")).await.unwrap(),
      degree: catalog.create(CatalogKind::DegreeType, entry("PhD")).await.unwrap(),
    }
  }

  fn application(fx: &Fixture) -> Application {
    Application::new(
      fx.user.id,
      ApplicationStatus::new("Submitted").unwrap(),
      fx.school.id,
      fx.major.id,
      fx.degree.id,
    )
  }

  #[tokio::test]
  #[ignore = "requires docker"]
  async fn test_create_and_load_details() {
    let (pool, _container) = setup_test_db().await;
    let fx = fixture(&pool).await;
    let repo = PostgresApplicationRepository::new(pool);

    let created = repo.create(application(&fx)).await.unwrap();
    let details = repo.find_details_by_id(created.id).await.unwrap().unwrap();

    assert_eq!(details.school.name, "Sorbonne");
    assert_eq!(details.major.name, "Physics");
    assert_eq!(details.degree_type.name, "PhD");
    assert_eq!(details.user.email, "marie@example.com");
    assert_eq!(repo.list_details_for_user(fx.user.id).await.unwrap().len(), 1);
    assert_eq!(repo.list_details_for_user(Uuid::new_v4()).await.unwrap().len(), 0);
  }

  #[tokio::test]
  #[ignore = "requires docker"]
  async fn test_unknown_reference_is_rejected_by_database() {
    let (pool, _container) = setup_test_db().await;
    let fx = fixture(&pool).await;
    let repo = PostgresApplicationRepository::new(pool);

    let mut orphan = application(&fx);
    orphan.school_id = Uuid::new_v4();

    let result = repo.create(orphan).await;
    assert!(matches!(
      result,
      Err(AdmissionsError::Repository(RepositoryError::ForeignKey(_)))
    ));
  }

  #[tokio::test]
  #[ignore = "requires docker"]
  async fn test_deleting_user_cascades_to_applications() {
    let (pool, _container) = setup_test_db().await;
    let fx = fixture(&pool).await;
    let repo = PostgresApplicationRepository::new(pool.clone());
    let users = PostgresUserRepository::new(pool);

    let created = repo.create(application(&fx)).await.unwrap();
    users.delete(fx.user.id).await.unwrap();

    assert!(repo.find_by_id(created.id).await.unwrap().is_none());
    assert!(matches!(
      repo.delete(created.id).await,
      Err(AdmissionsError::ApplicationNotFound)
    ));
  }
}
