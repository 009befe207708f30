use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::account::errors::RepositoryError;
use crate::domain::admissions::{
  entities::{CatalogEntry, CatalogKind},
  ports::CatalogRepository,
};

/// PostgreSQL implementation of the CatalogRepository trait
///
/// Schools, majors and degree types share one shape, so a single
/// repository serves all three tables.
pub struct PostgresCatalogRepository {
  pool: PgPool,
}

impl PostgresCatalogRepository {
  pub fn new(pool: PgPool) -> Self {
    Self { pool }
  }
}

#[derive(Debug, sqlx::FromRow)]
struct CatalogRow {
  id: Uuid,
  name: String,
}

impl From<CatalogRow> for CatalogEntry {
  fn from(row: CatalogRow) -> Self {
    CatalogEntry {
      id: row.id,
      name: row.name,
    }
  }
}

pub(crate) fn table_name(kind: CatalogKind) -> &'static str {
  match kind {
    CatalogKind::School => "schools",
    CatalogKind::Major => "majors",
    CatalogKind::DegreeType => "degree_types",
  }
}

#[async_trait]
impl CatalogRepository for PostgresCatalogRepository {
  async fn exists(&self, kind: CatalogKind, id: Uuid) -> Result<bool, RepositoryError> {
    let query = format!(
      "SELECT EXISTS (SELECT 1 FROM {} WHERE id = $1)",
      table_name(kind)
    );

    let exists: bool = sqlx::query_scalar(&query)
      .bind(id)
      .fetch_one(&self.pool)
      .await?;

    Ok(exists)
  }

  async fn list(&self, kind: CatalogKind) -> Result<Vec<CatalogEntry>, RepositoryError> {
    let query = format!("SELECT id, name FROM {} ORDER BY name ASC", table_name(kind));

    let rows = sqlx::query_as::<_, CatalogRow>(&query)
      .fetch_all(&self.pool)
      .await?;

    Ok(rows.into_iter().map(CatalogEntry::from).collect())
  }

  async fn create(
    &self,
    kind: CatalogKind,
    entry: CatalogEntry,
  ) -> Result<CatalogEntry, RepositoryError> {
    let query = format!(
      "INSERT INTO {} (id, name) VALUES ($1, $2) RETURNING id, name",
      table_name(kind)
    );

    let row = sqlx::query_as::<_, CatalogRow>(&query)
      .bind(entry.id)
      .bind(&entry.name)
      .fetch_one(&self.pool)
      .await?;

    Ok(row.into())
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::domain::admissions::value_objects::CatalogName;
  use crate::infrastructure::persistence::postgres::test_db::setup_test_db;

  #[test]
  fn test_table_names() {
    assert_eq!(table_name(CatalogKind::School), "schools");
    assert_eq!(table_name(CatalogKind::Major), "majors");
    assert_eq!(table_name(CatalogKind::DegreeType), "degree_types");
  }

  #[tokio::test]
  #[ignore = "requires docker"]
  async fn test_create_list_and_exists() {
    let (pool, _container) = setup_test_db().await;
    let repo = PostgresCatalogRepository::new(pool);

    let zurich = repo
      .create(
        CatalogKind::School,
        CatalogEntry::new(CatalogName::new("ETH Zurich").unwrap()),
      )
      .await
      .unwrap();
    repo
      .create(
        CatalogKind::School,
        CatalogEntry::new(CatalogName::new("Caltech").unwrap()),
      )
      .await
      .unwrap();

    let names: Vec<String> = repo
      .list(CatalogKind::School)
      .await
      .unwrap()
      .into_iter()
      .map(|e| e.name)
      .collect();
    assert_eq!(names, vec!["Caltech", "ETH Zurich"]);

    assert!(repo.exists(CatalogKind::School, zurich.id).await.unwrap());
    assert!(!repo.exists(CatalogKind::Major, zurich.id).await.unwrap());
  }

  #[tokio::test]
  #[ignore = "requires docker"]
  async fn test_duplicate_name_is_duplicate_key() {
    let (pool, _container) = setup_test_db().await;
    let repo = PostgresCatalogRepository::new(pool);

    let name = || CatalogEntry::new(CatalogName::new("Physics").unwrap());
    repo.create(CatalogKind::Major, name()).await.unwrap();

    let result = repo.create(CatalogKind::Major, name()).await;
    assert!(matches!(result, Err(RepositoryError::DuplicateKey(_))));
  }
}
