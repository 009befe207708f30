pub mod application_repository;
pub mod catalog_repository;
pub mod user_repository;

pub use application_repository::PostgresApplicationRepository;
pub use catalog_repository::PostgresCatalogRepository;
pub use user_repository::PostgresUserRepository;
