//! Admissions use cases: applications and the school/major/degree catalog

mod create_application;
mod create_catalog_entry;
mod delete_application;
mod get_application;
mod list_applications;
mod list_catalog;
mod update_application;

pub use create_application::{CreateApplicationCommand, CreateApplicationUseCase};
pub use create_catalog_entry::{CreateCatalogEntryCommand, CreateCatalogEntryUseCase};
pub use delete_application::DeleteApplicationUseCase;
pub use get_application::GetApplicationUseCase;
pub use list_applications::ListApplicationsUseCase;
pub use list_catalog::ListCatalogUseCase;
pub use update_application::{UpdateApplicationCommand, UpdateApplicationUseCase};
