pub mod entities;
pub mod errors;
pub mod ports;
pub mod services;
pub mod value_objects;

pub use entities::{
  ApplicantSummary, Application, ApplicationDetails, ApplicationUpdate, CatalogEntry, CatalogKind,
};
pub use errors::{AdmissionsError, ValidationError};
pub use services::AdmissionsService;
pub use value_objects::{ApplicationStatus, CatalogName};
