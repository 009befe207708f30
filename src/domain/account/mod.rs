pub mod entities;
pub mod errors;
pub mod policy;
pub mod ports;
pub mod services;
pub mod value_objects;

// Re-export commonly used types
pub use entities::{IssuedToken, Requester, User, UserUpdate};
pub use errors::{AccountError, HashError, RepositoryError, TokenError};
pub use policy::Decision;
pub use value_objects::{Email, Gpa, GreScore, Password, PasswordHash, PersonName, ValueObjectError};
