pub mod dtos;
pub mod errors;
pub mod handlers;
pub mod middleware;
pub mod routes;

// Re-export commonly used types
pub use dtos::{ErrorResponse, LoginRequest, LoginResponse, RegisterRequest, UserResponse};
pub use errors::{ApiError, AuthErrorKind};
pub use middleware::{AuthMiddleware, AuthUser, RequestId, RequestIdExt, RequestIdMiddleware};
pub use routes::{
  configure_api, configure_application_routes, configure_catalog_routes, configure_user_routes,
};
