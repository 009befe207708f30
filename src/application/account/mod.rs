//! Account use cases
//!
//! Commands carry raw request values; each use case parses them into
//! domain value objects before calling the account service.

mod authenticate_request;
mod delete_user;
mod ensure_admin;
mod get_user;
mod list_users;
mod login_user;
mod register_user;
mod update_user;

pub use authenticate_request::AuthenticateRequestUseCase;
pub use delete_user::DeleteUserUseCase;
pub use ensure_admin::{EnsureAdminCommand, EnsureAdminUseCase};
pub use get_user::GetUserUseCase;
pub use list_users::ListUsersUseCase;
pub use login_user::{LoginUserCommand, LoginUserResponse, LoginUserUseCase};
pub use register_user::{RegisterUserCommand, RegisterUserUseCase};
pub use update_user::{UpdateUserCommand, UpdateUserUseCase};
