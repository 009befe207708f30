use actix_web::{
  HttpRequest, HttpResponse, ResponseError,
  http::header::{self, HeaderValue},
  web,
};
use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

use crate::adapters::http::{
  dtos::{
    LoginRequest, LoginResponse, RegisterRequest, SuccessResponse, UpdateUserRequest,
    UserResponse,
  },
  errors::ApiError,
  middleware::AuthUser,
};
use crate::application::account::{
  DeleteUserUseCase, GetUserUseCase, ListUsersUseCase, LoginUserCommand, LoginUserUseCase,
  RegisterUserCommand, RegisterUserUseCase, UpdateUserCommand, UpdateUserUseCase,
};

/// Handler for user login
///
/// POST /users/login
/// Body: LoginRequest (JSON)
/// Response: LoginResponse (JSON) with status 200
pub async fn login_handler(
  request: web::Json<LoginRequest>,
  use_case: web::Data<Arc<LoginUserUseCase>>,
) -> Result<HttpResponse, ApiError> {
  request.validate()?;

  let request = request.into_inner();
  let response = use_case
    .execute(LoginUserCommand {
      email: request.email,
      password: request.password,
    })
    .await?;

  Ok(HttpResponse::Ok().json(LoginResponse {
    token: response.token,
    expires_at: response.expires_at,
  }))
}

/// Handler for user registration
///
/// POST /users
/// Body: RegisterRequest (JSON)
/// Response: UserResponse (JSON) with status 201
pub async fn register_handler(
  request: web::Json<RegisterRequest>,
  use_case: web::Data<Arc<RegisterUserUseCase>>,
) -> Result<HttpResponse, ApiError> {
  request.validate()?;

  let request = request.into_inner();
  let user = use_case
    .execute(RegisterUserCommand {
      first_name: request.first_name,
      last_name: request.last_name,
      email: request.email,
      password: request.password,
    })
    .await?;

  Ok(HttpResponse::Created().json(UserResponse::from(user)))
}

/// GET /users (admin only)
pub async fn list_users_handler(
  req: HttpRequest,
  use_case: web::Data<Arc<ListUsersUseCase>>,
) -> Result<HttpResponse, ApiError> {
  let requester = req.requester()?;

  let users = use_case.execute(&requester).await?;
  let body: Vec<UserResponse> = users.into_iter().map(UserResponse::from).collect();

  Ok(HttpResponse::Ok().json(body))
}

/// GET /users/{id} (owner or admin)
pub async fn get_user_handler(
  req: HttpRequest,
  path: web::Path<Uuid>,
  use_case: web::Data<Arc<GetUserUseCase>>,
) -> Result<HttpResponse, ApiError> {
  let requester = req.requester()?;

  let user = use_case.execute(path.into_inner(), &requester).await?;

  Ok(HttpResponse::Ok().json(UserResponse::from(user)))
}

/// PUT|PATCH /users/{id} (owner only)
///
/// Only fields present in the body are changed.
pub async fn update_user_handler(
  req: HttpRequest,
  path: web::Path<Uuid>,
  request: web::Json<UpdateUserRequest>,
  use_case: web::Data<Arc<UpdateUserUseCase>>,
) -> Result<HttpResponse, ApiError> {
  let requester = req.requester()?;
  request.validate()?;

  let request = request.into_inner();
  let command = UpdateUserCommand {
    first_name: request.first_name,
    last_name: request.last_name,
    email: request.email,
    undergrad_school_id: request.undergrad_school_id,
    undergrad_major_id: request.undergrad_major_id,
    undergrad_gpa: request.undergrad_gpa,
    top_extracurriculars: request.top_extracurriculars,
    gre_scores: request.gre_scores,
  };

  let user = use_case
    .execute(path.into_inner(), &requester, command)
    .await?;

  Ok(HttpResponse::Ok().json(UserResponse::from(user)))
}

/// DELETE /users/{id} (owner only)
pub async fn delete_user_handler(
  req: HttpRequest,
  path: web::Path<Uuid>,
  use_case: web::Data<Arc<DeleteUserUseCase>>,
) -> Result<HttpResponse, ApiError> {
  let requester = req.requester()?;

  use_case.execute(path.into_inner(), &requester).await?;

  Ok(HttpResponse::Ok().json(SuccessResponse {
    message: "User deleted".to_string(),
  }))
}

/// Fallback for /users methods other than GET and POST
pub async fn collection_method_not_allowed() -> HttpResponse {
  let mut response = ApiError::MethodNotAllowed.error_response();
  response
    .headers_mut()
    .insert(header::ALLOW, HeaderValue::from_static("GET, POST"));
  response
}
