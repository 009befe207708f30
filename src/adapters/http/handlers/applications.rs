use actix_web::{HttpRequest, HttpResponse, web};
use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

use crate::adapters::http::{
  dtos::{
    ApplicationResponse, CreateApplicationRequest, SuccessResponse, UpdateApplicationRequest,
  },
  errors::ApiError,
  middleware::AuthUser,
};
use crate::application::admissions::{
  CreateApplicationCommand, CreateApplicationUseCase, DeleteApplicationUseCase,
  GetApplicationUseCase, ListApplicationsUseCase, UpdateApplicationCommand,
  UpdateApplicationUseCase,
};

/// POST /applications
pub async fn create_application_handler(
  req: HttpRequest,
  request: web::Json<CreateApplicationRequest>,
  use_case: web::Data<Arc<CreateApplicationUseCase>>,
) -> Result<HttpResponse, ApiError> {
  let requester = req.requester()?;
  request.validate()?;

  let request = request.into_inner();
  let details = use_case
    .execute(
      &requester,
      CreateApplicationCommand {
        status: request.status,
        school_id: request.school_id,
        major_id: request.major_id,
        degree_id: request.degree_id,
      },
    )
    .await?;

  Ok(HttpResponse::Created().json(ApplicationResponse::from(details)))
}

/// GET /applications
///
/// Admins receive every application, other users their own.
pub async fn list_applications_handler(
  req: HttpRequest,
  use_case: web::Data<Arc<ListApplicationsUseCase>>,
) -> Result<HttpResponse, ApiError> {
  let requester = req.requester()?;

  let applications = use_case.execute(&requester).await?;
  let body: Vec<ApplicationResponse> = applications
    .into_iter()
    .map(ApplicationResponse::from)
    .collect();

  Ok(HttpResponse::Ok().json(body))
}

/// GET /applications/{id}
pub async fn get_application_handler(
  req: HttpRequest,
  path: web::Path<Uuid>,
  use_case: web::Data<Arc<GetApplicationUseCase>>,
) -> Result<HttpResponse, ApiError> {
  let requester = req.requester()?;

  let details = use_case.execute(path.into_inner(), &requester).await?;

  Ok(HttpResponse::Ok().json(ApplicationResponse::from(details)))
}

/// PUT|PATCH /applications/{id}
pub async fn update_application_handler(
  req: HttpRequest,
  path: web::Path<Uuid>,
  request: web::Json<UpdateApplicationRequest>,
  use_case: web::Data<Arc<UpdateApplicationUseCase>>,
) -> Result<HttpResponse, ApiError> {
  let requester = req.requester()?;
  request.validate()?;

  let request = request.into_inner();
  let details = use_case
    .execute(
      path.into_inner(),
      &requester,
      UpdateApplicationCommand {
        status: request.status,
        school_id: request.school_id,
        major_id: request.major_id,
        degree_id: request.degree_id,
      },
    )
    .await?;

  Ok(HttpResponse::Ok().json(ApplicationResponse::from(details)))
}

/// DELETE /applications/{id}
pub async fn delete_application_handler(
  req: HttpRequest,
  path: web::Path<Uuid>,
  use_case: web::Data<Arc<DeleteApplicationUseCase>>,
) -> Result<HttpResponse, ApiError> {
  let requester = req.requester()?;

  use_case.execute(path.into_inner(), &requester).await?;

  Ok(HttpResponse::Ok().json(SuccessResponse {
    message: "Application deleted".to_string(),
  }))
}
