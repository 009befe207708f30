use actix_web::{HttpRequest, HttpResponse, web};
use std::sync::Arc;
use validator::Validate;

use crate::adapters::http::{
  dtos::{CatalogEntryRequest, CatalogEntryResponse},
  errors::ApiError,
  middleware::AuthUser,
};
use crate::application::admissions::{
  CreateCatalogEntryCommand, CreateCatalogEntryUseCase, ListCatalogUseCase,
};
use crate::domain::admissions::entities::CatalogKind;

// Each catalog scope registers its own `CatalogKind` as app data, so one
// pair of handlers serves /schools, /majors and /degree-types.

/// GET /schools, /majors, /degree-types
pub async fn list_catalog_handler(
  kind: web::Data<CatalogKind>,
  use_case: web::Data<Arc<ListCatalogUseCase>>,
) -> Result<HttpResponse, ApiError> {
  let entries = use_case.execute(**kind).await?;
  let body: Vec<CatalogEntryResponse> = entries
    .into_iter()
    .map(CatalogEntryResponse::from)
    .collect();

  Ok(HttpResponse::Ok().json(body))
}

/// POST /schools, /majors, /degree-types (admin only)
pub async fn create_catalog_entry_handler(
  req: HttpRequest,
  kind: web::Data<CatalogKind>,
  request: web::Json<CatalogEntryRequest>,
  use_case: web::Data<Arc<CreateCatalogEntryUseCase>>,
) -> Result<HttpResponse, ApiError> {
  let requester = req.requester()?;
  request.validate()?;

  let entry = use_case
    .execute(
      &requester,
      CreateCatalogEntryCommand {
        kind: **kind,
        name: request.into_inner().name,
      },
    )
    .await?;

  Ok(HttpResponse::Created().json(CatalogEntryResponse::from(entry)))
}
