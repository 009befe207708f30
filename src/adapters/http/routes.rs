use actix_web::{guard, web};
use std::sync::Arc;

use crate::application::account::{
  AuthenticateRequestUseCase, DeleteUserUseCase, GetUserUseCase, ListUsersUseCase,
  LoginUserUseCase, RegisterUserUseCase, UpdateUserUseCase,
};
use crate::application::admissions::{
  CreateApplicationUseCase, CreateCatalogEntryUseCase, DeleteApplicationUseCase,
  GetApplicationUseCase, ListApplicationsUseCase, ListCatalogUseCase, UpdateApplicationUseCase,
};
use crate::domain::account::services::AccountService;
use crate::domain::admissions::entities::CatalogKind;
use crate::domain::admissions::services::AdmissionsService;

use super::errors::ApiError;
use super::handlers::{applications, catalog, health_check, users};
use super::middleware::AuthMiddleware;

/// Configure user routes
///
/// # Routes
///
/// - POST /login - Exchange email and password for a token
/// - POST / - Register a new account
/// - GET / - List all users (admin)
/// - GET /{id} - Read a user (owner or admin)
/// - PUT|PATCH /{id} - Partially update a user (owner)
/// - DELETE /{id} - Delete a user (owner)
///
/// Login and registration are public; everything else is wrapped in
/// `AuthMiddleware`. POST and GET on the collection are split into two
/// guarded resources so only the GET one requires a token; any other
/// method on the collection answers 405.
pub fn configure_user_routes(
  cfg: &mut web::ServiceConfig,
  accounts: Arc<AccountService>,
  authenticate: Arc<AuthenticateRequestUseCase>,
) {
  cfg
    .app_data(web::Data::new(Arc::new(LoginUserUseCase::new(accounts.clone()))))
    .app_data(web::Data::new(Arc::new(RegisterUserUseCase::new(accounts.clone()))))
    .app_data(web::Data::new(Arc::new(ListUsersUseCase::new(accounts.clone()))))
    .app_data(web::Data::new(Arc::new(GetUserUseCase::new(accounts.clone()))))
    .app_data(web::Data::new(Arc::new(UpdateUserUseCase::new(accounts.clone()))))
    .app_data(web::Data::new(Arc::new(DeleteUserUseCase::new(accounts))))
    .service(web::resource("/login").route(web::post().to(users::login_handler)))
    .service(
      web::resource("")
        .guard(guard::Post())
        .route(web::post().to(users::register_handler)),
    )
    .service(
      web::resource("")
        .guard(guard::Get())
        .wrap(AuthMiddleware::new(authenticate.clone()))
        .route(web::get().to(users::list_users_handler)),
    )
    .service(web::resource("").default_service(web::to(users::collection_method_not_allowed)))
    .service(
      web::resource("/{id}")
        .wrap(AuthMiddleware::new(authenticate))
        .route(web::get().to(users::get_user_handler))
        .route(web::put().to(users::update_user_handler))
        .route(web::patch().to(users::update_user_handler))
        .route(web::delete().to(users::delete_user_handler)),
    );
}

/// Configure application routes; every route requires a token
pub fn configure_application_routes(
  cfg: &mut web::ServiceConfig,
  admissions: Arc<AdmissionsService>,
  authenticate: Arc<AuthenticateRequestUseCase>,
) {
  cfg
    .app_data(web::Data::new(Arc::new(CreateApplicationUseCase::new(
      admissions.clone(),
    ))))
    .app_data(web::Data::new(Arc::new(ListApplicationsUseCase::new(
      admissions.clone(),
    ))))
    .app_data(web::Data::new(Arc::new(GetApplicationUseCase::new(
      admissions.clone(),
    ))))
    .app_data(web::Data::new(Arc::new(UpdateApplicationUseCase::new(
      admissions.clone(),
    ))))
    .app_data(web::Data::new(Arc::new(DeleteApplicationUseCase::new(
      admissions,
    ))))
    .service(
      web::resource("")
        .wrap(AuthMiddleware::new(authenticate.clone()))
        .route(web::get().to(applications::list_applications_handler))
        .route(web::post().to(applications::create_application_handler)),
    )
    .service(
      web::resource("/{id}")
        .wrap(AuthMiddleware::new(authenticate))
        .route(web::get().to(applications::get_application_handler))
        .route(web::put().to(applications::update_application_handler))
        .route(web::patch().to(applications::update_application_handler))
        .route(web::delete().to(applications::delete_application_handler)),
    );
}

/// Configure one catalog collection (schools, majors or degree types)
pub fn configure_catalog_routes(
  cfg: &mut web::ServiceConfig,
  kind: CatalogKind,
  admissions: Arc<AdmissionsService>,
  authenticate: Arc<AuthenticateRequestUseCase>,
) {
  cfg
    .app_data(web::Data::new(kind))
    .app_data(web::Data::new(Arc::new(ListCatalogUseCase::new(
      admissions.clone(),
    ))))
    .app_data(web::Data::new(Arc::new(CreateCatalogEntryUseCase::new(
      admissions,
    ))))
    .service(
      web::resource("")
        .wrap(AuthMiddleware::new(authenticate))
        .route(web::get().to(catalog::list_catalog_handler))
        .route(web::post().to(catalog::create_catalog_entry_handler)),
    );
}

/// Mounts the whole JSON API: users, applications, catalog and health
///
/// Malformed JSON bodies answer 400 and unparsable ids 404, both in the
/// regular `ErrorResponse` shape.
pub fn configure_api(
  cfg: &mut web::ServiceConfig,
  accounts: Arc<AccountService>,
  admissions: Arc<AdmissionsService>,
) {
  let authenticate = Arc::new(AuthenticateRequestUseCase::new(accounts.clone()));

  cfg
    .app_data(
      web::JsonConfig::default()
        .error_handler(|err, _req| ApiError::Validation(err.to_string()).into()),
    )
    .app_data(
      web::PathConfig::default()
        .error_handler(|_err, _req| ApiError::NotFound("Resource not found".to_string()).into()),
    )
    .route("/health", web::get().to(health_check))
    .service(web::scope("/users").configure(|cfg| {
      configure_user_routes(cfg, accounts.clone(), authenticate.clone())
    }))
    .service(web::scope("/applications").configure(|cfg| {
      configure_application_routes(cfg, admissions.clone(), authenticate.clone())
    }));

  for (path, kind) in [
    ("/schools", CatalogKind::School),
    ("/majors", CatalogKind::Major),
    ("/degree-types", CatalogKind::DegreeType),
  ] {
    cfg.service(web::scope(path).configure(|cfg| {
      configure_catalog_routes(cfg, kind, admissions.clone(), authenticate.clone())
    }));
  }
}
