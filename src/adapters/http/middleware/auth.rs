use actix_web::{
  Error, HttpMessage, HttpRequest, ResponseError,
  body::EitherBody,
  dev::{Service, ServiceRequest, ServiceResponse, Transform, forward_ready},
};
use futures_util::future::LocalBoxFuture;
use std::{
  future::{Ready, ready},
  rc::Rc,
  sync::Arc,
};

use crate::{
  adapters::http::errors::{ApiError, AuthErrorKind},
  application::account::AuthenticateRequestUseCase,
  domain::account::entities::Requester,
};

/// Authentication middleware that validates bearer tokens and attaches the requester
///
/// This middleware:
/// 1. Extracts the token from the `Authorization: Bearer` header
/// 2. Resolves it to a still-existing user via `AuthenticateRequestUseCase`
/// 3. Attaches the `Requester` to request extensions for downstream handlers
/// 4. Returns 401 Unauthorized if the token is missing, invalid or expired
///
/// # Example
///
/// ```no_run
/// use actix_web::{App, web};
/// use std::sync::Arc;
/// # use gradtrack::application::account::AuthenticateRequestUseCase;
/// # use gradtrack::adapters::http::middleware::auth::AuthMiddleware;
///
/// # async fn example(authenticate: Arc<AuthenticateRequestUseCase>) {
/// let app = App::new().service(
///   web::resource("/protected")
///     .wrap(AuthMiddleware::new(authenticate))
///     .route(web::get().to(|| async { "Protected endpoint" })),
/// );
/// # }
/// ```
#[derive(Clone)]
pub struct AuthMiddleware {
  authenticate: Arc<AuthenticateRequestUseCase>,
}

impl AuthMiddleware {
  pub fn new(authenticate: Arc<AuthenticateRequestUseCase>) -> Self {
    Self { authenticate }
  }
}

impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
  S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
  S::Future: 'static,
  B: 'static,
{
  type Response = ServiceResponse<EitherBody<B>>;
  type Error = Error;
  type Transform = AuthMiddlewareService<S>;
  type InitError = ();
  type Future = Ready<Result<Self::Transform, Self::InitError>>;

  fn new_transform(&self, service: S) -> Self::Future {
    ready(Ok(AuthMiddlewareService {
      service: Rc::new(service),
      authenticate: self.authenticate.clone(),
    }))
  }
}

pub struct AuthMiddlewareService<S> {
  service: Rc<S>,
  authenticate: Arc<AuthenticateRequestUseCase>,
}

impl<S, B> Service<ServiceRequest> for AuthMiddlewareService<S>
where
  S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
  S::Future: 'static,
  B: 'static,
{
  type Response = ServiceResponse<EitherBody<B>>;
  type Error = Error;
  type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

  forward_ready!(service);

  fn call(&self, req: ServiceRequest) -> Self::Future {
    let service = Rc::clone(&self.service);
    let authenticate = self.authenticate.clone();

    Box::pin(async move {
      let requester = match extract_bearer_token(&req) {
        Ok(token) => authenticate.execute(&token).await.map_err(ApiError::from),
        Err(e) => Err(e),
      };

      let requester = match requester {
        Ok(requester) => requester,
        Err(e) => {
          tracing::debug!(path = %req.path(), "Rejected unauthenticated request");
          let (request, _) = req.into_parts();
          let response = e.error_response().map_into_right_body();
          return Ok(ServiceResponse::new(request, response));
        }
      };

      req.extensions_mut().insert(requester);

      let res = service.call(req).await?;
      Ok(res.map_into_left_body())
    })
  }
}

/// Extract bearer token from Authorization header
fn extract_bearer_token(req: &ServiceRequest) -> Result<String, ApiError> {
  req
    .headers()
    .get("Authorization")
    .and_then(|h| h.to_str().ok())
    .and_then(|s| s.strip_prefix("Bearer "))
    .map(str::trim)
    .filter(|s| !s.is_empty())
    .map(|s| s.to_string())
    .ok_or(ApiError::Auth(AuthErrorKind::InvalidToken))
}

/// Extension trait to extract the authenticated requester from a request
pub trait AuthUser {
  /// Returns the requester attached by `AuthMiddleware`, or an
  /// `InvalidToken` error on routes the middleware does not wrap
  fn requester(&self) -> Result<Requester, ApiError>;
}

impl AuthUser for HttpRequest {
  fn requester(&self) -> Result<Requester, ApiError> {
    self
      .extensions()
      .get::<Requester>()
      .copied()
      .ok_or(ApiError::Auth(AuthErrorKind::InvalidToken))
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use actix_web::test::TestRequest;

  #[test]
  fn test_extract_bearer_token_valid() {
    let req = TestRequest::default()
      .insert_header(("Authorization", "Bearer test_token_123"))
      .to_srv_request();

    let token = extract_bearer_token(&req).unwrap();
    assert_eq!(token, "test_token_123");
  }

  #[test]
  fn test_extract_bearer_token_missing_or_empty() {
    let req = TestRequest::default().to_srv_request();
    assert!(extract_bearer_token(&req).is_err());

    let req = TestRequest::default()
      .insert_header(("Authorization", "Bearer   "))
      .to_srv_request();
    assert!(extract_bearer_token(&req).is_err());
  }

  #[test]
  fn test_extract_bearer_token_invalid_format() {
    let req = TestRequest::default()
      .insert_header(("Authorization", "Basic dXNlcjpwYXNz"))
      .to_srv_request();

    let result = extract_bearer_token(&req);
    assert!(result.is_err());
  }

  #[test]
  fn test_requester_missing_without_middleware() {
    let req = TestRequest::default().to_http_request();
    assert!(matches!(
      req.requester(),
      Err(ApiError::Auth(AuthErrorKind::InvalidToken))
    ));
  }
}
