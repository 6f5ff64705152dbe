use actix_web::{
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    Error, HttpMessage,
};
use futures::future::LocalBoxFuture;
use std::future::{ready, Ready};

use crate::services::token_service;
use crate::utils::error::AppError;

pub use crate::services::token_service::Claims;

pub struct AuthMiddleware;

impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = AuthMiddlewareService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthMiddlewareService { service }))
    }
}

pub struct AuthMiddlewareService<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for AuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        // Get Authorization header
        let auth_header = req.headers().get("Authorization");

        match auth_header {
            Some(header_value) => {
                let token = header_value
                    .to_str()
                    .ok()
                    .and_then(|header_str| header_str.strip_prefix("Bearer "));

                match token {
                    Some(token) => match token_service::verify_token(token) {
                        Ok(claims) => {
                            req.extensions_mut().insert(claims);

                            let fut = self.service.call(req);
                            Box::pin(async move {
                                let res = fut.await?;
                                Ok(res)
                            })
                        }
                        Err(e) => {
                            log::warn!("❌ Token rejected: {}", e);
                            Box::pin(async move { Err(AppError::InvalidToken.into()) })
                        }
                    },
                    // Header presente mas fora do formato "Bearer <token>"
                    None => Box::pin(async move { Err(AppError::InvalidToken.into()) }),
                }
            }
            None => Box::pin(async move { Err(AppError::MissingToken.into()) }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::{test, web, App, HttpResponse};
    use serde_json::json;

    async fn echo_email(user: web::ReqData<Claims>) -> HttpResponse {
        HttpResponse::Ok().json(json!({ "email": user.email.clone() }))
    }

    macro_rules! protected_app {
        () => {
            test::init_service(App::new().service(
                web::resource("/protected")
                    .wrap(AuthMiddleware)
                    .route(web::get().to(echo_email)),
            ))
            .await
        };
    }

    #[actix_web::test]
    async fn test_missing_header_is_401() {
        std::env::set_var("ACCESS_TOKEN", "test-secret");
        let app = protected_app!();

        let req = test::TestRequest::get().uri("/protected").to_request();
        let res = app.call(req).await;

        let err = res.expect_err("request without token must be rejected");
        assert_eq!(
            err.as_response_error().status_code(),
            StatusCode::UNAUTHORIZED
        );

        let body = actix_web::body::to_bytes(err.error_response().into_body())
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(body["error"], "unauthorized access!");
    }

    #[actix_web::test]
    async fn test_garbage_token_is_403() {
        std::env::set_var("ACCESS_TOKEN", "test-secret");
        let app = protected_app!();

        let req = test::TestRequest::get()
            .uri("/protected")
            .insert_header(("Authorization", "Bearer not-a-jwt"))
            .to_request();
        let res = app.call(req).await;

        let err = res.expect_err("invalid token must be rejected");
        assert_eq!(err.as_response_error().status_code(), StatusCode::FORBIDDEN);
    }

    #[actix_web::test]
    async fn test_valid_token_reaches_handler() {
        std::env::set_var("ACCESS_TOKEN", "test-secret");
        let app = protected_app!();

        let token = token_service::issue_token(&json!({ "email": "ana@example.com" })).unwrap();
        let req = test::TestRequest::get()
            .uri("/protected")
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .to_request();
        let res = app.call(req).await.unwrap();

        assert_eq!(res.status(), StatusCode::OK);
        let body: serde_json::Value = test::read_body_json(res).await;
        assert_eq!(body["email"], "ana@example.com");
    }
}
