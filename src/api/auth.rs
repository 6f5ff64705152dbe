use actix_web::{web, HttpResponse};

use crate::services::token_service;

/// POST /jwt - assina as claims recebidas no body com validade de 1h.
/// O payload não é validado; qualquer objeto JSON vira claims.
#[utoipa::path(
    post,
    path = "/jwt",
    tag = "Auth",
    responses(
        (status = 200, description = "Signed bearer token"),
        (status = 500, description = "Signing failed")
    )
)]
pub async fn issue_jwt(payload: web::Json<serde_json::Value>) -> HttpResponse {
    log::info!("🔑 POST /jwt");

    match token_service::issue_token(&payload) {
        Ok(token) => HttpResponse::Ok().json(serde_json::json!({ "token": token })),
        Err(e) => {
            log::error!("❌ Failed to issue token: {}", e);
            HttpResponse::InternalServerError().json(serde_json::json!({ "error": e }))
        }
    }
}
