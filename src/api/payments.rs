use actix_web::{web, HttpResponse, ResponseError};
use serde::Deserialize;

use crate::{
    database::MongoDB,
    models::Payment,
    services::{payment_service, stripe_service},
    utils::error::AppError,
};

#[derive(Debug, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatePaymentIntentRequest {
    pub total_price: f64,
}

#[derive(Debug, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct EmailQuery {
    pub email: String,
}

/// POST /create-payment-intent - pede ao gateway uma autorização para o
/// total do carrinho e devolve o client secret.
#[utoipa::path(
    post,
    path = "/create-payment-intent",
    tag = "Payments",
    request_body = CreatePaymentIntentRequest,
    responses(
        (status = 200, description = "Gateway client secret"),
        (status = 400, description = "Zero amount"),
        (status = 500, description = "Gateway failure")
    ),
    security(("bearer_auth" = []))
)]
pub async fn create_payment_intent(request: web::Json<CreatePaymentIntentRequest>) -> HttpResponse {
    let amount = stripe_service::to_minor_units(request.total_price);
    log::info!("💳 POST /create-payment-intent - amount: {} cents", amount);

    // Amount zero não tem o que autorizar; corta com 400 antes de chamar o
    // gateway
    if amount == 0 {
        return AppError::InvalidRequest("totalPrice must be greater than zero".to_string())
            .error_response();
    }

    match stripe_service::create_payment_intent(amount).await {
        Ok(client_secret) => {
            HttpResponse::Ok().json(serde_json::json!({ "clientSecret": client_secret }))
        }
        Err(e) => {
            log::error!("❌ Error creating payment intent: {}", e);
            AppError::PaymentError(e).error_response()
        }
    }
}

/// POST /payments - registra um pagamento confirmado (append-only)
#[utoipa::path(
    post,
    path = "/payments",
    tag = "Payments",
    request_body = Payment,
    responses(
        (status = 200, description = "Insert acknowledgement")
    )
)]
pub async fn record_payment(db: web::Data<MongoDB>, payment: web::Json<Payment>) -> HttpResponse {
    log::info!("💾 POST /payments - {} by {}", payment.amount, payment.email);

    match payment_service::record_payment(&db, payment.into_inner()).await {
        Ok(ack) => HttpResponse::Ok().json(ack),
        Err(e) => {
            log::error!("❌ Error recording payment: {}", e);
            AppError::DatabaseError(e).error_response()
        }
    }
}

/// GET /payments?email= - histórico de pagamentos de um usuário
#[utoipa::path(
    get,
    path = "/payments",
    tag = "Payments",
    responses(
        (status = 200, description = "Payments recorded for the given email", body = [Payment])
    )
)]
pub async fn get_payments(db: web::Data<MongoDB>, query: web::Query<EmailQuery>) -> HttpResponse {
    log::info!("📋 GET /payments - email: {}", query.email);

    match payment_service::list_by_email(&db, &query.email).await {
        Ok(payments) => HttpResponse::Ok().json(payments),
        Err(e) => {
            log::error!("❌ Error listing payments: {}", e);
            AppError::DatabaseError(e).error_response()
        }
    }
}
