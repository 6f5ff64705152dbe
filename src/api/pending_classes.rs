use actix_web::{web, HttpResponse, ResponseError};
use serde::Deserialize;

use crate::{
    database::MongoDB,
    models::{ClassStatus, PendingClass},
    services::pending_class_service::{self, FeedbackRequest, UpdatePendingClassRequest},
    utils::error::AppError,
};

#[derive(Debug, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct EmailQuery {
    pub email: String,
}

/// GET /pendingClassesDetails - todas as propostas, para o painel do admin
#[utoipa::path(
    get,
    path = "/pendingClassesDetails",
    tag = "PendingClasses",
    responses(
        (status = 200, description = "All submitted class proposals", body = [PendingClass])
    )
)]
pub async fn get_pending_classes_details(db: web::Data<MongoDB>) -> HttpResponse {
    log::info!("📋 GET /pendingClassesDetails");

    match pending_class_service::list_all(&db).await {
        Ok(pending) => HttpResponse::Ok().json(pending),
        Err(e) => {
            log::error!("❌ Error listing pending classes: {}", e);
            AppError::DatabaseError(e).error_response()
        }
    }
}

/// GET /pendingClasses?email= - propostas de um instrutor
#[utoipa::path(
    get,
    path = "/pendingClasses",
    tag = "PendingClasses",
    responses(
        (status = 200, description = "Proposals submitted by the given email", body = [PendingClass])
    )
)]
pub async fn get_pending_classes(
    db: web::Data<MongoDB>,
    query: web::Query<EmailQuery>,
) -> HttpResponse {
    log::info!("📋 GET /pendingClasses - email: {}", query.email);

    match pending_class_service::list_by_email(&db, &query.email).await {
        Ok(pending) => HttpResponse::Ok().json(pending),
        Err(e) => {
            log::error!("❌ Error listing pending classes: {}", e);
            AppError::DatabaseError(e).error_response()
        }
    }
}

/// POST /pendingClasses - submete uma proposta (status nasce Pending)
#[utoipa::path(
    post,
    path = "/pendingClasses",
    tag = "PendingClasses",
    request_body = PendingClass,
    responses(
        (status = 200, description = "Insert acknowledgement")
    )
)]
pub async fn post_pending_class(
    db: web::Data<MongoDB>,
    pending: web::Json<PendingClass>,
) -> HttpResponse {
    log::info!("📝 POST /pendingClasses - {} by {}", pending.name, pending.email);

    match pending_class_service::submit(&db, pending.into_inner()).await {
        Ok(ack) => HttpResponse::Ok().json(ack),
        Err(e) => {
            log::error!("❌ Error submitting pending class: {}", e);
            AppError::DatabaseError(e).error_response()
        }
    }
}

/// PUT /pendingClasses?email= - instrutor edita os campos da proposta
#[utoipa::path(
    put,
    path = "/pendingClasses",
    tag = "PendingClasses",
    request_body = UpdatePendingClassRequest,
    responses(
        (status = 200, description = "Update acknowledgement")
    )
)]
pub async fn put_pending_class(
    db: web::Data<MongoDB>,
    query: web::Query<EmailQuery>,
    request: web::Json<UpdatePendingClassRequest>,
) -> HttpResponse {
    log::info!("🔧 PUT /pendingClasses - email: {}", query.email);

    match pending_class_service::update_by_email(&db, &query.email, request.into_inner()).await {
        Ok(ack) => HttpResponse::Ok().json(ack),
        Err(e) => {
            log::error!("❌ Error updating pending class: {}", e);
            AppError::DatabaseError(e).error_response()
        }
    }
}

/// PATCH /pendingClass/approve/{id}
#[utoipa::path(
    patch,
    path = "/pendingClass/approve/{id}",
    tag = "PendingClasses",
    responses(
        (status = 200, description = "Update acknowledgement; repeated calls keep overwriting status")
    )
)]
pub async fn approve_pending_class(db: web::Data<MongoDB>, id: web::Path<String>) -> HttpResponse {
    log::info!("✅ PATCH /pendingClass/approve/{}", id);

    match pending_class_service::set_status(&db, &id, ClassStatus::Approved).await {
        Ok(ack) => HttpResponse::Ok().json(ack),
        Err(e) => {
            log::error!("❌ Error approving pending class: {}", e);
            AppError::DatabaseError(e).error_response()
        }
    }
}

/// PATCH /pendingClass/deny/{id}
#[utoipa::path(
    patch,
    path = "/pendingClass/deny/{id}",
    tag = "PendingClasses",
    responses(
        (status = 200, description = "Update acknowledgement; repeated calls keep overwriting status")
    )
)]
pub async fn deny_pending_class(db: web::Data<MongoDB>, id: web::Path<String>) -> HttpResponse {
    log::info!("🚫 PATCH /pendingClass/deny/{}", id);

    match pending_class_service::set_status(&db, &id, ClassStatus::Denied).await {
        Ok(ack) => HttpResponse::Ok().json(ack),
        Err(e) => {
            log::error!("❌ Error denying pending class: {}", e);
            AppError::DatabaseError(e).error_response()
        }
    }
}

/// PATCH /pendingClass/feedback/{id} - anexa feedback em qualquer status
#[utoipa::path(
    patch,
    path = "/pendingClass/feedback/{id}",
    tag = "PendingClasses",
    request_body = FeedbackRequest,
    responses(
        (status = 200, description = "Update acknowledgement")
    )
)]
pub async fn feedback_pending_class(
    db: web::Data<MongoDB>,
    id: web::Path<String>,
    request: web::Json<FeedbackRequest>,
) -> HttpResponse {
    log::info!("💬 PATCH /pendingClass/feedback/{}", id);

    match pending_class_service::set_feedback(&db, &id, &request.feedback).await {
        Ok(ack) => HttpResponse::Ok().json(ack),
        Err(e) => {
            log::error!("❌ Error saving feedback: {}", e);
            AppError::DatabaseError(e).error_response()
        }
    }
}
