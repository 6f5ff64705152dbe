use actix_web::{web, HttpResponse, ResponseError};

use crate::{
    database::MongoDB, models::Class, services::class_service, utils::error::AppError,
};

/// GET /classes - catálogo completo de turmas
#[utoipa::path(
    get,
    path = "/classes",
    tag = "Classes",
    responses(
        (status = 200, description = "All published classes", body = [Class])
    )
)]
pub async fn get_classes(db: web::Data<MongoDB>) -> HttpResponse {
    log::info!("📋 GET /classes");

    match class_service::list_classes(&db).await {
        Ok(classes) => HttpResponse::Ok().json(classes),
        Err(e) => {
            log::error!("❌ Error listing classes: {}", e);
            AppError::DatabaseError(e).error_response()
        }
    }
}

/// POST /classes - publica uma turma no catálogo
#[utoipa::path(
    post,
    path = "/classes",
    tag = "Classes",
    request_body = Class,
    responses(
        (status = 200, description = "Insert acknowledgement")
    )
)]
pub async fn create_class(db: web::Data<MongoDB>, class: web::Json<Class>) -> HttpResponse {
    log::info!("📝 POST /classes - {}", class.name);

    match class_service::create_class(&db, class.into_inner()).await {
        Ok(ack) => HttpResponse::Ok().json(ack),
        Err(e) => {
            log::error!("❌ Error creating class: {}", e);
            AppError::DatabaseError(e).error_response()
        }
    }
}
