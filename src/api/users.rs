use actix_web::{web, HttpResponse, ResponseError};

use crate::{
    database::MongoDB,
    middleware::auth::Claims,
    models::{User, UserRole},
    services::user_service::{self, CreateUserOutcome},
    utils::error::AppError,
};

/// GET /users - lista todos os usuários
#[utoipa::path(
    get,
    path = "/users",
    tag = "Users",
    responses(
        (status = 200, description = "All registered users", body = [User])
    )
)]
pub async fn get_users(db: web::Data<MongoDB>) -> HttpResponse {
    log::info!("📋 GET /users");

    match user_service::list_users(&db).await {
        Ok(users) => HttpResponse::Ok().json(users),
        Err(e) => {
            log::error!("❌ Error listing users: {}", e);
            AppError::DatabaseError(e).error_response()
        }
    }
}

/// POST /users - cadastro idempotente por email: se o email já existe,
/// responde 200 com mensagem em vez de inserir.
#[utoipa::path(
    post,
    path = "/users",
    tag = "Users",
    request_body = User,
    responses(
        (status = 200, description = "Insert acknowledgement, or a message when the email already exists")
    )
)]
pub async fn create_user(db: web::Data<MongoDB>, user: web::Json<User>) -> HttpResponse {
    log::info!("📝 POST /users - email: {}", user.email);

    match user_service::create_user_if_absent(&db, user.into_inner()).await {
        Ok(CreateUserOutcome::AlreadyExists) => {
            HttpResponse::Ok().json(serde_json::json!({ "message": "user already exists" }))
        }
        Ok(CreateUserOutcome::Created(ack)) => HttpResponse::Ok().json(ack),
        Err(e) => {
            log::error!("❌ Error creating user: {}", e);
            AppError::DatabaseError(e).error_response()
        }
    }
}

/// PATCH /users/admin/{id} - promoção cega a admin
#[utoipa::path(
    patch,
    path = "/users/admin/{id}",
    tag = "Users",
    responses(
        (status = 200, description = "Update acknowledgement; matched/modified 0 when the id does not exist")
    )
)]
pub async fn make_admin(db: web::Data<MongoDB>, id: web::Path<String>) -> HttpResponse {
    log::info!("👑 PATCH /users/admin/{}", id);

    match user_service::promote_user(&db, &id, UserRole::Admin).await {
        Ok(ack) => HttpResponse::Ok().json(ack),
        Err(e) => {
            log::error!("❌ Error promoting user: {}", e);
            AppError::DatabaseError(e).error_response()
        }
    }
}

/// PATCH /users/instructor/{id} - promoção cega a instrutor
#[utoipa::path(
    patch,
    path = "/users/instructor/{id}",
    tag = "Users",
    responses(
        (status = 200, description = "Update acknowledgement; matched/modified 0 when the id does not exist")
    )
)]
pub async fn make_instructor(db: web::Data<MongoDB>, id: web::Path<String>) -> HttpResponse {
    log::info!("🎓 PATCH /users/instructor/{}", id);

    match user_service::promote_user(&db, &id, UserRole::Instructor).await {
        Ok(ack) => HttpResponse::Ok().json(ack),
        Err(e) => {
            log::error!("❌ Error promoting user: {}", e);
            AppError::DatabaseError(e).error_response()
        }
    }
}

/// GET /users/admin/{email} - o token só enxerga o próprio papel
#[utoipa::path(
    get,
    path = "/users/admin/{email}",
    tag = "Users",
    responses(
        (status = 200, description = "Whether the user is an admin"),
        (status = 403, description = "Token email does not match the requested email")
    ),
    security(("bearer_auth" = []))
)]
pub async fn check_admin(
    user: web::ReqData<Claims>,
    db: web::Data<MongoDB>,
    email: web::Path<String>,
) -> HttpResponse {
    let email = email.into_inner();
    log::info!("🔎 GET /users/admin/{}", email);

    if user.email.as_deref() != Some(email.as_str()) {
        return AppError::Forbidden.error_response();
    }

    match user_service::has_role(&db, &email, UserRole::Admin).await {
        Ok(is_admin) => HttpResponse::Ok().json(serde_json::json!({ "admin": is_admin })),
        Err(e) => {
            log::error!("❌ Error checking role: {}", e);
            AppError::DatabaseError(e).error_response()
        }
    }
}

/// GET /users/instructor/{email}
#[utoipa::path(
    get,
    path = "/users/instructor/{email}",
    tag = "Users",
    responses(
        (status = 200, description = "Whether the user is an instructor"),
        (status = 403, description = "Token email does not match the requested email")
    ),
    security(("bearer_auth" = []))
)]
pub async fn check_instructor(
    user: web::ReqData<Claims>,
    db: web::Data<MongoDB>,
    email: web::Path<String>,
) -> HttpResponse {
    let email = email.into_inner();
    log::info!("🔎 GET /users/instructor/{}", email);

    if user.email.as_deref() != Some(email.as_str()) {
        return AppError::Forbidden.error_response();
    }

    match user_service::has_role(&db, &email, UserRole::Instructor).await {
        Ok(is_instructor) => {
            HttpResponse::Ok().json(serde_json::json!({ "instructor": is_instructor }))
        }
        Err(e) => {
            log::error!("❌ Error checking role: {}", e);
            AppError::DatabaseError(e).error_response()
        }
    }
}

/// GET /users/student/{email}
#[utoipa::path(
    get,
    path = "/users/student/{email}",
    tag = "Users",
    responses(
        (status = 200, description = "Whether the user is a student"),
        (status = 403, description = "Token email does not match the requested email")
    ),
    security(("bearer_auth" = []))
)]
pub async fn check_student(
    user: web::ReqData<Claims>,
    db: web::Data<MongoDB>,
    email: web::Path<String>,
) -> HttpResponse {
    let email = email.into_inner();
    log::info!("🔎 GET /users/student/{}", email);

    if user.email.as_deref() != Some(email.as_str()) {
        return AppError::Forbidden.error_response();
    }

    match user_service::has_role(&db, &email, UserRole::Student).await {
        Ok(is_student) => HttpResponse::Ok().json(serde_json::json!({ "student": is_student })),
        Err(e) => {
            log::error!("❌ Error checking role: {}", e);
            AppError::DatabaseError(e).error_response()
        }
    }
}
