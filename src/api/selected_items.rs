use actix_web::{web, HttpResponse, ResponseError};
use serde::Deserialize;

use crate::{
    database::MongoDB,
    middleware::auth::Claims,
    models::SelectedItem,
    services::selected_item_service,
    utils::error::AppError,
};

#[derive(Debug, Deserialize, utoipa::IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct UserEmailQuery {
    pub user_email: String,
}

/// GET /selectedItems?userEmail= - carrinho do aluno; o token só enxerga o
/// próprio carrinho
#[utoipa::path(
    get,
    path = "/selectedItems",
    tag = "SelectedItems",
    responses(
        (status = 200, description = "Cart items for the given email", body = [SelectedItem]),
        (status = 403, description = "Token email does not match userEmail")
    ),
    security(("bearer_auth" = []))
)]
pub async fn get_selected_items(
    user: web::ReqData<Claims>,
    db: web::Data<MongoDB>,
    query: web::Query<UserEmailQuery>,
) -> HttpResponse {
    log::info!("🛒 GET /selectedItems - userEmail: {}", query.user_email);

    if user.email.as_deref() != Some(query.user_email.as_str()) {
        return AppError::Forbidden.error_response();
    }

    match selected_item_service::list_by_user_email(&db, &query.user_email).await {
        Ok(items) => HttpResponse::Ok().json(items),
        Err(e) => {
            log::error!("❌ Error listing selected items: {}", e);
            AppError::DatabaseError(e).error_response()
        }
    }
}

/// POST /selectedItems - adiciona uma turma ao carrinho
#[utoipa::path(
    post,
    path = "/selectedItems",
    tag = "SelectedItems",
    request_body = SelectedItem,
    responses(
        (status = 200, description = "Insert acknowledgement")
    )
)]
pub async fn post_selected_item(
    db: web::Data<MongoDB>,
    item: web::Json<SelectedItem>,
) -> HttpResponse {
    log::info!("🛒 POST /selectedItems - class {} for {}", item.class_id, item.user_email);

    match selected_item_service::add_item(&db, item.into_inner()).await {
        Ok(ack) => HttpResponse::Ok().json(ack),
        Err(e) => {
            log::error!("❌ Error adding selected item: {}", e);
            AppError::DatabaseError(e).error_response()
        }
    }
}

/// DELETE /selectedItems/{id} - remove do carrinho
#[utoipa::path(
    delete,
    path = "/selectedItems/{id}",
    tag = "SelectedItems",
    responses(
        (status = 200, description = "Delete acknowledgement")
    )
)]
pub async fn delete_selected_item(db: web::Data<MongoDB>, id: web::Path<String>) -> HttpResponse {
    log::info!("🗑️  DELETE /selectedItems/{}", id);

    match selected_item_service::remove_item(&db, &id).await {
        Ok(ack) => HttpResponse::Ok().json(ack),
        Err(e) => {
            log::error!("❌ Error removing selected item: {}", e);
            AppError::DatabaseError(e).error_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::middleware::AuthMiddleware;
    use crate::services::token_service;
    use actix_web::http::StatusCode;
    use actix_web::{test, App};
    use serde_json::json;

    #[actix_web::test]
    async fn test_mismatched_email_is_403_before_touching_store() {
        std::env::set_var("ACCESS_TOKEN", "test-secret");
        // Handle lazy: o teste passa sem MongoDB rodando porque o handler
        // rejeita antes de consultar a collection
        let db = MongoDB::connect_lazy("mongodb://localhost:27017")
            .await
            .unwrap();

        let app = test::init_service(
            App::new().app_data(web::Data::new(db)).service(
                web::resource("/selectedItems")
                    .wrap(AuthMiddleware)
                    .route(web::get().to(get_selected_items)),
            ),
        )
        .await;

        let token = token_service::issue_token(&json!({ "email": "ana@example.com" })).unwrap();
        let req = test::TestRequest::get()
            .uri("/selectedItems?userEmail=bea@example.com")
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::FORBIDDEN);
        let body: serde_json::Value = test::read_body_json(res).await;
        assert_eq!(body["error"], "forbidden access");
    }
}
