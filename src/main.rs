mod api;
mod database;
mod middleware;
mod models;
mod services;
mod utils;

use actix_cors::Cors;
use actix_web::{guard, middleware::Logger, web, App, HttpServer};
use dotenv::dotenv;
use std::env;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    // Get configuration from environment
    let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = env::var("PORT").unwrap_or_else(|_| "5000".to_string());
    let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set");

    log::info!("🚀 Starting Class Booking Service...");

    // Initialize MongoDB connection
    let db = database::MongoDB::new(&database_url)
        .await
        .expect("Failed to connect to MongoDB");

    let db_data = web::Data::new(db.clone());

    log::info!("✅ MongoDB connected successfully");
    log::info!("🌐 Server starting on {}:{}", host, port);
    log::info!("📚 Swagger UI available at: http://{}:{}/swagger-ui/", host, port);

    // Start HTTP server
    HttpServer::new(move || {
        // O frontend hospedado chama a API de qualquer origem
        let cors = Cors::default()
            .allow_any_origin()
            .allow_any_method()
            .allow_any_header();

        // Generate OpenAPI specification
        let openapi = api::swagger::ApiDoc::openapi();

        App::new()
            .app_data(db_data.clone())
            .wrap(cors)
            .wrap(Logger::default())
            // Swagger UI
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", openapi.clone()),
            )
            // Liveness & health
            .route("/", web::get().to(api::health::index))
            .route("/health", web::get().to(api::health::health_check))
            // Token issuing
            .route("/jwt", web::post().to(api::auth::issue_jwt))
            // Users: cadastro e promoção abertos; checagem de papel exige
            // bearer token do próprio usuário
            .route("/users", web::get().to(api::users::get_users))
            .route("/users", web::post().to(api::users::create_user))
            // A resource com guard de GET vem antes da rota de PATCH no
            // mesmo padrão de path, senão o PATCH engole os GETs
            .service(
                web::resource("/users/admin/{email}")
                    .guard(guard::Get())
                    .wrap(middleware::AuthMiddleware)
                    .route(web::get().to(api::users::check_admin)),
            )
            .route("/users/admin/{id}", web::patch().to(api::users::make_admin))
            .service(
                web::resource("/users/instructor/{email}")
                    .guard(guard::Get())
                    .wrap(middleware::AuthMiddleware)
                    .route(web::get().to(api::users::check_instructor)),
            )
            .route(
                "/users/instructor/{id}",
                web::patch().to(api::users::make_instructor),
            )
            .service(
                web::resource("/users/student/{email}")
                    .wrap(middleware::AuthMiddleware)
                    .route(web::get().to(api::users::check_student)),
            )
            // Classes
            .route("/classes", web::get().to(api::classes::get_classes))
            .route("/classes", web::post().to(api::classes::create_class))
            // Pending classes
            .route(
                "/pendingClassesDetails",
                web::get().to(api::pending_classes::get_pending_classes_details),
            )
            .route(
                "/pendingClasses",
                web::get().to(api::pending_classes::get_pending_classes),
            )
            .route(
                "/pendingClasses",
                web::post().to(api::pending_classes::post_pending_class),
            )
            .route(
                "/pendingClasses",
                web::put().to(api::pending_classes::put_pending_class),
            )
            .route(
                "/pendingClass/approve/{id}",
                web::patch().to(api::pending_classes::approve_pending_class),
            )
            .route(
                "/pendingClass/deny/{id}",
                web::patch().to(api::pending_classes::deny_pending_class),
            )
            .route(
                "/pendingClass/feedback/{id}",
                web::patch().to(api::pending_classes::feedback_pending_class),
            )
            // Selected items: somente a leitura é protegida
            .service(
                web::resource("/selectedItems")
                    .guard(guard::Get())
                    .wrap(middleware::AuthMiddleware)
                    .route(web::get().to(api::selected_items::get_selected_items)),
            )
            .route(
                "/selectedItems",
                web::post().to(api::selected_items::post_selected_item),
            )
            .route(
                "/selectedItems/{id}",
                web::delete().to(api::selected_items::delete_selected_item),
            )
            // Payments
            .service(
                web::resource("/create-payment-intent")
                    .wrap(middleware::AuthMiddleware)
                    .route(web::post().to(api::payments::create_payment_intent)),
            )
            .route("/payments", web::post().to(api::payments::record_payment))
            .route("/payments", web::get().to(api::payments::get_payments))
    })
    .bind(format!("{}:{}", host, port))?
    .run()
    .await
}
