use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Class Booking Service API",
        version = "1.0.0",
        description = "Backend for the class booking app. \n\n**Authentication:** per-user reads and payment-intent creation require a JWT Bearer token issued by POST /jwt.\n\n**Features:**\n- User registration and role promotion\n- Class catalog\n- Instructor class proposals with admin review\n- Cart management\n- Stripe payment intents and payment history",
    ),
    paths(
        // Health
        crate::api::health::health_check,

        // Auth
        crate::api::auth::issue_jwt,

        // Users
        crate::api::users::get_users,
        crate::api::users::create_user,
        crate::api::users::make_admin,
        crate::api::users::make_instructor,
        crate::api::users::check_admin,
        crate::api::users::check_instructor,
        crate::api::users::check_student,

        // Classes
        crate::api::classes::get_classes,
        crate::api::classes::create_class,

        // Pending classes
        crate::api::pending_classes::get_pending_classes_details,
        crate::api::pending_classes::get_pending_classes,
        crate::api::pending_classes::post_pending_class,
        crate::api::pending_classes::put_pending_class,
        crate::api::pending_classes::approve_pending_class,
        crate::api::pending_classes::deny_pending_class,
        crate::api::pending_classes::feedback_pending_class,

        // Selected items
        crate::api::selected_items::get_selected_items,
        crate::api::selected_items::post_selected_item,
        crate::api::selected_items::delete_selected_item,

        // Payments
        crate::api::payments::create_payment_intent,
        crate::api::payments::record_payment,
        crate::api::payments::get_payments,
    ),
    components(
        schemas(
            crate::api::health::HealthResponse,
            crate::models::User,
            crate::models::UserRole,
            crate::models::Class,
            crate::models::PendingClass,
            crate::models::ClassStatus,
            crate::models::SelectedItem,
            crate::models::Payment,
            crate::models::InsertAck,
            crate::models::UpdateAck,
            crate::models::DeleteAck,
            crate::services::pending_class_service::UpdatePendingClassRequest,
            crate::services::pending_class_service::FeedbackRequest,
            crate::api::payments::CreatePaymentIntentRequest,
        )
    ),
    tags(
        (name = "Health", description = "Liveness and health check endpoints."),
        (name = "Auth", description = "Bearer token issuing. Claims are caller-supplied and signed as-is."),
        (name = "Users", description = "Registration, role promotion and per-user role checks."),
        (name = "Classes", description = "Published class catalog."),
        (name = "PendingClasses", description = "Instructor class proposals and admin review actions."),
        (name = "SelectedItems", description = "Student cart management."),
        (name = "Payments", description = "Stripe payment intents and recorded payments."),
    ),
    modifiers(&SecurityAddon)
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Enter your JWT token"))
                        .build(),
                ),
            );
        }
    }
}
