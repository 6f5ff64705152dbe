pub mod class_service;
pub mod payment_service;
pub mod pending_class_service;
pub mod selected_item_service;
pub mod stripe_service;
pub mod token_service;
pub mod user_service;
