pub mod auth;
pub mod classes;
pub mod health;
pub mod payments;
pub mod pending_classes;
pub mod selected_items;
pub mod swagger;
pub mod users;
