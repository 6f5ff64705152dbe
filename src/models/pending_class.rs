use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// Documento da collection "pendingClasses" - propostas de turma aguardando
/// revisão do admin. Mesmo shape de Class mais status, feedback e o email
/// do instrutor que submeteu.
#[derive(Debug, Serialize, Deserialize, Clone, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PendingClass {
    #[serde(
        rename = "_id",
        skip_serializing_if = "Option::is_none",
        default,
        serialize_with = "super::serialize_oid_hex"
    )]
    #[schema(value_type = Option<String>)]
    pub id: Option<ObjectId>,
    pub name: String,
    pub image: String,
    pub instructor_name: String,
    pub instructor_email: String,
    pub email: String,
    pub available_seats: i32,
    pub price: f64,
    #[serde(default)]
    pub status: ClassStatus,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub feedback: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default, utoipa::ToSchema)]
pub enum ClassStatus {
    #[default]
    Pending,
    Approved,
    Denied,
}

impl ClassStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ClassStatus::Pending => "Pending",
            ClassStatus::Approved => "Approved",
            ClassStatus::Denied => "Denied",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_defaults_to_pending() {
        let pending: PendingClass = serde_json::from_str(
            r#"{
                "name": "Jazz Improv",
                "image": "https://example.com/jazz.jpg",
                "instructorName": "Joao Lima",
                "instructorEmail": "joao@example.com",
                "email": "joao@example.com",
                "availableSeats": 8,
                "price": 120.5
            }"#,
        )
        .unwrap();
        assert_eq!(pending.status, ClassStatus::Pending);
        assert!(pending.feedback.is_none());
    }

    #[test]
    fn test_status_round_trip() {
        let value = serde_json::to_value(ClassStatus::Denied).unwrap();
        assert_eq!(value, serde_json::json!("Denied"));
        assert_eq!(ClassStatus::Approved.as_str(), "Approved");
    }
}
