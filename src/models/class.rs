use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// Documento da collection "classes" - turmas publicadas no catálogo
#[derive(Debug, Serialize, Deserialize, Clone, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Class {
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
    pub available_seats: i32,
    pub price: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_fields_are_camel_case() {
        let class = Class {
            id: None,
            name: "Beginner Vocals".to_string(),
            image: "https://example.com/vocals.jpg".to_string(),
            instructor_name: "Maria Souza".to_string(),
            instructor_email: "maria@example.com".to_string(),
            available_seats: 12,
            price: 79.0,
        };
        let value = serde_json::to_value(&class).unwrap();
        assert_eq!(value["availableSeats"], 12);
        assert_eq!(value["instructorEmail"], "maria@example.com");
        assert!(value.get("_id").is_none());
    }
}
