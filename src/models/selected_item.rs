use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// Documento da collection "selectedItems" - turma no carrinho de um aluno,
/// com os campos da turma desnormalizados para exibição.
#[derive(Debug, Serialize, Deserialize, Clone, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SelectedItem {
    #[serde(
        rename = "_id",
        skip_serializing_if = "Option::is_none",
        default,
        serialize_with = "super::serialize_oid_hex"
    )]
    #[schema(value_type = Option<String>)]
    pub id: Option<ObjectId>,
    pub class_id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub image: Option<String>,
    pub price: f64,
    pub user_email: String,
}
