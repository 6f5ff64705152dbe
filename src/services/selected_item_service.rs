// ==================== SELECTED ITEMS ====================
// Carrinho pré-pagamento. Sem integridade referencial com "classes": itens
// podem apontar para turmas removidas e não são limpos após o pagamento.

use crate::database::MongoDB;
use crate::models::{DeleteAck, InsertAck, SelectedItem};
use futures::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId};

pub async fn list_by_user_email(
    db: &MongoDB,
    user_email: &str,
) -> Result<Vec<SelectedItem>, String> {
    let collection = db.collection::<SelectedItem>("selectedItems");

    let mut cursor = collection
        .find(doc! { "userEmail": user_email })
        .await
        .map_err(|e| format!("Database error: {}", e))?;

    let mut items = Vec::new();
    while let Some(item) = cursor
        .try_next()
        .await
        .map_err(|e| format!("Database error: {}", e))?
    {
        items.push(item);
    }

    Ok(items)
}

pub async fn add_item(db: &MongoDB, item: SelectedItem) -> Result<InsertAck, String> {
    let collection = db.collection::<SelectedItem>("selectedItems");

    let result = collection
        .insert_one(&item)
        .await
        .map_err(|e| format!("Database error: {}", e))?;

    Ok(result.into())
}

pub async fn remove_item(db: &MongoDB, id: &str) -> Result<DeleteAck, String> {
    let collection = db.collection::<SelectedItem>("selectedItems");

    let oid = ObjectId::parse_str(id).map_err(|e| format!("Invalid id '{}': {}", id, e))?;

    let result = collection
        .delete_one(doc! { "_id": oid })
        .await
        .map_err(|e| format!("Database error: {}", e))?;

    Ok(result.into())
}
