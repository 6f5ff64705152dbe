// ==================== CLASSES ====================
// Catálogo de turmas publicadas. Somente listagem e insert; a promoção de
// uma proposta aprovada para o catálogo é feita pelo admin re-postando aqui.

use crate::database::MongoDB;
use crate::models::{Class, InsertAck};
use futures::TryStreamExt;
use mongodb::bson::doc;

pub async fn list_classes(db: &MongoDB) -> Result<Vec<Class>, String> {
    let collection = db.collection::<Class>("classes");

    let mut cursor = collection
        .find(doc! {})
        .await
        .map_err(|e| format!("Database error: {}", e))?;

    let mut classes = Vec::new();
    while let Some(class) = cursor
        .try_next()
        .await
        .map_err(|e| format!("Database error: {}", e))?
    {
        classes.push(class);
    }

    Ok(classes)
}

pub async fn create_class(db: &MongoDB, class: Class) -> Result<InsertAck, String> {
    let collection = db.collection::<Class>("classes");

    let result = collection
        .insert_one(&class)
        .await
        .map_err(|e| format!("Database error: {}", e))?;

    Ok(result.into())
}
