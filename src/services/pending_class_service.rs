// ==================== PENDING CLASSES ====================
// Propostas de turma submetidas por instrutores. Aprovação, negação e
// feedback são patches independentes no mesmo documento: não há máquina de
// estados, chamadas repetidas ou fora de ordem fazem last-write-wins.

use crate::database::MongoDB;
use crate::models::{ClassStatus, InsertAck, PendingClass, UpdateAck};
use futures::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId};
use serde::Deserialize;

#[derive(Debug, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePendingClassRequest {
    pub name: String,
    pub image: String,
    pub available_seats: i32,
    pub price: f64,
}

#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct FeedbackRequest {
    pub feedback: String,
}

pub async fn list_all(db: &MongoDB) -> Result<Vec<PendingClass>, String> {
    find_pending(db, doc! {}).await
}

pub async fn list_by_email(db: &MongoDB, email: &str) -> Result<Vec<PendingClass>, String> {
    find_pending(db, doc! { "email": email }).await
}

async fn find_pending(
    db: &MongoDB,
    filter: mongodb::bson::Document,
) -> Result<Vec<PendingClass>, String> {
    let collection = db.collection::<PendingClass>("pendingClasses");

    let mut cursor = collection
        .find(filter)
        .await
        .map_err(|e| format!("Database error: {}", e))?;

    let mut pending = Vec::new();
    while let Some(item) = cursor
        .try_next()
        .await
        .map_err(|e| format!("Database error: {}", e))?
    {
        pending.push(item);
    }

    Ok(pending)
}

pub async fn submit(db: &MongoDB, pending: PendingClass) -> Result<InsertAck, String> {
    let collection = db.collection::<PendingClass>("pendingClasses");

    let result = collection
        .insert_one(&pending)
        .await
        .map_err(|e| format!("Database error: {}", e))?;

    Ok(result.into())
}

/// Substitui os campos editáveis da proposta do instrutor, filtrando por
/// email de quem submeteu.
pub async fn update_by_email(
    db: &MongoDB,
    email: &str,
    request: UpdatePendingClassRequest,
) -> Result<UpdateAck, String> {
    let collection = db.collection::<PendingClass>("pendingClasses");

    let result = collection
        .update_one(
            doc! { "email": email },
            doc! { "$set": {
                "name": request.name,
                "image": request.image,
                "availableSeats": request.available_seats,
                "price": request.price,
            } },
        )
        .await
        .map_err(|e| format!("Database error: {}", e))?;

    Ok(result.into())
}

pub async fn set_status(db: &MongoDB, id: &str, status: ClassStatus) -> Result<UpdateAck, String> {
    let collection = db.collection::<PendingClass>("pendingClasses");

    let oid = ObjectId::parse_str(id).map_err(|e| format!("Invalid id '{}': {}", id, e))?;

    let result = collection
        .update_one(
            doc! { "_id": oid },
            doc! { "$set": { "status": status.as_str() } },
        )
        .await
        .map_err(|e| format!("Database error: {}", e))?;

    Ok(result.into())
}

pub async fn set_feedback(db: &MongoDB, id: &str, feedback: &str) -> Result<UpdateAck, String> {
    let collection = db.collection::<PendingClass>("pendingClasses");

    let oid = ObjectId::parse_str(id).map_err(|e| format!("Invalid id '{}': {}", id, e))?;

    let result = collection
        .update_one(
            doc! { "_id": oid },
            doc! { "$set": { "feedback": feedback } },
        )
        .await
        .map_err(|e| format!("Database error: {}", e))?;

    Ok(result.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn test_db() -> MongoDB {
        dotenv::dotenv().ok();
        let uri = std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| "mongodb://localhost:27017/ClassBookingTestDB".to_string());
        MongoDB::new(&uri).await.unwrap()
    }

    #[tokio::test]
    #[ignore] // Requires MongoDB to be running
    async fn test_approve_then_deny_last_write_wins() {
        let db = test_db().await;

        let pending = PendingClass {
            id: None,
            name: "Status Ordering".to_string(),
            image: "https://example.com/x.jpg".to_string(),
            instructor_name: "Joao Lima".to_string(),
            instructor_email: "joao@example.com".to_string(),
            email: "joao@example.com".to_string(),
            available_seats: 5,
            price: 10.0,
            status: ClassStatus::Pending,
            feedback: None,
        };
        let ack = submit(&db, pending).await.unwrap();

        set_status(&db, &ack.inserted_id, ClassStatus::Approved)
            .await
            .unwrap();
        set_status(&db, &ack.inserted_id, ClassStatus::Denied)
            .await
            .unwrap();

        let oid = ObjectId::parse_str(&ack.inserted_id).unwrap();
        let stored = db
            .collection::<PendingClass>("pendingClasses")
            .find_one(doc! { "_id": oid })
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored.status, ClassStatus::Denied);
    }
}
