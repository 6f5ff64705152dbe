// ==================== USERS ====================
// CRUD da collection "users". Email é a chave de identidade; a checagem de
// existência e o insert são dois round-trips separados, então cadastros
// concorrentes com o mesmo email podem duplicar.

use crate::database::MongoDB;
use crate::models::{InsertAck, UpdateAck, User, UserRole};
use futures::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId};

pub enum CreateUserOutcome {
    Created(InsertAck),
    AlreadyExists,
}

pub async fn list_users(db: &MongoDB) -> Result<Vec<User>, String> {
    let collection = db.collection::<User>("users");

    let mut cursor = collection
        .find(doc! {})
        .await
        .map_err(|e| format!("Database error: {}", e))?;

    let mut users = Vec::new();
    while let Some(user) = cursor
        .try_next()
        .await
        .map_err(|e| format!("Database error: {}", e))?
    {
        users.push(user);
    }

    Ok(users)
}

pub async fn create_user_if_absent(
    db: &MongoDB,
    user: User,
) -> Result<CreateUserOutcome, String> {
    let collection = db.collection::<User>("users");

    let existing = collection
        .find_one(doc! { "email": &user.email })
        .await
        .map_err(|e| format!("Database error: {}", e))?;

    if existing.is_some() {
        return Ok(CreateUserOutcome::AlreadyExists);
    }

    let result = collection
        .insert_one(&user)
        .await
        .map_err(|e| format!("Database error: {}", e))?;

    Ok(CreateUserOutcome::Created(result.into()))
}

/// updateOne cego por id: um id inexistente devolve matched/modified 0,
/// nunca erro.
pub async fn promote_user(db: &MongoDB, id: &str, role: UserRole) -> Result<UpdateAck, String> {
    let collection = db.collection::<User>("users");

    let oid = ObjectId::parse_str(id).map_err(|e| format!("Invalid id '{}': {}", id, e))?;

    let result = collection
        .update_one(
            doc! { "_id": oid },
            doc! { "$set": { "role": role.as_str() } },
        )
        .await
        .map_err(|e| format!("Database error: {}", e))?;

    Ok(result.into())
}

pub async fn has_role(db: &MongoDB, email: &str, role: UserRole) -> Result<bool, String> {
    let collection = db.collection::<User>("users");

    let user = collection
        .find_one(doc! { "email": email })
        .await
        .map_err(|e| format!("Database error: {}", e))?;

    Ok(user.map(|u| u.role == role).unwrap_or(false))
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
    async fn test_create_user_is_idempotent_by_email() {
        let db = test_db().await;
        let user = User {
            id: None,
            name: "Dup Check".to_string(),
            email: format!("dup-{}@example.com", ObjectId::new().to_hex()),
            photo: None,
            role: UserRole::Student,
        };

        let first = create_user_if_absent(&db, user.clone()).await.unwrap();
        assert!(matches!(first, CreateUserOutcome::Created(_)));

        let second = create_user_if_absent(&db, user).await.unwrap();
        assert!(matches!(second, CreateUserOutcome::AlreadyExists));
    }

    #[tokio::test]
    #[ignore] // Requires MongoDB to be running
    async fn test_promote_nonexistent_id_matches_zero() {
        let db = test_db().await;
        let ack = promote_user(&db, &ObjectId::new().to_hex(), UserRole::Admin)
            .await
            .unwrap();
        assert_eq!(ack.matched_count, 0);
        assert_eq!(ack.modified_count, 0);
    }
}
