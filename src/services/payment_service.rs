// ==================== PAYMENTS ====================
// Registro append-only de pagamentos confirmados. O serviço não remove os
// itens do carrinho após o registro.

use crate::database::MongoDB;
use crate::models::{InsertAck, Payment};
use futures::TryStreamExt;
use mongodb::bson::doc;

pub async fn record_payment(db: &MongoDB, payment: Payment) -> Result<InsertAck, String> {
    let collection = db.collection::<Payment>("payments");

    let result = collection
        .insert_one(&payment)
        .await
        .map_err(|e| format!("Database error: {}", e))?;

    Ok(result.into())
}

pub async fn list_by_email(db: &MongoDB, email: &str) -> Result<Vec<Payment>, String> {
    let collection = db.collection::<Payment>("payments");

    let mut cursor = collection
        .find(doc! { "email": email })
        .await
        .map_err(|e| format!("Database error: {}", e))?;

    let mut payments = Vec::new();
    while let Some(payment) = cursor
        .try_next()
        .await
        .map_err(|e| format!("Database error: {}", e))?
    {
        payments.push(payment);
    }

    Ok(payments)
}
