pub mod ack;
pub mod class;
pub mod payment;
pub mod pending_class;
pub mod selected_item;
pub mod user;

pub use ack::*;
pub use class::*;
pub use payment::*;
pub use pending_class::*;
pub use selected_item::*;
pub use user::*;

use mongodb::bson::oid::ObjectId;
use serde::Serializer;

/// Serializa `_id` como hex string no JSON de resposta, mantendo a
/// desserialização BSON nativa em ObjectId.
pub fn serialize_oid_hex<S>(oid: &Option<ObjectId>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match oid {
        Some(oid) => serializer.serialize_str(&oid.to_hex()),
        None => serializer.serialize_none(),
    }
}
