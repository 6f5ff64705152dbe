use mongodb::bson::Bson;
use mongodb::results::{DeleteResult, InsertOneResult, UpdateResult};
use serde::Serialize;

// Corpos de resposta das mutações, no formato que o frontend consome:
// {acknowledged, insertedId}, {matchedCount, modifiedCount}, {deletedCount}.

#[derive(Debug, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InsertAck {
    pub acknowledged: bool,
    pub inserted_id: String,
}

impl InsertAck {
    fn from_inserted_id(inserted_id: Bson) -> Self {
        let inserted_id = match inserted_id {
            Bson::ObjectId(oid) => oid.to_hex(),
            other => other.to_string(),
        };
        Self {
            acknowledged: true,
            inserted_id,
        }
    }
}

impl From<InsertOneResult> for InsertAck {
    fn from(result: InsertOneResult) -> Self {
        Self::from_inserted_id(result.inserted_id)
    }
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAck {
    pub acknowledged: bool,
    pub matched_count: u64,
    pub modified_count: u64,
}

impl From<UpdateResult> for UpdateAck {
    fn from(result: UpdateResult) -> Self {
        Self {
            acknowledged: true,
            matched_count: result.matched_count,
            modified_count: result.modified_count,
        }
    }
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeleteAck {
    pub acknowledged: bool,
    pub deleted_count: u64,
}

impl From<DeleteResult> for DeleteAck {
    fn from(result: DeleteResult) -> Self {
        Self {
            acknowledged: true,
            deleted_count: result.deleted_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_ack_wire_shape() {
        let ack = UpdateAck {
            acknowledged: true,
            matched_count: 0,
            modified_count: 0,
        };
        let value = serde_json::to_value(&ack).unwrap();
        assert_eq!(value["matchedCount"], 0);
        assert_eq!(value["modifiedCount"], 0);
        assert_eq!(value["acknowledged"], true);
    }

    #[test]
    fn test_insert_ack_hex_id() {
        let oid = mongodb::bson::oid::ObjectId::new();
        let ack = InsertAck::from_inserted_id(Bson::ObjectId(oid));
        assert_eq!(ack.inserted_id, oid.to_hex());
    }
}
