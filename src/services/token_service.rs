// ==================== TOKEN SERVICE ====================
// Emissão e verificação de bearer tokens HS256. O payload de claims é
// arbitrário: somente email e exp são interpretados pelo serviço, o resto
// faz round-trip intacto.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use std::env;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub email: Option<String>,
    pub exp: usize,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

// O segredo é lido a cada uso: sem ACCESS_TOKEN no ambiente a emissão
// falha com erro de servidor e a verificação com 403, nunca no startup.
fn access_token_secret() -> Result<String, String> {
    env::var("ACCESS_TOKEN").map_err(|_| "ACCESS_TOKEN not set".to_string())
}

/// Assina o payload recebido com validade fixa de 1 hora.
pub fn issue_token(payload: &Value) -> Result<String, String> {
    let mut claims = match payload {
        Value::Object(map) => map.clone(),
        _ => return Err("claims payload must be a JSON object".to_string()),
    };

    let now = Utc::now();
    claims.insert("iat".to_string(), json!(now.timestamp()));
    claims.insert(
        "exp".to_string(),
        json!((now + Duration::hours(1)).timestamp()),
    );

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(access_token_secret()?.as_ref()),
    )
    .map_err(|e| format!("Failed to sign token: {}", e))
}

/// Verifica assinatura e expiração, devolvendo as claims decodificadas.
pub fn verify_token(token: &str) -> Result<Claims, String> {
    let secret = access_token_secret()?;

    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_ref()),
        &Validation::new(Algorithm::HS256),
    )
    .map(|data| data.claims)
    .map_err(|e| format!("Invalid token: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set_test_secret() {
        env::set_var("ACCESS_TOKEN", "test-secret");
    }

    fn sign_raw(claims: &Value, secret: &str) -> String {
        encode(
            &Header::default(),
            claims,
            &EncodingKey::from_secret(secret.as_ref()),
        )
        .unwrap()
    }

    #[test]
    fn test_claims_round_trip() {
        set_test_secret();

        let payload = json!({
            "email": "ana@example.com",
            "name": "Ana",
            "role": "student"
        });
        let token = issue_token(&payload).unwrap();
        let claims = verify_token(&token).unwrap();

        assert_eq!(claims.email.as_deref(), Some("ana@example.com"));
        assert_eq!(claims.extra["name"], json!("Ana"));
        assert_eq!(claims.extra["role"], json!("student"));
    }

    #[test]
    fn test_expired_token_is_rejected() {
        set_test_secret();

        // exp bem além da leeway default de 60s
        let expired = json!({
            "email": "ana@example.com",
            "exp": (Utc::now() - Duration::hours(2)).timestamp()
        });
        let token = sign_raw(&expired, "test-secret");

        assert!(verify_token(&token).is_err());
    }

    #[test]
    fn test_tampered_signature_is_rejected() {
        set_test_secret();

        let claims = json!({
            "email": "ana@example.com",
            "exp": (Utc::now() + Duration::hours(1)).timestamp()
        });
        let token = sign_raw(&claims, "some-other-secret");

        assert!(verify_token(&token).is_err());
    }

    #[test]
    fn test_token_without_email_verifies_with_no_email() {
        set_test_secret();

        let claims = json!({
            "exp": (Utc::now() + Duration::hours(1)).timestamp()
        });
        let token = sign_raw(&claims, "test-secret");

        let decoded = verify_token(&token).unwrap();
        assert!(decoded.email.is_none());
    }

    #[test]
    fn test_non_object_payload_is_rejected() {
        set_test_secret();
        assert!(issue_token(&json!("not-an-object")).is_err());
    }
}
