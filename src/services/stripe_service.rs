// ==================== STRIPE ====================
// Ponte fina para o gateway de pagamento: cria um PaymentIntent e devolve o
// client_secret que o frontend usa para concluir a cobrança. Sem webhooks e
// sem retry; falhas do gateway sobem como erro de serviço.

use serde::Deserialize;
use std::env;
use uuid::Uuid;

const STRIPE_API_BASE: &str = "https://api.stripe.com/v1";

#[derive(Debug, Deserialize)]
struct PaymentIntentResponse {
    client_secret: String,
}

#[derive(Debug, Deserialize)]
struct StripeErrorResponse {
    error: StripeError,
}

#[derive(Debug, Deserialize)]
struct StripeError {
    message: String,
}

/// Converte o preço total para a menor unidade da moeda (centavos).
pub fn to_minor_units(total_price: f64) -> i64 {
    (total_price * 100.0).round() as i64
}

pub async fn create_payment_intent(amount_minor_units: i64) -> Result<String, String> {
    let secret_key = env::var("PAYMENT_SECRET_KEY")
        .map_err(|_| "PAYMENT_SECRET_KEY not found in environment".to_string())?;

    let params: Vec<(&str, String)> = vec![
        ("amount", amount_minor_units.to_string()),
        ("currency", "usd".to_string()),
        ("payment_method_types[]", "card".to_string()),
    ];

    let client = reqwest::Client::new();
    let response = client
        .post(format!("{}/payment_intents", STRIPE_API_BASE))
        .bearer_auth(&secret_key)
        .header("Idempotency-Key", Uuid::new_v4().to_string())
        .form(&params)
        .send()
        .await
        .map_err(|e| format!("Stripe request failed: {}", e))?;

    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| format!("Stripe response error: {}", e))?;

    if !status.is_success() {
        log::error!("❌ Stripe API error: status={}, body={}", status, body);

        if let Ok(error_response) = serde_json::from_str::<StripeErrorResponse>(&body) {
            return Err(format!("Stripe error: {}", error_response.error.message));
        }
        return Err(format!("Stripe error: HTTP {}", status));
    }

    let intent: PaymentIntentResponse = serde_json::from_str(&body)
        .map_err(|e| format!("Failed to parse Stripe response: {}", e))?;

    Ok(intent.client_secret)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minor_unit_conversion() {
        assert_eq!(to_minor_units(0.0), 0);
        assert_eq!(to_minor_units(49.99), 4999);
        // 19.99 * 100.0 == 1998.9999... em float; round corrige
        assert_eq!(to_minor_units(19.99), 1999);
        assert_eq!(to_minor_units(120.0), 12000);
    }

    #[test]
    fn test_parse_payment_intent_response() {
        let body = r#"{
            "id": "pi_3Abc",
            "object": "payment_intent",
            "amount": 4999,
            "client_secret": "pi_3Abc_secret_xyz"
        }"#;
        let intent: PaymentIntentResponse = serde_json::from_str(body).unwrap();
        assert_eq!(intent.client_secret, "pi_3Abc_secret_xyz");
    }

    #[test]
    fn test_parse_stripe_error() {
        let body = r#"{
            "error": {
                "type": "invalid_request_error",
                "message": "Amount must be at least 50 cents"
            }
        }"#;
        let parsed: StripeErrorResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.error.message, "Amount must be at least 50 cents");
    }

    #[tokio::test]
    #[ignore] // Requires PAYMENT_SECRET_KEY and network access
    async fn test_create_payment_intent_live() {
        dotenv::dotenv().ok();
        let result = create_payment_intent(to_minor_units(10.0)).await;
        assert!(result.is_ok());
    }
}
