use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    MissingToken,
    InvalidToken,
    Forbidden,
    DatabaseError(String),
    PaymentError(String),
    InvalidRequest(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::MissingToken => write!(f, "unauthorized access!"),
            AppError::InvalidToken => write!(f, "unauthorized access!"),
            AppError::Forbidden => write!(f, "forbidden access"),
            // As variantes de serviço carregam a mensagem já formatada
            AppError::DatabaseError(msg)
            | AppError::PaymentError(msg)
            | AppError::InvalidRequest(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::MissingToken => StatusCode::UNAUTHORIZED,
            AppError::InvalidToken | AppError::Forbidden => StatusCode::FORBIDDEN,
            AppError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            AppError::DatabaseError(_) | AppError::PaymentError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(serde_json::json!({
            "error": self.to_string()
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_status_codes() {
        assert_eq!(AppError::MissingToken.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(AppError::InvalidToken.status_code(), StatusCode::FORBIDDEN);
        assert_eq!(AppError::Forbidden.status_code(), StatusCode::FORBIDDEN);
    }

    #[test]
    fn test_auth_body_matches_frontend_contract() {
        // O frontend trata 401/403 pelo mesmo texto de erro
        assert_eq!(AppError::MissingToken.to_string(), "unauthorized access!");
        assert_eq!(AppError::InvalidToken.to_string(), "unauthorized access!");
    }
}
