use actix_web::HttpResponse;
use serde::{Deserialize, Serialize};

/// Body used for plain confirmations and for every error response.
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

pub struct ApiResponse;

impl ApiResponse {
    pub fn success<T: Serialize>(data: T) -> HttpResponse {
        HttpResponse::Ok().json(data)
    }

    pub fn created<T: Serialize>(data: T) -> HttpResponse {
        HttpResponse::Created().json(data)
    }

    pub fn success_message(message: &str) -> HttpResponse {
        HttpResponse::Ok().json(MessageResponse {
            message: message.to_string(),
        })
    }
}
