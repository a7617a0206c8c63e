use actix_web::HttpResponse;
use serde_json::json;

use crate::services::ServiceError;

pub mod imports;

/// Map a service failure onto an HTTP response.
pub(crate) fn error_response(err: ServiceError) -> HttpResponse {
    match err {
        ServiceError::Unauthorized => {
            HttpResponse::Forbidden().json(json!({ "error": "insufficient role" }))
        }
        ServiceError::NotFound => HttpResponse::NotFound().json(json!({ "error": "not found" })),
        ServiceError::Form(message) => HttpResponse::BadRequest().json(json!({ "error": message })),
        ServiceError::Repository(err) => {
            log::error!("Repository failure: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
