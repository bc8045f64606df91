use actix_web::HttpResponse;
use serde::Serialize;

use crate::services::ServiceError;

pub mod categories;
pub mod posts;

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

/// Maps a service failure to its HTTP representation.
pub(crate) fn error_response(err: ServiceError) -> HttpResponse {
    match err {
        ServiceError::NotFound => HttpResponse::NotFound().json(ErrorBody {
            error: "not found".to_string(),
        }),
        ServiceError::Conflict(message) => HttpResponse::Conflict().json(ErrorBody {
            error: message,
        }),
        ServiceError::Form(message) | ServiceError::TypeConstraint(message) => {
            HttpResponse::BadRequest().json(ErrorBody { error: message })
        }
        ServiceError::Internal => HttpResponse::InternalServerError().finish(),
    }
}
