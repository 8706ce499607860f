use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde_json::json;
use std::fmt;

/// A convenient result type for the catalog handlers.
pub type Result<T> = std::result::Result<T, ServiceError>;

/// Error returned by the catalog handlers and extractors.
pub enum ServiceError {
    /// The request body, query string or path could not be parsed.
    Validation(String),
    /// No product exists with the requested id.
    NotFound,
    /// The filter matched no products.
    EmptyResult,
    /// The store failed to execute a statement.
    Store(sqlx::Error),
}

impl ServiceError {
    /// Returns the message sent to the client in the `detail` field.
    pub fn detail(&self) -> String {
        match self {
            ServiceError::Validation(reason) => reason.clone(),
            ServiceError::NotFound => "Product not found".to_owned(),
            ServiceError::EmptyResult => "Category not found".to_owned(),
            ServiceError::Store(_) => "Internal Server Error".to_owned(),
        }
    }
}

impl From<sqlx::Error> for ServiceError {
    fn from(error: sqlx::Error) -> Self {
        ServiceError::Store(error)
    }
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ServiceError::Validation(reason) => write!(f, "invalid request: {}", reason),
            ServiceError::NotFound => write!(f, "product not found"),
            ServiceError::EmptyResult => write!(f, "no products matched the filter"),
            ServiceError::Store(error) => write!(f, "store failure: {}", error),
        }
    }
}

impl fmt::Debug for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl std::error::Error for ServiceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ServiceError::Store(error) => Some(error),
            _ => None,
        }
    }
}

impl ResponseError for ServiceError {
    fn status_code(&self) -> StatusCode {
        match self {
            ServiceError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ServiceError::NotFound => StatusCode::NOT_FOUND,
            // Empty filter results are reported as a server error, unlike NotFound.
            ServiceError::EmptyResult => StatusCode::INTERNAL_SERVER_ERROR,
            ServiceError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        if let ServiceError::Store(error) = self {
            log::error!("Store failure: {}", error);
        }

        HttpResponse::build(self.status_code()).json(json!({ "detail": self.detail() }))
    }
}
