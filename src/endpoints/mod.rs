use crate::error::ServiceError;
use actix_web::web;

pub mod products;

/// Registers the product routes and maps extractor failures to [`ServiceError::Validation`].
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::JsonConfig::default()
            .error_handler(|err, _| ServiceError::Validation(err.to_string()).into()),
    )
    .app_data(
        web::QueryConfig::default()
            .error_handler(|err, _| ServiceError::Validation(err.to_string()).into()),
    )
    .app_data(
        web::PathConfig::default()
            .error_handler(|err, _| ServiceError::Validation(err.to_string()).into()),
    )
    .service(products::create)
    .service(products::get_all)
    .service(products::replace)
    .service(products::patch)
    .service(products::delete)
    .service(products::filter);
}
