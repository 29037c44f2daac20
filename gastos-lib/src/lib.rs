use actix_web::web;

pub mod category;
pub mod config;
mod dates;
pub mod docs;
pub mod error;
pub mod expense;
pub mod report;
pub mod tracing;

/// Registers every route of the API together with the extractor configuration that turns
/// malformed forms, queries and paths into `400 Bad Request` responses.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(error::form_config())
        .app_data(error::query_config())
        .app_data(error::path_config())
        .configure(docs::configure)
        .configure(expense::configure)
        .configure(category::configure)
        .service(report::report_service());
}
