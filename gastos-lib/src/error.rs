use actix_web::body::BoxBody;
use actix_web::error::InternalError;
use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse, ResponseError};
use gastos_repo::category_repo::CategoryRepoError;
use gastos_repo::expense_repo::ExpenseRepoError;
use gastos_repo::report_repo::ReportRepoError;
use serde::{Deserialize, Serialize};
use std::fmt::{Debug, Display};
use thiserror::Error;
use tracing::{error, warn};
use utoipa::ToSchema;

/// Body of every error response.
#[derive(Serialize, Deserialize, Clone, PartialEq, Debug, ToSchema)]
pub struct ErrorMessage {
    #[schema(example = "Expense with id 42 not found")]
    pub message: String,
}

impl ErrorMessage {
    pub fn new(message: impl Into<String>) -> ErrorMessage {
        ErrorMessage {
            message: message.into(),
        }
    }
}

#[derive(Error, Debug)]
pub enum HandlerError {
    #[error("{0}")]
    BadRequest(String),
    #[error(transparent)]
    Expense(#[from] ExpenseRepoError),
    #[error(transparent)]
    Category(#[from] CategoryRepoError),
    #[error(transparent)]
    Report(#[from] ReportRepoError),
}

impl HandlerError {
    fn message(&self) -> String {
        match self {
            HandlerError::Expense(ExpenseRepoError::Other(e))
            | HandlerError::Category(CategoryRepoError::Other(e))
            | HandlerError::Report(ReportRepoError::Other(e)) => {
                format!("Unable to complete the request: {:#}", e)
            }
            _ => self.to_string(),
        }
    }
}

impl ResponseError for HandlerError {
    fn status_code(&self) -> StatusCode {
        match self {
            HandlerError::BadRequest(_) => StatusCode::BAD_REQUEST,
            HandlerError::Expense(ExpenseRepoError::ExpenseNotFound(_))
            | HandlerError::Category(CategoryRepoError::CategoryNotFound(_)) => {
                StatusCode::NOT_FOUND
            }
            HandlerError::Expense(ExpenseRepoError::IntegrityViolation(_))
            | HandlerError::Category(CategoryRepoError::CategoryAlreadyExists(_)) => {
                StatusCode::CONFLICT
            }
            // storage failures are reported to the client along with their cause
            HandlerError::Expense(ExpenseRepoError::Other(_))
            | HandlerError::Category(CategoryRepoError::Other(_))
            | HandlerError::Report(ReportRepoError::Other(_)) => StatusCode::BAD_REQUEST,
        }
    }

    fn error_response(&self) -> HttpResponse<BoxBody> {
        let message = self.message();
        match self {
            HandlerError::Expense(ExpenseRepoError::Other(_))
            | HandlerError::Category(CategoryRepoError::Other(_))
            | HandlerError::Report(ReportRepoError::Other(_)) => error!(%message),
            _ => warn!(%message),
        }
        HttpResponse::build(self.status_code()).json(ErrorMessage::new(message))
    }
}

fn bad_request<E>(err: E, message: String) -> actix_web::Error
where
    E: Debug + Display + 'static,
{
    InternalError::from_response(
        err,
        HttpResponse::BadRequest().json(ErrorMessage::new(message)),
    )
    .into()
}

pub fn form_config() -> web::FormConfig {
    web::FormConfig::default().error_handler(|err, req| {
        warn!(req_path = req.path(), %err, "Invalid form");
        let message = format!("Invalid form data: {}", err);
        bad_request(err, message)
    })
}

pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err, req| {
        warn!(req_path = req.path(), %err, "Invalid query");
        let message = format!("Invalid query parameters: {}", err);
        bad_request(err, message)
    })
}

pub fn path_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(|err, req| {
        warn!(req_path = req.path(), %err, "Invalid path");
        let message = format!("Invalid path parameter: {}", err);
        bad_request(err, message)
    })
}
