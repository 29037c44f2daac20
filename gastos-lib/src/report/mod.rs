use actix_web::{web, Scope};
use gastos_repo::report_repo::{CategoryTotal, DateRange};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::dates;
use crate::error::HandlerError;

pub(crate) mod handlers;

pub fn report_service() -> Scope {
    web::scope("/relatorios")
        .service(handlers::get_totals_per_category)
        .service(handlers::get_total)
}

/// Inclusive range of days a report covers.
#[derive(Serialize, Deserialize, Debug, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ReportQuery {
    /// First day of the report, DD/MM/YYYY.
    #[param(example = "01/01/2024")]
    pub initial_date: String,
    /// Last day of the report, DD/MM/YYYY. Expenses on this day are included.
    #[param(example = "31/01/2024")]
    pub final_date: String,
}

impl ReportQuery {
    pub fn date_range(&self) -> Result<DateRange, HandlerError> {
        let from = parse_report_day("initial_date", &self.initial_date)?;
        let until = parse_report_day("final_date", &self.final_date)?;
        Ok(DateRange::new(from, until))
    }
}

fn parse_report_day(field: &str, value: &str) -> Result<chrono::NaiveDate, HandlerError> {
    dates::parse_day(value).ok_or_else(|| {
        HandlerError::BadRequest(format!(
            "Invalid {} '{}', expected DD/MM/YYYY",
            field, value
        ))
    })
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Debug, ToSchema)]
pub struct CategoryTotalView {
    #[schema(example = "Cartões")]
    pub categoria_name: String,
    #[schema(example = 256.0)]
    pub total: f64,
}

impl From<CategoryTotal> for CategoryTotalView {
    fn from(total: CategoryTotal) -> Self {
        CategoryTotalView {
            categoria_name: total.category_name,
            total: total.total,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Debug, ToSchema)]
pub struct TotalReport {
    #[schema(example = 919.75)]
    pub total: f64,
}

impl From<f64> for TotalReport {
    fn from(total: f64) -> Self {
        TotalReport { total }
    }
}
