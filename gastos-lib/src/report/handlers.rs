use crate::error::{ErrorMessage, HandlerError};
use crate::report::{CategoryTotalView, ReportQuery, TotalReport};
use actix_web::{get, web, HttpResponse, Responder};
use gastos_repo::report_repo::ReportRepo;
use std::sync::Arc;
use tracing::debug;

/// Total spent per category between two days, inclusive. Categories without expenses in the range
/// are listed with a total of zero.
#[utoipa::path(
    get,
    path = "/relatorios/gastos_per_categoria",
    tag = "Relatorios Gerais",
    params(ReportQuery),
    responses(
        (status = 200, description = "Totals, largest first", body = [CategoryTotalView]),
        (status = 400, description = "Missing or malformed dates", body = ErrorMessage),
    )
)]
#[get("/gastos_per_categoria")]
pub async fn get_totals_per_category(
    report_repo: web::Data<Arc<dyn ReportRepo>>,
    query: web::Query<ReportQuery>,
) -> Result<impl Responder, HandlerError> {
    let range = query.date_range()?;
    debug!(?range, "Totals per category");

    let totals: Vec<CategoryTotalView> = report_repo
        .get_totals_per_category(range)
        .await?
        .into_iter()
        .map(CategoryTotalView::from)
        .collect();
    Ok(HttpResponse::Ok().json(totals))
}

/// Total spent between two days, inclusive
#[utoipa::path(
    get,
    path = "/relatorios/total_geral",
    tag = "Relatorios Gerais",
    params(ReportQuery),
    responses(
        (status = 200, description = "Grand total", body = TotalReport),
        (status = 400, description = "Missing or malformed dates", body = ErrorMessage),
    )
)]
#[get("/total_geral")]
pub async fn get_total(
    report_repo: web::Data<Arc<dyn ReportRepo>>,
    query: web::Query<ReportQuery>,
) -> Result<impl Responder, HandlerError> {
    let range = query.date_range()?;
    debug!(?range, "Grand total");

    let total = report_repo.get_total(range).await?;
    Ok(HttpResponse::Ok().json(TotalReport::from(total)))
}
