use actix_web::http::header;
use actix_web::{get, web, HttpResponse, Responder};
use utoipa::OpenApi;
use utoipa_redoc::{Redoc, Servable};

use crate::{category, error, expense, report};

pub const OPENAPI_JSON_PATH: &str = "/openapi/openapi.json";
pub const REDOC_PATH: &str = "/openapi/redoc";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Gastos Pessoais API",
        version = "1.0.0",
        description = "Records personal expenses by category and reports how much was spent"
    ),
    paths(
        home,
        openapi_json,
        expense::handlers::create_expense,
        expense::handlers::get_all_expenses,
        expense::handlers::get_expense,
        expense::handlers::find_expense,
        category::handlers::create_category,
        category::handlers::get_all_categories,
        category::handlers::get_category,
        report::handlers::get_totals_per_category,
        report::handlers::get_total,
    ),
    components(schemas(
        error::ErrorMessage,
        expense::NewExpenseForm,
        expense::ExpenseView,
        expense::ExpenseList,
        category::NewCategoryForm,
        category::CategoryView,
        category::CategoryList,
        report::CategoryTotalView,
        report::TotalReport,
    )),
    tags(
        (name = "Documentação", description = "API documentation"),
        (name = "Gastos Pessoais", description = "Adding and looking up expenses"),
        (name = "Categorias", description = "Adding and looking up expense categories"),
        (name = "Relatorios Gerais", description = "Spending reports over a range of days"),
    )
)]
pub struct ApiDoc;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(home)
        .service(openapi_json)
        .service(Redoc::with_url(REDOC_PATH, ApiDoc::openapi()));
}

/// Redirects to the API documentation
#[utoipa::path(
    get,
    path = "/",
    tag = "Documentação",
    responses((status = 307, description = "Redirect to the Redoc page"))
)]
#[get("/")]
pub async fn home() -> impl Responder {
    HttpResponse::TemporaryRedirect()
        .insert_header((header::LOCATION, REDOC_PATH))
        .finish()
}

/// OpenAPI document describing this API
#[utoipa::path(
    get,
    path = "/openapi/openapi.json",
    tag = "Documentação",
    responses((status = 200, description = "The OpenAPI document"))
)]
#[get("/openapi/openapi.json")]
pub async fn openapi_json() -> impl Responder {
    HttpResponse::Ok().json(ApiDoc::openapi())
}
