use crate::error::{ErrorMessage, HandlerError};
use crate::expense::{ExpenseList, ExpenseLookup, ExpenseView, NewExpenseForm};
use actix_web::{get, post, web, HttpResponse, Responder};
use gastos_repo::expense_repo::ExpenseRepo;
use std::sync::Arc;
use tracing::info;
use tracing_actix_web::RootSpan;

/// Records a new expense
#[utoipa::path(
    post,
    path = "/gastos",
    tag = "Gastos Pessoais",
    request_body(content = NewExpenseForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "The created expense", body = ExpenseView),
        (status = 409, description = "The expense violates a constraint, e.g. unknown category", body = ErrorMessage),
        (status = 400, description = "Invalid form or storage failure", body = ErrorMessage),
    )
)]
#[post("/gastos")]
pub async fn create_expense(
    expense_repo: web::Data<Arc<dyn ExpenseRepo>>,
    form: web::Form<NewExpenseForm>,
) -> Result<impl Responder, HandlerError> {
    let new_expense = form.into_inner().into_new_expense()?;
    let expense = expense_repo.create_expense(new_expense).await?;
    info!(expense_id = expense.id, "Created expense");
    Ok(HttpResponse::Ok().json(ExpenseView::from(expense)))
}

/// Lists every recorded expense
#[utoipa::path(
    get,
    path = "/gastos",
    tag = "Gastos Pessoais",
    responses(
        (status = 200, description = "All expenses", body = ExpenseList),
        (status = 400, description = "Storage failure", body = ErrorMessage),
    )
)]
#[get("/gastos")]
pub async fn get_all_expenses(
    expense_repo: web::Data<Arc<dyn ExpenseRepo>>,
) -> Result<impl Responder, HandlerError> {
    let expenses = expense_repo.get_all_expenses().await?;
    Ok(HttpResponse::Ok().json(ExpenseList::from(expenses)))
}

/// Looks up a single expense by id
#[utoipa::path(
    get,
    path = "/gasto/buscar/{id}",
    tag = "Gastos Pessoais",
    params(("id" = i64, Path, description = "Id of the expense, must not be 0")),
    responses(
        (status = 200, description = "The expense", body = ExpenseView),
        (status = 400, description = "Missing or invalid id", body = ErrorMessage),
        (status = 404, description = "No expense with this id", body = ErrorMessage),
    )
)]
#[get("/gasto/buscar/{id}")]
pub async fn get_expense(
    expense_repo: web::Data<Arc<dyn ExpenseRepo>>,
    root_span: RootSpan,
    expense_id: web::Path<i64>,
) -> Result<impl Responder, HandlerError> {
    let expense = lookup_expense(&expense_repo, &root_span, Some(expense_id.into_inner())).await?;
    Ok(HttpResponse::Ok().json(expense))
}

/// Looks up a single expense by id, given as a query parameter
#[utoipa::path(
    get,
    path = "/gasto/buscar",
    tag = "Gastos Pessoais",
    params(ExpenseLookup),
    responses(
        (status = 200, description = "The expense", body = ExpenseView),
        (status = 400, description = "Missing or invalid id", body = ErrorMessage),
        (status = 404, description = "No expense with this id", body = ErrorMessage),
    )
)]
#[get("/gasto/buscar")]
pub async fn find_expense(
    expense_repo: web::Data<Arc<dyn ExpenseRepo>>,
    root_span: RootSpan,
    lookup: web::Query<ExpenseLookup>,
) -> Result<impl Responder, HandlerError> {
    let expense = lookup_expense(&expense_repo, &root_span, lookup.id).await?;
    Ok(HttpResponse::Ok().json(expense))
}

async fn lookup_expense(
    expense_repo: &Arc<dyn ExpenseRepo>,
    root_span: &RootSpan,
    expense_id: Option<i64>,
) -> Result<ExpenseView, HandlerError> {
    let expense_id = match expense_id {
        Some(id) if id != 0 => id,
        _ => {
            return Err(HandlerError::BadRequest(
                "Unable to look up expense, the id is missing or invalid".to_string(),
            ))
        }
    };
    root_span.record("resource_id", expense_id);

    let expense = expense_repo.get_expense(expense_id).await?;
    Ok(expense.into())
}
