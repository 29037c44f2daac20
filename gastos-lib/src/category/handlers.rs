use crate::category::{CategoryList, CategorySearch, CategoryView, NewCategoryForm};
use crate::error::{ErrorMessage, HandlerError};
use actix_web::{get, post, web, HttpResponse, Responder};
use gastos_repo::category_repo::CategoryRepo;
use std::sync::Arc;
use tracing::info;
use tracing_actix_web::RootSpan;

/// Creates a new category
#[utoipa::path(
    post,
    path = "/categorias",
    tag = "Categorias",
    request_body(content = NewCategoryForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "The created category", body = CategoryView),
        (status = 409, description = "A category with this name already exists", body = ErrorMessage),
        (status = 400, description = "Invalid form or storage failure", body = ErrorMessage),
    )
)]
#[post("/categorias")]
pub async fn create_category(
    category_repo: web::Data<Arc<dyn CategoryRepo>>,
    form: web::Form<NewCategoryForm>,
) -> Result<impl Responder, HandlerError> {
    let new_category = form.into_inner().into_new_category()?;
    let category = category_repo.create_category(new_category).await?;
    info!(category_id = category.id, "Created category");
    Ok(HttpResponse::Ok().json(CategoryView::from(category)))
}

/// Lists every category
#[utoipa::path(
    get,
    path = "/categorias",
    tag = "Categorias",
    responses(
        (status = 200, description = "All categories", body = CategoryList),
        (status = 400, description = "Storage failure", body = ErrorMessage),
    )
)]
#[get("/categorias")]
pub async fn get_all_categories(
    category_repo: web::Data<Arc<dyn CategoryRepo>>,
) -> Result<impl Responder, HandlerError> {
    let categories = category_repo.get_all_categories().await?;
    Ok(HttpResponse::Ok().json(CategoryList::from(categories)))
}

/// Looks up a category by its exact name
#[utoipa::path(
    get,
    path = "/categoria",
    tag = "Categorias",
    params(CategorySearch),
    responses(
        (status = 200, description = "The category", body = CategoryView),
        (status = 400, description = "Missing name", body = ErrorMessage),
        (status = 404, description = "No category with this name", body = ErrorMessage),
    )
)]
#[get("/categoria")]
pub async fn get_category(
    category_repo: web::Data<Arc<dyn CategoryRepo>>,
    root_span: RootSpan,
    search: web::Query<CategorySearch>,
) -> Result<impl Responder, HandlerError> {
    let name = match search.name.as_deref().map(str::trim) {
        Some(name) if !name.is_empty() => name,
        _ => {
            return Err(HandlerError::BadRequest(
                "Unable to look up category, the name is missing".to_string(),
            ))
        }
    };
    root_span.record("resource_id", name);

    let category = category_repo.get_category_by_name(name).await?;
    Ok(HttpResponse::Ok().json(CategoryView::from(category)))
}
