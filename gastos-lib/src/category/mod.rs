use actix_web::web;
use gastos_repo::category_repo::{Category, NewCategory};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::error::HandlerError;

pub(crate) mod handlers;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(handlers::create_category)
        .service(handlers::get_all_categories)
        .service(handlers::get_category);
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct NewCategoryForm {
    #[schema(example = "Cartões")]
    pub name: String,
}

impl NewCategoryForm {
    pub fn new(name: String) -> Self {
        NewCategoryForm { name }
    }

    pub fn into_new_category(self) -> Result<NewCategory, HandlerError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(HandlerError::BadRequest(
                "Category name must not be empty".to_string(),
            ));
        }
        Ok(NewCategory::new(name.to_string()))
    }
}

#[derive(Serialize, Deserialize, Debug, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CategorySearch {
    /// Exact name of the category.
    #[param(example = "Cartões")]
    pub name: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Debug, ToSchema)]
pub struct CategoryView {
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = "Cartões")]
    pub name: String,
}

impl From<Category> for CategoryView {
    fn from(category: Category) -> Self {
        CategoryView {
            id: category.id,
            name: category.name,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Debug, ToSchema)]
pub struct CategoryList {
    pub categorias: Vec<CategoryView>,
}

impl From<Vec<Category>> for CategoryList {
    fn from(categories: Vec<Category>) -> Self {
        CategoryList {
            categorias: categories.into_iter().map(CategoryView::from).collect(),
        }
    }
}
