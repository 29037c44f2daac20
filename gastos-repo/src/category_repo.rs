use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[async_trait]
pub trait CategoryRepo: Sync + Send {
    async fn create_category(
        &self,
        new_category: NewCategory,
    ) -> Result<Category, CategoryRepoError>;

    async fn get_all_categories(&self) -> Result<Vec<Category>, CategoryRepoError>;

    async fn get_category_by_name(&self, name: &str) -> Result<Category, CategoryRepoError>;
}

#[derive(Error, Debug)]
pub enum CategoryRepoError {
    #[error("Category {0} not found")]
    CategoryNotFound(String),
    #[error("Category {0} already exists")]
    CategoryAlreadyExists(String),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, Debug, sqlx::FromRow)]
pub struct Category {
    pub id: i64,
    pub name: String,
}

impl Category {
    pub const fn new(id: i64, name: String) -> Category {
        Category { id, name }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct NewCategory {
    pub name: String,
}

impl NewCategory {
    pub const fn new(name: String) -> NewCategory {
        NewCategory { name }
    }

    pub fn to_category(self, id: i64) -> Category {
        Category::new(id, self.name)
    }
}
