use crate::category_repo::CategoryRepoError::{CategoryAlreadyExists, CategoryNotFound};
use crate::category_repo::{Category, CategoryRepo, CategoryRepoError, NewCategory};
use crate::sqlx_repo::SQLxRepo;
use anyhow::{anyhow, Context};
use async_trait::async_trait;
use sqlx::{query_as, query_scalar};
use tracing::instrument;

#[async_trait]
impl CategoryRepo for SQLxRepo {
    #[instrument(skip(self))]
    async fn create_category(
        &self,
        new_category: NewCategory,
    ) -> Result<Category, CategoryRepoError> {
        let result = query_scalar::<_, i64>("INSERT INTO categories(name) VALUES (?) RETURNING id")
            .bind(&new_category.name)
            .fetch_one(&self.pool)
            .await;

        match result {
            Ok(id) => Ok(new_category.to_category(id)),
            Err(sqlx::Error::Database(e)) if e.is_unique_violation() => {
                Err(CategoryAlreadyExists(new_category.name))
            }
            Err(e) => Err(anyhow!(e)
                .context(format!("Unable to insert category {}", new_category.name))
                .into()),
        }
    }

    #[instrument(skip(self))]
    async fn get_all_categories(&self) -> Result<Vec<Category>, CategoryRepoError> {
        let categories = query_as::<_, Category>("SELECT id, name FROM categories ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .context("Unable to get categories")?;
        Ok(categories)
    }

    #[instrument(skip(self))]
    async fn get_category_by_name(&self, name: &str) -> Result<Category, CategoryRepoError> {
        let category: Option<Category> =
            query_as::<_, Category>("SELECT id, name FROM categories WHERE name = ?")
                .bind(name)
                .fetch_optional(&self.pool)
                .await
                .with_context(|| format!("Unable to get category {}", name))?;
        category.ok_or_else(|| CategoryNotFound(name.to_owned()))
    }
}
