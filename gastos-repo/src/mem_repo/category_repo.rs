use crate::category_repo::CategoryRepoError::{CategoryAlreadyExists, CategoryNotFound};
use crate::category_repo::{Category, CategoryRepo, CategoryRepoError, NewCategory};
use crate::mem_repo::MemRepo;
use async_trait::async_trait;
use std::collections::hash_map::Entry;

#[async_trait]
impl CategoryRepo for MemRepo {
    async fn create_category(
        &self,
        new_category: NewCategory,
    ) -> Result<Category, CategoryRepoError> {
        let mut write_guard = self.write_lock()?;

        let id = write_guard.next_category_id;
        match write_guard.category_ids.entry(new_category.name.clone()) {
            Entry::Occupied(_) => return Err(CategoryAlreadyExists(new_category.name)),
            Entry::Vacant(e) => {
                e.insert(id);
            }
        }
        write_guard.next_category_id += 1;

        let category = new_category.to_category(id);
        write_guard.categories.insert(id, category.clone());

        Ok(category)
    }

    async fn get_all_categories(&self) -> Result<Vec<Category>, CategoryRepoError> {
        let read_guard = self.read_lock()?;
        Ok(read_guard.categories.values().cloned().collect())
    }

    async fn get_category_by_name(&self, name: &str) -> Result<Category, CategoryRepoError> {
        let read_guard = self.read_lock()?;

        read_guard
            .category_ids
            .get(name)
            .and_then(|id| read_guard.categories.get(id))
            .cloned()
            .ok_or_else(|| CategoryNotFound(name.to_owned()))
    }
}
