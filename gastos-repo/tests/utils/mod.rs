pub mod generator;

use gastos_repo::category_repo::{Category, CategoryRepo, NewCategory};
use gastos_repo::Repos;
use std::sync::Arc;
use uuid::Uuid;

#[derive(Debug)]
pub enum RepoType {
    SQLx,
    Mem,
}

pub async fn build_repos(repo_type: RepoType) -> Repos {
    match repo_type {
        RepoType::SQLx => gastos_repo::sqlx_repo::create_repos("sqlite::memory:", 1)
            .await
            .unwrap(),
        RepoType::Mem => gastos_repo::mem_repo::create_repos(),
    }
}

#[allow(dead_code)]
pub async fn create_category(category_repo: &Arc<dyn CategoryRepo>, name: &str) -> Category {
    category_repo
        .create_category(NewCategory::new(name.to_string()))
        .await
        .unwrap()
}

#[allow(dead_code)]
pub fn unique_name(prefix: &str) -> String {
    format!("{}-{}", prefix, Uuid::new_v4())
}
