mod category_repo;
mod expense_repo;
mod report_repo;

use crate::category_repo::CategoryRepo;
use crate::expense_repo::ExpenseRepo;
use crate::report_repo::ReportRepo;
use crate::Repos;
use anyhow::Context;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};
use std::fs;
use std::str::FromStr;
use std::sync::Arc;
use tracing::info;

pub struct SQLxRepo {
    pool: Pool<Sqlite>,
}

impl SQLxRepo {
    pub fn new(pool: Pool<Sqlite>) -> SQLxRepo {
        SQLxRepo { pool }
    }
}

/// Opens the SQLite database at `database_url`, creating the file and its directory when missing,
/// and brings the schema up to date.
pub async fn create_repos(
    database_url: &str,
    max_pool_size: u32,
) -> Result<Repos, anyhow::Error> {
    let options = SqliteConnectOptions::from_str(database_url)
        .with_context(|| format!("Invalid database url {}", database_url))?
        .create_if_missing(true)
        .foreign_keys(true);

    if let Some(dir) = options.clone().get_filename().parent() {
        if !dir.as_os_str().is_empty() {
            fs::create_dir_all(dir)
                .with_context(|| format!("Unable to create database directory {:?}", dir))?;
        }
    }

    // In-memory databases live only as long as a connection is open
    let pool = SqlitePoolOptions::new()
        .max_connections(max_pool_size)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await
        .context("Unable to connect to database")?;

    info!("Running migrations");
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Unable to run migrations")?;

    let repo = Arc::new(SQLxRepo::new(pool));
    let category_repo: Arc<dyn CategoryRepo> = repo.clone();
    let expense_repo: Arc<dyn ExpenseRepo> = repo.clone();
    let report_repo: Arc<dyn ReportRepo> = repo;
    Ok((category_repo, expense_repo, report_repo))
}
