#[macro_use]
extern crate tracing;

use std::path::PathBuf;

use actix_cors::Cors;
use actix_web::web::Data;
use actix_web::{App, HttpServer};
use anyhow::Context;

use gastos_lib::config::Config;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let config = match get_config_file() {
        Some(config_path) => Config::from_file(config_path)?,
        None => Config::from_env()?,
    };

    gastos_lib::tracing::init_subscriber(&config.log_level)?;
    info!(listen_address = %config.listen_address, "tracing initialized");

    let (category_repo, expense_repo, report_repo) =
        gastos_repo::sqlx_repo::create_repos(&config.database_url, config.max_pool_size)
            .await
            .context("Unable to open database")?;

    HttpServer::new(move || {
        App::new()
            .app_data(Data::new(category_repo.clone()))
            .app_data(Data::new(expense_repo.clone()))
            .app_data(Data::new(report_repo.clone()))
            .wrap(Cors::permissive())
            .wrap(gastos_lib::tracing::create_middleware())
            .configure(gastos_lib::configure)
    })
    .bind(&config.listen_address)
    .with_context(|| format!("Unable to listen on {}", config.listen_address))?
    .run()
    .await?;

    Ok(())
}

/// Looks for `config.toml` in the working directory, then in `$CONFIGURATION_DIRECTORY`.
fn get_config_file() -> Option<PathBuf> {
    let config_current_dir = PathBuf::from("config.toml");
    if config_current_dir.exists() {
        return Some(config_current_dir);
    }
    if let Ok(config_env) = std::env::var("CONFIGURATION_DIRECTORY") {
        let config_path = PathBuf::from(config_env).join("config.toml");
        if config_path.exists() {
            return Some(config_path);
        }
    }

    None
}
