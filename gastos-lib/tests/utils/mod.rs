use rstest::*;
use tracing::info;
use tracing::Level;

use gastos_repo::Repos;

pub mod mock;

macro_rules! build_app {
    ($repos:expr) => {{
        let (category_repo, expense_repo, report_repo) = $repos;
        let app = App::new()
            .app_data(Data::new(category_repo))
            .app_data(Data::new(expense_repo))
            .app_data(Data::new(report_repo))
            .wrap(gastos_lib::tracing::create_middleware())
            .configure(gastos_lib::configure);
        tracing::info!("Built app");
        app
    }};
}

macro_rules! create_category {
    (&$service:ident, $name:expr) => {{
        let request = TestRequest::post()
            .uri("/categorias")
            .set_form(&gastos_lib::category::NewCategoryForm::new($name.to_string()))
            .to_request();
        let response = test::call_service(&$service, request).await;
        assert!(
            response.status().is_success(),
            "Got {} response when creating category",
            response.status()
        );
        let category: gastos_lib::category::CategoryView = test::read_body_json(response).await;
        category
    }};
}

macro_rules! create_expense {
    (&$service:ident, $new_expense:expr) => {{
        let request = TestRequest::post()
            .uri("/gastos")
            .set_form(&$new_expense)
            .to_request();
        let response = test::call_service(&$service, request).await;
        assert!(
            response.status().is_success(),
            "Got {} response when creating expense",
            response.status()
        );
        let expense: gastos_lib::expense::ExpenseView = test::read_body_json(response).await;
        expense
    }};
}

#[fixture]
#[once]
pub fn tracing_setup() -> () {
    tracing_subscriber::fmt()
        .pretty()
        .with_max_level(Level::DEBUG)
        .init();
    info!("tracing initialized");
}

#[fixture]
pub fn repos() -> Repos {
    gastos_repo::mem_repo::create_repos()
}
