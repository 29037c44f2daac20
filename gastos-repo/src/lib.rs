use std::sync::Arc;

pub mod category_repo;
pub mod expense_repo;
pub mod report_repo;

// implementation modules
pub mod mem_repo;
pub mod sqlx_repo;

pub type Repos = (
    Arc<dyn category_repo::CategoryRepo>,
    Arc<dyn expense_repo::ExpenseRepo>,
    Arc<dyn report_repo::ReportRepo>,
);
