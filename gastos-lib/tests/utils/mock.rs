use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use anyhow::anyhow;
use async_trait::async_trait;
use gastos_repo::expense_repo::{Expense, ExpenseRepo, ExpenseRepoError, NewExpense};
use gastos_repo::report_repo::{CategoryTotal, DateRange, ReportRepo, ReportRepoError};

/// Forwards to `inner` while counting how many single expense lookups reach the store.
pub struct CountingExpenseRepo {
    inner: Arc<dyn ExpenseRepo>,
    lookups: AtomicUsize,
}

impl CountingExpenseRepo {
    pub fn new(inner: Arc<dyn ExpenseRepo>) -> CountingExpenseRepo {
        CountingExpenseRepo {
            inner,
            lookups: AtomicUsize::new(0),
        }
    }

    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ExpenseRepo for CountingExpenseRepo {
    async fn create_expense(&self, new_expense: NewExpense) -> Result<Expense, ExpenseRepoError> {
        self.inner.create_expense(new_expense).await
    }

    async fn get_all_expenses(&self) -> Result<Vec<Expense>, ExpenseRepoError> {
        self.inner.get_all_expenses().await
    }

    async fn get_expense(&self, expense_id: i64) -> Result<Expense, ExpenseRepoError> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        self.inner.get_expense(expense_id).await
    }
}

/// Every call fails as a storage error carrying `cause`.
pub struct FailingRepo {
    cause: &'static str,
}

impl FailingRepo {
    pub fn new(cause: &'static str) -> FailingRepo {
        FailingRepo { cause }
    }
}

#[async_trait]
impl ExpenseRepo for FailingRepo {
    async fn create_expense(&self, _new_expense: NewExpense) -> Result<Expense, ExpenseRepoError> {
        Err(anyhow!(self.cause).context("Unable to insert expense").into())
    }

    async fn get_all_expenses(&self) -> Result<Vec<Expense>, ExpenseRepoError> {
        Err(anyhow!(self.cause).context("Unable to get expenses").into())
    }

    async fn get_expense(&self, _expense_id: i64) -> Result<Expense, ExpenseRepoError> {
        Err(anyhow!(self.cause).context("Unable to get expense").into())
    }
}

#[async_trait]
impl ReportRepo for FailingRepo {
    async fn get_totals_per_category(
        &self,
        _range: DateRange,
    ) -> Result<Vec<CategoryTotal>, ReportRepoError> {
        Err(anyhow!(self.cause).context("Unable to get totals per category").into())
    }

    async fn get_total(&self, _range: DateRange) -> Result<f64, ReportRepoError> {
        Err(anyhow!(self.cause).context("Unable to get total").into())
    }
}
