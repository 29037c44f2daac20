use async_trait::async_trait;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[async_trait]
pub trait ExpenseRepo: Sync + Send {
    async fn create_expense(&self, new_expense: NewExpense) -> Result<Expense, ExpenseRepoError>;

    async fn get_all_expenses(&self) -> Result<Vec<Expense>, ExpenseRepoError>;

    async fn get_expense(&self, expense_id: i64) -> Result<Expense, ExpenseRepoError>;
}

#[derive(Error, Debug)]
pub enum ExpenseRepoError {
    #[error("Expense with id {0} not found")]
    ExpenseNotFound(i64),
    /// The write was rejected by a constraint, e.g. the category does not exist.
    #[error("Expense violates a database constraint: {0}")]
    IntegrityViolation(String),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// An expense as read back from storage, joined with the name of its category.
#[derive(Serialize, Deserialize, Clone, PartialEq, Debug, sqlx::FromRow)]
pub struct Expense {
    pub id: i64,
    pub description: String,
    pub amount: f64,
    pub date: NaiveDateTime,
    pub category_id: i64,
    pub category_name: String,
}

impl Expense {
    pub const fn new(
        id: i64,
        description: String,
        amount: f64,
        date: NaiveDateTime,
        category_id: i64,
        category_name: String,
    ) -> Expense {
        Expense {
            id,
            description,
            amount,
            date,
            category_id,
            category_name,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct NewExpense {
    pub description: String,
    pub amount: f64,
    pub date: NaiveDateTime,
    pub category_id: i64,
}

impl NewExpense {
    pub const fn new(
        description: String,
        amount: f64,
        date: NaiveDateTime,
        category_id: i64,
    ) -> NewExpense {
        NewExpense {
            description,
            amount,
            date,
            category_id,
        }
    }

    pub fn to_expense(self, id: i64, category_name: String) -> Expense {
        Expense::new(
            id,
            self.description,
            self.amount,
            self.date,
            self.category_id,
            category_name,
        )
    }
}
