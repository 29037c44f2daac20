use crate::expense_repo::ExpenseRepoError::{ExpenseNotFound, IntegrityViolation};
use crate::expense_repo::{Expense, ExpenseRepo, ExpenseRepoError, NewExpense};
use crate::sqlx_repo::SQLxRepo;
use anyhow::{anyhow, Context};
use async_trait::async_trait;
use sqlx::{query_as, query_scalar};
use tracing::instrument;

const SELECT_EXPENSES: &str = r#"
    SELECT expenses.id,
           expenses.description,
           expenses.amount,
           expenses.date,
           expenses.category_id,
           categories.name AS category_name
    FROM expenses
             INNER JOIN categories ON categories.id = expenses.category_id
    "#;

impl SQLxRepo {
    #[instrument(skip(self))]
    async fn get_expense_entry(&self, expense_id: i64) -> Result<Option<Expense>, ExpenseRepoError> {
        let query = format!("{} WHERE expenses.id = ?", SELECT_EXPENSES);
        let expense = query_as::<_, Expense>(&query)
            .bind(expense_id)
            .fetch_optional(&self.pool)
            .await
            .with_context(|| format!("Unable to get expense {}", expense_id))?;
        Ok(expense)
    }

    #[instrument(skip(self, new_expense))]
    async fn insert_expense_entry(&self, new_expense: &NewExpense) -> Result<i64, ExpenseRepoError> {
        let result = query_scalar::<_, i64>(
            "INSERT INTO expenses(description, amount, date, category_id) VALUES (?, ?, ?, ?) RETURNING id",
        )
        .bind(&new_expense.description)
        .bind(new_expense.amount)
        .bind(new_expense.date)
        .bind(new_expense.category_id)
        .fetch_one(&self.pool)
        .await;

        match result {
            Ok(id) => Ok(id),
            Err(sqlx::Error::Database(e))
                if e.is_foreign_key_violation() || e.is_unique_violation() =>
            {
                Err(IntegrityViolation(e.message().to_owned()))
            }
            Err(e) => Err(anyhow!(e).context("Unable to insert expense").into()),
        }
    }
}

#[async_trait]
impl ExpenseRepo for SQLxRepo {
    #[instrument(skip(self, new_expense))]
    async fn create_expense(&self, new_expense: NewExpense) -> Result<Expense, ExpenseRepoError> {
        let id = self.insert_expense_entry(&new_expense).await?;

        self.get_expense_entry(id)
            .await?
            .ok_or_else(|| anyhow!("Expense {} missing right after insert", id).into())
    }

    #[instrument(skip(self))]
    async fn get_all_expenses(&self) -> Result<Vec<Expense>, ExpenseRepoError> {
        let query = format!("{} ORDER BY expenses.id", SELECT_EXPENSES);
        let expenses = query_as::<_, Expense>(&query)
            .fetch_all(&self.pool)
            .await
            .context("Unable to get expenses")?;
        Ok(expenses)
    }

    #[instrument(skip(self))]
    async fn get_expense(&self, expense_id: i64) -> Result<Expense, ExpenseRepoError> {
        self.get_expense_entry(expense_id)
            .await?
            .ok_or(ExpenseNotFound(expense_id))
    }
}
