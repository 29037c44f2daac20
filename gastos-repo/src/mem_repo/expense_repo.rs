use crate::expense_repo::ExpenseRepoError::{ExpenseNotFound, IntegrityViolation};
use crate::expense_repo::{Expense, ExpenseRepo, ExpenseRepoError, NewExpense};
use crate::mem_repo::MemRepo;
use async_trait::async_trait;

#[async_trait]
impl ExpenseRepo for MemRepo {
    async fn create_expense(&self, new_expense: NewExpense) -> Result<Expense, ExpenseRepoError> {
        let mut write_guard = self.write_lock()?;

        let Some(category) = write_guard.categories.get(&new_expense.category_id) else {
            return Err(IntegrityViolation(format!(
                "category {} does not exist",
                new_expense.category_id
            )));
        };
        let category_name = category.name.clone();

        let id = write_guard.next_expense_id;
        write_guard.next_expense_id += 1;

        let expense = new_expense.to_expense(id, category_name);
        write_guard.expenses.insert(id, expense.clone());

        Ok(expense)
    }

    async fn get_all_expenses(&self) -> Result<Vec<Expense>, ExpenseRepoError> {
        let read_guard = self.read_lock()?;
        Ok(read_guard.expenses.values().cloned().collect())
    }

    async fn get_expense(&self, expense_id: i64) -> Result<Expense, ExpenseRepoError> {
        let read_guard = self.read_lock()?;

        read_guard
            .expenses
            .get(&expense_id)
            .cloned()
            .ok_or(ExpenseNotFound(expense_id))
    }
}
