use crate::mem_repo::MemRepo;
use crate::report_repo::{sort_totals, CategoryTotal, DateRange, ReportRepo, ReportRepoError};
use async_trait::async_trait;
use std::collections::HashMap;

#[async_trait]
impl ReportRepo for MemRepo {
    async fn get_totals_per_category(
        &self,
        range: DateRange,
    ) -> Result<Vec<CategoryTotal>, ReportRepoError> {
        let read_guard = self.read_lock()?;

        let mut sums: HashMap<i64, f64> = read_guard
            .categories
            .keys()
            .map(|id| (*id, 0.0))
            .collect();
        for expense in read_guard.expenses.values() {
            if range.contains(expense.date) {
                *sums.entry(expense.category_id).or_insert(0.0) += expense.amount;
            }
        }

        let mut totals: Vec<CategoryTotal> = read_guard
            .categories
            .values()
            .map(|c| {
                let total = sums.get(&c.id).copied().unwrap_or(0.0);
                CategoryTotal::new(c.name.clone(), total)
            })
            .collect();
        sort_totals(&mut totals);

        Ok(totals)
    }

    async fn get_total(&self, range: DateRange) -> Result<f64, ReportRepoError> {
        let read_guard = self.read_lock()?;

        let total = read_guard
            .expenses
            .values()
            .filter(|e| range.contains(e.date))
            .map(|e| e.amount)
            .sum::<f64>();
        Ok(total)
    }
}
