use crate::report_repo::{CategoryTotal, DateRange, ReportRepo, ReportRepoError};
use crate::sqlx_repo::SQLxRepo;
use anyhow::Context;
use async_trait::async_trait;
use sqlx::{QueryBuilder, Sqlite};
use tracing::instrument;

fn push_range_filter(query_builder: &mut QueryBuilder<Sqlite>, range: &DateRange) {
    query_builder
        .push(" expenses.date >= ")
        .push_bind(range.start());
    if let Some(end) = range.end_exclusive() {
        query_builder.push(" AND expenses.date < ").push_bind(end);
    }
}

#[async_trait]
impl ReportRepo for SQLxRepo {
    #[instrument(skip(self))]
    async fn get_totals_per_category(
        &self,
        range: DateRange,
    ) -> Result<Vec<CategoryTotal>, ReportRepoError> {
        let mut query_builder = QueryBuilder::new(
            r#"
            SELECT categories.name                                  AS category_name,
                   CAST(COALESCE(SUM(expenses.amount), 0) AS REAL) AS total
            FROM categories
                     LEFT JOIN expenses ON expenses.category_id = categories.id AND
            "#,
        );
        push_range_filter(&mut query_builder, &range);
        query_builder.push(
            " GROUP BY categories.id, categories.name ORDER BY total DESC, categories.name",
        );

        let totals: Vec<CategoryTotal> = query_builder
            .build_query_as()
            .fetch_all(&self.pool)
            .await
            .with_context(|| {
                format!(
                    "Unable to get totals per category from {} until {}",
                    range.from, range.until
                )
            })?;
        Ok(totals)
    }

    #[instrument(skip(self))]
    async fn get_total(&self, range: DateRange) -> Result<f64, ReportRepoError> {
        let mut query_builder = QueryBuilder::new(
            "SELECT CAST(COALESCE(SUM(expenses.amount), 0) AS REAL) FROM expenses WHERE",
        );
        push_range_filter(&mut query_builder, &range);

        let total: f64 = query_builder
            .build_query_scalar()
            .fetch_one(&self.pool)
            .await
            .with_context(|| {
                format!("Unable to get total from {} until {}", range.from, range.until)
            })?;
        Ok(total)
    }
}
