use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[async_trait]
pub trait ReportRepo: Sync + Send {
    /// Sum of expense amounts per category within `range`. Every category is listed, with a total
    /// of zero when it has no expenses in range, largest total first.
    async fn get_totals_per_category(
        &self,
        range: DateRange,
    ) -> Result<Vec<CategoryTotal>, ReportRepoError>;

    /// Sum of all expense amounts within `range`, zero if there are none.
    async fn get_total(&self, range: DateRange) -> Result<f64, ReportRepoError>;
}

#[derive(Error, Debug)]
pub enum ReportRepoError {
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Inclusive range of days.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct DateRange {
    pub from: NaiveDate,
    pub until: NaiveDate,
}

impl DateRange {
    pub const fn new(from: NaiveDate, until: NaiveDate) -> DateRange {
        DateRange { from, until }
    }

    pub fn start(&self) -> NaiveDateTime {
        self.from.and_time(NaiveTime::MIN)
    }

    /// First instant after the range, `None` when `until` is the last representable day.
    pub fn end_exclusive(&self) -> Option<NaiveDateTime> {
        self.until.succ_opt().map(|d| d.and_time(NaiveTime::MIN))
    }

    pub fn contains(&self, date: NaiveDateTime) -> bool {
        if date < self.start() {
            return false;
        }
        match self.end_exclusive() {
            Some(end) => date < end,
            None => true,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Debug, sqlx::FromRow)]
pub struct CategoryTotal {
    pub category_name: String,
    pub total: f64,
}

impl CategoryTotal {
    pub const fn new(category_name: String, total: f64) -> CategoryTotal {
        CategoryTotal {
            category_name,
            total,
        }
    }
}

/// Orders totals the way reports present them: largest total first, then by name.
pub fn sort_totals(totals: &mut [CategoryTotal]) {
    totals.sort_by(|a, b| {
        b.total
            .total_cmp(&a.total)
            .then_with(|| a.category_name.cmp(&b.category_name))
    });
}
