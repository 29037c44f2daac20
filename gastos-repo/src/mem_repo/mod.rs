use crate::category_repo::{Category, CategoryRepo};
use crate::expense_repo::{Expense, ExpenseRepo};
use crate::report_repo::ReportRepo;
use crate::Repos;
use anyhow::anyhow;
use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

mod category_repo;
mod expense_repo;
mod report_repo;

struct State {
    categories: BTreeMap<i64, Category>,
    category_ids: HashMap<String, i64>,
    expenses: BTreeMap<i64, Expense>,
    next_category_id: i64,
    next_expense_id: i64,
}

pub struct MemRepo {
    state: RwLock<State>,
}

impl MemRepo {
    pub fn new() -> MemRepo {
        // ids start at 1, as SQLite assigns them
        let state = State {
            categories: BTreeMap::new(),
            category_ids: HashMap::new(),
            expenses: BTreeMap::new(),
            next_category_id: 1,
            next_expense_id: 1,
        };
        MemRepo {
            state: RwLock::new(state),
        }
    }

    fn read_lock(&self) -> Result<RwLockReadGuard<'_, State>, anyhow::Error> {
        self.state
            .read()
            .map_err(|_| anyhow!("Unable to acquire lock"))
    }

    fn write_lock(&self) -> Result<RwLockWriteGuard<'_, State>, anyhow::Error> {
        self.state
            .write()
            .map_err(|_| anyhow!("Unable to acquire lock"))
    }
}

impl Default for MemRepo {
    fn default() -> Self {
        MemRepo::new()
    }
}

pub fn create_repos() -> Repos {
    let repo = Arc::new(MemRepo::new());
    let category_repo: Arc<dyn CategoryRepo> = repo.clone();
    let expense_repo: Arc<dyn ExpenseRepo> = repo.clone();
    let report_repo: Arc<dyn ReportRepo> = repo;
    (category_repo, expense_repo, report_repo)
}
