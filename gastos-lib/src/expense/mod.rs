use actix_web::web;
use chrono::{Local, SubsecRound};
use gastos_repo::expense_repo::{Expense, NewExpense};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::dates;
use crate::error::HandlerError;

pub(crate) mod handlers;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(handlers::create_expense)
        .service(handlers::get_all_expenses)
        .service(handlers::get_expense)
        .service(handlers::find_expense);
}

/// Form submitted to record a new expense.
#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct NewExpenseForm {
    #[schema(example = "Lançamento de cartão do mês 12/29")]
    pub descricao: String,
    #[schema(example = 0.0)]
    pub valor: f64,
    /// Defaults to the current time when omitted.
    #[schema(example = "16/12/2029")]
    pub data: Option<String>,
    #[schema(example = 1)]
    pub categoria_id: i64,
}

impl NewExpenseForm {
    pub fn new(descricao: String, valor: f64, data: Option<String>, categoria_id: i64) -> Self {
        NewExpenseForm {
            descricao,
            valor,
            data,
            categoria_id,
        }
    }

    pub fn into_new_expense(self) -> Result<NewExpense, HandlerError> {
        if !self.valor.is_finite() {
            return Err(HandlerError::BadRequest(format!(
                "Invalid amount '{}', expected a finite number",
                self.valor
            )));
        }
        let date = match self.data.as_deref().map(str::trim) {
            None | Some("") => Local::now().naive_local().trunc_subsecs(0),
            Some(data) => dates::parse_timestamp(data).ok_or_else(|| {
                HandlerError::BadRequest(format!("Invalid date '{}', expected DD/MM/YYYY", data))
            })?,
        };
        Ok(NewExpense::new(
            self.descricao,
            self.valor,
            date,
            self.categoria_id,
        ))
    }
}

#[derive(Serialize, Deserialize, Debug, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ExpenseLookup {
    /// Id of the expense, must not be 0.
    #[param(example = 1)]
    pub id: Option<i64>,
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Debug, ToSchema)]
pub struct ExpenseView {
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = "Lançamento de cartão do mês 12/29")]
    pub descricao: String,
    #[schema(example = 256.0)]
    pub valor: f64,
    #[schema(example = "16/12/2029")]
    pub data: String,
    #[schema(example = "Cartões")]
    pub categoria_name: String,
}

impl From<Expense> for ExpenseView {
    fn from(expense: Expense) -> Self {
        ExpenseView {
            id: expense.id,
            descricao: expense.description,
            valor: expense.amount,
            data: dates::format_day(expense.date),
            categoria_name: expense.category_name,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Debug, ToSchema)]
pub struct ExpenseList {
    pub gastos: Vec<ExpenseView>,
}

impl From<Vec<Expense>> for ExpenseList {
    fn from(expenses: Vec<Expense>) -> Self {
        ExpenseList {
            gastos: expenses.into_iter().map(ExpenseView::from).collect(),
        }
    }
}
