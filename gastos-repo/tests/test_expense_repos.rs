mod utils;

use chrono::NaiveDate;
use gastos_repo::expense_repo::{ExpenseRepoError, NewExpense};
use rstest::rstest;
use utils::generator::NewExpenseGenerator;
use utils::RepoType;

#[rstest]
#[case::sqlx(RepoType::SQLx)]
#[case::mem(RepoType::Mem)]
#[actix_rt::test]
async fn test_create_and_get_expense(#[case] repo_type: RepoType) {
    let (category_repo, expense_repo, _report_repo) = utils::build_repos(repo_type).await;
    let category = utils::create_category(&category_repo, "Food").await;

    let new_expense = NewExpense::new(
        "Lunch".to_string(),
        20.5,
        NaiveDate::from_ymd_opt(2024, 1, 10)
            .unwrap()
            .and_hms_opt(12, 30, 0)
            .unwrap(),
        category.id,
    );
    let expense = expense_repo
        .create_expense(new_expense.clone())
        .await
        .unwrap();
    assert!(expense.id > 0);
    assert_eq!(expense.description, new_expense.description);
    assert_eq!(expense.amount, new_expense.amount);
    assert_eq!(expense.date, new_expense.date);
    assert_eq!(expense.category_id, category.id);
    assert_eq!(expense.category_name, "Food");

    let stored_expense = expense_repo.get_expense(expense.id).await.unwrap();
    assert_eq!(stored_expense, expense);
}

#[rstest]
#[case::sqlx(RepoType::SQLx)]
#[case::mem(RepoType::Mem)]
#[actix_rt::test]
async fn test_create_expense_with_missing_category(#[case] repo_type: RepoType) {
    let (_category_repo, expense_repo, _report_repo) = utils::build_repos(repo_type).await;

    let new_expense = NewExpenseGenerator::new(vec![1234]).generate();
    let result = expense_repo.create_expense(new_expense).await;
    assert!(
        matches!(result, Err(ExpenseRepoError::IntegrityViolation(_))),
        "Got {:?}",
        result
    );

    assert!(expense_repo.get_all_expenses().await.unwrap().is_empty());
}

#[rstest]
#[case::sqlx(RepoType::SQLx)]
#[case::mem(RepoType::Mem)]
#[actix_rt::test]
async fn test_get_missing_expense(#[case] repo_type: RepoType) {
    let (_category_repo, expense_repo, _report_repo) = utils::build_repos(repo_type).await;

    let result = expense_repo.get_expense(1234).await;
    assert!(matches!(result, Err(ExpenseRepoError::ExpenseNotFound(1234))));
}

#[rstest]
#[case::sqlx(RepoType::SQLx)]
#[case::mem(RepoType::Mem)]
#[actix_rt::test]
async fn test_get_all_expenses(#[case] repo_type: RepoType) {
    let (category_repo, expense_repo, _report_repo) = utils::build_repos(repo_type).await;
    let food = utils::create_category(&category_repo, "Food").await;
    let rent = utils::create_category(&category_repo, "Rent").await;

    let mut generator = NewExpenseGenerator::new(vec![food.id, rent.id]);
    let mut created = Vec::new();
    for new_expense in generator.generate_many(5) {
        created.push(expense_repo.create_expense(new_expense).await.unwrap());
    }

    let expenses = expense_repo.get_all_expenses().await.unwrap();
    assert_eq!(expenses, created);
    for expense in expenses {
        let expected_name = if expense.category_id == food.id {
            "Food"
        } else {
            "Rent"
        };
        assert_eq!(expense.category_name, expected_name);
    }
}
