use chrono::NaiveDate;
use finance_tracker::{
    FinancialState, FixedClock, KeyValueStore, Ledger, LedgerError, MemoryStore, RecordKind,
    TrackerConfig, ValidationError, DEFAULT_STORAGE_KEY,
};
use rust_decimal::Decimal;
use std::rc::Rc;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
}

fn open(store: &Rc<MemoryStore>) -> Ledger<Rc<MemoryStore>, FixedClock> {
    Ledger::with_clock(
        Rc::clone(store),
        FixedClock::new(today(), 1_710_460_800_000),
        &TrackerConfig::default(),
    )
}

#[test]
fn salary_minus_rent_leaves_free_slice() {
    let store = Rc::new(MemoryStore::new());
    let mut ledger = open(&store);

    ledger.set_salary(Decimal::new(3000, 0)).unwrap();
    ledger
        .add_expense(today(), "Rent", Decimal::new(1200, 0))
        .unwrap();

    assert_eq!(ledger.total_expenses(), Decimal::new(1200, 0));
    assert_eq!(ledger.net_balance(), Decimal::new(1800, 0));

    let series = ledger.chart_series();
    assert_eq!(series.len(), 2);
    let rent = &series.slices()[0];
    assert_eq!(rent.label, "Rent");
    assert_eq!(rent.value, Decimal::new(1200, 0));
    assert_eq!(rent.color, "#ef4444");
    let free = &series.slices()[1];
    assert_eq!(free.label, "Livre");
    assert_eq!(free.value, Decimal::new(1800, 0));
    assert_eq!(free.color, "#10b981");
}

#[test]
fn overspending_has_no_free_slice() {
    let store = Rc::new(MemoryStore::new());
    let mut ledger = open(&store);

    // a one-letter name fails the name rule
    ledger.add_expense(today(), "X", Decimal::new(50, 0)).unwrap_err();
    ledger.add_expense(today(), "Xis", Decimal::new(50, 0)).unwrap();

    assert_eq!(ledger.net_balance(), Decimal::new(-50, 0));
    let series = ledger.chart_series();
    assert_eq!(series.len(), 1);
    assert_eq!(series.labels(), vec!["Xis"]);
    assert_eq!(series.colors(), vec!["#ef4444"]);
}

#[test]
fn short_name_is_rejected_without_a_write() {
    let store = Rc::new(MemoryStore::new());
    let mut ledger = open(&store);

    let err = ledger
        .add_expense(today(), "ab", Decimal::new(10, 0))
        .unwrap_err();

    assert!(matches!(
        err,
        LedgerError::Validation(ValidationError::NameTooShort { min: 3, actual: 2 })
    ));
    assert_eq!(*ledger.state(), FinancialState::default());
    assert_eq!(store.writes(), 0);
    assert!(!store.contains(DEFAULT_STORAGE_KEY));
}

#[test]
fn update_of_missing_id_changes_nothing() {
    let store = Rc::new(MemoryStore::new());
    let mut ledger = open(&store);
    let id = ledger
        .add_expense(today(), "Rent", Decimal::new(1200, 0))
        .unwrap();
    let before = ledger.state().clone();
    let writes = store.writes();

    let err = ledger
        .update_expense(id + 1, today(), "Other", Decimal::new(5, 0))
        .unwrap_err();

    assert!(matches!(
        err,
        LedgerError::NotFound {
            kind: RecordKind::Expense,
            ..
        }
    ));
    assert_eq!(*ledger.state(), before);
    assert_eq!(store.writes(), writes);
}

#[test]
fn fresh_ledger_on_same_store_sees_every_record() {
    let store = Rc::new(MemoryStore::new());
    {
        let mut ledger = open(&store);
        ledger.set_salary(Decimal::new(250075, 2)).unwrap();
        ledger
            .add_expense(today(), "Groceries", Decimal::new(31999, 2))
            .unwrap();
        ledger
            .add_balance(today(), "Freelance", Decimal::new(400, 0))
            .unwrap();
    }

    let reopened = open(&store);
    assert_eq!(reopened.salary(), Decimal::new(250075, 2));
    assert_eq!(reopened.state().expenses.len(), 1);
    assert_eq!(reopened.state().expenses[0].name, "Groceries");
    assert_eq!(reopened.state().expenses[0].value, Decimal::new(31999, 2));
    assert_eq!(reopened.total_extra_income(), Decimal::new(400, 0));
}

#[test]
fn payload_from_the_first_schema_version_still_loads() {
    let raw = r#"{"salary":1500,"expenses":[{"id":1709251200000,"date":"2024-03-01","name":"Internet","value":99.9}]}"#;
    let store = Rc::new(MemoryStore::with_entry(DEFAULT_STORAGE_KEY, raw));
    let mut ledger = open(&store);

    assert_eq!(ledger.salary(), Decimal::new(1500, 0));
    assert_eq!(ledger.total_expenses(), Decimal::new(999, 1));
    assert!(ledger.state().balances.is_empty());

    // new ids never collide with the legacy one
    let id = ledger
        .add_balance(today(), "Bonus", Decimal::new(10, 0))
        .unwrap();
    assert!(id > 1_709_251_200_000);

    let saved = store.get(DEFAULT_STORAGE_KEY).unwrap().unwrap();
    let json: serde_json::Value = serde_json::from_str(&saved).unwrap();
    assert_eq!(json["balances"][0]["name"], "Bonus");
}

#[test]
fn corrupt_payload_starts_empty_and_is_overwritten_on_first_change() {
    let store = Rc::new(MemoryStore::with_entry(DEFAULT_STORAGE_KEY, "{oops"));
    let mut ledger = open(&store);
    assert_eq!(*ledger.state(), FinancialState::default());

    ledger.set_salary(Decimal::new(10, 0)).unwrap();
    let saved = store.get(DEFAULT_STORAGE_KEY).unwrap().unwrap();
    assert!(serde_json::from_str::<FinancialState>(&saved).is_ok());
}

#[test]
fn clear_all_then_reopen_is_empty() {
    let store = Rc::new(MemoryStore::new());
    {
        let mut ledger = open(&store);
        ledger.set_salary(Decimal::new(3000, 0)).unwrap();
        ledger
            .add_expense(today(), "Rent", Decimal::new(1200, 0))
            .unwrap();
        ledger.clear_all().unwrap();
    }

    let reopened = open(&store);
    assert_eq!(*reopened.state(), FinancialState::default());
    assert!(reopened.chart_series().is_empty());
}

#[test]
fn rejected_oversized_expense_keeps_everything_after_reopen() {
    let store = Rc::new(MemoryStore::new());
    {
        let mut ledger = open(&store);
        ledger.set_salary(Decimal::new(3000, 0)).unwrap();
        ledger
            .add_expense(today(), "Rent", Decimal::new(1200, 0))
            .unwrap();
        let err = ledger
            .add_expense(today(), "Huge", Decimal::MAX)
            .unwrap_err();
        assert!(matches!(
            err,
            LedgerError::Validation(ValidationError::TooLarge { .. })
        ));
    }

    let reopened = open(&store);
    assert_eq!(reopened.salary(), Decimal::new(3000, 0));
    assert_eq!(reopened.state().expenses.len(), 1);
    assert_eq!(reopened.total_expenses(), Decimal::new(1200, 0));
}
