//! The financial ledger: canonical state plus validated, persisted mutations.
//!
//! Every mutating call validates, applies the change in memory and writes the
//! whole state to the durable store before returning. A failed write is
//! returned to the caller and the in-memory change is kept; the two are not
//! transactional.

use crate::clock::{Clock, IdGenerator, SystemClock};
use crate::config::{ChartPalette, TrackerConfig};
use crate::error::{LedgerError, Result};
use crate::model::{ChartSeries, ChartSlice, FinancialState, LedgerSummary, Record, RecordKind};
use crate::persistence::Persistence;
use crate::storage::KeyValueStore;
use crate::validation::{validate_salary, RecordRules};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::{debug, info, warn};

pub struct Ledger<S, C = SystemClock> {
    state: FinancialState,
    persistence: Persistence<S>,
    clock: C,
    ids: IdGenerator,
    rules: RecordRules,
    palette: ChartPalette,
}

impl<S: KeyValueStore> Ledger<S, SystemClock> {
    /// Loads the stored state (or the empty default) and reads time from the system clock.
    pub fn open(store: S, config: &TrackerConfig) -> Self {
        Self::with_clock(store, SystemClock, config)
    }
}

impl<S: KeyValueStore, C: Clock> Ledger<S, C> {
    pub fn with_clock(store: S, clock: C, config: &TrackerConfig) -> Self {
        let persistence = Persistence::new(store, config.storage_key.clone());
        let state = persistence.load();
        let ids = IdGenerator::starting_after(state.max_id());

        Self {
            state,
            persistence,
            clock,
            ids,
            rules: RecordRules::from(config),
            palette: config.chart.clone(),
        }
    }

    pub fn state(&self) -> &FinancialState {
        &self.state
    }

    pub fn store(&self) -> &S {
        self.persistence.store()
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    // ------------------------------------------------------------------
    // Mutations
    // ------------------------------------------------------------------

    /// Overwrites the monthly salary.
    pub fn set_salary(&mut self, value: Decimal) -> Result<()> {
        validate_salary(value)?;
        self.state.salary = value;
        debug!(salary = %value, "salary updated");
        self.commit()
    }

    /// Returns the id of the new expense.
    pub fn add_expense(&mut self, date: NaiveDate, name: &str, value: Decimal) -> Result<u64> {
        self.add(RecordKind::Expense, date, name, value)
    }

    /// Returns the id of the new extra-income entry.
    pub fn add_balance(&mut self, date: NaiveDate, name: &str, value: Decimal) -> Result<u64> {
        self.add(RecordKind::Balance, date, name, value)
    }

    /// Ok(false) when no expense had that id.
    pub fn delete_expense(&mut self, id: u64) -> Result<bool> {
        self.delete(RecordKind::Expense, id)
    }

    pub fn delete_balance(&mut self, id: u64) -> Result<bool> {
        self.delete(RecordKind::Balance, id)
    }

    pub fn update_expense(
        &mut self,
        id: u64,
        date: NaiveDate,
        name: &str,
        value: Decimal,
    ) -> Result<()> {
        self.update(RecordKind::Expense, id, date, name, value)
    }

    pub fn update_balance(
        &mut self,
        id: u64,
        date: NaiveDate,
        name: &str,
        value: Decimal,
    ) -> Result<()> {
        self.update(RecordKind::Balance, id, date, name, value)
    }

    /// Resets to the empty state and removes the stored blob.
    pub fn clear_all(&mut self) -> Result<()> {
        self.state = FinancialState::default();
        info!("all financial data cleared");
        self.persistence.clear().map_err(|err| {
            warn!(error = %err, "failed to clear stored state");
            LedgerError::from(err)
        })
    }

    pub fn add(
        &mut self,
        kind: RecordKind,
        date: NaiveDate,
        name: &str,
        value: Decimal,
    ) -> Result<u64> {
        self.rules.check(date, name, value, self.clock.today())?;

        let id = self.ids.next_id(self.clock.now_millis());
        self.state.records_mut(kind).push(Record {
            id,
            date,
            name: name.trim().to_string(),
            value,
        });
        debug!(%kind, id, %value, "record added");
        self.commit()?;
        Ok(id)
    }

    pub fn delete(&mut self, kind: RecordKind, id: u64) -> Result<bool> {
        let records = self.state.records_mut(kind);
        let before = records.len();
        records.retain(|r| r.id != id);
        if records.len() == before {
            debug!(%kind, id, "delete of unknown record ignored");
            return Ok(false);
        }
        debug!(%kind, id, "record deleted");
        self.commit()?;
        Ok(true)
    }

    pub fn update(
        &mut self,
        kind: RecordKind,
        id: u64,
        date: NaiveDate,
        name: &str,
        value: Decimal,
    ) -> Result<()> {
        self.rules.check(date, name, value, self.clock.today())?;

        let record = self
            .state
            .records_mut(kind)
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(LedgerError::NotFound { kind, id })?;
        record.date = date;
        record.name = name.trim().to_string();
        record.value = value;
        debug!(%kind, id, "record updated");
        self.commit()
    }

    fn commit(&self) -> Result<()> {
        self.persistence.save(&self.state).map_err(|err| {
            warn!(error = %err, "state changed in memory but was not persisted");
            LedgerError::from(err)
        })
    }

    // ------------------------------------------------------------------
    // Derived reads
    // ------------------------------------------------------------------

    pub fn salary(&self) -> Decimal {
        self.state.salary
    }

    pub fn find(&self, kind: RecordKind, id: u64) -> Option<&Record> {
        self.state.records(kind).iter().find(|r| r.id == id)
    }

    // Every stored amount is at most MAX_AMOUNT, so the sums below stay far
    // inside the Decimal range.
    pub fn total_expenses(&self) -> Decimal {
        self.state.expenses.iter().map(|r| r.value).sum()
    }

    pub fn total_extra_income(&self) -> Decimal {
        self.state.balances.iter().map(|r| r.value).sum()
    }

    pub fn net_balance(&self) -> Decimal {
        self.state.salary + self.total_extra_income() - self.total_expenses()
    }

    /// One slice per expense, then a free-capacity slice only while the net
    /// balance is positive.
    pub fn chart_series(&self) -> ChartSeries {
        let mut slices: Vec<ChartSlice> = self
            .state
            .expenses
            .iter()
            .map(|r| ChartSlice {
                label: r.name.clone(),
                value: r.value,
                color: self.palette.spent_color.clone(),
                border_color: self.palette.spent_border.clone(),
            })
            .collect();

        let net = self.net_balance();
        if net > Decimal::ZERO {
            slices.push(ChartSlice {
                label: self.palette.free_label.clone(),
                value: net,
                color: self.palette.free_color.clone(),
                border_color: self.palette.free_border.clone(),
            });
        }
        ChartSeries(slices)
    }

    pub fn sorted_expenses(&self) -> Vec<Record> {
        sorted_by_date_desc(&self.state.expenses)
    }

    pub fn sorted_balances(&self) -> Vec<Record> {
        sorted_by_date_desc(&self.state.balances)
    }

    pub fn summary(&self) -> LedgerSummary {
        LedgerSummary {
            salary: self.state.salary,
            total_expenses: self.total_expenses(),
            total_extra_income: self.total_extra_income(),
            net_balance: self.net_balance(),
            sorted_expenses: self.sorted_expenses(),
            sorted_balances: self.sorted_balances(),
            chart_series: self.chart_series(),
        }
    }
}

/// Newest first; equal dates keep insertion order.
fn sorted_by_date_desc(records: &[Record]) -> Vec<Record> {
    let mut sorted = records.to_vec();
    sorted.sort_by(|a, b| b.date.cmp(&a.date));
    sorted
}
