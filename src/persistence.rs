//! Save and restore the financial state as one JSON blob.

use crate::error::StorageError;
use crate::model::{FinancialState, Record};
use crate::storage::KeyValueStore;
use crate::validation::MAX_AMOUNT;
use rust_decimal::Decimal;
use std::collections::HashSet;
use tracing::{debug, info, warn};

pub struct Persistence<S> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> Persistence<S> {
    pub fn new(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Never fails: a missing, unreadable or malformed payload yields the
    /// default (zero salary, no records) state.
    pub fn load(&self) -> FinancialState {
        let raw = match self.store.get(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                info!(key = %self.key, "no stored state, starting empty");
                return FinancialState::default();
            }
            Err(err) => {
                warn!(key = %self.key, error = %err, "failed to read stored state");
                return FinancialState::default();
            }
        };

        match serde_json::from_str::<FinancialState>(&raw) {
            Ok(state) => {
                let state = sanitize(state);
                info!(
                    key = %self.key,
                    expenses = state.expenses.len(),
                    balances = state.balances.len(),
                    "loaded stored state"
                );
                state
            }
            Err(err) => {
                warn!(key = %self.key, error = %err, "stored state is malformed, starting empty");
                FinancialState::default()
            }
        }
    }

    pub fn save(&self, state: &FinancialState) -> Result<(), StorageError> {
        let raw = serde_json::to_string(state)?;
        self.store.set(&self.key, &raw)?;
        debug!(key = %self.key, bytes = raw.len(), "state saved");
        Ok(())
    }

    pub fn clear(&self) -> Result<(), StorageError> {
        self.store.remove(&self.key)
    }
}

/// Drops whatever breaks the in-memory invariants: record values outside
/// `(0, MAX_AMOUNT]`, repeated ids within a collection, a salary outside
/// `[0, MAX_AMOUNT]`.
fn sanitize(mut state: FinancialState) -> FinancialState {
    if state.salary < Decimal::ZERO || state.salary > MAX_AMOUNT {
        warn!(salary = %state.salary, "out-of-range stored salary reset to zero");
        state.salary = Decimal::ZERO;
    }
    state.expenses = keep_valid(state.expenses, "expenses");
    state.balances = keep_valid(state.balances, "balances");
    state
}

fn keep_valid(records: Vec<Record>, collection: &'static str) -> Vec<Record> {
    let mut seen = HashSet::new();
    records
        .into_iter()
        .filter(|record| {
            if record.value <= Decimal::ZERO {
                warn!(collection, id = record.id, "dropping stored record with non-positive value");
                return false;
            }
            if record.value > MAX_AMOUNT {
                warn!(collection, id = record.id, "dropping stored record above the maximum amount");
                return false;
            }
            if !seen.insert(record.id) {
                warn!(collection, id = record.id, "dropping stored record with duplicate id");
                return false;
            }
            true
        })
        .collect()
}
