//! Financial data model and its persisted shape

use chrono::NaiveDate;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Amounts are stored as plain JSON numbers. Going through the decimal text
/// keeps `1200.5` as `1200.5` in both directions.
mod amount {
    use rust_decimal::Decimal;
    use serde::{de, ser, Deserialize, Deserializer, Serializer};
    use std::str::FromStr;

    pub fn serialize<S: Serializer>(value: &Decimal, serializer: S) -> Result<S::Ok, S::Error> {
        let number =
            f64::from_str(&value.to_string()).map_err(<S::Error as ser::Error>::custom)?;
        serializer.serialize_f64(number)
    }

    /// Numbers beyond the `Decimal` range saturate so that load sanitizing
    /// drops the one record instead of the whole payload failing to parse.
    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Decimal, D::Error> {
        let number = f64::deserialize(deserializer)?;
        if !number.is_finite() {
            return Err(de::Error::custom("amount is not a finite number"));
        }
        match Decimal::from_str(&number.to_string()) {
            Ok(value) => Ok(value),
            Err(_) if number > 0.0 => Ok(Decimal::MAX),
            Err(_) if number < 0.0 => Ok(Decimal::MIN),
            Err(err) => Err(de::Error::custom(err)),
        }
    }
}

/// Which collection a record belongs to. Expenses lower the balance,
/// balances (extra income) raise it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RecordKind {
    Expense,
    Balance,
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordKind::Expense => write!(f, "Expense"),
            RecordKind::Balance => write!(f, "Balance"),
        }
    }
}

/// A dated, named, strictly positive amount.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub id: u64,
    pub date: NaiveDate,
    pub name: String,
    #[serde(with = "amount")]
    pub value: Decimal,
}

/// The whole persisted state. `balances` was added after the first schema
/// version, so it defaults to empty when absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FinancialState {
    #[serde(default, with = "amount")]
    pub salary: Decimal,
    #[serde(default)]
    pub expenses: Vec<Record>,
    #[serde(default)]
    pub balances: Vec<Record>,
}

impl FinancialState {
    pub fn records(&self, kind: RecordKind) -> &[Record] {
        match kind {
            RecordKind::Expense => &self.expenses,
            RecordKind::Balance => &self.balances,
        }
    }

    pub(crate) fn records_mut(&mut self, kind: RecordKind) -> &mut Vec<Record> {
        match kind {
            RecordKind::Expense => &mut self.expenses,
            RecordKind::Balance => &mut self.balances,
        }
    }

    /// Largest id in either collection
    pub fn max_id(&self) -> Option<u64> {
        self.expenses
            .iter()
            .chain(self.balances.iter())
            .map(|r| r.id)
            .max()
    }
}

/// One slice of the spending breakdown chart
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSlice {
    pub label: String,
    pub value: Decimal,
    pub color: String,
    pub border_color: String,
}

/// Ordered chart slices; expenses first, optional free-capacity slice last.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChartSeries(pub Vec<ChartSlice>);

impl ChartSeries {
    pub fn slices(&self) -> &[ChartSlice] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn labels(&self) -> Vec<&str> {
        self.0.iter().map(|s| s.label.as_str()).collect()
    }

    pub fn values(&self) -> Vec<Decimal> {
        self.0.iter().map(|s| s.value).collect()
    }

    pub fn colors(&self) -> Vec<&str> {
        self.0.iter().map(|s| s.color.as_str()).collect()
    }

    pub fn total(&self) -> Decimal {
        self.0.iter().map(|s| s.value).sum()
    }

    /// Share of each slice in percent of the total, for drawing.
    pub fn percentages(&self) -> Vec<f64> {
        let total = self.total();
        if total <= Decimal::ZERO {
            return vec![0.0; self.0.len()];
        }
        self.0
            .iter()
            .map(|s| {
                (s.value * Decimal::ONE_HUNDRED / total)
                    .to_f64()
                    .unwrap_or(0.0)
            })
            .collect()
    }
}

/// Everything the presentation layer reads after a mutation
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LedgerSummary {
    pub salary: Decimal,
    pub total_expenses: Decimal,
    pub total_extra_income: Decimal,
    pub net_balance: Decimal,
    pub sorted_expenses: Vec<Record>,
    pub sorted_balances: Vec<Record>,
    pub chart_series: ChartSeries,
}
