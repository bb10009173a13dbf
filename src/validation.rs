//! Business rules gating every ledger mutation.
//!
//! Every check is pure and reports a [`ValidationError`] reason instead of
//! panicking on bad input.

use crate::config::{DatePolicy, TrackerConfig};
use crate::error::ValidationError;
use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;

pub const MIN_NAME_LEN: usize = 3;

/// Largest accepted amount (10^12). Together with [`MAX_SCALE`] every
/// accepted amount has at most 15 significant digits, so it survives the
/// JSON number round trip exactly, and no realistic number of records can
/// overflow a `Decimal` total.
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(0xD4A5_1000, 0xE8, 0, false, 0);

/// Amounts are money: cents at most.
pub const MAX_SCALE: u32 = 2;

pub fn first_day_of_month(day: NaiveDate) -> NaiveDate {
    day.with_day(1).unwrap_or(day)
}

/// Accepts `first_day_of_month(today) <= date <= today`.
pub fn validate_date(date: NaiveDate, today: NaiveDate) -> Result<(), ValidationError> {
    let earliest = first_day_of_month(today);
    if date < earliest || date > today {
        return Err(ValidationError::DateOutOfRange {
            date,
            earliest,
            latest: today,
        });
    }
    Ok(())
}

pub fn validate_name(name: &str) -> Result<(), ValidationError> {
    validate_name_len(name, MIN_NAME_LEN)
}

fn validate_name_len(name: &str, min: usize) -> Result<(), ValidationError> {
    let actual = name.trim().chars().count();
    if actual < min {
        return Err(ValidationError::NameTooShort { min, actual });
    }
    Ok(())
}

pub fn validate_amount(value: Decimal) -> Result<(), ValidationError> {
    if value <= Decimal::ZERO {
        return Err(ValidationError::NotPositive);
    }
    validate_magnitude(value)
}

pub fn validate_salary(value: Decimal) -> Result<(), ValidationError> {
    if value < Decimal::ZERO {
        return Err(ValidationError::Negative);
    }
    validate_magnitude(value)
}

/// Upper bound and precision shared by every stored amount.
pub fn validate_magnitude(value: Decimal) -> Result<(), ValidationError> {
    if value > MAX_AMOUNT {
        return Err(ValidationError::TooLarge { max: MAX_AMOUNT });
    }
    if value.normalize().scale() > MAX_SCALE {
        return Err(ValidationError::TooPrecise {
            max_scale: MAX_SCALE,
        });
    }
    Ok(())
}

/// Runs date, name and amount checks in that order and returns the first failure.
pub fn validate_record(
    date: NaiveDate,
    name: &str,
    value: Decimal,
    today: NaiveDate,
) -> Result<(), ValidationError> {
    validate_date(date, today)?;
    validate_name(name)?;
    validate_amount(value)
}

/// The record rules as configured for one tracker instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordRules {
    pub date_policy: DatePolicy,
    pub min_name_len: usize,
}

impl Default for RecordRules {
    fn default() -> Self {
        Self {
            date_policy: DatePolicy::CurrentMonth,
            min_name_len: MIN_NAME_LEN,
        }
    }
}

impl From<&TrackerConfig> for RecordRules {
    fn from(config: &TrackerConfig) -> Self {
        Self {
            date_policy: config.date_policy,
            min_name_len: config.min_name_len,
        }
    }
}

impl RecordRules {
    pub fn check(
        &self,
        date: NaiveDate,
        name: &str,
        value: Decimal,
        today: NaiveDate,
    ) -> Result<(), ValidationError> {
        if self.date_policy == DatePolicy::CurrentMonth {
            validate_date(date, today)?;
        }
        validate_name_len(name, self.min_name_len)?;
        validate_amount(value)
    }
}
