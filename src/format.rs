//! Display formatting and form-input parsing (pt-BR conventions).

use crate::error::{LedgerError, ValidationError};
use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;

fn format_with_dots(digits: &str) -> String {
    let s = digits.chars().rev().collect::<Vec<char>>();
    let mut out = Vec::new();
    for (i, ch) in s.iter().enumerate() {
        if i > 0 && i % 3 == 0 {
            out.push('.');
        }
        out.push(*ch);
    }
    out.into_iter().rev().collect()
}

/// `R$ 1.234,56`, `-R$ 50,00`
pub fn format_currency(amount: Decimal, symbol: &str) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let sign = if rounded < Decimal::ZERO { "-" } else { "" };
    format!("{}{} {}", sign, symbol, format_number(rounded.abs()))
}

/// `1.234,56`, without symbol or sign
pub fn format_number(amount: Decimal) -> String {
    let rounded = amount
        .abs()
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let text = format!("{:.2}", rounded);
    let (int_part, frac_part) = text.split_once('.').unwrap_or((text.as_str(), "00"));
    format!("{},{}", format_with_dots(int_part), frac_part)
}

/// `dd/mm/yyyy`
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// Parses a typed amount. Accepts `12.5`, `12,5` and `1.234,56`.
pub fn parse_amount(input: &str) -> Option<Decimal> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }
    let normalized = if trimmed.contains(',') {
        trimmed.replace('.', "").replace(',', ".")
    } else {
        trimmed.to_string()
    };
    Decimal::from_str(&normalized).ok()
}

/// Parses the `YYYY-MM-DD` value of a date input.
pub fn parse_date(input: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d").ok()
}

/// `YYYY-MM-DD`, the value a date input expects.
pub fn iso_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Message shown to the user when a ledger call is rejected.
pub fn describe_error(err: &LedgerError) -> String {
    match err {
        LedgerError::Validation(ValidationError::DateOutOfRange {
            earliest, latest, ..
        }) => format!(
            "A data deve estar entre {} e {}!",
            format_date(*earliest),
            format_date(*latest)
        ),
        LedgerError::Validation(ValidationError::NameTooShort { min, .. }) => {
            format!("O nome deve ter no mínimo {} caracteres!", min)
        }
        LedgerError::Validation(ValidationError::NotPositive) => {
            "Por favor, insira um valor válido maior que zero!".to_string()
        }
        LedgerError::Validation(ValidationError::Negative) => {
            "Por favor, insira um salário válido!".to_string()
        }
        LedgerError::Validation(ValidationError::TooLarge { max }) => {
            format!("O valor deve ser no máximo {}!", format_number(*max))
        }
        LedgerError::Validation(ValidationError::TooPrecise { max_scale }) => {
            format!("Use no máximo {} casas decimais!", max_scale)
        }
        LedgerError::NotFound { .. } => "Registro não encontrado.".to_string(),
        LedgerError::Storage(err) => format!("Não foi possível salvar os dados: {}", err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StorageError;
    use crate::model::RecordKind;

    #[test]
    fn currency_uses_dot_thousands_and_comma_decimals() {
        assert_eq!(format_currency(Decimal::new(123456, 2), "R$"), "R$ 1.234,56");
        assert_eq!(format_currency(Decimal::new(1800, 0), "R$"), "R$ 1.800,00");
        assert_eq!(format_currency(Decimal::ZERO, "R$"), "R$ 0,00");
        assert_eq!(format_currency(Decimal::new(1234567890, 0), "R$"), "R$ 1.234.567.890,00");
    }

    #[test]
    fn negative_amounts_carry_the_sign_before_the_symbol() {
        assert_eq!(format_currency(Decimal::new(-50, 0), "R$"), "-R$ 50,00");
        assert_eq!(format_currency(Decimal::new(-1, 3), "R$"), "R$ 0,00");
    }

    #[test]
    fn currency_rounds_half_away_from_zero() {
        assert_eq!(format_currency(Decimal::new(10005, 3), "R$"), "R$ 10,01");
        assert_eq!(format_currency(Decimal::new(10004, 3), "R$"), "R$ 10,00");
    }

    #[test]
    fn dates_render_day_first() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        assert_eq!(format_date(date), "05/03/2024");
        assert_eq!(iso_date(date), "2024-03-05");
    }

    #[test]
    fn amounts_parse_with_either_decimal_separator() {
        assert_eq!(parse_amount("12.5"), Some(Decimal::new(125, 1)));
        assert_eq!(parse_amount(" 12,5 "), Some(Decimal::new(125, 1)));
        assert_eq!(parse_amount("1.234,56"), Some(Decimal::new(123456, 2)));
        assert_eq!(parse_amount(""), None);
        assert_eq!(parse_amount("abc"), None);
        assert_eq!(parse_amount("NaN"), None);
    }

    #[test]
    fn date_inputs_parse_iso_only() {
        assert_eq!(
            parse_date("2024-03-05"),
            NaiveDate::from_ymd_opt(2024, 3, 5)
        );
        assert_eq!(parse_date(""), None);
        assert_eq!(parse_date("05/03/2024"), None);
    }

    #[test]
    fn errors_read_as_user_messages() {
        let err = LedgerError::Validation(ValidationError::DateOutOfRange {
            date: NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
            earliest: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            latest: NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
        });
        assert_eq!(describe_error(&err), "A data deve estar entre 01/03/2024 e 15/03/2024!");

        let err = LedgerError::from(ValidationError::NameTooShort { min: 3, actual: 2 });
        assert_eq!(describe_error(&err), "O nome deve ter no mínimo 3 caracteres!");

        let err = LedgerError::from(ValidationError::TooLarge {
            max: Decimal::new(1_000_000_000_000, 0),
        });
        assert_eq!(
            describe_error(&err),
            "O valor deve ser no máximo 1.000.000.000.000,00!"
        );

        let err = LedgerError::from(ValidationError::TooPrecise { max_scale: 2 });
        assert_eq!(describe_error(&err), "Use no máximo 2 casas decimais!");

        let err = LedgerError::NotFound {
            kind: RecordKind::Expense,
            id: 4,
        };
        assert_eq!(describe_error(&err), "Registro não encontrado.");

        let err = LedgerError::from(StorageError::Unavailable("denied".to_string()));
        assert!(describe_error(&err).contains("denied"));
    }
}
