//! User intents as the frontend sends them, and the toast each one ends in.
//!
//! Raw form text is parsed here so the same rules apply whatever renders the
//! forms.

use crate::clock::Clock;
use crate::error::LedgerError;
use crate::format::{describe_error, parse_amount, parse_date};
use crate::ledger::Ledger;
use crate::model::RecordKind;
use crate::storage::KeyValueStore;
use chrono::NaiveDate;
use rust_decimal::Decimal;

/// Raw form fields as typed by the user
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RecordInput {
    pub date: String,
    pub name: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Intent {
    SetSalary(String),
    Add(RecordKind, RecordInput),
    Update(RecordKind, u64, RecordInput),
    Delete(RecordKind, u64),
    ClearAll,
}

/// Destructive action waiting for the user's answer
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PendingAction {
    Delete(RecordKind, u64),
    ClearAll,
}

impl PendingAction {
    pub fn question(&self) -> &'static str {
        match self {
            PendingAction::Delete(RecordKind::Expense, _) => {
                "Tem certeza que deseja deletar esta despesa?"
            }
            PendingAction::Delete(RecordKind::Balance, _) => {
                "Tem certeza que deseja deletar esta entrada?"
            }
            PendingAction::ClearAll => {
                "Tem certeza que deseja limpar TODOS os dados? Esta ação não pode ser desfeita!"
            }
        }
    }

    /// The intent to run once the user confirms.
    pub fn intent(self) -> Intent {
        match self {
            PendingAction::Delete(kind, id) => Intent::Delete(kind, id),
            PendingAction::ClearAll => Intent::ClearAll,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Danger,
    Warning,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
}

impl Toast {
    pub fn new(kind: ToastKind, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind,
        }
    }

    fn danger(err: &LedgerError) -> Self {
        Self::new(ToastKind::Danger, describe_error(err))
    }

    pub fn is_success(&self) -> bool {
        self.kind != ToastKind::Danger
    }
}

/// Runs one intent against the ledger. Failures come back as danger toasts.
pub fn apply<S: KeyValueStore, C: Clock>(ledger: &mut Ledger<S, C>, intent: Intent) -> Toast {
    let outcome = match intent {
        Intent::SetSalary(raw) => {
            let Some(value) = parse_amount(&raw) else {
                return Toast::new(
                    ToastKind::Danger,
                    "Salário inválido! Use apenas números, como 2500,00.",
                );
            };
            ledger
                .set_salary(value)
                .map(|_| Toast::new(ToastKind::Success, "Salário atualizado com sucesso!"))
        }
        Intent::Add(kind, input) => {
            let (date, value) = match parse_input(&input) {
                Ok(parsed) => parsed,
                Err(toast) => return toast,
            };
            ledger
                .add(kind, date, &input.name, value)
                .map(|_| Toast::new(ToastKind::Success, added_message(kind)))
        }
        Intent::Update(kind, id, input) => {
            let (date, value) = match parse_input(&input) {
                Ok(parsed) => parsed,
                Err(toast) => return toast,
            };
            ledger
                .update(kind, id, date, &input.name, value)
                .map(|_| Toast::new(ToastKind::Success, "Registro atualizado com sucesso!"))
        }
        Intent::Delete(kind, id) => ledger.delete(kind, id).map(|removed| {
            if removed {
                Toast::new(ToastKind::Success, "Registro deletado com sucesso!")
            } else {
                Toast::danger(&LedgerError::NotFound { kind, id })
            }
        }),
        Intent::ClearAll => ledger
            .clear_all()
            .map(|_| Toast::new(ToastKind::Warning, "Todos os dados foram apagados!")),
    };
    outcome.unwrap_or_else(|err| Toast::danger(&err))
}

fn parse_input(input: &RecordInput) -> Result<(NaiveDate, Decimal), Toast> {
    let date = parse_date(&input.date)
        .ok_or_else(|| Toast::new(ToastKind::Danger, "Por favor, selecione uma data!"))?;
    // an unparsable amount fails the same rule as a zero one
    let value = parse_amount(&input.value).unwrap_or(Decimal::ZERO);
    Ok((date, value))
}

fn added_message(kind: RecordKind) -> &'static str {
    match kind {
        RecordKind::Expense => "Despesa adicionada com sucesso!",
        RecordKind::Balance => "Entrada adicionada com sucesso!",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::config::TrackerConfig;
    use crate::storage::MemoryStore;

    fn ledger() -> Ledger<MemoryStore, FixedClock> {
        Ledger::with_clock(
            MemoryStore::new(),
            FixedClock::new(NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(), 1_710_000_000_000),
            &TrackerConfig::default(),
        )
    }

    fn input(date: &str, name: &str, value: &str) -> RecordInput {
        RecordInput {
            date: date.to_string(),
            name: name.to_string(),
            value: value.to_string(),
        }
    }

    #[test]
    fn add_parses_form_text() {
        let mut ledger = ledger();
        let toast = apply(
            &mut ledger,
            Intent::Add(RecordKind::Expense, input("2024-03-10", "Aluguel", "1.200,50")),
        );

        assert_eq!(toast, Toast::new(ToastKind::Success, "Despesa adicionada com sucesso!"));
        assert_eq!(ledger.total_expenses(), Decimal::new(120050, 2));
    }

    #[test]
    fn missing_date_and_bad_amount_are_reported() {
        let mut ledger = ledger();

        let toast = apply(
            &mut ledger,
            Intent::Add(RecordKind::Balance, input("", "Bonus", "10")),
        );
        assert_eq!(toast.message, "Por favor, selecione uma data!");

        let toast = apply(
            &mut ledger,
            Intent::Add(RecordKind::Balance, input("2024-03-10", "Bonus", "dez")),
        );
        assert_eq!(toast.kind, ToastKind::Danger);
        assert_eq!(toast.message, "Por favor, insira um valor válido maior que zero!");
        assert!(ledger.state().balances.is_empty());
    }

    #[test]
    fn unparsable_salary_has_its_own_message() {
        let mut ledger = ledger();

        let toast = apply(&mut ledger, Intent::SetSalary("muito".to_string()));
        assert_eq!(toast.kind, ToastKind::Danger);
        assert_eq!(toast.message, "Salário inválido! Use apenas números, como 2500,00.");

        let toast = apply(&mut ledger, Intent::SetSalary("-10".to_string()));
        assert_eq!(toast.message, "Por favor, insira um salário válido!");
        assert_eq!(ledger.salary(), Decimal::ZERO);
    }

    #[test]
    fn deleting_an_unknown_record_is_not_reported_as_success() {
        let mut ledger = ledger();
        let id = ledger
            .add_expense(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(), "Luz", Decimal::TEN)
            .unwrap();

        let toast = apply(&mut ledger, Intent::Delete(RecordKind::Expense, id));
        assert_eq!(toast.kind, ToastKind::Success);
        assert_eq!(toast.message, "Registro deletado com sucesso!");

        let toast = apply(&mut ledger, Intent::Delete(RecordKind::Expense, id));
        assert_eq!(toast.kind, ToastKind::Danger);
        assert_eq!(toast.message, "Registro não encontrado.");
        assert!(!toast.is_success());
    }

    #[test]
    fn confirmed_actions_map_back_to_intents() {
        assert_eq!(
            PendingAction::Delete(RecordKind::Balance, 7).intent(),
            Intent::Delete(RecordKind::Balance, 7)
        );
        assert_eq!(PendingAction::ClearAll.intent(), Intent::ClearAll);
        assert!(PendingAction::ClearAll.question().contains("TODOS"));
    }

    #[test]
    fn clear_all_ends_in_a_warning() {
        let mut ledger = ledger();
        ledger.set_salary(Decimal::TEN).unwrap();

        let toast = apply(&mut ledger, Intent::ClearAll);
        assert_eq!(toast.kind, ToastKind::Warning);
        assert!(toast.is_success());
        assert_eq!(ledger.salary(), Decimal::ZERO);
    }
}
