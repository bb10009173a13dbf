//! Yew frontend. The root component opens the ledger once and shares it
//! through a `ContextProvider`; the dashboard reads summaries from it and
//! turns user intents into ledger calls. Destructive ones go through a
//! confirmation dialog first.

mod chart;
mod components;

use crate::actions::{self, Intent, PendingAction, Toast};
use crate::config::TrackerConfig;
use crate::ledger::Ledger;
use crate::model::{LedgerSummary, Record, RecordKind};
use crate::storage::{KeyValueStore, LocalStorage, MemoryStore};
use crate::telemetry;
use chrono::NaiveDate;
use std::cell::RefCell;
use std::rc::Rc;
use tracing::warn;
use yew::prelude::*;

use chart::Doughnut;
use components::{ConfirmDialog, EditDialog, RecordForm, RecordList, SalaryForm, StatCard, ToastView};

pub type BrowserLedger = Ledger<Box<dyn KeyValueStore>>;

/// Shared handle to the one ledger of the running app.
#[derive(Clone)]
pub struct LedgerHandle {
    ledger: Rc<RefCell<BrowserLedger>>,
    config: Rc<TrackerConfig>,
}

impl PartialEq for LedgerHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.ledger, &other.ledger)
    }
}

impl LedgerHandle {
    /// Falls back to an in-memory store when the browser denies localStorage.
    pub fn open(config: TrackerConfig) -> Self {
        let store: Box<dyn KeyValueStore> = match LocalStorage::open() {
            Ok(store) => Box::new(store),
            Err(err) => {
                warn!(error = %err, "local storage unavailable, data will not survive a reload");
                Box::new(MemoryStore::new())
            }
        };
        Self {
            ledger: Rc::new(RefCell::new(Ledger::open(store, &config))),
            config: Rc::new(config),
        }
    }

    pub fn summary(&self) -> LedgerSummary {
        self.ledger.borrow().summary()
    }

    pub fn find(&self, kind: RecordKind, id: u64) -> Option<Record> {
        self.ledger.borrow().find(kind, id).cloned()
    }

    pub fn today(&self) -> NaiveDate {
        self.ledger.borrow().today()
    }

    pub fn symbol(&self) -> String {
        self.config.currency_symbol.clone()
    }

    fn apply(&self, intent: Intent) -> Toast {
        let mut ledger = self.ledger.borrow_mut();
        actions::apply(&mut *ledger, intent)
    }
}

#[function_component(App)]
fn app() -> Html {
    let ledger = use_state(|| LedgerHandle::open(TrackerConfig::default()));

    html! {
        <ContextProvider<LedgerHandle> context={(*ledger).clone()}>
            <Dashboard />
        </ContextProvider<LedgerHandle>>
    }
}

#[function_component(Dashboard)]
fn dashboard() -> Html {
    let ledger = use_context::<LedgerHandle>();
    let summary = use_state(|| ledger.as_ref().map(LedgerHandle::summary).unwrap_or_default());
    let toast = use_state(|| None::<Toast>);
    let pending = use_state(|| None::<PendingAction>);
    let editing = use_state(|| None::<(RecordKind, u64)>);

    let Some(ledger) = ledger else {
        return html! {
            <div class="min-h-screen flex items-center justify-center bg-background text-muted-foreground">
                {"Carregando..."}
            </div>
        };
    };
    let symbol = ledger.symbol();
    let today = ledger.today();

    let on_intent = {
        let ledger = ledger.clone();
        let summary = summary.clone();
        let toast = toast.clone();
        let editing = editing.clone();
        Callback::from(move |intent: Intent| -> bool {
            let closes_editor = matches!(intent, Intent::Update(..));
            let result = ledger.apply(intent);
            let ok = result.is_success();
            if ok && closes_editor {
                editing.set(None);
            }
            summary.set(ledger.summary());
            toast.set(Some(result));
            ok
        })
    };

    let on_request = {
        let pending = pending.clone();
        Callback::from(move |action: PendingAction| pending.set(Some(action)))
    };

    let on_confirm = {
        let pending = pending.clone();
        let on_intent = on_intent.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(action) = *pending {
                pending.set(None);
                on_intent.emit(action.intent());
            }
        })
    };

    let on_cancel = {
        let pending = pending.clone();
        Callback::from(move |_: MouseEvent| pending.set(None))
    };

    let on_edit = {
        let editing = editing.clone();
        Callback::from(move |target: (RecordKind, u64)| editing.set(Some(target)))
    };

    let on_close_edit = {
        let editing = editing.clone();
        Callback::from(move |_: MouseEvent| editing.set(None))
    };

    let on_dismiss = {
        let toast = toast.clone();
        Callback::from(move |_: MouseEvent| toast.set(None))
    };

    let on_clear_all = {
        let on_request = on_request.clone();
        Callback::from(move |_: MouseEvent| on_request.emit(PendingAction::ClearAll))
    };

    let edit_dialog = match *editing {
        Some((kind, id)) => match ledger.find(kind, id) {
            Some(record) => html! {
                <EditDialog key={format!("{}-{}", kind, id)} kind={kind} record={record} symbol={symbol.clone()} today={today}
                    on_intent={on_intent.clone()} on_close={on_close_edit} />
            },
            None => html! {},
        },
        None => html! {},
    };

    html! {
        <div class="min-h-screen bg-background p-6">
            <div class="max-w-6xl mx-auto space-y-6">
                <div class="flex items-center justify-between pb-4 border-b border-border">
                    <h1 class="text-2xl font-bold text-foreground">{"Controle Financeiro"}</h1>
                    <button onclick={on_clear_all} class="bg-red-500 text-white px-4 py-2 rounded-xl font-bold text-sm hover:opacity-90">
                        {"Limpar tudo"}
                    </button>
                </div>

                <div class="grid grid-cols-1 md:grid-cols-4 gap-6">
                    <StatCard title="Salário" amount={summary.salary} symbol={symbol.clone()} />
                    <StatCard title="Entradas extras" amount={summary.total_extra_income} symbol={symbol.clone()} />
                    <StatCard title="Despesas" amount={summary.total_expenses} symbol={symbol.clone()} />
                    <StatCard title="Saldo" amount={summary.net_balance} symbol={symbol.clone()} />
                </div>

                <div class="grid grid-cols-1 lg:grid-cols-3 gap-6">
                    <SalaryForm on_intent={on_intent.clone()} />
                    <RecordForm kind={RecordKind::Expense} today={today} symbol={symbol.clone()} on_intent={on_intent.clone()} />
                    <RecordForm kind={RecordKind::Balance} today={today} symbol={symbol.clone()} on_intent={on_intent.clone()} />
                </div>

                <div class="grid grid-cols-1 lg:grid-cols-3 gap-6">
                    <Doughnut series={summary.chart_series.clone()} symbol={symbol.clone()} />
                    <RecordList kind={RecordKind::Expense} records={summary.sorted_expenses.clone()} symbol={symbol.clone()}
                        on_edit={on_edit.clone()} on_delete={on_request.clone()} />
                    <RecordList kind={RecordKind::Balance} records={summary.sorted_balances.clone()} symbol={symbol.clone()}
                        on_edit={on_edit} on_delete={on_request} />
                </div>
            </div>

            { edit_dialog }

            {
                if let Some(action) = *pending {
                    html! { <ConfirmDialog message={action.question()} on_confirm={on_confirm} on_cancel={on_cancel} /> }
                } else {
                    html! {}
                }
            }

            {
                if let Some(current) = (*toast).clone() {
                    html! { <ToastView toast={current} on_dismiss={on_dismiss} /> }
                } else {
                    html! {}
                }
            }
        </div>
    }
}

pub fn start() {
    telemetry::init(telemetry::DEFAULT_DIRECTIVE);
    yew::Renderer::<App>::new().render();
}
