use crate::actions::{Intent, PendingAction, RecordInput, Toast, ToastKind};
use crate::format::{format_currency, format_date, iso_date};
use crate::model::{Record, RecordKind};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use web_sys::HtmlInputElement;
use yew::prelude::*;

const INPUT_CLASS: &str =
    "w-full bg-[#f1f4f9] rounded-[10px] px-3 py-2 text-[13px] text-[#173E63] border-none";

fn bind(state: &UseStateHandle<String>) -> Callback<InputEvent> {
    let state = state.clone();
    Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        state.set(input.value());
    })
}

#[derive(Properties, PartialEq)]
pub struct StatCardProps {
    pub title: &'static str,
    pub amount: Decimal,
    pub symbol: String,
}

#[function_component(StatCard)]
pub fn stat_card(props: &StatCardProps) -> Html {
    let tone = if props.amount < Decimal::ZERO {
        "text-2xl font-bold text-red-600 tracking-tight"
    } else {
        "text-2xl font-bold text-[#1D617A] tracking-tight"
    };
    html! {
        <div class="bg-card p-6 rounded-[10px] shadow-sm border border-border">
            <p class="text-muted-foreground text-[10px] font-bold mb-1 tracking-widest">{ props.title }</p>
            <h3 class={tone}>{ format_currency(props.amount, &props.symbol) }</h3>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct SalaryFormProps {
    pub on_intent: Callback<Intent, bool>,
}

#[function_component(SalaryForm)]
pub fn salary_form(props: &SalaryFormProps) -> Html {
    let form_salary = use_state(String::new);

    let on_submit = {
        let form_salary = form_salary.clone();
        let on_intent = props.on_intent.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if on_intent.emit(Intent::SetSalary((*form_salary).clone())) {
                form_salary.set(String::new());
            }
        })
    };

    html! {
        <form onsubmit={on_submit} class="bg-white p-5 rounded-[10px] shadow-sm border border-border space-y-3">
            <h4 class="text-[#1D617A] font-bold text-[15px] tracking-wider">{"Salário mensal"}</h4>
            <input type="text" inputmode="decimal" placeholder="0,00" value={(*form_salary).clone()}
                oninput={bind(&form_salary)} class={INPUT_CLASS} />
            <button type="submit" class="w-full bg-[#173E63] text-white py-2 rounded-[10px] text-[12px] font-bold">
                {"Atualizar salário"}
            </button>
        </form>
    }
}

#[derive(Properties, PartialEq)]
pub struct RecordFormProps {
    pub kind: RecordKind,
    pub today: NaiveDate,
    pub symbol: String,
    pub on_intent: Callback<Intent, bool>,
}

#[function_component(RecordForm)]
pub fn record_form(props: &RecordFormProps) -> Html {
    let form_date = use_state(|| iso_date(props.today));
    let form_name = use_state(String::new);
    let form_value = use_state(String::new);

    let (title, placeholder, button) = match props.kind {
        RecordKind::Expense => ("Nova despesa", "Nome da despesa", "Adicionar despesa"),
        RecordKind::Balance => ("Entrada extra", "Origem da entrada", "Adicionar entrada"),
    };

    let on_submit = {
        let form_date = form_date.clone();
        let form_name = form_name.clone();
        let form_value = form_value.clone();
        let on_intent = props.on_intent.clone();
        let kind = props.kind;
        let today = props.today;
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let input = RecordInput {
                date: (*form_date).clone(),
                name: (*form_name).clone(),
                value: (*form_value).clone(),
            };
            if on_intent.emit(Intent::Add(kind, input)) {
                form_date.set(iso_date(today));
                form_name.set(String::new());
                form_value.set(String::new());
            }
        })
    };

    html! {
        <form onsubmit={on_submit} class="bg-white p-5 rounded-[10px] shadow-sm border border-border space-y-3">
            <h4 class="text-[#1D617A] font-bold text-[15px] tracking-wider">{ title }</h4>
            <input type="date" value={(*form_date).clone()} oninput={bind(&form_date)} class={INPUT_CLASS} />
            <input type="text" placeholder={placeholder} value={(*form_name).clone()} oninput={bind(&form_name)} class={INPUT_CLASS} />
            <input type="text" inputmode="decimal" placeholder={format!("{} 0,00", props.symbol)} value={(*form_value).clone()}
                oninput={bind(&form_value)} class={INPUT_CLASS} />
            <button type="submit" class="w-full bg-[#173E63] text-white py-2 rounded-[10px] text-[12px] font-bold">
                { button }
            </button>
        </form>
    }
}

#[derive(Properties, PartialEq)]
pub struct RecordListProps {
    pub kind: RecordKind,
    pub records: Vec<Record>,
    pub symbol: String,
    pub on_edit: Callback<(RecordKind, u64)>,
    pub on_delete: Callback<PendingAction>,
}

#[function_component(RecordList)]
pub fn record_list(props: &RecordListProps) -> Html {
    let (title, empty, sign, value_class) = match props.kind {
        RecordKind::Expense => (
            "Despesas",
            "Nenhuma despesa registrada ainda",
            "-",
            "font-semibold text-red-600",
        ),
        RecordKind::Balance => (
            "Entradas extras",
            "Nenhuma entrada registrada ainda",
            "+",
            "font-semibold text-green-600",
        ),
    };

    html! {
        <div class="bg-card rounded-[10px] shadow-sm border border-border overflow-hidden">
            <div class="p-5 border-b border-border">
                <h3 class="font-bold text-lg text-foreground">{ title }</h3>
            </div>
            { if props.records.is_empty() {
                html! { <p class="px-5 py-6 text-center text-muted-foreground">{ empty }</p> }
            } else {
                html! {
                <ul class="divide-y divide-border">
                    { for props.records.iter().map(|record| {
                        let kind = props.kind;
                        let id = record.id;
                        let on_edit = {
                            let on_edit = props.on_edit.clone();
                            Callback::from(move |_: MouseEvent| on_edit.emit((kind, id)))
                        };
                        let on_delete = {
                            let on_delete = props.on_delete.clone();
                            Callback::from(move |_: MouseEvent| on_delete.emit(PendingAction::Delete(kind, id)))
                        };
                        html! {
                            <li key={id.to_string()} class="px-5 py-3 flex items-center justify-between gap-3 text-sm">
                                <div class="flex-1">
                                    <p class="text-xs text-muted-foreground">{ format_date(record.date) }</p>
                                    <p class="text-foreground">{ record.name.clone() }</p>
                                </div>
                                <span class={value_class}>{ format!("{} {}", sign, format_currency(record.value, &props.symbol)) }</span>
                                <div class="flex gap-2">
                                    <button onclick={on_edit} class="text-[11px] font-bold text-[#173E63]">{"Editar"}</button>
                                    <button onclick={on_delete} class="text-[11px] font-bold text-red-600">{"Deletar"}</button>
                                </div>
                            </li>
                        }
                    }) }
                </ul>
                }
            }}
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct EditDialogProps {
    pub kind: RecordKind,
    pub record: Record,
    pub symbol: String,
    pub today: NaiveDate,
    pub on_intent: Callback<Intent, bool>,
    pub on_close: Callback<MouseEvent>,
}

#[function_component(EditDialog)]
pub fn edit_dialog(props: &EditDialogProps) -> Html {
    let form_date = use_state(|| iso_date(props.record.date));
    let form_name = use_state(|| props.record.name.clone());
    let form_value = use_state(|| props.record.value.normalize().to_string());

    let title = match props.kind {
        RecordKind::Expense => "Editar despesa",
        RecordKind::Balance => "Editar entrada",
    };

    let on_save = {
        let form_date = form_date.clone();
        let form_name = form_name.clone();
        let form_value = form_value.clone();
        let on_intent = props.on_intent.clone();
        let kind = props.kind;
        let id = props.record.id;
        Callback::from(move |_: MouseEvent| {
            let input = RecordInput {
                date: (*form_date).clone(),
                name: (*form_name).clone(),
                value: (*form_value).clone(),
            };
            on_intent.emit(Intent::Update(kind, id, input));
        })
    };

    html! {
        <div class="fixed inset-0 bg-black/40 flex items-center justify-center z-40">
            <div class="bg-white rounded-[10px] p-6 w-full max-w-md space-y-3">
                <h2 class="text-xl font-bold text-foreground">{ title }</h2>
                <input type="date" max={iso_date(props.today)} value={(*form_date).clone()} oninput={bind(&form_date)} class={INPUT_CLASS} />
                <input type="text" value={(*form_name).clone()} oninput={bind(&form_name)} class={INPUT_CLASS} />
                <input type="text" inputmode="decimal" placeholder={format!("{} 0,00", props.symbol)} value={(*form_value).clone()}
                    oninput={bind(&form_value)} class={INPUT_CLASS} />
                <div class="flex gap-3 pt-2">
                    <button onclick={props.on_close.clone()} class="flex-1 bg-red-500 text-white py-2 rounded-[10px] text-[12px] font-bold">{"Cancelar"}</button>
                    <button onclick={on_save} class="flex-1 bg-green-600 text-white py-2 rounded-[10px] text-[12px] font-bold">{"Salvar alterações"}</button>
                </div>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ConfirmDialogProps {
    pub message: &'static str,
    pub on_confirm: Callback<MouseEvent>,
    pub on_cancel: Callback<MouseEvent>,
}

#[function_component(ConfirmDialog)]
pub fn confirm_dialog(props: &ConfirmDialogProps) -> Html {
    html! {
        <div class="fixed inset-0 bg-black/40 flex items-center justify-center z-50">
            <div class="bg-white rounded-[10px] p-6 w-full max-w-sm space-y-4">
                <p class="text-foreground font-medium">{ props.message }</p>
                <div class="flex gap-3">
                    <button onclick={props.on_cancel.clone()} class="flex-1 bg-[#B2CBDE] text-[#173E63] py-2 rounded-[10px] text-[12px] font-bold">{"Cancelar"}</button>
                    <button onclick={props.on_confirm.clone()} class="flex-1 bg-red-500 text-white py-2 rounded-[10px] text-[12px] font-bold">{"Confirmar"}</button>
                </div>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ToastViewProps {
    pub toast: Toast,
    pub on_dismiss: Callback<MouseEvent>,
}

#[function_component(ToastView)]
pub fn toast_view(props: &ToastViewProps) -> Html {
    let color = match props.toast.kind {
        ToastKind::Success => "bg-[#10b981]",
        ToastKind::Danger => "bg-[#ef4444]",
        ToastKind::Warning => "bg-[#f59e0b]",
    };
    html! {
        <div onclick={props.on_dismiss.clone()}
            class={classes!("fixed", "top-5", "right-5", "px-5", "py-4", "rounded-md", "font-semibold", "text-white", "max-w-xs", "cursor-pointer", "z-50", color)}>
            { props.toast.message.clone() }
        </div>
    }
}
