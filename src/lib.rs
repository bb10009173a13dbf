//! Personal finance tracker: monthly salary, extra income and expenses kept
//! in the browser's local storage, with a running balance and a spending chart.
//!
//! The core (validation, persistence, ledger) is plain Rust and runs anywhere;
//! the yew frontend in [`ui`] is only built for `wasm32`.

pub mod actions;
pub mod clock;
pub mod config;
pub mod error;
pub mod format;
pub mod ledger;
pub mod model;
pub mod persistence;
pub mod storage;
pub mod telemetry;
pub mod validation;

#[cfg(target_arch = "wasm32")]
pub mod ui;

pub use actions::{Intent, PendingAction, RecordInput, Toast, ToastKind};
pub use clock::{Clock, FixedClock, IdGenerator, SystemClock};
pub use config::{ChartPalette, DatePolicy, TrackerConfig, DEFAULT_STORAGE_KEY};
pub use error::{LedgerError, Result, StorageError, ValidationError};
pub use ledger::Ledger;
pub use model::{ChartSeries, ChartSlice, FinancialState, LedgerSummary, Record, RecordKind};
pub use persistence::Persistence;
pub use storage::{KeyValueStore, MemoryStore};
