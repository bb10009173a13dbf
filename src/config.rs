//! Tracker configuration

use serde::{Deserialize, Serialize};

/// Key under which the whole state blob is stored
pub const DEFAULT_STORAGE_KEY: &str = "financeData";

/// Which dates a new or edited record may carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DatePolicy {
    /// Between the first day of the current month and today, inclusive.
    CurrentMonth,
    /// Any date. Superseded by `CurrentMonth`; kept for installs that still want it.
    Unrestricted,
}

/// Colors and labels handed to the chart renderer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPalette {
    pub spent_color: String,
    pub spent_border: String,
    pub free_color: String,
    pub free_border: String,
    pub free_label: String,
}

impl Default for ChartPalette {
    fn default() -> Self {
        Self {
            spent_color: "#ef4444".to_string(),
            spent_border: "#dc2626".to_string(),
            free_color: "#10b981".to_string(),
            free_border: "#059669".to_string(),
            free_label: "Livre".to_string(),
        }
    }
}

/// Tracker configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackerConfig {
    /// Durable store key
    pub storage_key: String,

    /// Date acceptance rule
    pub date_policy: DatePolicy,

    /// Minimum trimmed name length
    pub min_name_len: usize,

    /// Chart colors
    pub chart: ChartPalette,

    /// Display only; amounts are never converted
    pub currency_symbol: String,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            date_policy: DatePolicy::CurrentMonth,
            min_name_len: 3,
            chart: ChartPalette::default(),
            currency_symbol: "R$".to_string(),
        }
    }
}
