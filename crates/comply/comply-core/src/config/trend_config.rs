//! Trend analysis configuration.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_TREND_WINDOW;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct TrendConfig {
    /// Points per comparison window when classifying direction. Default: 7.
    pub window: Option<usize>,
}

impl TrendConfig {
    pub fn effective_window(&self) -> usize {
        self.window.unwrap_or(DEFAULT_TREND_WINDOW)
    }
}
