//! Input records: baseline controls and evidence observations.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One entry in the static control catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ControlRecord {
    pub id: String,
    pub framework: String,
    pub weight: f64,
}

impl ControlRecord {
    pub fn new(id: impl Into<String>, framework: impl Into<String>, weight: f64) -> Self {
        Self {
            id: id.into(),
            framework: framework.into(),
            weight,
        }
    }
}

/// Observed value attached to a piece of evidence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ActualValue {
    Number(f64),
    Text(String),
}

impl ActualValue {
    /// Interpret a raw table cell. Blank cells carry no value.
    pub fn from_cell(cell: &str) -> Option<Self> {
        let cell = cell.trim();
        if cell.is_empty() {
            return None;
        }
        match cell.parse::<f64>() {
            Ok(n) if n.is_finite() => Some(Self::Number(n)),
            _ => Some(Self::Text(cell.to_string())),
        }
    }
}

impl fmt::Display for ActualValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

/// One observation about a control's current state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvidenceRecord {
    pub id: String,
    pub actual_value: Option<ActualValue>,
    pub status: String,
}

impl EvidenceRecord {
    pub fn new(
        id: impl Into<String>,
        actual_value: Option<ActualValue>,
        status: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            actual_value,
            status: status.into(),
        }
    }
}
