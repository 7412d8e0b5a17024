//! Reconciled controls and the integrity findings produced while joining.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::control::ActualValue;

/// A baseline control joined with its evidence and scored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MergedControl {
    pub id: String,
    pub framework: String,
    pub weight: f64,
    pub actual_value: Option<ActualValue>,
    pub status: String,
    /// 1 when the normalized status is "compliant", else 0.
    pub compliant_flag: u8,
    /// `compliant_flag * weight`.
    pub score: f64,
}

/// Non-fatal data problems found while reconciling baseline and evidence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum DataIntegrityWarning {
    /// The same control id appears more than once in the baseline.
    DuplicateControlId { id: String, occurrences: usize },
    /// Evidence references a control the baseline does not know.
    OrphanEvidence { id: String },
    /// More than one evidence record targets the same control.
    MultipleEvidence { id: String, count: usize },
}

impl fmt::Display for DataIntegrityWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateControlId { id, occurrences } => {
                write!(f, "control '{id}' appears {occurrences} times in the baseline")
            }
            Self::OrphanEvidence { id } => {
                write!(f, "evidence for unknown control '{id}' was dropped")
            }
            Self::MultipleEvidence { id, count } => {
                write!(f, "control '{id}' has {count} evidence records; the last one wins")
            }
        }
    }
}

/// Output of the reconciler: one merged control per baseline row.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reconciliation {
    pub controls: Vec<MergedControl>,
    pub warnings: Vec<DataIntegrityWarning>,
}

impl Reconciliation {
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }
}
