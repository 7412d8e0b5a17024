//! Left outer join of the control baseline against the evidence feed.
//!
//! Rules:
//! - one merged control per baseline row, in baseline order
//! - several evidence rows for one id: the last one in input order wins
//! - evidence for ids outside the baseline is dropped
//! - repeated baseline ids follow [`DuplicateControlPolicy`]

use comply_core::config::DuplicateControlPolicy;
use comply_core::constants::NOT_CHECKED_STATUS;
use comply_core::errors::IntegrityError;
use comply_core::types::{
    ControlRecord, DataIntegrityWarning, EvidenceRecord, FxHashMap, FxHashSet, MergedControl,
    Reconciliation,
};

use crate::scoring::control_score;

/// Joins baseline and evidence into scored [`MergedControl`]s.
pub struct Reconciler {
    policy: DuplicateControlPolicy,
}

impl Reconciler {
    pub fn new(policy: DuplicateControlPolicy) -> Self {
        Self { policy }
    }

    pub fn merge(
        &self,
        baseline: &[ControlRecord],
        evidence: &[EvidenceRecord],
    ) -> Result<Reconciliation, IntegrityError> {
        let mut warnings = Vec::new();

        // Baseline id occurrences, keyed in first-seen order.
        let mut occurrences: FxHashMap<&str, usize> = FxHashMap::default();
        let mut id_order: Vec<&str> = Vec::new();
        for control in baseline {
            let count = occurrences.entry(control.id.as_str()).or_insert(0);
            if *count == 0 {
                id_order.push(control.id.as_str());
            }
            *count += 1;
        }
        for id in &id_order {
            let count = occurrences[id];
            if count < 2 {
                continue;
            }
            match self.policy {
                DuplicateControlPolicy::Reject => {
                    return Err(IntegrityError::DuplicateControlId {
                        id: id.to_string(),
                        occurrences: count,
                    });
                }
                DuplicateControlPolicy::Warn => {
                    warnings.push(DataIntegrityWarning::DuplicateControlId {
                        id: id.to_string(),
                        occurrences: count,
                    });
                }
            }
        }

        // Latest evidence per id plus how many rows targeted it.
        let mut latest: FxHashMap<&str, (&EvidenceRecord, usize)> = FxHashMap::default();
        let mut orphans: Vec<&str> = Vec::new();
        let mut orphan_seen: FxHashSet<&str> = FxHashSet::default();
        for record in evidence {
            let id = record.id.as_str();
            if !occurrences.contains_key(id) {
                if orphan_seen.insert(id) {
                    orphans.push(id);
                }
                continue;
            }
            latest
                .entry(id)
                .and_modify(|(current, count)| {
                    *current = record;
                    *count += 1;
                })
                .or_insert((record, 1));
        }

        for id in &id_order {
            if let Some(&(_, count)) = latest.get(id) {
                if count > 1 {
                    warnings.push(DataIntegrityWarning::MultipleEvidence {
                        id: id.to_string(),
                        count,
                    });
                }
            }
        }
        warnings.extend(orphans.into_iter().map(|id| DataIntegrityWarning::OrphanEvidence {
            id: id.to_string(),
        }));

        for warning in &warnings {
            tracing::warn!(%warning, "data integrity");
        }

        let controls: Vec<MergedControl> = baseline
            .iter()
            .map(|control| {
                let matched = latest.get(control.id.as_str()).map(|(record, _)| *record);
                merge_one(control, matched)
            })
            .collect();

        tracing::debug!(
            controls = controls.len(),
            matched = controls.iter().filter(|c| c.status != NOT_CHECKED_STATUS).count(),
            "reconciled baseline against evidence"
        );

        Ok(Reconciliation { controls, warnings })
    }
}

/// Convenience wrapper around [`Reconciler::merge`].
pub fn merge(
    baseline: &[ControlRecord],
    evidence: &[EvidenceRecord],
    policy: DuplicateControlPolicy,
) -> Result<Reconciliation, IntegrityError> {
    Reconciler::new(policy).merge(baseline, evidence)
}

fn merge_one(control: &ControlRecord, evidence: Option<&EvidenceRecord>) -> MergedControl {
    let (actual_value, status) = match evidence {
        Some(record) => (record.actual_value.clone(), record.status.clone()),
        None => (None, NOT_CHECKED_STATUS.to_string()),
    };
    let (compliant_flag, score) = control_score(&status, control.weight);
    MergedControl {
        id: control.id.clone(),
        framework: control.framework.clone(),
        weight: control.weight,
        actual_value,
        status,
        compliant_flag,
        score,
    }
}
