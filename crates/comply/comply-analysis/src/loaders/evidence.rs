//! Evidence feed loader. The feed is optional.

use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::Path;

use comply_core::errors::{InputError, LoadError};
use comply_core::types::{ActualValue, EvidenceRecord};

use super::{csv_error, csv_reader, line_of};
use crate::schema::{ColumnMap, Field, EVIDENCE_SCHEMA};

/// Load evidence from `path`. A missing file yields an empty set.
pub fn load_evidence(path: &Path) -> Result<Vec<EvidenceRecord>, LoadError> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::info!(path = %path.display(), "no evidence feed; every control is unchecked");
            return Ok(Vec::new());
        }
        Err(source) => {
            return Err(InputError::Io {
                path: path.to_path_buf(),
                source,
            }
            .into())
        }
    };
    let evidence = parse_evidence(file, &path.display().to_string())?;
    tracing::info!(path = %path.display(), count = evidence.len(), "loaded evidence");
    Ok(evidence)
}

/// Parse an evidence table. Status values are passed through untouched;
/// normalization belongs to the scorer.
pub fn parse_evidence<R: Read>(reader: R, input: &str) -> Result<Vec<EvidenceRecord>, LoadError> {
    let mut rdr = csv_reader(reader);
    let headers = rdr.headers().map_err(|e| csv_error(input, e))?.clone();
    if headers.iter().all(|h| h.trim().is_empty()) {
        tracing::debug!(input, "evidence source has no header row; treating as empty");
        return Ok(Vec::new());
    }
    let columns = ColumnMap::resolve(input, &headers, &EVIDENCE_SCHEMA)?;

    let mut evidence = Vec::new();
    for (i, result) in rdr.records().enumerate() {
        let record = result.map_err(|e| csv_error(input, e))?;

        let id = columns.cell(&record, Field::ControlId);
        if id.is_empty() {
            tracing::warn!(input, row = line_of(&record, i), "skipping evidence row with empty control id");
            continue;
        }

        evidence.push(EvidenceRecord::new(
            id,
            ActualValue::from_cell(columns.cell(&record, Field::ActualValue)),
            columns.cell(&record, Field::Status),
        ));
    }

    Ok(evidence)
}
