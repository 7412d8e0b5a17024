//! Control baseline loader.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use comply_core::errors::{InputError, LoadError, SchemaError};
use comply_core::types::ControlRecord;

use super::{csv_error, csv_reader, line_of};
use crate::schema::{ColumnMap, Field, BASELINE_SCHEMA};

/// Load the control catalog from `path`. A missing file is fatal.
pub fn load_baseline(path: &Path) -> Result<Vec<ControlRecord>, LoadError> {
    let file = File::open(path).map_err(|source| InputError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let controls = parse_baseline(file, &path.display().to_string())?;
    tracing::info!(path = %path.display(), count = controls.len(), "loaded control baseline");
    Ok(controls)
}

/// Parse a baseline table. Source order is preserved and duplicate ids are
/// kept as-is; the reconciler decides what to do with them.
pub fn parse_baseline<R: Read>(reader: R, input: &str) -> Result<Vec<ControlRecord>, LoadError> {
    let mut rdr = csv_reader(reader);
    let headers = rdr.headers().map_err(|e| csv_error(input, e))?.clone();
    let columns = ColumnMap::resolve(input, &headers, &BASELINE_SCHEMA)?;

    let mut controls = Vec::new();
    for (i, result) in rdr.records().enumerate() {
        let record = result.map_err(|e| csv_error(input, e))?;
        let row = line_of(&record, i);

        let id = columns.cell(&record, Field::ControlId);
        if id.is_empty() {
            return Err(SchemaError::EmptyControlId {
                input: input.to_string(),
                row,
            }
            .into());
        }

        let raw_weight = columns.cell(&record, Field::Weight);
        let weight = parse_weight(raw_weight).map_err(|reason| SchemaError::InvalidValue {
            input: input.to_string(),
            row,
            column: Field::Weight.canonical().to_string(),
            value: raw_weight.to_string(),
            reason: reason.to_string(),
        })?;

        controls.push(ControlRecord::new(
            id,
            columns.cell(&record, Field::Framework),
            weight,
        ));
    }

    Ok(controls)
}

fn parse_weight(raw: &str) -> Result<f64, &'static str> {
    if raw.is_empty() {
        return Err("weight is required");
    }
    let weight: f64 = raw.parse().map_err(|_| "not a number")?;
    if !weight.is_finite() {
        return Err("must be finite");
    }
    if weight < 0.0 {
        return Err("must not be negative");
    }
    Ok(weight)
}
