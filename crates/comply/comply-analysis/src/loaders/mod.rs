//! Baseline and evidence loaders.
//!
//! Both read CSV through [`csv`] with flexible record lengths, resolve the
//! header row with [`crate::schema::ColumnMap`], and build typed records.
//! Nothing past this point looks at raw column names.

pub mod baseline;
pub mod evidence;

pub use baseline::{load_baseline, parse_baseline};
pub use evidence::{load_evidence, parse_evidence};

use std::io::Read;

use csv::{Reader, ReaderBuilder, StringRecord};

use comply_core::errors::InputError;

fn csv_reader<R: Read>(reader: R) -> Reader<R> {
    ReaderBuilder::new().flexible(true).from_reader(reader)
}

fn csv_error(input: &str, err: csv::Error) -> InputError {
    InputError::Csv {
        input: input.to_string(),
        message: err.to_string(),
    }
}

/// 1-based source line of a record, falling back to its data-row position.
fn line_of(record: &StringRecord, data_index: usize) -> usize {
    record
        .position()
        .map(|p| p.line() as usize)
        .unwrap_or(data_index + 2)
}
