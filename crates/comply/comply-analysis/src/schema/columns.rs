//! Column resolution: trimmed headers matched against a fixed alias table.
//!
//! Matching is case-sensitive. Each field accepts the producer's display
//! header plus the camelCase/lowercase name used in exported datasets.

use csv::StringRecord;

use comply_core::errors::SchemaError;
use comply_core::types::FxHashMap;

/// A logical column the pipeline knows how to read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    ControlId,
    Framework,
    Weight,
    ActualValue,
    Status,
}

impl Field {
    /// Header name used in error messages and written outputs.
    pub fn canonical(self) -> &'static str {
        match self {
            Self::ControlId => "Control ID",
            Self::Framework => "Framework",
            Self::Weight => "Weight",
            Self::ActualValue => "ActualValue",
            Self::Status => "Status",
        }
    }

    /// Every header spelling that maps onto this field.
    pub fn aliases(self) -> &'static [&'static str] {
        match self {
            Self::ControlId => &["Control ID", "ControlID", "id"],
            Self::Framework => &["Framework", "framework"],
            Self::Weight => &["Weight", "weight"],
            Self::ActualValue => &["ActualValue", "actualValue"],
            Self::Status => &["Status", "status"],
        }
    }

    fn from_header(header: &str) -> Option<Self> {
        const ALL: [Field; 5] = [
            Field::ControlId,
            Field::Framework,
            Field::Weight,
            Field::ActualValue,
            Field::Status,
        ];
        ALL.into_iter().find(|f| f.aliases().contains(&header))
    }
}

/// Which fields a table must and may carry.
#[derive(Debug, Clone, Copy)]
pub struct TableSchema {
    pub required: &'static [Field],
    pub optional: &'static [Field],
}

pub const BASELINE_SCHEMA: TableSchema = TableSchema {
    required: &[Field::ControlId, Field::Framework, Field::Weight],
    optional: &[],
};

pub const EVIDENCE_SCHEMA: TableSchema = TableSchema {
    required: &[Field::ControlId, Field::Status],
    optional: &[Field::ActualValue],
};

/// Resolved field → column index mapping for one table.
#[derive(Debug, Clone, Default)]
pub struct ColumnMap {
    indices: FxHashMap<Field, usize>,
}

impl ColumnMap {
    /// Map `headers` onto `schema`, failing on the first missing required field.
    ///
    /// When two headers alias the same field, the leftmost one wins.
    pub fn resolve(
        input: &str,
        headers: &StringRecord,
        schema: &TableSchema,
    ) -> Result<Self, SchemaError> {
        let mut indices = FxHashMap::default();
        for (idx, raw) in headers.iter().enumerate() {
            let header = raw.trim();
            let Some(field) = Field::from_header(header) else {
                continue;
            };
            if !schema.required.contains(&field) && !schema.optional.contains(&field) {
                continue;
            }
            if indices.contains_key(&field) {
                tracing::debug!(input, header, "ignoring repeated column for {:?}", field);
                continue;
            }
            indices.insert(field, idx);
        }

        for field in schema.required {
            if !indices.contains_key(field) {
                return Err(SchemaError::MissingColumn {
                    input: input.to_string(),
                    column: field.canonical().to_string(),
                });
            }
        }

        Ok(Self { indices })
    }

    pub fn has(&self, field: Field) -> bool {
        self.indices.contains_key(&field)
    }

    pub fn index(&self, field: Field) -> Option<usize> {
        self.indices.get(&field).copied()
    }

    /// Trimmed cell for `field`; empty when the column or cell is absent.
    pub fn cell<'r>(&self, record: &'r StringRecord, field: Field) -> &'r str {
        self.index(field)
            .and_then(|idx| record.get(idx))
            .map(str::trim)
            .unwrap_or("")
    }
}
