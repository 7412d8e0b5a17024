//! Trend history persistence: `Timestamp, OverallCompliance`.
//!
//! Each run reads the whole file, appends one row, and rewrites it. The
//! read-modify-write cycle runs inside [`TrendStore::transact`], which holds
//! an exclusive advisory lock on `<trend file>.lock` for its duration, so
//! overlapping runs queue up instead of dropping each other's points.

use std::fs::{File, OpenOptions};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use fd_lock::RwLock;

use comply_core::constants::TREND_HEADERS;
use comply_core::errors::StorageError;
use comply_core::types::{TrendPoint, TrendSeries};

use crate::atomic::write_atomic;

pub struct TrendStore {
    path: PathBuf,
    lock_path: PathBuf,
}

impl TrendStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let mut lock_name = path.file_name().unwrap_or_default().to_os_string();
        lock_name.push(".lock");
        let lock_path = path.with_file_name(lock_name);
        Self { path, lock_path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the current series without locking. A missing file is an empty series.
    pub fn read(&self) -> Result<TrendSeries, StorageError> {
        read_series(&self.path)
    }

    /// Run one locked read-modify-write cycle.
    ///
    /// `f` receives the current series and returns the series to persist plus
    /// a result. If `f` fails, the trend file is left untouched.
    pub fn transact<T, E, F>(&self, f: F) -> Result<T, E>
    where
        F: FnOnce(TrendSeries) -> Result<(TrendSeries, T), E>,
        E: From<StorageError>,
    {
        if let Some(parent) = self.lock_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|source| StorageError::Io {
                    path: parent.to_path_buf(),
                    source,
                })?;
            }
        }
        let lock_file = OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(&self.lock_path)
            .map_err(|source| StorageError::LockFailed {
                path: self.lock_path.clone(),
                source,
            })?;
        let mut lock = RwLock::new(lock_file);
        let _guard = lock.write().map_err(|source| StorageError::LockFailed {
            path: self.lock_path.clone(),
            source,
        })?;
        tracing::debug!(path = %self.lock_path.display(), "acquired trend lock");

        let current = read_series(&self.path)?;
        let before = current.len();
        let (next, out) = f(current)?;
        write_series(&self.path, &next)?;

        tracing::info!(
            path = %self.path.display(),
            points = next.len(),
            appended = next.len().saturating_sub(before),
            "updated trend history"
        );
        Ok(out)
    }
}

fn read_series(path: &Path) -> Result<TrendSeries, StorageError> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(TrendSeries::new()),
        Err(source) => {
            return Err(StorageError::Io {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    let csv_err = |e: csv::Error| StorageError::Csv {
        path: path.to_path_buf(),
        message: e.to_string(),
    };
    let corrupt = |row: usize, message: String| StorageError::CorruptTrend {
        path: path.to_path_buf(),
        row,
        message,
    };

    let mut rdr = csv::ReaderBuilder::new().flexible(true).from_reader(file);
    let headers = rdr.headers().map_err(csv_err)?.clone();
    if headers.iter().all(|h| h.trim().is_empty()) {
        return Ok(TrendSeries::new());
    }
    let column = |name: &str| headers.iter().position(|h| h.trim() == name);
    let (Some(ts_idx), Some(pct_idx)) = (column(TREND_HEADERS[0]), column(TREND_HEADERS[1])) else {
        return Err(corrupt(1, format!("expected header {TREND_HEADERS:?}")));
    };

    let mut points = Vec::new();
    for (i, result) in rdr.records().enumerate() {
        let record = result.map_err(csv_err)?;
        let row = record.position().map(|p| p.line() as usize).unwrap_or(i + 2);
        let timestamp = record.get(ts_idx).unwrap_or("").trim();
        let raw_pct = record.get(pct_idx).unwrap_or("").trim();
        let pct = raw_pct
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| corrupt(row, format!("'{raw_pct}' is not a percentage")))?;
        points.push(TrendPoint::new(timestamp, pct));
    }

    Ok(TrendSeries::from_points(points))
}

fn write_series(path: &Path, series: &TrendSeries) -> Result<(), StorageError> {
    let csv_err = |message: String| StorageError::Csv {
        path: path.to_path_buf(),
        message,
    };

    let mut writer = csv::Writer::from_writer(Vec::new());
    writer
        .write_record(TREND_HEADERS)
        .map_err(|e| csv_err(e.to_string()))?;
    for point in series.points() {
        writer
            .write_record([point.timestamp.clone(), point.overall_pct.to_string()])
            .map_err(|e| csv_err(e.to_string()))?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| csv_err(e.into_error().to_string()))?;
    write_atomic(path, &bytes)
}
