//! Writers for the ranked rows and the raw league snapshot.

pub mod database;
pub mod delimited;
pub mod snapshot;
pub mod spreadsheet;

use std::{
    fmt, fs, io,
    path::{Path, PathBuf},
    str::FromStr,
};

use thiserror::Error;
use tracing::info;

use crate::model::ranked::RankedRecord;

use self::{database::DbExporter, delimited::CsvExporter, spreadsheet::ExcelExporter};

pub trait Exporter {
    fn write(&self, records: &[RankedRecord], path: &Path) -> Result<(), ExportError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Excel,
    Db,
}

impl ExportFormat {
    pub fn exporter(self) -> &'static dyn Exporter {
        match self {
            ExportFormat::Csv => &CsvExporter,
            ExportFormat::Excel => &ExcelExporter,
            ExportFormat::Db => &DbExporter,
        }
    }

    pub fn example_filename(self) -> &'static str {
        match self {
            ExportFormat::Csv => "players.csv",
            ExportFormat::Excel => "players.xlsx",
            ExportFormat::Db => "players.db",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportFormat::Csv => write!(f, "CSV"),
            ExportFormat::Excel => write!(f, "Excel"),
            ExportFormat::Db => write!(f, "SQLite"),
        }
    }
}

impl FromStr for ExportFormat {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "excel" | "xlsx" => Ok(ExportFormat::Excel),
            "db" | "sqlite" => Ok(ExportFormat::Db),
            _ => Err(ExportError::UnsupportedFormat(s.trim().to_string())),
        }
    }
}

/// Where export files end up relative to the filename the user gave.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputPolicy {
    Direct,
    Rooted(PathBuf),
}

impl OutputPolicy {
    pub fn resolve(&self, filename: &Path) -> io::Result<PathBuf> {
        match self {
            OutputPolicy::Direct => Ok(filename.to_path_buf()),
            OutputPolicy::Rooted(dir) => {
                fs::create_dir_all(dir)?;
                Ok(dir.join(filename))
            }
        }
    }
}

pub fn export_records(
    records: &[RankedRecord],
    format: ExportFormat,
    filename: &Path,
    policy: &OutputPolicy,
) -> Result<PathBuf, ExportError> {
    if records.is_empty() {
        return Err(ExportError::NoRecords);
    }

    let path = policy.resolve(filename)?;
    format.exporter().write(records, &path)?;
    info!(path = %path.display(), rows = records.len(), "{} export written", format);
    Ok(path)
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Output format {0:?} is not supported (expected csv, excel or db)")]
    UnsupportedFormat(String),
    #[error("No records to export")]
    NoRecords,
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Spreadsheet error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),
    #[error("Database error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}
