use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::domain::entities::grid::Grid;

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("failed to open workbook {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: calamine::Error,
    },
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("workbook has no sheets: {0}")]
    NoSheets(PathBuf),
    #[error("failed to read sheet {sheet}: {source}")]
    Sheet {
        sheet: String,
        #[source]
        source: calamine::Error,
    },
    #[error("failed to parse csv {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("unsupported file type: {0}")]
    UnsupportedFormat(String),
}

#[derive(Debug, Error)]
pub enum EncodeError {
    #[error("cell {row}-{col} is outside the xlsx sheet limits")]
    OutOfRange { row: usize, col: usize },
    #[error("failed to build xlsx: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// First sheet of a decoded file.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedSheet {
    pub source: PathBuf,
    pub sheet_name: String,
    pub grid: Grid,
}

pub trait SheetDecoder {
    fn decode(&self, path: &Path) -> Result<LoadedSheet, DecodeError>;
}

pub trait SheetEncoder {
    fn encode(&self, sheet_name: &str, grid: &Grid) -> Result<Vec<u8>, EncodeError>;
}
