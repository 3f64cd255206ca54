use std::borrow::Cow;
use std::path::{Path, PathBuf};

use encoding_rs::WINDOWS_1252;
use tracing::debug;

use crate::domain::entities::grid::{CellValue, Grid, Row};
use crate::usecase::ports::codec::{DecodeError, LoadedSheet, SheetDecoder};

pub const CSV_SHEET_NAME: &str = "Sheet1";

/// UTF-8 when the bytes are valid UTF-8 (a leading BOM is dropped),
/// Windows-1252 otherwise. Spreadsheet tools commonly save csv in the latter.
pub fn decode_csv_text(bytes: &[u8]) -> Cow<'_, str> {
    match std::str::from_utf8(bytes) {
        Ok(text) => Cow::Borrowed(text.strip_prefix('\u{feff}').unwrap_or(text)),
        Err(_) => WINDOWS_1252.decode_without_bom_handling(bytes).0,
    }
}

/// Reads a csv file as a single sheet. Every row is data; rows keep their
/// own lengths.
#[derive(Debug, Default, Clone, Copy)]
pub struct CsvDecoder;

impl SheetDecoder for CsvDecoder {
    fn decode(&self, path: &Path) -> Result<LoadedSheet, DecodeError> {
        let csv_error = |source| DecodeError::Csv {
            path: PathBuf::from(path),
            source,
        };

        let bytes = std::fs::read(path).map_err(|source| DecodeError::Read {
            path: PathBuf::from(path),
            source,
        })?;
        let text = decode_csv_text(&bytes);

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(text.as_bytes());

        let mut rows: Vec<Row> = Vec::new();
        for record in reader.records() {
            let record = record.map_err(csv_error)?;
            rows.push(
                record
                    .iter()
                    .map(|field| {
                        if field.is_empty() {
                            CellValue::Empty
                        } else {
                            CellValue::Text(field.to_string())
                        }
                    })
                    .collect(),
            );
        }

        debug!(path = %path.display(), rows = rows.len(), "decoded csv");

        Ok(LoadedSheet {
            source: PathBuf::from(path),
            sheet_name: CSV_SHEET_NAME.to_string(),
            grid: Grid::new(rows),
        })
    }
}
