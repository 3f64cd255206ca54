use std::path::{Path, PathBuf};

use calamine::{open_workbook_auto, Data, Reader};
use tracing::debug;

use crate::domain::entities::grid::{CellValue, Grid, Row};
use crate::usecase::ports::codec::{DecodeError, LoadedSheet, SheetDecoder};

pub fn cell_to_value(cell: &Data) -> CellValue {
    match cell {
        Data::String(v) => CellValue::Text(v.to_string()),
        Data::Float(v) => CellValue::Number(*v),
        Data::Int(v) => CellValue::Int(*v),
        Data::Bool(v) => CellValue::Bool(*v),
        Data::DateTime(v) => CellValue::DateTime(v.as_f64()),
        Data::DateTimeIso(v) => CellValue::IsoDateTime(v.to_string()),
        Data::DurationIso(v) => CellValue::IsoDateTime(v.to_string()),
        Data::Error(v) => CellValue::Error(v.to_string()),
        Data::Empty => CellValue::Empty,
    }
}

/// Reads the first sheet of any workbook calamine understands
/// (xlsx, xlsm, xlsb, xls, ods).
#[derive(Debug, Default, Clone, Copy)]
pub struct CalamineDecoder;

impl SheetDecoder for CalamineDecoder {
    fn decode(&self, path: &Path) -> Result<LoadedSheet, DecodeError> {
        let mut workbook = open_workbook_auto(path).map_err(|source| DecodeError::Open {
            path: PathBuf::from(path),
            source,
        })?;

        let sheet_name = workbook
            .sheet_names()
            .first()
            .cloned()
            .ok_or_else(|| DecodeError::NoSheets(PathBuf::from(path)))?;

        let range = workbook
            .worksheet_range(&sheet_name)
            .map_err(|source| DecodeError::Sheet {
                sheet: sheet_name.clone(),
                source,
            })?;

        // calamine trims leading blank rows and columns; pad them back so
        // cell positions match the sheet.
        let (row_offset, col_offset) = range
            .start()
            .map(|(row, col)| (row as usize, col as usize))
            .unwrap_or((0, 0));

        let mut rows: Vec<Row> = Vec::with_capacity(row_offset + range.height());
        if !range.is_empty() {
            rows.extend(std::iter::repeat_with(Vec::new).take(row_offset));
        }
        for source_row in range.rows() {
            let mut row: Row = vec![CellValue::Empty; col_offset];
            row.extend(source_row.iter().map(cell_to_value));
            rows.push(row);
        }

        debug!(
            path = %path.display(),
            sheet = %sheet_name,
            rows = rows.len(),
            "decoded workbook sheet"
        );

        Ok(LoadedSheet {
            source: PathBuf::from(path),
            sheet_name,
            grid: Grid::new(rows),
        })
    }
}
