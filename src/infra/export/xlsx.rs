use rust_xlsxwriter::{Format, Workbook, Worksheet};
use tracing::warn;

use crate::domain::entities::grid::{CellValue, Grid};
use crate::usecase::ports::codec::{EncodeError, SheetEncoder};

pub const MAX_ROWS: usize = 1_048_576;
pub const MAX_COLS: usize = 16_384;
pub const FALLBACK_SHEET_NAME: &str = "Sheet1";
const DATE_TIME_FORMAT: &str = "yyyy-mm-dd hh:mm:ss";

/// Writes a grid into a single-sheet xlsx workbook held in memory.
#[derive(Debug, Default, Clone, Copy)]
pub struct XlsxEncoder;

impl SheetEncoder for XlsxEncoder {
    fn encode(&self, sheet_name: &str, grid: &Grid) -> Result<Vec<u8>, EncodeError> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        let renamed = worksheet
            .set_name(sheet_name)
            .map(|_| ())
            .map_err(|err| err.to_string());
        if let Err(message) = renamed {
            warn!(sheet = sheet_name, error = %message, "invalid sheet name, using fallback");
            worksheet.set_name(FALLBACK_SHEET_NAME)?;
        }

        let date_format = Format::new().set_num_format(DATE_TIME_FORMAT);
        for (id, value) in grid.cells() {
            if id.row >= MAX_ROWS || id.col >= MAX_COLS {
                return Err(EncodeError::OutOfRange {
                    row: id.row,
                    col: id.col,
                });
            }
            write_cell(worksheet, id.row as u32, id.col as u16, value, &date_format)?;
        }

        Ok(workbook.save_to_buffer()?)
    }
}

fn write_cell(
    worksheet: &mut Worksheet,
    row: u32,
    col: u16,
    value: &CellValue,
    date_format: &Format,
) -> Result<(), EncodeError> {
    match value {
        // xlsx has no empty string cell; it reads back as blank.
        CellValue::Text(v) if v.is_empty() => {}
        CellValue::Text(v) | CellValue::IsoDateTime(v) | CellValue::Error(v) => {
            worksheet.write_string(row, col, v)?;
        }
        CellValue::Number(v) => {
            worksheet.write_number(row, col, *v)?;
        }
        CellValue::Int(v) => {
            worksheet.write_number(row, col, *v as f64)?;
        }
        CellValue::Bool(v) => {
            worksheet.write_boolean(row, col, *v)?;
        }
        CellValue::DateTime(v) => {
            worksheet.write_number_with_format(row, col, *v, date_format)?;
        }
        CellValue::Empty => {}
    }
    Ok(())
}
