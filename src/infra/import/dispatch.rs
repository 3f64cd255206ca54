use std::path::Path;

use crate::infra::import::csv::CsvDecoder;
use crate::infra::import::xlsx::CalamineDecoder;
use crate::usecase::ports::codec::{DecodeError, SheetDecoder};

pub const WORKBOOK_EXTENSIONS: &[&str] = &["xlsx", "xlsm", "xlsb", "xls", "ods"];
pub const CSV_EXTENSIONS: &[&str] = &["csv"];

pub fn file_extension(path: &Path) -> String {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|s| s.to_ascii_lowercase())
        .unwrap_or_default()
}

pub fn decoder_for_path(path: &Path) -> Result<Box<dyn SheetDecoder>, DecodeError> {
    let ext = file_extension(path);
    if WORKBOOK_EXTENSIONS.contains(&ext.as_str()) {
        Ok(Box::new(CalamineDecoder))
    } else if CSV_EXTENSIONS.contains(&ext.as_str()) {
        Ok(Box::new(CsvDecoder))
    } else {
        Err(DecodeError::UnsupportedFormat(if ext.is_empty() {
            path.display().to_string()
        } else {
            format!(".{ext}")
        }))
    }
}
