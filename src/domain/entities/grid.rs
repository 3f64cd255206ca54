use std::fmt;

use chrono::{Duration, NaiveDate, NaiveDateTime, Timelike};

/// One cell as read from the source sheet.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Text(String),
    Number(f64),
    Int(i64),
    Bool(bool),
    /// Excel serial date/time.
    DateTime(f64),
    /// ISO 8601 date, time or duration kept as written by the source file.
    IsoDateTime(String),
    Error(String),
    Empty,
}

impl CellValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            CellValue::Text(v) => Some(v),
            _ => None,
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::Text(value)
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Text(v) => write!(f, "{v}"),
            CellValue::DateTime(v) => match excel_serial_to_datetime(*v) {
                Some(dt) if dt.num_seconds_from_midnight() == 0 => {
                    write!(f, "{}", dt.format("%Y-%m-%d"))
                }
                Some(dt) => write!(f, "{}", dt.format("%Y-%m-%d %H:%M:%S")),
                None => write!(f, "{v}"),
            },
            CellValue::Number(v) => {
                if v.fract() == 0.0 && v.abs() < 1e15 {
                    write!(f, "{}", *v as i64)
                } else {
                    write!(f, "{v}")
                }
            }
            CellValue::Int(v) => write!(f, "{v}"),
            CellValue::Bool(true) => write!(f, "TRUE"),
            CellValue::Bool(false) => write!(f, "FALSE"),
            CellValue::IsoDateTime(v) | CellValue::Error(v) => write!(f, "{v}"),
            CellValue::Empty => Ok(()),
        }
    }
}

/// Excel's 1900 date system, counted from 1899-12-30, rounded to the second.
pub fn excel_serial_to_datetime(serial: f64) -> Option<NaiveDateTime> {
    if !serial.is_finite() || serial < 0.0 || serial > 2_958_466.0 {
        return None;
    }
    let epoch = NaiveDate::from_ymd_opt(1899, 12, 30)?.and_hms_opt(0, 0, 0)?;
    let seconds = (serial * 86_400.0).round() as i64;
    epoch.checked_add_signed(Duration::seconds(seconds))
}

pub type Row = Vec<CellValue>;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Grid {
    pub rows: Vec<Row>,
}

impl Grid {
    pub fn new(rows: Vec<Row>) -> Self {
        Self { rows }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Width of the widest row; rows keep their own lengths.
    pub fn column_count(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    #[allow(dead_code)]
    pub fn get(&self, id: CellId) -> Option<&CellValue> {
        self.rows.get(id.row).and_then(|row| row.get(id.col))
    }

    pub fn cells(&self) -> impl Iterator<Item = (CellId, &CellValue)> {
        self.rows.iter().enumerate().flat_map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .map(move |(col, value)| (CellId::new(row, col), value))
        })
    }
}

impl<T: Into<CellValue>> From<Vec<Vec<T>>> for Grid {
    fn from(rows: Vec<Vec<T>>) -> Self {
        Grid::new(
            rows.into_iter()
                .map(|row| row.into_iter().map(Into::into).collect())
                .collect(),
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CellId {
    pub row: usize,
    pub col: usize,
}

impl CellId {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for CellId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.row, self.col)
    }
}
