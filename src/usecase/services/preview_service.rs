use crate::domain::entities::change::{ChangeRecord, OriginalRecord};
use crate::domain::entities::grid::{CellId, Grid};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewCell {
    pub text: String,
    pub modified: bool,
    pub annotation: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PreviewModel {
    pub rows: Vec<Vec<PreviewCell>>,
    pub column_count: usize,
    pub modified_count: usize,
}

impl PreviewModel {
    #[allow(dead_code)]
    pub fn cell(&self, id: CellId) -> Option<&PreviewCell> {
        self.rows.get(id.row).and_then(|row| row.get(id.col))
    }
}

pub fn original_value_annotation(original: &str) -> String {
    format!("Original value: {original}")
}

/// Projects a grid into display cells. A cell is marked modified when its id
/// is in `changed`; its annotation always comes from `original`.
pub fn render(grid: &Grid, changed: &ChangeRecord, original: &OriginalRecord) -> PreviewModel {
    let rows: Vec<Vec<PreviewCell>> = grid
        .rows
        .iter()
        .enumerate()
        .map(|(row_idx, row)| {
            row.iter()
                .enumerate()
                .map(|(col_idx, value)| {
                    let id = CellId::new(row_idx, col_idx);
                    let modified = changed.contains_key(&id);
                    let annotation = if modified {
                        Some(original_value_annotation(
                            original.get(&id).map(String::as_str).unwrap_or_default(),
                        ))
                    } else {
                        None
                    };
                    PreviewCell {
                        text: value.to_string(),
                        modified,
                        annotation,
                    }
                })
                .collect()
        })
        .collect();
    let modified_count = rows
        .iter()
        .flatten()
        .filter(|cell| cell.modified)
        .count();

    PreviewModel {
        column_count: grid.column_count(),
        modified_count,
        rows,
    }
}

/// Converts a 0-based column index to its sheet letter (0 = A, 26 = AA).
pub fn column_letter(col: usize) -> String {
    let mut result = String::new();
    let mut n = col;
    loop {
        result.insert(0, (b'A' + (n % 26) as u8) as char);
        if n < 26 {
            break;
        }
        n = n / 26 - 1;
    }
    result
}
