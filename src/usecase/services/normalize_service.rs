use crate::domain::entities::change::Normalized;
use crate::domain::entities::grid::{CellId, CellValue, Grid};
use crate::domain::text::accents::fold_accents;
use crate::domain::text::strip::StripSet;

/// Outcome for a single text cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellCleanup {
    pub cleaned: String,
    /// Accent-folded value before stripping.
    pub folded: String,
    pub modified: bool,
}

pub fn clean_text(raw: &str, strip: &StripSet) -> CellCleanup {
    let (folded, has_accent) = fold_accents(raw);
    let cleaned = strip.strip(&folded);
    let modified = has_accent || cleaned != raw;
    CellCleanup {
        cleaned,
        folded,
        modified,
    }
}

/// Folds accents and strips `strip` from every text cell in one pass.
///
/// A cell lands in `changed`/`original` when its text differs after cleaning
/// or when any accent was folded. `changed` keeps the folded, pre-strip text;
/// `original` keeps the raw text. Everything that is not text is copied as is.
pub fn normalize(grid: &Grid, strip: &StripSet) -> Normalized {
    grid.rows
        .iter()
        .enumerate()
        .fold(Normalized::default(), |mut acc, (row_idx, row)| {
            let cleaned_row: Vec<CellValue> = row
                .iter()
                .enumerate()
                .map(|(col_idx, value)| {
                    let Some(raw) = value.as_text() else {
                        return value.clone();
                    };
                    let cleanup = clean_text(raw, strip);
                    if cleanup.modified {
                        let id = CellId::new(row_idx, col_idx);
                        acc.changed.insert(id, cleanup.folded);
                        acc.original.insert(id, raw.to_string());
                    }
                    CellValue::Text(cleanup.cleaned)
                })
                .collect();
            acc.grid.rows.push(cleaned_row);
            acc
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_text_reports_folded_value_before_strip() {
        let cleanup = clean_text("Niño#1", &StripSet::parse("#"));
        assert_eq!(cleanup.cleaned, "Nino1");
        assert_eq!(cleanup.folded, "Nino#1");
        assert!(cleanup.modified);
    }

    #[test]
    fn clean_text_empty_input_is_untouched() {
        let cleanup = clean_text("", &StripSet::parse("#"));
        assert_eq!(cleanup.cleaned, "");
        assert!(!cleanup.modified);
    }
}
