use std::path::Path;

use tracing::{info, warn};

use crate::domain::entities::change::Normalized;
use crate::domain::text::strip::StripSet;
use crate::infra::import::decoder_for_path;
use crate::usecase::ports::codec::{DecodeError, LoadedSheet};
use crate::usecase::services::normalize_service::normalize;

/// Everything the UI keeps for one loaded file.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedDocument {
    pub sheet: LoadedSheet,
    pub normalized: Normalized,
}

impl LoadedDocument {
    /// Re-runs normalization over the raw grid. The previous records are
    /// dropped, not merged.
    pub fn renormalize(&self, strip: &StripSet) -> LoadedDocument {
        LoadedDocument {
            sheet: self.sheet.clone(),
            normalized: normalize(&self.sheet.grid, strip),
        }
    }
}

#[derive(Debug, Default)]
pub struct ImportService;

impl ImportService {
    pub fn new() -> Self {
        Self
    }

    pub fn load(&self, path: &Path, strip: &StripSet) -> Result<LoadedDocument, DecodeError> {
        let decoder = decoder_for_path(path)?;
        let sheet = decoder.decode(path)?;
        if sheet.grid.is_empty() {
            warn!(path = %path.display(), sheet = %sheet.sheet_name, "first sheet is empty");
        }
        let normalized = normalize(&sheet.grid, strip);
        info!(
            path = %path.display(),
            sheet = %sheet.sheet_name,
            rows = sheet.grid.row_count(),
            modified = normalized.modified_count(),
            "loaded and normalized sheet"
        );
        Ok(LoadedDocument { sheet, normalized })
    }
}
