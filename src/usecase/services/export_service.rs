use std::path::{Path, PathBuf};

use tracing::info;

use crate::domain::entities::grid::Grid;
use crate::infra::export::xlsx::XlsxEncoder;
use crate::usecase::ports::codec::{EncodeError, SheetEncoder};

pub struct ExportService<E = XlsxEncoder> {
    encoder: E,
}

impl ExportService<XlsxEncoder> {
    pub fn new() -> Self {
        Self {
            encoder: XlsxEncoder,
        }
    }
}

impl<E: SheetEncoder> ExportService<E> {
    #[allow(dead_code)]
    pub fn with_encoder(encoder: E) -> Self {
        Self { encoder }
    }

    pub fn encode(&self, sheet_name: &str, grid: &Grid) -> Result<Vec<u8>, EncodeError> {
        self.encoder.encode(sheet_name, grid)
    }

    pub fn export(&self, sheet_name: &str, grid: &Grid, path: &Path) -> Result<(), EncodeError> {
        let bytes = self.encode(sheet_name, grid)?;
        std::fs::write(path, &bytes).map_err(|source| EncodeError::Write {
            path: PathBuf::from(path),
            source,
        })?;
        info!(path = %path.display(), bytes = bytes.len(), "exported cleaned sheet");
        Ok(())
    }
}
