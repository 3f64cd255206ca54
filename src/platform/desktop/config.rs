use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use directories::ProjectDirs;

use crate::infra::import::dispatch::{CSV_EXTENSIONS, WORKBOOK_EXTENSIONS};

pub const APP_TITLE: &str = "Sheet Scrub";
pub const DEFAULT_EXPORT_FILE_NAME: &str = "processed_file.xlsx";
pub const LOG_FILE_NAME: &str = "sheet-scrub.log";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub window_title: String,
    pub default_export_name: String,
    pub accepted_extensions: Vec<&'static str>,
    pub data_dir: PathBuf,
}

impl AppConfig {
    pub fn load() -> Result<Self> {
        Ok(Self::with_data_dir(default_data_dir()?))
    }

    pub fn with_data_dir(data_dir: PathBuf) -> Self {
        Self {
            window_title: APP_TITLE.to_string(),
            default_export_name: DEFAULT_EXPORT_FILE_NAME.to_string(),
            accepted_extensions: WORKBOOK_EXTENSIONS
                .iter()
                .chain(CSV_EXTENSIONS)
                .copied()
                .collect(),
            data_dir,
        }
    }

    pub fn webview_data_dir(&self) -> Result<PathBuf> {
        ensure_subdir(&self.data_dir, "webview2")
    }

    pub fn logs_dir(&self) -> Result<PathBuf> {
        ensure_subdir(&self.data_dir, "logs")
    }
}

pub fn default_data_dir() -> Result<PathBuf> {
    let project_dirs = ProjectDirs::from("com", "sheetscrub", "sheet-scrub")
        .ok_or_else(|| anyhow!("unable to resolve data directory"))?;
    Ok(project_dirs.data_local_dir().to_path_buf())
}

pub fn ensure_subdir(base: &Path, name: &str) -> Result<PathBuf> {
    let dir = base.join(name);
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("failed to create dir: {}", dir.display()))?;
    Ok(dir)
}
