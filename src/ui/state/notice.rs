use std::path::Path;

use crate::usecase::ports::codec::{DecodeError, EncodeError};
use crate::usecase::services::import_service::LoadedDocument;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            message: message.into(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }
}

fn file_label(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

pub fn loaded_notice(doc: &LoadedDocument) -> Notice {
    let modified = doc.normalized.modified_count();
    let cells = if modified == 1 { "cell" } else { "cells" };
    Notice::success(format!(
        "Loaded {} ({}): {modified} {cells} modified",
        file_label(&doc.sheet.source),
        doc.sheet.sheet_name
    ))
}

pub fn decode_failed_notice(path: &Path, err: &DecodeError) -> Notice {
    Notice::error(format!("Could not read {}: {err}", file_label(path)))
}

pub fn exported_notice(path: &Path) -> Notice {
    Notice::success(format!("Saved {}", file_label(path)))
}

pub fn encode_failed_notice(err: &EncodeError) -> Notice {
    Notice::error(format!("Could not save the cleaned file: {err}"))
}
