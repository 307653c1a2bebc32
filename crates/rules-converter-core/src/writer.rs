use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

use serde::Serialize;

use crate::error::Result;

/// What happened to the output file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FileAction {
    Created,
    Appended,
}

impl std::fmt::Display for FileAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Created => write!(f, "created"),
            Self::Appended => write!(f, "appended"),
        }
    }
}

/// Write `block` to `path`.
///
/// A new file contains exactly `block`. An existing file keeps its content and
/// gets `\n\n` followed by `block` appended. Missing parent directories are created.
pub fn write_block(path: &Path, block: &str) -> Result<FileAction> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    if path.exists() {
        let mut file = OpenOptions::new().append(true).open(path)?;
        file.write_all(format!("\n\n{}", block).as_bytes())?;
        Ok(FileAction::Appended)
    } else {
        fs::write(path, block)?;
        Ok(FileAction::Created)
    }
}
