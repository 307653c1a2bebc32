use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::WalkDir;

use crate::error::{ConvertError, Result};

/// Default rule file extension (Cursor `.mdc` files)
pub const DEFAULT_EXTENSION: &str = "mdc";

/// A rule file found under the rules root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveredRule {
    pub full_path: PathBuf,
    pub relative_path: PathBuf,
}

/// Recursively collect files ending in `.{extension}` under `root`.
///
/// Entries are visited in file name order at every level, so repeated runs on an
/// unchanged tree yield the same sequence. Symbolic links are followed; a link
/// cycle surfaces as [`ConvertError::Walk`].
pub fn discover_rule_files(root: &Path, extension: &str) -> Result<Vec<DiscoveredRule>> {
    if !root.exists() {
        return Err(ConvertError::RulesDirNotFound {
            path: root.to_path_buf(),
        });
    }
    if !root.is_dir() {
        return Err(ConvertError::NotADirectory {
            path: root.to_path_buf(),
        });
    }

    let suffix = format!(".{}", extension.trim_start_matches('.'));
    let mut rules = Vec::new();

    for entry in WalkDir::new(root).follow_links(true).sort_by_file_name() {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }

        let matches = entry
            .file_name()
            .to_str()
            .is_some_and(|name| name.ends_with(&suffix));
        if !matches {
            continue;
        }

        let full_path = entry.path().to_path_buf();
        let relative_path = match full_path.strip_prefix(root) {
            Ok(r) => r.to_path_buf(),
            Err(_) => continue,
        };

        debug!(path = %relative_path.display(), "discovered rule file");
        rules.push(DiscoveredRule {
            full_path,
            relative_path,
        });
    }

    if rules.is_empty() {
        return Err(ConvertError::NoRuleFiles {
            path: root.to_path_buf(),
        });
    }

    Ok(rules)
}
