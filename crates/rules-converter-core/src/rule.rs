//! Rule file entity.
//!
//! A rule is a single `.mdc` file with an optional `---` header. Its category is
//! decided once from the header and never changes afterwards.

use std::fs;
use std::path::Path;

use crate::category::{Category, DESCRIPTION_KEY, GLOBS_KEY};
use crate::error::{ConvertError, Result};
use crate::frontmatter::{parse_frontmatter, split_frontmatter, Frontmatter};

/// Prefix of every reference line written to the output file.
pub const REFERENCE_PREFIX: &str = "@.cursor/rules/";

// ============================================================================
// RuleFile Entity
// ============================================================================

/// A parsed rule file.
#[derive(Debug, Clone)]
pub struct RuleFile {
    pub file_name: String,
    /// Path relative to the rules root, `/`-separated.
    pub relative_path: String,
    pub metadata: Frontmatter,
    pub body: String,
    category: Category,
}

impl RuleFile {
    /// Build a rule from its relative path and full text content.
    pub fn parse(relative_path: &Path, content: &str) -> Self {
        let (metadata, body) = match split_frontmatter(content) {
            Some((header, body)) => (parse_frontmatter(header), body),
            None => (Frontmatter::new(), content),
        };

        let file_name = relative_path
            .file_name()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_default();

        let relative_path = relative_path
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/");

        let category = Category::classify(&metadata);

        Self {
            file_name,
            relative_path,
            metadata,
            body: body.to_string(),
            category,
        }
    }

    /// Load a rule from `root.join(relative_path)`.
    pub fn load(root: &Path, relative_path: &Path) -> Result<Self> {
        let path = root.join(relative_path);
        let content = fs::read_to_string(&path).map_err(|source| ConvertError::ReadRule {
            path: path.clone(),
            source,
        })?;

        Ok(Self::parse(relative_path, &content))
    }

    pub fn category(&self) -> Category {
        self.category
    }

    /// `description` header value, `""` when missing.
    pub fn description(&self) -> &str {
        self.metadata.text(DESCRIPTION_KEY).unwrap_or_default()
    }

    /// `globs` header value, `""` when missing.
    pub fn globs(&self) -> &str {
        self.metadata.text(GLOBS_KEY).unwrap_or_default()
    }

    /// Reference line pointing at this rule, e.g. `@.cursor/rules/lang/rust.mdc`.
    pub fn reference(&self) -> String {
        let path = if self.relative_path.is_empty() {
            &self.file_name
        } else {
            &self.relative_path
        };
        format!("{}{}", REFERENCE_PREFIX, path)
    }
}
