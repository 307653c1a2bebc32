//! File extension groups for auto-attached rules.
//!
//! `globs: **/*.ts, *.tsx` yields the extensions `ts` and `tsx`. Rules whose
//! extension sets are equal (in any order) share one rendered block.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::rule::RuleFile;

static EXTENSION_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*\.(\w+)").unwrap());

/// Extract extensions from a comma-separated glob list.
///
/// Only the first `*.ext` of each pattern counts. The result is de-duplicated
/// and sorted.
pub fn extract_extensions(globs: &str) -> Vec<String> {
    let mut extensions: Vec<String> = globs
        .split(',')
        .map(str::trim)
        .filter_map(|pattern| EXTENSION_PATTERN.captures(pattern))
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .collect();

    extensions.sort();
    extensions.dedup();
    extensions
}

/// Auto-attached rules sharing one extension set.
#[derive(Debug, Clone)]
pub struct ExtensionGroup<'a> {
    pub extensions: Vec<String>,
    pub rules: Vec<&'a RuleFile>,
}

impl ExtensionGroup<'_> {
    /// Grouping key: the sorted extensions joined with `,`.
    pub fn key(&self) -> String {
        self.extensions.join(",")
    }

    /// Display form, e.g. `.ts, .tsx`.
    pub fn display_list(&self) -> String {
        self.extensions
            .iter()
            .map(|ext| format!(".{}", ext))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Group rules by extension set, keeping the order in which each set first appears.
pub fn group_by_extensions<'a>(rules: &'a [RuleFile]) -> Vec<ExtensionGroup<'a>> {
    let mut groups: Vec<ExtensionGroup<'a>> = Vec::new();

    for rule in rules {
        let extensions = extract_extensions(rule.globs());
        if extensions.is_empty() {
            tracing::warn!(
                path = %rule.relative_path,
                globs = rule.globs(),
                "no file extension found in globs"
            );
        }

        match groups.iter_mut().find(|g| g.extensions == extensions) {
            Some(group) => group.rules.push(rule),
            None => groups.push(ExtensionGroup {
                extensions,
                rules: vec![rule],
            }),
        }
    }

    groups
}
