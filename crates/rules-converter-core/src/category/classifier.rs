//! Category Classifier
//!
//! Maps parsed header metadata to exactly one [`Category`].

use serde::Serialize;

use crate::frontmatter::Frontmatter;

pub const ALWAYS_APPLY_KEY: &str = "alwaysApply";
pub const GLOBS_KEY: &str = "globs";
pub const DESCRIPTION_KEY: &str = "description";

/// Rule category, listed in evaluation priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Always,
    AutoAttached,
    AgentRequested,
    Manual,
}

impl Category {
    /// Classify header metadata. First match wins:
    /// 1. `alwaysApply: true`
    /// 2. non-blank `globs`
    /// 3. `alwaysApply: false` with a non-blank `description`
    /// 4. fallback
    pub fn classify(frontmatter: &Frontmatter) -> Self {
        let always_apply = frontmatter.bool(ALWAYS_APPLY_KEY);

        if always_apply == Some(true) {
            return Self::Always;
        }

        if frontmatter.has_text(GLOBS_KEY) {
            return Self::AutoAttached;
        }

        if always_apply == Some(false) && frontmatter.has_text(DESCRIPTION_KEY) {
            return Self::AgentRequested;
        }

        Self::Manual
    }

    pub fn all() -> &'static [Category] {
        &[
            Category::Always,
            Category::AutoAttached,
            Category::AgentRequested,
            Category::Manual,
        ]
    }

    /// Human-readable label used in summaries.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Always => "Always",
            Self::AutoAttached => "Auto Attached",
            Self::AgentRequested => "Agent Requested",
            Self::Manual => "Manual",
        }
    }

    /// Whether rules of this category appear in the generated output.
    pub fn is_rendered(&self) -> bool {
        !matches!(self, Self::Manual)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
