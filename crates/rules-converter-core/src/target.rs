//! Output targets.
//!
//! The converted rules can be written for two assistants:
//! - Claude Code (`CLAUDE.md`)
//! - Gemini CLI (`GEMINI.md`)

use serde::{Deserialize, Serialize};

use crate::error::ConvertError;

/// Target format for the generated file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Target {
    /// Claude Code (CLAUDE.md)
    #[default]
    Claude,
    /// Gemini CLI (GEMINI.md)
    Gemini,
}

impl Target {
    /// Get target name for display
    pub fn name(&self) -> &'static str {
        match self {
            Self::Claude => "Claude Code",
            Self::Gemini => "Gemini CLI",
        }
    }

    /// Get short identifier
    pub fn id(&self) -> &'static str {
        match self {
            Self::Claude => "claude",
            Self::Gemini => "gemini",
        }
    }

    /// Get all supported targets
    pub fn all() -> &'static [Target] {
        &[Target::Claude, Target::Gemini]
    }

    /// Default output file name (`CLAUDE.md`, `GEMINI.md`)
    pub fn default_output(&self) -> String {
        format!("{}.md", self.id().to_uppercase())
    }
}

impl std::fmt::Display for Target {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for Target {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "claude" => Ok(Self::Claude),
            "gemini" => Ok(Self::Gemini),
            _ => Err(ConvertError::InvalidTarget {
                target: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_is_case_insensitive() {
        assert_eq!("claude".parse::<Target>().unwrap(), Target::Claude);
        assert_eq!("CLAUDE".parse::<Target>().unwrap(), Target::Claude);
        assert_eq!("Gemini".parse::<Target>().unwrap(), Target::Gemini);
    }

    #[test]
    fn test_from_str_rejects_unknown() {
        let result = "cursor".parse::<Target>();
        assert!(matches!(result, Err(ConvertError::InvalidTarget { .. })));
    }

    #[test]
    fn test_default_output() {
        assert_eq!(Target::Claude.default_output(), "CLAUDE.md");
        assert_eq!(Target::Gemini.default_output(), "GEMINI.md");
    }

    #[test]
    fn test_all_targets_roundtrip_ids() {
        for target in Target::all() {
            assert_eq!(target.id().parse::<Target>().unwrap(), *target);
        }
    }
}
