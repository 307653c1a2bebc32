//! Conversion pipeline: discover, parse, render, write.

use std::path::PathBuf;

use serde::Serialize;
use tracing::info;

use crate::config::Config;
use crate::error::Result;
use crate::render::{render_block, RenderOptions};
use crate::ruleset::{parse_rules, RuleCounts};
use crate::target::Target;
use crate::writer::{write_block, FileAction};

/// Inputs for one conversion run.
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    pub target: Target,
    pub rules_dir: PathBuf,
    pub output_path: PathBuf,
    pub extension: String,
    pub wrap: bool,
}

impl ConvertOptions {
    /// Options with defaults: `.cursor/rules`, `<TARGET>.md`, `.mdc`, wrapped.
    pub fn new(target: Target) -> Self {
        Self::from_config(target, &Config::default())
    }

    /// Options taking directory, extension and wrapping from `config`.
    pub fn from_config(target: Target, config: &Config) -> Self {
        Self {
            target,
            rules_dir: config.convert.rules_dir.clone(),
            output_path: PathBuf::from(target.default_output()),
            extension: config.convert.extension.clone(),
            wrap: config.convert.wrap,
        }
    }

    pub fn rules_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.rules_dir = dir.into();
        self
    }

    pub fn output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = path.into();
        self
    }

    pub fn wrap(mut self, wrap: bool) -> Self {
        self.wrap = wrap;
        self
    }
}

/// Result of a conversion run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConversionStats {
    #[serde(flatten)]
    pub counts: RuleCounts,
    pub file_action: FileAction,
    pub output_path: PathBuf,
}

impl ConversionStats {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Run a full conversion.
///
/// All rule files are parsed before anything is written; on error the output file
/// is left untouched.
pub fn convert(options: &ConvertOptions) -> Result<ConversionStats> {
    info!(
        format = options.target.id(),
        rules_dir = %options.rules_dir.display(),
        output = %options.output_path.display(),
        "converting rules"
    );

    let rules = parse_rules(&options.rules_dir, &options.extension)?;
    let block = render_block(&rules, &RenderOptions { wrap: options.wrap });
    let file_action = write_block(&options.output_path, &block)?;

    let counts = rules.counts();
    info!(
        always = counts.always,
        agent_requested = counts.agent_requested,
        auto_attached = counts.auto_attached,
        manual = counts.manual,
        action = %file_action,
        "conversion finished"
    );

    Ok(ConversionStats {
        counts,
        file_action,
        output_path: options.output_path.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigKey;
    use crate::error::ConvertError;
    use std::fs;
    use tempfile::TempDir;

    fn setup(files: &[(&str, &str)]) -> TempDir {
        let temp = TempDir::new().unwrap();
        let rules = temp.path().join(".cursor/rules");
        fs::create_dir_all(&rules).unwrap();
        for (name, content) in files {
            let path = rules.join(name);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(path, content).unwrap();
        }
        temp
    }

    fn options(temp: &TempDir) -> ConvertOptions {
        ConvertOptions::new(Target::Claude)
            .rules_dir(temp.path().join(".cursor/rules"))
            .output_path(temp.path().join("CLAUDE.md"))
    }

    #[test]
    fn test_always_and_auto_attached_scenario() {
        let temp = setup(&[
            ("base.mdc", "---\nalwaysApply: true\n---\nBase rules\n"),
            ("js.mdc", "---\nglobs: *.js\n---\nJS rules\n"),
        ]);

        let stats = convert(&options(&temp)).unwrap();
        assert_eq!(
            stats.counts,
            RuleCounts {
                always: 1,
                agent_requested: 0,
                auto_attached: 1,
                manual: 0,
                total: 2,
            }
        );
        assert_eq!(stats.file_action, FileAction::Created);

        let output = fs::read_to_string(temp.path().join("CLAUDE.md")).unwrap();
        assert_eq!(
            output,
            "<rules>\n\
The following rules should be considered foundational. Make sure you're familiar with \
them before working on this project:\n\
@.cursor/rules/base.mdc\n\
\n\
When working with files that match the following extensions (.js), review and apply \
the relevant rules:\n\
@.cursor/rules/js.mdc\n\
</rules>"
        );
    }

    #[test]
    fn test_agent_requested_scenario() {
        let temp = setup(&[(
            "typing.mdc",
            "---\nalwaysApply: false\ndescription: use strict typing\n---\n",
        )]);

        let stats = convert(&options(&temp).wrap(false)).unwrap();
        assert_eq!(stats.counts.agent_requested, 1);

        let output = fs::read_to_string(temp.path().join("CLAUDE.md")).unwrap();
        assert_eq!(output, "use strict typing:\n@.cursor/rules/typing.mdc");
    }

    #[test]
    fn test_repeated_runs_accumulate() {
        let temp = setup(&[("base.mdc", "---\nalwaysApply: true\n---\n")]);
        let opts = options(&temp);

        let first = convert(&opts).unwrap();
        let block = fs::read_to_string(&opts.output_path).unwrap();
        let second = convert(&opts).unwrap();

        assert_eq!(first.file_action, FileAction::Created);
        assert_eq!(second.file_action, FileAction::Appended);
        assert_eq!(
            fs::read_to_string(&opts.output_path).unwrap(),
            format!("{}\n\n{}", block, block)
        );
    }

    #[test]
    fn test_nested_rules_keep_relative_path() {
        let temp = setup(&[("frontend/react.mdc", "---\nglobs: **/*.tsx\n---\n")]);

        convert(&options(&temp)).unwrap();
        let output = fs::read_to_string(temp.path().join("CLAUDE.md")).unwrap();
        assert!(output.contains("@.cursor/rules/frontend/react.mdc"));
    }

    #[test]
    fn test_errors_leave_output_untouched() {
        let temp = TempDir::new().unwrap();
        let output = temp.path().join("CLAUDE.md");
        fs::write(&output, "existing").unwrap();

        let opts = ConvertOptions::new(Target::Claude)
            .rules_dir(temp.path().join("missing"))
            .output_path(&output);
        let result = convert(&opts);

        assert!(matches!(result, Err(ConvertError::RulesDirNotFound { .. })));
        assert_eq!(fs::read_to_string(&output).unwrap(), "existing");
    }

    #[test]
    fn test_empty_rules_dir_writes_nothing() {
        let temp = setup(&[("readme.md", "not a rule")]);
        let opts = options(&temp);

        let result = convert(&opts);
        assert!(matches!(result, Err(ConvertError::NoRuleFiles { .. })));
        assert!(!opts.output_path.exists());
    }

    #[test]
    fn test_options_from_config() {
        let mut config = Config::default();
        config.set(ConfigKey::RulesDir, "rules").unwrap();
        config.set(ConfigKey::Wrap, "false").unwrap();

        let opts = ConvertOptions::from_config(Target::Gemini, &config);
        assert_eq!(opts.rules_dir, PathBuf::from("rules"));
        assert_eq!(opts.output_path, PathBuf::from("GEMINI.md"));
        assert!(!opts.wrap);
    }

    #[test]
    fn test_stats_serialize_flat() {
        let temp = setup(&[("m.mdc", "no header")]);
        let stats = convert(&options(&temp)).unwrap();

        let json: serde_json::Value = serde_json::from_str(&stats.to_json().unwrap()).unwrap();
        assert_eq!(json["manual"], 1);
        assert_eq!(json["total"], 1);
        assert_eq!(json["file_action"], "created");
    }
}
