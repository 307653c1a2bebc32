//! Rendering of categorized rules into a Markdown block.
//!
//! Downstream tools parse this text, so the sentences and separators below are
//! part of the output format.

use tracing::warn;

use crate::category::Category;
use crate::extensions::group_by_extensions;
use crate::rule::RuleFile;
use crate::ruleset::CategorizedRuleSet;

const OPENING_MARKER: &str = "<rules>";
const CLOSING_MARKER: &str = "</rules>";

const ALWAYS_INTRO: &str = "The following rules should be considered foundational. \
Make sure you're familiar with them before working on this project:";

const SECTION_SEPARATOR: &str = "\n\n";

/// Rendering switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Wrap the block in `<rules>` / `</rules>` marker lines
    pub wrap: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { wrap: true }
    }
}

fn reference_list(rules: &[&RuleFile]) -> String {
    rules
        .iter()
        .map(|r| r.reference())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Foundational rules section. Empty when there are no rules.
pub fn render_always(rules: &[RuleFile]) -> String {
    if rules.is_empty() {
        return String::new();
    }

    let refs: Vec<&RuleFile> = rules.iter().collect();
    format!("{}\n{}", ALWAYS_INTRO, reference_list(&refs))
}

/// One `description:` + reference block per rule, separated by blank lines.
pub fn render_agent_requested(rules: &[RuleFile]) -> String {
    rules
        .iter()
        .map(|rule| {
            let description = rule.description();
            if description.trim().is_empty() {
                warn!(path = %rule.relative_path, "agent-requested rule has no description");
            }
            format!("{}:\n{}", description, rule.reference())
        })
        .collect::<Vec<_>>()
        .join(SECTION_SEPARATOR)
}

/// One block per extension group, separated by blank lines.
pub fn render_auto_attached(rules: &[RuleFile]) -> String {
    group_by_extensions(rules)
        .iter()
        .map(|group| {
            format!(
                "When working with files that match the following extensions ({}), \
review and apply the relevant rules:\n{}",
                group.display_list(),
                reference_list(&group.rules)
            )
        })
        .collect::<Vec<_>>()
        .join(SECTION_SEPARATOR)
}

/// Wrap content in the `<rules>` marker lines.
fn format_block(content: &str) -> String {
    format!("{}\n{}\n{}", OPENING_MARKER, content, CLOSING_MARKER)
}

/// Render the full block for one conversion run.
///
/// Sections appear in the order Always, Agent Requested, Auto Attached; empty
/// sections are left out and Manual rules are never rendered.
pub fn render_block(rules: &CategorizedRuleSet, options: &RenderOptions) -> String {
    let sections = [
        render_always(rules.get(Category::Always)),
        render_agent_requested(rules.get(Category::AgentRequested)),
        render_auto_attached(rules.get(Category::AutoAttached)),
    ];

    let content = sections
        .into_iter()
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(SECTION_SEPARATOR);

    if options.wrap {
        format_block(&content)
    } else {
        content
    }
}
