use std::path::Path;

use rayon::prelude::*;
use serde::Serialize;
use tracing::debug;

use crate::category::Category;
use crate::discovery::discover_rule_files;
use crate::error::Result;
use crate::rule::RuleFile;

/// Rules grouped by category, each group in discovery order.
#[derive(Debug, Clone, Default)]
pub struct CategorizedRuleSet {
    always: Vec<RuleFile>,
    agent_requested: Vec<RuleFile>,
    auto_attached: Vec<RuleFile>,
    manual: Vec<RuleFile>,
}

impl CategorizedRuleSet {
    pub fn from_rules(rules: impl IntoIterator<Item = RuleFile>) -> Self {
        let mut set = Self::default();
        for rule in rules {
            let bucket = match rule.category() {
                Category::Always => &mut set.always,
                Category::AgentRequested => &mut set.agent_requested,
                Category::AutoAttached => &mut set.auto_attached,
                Category::Manual => &mut set.manual,
            };
            bucket.push(rule);
        }
        set
    }

    pub fn get(&self, category: Category) -> &[RuleFile] {
        match category {
            Category::Always => &self.always,
            Category::AgentRequested => &self.agent_requested,
            Category::AutoAttached => &self.auto_attached,
            Category::Manual => &self.manual,
        }
    }

    pub fn total(&self) -> usize {
        Category::all().iter().map(|c| self.get(*c).len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    pub fn counts(&self) -> RuleCounts {
        RuleCounts {
            always: self.always.len(),
            agent_requested: self.agent_requested.len(),
            auto_attached: self.auto_attached.len(),
            manual: self.manual.len(),
            total: self.total(),
        }
    }
}

/// Number of rules per category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RuleCounts {
    pub always: usize,
    pub agent_requested: usize,
    pub auto_attached: usize,
    pub manual: usize,
    pub total: usize,
}

/// Discover and parse every rule under `rules_dir`.
///
/// Files are read in parallel; the first read failure aborts the whole set.
pub fn parse_rules(rules_dir: &Path, extension: &str) -> Result<CategorizedRuleSet> {
    let discovered = discover_rule_files(rules_dir, extension)?;

    let rules = discovered
        .par_iter()
        .map(|d| RuleFile::load(rules_dir, &d.relative_path))
        .collect::<Result<Vec<_>>>()?;

    for rule in &rules {
        debug!(path = %rule.relative_path, category = %rule.category(), "parsed rule");
    }

    Ok(CategorizedRuleSet::from_rules(rules))
}
