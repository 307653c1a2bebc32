pub mod category;
pub mod config;
pub mod convert;
pub mod discovery;
pub mod error;
pub mod extensions;
pub mod frontmatter;
pub mod render;
pub mod rule;
pub mod ruleset;
pub mod target;
pub mod writer;

pub use category::Category;
pub use config::{Config, ConfigKey, ConfigValue, ConvertConfig, DEFAULT_RULES_DIR};
pub use convert::{convert, ConversionStats, ConvertOptions};
pub use discovery::{discover_rule_files, DiscoveredRule, DEFAULT_EXTENSION};
pub use error::{ConvertError, Result};
pub use extensions::{extract_extensions, group_by_extensions, ExtensionGroup};
pub use frontmatter::{parse_frontmatter, split_frontmatter, Frontmatter, MetaValue};
pub use render::{render_block, RenderOptions};
pub use rule::{RuleFile, REFERENCE_PREFIX};
pub use ruleset::{parse_rules, CategorizedRuleSet, RuleCounts};
pub use target::Target;
pub use writer::{write_block, FileAction};
