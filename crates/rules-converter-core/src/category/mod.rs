//! # Category Module
//!
//! Classifies rule files into the four categories understood by the renderer.
//!
//! - **Always**: `alwaysApply: true`, always listed as foundational reading
//! - **AutoAttached**: has `globs`, listed per file extension group
//! - **AgentRequested**: `alwaysApply: false` with a `description`
//! - **Manual**: everything else, counted but never rendered
//!
//! ## Example
//!
//! ```rust
//! use rules_converter_core::category::Category;
//! use rules_converter_core::frontmatter::parse_frontmatter;
//!
//! let fm = parse_frontmatter("alwaysApply: true\nglobs: *.rs\n");
//! assert_eq!(Category::classify(&fm), Category::Always);
//!
//! let fm = parse_frontmatter("globs: *.rs\n");
//! assert_eq!(Category::classify(&fm), Category::AutoAttached);
//! ```

mod classifier;

pub use classifier::{Category, ALWAYS_APPLY_KEY, DESCRIPTION_KEY, GLOBS_KEY};
