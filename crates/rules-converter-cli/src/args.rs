use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser)]
#[command(name = "rules-converter")]
#[command(about = "Convert cursor rules to CLAUDE.md or GEMINI.md format")]
#[command(version)]
pub struct Cli {
    /// Verbose output (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Quiet output (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Directory holding rules-converter.toml
    #[arg(
        long,
        global = true,
        env = "RULES_CONVERTER_DIR",
        default_value = ".",
        value_name = "DIR"
    )]
    pub base_dir: PathBuf,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Convert rules into a CLAUDE.md or GEMINI.md block
    Convert {
        /// Target format: "claude" or "gemini"
        target: String,

        /// Path to rules directory (default: .cursor/rules)
        #[arg(short, long, value_name = "PATH")]
        rules_dir: Option<PathBuf>,

        /// Output file path (default: <TARGET>.md)
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,

        /// Rule file extension (default: mdc)
        #[arg(long, value_name = "EXT")]
        extension: Option<String>,

        /// Don't wrap the generated block in <rules> tags
        #[arg(long)]
        no_wrap: bool,

        /// Print statistics as JSON
        #[arg(long)]
        json: bool,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Get a config value
    Get {
        /// Config key (e.g., convert.rules_dir)
        key: String,
    },

    /// Set a config value
    Set {
        /// Config key (e.g., convert.wrap)
        key: String,

        /// Value to set
        value: String,
    },

    /// List all config values
    List,

    /// Show config file path
    Path,

    /// Create config file with defaults
    Init,
}
