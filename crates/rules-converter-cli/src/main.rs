use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use clap_complete::{generate, Shell};
use colored::Colorize;

use rules_converter_core::{
    convert, Config, ConfigKey, ConfigValue, ConversionStats, ConvertOptions, Result, Target,
};

mod args;
mod logging;
use args::{Cli, Commands, ConfigAction};

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = logging::init(cli.verbose, cli.quiet) {
        eprintln!("{} {}", "[WARN]".yellow().bold(), e);
    }

    let base_dir = cli.base_dir;
    tracing::debug!(base_dir = %base_dir.display(), "using base directory");
    let output = Output { quiet: cli.quiet };

    let result = match cli.command {
        Some(Commands::Convert {
            target,
            rules_dir,
            output: output_path,
            extension,
            no_wrap,
            json,
        }) => handle_convert(
            &base_dir,
            &target,
            rules_dir,
            output_path,
            extension,
            no_wrap,
            json,
            output,
        ),
        Some(Commands::Config { action }) => handle_config(action, &base_dir),
        Some(Commands::Completions { shell }) => {
            handle_completions(shell);
            Ok(())
        }
        None => {
            Cli::command().print_help().ok();
            Ok(())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "[ERROR]".red().bold(), e);
            ExitCode::from(e.exit_code() as u8)
        }
    }
}

/// Console printer honoring `--quiet`.
#[derive(Clone, Copy)]
struct Output {
    quiet: bool,
}

impl Output {
    fn line(&self, text: impl std::fmt::Display) {
        if !self.quiet {
            println!("{}", text);
        }
    }
}

fn handle_completions(shell: Shell) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut io::stdout());
}

#[allow(clippy::too_many_arguments)]
fn handle_convert(
    base_dir: &Path,
    target: &str,
    rules_dir: Option<PathBuf>,
    output_path: Option<PathBuf>,
    extension: Option<String>,
    no_wrap: bool,
    json: bool,
    out: Output,
) -> Result<()> {
    let target: Target = target.parse()?;
    let config = Config::load(base_dir)?;

    let mut options = ConvertOptions::from_config(target, &config);
    if let Some(dir) = rules_dir {
        options = options.rules_dir(dir);
    }
    if let Some(path) = output_path {
        options = options.output_path(path);
    }
    if let Some(ext) = extension {
        options.extension = ext.trim_start_matches('.').to_string();
    }
    if no_wrap {
        options = options.wrap(false);
    }

    if json {
        let stats = convert(&options)?;
        println!("{}", stats.to_json()?);
        return Ok(());
    }

    let heading = format!("Converting rules to {} format...", target.id().to_uppercase());
    out.line(heading.cyan());
    out.line(format!("Rules directory: {}", options.rules_dir.display()).dimmed());
    out.line(format!("Output file: {}", options.output_path.display()).dimmed());

    let stats = convert(&options)?;

    print_stats(&stats, out);
    out.line(format!(
        "{} {} {}",
        "Successfully".green(),
        stats.file_action.to_string().green(),
        stats.output_path.display()
    ));

    Ok(())
}

fn print_stats(stats: &ConversionStats, out: Output) {
    let counts = &stats.counts;
    out.line("");
    out.line("Conversion statistics:".cyan());
    out.line(format!("  Always rules: {}", counts.always));
    out.line(format!("  Agent Requested rules: {}", counts.agent_requested));
    out.line(format!("  Auto Attached rules: {}", counts.auto_attached));
    out.line(format!("  Manual rules (excluded): {}", counts.manual));
    out.line(format!("  Total processed: {}", counts.total));
    out.line("");
}

/// Color a config value by its TOML type.
fn styled_value(value: &ConfigValue) -> colored::ColoredString {
    let literal = value.to_toml();
    match value {
        ConfigValue::Bool(_) => literal.yellow(),
        ConfigValue::Path(_) | ConfigValue::Text(_) => literal.green(),
    }
}

fn handle_config(action: ConfigAction, base_dir: &Path) -> Result<()> {
    match action {
        ConfigAction::Get { key } => {
            let key: ConfigKey = key.parse()?;
            println!("{}", Config::load(base_dir)?.get(key));
        }
        ConfigAction::Set { key, value } => {
            let key: ConfigKey = key.parse()?;
            let mut config = Config::load(base_dir)?;
            let stored = config.set(key, &value)?;
            let path = config.save(base_dir)?;
            println!("{} {} = {}", "Set:".green(), key, styled_value(&stored));
            tracing::debug!(path = %path.display(), "saved config");
        }
        ConfigAction::List => {
            let config = Config::load(base_dir)?;
            let path = Config::file_path(base_dir);
            if !path.exists() {
                println!("{}", format!("# {} not found, showing defaults", path.display()).dimmed());
            }
            for (key, value) in config.list() {
                println!("{} = {}", key.to_string().cyan(), styled_value(&value));
            }
        }
        ConfigAction::Path => {
            println!("{}", Config::file_path(base_dir).display());
        }
        ConfigAction::Init => {
            let path = Config::file_path(base_dir);
            if Config::init(base_dir)? {
                println!("{} {}", "Initialized:".green(), path.display());
            } else {
                println!("{} {}", "Already exists:".yellow(), path.display());
            }
        }
    }

    Ok(())
}
