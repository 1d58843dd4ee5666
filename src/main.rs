//! keydiff command-line interface.
//!
//! Loads two localization files, compares their key paths and prints the keys
//! missing from each side. Exits with 0 when both files define the same keys,
//! 1 when keys are missing and 2 on error.

use anyhow::Result;
use clap::{Parser, ValueEnum};
use keydiff_rs::error::unexpected_message;
use keydiff_rs::filter::PathPattern;
use keydiff_rs::{
    compare_files, format_report, CompareConfig, ExtractOptions, FilterConfig, KeydiffError,
    OutputFormat, ParseError,
};
use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;
use tracing_subscriber::EnvFilter;

/// keydiff - find translation keys missing from localization files
///
/// Compares the nested keys of two JSON, YAML or TOML files and lists the
/// dotted key paths present in one file but not the other.
#[derive(Parser)]
#[command(name = "keydiff")]
#[command(version)]
#[command(about = "Find translation keys missing from localization files", long_about = None)]
struct Cli {
    /// Reference localization file (e.g. en.json)
    #[arg(value_name = "SOURCE")]
    source: PathBuf,

    /// Localization file to check against the source (e.g. fr.json)
    #[arg(value_name = "TARGET")]
    target: PathBuf,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value = "plain")]
    format: OutputFormatArg,

    /// Separator placed between nested key names
    #[arg(long, default_value = ".")]
    separator: String,

    /// Only compare leaf keys (skip keys whose value is a non-empty nested object)
    #[arg(long)]
    leaves_only: bool,

    /// Ignore keys matching a pattern (repeatable, supports * and **)
    #[arg(long, value_name = "PATTERN")]
    ignore: Vec<String>,

    /// Only compare keys matching a pattern (repeatable, supports * and **)
    #[arg(long, value_name = "PATTERN")]
    only: Vec<String>,

    /// Verbose output (log progress to stderr)
    #[arg(short, long)]
    verbose: bool,
}

/// Output format argument for clap
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
enum OutputFormatArg {
    /// Plain text (no colors)
    Plain,
    /// Colored terminal output
    Terminal,
    /// JSON representation
    Json,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Plain => OutputFormat::Plain,
            OutputFormatArg::Terminal => OutputFormat::Terminal,
            OutputFormatArg::Json => OutputFormat::Json,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(exit_code) => process::exit(exit_code),
        Err(err) => {
            println!("{}", user_message(&err));
            process::exit(2);
        }
    }
}

/// Installs the stderr log subscriber. `RUST_LOG` takes precedence over `--verbose`.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .without_time()
        .init();
}

fn run(cli: &Cli) -> Result<i32> {
    let config = build_config(cli)?;

    let report = compare_files(&cli.source, &cli.target, &config)?;

    let output_format: OutputFormat = cli.format.into();
    let output = format_report(&report, &output_format).map_err(KeydiffError::from)?;
    println!("{}", output);

    if report.comparison.is_empty() {
        Ok(0)
    } else {
        Ok(1)
    }
}

fn build_config(cli: &Cli) -> Result<CompareConfig, KeydiffError> {
    if cli.separator.is_empty() {
        return Err(KeydiffError::ConfigError {
            message: "separator must not be empty".to_string(),
        });
    }

    let patterns = |raw: &[String]| -> Vec<PathPattern> {
        raw.iter()
            .map(|p| PathPattern::parse_with_separator(p, &cli.separator))
            .collect()
    };

    Ok(CompareConfig {
        extract: ExtractOptions {
            separator: cli.separator.clone(),
            leaves_only: cli.leaves_only,
        },
        filter: FilterConfig {
            ignore_patterns: patterns(&cli.ignore),
            only_patterns: patterns(&cli.only),
        },
    })
}

/// Picks the message for a failed run based on the underlying error.
fn user_message(err: &anyhow::Error) -> String {
    if let Some(err) = err.downcast_ref::<KeydiffError>() {
        return err.user_message();
    }
    if let Some(err) = err.downcast_ref::<ParseError>() {
        return err.user_message();
    }
    unexpected_message(&format!("{:#}", err))
}

#[cfg(test)]
mod tests {
    use super::*;
    use keydiff_rs::OutputError;

    fn cli(args: &[&str]) -> Cli {
        Cli::parse_from(std::iter::once("keydiff").chain(args.iter().copied()))
    }

    #[test]
    fn test_output_format_conversion() {
        assert_eq!(OutputFormat::from(OutputFormatArg::Plain), OutputFormat::Plain);
        assert_eq!(
            OutputFormat::from(OutputFormatArg::Terminal),
            OutputFormat::Terminal
        );
        assert_eq!(OutputFormat::from(OutputFormatArg::Json), OutputFormat::Json);
    }

    #[test]
    fn test_build_config_rejects_empty_separator() {
        let cli = cli(&["en.json", "fr.json", "--separator", ""]);
        assert!(matches!(
            build_config(&cli),
            Err(KeydiffError::ConfigError { .. })
        ));
    }

    #[test]
    fn test_build_config_patterns_use_separator() {
        let cli = cli(&["en.json", "fr.json", "--separator", "/", "--ignore", "debug/**"]);
        let config = build_config(&cli).unwrap();
        assert_eq!(config.extract.separator, "/");
        assert!(config.filter.should_include(&["menu", "open"]));
        assert!(!config.filter.should_include(&["debug", "fps"]));
    }

    #[test]
    fn test_user_message_for_wrapped_parse_error() {
        let err: anyhow::Error = KeydiffError::from(ParseError::file_not_found("fr.json")).into();
        assert_eq!(
            user_message(&err),
            "Error: No such file or directory: fr.json. Please check the file paths."
        );
    }

    #[test]
    fn test_user_message_for_output_error() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: anyhow::Error =
            KeydiffError::from(OutputError::JsonSerializationError { source }).into();
        assert!(user_message(&err).starts_with("An unexpected error occurred: "));
    }

    #[test]
    fn test_user_message_for_other_errors() {
        let err = anyhow::anyhow!("disk on fire");
        assert_eq!(
            user_message(&err),
            "An unexpected error occurred: disk on fire"
        );
    }
}
