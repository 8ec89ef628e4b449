//! CLI implementation for doccheck
//!
//! This module provides the command-line interface for running the layout
//! checks and inspecting the effective configuration.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::PathBuf;
use tracing::debug;

use crate::error_reporter::utils as error_utils;
use doccheck_config::{CliArgs, Config};
use doccheck_layout::{LayoutChecker, LayoutOptions, emit_report_json};
use doccheck_utils::canonicalization::emit_jcs;
use doccheck_utils::error::DocCheckError;
use doccheck_utils::exit_codes::ExitCode;
use doccheck_utils::logging;

#[derive(Parser)]
#[command(name = "doccheck")]
#[command(about = "Validate the layout of a versioned, localized documentation tree")]
#[command(long_about = r#"
doccheck verifies that a documentation content tree laid out as
<root>/<version>/<locale>/doc/** matches the list of supported versions,
carries an English source for every version, and contains only Markdown
documentation files.

EXAMPLES:
  # Check the tree using .doccheck/config.toml (or package.json) for versions
  doccheck check

  # Check an explicit tree against an explicit version list
  doccheck check --content-root site/content --supported-version 3.4 --supported-version 3.5

  # Emit the report as canonical JSON for CI
  doccheck check --json

  # Treat warnings (e.g. extension_policy = "warn") as failures
  doccheck check --strict-exit

  # Show the effective configuration and where each value came from
  doccheck config

CONFIGURATION:
  Configuration is loaded with precedence: CLI flags > config file > defaults
  Config file is discovered by searching upward from CWD for .doccheck/config.toml
  Use --config to specify an explicit config file path

EXIT CODES:
  0  all checks passed
  1  internal error
  2  configuration or argument error
  3  layout violation
"#)]
#[command(version)]
pub struct Cli {
    /// Path to configuration file (overrides discovery)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory holding one subdirectory per version
    #[arg(long, global = true)]
    pub content_root: Option<PathBuf>,

    /// Supported version (repeat for each version; overrides the manifest)
    #[arg(long = "supported-version", global = true, value_name = "VERSION")]
    pub supported_versions: Vec<String>,

    /// JSON manifest holding the supported-version list
    #[arg(long, global = true)]
    pub manifest: Option<PathBuf>,

    /// Key in the manifest holding the supported-version array
    #[arg(long, global = true)]
    pub manifest_key: Option<String>,

    /// Locale every version must carry (exact, case-sensitive)
    #[arg(long, global = true)]
    pub source_locale: Option<String>,

    /// Name of the documentation directory inside each locale directory
    #[arg(long, global = true)]
    pub doc_dir: Option<String>,

    /// What to do with non-Markdown files: enforce or warn
    #[arg(long, global = true, value_name = "POLICY")]
    pub extension_policy: Option<String>,

    /// Enable verbose logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the layout checks against the content tree
    ///
    /// EXAMPLES:
    ///   doccheck check
    ///   doccheck check --json
    ///   doccheck check --strict-exit  # Treat warnings as failures
    Check {
        /// Output the report as canonical JSON
        #[arg(long)]
        json: bool,

        /// Treat warnings as failures (exit non-zero on any warn or fail)
        #[arg(long)]
        strict_exit: bool,
    },

    /// Show the effective configuration with the source of each value
    Config {
        /// Output the configuration as canonical JSON
        #[arg(long)]
        json: bool,
    },
}

impl Cli {
    fn cli_args(&self) -> CliArgs {
        CliArgs {
            config_path: self.config.clone(),
            content_root: self.content_root.clone(),
            supported_versions: self.supported_versions.clone(),
            manifest: self.manifest.clone(),
            manifest_key: self.manifest_key.clone(),
            source_locale: self.source_locale.clone(),
            doc_dir: self.doc_dir.clone(),
            extension_policy: self.extension_policy.clone(),
            verbose: self.verbose.then_some(true),
        }
    }
}

/// Run the CLI, handling all output including errors.
///
/// Returns the exit code to use when it is not success; `main` only maps it
/// to the process exit status.
pub fn run() -> Result<(), ExitCode> {
    let cli = Cli::parse();

    if let Err(e) = logging::init_tracing(cli.verbose) {
        eprintln!("✗ Failed to initialize logging: {e}");
        return Err(ExitCode::INTERNAL);
    }

    let cli_args = cli.cli_args();

    // Discover and load configuration
    let config = match Config::discover(&cli_args) {
        Ok(config) => config,
        Err(err) => {
            let contextual_report = error_utils::create_contextual_report(&err, "config");
            eprintln!("{contextual_report}");
            return Err(err.to_exit_code());
        }
    };
    debug!(
        config_path = ?config.config_path,
        content_root = %config.content_root().display(),
        "Configuration loaded"
    );

    let operation = match &cli.command {
        Commands::Check { .. } => "check",
        Commands::Config { .. } => "config",
    };

    let result = match cli.command {
        Commands::Check { json, strict_exit } => execute_check_command(json, strict_exit, &config),
        Commands::Config { json } => execute_config_command(json, &config).map(|()| ExitCode::SUCCESS),
    };

    match result {
        Ok(code) if code == ExitCode::SUCCESS => Ok(()),
        Ok(code) => Err(code),
        Err(error) => {
            let (report, code) = command_error_report(&error, operation);
            eprintln!("{report}");
            Err(code)
        }
    }
}

/// Render a failed command for stderr and pick its exit code.
fn command_error_report(error: &anyhow::Error, operation: &str) -> (String, ExitCode) {
    if let Some(doccheck_error) = error.downcast_ref::<DocCheckError>() {
        let report = error_utils::create_contextual_report(doccheck_error, operation);
        return (report, doccheck_error.to_exit_code());
    }

    let report = format!(
        "✗ Unexpected error: {error:#}\n\n  General troubleshooting:\n    \
         - Run with --verbose for more detailed output\n    \
         - Run `doccheck config` to inspect the resolved paths"
    );
    (report, ExitCode::INTERNAL)
}

fn render_failed(error: anyhow::Error) -> DocCheckError {
    DocCheckError::Serialization {
        reason: format!("{error:#}"),
    }
}

/// Execute the check command
fn execute_check_command(json: bool, strict_exit: bool, config: &Config) -> Result<ExitCode> {
    let options = LayoutOptions::from_config(config).map_err(DocCheckError::from)?;
    let report = LayoutChecker::new(options).run_strict(strict_exit);

    if json {
        // Emit as canonical JSON (JCS) for stable diffs
        let json_output = emit_report_json(&report).map_err(render_failed)?;
        println!("{json_output}");
    } else {
        logging::log_layout_report(&report);

        if !report.ok {
            println!();
            if strict_exit {
                println!("Some checks failed or warned (strict mode). Please address the issues above.");
            } else {
                println!("Some checks failed. Please address the issues above.");
            }
        }
    }

    Ok(ExitCode::for_report(&report))
}

/// One configuration value and where it came from
#[derive(Debug, Serialize)]
struct ConfigValue {
    value: String,
    source: String,
}

/// `doccheck config --json` output
#[derive(Debug, Serialize)]
struct ConfigOutput {
    schema_version: String,
    config_path: Option<String>,
    project_root: String,
    values: BTreeMap<String, ConfigValue>,
}

/// Execute the config command
fn execute_config_command(json: bool, config: &Config) -> Result<()> {
    let effective_config = config.effective_config();

    if json {
        let output = ConfigOutput {
            schema_version: "1".to_string(),
            config_path: config.config_path.as_ref().map(|p| p.display().to_string()),
            project_root: config.project_root.display().to_string(),
            values: effective_config
                .into_iter()
                .map(|(key, (value, source))| (key, ConfigValue { value, source }))
                .collect(),
        };
        let json_output = emit_jcs(&output)
            .context("Failed to emit config JSON")
            .map_err(render_failed)?;
        println!("{json_output}");
        return Ok(());
    }

    match &config.config_path {
        Some(path) => println!("Config file: {}", path.display()),
        None => println!("Config file: (none, using defaults)"),
    }
    println!("Project root: {}", config.project_root.display());

    println!("\n  Effective configuration:");
    for (key, (value, source)) in effective_config {
        println!("    {key} = {value} (from {source})");
    }

    Ok(())
}
