//! checkcites-build CLI - packaging helper for checkcites
//!
//! Usage: checkcites-build <COMMAND>
//!
//! Commands:
//!   check     Check that external commands are available
//!   exec      Run a command in a directory
//!   script    Write the launcher script
//!   man-page  Write the man page
//!   package   Run the whole packaging step

mod ui;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Result;
use checkcites_build::config::{self, Config, ConfigWarning, DEFAULT_CONFIG_FILE};
use checkcites_build::package::{self, content_digest, PackageReport};
use checkcites_build::{
    assert_availability_with, create_man_page, create_script, execute, logging, CommandLine,
    LAUNCHER_SCRIPT, MAN_PAGE_PLACEHOLDER,
};
use clap::{Parser, Subcommand};
use serde_json::json;

/// checkcites-build - packaging helper for checkcites
#[derive(Parser, Debug)]
#[command(name = "checkcites-build")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Output format for CI (one JSON event per line)
    #[arg(long, global = true)]
    json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Check that external commands are available in the system path
    Check {
        /// Commands to check
        #[arg(required = true)]
        commands: Vec<String>,

        /// Argument passed to every checked command (repeatable)
        #[arg(long = "probe-arg", allow_hyphen_values = true)]
        probe_args: Vec<String>,
    },

    /// Run a command in a directory, failing on a non-zero exit
    Exec {
        /// Working directory
        #[arg(short, long, default_value = ".")]
        dir: PathBuf,

        /// Program and arguments, after `--`
        #[arg(last = true, required = true)]
        call: Vec<String>,
    },

    /// Write the launcher script
    Script {
        /// Destination file
        path: PathBuf,
    },

    /// Write the man page
    ManPage {
        /// Destination file
        path: PathBuf,

        /// Version of the packaged tool
        #[arg(long)]
        version: String,
    },

    /// Check tools and generate every artifact into the output directory
    Package {
        /// Path to packaging.toml
        #[arg(short, long, default_value = DEFAULT_CONFIG_FILE)]
        config: PathBuf,

        /// Output directory (overrides config and environment)
        #[arg(long)]
        out_dir: Option<PathBuf>,

        /// Version of the packaged tool (overrides config and environment)
        #[arg(long)]
        version: Option<String>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::setup(cli.verbose);

    let json = cli.json;
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            ui::error::print_error(&err, json);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Check {
            commands,
            probe_args,
        } => cmd_check(&commands, &probe_args, cli.json),
        Commands::Exec { dir, call } => cmd_exec(&dir, call, cli.json),
        Commands::Script { path } => cmd_script(&path, cli.json),
        Commands::ManPage { path, version } => cmd_man_page(&path, &version, cli.json),
        Commands::Package {
            config,
            out_dir,
            version,
        } => cmd_package(&config, out_dir, version, cli.json),
    }
}

fn cmd_check(commands: &[String], probe_args: &[String], json: bool) -> Result<()> {
    let commands: Vec<&str> = commands.iter().map(String::as_str).collect();
    let probe_args: Vec<&str> = probe_args.iter().map(String::as_str).collect();

    assert_availability_with(&commands, &probe_args)?;

    if json {
        ui::json::emit(&json!({
            "event": "check",
            "status": "success",
            "commands": commands,
        }))?;
    } else {
        for command in &commands {
            println!("✓ {} is available", command);
        }
    }
    Ok(())
}

fn cmd_exec(dir: &Path, call: Vec<String>, json: bool) -> Result<()> {
    let call = CommandLine::try_from(call)?;

    execute(dir, &call)?;

    if json {
        ui::json::emit(&json!({
            "event": "exec",
            "status": "success",
            "command": call.to_vec(),
            "directory": dir.display().to_string(),
        }))?;
    } else {
        println!("✓ {} (in {})", call, dir.display());
    }
    Ok(())
}

fn cmd_script(path: &Path, json: bool) -> Result<()> {
    create_script(path)?;
    report_artifact("script", path, LAUNCHER_SCRIPT, json)
}

fn cmd_man_page(path: &Path, version: &str, json: bool) -> Result<()> {
    create_man_page(path, version)?;
    report_artifact("man-page", path, MAN_PAGE_PLACEHOLDER, json)
}

fn report_artifact(event: &str, path: &Path, content: &str, json: bool) -> Result<()> {
    let digest = content_digest(content);
    if json {
        ui::json::emit(&json!({
            "event": event,
            "status": "success",
            "path": path.display().to_string(),
            "sha256": digest,
        }))?;
    } else {
        println!("✓ Wrote {} ({})", path.display(), digest);
    }
    Ok(())
}

fn cmd_package(
    config_path: &Path,
    out_dir: Option<PathBuf>,
    version: Option<String>,
    json: bool,
) -> Result<()> {
    let (config, warnings) = resolve_config(config_path, out_dir, version)?;
    report_config_warnings(&warnings, json);

    if !json {
        println!("📦 Packaging {} {}", config.package.name, config.package.version);
        println!("Output: {}", config.output_dir().display());
    }

    let report = package::run(&config)?;

    if json {
        ui::json::emit(&json!({
            "event": "package",
            "status": "success",
            "report": serde_json::to_value(&report)?,
        }))?;
    } else {
        print_report(&report);
    }
    Ok(())
}

fn resolve_config(
    config_path: &Path,
    out_dir: Option<PathBuf>,
    version: Option<String>,
) -> Result<(Config, Vec<ConfigWarning>)> {
    let (mut config, warnings) = config::load_or_default_with_warnings(config_path)?;
    if let Some(dir) = out_dir {
        config.output.dir = dir;
    }
    if let Some(version) = version {
        config.package.version = version;
    }
    Ok((config, warnings))
}

fn report_config_warnings(warnings: &[ConfigWarning], json: bool) {
    let annotate = !json && ui::ci::is_github_actions();
    for warning in warnings {
        config::log_warning(warning);
        if annotate {
            println!("{}", config_warning_annotation(warning));
        }
    }
}

fn config_warning_annotation(warning: &ConfigWarning) -> String {
    let mut message = format!("unknown config key '{}'", warning.key);
    if let Some(suggestion) = &warning.suggestion {
        message.push_str(&format!(" (did you mean '{}'?)", suggestion));
    }
    let file = warning.file.to_string_lossy();
    ui::ci::github_actions_annotation(
        ui::ci::AnnotationLevel::Warning,
        &message,
        Some(&file),
        warning.line,
        Some("checkcites-build"),
    )
}

fn print_report(report: &PackageReport) {
    if !report.checked_tools.is_empty() {
        println!("\n✓ Tools available: {}", report.checked_tools.join(", "));
    }
    println!("\n📊 Artifacts:");
    for artifact in &report.artifacts {
        println!("  ✓ {}: {}", artifact.kind, artifact.path.display());
        println!("    {}", artifact.sha256);
    }
    println!();
}
