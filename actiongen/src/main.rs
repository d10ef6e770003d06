//! Test-actor action generator.
//!
//! Reads `actiongen.toml` and the module manifest it references, then writes a
//! trait exposing every module action. The file is rewritten only when its
//! stamped fingerprint no longer matches the configured modules.

use std::path::{Path, PathBuf};

use actiongen::build::{self, Freshness, Project};
use actiongen::core::classifier::classify;
use actiongen::exit_codes;
use actiongen::logging;
use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "actiongen",
    version,
    about = "Generate test-actor action traits from module manifests"
)]
struct Cli {
    /// Generator config file.
    #[arg(short, long, global = true, default_value = "actiongen.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Regenerate the actions file if its fingerprint is stale.
    Build {
        /// Rewrite even when the stored fingerprint matches.
        #[arg(short, long)]
        force: bool,
    },
    /// Exit with a non-zero code if the actions file needs regeneration.
    Check,
    /// Print the current fingerprint.
    Fingerprint,
    /// List registered actions with their owning module and step kinds.
    Actions,
}

fn main() {
    logging::init();
    match run() {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("{:#}", err);
            std::process::exit(exit_codes::INVALID);
        }
    }
}

fn run() -> Result<i32> {
    let cli = Cli::parse();
    match cli.command {
        Command::Build { force } => cmd_build(&cli.config, force),
        Command::Check => cmd_check(&cli.config),
        Command::Fingerprint => cmd_fingerprint(&cli.config),
        Command::Actions => cmd_actions(&cli.config),
    }
}

fn cmd_build(config: &Path, force: bool) -> Result<i32> {
    let outcome = build::build(config, force)?;
    match outcome.methods {
        Some(methods) => println!(
            "build: wrote {} methods={} fingerprint={}",
            outcome.output_path.display(),
            methods,
            outcome.fingerprint
        ),
        None => println!(
            "build: up to date {} fingerprint={}",
            outcome.output_path.display(),
            outcome.fingerprint
        ),
    }
    Ok(exit_codes::OK)
}

fn cmd_check(config: &Path) -> Result<i32> {
    let outcome = build::check(config)?;
    match outcome.freshness {
        Freshness::UpToDate => {
            println!("check: up to date {}", outcome.output_path.display());
            Ok(exit_codes::OK)
        }
        Freshness::Stale { stored } => {
            println!(
                "check: stale {} stored={} current={}",
                outcome.output_path.display(),
                stored.as_deref().unwrap_or("none"),
                outcome.fingerprint
            );
            Ok(exit_codes::STALE)
        }
    }
}

fn cmd_fingerprint(config: &Path) -> Result<i32> {
    let project = Project::load(config)?;
    println!("{}", project.generator()?.fingerprint());
    Ok(exit_codes::OK)
}

fn cmd_actions(config: &Path) -> Result<i32> {
    let project = Project::load(config)?;
    let generator = project.generator()?;
    for (action, module) in generator.actions().iter() {
        let kinds = classify(action)
            .iter()
            .map(|target| format!("{}:{}", target.kind, target.name))
            .collect::<Vec<_>>()
            .join(",");
        println!("{}\t{}\t{}", action, module, kinds);
    }
    Ok(exit_codes::OK)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_build() {
        let cli = Cli::parse_from(["actiongen", "build"]);
        assert!(matches!(cli.command, Command::Build { force: false }));
        assert_eq!(cli.config, PathBuf::from("actiongen.toml"));
    }

    #[test]
    fn parse_build_force_with_config() {
        let cli = Cli::parse_from(["actiongen", "build", "--force", "--config", "suite.toml"]);
        assert!(matches!(cli.command, Command::Build { force: true }));
        assert_eq!(cli.config, PathBuf::from("suite.toml"));
    }

    #[test]
    fn parse_check() {
        let cli = Cli::parse_from(["actiongen", "-c", "suite.toml", "check"]);
        assert!(matches!(cli.command, Command::Check));
        assert_eq!(cli.config, PathBuf::from("suite.toml"));
    }
}
