//! arcui-tokens - regenerate the ARC UI token stylesheet
//!
//! Usage: arcui-tokens [generate|check|print] [--config PATH] [--root DIR]

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use arcui_tokens::{
    GeneratorConfig, Stylesheet, TargetState, check_targets, dangling_references, write_targets,
};

#[derive(Parser)]
#[command(name = "arcui-tokens")]
#[command(about = "Generate the ARC UI design-token stylesheet")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    #[command(flatten)]
    location: Location,
}

#[derive(Subcommand)]
enum Command {
    /// Render the stylesheet and write it to every configured target
    Generate {
        #[command(flatten)]
        location: Location,
    },

    /// Fail if any target differs from freshly generated output
    Check {
        #[command(flatten)]
        location: Location,
    },

    /// Write the stylesheet to stdout
    Print {
        #[command(flatten)]
        location: Location,
    },
}

#[derive(Args, Clone, Default)]
struct Location {
    /// Generator config (defaults to <root>/arcui-tokens.toml when present)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Directory that target and token-file paths are relative to
    #[arg(long)]
    root: Option<PathBuf>,
}

impl Location {
    fn or(self, fallback: Location) -> Location {
        Location {
            config: self.config.or(fallback.config),
            root: self.root.or(fallback.root),
        }
    }
}

struct Run {
    config: GeneratorConfig,
    root: PathBuf,
    css: String,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "arcui_tokens=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    match cli.command {
        None => generate(cli.location),
        Some(Command::Generate { location }) => generate(location.or(cli.location)),
        Some(Command::Check { location }) => check(location.or(cli.location)),
        Some(Command::Print { location }) => print(location.or(cli.location)),
    }
}

fn generate(location: Location) -> Result<()> {
    let run = prepare(location)?;
    let reports = write_targets(&run.css, &run.config.targets, &run.root)
        .context("failed to write token stylesheet")?;
    tracing::info!(targets = reports.len(), "token stylesheet generated");
    Ok(())
}

fn check(location: Location) -> Result<()> {
    let run = prepare(location)?;
    let statuses = check_targets(&run.css, &run.config.targets, &run.root)?;
    let outdated: Vec<_> = statuses
        .iter()
        .filter(|status| status.state != TargetState::UpToDate)
        .map(|status| format!("{} ({})", status.path.display(), status.state.as_str()))
        .collect();
    if !outdated.is_empty() {
        bail!(
            "token stylesheet out of date, run `arcui-tokens generate`: {}",
            outdated.join(", ")
        );
    }
    tracing::info!(targets = statuses.len(), "token stylesheet up to date");
    Ok(())
}

fn print(location: Location) -> Result<()> {
    let run = prepare(location)?;
    print!("{}", run.css);
    Ok(())
}

fn prepare(location: Location) -> Result<Run> {
    let (config, root) =
        GeneratorConfig::discover(location.config.as_deref(), location.root.as_deref())
            .context("failed to load generator config")?;
    let load = config
        .catalog(&root)
        .context("failed to load token sources")?;
    if !load.unmapped.is_empty() {
        tracing::warn!(
            count = load.unmapped.len(),
            "token files contain keys without a css variable"
        );
    }

    let sheet = Stylesheet::assemble(&load.catalog);
    for dangling in dangling_references(&sheet) {
        tracing::warn!("{dangling}");
    }

    Ok(Run {
        config,
        root,
        css: sheet.to_css(),
    })
}
