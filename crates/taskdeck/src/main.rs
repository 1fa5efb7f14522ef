//! CLI entry point for taskdeck.

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use taskdeck_app::{Route, SnapshotFile, ViewConfig};
use taskdeck_core::encode_slug;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt::format::FmtSpan};

mod render;

/// Dashboard, project and task views over an exported task snapshot.
#[derive(Parser, Debug)]
#[command(
    name = "taskdeck",
    version,
    about = "taskdeck: derived task and project views over a JSON snapshot"
)]
struct Cli {
    /// Snapshot file with `tasks` and `projects` arrays.
    #[arg(long, default_value = "taskdeck.json")]
    data: PathBuf,

    /// Directory containing `.taskdeck/config.toml` (defaults to current).
    #[arg(long)]
    workdir: Option<PathBuf>,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show stats, the project preview and recent tasks.
    Dashboard,

    /// Show one project by its URL slug.
    Project {
        slug: String,
        #[arg(short, long, default_value = "")]
        search: String,
    },

    /// List every task.
    Tasks {
        #[arg(short, long, default_value = "")]
        search: String,
    },

    /// Render whatever view a route path points at.
    Open {
        path: String,
        #[arg(short, long, default_value = "")]
        search: String,
    },

    /// Print the URL slug of a project name.
    Slug { name: String },
}

fn main() -> Result<()> {
    let Cli { data, workdir, cmd } = Cli::parse();

    if should_install_tracing(&cmd) {
        install_tracing();
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    execute_command(data, workdir, cmd, &mut out)?;
    out.flush()?;
    Ok(())
}

fn execute_command(data: PathBuf, workdir: Option<PathBuf>, command: Command, out: &mut impl Write) -> Result<()> {
    let (route, search) = match command {
        Command::Slug { name } => {
            writeln!(out, "{}", encode_slug(&name))?;
            return Ok(());
        }
        Command::Dashboard => (Route::Dashboard, String::new()),
        Command::Project { slug, search } => (Route::project(slug), search),
        Command::Tasks { search } => (Route::Tasks, search),
        Command::Open { path, search } => (Route::parse(&path), search),
    };

    let workdir = workdir.unwrap_or_else(|| PathBuf::from("."));
    let config = ViewConfig::from_workdir(&workdir)?;
    let source = SnapshotFile::new(data);
    info!(route = %route, data = %source.path().display(), "rendering view");

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("failed to start runtime")?;
    runtime.block_on(render::render_route(&source, &route, &search, &config, out))
}

const fn should_install_tracing(cmd: &Command) -> bool {
    !matches!(cmd, Command::Slug { .. })
}

fn install_tracing() {
    // RUST_LOG overrides the INFO default.
    let filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .with_span_events(FmtSpan::NONE)
        .compact()
        .try_init();
}
