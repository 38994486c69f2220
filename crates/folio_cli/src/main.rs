//! Folio CLI
//!
//! `folio init` writes a default folio.toml, `folio simulate` runs a scripted
//! visitor session against the state core, `folio catalog` lists the
//! achievements.

mod config;
mod session;

use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use folio_achievements::{AchievementCategory, AchievementId};
use folio_app::FolioApp;
use folio_theme::StaticMedia;
use tracing_subscriber::EnvFilter;

use crate::config::{FolioConfig, CONFIG_FILE};
use crate::session::SessionPlan;

#[derive(Parser)]
#[command(name = "folio", version, about = "Folio site state core")]
struct Cli {
    /// Path to folio.toml (or a directory containing it)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Write a default folio.toml
    Init {
        /// Directory to write into
        #[arg(default_value = ".")]
        path: PathBuf,
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
    /// Run a scripted visitor session and print the final state
    Simulate {
        /// Blog posts to read
        #[arg(long, default_value_t = 5)]
        reads: u32,
        /// Milliseconds between page views
        #[arg(long, default_value_t = 250)]
        interval_ms: u64,
        /// Click the first achievement toast
        #[arg(long)]
        click: bool,
        /// Open the customization modal first
        #[arg(long)]
        customize: bool,
        /// Device prefers a light color scheme
        #[arg(long)]
        light: bool,
        /// Device prefers reduced motion
        #[arg(long)]
        reduced_motion: bool,
    },
    /// List every achievement by category
    Catalog,
}

fn init_logging(config: &FolioConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log.level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = FolioConfig::load_or_default(cli.config.as_deref())?;
    init_logging(&config);

    match cli.command {
        Command::Init { path, force } => init(&path, force),
        Command::Simulate {
            reads,
            interval_ms,
            click,
            customize,
            light,
            reduced_motion,
        } => {
            let plan = SessionPlan {
                reads,
                read_interval: Duration::from_millis(interval_ms),
                click_achievement: click,
                customize,
            };
            let media = StaticMedia {
                dark: !light,
                reduced_motion,
            };
            simulate(&config, &media, &plan)
        }
        Command::Catalog => {
            catalog();
            Ok(())
        }
    }
}

fn init(path: &std::path::Path, force: bool) -> Result<()> {
    fs::create_dir_all(path).with_context(|| format!("Failed to create {}", path.display()))?;
    let target = path.join(CONFIG_FILE);
    if target.exists() && !force {
        anyhow::bail!("{} already exists (use --force to overwrite)", target.display());
    }
    fs::write(&target, FolioConfig::default().to_toml()?)
        .with_context(|| format!("Failed to write {}", target.display()))?;
    tracing::info!("wrote {}", target.display());
    Ok(())
}

fn simulate(config: &FolioConfig, media: &StaticMedia, plan: &SessionPlan) -> Result<()> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
        .context("Failed to start runtime")?;

    let mut app = FolioApp::new(config.app_settings());
    runtime.block_on(session::run(&mut app, media, plan))?;
    println!("{}", session::snapshot(&app)?);
    Ok(())
}

fn catalog() {
    for category in AchievementCategory::ALL {
        println!("{}", category.title());
        for id in AchievementId::in_category(category) {
            let content = id.content();
            println!("  {:<14} {}", content.title, content.description);
        }
    }
}
