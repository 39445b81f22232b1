use std::fs::{self, File};
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use pageable_core::{AppConfig, Orientation, SlideshowConfig};

mod commands;

#[derive(Parser)]
#[command(name = "pageable")]
#[command(author, version, about = "Full-screen pages you can swipe, scroll and key through")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Use this config file instead of ~/.config/pageable/config.toml
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Present a markdown deck in the terminal
    Run {
        /// Markdown file; each `# Heading` starts a page
        deck: PathBuf,
        #[command(flatten)]
        pager: PagerArgs,
        /// Page to open on (anchor, with or without `#`)
        #[arg(short, long)]
        page: Option<String>,
    },
    /// Replay navigation steps headlessly and print events as JSON lines
    Trace {
        deck: PathBuf,
        /// Steps: next, prev, first, last, <page>, #anchor, wheel:<dy>,
        /// swipe:<px>, key:<name>, wait:<ms>, orient:<axis>, infinite:<on|off>
        steps: Vec<String>,
        #[command(flatten)]
        pager: PagerArgs,
        /// Viewport width in pixels
        #[arg(long, default_value_t = 1280.0)]
        width: f64,
        /// Viewport height in pixels
        #[arg(long, default_value_t = 800.0)]
        height: f64,
        /// Simulated frame interval
        #[arg(long, default_value_t = 16)]
        frame_ms: u64,
    },
    /// List the pages discovered in a deck
    Pages {
        deck: PathBuf,
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Show or initialise the configuration
    Config {
        /// Print the config file location
        #[arg(long)]
        path: bool,
        /// Write the default config if none exists
        #[arg(long)]
        init: bool,
    },
}

/// Pager options that override the config file
#[derive(Args, Debug, Default)]
struct PagerArgs {
    /// Page sideways instead of up and down
    #[arg(long)]
    horizontal: bool,
    /// Wrap from the last page to the first and back
    #[arg(long)]
    infinite: bool,
    /// Let pages follow the pointer while dragging
    #[arg(long)]
    free_scroll: bool,
    /// Advance automatically every N milliseconds
    #[arg(long, value_name = "MS")]
    slideshow: Option<u64>,
    /// Transition duration in milliseconds
    #[arg(long, value_name = "MS")]
    animation: Option<u64>,
}

impl PagerArgs {
    fn apply(&self, config: &mut AppConfig) {
        let pager = &mut config.pager;
        if self.horizontal {
            pager.orientation = Orientation::Horizontal;
        }
        if self.infinite {
            pager.infinite = true;
        }
        if self.free_scroll {
            pager.free_scroll = true;
        }
        if let Some(interval_ms) = self.slideshow {
            pager.slideshow = Some(SlideshowConfig {
                interval_ms,
                ..pager.slideshow.clone().unwrap_or_default()
            });
        }
        if let Some(animation_ms) = self.animation {
            pager.animation_ms = animation_ms;
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => AppConfig::load_from(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => AppConfig::load()?,
    };

    // the TUI owns the terminal, so it logs to a file
    let log_to_file = matches!(cli.command, Commands::Run { .. });
    init_logging(&config, log_to_file)?;

    match cli.command {
        Commands::Run { deck, pager, page } => {
            pager.apply(&mut config);
            config.pager.validate()?;
            commands::run::run(config, &deck, page)
        }
        Commands::Trace {
            deck,
            steps,
            pager,
            width,
            height,
            frame_ms,
        } => {
            pager.apply(&mut config);
            config.pager.validate()?;
            commands::trace::run(config, &deck, &steps, width, height, frame_ms)
        }
        Commands::Pages { deck, json } => commands::pages::run(&deck, json),
        Commands::Config { path, init } => commands::config::run(&config, path, init),
    }
}

fn init_logging(config: &AppConfig, to_file: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.general.log_level));

    if to_file {
        let log_path = config.log_path();
        if let Some(parent) = log_path.parent() {
            fs::create_dir_all(parent)?;
        }
        let file = File::create(&log_path)
            .with_context(|| format!("Failed to create log file {}", log_path.display()))?;

        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_ansi(false)
                    .with_writer(Mutex::new(file)),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_writer(io::stderr),
            )
            .init();
    }

    Ok(())
}
