//! SilverDesk - SilverTech Industrial Services desktop experience
//!
//! Entry point. Handles:
//! 1. CLI argument parsing (--config, --check-config)
//! 2. Loading silverdesk.toml (explicit path, per-user path, or defaults)
//! 3. Launching the GTK4/Libadwaita window

use anyhow::Result;
use clap::Parser;
use silverdesk::config::DeskConfig;
use silverdesk::ui;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// SilverDesk - SilverTech Industrial Services desktop front-end
#[derive(Parser, Debug)]
#[command(name = "silverdesk")]
#[command(about = "Desktop front-end for the SilverTech marketing experience")]
#[command(version)]
struct Args {
    /// Path to a silverdesk.toml configuration file
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Validate the configuration and exit without opening a window
    #[arg(long)]
    check_config: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let _ = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .without_time()
        .try_init();

    info!("SilverDesk v{}", env!("CARGO_PKG_VERSION"));

    let config = load_config(&args)?;

    if args.check_config {
        println!("Configuration OK: {}", config.branding.title);
        return Ok(());
    }

    run_gui(config)
}

/// Resolve configuration: explicit --config path, then the per-user
/// file, then built-in defaults.
fn load_config(args: &Args) -> Result<DeskConfig> {
    if let Some(ref path) = args.config {
        info!("Loading configuration from {:?}", path);
        return DeskConfig::from_file(path);
    }

    if let Some(path) = DeskConfig::user_config_path() {
        if path.exists() {
            info!("Loading configuration from {:?}", path);
            return DeskConfig::from_file(&path);
        }
    }

    info!("No configuration file found, using defaults");
    Ok(DeskConfig::default())
}

fn run_gui(config: DeskConfig) -> Result<()> {
    // Check for display availability before initializing GTK so remote
    // shells get a helpful message instead of a panic
    if std::env::var("DISPLAY").is_err() && std::env::var("WAYLAND_DISPLAY").is_err() {
        eprintln!("Error: No display server detected (X11 or Wayland).");
        eprintln!();
        eprintln!("SilverDesk needs a desktop session to run. If you only want");
        eprintln!("to verify a configuration file, use:");
        eprintln!("  silverdesk --check-config --config <FILE>");
        std::process::exit(1);
    }

    if let Err(e) = gtk::init() {
        eprintln!("Failed to initialize GTK4: {}", e);
        eprintln!("Please ensure GTK4 is installed on your system.");
        std::process::exit(1);
    }

    if let Err(e) = adw::init() {
        eprintln!("Failed to initialize Libadwaita: {}", e);
        eprintln!("Please ensure Libadwaita is installed on your system.");
        std::process::exit(1);
    }

    let app = ui::app::DeskApplication::new(config);
    let exit_code = app.run();

    std::process::exit(exit_code.into())
}
