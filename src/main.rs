use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::layer::SubscriberExt as _;
use tracing_subscriber::util::SubscriberInitExt as _;
use tracing_subscriber::{fmt, EnvFilter};

use coggnify::cli::{
    handle_code_command, handle_dashboard_command, handle_export_command, handle_history_command,
    handle_horse_command, handle_owner_command, handle_reset_command, handle_status_command,
};
use coggnify::config::paths::DATA_DIR_ENV;
use coggnify::config::{paths::CoggnifyPaths, settings::Settings};
use coggnify::storage::Storage;

/// Environment variable holding the tracing filter
const LOG_ENV: &str = "COGGNIFY_LOG";

#[derive(Parser)]
#[command(
    name = "coggnify",
    version,
    about = "Horse owner registration wizard",
    long_about = "Coggnify X registers a horse owner from their driver's license, \
                  records their horses, and shows a rolling verification code."
)]
struct Cli {
    /// Base directory for settings, records and logs
    #[arg(long, global = true, env = DATA_DIR_ENV)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive wizard
    #[command(alias = "ui")]
    Tui,

    /// Owner account commands
    #[command(subcommand)]
    Owner(coggnify::cli::OwnerCommands),

    /// Horse registration commands
    #[command(subcommand)]
    Horse(coggnify::cli::HorseCommands),

    /// Print the current verification code
    Code,

    /// Print the owner dashboard
    Dashboard,

    /// Show which step the wizard resumes on
    Status,

    /// Export data
    #[command(subcommand)]
    Export(coggnify::cli::ExportCommands),

    /// Show recent changes from the audit log
    History {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Delete the stored owner and horses
    Reset {
        /// Skip the confirmation
        #[arg(short, long)]
        yes: bool,
    },

    /// Show current configuration and paths
    Config {
        /// Write the settings file with defaults if it does not exist
        #[arg(long)]
        init: bool,
    },
}

/// Send tracing output to the log file so it never draws over the TUI
fn init_logging(paths: &CoggnifyPaths, settings: &Settings) -> Result<()> {
    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(paths.log_file())?;

    let env_filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(&settings.log_level));

    let file_layer = fmt::layer()
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_ansi(false)
        .with_writer(Mutex::new(log_file));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .init();

    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = match cli.data_dir {
        Some(dir) => CoggnifyPaths::with_base_dir(dir),
        None => CoggnifyPaths::new()?,
    };
    paths.ensure_directories()?;
    let settings = Settings::load_or_create(&paths)?;

    init_logging(&paths, &settings)?;
    info!(base_dir = %paths.base_dir().display(), "Coggnify starting");

    // Initialize storage; a malformed record stops here
    let mut storage = Storage::new(paths.clone())?;
    storage.load_all()?;

    match cli.command {
        None | Some(Commands::Tui) => {
            coggnify::tui::run_tui(&storage, &settings, &paths)?;
        }
        Some(Commands::Owner(cmd)) => {
            handle_owner_command(&storage, cmd)?;
        }
        Some(Commands::Horse(cmd)) => {
            handle_horse_command(&storage, cmd)?;
        }
        Some(Commands::Code) => {
            handle_code_command()?;
        }
        Some(Commands::Dashboard) => {
            handle_dashboard_command(&storage)?;
        }
        Some(Commands::Status) => {
            handle_status_command(&storage, &settings)?;
        }
        Some(Commands::Export(cmd)) => {
            handle_export_command(&storage, cmd)?;
        }
        Some(Commands::History { limit }) => {
            handle_history_command(&storage, limit)?;
        }
        Some(Commands::Reset { yes }) => {
            handle_reset_command(&storage, yes)?;
        }
        Some(Commands::Config { init }) => {
            if init && !paths.settings_file().exists() {
                settings.save(&paths)?;
                println!("Wrote default settings to {}", paths.settings_file().display());
                println!();
            }

            println!("Coggnify Configuration");
            println!("======================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Data directory: {}", paths.data_dir().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!("Audit log:      {}", paths.audit_log().display());
            println!("Log file:       {}", paths.log_file().display());
            println!();
            println!("Settings:");
            println!("  Camera facing:    {}", settings.camera.facing);
            println!(
                "  Camera source:    {}",
                settings
                    .camera
                    .source
                    .as_ref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|| "none".to_string())
            );
            println!("  Processing delay: {} ms", settings.processing_delay_ms);
            println!("  Log level:        {}", settings.log_level);
        }
    }

    Ok(())
}
