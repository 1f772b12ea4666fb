use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use palletplan::commands::{self, plan::PlanArgs};
use palletplan::config;
use palletplan::tui;

// Default Configuration Constants
/// Default log level when not specified
const DEFAULT_LOG_LEVEL: &str = "info";

/// Default log file path (no logging to file)
const DEFAULT_LOG_FILE: &str = "/dev/null";

#[derive(Parser)]
#[command(name = "palletplan", version)]
#[command(about = "Pallet load planner", long_about = "Pallet load planner\n\nWorks out how many pallets a shipment needs and how full they are.\nIf no command is specified, the program starts in interactive mode.")]
struct Cli {
    /// Set log level (trace, debug, info, warn, error)
    #[arg(short = 'L', long, global = true, default_value = DEFAULT_LOG_LEVEL)]
    log_level: String,

    /// Log file path (default: /dev/null for no logging)
    #[arg(short = 'F', long, global = true, default_value = DEFAULT_LOG_FILE)]
    log_file: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute a load plan for a shipment
    Plan {
        /// Total shipment weight in kg
        #[arg(short = 'w', long, allow_negative_numbers = true)]
        total_weight: Option<f64>,

        /// Maximum number of boxes on one pallet
        #[arg(short = 'b', long)]
        boxes_per_pallet: Option<u32>,

        /// Weight of a single box in kg
        #[arg(short = 'x', long, allow_negative_numbers = true)]
        weight_per_box: Option<f64>,

        /// Maximum load one pallet can carry in kg
        #[arg(short = 'c', long, allow_negative_numbers = true)]
        pallet_capacity: Option<f64>,

        /// Start from a standard pallet (see `presets`)
        #[arg(short, long)]
        preset: Option<String>,
    },
    /// List the built-in pallet presets
    Presets,
    /// Display weekly lane volumes (demo data)
    Lanes,
    /// Display current configuration
    Config,
}

fn init_logging(log_level: &str, log_file: &str) {
    let level = match log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };
    let file = match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file)
    {
        Ok(f) => f,
        Err(e) => {
            eprintln!("Failed to open log file {}: {}", log_file, e);
            return;
        }
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {}", e);
    }
}

/// Resolve log configuration from CLI args and config file
/// CLI arguments take precedence over config file
fn resolve_log_config<'a>(cli: &'a Cli, config: &'a config::Config) -> (&'a str, &'a str) {
    let log_level = if cli.log_level != DEFAULT_LOG_LEVEL {
        cli.log_level.as_str()
    } else {
        config.log_level.as_str()
    };

    let log_file = if cli.log_file != DEFAULT_LOG_FILE {
        cli.log_file.as_str()
    } else {
        config.log_file.as_str()
    };

    (log_level, log_file)
}

/// Execute a CLI command by routing it to the appropriate command handler
fn execute_command(config: &config::Config, command: Commands) -> anyhow::Result<()> {
    match command {
        Commands::Plan {
            total_weight,
            boxes_per_pallet,
            weight_per_box,
            pallet_capacity,
            preset,
        } => {
            let args = PlanArgs {
                total_weight,
                boxes_per_pallet,
                weight_per_box,
                pallet_capacity,
                preset,
            };
            commands::plan::run(args, config)
        }
        Commands::Presets => commands::presets::run(&config.display),
        Commands::Lanes => commands::lanes::run(&config.display),
        Commands::Config => {
            commands::config::run(config);
            Ok(())
        }
    }
}

#[tokio::main]
async fn main() {
    let config = config::read();
    let cli = Cli::parse();

    // Resolve and initialize logging
    let (log_level, log_file) = resolve_log_config(&cli, &config);
    if log_file != DEFAULT_LOG_FILE {
        init_logging(log_level, log_file);
    }

    // If no subcommand, run TUI
    let Some(command) = cli.command else {
        if let Err(e) = tui::run(config).await {
            eprintln!("Error running TUI: {}", e);
            std::process::exit(1);
        }
        return;
    };

    if let Err(e) = execute_command(&config, command) {
        eprintln!("Error: {:#}", e);
        tracing::error!("Command failed: {:#}", e);
        std::process::exit(1);
    }
}
