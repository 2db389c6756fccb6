use clap::Parser;
use gabble::core::config::{self, CliOverrides, GabbleConfig};
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "gabble", about = "Terminal chat room with an echo responder")]
struct Args {
    /// Config file to use instead of ~/.gabble/config.toml
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Where to write the log file
    #[arg(long, default_value = "gabble.log")]
    log_file: PathBuf,

    /// Log at debug level (also enabled by GABBLE_DEBUG=1)
    #[arg(long)]
    debug: bool,

    /// Prefix put in front of every echoed reply
    #[arg(long)]
    reply_prefix: Option<String>,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger; the alternate screen owns the terminal
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    let debug = args.debug || std::env::var("GABBLE_DEBUG").is_ok_and(|v| v == "1");
    let level = if debug { LevelFilter::Debug } else { LevelFilter::Info };

    if let Ok(log_file) = File::create(&args.log_file) {
        let _ = WriteLogger::init(level, log_config, log_file);
    }

    let file_config = match config::load_config(args.config.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            log::warn!("Failed to load config, using defaults: {}", e);
            GabbleConfig::default()
        }
    };
    let cli = CliOverrides {
        reply_prefix: args.reply_prefix,
    };
    let resolved = config::resolve(&file_config, &cli);

    log::info!(
        "Gabble starting up (max_chars={}, editor_rows={})",
        resolved.max_chars,
        resolved.editor_rows
    );

    match gabble::tui::run(resolved).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error running program: {e}");
            ExitCode::FAILURE
        }
    }
}
