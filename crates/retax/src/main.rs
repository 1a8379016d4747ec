use std::path::PathBuf;

use clap::Parser;
use retax::{App, init_logging};

#[derive(Parser, Debug)]
#[command(name = "retax")]
#[command(about = "A terminal-based real-estate depreciation and tax scenario simulator")]
struct Args {
    /// Directory for logs and exports (default: ~/.retax/)
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Log level (debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,
}

fn default_data_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".retax")
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    let data_dir = args.data_dir.unwrap_or_else(default_data_dir);

    // The guard must outlive the app so buffered log lines are flushed
    let _log_guard = init_logging(&data_dir, &args.log_level)?;

    let mut app = App::new(data_dir);

    ratatui::run(|terminal| app.run(terminal))?;

    tracing::info!("Application shutting down");

    if let Err(err) = ratatui::try_restore() {
        tracing::error!("Failed to restore terminal: {err}");
    }

    Ok(())
}
