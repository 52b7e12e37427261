use std::fs::OpenOptions;
use std::io;
use std::sync::Mutex;

use clap::Parser;
use tracing_subscriber::EnvFilter;
use trivia_quiz::{Config, app};

fn init_logging(config: &Config) -> io::Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config.log_file)?;
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

#[tokio::main]
async fn main() {
    let config = Config::parse();

    if let Err(e) = init_logging(&config) {
        eprintln!("Failed to open log file {}: {}", config.log_file.display(), e);
        std::process::exit(1);
    }

    if let Err(e) = app::run(&config).await {
        tracing::error!(error = %e, "quiz terminated");
        eprintln!("Error running quiz: {}", e);
        std::process::exit(1);
    }
}
