use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::source::DEFAULT_API_URL;

/// Terminal trivia quiz backed by the Open Trivia Database.
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
pub struct Config {
    /// Base URL of the trivia API
    #[arg(long, env = "TRIVIA_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Seconds before a request to the trivia API is abandoned
    #[arg(long, default_value_t = 10)]
    pub timeout_secs: u64,

    /// File that receives the log output
    #[arg(long, env = "TRIVIA_LOG_FILE", default_value = "trivia-quiz.log")]
    pub log_file: PathBuf,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    pub log_filter: String,
}

impl Config {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
