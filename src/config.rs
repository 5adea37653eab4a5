use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

/// Timed quiz over a CSV file of `question,answer` rows.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Config {
    /// A CSV file in the format of 'question,answer'.
    #[arg(long, env = "QUIZ_CSV", default_value = "problems.csv")]
    pub csv: PathBuf,

    /// The time limit for the whole quiz, in seconds.
    #[arg(long, env = "QUIZ_LIMIT", default_value_t = 30)]
    pub limit: u64,

    /// Shuffle the order of the problems.
    #[arg(long, env = "QUIZ_SHUFFLE")]
    pub shuffle: bool,
}

impl Config {
    pub fn time_limit(&self) -> Duration {
        Duration::from_secs(self.limit)
    }
}
