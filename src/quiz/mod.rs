pub mod input;
pub mod runner;
pub mod source;

use std::fmt;
use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum QuizError {
    #[error("failed to open the CSV file: {}", path.display())]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse the CSV file {origin}: {reason}")]
    MalformedInput { origin: String, reason: String },
    #[error("failed to write to the console: {0}")]
    Io(#[from] io::Error),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Problem {
    pub question: String,
    pub answer: String,
}
impl Problem {
    /// The answer is stored trimmed so that comparisons are exact matches.
    pub fn new(question: String, answer: &str) -> Self {
        Self {
            question,
            answer: answer.trim().to_string(),
        }
    }

    pub fn is_correct(&self, answer: &str) -> bool {
        self.answer == answer.trim()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Exhausted,
    TimedOut,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Score {
    pub correct: usize,
    pub attempted: usize,
    pub total: usize,
    pub outcome: Outcome,
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "You scored {} out of {}.", self.correct, self.total)
    }
}
