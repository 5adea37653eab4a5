mod config;
mod quiz;

use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use config::Config;
use dotenv::dotenv;
use quiz::{input::LineAnswers, runner::QuizRunner, source, QuizError, Score};

#[tokio::main]
async fn main() -> ExitCode {
    // A missing .env is fine; it only supplies RUST_LOG and QUIZ_* defaults.
    dotenv().ok();
    pretty_env_logger::init();

    let config = Config::parse();
    log::debug!("Running with {:?}", config);

    match run(&config).await {
        Ok(score) => {
            println!("{}", score);
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::debug!("Quiz aborted: {:?}", e);
            // Nothing more can be reported if stderr itself is gone.
            let _ = report(&e, &mut io::stderr());
            ExitCode::FAILURE
        }
    }
}

/// Writes the one-line diagnostic for a run that could not start.
fn report<W: Write>(err: &QuizError, out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", err)
}

async fn run(config: &Config) -> Result<Score, QuizError> {
    let mut problems = source::load(&config.csv)?;
    log::info!(
        "Loaded {} problems from {}, time limit {}s",
        problems.len(),
        config.csv.display(),
        config.limit
    );

    if config.shuffle {
        source::shuffle(&mut problems);
    }

    QuizRunner::new(
        &problems,
        config.time_limit(),
        LineAnswers::stdin(),
        io::stdout(),
    )
    .run()
    .await
}
