use std::io::Write;
use std::time::Duration;

use tokio::time::{self, Instant};

use crate::quiz::input::AnswerSource;
use crate::quiz::{Outcome, Problem, QuizError, Score};

/// Drives one quiz run against a single deadline shared by every question.
pub struct QuizRunner<'a, A, W> {
    problems: &'a [Problem],
    limit: Duration,
    answers: A,
    out: W,
}

impl<'a, A: AnswerSource, W: Write> QuizRunner<'a, A, W> {
    pub fn new(problems: &'a [Problem], limit: Duration, answers: A, out: W) -> Self {
        Self {
            problems,
            limit,
            answers,
            out,
        }
    }

    /// Presents the problems in order until they run out or the time limit passes.
    ///
    /// The deadline is fixed when the run starts and is never reset. Once it has
    /// passed no further prompt is written. If an answer and the deadline become
    /// ready together, the deadline wins.
    pub async fn run(mut self) -> Result<Score, QuizError> {
        // A limit too large to represent never expires.
        let deadline = Instant::now().checked_add(self.limit);
        let expiry = async move {
            match deadline {
                Some(deadline) => time::sleep_until(deadline).await,
                None => std::future::pending().await,
            }
        };
        tokio::pin!(expiry);

        let mut correct = 0;
        let mut attempted = 0;
        let mut outcome = Outcome::Exhausted;

        for (i, problem) in self.problems.iter().enumerate() {
            if deadline.is_some_and(|deadline| Instant::now() >= deadline) {
                outcome = Outcome::TimedOut;
                break;
            }

            write!(self.out, "Problem #{}: {} = ", i + 1, problem.question)?;
            self.out.flush()?;
            attempted += 1;

            let answer = self.answers.request();
            tokio::select! {
                biased;

                _ = &mut expiry => {
                    log::debug!("Time ran out on problem #{}", i + 1);
                    writeln!(self.out)?;
                    outcome = Outcome::TimedOut;
                    break;
                }
                received = answer => {
                    // A closed channel means the input ended; score it as empty.
                    let received = received.ok().flatten().unwrap_or_default();
                    if problem.is_correct(&received) {
                        correct += 1;
                    }
                    log::debug!("Problem #{} answered {:?}, expected {:?}", i + 1, received, problem.answer);
                }
            }
        }

        let score = Score {
            correct,
            attempted,
            total: self.problems.len(),
            outcome,
        };
        log::info!(
            "Quiz finished ({:?}): {} correct, {} attempted, {} total",
            score.outcome,
            score.correct,
            score.attempted,
            score.total
        );
        Ok(score)
    }
}
