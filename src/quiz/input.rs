use std::io::{self, BufRead, BufReader, Stdin};
use std::sync::{Arc, Mutex};
use std::thread;

use tokio::sync::oneshot;

/// Something the quiz can ask for one answer at a time.
///
/// Every call to [`AnswerSource::request`] starts an independent read and
/// hands back its own channel. The receiver yields `Some(answer)` once an
/// answer is available and `None` when the input has ended. Dropping the
/// receiver abandons the read; whatever it produces later is thrown away.
pub trait AnswerSource {
    fn request(&mut self) -> oneshot::Receiver<Option<String>>;
}

/// Reads one answer per line from a blocking reader, e.g. the console.
pub struct LineAnswers<R> {
    reader: Arc<Mutex<R>>,
}

impl LineAnswers<BufReader<Stdin>> {
    pub fn stdin() -> Self {
        Self::new(BufReader::new(io::stdin()))
    }
}

impl<R: BufRead + Send + 'static> LineAnswers<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader: Arc::new(Mutex::new(reader)),
        }
    }
}

impl<R: BufRead + Send + 'static> AnswerSource for LineAnswers<R> {
    fn request(&mut self) -> oneshot::Receiver<Option<String>> {
        let (tx, rx) = oneshot::channel();
        let reader = Arc::clone(&self.reader);

        // The read can't be interrupted. A detached thread lets the process
        // exit while it is still blocked.
        thread::spawn(move || {
            let answer = match reader.lock() {
                Ok(mut reader) => read_token(&mut *reader).unwrap_or_else(|e| {
                    log::warn!("Failed to read an answer: {}", e);
                    None
                }),
                Err(_) => None,
            };
            if tx.send(answer).is_err() {
                log::debug!("Answer arrived after the quiz stopped listening, discarding it");
            }
        });

        rx
    }
}

/// Reads a line and returns its first whitespace-delimited token.
///
/// A blank line gives an empty answer, end of input gives `None`.
fn read_token<R: BufRead>(reader: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    let token = line.split_whitespace().next().unwrap_or_default();
    Ok(Some(token.to_string()))
}
