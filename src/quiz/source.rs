use rand::seq::SliceRandom;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::quiz::{Problem, QuizError};

const FIELDS_PER_RECORD: usize = 2;

// Rows are positional: `question,answer`, no header line.
#[derive(Debug, serde::Deserialize)]
struct RawProblem {
    question: String,
    answer: String,
}

impl From<RawProblem> for Problem {
    fn from(raw: RawProblem) -> Self {
        Problem::new(raw.question, &raw.answer)
    }
}

pub fn load(path: &Path) -> Result<Vec<Problem>, QuizError> {
    let file = File::open(path).map_err(|source| QuizError::SourceUnavailable {
        path: path.to_path_buf(),
        source,
    })?;
    from_reader(file, &path.display().to_string())
}

/// Parses every record of `reader` into a [`Problem`].
///
/// `origin` only names the input in error messages.
pub fn from_reader<R: Read>(reader: R, origin: &str) -> Result<Vec<Problem>, QuizError> {
    let malformed = |reason: String| QuizError::MalformedInput {
        origin: origin.to_string(),
        reason,
    };

    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut problems = Vec::new();
    for (idx, record) in csv_reader.records().enumerate() {
        let record = record.map_err(|e| malformed(e.to_string()))?;
        let line = record.position().map_or(idx as u64 + 1, |p| p.line());

        if record.len() != FIELDS_PER_RECORD {
            return Err(malformed(format!(
                "record on line {} has {} field(s), expected {}",
                line,
                record.len(),
                FIELDS_PER_RECORD
            )));
        }

        let raw: RawProblem = record
            .deserialize(None)
            .map_err(|e| malformed(format!("record on line {}: {}", line, e)))?;
        problems.push(raw.into());
    }

    log::debug!("Parsed {} problems from {}", problems.len(), origin);
    Ok(problems)
}

pub fn shuffle(problems: &mut [Problem]) {
    problems.shuffle(&mut rand::thread_rng());
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(input: &str) -> Result<Vec<Problem>, QuizError> {
        from_reader(input.as_bytes(), "test.csv")
    }

    #[test]
    fn parses_question_answer_rows() {
        let problems = parse("5+5,10\n7+3,10\n\"what 2+2, sir?\",4\n").unwrap();
        assert_eq!(
            problems,
            vec![
                Problem::new("5+5".to_string(), "10"),
                Problem::new("7+3".to_string(), "10"),
                Problem::new("what 2+2, sir?".to_string(), "4"),
            ]
        );
    }

    #[test]
    fn answer_whitespace_is_stripped_but_question_is_kept() {
        let problems = parse(" 1+1 ,  2  \n").unwrap();
        assert_eq!(problems[0].question, " 1+1 ");
        assert_eq!(problems[0].answer, "2");
    }

    #[test]
    fn empty_input_yields_no_problems() {
        assert!(parse("").unwrap().is_empty());
    }

    #[test]
    fn single_field_record_is_malformed() {
        let err = parse("1+1,2\n3+3\n").unwrap_err();
        match err {
            QuizError::MalformedInput { origin, reason } => {
                assert_eq!(origin, "test.csv");
                assert!(reason.contains("line 2"), "{reason}");
                assert!(reason.contains("1 field(s)"), "{reason}");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn extra_field_is_malformed() {
        assert!(matches!(
            parse("1+1,2,3\n"),
            Err(QuizError::MalformedInput { .. })
        ));
    }

    #[test]
    fn invalid_utf8_is_malformed() {
        let bytes: &[u8] = b"1+1,\xff\n";
        assert!(matches!(
            from_reader(bytes, "bytes"),
            Err(QuizError::MalformedInput { .. })
        ));
    }

    #[test]
    fn missing_file_is_unavailable() {
        let path = Path::new("definitely/not/here/problems.csv");
        match load(path) {
            Err(QuizError::SourceUnavailable { path: p, .. }) => assert_eq!(p, path),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn shuffle_keeps_every_problem() {
        let mut problems: Vec<Problem> = (0..20)
            .map(|i| Problem::new(format!("{i}+0"), &i.to_string()))
            .collect();
        let original = problems.clone();
        shuffle(&mut problems);

        let mut sorted = problems.clone();
        sorted.sort_by(|a, b| a.question.cmp(&b.question));
        let mut expected = original;
        expected.sort_by(|a, b| a.question.cmp(&b.question));
        assert_eq!(sorted, expected);
    }
}
