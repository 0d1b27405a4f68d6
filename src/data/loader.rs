use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, StringRecord};
use thiserror::Error;
use tracing::debug;

use crate::models::{Question, Record};

pub const DEFAULT_QUESTIONS_PATH: &str = "problems.csv";

const FIELDS_PER_RECORD: usize = 2;

/// Errors raised while building a quiz from a question file.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to open CSV file {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("record on line {line} has {fields} fields, expected 2")]
    MalformedRecord { line: u64, fields: usize },

    #[error("record on line {line} has an empty prompt")]
    EmptyPrompt { line: u64 },

    #[error("failed to read CSV: {0}")]
    Csv(#[from] csv::Error),
}

pub fn load_questions_from_csv<P: AsRef<Path>>(path: P) -> Result<Vec<Question>, LoadError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| LoadError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let questions = load_questions_from_reader(file)?;
    debug!(path = %path.display(), count = questions.len(), "loaded questions");
    Ok(questions)
}

/// Reads every `prompt,answer` row up front, in file order.
pub fn load_questions_from_reader<R: Read>(reader: R) -> Result<Vec<Question>, LoadError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut questions = Vec::new();
    for row in reader.records() {
        let record = parse_record(&row?)?;
        questions.push(Question::from(record));
    }

    Ok(questions)
}

fn parse_record(row: &StringRecord) -> Result<Record, LoadError> {
    let line = row.position().map_or(0, |pos| pos.line());

    if row.len() != FIELDS_PER_RECORD {
        return Err(LoadError::MalformedRecord {
            line,
            fields: row.len(),
        });
    }

    let record: Record = row.deserialize(None)?;
    if record.prompt.is_empty() {
        return Err(LoadError::EmptyPrompt { line });
    }

    Ok(record)
}
