//! # timed-quiz
//!
//! A console quiz read from a `prompt,answer` CSV file and raced against a
//! time limit.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::io::{self, BufReader};
//! use std::time::Duration;
//!
//! use timed_quiz::{Quiz, QuizError};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), QuizError> {
//!     // Load questions from a CSV file
//!     let quiz = Quiz::from_csv("problems.csv")?;
//!
//!     // Ask them on the console, giving up after thirty seconds
//!     let report = quiz
//!         .run(Duration::from_secs(30), BufReader::new(io::stdin()), io::stdout())
//!         .await?;
//!     println!("{report}");
//!
//!     Ok(())
//! }
//! ```

pub mod console;
mod data;
mod models;
pub mod race;
pub mod runner;

use std::io::{self, BufRead, Read, Write};
use std::path::Path;
use std::time::Duration;

use thiserror::Error;

pub use data::{
    load_questions_from_csv, load_questions_from_reader, LoadError, DEFAULT_QUESTIONS_PATH,
};
pub use models::{Question, Report};

/// Error type for quiz operations.
#[derive(Debug, Error)]
pub enum QuizError {
    /// Error loading questions from file.
    #[error(transparent)]
    Load(#[from] LoadError),

    /// IO error during quiz execution.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The runner thread went away without finishing the quiz.
    #[error("quiz runner stopped before finishing")]
    RunnerAborted,
}

/// An ordered set of questions, asked in file order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quiz {
    questions: Vec<Question>,
}

impl Quiz {
    pub fn new(questions: Vec<Question>) -> Self {
        Self { questions }
    }

    /// Load a quiz from a CSV file of `prompt,answer` rows.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use timed_quiz::Quiz;
    ///
    /// let quiz = Quiz::from_csv("problems.csv").expect("Failed to load quiz");
    /// ```
    pub fn from_csv<P: AsRef<Path>>(path: P) -> Result<Self, QuizError> {
        let questions = load_questions_from_csv(path)?;
        Ok(Self::new(questions))
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, QuizError> {
        let questions = load_questions_from_reader(reader)?;
        Ok(Self::new(questions))
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Ask every question on `output`, reading replies from `input`, until
    /// the quiz ends or `limit` elapses.
    pub async fn run<R, W>(self, limit: Duration, input: R, output: W) -> Result<Report, QuizError>
    where
        R: BufRead + Send + 'static,
        W: Write + Send + 'static,
    {
        race::run(self.questions, limit, input, output).await
    }
}
