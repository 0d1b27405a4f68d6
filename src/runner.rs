//! Sequential question/answer loop.

use std::io::{self, BufRead, Write};

use tokio::sync::watch;
use tracing::debug;

use crate::console;
use crate::models::Question;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunnerState {
    /// Waiting on the answer to the question at this index.
    Awaiting(usize),
    Done,
}

/// Walks the questions once, in order, publishing the tally after every
/// correct answer.
pub struct QuizRunner<R, W> {
    questions: Vec<Question>,
    state: RunnerState,
    input: R,
    output: W,
    tally: watch::Sender<usize>,
}

impl<R: BufRead, W: Write> QuizRunner<R, W> {
    pub fn new(questions: Vec<Question>, input: R, output: W, tally: watch::Sender<usize>) -> Self {
        let state = if questions.is_empty() {
            RunnerState::Done
        } else {
            RunnerState::Awaiting(0)
        };

        Self {
            questions,
            state,
            input,
            output,
            tally,
        }
    }

    pub fn state(&self) -> RunnerState {
        self.state
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Asks the current question and judges the reply.
    ///
    /// Exhausted input counts as an empty reply, so the runner always
    /// reaches [`RunnerState::Done`].
    pub fn step(&mut self) -> io::Result<RunnerState> {
        let RunnerState::Awaiting(index) = self.state else {
            return Ok(RunnerState::Done);
        };

        let question = &mut self.questions[index];
        console::ask(&mut self.output, index + 1, &question.prompt)?;
        let response = console::read_response(&mut self.input)?.unwrap_or_default();

        let correct = question.judge(&response);
        if correct {
            self.tally.send_modify(|tally| *tally += 1);
        }
        debug!(question = index + 1, correct, "judged response");

        self.state = if index + 1 < self.questions.len() {
            RunnerState::Awaiting(index + 1)
        } else {
            RunnerState::Done
        };
        Ok(self.state)
    }

    /// Runs to completion and hands back the judged questions.
    pub fn run(mut self) -> io::Result<Vec<Question>> {
        while self.step()? != RunnerState::Done {}
        Ok(self.questions)
    }
}
