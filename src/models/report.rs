use std::fmt;

use super::Question;

/// Outcome of a finished race between the quiz and its deadline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub score: usize,
    pub total: usize,
    pub timed_out: bool,
    /// Judged questions, only available when the quiz ran to the end.
    pub questions: Option<Vec<Question>>,
}

impl Report {
    pub fn completed(questions: Vec<Question>) -> Self {
        let score = questions.iter().filter(|q| q.answered_correctly).count();
        Self {
            score,
            total: questions.len(),
            timed_out: false,
            questions: Some(questions),
        }
    }

    pub fn timed_out(score: usize, total: usize) -> Self {
        Self {
            score,
            total,
            timed_out: true,
            questions: None,
        }
    }

    /// Questions answered incorrectly, in presentation order.
    pub fn missed(&self) -> impl Iterator<Item = &Question> {
        self.questions
            .iter()
            .flatten()
            .filter(|q| !q.answered_correctly)
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "You scored {} out of {}.", self.score, self.total)
    }
}
