use serde::Deserialize;

/// One `prompt,answer` row as it appears in the question file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Record {
    pub prompt: String,
    pub answer: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub prompt: String,
    pub answer: String,
    pub answered_correctly: bool,
}

impl Question {
    pub fn new(prompt: impl Into<String>, answer: &str) -> Self {
        Self {
            prompt: prompt.into(),
            answer: answer.trim().to_string(),
            answered_correctly: false,
        }
    }

    /// Judges a typed response and records the outcome on the question.
    ///
    /// Only surrounding whitespace is ignored; case and inner spacing must match.
    pub fn judge(&mut self, response: &str) -> bool {
        self.answered_correctly = self.answer == response.trim();
        self.answered_correctly
    }
}

impl From<Record> for Question {
    fn from(record: Record) -> Self {
        Self::new(record.prompt, &record.answer)
    }
}
