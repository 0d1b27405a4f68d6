//! Races the quiz runner against the time limit.

use std::io::{BufRead, Write};
use std::thread;
use std::time::Duration;

use tokio::sync::{oneshot, watch};
use tokio::time;
use tracing::{info, warn};

use crate::models::{Question, Report};
use crate::runner::QuizRunner;
use crate::QuizError;

/// Runs the quiz on a detached thread and returns the report from whichever
/// finishes first, the runner or the deadline.
///
/// When the deadline wins the runner is left blocked on its input; nothing
/// joins it, so it goes away with the process.
pub async fn run<R, W>(
    questions: Vec<Question>,
    limit: Duration,
    input: R,
    output: W,
) -> Result<Report, QuizError>
where
    R: BufRead + Send + 'static,
    W: Write + Send + 'static,
{
    let total = questions.len();
    let (tally_tx, tally_rx) = watch::channel(0);
    let (done_tx, done_rx) = oneshot::channel();

    let runner = QuizRunner::new(questions, input, output, tally_tx);
    thread::Builder::new()
        .name("quiz-runner".to_string())
        .spawn(move || {
            let _ = done_tx.send(runner.run());
        })?;

    tokio::select! {
        biased;

        finished = done_rx => match finished {
            Ok(Ok(questions)) => {
                let report = Report::completed(questions);
                info!(score = report.score, total, "quiz completed");
                Ok(report)
            }
            Ok(Err(err)) => Err(QuizError::Io(err)),
            Err(_) => {
                warn!("quiz runner stopped without reporting");
                Err(QuizError::RunnerAborted)
            }
        },

        _ = time::sleep(limit) => {
            let score = *tally_rx.borrow();
            info!(score, total, ?limit, "time limit reached");
            Ok(Report::timed_out(score, total))
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::{self, BufReader, Cursor, Read};
    use std::sync::{Arc, Mutex};

    use super::*;

    /// Serves the given text, then blocks forever like an idle terminal.
    struct StalledInput(Cursor<Vec<u8>>);

    impl StalledInput {
        fn new(text: &str) -> BufReader<Self> {
            BufReader::new(Self(Cursor::new(text.as_bytes().to_vec())))
        }
    }

    impl Read for StalledInput {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            let n = self.0.read(buf)?;
            if n > 0 {
                return Ok(n);
            }
            loop {
                thread::park();
            }
        }
    }

    #[derive(Clone, Default)]
    struct SharedOutput(Arc<Mutex<Vec<u8>>>);

    impl SharedOutput {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl Write for SharedOutput {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn questions() -> Vec<Question> {
        vec![
            Question::new("2+2", "4"),
            Question::new("capital of France", "Paris"),
        ]
    }

    #[tokio::test]
    async fn completion_reports_final_tally() {
        let output = SharedOutput::default();
        let report = run(
            questions(),
            Duration::from_secs(30),
            Cursor::new("4\n paris\n"),
            output.clone(),
        )
        .await
        .unwrap();

        assert!(!report.timed_out);
        assert_eq!(report.to_string(), "You scored 1 out of 2.");
        assert_eq!(
            output.contents(),
            "Problem #1: 2+2 = Problem #2: capital of France = "
        );
    }

    #[tokio::test(start_paused = true)]
    async fn deadline_before_any_answer_scores_zero() {
        let output = SharedOutput::default();
        let report = run(
            questions(),
            Duration::from_secs(30),
            StalledInput::new(""),
            output,
        )
        .await
        .unwrap();

        assert!(report.timed_out);
        assert_eq!(report.to_string(), "You scored 0 out of 2.");
    }

    #[tokio::test]
    async fn deadline_counts_only_answered_questions() {
        let questions = vec![
            Question::new("1+1", "2"),
            Question::new("2+2", "4"),
            Question::new("3+3", "6"),
            Question::new("4+4", "8"),
        ];
        let report = run(
            questions,
            Duration::from_millis(300),
            StalledInput::new("2\n5\n6\n"),
            SharedOutput::default(),
        )
        .await
        .unwrap();

        assert!(report.timed_out);
        assert_eq!(report.score, 2);
        assert_eq!(report.total, 4);
    }

    #[tokio::test]
    async fn empty_quiz_completes_immediately() {
        let report = run(
            Vec::new(),
            Duration::from_secs(30),
            Cursor::new(""),
            SharedOutput::default(),
        )
        .await
        .unwrap();

        assert!(!report.timed_out);
        assert_eq!(report.to_string(), "You scored 0 out of 0.");
    }
}
