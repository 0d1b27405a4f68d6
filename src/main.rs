use std::io::{self, BufReader};
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use timed_quiz::{console, Quiz, QuizError, DEFAULT_QUESTIONS_PATH};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// CSV file in the format of 'question,answer'
    #[arg(short, long, default_value = DEFAULT_QUESTIONS_PATH)]
    csv: PathBuf,

    /// Time limit for the quiz in seconds
    #[arg(short, long, default_value_t = 30)]
    limit: u64,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("timed_quiz=warn")),
        )
        .init();

    let args = Args::parse();

    if let Err(e) = run(args).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run(args: Args) -> Result<(), QuizError> {
    let quiz = Quiz::from_csv(&args.csv)?;
    debug!(questions = quiz.len(), limit = args.limit, "quiz ready");

    let mut input = BufReader::new(io::stdin());
    console::wait_for_ready(&mut input, &mut io::stdout())?;

    let report = quiz
        .run(Duration::from_secs(args.limit), input, io::stdout())
        .await?;

    for question in report.missed() {
        debug!(prompt = %question.prompt, answer = %question.answer, "missed");
    }

    // The last prompt is still open on screen when time runs out.
    if report.timed_out {
        println!();
    }
    println!("{report}");

    Ok(())
}
