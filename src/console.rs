//! Console protocol shared by the entry point and the quiz runner.
//!
//! Everything here writes to a generic `Write` and reads from a generic
//! `BufRead` so the protocol can be exercised without a terminal.

use std::io::{self, BufRead, Write};

pub const READY_PROMPT: &str = "Please press enter to begin quiz...";

/// Prints the readiness prompt and waits for one line, discarding it.
pub fn wait_for_ready<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> io::Result<()> {
    write!(output, "{READY_PROMPT}")?;
    output.flush()?;
    read_response(input)?;
    Ok(())
}

/// Shows a question with its 1-based number, leaving the cursor on the line.
pub fn ask<W: Write>(output: &mut W, number: usize, prompt: &str) -> io::Result<()> {
    write!(output, "Problem #{number}: {prompt} = ")?;
    output.flush()
}

/// Returns `None` once the input is exhausted.
///
/// Bytes that are not UTF-8 are replaced rather than rejected, so a garbled
/// reply is judged as a wrong answer instead of ending the quiz.
pub fn read_response<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut line = Vec::new();
    if input.read_until(b'\n', &mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(String::from_utf8_lossy(&line).into_owned()))
}
