//! Line-based prompts
//!
//! Generic over the reader and writer so the interactive menu and
//! confirmations can be driven from tests.

use std::io::{BufRead, Write};

use crate::error::LedgerResult;

/// Print `prompt`, read one line and return it trimmed
///
/// Returns `None` at end of input.
pub fn prompt_line<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> LedgerResult<Option<String>> {
    write!(output, "{}", prompt)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }

    Ok(Some(line.trim().to_string()))
}

/// Ask a yes/no question; anything but `y`/`yes` (or end of input) is no
pub fn confirm<R: BufRead, W: Write>(input: &mut R, output: &mut W, prompt: &str) -> LedgerResult<bool> {
    let answer = prompt_line(input, output, prompt)?;
    Ok(answer.is_some_and(|a| is_yes(&a)))
}

pub fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}
