//! Interactive prompts on stdin/stdout

use std::io::{self, BufRead, Write};

use chrono::NaiveDate;
use workstack_core::{parse_anchor, InputError};

pub const DATE_PROMPT: &str = "Enter date (format: 02/01/2023): ";

/// Prompt for the anchor date and parse the answer
pub fn read_anchor<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> Result<NaiveDate, InputError> {
    write!(output, "{DATE_PROMPT}")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(InputError::Read(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "no date entered",
        )));
    }
    parse_anchor(&line)
}

/// Wait for Enter before the program exits
pub fn pause<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> io::Result<()> {
    writeln!(output, "Press Enter to continue...")?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    writeln!(output, "Program will be closed.")
}
