/**
 * Helper functions for input and output.
 */
use std::io::{BufRead, Write};

use colored::*;
use rustyline::error::ReadlineError;

use super::common::{QuizError, Result};

#[macro_export]
macro_rules! my_println {
    ($out:expr, $($arg:tt)*) => (
        writeln!($out, $($arg)*).map_err($crate::common::QuizError::Io)
    );
}

#[macro_export]
macro_rules! my_print {
    ($out:expr, $($arg:tt)*) => (
        write!($out, $($arg)*).map_err($crate::common::QuizError::Io)
    );
}


/// A source of lines typed by the learner.
pub trait LineSource {
    /// Display `message` and read one line of input. Return `Ok(None)` at end of input
    /// and `Err(QuizError::ReadlineInterrupted)` if the user pressed Ctrl+C. Otherwise
    /// return the line without leading and trailing whitespace. An empty line is
    /// returned as an empty string, since it selects no answers.
    fn read_line(&mut self, message: &str) -> Result<Option<String>>;
}


/// Reads from the terminal with line editing.
pub struct Terminal {
    editor: rustyline::Editor<()>,
}


impl Terminal {
    pub fn new() -> Result<Self> {
        let editor = rustyline::Editor::<()>::new().map_err(readline_to_quiz_error)?;
        Ok(Terminal { editor })
    }
}


impl LineSource for Terminal {
    fn read_line(&mut self, message: &str) -> Result<Option<String>> {
        loop {
            match self.editor.readline(message) {
                Ok(response) => {
                    return Ok(Some(response.trim().to_string()));
                },
                // Return immediately if the user hits Ctrl+D or Ctrl+C.
                Err(ReadlineError::Interrupted) => {
                    return Err(QuizError::ReadlineInterrupted);
                },
                Err(ReadlineError::Eof) => {
                    return Ok(None);
                },
                Err(ReadlineError::Io(e)) => {
                    return Err(QuizError::Io(e));
                },
                _ => {},
            }
        }
    }
}


fn readline_to_quiz_error(err: ReadlineError) -> QuizError {
    match err {
        ReadlineError::Io(e) => QuizError::Io(e),
        ReadlineError::Interrupted => QuizError::ReadlineInterrupted,
        other => QuizError::Io(std::io::Error::new(std::io::ErrorKind::Other, other.to_string())),
    }
}


/// Reads lines from any buffered reader, without a prompt. Used when standard input is
/// not a terminal, e.g. when answers are piped in.
pub struct PipedInput<B: BufRead> {
    reader: B,
}


impl<B: BufRead> PipedInput<B> {
    pub fn new(reader: B) -> Self {
        PipedInput { reader }
    }
}


impl<B: BufRead> LineSource for PipedInput<B> {
    fn read_line(&mut self, _message: &str) -> Result<Option<String>> {
        let mut line = String::new();
        if self.reader.read_line(&mut line).map_err(QuizError::Io)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}


/// Print `message` to `out`, breaking lines according to the current width of the
/// terminal. Prepend `prefix` to the first line and indent all subsequent lines by its
/// length.
pub fn prettyprint<W: Write>(out: &mut W, message: &str, prefix: &str) -> Result<()> {
    prettyprint_colored(out, message, prefix, None, None)
}

pub fn prettyprint_colored<W: Write>(
    out: &mut W,
    message: &str,
    prefix: &str,
    message_color: Option<Color>,
    prefix_color: Option<Color>,
) -> Result<()> {
    let width = textwrap::termwidth().saturating_sub(prefix.len()).max(20);
    let mut lines = textwrap::wrap_iter(message, width);

    let colored_prefix = color_optional(&prefix, prefix_color);
    if let Some(first_line) = lines.next() {
        let colored_line = color_optional(&first_line, message_color);
        my_println!(out, "{}{}", colored_prefix, colored_line)?;
    } else {
        my_println!(out, "{}", colored_prefix)?;
    }

    let indent = " ".repeat(prefix.len());
    for line in lines {
        let colored_line = color_optional(&line, message_color);
        my_println!(out, "{}{}", indent, colored_line)?;
    }
    Ok(())
}

fn color_optional(text: &str, color: Option<Color>) -> ColoredString {
    if let Some(color) = color {
        text.color(color)
    } else {
        text.normal()
    }
}
