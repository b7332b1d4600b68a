/**
 * Definitions of data structures used by several modules, such as `QuizError` and the
 * structs that hold command-line arguments.
 */
use std::error;
use std::fmt;
use std::io;
use std::path::PathBuf;

use structopt::StructOpt;


pub type Result<T> = ::std::result::Result<T, QuizError>;


#[derive(Debug)]
pub enum QuizError {
    /// For when the question bank cannot be opened or read.
    InputUnreadable { path: PathBuf, source: io::Error },
    /// For when the question bank contains no questions.
    EmptyQuestionBank,
    /// For when the learner selects an answer that was not displayed.
    OutOfRangeSelection { index: usize, count: usize },
    /// For when the learner types something that is not an answer number.
    BadSelection(String),
    /// For when a question is answered after the session has ended.
    SessionOver,
    Io(io::Error),
    ReadlineInterrupted,
}


impl fmt::Display for QuizError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            QuizError::InputUnreadable { ref path, ref source } => {
                write!(f, "cannot read question bank '{}' ({})", path.to_string_lossy(), source)
            },
            QuizError::EmptyQuestionBank => {
                write!(f, "no questions found")
            },
            QuizError::OutOfRangeSelection { index, count } => {
                if count == 0 {
                    write!(f, "there is no answer {} (this question has no answers)", index)
                } else if count == 1 {
                    write!(f, "there is no answer {} (the only answer is 0)", index)
                } else {
                    write!(f, "there is no answer {} (choose from 0 to {})", index, count - 1)
                }
            },
            QuizError::BadSelection(ref token) => {
                write!(f, "'{}' is not an answer number", token)
            },
            QuizError::SessionOver => {
                write!(f, "the session has already ended")
            },
            QuizError::Io(ref err) => {
                write!(f, "IO error ({})", err)
            },
            QuizError::ReadlineInterrupted => {
                Ok(())
            },
        }
    }
}


impl error::Error for QuizError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match *self {
            QuizError::InputUnreadable { ref source, .. } => Some(source),
            QuizError::Io(ref err) => Some(err),
            _ => None,
        }
    }
}


/// Return `true` if `err` is a broken pipe on standard output, e.g. when the output is
/// piped into `head`.
pub fn is_broken_pipe(err: &QuizError) -> bool {
    if let QuizError::Io(e) = err {
        e.kind() == io::ErrorKind::BrokenPipe
    } else {
        false
    }
}


/// Holds the command-line configuration for the application.
#[derive(StructOpt)]
#[structopt(name = "vsetest", about = "Drill a multiple-choice question bank from the command line.")]
pub struct Options {
    /// Do not emit colorized output.
    #[structopt(long = "no-color")]
    pub no_color: bool,
    #[structopt(subcommand)]
    pub cmd: Command,
}

#[derive(StructOpt)]
pub enum Command {
    /// Take a quiz until every question has been answered correctly.
    #[structopt(name = "take")]
    Take(TakeOptions),
    /// Count the distinct questions in a question bank.
    #[structopt(name = "count")]
    Count(CountOptions),
}

#[derive(StructOpt)]
pub struct TakeOptions {
    /// Path to the question bank.
    #[structopt(parse(from_os_str))]
    pub path: PathBuf,
    /// Seed the random number generator to replay the same session.
    #[structopt(long = "seed")]
    pub seed: Option<u64>,
}

#[derive(StructOpt)]
pub struct CountOptions {
    /// Path to the question bank.
    #[structopt(parse(from_os_str))]
    pub path: PathBuf,
}
