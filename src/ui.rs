/**
 * The command-line user interface for taking quizzes.
 */
use std::io::Write;

use colored::*;

use super::common::Result;
use super::iohelper::{prettyprint, prettyprint_colored};
use super::quiz::{Question, SessionResult};


pub struct CmdUI<W: Write> {
    out: W,
    number: usize,
}


impl<W: Write> CmdUI<W> {
    pub fn new(out: W) -> Self {
        Self { out, number: 0 }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn next(&mut self) {
        self.number += 1;
    }

    /// Print the title of the question followed by its numbered answers.
    pub fn question(&mut self, question: &Question) -> Result<()> {
        my_print!(self.out, "\n")?;
        let prefix = format!("  ({}) ", self.number);
        prettyprint_colored(&mut self.out, &question.title, &prefix, None, Some(Color::Cyan))?;
        my_println!(self.out, "  {}", "_".repeat(28))?;
        my_print!(self.out, "\n")?;
        for (i, answer) in question.answers.iter().enumerate() {
            let prefix = format!("     [{}] ", i);
            prettyprint(&mut self.out, &answer.text, &prefix)?;
            my_print!(self.out, "\n")?;
        }
        Ok(())
    }

    pub fn correct(&mut self) -> Result<()> {
        prettyprint(&mut self.out, &format!("{}", "Correct!".green()), "")
    }

    pub fn incorrect(&mut self, correction: &[usize]) -> Result<()> {
        let numbers = correction
            .iter()
            .map(|i| i.to_string())
            .collect::<Vec<String>>()
            .join(" ");
        let message = match correction.len() {
            0 => format!("{} None of the answers was correct.", "Incorrect.".red()),
            1 => format!("{} The correct answer was {}.", "Incorrect.".red(), numbers.green()),
            _ => format!("{} The correct answers were {}.", "Incorrect.".red(), numbers.green()),
        };
        prettyprint(&mut self.out, &message, "")
    }

    /// Print the size of each pool, and the countdown to the next revisit of the
    /// mistaken pool if there is one.
    pub fn status(
        &mut self,
        fresh: usize,
        correct: usize,
        mistaken: usize,
        next_try: Option<u32>,
    ) -> Result<()> {
        my_println!(self.out, "Fresh questions: {}", fresh)?;
        my_println!(self.out, "Correct questions: {}", correct)?;
        my_println!(self.out, "Mistaken questions: {}", mistaken)?;
        if let Some(next_try) = next_try {
            my_println!(self.out, "Next try in: {}", next_try)?;
        }
        Ok(())
    }

    pub fn warning(&mut self, text: &str) -> Result<()> {
        prettyprint_colored(&mut self.out, &format!("Error: {}.", text), "", Some(Color::Red), None)
    }

    pub fn results(&mut self, results: &SessionResult) -> Result<()> {
        if results.answered == 0 {
            return Ok(());
        }

        my_print!(self.out, "\n\n")?;
        if results.remaining == 0 {
            my_print!(self.out, "Finished ")?;
        } else {
            my_print!(self.out, "Stopped after ")?;
        }
        my_print!(self.out, "{}", format!("{}", results.answered).cyan())?;
        if results.answered == 1 {
            my_print!(self.out, " answer")?;
        } else {
            my_print!(self.out, " answers")?;
        }
        my_println!(self.out, " in {}", format_duration(results.elapsed).cyan())?;
        my_print!(self.out, "  {}", format!("{}", results.retired).green())?;
        my_print!(self.out, " correct\n")?;
        my_print!(self.out, "  {}", format!("{}", results.mistakes).red())?;
        if results.mistakes == 1 {
            my_print!(self.out, " mistake\n")?;
        } else {
            my_print!(self.out, " mistakes\n")?;
        }
        if results.remaining > 0 {
            my_print!(self.out, "  {}", format!("{}", results.remaining).bright_blue())?;
            my_print!(self.out, " remaining\n")?;
        }
        Ok(())
    }
}


fn format_duration(elapsed: ::std::time::Duration) -> String {
    let seconds = elapsed.as_secs();
    if seconds >= 60 {
        format!("{}m {}s", seconds / 60, seconds % 60)
    } else {
        format!("{}s", seconds)
    }
}
