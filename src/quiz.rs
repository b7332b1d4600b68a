/**
 * Questions, grading, and the interactive session that drives a `Deck`.
 */
use std::collections::{BTreeSet, HashSet};
use std::io::Write;
use std::time;

use rand::Rng;

use super::common::{QuizError, Result};
use super::iohelper::LineSource;
use super::repetition::Deck;
use super::ui::CmdUI;


/// Represents a question.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Question {
    pub title: String,
    /// Answers in the order they appear in the question bank, which is also the order
    /// in which they are displayed.
    pub answers: Vec<Answer>,
}


/// Represents an answer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Answer {
    pub text: String,
    pub correct: bool,
}


/// Represents the outcome of a session.
#[derive(Debug)]
pub struct SessionResult {
    /// Number of questions graded, counting repeated attempts.
    pub answered: usize,
    pub mistakes: usize,
    /// Number of questions answered correctly, i.e. in the correct pool.
    pub retired: usize,
    /// Number of questions left in the fresh and mistaken pools. Zero unless the
    /// learner ended the session early.
    pub remaining: usize,
    pub elapsed: time::Duration,
}


impl Question {
    /// Return the answers flagged as correct.
    pub fn correct_answers(&self) -> Vec<&Answer> {
        self.answers.iter().filter(|a| a.correct).collect()
    }

    /// Return the indices of the answers flagged as correct.
    pub fn correct_indices(&self) -> Vec<usize> {
        self.answers
            .iter()
            .enumerate()
            .filter(|(_, a)| a.correct)
            .map(|(i, _)| i)
            .collect()
    }

    /// Return `true` if `submitted` is exactly the set of correct answers. Order and
    /// repetition are ignored.
    pub fn check(&self, submitted: &[Answer]) -> bool {
        let expected: HashSet<&Answer> = self.correct_answers().into_iter().collect();
        let got: HashSet<&Answer> = submitted.iter().collect();
        expected == got
    }

    /// Look up the answers at `indices`.
    pub fn select(&self, indices: &[usize]) -> Result<Vec<Answer>> {
        let mut selected = Vec::with_capacity(indices.len());
        for &index in indices.iter() {
            match self.answers.get(index) {
                Some(answer) => selected.push(answer.clone()),
                None => {
                    return Err(QuizError::OutOfRangeSelection {
                        index,
                        count: self.answers.len(),
                    });
                },
            }
        }
        Ok(selected)
    }
}


/// Parse a line of whitespace-separated answer numbers. The result is sorted and free of
/// duplicates.
pub fn parse_selection(response: &str) -> Result<Vec<usize>> {
    let mut indices = BTreeSet::new();
    for token in response.split_whitespace() {
        let index = token
            .parse::<usize>()
            .map_err(|_| QuizError::BadSelection(token.to_string()))?;
        indices.insert(index);
    }
    Ok(indices.into_iter().collect())
}


/// Run the interactive session until both the fresh and mistaken pools are empty, or
/// until the learner ends input with Ctrl+D or Ctrl+C.
pub fn take<R, L, W>(
    deck: &mut Deck<R>,
    input: &mut L,
    ui: &mut CmdUI<W>,
) -> Result<SessionResult>
where
    R: Rng,
    L: LineSource,
    W: Write,
{
    let time_started = time::Instant::now();
    let mut answered = 0;

    while !deck.has_ended() {
        let question = match deck.current() {
            Some(question) => question.clone(),
            None => break,
        };

        ui.next();
        ui.question(&question)?;

        let submitted = match ask(&question, input, ui) {
            Ok(Some(submitted)) => submitted,
            Ok(None) | Err(QuizError::ReadlineInterrupted) => break,
            Err(e) => return Err(e),
        };

        let correct = deck.answer_question(&submitted)?;
        answered += 1;
        if correct {
            ui.correct()?;
        } else {
            ui.incorrect(&question.correct_indices())?;
        }
        ui.status(
            deck.fresh_count(),
            deck.correct_count(),
            deck.mistaken_count(),
            deck.next_try(),
        )?;
    }

    let result = SessionResult {
        answered,
        mistakes: deck.mistakes(),
        retired: deck.correct_count(),
        remaining: deck.remaining_count(),
        elapsed: time_started.elapsed(),
    };
    ui.results(&result)?;
    Ok(result)
}


/// Prompt until the learner enters a valid selection for `question`. Return `Ok(None)`
/// at end of input.
fn ask<L: LineSource, W: Write>(
    question: &Question,
    input: &mut L,
    ui: &mut CmdUI<W>,
) -> Result<Option<Vec<Answer>>> {
    loop {
        let response = match input.read_line("> ")? {
            Some(response) => response,
            None => return Ok(None),
        };

        match parse_selection(&response).and_then(|indices| question.select(&indices)) {
            Ok(submitted) => return Ok(Some(submitted)),
            Err(e @ QuizError::BadSelection(_)) |
            Err(e @ QuizError::OutOfRangeSelection { .. }) => {
                ui.warning(&e.to_string())?;
            },
            Err(e) => return Err(e),
        }
    }
}
