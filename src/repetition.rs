/**
 * Choose which question to ask next.
 *
 * Questions live in one of three pools:
 *
 *   fresh:    never answered correctly and never missed
 *   mistaken: missed at least once and not answered correctly since
 *   correct:  answered correctly, retired for the rest of the session
 *
 * As long as the learner has made no mistakes, questions are drawn from the fresh pool.
 * After a mistake, a countdown of 7 to 15 fresh questions starts; when it runs out, or
 * when the fresh pool is empty, a mistaken question is drawn instead and the countdown
 * starts over.
 */
use std::collections::BTreeSet;

use log::debug;
use rand::seq::IteratorRandom;
use rand::Rng;

use super::common::{QuizError, Result};
use super::quiz::{Answer, Question};

// Bounds, inclusive, on the number of fresh questions asked between two revisits of the
// mistaken pool.
const MIN_NEXT_TRY: u32 = 7;
const MAX_NEXT_TRY: u32 = 15;


/// The pool a question is currently in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Fresh,
    Mistaken,
    Correct,
}


/// Three disjoint pools of questions.
#[derive(Debug, Default)]
pub struct QuestionSet {
    fresh: BTreeSet<Question>,
    mistaken: BTreeSet<Question>,
    correct: BTreeSet<Question>,
}


impl QuestionSet {
    /// Put every question in the fresh pool. Duplicate questions collapse into one.
    pub fn new(questions: Vec<Question>) -> Self {
        QuestionSet {
            fresh: questions.into_iter().collect(),
            mistaken: BTreeSet::new(),
            correct: BTreeSet::new(),
        }
    }

    pub fn fresh_count(&self) -> usize {
        self.fresh.len()
    }

    pub fn mistaken_count(&self) -> usize {
        self.mistaken.len()
    }

    pub fn correct_count(&self) -> usize {
        self.correct.len()
    }

    /// Number of questions that still have to be answered correctly.
    pub fn remaining_count(&self) -> usize {
        self.fresh.len() + self.mistaken.len()
    }

    pub fn question_count(&self) -> usize {
        self.fresh.len() + self.mistaken.len() + self.correct.len()
    }

    pub fn stage(&self, question: &Question) -> Option<Stage> {
        if self.fresh.contains(question) {
            Some(Stage::Fresh)
        } else if self.mistaken.contains(question) {
            Some(Stage::Mistaken)
        } else if self.correct.contains(question) {
            Some(Stage::Correct)
        } else {
            None
        }
    }

    fn retire(&mut self, question: &Question) {
        self.fresh.remove(question);
        self.mistaken.remove(question);
        self.correct.insert(question.clone());
    }

    fn miss(&mut self, question: &Question) {
        self.fresh.remove(question);
        self.mistaken.insert(question.clone());
    }
}


/// Schedules questions and grades the learner's answers.
#[derive(Debug)]
pub struct Deck<R: Rng> {
    pools: QuestionSet,
    current: Option<Question>,
    mistakes: usize,
    /// Number of fresh questions to ask before revisiting the mistaken pool. `None`
    /// until the first mistake.
    next_try: Option<u32>,
    rng: R,
}


impl<R: Rng> Deck<R> {
    /// Create a deck with every question in the fresh pool and pick the first question.
    pub fn new(questions: Vec<Question>, rng: R) -> Result<Self> {
        if questions.len() == 0 {
            return Err(QuizError::EmptyQuestionBank);
        }

        let mut deck = Deck {
            pools: QuestionSet::new(questions),
            current: None,
            mistakes: 0,
            next_try: None,
            rng,
        };
        deck.pick_question();
        Ok(deck)
    }

    /// Grade `submitted` against the current question, move the question to the
    /// matching pool and pick the next one. Return `true` if the answer was correct.
    pub fn answer_question(&mut self, submitted: &[Answer]) -> Result<bool> {
        let question = self.current.take().ok_or(QuizError::SessionOver)?;

        let correct = question.check(submitted);
        if correct {
            self.pools.retire(&question);
        } else {
            self.mistakes += 1;
            self.pools.miss(&question);
        }
        debug!(
            "Graded {:?} as {}; {} fresh, {} mistaken, {} correct",
            question.title,
            if correct { "correct" } else { "incorrect" },
            self.pools.fresh_count(),
            self.pools.mistaken_count(),
            self.pools.correct_count(),
        );

        self.pick_question();
        Ok(correct)
    }

    /// Choose the next current question, or clear it if the session has ended.
    pub fn pick_question(&mut self) {
        if self.has_ended() {
            self.current = None;
            return;
        }

        if self.mistakes == 0 {
            self.current = draw(&self.pools.fresh, &mut self.rng);
            return;
        }

        if self.mistakes == 1 {
            self.next_try = Some(self.roll_next_try());
        }

        let countdown = self.next_try.unwrap_or(0);
        if (countdown == 0 && self.pools.mistaken.len() > 0) || self.pools.fresh.len() == 0 {
            let next_try = self.roll_next_try();
            debug!("Revisiting a mistaken question; next revisit in {}", next_try);
            self.next_try = Some(next_try);
            self.current = draw(&self.pools.mistaken, &mut self.rng);
        } else {
            // With nothing left to revisit the countdown stays at zero, so the next
            // mistake comes back immediately.
            self.next_try = Some(countdown.saturating_sub(1));
            self.current = draw(&self.pools.fresh, &mut self.rng);
        }
    }

    pub fn has_ended(&self) -> bool {
        self.pools.remaining_count() == 0
    }

    pub fn current(&self) -> Option<&Question> {
        self.current.as_ref()
    }

    pub fn mistakes(&self) -> usize {
        self.mistakes
    }

    pub fn next_try(&self) -> Option<u32> {
        self.next_try
    }

    pub fn pools(&self) -> &QuestionSet {
        &self.pools
    }

    pub fn stage(&self, question: &Question) -> Option<Stage> {
        self.pools.stage(question)
    }

    pub fn fresh_count(&self) -> usize {
        self.pools.fresh_count()
    }

    pub fn mistaken_count(&self) -> usize {
        self.pools.mistaken_count()
    }

    pub fn correct_count(&self) -> usize {
        self.pools.correct_count()
    }

    pub fn remaining_count(&self) -> usize {
        self.pools.remaining_count()
    }

    pub fn question_count(&self) -> usize {
        self.pools.question_count()
    }

    fn roll_next_try(&mut self) -> u32 {
        self.rng.gen_range(MIN_NEXT_TRY..=MAX_NEXT_TRY)
    }
}


/// Pick a question uniformly at random from `pool`.
fn draw<R: Rng>(pool: &BTreeSet<Question>, rng: &mut R) -> Option<Question> {
    debug_assert!(pool.len() > 0, "drawing from an empty pool");
    pool.iter().choose(rng).cloned()
}
