/**
 * Parser for question banks in the plain-text format.
 *
 * A question is a title line followed by its answer lines. Answer lines begin with `+`
 * for a correct answer or `-` for an incorrect one:
 *
 *   What is the capital of Mongolia?
 *   + Ulaanbaatar
 *   - Astana
 *   - Bishkek
 *
 * Blank lines are ignored, so questions may be separated by any number of them.
 */
use std::fs::File;
use std::io::BufRead;
use std::io::BufReader;
use std::path::Path;

use log::{info, warn};
use unicode_normalization::UnicodeNormalization;

use super::common::{QuizError, Result};
use super::quiz::{Answer, Question};


/// Read and parse the question bank at `path`.
pub fn parse(path: &Path) -> Result<Vec<Question>> {
    let unreadable = |source| QuizError::InputUnreadable { path: path.to_path_buf(), source };

    let reader = BufReader::new(File::open(path).map_err(unreadable)?);
    let mut lines = Vec::new();
    for line in reader.lines() {
        lines.push(line.map_err(unreadable)?);
    }

    let questions = parse_lines(&lines);
    if questions.len() == 0 {
        return Err(QuizError::EmptyQuestionBank);
    }
    info!("Loaded {} question(s) from {}", questions.len(), path.to_string_lossy());
    Ok(questions)
}


/// Parse the lines of a question bank.
///
/// Never fails: any line that is not an answer line starts a new question, and answer
/// lines that appear before the first title are dropped.
pub fn parse_lines<S: AsRef<str>>(lines: &[S]) -> Vec<Question> {
    let mut questions = Vec::new();
    let mut title = String::new();
    let mut answers = Vec::new();

    for line in lines.iter() {
        let line = line.as_ref();
        if line.trim().len() == 0 {
            continue;
        }

        match read_line(line) {
            BankLine::Title(text) => {
                questions.push(finish(title, answers));
                title = text;
                answers = Vec::new();
            },
            BankLine::Answer(answer) => {
                answers.push(answer);
            },
        }
    }
    questions.push(finish(title, answers));

    // The first entry is whatever came before the first title line.
    questions.remove(0);
    questions
}


fn finish(title: String, answers: Vec<Answer>) -> Question {
    if answers.len() == 0 && title.len() > 0 {
        warn!("Question has no answers: {}", title);
    }
    Question { title, answers }
}


fn read_line(line: &str) -> BankLine {
    let mut chars = line.chars();
    match chars.next() {
        Some(marker) if marker == '+' || marker == '-' => {
            BankLine::Answer(Answer {
                text: normalize(chars.as_str()),
                correct: marker == '+',
            })
        },
        _ => {
            BankLine::Title(normalize(line))
        },
    }
}


fn normalize(text: &str) -> String {
    text.trim().nfc().collect::<String>()
}


enum BankLine {
    Title(String),
    Answer(Answer),
}
