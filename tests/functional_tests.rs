/**
 * Functional tests that run the compiled binary against the question banks in
 * tests/banks, feeding answers through standard input.
 */
use std::io::Write;
use std::process::{Child, ChildStdin, Command, Output, Stdio};

use regex::Regex;


#[test]
fn can_take_single_question_quiz() {
    let (output, stdout, _) = spawn_and_mock(&["take", "tests/banks/single"], &["0 2"]);

    assert!(output.status.success());
    assert_in_order(
        &stdout,
        &[
            "(1) Which of these numbers are prime?",
            "[0] 2",
            "[1] 4",
            "[2] 7",
            "[3] 9",
            "Correct!",
            "Fresh questions: 0",
            "Correct questions: 1",
            "Mistaken questions: 0",
            "Finished 1 answer in",
            "1 correct",
            "0 mistakes",
        ],
    );
    assert!(!stdout.contains("Next try in"));
}

#[test]
fn missed_question_comes_back() {
    let (output, stdout, _) = spawn_and_mock(&["take", "tests/banks/single"], &["0", "2 0"]);

    assert!(output.status.success());
    assert_in_order(
        &stdout,
        &[
            "(1) Which of these numbers are prime?",
            "Incorrect. The correct answers were 0 2.",
            "Fresh questions: 0",
            "Correct questions: 0",
            "Mistaken questions: 1",
            "Next try in:",
            "(2) Which of these numbers are prime?",
            "Correct!",
            "Mistaken questions: 0",
            "Finished 2 answers in",
            "1 correct",
            "1 mistake",
        ],
    );

    let re = Regex::new(r"Next try in: (\d+)").unwrap();
    for caps in re.captures_iter(&stdout) {
        let next_try: u32 = caps[1].parse().unwrap();
        assert!(next_try >= 7 && next_try <= 15, "countdown out of range: {}", next_try);
    }
}

#[test]
fn can_finish_quiz_with_several_questions() {
    let (output, stdout, _) = spawn_and_mock(
        &["take", "--seed", "42", "tests/banks/first"],
        &["0", "0", "0"],
    );

    assert!(output.status.success());
    assert_eq!(stdout.matches("Correct!").count(), 3);
    assert_in_order(
        &stdout,
        &["(1) ", "(2) ", "(3) ", "Fresh questions: 0", "Finished 3 answers in", "3 correct"],
    );
    for title in &[
        "Which planet is closest to the Sun?",
        "What is the chemical symbol for gold?",
        "Who wrote \"War and Peace\"?",
    ] {
        assert_eq!(stdout.matches(title).count(), 1);
    }
}

#[test]
fn same_seed_asks_questions_in_same_order() {
    let args = &["take", "--seed", "1234", "tests/banks/first"];
    let (_, first, _) = spawn_and_mock(args, &["0", "0", "0"]);
    let (_, second, _) = spawn_and_mock(args, &["0", "0", "0"]);

    let titles = |stdout: &str| -> Vec<String> {
        stdout
            .lines()
            .filter(|l| l.trim_start().starts_with('('))
            .map(|l| l.trim().to_string())
            .collect()
    };
    assert_eq!(titles(&first).len(), 3);
    assert_eq!(titles(&first), titles(&second));
}

#[test]
fn invalid_selection_is_reported_and_asked_again() {
    let (output, stdout, _) = spawn_and_mock(
        &["take", "tests/banks/single"],
        &["7", "two", "2 0 2"],
    );

    assert!(output.status.success());
    assert_in_order(
        &stdout,
        &[
            "(1) Which of these numbers are prime?",
            "Error: there is no answer 7 (choose from 0 to 3).",
            "Error: 'two' is not an answer number.",
            "Correct!",
            "Finished 1 answer in",
        ],
    );
    assert!(!stdout.contains("(2)"));
}

#[test]
fn blank_line_answers_question_with_no_correct_answer() {
    let (output, stdout, _) = spawn_and_mock(&["take", "tests/banks/trick"], &["1", ""]);

    assert!(output.status.success());
    assert_in_order(
        &stdout,
        &[
            "(1) Which of these numbers are even and odd at once?",
            "Incorrect. None of the answers was correct.",
            "(2) Which of these numbers are even and odd at once?",
            "Correct!",
            "Finished 2 answers in",
        ],
    );
}

#[test]
fn end_of_input_stops_quiz() {
    let (output, stdout, _) = spawn_and_mock(&["take", "tests/banks/first"], &["0"]);

    assert!(output.status.success());
    assert_in_order(
        &stdout,
        &["(1) ", "Correct!", "(2) ", "Stopped after 1 answer in", "1 correct", "2 remaining"],
    );
}

#[test]
fn can_count_distinct_questions() {
    let (output, stdout, _) = spawn_and_mock(&["count", "tests/banks/duplicates"], &[]);
    assert!(output.status.success());
    assert_eq!(stdout.trim(), "2");

    let (_, stdout, _) = spawn_and_mock(&["count", "tests/banks/geography"], &[]);
    assert_eq!(stdout.trim(), "3");
}

#[test]
fn missing_bank_is_an_error() {
    let (output, stdout, stderr) = spawn_and_mock(&["take", "tests/banks/does_not_exist"], &[]);

    assert_eq!(output.status.code(), Some(2));
    assert_eq!(stdout, "");
    assert!(stderr.starts_with("Error: cannot read question bank 'tests/banks/does_not_exist'"));
}

#[test]
fn empty_bank_is_an_error() {
    let (output, stdout, stderr) = spawn_and_mock(&["take", "tests/banks/empty"], &[]);

    assert_eq!(output.status.code(), Some(2));
    assert_eq!(stdout, "");
    assert_eq!(stderr.trim(), "Error: no questions found");
}


fn assert_in_order(mock_stdout: &str, data: &[&str]) {
    let mut last_pos = 0;
    for datum in data {
        if let Some(pos) = mock_stdout[last_pos..].find(datum) {
            // `pos` must be adjusted by an offset of `last_pos` because it is an index
            // in the slice `mock_stdout[last_pos..]` but we want it to be relative to
            // `mock_stdout`.
            last_pos = (pos + last_pos) + datum.len();
        } else {
            panic!("Missing: {:?}; Contents of stdout: {:?}", datum, mock_stdout);
        }
    }
}

fn spawn_and_mock(args: &[&str], input: &[&str]) -> (Output, String, String) {
    let mut child = spawn(args);

    {
        let stdin = child.stdin.as_mut().expect("Failed to open stdin");
        for line in input {
            stdin_write(stdin, &line);
        }
    }

    let result = child.wait_with_output().expect("Failed to read stdout");
    let stdout = String::from_utf8_lossy(&result.stdout).to_string();
    let stderr = String::from_utf8_lossy(&result.stderr).to_string();
    (result, stdout, stderr)
}

fn spawn(args: &[&str]) -> Child {
    Command::new(env!("CARGO_BIN_EXE_vsetest"))
        .arg("--no-color")
        .args(args)
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn child process")
}

fn stdin_write(stdin: &mut ChildStdin, line: &str) {
    stdin.write_all(line.as_bytes()).expect("Failed to write to stdin");
    stdin.write_all("\n".as_bytes()).expect("Failed to write to stdin");
}
