/**
 * Take a multiple-choice quiz from the command line.
 */
use std::io;
use std::io::{IsTerminal, Write};

use colored::*;
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;
use structopt::StructOpt;

use vsetest::common::{self, Command, CountOptions, Options, Result, TakeOptions};
use vsetest::iohelper::{LineSource, PipedInput, Terminal};
use vsetest::my_println;
use vsetest::parser;
use vsetest::quiz;
use vsetest::repetition::{Deck, QuestionSet};
use vsetest::ui::CmdUI;


fn main() {
    pretty_env_logger::init();
    let options = Options::from_args();

    if options.no_color {
        colored::control::set_override(false);
    }

    let result = match options.cmd {
        Command::Take(options) => {
            main_take(options)
        },
        Command::Count(options) => {
            main_count(options)
        },
    };

    if let Err(e) = result {
        if !common::is_broken_pipe(&e) {
            eprintln!("{}: {}", "Error".red(), e);
            ::std::process::exit(2);
        }
    }
}


/// The main function for the `take` subcommand.
fn main_take(options: TakeOptions) -> Result<()> {
    let questions = parser::parse(&options.path)?;

    let rng = match options.seed {
        Some(seed) => {
            info!("Seeding session with {}", seed);
            StdRng::seed_from_u64(seed)
        },
        None => StdRng::from_entropy(),
    };
    let mut deck = Deck::new(questions, rng)?;

    let stdin = io::stdin();
    if stdin.is_terminal() {
        run_session(&mut deck, &mut Terminal::new()?)
    } else {
        run_session(&mut deck, &mut PipedInput::new(stdin.lock()))
    }
}


fn run_session<L: LineSource>(deck: &mut Deck<StdRng>, input: &mut L) -> Result<()> {
    let mut ui = CmdUI::new(io::stdout());
    quiz::take(deck, input, &mut ui)?;
    Ok(())
}


/// The main function for the `count` subcommand.
fn main_count(options: CountOptions) -> Result<()> {
    let questions = parser::parse(&options.path)?;
    let pools = QuestionSet::new(questions);
    my_println!(io::stdout(), "{}", pools.question_count())
}
