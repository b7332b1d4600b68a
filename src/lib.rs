/**
 * Drill a multiple-choice question bank until every question has been answered
 * correctly, with missed questions coming back at random intervals.
 */
#[macro_use]
pub mod iohelper;
pub mod common;
pub mod parser;
pub mod quiz;
pub mod repetition;
pub mod ui;
