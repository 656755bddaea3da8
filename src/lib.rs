//! `rq` shows a text one word at a time in the middle of the terminal
//! (rapid serial visual presentation).
//!
//! - [`document`] splits the text into words and flags repeats.
//! - [`ui`] runs the interactive display session.
//! - [`config`] and [`cli`] hold the word rate and command-line surface.

pub mod cli;
pub mod config;
pub mod document;
pub mod logging;
pub mod ui;
