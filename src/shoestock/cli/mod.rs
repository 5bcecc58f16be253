//! # CLI Layer
//!
//! One client of the shoestock library, and the only code that touches the
//! terminal: argument parsing (`setup`), dispatch (`commands`), the
//! interactive menu and prompts (`session`) and text output (`render`).
//!
//! Errors from an operation are printed where they happen in the menu and
//! the session continues. One-shot subcommands return them to `main`, which
//! prints them and exits with status 1.

pub mod commands;
pub mod render;
pub mod session;
pub mod setup;

pub use commands::run;
