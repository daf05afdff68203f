//! # noop
//!
//! A calculator with no operators. Every digit and Roman numeral letter in the
//! input is added; a single period makes the digits to its left negative.

pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod reducer;
pub mod repl;

pub use error::{AddError, Error, Result};
pub use reducer::{Reducer, add};
