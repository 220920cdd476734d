//! Spoken command handling
//!
//! - `normalizer`: wake phrase stripping
//! - `numbers`: spoken and digit numbers
//! - `keys`: key names and modifier words
//! - `parser`: the command grammar
//! - `executor`: applying commands to the store and desktop

mod executor;
pub mod keys;
mod normalizer;
mod numbers;
mod parser;

pub use executor::{
    CommandExecutor, ExecutionResult, ExecutionStatus, describe_element, truncate,
};
pub use normalizer::{NormalizedCommandText, WakePhrase};
pub use numbers::parse_spoken_number;
pub use parser::CommandParser;
