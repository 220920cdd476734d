//! CLI command implementations

pub mod grammar;
pub mod history;
pub mod init;
pub mod listen;
pub mod parse;
mod render;
pub mod replay;
