//! SoundGO - voice-driven desktop simulation
//!
//! Say the wake phrase ("Hey Go"), then a command. The command is parsed
//! against a small spoken grammar and executed on a simulated desktop: a
//! virtual cursor, a Win95-style shell with a few windows, and a transcript
//! of everything heard.
//!
//! ## Commands
//!
//! - `mouse left 150 pixels`, `mouse to x 400 y 300`
//! - `click`, `double click`, `right click`
//! - `type hello world`
//! - `press ctrl shift s`
//!
//! Numbers may be spoken ("one hundred fifty"). Recognized speech is fed in
//! as text, so a session can be driven from stdin or replayed from a script.

pub mod command;
pub mod config;
pub mod desktop;
pub mod domain;
pub mod history;
pub mod session;
pub mod transcript;
pub mod ui;
pub mod voice;

pub use domain::*;
