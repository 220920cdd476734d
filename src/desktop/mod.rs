//! Simulated desktop surface
//!
//! This module provides:
//! 1. `Store`: the application state container (cursor, transcript, status)
//! 2. `Desktop`: an in-memory element tree with hit-testing, focus and a
//!    synthetic event log, standing in for the browser DOM
//! 3. `Desktop::win95`: the default Win95-style shell layout

mod element;
mod events;
mod layout;
mod state;
mod surface;

pub use element::{Element, ElementHandle, ElementKind, Rect};
pub use events::{EventDetail, EventType, KeyboardEventInit, MouseEventInit, SyntheticEvent};
pub use state::{AppState, CursorState, Store};
pub use surface::Desktop;
