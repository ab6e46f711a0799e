//! Terminal input adapter for interactive fractal exploration.
//!
//! Uses crossterm for raw-mode key and mouse capture and translates each
//! event into a session [`Command`](crate::controllers::session::Command).

pub mod commands;
pub mod events;
