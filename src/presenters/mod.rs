//! Presenters drawing finished frames.

pub mod terminal;
