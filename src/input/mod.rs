//! Input adapters for the fractal terminal.
//!
//! This module contains adapters that receive input from various sources
//! and translate them into session commands.

pub mod terminal;
