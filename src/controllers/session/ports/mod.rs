//! Port definitions for the session controller.
//!
//! Traits the controller drives without knowing what is on the other side
//! (a terminal, a test buffer).

pub mod presenter;
