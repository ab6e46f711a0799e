//! Interactive session controller.
//!
//! Sits between an input adapter that produces [`Command`]s and a presenter
//! that draws [`Frame`]s:
//! - **Input**: one command at a time, applied synchronously
//! - **Output**: [`FramePresenterPort`] receiving each finished frame
//! - **Core**: navigation and render actions from `core/`

pub mod command;
pub mod data;
pub mod ports;
mod session;

pub use command::Command;
pub use data::frame::{Frame, FrameCell};
pub use ports::presenter::FramePresenterPort;
pub use session::FractalSession;
