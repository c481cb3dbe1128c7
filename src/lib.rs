#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod cli;
pub mod config;
pub mod editor;
pub mod error;
pub mod render;
pub mod screen;
pub mod session;

pub use config::EditorOptions;
pub use editor::EditorState;
pub use session::{Outcome, Session, run};
