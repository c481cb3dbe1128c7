//! Text model and editing operations.
//!
//! Lines are stored as their wrapped rows. Every edit rewrites the affected
//! row, rewraps the owning line and rebuilds the flat row index before the
//! cursor is placed again.

mod cursor;
pub mod document;
mod edit;
pub mod index;
mod state;
#[cfg(test)]
mod tests;
pub mod word_jump;
pub mod wrap;

pub use cursor::Cursor;
pub use document::{Document, LogicalLine};
pub use edit::LineBreak;
pub use index::{BufferIndex, RowEntry};
pub use state::{EditorState, ModeFlags, Viewport};
pub use wrap::wrap;
