//! Slice editing: input state machine and clipboard

pub mod clipboard;
pub mod session;

pub use clipboard::ClipboardBuffer;
pub use session::{EditSession, EditState, PointerEvent};
