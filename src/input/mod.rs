pub mod buffer;
pub mod handler;

pub use buffer::InputBuffer;
pub use handler::{InputHandler, KeyAction};
