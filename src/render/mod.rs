pub mod renderer;
pub mod tui;

pub use renderer::{Renderer, caption, draw_cell};
pub use tui::Tui;
