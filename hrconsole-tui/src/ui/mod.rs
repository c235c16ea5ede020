//! Terminal drawing primitives: a cell buffer, text measuring, colors and
//! the crossterm-backed terminal.

mod buffer;
mod rect;
mod terminal;
pub mod text;
mod theme;

pub use buffer::{Buffer, Style};
pub use rect::Rect;
pub use terminal::Terminal;
pub use theme::Theme;
