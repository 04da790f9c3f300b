//! Terminal front end: line-based console input, a text board renderer with
//! coloured glyphs, and the app that wires them to the turn controller.

mod app;
pub mod board_widget;
pub mod console;
mod game_view;

pub use app::App;
pub use console::ConsoleInput;
pub use game_view::ConsoleView;
