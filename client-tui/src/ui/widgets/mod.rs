pub mod board;
pub mod status_bar;

pub use board::BoardWidget;
pub use status_bar::StatusBar;
