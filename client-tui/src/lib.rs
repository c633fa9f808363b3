pub mod config;
pub mod session_file;
pub mod state;
pub mod timer;
pub mod ui;

pub use config::Config;
pub use state::AppState;
pub use timer::ChessClock;
