//! Command implementations for the CLI binary

mod play;

pub use play::run_play;
