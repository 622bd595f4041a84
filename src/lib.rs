//! restyle library
//!
//! Hosts the headless front end; the TUI lives in `restyle-tui`.

pub mod headless;

pub use headless::runner::run_headless;
