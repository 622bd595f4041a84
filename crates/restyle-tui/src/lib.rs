//! restyle-tui - Terminal UI for restyle
//!
//! This crate provides the ratatui-based terminal interface. It creates an Engine
//! from restyle-app and adds the form preview, prompt input, and event polling.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

pub use runner::run;
