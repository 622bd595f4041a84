//! # restyle-app - Application State and Orchestration
//!
//! TEA (The Elm Architecture) layer for restyle. Owns the application state,
//! resolves prompts into style changes, and drives the remote layout service
//! through background tasks.
//!
//! ## Public API
//!
//! ### Engine
//! - [`Engine`] - Owns state, message channel, client, and event broadcaster
//! - [`EngineEvent`] - Domain events broadcast after each processing cycle
//!
//! ### TEA Pattern
//! - [`AppState`] - The Model
//! - [`Message`] - Every input the update function handles
//! - [`handler::update()`] - The update function
//! - [`UpdateAction`] - Side effects for the event loop
//!
//! ### Resolution
//! - [`pipeline::resolve_prompt()`] - Reset, pattern, paste, or remote
//! - [`patterns`] - Literal phrase table and quick actions
//!
//! ### Configuration
//! - [`config::Settings`] - `.restyle/config.toml`
//! - [`config::load_settings()`] - Load with fallback to defaults
//!
//! ### Runtime
//! - [`signals::spawn_signal_handler()`] - SIGINT/SIGTERM to `Message::Quit`

pub mod actions;
pub mod config;
pub mod engine;
pub mod engine_event;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod patterns;
pub mod pipeline;
pub mod process;
pub mod signals;
pub mod state;

pub use engine::Engine;
pub use engine_event::EngineEvent;
pub use handler::{UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::{InputEdit, Message};
pub use pipeline::{DiscardReason, InstructionSource, Resolution};
pub use state::{AppPhase, AppState, InputFocus, Outcome, TextInput};
