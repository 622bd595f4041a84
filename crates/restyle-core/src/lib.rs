//! # restyle-core - Core Domain Types
//!
//! Foundation crate for restyle. Provides the style model of the form screen,
//! the partial instruction document and its parser, the color resolver, the
//! merge engine, error handling, and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, serde_json, thiserror, the tracing stack, dirs).
//!
//! ## Public API
//!
//! ### Colors (`color`)
//! - [`Color`] - Normalized RGBA color, serialized as `#RRGGBB`
//! - [`resolve_color()`] - Hex or named color to [`Color`], `None` when unresolved
//!
//! ### Instructions (`instruction`, `schema`)
//! - [`PartialInstruction`] - Optional-everywhere style change document
//! - [`PartialInstruction::parse()`] - Strict document parser
//! - [`layout_instruction_schema()`] - JSON Schema sent to the remote service
//!
//! ### Style State (`style`, `merge`)
//! - [`StyleState`] - Every renderable attribute of the form screen
//! - [`merge()`] - Apply an instruction, returning a [`MergeReport`]
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Error enum for I/O, documents, configuration, and the terminal
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use restyle_core::prelude::*;
//! ```

pub mod color;
pub mod error;
pub mod instruction;
pub mod logging;
pub mod merge;
pub mod schema;
pub mod style;

/// Prelude for common imports used throughout all restyle crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use color::{resolve as resolve_color, Color, UnresolvedColor};
pub use error::{Error, Result, ResultExt};
pub use instruction::{
    BackgroundInstruction, ButtonInstruction, FieldsInstruction, LayoutInstruction,
    PartialInstruction, TitleInstruction,
};
pub use merge::{merge, MergeReport, SkippedLeaf};
pub use schema::{layout_instruction_schema, SCHEMA_NAME};
pub use style::{ButtonStyle, FieldStyle, FormEntries, StyleState, TitleStyle, BUTTON_LABEL};
