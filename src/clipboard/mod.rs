//! Clipboard copy strategies
//!
//! The platform collaborators are traits so the browser implementations in
//! `web` can be swapped for the recording doubles in `crate::testing`:
//!
//! - `ClipboardService`: asynchronous `writeText`
//! - `SelectionService`: range over a node, install as selection, clear
//! - `LegacyCopyCommand`: synchronous copy of the active selection
//!
//! `CopyOutcomeResolver` tries the clipboard service first and falls back to
//! the selection-based copy at most once.

pub mod resolver;
pub mod selection;
pub mod service;
pub mod web;

pub use resolver::CopyOutcomeResolver;
pub use selection::SelectionFallbackCopier;
pub use service::ClipboardServiceCopier;

use crate::models::CopyError;

/// Asynchronous platform clipboard write
#[allow(async_fn_in_trait)]
pub trait ClipboardService {
    async fn write_text(&self, text: &str) -> Result<(), CopyError>;
}

/// Document selection/range manipulation
pub trait SelectionService {
    type Node;

    /// Replace the active selection with a range spanning all of `node`'s contents
    fn select_node_contents(&self, node: &Self::Node) -> Result<(), CopyError>;

    /// Remove every range from the active selection
    fn clear(&self);
}

/// Legacy synchronous copy of the active selection
pub trait LegacyCopyCommand {
    /// `Ok(false)` when the command ran but reported failure
    fn copy(&self) -> Result<bool, CopyError>;
}
