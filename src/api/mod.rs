//! Code block copy WASM API
//!
//! JavaScript-facing classes for the landing page widgets.
//!
//! # Module Structure
//!
//! - `helpers`: console logging macros, JS error conversion, serialization, DOM listeners
//! - `code_block`: `CodeBlock`, the copy widget
//! - `back_to_top`: `BackToTop`, scroll-triggered button
//! - `menu`: `MobileMenu`, menu toggle

pub mod helpers;
pub mod back_to_top;
pub mod code_block;
pub mod menu;

pub use back_to_top::BackToTop;
pub use code_block::CodeBlockHandle;
pub use menu::MobileMenu;
