//! Code Block Copy WASM Module
//!
//! Copy-to-clipboard widgets for the documentation landing page: the async
//! clipboard service with a selection-based fallback, a per-widget
//! confirmation state with a cancellable revert timer, plus the page's
//! back-to-top and mobile menu toggles.

pub mod api;
pub mod clipboard;
pub mod config;
pub mod feedback;
pub mod models;
#[cfg(any(test, feature = "testing"))]
pub mod testing;
pub mod widgets;

// Re-export commonly used types
pub use clipboard::{ClipboardService, CopyOutcomeResolver, LegacyCopyCommand, SelectionService};
pub use config::{ConfigError, WidgetConfig};
pub use feedback::{FeedbackStateController, Scheduler, TaskHandle};
pub use models::{CopyError, CopyOutcome, CopyRequest, FailureReason, FeedbackState};
pub use widgets::{CodeBlockWidget, MenuToggle, ScrollVisibility, WidgetSnapshot};

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    #[cfg(feature = "console_log")]
    {
        if let Err(e) = console_log::init_with_level(log::Level::Debug) {
            crate::wasm_warn!("logger already initialized: {}", e);
        }
    }

    log::info!("Code block copy WASM module initialized");
}
