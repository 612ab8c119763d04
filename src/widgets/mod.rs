//! Page widgets built on the copy and feedback modules
//!
//! - `code_block`: the copy widget
//! - `scroll`: back-to-top visibility from the scroll offset
//! - `menu`: mobile menu toggle

pub mod code_block;
pub mod menu;
pub mod scroll;

pub use code_block::{control_label_for, CodeBlockWidget, WidgetSnapshot};
pub use menu::{MenuClick, MenuToggle};
pub use scroll::ScrollVisibility;
