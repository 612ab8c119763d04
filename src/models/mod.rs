//! Models module for the code block copy widget
//!
//! Plain data shared by the copy strategies, the feedback controller
//! and the JavaScript-facing API.

pub mod copy;
pub mod feedback;

// Re-export commonly used types
pub use copy::*;
pub use feedback::FeedbackState;
