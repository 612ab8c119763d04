//! Copy request/outcome types
//!
//! A `CopyRequest` is built once per user trigger and dropped when the
//! resulting `CopyOutcome` has been applied to the widget's feedback state.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Text to copy plus the node whose rendered content mirrors it
#[derive(Clone, Debug, PartialEq)]
pub struct CopyRequest<N> {
    pub text: String,
    /// Backing node, used only by the selection fallback
    pub source_node: N,
}

impl<N> CopyRequest<N> {
    pub fn new(text: impl Into<String>, source_node: N) -> Self {
        Self {
            text: text.into(),
            source_node,
        }
    }
}

/// Diagnostic reason attached to a failed copy (logged, never rendered)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FailureReason {
    /// Clipboard service missing or it rejected the write
    ClipboardUnavailable,
    /// Legacy command absent, returned false, or selection could not be made
    SelectionCopyFailed,
    Unknown,
}

/// Terminal result of a copy attempt
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", content = "reason", rename_all = "camelCase")]
pub enum CopyOutcome {
    Succeeded,
    Failed(FailureReason),
}

impl CopyOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, CopyOutcome::Succeeded)
    }

    /// Reason of a failed outcome, `None` on success
    pub fn failure_reason(&self) -> Option<FailureReason> {
        match self {
            CopyOutcome::Succeeded => None,
            CopyOutcome::Failed(reason) => Some(*reason),
        }
    }
}

impl From<Result<(), CopyError>> for CopyOutcome {
    fn from(result: Result<(), CopyError>) -> Self {
        match result {
            Ok(()) => CopyOutcome::Succeeded,
            Err(err) => CopyOutcome::Failed(err.reason()),
        }
    }
}

/// Errors raised by the copy capabilities before they are folded into an outcome
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CopyError {
    #[error("Clipboard service unavailable: {0}")]
    ClipboardUnavailable(String),

    #[error("Selection copy failed: {0}")]
    SelectionCopyFailed(String),

    #[error("Unknown copy error: {0}")]
    Unknown(String),
}

impl CopyError {
    pub fn reason(&self) -> FailureReason {
        match self {
            CopyError::ClipboardUnavailable(_) => FailureReason::ClipboardUnavailable,
            CopyError::SelectionCopyFailed(_) => FailureReason::SelectionCopyFailed,
            CopyError::Unknown(_) => FailureReason::Unknown,
        }
    }
}
