//! Per-widget feedback state

use serde::{Deserialize, Serialize};

/// Whether the copy control currently shows its confirmation label
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FeedbackState {
    #[default]
    Idle,
    Confirmed,
}

impl FeedbackState {
    pub fn is_confirmed(&self) -> bool {
        matches!(self, FeedbackState::Confirmed)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FeedbackState::Idle => "idle",
            FeedbackState::Confirmed => "confirmed",
        }
    }
}
