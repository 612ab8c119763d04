//! Preferred copy path through the asynchronous clipboard service

use super::ClipboardService;
use crate::models::CopyOutcome;

pub struct ClipboardServiceCopier<C> {
    service: C,
}

impl<C: ClipboardService> ClipboardServiceCopier<C> {
    pub fn new(service: C) -> Self {
        Self { service }
    }

    pub fn service(&self) -> &C {
        &self.service
    }

    /// Write `text` to the clipboard; a rejection becomes a `Failed` outcome
    pub async fn attempt(&self, text: &str) -> CopyOutcome {
        match self.service.write_text(text).await {
            Ok(()) => {
                log::debug!("clipboard service accepted {} bytes", text.len());
                CopyOutcome::Succeeded
            }
            Err(err) => {
                log::debug!("clipboard service rejected write: {}", err);
                CopyOutcome::Failed(err.reason())
            }
        }
    }
}
