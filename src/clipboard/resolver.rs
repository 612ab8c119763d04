//! Dual-strategy copy orchestration
//!
//! Clipboard service first; on failure the selection fallback runs exactly
//! once with the same text and node. The returned outcome is always
//! well-formed, so callers never see an error.

use super::{
    ClipboardService, ClipboardServiceCopier, LegacyCopyCommand, SelectionFallbackCopier,
    SelectionService,
};
use crate::models::{CopyOutcome, CopyRequest};

pub struct CopyOutcomeResolver<C, S, L> {
    primary: ClipboardServiceCopier<C>,
    fallback: SelectionFallbackCopier<S, L>,
}

impl<C, S, L> CopyOutcomeResolver<C, S, L>
where
    C: ClipboardService,
    S: SelectionService,
    L: LegacyCopyCommand,
{
    pub fn new(clipboard: C, selection: S, command: L) -> Self {
        Self {
            primary: ClipboardServiceCopier::new(clipboard),
            fallback: SelectionFallbackCopier::new(selection, command),
        }
    }

    pub fn primary(&self) -> &ClipboardServiceCopier<C> {
        &self.primary
    }

    pub fn fallback(&self) -> &SelectionFallbackCopier<S, L> {
        &self.fallback
    }

    pub async fn copy(&self, request: &CopyRequest<S::Node>) -> CopyOutcome {
        let first = self.primary.attempt(&request.text).await;
        if first.is_success() {
            return first;
        }

        log::info!(
            "clipboard service failed ({:?}), trying selection fallback",
            first.failure_reason()
        );

        let outcome = self.fallback.attempt(&request.text, &request.source_node);
        match outcome.failure_reason() {
            Some(reason) => log::warn!("copy failed on both strategies: {:?}", reason),
            None => log::debug!("selection fallback succeeded"),
        }
        outcome
    }
}
