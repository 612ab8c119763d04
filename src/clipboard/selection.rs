//! Fallback copy through the document selection and the legacy copy command
//!
//! Used only after the clipboard service failed. The selection is cleared
//! after every attempt, whatever the command returned.

use super::{LegacyCopyCommand, SelectionService};
use crate::models::{CopyError, CopyOutcome};

pub struct SelectionFallbackCopier<S, L> {
    selection: S,
    command: L,
}

impl<S, L> SelectionFallbackCopier<S, L>
where
    S: SelectionService,
    L: LegacyCopyCommand,
{
    pub fn new(selection: S, command: L) -> Self {
        Self { selection, command }
    }

    pub fn selection(&self) -> &S {
        &self.selection
    }

    pub fn command(&self) -> &L {
        &self.command
    }

    /// Select `source_node`, run the legacy command, clear the selection
    pub fn attempt(&self, text: &str, source_node: &S::Node) -> CopyOutcome {
        let result = self.select_and_copy(source_node);
        self.selection.clear();

        match result {
            Ok(()) => {
                log::debug!("legacy copy command copied {} bytes", text.len());
                CopyOutcome::Succeeded
            }
            Err(err) => {
                log::debug!("legacy copy command failed: {}", err);
                CopyOutcome::Failed(err.reason())
            }
        }
    }

    fn select_and_copy(&self, source_node: &S::Node) -> Result<(), CopyError> {
        self.selection.select_node_contents(source_node)?;

        if self.command.copy()? {
            Ok(())
        } else {
            Err(CopyError::SelectionCopyFailed(
                "copy command reported failure".to_string(),
            ))
        }
    }
}
