//! Code block widget: language label, preformatted text and a copy control
//!
//! Each widget owns its resolver and its feedback controller; nothing is
//! shared between instances.

use crate::clipboard::{ClipboardService, CopyOutcomeResolver, LegacyCopyCommand, SelectionService};
use crate::config::WidgetConfig;
use crate::feedback::{FeedbackStateController, Scheduler};
use crate::models::{CopyOutcome, CopyRequest, FeedbackState};
use serde::{Deserialize, Serialize};

/// Render data for one code block
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WidgetSnapshot {
    pub label: String,
    pub text: String,
    pub control_label: String,
    pub state: FeedbackState,
}

/// Pick the copy control text for a feedback state
pub fn control_label_for<'a>(idle: &'a str, confirmed: &'a str, state: FeedbackState) -> &'a str {
    match state {
        FeedbackState::Idle => idle,
        FeedbackState::Confirmed => confirmed,
    }
}

pub struct CodeBlockWidget<C, S, L, T>
where
    S: SelectionService,
    T: Scheduler,
{
    text: String,
    label: String,
    source_node: S::Node,
    idle_label: String,
    confirmed_label: String,
    resolver: CopyOutcomeResolver<C, S, L>,
    feedback: FeedbackStateController<T>,
}

impl<C, S, L, T> CodeBlockWidget<C, S, L, T>
where
    C: ClipboardService,
    S: SelectionService,
    S::Node: Clone,
    L: LegacyCopyCommand,
    T: Scheduler,
    T::Handle: 'static,
{
    pub fn new(
        text: impl Into<String>,
        label: impl Into<String>,
        source_node: S::Node,
        resolver: CopyOutcomeResolver<C, S, L>,
        feedback: FeedbackStateController<T>,
        config: &WidgetConfig,
    ) -> Self {
        Self {
            text: text.into(),
            label: label.into(),
            source_node,
            idle_label: config.idle_label.clone(),
            confirmed_label: config.confirmed_label.clone(),
            resolver,
            feedback,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn state(&self) -> FeedbackState {
        self.feedback.state()
    }

    pub fn resolver(&self) -> &CopyOutcomeResolver<C, S, L> {
        &self.resolver
    }

    pub fn feedback(&self) -> &FeedbackStateController<T> {
        &self.feedback
    }

    /// Text of the copy control for the current feedback state
    pub fn control_label(&self) -> &str {
        control_label_for(&self.idle_label, &self.confirmed_label, self.state())
    }

    /// Copy the held text and apply the outcome to the feedback state
    pub async fn trigger(&self) -> CopyOutcome {
        let request = CopyRequest::new(self.text.clone(), self.source_node.clone());
        let outcome = self.resolver.copy(&request).await;
        self.feedback.on_outcome(&outcome);
        outcome
    }

    pub fn snapshot(&self) -> WidgetSnapshot {
        WidgetSnapshot {
            label: self.label.clone(),
            text: self.text.clone(),
            control_label: self.control_label().to_string(),
            state: self.state(),
        }
    }

    /// Cancel any pending revert before the widget goes away
    pub fn unmount(self) {
        log::debug!("unmounting code block `{}`", self.label);
        self.feedback.teardown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FailureReason;
    use crate::testing::{
        ManualScheduler, RecordingClipboard, RecordingCopyCommand, RecordingSelection,
    };
    use futures::executor::block_on;

    type TestWidget = CodeBlockWidget<
        RecordingClipboard,
        RecordingSelection<&'static str>,
        RecordingCopyCommand,
        ManualScheduler,
    >;

    fn widget(clipboard: RecordingClipboard, command: RecordingCopyCommand, scheduler: &ManualScheduler) -> TestWidget {
        let config = WidgetConfig::default();
        CodeBlockWidget::new(
            "pip install -r requirements.txt",
            "bash",
            "pre",
            CopyOutcomeResolver::new(clipboard, RecordingSelection::new(), command),
            FeedbackStateController::new(scheduler.clone(), config.revert_delay_ms),
            &config,
        )
    }

    #[test]
    fn test_idle_snapshot() {
        let scheduler = ManualScheduler::new();
        let widget = widget(RecordingClipboard::accepting(), RecordingCopyCommand::succeeding(), &scheduler);

        assert_eq!(
            widget.snapshot(),
            WidgetSnapshot {
                label: "bash".to_string(),
                text: "pip install -r requirements.txt".to_string(),
                control_label: "Copiar".to_string(),
                state: FeedbackState::Idle,
            }
        );
    }

    #[test]
    fn test_trigger_shows_confirmation_then_reverts() {
        let scheduler = ManualScheduler::new();
        let clipboard = RecordingClipboard::accepting();
        let widget = widget(clipboard.clone(), RecordingCopyCommand::succeeding(), &scheduler);

        assert_eq!(block_on(widget.trigger()), CopyOutcome::Succeeded);
        assert_eq!(widget.control_label(), "Copiado");
        assert_eq!(clipboard.writes(), vec!["pip install -r requirements.txt".to_string()]);

        scheduler.advance(1200);
        assert_eq!(widget.control_label(), "Copiar");
    }

    #[test]
    fn test_failed_trigger_keeps_default_label() {
        let scheduler = ManualScheduler::new();
        let widget = widget(RecordingClipboard::rejecting(), RecordingCopyCommand::returning_false(), &scheduler);

        assert_eq!(
            block_on(widget.trigger()),
            CopyOutcome::Failed(FailureReason::SelectionCopyFailed)
        );
        assert_eq!(widget.control_label(), "Copiar");
        assert_eq!(scheduler.scheduled_count(), 0);
    }

    #[test]
    fn test_unmount_cancels_revert() {
        let scheduler = ManualScheduler::new();
        let widget = widget(RecordingClipboard::accepting(), RecordingCopyCommand::succeeding(), &scheduler);

        block_on(widget.trigger());
        widget.unmount();

        assert_eq!(scheduler.pending_count(), 0);
        assert_eq!(scheduler.advance(1200), 0);
    }
}
