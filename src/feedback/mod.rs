//! Feedback state controller
//!
//! Owns one widget's `FeedbackState` and its revert timer. Each success
//! cancels the outstanding revert, confirms, and schedules a fresh revert, so
//! the confirmation lasts a full delay from the latest success. Failures leave
//! the state alone.
//!
//! The revert callback only holds a weak reference to the state and the
//! success generation it was scheduled for; after teardown, or once a newer
//! success has replaced it, it does nothing.

pub mod scheduler;
pub mod timer;

pub use scheduler::{PendingRevertTask, Scheduler, TaskHandle};
pub use timer::WebTimer;

use crate::models::{CopyOutcome, FeedbackState};
use std::cell::RefCell;
use std::rc::{Rc, Weak};

/// Re-render hook, called after every state change
pub type FeedbackListener = Rc<dyn Fn(FeedbackState)>;

struct FeedbackCell<H: TaskHandle> {
    state: FeedbackState,
    pending: Option<PendingRevertTask<H>>,
    /// True between scheduling a revert and it firing or being cancelled
    revert_due: bool,
    /// Number of successes seen; revert callbacks compare against it
    generation: u64,
    /// Set by `teardown`; later outcomes are dropped
    torn_down: bool,
}

pub struct FeedbackStateController<T: Scheduler> {
    scheduler: T,
    delay_ms: u32,
    cell: Rc<RefCell<FeedbackCell<T::Handle>>>,
    listener: Option<FeedbackListener>,
}

impl<T> FeedbackStateController<T>
where
    T: Scheduler,
    T::Handle: 'static,
{
    pub fn new(scheduler: T, delay_ms: u32) -> Self {
        Self {
            scheduler,
            delay_ms,
            cell: Rc::new(RefCell::new(FeedbackCell {
                state: FeedbackState::Idle,
                pending: None,
                revert_due: false,
                generation: 0,
                torn_down: false,
            })),
            listener: None,
        }
    }

    pub fn with_listener(mut self, listener: impl Fn(FeedbackState) + 'static) -> Self {
        self.listener = Some(Rc::new(listener));
        self
    }

    pub fn state(&self) -> FeedbackState {
        self.cell.borrow().state
    }

    pub fn delay_ms(&self) -> u32 {
        self.delay_ms
    }

    pub fn scheduler(&self) -> &T {
        &self.scheduler
    }

    pub fn has_pending_revert(&self) -> bool {
        self.cell.borrow().revert_due
    }

    pub fn is_torn_down(&self) -> bool {
        self.cell.borrow().torn_down
    }

    pub fn on_outcome(&self, outcome: &CopyOutcome) {
        if self.cell.borrow().torn_down {
            log::debug!("ignoring {:?} for a torn down widget", outcome);
            return;
        }

        if let CopyOutcome::Failed(reason) = outcome {
            log::warn!("copy failed ({:?}); feedback state left unchanged", reason);
            return;
        }

        let (previous, generation) = {
            let mut cell = self.cell.borrow_mut();
            if let Some(task) = cell.pending.take() {
                log::debug!("cancelling revert for success #{}", task.generation());
                task.cancel();
            }
            cell.generation += 1;
            let previous = std::mem::replace(&mut cell.state, FeedbackState::Confirmed);
            (previous, cell.generation)
        };

        let weak = Rc::downgrade(&self.cell);
        let listener = self.listener.clone();
        let handle = self.scheduler.schedule(
            self.delay_ms,
            Box::new(move || revert(weak, generation, listener)),
        );

        {
            let mut cell = self.cell.borrow_mut();
            // A scheduler may run a zero-delay callback inline
            cell.revert_due = cell.generation == generation && cell.state.is_confirmed();
            cell.pending = Some(PendingRevertTask::new(handle, generation));
        }

        if previous != FeedbackState::Confirmed {
            self.notify(FeedbackState::Confirmed);
        }
    }

    /// Cancel the pending revert and stop reacting to outcomes; called when the widget unmounts
    pub fn teardown(&self) {
        let mut cell = self.cell.borrow_mut();
        if let Some(task) = cell.pending.take() {
            task.cancel();
        }
        cell.revert_due = false;
        cell.torn_down = true;
    }

    fn notify(&self, state: FeedbackState) {
        if let Some(listener) = &self.listener {
            listener(state);
        }
    }
}

impl<T: Scheduler> Drop for FeedbackStateController<T> {
    fn drop(&mut self) {
        if let Ok(mut cell) = self.cell.try_borrow_mut() {
            if let Some(task) = cell.pending.take() {
                task.cancel();
            }
        }
    }
}

fn revert<H: TaskHandle>(
    cell: Weak<RefCell<FeedbackCell<H>>>,
    generation: u64,
    listener: Option<FeedbackListener>,
) {
    let Some(cell) = cell.upgrade() else {
        return;
    };

    {
        let mut cell = cell.borrow_mut();
        if cell.generation != generation || !cell.state.is_confirmed() {
            return;
        }
        // The spent task stays in `pending` until the next success replaces it
        cell.state = FeedbackState::Idle;
        cell.revert_due = false;
    }

    if let Some(listener) = listener {
        listener(FeedbackState::Idle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FailureReason;
    use crate::testing::ManualScheduler;

    fn controller(scheduler: &ManualScheduler) -> FeedbackStateController<ManualScheduler> {
        FeedbackStateController::new(scheduler.clone(), 1200)
    }

    #[test]
    fn test_starts_idle() {
        let scheduler = ManualScheduler::new();
        let controller = controller(&scheduler);
        assert_eq!(controller.state(), FeedbackState::Idle);
        assert!(!controller.has_pending_revert());
    }

    #[test]
    fn test_success_confirms_and_schedules_one_revert() {
        let scheduler = ManualScheduler::new();
        let controller = controller(&scheduler);

        controller.on_outcome(&CopyOutcome::Succeeded);

        assert_eq!(controller.state(), FeedbackState::Confirmed);
        assert_eq!(scheduler.scheduled_count(), 1);
        assert_eq!(scheduler.pending_count(), 1);
        assert!(controller.has_pending_revert());

        scheduler.advance(1199);
        assert_eq!(controller.state(), FeedbackState::Confirmed);

        scheduler.advance(1);
        assert_eq!(controller.state(), FeedbackState::Idle);
        assert!(!controller.has_pending_revert());
    }

    #[test]
    fn test_failure_leaves_state_untouched() {
        let scheduler = ManualScheduler::new();
        let controller = controller(&scheduler);

        controller.on_outcome(&CopyOutcome::Failed(FailureReason::SelectionCopyFailed));
        assert_eq!(controller.state(), FeedbackState::Idle);
        assert_eq!(scheduler.scheduled_count(), 0);

        controller.on_outcome(&CopyOutcome::Succeeded);
        controller.on_outcome(&CopyOutcome::Failed(FailureReason::Unknown));
        assert_eq!(controller.state(), FeedbackState::Confirmed);
        assert_eq!(scheduler.scheduled_count(), 1);
    }

    #[test]
    fn test_second_success_restarts_window() {
        let scheduler = ManualScheduler::new();
        let transitions = Rc::new(RefCell::new(Vec::new()));
        let seen = transitions.clone();
        let controller = controller(&scheduler).with_listener(move |state| seen.borrow_mut().push(state));

        controller.on_outcome(&CopyOutcome::Succeeded);
        scheduler.advance(500);
        controller.on_outcome(&CopyOutcome::Succeeded);

        assert_eq!(scheduler.cancelled_count(), 1);
        assert_eq!(scheduler.pending_count(), 1);

        // 1200ms after the first success: still confirmed
        scheduler.advance(700);
        assert_eq!(controller.state(), FeedbackState::Confirmed);

        scheduler.advance(499);
        assert_eq!(controller.state(), FeedbackState::Confirmed);

        scheduler.advance(1);
        assert_eq!(controller.state(), FeedbackState::Idle);
        assert_eq!(
            *transitions.borrow(),
            vec![FeedbackState::Confirmed, FeedbackState::Idle]
        );
    }

    #[test]
    fn test_teardown_cancels_pending_revert() {
        let scheduler = ManualScheduler::new();
        let controller = controller(&scheduler);

        controller.on_outcome(&CopyOutcome::Succeeded);
        controller.teardown();

        assert_eq!(scheduler.pending_count(), 0);
        assert!(!controller.has_pending_revert());
        scheduler.advance(5000);
        assert_eq!(controller.state(), FeedbackState::Confirmed);
    }

    #[test]
    fn test_outcome_after_teardown_is_ignored() {
        let scheduler = ManualScheduler::new();
        let renders = Rc::new(RefCell::new(Vec::new()));
        let seen = renders.clone();
        let controller = controller(&scheduler).with_listener(move |state| seen.borrow_mut().push(state));

        controller.teardown();
        controller.on_outcome(&CopyOutcome::Succeeded);

        assert!(controller.is_torn_down());
        assert_eq!(controller.state(), FeedbackState::Idle);
        assert_eq!(scheduler.scheduled_count(), 0);
        assert!(renders.borrow().is_empty());
    }

    #[test]
    fn test_drop_cancels_pending_revert() {
        let scheduler = ManualScheduler::new();
        {
            let controller = controller(&scheduler);
            controller.on_outcome(&CopyOutcome::Succeeded);
            assert_eq!(scheduler.pending_count(), 1);
        }
        assert_eq!(scheduler.pending_count(), 0);
        assert_eq!(scheduler.advance(5000), 0);
    }

    #[test]
    fn test_instances_do_not_share_state() {
        let scheduler = ManualScheduler::new();
        let first = controller(&scheduler);
        let second = controller(&scheduler);

        first.on_outcome(&CopyOutcome::Succeeded);
        assert_eq!(first.state(), FeedbackState::Confirmed);
        assert_eq!(second.state(), FeedbackState::Idle);

        scheduler.advance(600);
        second.on_outcome(&CopyOutcome::Succeeded);
        scheduler.advance(600);
        assert_eq!(first.state(), FeedbackState::Idle);
        assert_eq!(second.state(), FeedbackState::Confirmed);
    }
}
