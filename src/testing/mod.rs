//! Recording test doubles for the copy capabilities and the scheduler
//!
//! Every double is a cheap `Clone` sharing its log, so a test can hand one
//! copy to a widget and keep another to inspect what happened.

use crate::clipboard::{ClipboardService, LegacyCopyCommand, SelectionService};
use crate::feedback::{Scheduler, TaskHandle};
use crate::models::CopyError;
use std::cell::RefCell;
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;
use std::task::{Context, Poll, Waker};

// ============================================================================
// Clipboard service
// ============================================================================

#[derive(Clone, Debug)]
enum ClipboardBehavior {
    Accept,
    Reject(CopyError),
    /// Each write waits until the test resolves it through a `ClipboardGate`
    Gated,
}

#[derive(Default)]
struct GateSlot {
    result: Option<Result<(), CopyError>>,
    waker: Option<Waker>,
}

struct ClipboardLog {
    behavior: ClipboardBehavior,
    writes: Vec<String>,
    gates: Vec<Rc<RefCell<GateSlot>>>,
}

#[derive(Clone)]
pub struct RecordingClipboard {
    log: Rc<RefCell<ClipboardLog>>,
}

impl RecordingClipboard {
    fn with_behavior(behavior: ClipboardBehavior) -> Self {
        Self {
            log: Rc::new(RefCell::new(ClipboardLog {
                behavior,
                writes: Vec::new(),
                gates: Vec::new(),
            })),
        }
    }

    pub fn accepting() -> Self {
        Self::with_behavior(ClipboardBehavior::Accept)
    }

    /// Rejects like a denied permission prompt
    pub fn rejecting() -> Self {
        Self::failing_with(CopyError::ClipboardUnavailable("NotAllowedError".to_string()))
    }

    pub fn failing_with(error: CopyError) -> Self {
        Self::with_behavior(ClipboardBehavior::Reject(error))
    }

    /// Writes stay pending until resolved through the returned gate
    pub fn gated() -> (Self, ClipboardGate) {
        let clipboard = Self::with_behavior(ClipboardBehavior::Gated);
        let gate = ClipboardGate {
            log: clipboard.log.clone(),
        };
        (clipboard, gate)
    }

    pub fn writes(&self) -> Vec<String> {
        self.log.borrow().writes.clone()
    }

    pub fn calls(&self) -> usize {
        self.log.borrow().writes.len()
    }
}

impl ClipboardService for RecordingClipboard {
    async fn write_text(&self, text: &str) -> Result<(), CopyError> {
        let behavior = {
            let mut log = self.log.borrow_mut();
            log.writes.push(text.to_string());
            log.behavior.clone()
        };

        match behavior {
            ClipboardBehavior::Accept => Ok(()),
            ClipboardBehavior::Reject(error) => Err(error),
            ClipboardBehavior::Gated => {
                let slot = Rc::new(RefCell::new(GateSlot::default()));
                self.log.borrow_mut().gates.push(slot.clone());
                GatedWrite { slot }.await
            }
        }
    }
}

/// Resolves pending writes of a gated `RecordingClipboard`, oldest first
pub struct ClipboardGate {
    log: Rc<RefCell<ClipboardLog>>,
}

impl ClipboardGate {
    pub fn pending(&self) -> usize {
        self.log
            .borrow()
            .gates
            .iter()
            .filter(|slot| slot.borrow().result.is_none())
            .count()
    }

    /// Settle the oldest unsettled write; false when none is pending
    pub fn resolve(&self, result: Result<(), CopyError>) -> bool {
        let slot = self
            .log
            .borrow()
            .gates
            .iter()
            .find(|slot| slot.borrow().result.is_none())
            .cloned();

        let Some(slot) = slot else {
            return false;
        };

        let waker = {
            let mut slot = slot.borrow_mut();
            slot.result = Some(result);
            slot.waker.take()
        };
        if let Some(waker) = waker {
            waker.wake();
        }
        true
    }
}

struct GatedWrite {
    slot: Rc<RefCell<GateSlot>>,
}

impl Future for GatedWrite {
    type Output = Result<(), CopyError>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let mut slot = self.slot.borrow_mut();
        match slot.result.clone() {
            Some(result) => Poll::Ready(result),
            None => {
                slot.waker = Some(cx.waker().clone());
                Poll::Pending
            }
        }
    }
}

// ============================================================================
// Selection service
// ============================================================================

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SelectionEvent<N> {
    Selected(N),
    Cleared,
}

struct SelectionLog<N> {
    fail: bool,
    active: Option<N>,
    events: Vec<SelectionEvent<N>>,
}

#[derive(Clone)]
pub struct RecordingSelection<N> {
    log: Rc<RefCell<SelectionLog<N>>>,
}

impl<N: Clone> RecordingSelection<N> {
    fn with_failure(fail: bool) -> Self {
        Self {
            log: Rc::new(RefCell::new(SelectionLog {
                fail,
                active: None,
                events: Vec::new(),
            })),
        }
    }

    pub fn new() -> Self {
        Self::with_failure(false)
    }

    /// Range creation always fails
    pub fn failing() -> Self {
        Self::with_failure(true)
    }

    pub fn events(&self) -> Vec<SelectionEvent<N>> {
        self.log.borrow().events.clone()
    }

    pub fn selected_nodes(&self) -> Vec<N> {
        self.log
            .borrow()
            .events
            .iter()
            .filter_map(|event| match event {
                SelectionEvent::Selected(node) => Some(node.clone()),
                SelectionEvent::Cleared => None,
            })
            .collect()
    }

    pub fn clear_count(&self) -> usize {
        self.log
            .borrow()
            .events
            .iter()
            .filter(|event| matches!(event, SelectionEvent::Cleared))
            .count()
    }

    pub fn has_active_selection(&self) -> bool {
        self.log.borrow().active.is_some()
    }
}

impl<N: Clone> Default for RecordingSelection<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: Clone> SelectionService for RecordingSelection<N> {
    type Node = N;

    fn select_node_contents(&self, node: &N) -> Result<(), CopyError> {
        let mut log = self.log.borrow_mut();
        if log.fail {
            return Err(CopyError::SelectionCopyFailed("createRange failed".to_string()));
        }
        log.active = Some(node.clone());
        log.events.push(SelectionEvent::Selected(node.clone()));
        Ok(())
    }

    fn clear(&self) {
        let mut log = self.log.borrow_mut();
        log.active = None;
        log.events.push(SelectionEvent::Cleared);
    }
}

// ============================================================================
// Legacy copy command
// ============================================================================

#[derive(Clone, Debug)]
enum CommandBehavior {
    Succeed,
    ReturnFalse,
    Error(CopyError),
}

#[derive(Clone)]
pub struct RecordingCopyCommand {
    behavior: CommandBehavior,
    calls: Rc<RefCell<usize>>,
}

impl RecordingCopyCommand {
    fn with_behavior(behavior: CommandBehavior) -> Self {
        Self {
            behavior,
            calls: Rc::new(RefCell::new(0)),
        }
    }

    pub fn succeeding() -> Self {
        Self::with_behavior(CommandBehavior::Succeed)
    }

    pub fn returning_false() -> Self {
        Self::with_behavior(CommandBehavior::ReturnFalse)
    }

    pub fn erroring(error: CopyError) -> Self {
        Self::with_behavior(CommandBehavior::Error(error))
    }

    pub fn calls(&self) -> usize {
        *self.calls.borrow()
    }
}

impl LegacyCopyCommand for RecordingCopyCommand {
    fn copy(&self) -> Result<bool, CopyError> {
        *self.calls.borrow_mut() += 1;
        match &self.behavior {
            CommandBehavior::Succeed => Ok(true),
            CommandBehavior::ReturnFalse => Ok(false),
            CommandBehavior::Error(error) => Err(error.clone()),
        }
    }
}

// ============================================================================
// Scheduler
// ============================================================================

struct ScheduledCallback {
    id: u64,
    due_ms: u64,
    callback: Box<dyn FnOnce()>,
}

#[derive(Default)]
struct ManualClock {
    now_ms: u64,
    next_id: u64,
    queue: Vec<ScheduledCallback>,
    scheduled: usize,
    cancelled: usize,
}

/// Virtual clock; callbacks run only from `advance`
#[derive(Clone, Default)]
pub struct ManualScheduler {
    clock: Rc<RefCell<ManualClock>>,
}

pub struct ManualHandle {
    id: u64,
    clock: Rc<RefCell<ManualClock>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now_ms(&self) -> u64 {
        self.clock.borrow().now_ms
    }

    pub fn pending_count(&self) -> usize {
        self.clock.borrow().queue.len()
    }

    pub fn scheduled_count(&self) -> usize {
        self.clock.borrow().scheduled
    }

    pub fn cancelled_count(&self) -> usize {
        self.clock.borrow().cancelled
    }

    /// Move the clock forward, running due callbacks in order; returns how many ran
    pub fn advance(&self, ms: u64) -> usize {
        let target = self.clock.borrow().now_ms + ms;
        let mut fired = 0;

        loop {
            let next = {
                let mut clock = self.clock.borrow_mut();
                let due = clock
                    .queue
                    .iter()
                    .enumerate()
                    .filter(|(_, task)| task.due_ms <= target)
                    .min_by_key(|(_, task)| (task.due_ms, task.id))
                    .map(|(index, _)| index);

                due.map(|index| {
                    let task = clock.queue.remove(index);
                    clock.now_ms = task.due_ms;
                    task
                })
            };

            // Callbacks may schedule or cancel, so the clock is not borrowed here
            match next {
                Some(task) => {
                    (task.callback)();
                    fired += 1;
                }
                None => break,
            }
        }

        self.clock.borrow_mut().now_ms = target;
        fired
    }
}

impl Scheduler for ManualScheduler {
    type Handle = ManualHandle;

    fn schedule(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> ManualHandle {
        let mut clock = self.clock.borrow_mut();
        let id = clock.next_id;
        clock.next_id += 1;
        clock.scheduled += 1;
        let due_ms = clock.now_ms + u64::from(delay_ms);
        clock.queue.push(ScheduledCallback { id, due_ms, callback });

        ManualHandle {
            id,
            clock: self.clock.clone(),
        }
    }
}

impl TaskHandle for ManualHandle {
    fn cancel(&mut self) {
        let mut clock = self.clock.borrow_mut();
        let before = clock.queue.len();
        clock.queue.retain(|task| task.id != self.id);
        if clock.queue.len() < before {
            clock.cancelled += 1;
        }
    }
}
