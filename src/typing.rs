use std::rc::Rc;

use crate::timers::{Scheduler, TimerSlot};

/// Walks a string one character at a time, yielding the growing prefix.
#[derive(Debug, Clone)]
pub struct TypingCursor {
    text: String,
    shown: usize,
}

impl TypingCursor {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            shown: 0,
        }
    }

    pub fn is_done(&self) -> bool {
        self.shown >= self.text.len()
    }

    pub fn advance(&mut self) -> Option<&str> {
        let next = self.text[self.shown..].chars().next()?;
        self.shown += next.len_utf8();
        Some(&self.text[..self.shown])
    }
}

/// Character-by-character reveal of a piece of text.
///
/// `start` clears the text right away, waits `start_delay_ms`, then emits one
/// more character every `step_ms`. Starting again or calling `cancel` stops
/// any run still in progress.
pub struct TypingEffect<S: Scheduler + Clone + 'static> {
    scheduler: S,
    start_delay_ms: u32,
    step_ms: u32,
    slot: TimerSlot,
}

impl<S: Scheduler + Clone + 'static> TypingEffect<S> {
    pub fn new(scheduler: S, start_delay_ms: u32, step_ms: u32) -> Self {
        Self {
            scheduler,
            start_delay_ms,
            step_ms,
            slot: TimerSlot::new(),
        }
    }

    pub fn start(&self, text: &str, on_frame: impl Fn(&str) + 'static) {
        self.slot.cancel();
        if text.is_empty() {
            return;
        }
        let on_frame: Rc<dyn Fn(&str)> = Rc::new(on_frame);
        on_frame("");
        schedule_step(
            self.scheduler.clone(),
            self.slot.clone(),
            TypingCursor::new(text),
            self.start_delay_ms,
            self.step_ms,
            on_frame,
        );
    }

    pub fn cancel(&self) {
        self.slot.cancel();
    }
}

fn schedule_step<S: Scheduler + Clone + 'static>(
    scheduler: S,
    slot: TimerSlot,
    mut cursor: TypingCursor,
    delay_ms: u32,
    step_ms: u32,
    on_frame: Rc<dyn Fn(&str)>,
) {
    let next_scheduler = scheduler.clone();
    let next_slot = slot.clone();
    let handle = scheduler.schedule(
        delay_ms,
        Box::new(move || {
            if let Some(frame) = cursor.advance() {
                on_frame(frame);
            }
            if cursor.is_done() {
                next_slot.cancel();
            } else {
                schedule_step(next_scheduler, next_slot, cursor, step_ms, step_ms, on_frame);
            }
        }),
    );
    slot.arm(handle);
}
