//! Fake host for integration tests: scripted scroll offsets, recorded scroll
//! writes, and manually advanced timers.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use scrollkeep::{Host, ScrollHandler, ScrollSubscription, TimerCallback};

struct PendingTimer {
    due_at_ms: u64,
    callback: TimerCallback,
}

pub struct FakeHost {
    offset: Cell<u64>,
    now_ms: Cell<u64>,
    writes: RefCell<Vec<u64>>,
    timers: RefCell<Vec<PendingTimer>>,
    subscribers: Rc<RefCell<Vec<(usize, ScrollHandler)>>>,
    next_subscriber_id: Cell<usize>,
}

impl FakeHost {
    pub fn new() -> Self {
        FakeHost {
            offset: Cell::new(0),
            now_ms: Cell::new(0),
            writes: RefCell::new(Vec::new()),
            timers: RefCell::new(Vec::new()),
            subscribers: Rc::new(RefCell::new(Vec::new())),
            next_subscriber_id: Cell::new(0),
        }
    }

    pub fn set_offset(&self, offset: u64) {
        self.offset.set(offset);
    }

    pub fn writes(&self) -> Vec<u64> {
        self.writes.borrow().clone()
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.borrow().len()
    }

    /// Deliver one scroll event to every installed handler.
    pub fn emit_scroll(&self) {
        let handlers: Vec<ScrollHandler> = self
            .subscribers
            .borrow()
            .iter()
            .map(|(_, handler)| Rc::clone(handler))
            .collect();
        for handler in handlers {
            handler();
        }
    }

    /// Advance the clock, firing due timers in due order.
    pub fn advance(&self, ms: u64) {
        let target = self.now_ms.get() + ms;
        loop {
            let next = {
                let mut timers = self.timers.borrow_mut();
                let due_index = timers
                    .iter()
                    .enumerate()
                    .filter(|(_, t)| t.due_at_ms <= target)
                    .min_by_key(|(_, t)| t.due_at_ms)
                    .map(|(i, _)| i);
                due_index.map(|i| timers.remove(i))
            };
            match next {
                Some(timer) => {
                    self.now_ms.set(timer.due_at_ms);
                    (timer.callback)(self);
                }
                None => break,
            }
        }
        self.now_ms.set(target);
    }
}

impl Host for FakeHost {
    fn is_available(&self) -> bool {
        true
    }

    fn read_scroll_offset(&self) -> Option<u64> {
        Some(self.offset.get())
    }

    fn write_scroll_offset(&self, offset: u64) {
        self.writes.borrow_mut().push(offset);
    }

    fn set_timer(&self, delay: Duration, callback: TimerCallback) {
        self.timers.borrow_mut().push(PendingTimer {
            due_at_ms: self.now_ms.get() + delay.as_millis() as u64,
            callback,
        });
    }

    fn subscribe_scroll(&self, handler: ScrollHandler) -> ScrollSubscription {
        let id = self.next_subscriber_id.get();
        self.next_subscriber_id.set(id + 1);
        self.subscribers.borrow_mut().push((id, handler));

        let subscribers = Rc::clone(&self.subscribers);
        ScrollSubscription::new(move || {
            subscribers.borrow_mut().retain(|(sid, _)| *sid != id);
        })
    }
}
