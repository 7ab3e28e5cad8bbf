//! Scroll capture pipeline.
//!
//! Records the current scroll offset against the current path, keyed for a
//! later pop-navigation restore:
//! - Capacity is pre-trimmed before every insert (single oldest entry evicted)
//! - With no throttle configured, every scroll event captures immediately
//! - With a throttle window, the first scroll event schedules a timer and the
//!   capture happens exactly once, when the timer fires; scroll events inside
//!   the window are suppressed

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use log::{debug, trace};

use crate::host::{self, Host};
use crate::store::PositionStore;

/// Evict the oldest entry if the store is over `max`. Safe to call any number
/// of times between inserts; once the store fits, further calls do nothing.
pub fn prune_oldest_if_over_capacity(store: &mut PositionStore, max: usize) {
    store.trim_to_capacity(max);
}

/// Record the host's current scroll offset under `path`, pruning first.
/// Without a window context there is no offset to record and the store is
/// left untouched.
pub fn record_current_scroll_position(
    store: &mut PositionStore,
    host: &dyn Host,
    max: usize,
    path: &str,
) {
    prune_oldest_if_over_capacity(store, max);

    let Some(offset) = host::read_current_scroll_offset(host) else {
        return;
    };

    store.set(path, offset);
    debug!("captured offset {offset} for {path}");
}

/// One capture pipeline per active scroll subscription. The throttle flag
/// lives here, so its lifetime is the subscription's: a new path gets a new
/// pipeline with a clear window.
#[derive(Clone)]
pub struct CapturePipeline {
    store: Rc<RefCell<PositionStore>>,
    host: Rc<dyn Host>,
    max_history: usize,
    throttle: Duration,
    throttle_pending: Rc<Cell<bool>>,
}

impl CapturePipeline {
    pub fn new(
        store: Rc<RefCell<PositionStore>>,
        host: Rc<dyn Host>,
        max_history: usize,
        throttle: Duration,
    ) -> Self {
        CapturePipeline {
            store,
            host,
            max_history,
            throttle,
            throttle_pending: Rc::new(Cell::new(false)),
        }
    }

    /// Handle one scroll event for `path`: capture now, or once per throttle
    /// window when a window is configured.
    pub fn on_scroll(&self, path: &str) {
        if self.throttle.is_zero() {
            record_current_scroll_position(
                &mut self.store.borrow_mut(),
                self.host.as_ref(),
                self.max_history,
                path,
            );
            return;
        }

        if self.throttle_pending.get() {
            trace!("scroll on {path} suppressed, capture already scheduled");
            return;
        }

        self.throttle_pending.set(true);

        let pending = Rc::clone(&self.throttle_pending);
        let store = Rc::clone(&self.store);
        let max = self.max_history;
        let path = path.to_string();
        self.host.set_timer(
            self.throttle,
            Box::new(move |host| {
                pending.set(false);
                record_current_scroll_position(&mut store.borrow_mut(), host, max, &path);
            }),
        );
    }
}
