//! Host window seam.
//!
//! Everything that touches the browser window goes through the `Host` trait:
//! scroll offset reads/writes, scroll-event subscription, and timers. The
//! embedding application injects the real window; tests inject a fake with
//! manually advanced timers. `Detached` models execution without a window
//! (server rendering, headless), where every operation degrades to a silent
//! no-op.

use std::rc::Rc;
use std::time::Duration;

/// Deferred work scheduled through the host. The host hands itself back when
/// the timer fires so the callback can reach window APIs without holding an
/// owning handle.
pub type TimerCallback = Box<dyn FnOnce(&dyn Host)>;

/// Scroll-event handler installed via `subscribe_scroll`.
pub type ScrollHandler = Rc<dyn Fn()>;

pub trait Host {
    /// True when a window context exists. When false, reads yield `None` and
    /// writes are no-ops; callers never see an error.
    fn is_available(&self) -> bool;

    /// Current vertical scroll offset in pixels, `None` without a window.
    fn read_scroll_offset(&self) -> Option<u64>;

    /// Scroll the window to `offset` pixels from the top.
    fn write_scroll_offset(&self, offset: u64);

    /// Queue `callback` to run after `delay`. Fire-and-forget: there is no
    /// cancellation handle.
    fn set_timer(&self, delay: Duration, callback: TimerCallback);

    /// Install a scroll-event handler. Dropping the returned subscription
    /// uninstalls it.
    fn subscribe_scroll(&self, handler: ScrollHandler) -> ScrollSubscription;
}

/// RAII guard for an installed scroll listener. Unsubscribes exactly once,
/// on drop, so the listener is removed on every exit path.
pub struct ScrollSubscription {
    unsubscribe: Option<Box<dyn FnOnce()>>,
}

impl ScrollSubscription {
    pub fn new(unsubscribe: impl FnOnce() + 'static) -> Self {
        ScrollSubscription {
            unsubscribe: Some(Box::new(unsubscribe)),
        }
    }

    /// A subscription that has nothing to tear down (detached hosts).
    pub fn noop() -> Self {
        ScrollSubscription { unsubscribe: None }
    }
}

impl Drop for ScrollSubscription {
    fn drop(&mut self) {
        if let Some(unsubscribe) = self.unsubscribe.take() {
            unsubscribe();
        }
    }
}

/// Host for environments without a window. Reads yield `None`, writes and
/// subscriptions do nothing, timers never fire.
#[derive(Debug, Default)]
pub struct Detached;

impl Host for Detached {
    fn is_available(&self) -> bool {
        false
    }

    fn read_scroll_offset(&self) -> Option<u64> {
        None
    }

    fn write_scroll_offset(&self, _offset: u64) {}

    fn set_timer(&self, _delay: Duration, _callback: TimerCallback) {}

    fn subscribe_scroll(&self, _handler: ScrollHandler) -> ScrollSubscription {
        ScrollSubscription::noop()
    }
}

/// Probe for a usable window context.
pub fn is_host_available(host: &dyn Host) -> bool {
    host.is_available()
}

/// Read the current scroll offset, `None` when no window exists.
pub fn read_current_scroll_offset(host: &dyn Host) -> Option<u64> {
    if !host.is_available() {
        return None;
    }

    host.read_scroll_offset()
}
