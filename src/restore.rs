//! Navigation-driven restore controller.
//!
//! Reacts to each distinct `(pathname, action)` pair:
//! - Pop (history back/forward): restore the captured offset if one exists,
//!   then consume the entry so it cannot be replayed
//! - Anything else (push, replace): reset to the top of the page immediately
//!
//! Restores are deferred by a fixed delay so asynchronously-loaded content
//! can finish laying out before the write lands. The delay is fire-and-forget:
//! navigating again does not cancel a pending write.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::host::Host;
use crate::store::PositionStore;

/// How the host router classified the transition that produced the current
/// location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavigationAction {
    Push,
    Pop,
    Replace,
}

/// Read-only navigation context supplied by the host router once per render
/// cycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Navigation {
    pub pathname: String,
    pub action: NavigationAction,
}

impl Navigation {
    pub fn new(pathname: impl Into<String>, action: NavigationAction) -> Self {
        Navigation {
            pathname: pathname.into(),
            action,
        }
    }
}

/// Queue a deferred scroll write. No-op without a window context.
pub fn perform_scroll_to(host: &dyn Host, offset: u64, delay: Duration) {
    if !host.is_available() {
        return;
    }

    // content may still be loading; the write waits it out
    host.set_timer(delay, Box::new(move |h| h.write_scroll_offset(offset)));
}

pub struct RestoreController {
    store: Rc<RefCell<PositionStore>>,
    host: Rc<dyn Host>,
    restore_delay: Duration,
    last_seen: Option<Navigation>,
}

impl RestoreController {
    pub fn new(
        store: Rc<RefCell<PositionStore>>,
        host: Rc<dyn Host>,
        restore_delay: Duration,
    ) -> Self {
        RestoreController {
            store,
            host,
            restore_delay,
            last_seen: None,
        }
    }

    /// React to a navigation. Fires once per distinct `(pathname, action)`
    /// pair; re-observing the same pair does nothing.
    pub fn on_navigation(&mut self, navigation: &Navigation) {
        if self.last_seen.as_ref() == Some(navigation) {
            return;
        }
        self.last_seen = Some(navigation.clone());

        match navigation.action {
            NavigationAction::Pop => self.restore(&navigation.pathname),
            _ => self.reset_to_top(),
        }
    }

    fn restore(&self, pathname: &str) {
        // presence check, not truthiness: a captured offset of 0 restores
        let stored = self.store.borrow().get(pathname);

        let Some(offset) = stored else {
            debug!("no stored offset for {pathname}, leaving page as rendered");
            return;
        };

        debug!("restoring {pathname} to offset {offset}");
        perform_scroll_to(self.host.as_ref(), offset, self.restore_delay);
        self.store.borrow_mut().delete(pathname);
    }

    fn reset_to_top(&self) {
        debug!("forward navigation, resetting scroll to top");
        self.host.write_scroll_offset(0);
    }
}
