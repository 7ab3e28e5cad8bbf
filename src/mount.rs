//! Mountable wiring for an embedding application.
//!
//! `ScrollRestorer` owns the position store, keeps exactly one scroll
//! listener installed for the current path, and feeds each navigation to the
//! restore controller. The embedding application calls `on_navigation` once
//! per render cycle with the router's current location.

use std::cell::RefCell;
use std::rc::Rc;

use log::debug;

use crate::capture::CapturePipeline;
use crate::config::Config;
use crate::host::{Host, ScrollSubscription};
use crate::restore::{Navigation, RestoreController};
use crate::store::PositionStore;

pub struct ScrollRestorer {
    config: Config,
    store: Rc<RefCell<PositionStore>>,
    host: Rc<dyn Host>,
    controller: RestoreController,
    listener_path: Option<String>,
    subscription: Option<ScrollSubscription>,
}

impl ScrollRestorer {
    /// Mount with a freshly created store.
    pub fn new(config: Config, host: Rc<dyn Host>) -> Self {
        let store = Rc::new(RefCell::new(PositionStore::new()));
        ScrollRestorer::with_store(config, host, store)
    }

    /// Mount against an externally owned store. Lets the embedding
    /// application (and tests) control the store's lifetime and inspect it.
    pub fn with_store(
        config: Config,
        host: Rc<dyn Host>,
        store: Rc<RefCell<PositionStore>>,
    ) -> Self {
        let controller = RestoreController::new(
            Rc::clone(&store),
            Rc::clone(&host),
            config.restore_delay(),
        );

        ScrollRestorer {
            config,
            store,
            host,
            controller,
            listener_path: None,
            subscription: None,
        }
    }

    /// Handle the router's current location. Re-scopes the scroll listener
    /// when the pathname changed, then runs the restore-or-reset decision.
    pub fn on_navigation(&mut self, navigation: &Navigation) {
        if self.listener_path.as_deref() != Some(navigation.pathname.as_str()) {
            self.rescope_listener(&navigation.pathname);
        }

        self.controller.on_navigation(navigation);
    }

    /// Shared handle to the position store.
    pub fn store(&self) -> Rc<RefCell<PositionStore>> {
        Rc::clone(&self.store)
    }

    /// Drop the previous path's listener, then install one for `pathname`.
    /// A fresh pipeline per subscription gives each path a clean throttle
    /// window and guarantees listeners never accumulate.
    fn rescope_listener(&mut self, pathname: &str) {
        // old unsubscribe must run before the new subscribe
        self.subscription = None;

        let pipeline = CapturePipeline::new(
            Rc::clone(&self.store),
            Rc::clone(&self.host),
            self.config.max_history,
            self.config.throttle_time(),
        );

        let path = pathname.to_string();
        let handler = Rc::new(move || pipeline.on_scroll(&path));

        debug!("scroll listener scoped to {pathname}");
        self.subscription = Some(self.host.subscribe_scroll(handler));
        self.listener_path = Some(pathname.to_string());
    }
}
