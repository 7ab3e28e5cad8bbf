//! scrollkeep: per-path scroll position capture and restore.
//!
//! When the user navigates back or forward through history, the page should
//! land where they left it; when they navigate somewhere new, it should start
//! at the top. This crate keeps a small, bounded map of `path -> offset`,
//! captures offsets from (optionally throttled) scroll events, and replays or
//! resets them based on how the router classified each navigation.
//!
//! The browser window, the router, and the render lifecycle are all host
//! collaborators injected at the [`Host`] seam and the [`ScrollRestorer`]
//! entry point; nothing here touches a real window directly, so the whole
//! crate runs headless under test.

pub mod capture;
pub mod config;
pub mod host;
pub mod mount;
pub mod restore;
pub mod store;

pub use capture::{prune_oldest_if_over_capacity, record_current_scroll_position, CapturePipeline};
pub use config::{Config, DEFAULT_MAX_SIZE, DEFAULT_RESTORE_DELAY_MS};
pub use host::{
    is_host_available, read_current_scroll_offset, Detached, Host, ScrollHandler,
    ScrollSubscription, TimerCallback,
};
pub use mount::ScrollRestorer;
pub use restore::{perform_scroll_to, Navigation, NavigationAction, RestoreController};
pub use store::PositionStore;
