//! Last-writer-wins guard for concurrent resolutions.
//!
//! Requests take a monotonically increasing ticket before resolving. Only
//! a resolution holding a newer ticket than the last committed one may
//! install itself; stale completions are dropped.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

use tracing::debug;

use crate::domain::resolution::Resolution;

/// Guards the displayed resolution against out-of-order completion.
#[derive(Debug, Default)]
pub struct ResolutionGuard {
    next_ticket: AtomicU64,
    committed: Mutex<Option<(u64, Resolution)>>,
}

impl ResolutionGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take a ticket. Later tickets always win over earlier ones.
    pub fn ticket(&self) -> u64 {
        self.next_ticket.fetch_add(1, Ordering::SeqCst)
    }

    /// Install a resolution if its ticket is newer than the last committed
    /// one. Returns whether the install happened.
    pub fn commit(&self, ticket: u64, resolution: Resolution) -> bool {
        let mut slot = self.committed.lock().unwrap_or_else(|e| e.into_inner());

        match slot.as_ref() {
            Some((committed, _)) if *committed >= ticket => {
                debug!(ticket, committed, "dropping stale resolution");
                false
            }
            _ => {
                *slot = Some((ticket, resolution));
                true
            }
        }
    }

    /// The currently installed resolution, if any.
    pub fn current(&self) -> Option<Resolution> {
        let slot = self.committed.lock().unwrap_or_else(|e| e.into_inner());
        slot.as_ref().map(|(_, r)| r.clone())
    }
}
