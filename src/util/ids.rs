//! Time-derived identifiers for boards and columns.
//!
//! DESIGN
//! ======
//! Ids are wall-clock milliseconds, bumped past the last issued id so that
//! rows added within the same millisecond stay distinct. Ids loaded from
//! storage are fed to [`IdGenerator::observe`] so new ids never collide with
//! persisted ones.

#[cfg(test)]
#[path = "ids_test.rs"]
mod ids_test;

use std::sync::atomic::{AtomicU64, Ordering};

/// Strictly increasing id source.
#[derive(Debug, Default)]
pub struct IdGenerator {
    last: AtomicU64,
}

impl IdGenerator {
    #[must_use]
    pub const fn new() -> Self {
        Self { last: AtomicU64::new(0) }
    }

    /// Record an existing id; later ids will be greater than it.
    pub fn observe(&self, id: u64) {
        self.last.fetch_max(id, Ordering::Relaxed);
    }

    /// Issue an id derived from the current wall clock.
    pub fn next_id(&self) -> u64 {
        self.issue_at(now_ms())
    }

    /// Issue an id for the given timestamp: `max(now, last + 1)`.
    pub fn issue_at(&self, now: u64) -> u64 {
        let mut current = self.last.load(Ordering::Relaxed);
        loop {
            let candidate = now.max(current.saturating_add(1));
            match self
                .last
                .compare_exchange_weak(current, candidate, Ordering::Relaxed, Ordering::Relaxed)
            {
                Ok(_) => return candidate,
                Err(actual) => current = actual,
            }
        }
    }
}

/// Milliseconds since the Unix epoch.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn now_ms() -> u64 {
    #[cfg(feature = "csr")]
    {
        js_sys::Date::now() as u64
    }
    #[cfg(not(feature = "csr"))]
    {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map_or(0, |elapsed| elapsed.as_millis() as u64)
    }
}
