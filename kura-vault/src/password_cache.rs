//! Time-bounded in-memory password cache.
//!
//! A UI convenience so the user is not prompted on every operation
//! within a short session. Lives entirely in memory, outside the
//! store's trust boundary; the password is never persisted and the
//! entry is dropped (and zeroized) once the TTL lapses.

use std::time::{Duration, Instant};

use zeroize::Zeroizing;

/// Default time-to-live for a cached password.
pub const DEFAULT_TTL: Duration = Duration::from_secs(10 * 60);

/// Holds the unlock password for a bounded time window.
pub struct PasswordCache {
    ttl: Duration,
    entry: Option<(Zeroizing<String>, Instant)>,
}

impl PasswordCache {
    /// Create a cache with the default 10 minute TTL.
    #[must_use]
    pub fn new() -> Self {
        Self::with_ttl(DEFAULT_TTL)
    }

    /// Create a cache with a custom TTL.
    #[must_use]
    pub const fn with_ttl(ttl: Duration) -> Self {
        Self { ttl, entry: None }
    }

    /// Cache a password, restarting the TTL window.
    pub fn set(&mut self, password: &str) {
        self.entry = Some((Zeroizing::new(password.to_owned()), Instant::now()));
    }

    /// The cached password, or `None` once the TTL has lapsed (the
    /// expired entry is cleared on access).
    pub fn get(&mut self) -> Option<&str> {
        if let Some((_, stored_at)) = &self.entry {
            if stored_at.elapsed() >= self.ttl {
                self.entry = None;
            }
        }
        self.entry.as_ref().map(|(pw, _)| pw.as_str())
    }

    /// Drop the cached password immediately.
    pub fn clear(&mut self) {
        self.entry = None;
    }
}

impl Default for PasswordCache {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for PasswordCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PasswordCache")
            .field("ttl", &self.ttl)
            .field("cached", &self.entry.is_some())
            .finish()
    }
}
