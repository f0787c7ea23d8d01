//! Messages that disappear on their own.
//!
//! A [`Timed`] slot hands out a token every time it shows something. The
//! expiry task carries that token back, and an expiry for anything but the
//! latest message is ignored, so a stale timer never hides a newer message.

use std::time::Duration;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timed<T> {
    current: Option<T>,
    token: u64,
}

impl<T> Default for Timed<T> {
    fn default() -> Self {
        Self {
            current: None,
            token: 0,
        }
    }
}

impl<T> Timed<T> {
    pub fn current(&self) -> Option<&T> {
        self.current.as_ref()
    }

    /// Replaces the current value and returns its token.
    pub fn show(&mut self, value: T) -> u64 {
        self.token = self.token.wrapping_add(1);
        self.current = Some(value);
        self.token
    }

    /// Clears the slot if `token` still names the current value.
    pub fn expire(&mut self, token: u64) -> bool {
        if token == self.token && self.current.is_some() {
            self.current = None;
            true
        } else {
            false
        }
    }

    pub fn clear(&mut self) {
        self.current = None;
    }
}

/// Calls `on_expire(token)` once `ttl` has elapsed.
pub fn expire_after<F>(runtime: &Handle, ttl: Duration, token: u64, on_expire: F) -> JoinHandle<()>
where
    F: FnOnce(u64) + Send + 'static,
{
    runtime.spawn(async move {
        tokio::time::sleep(ttl).await;
        on_expire(token);
    })
}
