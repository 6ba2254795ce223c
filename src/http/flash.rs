//! One-shot flash notices
//!
//! A mutating POST queues a notice under a fresh token and redirects to the
//! list page with `?notice=<token>`; the list handler redeems the token
//! exactly once. Nothing is stored client-side and no session state leaks
//! across requests - the token names one message for one upcoming render.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use uuid::Uuid;

/// Upper bound on queued notices; oldest entries are dropped first.
const MAX_PENDING: usize = 256;

/// Notices not redeemed within this window are discarded.
const DEFAULT_TTL: Duration = Duration::from_secs(300);

struct Entry {
    message: String,
    created_at: Instant,
}

/// Server-side store of pending flash notices, keyed by one-shot token.
#[derive(Clone)]
pub struct FlashStore {
    inner: Arc<Mutex<HashMap<Uuid, Entry>>>,
    ttl: Duration,
}

impl FlashStore {
    pub fn new() -> Self {
        Self::with_ttl(DEFAULT_TTL)
    }

    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            inner: Arc::new(Mutex::new(HashMap::new())),
            ttl,
        }
    }

    /// Queue a notice, returning the token that redeems it.
    pub fn push(&self, message: impl Into<String>) -> Uuid {
        let mut map = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        let now = Instant::now();

        map.retain(|_, entry| now.duration_since(entry.created_at) < self.ttl);

        // Abandoned redirects must not grow the map without bound
        if map.len() >= MAX_PENDING {
            if let Some(oldest) = map
                .iter()
                .min_by_key(|(_, entry)| entry.created_at)
                .map(|(token, _)| *token)
            {
                map.remove(&oldest);
            }
        }

        let token = Uuid::new_v4();
        map.insert(
            token,
            Entry {
                message: message.into(),
                created_at: now,
            },
        );
        token
    }

    /// Redeem a token. Returns the message the first time, None after that
    /// or for tokens that were never issued or have expired.
    pub fn take(&self, token: &Uuid) -> Option<String> {
        let mut map = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        let entry = map.remove(token)?;
        if entry.created_at.elapsed() >= self.ttl {
            return None;
        }
        Some(entry.message)
    }
}

impl Default for FlashStore {
    fn default() -> Self {
        Self::new()
    }
}
