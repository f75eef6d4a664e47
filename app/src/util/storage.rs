//! Browser localStorage persistence for the coaching session.
//!
//! SYSTEM CONTEXT
//! ==============
//! Analysis results survive page reloads so returning users land on their
//! results instead of an empty form. All browser access is hydrate-only;
//! native builds see an always-empty store, which keeps the server pass
//! and unit tests deterministic.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use idiolect::{IdiolectProfile, Phrase};
use serde::{Deserialize, Serialize};

/// localStorage key for the persisted session.
pub const SESSION_KEY: &str = "mirrorlingo_session_v1";

/// One persisted coaching session: captured phrases plus the profile
/// built from them.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StoredSession {
    pub phrases: Vec<Phrase>,
    pub profile: IdiolectProfile,
    /// Milliseconds since the Unix epoch when the session was saved.
    pub saved_at_ms: i64,
}

/// Load the persisted session, if any. Corrupt or unreadable entries are
/// treated as absent.
#[must_use]
pub fn load_session() -> Option<StoredSession> {
    decode_session(&read_raw(SESSION_KEY)?)
}

/// Persist the session, replacing any previous one.
pub fn save_session(session: &StoredSession) {
    let Ok(raw) = serde_json::to_string(session) else {
        return;
    };
    write_raw(SESSION_KEY, &raw);
}

/// Remove the persisted session.
pub fn clear_session() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(SESSION_KEY);
        }
    }
}

fn decode_session(raw: &str) -> Option<StoredSession> {
    match serde_json::from_str(raw) {
        Ok(session) => Some(session),
        Err(err) => {
            log::warn!("discarding unreadable stored session: {err}");
            None
        }
    }
}

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

fn read_raw(key: &str) -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        local_storage()?.get_item(key).ok().flatten()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
        None
    }
}

fn write_raw(key: &str, value: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = local_storage() {
            let _ = storage.set_item(key, value);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (key, value);
    }
}
