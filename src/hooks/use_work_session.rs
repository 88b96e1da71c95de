use chrono::{DateTime, Utc};
use gloo_storage::Storage;
use yew::prelude::*;

const STORAGE_KEY: &str = "shift_started_at";

/// The single session-state store: every view that cares about the running
/// shift subscribes to this handle (provided via context) instead of
/// reading browser storage behind each other's backs.
#[derive(Clone, PartialEq)]
pub struct SessionHandle {
    pub started_at: Option<DateTime<Utc>>,
    pub start: Callback<()>,
    pub end: Callback<()>,
}

impl SessionHandle {
    pub fn is_running(&self) -> bool {
        self.started_at.is_some()
    }

    /// Whole minutes since the shift started.
    pub fn elapsed_minutes(&self, now: DateTime<Utc>) -> Option<i64> {
        self.started_at
            .map(|started| (now - started).num_minutes().max(0))
    }
}

/// Custom hook owning the work-session lifecycle, persisted so a reload
/// re-derives elapsed time from the stored start timestamp.
#[hook]
pub fn use_work_session() -> SessionHandle {
    let started_at = use_state(load_session_start);

    // Effect: persist the session start on change
    {
        let value = *started_at;
        use_effect_with(value, move |started_at| {
            save_session_start(*started_at);
            || ()
        });
    }

    let start = {
        let started_at = started_at.clone();
        Callback::from(move |()| started_at.set(Some(Utc::now())))
    };

    let end = {
        let started_at = started_at.clone();
        Callback::from(move |()| started_at.set(None))
    };

    SessionHandle {
        started_at: *started_at,
        start,
        end,
    }
}

/// Load the shift start from local storage, if a shift is running.
fn load_session_start() -> Option<DateTime<Utc>> {
    gloo_storage::LocalStorage::get::<DateTime<Utc>>(STORAGE_KEY).ok()
}

/// Save or clear the shift start in local storage.
fn save_session_start(started_at: Option<DateTime<Utc>>) {
    let result = match started_at {
        Some(ts) => gloo_storage::LocalStorage::set(STORAGE_KEY, ts),
        None => {
            gloo_storage::LocalStorage::delete(STORAGE_KEY);
            Ok(())
        }
    };
    if let Err(e) = result {
        web_sys::console::warn_1(&format!("Failed to save session start: {e:?}").into());
    }
}
