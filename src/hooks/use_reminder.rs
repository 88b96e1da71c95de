use chrono::Utc;
use gloo_storage::Storage;
use gloo_timers::callback::Interval;
use yew::prelude::*;

/// Handle returned by the `use_reminder` hook.
#[derive(Clone, PartialEq)]
pub struct ReminderHandle {
    pub visible: bool,
    pub mark_done: Callback<()>,
}

/// Recurring wellness popup (hydration, stretch). The popup shows on first
/// load and again whenever `interval_ms` has passed since the last
/// dismissal; dismissal timestamps persist in local storage so a page
/// reload does not re-nag.
#[hook]
pub fn use_reminder(storage_key: &'static str, interval_ms: u32) -> ReminderHandle {
    let visible = use_state(|| false);

    {
        let visible = visible.clone();
        use_effect_with((), move |()| {
            // Show immediately if the reminder is already due
            if reminder_due(storage_key, interval_ms) {
                visible.set(true);
            }

            let check = visible.clone();
            let interval = Interval::new(interval_ms, move || {
                if reminder_due(storage_key, interval_ms) {
                    check.set(true);
                }
            });

            move || drop(interval)
        });
    }

    let mark_done = {
        let visible = visible.clone();
        Callback::from(move |()| {
            save_dismissal(storage_key);
            visible.set(false);
        })
    };

    ReminderHandle {
        visible: *visible,
        mark_done,
    }
}

fn reminder_due(storage_key: &str, interval_ms: u32) -> bool {
    match gloo_storage::LocalStorage::get::<i64>(storage_key) {
        Ok(last_dismissed) => {
            Utc::now().timestamp_millis() - last_dismissed >= i64::from(interval_ms)
        }
        Err(_) => true,
    }
}

fn save_dismissal(storage_key: &str) {
    let now = Utc::now().timestamp_millis();
    if let Err(e) = gloo_storage::LocalStorage::set(storage_key, now) {
        web_sys::console::warn_1(&format!("Failed to save reminder dismissal: {e:?}").into());
    }
}
