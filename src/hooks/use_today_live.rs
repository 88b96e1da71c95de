use gloo_timers::future::TimeoutFuture;
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::FetchState;
use crate::models::earnings::TodayLive;
use crate::services::api::fetch_today_live;

/// Polls the live earnings/time totals for the drive-stats KPI cards.
/// Stale responses from a superseded poll are dropped via the abort flag.
#[hook]
pub fn use_today_live(driver_id: AttrValue) -> UseStateHandle<FetchState<TodayLive>> {
    let state = use_state(|| FetchState::Loading);
    let trigger = use_state(|| 0u32); // Polling trigger

    {
        let state = state.clone();
        let trigger_value = *trigger;

        use_effect_with((trigger_value, driver_id), move |(_, driver_id)| {
            let state = state.clone();
            let trigger = trigger.clone();
            let driver_id = driver_id.clone();
            let aborted = Rc::new(Cell::new(false));
            let aborted_check = aborted.clone();

            spawn_local(async move {
                match fetch_today_live(&driver_id).await {
                    Ok(live) if !aborted_check.get() => {
                        state.set(FetchState::Loaded(Rc::new(live)));
                    }
                    Err(e) if !aborted_check.get() => {
                        state.set(FetchState::Error(e.to_string()));
                    }
                    _ => {} // Request was superseded, ignore result
                }

                // Schedule next poll if enabled
                if crate::config::Config::ENABLE_AUTO_REFRESH && !aborted_check.get() {
                    TimeoutFuture::new(crate::config::Config::LIVE_POLL_INTERVAL_MS).await;
                    if !aborted_check.get() {
                        trigger.set(*trigger + 1); // Trigger next fetch
                    }
                }
            });

            move || {
                aborted.set(true);
            }
        });
    }

    state
}
