use gloo_timers::future::TimeoutFuture;
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::FetchState;
use crate::models::forecast::Forecast;
use crate::services::api::fetch_forecast;

/// Polls the hourly demand forecast for a city and day. Switching day or
/// city supersedes any in-flight request via the abort flag.
#[hook]
pub fn use_forecast(city_id: u32, day_of_week: u8) -> UseStateHandle<FetchState<Forecast>> {
    let state = use_state(|| FetchState::Loading);
    let trigger = use_state(|| 0u32); // Polling trigger

    {
        let state = state.clone();
        let trigger_value = *trigger;

        use_effect_with((trigger_value, city_id, day_of_week), move |(_, city_id, dow)| {
            let state = state.clone();
            let trigger = trigger.clone();
            let city_id = *city_id;
            let dow = *dow;
            let aborted = Rc::new(Cell::new(false));
            let aborted_check = aborted.clone();

            // Reset to loading when the selected day or city changes
            state.set(FetchState::Loading);

            spawn_local(async move {
                match fetch_forecast(city_id, dow).await {
                    Ok(forecast) if !aborted_check.get() => {
                        state.set(FetchState::Loaded(Rc::new(forecast)));
                    }
                    Err(e) if !aborted_check.get() => {
                        state.set(FetchState::Error(e.to_string()));
                    }
                    _ => {} // Request was superseded, ignore result
                }

                // Schedule next poll if enabled
                if crate::config::Config::ENABLE_AUTO_REFRESH && !aborted_check.get() {
                    TimeoutFuture::new(crate::config::Config::FORECAST_POLL_INTERVAL_MS).await;
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
