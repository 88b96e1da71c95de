use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::FetchState;
use crate::models::earnings::EarnerHistory;
use crate::services::api::fetch_earner_history;

/// One-shot fetch of the daily-history rows and incentive programs shown in
/// the history panel.
#[hook]
pub fn use_earner_history(earner_id: AttrValue) -> UseStateHandle<FetchState<EarnerHistory>> {
    let state = use_state(|| FetchState::Loading);

    {
        let state = state.clone();
        use_effect_with(earner_id, move |earner_id| {
            let state = state.clone();
            let earner_id = earner_id.clone();

            spawn_local(async move {
                let limit = crate::config::Config::DAILY_HISTORY_LIMIT;
                match fetch_earner_history(&earner_id, limit).await {
                    Ok(history) => state.set(FetchState::Loaded(Rc::new(history))),
                    Err(e) => state.set(FetchState::Error(e.to_string())),
                }
            });

            || ()
        });
    }

    state
}
