use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::FetchState;
use crate::models::earnings::TopEarner;
use crate::services::api::fetch_top_earners;

/// One-shot fetch of the season leaderboard.
#[hook]
pub fn use_top_earners(limit: u32) -> UseStateHandle<FetchState<Vec<TopEarner>>> {
    let state = use_state(|| FetchState::Loading);

    {
        let state = state.clone();
        use_effect_with(limit, move |limit| {
            let state = state.clone();
            let limit = *limit;

            spawn_local(async move {
                match fetch_top_earners(limit).await {
                    Ok(earners) => state.set(FetchState::Loaded(Rc::new(earners))),
                    Err(e) => state.set(FetchState::Error(e.to_string())),
                }
            });

            || ()
        });
    }

    state
}
