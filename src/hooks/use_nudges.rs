use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::FetchState;
use crate::models::earnings::NudgeList;
use crate::services::api::fetch_nudges;

/// One-shot fetch of the wellness nudges for an earner.
#[hook]
pub fn use_nudges(earner_id: AttrValue) -> UseStateHandle<FetchState<NudgeList>> {
    let state = use_state(|| FetchState::Loading);

    {
        let state = state.clone();
        use_effect_with(earner_id, move |earner_id| {
            let state = state.clone();
            let earner_id = earner_id.clone();

            spawn_local(async move {
                match fetch_nudges(&earner_id).await {
                    Ok(nudges) => state.set(FetchState::Loaded(Rc::new(nudges))),
                    Err(e) => state.set(FetchState::Error(e.to_string())),
                }
            });

            || ()
        });
    }

    state
}
