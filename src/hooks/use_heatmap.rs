use std::cell::Cell;
use std::collections::HashMap;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::FetchState;
use crate::models::heatmap::{HeatmapGrid, HeatmapQuery};
use crate::services::api::fetch_heatmap;

/// Fetches the prediction grid for a query, consulting a per-session cache
/// first so identical queries within one browsing session are answered
/// without a network round trip. In-flight requests superseded by a newer
/// query are dropped via the abort flag.
#[hook]
pub fn use_heatmap(query: HeatmapQuery) -> UseStateHandle<FetchState<HeatmapGrid>> {
    let state = use_state(|| FetchState::Loading);
    let cache = use_mut_ref(HashMap::<String, Rc<HeatmapGrid>>::new);

    {
        let state = state.clone();

        use_effect_with(query, move |query| {
            let state = state.clone();
            let query = query.clone();
            let key = query.cache_key();
            let aborted = Rc::new(Cell::new(false));
            let aborted_check = aborted.clone();

            let cached = cache.borrow().get(&key).cloned();
            if let Some(grid) = cached {
                state.set(FetchState::Loaded(grid));
            } else {
                state.set(FetchState::Loading);
                spawn_local(async move {
                    match fetch_heatmap(&query).await {
                        Ok(grid) if !aborted_check.get() => {
                            let grid = Rc::new(grid);
                            cache.borrow_mut().insert(key, grid.clone());
                            state.set(FetchState::Loaded(grid));
                        }
                        Err(e) if !aborted_check.get() => {
                            state.set(FetchState::Error(e.to_string()));
                        }
                        _ => {} // Request was superseded, ignore result
                    }
                });
            }

            move || {
                aborted.set(true);
            }
        });
    }

    state
}
