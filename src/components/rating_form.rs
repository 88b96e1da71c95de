use chrono::{SecondsFormat, Utc};
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::status::Status;
use crate::hooks::FetchState;
use crate::models::rating::{RideRating, RideRequest};
use crate::services::api::submit_rating;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;

/// Ride-rating simulator: edit a synthetic ride request, post it to the
/// scoring service, and inspect the breakdown.
#[function_component(RatingForm)]
pub fn rating_form() -> Html {
    let form = use_state(|| {
        RideRequest::sample(Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true))
    });
    let debug = use_state(|| false);
    let result = use_state(|| FetchState::<RideRating>::Idle);

    let on_debug = {
        let debug = debug.clone();
        Callback::from(move |e: Event| {
            let target: HtmlInputElement = e.target_unchecked_into();
            debug.set(target.checked());
        })
    };

    let on_submit = {
        let form = form.clone();
        let debug = debug.clone();
        let result = result.clone();
        Callback::from(move |_: MouseEvent| {
            let request = (*form).clone();
            let debug = *debug;
            let result = result.clone();
            result.set(FetchState::Loading);
            spawn_local(async move {
                match submit_rating(&request, debug).await {
                    Ok(rating) => result.set(FetchState::Loaded(Rc::new(rating))),
                    Err(e) => result.set(FetchState::Error(e.to_string())),
                }
            });
        })
    };

    // One setter closure per field keeps the inputs dumb
    let set_num = |apply: fn(&mut RideRequest, f64)| {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let target: HtmlInputElement = e.target_unchecked_into();
            if let Ok(value) = target.value().parse::<f64>() {
                let mut next = (*form).clone();
                apply(&mut next, value);
                form.set(next);
            }
        })
    };
    let set_text = |apply: fn(&mut RideRequest, String)| {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let target: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            apply(&mut next, target.value());
            form.set(next);
        })
    };

    html! {
        <div class="rating-view">
            <h2>{"Simulate Ride Request"}</h2>
            <p class="muted">{"Scores a synthetic ride the way incoming offers are scored."}</p>

            <div class="rating-columns">
                <div class="rating-form">
                    <div class="field-grid">
                        {field("city_id", form.city_id.to_string(),
                            set_num(|r, v| r.city_id = v as u32))}
                        {field("request_time", form.request_time.clone(),
                            set_text(|r, v| r.request_time = v))}
                        {field("driver_lat", form.driver_lat.to_string(),
                            set_num(|r, v| r.driver_lat = v))}
                        {field("driver_lon", form.driver_lon.to_string(),
                            set_num(|r, v| r.driver_lon = v))}
                        {field("pickup_lat", form.pickup_lat.to_string(),
                            set_num(|r, v| r.pickup_lat = v))}
                        {field("pickup_lon", form.pickup_lon.to_string(),
                            set_num(|r, v| r.pickup_lon = v))}
                        {field("drop_lat", form.drop_lat.to_string(),
                            set_num(|r, v| r.drop_lat = v))}
                        {field("drop_lon", form.drop_lon.to_string(),
                            set_num(|r, v| r.drop_lon = v))}
                        {field("est_distance_km", form.est_distance_km.to_string(),
                            set_num(|r, v| r.est_distance_km = v))}
                        {field("est_duration_mins", form.est_duration_mins.to_string(),
                            set_num(|r, v| r.est_duration_mins = v))}
                        {field("rider_id", form.rider_id.clone(),
                            set_text(|r, v| r.rider_id = v))}
                        {field("rider_rating", form.rider_rating.to_string(),
                            set_num(|r, v| r.rider_rating = v))}
                    </div>

                    <div class="form-actions">
                        <label class="checkbox-label">
                            <input type="checkbox" checked={*debug} onchange={on_debug} />
                            <span>{"debug anchors"}</span>
                        </label>
                        <button
                            class="btn btn-primary"
                            onclick={on_submit}
                            disabled={result.is_loading()}
                        >
                            { if result.is_loading() { "Scoring…" } else { "Rate ride" } }
                        </button>
                    </div>

                    <Status loading={false} error={result.error().map(String::from)} />
                </div>

                <div class="rating-result">
                    if let Some(rating) = result.data() {
                        <div class="result-score">{format!("{:.0}", rating.overall)}</div>
                        <div class="muted">{"overall score"}</div>

                        <ul class="breakdown-list">
                            {
                                rating.factor_rows().into_iter().map(|(label, value, reason)| {
                                    html! {
                                        <li key={label}>
                                            <span class="factor-label">
                                                {format!("{label}: {value:.0}")}
                                            </span>
                                            if !reason.is_empty() {
                                                <span class="factor-reason">{format!(" — {reason}")}</span>
                                            }
                                        </li>
                                    }
                                }).collect::<Html>()
                            }
                        </ul>

                        if *debug && rating.has_anchors() {
                            <pre class="debug-pre">
                                {serde_json::to_string_pretty(&rating.anchors_used).unwrap_or_default()}
                            </pre>
                        }
                    } else {
                        <p class="muted">{"Submit the form to see the evaluation."}</p>
                    }
                </div>
            </div>
        </div>
    }
}

fn field(name: &'static str, value: String, oninput: Callback<InputEvent>) -> Html {
    html! {
        <label class="field">
            <span class="field-name">{name}</span>
            <input class="field-input" {value} {oninput} />
        </label>
    }
}
