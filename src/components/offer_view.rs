use yew::prelude::*;

use crate::components::status::Status;
use crate::config::Config;
use crate::hooks::use_offer::use_offer;
use crate::models::offer::{Decision, OfferGrade, OfferStatus};
use crate::utils::text::{extract_euro, extract_surge, short_reason};

/// Driver-offer screen: overall score, grade chip, factor grid, countdown
/// bar, and accept/decline actions. Expired pending offers crossfade into
/// the next one automatically.
#[function_component(OfferView)]
pub fn offer_view() -> Html {
    let handle = use_offer(AttrValue::from(Config::DEFAULT_DRIVER_ID));

    let card_class = if handle.fading {
        "offer-card fading"
    } else {
        "offer-card"
    };

    let Some(offer) = handle.offer.clone() else {
        return html! {
            <div class="offer-view">
                <Status loading={handle.loading} error={handle.error.clone()} />
            </div>
        };
    };

    let rating = &offer.rating;
    let candidate = &offer.candidate;
    let grade = OfferGrade::from_overall(rating.overall);
    let progress = offer.countdown_progress(handle.secs_left);
    let disabled = handle.actions_disabled();

    let on_accept = {
        let decide = handle.decide.clone();
        Callback::from(move |_: MouseEvent| decide.emit(Decision::Accept))
    };
    let on_decline = {
        let decide = handle.decide.clone();
        Callback::from(move |_: MouseEvent| decide.emit(Decision::Decline))
    };
    let on_complete = {
        let complete = handle.complete.clone();
        Callback::from(move |_: MouseEvent| complete.emit(()))
    };

    html! {
        <div class="offer-view">
            <section class={card_class}>
                <div class="offer-head">
                    <div>
                        <div class="offer-score">{format!("{:.0}", rating.overall)}</div>
                        <div class="muted">{"Overall score"}</div>
                    </div>
                    <div class={classes!("grade-chip", grade.css_class())}>
                        {grade.label()}
                    </div>
                </div>

                <div class="offer-summary">
                    {summary_item("Distance", format!("{} km", candidate.est_distance_km))}
                    {summary_item("Duration", format!("{:.0} min", candidate.est_duration_mins))}
                    {summary_item(
                        "Estimate",
                        extract_euro(&rating.reasons.profitability).unwrap_or_else(|| "—".to_string()),
                    )}
                    {summary_item(
                        "Rider",
                        candidate.rider_rating.map_or_else(
                            || "—".to_string(),
                            |r| format!("{r:.2}★"),
                        ),
                    )}
                    {summary_item(
                        "Surge",
                        extract_surge(&rating.reasons.profitability).unwrap_or_else(|| "—".to_string()),
                    )}
                </div>

                <div class="factor-grid">
                    {
                        rating.factor_rows().into_iter().map(|(label, value, reason)| {
                            let value = value.round().clamp(0.0, 100.0);
                            let reason = short_reason(reason);
                            html! {
                                <div class="factor" key={label}>
                                    <div class="factor-head">
                                        <span class="factor-label">{label}</span>
                                        <span class="factor-score" style={score_circle_style(value)}>
                                            {format!("{value:.0}")}
                                        </span>
                                    </div>
                                    if !reason.is_empty() {
                                        <div class="factor-reason">{reason}</div>
                                    }
                                </div>
                            }
                        }).collect::<Html>()
                    }
                </div>

                <div class="offer-strip">
                    <span>{"Offer: "}<b>{&offer.offer_id}</b></span>
                    <span class="dot">{"•"}</span>
                    <span>
                        {"Status: "}
                        <b class={offer.status.css_class()}>{offer.status.label()}</b>
                    </span>
                    <span class="dot">{"•"}</span>
                    <span>{"Expires in: "}<b>{format!("{}s", handle.secs_left)}</b></span>
                </div>

                <div class="countdown-track">
                    <div
                        class="countdown-fill"
                        style={format!("width: {:.1}%", progress * 100.0)}
                    />
                </div>

                <div class="offer-actions">
                    if offer.status == OfferStatus::Accepted {
                        <button
                            class="btn btn-primary wide"
                            onclick={on_complete}
                            disabled={handle.deciding}
                        >
                            { if handle.deciding { "…" } else { "Complete ride" } }
                        </button>
                    } else {
                        <button class="btn btn-primary" onclick={on_accept} {disabled}>
                            { if handle.deciding { "…" } else { "Accept" } }
                        </button>
                        <button class="btn btn-ghost" onclick={on_decline} {disabled}>
                            { if handle.deciding { "…" } else { "Decline" } }
                        </button>
                    }
                </div>

                if let Some(message) = &handle.error {
                    <div class="status error"><p>{"⚠ "}{message}</p></div>
                }
            </section>
        </div>
    }
}

fn summary_item(label: &'static str, value: String) -> Html {
    html! {
        <div class="summary-item">
            <div class="summary-value">{value}</div>
            <div class="muted">{label}</div>
        </div>
    }
}

/// Circle darkness tracks the score; light text once the fill gets dark.
fn score_circle_style(value: f64) -> String {
    let lightness = 100.0 - value;
    let color = if value > 60.0 { "#ffffff" } else { "#111111" };
    format!("background: hsl(0, 0%, {lightness:.0}%); color: {color}")
}
