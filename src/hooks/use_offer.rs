use gloo_timers::callback::Interval;
use gloo_timers::future::TimeoutFuture;
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::config::Config;
use crate::models::offer::{CompletionRequest, Decision, Offer, OfferStatus};
use crate::services::api::{complete_ride, fetch_next_offer, send_decision};
use crate::utils::text::extract_euro;

/// Everything the offer screen needs: the current offer, the countdown, the
/// transition/decision flags, and the action callbacks.
#[derive(Clone, PartialEq)]
pub struct OfferHandle {
    pub offer: Option<Rc<Offer>>,
    pub secs_left: u32,
    pub loading: bool,
    pub deciding: bool,
    pub fading: bool,
    pub error: Option<String>,
    pub decide: Callback<Decision>,
    pub complete: Callback<()>,
}

impl OfferHandle {
    /// Actions are disabled while busy, expired, or already decided.
    pub fn actions_disabled(&self) -> bool {
        let expired = self.secs_left == 0
            || self
                .offer
                .as_ref()
                .is_some_and(|o| o.status == OfferStatus::Expired);
        let pending = self.offer.as_ref().is_some_and(|o| o.status.is_pending());
        self.loading || self.deciding || expired || !pending
    }
}

/// Drives the expiring-offer screen: fetch an offer, count its TTL down
/// once per second, crossfade to the next offer at zero while still
/// pending, and post accept/decline/complete decisions. Remaining time is
/// re-seeded from each fresh offer, never persisted.
#[hook]
pub fn use_offer(driver_id: AttrValue) -> OfferHandle {
    let offer = use_state(|| None::<Rc<Offer>>);
    let secs_left = use_state(|| 0u32);
    let loading = use_state(|| false);
    let deciding = use_state(|| false);
    let fading = use_state(|| false);
    let error = use_state(|| None::<String>);
    let epoch = use_state(|| 0u32); // Bumped for every offer transition

    // Fetch the current epoch's offer. Epoch 0 is the initial load; later
    // epochs crossfade.
    {
        let offer = offer.clone();
        let secs_left = secs_left.clone();
        let loading = loading.clone();
        let fading = fading.clone();
        let error = error.clone();
        let epoch_value = *epoch;

        use_effect_with((epoch_value, driver_id.clone()), move |(epoch_value, driver_id)| {
            let driver_id = driver_id.clone();
            let is_transition = *epoch_value > 0;
            let aborted = Rc::new(Cell::new(false));
            let aborted_check = aborted.clone();

            spawn_local(async move {
                if is_transition {
                    fading.set(true);
                } else {
                    loading.set(true);
                }
                error.set(None);

                match fetch_next_offer(&driver_id).await {
                    Ok(next) if !aborted_check.get() => {
                        let ttl = if next.ttl_seconds == 0 {
                            Config::OFFER_FALLBACK_TTL_SECS
                        } else {
                            next.ttl_seconds
                        };
                        offer.set(Some(Rc::new(next)));
                        secs_left.set(ttl);
                    }
                    Err(e) if !aborted_check.get() => {
                        error.set(Some(e.to_string()));
                    }
                    _ => {} // Request was superseded, ignore result
                }

                loading.set(false);
                if is_transition {
                    // Swap happens while faded out; fade back in afterwards
                    TimeoutFuture::new(Config::OFFER_FADE_MS).await;
                    if !aborted_check.get() {
                        fading.set(false);
                    }
                }
            });

            move || {
                aborted.set(true);
            }
        });
    }

    let offer_key = offer.as_ref().map(|o| o.offer_id.clone());
    let pending = offer.as_ref().is_some_and(|o| o.status.is_pending());
    let secs_value = *secs_left;

    // Countdown: tick once, re-arming on every change like the view it
    // mirrors, so each tick reads a fresh value.
    {
        let secs_left = secs_left.clone();
        let offer_key = offer_key.clone();

        use_effect_with((offer_key, secs_value, pending), move |(_, secs, pending)| {
            let interval = (*pending && *secs > 0).then(|| {
                let current = *secs;
                Interval::new(1_000, move || {
                    secs_left.set(current.saturating_sub(1));
                })
            });
            move || drop(interval)
        });
    }

    // A pending offer that hit zero transitions to the next one.
    {
        let epoch = epoch.clone();
        let has_offer = offer.is_some();

        use_effect_with(
            (offer_key, secs_value == 0, pending),
            move |(_, at_zero, pending)| {
                if has_offer && *at_zero && *pending {
                    epoch.set(*epoch + 1);
                }
                || ()
            },
        );
    }

    let decide = {
        let offer = offer.clone();
        let deciding = deciding.clone();
        let error = error.clone();
        let epoch = epoch.clone();
        let driver_id = driver_id.clone();

        Callback::from(move |decision: Decision| {
            let Some(current) = (*offer).clone() else {
                return;
            };
            let offer = offer.clone();
            let deciding = deciding.clone();
            let error = error.clone();
            let epoch = epoch.clone();
            let driver_id = driver_id.clone();

            deciding.set(true);
            error.set(None);
            spawn_local(async move {
                match send_decision(&driver_id, &current.offer_id, decision).await {
                    Ok(response) => {
                        let mut updated = (*current).clone();
                        updated.status = response.status;
                        offer.set(Some(Rc::new(updated)));
                        if decision == Decision::Decline {
                            // Let the driver see the status flip first
                            TimeoutFuture::new(Config::DECLINE_REFETCH_DELAY_MS).await;
                            epoch.set(*epoch + 1);
                        }
                    }
                    Err(e) => error.set(Some(e.to_string())),
                }
                deciding.set(false);
            });
        })
    };

    let complete = {
        let offer_handle = offer.clone();
        let deciding = deciding.clone();
        let error = error.clone();
        let epoch = epoch.clone();
        let driver_id = driver_id.clone();

        Callback::from(move |(): ()| {
            let Some(current) = (*offer_handle).clone() else {
                return;
            };
            if current.status != OfferStatus::Accepted {
                return;
            }
            let deciding = deciding.clone();
            let error = error.clone();
            let epoch = epoch.clone();
            let driver_id = driver_id.clone();

            let completion = CompletionRequest {
                offer_id: current.offer_id.clone(),
                net_eur: estimated_net_eur(&current),
                duration_mins: current.candidate.est_duration_mins,
            };

            deciding.set(true);
            error.set(None);
            spawn_local(async move {
                match complete_ride(&driver_id, &completion).await {
                    Ok(_) => epoch.set(*epoch + 1), // Move on to the next offer
                    Err(e) => error.set(Some(e.to_string())),
                }
                deciding.set(false);
            });
        })
    };

    OfferHandle {
        offer: (*offer).clone(),
        secs_left: secs_value,
        loading: *loading,
        deciding: *deciding,
        fading: *fading,
        error: (*error).clone(),
        decide,
        complete,
    }
}

/// The euro estimate the scoring service embedded in the profitability
/// reason, or zero when it phrased the reason without one.
fn estimated_net_eur(offer: &Offer) -> f64 {
    extract_euro(&offer.rating.reasons.profitability)
        .and_then(|amount| amount.trim_start_matches('€').replace(',', "").parse().ok())
        .unwrap_or(0.0)
}
