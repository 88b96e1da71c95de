use chrono::{Datelike, Local};
use web_sys::HtmlSelectElement;
use yew::prelude::*;

use crate::components::forecast_chart::ForecastChart;
use crate::components::stat_card::StatCard;
use crate::components::status::Status;
use crate::config::Config;
use crate::hooks::use_forecast::use_forecast;
use crate::hooks::use_top_earners::use_top_earners;
use crate::utils::time::format_hhmm;

const WEEKDAYS: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// Landing view: per-hour demand forecast for the selected day, plus the
/// season leaderboard.
#[function_component(ForecastView)]
pub fn forecast_view() -> Html {
    // Backend weekday numbering is 0 = Sunday
    let today = Local::now().weekday().num_days_from_sunday() as u8;
    let day = use_state(move || today);

    let state = use_forecast(Config::DEFAULT_CITY_ID, *day);
    let leaderboard = use_top_earners(Config::TOP_EARNERS_LIMIT);

    let on_day_change = {
        let day = day.clone();
        Callback::from(move |e: Event| {
            let target: HtmlSelectElement = e.target_unchecked_into();
            if let Ok(value) = target.value().parse::<u8>() {
                day.set(value.min(6));
            }
        })
    };

    html! {
        <div class="forecast-view">
            <div class="view-toolbar">
                <h2>{"Today's Activity Forecast"}</h2>
                <select
                    class="day-selector"
                    onchange={on_day_change}
                    aria-label="Select day of week"
                >
                    {
                        WEEKDAYS.iter().enumerate().map(|(i, name)| {
                            let selected = i as u8 == *day;
                            html! {
                                <option value={i.to_string()} {selected}>{*name}</option>
                            }
                        }).collect::<Html>()
                    }
                </select>
            </div>

            <Status loading={state.is_loading()} error={state.error().map(String::from)} />

            if let Some(forecast) = state.data() {
                <div class="summary-grid">
                    <StatCard title="City" value={forecast.city_name.clone()} />
                    <StatCard
                        title="Peak Hour"
                        value={forecast.peak().map_or_else(
                            || "—".to_string(),
                            |p| format_hhmm((p.hour % 24) as u16 * 60),
                        )}
                        hint={forecast.peak().map(|p| format!("~€{:.1}/hr", p.eph))}
                    />
                    <StatCard title="Current Surge" value={forecast.surge_label()} />
                </div>

                <ForecastChart forecast={forecast.clone()} />
            }

            <section class="leaderboard">
                <h3>{"Top earners"}</h3>
                <Status
                    loading={leaderboard.is_loading()}
                    error={leaderboard.error().map(String::from)}
                />
                if let Some(earners) = leaderboard.data() {
                    <ol class="leaderboard-list">
                        {
                            earners.iter().map(|earner| html! {
                                <li key={earner.earner_id.clone()}>
                                    <span class="earner-id">{&earner.earner_id}</span>
                                    <span class="earner-net">{format!("€{:.0}", earner.net)}</span>
                                </li>
                            }).collect::<Html>()
                        }
                    </ol>
                }
            </section>
        </div>
    }
}
