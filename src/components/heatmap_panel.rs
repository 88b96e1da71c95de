use chrono::{Duration, Local, SecondsFormat};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::components::status::Status;
use crate::config::Config;
use crate::hooks::use_heatmap::use_heatmap;
use crate::models::heatmap::{HeatCell, HeatWeight, HeatmapQuery};

/// Pixel size of the square SVG viewport.
const VIEW_SIZE: f64 = 600.0;

/// Kilometres per degree of latitude; longitude is corrected by cos(lat).
const KM_PER_DEG: f64 = 111.32;

#[derive(Properties, PartialEq)]
pub struct HeatmapPanelProps {
    #[prop_or(Config::DEFAULT_HEAT_CENTER.0)]
    pub lat: f64,
    #[prop_or(Config::DEFAULT_HEAT_CENTER.1)]
    pub lng: f64,
}

/// Demand heatmap: weighted H3 cells around a query point, drawn as SVG
/// polygons on a green→red ramp. Identical queries within the session are
/// served from the hook's cache.
#[function_component(HeatmapPanel)]
pub fn heatmap_panel(props: &HeatmapPanelProps) -> Html {
    let lat = use_state(|| props.lat);
    let lng = use_state(|| props.lng);
    let radius_km = use_state(|| 3.0f64);
    let weight = use_state(HeatWeight::default);
    let hour_offset = use_state(|| 0i64);

    // Pinned per offset choice; recomputing every render would defeat the
    // session cache.
    let when = use_memo(*hour_offset, |offset| when_local(*offset));

    let query = HeatmapQuery {
        lat: *lat,
        lng: *lng,
        radius_km: *radius_km,
        weight: *weight,
        when: (*when).clone(),
    };
    let state = use_heatmap(query);

    let on_lat = numeric_input(lat.clone());
    let on_lng = numeric_input(lng.clone());
    let on_radius = {
        let radius_km = radius_km.clone();
        Callback::from(move |e: InputEvent| {
            let target: HtmlInputElement = e.target_unchecked_into();
            if let Ok(value) = target.value().parse::<f64>() {
                radius_km.set(value.clamp(0.5, 10.0));
            }
        })
    };
    let on_weight = {
        let weight = weight.clone();
        Callback::from(move |e: Event| {
            let target: HtmlSelectElement = e.target_unchecked_into();
            if let Ok(parsed) = target.value().parse::<HeatWeight>() {
                weight.set(parsed);
            }
        })
    };
    let on_offset = {
        let hour_offset = hour_offset.clone();
        Callback::from(move |e: Event| {
            let target: HtmlSelectElement = e.target_unchecked_into();
            if let Ok(value) = target.value().parse::<i64>() {
                hour_offset.set(value);
            }
        })
    };

    let status_line = state
        .data()
        .map(|grid| format!("Loaded {} zones · {}", grid.count, grid.when_local));

    html! {
        <div class="heatmap-panel">
            <div class="chipbar">
                <label class="chip">
                    <span class="chip-label">{"Lat"}</span>
                    <input class="chip-input" value={format!("{:.4}", *lat)} oninput={on_lat} />
                </label>
                <label class="chip">
                    <span class="chip-label">{"Lng"}</span>
                    <input class="chip-input" value={format!("{:.4}", *lng)} oninput={on_lng} />
                </label>
                <label class="chip">
                    <span class="chip-label">{"Radius"}</span>
                    <input
                        class="chip-range"
                        type="range"
                        min="0.5"
                        max="10"
                        step="0.5"
                        value={radius_km.to_string()}
                        oninput={on_radius}
                    />
                    <span class="chip-suffix">{format!("{:.1} km", *radius_km)}</span>
                </label>
                <label class="chip">
                    <span class="chip-label">{"Weight"}</span>
                    <select class="chip-select" onchange={on_weight}>
                        {
                            HeatWeight::all().iter().map(|w| {
                                let selected = *w == *weight;
                                html! {
                                    <option value={w.code()} {selected}>{w.label()}</option>
                                }
                            }).collect::<Html>()
                        }
                    </select>
                </label>
                <label class="chip">
                    <span class="chip-label">{"When"}</span>
                    <select class="chip-select" onchange={on_offset}>
                        {
                            (0..=6i64).map(|h| {
                                let label = if h == 0 { "Now".to_string() } else { format!("+{h}h") };
                                let selected = h == *hour_offset;
                                html! {
                                    <option value={h.to_string()} {selected}>{label}</option>
                                }
                            }).collect::<Html>()
                        }
                    </select>
                </label>
                if let Some(line) = status_line {
                    <span class="chip status-chip">{line}</span>
                }
            </div>

            <Status loading={state.is_loading()} error={state.error().map(String::from)} />

            if let Some(grid) = state.data() {
                <svg
                    class="heat-map"
                    viewBox={format!("0 0 {VIEW_SIZE} {VIEW_SIZE}")}
                    preserveAspectRatio="xMidYMid meet"
                >
                    <circle
                        cx={(VIEW_SIZE / 2.0).to_string()}
                        cy={(VIEW_SIZE / 2.0).to_string()}
                        r={(VIEW_SIZE / 2.0 - 2.0).to_string()}
                        class="heat-radius"
                    />
                    {
                        grid.cells.iter().map(|cell| {
                            let points = cell_points(cell, *lat, *lng, *radius_km);
                            html! {
                                <polygon key={cell.h3.clone()} points={points} fill={cell.fill_color()}>
                                    <title>{cell.tooltip()}</title>
                                </polygon>
                            }
                        }).collect::<Html>()
                    }
                </svg>
            }
        </div>
    }
}

fn numeric_input(handle: UseStateHandle<f64>) -> Callback<InputEvent> {
    Callback::from(move |e: InputEvent| {
        let target: HtmlInputElement = e.target_unchecked_into();
        if let Ok(value) = target.value().parse::<f64>() {
            handle.set(value);
        }
    })
}

/// Local ISO timestamp `offset_hours` from now, the backend's `when` format.
fn when_local(offset_hours: i64) -> String {
    (Local::now() + Duration::hours(offset_hours)).to_rfc3339_opts(SecondsFormat::Secs, false)
}

/// Projects a cell boundary onto the SVG viewport: equirectangular around
/// the query center, scaled so the radius spans half the viewport.
fn cell_points(cell: &HeatCell, center_lat: f64, center_lng: f64, radius_km: f64) -> String {
    let scale = (VIEW_SIZE / 2.0) / radius_km.max(0.1);
    let lat_cos = center_lat.to_radians().cos();

    cell.boundary
        .iter()
        .map(|[lat, lng]| {
            let x_km = (lng - center_lng) * KM_PER_DEG * lat_cos;
            let y_km = (lat - center_lat) * KM_PER_DEG;
            let x = VIEW_SIZE / 2.0 + x_km * scale;
            let y = VIEW_SIZE / 2.0 - y_km * scale;
            format!("{x:.1},{y:.1}")
        })
        .collect::<Vec<_>>()
        .join(" ")
}
