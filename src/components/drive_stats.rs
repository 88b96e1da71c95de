use chrono::{Local, Timelike, Utc};
use gloo_timers::callback::Interval;
use yew::prelude::*;

use crate::components::heatmap_panel::HeatmapPanel;
use crate::components::history_panel::HistoryPanel;
use crate::components::schedule_sheet::ScheduleSheet;
use crate::components::stat_card::StatCard;
use crate::components::status::Status;
use crate::config::Config;
use crate::hooks::use_today_live::use_today_live;
use crate::hooks::use_work_session::SessionHandle;
use crate::models::schedule::{ScheduleEditor, SchedulePlan};
use crate::utils::time::format_clock;

/// Drive-stats view: live KPI cards, the shift clock, the demand heatmap,
/// earnings history, and the smart-plan sheet.
#[function_component(DriveStats)]
pub fn drive_stats() -> Html {
    let driver_id = AttrValue::from(Config::DEFAULT_DRIVER_ID);
    let live = use_today_live(driver_id.clone());
    let session = use_context::<SessionHandle>().expect("session context missing");
    let editor = use_state(ScheduleEditor::new);

    // Minute tick so the elapsed-shift card moves without a fetch
    let now = use_state(Utc::now);
    {
        let now = now.clone();
        use_effect_with((), move |()| {
            let interval = Interval::new(Config::CLOCK_TICK_MS, move || now.set(Utc::now()));
            move || drop(interval)
        });
    }

    let elapsed = session
        .elapsed_minutes(*now)
        .map(|mins| format_clock(mins as f64));

    let on_shift_toggle = {
        let session = session.clone();
        Callback::from(move |_: MouseEvent| {
            if session.is_running() {
                session.end.emit(());
            } else {
                session.start.emit(());
            }
        })
    };

    let open_sheet = {
        let editor = editor.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*editor).clone();
            let plan = next
                .accepted_plan()
                .cloned()
                .unwrap_or_else(|| SchedulePlan::demo(Local::now().date_naive()));
            next.load_plan(plan);
            editor.set(next);
        })
    };

    let on_editor_change = {
        let editor = editor.clone();
        Callback::from(move |next: ScheduleEditor| editor.set(next))
    };

    let now_minutes = {
        let local = Local::now();
        (local.hour() * 60 + local.minute()) as u16
    };

    html! {
        <div class="drive-stats">
            <Status loading={live.is_loading()} error={live.error().map(String::from)} />

            <div class="summary-grid">
                if let Some(totals) = live.data() {
                    <StatCard title="Income Today" value={totals.earnings_label()} />
                    <StatCard title="Time on Road" value={totals.time_label()} hint="hrs:min" />
                }
                <StatCard
                    title="Shift"
                    value={elapsed.unwrap_or_else(|| "—".to_string())}
                >
                    <button class="btn" onclick={on_shift_toggle}>
                        { if session.is_running() { "End shift" } else { "Start shift" } }
                    </button>
                </StatCard>
                <StatCard title="Smart Plan" value={plan_summary(&editor)}>
                    <button class="btn btn-primary" onclick={open_sheet}>
                        { if editor.accepted_plan().is_some() { "Review plan" } else { "Build plan" } }
                    </button>
                </StatCard>
            </div>

            <section class="map-panel">
                <h3>{"Where demand is heading"}</h3>
                <HeatmapPanel />
            </section>

            <HistoryPanel earner_id={driver_id} />

            if editor.is_open() {
                <ScheduleSheet
                    editor={(*editor).clone()}
                    on_change={on_editor_change}
                    now_minutes={now_minutes}
                />
            }
        </div>
    }
}

fn plan_summary(editor: &ScheduleEditor) -> String {
    editor.accepted_plan().map_or_else(
        || "No plan yet".to_string(),
        |plan| format!("{} blocks", plan.blocks.len()),
    )
}
