use yew::prelude::*;

use crate::components::status::Status;
use crate::config::Config;
use crate::hooks::use_nudges::use_nudges;
use crate::hooks::use_reminder::use_reminder;

#[derive(Properties, PartialEq)]
struct ReminderPopupProps {
    visible: bool,
    icon: &'static str,
    title: &'static str,
    body: &'static str,
    on_done: Callback<()>,
}

#[function_component(ReminderPopup)]
fn reminder_popup(props: &ReminderPopupProps) -> Html {
    if !props.visible {
        return html! {};
    }
    let on_done = {
        let on_done = props.on_done.clone();
        Callback::from(move |_: MouseEvent| on_done.emit(()))
    };
    html! {
        <div class="reminder-popup">
            <h3>{props.icon}{" "}{props.title}</h3>
            <p>{props.body}</p>
            <button class="btn btn-primary" onclick={on_done}>{"Mark as Done"}</button>
        </div>
    }
}

/// Wellness view: backend nudges plus timer-driven hydration and stretch
/// reminders. Dismissals persist so a reload does not re-nag.
#[function_component(WellnessView)]
pub fn wellness_view() -> Html {
    let nudges = use_nudges(AttrValue::from(Config::DEFAULT_DRIVER_ID));
    let water = use_reminder("water_last_dismissed", Config::REMINDER_INTERVAL_MS);
    let stretch = use_reminder("stretch_last_dismissed", Config::REMINDER_INTERVAL_MS);

    html! {
        <div class="wellness-view">
            <header class="wellness-header">
                <h2>{"Wellness & Safety"}</h2>
                <p class="muted">
                    {"Smart reminders to keep you alert, safe, and performing your best."}
                </p>
            </header>

            <Status loading={nudges.is_loading()} error={nudges.error().map(String::from)} />

            if let Some(list) = nudges.data() {
                if list.is_empty() {
                    <p class="muted">
                        {list.message.clone().unwrap_or_else(|| "No nudges right now.".to_string())}
                    </p>
                } else {
                    <ul class="nudge-list">
                        {
                            list.nudges.iter().map(|nudge| html! {
                                <li class="nudge">{nudge}</li>
                            }).collect::<Html>()
                        }
                    </ul>
                }
            }

            <div class="wellness-grid">
                <div class="card">
                    <div class="icon">{"💧"}</div>
                    <h3>{"Stay Hydrated"}</h3>
                    <p>{"Drink water regularly to stay alert, especially on long shifts."}</p>
                </div>
                <div class="card">
                    <div class="icon">{"🧘"}</div>
                    <h3>{"Stretch Break"}</h3>
                    <p>{"Quick 2-minute stretches reduce fatigue. Try neck rolls and shoulder shrugs."}</p>
                </div>
                <div class="card">
                    <div class="icon">{"🕓"}</div>
                    <h3>{"Rest Reminder"}</h3>
                    <p>{"Long stints online wear you down. Plan an end time and keep to it."}</p>
                </div>
            </div>

            <ReminderPopup
                visible={water.visible}
                icon="💧"
                title="Hydration Reminder"
                body="You've been active for over two hours. Take a sip of water and \
                      recharge before continuing."
                on_done={water.mark_done.clone()}
            />
            <ReminderPopup
                visible={stretch.visible}
                icon="🧘"
                title="Stretch Break"
                body="Quick 2-minute stretches can reduce fatigue and improve focus."
                on_done={stretch.mark_done.clone()}
            />
        </div>
    }
}
