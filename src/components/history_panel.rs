use yew::prelude::*;

use crate::components::status::Status;
use crate::hooks::use_earner_history::use_earner_history;

#[derive(Properties, PartialEq)]
pub struct HistoryPanelProps {
    pub earner_id: AttrValue,
}

/// Recent daily earnings and weekly incentive programs.
#[function_component(HistoryPanel)]
pub fn history_panel(props: &HistoryPanelProps) -> Html {
    let state = use_earner_history(props.earner_id.clone());

    html! {
        <section class="history-panel">
            <Status loading={state.is_loading()} error={state.error().map(String::from)} />

            if let Some(history) = state.data() {
                <div class="history-columns">
                    <div class="history-daily">
                        <h3>{"Recent days"}</h3>
                        <table class="history-table">
                            <thead>
                                <tr>
                                    <th>{"Date"}</th>
                                    <th>{"Net"}</th>
                                    <th>{"Jobs"}</th>
                                </tr>
                            </thead>
                            <tbody>
                                {
                                    history.daily.iter().map(|row| html! {
                                        <tr key={row.date.to_string()}>
                                            <td>{row.date.format("%a %d %b").to_string()}</td>
                                            <td>{format!("€{:.2}", row.total_net_earnings)}</td>
                                            <td>{row.jobs()}</td>
                                        </tr>
                                    }).collect::<Html>()
                                }
                            </tbody>
                        </table>
                    </div>

                    <div class="history-incentives">
                        <h3>{"Incentives"}</h3>
                        if history.incentives.is_empty() {
                            <p class="muted">{"No incentive programs this season."}</p>
                        }
                        <ul class="incentive-list">
                            {
                                history.incentives.iter().map(|row| {
                                    let class = if row.achieved { "incentive achieved" } else { "incentive" };
                                    html! {
                                        <li key={format!("{}-{}", row.week, row.program)} {class}>
                                            <span class="incentive-week">{&row.week}</span>
                                            <span class="incentive-program">{&row.program}</span>
                                            <span class="incentive-progress">
                                                {format!("{}/{}", row.completed_jobs, row.target_jobs)}
                                            </span>
                                            <span class="incentive-bonus">
                                                {format!("€{:.0}", row.bonus_eur)}
                                            </span>
                                        </li>
                                    }
                                }).collect::<Html>()
                            }
                        </ul>
                    </div>
                </div>
            }
        </section>
    }
}
