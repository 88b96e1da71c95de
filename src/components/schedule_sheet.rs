use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::models::schedule::{Block, ScheduleEditor};
use crate::utils::time::{Minutes, format_hhmm, parse_hhmm};

#[derive(Properties, PartialEq)]
pub struct ScheduleSheetProps {
    /// Current editor state; the sheet never mutates it in place.
    pub editor: ScheduleEditor,
    /// Every interaction emits the next editor state through here.
    pub on_change: Callback<ScheduleEditor>,
    /// Minute of day, for highlighting the block the clock is inside.
    pub now_minutes: Minutes,
}

/// The smart-plan sheet: a working copy of the daily plan with per-block
/// editing, automatic break reflow, and accept-or-discard semantics.
#[function_component(ScheduleSheet)]
pub fn schedule_sheet(props: &ScheduleSheetProps) -> Html {
    let editor = &props.editor;
    let Some(plan) = editor.working_plan() else {
        return html! {};
    };

    let weekday = plan.day.format("%A").to_string();
    let first_start = plan.first_start().map_or_else(|| "00:00".to_string(), format_hhmm);
    let has_errors = !editor.plan_errors().is_empty();
    let has_accepted = editor.accepted_plan().is_some();
    let current_index = plan.current_block_index(props.now_minutes);

    let emit = |mutate: fn(&mut ScheduleEditor)| {
        let editor = editor.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = editor.clone();
            mutate(&mut next);
            on_change.emit(next);
        })
    };

    let on_close = emit(ScheduleEditor::close);
    let on_cancel_edit = emit(ScheduleEditor::cancel_edit);
    let on_save_edit = emit(|ed| {
        ed.commit_edit();
    });
    let on_delete_schedule = emit(ScheduleEditor::clear_accepted);
    let on_accept = emit(|ed| {
        // A rejected accept keeps the session open with errors flagged
        let _ = ed.accept();
    });

    let on_begin_edit = |index: usize| {
        let editor = editor.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = editor.clone();
            next.begin_edit(index);
            on_change.emit(next);
        })
    };
    let on_remove = |index: usize| {
        let editor = editor.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = editor.clone();
            next.remove_block(index);
            on_change.emit(next);
        })
    };
    let on_time_input = |is_start: bool| {
        let editor = editor.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            let target: HtmlInputElement = e.target_unchecked_into();
            let value = parse_hhmm(&target.value());
            let mut next = editor.clone();
            if is_start {
                next.set_edit_start(value);
            } else {
                next.set_edit_end(value);
            }
            on_change.emit(next);
        })
    };

    let accept_disabled = if has_accepted {
        !editor.has_local_changes() || has_errors
    } else {
        has_errors
    };
    let accept_label = if has_accepted {
        "Save Changes".to_string()
    } else {
        format!("Accept Plan & Start at {first_start}")
    };

    html! {
        <div class="schedule-sheet-overlay">
            <div class="schedule-sheet">
                <div class="schedule-header">
                    <div>
                        <h2 class="schedule-title">{format!("Smart Plan for {weekday}")}</h2>
                        <p class="schedule-subtitle">{"Based on today's demand & traffic"}</p>
                    </div>
                    <button class="close-btn" onclick={on_close.clone()} aria-label="Close">
                        {"×"}
                    </button>
                </div>

                <div class="schedule-pills">
                    {
                        plan.blocks.iter().enumerate().map(|(index, block)| {
                            let class = if current_index == Some(index) {
                                "pill pill-current"
                            } else {
                                "pill"
                            };
                            html! {
                                <div key={index} {class}>
                                    {format!(
                                        "{} {}–{}",
                                        block.label(),
                                        format_hhmm(block.start()),
                                        format_hhmm(block.end()),
                                    )}
                                </div>
                            }
                        }).collect::<Html>()
                    }
                </div>

                <div class="blocks-list">
                    {
                        plan.blocks.iter().enumerate().map(|(index, block)| {
                            let editing = editor.edit().filter(|e| e.index() == index);
                            let error = editor.plan_errors().get(&index);
                            let card_class = classes!(
                                "block-card",
                                block.is_break().then_some("block-break"),
                                error.is_some().then_some("block-error"),
                                (current_index == Some(index)).then_some("block-current"),
                            );

                            html! {
                                <div key={index} class={card_class}>
                                    <div class="block-main">
                                        <div class="block-head">
                                            <h3 class="block-type">{block.label()}</h3>
                                            if let Some(edit) = editing {
                                                <div class="edit-controls">
                                                    <input
                                                        type="time"
                                                        class="time-input"
                                                        value={edit.start().map(format_hhmm).unwrap_or_default()}
                                                        oninput={on_time_input(true)}
                                                    />
                                                    <span class="time-separator">{"–"}</span>
                                                    <input
                                                        type="time"
                                                        class="time-input"
                                                        value={edit.end().map(format_hhmm).unwrap_or_default()}
                                                        oninput={on_time_input(false)}
                                                    />
                                                    <button
                                                        class="btn btn-small"
                                                        onclick={on_save_edit.clone()}
                                                        disabled={edit.error().is_some()}
                                                    >
                                                        {"Save"}
                                                    </button>
                                                    <button
                                                        class="btn btn-small btn-ghost"
                                                        onclick={on_cancel_edit.clone()}
                                                    >
                                                        {"Cancel"}
                                                    </button>
                                                </div>
                                            } else {
                                                <span class="block-time">
                                                    {format!(
                                                        "{}–{}",
                                                        format_hhmm(block.start()),
                                                        format_hhmm(block.end()),
                                                    )}
                                                </span>
                                            }
                                            if editor.is_reflowed(index) {
                                                <span class="reflowed-badge">{"Reflowed"}</span>
                                            }
                                        </div>

                                        if let Some(message) = editing.and_then(|e| e.error()) {
                                            <p class="error-text">{message}</p>
                                        }

                                        {block_details(block)}

                                        if let Some(message) = error {
                                            <p class="error-text">{message}</p>
                                        }
                                    </div>

                                    <div class="block-actions">
                                        if block.is_break() {
                                            <button
                                                class="btn btn-small btn-ghost"
                                                onclick={on_remove(index)}
                                                aria-label="Remove break"
                                            >
                                                {"Remove"}
                                            </button>
                                        } else {
                                            <button
                                                class="btn btn-small"
                                                onclick={on_begin_edit(index)}
                                                aria-label="Edit"
                                            >
                                                {"Edit"}
                                            </button>
                                        }
                                    </div>
                                </div>
                            }
                        }).collect::<Html>()
                    }
                </div>

                <div class="schedule-footer">
                    <p class="footer-text">{"Drive ≤120m • Break ≥10m"}</p>
                    <div class="footer-actions">
                        if has_accepted {
                            <button class="btn btn-danger" onclick={on_delete_schedule}>
                                {"Delete Schedule"}
                            </button>
                        } else {
                            <button class="btn btn-ghost" onclick={on_close}>
                                {"No thanks"}
                            </button>
                        }
                        <button
                            class="btn btn-primary"
                            onclick={on_accept}
                            disabled={accept_disabled}
                        >
                            {accept_label}
                        </button>
                    </div>
                </div>
            </div>
        </div>
    }
}

fn block_details(block: &Block) -> Html {
    match block {
        Block::Drive { reason, est_eph, .. } => html! {
            <div class="drive-details">
                <span class="drive-reason">{reason}</span>
                <span class="dot">{"•"}</span>
                <span class="drive-earning">{format!("~€{est_eph:.1}/hr est.")}</span>
            </div>
        },
        Block::Break { nearby, .. } => html! {
            <div class="break-details">
                <div class="muted">{"Auto-adjusted between drive blocks"}</div>
                if !nearby.is_empty() {
                    <ul class="nearby-list">
                        {
                            nearby.iter().map(|stop| html! {
                                <li key={stop.name.clone()}>
                                    {format!("{} · {:.1} km", stop.name, stop.dist_km)}
                                </li>
                            }).collect::<Html>()
                        }
                    </ul>
                }
            </div>
        },
    }
}
