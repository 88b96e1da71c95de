use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct StatusProps {
    pub loading: bool,
    #[prop_or_default]
    pub error: Option<String>,
}

/// Inline fetch status: a spinner while loading, the failure message when a
/// request failed, nothing otherwise.
#[function_component(Status)]
pub fn status(props: &StatusProps) -> Html {
    if props.loading {
        return html! {
            <div class="status loading">
                <div class="spinner"></div>
                <p>{"Loading data..."}</p>
            </div>
        };
    }
    match &props.error {
        Some(message) => html! {
            <div class="status error">
                <p>{"⚠ "}{message}</p>
            </div>
        },
        None => html! {},
    }
}
