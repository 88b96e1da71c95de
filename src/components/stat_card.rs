use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct StatCardProps {
    pub title: String,
    pub value: String,
    #[prop_or_default]
    pub hint: Option<String>,
    #[prop_or_default]
    pub children: Html,
}

/// One KPI card of a stats grid.
#[function_component(StatCard)]
pub fn stat_card(props: &StatCardProps) -> Html {
    html! {
        <div class="stat-card">
            <h3>{&props.title}</h3>
            <p class="stat-value">{&props.value}</p>
            if let Some(hint) = &props.hint {
                <p class="stat-hint">{hint}</p>
            }
            {props.children.clone()}
        </div>
    }
}
