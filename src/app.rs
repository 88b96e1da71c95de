use yew::prelude::*;

use crate::components::{DriveStats, ForecastView, OfferView, RatingForm, WellnessView};
use crate::hooks::use_work_session::use_work_session;

#[derive(Clone, Copy, PartialEq, Eq)]
enum View {
    Forecast,
    DriveStats,
    Offers,
    RideRating,
    Wellness,
}

impl View {
    fn label(self) -> &'static str {
        match self {
            Self::Forecast => "Forecast",
            Self::DriveStats => "Drive Stats",
            Self::Offers => "Offers",
            Self::RideRating => "Ride Rating",
            Self::Wellness => "Wellness",
        }
    }

    fn all() -> [Self; 5] {
        [
            Self::Forecast,
            Self::DriveStats,
            Self::Offers,
            Self::RideRating,
            Self::Wellness,
        ]
    }
}

#[function_component(App)]
pub fn app() -> Html {
    let view = use_state(|| View::Forecast);
    let session = use_work_session();

    html! {
        <ContextProvider<crate::hooks::use_work_session::SessionHandle> context={session}>
            <div class="app-container">
                <header class="app-header">
                    <h1>{"Smart Earner"}</h1>
                    <nav class="app-nav">
                        {
                            View::all().into_iter().map(|item| {
                                let class = if item == *view { "nav-btn active" } else { "nav-btn" };
                                let onclick = {
                                    let view = view.clone();
                                    Callback::from(move |_| view.set(item))
                                };
                                html! {
                                    <button key={item.label()} {class} {onclick}>
                                        {item.label()}
                                    </button>
                                }
                            }).collect::<Html>()
                        }
                    </nav>
                </header>

                <main class="app-main">
                    {
                        match *view {
                            View::Forecast => html! { <ForecastView /> },
                            View::DriveStats => html! { <DriveStats /> },
                            View::Offers => html! { <OfferView /> },
                            View::RideRating => html! { <RatingForm /> },
                            View::Wellness => html! { <WellnessView /> },
                        }
                    }
                </main>

                <style>
                    {include_str!("style.css")}
                </style>
            </div>
        </ContextProvider<crate::hooks::use_work_session::SessionHandle>>
    }
}
