use std::rc::Rc;

pub mod use_earner_history;
pub mod use_forecast;
pub mod use_heatmap;
pub mod use_nudges;
pub mod use_offer;
pub mod use_reminder;
pub mod use_today_live;
pub mod use_top_earners;
pub mod use_work_session;

/// Lifecycle of one fetched resource. Every data hook hands its view one of
/// these; `Idle` exists for submit-driven fetches that have not run yet.
#[derive(Clone, Debug, PartialEq)]
pub enum FetchState<T> {
    Idle,
    Loading,
    Loaded(Rc<T>),
    Error(String),
}

impl<T> FetchState<T> {
    /// Returns true while a request is in flight
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Returns the data if it is loaded
    pub fn data(&self) -> Option<&Rc<T>> {
        match self {
            Self::Loaded(data) => Some(data),
            _ => None,
        }
    }

    /// Returns the failure message if the fetch failed
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Error(message) => Some(message),
            _ => None,
        }
    }
}
