pub mod drive_stats;
pub mod forecast_chart;
pub mod forecast_view;
pub mod heatmap_panel;
pub mod history_panel;
pub mod offer_view;
pub mod rating_form;
pub mod schedule_sheet;
pub mod stat_card;
pub mod status;
pub mod wellness_view;

pub use drive_stats::DriveStats;
pub use forecast_view::ForecastView;
pub use offer_view::OfferView;
pub use rating_form::RatingForm;
pub use wellness_view::WellnessView;
