pub mod earnings;
pub mod error;
pub mod forecast;
pub mod heatmap;
pub mod offer;
pub mod rating;
pub mod schedule;
