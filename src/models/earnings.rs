use chrono::NaiveDate;
use serde::{Deserialize, Deserializer};

use crate::utils::time::format_clock;

/// One row of the season leaderboard.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct TopEarner {
    pub earner_id: String,
    pub net: f64,
}

/// One day of historical earnings for an earner.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct DailyEarnings {
    pub date: NaiveDate,
    pub total_net_earnings: f64,
    pub trips_count: u32,
    pub orders_count: u32,
}

impl DailyEarnings {
    pub fn jobs(&self) -> u32 {
        self.trips_count + self.orders_count
    }
}

/// Aggregated base earnings for today.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct TodayEarnings {
    pub today_earnings: f64,
}

/// Hours on the road today, base plus live overlay.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct TodayTime {
    pub today_time_hours: f64,
}

/// Combined daily summary. `avg_rating` is null when no jobs ran yet.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct TodaySummary {
    #[serde(default)]
    pub today_earnings: f64,
    #[serde(default)]
    pub rides_completed: f64,
    #[serde(default)]
    pub avg_rating: Option<f64>,
}

/// Live running totals for the drive-stats KPI cards.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct TodayLive {
    pub earn_eur: f64,
    pub minutes: f64,
}

impl TodayLive {
    pub fn earnings_label(&self) -> String {
        format!("€{:.0}", self.earn_eur)
    }

    /// Minutes on the road as an `"HH:MM"` clock label.
    pub fn time_label(&self) -> String {
        format_clock(self.minutes)
    }
}

/// One weekly incentive program row.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct IncentiveRow {
    pub week: String,
    pub program: String,
    pub target_jobs: u32,
    pub completed_jobs: u32,
    #[serde(deserialize_with = "bool_from_int_or_bool")]
    pub achieved: bool,
    pub bonus_eur: f64,
}

/// SQLite hands booleans through JSON as 0/1; accept both shapes.
fn bool_from_int_or_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::Bool(b) => Ok(b),
        serde_json::Value::Number(n) => Ok(n.as_i64().unwrap_or(0) != 0),
        serde_json::Value::Null => Ok(false),
        other => Err(serde::de::Error::custom(format!(
            "expected bool or integer, got {other}"
        ))),
    }
}

/// Daily history plus incentive rows, fetched together for the history
/// panel.
#[derive(Clone, Debug, PartialEq)]
pub struct EarnerHistory {
    pub daily: Vec<DailyEarnings>,
    pub incentives: Vec<IncentiveRow>,
}

/// Wellness nudge strings for an earner. The backend answers with a
/// `message` instead of `nudges` when it has no session data.
#[derive(Clone, Debug, PartialEq, Default, Deserialize)]
pub struct NudgeList {
    #[serde(default)]
    pub nudges: Vec<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl NudgeList {
    pub fn is_empty(&self) -> bool {
        self.nudges.is_empty()
    }
}
