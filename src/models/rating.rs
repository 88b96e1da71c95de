use serde::{Deserialize, Serialize};

/// Per-factor scores (0–100) behind an overall ride rating.
#[derive(Clone, Debug, PartialEq, Default, Deserialize, Serialize)]
pub struct ScoreBreakdown {
    #[serde(default)]
    pub profitability: f64,
    #[serde(default)]
    pub time: f64,
    #[serde(default)]
    pub pickup: f64,
    #[serde(default)]
    pub traffic: f64,
    #[serde(default)]
    pub customer: f64,
}

/// One explanatory sentence per factor, phrased by the scoring service.
#[derive(Clone, Debug, PartialEq, Default, Deserialize, Serialize)]
pub struct ScoreReasons {
    #[serde(default)]
    pub profitability: String,
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub pickup: String,
    #[serde(default)]
    pub traffic: String,
    #[serde(default)]
    pub customer: String,
}

/// Scoring result for a ride, returned by `POST /rides/rate` and embedded in
/// driver offers. `anchors_used` is an opaque debug payload, shown verbatim
/// when the debug toggle is on.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct RideRating {
    pub overall: f64,
    #[serde(default)]
    pub breakdown: ScoreBreakdown,
    #[serde(default)]
    pub reasons: ScoreReasons,
    #[serde(default)]
    pub anchors_used: serde_json::Value,
}

impl RideRating {
    /// (label, score, reason) rows for the factor grid, in display order.
    pub fn factor_rows(&self) -> [(&'static str, f64, &str); 5] {
        [
            ("Profitability", self.breakdown.profitability, self.reasons.profitability.as_str()),
            ("Time", self.breakdown.time, self.reasons.time.as_str()),
            ("Pickup", self.breakdown.pickup, self.reasons.pickup.as_str()),
            ("Traffic", self.breakdown.traffic, self.reasons.traffic.as_str()),
            ("Customer", self.breakdown.customer, self.reasons.customer.as_str()),
        ]
    }

    pub fn has_anchors(&self) -> bool {
        match &self.anchors_used {
            serde_json::Value::Object(map) => !map.is_empty(),
            serde_json::Value::Null => false,
            _ => true,
        }
    }
}

/// Synthetic ride request submitted from the rating simulator form.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RideRequest {
    pub city_id: u32,
    pub request_time: String,
    pub driver_lat: f64,
    pub driver_lon: f64,
    pub pickup_lat: f64,
    pub pickup_lon: f64,
    pub drop_lat: f64,
    pub drop_lon: f64,
    pub est_distance_km: f64,
    pub est_duration_mins: f64,
    pub rider_id: String,
    pub rider_rating: f64,
}

impl RideRequest {
    /// A plausible Amsterdam ride, used to seed the simulator form.
    pub fn sample(request_time: String) -> Self {
        Self {
            city_id: 1,
            request_time,
            driver_lat: 52.3702,
            driver_lon: 4.8952,
            pickup_lat: 52.3676,
            pickup_lon: 4.9041,
            drop_lat: 52.3770,
            drop_lon: 4.8970,
            est_distance_km: 7.5,
            est_duration_mins: 22.0,
            rider_id: "r123".to_string(),
            rider_rating: 4.92,
        }
    }
}
