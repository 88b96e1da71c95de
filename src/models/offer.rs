use serde::{Deserialize, Serialize};

use super::rating::RideRating;

/// Lifecycle of a server-issued ride offer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OfferStatus {
    Pending,
    Accepted,
    Declined,
    Expired,
}

impl OfferStatus {
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Accepted => "accepted",
            Self::Declined => "declined",
            Self::Expired => "expired",
        }
    }

    /// CSS class for the status strip.
    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Pending => "status-pending",
            Self::Accepted => "status-accepted",
            Self::Declined => "status-declined",
            Self::Expired => "status-expired",
        }
    }
}

/// The ride behind an offer, as generated by the flow simulator.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct RideCandidate {
    #[serde(default)]
    pub rider_id: Option<String>,
    #[serde(default)]
    pub rider_rating: Option<f64>,
    #[serde(default)]
    pub driver_id: Option<String>,
    pub city_id: u32,
    pub request_time: String,
    #[serde(default)]
    pub product: Option<String>,
    pub driver_lat: f64,
    pub driver_lon: f64,
    pub pickup_lat: f64,
    pub pickup_lon: f64,
    #[serde(default)]
    pub pickup_hex_id9: Option<String>,
    #[serde(default)]
    pub drop_lat: Option<f64>,
    #[serde(default)]
    pub drop_lon: Option<f64>,
    pub est_distance_km: f64,
    pub est_duration_mins: f64,
}

/// A time-limited ride proposal the driver must accept or decline.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Offer {
    pub offer_id: String,
    pub driver_id: String,
    pub status: OfferStatus,
    pub ttl_seconds: u32,
    pub candidate: RideCandidate,
    pub rating: RideRating,
}

impl Offer {
    /// Fraction of the offer's lifetime remaining, for the countdown bar.
    /// Only a pending offer shows progress.
    pub fn countdown_progress(&self, secs_left: u32) -> f64 {
        if !self.status.is_pending() || self.ttl_seconds == 0 {
            return 0.0;
        }
        f64::from(secs_left.min(self.ttl_seconds)) / f64::from(self.ttl_seconds)
    }
}

/// Driver's verdict on an offer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Decision {
    Accept,
    Decline,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DecisionRequest {
    pub offer_id: String,
    pub decision: Decision,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct DecisionResponse {
    pub offer_id: String,
    pub status: OfferStatus,
}

/// Payload for marking an accepted ride as finished.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CompletionRequest {
    pub offer_id: String,
    pub net_eur: f64,
    pub duration_mins: f64,
}

/// Echo record from the completion endpoint. The shape is loose upstream,
/// so every field is optional.
#[derive(Clone, Debug, PartialEq, Default, Deserialize)]
pub struct CompletionRecord {
    #[serde(default)]
    pub offer_id: Option<String>,
    #[serde(default)]
    pub net_eur: Option<f64>,
    #[serde(default)]
    pub duration_mins: Option<f64>,
    #[serde(default)]
    pub status: Option<String>,
}

/// Qualitative grade chip derived from the overall score.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OfferGrade {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl OfferGrade {
    pub fn from_overall(overall: f64) -> Self {
        if overall >= 85.0 {
            Self::Excellent
        } else if overall >= 70.0 {
            Self::Good
        } else if overall >= 55.0 {
            Self::Fair
        } else {
            Self::Poor
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::Fair => "Fair",
            Self::Poor => "Poor",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Excellent => "grade-excellent",
            Self::Good => "grade-good",
            Self::Fair => "grade-fair",
            Self::Poor => "grade-poor",
        }
    }
}
