use serde::{Deserialize, Serialize};

use super::error::AppError;

/// Which signal the heatmap cells are weighted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeatWeight {
    /// Historical job count
    #[default]
    Count,
    /// Net earnings
    Earnings,
    /// Surge multiplier
    Surge,
}

impl HeatWeight {
    /// Returns the query-parameter value used in API URLs.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Count => "count",
            Self::Earnings => "earnings",
            Self::Surge => "surge",
        }
    }

    /// Returns a human-readable label for the weight selector.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Count => "Count",
            Self::Earnings => "Earnings",
            Self::Surge => "Surge",
        }
    }

    /// All selectable weights.
    pub fn all() -> &'static [HeatWeight] {
        &[Self::Count, Self::Earnings, Self::Surge]
    }
}

impl std::fmt::Display for HeatWeight {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl std::str::FromStr for HeatWeight {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "count" => Ok(Self::Count),
            "earnings" => Ok(Self::Earnings),
            "surge" => Ok(Self::Surge),
            _ => Err(AppError::ConfigError(format!("Invalid heat weight: {s}"))),
        }
    }
}

/// Parameters of one heatmap prediction query. Equal queries hit the
/// per-session cache instead of the network.
#[derive(Clone, Debug, PartialEq)]
pub struct HeatmapQuery {
    pub lat: f64,
    pub lng: f64,
    pub radius_km: f64,
    pub weight: HeatWeight,
    /// Local ISO timestamp the prediction is for.
    pub when: String,
}

impl HeatmapQuery {
    /// Query-string pairs, percent-encoded by the HTTP client.
    pub fn params(&self) -> [(&'static str, String); 6] {
        [
            ("lat", self.lat.to_string()),
            ("lng", self.lng.to_string()),
            ("radius_km", self.radius_km.to_string()),
            ("weight", self.weight.code().to_string()),
            ("when", self.when.clone()),
            ("mode", "grid".to_string()),
        ]
    }

    /// Session-cache key; identical queries within one browsing session
    /// reuse the first response.
    pub fn cache_key(&self) -> String {
        format!(
            "{:.5}|{:.5}|{:.1}|{}|{}",
            self.lat, self.lng, self.radius_km, self.weight, self.when
        )
    }
}

/// One weighted H3 cell of the prediction grid. `value` is normalized to
/// `0..=1` within the response; `boundary` is the cell polygon as
/// `[lat, lng]` vertices.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct HeatCell {
    pub h3: String,
    pub value: f64,
    pub center: [f64; 2],
    pub boundary: Vec<[f64; 2]>,
}

impl HeatCell {
    /// Fill color on a green -> yellow -> red ramp, readable over the base
    /// map.
    pub fn fill_color(&self) -> String {
        let v = self.value.clamp(0.0, 1.0);
        let r = (255.0 * v).round() as u8;
        let g = 210.0f64.mul_add(1.0 - v, 45.0).round() as u8;
        format!("rgba({r}, {g}, 60, 0.56)")
    }

    pub fn tooltip(&self) -> String {
        format!("{:.0}% · {}", self.value * 100.0, self.h3)
    }
}

/// Cell grid answered by `/heatmap/predict` in grid mode.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct HeatmapGrid {
    pub center: [f64; 2],
    pub when_local: String,
    pub radius_km: f64,
    pub weight: HeatWeight,
    pub count: u32,
    #[serde(default)]
    pub cells: Vec<HeatCell>,
}
