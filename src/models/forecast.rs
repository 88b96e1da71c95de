use serde::Deserialize;

/// Expected earnings-per-hour for one hour of the day.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ForecastPoint {
    pub hour: u32,
    #[serde(default)]
    pub trips: Option<f64>,
    pub eph: f64,
}

/// Hourly demand forecast for a city and day of week.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Forecast {
    pub city_id: u32,
    pub city_name: String,
    pub dow: u8,
    #[serde(default)]
    pub forecast: Vec<ForecastPoint>,
    #[serde(default)]
    pub current_surge: Option<f64>,
}

impl Forecast {
    /// (hour labels, eph values) for the demand chart, sorted by hour.
    pub fn series_data(&self) -> (Vec<String>, Vec<f64>) {
        let mut points: Vec<&ForecastPoint> = self.forecast.iter().collect();
        points.sort_by_key(|p| p.hour);

        let x_data = points.iter().map(|p| format!("{}:00", p.hour)).collect();
        let y_data = points.iter().map(|p| p.eph).collect();
        (x_data, y_data)
    }

    /// The hour with the highest expected earnings-per-hour.
    pub fn peak(&self) -> Option<&ForecastPoint> {
        self.forecast
            .iter()
            .max_by(|a, b| a.eph.partial_cmp(&b.eph).unwrap_or(std::cmp::Ordering::Equal))
    }

    pub fn surge_label(&self) -> String {
        self.current_surge
            .map_or_else(|| "—".to_string(), |s| format!("x{s:.2}"))
    }
}
