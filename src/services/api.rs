use serde::{Serialize, de::DeserializeOwned};

use crate::models::{
    earnings::{
        DailyEarnings, IncentiveRow, NudgeList, TodayEarnings, TodayLive, TodaySummary, TodayTime,
        TopEarner,
    },
    error::AppError,
    forecast::Forecast,
    heatmap::{HeatmapGrid, HeatmapQuery},
    offer::{
        CompletionRecord, CompletionRequest, Decision, DecisionRequest, DecisionResponse, Offer,
    },
    rating::{RideRating, RideRequest},
};

// CONSTANTS
const BASE_URL: &str = "http://localhost:8000";

// API CONFIGURATION
/// Configuration for the Smart Earner API client.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    /// Creates a builder for constructing an `ApiConfig`.
    pub fn builder() -> ApiConfigBuilder {
        ApiConfigBuilder::default()
    }

    pub fn top_earners_url(&self, limit: u32) -> String {
        format!("{}/earners/top?limit={limit}", self.base_url)
    }

    pub fn earner_daily_url(&self, earner_id: &str, limit: u32) -> String {
        format!("{}/earners/{earner_id}/daily?limit={limit}", self.base_url)
    }

    pub fn earner_today_url(&self, earner_id: &str) -> String {
        format!("{}/earners/{earner_id}/today", self.base_url)
    }

    pub fn earner_today_time_url(&self, earner_id: &str) -> String {
        format!("{}/earners/{earner_id}/today_time", self.base_url)
    }

    pub fn earner_today_summary_url(&self, earner_id: &str) -> String {
        format!("{}/earners/{earner_id}/today_summary", self.base_url)
    }

    pub fn today_live_url(&self, driver_id: &str) -> String {
        format!("{}/flow/drivers/{driver_id}/today_live", self.base_url)
    }

    pub fn next_offer_url(&self, driver_id: &str, debug: bool) -> String {
        format!("{}/flow/drivers/{driver_id}/next?debug={debug}", self.base_url)
    }

    pub fn decision_url(&self, driver_id: &str) -> String {
        format!("{}/flow/drivers/{driver_id}/decision", self.base_url)
    }

    pub fn complete_url(&self, driver_id: &str) -> String {
        format!("{}/flow/drivers/{driver_id}/complete", self.base_url)
    }

    pub fn incentives_url(&self, earner_id: &str) -> String {
        format!("{}/incentives/{earner_id}", self.base_url)
    }

    pub fn nudges_url(&self, earner_id: &str) -> String {
        format!("{}/nudges/{earner_id}", self.base_url)
    }

    pub fn rate_ride_url(&self, debug: bool) -> String {
        format!("{}/rides/rate?debug={debug}", self.base_url)
    }

    pub fn forecast_url(&self, city_id: u32, day_of_week: u8) -> String {
        format!("{}/forecast/{city_id}/{day_of_week}", self.base_url)
    }

    /// Base heatmap path; the query itself is appended as encoded pairs from
    /// `HeatmapQuery::params` (the `when` timestamp carries `+` and `:`).
    pub fn heatmap_url(&self) -> String {
        format!("{}/heatmap/predict", self.base_url)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfigBuilder::default().build()
    }
}

// API CONFIGURATION BUILDER
/// Builder for constructing an `ApiConfig` with custom settings.
#[derive(Debug, Default)]
pub struct ApiConfigBuilder {
    base_url: Option<String>,
}

impl ApiConfigBuilder {
    /// Sets a custom base URL (primarily for testing).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Builds the `ApiConfig`.
    pub fn build(self) -> ApiConfig {
        ApiConfig {
            base_url: self.base_url.unwrap_or_else(|| BASE_URL.to_string()),
        }
    }
}

// SMART EARNER CLIENT
/// HTTP client for the Smart Earner backend.
pub struct SmartEarnerClient {
    http: reqwest::Client,
    config: ApiConfig,
}

impl SmartEarnerClient {
    /// Creates a new client with default configuration.
    pub fn new() -> Result<Self, AppError> {
        Self::with_config(ApiConfig::default())
    }

    /// Creates a new client with the specified configuration.
    pub fn with_config(config: ApiConfig) -> Result<Self, AppError> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| AppError::ConfigError(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { http, config })
    }

    /// Returns a reference to the client's configuration.
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    pub async fn top_earners(&self, limit: u32) -> Result<Vec<TopEarner>, AppError> {
        self.get_json(&self.config.top_earners_url(limit)).await
    }

    pub async fn earner_daily(
        &self,
        earner_id: &str,
        limit: u32,
    ) -> Result<Vec<DailyEarnings>, AppError> {
        self.get_json(&self.config.earner_daily_url(earner_id, limit))
            .await
    }

    pub async fn earner_today(&self, earner_id: &str) -> Result<TodayEarnings, AppError> {
        self.get_json(&self.config.earner_today_url(earner_id)).await
    }

    pub async fn earner_today_time(&self, earner_id: &str) -> Result<TodayTime, AppError> {
        self.get_json(&self.config.earner_today_time_url(earner_id))
            .await
    }

    pub async fn earner_today_summary(&self, earner_id: &str) -> Result<TodaySummary, AppError> {
        self.get_json(&self.config.earner_today_summary_url(earner_id))
            .await
    }

    pub async fn today_live(&self, driver_id: &str) -> Result<TodayLive, AppError> {
        self.get_json(&self.config.today_live_url(driver_id)).await
    }

    pub async fn next_offer(&self, driver_id: &str, debug: bool) -> Result<Offer, AppError> {
        self.get_json(&self.config.next_offer_url(driver_id, debug))
            .await
    }

    pub async fn send_decision(
        &self,
        driver_id: &str,
        offer_id: &str,
        decision: Decision,
    ) -> Result<DecisionResponse, AppError> {
        let body = DecisionRequest {
            offer_id: offer_id.to_string(),
            decision,
        };
        self.post_json(&self.config.decision_url(driver_id), &body)
            .await
    }

    pub async fn complete_ride(
        &self,
        driver_id: &str,
        completion: &CompletionRequest,
    ) -> Result<CompletionRecord, AppError> {
        self.post_json(&self.config.complete_url(driver_id), completion)
            .await
    }

    pub async fn incentives(&self, earner_id: &str) -> Result<Vec<IncentiveRow>, AppError> {
        self.get_json(&self.config.incentives_url(earner_id)).await
    }

    pub async fn nudges(&self, earner_id: &str) -> Result<NudgeList, AppError> {
        self.get_json(&self.config.nudges_url(earner_id)).await
    }

    pub async fn rate_ride(
        &self,
        request: &RideRequest,
        debug: bool,
    ) -> Result<RideRating, AppError> {
        self.post_json(&self.config.rate_ride_url(debug), request)
            .await
    }

    pub async fn forecast(&self, city_id: u32, day_of_week: u8) -> Result<Forecast, AppError> {
        self.get_json(&self.config.forecast_url(city_id, day_of_week))
            .await
    }

    pub async fn heatmap_predict(&self, query: &HeatmapQuery) -> Result<HeatmapGrid, AppError> {
        let request = self
            .http
            .get(self.config.heatmap_url())
            .query(&query.params());
        let response = request.send().await.map_err(|e| self.classify_error(e))?;
        Self::decode(response).await
    }

    /// Executes a single GET and decodes the JSON body.
    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, AppError> {
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| self.classify_error(e))?;
        Self::decode(response).await
    }

    /// Executes a single POST with a JSON body and decodes the response.
    async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        url: &str,
        body: &B,
    ) -> Result<T, AppError> {
        let response = self
            .http
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(|e| self.classify_error(e))?;
        Self::decode(response).await
    }

    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, AppError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::StatusError {
                status: status.as_u16(),
                body,
            });
        }

        response
            .json()
            .await
            .map_err(|e| AppError::ApiError(format!("Failed to parse response: {e}")))
    }

    /// Converts a reqwest error into an appropriate `AppError`.
    fn classify_error(&self, error: reqwest::Error) -> AppError {
        if error.is_timeout() {
            AppError::ApiError(format!("Request timeout: {error}"))
        } else if error.is_request() {
            AppError::ApiError(format!("Request error: {error}"))
        } else {
            AppError::ApiError(format!("Network error: {error}"))
        }
    }
}

impl Default for SmartEarnerClient {
    fn default() -> Self {
        Self::new().expect("Failed to create default client")
    }
}

// CONVENIENCE FUNCTIONS
/// Fetches the demand forecast using default configuration.
pub async fn fetch_forecast(city_id: u32, day_of_week: u8) -> Result<Forecast, AppError> {
    SmartEarnerClient::new()?.forecast(city_id, day_of_week).await
}

/// Fetches live running totals for a driver.
pub async fn fetch_today_live(driver_id: &str) -> Result<TodayLive, AppError> {
    SmartEarnerClient::new()?.today_live(driver_id).await
}

/// Fetches the next simulated offer for a driver.
pub async fn fetch_next_offer(driver_id: &str) -> Result<Offer, AppError> {
    SmartEarnerClient::new()?.next_offer(driver_id, false).await
}

/// Posts an accept/decline decision for an offer.
pub async fn send_decision(
    driver_id: &str,
    offer_id: &str,
    decision: Decision,
) -> Result<DecisionResponse, AppError> {
    SmartEarnerClient::new()?
        .send_decision(driver_id, offer_id, decision)
        .await
}

/// Marks an accepted ride as finished.
pub async fn complete_ride(
    driver_id: &str,
    completion: &CompletionRequest,
) -> Result<CompletionRecord, AppError> {
    SmartEarnerClient::new()?
        .complete_ride(driver_id, completion)
        .await
}

/// Fetches the predicted heatmap grid around a point.
pub async fn fetch_heatmap(query: &HeatmapQuery) -> Result<HeatmapGrid, AppError> {
    SmartEarnerClient::new()?.heatmap_predict(query).await
}

/// Scores a synthetic ride request.
pub async fn submit_rating(request: &RideRequest, debug: bool) -> Result<RideRating, AppError> {
    SmartEarnerClient::new()?.rate_ride(request, debug).await
}

/// Fetches wellness nudges for an earner.
pub async fn fetch_nudges(earner_id: &str) -> Result<NudgeList, AppError> {
    SmartEarnerClient::new()?.nudges(earner_id).await
}

/// Fetches the season leaderboard.
pub async fn fetch_top_earners(limit: u32) -> Result<Vec<TopEarner>, AppError> {
    SmartEarnerClient::new()?.top_earners(limit).await
}

/// Fetches daily history and incentive rows together.
pub async fn fetch_earner_history(
    earner_id: &str,
    daily_limit: u32,
) -> Result<crate::models::earnings::EarnerHistory, AppError> {
    let client = SmartEarnerClient::new()?;
    let daily = client.earner_daily(earner_id, daily_limit).await?;
    let incentives = client.incentives(earner_id).await?;
    Ok(crate::models::earnings::EarnerHistory { daily, incentives })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::heatmap::HeatWeight;

    #[test]
    fn test_config_builder_defaults() {
        let config = ApiConfig::builder().build();
        assert_eq!(config.base_url, BASE_URL);
    }

    #[test]
    fn test_config_builder_custom_base() {
        let config = ApiConfig::builder().base_url("http://testhost:9999").build();
        assert_eq!(
            config.forecast_url(3, 5),
            "http://testhost:9999/forecast/3/5"
        );
    }

    #[test]
    fn test_earner_url_construction() {
        let config = ApiConfig::default();
        assert_eq!(
            config.earner_daily_url("E10001", 14),
            "http://localhost:8000/earners/E10001/daily?limit=14"
        );
        assert_eq!(
            config.top_earners_url(10),
            "http://localhost:8000/earners/top?limit=10"
        );
        assert_eq!(
            config.earner_today_summary_url("E10001"),
            "http://localhost:8000/earners/E10001/today_summary"
        );
    }

    #[test]
    fn test_flow_url_construction() {
        let config = ApiConfig::default();
        assert_eq!(
            config.next_offer_url("d42", false),
            "http://localhost:8000/flow/drivers/d42/next?debug=false"
        );
        assert_eq!(
            config.decision_url("d42"),
            "http://localhost:8000/flow/drivers/d42/decision"
        );
        assert_eq!(
            config.today_live_url("d42"),
            "http://localhost:8000/flow/drivers/d42/today_live"
        );
    }

    #[test]
    fn test_heatmap_query_params() {
        let query = HeatmapQuery {
            lat: 51.9244,
            lng: 4.4777,
            radius_km: 3.0,
            weight: HeatWeight::Earnings,
            when: "2025-10-04T17:00:00+02:00".to_string(),
        };
        let params = query.params();
        assert!(params.contains(&("weight", "earnings".to_string())));
        assert!(params.contains(&("mode", "grid".to_string())));
        assert!(params.contains(&("when", "2025-10-04T17:00:00+02:00".to_string())));
    }

    #[test]
    fn test_decision_body_serialization() {
        let body = DecisionRequest {
            offer_id: "offer_123456".to_string(),
            decision: Decision::Decline,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["offer_id"], "offer_123456");
        assert_eq!(json["decision"], "decline");
    }
}
