/// Configuration constants for the application
pub struct Config;

impl Config {
    /// Enable automatic data refresh polling
    pub const ENABLE_AUTO_REFRESH: bool = true;

    /// Forecast refresh interval in milliseconds (10 minutes)
    pub const FORECAST_POLL_INTERVAL_MS: u32 = 600_000;

    /// Live earnings/time polling interval in milliseconds
    pub const LIVE_POLL_INTERVAL_MS: u32 = 30_000;

    /// Fallback offer lifetime when the backend omits `ttl_seconds`
    pub const OFFER_FALLBACK_TTL_SECS: u32 = 30;

    /// Pause before fetching the next offer after a decline, so the driver
    /// sees the status flip first
    pub const DECLINE_REFETCH_DELAY_MS: u32 = 120;

    /// Crossfade duration when swapping to the next offer
    pub const OFFER_FADE_MS: u32 = 260;

    /// Wellness reminder cadence in milliseconds (2 hours)
    pub const REMINDER_INTERVAL_MS: u32 = 7_200_000;

    /// Minute tick for clock-driven displays (elapsed shift, current block)
    pub const CLOCK_TICK_MS: u32 = 60_000;

    /// Driver shown by the dashboard; a login flow is out of scope
    pub const DEFAULT_DRIVER_ID: &'static str = "d42";

    /// City the forecast view opens on
    pub const DEFAULT_CITY_ID: u32 = 3;

    /// Rotterdam center, the heatmap's initial query point
    pub const DEFAULT_HEAT_CENTER: (f64, f64) = (51.9244, 4.4777);

    /// Rows requested for the daily-history panel
    pub const DAILY_HISTORY_LIMIT: u32 = 14;

    /// Rows requested for the leaderboard
    pub const TOP_EARNERS_LIMIT: u32 = 10;
}
