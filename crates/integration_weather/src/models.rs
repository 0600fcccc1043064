//! Raw Open-Meteo payloads
//!
//! Only the fields Tenki reads are modelled; everything else is ignored.

use serde::Deserialize;

/// Forecast API response
#[derive(Debug, Clone, Deserialize)]
pub struct ApiResponse {
    pub current_weather: Option<CurrentWeatherData>,
    pub daily: Option<DailyData>,
}

/// `current_weather` block
#[derive(Debug, Clone, Deserialize)]
pub struct CurrentWeatherData {
    pub time: String,
    pub temperature: f64,
    pub windspeed: f64,
    pub winddirection: f64,
    /// Signed so that odd provider values reach the fallback icon
    pub weathercode: i64,
    #[serde(default = "default_is_day")]
    pub is_day: u8,
}

const fn default_is_day() -> u8 {
    1
}

/// `daily` block, one array per variable
#[derive(Debug, Clone, Deserialize)]
pub struct DailyData {
    pub time: Vec<String>,
    pub weathercode: Vec<i64>,
    pub temperature_2m_max: Vec<f64>,
    pub temperature_2m_min: Vec<f64>,
}

/// Geocoding API response
///
/// `results` is omitted entirely when nothing matches.
#[derive(Debug, Clone, Deserialize)]
pub struct GeocodingResponse {
    #[serde(default)]
    pub results: Vec<GeocodingResult>,
}

/// One geocoding match
#[derive(Debug, Clone, Deserialize)]
pub struct GeocodingResult {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub country: Option<String>,
}
