//! Open-Meteo weather client
//!
//! HTTP client for the Open-Meteo Forecast API.

use std::time::Duration;

use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime};
use domain::{
    CurrentConditions, DailyForecastEntry, DayPhase, FORECAST_DAYS, FetchError, GeoLocation,
    WeatherCode, WeatherReport, WeeklyForecast,
};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::http::get_json;
use crate::models::{ApiResponse, CurrentWeatherData, DailyData};

/// Weather service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherConfig {
    /// Forecast API base URL (default: <https://api.open-meteo.com/v1>)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Geocoding API base URL (default: <https://geocoding-api.open-meteo.com/v1>)
    #[serde(default = "default_geocoding_base_url")]
    pub geocoding_base_url: String,

    /// Per-request timeout in seconds (default: 5)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "https://api.open-meteo.com/v1".to_string()
}

fn default_geocoding_base_url() -> String {
    "https://geocoding-api.open-meteo.com/v1".to_string()
}

const fn default_timeout() -> u64 {
    5
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            geocoding_base_url: default_geocoding_base_url(),
            timeout_secs: default_timeout(),
        }
    }
}

impl WeatherConfig {
    /// Build the shared HTTP client for this configuration
    pub(crate) fn http_client(&self) -> Result<Client, FetchError> {
        Client::builder()
            .timeout(Duration::from_secs(self.timeout_secs))
            .build()
            .map_err(|e| FetchError::NetworkUnavailable(e.to_string()))
    }
}

/// Weather client trait for fetching weather data
#[async_trait]
pub trait WeatherClient: Send + Sync {
    /// Fetch current conditions and the 7-day forecast in one request
    async fn fetch(&self, location: GeoLocation) -> Result<WeatherReport, FetchError>;

    /// Check if the weather service is healthy
    async fn is_healthy(&self) -> bool;
}

/// Open-Meteo HTTP client implementation
#[derive(Debug)]
pub struct OpenMeteoClient {
    client: Client,
    config: WeatherConfig,
}

impl OpenMeteoClient {
    /// Create a new Open-Meteo client with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: WeatherConfig) -> Result<Self, FetchError> {
        let client = config.http_client()?;
        Ok(Self { client, config })
    }

    fn forecast_url(&self) -> String {
        format!("{}/forecast", self.config.base_url.trim_end_matches('/'))
    }

    /// Turn the raw payload into a validated report
    fn parse_report(response: ApiResponse) -> Result<WeatherReport, FetchError> {
        let current = response.current_weather.ok_or_else(|| {
            FetchError::InvalidResponse("No current_weather block in response".to_string())
        })?;
        let daily = response.daily.ok_or_else(|| {
            FetchError::InvalidResponse("No daily block in response".to_string())
        })?;

        let current = Self::parse_current_conditions(&current)?;
        let days = Self::parse_daily_forecasts(&daily)?;
        let forecast =
            WeeklyForecast::new(days).map_err(|e| FetchError::InvalidResponse(e.to_string()))?;

        Ok(WeatherReport { current, forecast })
    }

    fn parse_current_conditions(
        data: &CurrentWeatherData,
    ) -> Result<CurrentConditions, FetchError> {
        Ok(CurrentConditions {
            temperature: data.temperature,
            weather_code: WeatherCode::from_provider(data.weathercode),
            wind_speed: data.windspeed,
            wind_direction: data.winddirection,
            day_phase: DayPhase::from_is_day(data.is_day),
            observed_at: Self::parse_datetime(&data.time)?,
        })
    }

    fn parse_daily_forecasts(data: &DailyData) -> Result<Vec<DailyForecastEntry>, FetchError> {
        let len = data.time.len();
        if data.weathercode.len() != len
            || data.temperature_2m_max.len() != len
            || data.temperature_2m_min.len() != len
        {
            return Err(FetchError::InvalidResponse(format!(
                "Daily arrays differ in length: time={len}, weathercode={}, max={}, min={}",
                data.weathercode.len(),
                data.temperature_2m_max.len(),
                data.temperature_2m_min.len()
            )));
        }

        let mut entries = Vec::with_capacity(FORECAST_DAYS);
        for (i, day) in data.time.iter().enumerate() {
            let date = NaiveDate::parse_from_str(day, "%Y-%m-%d")
                .map_err(|e| FetchError::InvalidResponse(format!("Invalid date {day:?}: {e}")))?;

            entries.push(DailyForecastEntry {
                date,
                weather_code: WeatherCode::from_provider(data.weathercode[i]),
                temperature_max: data.temperature_2m_max[i],
                temperature_min: data.temperature_2m_min[i],
            });
        }

        Ok(entries)
    }

    /// Parse the provider's local timestamp (`2026-02-05T14:00`, seconds optional)
    fn parse_datetime(s: &str) -> Result<NaiveDateTime, FetchError> {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M")
            .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S"))
            .map_err(|_| FetchError::InvalidResponse(format!("Invalid datetime format: {s}")))
    }
}

#[async_trait]
impl WeatherClient for OpenMeteoClient {
    #[instrument(skip(self), fields(lat = %location.latitude(), lon = %location.longitude()))]
    async fn fetch(&self, location: GeoLocation) -> Result<WeatherReport, FetchError> {
        let url = self.forecast_url();
        debug!(url = %url, "Fetching current weather and forecast");

        let request = self.client.get(&url).query(&[
            ("latitude", location.latitude().to_string()),
            ("longitude", location.longitude().to_string()),
            ("current_weather", "true".to_string()),
            (
                "daily",
                "weathercode,temperature_2m_max,temperature_2m_min".to_string(),
            ),
            ("forecast_days", FORECAST_DAYS.to_string()),
            ("timezone", "auto".to_string()),
        ]);

        let response: ApiResponse = get_json(request).await?;
        Self::parse_report(response)
    }

    async fn is_healthy(&self) -> bool {
        self.fetch(GeoLocation::berlin()).await.is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn daily(len: usize) -> DailyData {
        DailyData {
            time: (1..=len).map(|d| format!("2026-03-{d:02}")).collect(),
            weathercode: vec![3; len],
            temperature_2m_max: vec![10.0; len],
            temperature_2m_min: vec![2.0; len],
        }
    }

    fn current() -> CurrentWeatherData {
        CurrentWeatherData {
            time: "2026-03-01T14:00".to_string(),
            temperature: 18.5,
            windspeed: 11.2,
            winddirection: 250.0,
            weathercode: 3,
            is_day: 1,
        }
    }

    #[test]
    fn test_config_defaults() {
        let config = WeatherConfig::default();
        assert_eq!(config.base_url, "https://api.open-meteo.com/v1");
        assert_eq!(
            config.geocoding_base_url,
            "https://geocoding-api.open-meteo.com/v1"
        );
        assert_eq!(config.timeout_secs, 5);
    }

    #[test]
    fn test_config_partial_deserialization() {
        let config: WeatherConfig =
            serde_json::from_str(r#"{"timeout_secs": 10}"#).expect("valid config");
        assert_eq!(config.timeout_secs, 10);
        assert_eq!(config.base_url, "https://api.open-meteo.com/v1");
    }

    #[test]
    fn test_parse_report_success() {
        let report = OpenMeteoClient::parse_report(ApiResponse {
            current_weather: Some(current()),
            daily: Some(daily(7)),
        })
        .expect("valid report");

        assert!((report.current.temperature - 18.5).abs() < f64::EPSILON);
        assert_eq!(report.current.weather_code, WeatherCode::new(3));
        assert_eq!(report.current.day_phase, DayPhase::Day);
        assert_eq!(report.forecast.days().len(), 7);
    }

    #[test]
    fn test_parse_report_missing_daily() {
        let err = OpenMeteoClient::parse_report(ApiResponse {
            current_weather: Some(current()),
            daily: None,
        })
        .unwrap_err();
        assert!(matches!(err, FetchError::InvalidResponse(_)));
    }

    #[test]
    fn test_parse_report_missing_current() {
        let err = OpenMeteoClient::parse_report(ApiResponse {
            current_weather: None,
            daily: Some(daily(7)),
        })
        .unwrap_err();
        assert!(matches!(err, FetchError::InvalidResponse(_)));
    }

    #[test]
    fn test_parse_report_six_days() {
        let err = OpenMeteoClient::parse_report(ApiResponse {
            current_weather: Some(current()),
            daily: Some(daily(6)),
        })
        .unwrap_err();
        assert!(matches!(err, FetchError::InvalidResponse(msg) if msg.contains("exactly 7")));
    }

    #[test]
    fn test_parse_daily_length_mismatch() {
        let mut data = daily(7);
        data.temperature_2m_min.pop();
        let err = OpenMeteoClient::parse_daily_forecasts(&data).unwrap_err();
        assert!(matches!(err, FetchError::InvalidResponse(_)));
    }

    #[test]
    fn test_parse_daily_bad_date() {
        let mut data = daily(7);
        data.time[2] = "March third".to_string();
        assert!(OpenMeteoClient::parse_daily_forecasts(&data).is_err());
    }

    #[test]
    fn test_parse_datetime_formats() {
        assert!(OpenMeteoClient::parse_datetime("2026-02-05T14:00").is_ok());
        assert!(OpenMeteoClient::parse_datetime("2026-02-05T14:00:30").is_ok());
        assert!(OpenMeteoClient::parse_datetime("yesterday").is_err());
    }

    #[test]
    fn test_night_phase() {
        let mut data = current();
        data.is_day = 0;
        let conditions = OpenMeteoClient::parse_current_conditions(&data).expect("valid");
        assert_eq!(conditions.day_phase, DayPhase::Night);
    }

    #[test]
    fn test_forecast_url_trims_trailing_slash() {
        let client = OpenMeteoClient::new(WeatherConfig {
            base_url: "http://localhost:1234/v1/".to_string(),
            ..Default::default()
        })
        .expect("client");
        assert_eq!(client.forecast_url(), "http://localhost:1234/v1/forecast");
    }
}
