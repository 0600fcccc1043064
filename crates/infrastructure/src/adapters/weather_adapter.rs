//! Weather adapter - Implements WeatherPort using integration_weather

use application::ports::WeatherPort;
use async_trait::async_trait;
use domain::{FetchError, GeoLocation, WeatherReport};
use integration_weather::{OpenMeteoClient, WeatherClient, WeatherConfig};
use tracing::{debug, instrument};

/// Adapter for weather services using Open-Meteo API
#[derive(Debug)]
pub struct WeatherAdapter {
    client: OpenMeteoClient,
}

impl WeatherAdapter {
    /// Create with custom configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn with_config(config: WeatherConfig) -> Result<Self, FetchError> {
        Ok(Self {
            client: OpenMeteoClient::new(config)?,
        })
    }
}

#[async_trait]
impl WeatherPort for WeatherAdapter {
    #[instrument(skip(self), fields(lat = location.latitude(), lon = location.longitude()))]
    async fn fetch_report(&self, location: GeoLocation) -> Result<WeatherReport, FetchError> {
        let result = self.client.fetch(location).await;

        match &result {
            Ok(report) => {
                debug!(
                    temperature = report.current.temperature,
                    code = %report.current.weather_code,
                    days = report.forecast.days().len(),
                    "Retrieved weather report"
                );
            },
            Err(e) => {
                debug!(error = %e, "Failed to get weather report");
            },
        }

        result
    }

    #[instrument(skip(self))]
    async fn is_available(&self) -> bool {
        self.client.is_healthy().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_creates_adapter() {
        assert!(WeatherAdapter::with_config(WeatherConfig::default()).is_ok());
    }

    #[test]
    fn debug_impl() {
        let adapter = WeatherAdapter::with_config(WeatherConfig::default()).unwrap();
        let debug_str = format!("{adapter:?}");
        assert!(debug_str.contains("WeatherAdapter"));
    }

    #[test]
    fn trait_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<WeatherAdapter>();
    }
}
