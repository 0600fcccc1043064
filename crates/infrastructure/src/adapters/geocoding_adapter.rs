//! Geocoding adapter - Implements GeocodingPort using integration_weather

use application::ports::GeocodingPort;
use async_trait::async_trait;
use domain::{FetchError, Language, Place};
use integration_weather::{GeocodingClient, OpenMeteoGeocoder, WeatherConfig};
use tracing::{debug, instrument};

/// Adapter for place name lookups using the Open-Meteo geocoder
#[derive(Debug)]
pub struct GeocodingAdapter {
    geocoder: OpenMeteoGeocoder,
}

impl GeocodingAdapter {
    /// Create an adapter returning names in `language`
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn with_config(config: &WeatherConfig, language: Language) -> Result<Self, FetchError> {
        Ok(Self {
            geocoder: OpenMeteoGeocoder::new(config)?.with_language(language),
        })
    }
}

#[async_trait]
impl GeocodingPort for GeocodingAdapter {
    #[instrument(skip(self))]
    async fn resolve_place(&self, name: &str) -> Result<Place, FetchError> {
        let result = self.geocoder.resolve(name).await;

        match &result {
            Ok(place) => {
                debug!(
                    place = %place.name,
                    lat = place.location.latitude(),
                    lon = place.location.longitude(),
                    "Resolved place"
                );
            },
            Err(e) => {
                debug!(error = %e, "Failed to resolve place");
            },
        }

        result
    }
}
