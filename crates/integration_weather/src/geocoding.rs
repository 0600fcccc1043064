//! Open-Meteo geocoding client
//!
//! Resolves a place name to coordinates.

use async_trait::async_trait;
use domain::{FetchError, GeoLocation, Language, Place};
use reqwest::Client;
use tracing::{debug, instrument};

use crate::client::WeatherConfig;
use crate::http::get_json;
use crate::models::{GeocodingResponse, GeocodingResult};

/// Resolves place names to coordinates
#[async_trait]
pub trait GeocodingClient: Send + Sync {
    /// Best match for `name`
    async fn resolve(&self, name: &str) -> Result<Place, FetchError>;
}

/// Open-Meteo geocoding implementation
#[derive(Debug)]
pub struct OpenMeteoGeocoder {
    client: Client,
    base_url: String,
    language: Language,
}

impl OpenMeteoGeocoder {
    /// Create a geocoder against `config.geocoding_base_url`
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: &WeatherConfig) -> Result<Self, FetchError> {
        Ok(Self {
            client: config.http_client()?,
            base_url: config.geocoding_base_url.trim_end_matches('/').to_string(),
            language: Language::default(),
        })
    }

    /// Language for returned place names
    #[must_use]
    pub fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    fn into_place(result: GeocodingResult) -> Result<Place, FetchError> {
        let location = GeoLocation::new(result.latitude, result.longitude)
            .map_err(|e| FetchError::InvalidResponse(e.to_string()))?;

        Ok(Place {
            name: result.name,
            country: result.country,
            location,
        })
    }
}

#[async_trait]
impl GeocodingClient for OpenMeteoGeocoder {
    #[instrument(skip(self), fields(language = %self.language))]
    async fn resolve(&self, name: &str) -> Result<Place, FetchError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(FetchError::LocationNotFound(String::new()));
        }

        let url = format!("{}/search", self.base_url);
        debug!(url = %url, name = %name, "Geocoding place name");

        let request = self.client.get(&url).query(&[
            ("name", name),
            ("count", "1"),
            ("language", self.language.code()),
            ("format", "json"),
        ]);

        let response: GeocodingResponse = get_json(request).await?;
        let result = response
            .results
            .into_iter()
            .next()
            .ok_or_else(|| FetchError::LocationNotFound(name.to_string()))?;

        Self::into_place(result)
    }
}
