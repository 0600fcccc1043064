//! Forecast page pipeline
//!
//! Resolve the location, fetch the report, present it.

use std::sync::Arc;

use domain::{FetchError, LocationQuery, Place};
use tracing::{debug, instrument};

use super::presenter::Presenter;
use crate::ports::{GeocodingPort, WeatherPort};
use crate::view_model::ForecastPage;

/// Builds forecast pages from location queries
pub struct ForecastService {
    weather: Arc<dyn WeatherPort>,
    geocoder: Arc<dyn GeocodingPort>,
    presenter: Presenter,
}

impl std::fmt::Debug for ForecastService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ForecastService")
            .field("weather", &"<dyn WeatherPort>")
            .field("geocoder", &"<dyn GeocodingPort>")
            .field("presenter", &self.presenter)
            .finish()
    }
}

impl ForecastService {
    /// Create a new forecast service
    #[must_use]
    pub fn new(
        weather: Arc<dyn WeatherPort>,
        geocoder: Arc<dyn GeocodingPort>,
        presenter: Presenter,
    ) -> Self {
        Self {
            weather,
            geocoder,
            presenter,
        }
    }

    /// Run the pipeline for one request
    ///
    /// Errors from the geocoder or weather service are returned unchanged.
    #[instrument(skip(self))]
    pub async fn forecast_page(&self, query: LocationQuery) -> Result<ForecastPage, FetchError> {
        let place = self.resolve(query).await?;
        let report = self.weather.fetch_report(place.location).await?;

        debug!(
            place = %place.name,
            temperature = report.current.temperature,
            code = %report.current.weather_code,
            "Fetched weather report"
        );

        let view = self.presenter.present(&report.current, &report.forecast);
        Ok(ForecastPage::new(place, view))
    }

    /// Whether the weather service answers
    pub async fn is_ready(&self) -> bool {
        self.weather.is_available().await
    }

    async fn resolve(&self, query: LocationQuery) -> Result<Place, FetchError> {
        match query {
            LocationQuery::Coordinates(location) => Ok(Place::from_coordinates(location)),
            LocationQuery::Place(name) => self.geocoder.resolve_place(&name).await,
        }
    }
}
