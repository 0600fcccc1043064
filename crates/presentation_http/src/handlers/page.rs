//! Forecast page handler

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Html,
};
use domain::{FetchError, GeoLocation, LocationQuery};
use serde::Deserialize;
use tracing::{instrument, warn};

use crate::{error::ApiError, state::AppState};

/// Shown for every fetch failure except an unknown place
pub const UNAVAILABLE_MESSAGE: &str =
    "Weather data is currently unavailable. Please try again later.";

/// Query string of `GET /`
///
/// Coordinates are taken as text so that garbage renders the page with a
/// message instead of axum's plain-text rejection.
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    pub city: Option<String>,
    pub lat: Option<String>,
    pub lon: Option<String>,
}

/// Render the forecast page
///
/// Fetch failures still answer 200 with a message; invalid coordinates
/// answer 400 with the same page layout.
#[instrument(skip(state))]
pub async fn forecast_page(
    State(state): State<AppState>,
    Query(params): Query<PageQuery>,
) -> Result<(StatusCode, Html<String>), ApiError> {
    let city = search_text(&params, &state.config.display.default_city);

    let query = match location_query(&params, &state.config.display.default_city) {
        Ok(query) => query,
        Err(ApiError::BadRequest(message)) => {
            let html = state.templates.render_error_page(&message, &city)?;
            return Ok((StatusCode::BAD_REQUEST, Html(html)));
        },
        Err(e) => return Err(e),
    };

    match state.forecast_service.forecast_page(query).await {
        Ok(page) => {
            let html = state.templates.render_forecast_page(&page, &city)?;
            Ok((StatusCode::OK, Html(html)))
        },
        Err(e) => {
            warn!(error = %e, "Forecast unavailable");
            let html = state
                .templates
                .render_error_page(&fetch_error_message(&e), &city)?;
            Ok((StatusCode::OK, Html(html)))
        },
    }
}

/// Turn the query string into a location
///
/// Coordinates win over a city name; neither means the default city.
pub fn location_query(params: &PageQuery, default_city: &str) -> Result<LocationQuery, ApiError> {
    let lat = non_blank(params.lat.as_deref());
    let lon = non_blank(params.lon.as_deref());

    match (lat, lon) {
        (Some(lat), Some(lon)) => {
            let latitude = parse_coordinate("lat", lat)?;
            let longitude = parse_coordinate("lon", lon)?;
            let location = GeoLocation::new(latitude, longitude)
                .map_err(|e| ApiError::BadRequest(e.to_string()))?;
            Ok(LocationQuery::Coordinates(location))
        },
        (Some(_), None) | (None, Some(_)) => Err(ApiError::BadRequest(
            "Both lat and lon are required".to_string(),
        )),
        (None, None) => {
            let city = non_blank(params.city.as_deref()).unwrap_or(default_city);
            Ok(LocationQuery::place(city))
        },
    }
}

/// User-facing text for a failed fetch
#[must_use]
pub fn fetch_error_message(error: &FetchError) -> String {
    match error {
        FetchError::LocationNotFound(name) if name.is_empty() => {
            "Please enter a place name.".to_string()
        },
        FetchError::LocationNotFound(name) => format!("No place called \"{name}\" was found."),
        _ => UNAVAILABLE_MESSAGE.to_string(),
    }
}

fn search_text(params: &PageQuery, default_city: &str) -> String {
    if non_blank(params.lat.as_deref()).is_some() || non_blank(params.lon.as_deref()).is_some() {
        return String::new();
    }
    non_blank(params.city.as_deref())
        .unwrap_or(default_city)
        .to_string()
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn parse_coordinate(name: &str, value: &str) -> Result<f64, ApiError> {
    value
        .parse::<f64>()
        .map_err(|_| ApiError::BadRequest(format!("{name} must be a number, got {value:?}")))
}
