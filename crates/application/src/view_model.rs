//! Render-ready view models
//!
//! Everything a template needs, with no lookups left to do.

use chrono::{NaiveDate, NaiveDateTime};
use domain::Place;
use serde::Serialize;

use crate::mascot::Mascot;

/// Current conditions as displayed
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CurrentView {
    /// Temperature in Celsius
    pub temperature: f64,
    /// Wind speed in km/h
    pub wind_speed: f64,
    /// Wind direction in degrees
    pub wind_direction: f64,
    /// Raw provider code
    pub weather_code: u16,
    /// Icon identifier
    pub icon: &'static str,
    /// Caption for the icon
    pub label: &'static str,
    /// URL path of the icon asset
    pub icon_path: String,
    /// Local observation time
    pub observed_at: NaiveDateTime,
}

/// One forecast day as displayed
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyView {
    /// Calendar day
    pub date: NaiveDate,
    /// Short weekday name in the display language
    pub weekday: &'static str,
    /// Icon identifier
    pub icon: &'static str,
    /// Caption for the icon
    pub label: &'static str,
    /// URL path of the icon asset
    pub icon_path: String,
    /// Maximum temperature in Celsius
    pub temperature_max: f64,
    /// Minimum temperature in Celsius
    pub temperature_min: f64,
}

/// Output of the presenter
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewModel {
    pub current: CurrentView,
    /// Same order as the input forecast, today first
    pub daily: Vec<DailyView>,
    pub mascot: Mascot,
    pub mascot_path: String,
}

/// A fully resolved forecast page
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForecastPage {
    /// Where the forecast is for
    pub place: Place,
    /// `place` formatted for headings
    pub place_name: String,
    pub view: ViewModel,
}

impl ForecastPage {
    #[must_use]
    pub fn new(place: Place, view: ViewModel) -> Self {
        Self {
            place_name: place.display_name(),
            place,
            view,
        }
    }
}
