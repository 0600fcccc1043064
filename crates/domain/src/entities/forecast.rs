//! Current conditions and the 7-day forecast

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::errors::DomainError;
use crate::value_objects::{DayPhase, WeatherCode};

/// Number of days in a weekly forecast
pub const FORECAST_DAYS: usize = 7;

/// Conditions at observation time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentConditions {
    /// Temperature in Celsius
    pub temperature: f64,
    /// WMO weather code
    pub weather_code: WeatherCode,
    /// Wind speed in km/h
    pub wind_speed: f64,
    /// Wind direction in degrees (0-360)
    pub wind_direction: f64,
    /// Sun up or down
    pub day_phase: DayPhase,
    /// Observation time in the location's local time
    pub observed_at: NaiveDateTime,
}

/// One day of the forecast
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyForecastEntry {
    /// Calendar day
    pub date: NaiveDate,
    /// Dominant WMO weather code
    pub weather_code: WeatherCode,
    /// Maximum temperature in Celsius
    pub temperature_max: f64,
    /// Minimum temperature in Celsius
    pub temperature_min: f64,
}

/// Exactly seven consecutive-or-later days, strictly ascending by date,
/// starting with today
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeeklyForecast {
    days: Vec<DailyForecastEntry>,
}

impl WeeklyForecast {
    /// Build a forecast, checking length and ordering
    ///
    /// # Errors
    ///
    /// Returns `DomainError::ForecastLength` unless there are exactly
    /// [`FORECAST_DAYS`] entries, and `DomainError::ForecastOrder` if any
    /// date is not after its predecessor.
    pub fn new(days: Vec<DailyForecastEntry>) -> Result<Self, DomainError> {
        if days.len() != FORECAST_DAYS {
            return Err(DomainError::ForecastLength {
                expected: FORECAST_DAYS,
                actual: days.len(),
            });
        }

        if let Some(pair) = days.windows(2).find(|pair| pair[0].date >= pair[1].date) {
            return Err(DomainError::ForecastOrder {
                previous: pair[0].date,
                next: pair[1].date,
            });
        }

        Ok(Self { days })
    }

    /// Entries in date order
    #[must_use]
    pub fn days(&self) -> &[DailyForecastEntry] {
        &self.days
    }

    /// The first entry
    #[must_use]
    pub fn today(&self) -> Option<&DailyForecastEntry> {
        self.days.first()
    }

    /// Iterate entries in date order
    pub fn iter(&self) -> std::slice::Iter<'_, DailyForecastEntry> {
        self.days.iter()
    }
}

impl<'a> IntoIterator for &'a WeeklyForecast {
    type Item = &'a DailyForecastEntry;
    type IntoIter = std::slice::Iter<'a, DailyForecastEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.days.iter()
    }
}

impl<'de> Deserialize<'de> for WeeklyForecast {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw {
            days: Vec<DailyForecastEntry>,
        }

        let raw = Raw::deserialize(deserializer)?;
        Self::new(raw.days).map_err(serde::de::Error::custom)
    }
}

/// A successful fetch: current conditions and the week ahead
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReport {
    /// Conditions right now
    pub current: CurrentConditions,
    /// The next seven days, today first
    pub forecast: WeeklyForecast,
}
