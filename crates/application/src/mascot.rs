//! Decorative mascot selection

use domain::CurrentConditions;
use serde::Serialize;

/// At or below this temperature (°C) the cold mascot is shown
pub const COLD_THRESHOLD_CELSIUS: f64 = 5.0;

/// Character drawn beside the current conditions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mascot {
    /// Precipitation or thunderstorm
    Rainy,
    /// Dry and cold
    Cold,
    /// Everything else
    Sunny,
}

impl Mascot {
    /// Pick a mascot: rain wins over cold, cold over sunny
    #[must_use]
    pub fn for_conditions(current: &CurrentConditions) -> Self {
        if current.weather_code.condition().is_wet() {
            Self::Rainy
        } else if current.temperature <= COLD_THRESHOLD_CELSIUS {
            Self::Cold
        } else {
            Self::Sunny
        }
    }

    /// Asset identifier
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Rainy => "rainy",
            Self::Cold => "cold",
            Self::Sunny => "sunny",
        }
    }

    /// URL path of the SVG asset
    #[must_use]
    pub fn asset_path(self) -> String {
        format!("/static/mascots/{}.svg", self.id())
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use domain::{DayPhase, WeatherCode};

    use super::*;

    fn conditions(code: u16, temperature: f64) -> CurrentConditions {
        CurrentConditions {
            temperature,
            weather_code: WeatherCode::new(code),
            wind_speed: 3.0,
            wind_direction: 180.0,
            day_phase: DayPhase::Day,
            observed_at: NaiveDate::from_ymd_opt(2026, 1, 10)
                .and_then(|d| d.and_hms_opt(9, 0, 0))
                .expect("valid datetime"),
        }
    }

    #[test]
    fn rain_beats_cold() {
        assert_eq!(Mascot::for_conditions(&conditions(61, -2.0)), Mascot::Rainy);
        assert_eq!(Mascot::for_conditions(&conditions(95, 25.0)), Mascot::Rainy);
    }

    #[test]
    fn cold_at_threshold() {
        assert_eq!(Mascot::for_conditions(&conditions(0, 5.0)), Mascot::Cold);
        assert_eq!(Mascot::for_conditions(&conditions(71, -8.0)), Mascot::Cold);
    }

    #[test]
    fn sunny_otherwise() {
        assert_eq!(Mascot::for_conditions(&conditions(0, 5.1)), Mascot::Sunny);
        assert_eq!(Mascot::for_conditions(&conditions(9999, 20.0)), Mascot::Sunny);
    }

    #[test]
    fn asset_path() {
        assert_eq!(Mascot::Cold.asset_path(), "/static/mascots/cold.svg");
    }
}
