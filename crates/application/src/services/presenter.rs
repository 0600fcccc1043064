//! Forecast presenter
//!
//! Pure mapping from domain forecasts to view models.

use std::sync::Arc;

use chrono::{Datelike, Weekday};
use domain::{CurrentConditions, DayPhase, Language, WeeklyForecast};

use crate::icons::IconMapping;
use crate::mascot::Mascot;
use crate::view_model::{CurrentView, DailyView, ViewModel};

const WEEKDAYS_EN: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];
const WEEKDAYS_JA: [&str; 7] = ["月", "火", "水", "木", "金", "土", "日"];

/// Short weekday name, Monday first
#[must_use]
pub fn weekday_label(weekday: Weekday, language: Language) -> &'static str {
    let index = weekday.num_days_from_monday() as usize;
    match language {
        Language::English => WEEKDAYS_EN[index],
        Language::Japanese => WEEKDAYS_JA[index],
    }
}

/// Turns conditions and forecasts into view models
#[derive(Debug, Clone)]
pub struct Presenter {
    icons: Arc<IconMapping>,
    language: Language,
}

impl Presenter {
    /// Create a presenter over a shared icon table
    #[must_use]
    pub const fn new(icons: Arc<IconMapping>, language: Language) -> Self {
        Self { icons, language }
    }

    /// Build the view model
    ///
    /// Unknown weather codes get the fallback icon; this never fails.
    #[must_use]
    pub fn present(&self, current: &CurrentConditions, forecast: &WeeklyForecast) -> ViewModel {
        let current_icon = self.icons.lookup(current.weather_code, current.day_phase);
        let mascot = Mascot::for_conditions(current);

        let daily = forecast
            .iter()
            .map(|day| {
                let icon = self.icons.lookup(day.weather_code, DayPhase::Day);
                DailyView {
                    date: day.date,
                    weekday: weekday_label(day.date.weekday(), self.language),
                    icon: icon.id,
                    label: icon.label,
                    icon_path: icon.asset_path(),
                    temperature_max: day.temperature_max,
                    temperature_min: day.temperature_min,
                }
            })
            .collect();

        ViewModel {
            current: CurrentView {
                temperature: current.temperature,
                wind_speed: current.wind_speed,
                wind_direction: current.wind_direction,
                weather_code: current.weather_code.value(),
                icon: current_icon.id,
                label: current_icon.label,
                icon_path: current_icon.asset_path(),
                observed_at: current.observed_at,
            },
            daily,
            mascot,
            mascot_path: mascot.asset_path(),
        }
    }
}
