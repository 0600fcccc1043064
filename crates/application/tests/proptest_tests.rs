//! Property-based tests for the presenter and icon table
//!
//! Every code must render, whatever the provider sends.

use std::sync::Arc;

use application::{IconMapping, Presenter, icons::UNKNOWN_ICON};
use chrono::{Days, NaiveDate};
use domain::{
    CurrentConditions, DailyForecastEntry, DayPhase, Language, WeatherCode, WeeklyForecast,
};
use proptest::prelude::*;

fn start() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 6, 1).expect("valid date")
}

fn conditions(code: u16, temperature: f64, day_phase: DayPhase) -> CurrentConditions {
    CurrentConditions {
        temperature,
        weather_code: WeatherCode::new(code),
        wind_speed: 5.0,
        wind_direction: 90.0,
        day_phase,
        observed_at: start().and_hms_opt(12, 0, 0).expect("valid time"),
    }
}

fn week(codes: &[u16]) -> WeeklyForecast {
    let days = codes
        .iter()
        .enumerate()
        .map(|(i, code)| DailyForecastEntry {
            date: start() + Days::new(i as u64),
            weather_code: WeatherCode::new(*code),
            temperature_max: 25.0,
            temperature_min: 15.0,
        })
        .collect();
    WeeklyForecast::new(days).expect("valid week")
}

fn known_code() -> impl Strategy<Value = u16> {
    prop::sample::select(WeatherCode::KNOWN.to_vec())
}

fn phase() -> impl Strategy<Value = DayPhase> {
    prop_oneof![Just(DayPhase::Day), Just(DayPhase::Night)]
}

fn language() -> impl Strategy<Value = Language> {
    prop_oneof![Just(Language::English), Just(Language::Japanese)]
}

proptest! {
    #[test]
    fn known_codes_never_fall_back(code in known_code(), phase in phase()) {
        let icon = IconMapping::new().lookup(WeatherCode::new(code), phase);
        prop_assert!(!icon.id.is_empty());
        prop_assert_ne!(icon.id, UNKNOWN_ICON);
    }

    #[test]
    fn unknown_codes_fall_back(code in any::<u16>(), phase in phase()) {
        prop_assume!(!WeatherCode::KNOWN.contains(&code));
        let icon = IconMapping::new().lookup(WeatherCode::new(code), phase);
        prop_assert_eq!(icon.id, UNKNOWN_ICON);
    }

    #[test]
    fn present_is_total_and_ordered(
        current_code in any::<u16>(),
        daily_codes in prop::collection::vec(any::<u16>(), 7),
        temperature in -60.0f64..60.0,
        phase in phase(),
        language in language()
    ) {
        let presenter = Presenter::new(Arc::new(IconMapping::new()), language);
        let forecast = week(&daily_codes);
        let view = presenter.present(&conditions(current_code, temperature, phase), &forecast);

        prop_assert!(!view.current.icon.is_empty());
        prop_assert_eq!(view.daily.len(), 7);
        for (entry, day) in forecast.iter().zip(&view.daily) {
            prop_assert_eq!(entry.date, day.date);
            prop_assert!(!day.icon.is_empty());
            prop_assert!(!day.weekday.is_empty());
        }
    }

    #[test]
    fn present_is_idempotent(
        current_code in any::<u16>(),
        daily_codes in prop::collection::vec(known_code(), 7),
        temperature in -30.0f64..40.0
    ) {
        let presenter = Presenter::new(Arc::new(IconMapping::new()), Language::English);
        let current = conditions(current_code, temperature, DayPhase::Day);
        let forecast = week(&daily_codes);

        prop_assert_eq!(
            presenter.present(&current, &forecast),
            presenter.present(&current, &forecast)
        );
    }
}
