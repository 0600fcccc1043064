//! Domain entities - Weather observations and forecasts

mod forecast;

pub use forecast::{
    CurrentConditions, DailyForecastEntry, FORECAST_DAYS, WeatherReport, WeeklyForecast,
};
