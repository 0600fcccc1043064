//! Application services

mod forecast_service;
mod presenter;

pub use forecast_service::ForecastService;
pub use presenter::{Presenter, weekday_label};
