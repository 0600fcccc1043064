//! Application layer - Use cases and orchestration
//!
//! Contains the forecast page pipeline, the icon table and the presenter
//! that turns domain forecasts into view models. Outbound services are
//! reached through the port traits in [`ports`].

pub mod icons;
pub mod mascot;
pub mod ports;
pub mod services;
pub mod view_model;

pub use icons::{Icon, IconMapping};
pub use mascot::Mascot;
pub use ports::*;
pub use services::*;
pub use view_model::{CurrentView, DailyView, ForecastPage, ViewModel};
