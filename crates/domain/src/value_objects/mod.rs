//! Value Objects - Immutable, identity-less domain primitives

mod geo_location;
mod language;
mod location_query;
mod weather_code;

pub use geo_location::GeoLocation;
pub use language::Language;
pub use location_query::{LocationQuery, Place};
pub use weather_code::{DayPhase, WeatherCode, WeatherCondition};
