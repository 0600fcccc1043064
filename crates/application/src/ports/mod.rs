//! Port definitions (hexagonal architecture)
//!
//! Traits for the outbound services the application needs.
//! Infrastructure provides the implementations.

mod geocoding_port;
mod weather_port;

pub use geocoding_port::GeocodingPort;
pub use weather_port::WeatherPort;

#[cfg(test)]
pub use geocoding_port::MockGeocodingPort;
#[cfg(test)]
pub use weather_port::MockWeatherPort;
