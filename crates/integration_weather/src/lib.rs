//! Open-Meteo weather integration
//!
//! Clients for the Open-Meteo Forecast and Geocoding APIs (<https://open-meteo.com>).
//! Neither API requires a key.

pub mod client;
pub mod geocoding;
mod http;
mod models;

pub use client::{OpenMeteoClient, WeatherClient, WeatherConfig};
pub use domain::FetchError;
pub use geocoding::{GeocodingClient, OpenMeteoGeocoder};
