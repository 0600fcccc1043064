//! Location inputs and resolved places

use serde::{Deserialize, Serialize};

use super::GeoLocation;

/// What the caller asked for: coordinates, or a place name that still
/// needs geocoding
#[derive(Debug, Clone, PartialEq)]
pub enum LocationQuery {
    /// Already-validated coordinates
    Coordinates(GeoLocation),
    /// Free-form place name (city, town, ...)
    Place(String),
}

impl LocationQuery {
    /// Build a place query, trimming surrounding whitespace
    #[must_use]
    pub fn place(name: impl AsRef<str>) -> Self {
        Self::Place(name.as_ref().trim().to_string())
    }
}

/// A resolved location with a display name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    /// Display name
    pub name: String,
    /// Country name, when the geocoder knows it
    pub country: Option<String>,
    /// Coordinates of the place
    pub location: GeoLocation,
}

impl Place {
    /// A place that is only known by its coordinates
    #[must_use]
    pub fn from_coordinates(location: GeoLocation) -> Self {
        Self {
            name: location.to_string(),
            country: None,
            location,
        }
    }

    /// Name and country joined for headings, e.g. "Zurich, Switzerland"
    #[must_use]
    pub fn display_name(&self) -> String {
        match &self.country {
            Some(country) if !country.is_empty() => format!("{}, {country}", self.name),
            _ => self.name.clone(),
        }
    }
}
