//! Geocoding port
//!
//! Resolves free-form place names to coordinates.

use async_trait::async_trait;
use domain::{FetchError, Place};
#[cfg(test)]
use mockall::automock;

/// Port for place name resolution
#[cfg_attr(test, automock)]
#[async_trait]
pub trait GeocodingPort: Send + Sync {
    /// Best match for `name`, or `FetchError::LocationNotFound`
    async fn resolve_place(&self, name: &str) -> Result<Place, FetchError>;
}
