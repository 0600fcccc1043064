//! Domain-level errors

use chrono::NaiveDate;
use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomainError {
    /// Coordinates outside the valid range
    #[error("Invalid coordinates: latitude must be -90 to 90, longitude must be -180 to 180")]
    InvalidCoordinates,

    /// A weekly forecast must hold exactly the configured number of days
    #[error("Forecast must contain exactly {expected} days, got {actual}")]
    ForecastLength { expected: usize, actual: usize },

    /// Daily entries must be strictly ascending by date
    #[error("Forecast dates out of order: {previous} is followed by {next}")]
    ForecastOrder { previous: NaiveDate, next: NaiveDate },
}

/// Why a weather or geocoding lookup produced no data
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// Connection failure, timeout, or the body could not be read
    #[error("Weather service unreachable: {0}")]
    NetworkUnavailable(String),

    /// The provider answered, but not with something we can use
    #[error("Invalid response from weather service: {0}")]
    InvalidResponse(String),

    /// The provider answered with a non-success status
    #[error(
        "Weather service returned HTTP {status}: {}",
        reason.as_deref().unwrap_or("no reason given")
    )]
    ProviderError {
        status: u16,
        reason: Option<String>,
    },

    /// The geocoder has no match for the name
    #[error("Location not found: {0}")]
    LocationNotFound(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_coordinates_message() {
        let err = DomainError::InvalidCoordinates;
        assert!(err.to_string().contains("latitude"));
        assert!(err.to_string().contains("longitude"));
    }

    #[test]
    fn forecast_length_message() {
        let err = DomainError::ForecastLength {
            expected: 7,
            actual: 3,
        };
        assert_eq!(err.to_string(), "Forecast must contain exactly 7 days, got 3");
    }

    #[test]
    fn provider_error_message() {
        let with_reason = FetchError::ProviderError {
            status: 400,
            reason: Some("Parameter 'daily' is invalid".to_string()),
        };
        let without_reason = FetchError::ProviderError {
            status: 500,
            reason: None,
        };
        assert_eq!(
            with_reason.to_string(),
            "Weather service returned HTTP 400: Parameter 'daily' is invalid"
        );
        assert_eq!(
            without_reason.to_string(),
            "Weather service returned HTTP 500: no reason given"
        );
    }

    #[test]
    fn forecast_order_message() {
        let err = DomainError::ForecastOrder {
            previous: NaiveDate::from_ymd_opt(2024, 1, 2).expect("valid date"),
            next: NaiveDate::from_ymd_opt(2024, 1, 1).expect("valid date"),
        };
        assert_eq!(
            err.to_string(),
            "Forecast dates out of order: 2024-01-02 is followed by 2024-01-01"
        );
    }
}
