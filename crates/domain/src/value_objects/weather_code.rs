//! WMO weather codes and the conditions they describe

use serde::{Deserialize, Serialize};
use std::fmt;

/// Raw WMO weather code as reported by the provider
///
/// Kept as `u16` so out-of-table sentinels (e.g. 9999) survive parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeatherCode(u16);

impl WeatherCode {
    /// Every code the provider documents
    pub const KNOWN: [u16; 28] = [
        0, 1, 2, 3, 45, 48, 51, 53, 55, 56, 57, 61, 63, 65, 66, 67, 71, 73, 75, 77, 80, 81, 82, 85,
        86, 95, 96, 99,
    ];

    /// Stand-in for provider codes that do not fit in `u16`
    pub const OUT_OF_RANGE: Self = Self(u16::MAX);

    /// Wrap a raw code
    #[must_use]
    pub const fn new(code: u16) -> Self {
        Self(code)
    }

    /// Wrap a code as the provider sent it
    ///
    /// Negative or oversized values become [`Self::OUT_OF_RANGE`], which
    /// maps to [`WeatherCondition::Unknown`] like any other unlisted code.
    #[must_use]
    pub fn from_provider(raw: i64) -> Self {
        u16::try_from(raw).map_or(Self::OUT_OF_RANGE, Self)
    }

    /// The raw numeric value
    #[must_use]
    pub const fn value(self) -> u16 {
        self.0
    }

    /// Condition this code describes
    #[must_use]
    pub const fn condition(self) -> WeatherCondition {
        WeatherCondition::from_wmo_code(self.0)
    }
}

impl From<u16> for WeatherCode {
    fn from(code: u16) -> Self {
        Self(code)
    }
}

impl fmt::Display for WeatherCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Weather condition grouped from WMO codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeatherCondition {
    /// Clear sky (WMO 0)
    ClearSky,
    /// Mainly clear (WMO 1)
    MainlyClear,
    /// Partly cloudy (WMO 2)
    PartlyCloudy,
    /// Overcast (WMO 3)
    Overcast,
    /// Fog (WMO 45, 48)
    Fog,
    /// Drizzle (WMO 51, 53, 55)
    Drizzle,
    /// Freezing drizzle (WMO 56, 57)
    FreezingDrizzle,
    /// Rain (WMO 61, 63, 65)
    Rain,
    /// Freezing rain (WMO 66, 67)
    FreezingRain,
    /// Snow (WMO 71, 73, 75)
    Snow,
    /// Snow grains (WMO 77)
    SnowGrains,
    /// Rain showers (WMO 80, 81, 82)
    RainShowers,
    /// Snow showers (WMO 85, 86)
    SnowShowers,
    /// Thunderstorm (WMO 95)
    Thunderstorm,
    /// Thunderstorm with hail (WMO 96, 99)
    ThunderstormWithHail,
    /// Anything outside the documented table
    Unknown,
}

impl WeatherCondition {
    /// Every variant, `Unknown` last
    pub const ALL: [Self; 16] = [
        Self::ClearSky,
        Self::MainlyClear,
        Self::PartlyCloudy,
        Self::Overcast,
        Self::Fog,
        Self::Drizzle,
        Self::FreezingDrizzle,
        Self::Rain,
        Self::FreezingRain,
        Self::Snow,
        Self::SnowGrains,
        Self::RainShowers,
        Self::SnowShowers,
        Self::Thunderstorm,
        Self::ThunderstormWithHail,
        Self::Unknown,
    ];

    /// Convert WMO weather code to `WeatherCondition`
    ///
    /// See: <https://open-meteo.com/en/docs> for WMO code reference
    #[must_use]
    pub const fn from_wmo_code(code: u16) -> Self {
        match code {
            0 => Self::ClearSky,
            1 => Self::MainlyClear,
            2 => Self::PartlyCloudy,
            3 => Self::Overcast,
            45 | 48 => Self::Fog,
            51 | 53 | 55 => Self::Drizzle,
            56 | 57 => Self::FreezingDrizzle,
            61 | 63 | 65 => Self::Rain,
            66 | 67 => Self::FreezingRain,
            71 | 73 | 75 => Self::Snow,
            77 => Self::SnowGrains,
            80..=82 => Self::RainShowers,
            85 | 86 => Self::SnowShowers,
            95 => Self::Thunderstorm,
            96 | 99 => Self::ThunderstormWithHail,
            _ => Self::Unknown,
        }
    }

    /// Get a human-readable description of the weather condition
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::ClearSky => "Clear sky",
            Self::MainlyClear => "Mainly clear",
            Self::PartlyCloudy => "Partly cloudy",
            Self::Overcast => "Overcast",
            Self::Fog => "Fog",
            Self::Drizzle => "Drizzle",
            Self::FreezingDrizzle => "Freezing drizzle",
            Self::Rain => "Rain",
            Self::FreezingRain => "Freezing rain",
            Self::Snow => "Snow",
            Self::SnowGrains => "Snow grains",
            Self::RainShowers => "Rain showers",
            Self::SnowShowers => "Snow showers",
            Self::Thunderstorm => "Thunderstorm",
            Self::ThunderstormWithHail => "Thunderstorm with hail",
            Self::Unknown => "Unknown",
        }
    }

    /// Whether anything is falling from the sky as liquid, or a storm is on
    #[must_use]
    pub const fn is_wet(&self) -> bool {
        matches!(
            self,
            Self::Drizzle
                | Self::FreezingDrizzle
                | Self::Rain
                | Self::FreezingRain
                | Self::RainShowers
                | Self::Thunderstorm
                | Self::ThunderstormWithHail
        )
    }
}

impl fmt::Display for WeatherCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description())
    }
}

/// Whether the sun is up at the observation time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayPhase {
    /// Sun is up
    #[default]
    Day,
    /// Sun is down
    Night,
}

impl DayPhase {
    /// Map the provider's `is_day` flag (1 = day, 0 = night)
    #[must_use]
    pub const fn from_is_day(flag: u8) -> Self {
        if flag == 0 { Self::Night } else { Self::Day }
    }
}
