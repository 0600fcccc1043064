//! Weather icon table
//!
//! Maps a weather condition and day phase to the icon shown next to it.
//! The table is built once at startup and shared read-only.

use std::collections::HashMap;

use domain::{DayPhase, WeatherCode, WeatherCondition};
use serde::Serialize;

/// Icon used when a code has no table entry
pub const UNKNOWN_ICON: &str = "unknown";

/// Where icon assets are served from
pub const ICON_ASSET_PREFIX: &str = "/static/icons";

/// A resolved icon and its caption
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Icon {
    /// Asset identifier, e.g. `sun`
    pub id: &'static str,
    /// English caption, e.g. `Overcast`
    pub label: &'static str,
}

impl Icon {
    /// URL path of the SVG asset
    #[must_use]
    pub fn asset_path(&self) -> String {
        format!("{ICON_ASSET_PREFIX}/{}.svg", self.id)
    }

    /// Whether this is the fallback icon
    #[must_use]
    pub fn is_fallback(&self) -> bool {
        self.id == UNKNOWN_ICON
    }
}

/// Immutable condition → icon lookup
#[derive(Debug, Clone)]
pub struct IconMapping {
    entries: HashMap<(WeatherCondition, DayPhase), Icon>,
    fallback: Icon,
}

impl IconMapping {
    /// Build the standard table
    #[must_use]
    pub fn new() -> Self {
        let mut entries = HashMap::new();
        for condition in WeatherCondition::ALL {
            for phase in [DayPhase::Day, DayPhase::Night] {
                if let Some(id) = icon_id(condition, phase) {
                    entries.insert(
                        (condition, phase),
                        Icon {
                            id,
                            label: condition.description(),
                        },
                    );
                }
            }
        }

        Self {
            entries,
            fallback: Icon {
                id: UNKNOWN_ICON,
                label: WeatherCondition::Unknown.description(),
            },
        }
    }

    /// Icon for a raw provider code, never failing
    #[must_use]
    pub fn lookup(&self, code: WeatherCode, phase: DayPhase) -> Icon {
        self.entries
            .get(&(code.condition(), phase))
            .copied()
            .unwrap_or(self.fallback)
    }
}

impl Default for IconMapping {
    fn default() -> Self {
        Self::new()
    }
}

const fn icon_id(condition: WeatherCondition, phase: DayPhase) -> Option<&'static str> {
    let id = match condition {
        WeatherCondition::ClearSky
        | WeatherCondition::MainlyClear
        | WeatherCondition::PartlyCloudy => match phase {
            DayPhase::Day => "sun",
            DayPhase::Night => "moon",
        },
        WeatherCondition::Overcast | WeatherCondition::Fog => "cloud",
        WeatherCondition::Drizzle
        | WeatherCondition::FreezingDrizzle
        | WeatherCondition::Rain
        | WeatherCondition::FreezingRain
        | WeatherCondition::RainShowers => "rain",
        WeatherCondition::Snow | WeatherCondition::SnowGrains | WeatherCondition::SnowShowers => {
            "snow"
        },
        WeatherCondition::Thunderstorm | WeatherCondition::ThunderstormWithHail => "thunder",
        WeatherCondition::Unknown => return None,
    };
    Some(id)
}
