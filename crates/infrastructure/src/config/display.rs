//! Page display settings.

use domain::Language;
use serde::{Deserialize, Serialize};

/// What the forecast page shows when the request says nothing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Place shown for a bare `GET /`
    #[serde(default = "default_city")]
    pub default_city: String,

    /// Weekday labels and geocoder result language
    #[serde(default)]
    pub language: Language,
}

fn default_city() -> String {
    "Zurich".to_string()
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            default_city: default_city(),
            language: Language::default(),
        }
    }
}
