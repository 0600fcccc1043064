//! Application state shared across handlers

use std::sync::Arc;

use application::ForecastService;
use infrastructure::{AppConfig, TemplateEngine};

/// Shared application state
#[derive(Clone, Debug)]
pub struct AppState {
    /// Location → forecast page pipeline
    pub forecast_service: Arc<ForecastService>,
    /// Page renderer
    pub templates: Arc<TemplateEngine>,
    /// Application configuration
    pub config: Arc<AppConfig>,
}
