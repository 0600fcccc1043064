//! Infrastructure layer - Adapters for external systems
//!
//! Implements ports defined in the application layer and provides the
//! process-level plumbing: configuration, tracing and HTML templates.

pub mod adapters;
pub mod config;
pub mod telemetry;
pub mod templates;

pub use adapters::*;
pub use config::{AppConfig, ConfigError, DisplayConfig, LogFormat, ServerConfig};
pub use telemetry::{DEFAULT_LOG_FILTER, TelemetryError, init_tracing};
pub use templates::{TemplateConfig, TemplateContext, TemplateEngine, TemplateError};
