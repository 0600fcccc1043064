//! Template engine for the forecast page
//!
//! Uses Tera with the page template embedded at compile time. A templates
//! directory may override it at runtime; embedded templates fill in
//! whatever the directory does not provide.
//!
//! # Example
//!
//! ```rust,ignore
//! use infrastructure::templates::TemplateEngine;
//!
//! let engine = TemplateEngine::new()?;
//! let html = engine.render_forecast_page(&page, "Zurich")?;
//! ```

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use application::ForecastPage;
use serde::{Deserialize, Serialize};
use tera::{Context, Tera, Value};
use thiserror::Error;
use tracing::{debug, info};

/// Name of the forecast page template
pub const INDEX_TEMPLATE: &str = "index.html";

/// Error type for template operations
#[derive(Debug, Error)]
pub enum TemplateError {
    /// Template not found
    #[error("Template not found: {0}")]
    NotFound(String),

    /// Template rendering failed
    #[error("Template rendering failed: {0}")]
    Render(String),

    /// Template compilation failed
    #[error("Template compilation failed: {0}")]
    Compile(String),
}

impl From<tera::Error> for TemplateError {
    fn from(e: tera::Error) -> Self {
        match e.kind {
            tera::ErrorKind::TemplateNotFound(name) => Self::NotFound(name),
            _ => Self::Render(render_chain(&e)),
        }
    }
}

/// Tera nests the useful message in `source()`
fn render_chain(e: &tera::Error) -> String {
    let mut message = e.to_string();
    let mut source = std::error::Error::source(e);
    while let Some(inner) = source {
        message.push_str(": ");
        message.push_str(&inner.to_string());
        source = inner.source();
    }
    message
}

/// Template context wrapper for type-safe context building
#[derive(Debug, Clone, Default)]
pub struct TemplateContext {
    inner: Context,
}

impl TemplateContext {
    /// Create a new empty template context
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Context::new(),
        }
    }

    /// Insert a value into the context
    pub fn insert<T: Serialize + ?Sized>(&mut self, key: &str, value: &T) {
        self.inner.insert(key, value);
    }

    /// Get the inner Tera context
    #[must_use]
    pub fn into_inner(self) -> Context {
        self.inner
    }
}

/// Template engine configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateConfig {
    /// Path to custom templates directory (optional)
    #[serde(default)]
    pub templates_dir: Option<String>,

    /// Whether to auto-escape HTML by default
    #[serde(default = "default_true")]
    pub auto_escape: bool,
}

const fn default_true() -> bool {
    true
}

impl Default for TemplateConfig {
    fn default() -> Self {
        Self {
            templates_dir: None,
            auto_escape: true,
        }
    }
}

/// Embedded templates - compiled into the binary
mod embedded {
    pub const INDEX: &str = include_str!("../../templates/index.html");
}

/// Template engine using Tera
#[derive(Clone)]
pub struct TemplateEngine {
    tera: Arc<Tera>,
    config: TemplateConfig,
}

impl std::fmt::Debug for TemplateEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TemplateEngine")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl TemplateEngine {
    /// Create a new template engine with default configuration
    pub fn new() -> Result<Self, TemplateError> {
        Self::with_config(TemplateConfig::default())
    }

    /// Create a new template engine with custom configuration
    pub fn with_config(config: TemplateConfig) -> Result<Self, TemplateError> {
        let mut builtin = Tera::default();
        builtin
            .add_raw_template(INDEX_TEMPLATE, embedded::INDEX)
            .map_err(|e| TemplateError::Compile(render_chain(&e)))?;

        let mut tera = match config.templates_dir.as_deref() {
            Some(dir) if Path::new(dir).is_dir() => {
                let pattern = format!("{}/**/*.html", dir.trim_end_matches('/'));
                let mut custom =
                    Tera::parse(&pattern).map_err(|e| TemplateError::Compile(render_chain(&e)))?;
                for name in custom.get_template_names() {
                    debug!(template = %name, "Loaded custom template");
                }
                // Custom templates win; embedded ones only fill gaps
                custom
                    .extend(&builtin)
                    .map_err(|e| TemplateError::Compile(render_chain(&e)))?;
                info!(dir = %dir, "Loaded custom templates");
                custom
            },
            Some(dir) => {
                debug!(dir = %dir, "Templates directory missing, using embedded");
                builtin
            },
            None => builtin,
        };

        // Set auto-escape based on config
        tera.autoescape_on(if config.auto_escape {
            vec![".html", ".htm", ".xml"]
        } else {
            vec![]
        });

        // Register custom filters
        tera.register_filter("celsius", celsius_filter);
        tera.register_filter("kmh", kmh_filter);

        Ok(Self {
            tera: Arc::new(tera),
            config,
        })
    }

    /// Render a template with the given context
    pub fn render(
        &self,
        template_name: &str,
        context: &TemplateContext,
    ) -> Result<String, TemplateError> {
        self.tera
            .render(template_name, &context.inner)
            .map_err(TemplateError::from)
    }

    /// Render the forecast page
    ///
    /// `city` pre-fills the search box.
    pub fn render_forecast_page(
        &self,
        page: &ForecastPage,
        city: &str,
    ) -> Result<String, TemplateError> {
        let mut ctx = TemplateContext::new();
        ctx.insert("page", page);
        ctx.insert("error", &Option::<String>::None);
        ctx.insert("city", city);

        self.render(INDEX_TEMPLATE, &ctx)
    }

    /// Render the page with a message instead of a forecast
    pub fn render_error_page(&self, message: &str, city: &str) -> Result<String, TemplateError> {
        let mut ctx = TemplateContext::new();
        ctx.insert("page", &Option::<ForecastPage>::None);
        ctx.insert("error", message);
        ctx.insert("city", city);

        self.render(INDEX_TEMPLATE, &ctx)
    }
}

/// Custom filter: whole degrees Celsius, e.g. `18.5` → `19°`
#[allow(clippy::cast_possible_truncation)]
fn celsius_filter(value: &Value, _args: &HashMap<String, Value>) -> tera::Result<Value> {
    let degrees = value
        .as_f64()
        .ok_or_else(|| tera::Error::msg("celsius requires a number"))?;
    // Avoid printing "-0°"
    let rounded = degrees.round() as i64;
    Ok(Value::String(format!("{rounded}°")))
}

/// Custom filter: one decimal km/h, e.g. `12.26` → `12.3 km/h`
fn kmh_filter(value: &Value, _args: &HashMap<String, Value>) -> tera::Result<Value> {
    let speed = value
        .as_f64()
        .ok_or_else(|| tera::Error::msg("kmh requires a number"))?;
    Ok(Value::String(format!("{speed:.1} km/h")))
}
