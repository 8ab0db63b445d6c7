//! Calculator configuration
//!
//! Display text for the error state and the DOM ids the browser surface
//! binds to. Loadable from JSON.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::number::is_numeric;

/// Default error marker shown on the display
pub const DEFAULT_ERROR_MARKER: &str = "Error";
/// Default id of the display element
pub const DEFAULT_DISPLAY_ID: &str = "displayValue";
/// Default id of the clear button
pub const DEFAULT_CLEAR_ID: &str = "clear";
/// Default id of the delete button
pub const DEFAULT_DELETE_ID: &str = "delete";

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// JSON could not be decoded
    #[error("Invalid configuration JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A field holds an unusable value
    #[error("Invalid configuration value for `{field}`: {message}")]
    InvalidValue {
        /// Offending field
        field: &'static str,
        /// What is wrong with it
        message: String,
    },
}

impl ConfigError {
    /// Create an invalid value error
    #[must_use]
    pub fn invalid_value(field: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            field,
            message: message.into(),
        }
    }
}

/// Calculator configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
    /// Display text of the error state
    pub error_marker: String,
    /// Id of the element the display renders into
    pub display_id: String,
    /// Id of the clear button
    pub clear_id: String,
    /// Id of the delete button
    pub delete_id: String,
    /// Accept keyboard input alongside button clicks
    pub keyboard: bool,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            error_marker: DEFAULT_ERROR_MARKER.to_string(),
            display_id: DEFAULT_DISPLAY_ID.to_string(),
            clear_id: DEFAULT_CLEAR_ID.to_string(),
            delete_id: DEFAULT_DELETE_ID.to_string(),
            keyboard: true,
        }
    }
}

impl CalculatorConfig {
    /// Create a new builder
    #[must_use]
    pub fn builder() -> CalculatorConfigBuilder {
        CalculatorConfigBuilder::default()
    }

    /// Parses and validates a JSON configuration; missing fields take
    /// their defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Serializes the configuration as pretty JSON
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Checks that every field is usable
    ///
    /// The error marker must be non-empty and must not read as a number,
    /// otherwise an error display could be mistaken for an operand.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.error_marker.trim().is_empty() {
            return Err(ConfigError::invalid_value(
                "error_marker",
                "must not be empty",
            ));
        }
        if is_numeric(&self.error_marker) {
            return Err(ConfigError::invalid_value(
                "error_marker",
                format!("{:?} reads as a number", self.error_marker),
            ));
        }
        for (field, value) in [
            ("display_id", &self.display_id),
            ("clear_id", &self.clear_id),
            ("delete_id", &self.delete_id),
        ] {
            if value.trim().is_empty() {
                return Err(ConfigError::invalid_value(field, "must not be empty"));
            }
        }
        if self.clear_id == self.delete_id {
            return Err(ConfigError::invalid_value(
                "delete_id",
                "must differ from clear_id",
            ));
        }
        Ok(())
    }
}

/// Builder for `CalculatorConfig`
#[derive(Debug, Clone, Default)]
pub struct CalculatorConfigBuilder {
    config: CalculatorConfig,
}

impl CalculatorConfigBuilder {
    /// Set the error marker
    #[must_use]
    pub fn error_marker(mut self, marker: impl Into<String>) -> Self {
        self.config.error_marker = marker.into();
        self
    }

    /// Set the display element id
    #[must_use]
    pub fn display_id(mut self, id: impl Into<String>) -> Self {
        self.config.display_id = id.into();
        self
    }

    /// Set the clear button id
    #[must_use]
    pub fn clear_id(mut self, id: impl Into<String>) -> Self {
        self.config.clear_id = id.into();
        self
    }

    /// Set the delete button id
    #[must_use]
    pub fn delete_id(mut self, id: impl Into<String>) -> Self {
        self.config.delete_id = id.into();
        self
    }

    /// Enable/disable keyboard input
    #[must_use]
    pub fn keyboard(mut self, enabled: bool) -> Self {
        self.config.keyboard = enabled;
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<CalculatorConfig, ConfigError> {
        self.config.validate()?;
        Ok(self.config)
    }
}
