use serde::Deserialize;
use std::path::Path;

use stencil_trace::{Stenciler, MAX_COLORS};

use crate::error::ConvertError;

/// Conversion settings, optionally read from a YAML file.
///
/// ```yaml
/// colors: 4
/// simplify: 0.005
/// ```
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConvertConfig {
    /// Maximum palette size, background included
    #[serde(default = "default_colors")]
    pub colors: usize,

    /// Simplification tolerance as a fraction of each contour's perimeter
    #[serde(default = "default_simplify")]
    pub simplify: f64,
}

fn default_colors() -> usize {
    8
}

fn default_simplify() -> f64 {
    0.01
}

/// Values given on the command line; `None` leaves the file/default value.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConfigOverrides {
    pub colors: Option<usize>,
    pub simplify: Option<f64>,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            colors: default_colors(),
            simplify: default_simplify(),
        }
    }
}

impl ConvertConfig {
    /// Parse a YAML document. Missing keys take their defaults.
    pub fn from_yaml(content: &str) -> Result<Self, ConvertError> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content).map_err(|e| ConvertError::Config(e.to_string()))
    }

    /// Load settings from `path`, or defaults when no file is given.
    pub fn load(path: Option<&Path>) -> Result<Self, ConvertError> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_yaml(&content)?;
        tracing::info!(
            path = %path.display(),
            colors = config.colors,
            simplify = config.simplify,
            "Loaded configuration"
        );
        Ok(config)
    }

    /// Apply command-line overrides on top of these settings.
    pub fn merge(mut self, overrides: ConfigOverrides) -> Self {
        if let Some(colors) = overrides.colors {
            self.colors = colors;
        }
        if let Some(simplify) = overrides.simplify {
            self.simplify = simplify;
        }
        self
    }

    /// Reject values the pipeline cannot run with.
    pub fn validate(&self) -> Result<(), ConvertError> {
        if !(1..=MAX_COLORS).contains(&self.colors) {
            return Err(ConvertError::Config(format!(
                "colors must be between 1 and {MAX_COLORS}, got {}",
                self.colors
            )));
        }
        if !self.simplify.is_finite() || self.simplify < 0.0 {
            return Err(ConvertError::Config(format!(
                "simplify must be a finite value >= 0, got {}",
                self.simplify
            )));
        }
        Ok(())
    }

    /// Build the pipeline these settings describe.
    pub fn stenciler(&self) -> Stenciler {
        Stenciler::new()
            .colors(self.colors)
            .simplify(self.simplify)
    }
}
