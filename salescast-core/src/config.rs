//! Dashboard configuration: control ranges and chart styling.
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::{
    HISTOGRAM_COLOR, HISTOGRAM_NAME, MARKER_LINE_COLOR, MARKER_LINE_WIDTH, MARKER_SIZE,
    PRICE_DEFAULT, PRICE_MAX, PRICE_MIN, PRICE_STEP, SCORE_DEFAULT, SCORE_MAX, SCORE_MIN,
    SCORE_STEP, TITLE_PREFIX, WINDOW_MARGIN, X_AXIS_TITLE, Y_AXIS_TITLE,
};

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("config JSON could not be parsed: {0}")]
    Json(String),
    #[error("{field} minimum {min:.2} exceeds maximum {max:.2}")]
    InvertedRange {
        field: &'static str,
        min: f64,
        max: f64,
    },
    #[error("{field} step must be positive (got {step})")]
    NonPositiveStep { field: &'static str, step: f64 },
    #[error("{field} default {value:.2} lies outside {min:.2}..={max:.2}")]
    DefaultOutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
    #[error("window margin must be non-negative (got {0})")]
    NegativeMargin(f64),
}

/// Range and starting value of one slider.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SliderConfig {
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub default: f64,
}

impl SliderConfig {
    fn validate(&self, field: &'static str) -> Result<(), ConfigError> {
        if self.min > self.max {
            return Err(ConfigError::InvertedRange {
                field,
                min: self.min,
                max: self.max,
            });
        }
        if self.step <= 0.0 || !self.step.is_finite() {
            return Err(ConfigError::NonPositiveStep {
                field,
                step: self.step,
            });
        }
        if !(self.min..=self.max).contains(&self.default) {
            return Err(ConfigError::DefaultOutOfRange {
                field,
                value: self.default,
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }

    /// Clamp a raw control value into the slider range.
    #[must_use]
    pub fn clamp(&self, value: f64) -> f64 {
        if value.is_nan() {
            self.default
        } else {
            value.clamp(self.min, self.max)
        }
    }
}

/// Chart styling knobs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartStyle {
    #[serde(default = "default_window_margin")]
    pub window_margin: f64,
    #[serde(default = "default_marker_size")]
    pub marker_size: u32,
    #[serde(default = "default_marker_line_width")]
    pub marker_line_width: u32,
    #[serde(default = "default_marker_line_color")]
    pub marker_line_color: String,
    #[serde(default = "default_histogram_color")]
    pub histogram_color: String,
    #[serde(default = "default_histogram_name")]
    pub histogram_name: String,
    #[serde(default = "default_title_prefix")]
    pub title_prefix: String,
    #[serde(default = "default_x_axis_title")]
    pub x_axis_title: String,
    #[serde(default = "default_y_axis_title")]
    pub y_axis_title: String,
}

const fn default_window_margin() -> f64 {
    WINDOW_MARGIN
}
const fn default_marker_size() -> u32 {
    MARKER_SIZE
}
const fn default_marker_line_width() -> u32 {
    MARKER_LINE_WIDTH
}
fn default_marker_line_color() -> String {
    MARKER_LINE_COLOR.to_string()
}
fn default_histogram_color() -> String {
    HISTOGRAM_COLOR.to_string()
}
fn default_histogram_name() -> String {
    HISTOGRAM_NAME.to_string()
}
fn default_title_prefix() -> String {
    TITLE_PREFIX.to_string()
}
fn default_x_axis_title() -> String {
    X_AXIS_TITLE.to_string()
}
fn default_y_axis_title() -> String {
    Y_AXIS_TITLE.to_string()
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            window_margin: default_window_margin(),
            marker_size: default_marker_size(),
            marker_line_width: default_marker_line_width(),
            marker_line_color: default_marker_line_color(),
            histogram_color: default_histogram_color(),
            histogram_name: default_histogram_name(),
            title_prefix: default_title_prefix(),
            x_axis_title: default_x_axis_title(),
            y_axis_title: default_y_axis_title(),
        }
    }
}

/// Everything the dashboard reads besides the dataset and the model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardConfig {
    #[serde(default = "default_price_slider")]
    pub price: SliderConfig,
    #[serde(default = "default_score_slider")]
    pub critic_score: SliderConfig,
    #[serde(default)]
    pub chart: ChartStyle,
}

const fn default_price_slider() -> SliderConfig {
    SliderConfig {
        min: PRICE_MIN,
        max: PRICE_MAX,
        step: PRICE_STEP,
        default: PRICE_DEFAULT,
    }
}

const fn default_score_slider() -> SliderConfig {
    SliderConfig {
        min: SCORE_MIN,
        max: SCORE_MAX,
        step: SCORE_STEP,
        default: SCORE_DEFAULT,
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self::default_config()
    }
}

impl DashboardConfig {
    #[must_use]
    pub fn default_config() -> Self {
        Self {
            price: default_price_slider(),
            critic_score: default_score_slider(),
            chart: ChartStyle::default(),
        }
    }

    /// Parse and validate a JSON config; missing keys take their defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or any value is out of range.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let cfg: Self =
            serde_json::from_str(json).map_err(|err| ConfigError::Json(err.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// # Errors
    ///
    /// Returns the first invalid value found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.price.validate("price")?;
        self.critic_score.validate("critic_score")?;
        if self.chart.window_margin < 0.0 || !self.chart.window_margin.is_finite() {
            return Err(ConfigError::NegativeMargin(self.chart.window_margin));
        }
        Ok(())
    }
}
