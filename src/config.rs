//! Slider configuration.
//!
//! [`SliderOptions`] is the serializable part (bounds, mode, steps, rounding,
//! caption display). It can be loaded from JSON, e.g. from a host element's
//! data attribute. [`SliderConfig`] adds the callbacks that cannot be
//! serialized and is what [`crate::Slider::new`] consumes.

use crate::caption::{CaptionFormatter, CaptionMode, CaptionStyle, DEFAULT_SEPARATOR};
use crate::steps::{StepGenerator, StepSource};
use log::warn;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::rc::Rc;
use thiserror::Error;

/// Largest number of caption decimals; larger values are clamped to this.
pub const MAX_ROUNDING_DIGITS: u32 = 100;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid slider options: {0}")]
    Json(#[from] serde_json::Error),
    #[error("slider bounds must be finite (start = {start}, end = {end})")]
    NonFiniteBounds { start: f64, end: f64 },
    #[error("slider start {start} is greater than its end {end}")]
    InvertedBounds { start: f64, end: f64 },
}

/// Caption shown as values, optionally with a unit sign and separator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DisplayAsValue {
    pub enable: bool,
    pub unit_sign: Option<String>,
    pub separator: Option<String>,
}

/// Caption shown as percents, optionally with a separator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DisplayAsPercent {
    pub enable: bool,
    pub separator: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SliderOptions {
    pub start: f64,
    pub end: f64,
    /// Two handles (`[low, high]`) instead of one.
    pub range_slider: bool,
    /// Number of equal steps; absent or 0 disables snapping.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub steps: Option<u32>,
    /// Decimal digits of the default caption.
    pub rounded: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_as_value: Option<DisplayAsValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_as_percent: Option<DisplayAsPercent>,
}

impl Default for SliderOptions {
    fn default() -> Self {
        Self {
            start: 0.0,
            end: 100.0,
            range_slider: true,
            steps: None,
            rounded: 0,
            display_as_value: None,
            display_as_percent: None,
        }
    }
}

impl SliderOptions {
    /// Parse and validate options from JSON. Missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let options: Self = serde_json::from_str(json)?;
        options.validate()?;
        Ok(options)
    }

    /// Reject bounds the engine cannot work with.
    ///
    /// `start == end` is accepted: the slider degenerates instead of failing.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.start.is_finite() || !self.end.is_finite() {
            return Err(ConfigError::NonFiniteBounds {
                start: self.start,
                end: self.end,
            });
        }
        if self.start > self.end {
            return Err(ConfigError::InvertedBounds {
                start: self.start,
                end: self.end,
            });
        }
        Ok(())
    }

    /// Unit sign and separator for the default caption.
    ///
    /// The percent display takes precedence when both displays are enabled.
    pub fn caption_style(&self) -> CaptionStyle {
        let mut style = CaptionStyle::default();
        let as_percent = self.display_as_percent.as_ref().filter(|d| d.enable);
        let as_value = self.display_as_value.as_ref().filter(|d| d.enable);

        if let Some(display) = as_percent {
            if as_value.is_some() {
                warn!("displayAsValue and displayAsPercent are both enabled; using displayAsPercent");
            }
            style.separator = display
                .separator
                .clone()
                .unwrap_or_else(|| DEFAULT_SEPARATOR.to_string());
        } else if let Some(display) = as_value {
            if let Some(separator) = &display.separator {
                style.separator = separator.clone();
            }
            if let Some(unit_sign) = &display.unit_sign {
                style.unit_sign = unit_sign.clone();
            }
        }
        style
    }
}

/// Complete slider configuration: options plus caller callbacks.
#[derive(Clone)]
pub struct SliderConfig {
    pub options: SliderOptions,
    step_generator: Option<StepGenerator>,
    value_caption: Option<CaptionFormatter>,
    percent_caption: Option<CaptionFormatter>,
}

impl fmt::Debug for SliderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SliderConfig")
            .field("options", &self.options)
            .field("step_generator", &self.step_generator.is_some())
            .field("value_caption", &self.value_caption.is_some())
            .field("percent_caption", &self.percent_caption.is_some())
            .finish()
    }
}

impl From<SliderOptions> for SliderConfig {
    fn from(options: SliderOptions) -> Self {
        Self {
            options,
            step_generator: None,
            value_caption: None,
            percent_caption: None,
        }
    }
}

impl SliderConfig {
    /// Range slider over `[start, end]` with default options.
    pub fn new(start: f64, end: f64) -> Self {
        SliderOptions {
            start,
            end,
            ..SliderOptions::default()
        }
        .into()
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        SliderOptions::from_json(json).map(Self::from)
    }

    pub fn range(mut self, range_slider: bool) -> Self {
        self.options.range_slider = range_slider;
        self
    }

    pub fn steps(mut self, steps: u32) -> Self {
        self.options.steps = Some(steps);
        self
    }

    /// Use `generator(start, end)` as the step table. Takes precedence over a step count.
    pub fn step_generator<F>(mut self, generator: F) -> Self
    where
        F: Fn(f64, f64) -> Vec<f64> + 'static,
    {
        self.step_generator = Some(Rc::new(generator));
        self
    }

    pub fn rounding(mut self, digits: u32) -> Self {
        self.options.rounded = digits;
        self
    }

    pub fn display_as_value(mut self, unit_sign: Option<&str>, separator: Option<&str>) -> Self {
        self.options.display_as_value = Some(DisplayAsValue {
            enable: true,
            unit_sign: unit_sign.map(str::to_string),
            separator: separator.map(str::to_string),
        });
        self
    }

    pub fn display_as_percent(mut self, separator: Option<&str>) -> Self {
        self.options.display_as_percent = Some(DisplayAsPercent {
            enable: true,
            separator: separator.map(str::to_string),
        });
        self
    }

    pub fn value_caption<F>(mut self, format: F) -> Self
    where
        F: Fn(&[f64; 2]) -> String + 'static,
    {
        self.value_caption = Some(Rc::new(format));
        self
    }

    pub fn percent_caption<F>(mut self, format: F) -> Self
    where
        F: Fn(&[f64; 2]) -> String + 'static,
    {
        self.percent_caption = Some(Rc::new(format));
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.options.validate()
    }

    pub fn start(&self) -> f64 {
        self.options.start
    }

    pub fn end(&self) -> f64 {
        self.options.end
    }

    pub fn is_range(&self) -> bool {
        self.options.range_slider
    }

    /// Caption decimals, clamped to [`MAX_ROUNDING_DIGITS`].
    pub fn rounding_digits(&self) -> usize {
        let digits = self.options.rounded;
        if digits > MAX_ROUNDING_DIGITS {
            warn!("Slider caption rounding is limited to {MAX_ROUNDING_DIGITS} digits, got {digits}");
        }
        digits.min(MAX_ROUNDING_DIGITS) as usize
    }

    /// Where step values come from, if the slider is quantized.
    pub fn step_source(&self) -> Option<StepSource> {
        if let Some(generator) = &self.step_generator {
            return Some(StepSource::Generator(generator.clone()));
        }
        match self.options.steps {
            Some(count) if count > 0 => Some(StepSource::Count(count)),
            _ => None,
        }
    }

    /// Resolve the caption dispatch: value formatter, then percent formatter, then default.
    pub fn caption_mode(&self) -> CaptionMode {
        if let Some(format) = &self.value_caption {
            CaptionMode::AsValue(format.clone())
        } else if let Some(format) = &self.percent_caption {
            CaptionMode::AsPercent(format.clone())
        } else {
            CaptionMode::Default
        }
    }
}
