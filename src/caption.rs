//! Human-readable caption for the current slider values.
//!
//! Caption text is derived, in priority order, from a caller value formatter,
//! a caller percent formatter, or the default `"<low> <unit> <sep> <high> <unit>"`
//! rendering. The choice is made once when the slider is configured.

use crate::config::MAX_ROUNDING_DIGITS;
use crate::transform::round_to_digits;
use std::fmt;
use std::rc::Rc;

/// Caller formatter over a `[low, high]` pair (values or percents).
pub type CaptionFormatter = Rc<dyn Fn(&[f64; 2]) -> String>;

pub const DEFAULT_SEPARATOR: &str = "-";
pub const DEFAULT_UNIT_SIGN: &str = "";

/// How the caption text is produced.
#[derive(Clone, Default)]
pub enum CaptionMode {
    /// Values rounded to the configured digits, joined with unit and separator.
    #[default]
    Default,
    /// Caller formatter applied to `[low, high]` values.
    AsValue(CaptionFormatter),
    /// Caller formatter applied to `[low, high]` track percents.
    AsPercent(CaptionFormatter),
}

impl fmt::Debug for CaptionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Default => f.write_str("Default"),
            Self::AsValue(_) => f.write_str("AsValue(..)"),
            Self::AsPercent(_) => f.write_str("AsPercent(..)"),
        }
    }
}

/// Unit sign and separator used by the default rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptionStyle {
    pub unit_sign: String,
    pub separator: String,
}

impl Default for CaptionStyle {
    fn default() -> Self {
        Self {
            unit_sign: DEFAULT_UNIT_SIGN.to_string(),
            separator: DEFAULT_SEPARATOR.to_string(),
        }
    }
}

/// Holds the last rendered caption.
#[derive(Debug, Clone)]
pub struct SliderCaption {
    mode: CaptionMode,
    style: CaptionStyle,
    rounding_digits: usize,
    text: String,
}

impl SliderCaption {
    pub fn new(mode: CaptionMode, style: CaptionStyle, rounding_digits: usize) -> Self {
        Self {
            mode,
            style,
            rounding_digits: rounding_digits.min(MAX_ROUNDING_DIGITS as usize),
            text: String::new(),
        }
    }

    pub fn mode(&self) -> &CaptionMode {
        &self.mode
    }

    pub fn style(&self) -> &CaptionStyle {
        &self.style
    }

    /// The last rendered caption.
    pub fn caption(&self) -> &str {
        &self.text
    }

    /// Re-render from the current values and percents.
    pub fn refresh(&mut self, values: &[f64; 2], percents: &[f64; 2]) {
        self.text = match &self.mode {
            CaptionMode::AsValue(format) => format(values),
            CaptionMode::AsPercent(format) => format(percents),
            CaptionMode::Default => self.caption_from_values(values),
        };
    }

    /// Default rendering of `values`, regardless of the configured mode.
    pub fn caption_from_values(&self, values: &[f64; 2]) -> String {
        let digits = self.rounding_digits;
        let unit = &self.style.unit_sign;
        [
            format!("{:.*}", digits, round_to_digits(values[0], digits)),
            unit.clone(),
            self.style.separator.clone(),
            format!("{:.*}", digits, round_to_digits(values[1], digits)),
            unit.clone(),
        ]
        .join(" ")
    }
}
