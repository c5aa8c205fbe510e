//! Conversions between the three coordinate spaces of a slider.
//!
//! A handle lives at a **pixel** offset on the track, which is expressed as a
//! **percent** of the track width, which maps linearly onto a **value** in the
//! configured `[start, end]` domain.
//!
//! ```text
//! pixel  --(/ width, 2 decimals)-->  percent  --(start + p * span)-->  value
//! value  --(1 - (end - v) / span)--> percent  --(* width)----------->  pixel
//! ```
//!
//! None of these conversions validate their input: callers clamp values into
//! the domain before converting.

/// Round half-way cases towards positive infinity, like a browser's `Math.round`.
///
/// `f64::round` rounds half-way cases away from zero, which differs for
/// negative inputs (`-2.5` becomes `-3.0` instead of `-2.0`).
pub fn round_half_up(x: f64) -> f64 {
    (x + 0.5).floor()
}

/// Round a fraction to two decimal places (one whole percent).
pub fn round_to_hundredths(x: f64) -> f64 {
    round_half_up(x * 100.0) / 100.0
}

/// Round to `digits` decimals, half-way cases away from zero.
///
/// The magnitude is rounded half-up and the sign put back, so `2.5` becomes
/// `3` and `-2.5` becomes `-3`. Falls back to `x` when scaling overflows.
pub fn round_to_digits(x: f64, digits: usize) -> f64 {
    let factor = 10f64.powi(i32::try_from(digits).unwrap_or(i32::MAX));
    let scaled = x.abs() * factor;
    if !scaled.is_finite() {
        return x;
    }
    (round_half_up(scaled) / factor).copysign(x)
}

/// Pure coordinate transformer for one track.
///
/// `track_width` is a snapshot of the host's layout width; the engine builds a
/// fresh transformer whenever it needs one so the width is never stale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordinateTransform {
    pub start: f64,
    pub end: f64,
    pub track_width: f64,
}

impl CoordinateTransform {
    pub fn new(start: f64, end: f64, track_width: f64) -> Self {
        Self {
            start,
            end,
            track_width,
        }
    }

    /// Width of the value domain.
    pub fn span(&self) -> f64 {
        self.end - self.start
    }

    /// Percent (as a fraction, rounded to 2 decimals) of the track at pixel `px`.
    ///
    /// A zero-width track (hidden or not yet laid out) yields 0.
    pub fn percent_from_pixel(&self, px: f64) -> f64 {
        if self.track_width == 0.0 {
            return 0.0;
        }
        round_to_hundredths(px / self.track_width)
    }

    pub fn value_from_percent(&self, percent: f64) -> f64 {
        self.start + percent * self.span()
    }

    /// Fraction of the domain covered up to `value`.
    ///
    /// A degenerate domain (`start == end`) yields 0 rather than NaN.
    pub fn percent_from_value(&self, value: f64) -> f64 {
        let span = self.span();
        if span == 0.0 {
            return 0.0;
        }
        1.0 - (self.end - value) / span
    }

    pub fn pixel_from_value(&self, value: f64) -> f64 {
        self.track_width * self.percent_from_value(value)
    }

    pub fn value_from_pixel(&self, px: f64) -> f64 {
        self.value_from_percent(self.percent_from_pixel(px))
    }
}
