//! Step tables and nearest-step snapping.
//!
//! A step table is the list of domain values a handle may rest on when the
//! slider is quantized. It is built once, either from a step count spread
//! evenly over `[start, end]` or from a caller-supplied generator.

use crate::transform::CoordinateTransform;
use log::{debug, warn};
use std::rc::Rc;

/// Largest step count accepted; larger counts are clamped to this.
pub const MAX_NUMBER_OF_STEPS: u32 = 100;

/// Caller-supplied step generator, called once with `(start, end)`.
pub type StepGenerator = Rc<dyn Fn(f64, f64) -> Vec<f64>>;

/// Where the step values of a slider come from.
#[derive(Clone)]
pub enum StepSource {
    /// Split `[start, end]` into this many equal steps.
    Count(u32),
    /// Use whatever the generator returns, verbatim.
    Generator(StepGenerator),
}

impl std::fmt::Debug for StepSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Count(n) => f.debug_tuple("Count").field(n).finish(),
            Self::Generator(_) => f.write_str("Generator(..)"),
        }
    }
}

/// Result of snapping a pixel candidate onto the step table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnapResult {
    /// Pixel position of the chosen step.
    pub position: f64,
    /// Domain value of the chosen step.
    pub value: f64,
}

/// Precomputed list of allowed slider values.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StepTable {
    values: Vec<f64>,
}

impl StepTable {
    /// Build the table for `[start, end]`.
    ///
    /// Counts above [`MAX_NUMBER_OF_STEPS`] are clamped. A count of zero is
    /// treated as one step. When the resulting step size is not positive
    /// (`start >= end`) the table is exactly `[start, end]`.
    pub fn build(start: f64, end: f64, source: &StepSource) -> Self {
        let values = match source {
            StepSource::Generator(generate) => generate(start, end),
            StepSource::Count(count) => Self::evenly_spaced(start, end, *count),
        };
        debug!("built step table with {} entries for [{start}, {end}]", values.len());
        Self { values }
    }

    /// Wrap an existing list of values.
    pub fn from_values(values: Vec<f64>) -> Self {
        Self { values }
    }

    fn evenly_spaced(start: f64, end: f64, count: u32) -> Vec<f64> {
        let count = if count > MAX_NUMBER_OF_STEPS {
            warn!(
                "Maximum number of steps for slider is {MAX_NUMBER_OF_STEPS} for performance reasons, got {count}"
            );
            MAX_NUMBER_OF_STEPS
        } else {
            count
        };

        let count = count.max(1);
        let one_step = (end - start) / f64::from(count);
        if one_step <= 0.0 || !one_step.is_finite() {
            return vec![start, end];
        }

        // The last entry is `end` itself so float error cannot drop it
        (0..=count)
            .map(|index| {
                if index == count {
                    end
                } else {
                    start + f64::from(index) * one_step
                }
            })
            .collect()
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Snap `candidate` (pixels) to the nearest step, without leaving the
    /// steps nearest to the handle's boundaries.
    pub fn snap(
        &self,
        candidate: f64,
        left_boundary: f64,
        right_boundary: f64,
        transform: &CoordinateTransform,
    ) -> Option<SnapResult> {
        snap_to_step(&self.values, candidate, left_boundary, right_boundary, transform)
    }
}

/// Index of the step whose pixel position is closest to `target`.
///
/// Ties go to the first step in table order.
fn nearest_step_index(steps: &[f64], target: f64, transform: &CoordinateTransform) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (i, &step) in steps.iter().enumerate() {
        let distance = (target - transform.pixel_from_value(step)).abs();
        match best {
            Some((_, best_distance)) if distance >= best_distance => {}
            _ => best = Some((i, distance)),
        }
    }
    best.map(|(i, _)| i)
}

/// Snap a pixel candidate onto a step table.
///
/// 1. `nearest` is the step closest to `candidate`.
/// 2. `next` / `previous` are the steps closest to the right / left boundary.
/// 3. The result is `nearest` clamped into `[previous, next]`, so a handle
///    never snaps past the step that sits at its boundary.
///
/// Returns `None` for an empty table.
pub fn snap_to_step(
    steps: &[f64],
    candidate: f64,
    left_boundary: f64,
    right_boundary: f64,
    transform: &CoordinateTransform,
) -> Option<SnapResult> {
    let nearest = steps[nearest_step_index(steps, candidate, transform)?];
    let next = steps[nearest_step_index(steps, right_boundary, transform)?];
    let previous = steps[nearest_step_index(steps, left_boundary, transform)?];

    let value = nearest.min(next).max(previous);
    Some(SnapResult {
        position: transform.pixel_from_value(value),
        value,
    })
}
