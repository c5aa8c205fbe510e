//! Two-handle coordination for range sliders.
//!
//! [`SliderRange`] owns the low and high handles and keeps them from
//! crossing. Each handle's movable interval ends at the partner's current
//! pixel position, so the handles can touch but never pass each other.
//! [`SliderRange::set_boundary`] is the only place these intervals are
//! computed; the slider calls it after initialization and before every drag
//! tick.

use crate::handle::{HandleIndex, SliderHandle};
use crate::transform::CoordinateTransform;

#[derive(Debug, Clone, PartialEq)]
pub struct SliderRange {
    low: SliderHandle,
    high: SliderHandle,
}

impl Default for SliderRange {
    fn default() -> Self {
        Self::new()
    }
}

impl SliderRange {
    pub fn new() -> Self {
        Self {
            low: SliderHandle::new(HandleIndex::Low),
            high: SliderHandle::new(HandleIndex::High),
        }
    }

    pub fn low(&self) -> &SliderHandle {
        &self.low
    }

    pub fn high(&self) -> &SliderHandle {
        &self.high
    }

    pub fn handle(&self, index: HandleIndex) -> &SliderHandle {
        match index {
            HandleIndex::Low => &self.low,
            HandleIndex::High => &self.high,
        }
    }

    pub fn handle_mut(&mut self, index: HandleIndex) -> &mut SliderHandle {
        match index {
            HandleIndex::Low => &mut self.low,
            HandleIndex::High => &mut self.high,
        }
    }

    /// Place both handles, then recompute boundaries.
    ///
    /// Without values the handles go to 0% and 100%.
    pub fn initialize_state(&mut self, values: Option<[f64; 2]>, transform: &CoordinateTransform) {
        match values {
            Some(values) => self.set_value(values, transform),
            None => {
                self.low.to_beginning();
                self.high.to_end();
            }
        }
        self.set_boundary(transform);
    }

    /// Recompute both handles' movable intervals from their current positions.
    pub fn set_boundary(&mut self, transform: &CoordinateTransform) {
        let low_position = self.low.position(transform);
        let high_position = self.high.position(transform);
        self.low.set_boundary(0.0, high_position);
        self.high.set_boundary(low_position, transform.track_width);
    }

    pub fn set_value(&mut self, values: [f64; 2], transform: &CoordinateTransform) {
        self.low.set_value(values[0], transform);
        self.high.set_value(values[1], transform);
    }

    pub fn value(&self, transform: &CoordinateTransform) -> [f64; 2] {
        [self.low.value(transform), self.high.value(transform)]
    }

    pub fn position(&self, transform: &CoordinateTransform) -> [f64; 2] {
        [self.low.position(transform), self.high.position(transform)]
    }

    pub fn percent_position(&self, transform: &CoordinateTransform) -> [f64; 2] {
        [self.low.percent(transform), self.high.percent(transform)]
    }

    /// The handle with an active drag session, if any.
    pub fn dragging(&self) -> Option<HandleIndex> {
        [&self.low, &self.high]
            .into_iter()
            .find(|handle| handle.is_dragging())
            .map(SliderHandle::index)
    }
}
