//! Capabilities the slider needs from whatever hosts it.
//!
//! The engine never reaches into a UI toolkit. It asks its [`SliderHost`] for
//! the current track width and tells it when a drag locks or releases the
//! pointer. [`TrackMetrics`] is a ready-made host backed by shared cells that
//! layout callbacks can update.
//!
//! # Example
//!
//! ```ignore
//! use slint_range_slider::{Slider, SliderConfig, TrackMetrics};
//! use std::rc::Rc;
//!
//! let metrics = TrackMetrics::new(0.0);
//! let mut slider = Slider::new(Rc::new(metrics.clone()), SliderConfig::new(0.0, 100.0));
//!
//! // Later, from the UI's width-changed callback
//! metrics.set_width(320.0);
//! slider.initialize_state(None);
//! ```

use std::cell::Cell;
use std::rc::Rc;

pub trait SliderHost {
    /// Current layout width of the track, in pixels. 0 when hidden.
    fn track_width(&self) -> f64;

    /// Called with `true` when a drag starts and `false` when it ends, so the
    /// host can disable text selection and force a pointer cursor meanwhile.
    fn set_drag_lock(&self, _locked: bool) {}
}

/// Shared, cloneable track measurements.
///
/// Clones share the same cells, so a clone handed to the slider sees width
/// updates made through any other clone.
#[derive(Debug, Clone, Default)]
pub struct TrackMetrics {
    width: Rc<Cell<f64>>,
    drag_locked: Rc<Cell<bool>>,
}

impl TrackMetrics {
    pub fn new(width: f64) -> Self {
        Self {
            width: Rc::new(Cell::new(width)),
            drag_locked: Rc::new(Cell::new(false)),
        }
    }

    pub fn width(&self) -> f64 {
        self.width.get()
    }

    pub fn set_width(&self, width: f64) {
        self.width.set(width);
    }

    /// Whether a drag currently holds the pointer lock.
    pub fn is_drag_locked(&self) -> bool {
        self.drag_locked.get()
    }
}

impl SliderHost for TrackMetrics {
    fn track_width(&self) -> f64 {
        self.width.get()
    }

    fn set_drag_lock(&self, locked: bool) {
        self.drag_locked.set(locked);
    }
}
