//! High-level controller for Slint range slider components.
//!
//! The [`RangeSliderController`] wires a [`Slider`] to Slint callbacks: it
//! keeps the track width up to date, turns pointer callbacks into drag
//! operations, resyncs handles while sliding and reports committed values.
//!
//! # Example
//!
//! ```ignore
//! use slint_range_slider::{RangeSliderController, SliderConfig};
//!
//! slint::include_modules!();
//!
//! fn main() {
//!     let window = MainWindow::new().unwrap();
//!     let ctrl = RangeSliderController::new(SliderConfig::new(0.0, 15000.0).steps(30));
//!     let w = window.as_weak();
//!
//!     // Layout and pointer input
//!     window.on_track_width_changed(ctrl.track_width_callback());
//!     window.on_handle_pressed(ctrl.pointer_down_callback());
//!     window.on_pointer_moved(ctrl.pointer_move_callback());
//!     window.on_pointer_released(ctrl.pointer_up_callback());
//!
//!     // Re-render after every processed event
//!     window.on_refresh({
//!         let ctrl = ctrl.clone();
//!         let w = w.clone();
//!         move || {
//!             if let Some(w) = w.upgrade() {
//!                 let [low, high] = ctrl.left_percents();
//!                 w.set_low_left(low);
//!                 w.set_high_left(high);
//!                 w.set_caption(ctrl.caption());
//!             }
//!         }
//!     });
//!
//!     // App-specific: re-query with the committed range
//!     ctrl.on_values_committed(|[low, high]| println!("selected {low}..{high}"));
//!
//!     ctrl.initialize(None);
//!     window.set_step_marks(ctrl.step_marks());
//!     window.run().unwrap();
//! }
//! ```

use crate::config::{ConfigError, SliderConfig};
use crate::handle::{EventDisposition, HandleIndex, PointerEvent, PointerKind};
use crate::host::TrackMetrics;
use crate::slider::Slider;
use crate::track::ActiveSegment;
use slint::{ModelRc, SharedString, VecModel};
use std::cell::RefCell;
use std::rc::Rc;

type CommitHandler = Rc<dyn Fn([f64; 2])>;

/// Controller that owns a slider and provides callback implementations.
///
/// This provides a high-level API that handles:
/// - Track width tracking (re-render on layout change)
/// - Pointer down/move/up dispatch, including the resync after each move
/// - Caption and step mark models for the UI
/// - Committed value notifications at the end of a drag
///
/// Clone this controller to share it across callbacks.
#[derive(Clone)]
pub struct RangeSliderController {
    slider: Rc<RefCell<Slider>>,
    metrics: TrackMetrics,
    initial_values: Rc<RefCell<Option<[f64; 2]>>>,
    committed: Rc<RefCell<Vec<CommitHandler>>>,
}

impl RangeSliderController {
    /// Create a controller for `config`. The track width starts at 0.
    pub fn new(config: SliderConfig) -> Self {
        let metrics = TrackMetrics::new(0.0);
        let slider = Slider::new(Rc::new(metrics.clone()), config);
        Self {
            slider: Rc::new(RefCell::new(slider)),
            metrics,
            initial_values: Rc::new(RefCell::new(None)),
            committed: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Create a controller from JSON options (see [`crate::SliderOptions`]).
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        SliderConfig::from_json(json).map(Self::new)
    }

    /// Get access to the underlying slider.
    pub fn slider(&self) -> Rc<RefCell<Slider>> {
        self.slider.clone()
    }

    /// The width cell shared with the slider.
    pub fn metrics(&self) -> TrackMetrics {
        self.metrics.clone()
    }

    /// Register a handler called with the final values when a drag ends.
    ///
    /// Handlers run after the controller released the slider, so they may
    /// call back into the controller.
    pub fn on_values_committed(&self, handler: impl Fn([f64; 2]) + 'static) {
        self.committed.borrow_mut().push(Rc::new(handler));
    }

    // === Callback factories ===

    /// Returns a callback for `track-width-changed`.
    pub fn track_width_callback(&self) -> impl Fn(f32) {
        let ctrl = self.clone();
        move |width| ctrl.handle_track_width(width)
    }

    /// Returns a callback for `handle-pressed(index, x, y)`.
    pub fn pointer_down_callback(&self) -> impl Fn(i32, f32, f32) {
        let ctrl = self.clone();
        move |index, x, y| {
            ctrl.handle_pointer_down(index, x, y, PointerKind::Mouse);
        }
    }

    /// Returns a callback for `pointer-moved(x, y)`.
    pub fn pointer_move_callback(&self) -> impl Fn(f32, f32) {
        let ctrl = self.clone();
        move |x, y| {
            ctrl.handle_pointer_move(x, y, PointerKind::Mouse);
        }
    }

    /// Returns a callback for `pointer-released()`.
    pub fn pointer_up_callback(&self) -> impl Fn() {
        let ctrl = self.clone();
        move || {
            ctrl.handle_pointer_up();
        }
    }

    /// Returns a callback for `compute-caption()`.
    pub fn caption_callback(&self) -> impl Fn() -> SharedString {
        let ctrl = self.clone();
        move || ctrl.caption()
    }

    // === Direct handlers ===

    /// Handle track-width-changed: store the width and re-render if the
    /// slider is already initialized.
    pub fn handle_track_width(&self, width: f32) {
        self.metrics.set_width(f64::from(width));
        let mut slider = self.slider.borrow_mut();
        if slider.is_initialized() {
            slider.on_moving();
        }
    }

    /// Handle a pointer-down on handle `index` (0 = low, 1 = high).
    pub fn handle_pointer_down(&self, index: i32, x: f32, y: f32, kind: PointerKind) -> EventDisposition {
        let Some(index) = usize::try_from(index).ok().and_then(HandleIndex::from_index) else {
            return EventDisposition::ignored();
        };
        self.slider
            .borrow_mut()
            .start_slide(index, pointer(x, y, kind))
    }

    /// Handle a pointer move anywhere in the window.
    ///
    /// After a processed move the slider is set to its own values, which
    /// puts a snapped handle exactly on its step.
    pub fn handle_pointer_move(&self, x: f32, y: f32, kind: PointerKind) -> EventDisposition {
        let mut slider = self.slider.borrow_mut();
        let disposition = slider.move_slide(pointer(x, y, kind));
        if disposition.handled {
            let values = slider.values();
            slider.set_values(values);
        }
        disposition
    }

    /// Handle a pointer release anywhere in the window.
    ///
    /// Returns `false` when no drag was active.
    pub fn handle_pointer_up(&self) -> bool {
        let ended = self.slider.borrow_mut().end_slide();
        if ended {
            let values = self.values();
            let handlers = self.committed.borrow().clone();
            for handler in handlers {
                handler(values);
            }
        }
        ended
    }

    // === State ===

    /// Initialize the slider. The first call records the values that
    /// [`RangeSliderController::is_active`] compares against.
    pub fn initialize(&self, values: Option<[f64; 2]>) {
        let values = {
            let mut slider = self.slider.borrow_mut();
            slider.initialize_state(values);
            slider.values()
        };
        self.initial_values.borrow_mut().get_or_insert(values);
    }

    pub fn set_values(&self, values: [f64; 2]) {
        self.slider.borrow_mut().set_values(values);
    }

    pub fn values(&self) -> [f64; 2] {
        self.slider.borrow().values()
    }

    /// Whether the values differ from the ones of the first initialization.
    pub fn is_active(&self) -> bool {
        match *self.initial_values.borrow() {
            Some(initial) => self.values() != initial,
            None => false,
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.slider.borrow().is_dragging()
    }

    pub fn caption(&self) -> SharedString {
        self.slider.borrow().caption().into()
    }

    /// Handle offsets in whole percents of the track, for `x` bindings.
    pub fn left_percents(&self) -> [f32; 2] {
        let slider = self.slider.borrow();
        let left = |index: HandleIndex| {
            slider
                .handle(index)
                .map_or(0.0, |handle| handle.left_percent() as f32)
        };
        [left(HandleIndex::Low), left(HandleIndex::High)]
    }

    /// Z-index of each handle; 0 for a handle the slider does not have.
    pub fn z_indices(&self) -> [i32; 2] {
        let slider = self.slider.borrow();
        let z = |index: HandleIndex| slider.handle(index).map_or(0, |handle| handle.z_index());
        [z(HandleIndex::Low), z(HandleIndex::High)]
    }

    pub fn active_segment(&self) -> ActiveSegment {
        self.slider.borrow().track().active_segment()
    }

    /// Step positions in percents of the track, for tick marks.
    ///
    /// Empty when the slider has no steps.
    pub fn step_marks(&self) -> ModelRc<f32> {
        let slider = self.slider.borrow();
        let transform = slider.transform();
        let marks: Vec<f32> = slider
            .steps()
            .map(|steps| {
                steps
                    .values()
                    .iter()
                    .map(|&step| (transform.percent_from_value(step) * 100.0) as f32)
                    .collect()
            })
            .unwrap_or_default();
        ModelRc::new(VecModel::from(marks))
    }
}

fn pointer(x: f32, y: f32, kind: PointerKind) -> PointerEvent {
    PointerEvent {
        x: f64::from(x),
        y: f64::from(y),
        kind,
    }
}
