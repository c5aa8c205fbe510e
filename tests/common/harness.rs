//! Test harness wiring a controller to a track of known width.
//!
//! Mirrors what an application does with the controller: report the track
//! width, initialize, then forward pointer events.

#![allow(dead_code)]

use super::CallbackTracker;
use slint_range_slider::{
    EventDisposition, HandleIndex, PointerKind, RangeSliderController, SliderConfig, TrackMetrics,
};

pub struct SliderTestHarness {
    pub ctrl: RangeSliderController,
    pub metrics: TrackMetrics,
    pub tracker: CallbackTracker,
}

impl SliderTestHarness {
    /// Range slider over `[0, 100]` on a 200px track, initialized to the bounds.
    pub fn new() -> Self {
        Self::with_config(SliderConfig::new(0.0, 100.0), 200.0)
    }

    /// Wire `config` on a track of `width` pixels and initialize it.
    pub fn with_config(config: SliderConfig, width: f32) -> Self {
        let harness = Self::uninitialized(config, width);
        harness.ctrl.initialize(None);
        harness
    }

    /// Wire `config` without calling `initialize`.
    pub fn uninitialized(config: SliderConfig, width: f32) -> Self {
        let ctrl = RangeSliderController::new(config);
        let tracker = CallbackTracker::new();

        {
            let slider = ctrl.slider();
            let mut slider = slider.borrow_mut();
            slider.on_start_slide(CallbackTracker::recorder(&tracker.start_slide));
            slider.on_during_slide(CallbackTracker::recorder(&tracker.during_slide));
            slider.on_end_slide(CallbackTracker::recorder(&tracker.end_slide));
        }
        ctrl.on_values_committed({
            let committed = tracker.committed.clone();
            move |values| committed.borrow_mut().push(values)
        });

        ctrl.handle_track_width(width);
        let metrics = ctrl.metrics();
        Self {
            ctrl,
            metrics,
            tracker,
        }
    }

    pub fn press(&self, handle: HandleIndex, x: f32) -> EventDisposition {
        self.ctrl
            .handle_pointer_down(handle.index() as i32, x, 10.0, PointerKind::Mouse)
    }

    pub fn move_to(&self, x: f32) -> EventDisposition {
        self.ctrl.handle_pointer_move(x, 10.0, PointerKind::Mouse)
    }

    pub fn release(&self) -> bool {
        self.ctrl.handle_pointer_up()
    }

    /// Full press/move/release gesture moving `handle` by `dx` pixels.
    pub fn drag(&self, handle: HandleIndex, dx: f32) {
        let origin = 500.0;
        self.press(handle, origin);
        self.move_to(origin + dx);
        self.release();
    }

    pub fn values(&self) -> [f64; 2] {
        self.ctrl.values()
    }

    pub fn caption(&self) -> String {
        self.ctrl.caption().to_string()
    }
}
