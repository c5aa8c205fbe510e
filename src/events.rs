//! Typed publish/subscribe for drag lifecycle events.
//!
//! Listeners observe the slider through a shared reference; they read
//! values and captions but cannot mutate the slider while it dispatches.
//! Hosts that need to react with a mutation (re-query, `set_values`) do so
//! after the engine call returns, see [`crate::RangeSliderController`].

use crate::handle::SliderHandle;
use crate::slider::Slider;

/// Which point of the drag lifecycle an event marks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlideEventKind {
    StartSlide,
    DuringSlide,
    EndSlide,
}

/// Payload handed to listeners: the acting handle and the slider.
pub struct SlideEvent<'a> {
    pub kind: SlideEventKind,
    pub handle: &'a SliderHandle,
    pub slider: &'a Slider,
}

pub type SlideListener = Box<dyn Fn(&SlideEvent<'_>)>;

/// Listener registry, one list per event kind.
#[derive(Default)]
pub struct SlideEvents {
    start: Vec<SlideListener>,
    during: Vec<SlideListener>,
    end: Vec<SlideListener>,
}

impl SlideEvents {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_start_slide(&mut self, listener: impl Fn(&SlideEvent<'_>) + 'static) {
        self.start.push(Box::new(listener));
    }

    pub fn on_during_slide(&mut self, listener: impl Fn(&SlideEvent<'_>) + 'static) {
        self.during.push(Box::new(listener));
    }

    pub fn on_end_slide(&mut self, listener: impl Fn(&SlideEvent<'_>) + 'static) {
        self.end.push(Box::new(listener));
    }

    /// Call every listener registered for `event.kind`, in registration order.
    pub fn emit(&self, event: &SlideEvent<'_>) {
        let listeners = match event.kind {
            SlideEventKind::StartSlide => &self.start,
            SlideEventKind::DuringSlide => &self.during,
            SlideEventKind::EndSlide => &self.end,
        };
        for listener in listeners {
            listener(event);
        }
    }
}
