//! Common test utilities for integration tests.

#![allow(dead_code)]

pub mod harness;

use slint_range_slider::{HandleIndex, SlideEvent};
use std::cell::RefCell;
use std::rc::Rc;

/// Tracks slide events and committed values for testing.
///
/// Each field records calls to the corresponding event with their arguments.
#[derive(Default, Clone)]
pub struct CallbackTracker {
    /// (handle, values at emission)
    pub start_slide: Rc<RefCell<Vec<(HandleIndex, [f64; 2])>>>,
    /// (handle, values at emission)
    pub during_slide: Rc<RefCell<Vec<(HandleIndex, [f64; 2])>>>,
    /// (handle, values at emission)
    pub end_slide: Rc<RefCell<Vec<(HandleIndex, [f64; 2])>>>,
    /// Values passed to `on_values_committed`
    pub committed: Rc<RefCell<Vec<[f64; 2]>>>,
}

impl CallbackTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Listener recording into `target`.
    pub fn recorder(
        target: &Rc<RefCell<Vec<(HandleIndex, [f64; 2])>>>,
    ) -> impl Fn(&SlideEvent<'_>) + 'static {
        let target = target.clone();
        move |event| {
            target
                .borrow_mut()
                .push((event.handle.index(), event.slider.values()));
        }
    }

    /// Clear all recorded callbacks.
    pub fn clear(&self) {
        self.start_slide.borrow_mut().clear();
        self.during_slide.borrow_mut().clear();
        self.end_slide.borrow_mut().clear();
        self.committed.borrow_mut().clear();
    }
}
