//! Level 6: Controller Integration Tests
//!
//! Tests the callback factories, committed value notifications and
//! controller-level state.

mod common;

use common::harness::SliderTestHarness;
use slint_range_slider::{HandleIndex, RangeSliderController, SliderConfig};
use std::cell::RefCell;
use std::rc::Rc;

#[test]
fn test_callback_factories_drive_a_drag() {
    let ctrl = RangeSliderController::new(SliderConfig::new(0.0, 100.0));
    let width_changed = ctrl.track_width_callback();
    let pressed = ctrl.pointer_down_callback();
    let moved = ctrl.pointer_move_callback();
    let released = ctrl.pointer_up_callback();
    let caption = ctrl.caption_callback();

    width_changed(200.0);
    ctrl.initialize(None);

    pressed(0, 500.0, 10.0);
    moved(550.0, 10.0);
    released();

    assert_eq!(ctrl.values(), [25.0, 100.0]);
    assert_eq!(caption().as_str(), "25  - 100 ");
}

#[test]
fn test_clones_share_state() {
    let ctrl = RangeSliderController::new(SliderConfig::new(0.0, 100.0));
    let other = ctrl.clone();
    ctrl.handle_track_width(200.0);
    ctrl.initialize(None);
    other.set_values([10.0, 20.0]);
    assert_eq!(ctrl.values(), [10.0, 20.0]);
}

#[test]
fn test_committed_once_per_drag() {
    let harness = SliderTestHarness::new();
    harness.drag(HandleIndex::Low, 20.0);
    harness.drag(HandleIndex::High, -20.0);
    assert_eq!(*harness.tracker.committed.borrow(), vec![[10.0, 100.0], [10.0, 90.0]]);
}

#[test]
fn test_committed_handler_may_call_back_into_controller() {
    let harness = SliderTestHarness::new();
    let ctrl = harness.ctrl.clone();
    harness.ctrl.on_values_committed(move |_| ctrl.set_values([0.0, 100.0]));

    harness.drag(HandleIndex::Low, 50.0);

    // Both handlers saw the dragged values; the second one reset them
    assert_eq!(*harness.tracker.committed.borrow(), vec![[25.0, 100.0]]);
    assert_eq!(harness.values(), [0.0, 100.0]);
}

#[test]
fn test_handlers_registered_in_handler_run_next_time() {
    let harness = SliderTestHarness::new();
    let count = Rc::new(RefCell::new(0));
    {
        let ctrl = harness.ctrl.clone();
        let count = count.clone();
        harness.ctrl.on_values_committed(move |_| {
            let count = count.clone();
            ctrl.on_values_committed(move |_| *count.borrow_mut() += 1);
        });
    }

    harness.drag(HandleIndex::Low, 10.0);
    assert_eq!(*count.borrow(), 0);
    harness.drag(HandleIndex::Low, 10.0);
    assert_eq!(*count.borrow(), 1);
}

// ============================================================================
// is_active()
// ============================================================================

#[test]
fn test_is_active_tracks_initial_values() {
    let harness = SliderTestHarness::new();
    assert!(!harness.ctrl.is_active());

    harness.drag(HandleIndex::High, -40.0);
    assert!(harness.ctrl.is_active());

    harness.ctrl.set_values([0.0, 100.0]);
    assert!(!harness.ctrl.is_active());
}

#[test]
fn test_is_active_false_before_initialize() {
    let harness = SliderTestHarness::uninitialized(SliderConfig::new(0.0, 100.0), 200.0);
    harness.ctrl.set_values([10.0, 20.0]);
    assert!(!harness.ctrl.is_active());
}

// ============================================================================
// Layout changes
// ============================================================================

#[test]
fn test_width_change_keeps_values_and_moves_pixels() {
    let harness = SliderTestHarness::uninitialized(SliderConfig::new(0.0, 100.0), 200.0);
    harness.ctrl.initialize(Some([25.0, 75.0]));

    harness.ctrl.handle_track_width(400.0);

    let slider = harness.ctrl.slider();
    assert_eq!(slider.borrow().position(), [100.0, 300.0]);
    assert_eq!(harness.values(), [25.0, 75.0]);
    let high = slider.borrow().handle(HandleIndex::High).cloned().unwrap();
    assert_eq!(high.left_boundary, 100.0);
    assert_eq!(high.right_boundary, 400.0);
}

#[test]
fn test_drag_after_width_change_uses_new_width() {
    let harness = SliderTestHarness::new();
    harness.ctrl.handle_track_width(400.0);
    harness.drag(HandleIndex::Low, 100.0);
    assert_eq!(harness.values(), [25.0, 100.0]);
}

#[test]
fn test_release_before_initialize_is_noop() {
    let harness = SliderTestHarness::uninitialized(SliderConfig::new(0.0, 100.0), 200.0);
    assert!(!harness.release());
    assert!(harness.tracker.committed.borrow().is_empty());
}
