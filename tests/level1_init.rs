//! Level 1: Initialization Tests
//!
//! Tests construction, initial placement, degenerate widths and the value
//! fallback before initialization.

mod common;

use common::harness::SliderTestHarness;
use slint_range_slider::{HandleIndex, RangeSliderController, SliderConfig};

#[test]
fn test_initialize_with_bounds_reports_bounds() {
    let harness = SliderTestHarness::uninitialized(SliderConfig::new(0.0, 15000.0), 300.0);
    harness.ctrl.initialize(Some([0.0, 15000.0]));

    assert_eq!(harness.values(), [0.0, 15000.0]);
    assert_eq!(harness.caption(), "0  - 15000 ");
}

#[test]
fn test_initialize_without_values_uses_bounds() {
    let harness = SliderTestHarness::new();
    assert_eq!(harness.values(), [0.0, 100.0]);
    assert_eq!(harness.ctrl.left_percents(), [0.0, 100.0]);
}

#[test]
fn test_initialize_positions_handles_and_track() {
    let harness = SliderTestHarness::uninitialized(SliderConfig::new(0.0, 100.0), 200.0);
    harness.ctrl.initialize(Some([25.0, 75.0]));

    assert_eq!(harness.ctrl.left_percents(), [25.0, 75.0]);
    let segment = harness.ctrl.active_segment();
    assert_eq!(segment.left, 25.0);
    assert_eq!(segment.right, 75.0);
    assert_eq!(segment.width, 50.0);
}

#[test]
fn test_initialize_clamps_values() {
    let harness = SliderTestHarness::uninitialized(SliderConfig::new(0.0, 100.0), 200.0);
    harness.ctrl.initialize(Some([-50.0, 500.0]));
    assert_eq!(harness.values(), [0.0, 100.0]);
}

#[test]
fn test_initialize_sets_boundaries() {
    let harness = SliderTestHarness::uninitialized(SliderConfig::new(0.0, 100.0), 200.0);
    harness.ctrl.initialize(Some([25.0, 75.0]));

    let slider = harness.ctrl.slider();
    let slider = slider.borrow();
    let range = [
        slider.handle(HandleIndex::Low).unwrap(),
        slider.handle(HandleIndex::High).unwrap(),
    ];
    assert_eq!((range[0].left_boundary, range[0].right_boundary), (0.0, 150.0));
    assert_eq!((range[1].left_boundary, range[1].right_boundary), (50.0, 200.0));
}

// ============================================================================
// Degenerate width
// ============================================================================

#[test]
fn test_zero_width_percents_are_zero() {
    let harness = SliderTestHarness::with_config(SliderConfig::new(0.0, 100.0), 0.0);
    let slider = harness.ctrl.slider();
    assert_eq!(slider.borrow().percent_position(), [0.0, 0.0]);
    assert_eq!(slider.borrow().position(), [0.0, 0.0]);
    // Stored values do not depend on the width
    assert_eq!(harness.values(), [0.0, 100.0]);
}

#[test]
fn test_zero_width_single_mode() {
    let harness = SliderTestHarness::with_config(SliderConfig::new(0.0, 100.0).range(false), 0.0);
    let slider = harness.ctrl.slider();
    assert_eq!(slider.borrow().percent_position(), [0.0, 0.0]);
}

#[test]
fn test_width_report_rerenders_initialized_slider() {
    let harness = SliderTestHarness::with_config(SliderConfig::new(0.0, 100.0), 0.0);
    assert_eq!(harness.ctrl.active_segment().width, 0.0);

    harness.ctrl.handle_track_width(200.0);

    let slider = harness.ctrl.slider();
    assert_eq!(slider.borrow().percent_position(), [0.0, 1.0]);
    assert_eq!(harness.ctrl.active_segment().width, 100.0);
}

#[test]
fn test_width_report_before_initialize_keeps_uninitialized() {
    let harness = SliderTestHarness::uninitialized(SliderConfig::new(0.0, 100.0), 200.0);
    assert!(!harness.ctrl.slider().borrow().is_initialized());
    assert_eq!(harness.caption(), "");
}

// ============================================================================
// Values before initialization
// ============================================================================

#[test]
fn test_values_fallback_range_mode() {
    let harness = SliderTestHarness::uninitialized(SliderConfig::new(0.0, 100.0), 200.0);
    // Both handles sit at 0% until placed
    assert_eq!(harness.values(), [0.0, 0.0]);
}

#[test]
fn test_values_fallback_single_mode() {
    let harness =
        SliderTestHarness::uninitialized(SliderConfig::new(10.0, 100.0).range(false), 200.0);
    assert_eq!(harness.values(), [10.0, 10.0]);
}

// ============================================================================
// Single-handle mode
// ============================================================================

#[test]
fn test_single_mode_initialize() {
    let harness = SliderTestHarness::uninitialized(SliderConfig::new(0.0, 100.0).range(false), 200.0);
    harness.ctrl.initialize(Some([0.0, 40.0]));

    assert_eq!(harness.values(), [0.0, 40.0]);
    assert_eq!(harness.ctrl.left_percents(), [0.0, 40.0]);
    let segment = harness.ctrl.active_segment();
    assert_eq!(segment.left, 0.0);
    assert_eq!(segment.width, 40.0);
}

// ============================================================================
// JSON options
// ============================================================================

#[test]
fn test_controller_from_json() {
    let ctrl = RangeSliderController::from_json(r#"{ "start": 0, "end": 50, "rangeSlider": false }"#)
        .expect("options should parse");
    ctrl.handle_track_width(100.0);
    ctrl.initialize(None);
    assert_eq!(ctrl.values(), [0.0, 50.0]);
    assert!(!ctrl.slider().borrow().is_range());
}

#[test]
fn test_controller_from_invalid_json() {
    assert!(RangeSliderController::from_json(r#"{ "start": 10, "end": 0 }"#).is_err());
    assert!(RangeSliderController::from_json("not json").is_err());
}
