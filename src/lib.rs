//! # Slint Range Slider Library
//!
//! A headless range slider engine for Slint applications: maps pointer drags
//! on a bounded track to one or two numeric values, optionally snapped to
//! steps, and derives a caption from them.
//!
//! ## Features
//!
//! - **Single or range mode** - One handle against a fixed start, or a `[low, high]` pair
//! - **Non-crossing handles** - Each handle's movable interval ends at its partner
//! - **Step snapping** - Evenly spaced steps or a caller-supplied step generator
//! - **Captions** - Default `"<low> <unit> <sep> <high> <unit>"` or caller formatters
//! - **Toolkit-agnostic core** - The engine only talks to a small [`SliderHost`] trait
//!
//! ## Quick Start
//!
//! ```ignore
//! use slint_range_slider::{RangeSliderController, SliderConfig};
//!
//! let ctrl = RangeSliderController::new(SliderConfig::new(0.0, 15000.0));
//! window.on_track_width_changed(ctrl.track_width_callback());
//! window.on_handle_pressed(ctrl.pointer_down_callback());
//! window.on_pointer_moved(ctrl.pointer_move_callback());
//! window.on_pointer_released(ctrl.pointer_up_callback());
//! ctrl.initialize(None);
//! ```
//!
//! ## Rust Helpers
//!
//! - [`Slider`] - The engine: values, drags, boundaries, track and caption
//! - [`RangeSliderController`] - Slint callback factories around a [`Slider`]
//! - [`CoordinateTransform`] - Pixel / percent / value conversions
//! - [`StepTable`] and [`snap_to_step`] - Step tables and nearest-step snapping
//! - [`SliderOptions`] - JSON-loadable options

pub mod transform;
pub mod steps;
pub mod handle;
pub mod track;
pub mod range;
pub mod caption;
pub mod events;
pub mod host;
pub mod config;
pub mod slider;
pub mod controller;

pub use transform::{round_half_up, round_to_digits, round_to_hundredths, CoordinateTransform};
pub use steps::{snap_to_step, SnapResult, StepGenerator, StepSource, StepTable, MAX_NUMBER_OF_STEPS};
pub use handle::{
    DragSession, EventDisposition, HandleIndex, PointerEvent, PointerKind, SliderHandle,
    BASE_Z_INDEX, NEAR_END_PERCENT,
};
pub use track::{ActiveSegment, SliderTrack};
pub use range::SliderRange;
pub use caption::{CaptionFormatter, CaptionMode, CaptionStyle, SliderCaption};
pub use events::{SlideEvent, SlideEventKind, SlideEvents, SlideListener};
pub use host::{SliderHost, TrackMetrics};
pub use config::{ConfigError, DisplayAsPercent, DisplayAsValue, SliderConfig, SliderOptions, MAX_ROUNDING_DIGITS};
pub use slider::Slider;
pub use controller::RangeSliderController;
