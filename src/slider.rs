//! The slider engine.
//!
//! [`Slider`] ties the pieces together: it owns the configuration, the step
//! table, the track, one handle (single mode) or a [`SliderRange`] (range
//! mode), the caption and the authoritative current values. It is driven by
//! three pointer entry points ([`Slider::start_slide`], [`Slider::move_slide`],
//! [`Slider::end_slide`]) and by the value setters.
//!
//! ```text
//! Constructed --initialize_state--> Initialized --start_slide--> Dragging
//!                                        ^                          |
//!                                        +-------- end_slide -------+
//! ```
//!
//! # Example
//!
//! ```ignore
//! use slint_range_slider::{HandleIndex, PointerEvent, Slider, SliderConfig, TrackMetrics};
//! use std::rc::Rc;
//!
//! let metrics = TrackMetrics::new(300.0);
//! let mut slider = Slider::new(Rc::new(metrics), SliderConfig::new(0.0, 15000.0));
//! slider.initialize_state(None);
//!
//! slider.start_slide(HandleIndex::Low, PointerEvent::mouse(10.0, 5.0));
//! slider.move_slide(PointerEvent::mouse(160.0, 5.0));
//! slider.end_slide();
//!
//! assert_eq!(slider.values(), [7500.0, 15000.0]);
//! ```

use crate::caption::SliderCaption;
use crate::config::{ConfigError, SliderConfig};
use crate::events::{SlideEvent, SlideEventKind, SlideEvents};
use crate::handle::{EventDisposition, HandleIndex, PointerEvent, PointerKind, SliderHandle};
use crate::host::SliderHost;
use crate::range::SliderRange;
use crate::steps::StepTable;
use crate::track::SliderTrack;
use crate::transform::CoordinateTransform;
use log::{debug, warn};
use std::rc::Rc;

/// Handles owned by the slider, depending on the mode.
#[derive(Debug, Clone)]
enum HandleLayout {
    /// One handle for the high end; the low end is pinned to `start`.
    Single(SliderHandle),
    Range(SliderRange),
}

impl HandleLayout {
    fn handle(&self, index: HandleIndex) -> Option<&SliderHandle> {
        match self {
            Self::Single(handle) => (handle.index() == index).then_some(handle),
            Self::Range(range) => Some(range.handle(index)),
        }
    }

    fn handle_mut(&mut self, index: HandleIndex) -> Option<&mut SliderHandle> {
        match self {
            Self::Single(handle) => (handle.index() == index).then_some(handle),
            Self::Range(range) => Some(range.handle_mut(index)),
        }
    }

    fn dragging(&self) -> Option<HandleIndex> {
        match self {
            Self::Single(handle) => handle.is_dragging().then(|| handle.index()),
            Self::Range(range) => range.dragging(),
        }
    }
}

pub struct Slider {
    host: Rc<dyn SliderHost>,
    config: SliderConfig,
    steps: Option<StepTable>,
    track: SliderTrack,
    handles: HandleLayout,
    caption: SliderCaption,
    current_values: Option<[f64; 2]>,
    events: SlideEvents,
    initialized: bool,
}

impl Slider {
    /// Build the step table, track, handles and caption, in that order.
    ///
    /// No values are computed until [`Slider::initialize_state`] is called.
    pub fn new(host: Rc<dyn SliderHost>, config: SliderConfig) -> Self {
        let steps = config
            .step_source()
            .map(|source| StepTable::build(config.start(), config.end(), &source));

        let track = SliderTrack::new();

        let handles = if config.is_range() {
            HandleLayout::Range(SliderRange::new())
        } else {
            HandleLayout::Single(SliderHandle::new(HandleIndex::High))
        };

        let caption = SliderCaption::new(
            config.caption_mode(),
            config.options.caption_style(),
            config.rounding_digits(),
        );

        Self {
            host,
            config,
            steps,
            track,
            handles,
            caption,
            current_values: None,
            events: SlideEvents::new(),
            initialized: false,
        }
    }

    /// Like [`Slider::new`], but rejects non-finite or inverted bounds.
    pub fn try_new(host: Rc<dyn SliderHost>, config: SliderConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::new(host, config))
    }

    /// Transformer for the host's current track width.
    pub fn transform(&self) -> CoordinateTransform {
        CoordinateTransform::new(self.config.start(), self.config.end(), self.host.track_width())
    }

    pub fn config(&self) -> &SliderConfig {
        &self.config
    }

    pub fn is_range(&self) -> bool {
        matches!(self.handles, HandleLayout::Range(_))
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn steps(&self) -> Option<&StepTable> {
        self.steps.as_ref()
    }

    pub fn track(&self) -> &SliderTrack {
        &self.track
    }

    /// The handle at `index`. Single-handle sliders have no low handle.
    pub fn handle(&self, index: HandleIndex) -> Option<&SliderHandle> {
        self.handles.handle(index)
    }

    fn clamp(&self, values: [f64; 2]) -> [f64; 2] {
        [
            values[0].max(self.config.start()),
            values[1].min(self.config.end()),
        ]
    }

    // === Values ===

    /// Enter the initialized state: store values, place handles, compute
    /// boundaries, track and caption. Defaults to `[start, end]`.
    ///
    /// Call this once the host knows its track width; with a width of 0
    /// every percent degenerates to 0.
    pub fn initialize_state(&mut self, values: Option<[f64; 2]>) {
        let transform = self.transform();
        if transform.track_width == 0.0 {
            warn!("initializing slider state while the track width is 0");
        }

        let values = self.clamp(values.unwrap_or([self.config.start(), self.config.end()]));
        self.current_values = Some(values);
        match &mut self.handles {
            HandleLayout::Range(range) => range.initialize_state(Some(values), &transform),
            HandleLayout::Single(handle) => {
                handle.set_value(values[1], &transform);
                handle.set_boundary(0.0, transform.track_width);
            }
        }
        self.initialized = true;
        self.refresh_track();
        self.refresh_caption();
    }

    /// Store new values and reposition the handles.
    ///
    /// The low value is floored at `start` and the high value capped at
    /// `end`, independently. Values are not reordered.
    pub fn set_values(&mut self, values: [f64; 2]) {
        let values = self.clamp(values);
        let transform = self.transform();
        self.current_values = Some(values);
        match &mut self.handles {
            HandleLayout::Range(range) => range.set_value(values, &transform),
            HandleLayout::Single(handle) => handle.set_value(values[1], &transform),
        }
        self.refresh_track();
        self.refresh_caption();
    }

    /// The current values, or values derived from the handles before any
    /// have been stored.
    pub fn values(&self) -> [f64; 2] {
        if let Some(values) = self.current_values {
            return values;
        }
        let transform = self.transform();
        match &self.handles {
            HandleLayout::Range(range) => range.value(&transform),
            HandleLayout::Single(handle) => [self.config.start(), handle.value(&transform)],
        }
    }

    /// Pixel positions of the handles; `[0, p]` in single mode.
    pub fn position(&self) -> [f64; 2] {
        let transform = self.transform();
        match &self.handles {
            HandleLayout::Range(range) => range.position(&transform),
            HandleLayout::Single(handle) => [0.0, handle.position(&transform)],
        }
    }

    /// Handle positions as track fractions; `[0, p]` in single mode.
    pub fn percent_position(&self) -> [f64; 2] {
        let transform = self.transform();
        match &self.handles {
            HandleLayout::Range(range) => range.percent_position(&transform),
            HandleLayout::Single(handle) => [0.0, handle.percent(&transform)],
        }
    }

    // === Rendering ===

    /// Recompute boundaries, track and caption from the handles without
    /// touching the values. Hosts call this after a layout change.
    pub fn on_moving(&mut self) {
        self.set_boundary();
        self.refresh_track();
        self.refresh_caption();
    }

    fn set_boundary(&mut self) {
        let transform = self.transform();
        match &mut self.handles {
            HandleLayout::Range(range) => range.set_boundary(&transform),
            HandleLayout::Single(handle) => handle.set_boundary(0.0, transform.track_width),
        }
    }

    fn refresh_track(&mut self) {
        let percents = self.percent_position();
        if self.is_range() {
            self.track.set_active_range(percents[0], percents[1]);
        } else {
            self.track.set_active_single(percents[1]);
        }
    }

    fn refresh_caption(&mut self) {
        let values = self.values();
        let percents = self.percent_position();
        self.caption.refresh(&values, &percents);
    }

    pub fn caption(&self) -> &str {
        self.caption.caption()
    }

    /// Default caption for arbitrary values, ignoring any caption formatter.
    pub fn caption_from_values(&self, values: &[f64; 2]) -> String {
        self.caption.caption_from_values(values)
    }

    // === Drag lifecycle ===

    /// The handle currently being dragged, if any.
    pub fn dragging(&self) -> Option<HandleIndex> {
        self.handles.dragging()
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging().is_some()
    }

    /// Pointer-down on a handle.
    pub fn start_slide(&mut self, index: HandleIndex, pointer: PointerEvent) -> EventDisposition {
        let transform = self.transform();
        let Some(handle) = self.handles.handle_mut(index) else {
            return EventDisposition::ignored();
        };
        handle.begin_drag(&pointer, &transform);
        self.host.set_drag_lock(true);
        debug!("start slide on {index:?} handle at x = {}", pointer.x);

        self.emit(SlideEventKind::StartSlide, index);
        EventDisposition {
            handled: true,
            stop_propagation: true,
            prevent_default: false,
        }
    }

    /// Pointer-move anywhere. Ignored unless a drag is active.
    pub fn move_slide(&mut self, pointer: PointerEvent) -> EventDisposition {
        let Some(index) = self.dragging() else {
            return EventDisposition::ignored();
        };

        self.on_moving();

        let transform = self.transform();
        let mut values = self.values();
        let recorded = match self.handles.handle_mut(index) {
            Some(handle) => handle.drag_to(&pointer, &transform, self.steps.as_ref()),
            None => None,
        };
        if let Some(value) = recorded {
            values[index.index()] = value;
            self.current_values = Some(values);
        }
        self.refresh_track();
        self.refresh_caption();

        self.emit(SlideEventKind::DuringSlide, index);
        EventDisposition {
            handled: true,
            stop_propagation: false,
            prevent_default: pointer.kind == PointerKind::Touch,
        }
    }

    /// Pointer-up anywhere. Returns `false` (and does nothing) without an active drag.
    pub fn end_slide(&mut self) -> bool {
        let Some(index) = self.dragging() else {
            return false;
        };
        if let Some(handle) = self.handles.handle_mut(index) {
            handle.end_drag();
        }
        self.host.set_drag_lock(false);
        debug!("end slide on {index:?} handle with values {:?}", self.values());

        self.emit(SlideEventKind::EndSlide, index);
        true
    }

    // === Events ===

    pub fn on_start_slide(&mut self, listener: impl Fn(&SlideEvent<'_>) + 'static) {
        self.events.on_start_slide(listener);
    }

    pub fn on_during_slide(&mut self, listener: impl Fn(&SlideEvent<'_>) + 'static) {
        self.events.on_during_slide(listener);
    }

    pub fn on_end_slide(&mut self, listener: impl Fn(&SlideEvent<'_>) + 'static) {
        self.events.on_end_slide(listener);
    }

    pub fn events(&self) -> &SlideEvents {
        &self.events
    }

    fn emit(&self, kind: SlideEventKind, index: HandleIndex) {
        if let Some(handle) = self.handles.handle(index) {
            self.events.emit(&SlideEvent {
                kind,
                handle,
                slider: self,
            });
        }
    }
}
