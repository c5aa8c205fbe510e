//! A single draggable slider handle.
//!
//! A handle is either idle or inside a drag session. The session captures the
//! pointer position and handle offset at pointer-down; every move is then
//! computed from those origins, so moves never accumulate rounding error.
//!
//! ```text
//!            begin_drag                 end_drag
//!   Idle ───────────────▶ Dragging ───────────────▶ Idle
//!                          │    ▲
//!                          └────┘ drag_to (one per pointer move)
//! ```
//!
//! The handle never computes its own boundaries. The owner (the range
//! coordinator, or the slider in single-handle mode) sets them before every
//! drag tick.

use crate::steps::StepTable;
use crate::transform::{round_half_up, CoordinateTransform};

/// Stacking order of a handle at rest.
pub const BASE_Z_INDEX: i32 = 1;

/// Above this percent of the track the low handle is stacked over the high one.
pub const NEAR_END_PERCENT: f64 = 90.0;

/// Which endpoint a handle controls.
///
/// Single-handle sliders only have a [`HandleIndex::High`] handle; the low end
/// is pinned to the slider start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandleIndex {
    Low,
    High,
}

impl HandleIndex {
    /// Slot of this handle in a `[low, high]` pair.
    pub fn index(self) -> usize {
        match self {
            Self::Low => 0,
            Self::High => 1,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::Low),
            1 => Some(Self::High),
            _ => None,
        }
    }
}

/// Input device a pointer event came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PointerKind {
    #[default]
    Mouse,
    Touch,
}

/// A pointer sample in page coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub x: f64,
    pub y: f64,
    pub kind: PointerKind,
}

impl PointerEvent {
    pub fn mouse(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            kind: PointerKind::Mouse,
        }
    }

    pub fn touch(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            kind: PointerKind::Touch,
        }
    }
}

/// What the host should do with the native event after the engine saw it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EventDisposition {
    /// The engine acted on the event.
    pub handled: bool,
    /// Do not let container-level listeners see this event.
    pub stop_propagation: bool,
    /// Suppress the platform default (touch scrolling).
    pub prevent_default: bool,
}

impl EventDisposition {
    pub fn ignored() -> Self {
        Self::default()
    }
}

/// Transient state captured at pointer-down.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    pub origin_pointer_x: f64,
    pub origin_offset: f64,
    pub kind: PointerKind,
}

/// One draggable marker on the track.
#[derive(Debug, Clone, PartialEq)]
pub struct SliderHandle {
    index: HandleIndex,
    /// Offset as a whole percent of the track width.
    left_percent: f64,
    pub left_boundary: f64,
    pub right_boundary: f64,
    drag: Option<DragSession>,
    raised: bool,
}

impl SliderHandle {
    pub fn new(index: HandleIndex) -> Self {
        Self {
            index,
            left_percent: 0.0,
            left_boundary: 0.0,
            right_boundary: 0.0,
            drag: None,
            raised: false,
        }
    }

    pub fn index(&self) -> HandleIndex {
        self.index
    }

    pub fn to_beginning(&mut self) {
        self.left_percent = 0.0;
    }

    pub fn to_end(&mut self) {
        self.left_percent = 100.0;
    }

    /// Place the handle at `value`, rounded to a whole percent.
    ///
    /// The value is not clamped; a value outside the domain puts the handle
    /// outside `[0%, 100%]`.
    pub fn set_value(&mut self, value: f64, transform: &CoordinateTransform) {
        self.left_percent = round_half_up(transform.percent_from_value(value) * 100.0);
    }

    /// Offset in whole percents, as it would be written to a `left` style.
    pub fn left_percent(&self) -> f64 {
        self.left_percent
    }

    /// Pixel position on the current track.
    pub fn position(&self, transform: &CoordinateTransform) -> f64 {
        self.left_percent / 100.0 * transform.track_width
    }

    /// Position as a fraction of the track (2 decimals), 0 on a zero-width track.
    pub fn percent(&self, transform: &CoordinateTransform) -> f64 {
        transform.percent_from_pixel(self.position(transform))
    }

    pub fn value(&self, transform: &CoordinateTransform) -> f64 {
        transform.value_from_percent(self.percent(transform))
    }

    pub fn set_boundary(&mut self, left: f64, right: f64) {
        self.left_boundary = left;
        self.right_boundary = right;
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// True while the handle is being dragged (hosts style the handle from this).
    pub fn is_active(&self) -> bool {
        self.is_dragging()
    }

    pub fn drag_session(&self) -> Option<&DragSession> {
        self.drag.as_ref()
    }

    /// Enter the dragging state.
    pub fn begin_drag(&mut self, pointer: &PointerEvent, transform: &CoordinateTransform) {
        self.drag = Some(DragSession {
            origin_pointer_x: pointer.x,
            origin_offset: self.left_percent.trunc() / 100.0 * transform.track_width,
            kind: pointer.kind,
        });
    }

    /// Process one pointer move of the active drag session.
    ///
    /// Returns the domain value to record for this handle, or `None` when no
    /// drag is active. With a step table the recorded value is the snapped
    /// step, as long as that step lies within the boundaries. Otherwise it is
    /// derived from the new (rounded) offset, so the value never passes the
    /// partner handle.
    pub fn drag_to(
        &mut self,
        pointer: &PointerEvent,
        transform: &CoordinateTransform,
        steps: Option<&StepTable>,
    ) -> Option<f64> {
        let session = self.drag?;
        let span_x = pointer.x - session.origin_pointer_x;
        let mut candidate = session.origin_offset + span_x;

        let snapped = steps.and_then(|table| {
            table.snap(candidate, self.left_boundary, self.right_boundary, transform)
        });
        if let Some(snap) = snapped {
            candidate = snap.position;
        }

        candidate = candidate.max(self.left_boundary).min(self.right_boundary);
        let percent = (transform.percent_from_pixel(candidate) * 100.0).clamp(0.0, 100.0);
        self.left_percent = round_half_up(percent);
        self.update_stacking(percent);

        // The step nearest a boundary may lie beyond it
        Some(match snapped {
            Some(snap) if self.within_boundaries(snap.position) => snap.value,
            _ => self.value(transform),
        })
    }

    /// Leave the dragging state. Returns `false` if no drag was active.
    pub fn end_drag(&mut self) -> bool {
        self.drag.take().is_some()
    }

    fn within_boundaries(&self, position: f64) -> bool {
        position >= self.left_boundary && position <= self.right_boundary
    }

    fn update_stacking(&mut self, percent: f64) {
        if self.index == HandleIndex::Low {
            self.raised = percent > NEAR_END_PERCENT;
        }
    }

    /// Whether the handle is currently stacked above its partner.
    pub fn is_raised(&self) -> bool {
        self.raised
    }

    pub fn z_index(&self) -> i32 {
        if self.raised {
            BASE_Z_INDEX + 1
        } else {
            BASE_Z_INDEX
        }
    }
}
