/// Geometry of the filled part of the track, in percent of the track width.
///
/// `left` is where the active part starts and `right` where it ends, both
/// measured from the left edge of the track.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ActiveSegment {
    pub left: f64,
    pub right: f64,
    pub width: f64,
}

/// The rail the handles move along: a full-width background and an active
/// overlay between the handles (or from the start to the single handle).
///
/// The track has no state of its own beyond the last computed segment; the
/// slider recomputes it after every change.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SliderTrack {
    active: ActiveSegment,
}

impl SliderTrack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Span the active part between two handle percents (fractions).
    pub fn set_active_range(&mut self, low_percent: f64, high_percent: f64) {
        self.active = ActiveSegment {
            left: low_percent * 100.0,
            right: high_percent * 100.0,
            width: (high_percent - low_percent) * 100.0,
        };
    }

    /// Fill from the start of the track up to a single handle.
    pub fn set_active_single(&mut self, percent: f64) {
        self.active = ActiveSegment {
            left: 0.0,
            right: percent * 100.0,
            width: percent * 100.0,
        };
    }

    pub fn active_segment(&self) -> ActiveSegment {
        self.active
    }
}
