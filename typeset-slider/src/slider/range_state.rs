use super::{mapping::clamp, selector::Thumb};

/// Domain bounds and quantization step of a slider.
///
/// Callers keep `min < max` and `step > 0`; see
/// [`crate::RangeSliderArgs::validate`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderRange {
    /// Lowest selectable value.
    pub min: f32,
    /// Highest selectable value.
    pub max: f32,
    /// Distance between adjacent selectable values.
    pub step: f32,
}

impl SliderRange {
    /// Creates a new range.
    pub fn new(min: f32, max: f32, step: f32) -> Self {
        Self { min, max, step }
    }

    /// Width of the domain, `max - min`.
    pub fn span(&self) -> f32 {
        self.max - self.min
    }
}

/// The live `{low, high, min, max, step}` holder.
///
/// Gesture handlers always read through this record, never through a copy
/// taken at touch-down, so a reconfiguration mid-drag is picked up by the
/// next move event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangeState {
    /// Value of the low thumb.
    pub low: f32,
    /// Value of the high thumb. Pinned to `range.max` in single-value mode.
    pub high: f32,
    /// Current bounds and step.
    pub range: SliderRange,
    /// Smallest allowed gap between `low` and `high`.
    pub min_range: f32,
}

impl RangeState {
    /// Creates a state with both thumbs clamped into `range` and at least
    /// `min_range` apart. The high thumb gives way when they are too close.
    pub fn new(low: f32, high: f32, range: SliderRange, min_range: f32) -> Self {
        let (low, high) = separate(low, high, range, min_range, Thumb::High);
        Self {
            low,
            high,
            range,
            min_range,
        }
    }

    /// Value currently held by `thumb`.
    pub fn value_of(&self, thumb: Thumb) -> f32 {
        match thumb {
            Thumb::Low => self.low,
            Thumb::High => self.high,
        }
    }

    pub(crate) fn set(&mut self, thumb: Thumb, value: f32) {
        match thumb {
            Thumb::Low => self.low = value,
            Thumb::High => self.high = value,
        }
    }

    /// Interval a dragged thumb may occupy without crossing the other one.
    pub fn role_bounds(&self, thumb: Thumb) -> (f32, f32) {
        match thumb {
            Thumb::Low => (self.range.min, self.within(self.high - self.min_range)),
            Thumb::High => (self.within(self.low + self.min_range), self.range.max),
        }
    }

    fn within(&self, value: f32) -> f32 {
        clamp(value, self.range.min, self.range.max)
    }

    /// Replaces bounds and step, re-clamping both thumbs into the new bounds
    /// and restoring the minimum gap by moving the high thumb.
    pub(crate) fn reconfigure(&mut self, range: SliderRange, min_range: f32) {
        self.range = range;
        self.min_range = min_range;
        (self.low, self.high) = separate(self.low, self.high, range, min_range, Thumb::High);
    }

    /// Values that `snapshot` resolves to: supplied values win over the
    /// internal ones, and both are clamped into the current bounds.
    ///
    /// When the result is closer than `min_range`, the thumb the snapshot
    /// left uncontrolled gives way; if both are controlled, the high one
    /// does.
    pub fn resolve(&self, snapshot: ExternalSnapshot) -> (f32, f32) {
        let yielding = match (snapshot.low, snapshot.high) {
            (None, Some(_)) => Thumb::Low,
            _ => Thumb::High,
        };
        separate(
            snapshot.low.unwrap_or(self.low),
            snapshot.high.unwrap_or(self.high),
            self.range,
            self.min_range,
            yielding,
        )
    }
}

/// Clamps both values into `range`, then moves `yielding` until the pair is
/// `min_range` apart. If the bounds stop it, the other thumb moves too; a
/// `min_range` wider than the range ends with the thumbs on `min` and `max`.
fn separate(
    low: f32,
    high: f32,
    range: SliderRange,
    min_range: f32,
    yielding: Thumb,
) -> (f32, f32) {
    let SliderRange { min, max, .. } = range;
    let mut low = clamp(low, min, max);
    let mut high = clamp(high, min, max);
    if min_range.is_nan() || min_range <= 0.0 || high - low >= min_range {
        return (low, high);
    }
    match yielding {
        Thumb::High => {
            high = clamp(low + min_range, min, max);
            low = clamp(high - min_range, min, low);
        }
        Thumb::Low => {
            low = clamp(high - min_range, min, max);
            high = clamp(low + min_range, high, max);
        }
    }
    (low, high)
}

/// Externally supplied `(low, high)` as seen on one configuration pass.
///
/// `None` means the caller left the value uncontrolled.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ExternalSnapshot {
    /// Controlled low value.
    pub low: Option<f32>,
    /// Controlled high value.
    pub high: Option<f32>,
}

impl ExternalSnapshot {
    /// Creates a snapshot.
    pub fn new(low: Option<f32>, high: Option<f32>) -> Self {
        Self { low, high }
    }
}

/// What a configuration pass must do with the externally supplied values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncAction {
    /// Nothing external changed.
    Keep,
    /// Adopt the external values and recompute every visual position.
    Recompute,
    /// A gesture owns the values; hold the snapshot until it ends.
    Defer,
}

/// Decides how to react to a new external snapshot.
///
/// A controlled value counts as changed when it is present and differs from
/// the previously observed one. Values going from controlled to
/// uncontrolled are not a change.
pub fn sync_action(
    previous: ExternalSnapshot,
    next: ExternalSnapshot,
    session_active: bool,
) -> SyncAction {
    if !controlled_changed(previous.low, next.low) && !controlled_changed(previous.high, next.high)
    {
        return SyncAction::Keep;
    }
    if session_active {
        SyncAction::Defer
    } else {
        SyncAction::Recompute
    }
}

fn controlled_changed(previous: Option<f32>, next: Option<f32>) -> bool {
    match next {
        None => false,
        Some(next) => previous.is_none_or(|previous| previous.to_bits() != next.to_bits()),
    }
}
