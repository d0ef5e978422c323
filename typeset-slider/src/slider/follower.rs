use std::sync::Arc;

use parking_lot::RwLock;

use super::mapping::clamp;

/// Shared cell holding the value an overlay displays.
///
/// The engine writes it through [`FollowerContent::set_value`]; a renderer
/// keeps a clone and reads it whenever it re-renders, independent of the
/// engine's event handling.
#[derive(Debug, Clone, Default)]
pub struct FollowerContent {
    value: Arc<RwLock<Option<f32>>>,
}

impl FollowerContent {
    /// Replaces the displayed value.
    pub fn set_value(&self, value: f32) {
        *self.value.write() = Some(value);
    }

    /// The displayed value, or `None` before the first gesture.
    pub fn value(&self) -> Option<f32> {
        *self.value.read()
    }
}

/// Left offset of an overlay centered on `thumb_position_in_view`.
///
/// Clamped into `[0, container_width - overlay_width]` unless
/// `allow_overflow` is set. Returns `None` while the container is unmeasured.
pub fn follower_offset(
    thumb_position_in_view: f32,
    overlay_width: f32,
    container_width: f32,
    allow_overflow: bool,
) -> Option<f32> {
    if container_width <= 0.0 {
        return None;
    }
    let position = thumb_position_in_view - overlay_width / 2.0;
    if allow_overflow {
        Some(position)
    } else {
        Some(clamp(position, 0.0, container_width - overlay_width))
    }
}

/// Overlay (label or notch) that tracks the active thumb.
#[derive(Debug, Clone, Default)]
pub struct Follower {
    x: f32,
    width: f32,
    allow_overflow: bool,
    content: FollowerContent,
}

impl Follower {
    pub(crate) fn new(allow_overflow: bool) -> Self {
        Self {
            allow_overflow,
            ..Self::default()
        }
    }

    /// Current horizontal offset within the container.
    pub fn x(&self) -> f32 {
        self.x
    }

    /// Last measured width of the overlay.
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Handle to the displayed value.
    pub fn content(&self) -> FollowerContent {
        self.content.clone()
    }

    /// Whether the overlay may extend past the container edges.
    pub fn allow_overflow(&self) -> bool {
        self.allow_overflow
    }

    pub(crate) fn set_allow_overflow(&mut self, allow_overflow: bool) {
        self.allow_overflow = allow_overflow;
    }

    /// Records a width measurement. Returns `true` if it changed.
    pub(crate) fn set_width(&mut self, width: f32) -> bool {
        let width = if width.is_finite() { width.max(0.0) } else { 0.0 };
        if self.width == width {
            return false;
        }
        self.width = width;
        true
    }

    /// Moves the overlay over the thumb and shows `value`.
    pub(crate) fn update(&mut self, thumb_position_in_view: f32, value: f32, container_width: f32) {
        if let Some(x) = follower_offset(
            thumb_position_in_view,
            self.width,
            container_width,
            self.allow_overflow,
        ) {
            self.x = x;
        }
        self.content.set_value(value);
    }
}

/// Vertical offset of the label row: a floating label sits its own height
/// above the slider.
pub fn label_container_offset(floating: bool, label_height: f32) -> f32 {
    if floating { -label_height } else { 0.0 }
}
