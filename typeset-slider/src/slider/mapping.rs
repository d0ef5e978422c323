use super::{geometry::Geometry, range_state::SliderRange};

/// `min(max(value, lo), hi)`. Unlike [`f32::clamp`] this never panics when
/// `lo > hi`; the upper bound wins.
pub(crate) fn clamp(value: f32, lo: f32, hi: f32) -> f32 {
    value.max(lo).min(hi)
}

/// Replaces `NaN` (and negative zero) with `0.0` before a value reaches an
/// observer.
pub(crate) fn coerce(value: f32) -> f32 {
    if value.is_nan() || value == 0.0 {
        0.0
    } else {
        value
    }
}

/// Converts a container-relative pointer x coordinate into a quantized domain
/// value.
///
/// The pointer is measured against the thumb's center, so the first
/// `thumb_width / 2` pixels already map to `min`. The relative position is
/// snapped to step boundaries, rounding half up, and the result is clamped
/// into `[min, max]`.
///
/// Returns `0.0` when the geometry leaves no travel space. That `0.0` is a
/// "nothing measured" sentinel, not a domain value, and may lie outside
/// `[min, max]`; callers check [`Geometry::available_space`] before applying
/// the result to a thumb.
pub fn position_to_value(position_in_view: f32, geometry: Geometry, range: SliderRange) -> f32 {
    let Some(available_space) = geometry.available_space() else {
        return 0.0;
    };
    let span = range.span();
    if span <= 0.0 || range.step <= 0.0 {
        return range.min;
    }

    let rel_step_unit = range.step / span;
    let mut rel_position = (position_in_view - geometry.thumb_width / 2.0) / available_space;
    let rel_offset = rel_position % rel_step_unit;
    rel_position -= rel_offset;
    if rel_offset / rel_step_unit >= 0.5 {
        rel_position += rel_step_unit;
    }
    let steps = (rel_position / rel_step_unit).round();
    clamp(range.min + steps * range.step, range.min, range.max)
}

/// Offset of a thumb's leading edge for an already quantized `value`.
///
/// Linear inverse of [`position_to_value`]; no quantization is applied.
/// Returns `0.0` when the geometry leaves no travel space.
pub fn value_to_position(value: f32, geometry: Geometry, range: SliderRange) -> f32 {
    let Some(available_space) = geometry.available_space() else {
        return 0.0;
    };
    let span = range.span();
    if span <= 0.0 {
        return 0.0;
    }
    (value - range.min) / span * available_space
}

/// Screen x of a thumb's center, relative to the container.
pub fn thumb_center(value: f32, geometry: Geometry, range: SliderRange) -> f32 {
    geometry.thumb_width / 2.0 + value_to_position(value, geometry, range)
}
