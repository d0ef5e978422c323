use super::{
    geometry::Geometry,
    mapping::value_to_position,
    range_state::RangeState,
};

/// Insets of the highlighted rail segment from the rail's start and end.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SelectedRail {
    /// Distance from the rail start to the segment start.
    pub left: f32,
    /// Distance from the segment end to the rail end.
    pub right: f32,
}

/// Imperatively maintained visual positions of a slider.
///
/// Thumb offsets are leading-edge translations within the container.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ThumbVisuals {
    /// Offset of the low thumb.
    pub low_x: f32,
    /// Offset of the high thumb; `None` for single-value sliders.
    pub high_x: Option<f32>,
    /// Highlighted span between the thumbs.
    pub rail: SelectedRail,
}

/// Highlighted span for `state`. A single-value slider highlights from the
/// rail start up to the low thumb.
pub(super) fn selected_rail(
    state: &RangeState,
    geometry: Geometry,
    single_value: bool,
) -> Option<SelectedRail> {
    let available_space = geometry.available_space()?;
    if state.range.span() <= 0.0 {
        return None;
    }
    let left = value_to_position(state.low, geometry, state.range);
    let right = available_space - value_to_position(state.high, geometry, state.range);
    Some(if single_value {
        SelectedRail {
            left: 0.0,
            right: available_space - left,
        }
    } else {
        SelectedRail { left, right }
    })
}

/// Full recompute of every visual position from `state`. `None` while the
/// geometry is unmeasured.
pub(super) fn layout_thumbs(
    state: &RangeState,
    geometry: Geometry,
    single_value: bool,
) -> Option<ThumbVisuals> {
    let rail = selected_rail(state, geometry, single_value)?;
    let low_x = value_to_position(state.low, geometry, state.range);
    let high_x = (!single_value).then(|| value_to_position(state.high, geometry, state.range));
    Some(ThumbVisuals {
        low_x,
        high_x,
        rail,
    })
}
