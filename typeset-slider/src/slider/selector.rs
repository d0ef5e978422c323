/// One of the two draggable endpoints of a slider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Thumb {
    /// The lower endpoint. The only thumb of a single-value slider.
    Low,
    /// The upper endpoint.
    High,
}

/// Picks the thumb a range gesture controls, given the touch-down x and the
/// centers of both thumbs.
///
/// Stacked thumbs resolve by side: strictly left of the shared center picks
/// [`Thumb::Low`]. Otherwise the strictly closer thumb wins, and an exact tie
/// goes to [`Thumb::High`].
pub fn select_thumb(down_x: f32, low_position: f32, high_position: f32) -> Thumb {
    if low_position == high_position {
        return if down_x < low_position {
            Thumb::Low
        } else {
            Thumb::High
        };
    }
    let distance_from_low = (down_x - low_position).abs();
    let distance_from_high = (down_x - high_position).abs();
    if distance_from_low < distance_from_high {
        Thumb::Low
    } else {
        Thumb::High
    }
}
