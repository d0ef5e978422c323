use tracing::{debug, trace};

use super::{
    SliderController,
    geometry::Geometry,
    layout::selected_rail,
    mapping::{clamp, coerce, position_to_value, thumb_center, value_to_position},
    range_state::RangeState,
    selector::{Thumb, select_thumb},
};

/// Raw pointer input for one slider.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TouchEvent {
    /// A pointer went down inside the container.
    Down {
        /// X relative to the container.
        location_x: f32,
        /// X in screen coordinates.
        page_x: f32,
        /// Number of pointers currently down, this one included.
        active_touches: usize,
    },
    /// The pointer moved.
    Move {
        /// X in screen coordinates.
        page_x: f32,
    },
    /// The pointer was lifted.
    Release,
    /// The host took the gesture away.
    Terminate,
}

/// One drag, alive from touch-down until release or termination.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureSession {
    /// Thumb the gesture controls.
    pub active_thumb: Thumb,
    /// Screen x of the container's origin, captured at touch-down.
    pub container_x: f32,
    /// Last quantized value applied to the active thumb.
    pub last_value: f32,
    /// Screen x (container-relative) of the active thumb's center.
    pub last_position: f32,
}

/// Where the followers were last placed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct FollowPoint {
    pub position: f32,
    pub value: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct ThumbMove {
    pub thumb: Thumb,
    pub value: f32,
    pub offset: f32,
    pub center: f32,
}

/// Maps a pointer position onto the session's thumb.
///
/// Returns `None` when nothing changed: the geometry is unmeasured, or the
/// quantized value equals the last one applied.
pub(super) fn apply_position(
    session: &mut GestureSession,
    state: &mut RangeState,
    geometry: Geometry,
    position_in_view: f32,
) -> Option<ThumbMove> {
    geometry.available_space()?;
    let thumb = session.active_thumb;
    let (lower, upper) = state.role_bounds(thumb);
    let value = clamp(
        position_to_value(position_in_view, geometry, state.range),
        lower,
        upper,
    );
    if value == session.last_value {
        return None;
    }

    let offset = value_to_position(value, geometry, state.range);
    session.last_value = value;
    session.last_position = offset + geometry.thumb_width / 2.0;
    state.set(thumb, value);
    Some(ThumbMove {
        thumb,
        value,
        offset,
        center: session.last_position,
    })
}

impl SliderController {
    /// Feeds one pointer event through the gesture state machine.
    #[tracing::instrument(level = "trace", skip(self))]
    pub fn handle_touch(&mut self, event: TouchEvent) {
        match event {
            TouchEvent::Down {
                location_x,
                page_x,
                active_touches,
            } => self.begin_gesture(location_x, page_x, active_touches),
            TouchEvent::Move { page_x } => self.drag_to(page_x),
            TouchEvent::Release => self.end_gesture("release"),
            TouchEvent::Terminate => self.end_gesture("terminate"),
        }
    }

    /// Force-ends the active gesture, if any.
    pub fn cancel(&mut self) {
        self.end_gesture("cancel");
    }

    fn begin_gesture(&mut self, location_x: f32, page_x: f32, active_touches: usize) {
        if self.args.disabled {
            debug!("slider disabled, ignoring touch-down");
            return;
        }
        if active_touches > 1 {
            debug!(active_touches, "multi-touch, ignoring touch-down");
            return;
        }
        if self.session.is_some() {
            debug!("gesture already active, ignoring touch-down");
            return;
        }

        let RangeState {
            low, high, range, ..
        } = self.state;
        if let Some(on_touch_start) = &self.args.on_touch_start {
            on_touch_start.call((coerce(low), coerce(high)));
        }

        let geometry = self.geometry.geometry();
        let active_thumb = if self.args.disable_range {
            Thumb::Low
        } else {
            select_thumb(
                location_x,
                thumb_center(low, geometry, range),
                thumb_center(high, geometry, range),
            )
        };
        let value = self.state.value_of(active_thumb);
        let position = thumb_center(value, geometry, range);
        self.session = Some(GestureSession {
            active_thumb,
            container_x: page_x - location_x,
            last_value: value,
            last_position: position,
        });
        debug!(?active_thumb, value, "gesture started");

        self.move_followers(position, value);
        self.handle_position_change(location_x);
    }

    fn drag_to(&mut self, page_x: f32) {
        let Some(session) = self.session else {
            trace!("move without an active gesture");
            return;
        };
        if self.args.disabled {
            return;
        }
        self.handle_position_change(page_x - session.container_x);
    }

    fn handle_position_change(&mut self, position_in_view: f32) {
        let geometry = self.geometry.geometry();
        let Some(session) = self.session.as_mut() else {
            return;
        };
        let Some(update) = apply_position(session, &mut self.state, geometry, position_in_view)
        else {
            return;
        };
        trace!(thumb = ?update.thumb, value = update.value, "thumb moved");

        match update.thumb {
            Thumb::Low => self.visuals.low_x = update.offset,
            Thumb::High => self.visuals.high_x = Some(update.offset),
        }
        self.notify_value_changed(true);
        self.move_followers(update.center, update.value);
        if let Some(rail) = selected_rail(&self.state, geometry, self.args.disable_range) {
            self.visuals.rail = rail;
        }
    }

    fn move_followers(&mut self, position: f32, value: f32) {
        self.follow = Some(FollowPoint { position, value });
        let container_width = self.geometry.geometry().container_width;
        for follower in self.label.iter_mut().chain(self.notch.iter_mut()) {
            follower.update(position, value, container_width);
        }
    }

    fn end_gesture(&mut self, reason: &'static str) {
        let Some(session) = self.session.take() else {
            return;
        };
        let RangeState { low, high, .. } = self.state;
        debug!(reason, thumb = ?session.active_thumb, low, high, "gesture ended");
        if let Some(on_touch_end) = &self.args.on_touch_end {
            on_touch_end.call((coerce(low), coerce(high)));
        }

        if self.pending_external {
            self.pending_external = false;
            let (next_low, next_high) = self.state.resolve(self.external);
            let next_high = if self.args.disable_range {
                self.state.range.max
            } else {
                next_high
            };
            if (next_low, next_high) != (low, high) {
                self.state.low = next_low;
                self.state.high = next_high;
                self.refresh();
                return;
            }
        }
        if self.range_dirty {
            self.refresh();
        }
    }
}
