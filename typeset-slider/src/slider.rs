//! A draggable slider engine for selecting a value or a value range.
//!
//! ## Usage
//!
//! Feed layout measurements and touch events into a [`SliderController`],
//! then read [`SliderController::visuals`] and the followers back when
//! rendering. The controller never renders anything itself; observers
//! installed on the arguments are its only outward notifications.
use derive_setters::Setters;
use thiserror::Error;
use tracing::{debug, trace, warn};

use crate::prop::CallbackWith;

use interaction::FollowPoint;
use layout::layout_thumbs;
use mapping::coerce;

pub use follower::{Follower, FollowerContent, follower_offset, label_container_offset};
pub use geometry::{Geometry, GeometryTracker};
pub use interaction::{GestureSession, TouchEvent};
pub use layout::{SelectedRail, ThumbVisuals};
pub use mapping::{position_to_value, thumb_center, value_to_position};
pub use range_state::{ExternalSnapshot, RangeState, SliderRange, SyncAction, sync_action};
pub use selector::{Thumb, select_thumb};

mod follower;
mod geometry;
mod interaction;
mod layout;
mod mapping;
mod range_state;
mod selector;

/// Payload delivered to the value-changed observer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueChange {
    /// Value of the low thumb.
    pub low: f32,
    /// Value of the high thumb (`max` for single-value sliders).
    pub high: f32,
    /// `true` when a drag produced the change, `false` for recomputes driven
    /// by configuration or layout.
    pub from_user: bool,
}

/// Rejected slider configuration.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum SliderConfigError {
    /// `min` or `max` is `NaN` or infinite.
    #[error("slider bounds must be finite (min = {min}, max = {max})")]
    NonFiniteBounds {
        /// Supplied minimum.
        min: f32,
        /// Supplied maximum.
        max: f32,
    },
    /// `min >= max`.
    #[error("slider min ({min}) must be less than max ({max})")]
    EmptyRange {
        /// Supplied minimum.
        min: f32,
        /// Supplied maximum.
        max: f32,
    },
    /// `step <= 0` or not finite.
    #[error("slider step must be positive, got {0}")]
    NonPositiveStep(f32),
    /// `min_range < 0` or not finite.
    #[error("minimum range must be non-negative, got {0}")]
    NegativeMinRange(f32),
}

/// Arguments for a dual-thumb range slider.
///
/// Also the common form every slider is configured through; see
/// [`SliderArgs`] for the single-value variant.
#[derive(Debug, PartialEq, Clone, Setters)]
pub struct RangeSliderArgs {
    /// Lowest selectable value.
    pub min: f32,
    /// Highest selectable value.
    pub max: f32,
    /// Quantization step.
    pub step: f32,
    /// Controlled low value. `None` leaves the low thumb uncontrolled.
    #[setters(strip_option)]
    pub low: Option<f32>,
    /// Controlled high value. `None` leaves the high thumb uncontrolled.
    #[setters(strip_option)]
    pub high: Option<f32>,
    /// Smallest allowed gap between the two thumbs.
    pub min_range: f32,
    /// Collapse to a single thumb: `high` is pinned to `max` and thumb
    /// selection is bypassed.
    pub disable_range: bool,
    /// Ignore touch-downs entirely.
    pub disabled: bool,
    /// Let label and notch extend past the container edges.
    pub allow_label_overflow: bool,
    /// Float the label row above the slider instead of stacking it.
    pub floating_label: bool,
    /// Track the active thumb with a value label.
    pub show_label: bool,
    /// Track the active thumb with a notch.
    pub show_notch: bool,
    /// Called at touch-down with the pre-gesture `(low, high)`.
    #[setters(skip)]
    pub on_touch_start: Option<CallbackWith<(f32, f32)>>,
    /// Called when a gesture ends with the final `(low, high)`.
    #[setters(skip)]
    pub on_touch_end: Option<CallbackWith<(f32, f32)>>,
    /// Called whenever the thumbs move.
    #[setters(skip)]
    pub on_value_changed: Option<CallbackWith<ValueChange>>,
}

impl Default for RangeSliderArgs {
    fn default() -> Self {
        Self {
            min: 0.0,
            max: 1.0,
            step: 0.01,
            low: None,
            high: None,
            min_range: 0.0,
            disable_range: false,
            disabled: false,
            allow_label_overflow: false,
            floating_label: false,
            show_label: true,
            show_notch: true,
            on_touch_start: None,
            on_touch_end: None,
            on_value_changed: None,
        }
    }
}

impl RangeSliderArgs {
    /// Sets the touch-start observer.
    pub fn on_touch_start<F>(mut self, on_touch_start: F) -> Self
    where
        F: Fn((f32, f32)) + Send + Sync + 'static,
    {
        self.on_touch_start = Some(CallbackWith::new(on_touch_start));
        self
    }

    /// Sets the touch-end observer.
    pub fn on_touch_end<F>(mut self, on_touch_end: F) -> Self
    where
        F: Fn((f32, f32)) + Send + Sync + 'static,
    {
        self.on_touch_end = Some(CallbackWith::new(on_touch_end));
        self
    }

    /// Sets the value-changed observer.
    pub fn on_value_changed<F>(mut self, on_value_changed: F) -> Self
    where
        F: Fn(ValueChange) + Send + Sync + 'static,
    {
        self.on_value_changed = Some(CallbackWith::new(on_value_changed));
        self
    }

    /// Checks the numeric configuration.
    ///
    /// The controller does not call this itself; hosts that accept
    /// configuration from outside should.
    pub fn validate(&self) -> Result<(), SliderConfigError> {
        if !self.min.is_finite() || !self.max.is_finite() {
            return Err(SliderConfigError::NonFiniteBounds {
                min: self.min,
                max: self.max,
            });
        }
        if self.min >= self.max {
            return Err(SliderConfigError::EmptyRange {
                min: self.min,
                max: self.max,
            });
        }
        if !(self.step.is_finite() && self.step > 0.0) {
            return Err(SliderConfigError::NonPositiveStep(self.step));
        }
        if !(self.min_range.is_finite() && self.min_range >= 0.0) {
            return Err(SliderConfigError::NegativeMinRange(self.min_range));
        }
        Ok(())
    }

    /// Bounds and step.
    pub fn range(&self) -> SliderRange {
        SliderRange::new(self.min, self.max, self.step)
    }

    /// Externally supplied values as seen by this configuration pass.
    pub fn external_snapshot(&self) -> ExternalSnapshot {
        let high = if self.disable_range {
            Some(self.max)
        } else {
            self.high
        };
        ExternalSnapshot::new(self.low, high)
    }

    fn effective_min_range(&self) -> f32 {
        if self.disable_range {
            0.0
        } else {
            self.min_range
        }
    }
}

/// Arguments for a single-value slider.
#[derive(Debug, PartialEq, Clone, Setters)]
pub struct SliderArgs {
    /// Lowest selectable value.
    pub min: f32,
    /// Highest selectable value.
    pub max: f32,
    /// Quantization step.
    pub step: f32,
    /// Controlled value. `None` leaves the slider uncontrolled.
    #[setters(strip_option)]
    pub value: Option<f32>,
    /// Ignore touch-downs entirely.
    pub disabled: bool,
    /// Let label and notch extend past the container edges.
    pub allow_label_overflow: bool,
    /// Float the label row above the slider instead of stacking it.
    pub floating_label: bool,
    /// Track the thumb with a value label.
    pub show_label: bool,
    /// Track the thumb with a notch.
    pub show_notch: bool,
    /// Called at touch-down with the pre-gesture `(value, max)`.
    #[setters(skip)]
    pub on_touch_start: Option<CallbackWith<(f32, f32)>>,
    /// Called when a gesture ends with the final `(value, max)`.
    #[setters(skip)]
    pub on_touch_end: Option<CallbackWith<(f32, f32)>>,
    /// Called whenever the thumb moves.
    #[setters(skip)]
    pub on_value_changed: Option<CallbackWith<ValueChange>>,
}

impl Default for SliderArgs {
    fn default() -> Self {
        Self {
            min: 0.0,
            max: 1.0,
            step: 0.01,
            value: None,
            disabled: false,
            allow_label_overflow: false,
            floating_label: false,
            show_label: false,
            show_notch: true,
            on_touch_start: None,
            on_touch_end: None,
            on_value_changed: None,
        }
    }
}

impl SliderArgs {
    /// Sets a value-only change handler.
    pub fn on_change<F>(mut self, on_change: F) -> Self
    where
        F: Fn(f32) + Send + Sync + 'static,
    {
        self.on_value_changed = Some(CallbackWith::new(move |change: ValueChange| {
            on_change(change.low)
        }));
        self
    }

    /// Sets the full value-changed observer.
    pub fn on_value_changed<F>(mut self, on_value_changed: F) -> Self
    where
        F: Fn(ValueChange) + Send + Sync + 'static,
    {
        self.on_value_changed = Some(CallbackWith::new(on_value_changed));
        self
    }

    /// Sets the touch-start observer.
    pub fn on_touch_start<F>(mut self, on_touch_start: F) -> Self
    where
        F: Fn((f32, f32)) + Send + Sync + 'static,
    {
        self.on_touch_start = Some(CallbackWith::new(on_touch_start));
        self
    }

    /// Sets the touch-end observer.
    pub fn on_touch_end<F>(mut self, on_touch_end: F) -> Self
    where
        F: Fn((f32, f32)) + Send + Sync + 'static,
    {
        self.on_touch_end = Some(CallbackWith::new(on_touch_end));
        self
    }

    /// Checks the numeric configuration. See [`RangeSliderArgs::validate`].
    pub fn validate(&self) -> Result<(), SliderConfigError> {
        RangeSliderArgs::from(self.clone()).validate()
    }
}

impl From<SliderArgs> for RangeSliderArgs {
    fn from(args: SliderArgs) -> Self {
        Self {
            min: args.min,
            max: args.max,
            step: args.step,
            low: args.value,
            high: Some(args.max),
            min_range: 0.0,
            disable_range: true,
            disabled: args.disabled,
            allow_label_overflow: args.allow_label_overflow,
            floating_label: args.floating_label,
            show_label: args.show_label,
            show_notch: args.show_notch,
            on_touch_start: args.on_touch_start,
            on_touch_end: args.on_touch_end,
            on_value_changed: args.on_value_changed,
        }
    }
}

/// Engine state of one slider instance.
///
/// Owns the live [`RangeState`], the measured [`Geometry`], the active
/// [`GestureSession`] (if any), the thumb visuals and the followers. All
/// mutation happens synchronously inside the event and layout methods.
pub struct SliderController {
    args: RangeSliderArgs,
    state: RangeState,
    geometry: GeometryTracker,
    external: ExternalSnapshot,
    pending_external: bool,
    range_dirty: bool,
    session: Option<GestureSession>,
    follow: Option<FollowPoint>,
    visuals: ThumbVisuals,
    label: Option<Follower>,
    notch: Option<Follower>,
    label_height: f32,
}

impl SliderController {
    /// Creates a controller for `args`. Nothing is laid out until both the
    /// container and the thumb have been measured.
    pub fn new(args: impl Into<RangeSliderArgs>) -> Self {
        let args = args.into();
        warn_if_invalid(&args);
        let range = args.range();
        let low = args.low.unwrap_or(range.min);
        let high = if args.disable_range {
            range.max
        } else {
            args.high.unwrap_or(range.max)
        };
        let mut controller = Self {
            state: RangeState::new(low, high, range, args.effective_min_range()),
            geometry: GeometryTracker::default(),
            external: args.external_snapshot(),
            pending_external: false,
            range_dirty: false,
            session: None,
            follow: None,
            visuals: ThumbVisuals::default(),
            label: None,
            notch: None,
            label_height: 0.0,
            args,
        };
        controller.sync_followers();
        controller
    }

    /// Applies a new configuration pass.
    ///
    /// Bounds, step and minimum range always refresh the live state, even
    /// mid-drag. Externally supplied values that differ from the previous
    /// pass are adopted immediately when idle and held until release while a
    /// gesture is active.
    pub fn update_args(&mut self, args: impl Into<RangeSliderArgs>) {
        let args = args.into();
        warn_if_invalid(&args);

        let range = args.range();
        let min_range = args.effective_min_range();
        let range_changed = range != self.state.range || min_range != self.state.min_range;
        self.state.reconfigure(range, min_range);
        if args.disable_range {
            self.state.high = range.max;
        }

        let next = args.external_snapshot();
        let action = sync_action(self.external, next, self.is_pressed());
        self.external = next;
        self.args = args;
        self.sync_followers();
        debug!(?action, range_changed, "slider arguments updated");

        match action {
            SyncAction::Recompute => {
                self.adopt_external();
                self.refresh();
            }
            SyncAction::Defer => self.pending_external = true,
            SyncAction::Keep if range_changed => {
                if self.is_pressed() {
                    self.range_dirty = true;
                } else {
                    self.refresh();
                }
            }
            SyncAction::Keep => {}
        }
    }

    /// Layout callback for the container.
    pub fn on_container_layout(&mut self, width: f32) {
        if self.geometry.set_container_width(width) {
            debug!(width, "container measured");
            self.refresh();
        }
    }

    /// Layout callback for the thumb.
    pub fn on_thumb_layout(&mut self, width: f32) {
        if self.geometry.set_thumb_width(width) {
            debug!(width, "thumb measured");
            self.refresh();
        }
    }

    /// Layout callback for the label follower.
    pub fn on_label_layout(&mut self, width: f32) {
        let container_width = self.geometry.geometry().container_width;
        let follow = self.follow;
        if let Some(label) = self.label.as_mut() {
            relayout_follower(label, width, follow, container_width);
        }
    }

    /// Layout callback for the notch follower.
    pub fn on_notch_layout(&mut self, width: f32) {
        let container_width = self.geometry.geometry().container_width;
        let follow = self.follow;
        if let Some(notch) = self.notch.as_mut() {
            relayout_follower(notch, width, follow, container_width);
        }
    }

    /// Layout callback for the label row height.
    pub fn on_label_height(&mut self, height: f32) {
        self.label_height = if height.is_finite() {
            height.max(0.0)
        } else {
            0.0
        };
    }

    /// Current arguments.
    pub fn args(&self) -> &RangeSliderArgs {
        &self.args
    }

    /// Live values, bounds and step.
    pub fn state(&self) -> RangeState {
        self.state
    }

    /// Value of the low thumb (the only thumb of a single-value slider).
    pub fn low(&self) -> f32 {
        self.state.low
    }

    /// Value of the high thumb.
    pub fn high(&self) -> f32 {
        self.state.high
    }

    /// Measured geometry.
    pub fn geometry(&self) -> Geometry {
        self.geometry.geometry()
    }

    /// Thumb offsets and highlighted span as of the last update.
    pub fn visuals(&self) -> ThumbVisuals {
        self.visuals
    }

    /// The active gesture, if any.
    pub fn session(&self) -> Option<&GestureSession> {
        self.session.as_ref()
    }

    /// Returns `true` while a gesture is active.
    pub fn is_pressed(&self) -> bool {
        self.session.is_some()
    }

    /// The label follower, when enabled.
    pub fn label(&self) -> Option<&Follower> {
        self.label.as_ref()
    }

    /// The notch follower, when enabled.
    pub fn notch(&self) -> Option<&Follower> {
        self.notch.as_ref()
    }

    /// Opacity for both followers: visible only while pressed. They stay
    /// mounted while idle so their width keeps being measured.
    pub fn follower_opacity(&self) -> f32 {
        if self.is_pressed() { 1.0 } else { 0.0 }
    }

    /// Vertical offset of the label row.
    pub fn label_offset(&self) -> f32 {
        label_container_offset(self.args.floating_label, self.label_height)
    }

    fn adopt_external(&mut self) {
        let (low, high) = self.state.resolve(self.external);
        self.state.low = low;
        self.state.high = if self.args.disable_range {
            self.state.range.max
        } else {
            high
        };
        self.pending_external = false;
    }

    /// Recomputes both thumbs and the selected span from the live state and
    /// reports the values as not user-originated.
    fn refresh(&mut self) {
        let Some(visuals) = layout_thumbs(
            &self.state,
            self.geometry.geometry(),
            self.args.disable_range,
        ) else {
            trace!("geometry unmeasured, skipping thumb layout");
            return;
        };
        self.visuals = visuals;
        self.range_dirty = false;
        self.notify_value_changed(false);
    }

    fn notify_value_changed(&self, from_user: bool) {
        if let Some(on_value_changed) = &self.args.on_value_changed {
            on_value_changed.call(ValueChange {
                low: coerce(self.state.low),
                high: coerce(self.state.high),
                from_user,
            });
        }
    }

    fn sync_followers(&mut self) {
        let allow_overflow = self.args.allow_label_overflow;
        sync_follower(&mut self.label, self.args.show_label, allow_overflow);
        sync_follower(&mut self.notch, self.args.show_notch, allow_overflow);
    }
}

fn sync_follower(slot: &mut Option<Follower>, enabled: bool, allow_overflow: bool) {
    if !enabled {
        *slot = None;
        return;
    }
    if let Some(follower) = slot.as_mut() {
        follower.set_allow_overflow(allow_overflow);
    } else {
        *slot = Some(Follower::new(allow_overflow));
    }
}

fn relayout_follower(
    follower: &mut Follower,
    width: f32,
    follow: Option<FollowPoint>,
    container_width: f32,
) {
    if !follower.set_width(width) {
        return;
    }
    if let Some(follow) = follow {
        follower.update(follow.position, follow.value, container_width);
    }
}

fn warn_if_invalid(args: &RangeSliderArgs) {
    if let Err(err) = args.validate() {
        warn!(%err, "slider configured with invalid arguments; behavior is unspecified");
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use parking_lot::Mutex;

    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq)]
    enum Event {
        Start(f32, f32),
        End(f32, f32),
        Changed(ValueChange),
    }

    #[derive(Clone, Default)]
    struct Recorder {
        events: Arc<Mutex<Vec<Event>>>,
    }

    impl Recorder {
        fn attach(&self, args: RangeSliderArgs) -> RangeSliderArgs {
            let start = Arc::clone(&self.events);
            let end = Arc::clone(&self.events);
            let changed = Arc::clone(&self.events);
            args.on_touch_start(move |(low, high)| start.lock().push(Event::Start(low, high)))
                .on_touch_end(move |(low, high)| end.lock().push(Event::End(low, high)))
                .on_value_changed(move |change| changed.lock().push(Event::Changed(change)))
        }

        fn take(&self) -> Vec<Event> {
            std::mem::take(&mut *self.events.lock())
        }

        fn changes(&self) -> Vec<ValueChange> {
            self.take()
                .into_iter()
                .filter_map(|event| match event {
                    Event::Changed(change) => Some(change),
                    _ => None,
                })
                .collect()
        }
    }

    fn changed(low: f32, high: f32, from_user: bool) -> Event {
        Event::Changed(ValueChange {
            low,
            high,
            from_user,
        })
    }

    fn measured(args: RangeSliderArgs) -> SliderController {
        let mut controller = SliderController::new(args);
        controller.on_container_layout(300.0);
        controller.on_thumb_layout(30.0);
        controller
    }

    fn percent_slider(recorder: &Recorder, value: f32) -> SliderController {
        let args = SliderArgs::default().min(0.0).max(100.0).step(1.0).value(value);
        let controller = measured(recorder.attach(args.into()));
        recorder.take();
        controller
    }

    fn percent_range(recorder: &Recorder, low: f32, high: f32, min_range: f32) -> SliderController {
        let args = RangeSliderArgs::default()
            .min(0.0)
            .max(100.0)
            .step(1.0)
            .low(low)
            .high(high)
            .min_range(min_range);
        let controller = measured(recorder.attach(args));
        recorder.take();
        controller
    }

    fn down(x: f32) -> TouchEvent {
        TouchEvent::Down {
            location_x: x,
            page_x: x,
            active_touches: 1,
        }
    }

    #[test]
    fn layout_positions_thumbs_and_reports_non_user_change() {
        let recorder = Recorder::default();
        let args = recorder.attach(
            RangeSliderArgs::default()
                .min(0.0)
                .max(100.0)
                .step(1.0)
                .low(25.0)
                .high(75.0),
        );
        let mut controller = SliderController::new(args);
        controller.on_container_layout(300.0);
        assert!(recorder.take().is_empty(), "thumb not measured yet");

        controller.on_thumb_layout(30.0);
        assert_eq!(recorder.take(), vec![changed(25.0, 75.0, false)]);
        assert_eq!(controller.visuals().low_x, 67.5);
        assert_eq!(controller.visuals().high_x, Some(202.5));

        controller.on_thumb_layout(30.0);
        assert!(recorder.take().is_empty(), "unchanged width is ignored");
    }

    #[test]
    fn midpoint_drag_and_sub_step_debounce() {
        let recorder = Recorder::default();
        let mut controller = percent_slider(&recorder, 0.0);

        controller.handle_touch(down(150.0));
        assert_eq!(
            recorder.take(),
            vec![Event::Start(0.0, 100.0), changed(50.0, 100.0, true)]
        );
        assert_eq!(controller.visuals().low_x, 135.0);

        controller.handle_touch(TouchEvent::Move { page_x: 151.0 });
        assert!(recorder.take().is_empty());

        controller.handle_touch(TouchEvent::Move { page_x: 152.7 });
        assert_eq!(recorder.take(), vec![changed(51.0, 100.0, true)]);

        controller.handle_touch(TouchEvent::Release);
        assert_eq!(recorder.take(), vec![Event::End(51.0, 100.0)]);
        assert!(!controller.is_pressed());
    }

    #[test]
    fn moves_are_relative_to_the_container_origin() {
        let recorder = Recorder::default();
        let mut controller = percent_slider(&recorder, 0.0);

        controller.handle_touch(TouchEvent::Down {
            location_x: 15.0,
            page_x: 115.0,
            active_touches: 1,
        });
        controller.handle_touch(TouchEvent::Move { page_x: 250.0 });
        assert_eq!(controller.low(), 50.0);
    }

    #[test]
    fn repeated_moves_to_one_value_notify_once() {
        let recorder = Recorder::default();
        let mut controller = percent_slider(&recorder, 0.0);
        controller.handle_touch(down(100.0));
        recorder.take();

        for x in [150.0, 150.2, 150.4, 150.6, 150.8, 151.0, 151.2] {
            controller.handle_touch(TouchEvent::Move { page_x: x });
        }
        assert_eq!(recorder.changes().len(), 1);
    }

    #[test]
    fn equal_distance_touch_picks_high_thumb() {
        let recorder = Recorder::default();
        let mut controller = percent_range(&recorder, 25.0, 75.0, 1.0);
        // Thumb centers sit at 82.5 and 217.5; 150 is equidistant.
        controller.handle_touch(down(150.0));
        assert_eq!(
            controller.session().map(|s| s.active_thumb),
            Some(Thumb::High)
        );
        assert_eq!((controller.low(), controller.high()), (25.0, 50.0));
    }

    #[test]
    fn stacked_thumbs_split_by_touch_side() {
        let recorder = Recorder::default();
        let mut controller = percent_range(&recorder, 50.0, 50.0, 0.0);
        controller.handle_touch(down(100.0));
        assert_eq!(
            controller.session().map(|s| s.active_thumb),
            Some(Thumb::Low)
        );
        controller.handle_touch(TouchEvent::Release);
        controller.handle_touch(down(150.0));
        assert_eq!(
            controller.session().map(|s| s.active_thumb),
            Some(Thumb::High)
        );
    }

    #[test]
    fn thumbs_never_cross_or_get_closer_than_min_range() {
        let recorder = Recorder::default();
        let mut controller = percent_range(&recorder, 40.0, 60.0, 10.0);

        controller.handle_touch(down(122.0));
        assert_eq!(controller.session().map(|s| s.active_thumb), Some(Thumb::Low));
        controller.handle_touch(TouchEvent::Move { page_x: 290.0 });
        assert_eq!(controller.low(), 50.0);
        controller.handle_touch(TouchEvent::Release);

        controller.handle_touch(down(178.0));
        assert_eq!(controller.session().map(|s| s.active_thumb), Some(Thumb::High));
        controller.handle_touch(TouchEvent::Move { page_x: -40.0 });
        assert_eq!(controller.high(), 60.0);
        controller.handle_touch(TouchEvent::Release);

        let mut seed: u32 = 7;
        for _ in 0..400 {
            seed = seed.wrapping_mul(1_103_515_245).wrapping_add(12_345);
            let x = (seed >> 16) as f32 % 360.0 - 30.0;
            let event = match seed % 5 {
                0 => down(x),
                1 => TouchEvent::Release,
                _ => TouchEvent::Move { page_x: x },
            };
            controller.handle_touch(event);
            let state = controller.state();
            assert!(0.0 <= state.low && state.low <= state.high && state.high <= 100.0);
            assert!(state.high - state.low >= 10.0, "{state:?}");
        }
    }

    #[test]
    fn second_touch_aborts_activation() {
        let recorder = Recorder::default();
        let mut controller = percent_slider(&recorder, 10.0);
        controller.handle_touch(TouchEvent::Down {
            location_x: 150.0,
            page_x: 150.0,
            active_touches: 2,
        });
        assert!(!controller.is_pressed());
        controller.handle_touch(TouchEvent::Move { page_x: 200.0 });
        controller.handle_touch(TouchEvent::Release);
        assert!(recorder.take().is_empty());
        assert_eq!(controller.low(), 10.0);
    }

    #[test]
    fn disabled_slider_ignores_gestures() {
        let recorder = Recorder::default();
        let args = SliderArgs::default()
            .min(0.0)
            .max(100.0)
            .step(1.0)
            .disabled(true);
        let mut controller = measured(recorder.attach(args.into()));
        recorder.take();
        controller.handle_touch(down(150.0));
        assert!(!controller.is_pressed());
        assert!(recorder.take().is_empty());
    }

    #[test]
    fn terminate_ends_the_session_like_release() {
        let recorder = Recorder::default();
        let mut controller = percent_slider(&recorder, 0.0);
        controller.handle_touch(down(150.0));
        controller.handle_touch(TouchEvent::Terminate);
        assert_eq!(recorder.take().last(), Some(&Event::End(50.0, 100.0)));
        assert!(!controller.is_pressed());

        controller.handle_touch(down(15.0));
        controller.cancel();
        assert_eq!(recorder.take().last(), Some(&Event::End(0.0, 100.0)));
    }

    #[test]
    fn external_value_updates_position_when_idle() {
        let recorder = Recorder::default();
        let base = SliderArgs::default().min(0.0).max(100.0).step(1.0).value(0.0);
        let mut controller = measured(recorder.attach(base.clone().into()));
        recorder.take();

        controller.update_args(recorder.attach(base.clone().value(40.0).into()));
        assert_eq!(recorder.take(), vec![changed(40.0, 100.0, false)]);
        assert_eq!(controller.visuals().low_x, 108.0);

        controller.update_args(recorder.attach(base.value(40.0).into()));
        assert!(recorder.take().is_empty(), "same snapshot is not a change");
    }

    #[test]
    fn external_value_waits_for_the_gesture_to_end() {
        let recorder = Recorder::default();
        let base = SliderArgs::default().min(0.0).max(100.0).step(1.0).value(0.0);
        let mut controller = measured(recorder.attach(base.clone().into()));
        controller.handle_touch(down(150.0));
        recorder.take();

        controller.update_args(recorder.attach(base.value(10.0).into()));
        assert_eq!(controller.low(), 50.0);
        assert!(recorder.take().is_empty());

        controller.handle_touch(TouchEvent::Release);
        assert_eq!(
            recorder.take(),
            vec![Event::End(50.0, 100.0), changed(10.0, 100.0, false)]
        );
        assert_eq!(controller.low(), 10.0);
        assert_eq!(controller.visuals().low_x, 27.0);
    }

    #[test]
    fn echoed_value_does_not_renotify_after_release() {
        let recorder = Recorder::default();
        let base = SliderArgs::default().min(0.0).max(100.0).step(1.0).value(0.0);
        let mut controller = measured(recorder.attach(base.clone().into()));
        controller.handle_touch(down(150.0));
        controller.update_args(recorder.attach(base.value(50.0).into()));
        recorder.take();

        controller.handle_touch(TouchEvent::Release);
        assert_eq!(recorder.take(), vec![Event::End(50.0, 100.0)]);
    }

    #[test]
    fn crowded_configuration_is_separated_before_any_drag() {
        let recorder = Recorder::default();
        let args = RangeSliderArgs::default()
            .min(0.0)
            .max(100.0)
            .step(1.0)
            .low(0.0)
            .high(5.0)
            .min_range(10.0);
        assert!(args.validate().is_ok());
        let mut controller = measured(recorder.attach(args));
        assert_eq!((controller.low(), controller.high()), (0.0, 10.0));

        controller.handle_touch(down(10.0));
        controller.handle_touch(TouchEvent::Move { page_x: -50.0 });
        controller.handle_touch(TouchEvent::Release);
        controller.handle_touch(down(42.0));
        controller.handle_touch(TouchEvent::Move { page_x: 20.0 });
        controller.handle_touch(TouchEvent::Release);

        for change in recorder.changes() {
            assert!(change.low >= 0.0 && change.high <= 100.0, "{change:?}");
            assert!(change.high - change.low >= 10.0, "{change:?}");
        }
        assert_eq!((controller.low(), controller.high()), (0.0, 10.0));
    }

    #[test]
    fn range_change_while_idle_relayouts_thumbs() {
        let recorder = Recorder::default();
        let base = RangeSliderArgs::default()
            .min(0.0)
            .max(100.0)
            .step(1.0)
            .low(25.0)
            .high(75.0);
        let mut controller = measured(recorder.attach(base.clone()));
        recorder.take();

        controller.update_args(recorder.attach(base.max(200.0)));
        assert_eq!(recorder.take(), vec![changed(25.0, 75.0, false)]);
        assert_eq!(controller.visuals().low_x, 33.75);
        assert_eq!(controller.visuals().high_x, Some(101.25));
    }

    #[test]
    fn range_change_mid_drag_relayouts_on_release() {
        let recorder = Recorder::default();
        let base = RangeSliderArgs::default()
            .min(0.0)
            .max(100.0)
            .step(1.0)
            .low(25.0)
            .high(75.0);
        let mut controller = measured(recorder.attach(base.clone()));
        controller.handle_touch(down(150.0));
        assert_eq!(
            recorder.take(),
            vec![Event::Start(25.0, 75.0), changed(25.0, 50.0, true)]
        );

        controller.update_args(recorder.attach(base.max(200.0)));
        assert!(recorder.take().is_empty());
        assert_eq!(controller.visuals().low_x, 67.5);

        controller.handle_touch(TouchEvent::Release);
        assert_eq!(
            recorder.take(),
            vec![Event::End(25.0, 50.0), changed(25.0, 50.0, false)]
        );
        assert_eq!(controller.visuals().low_x, 33.75);
        assert_eq!(controller.visuals().high_x, Some(67.5));
    }

    #[test]
    fn reconfiguration_mid_drag_uses_live_step() {
        let recorder = Recorder::default();
        let base = RangeSliderArgs::default().min(0.0).max(100.0).step(1.0);
        let mut controller = measured(recorder.attach(base.clone()));
        controller.handle_touch(down(15.0));
        controller.update_args(recorder.attach(base.step(10.0)));

        controller.handle_touch(TouchEvent::Move { page_x: 120.0 });
        let low = controller.low();
        assert_eq!(low % 10.0, 0.0, "{low} is not on the new step");
    }

    #[test]
    fn unmeasured_geometry_is_a_no_op() {
        let recorder = Recorder::default();
        let args = SliderArgs::default().min(0.0).max(100.0).step(1.0);
        let mut controller = SliderController::new(recorder.attach(args.into()));
        controller.handle_touch(down(150.0));
        controller.handle_touch(TouchEvent::Move { page_x: 200.0 });
        controller.handle_touch(TouchEvent::Release);
        assert_eq!(
            recorder.take(),
            vec![Event::Start(0.0, 100.0), Event::End(0.0, 100.0)]
        );
        assert_eq!(controller.visuals(), ThumbVisuals::default());
    }

    #[test]
    fn zero_travel_space_never_moves_the_thumb() {
        let recorder = Recorder::default();
        let args = SliderArgs::default().min(0.0).max(100.0).step(1.0);
        let mut controller = SliderController::new(recorder.attach(args.into()));
        controller.on_container_layout(30.0);
        controller.on_thumb_layout(30.0);
        controller.handle_touch(down(15.0));
        controller.handle_touch(TouchEvent::Move { page_x: 25.0 });
        assert_eq!(controller.low(), 0.0);
        assert!(!controller.low().is_nan());
    }

    #[test]
    fn zero_travel_sentinel_never_reaches_an_offset_range() {
        let recorder = Recorder::default();
        let args = SliderArgs::default().min(10.0).max(20.0).step(1.0).value(12.0);
        let mut controller = SliderController::new(recorder.attach(args.into()));
        controller.on_container_layout(30.0);
        controller.on_thumb_layout(30.0);
        controller.handle_touch(down(15.0));
        controller.handle_touch(TouchEvent::Move { page_x: 0.0 });
        controller.handle_touch(TouchEvent::Release);

        assert_eq!(controller.low(), 12.0);
        assert!(recorder.changes().is_empty());
    }

    #[test]
    fn nan_external_values_are_scrubbed() {
        let recorder = Recorder::default();
        let args = RangeSliderArgs::default()
            .min(0.0)
            .max(100.0)
            .step(1.0)
            .low(f32::NAN)
            .high(80.0);
        let mut controller = measured(recorder.attach(args));
        for change in recorder.changes() {
            assert!(!change.low.is_nan() && !change.high.is_nan());
        }
        controller.handle_touch(down(15.0));
        assert!(!controller.low().is_nan());
    }

    #[test]
    fn followers_track_the_active_thumb_while_pressed() {
        let recorder = Recorder::default();
        let args = RangeSliderArgs::default()
            .min(0.0)
            .max(100.0)
            .step(1.0)
            .low(0.0)
            .high(100.0);
        let mut controller = measured(recorder.attach(args));
        controller.on_label_layout(40.0);
        controller.on_notch_layout(8.0);
        let content = controller.label().map(Follower::content);
        assert_eq!(controller.follower_opacity(), 0.0);

        controller.handle_touch(down(150.0));
        assert_eq!(controller.follower_opacity(), 1.0);
        let label = controller.label().map(|l| l.x());
        assert_eq!(label, Some(130.0));
        assert_eq!(controller.notch().map(|n| n.x()), Some(146.0));
        assert_eq!(content.and_then(|c| c.value()), Some(50.0));

        controller.handle_touch(TouchEvent::Move { page_x: 0.0 });
        assert_eq!(controller.label().map(|l| l.x()), Some(0.0));

        controller.on_label_layout(60.0);
        assert_eq!(controller.label().map(|l| l.x()), Some(0.0));

        controller.handle_touch(TouchEvent::Release);
        assert_eq!(controller.follower_opacity(), 0.0);
    }

    #[test]
    fn label_overflow_can_be_allowed() {
        let args = RangeSliderArgs::default()
            .min(0.0)
            .max(100.0)
            .step(1.0)
            .low(0.0)
            .high(100.0)
            .allow_label_overflow(true);
        let mut controller = measured(args);
        controller.on_label_layout(40.0);
        controller.handle_touch(down(0.0));
        assert_eq!(controller.label().map(|l| l.x()), Some(-5.0));
    }

    #[test]
    fn floating_label_offset() {
        let mut controller = SliderController::new(RangeSliderArgs::default().floating_label(true));
        controller.on_label_height(14.0);
        assert_eq!(controller.label_offset(), -14.0);
    }

    #[test]
    fn validation_flags_bad_configuration() {
        assert_eq!(
            RangeSliderArgs::default().min(2.0).max(1.0).validate(),
            Err(SliderConfigError::EmptyRange { min: 2.0, max: 1.0 })
        );
        assert_eq!(
            SliderArgs::default().step(0.0).validate(),
            Err(SliderConfigError::NonPositiveStep(0.0))
        );
        assert_eq!(
            RangeSliderArgs::default().min_range(-1.0).validate(),
            Err(SliderConfigError::NegativeMinRange(-1.0))
        );
        assert!(RangeSliderArgs::default().validate().is_ok());
    }
}
