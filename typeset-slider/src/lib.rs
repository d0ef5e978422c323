//! Headless slider engine for the typeset tuning tools.
//!
//! The crate turns raw pointer coordinates into quantized domain values for a
//! single-value or dual-thumb range slider, keeps the thumb positions and the
//! highlighted span in sync with those values, and tracks label/notch
//! overlays. Rendering is left to the host.
//!
//! # Example
//!
//! ```
//! use typeset_slider::{SliderArgs, SliderController, TouchEvent};
//!
//! let mut slider = SliderController::new(
//!     SliderArgs::default()
//!         .min(0.0)
//!         .max(100.0)
//!         .step(1.0)
//!         .on_change(|value| println!("size = {value}")),
//! );
//! slider.on_container_layout(300.0);
//! slider.on_thumb_layout(30.0);
//!
//! slider.handle_touch(TouchEvent::Down {
//!     location_x: 150.0,
//!     page_x: 150.0,
//!     active_touches: 1,
//! });
//! slider.handle_touch(TouchEvent::Release);
//! assert_eq!(slider.low(), 50.0);
//! ```
#![deny(missing_docs, clippy::unwrap_used)]

pub mod prop;
pub mod slider;

pub use prop::CallbackWith;
pub use slider::{
    ExternalSnapshot, Follower, FollowerContent, Geometry, GeometryTracker, GestureSession,
    RangeSliderArgs, RangeState, SelectedRail, SliderArgs, SliderConfigError, SliderController,
    SliderRange, SyncAction, Thumb, ThumbVisuals, TouchEvent, ValueChange, follower_offset,
    label_container_offset, position_to_value, select_thumb, sync_action, thumb_center,
    value_to_position,
};
