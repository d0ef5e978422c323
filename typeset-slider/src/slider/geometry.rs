/// Measured widths of the slider container and its thumb.
///
/// Both values come from asynchronous layout callbacks and are `0.0` until
/// the first measurement arrives. A zero width means "unknown".
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Geometry {
    /// Width of the touchable container.
    pub container_width: f32,
    /// Width of a single thumb.
    pub thumb_width: f32,
}

impl Geometry {
    /// Creates a geometry from already measured widths.
    pub fn new(container_width: f32, thumb_width: f32) -> Self {
        Self {
            container_width: sanitize_width(container_width),
            thumb_width: sanitize_width(thumb_width),
        }
    }

    /// Returns `true` once both container and thumb have a non-zero width.
    pub fn is_measured(&self) -> bool {
        self.container_width > 0.0 && self.thumb_width > 0.0
    }

    /// Travel space of a thumb's leading edge, or `None` when the geometry is
    /// unmeasured or the thumb is at least as wide as the container.
    pub fn available_space(&self) -> Option<f32> {
        if !self.is_measured() {
            return None;
        }
        let space = self.container_width - self.thumb_width;
        (space > 0.0).then_some(space)
    }
}

fn sanitize_width(width: f32) -> f32 {
    if width.is_finite() && width > 0.0 {
        width
    } else {
        0.0
    }
}

/// Owns the slider's [`Geometry`] and filters redundant layout reports.
#[derive(Debug, Clone, Default)]
pub struct GeometryTracker {
    geometry: Geometry,
}

impl GeometryTracker {
    /// Current geometry snapshot.
    pub fn geometry(&self) -> Geometry {
        self.geometry
    }

    /// Records a container measurement. Returns `true` if the width changed.
    pub fn set_container_width(&mut self, width: f32) -> bool {
        let width = sanitize_width(width);
        if self.geometry.container_width == width {
            return false;
        }
        self.geometry.container_width = width;
        true
    }

    /// Records a thumb measurement. Returns `true` if the width changed.
    pub fn set_thumb_width(&mut self, width: f32) -> bool {
        let width = sanitize_width(width);
        if self.geometry.thumb_width == width {
            return false;
        }
        self.geometry.thumb_width = width;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unmeasured_geometry_has_no_travel_space() {
        assert_eq!(Geometry::default().available_space(), None);
        assert_eq!(Geometry::new(300.0, 0.0).available_space(), None);
        assert_eq!(Geometry::new(0.0, 30.0).available_space(), None);
    }

    #[test]
    fn thumb_as_wide_as_container_is_degenerate() {
        let geometry = Geometry::new(30.0, 30.0);
        assert!(geometry.is_measured());
        assert_eq!(geometry.available_space(), None);
        assert_eq!(Geometry::new(300.0, 30.0).available_space(), Some(270.0));
    }

    #[test]
    fn tracker_reports_only_real_changes() {
        let mut tracker = GeometryTracker::default();
        assert!(tracker.set_container_width(300.0));
        assert!(!tracker.set_container_width(300.0));
        assert!(tracker.set_thumb_width(30.0));
        assert!(!tracker.set_thumb_width(30.0));
        assert_eq!(tracker.geometry(), Geometry::new(300.0, 30.0));
    }

    #[test]
    fn invalid_measurements_reset_to_unknown() {
        let mut tracker = GeometryTracker::default();
        tracker.set_container_width(200.0);
        assert!(tracker.set_container_width(-4.0));
        assert_eq!(tracker.geometry().container_width, 0.0);
        assert!(!tracker.set_container_width(f32::NAN));
        assert!(!tracker.geometry().is_measured());
    }
}
