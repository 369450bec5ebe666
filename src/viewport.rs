//! The map viewport: a center coordinate plus a visible span.
//!
//! All region mutations happen here, synchronously. Zoom operations clamp the
//! span deltas to a sane range so repeated presses cannot produce degenerate
//! spans.

use crate::catalog::Coordinate;

/// Zoom factor applied by one zoom-in or zoom-out step.
pub const ZOOM_FACTOR: f64 = 1.5;

/// Span applied when jumping to a search result.
pub const FOCUS_SPAN: Span = Span {
    latitude_delta: 0.05,
    longitude_delta: 0.05,
};

/// Smallest span delta a zoom step may produce.
pub const MIN_SPAN_DELTA: f64 = 0.001;

/// Largest span deltas a zoom step may produce (full map extent).
pub const MAX_LATITUDE_DELTA: f64 = 180.0;
pub const MAX_LONGITUDE_DELTA: f64 = 360.0;

/// Fraction of the visible span covered by one pan step.
const PAN_STEP: f64 = 0.1;

/// Default start region: western Mecklenburg at a 0.5° span.
pub fn default_start_region() -> Region {
    Region::new(Coordinate::new(53.77, 11.15), Span::new(0.5, 0.5))
}

/// Angular width and height of the visible map window. Both deltas are
/// strictly positive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Span {
    pub latitude_delta: f64,
    pub longitude_delta: f64,
}

impl Span {
    pub const fn new(latitude_delta: f64, longitude_delta: f64) -> Self {
        Self {
            latitude_delta,
            longitude_delta,
        }
    }
}

/// The visible map window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Region {
    pub center: Coordinate,
    pub span: Span,
}

impl Region {
    pub const fn new(center: Coordinate, span: Span) -> Self {
        Self { center, span }
    }
}

/// Owns the current [`Region`] and the start region used by reset.
#[derive(Debug, Clone)]
pub struct Viewport {
    region: Region,
    start_region: Region,
}

impl Viewport {
    pub fn new(start_region: Region) -> Self {
        Self {
            region: start_region,
            start_region,
        }
    }

    pub fn region(&self) -> Region {
        self.region
    }

    pub fn start_region(&self) -> Region {
        self.start_region
    }

    /// Shrink the visible span by [`ZOOM_FACTOR`].
    pub fn zoom_in(&mut self) {
        self.region.span = clamp_span(Span::new(
            self.region.span.latitude_delta / ZOOM_FACTOR,
            self.region.span.longitude_delta / ZOOM_FACTOR,
        ));
    }

    /// Grow the visible span by [`ZOOM_FACTOR`].
    pub fn zoom_out(&mut self) {
        self.region.span = clamp_span(Span::new(
            self.region.span.latitude_delta * ZOOM_FACTOR,
            self.region.span.longitude_delta * ZOOM_FACTOR,
        ));
    }

    /// Restore the start region exactly, discarding all zoom/pan history.
    pub fn reset(&mut self) {
        self.region = self.start_region;
    }

    /// Jump to a coordinate with the fixed [`FOCUS_SPAN`], overriding the
    /// current zoom level. Used when a search result is selected.
    pub fn recenter(&mut self, coordinate: Coordinate) {
        self.region = Region::new(coordinate, FOCUS_SPAN);
    }

    /// Store an externally produced region verbatim. Any positive-span
    /// region is accepted.
    pub fn set_region(&mut self, region: Region) {
        self.region = region;
    }

    /// Shift the center by the given fractions of the visible span. This is
    /// the keyboard analogue of the map widget's pan gesture: the shifted
    /// region is clamped to valid coordinates and then stored through
    /// [`Viewport::set_region`].
    pub fn pan(&mut self, dx: f64, dy: f64) {
        let region = self.region;
        let center = Coordinate::new(
            (region.center.latitude + dy * region.span.latitude_delta * PAN_STEP)
                .clamp(-90.0, 90.0),
            (region.center.longitude + dx * region.span.longitude_delta * PAN_STEP)
                .clamp(-180.0, 180.0),
        );
        self.set_region(Region::new(center, region.span));
    }
}

fn clamp_span(span: Span) -> Span {
    Span::new(
        span.latitude_delta.clamp(MIN_SPAN_DELTA, MAX_LATITUDE_DELTA),
        span.longitude_delta
            .clamp(MIN_SPAN_DELTA, MAX_LONGITUDE_DELTA),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn start() -> Region {
        Region::new(Coordinate::new(53.77, 11.15), Span::new(0.5, 0.5))
    }

    #[test]
    fn zoom_round_trip_restores_span() {
        let mut viewport = Viewport::new(start());
        viewport.zoom_in();
        viewport.zoom_out();
        let span = viewport.region().span;
        assert!((span.latitude_delta - 0.5).abs() < 1e-12);
        assert!((span.longitude_delta - 0.5).abs() < 1e-12);
    }

    #[test]
    fn reset_restores_start_region_after_any_history() {
        let mut viewport = Viewport::new(start());
        viewport.zoom_in();
        viewport.pan(3.0, -2.0);
        viewport.recenter(Coordinate::new(53.1, 11.9));
        viewport.reset();
        assert_eq!(viewport.region(), start());
    }

    #[test]
    fn recenter_applies_the_focus_span() {
        let mut viewport = Viewport::new(start());
        let target = Coordinate::new(53.7804, 11.0504);
        viewport.recenter(target);
        let region = viewport.region();
        assert_eq!(region.center, target);
        assert_eq!(region.span, FOCUS_SPAN);
    }

    #[test]
    fn repeated_zoom_in_stops_at_the_minimum_span() {
        let mut viewport = Viewport::new(start());
        for _ in 0..64 {
            viewport.zoom_in();
        }
        let span = viewport.region().span;
        assert_eq!(span.latitude_delta, MIN_SPAN_DELTA);
        assert_eq!(span.longitude_delta, MIN_SPAN_DELTA);
    }

    #[test]
    fn repeated_zoom_out_stops_at_the_map_extent() {
        let mut viewport = Viewport::new(start());
        for _ in 0..64 {
            viewport.zoom_out();
        }
        let span = viewport.region().span;
        assert_eq!(span.latitude_delta, MAX_LATITUDE_DELTA);
        assert_eq!(span.longitude_delta, MAX_LONGITUDE_DELTA);
    }

    #[test]
    fn set_region_stores_verbatim() {
        let mut viewport = Viewport::new(start());
        let region = Region::new(Coordinate::new(-10.0, 99.0), Span::new(12.5, 7.25));
        viewport.set_region(region);
        assert_eq!(viewport.region(), region);
    }

    #[test]
    fn pan_clamps_the_center_to_valid_coordinates() {
        let mut viewport = Viewport::new(Region::new(
            Coordinate::new(89.99, 179.99),
            Span::new(10.0, 10.0),
        ));
        for _ in 0..100 {
            viewport.pan(1.0, 1.0);
        }
        let center = viewport.region().center;
        assert!(center.latitude <= 90.0);
        assert!(center.longitude <= 180.0);
    }
}
