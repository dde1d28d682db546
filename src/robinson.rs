//! Robinson projection for the flat school atlas map
//!
//! The projection is approximated by linear interpolation between the
//! classic Robinson control points at 5° steps. This is coarser than the
//! spline interpolation of the real projection, but matches the printed
//! atlas closely enough for placing pins by finger.
//!
//! Normalised map coordinates run from `-1` to `1` on both axes: `x` is
//! `plen * lon / 180`, `y` is `pdfe` with north pointing to negative `y`
//! (screen coordinates grow downward).

use crate::types::{GeoPoint, ImageSize, PixelPoint, ProjectionFrame};

/// One row of the Robinson control point table
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlPoint {
    /// Latitude in degrees
    pub lat: f64,
    /// Length of the parallel relative to the equator
    pub plen: f64,
    /// Distance from the equator relative to the pole
    pub pdfe: f64,
}

const fn cp(lat: f64, plen: f64, pdfe: f64) -> ControlPoint {
    ControlPoint { lat, plen, pdfe }
}

/// Latitude spacing of [`ROBINSON_TABLE`] in degrees
pub const TABLE_STEP_DEG: f64 = 5.0;

/// Robinson control points from the equator to the pole
///
/// `plen` shrinks and `pdfe` grows monotonically with latitude, which the
/// inverse lookup relies on.
pub const ROBINSON_TABLE: [ControlPoint; 19] = [
    cp(0.0, 1.0000, 0.0000),
    cp(5.0, 0.9986, 0.0620),
    cp(10.0, 0.9954, 0.1240),
    cp(15.0, 0.9900, 0.1860),
    cp(20.0, 0.9822, 0.2480),
    cp(25.0, 0.9730, 0.3100),
    cp(30.0, 0.9600, 0.3720),
    cp(35.0, 0.9427, 0.4340),
    cp(40.0, 0.9216, 0.4958),
    cp(45.0, 0.8962, 0.5571),
    cp(50.0, 0.8679, 0.6176),
    cp(55.0, 0.8350, 0.6769),
    cp(60.0, 0.7986, 0.7346),
    cp(65.0, 0.7597, 0.7903),
    cp(70.0, 0.7186, 0.8435),
    cp(75.0, 0.6732, 0.8936),
    cp(80.0, 0.6213, 0.9394),
    cp(85.0, 0.5722, 0.9761),
    cp(90.0, 0.5322, 1.0000),
];

/// Below this `plen` the inverse gives up on recovering longitude
const PLEN_EPSILON: f64 = 0.001;

/// Latitude limit for coordinates recovered from a tap
pub const MAX_UNPROJECTED_LAT: f64 = 85.0;

/// Earth's equatorial circumference in kilometres
pub const DEFAULT_CIRCUMFERENCE_KM: f64 = 40075.0;

/// Lowest `plen` used when converting overlay radii to pixels
pub const DEFAULT_LENGTH_SCALE_FLOOR: f64 = 0.3;

/// Interpolate one column of the table at `abs_lat` (clamped to `[0, 90]`)
fn interpolate(abs_lat: f64, column: impl Fn(&ControlPoint) -> f64) -> f64 {
    let clamped = abs_lat.clamp(0.0, 90.0);
    let index = clamped / TABLE_STEP_DEG;
    let i = (index as usize).min(ROBINSON_TABLE.len() - 2);
    let frac = index - i as f64;

    let lo = column(&ROBINSON_TABLE[i]);
    let hi = column(&ROBINSON_TABLE[i + 1]);
    lo + frac * (hi - lo)
}

/// Parallel length factor at `abs_lat` degrees
pub fn plen(abs_lat: f64) -> f64 {
    interpolate(abs_lat, |row| row.plen)
}

/// Normalised distance from the equator at `abs_lat` degrees
pub fn pdfe(abs_lat: f64) -> f64 {
    interpolate(abs_lat, |row| row.pdfe)
}

/// Absolute latitude whose [`pdfe`] equals `value`
///
/// Linear search for the bracketing rows. Returns 90° for values past the
/// last row.
pub fn inverse_pdfe(value: f64) -> f64 {
    let clamped = value.clamp(0.0, 1.0);

    for pair in ROBINSON_TABLE.windows(2) {
        let (lo, hi) = (pair[0], pair[1]);
        if clamped >= lo.pdfe && clamped <= hi.pdfe {
            let span = hi.pdfe - lo.pdfe;
            let frac = if span > 0.0 {
                (clamped - lo.pdfe) / span
            } else {
                0.0
            };
            return lo.lat + frac * (hi.lat - lo.lat);
        }
    }

    90.0
}

/// Converts between coordinates and pixels on one flat map asset
///
/// Holds only calibration values, so it is `Copy` and can be shared freely
/// between threads.
///
/// # Example
///
/// ```
/// use atlas_quiz::{GeoPoint, ImageSize, ProjectionFrame, RobinsonProjector};
///
/// let projector = RobinsonProjector::new(ProjectionFrame::SCHOOL_ATLAS);
/// let size = ImageSize::new(2561.0, 1809.0);
///
/// let bern = GeoPoint::new(46.948, 7.4474);
/// let pixel = projector.project(bern, size);
/// let back = projector.unproject(pixel, size);
///
/// assert!((back.lat - bern.lat).abs() < 1e-6);
/// assert!((back.lon - bern.lon).abs() < 1e-6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RobinsonProjector {
    frame: ProjectionFrame,
    circumference_km: f64,
    length_scale_floor: f64,
}

impl RobinsonProjector {
    /// Create a projector for the given frame with default calibration
    pub fn new(frame: ProjectionFrame) -> Self {
        Self {
            frame,
            circumference_km: DEFAULT_CIRCUMFERENCE_KM,
            length_scale_floor: DEFAULT_LENGTH_SCALE_FLOOR,
        }
    }

    /// Override the circumference the map width is assumed to represent
    ///
    /// `km` must be a positive finite number. Returns `&mut self` to allow
    /// method chaining.
    pub fn with_circumference_km(&mut self, km: f64) -> &mut Self {
        debug_assert!(km.is_finite() && km > 0.0, "invalid circumference: {km}");
        self.circumference_km = km;
        self
    }

    /// Override the `plen` floor used by [`pixel_radius`](Self::pixel_radius)
    ///
    /// `floor` must be a positive finite number. Returns `&mut self` to allow
    /// method chaining.
    pub fn with_length_scale_floor(&mut self, floor: f64) -> &mut Self {
        debug_assert!(
            floor.is_finite() && floor > 0.0,
            "invalid length scale floor: {floor}"
        );
        self.length_scale_floor = floor;
        self
    }

    pub fn frame(&self) -> &ProjectionFrame {
        &self.frame
    }

    /// Pixel position of `point` on an image of `size`
    ///
    /// Always returns a position, even if it falls outside the image.
    pub fn project(&self, point: GeoPoint, size: ImageSize) -> PixelPoint {
        let abs_lat = point.lat.abs();
        let x_norm = plen(abs_lat) * point.lon / 180.0;
        let y_norm = pdfe(abs_lat) * if point.lat >= 0.0 { -1.0 } else { 1.0 };

        PixelPoint {
            x: size.width * self.frame.center_x + x_norm * size.width * self.frame.half_width,
            y: size.height * self.frame.center_y + y_norm * size.height * self.frame.half_height,
        }
    }

    /// Coordinate under a pixel position on an image of `size`
    ///
    /// Taps outside the projected ellipse degrade to the nearest valid
    /// coordinate. The result is clamped to ±85° latitude and ±180°
    /// longitude. An empty image (before layout) or a non-finite tap maps to
    /// the center of the map at 0°/0°.
    pub fn unproject(&self, pixel: PixelPoint, size: ImageSize) -> GeoPoint {
        let usable = |v: f64| v.is_finite() && v > 0.0;
        if !(usable(size.width) && usable(size.height) && pixel.x.is_finite() && pixel.y.is_finite())
        {
            tracing::trace!(?pixel, ?size, "tap on an empty image or at a non-finite position");
            return GeoPoint::new(0.0, 0.0);
        }

        let x_norm = (pixel.x - size.width * self.frame.center_x) / (size.width * self.frame.half_width);
        let y_norm =
            (pixel.y - size.height * self.frame.center_y) / (size.height * self.frame.half_height);

        let is_north = y_norm < 0.0;
        let abs_pdfe = y_norm.abs().min(1.0);
        let abs_lat = inverse_pdfe(abs_pdfe);
        let lat = if is_north { abs_lat } else { -abs_lat };

        let length = plen(abs_lat);
        let lon = if length > PLEN_EPSILON {
            x_norm / length * 180.0
        } else {
            0.0
        };

        let result = GeoPoint {
            lat: lat.clamp(-MAX_UNPROJECTED_LAT, MAX_UNPROJECTED_LAT),
            lon: lon.clamp(-180.0, 180.0),
        };
        if result.lat != lat || result.lon != lon {
            tracing::trace!(?pixel, lat, lon, "clamped tap outside the map ellipse");
        }
        result
    }

    /// Radius in pixels of a `km` circle drawn around `at`
    ///
    /// Only a drawing aid for tolerance overlays. The map narrows toward the
    /// poles, so the km-per-pixel scale is divided by `plen` at `at`, floored
    /// to keep the result finite.
    pub fn pixel_radius(&self, km: f64, at: GeoPoint, size: ImageSize) -> f64 {
        let map_width_at_equator = 2.0 * self.frame.half_width * size.width;
        let km_per_pixel_at_equator = self.circumference_km / map_width_at_equator;
        let length = plen(at.lat.abs()).max(self.length_scale_floor);
        let km_per_pixel = km_per_pixel_at_equator / length;
        km / km_per_pixel
    }
}

impl Default for RobinsonProjector {
    fn default() -> Self {
        Self::new(ProjectionFrame::SCHOOL_ATLAS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SCHOOL_ATLAS_ASPECT_RATIO;
    use claims::{assert_ge, assert_gt, assert_le, assert_lt, assert_ok};

    fn atlas_size() -> ImageSize {
        ImageSize::from_height(1000.0, SCHOOL_ATLAS_ASPECT_RATIO)
    }

    #[test]
    fn table_is_monotonic() {
        for pair in ROBINSON_TABLE.windows(2) {
            assert_eq!(pair[1].lat - pair[0].lat, TABLE_STEP_DEG);
            assert_le!(pair[1].plen, pair[0].plen);
            assert_gt!(pair[1].pdfe, pair[0].pdfe);
        }
        assert_eq!(ROBINSON_TABLE[0].pdfe, 0.0);
        assert_eq!(ROBINSON_TABLE[18].pdfe, 1.0);
    }

    #[test]
    fn interpolation_hits_table_rows() {
        assert_eq!(plen(0.0), 1.0);
        assert_eq!(plen(45.0), 0.8962);
        assert!((pdfe(90.0) - 1.0).abs() < 1e-12);
        assert_eq!(pdfe(60.0), 0.7346);
    }

    #[test]
    fn interpolation_between_rows() {
        let mid = pdfe(42.5);
        assert!((mid - (0.4958 + 0.5571) / 2.0).abs() < 1e-12);
    }

    #[test]
    fn interpolation_clamps_input() {
        assert_eq!(plen(120.0), plen(90.0));
        assert_eq!(pdfe(-10.0), 0.0);
    }

    #[test]
    fn inverse_pdfe_matches_forward() {
        for lat in [0.0, 3.0, 17.5, 44.0, 61.2, 89.0] {
            assert!((inverse_pdfe(pdfe(lat)) - lat).abs() < 1e-9, "lat {lat}");
        }
        assert_eq!(inverse_pdfe(1.5), 90.0);
        assert_eq!(inverse_pdfe(-0.2), 0.0);
    }

    #[test]
    fn origin_maps_to_ellipse_center() {
        let projector = RobinsonProjector::default();
        let size = atlas_size();
        let pixel = projector.project(GeoPoint::new(0.0, 0.0), size);

        assert_eq!(pixel.x, size.width * 0.500);
        assert_eq!(pixel.y, size.height * 0.508);
    }

    #[test]
    fn north_is_up_and_east_is_right() {
        let projector = RobinsonProjector::default();
        let size = atlas_size();
        let center = projector.project(GeoPoint::new(0.0, 0.0), size);

        let north_east = projector.project(GeoPoint::new(45.0, 90.0), size);
        assert_lt!(north_east.y, center.y);
        assert_gt!(north_east.x, center.x);

        let south_west = projector.project(GeoPoint::new(-45.0, -90.0), size);
        assert_gt!(south_west.y, center.y);
        assert_lt!(south_west.x, center.x);
    }

    #[test]
    fn project_known_point() {
        let projector = RobinsonProjector::default();
        let size = ImageSize::new(1000.0, 1000.0);
        let pixel = projector.project(GeoPoint::new(45.0, 90.0), size);

        let expected_x = 500.0 + 0.8962 * 0.5 * 1000.0 * 0.486;
        let expected_y = 508.0 - 0.5571 * 1000.0 * 0.413;
        assert!((pixel.x - expected_x).abs() < 1e-9);
        assert!((pixel.y - expected_y).abs() < 1e-9);
    }

    #[test]
    fn unproject_outside_ellipse_is_clamped() {
        let projector = RobinsonProjector::default();
        let size = atlas_size();

        let top_left = projector.unproject(PixelPoint::new(0.0, 0.0), size);
        assert_eq!(top_left.lat, 85.0);
        assert_eq!(top_left.lon, -180.0);

        let bottom_right = projector.unproject(PixelPoint::new(size.width, size.height), size);
        assert_eq!(bottom_right.lat, -85.0);
        assert_eq!(bottom_right.lon, 180.0);
    }

    #[test]
    fn unproject_center_is_origin() {
        let projector = RobinsonProjector::default();
        let size = atlas_size();
        let center = PixelPoint::new(size.width * 0.5, size.height * 0.508);
        let point = projector.unproject(center, size);

        assert!(point.lat.abs() < 1e-9);
        assert!(point.lon.abs() < 1e-9);
    }

    #[test]
    fn pixel_radius_at_equator() {
        let projector = RobinsonProjector::default();
        let size = ImageSize::new(1000.0, 700.0);
        let radius = projector.pixel_radius(DEFAULT_CIRCUMFERENCE_KM, GeoPoint::new(0.0, 0.0), size);

        // the whole circumference spans the full ellipse width
        assert!((radius - 2.0 * 0.486 * 1000.0).abs() < 1e-9);
    }

    #[test]
    fn pixel_radius_shrinks_with_latitude_and_grows_with_km() {
        let projector = RobinsonProjector::default();
        let size = atlas_size();
        let equator = projector.pixel_radius(100.0, GeoPoint::new(0.0, 10.0), size);
        let alps = projector.pixel_radius(100.0, GeoPoint::new(46.0, 10.0), size);
        assert_lt!(alps, equator);

        let mut previous = 0.0;
        for km in [1.0, 10.0, 30.0, 100.0, 400.0] {
            let radius = projector.pixel_radius(km, GeoPoint::new(46.0, 10.0), size);
            assert_gt!(radius, previous);
            previous = radius;
        }
    }

    #[test]
    fn length_scale_floor_applies_near_pole() {
        let mut projector = RobinsonProjector::default();
        projector.with_length_scale_floor(0.6);
        let size = atlas_size();

        let pole = projector.pixel_radius(100.0, GeoPoint::new(90.0, 0.0), size);
        let near_pole = projector.pixel_radius(100.0, GeoPoint::new(85.0, 0.0), size);
        let above_floor = projector.pixel_radius(100.0, GeoPoint::new(80.0, 0.0), size);

        // plen(85) and plen(90) are both below 0.6
        assert_eq!(pole, near_pole);
        assert_ge!(plen(80.0), 0.6);
        assert_gt!(above_floor, pole);
        assert!(pole.is_finite());
    }

    #[test]
    fn circumference_calibration() {
        let size = atlas_size();
        let at = GeoPoint::new(46.0, 10.0);
        let default = RobinsonProjector::default().pixel_radius(50.0, at, size);

        let mut projector = RobinsonProjector::default();
        projector.with_circumference_km(DEFAULT_CIRCUMFERENCE_KM / 2.0);
        let doubled = projector.pixel_radius(50.0, at, size);

        assert!((doubled - 2.0 * default).abs() < 1e-9);
    }

    #[test]
    fn unproject_on_empty_image_falls_back_to_center() {
        let projector = RobinsonProjector::default();
        let tap = PixelPoint::new(10.0, 20.0);

        for size in [
            ImageSize::new(0.0, 0.0),
            ImageSize::new(800.0, 0.0),
            ImageSize::new(-1.0, 600.0),
            ImageSize::new(f64::NAN, 600.0),
        ] {
            assert_eq!(projector.unproject(tap, size), GeoPoint::new(0.0, 0.0));
        }
    }

    #[test]
    fn unproject_non_finite_tap() {
        let projector = RobinsonProjector::default();
        let point = projector.unproject(PixelPoint::new(f64::NAN, 5.0), atlas_size());
        assert!(point.is_valid());
        assert_eq!(point, GeoPoint::new(0.0, 0.0));
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "invalid circumference")]
    fn zero_circumference_is_rejected() {
        RobinsonProjector::default().with_circumference_km(0.0);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "invalid length scale floor")]
    fn nan_length_scale_floor_is_rejected() {
        RobinsonProjector::default().with_length_scale_floor(f64::NAN);
    }

    #[test]
    fn frame_is_kept() {
        let frame = assert_ok!(ProjectionFrame::new(0.5, 0.5, 0.45, 0.4));
        let mut projector = RobinsonProjector::new(frame);
        projector.with_circumference_km(20000.0);
        assert_eq!(projector.frame(), &frame);
        assert_eq!(RobinsonProjector::default().frame(), &ProjectionFrame::SCHOOL_ATLAS);
    }

    #[test]
    fn projector_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<RobinsonProjector>();
    }
}
