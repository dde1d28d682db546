use crate::error::{Error, Result};

/// Aspect ratio (width / height) of the school atlas map image (2561x1809 px)
pub const SCHOOL_ATLAS_ASPECT_RATIO: f64 = 2561.0 / 1809.0;

/// Placement of the projected world ellipse inside a map image
///
/// All values are fractions of the image size, so the same frame works for
/// any rendered resolution of the same asset. The values are calibrated per
/// image and not derived from anything.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectionFrame {
    /// Ellipse centre, fraction of image width
    pub center_x: f64,
    /// Ellipse centre, fraction of image height
    pub center_y: f64,
    /// Half of the ellipse width, fraction of image width
    pub half_width: f64,
    /// Half of the ellipse height, fraction of image height
    pub half_height: f64,
}

impl ProjectionFrame {
    /// Frame measured from the grid lines of the blank school atlas image
    pub const SCHOOL_ATLAS: ProjectionFrame = ProjectionFrame {
        center_x: 0.500,
        center_y: 0.508,
        half_width: 0.486,
        half_height: 0.413,
    };

    /// Create a frame for a different map asset
    ///
    /// # Errors
    ///
    /// `InvalidFrame` if any value is non-finite or a half-extent is not
    /// positive.
    pub fn new(center_x: f64, center_y: f64, half_width: f64, half_height: f64) -> Result<Self> {
        let values = [center_x, center_y, half_width, half_height];
        if values.iter().any(|v| !v.is_finite()) {
            return Err(Error::InvalidFrame {
                reason: "values must be finite".to_string(),
            });
        }
        if half_width <= 0.0 || half_height <= 0.0 {
            return Err(Error::InvalidFrame {
                reason: format!("half extents must be positive (got {half_width} x {half_height})"),
            });
        }

        Ok(Self {
            center_x,
            center_y,
            half_width,
            half_height,
        })
    }
}

impl Default for ProjectionFrame {
    fn default() -> Self {
        Self::SCHOOL_ATLAS
    }
}
