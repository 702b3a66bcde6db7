//! A point in the CIE 1931 chromaticity diagram. Luminance is not part of the point: it travels
//! alongside as brightness, and is only needed when converting back to RGB.

use bound::Bound;
use colors::RGBColor;
use coord::Coord;
use error::{check_finite, ColorError};

/// A CIE 1931 chromaticity point.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct XYColor {
    /// The x chromaticity coordinate.
    pub x: f64,
    /// The y chromaticity coordinate.
    pub y: f64,
}

impl XYColor {
    /// Makes a new point, rejecting NaN and infinities. Points outside [0, 1] are allowed here: they
    /// are brought into range by gamut clipping.
    pub fn new(x: f64, y: f64) -> Result<XYColor, ColorError> {
        Ok(XYColor {
            x: check_finite("x", x)?,
            y: check_finite("y", y)?,
        })
    }

    /// Converts to RGB at the given luminance. See [`RGBColor::from_xy`].
    ///
    /// [`RGBColor::from_xy`]: ../rgbcolor/struct.RGBColor.html#method.from_xy
    pub fn to_rgb(&self, luminance: f64) -> RGBColor {
        RGBColor::from_xy(*self, luminance)
    }

    /// Returns `true` if both coordinates agree to within 1e-9.
    pub fn approx_equal(&self, other: &XYColor) -> bool {
        approx_eq!(f64, self.x, other.x, epsilon = 1e-9)
            && approx_eq!(f64, self.y, other.y, epsilon = 1e-9)
    }
}

impl From<Coord> for XYColor {
    fn from(c: Coord) -> XYColor {
        XYColor { x: c.x, y: c.y }
    }
}

impl Into<Coord> for XYColor {
    fn into(self) -> Coord {
        Coord {
            x: self.x,
            y: self.y,
        }
    }
}

impl Bound for XYColor {
    fn bounds() -> &'static [(f64, f64)] {
        static BOUNDS: [(f64, f64); 2] = [(0., 1.), (0., 1.)];
        &BOUNDS
    }
    fn components(&self) -> Vec<f64> {
        vec![self.x, self.y]
    }
    fn from_components(components: &[f64]) -> XYColor {
        XYColor {
            x: components[0],
            y: components[1],
        }
    }
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;
    use std::f64;

    #[test]
    fn test_new() {
        assert_eq!(XYColor::new(0.3, 0.3), Ok(XYColor { x: 0.3, y: 0.3 }));
        assert!(XYColor::new(f64::INFINITY, 0.3).is_err());
        // out of range is clipped later, not rejected
        assert!(XYColor::new(1.4, -0.2).is_ok());
    }

    #[test]
    fn test_coord_conversion() {
        let xy = XYColor { x: 0.25, y: 0.5 };
        let c: Coord = xy.into();
        assert_eq!(c, Coord { x: 0.25, y: 0.5 });
        assert_eq!(XYColor::from(c), xy);
    }
}
