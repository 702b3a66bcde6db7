//! This module implements hue, saturation and brightness: the polar cousin of RGB that light
//! bridges speak natively. Hue is kept as an angle in degrees, wrapped into [0, 360); the bridge's
//! own 16-bit hue units are converted at the edges by the helpers at the bottom of this file.

use bound::{clamp_component, Bound};
use colors::{RGBColor, XYColor};
use consts::HUE_UNITS;
use error::{check_finite, check_fraction, ColorError};

/// An HSB color: the same cylinder as HSV, named the way lighting systems name it.
///
/// # Example
/// Walking the hue around the circle visits the primaries every 120 degrees.
///
/// ```
/// # use chromalight::prelude::*;
/// let green = HSBColor::new(-240.0, 1.0, 1.0).unwrap();
/// assert!((green.h - 120.0).abs() <= 1e-10);
/// assert!(green.to_rgb().approx_equal(&RGBColor{r: 0., g: 1., b: 0.}));
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct HSBColor {
    /// The hue as an angle in degrees, in [0, 360).
    pub h: f64,
    /// The saturation, between 0 (gray) and 1 (pure hue).
    pub s: f64,
    /// The brightness, the largest RGB channel, between 0 and 1.
    pub b: f64,
}

impl HSBColor {
    /// Makes a new color. The angle may be any finite number and is wrapped into [0, 360); saturation
    /// and brightness have to lie in [0, 1].
    pub fn new(h: f64, s: f64, b: f64) -> Result<HSBColor, ColorError> {
        let h = check_finite("angle", h)?;
        Ok(HSBColor {
            h: HSBColor::normalize_angle(h),
            s: check_fraction("saturation", s)?,
            b: check_fraction("brightness", b)?,
        })
    }

    /// Wraps any finite angle into [0, 360). Negative angles are brought up by whole turns first, so
    /// a value that lands exactly on 360 through rounding still ends up at 0.
    ///
    /// ```
    /// # use chromalight::colors::HSBColor;
    /// assert_eq!(HSBColor::normalize_angle(-90.0), 270.0);
    /// assert_eq!(HSBColor::normalize_angle(720.0), 0.0);
    /// assert_eq!(HSBColor::normalize_angle(-1e-20), 0.0);
    /// ```
    pub fn normalize_angle(angle: f64) -> f64 {
        let mut angle = angle % 360.0;
        if angle < 0.0 {
            angle += 360.0;
        }
        angle % 360.0
    }

    /// Converts to RGB by picking one of the six sectors of the hexagon and interpolating inside it.
    pub fn to_rgb(&self) -> RGBColor {
        let bri = self.b;
        if self.s == 0.0 {
            return RGBColor {
                r: bri,
                g: bri,
                b: bri,
            };
        }
        let angle = HSBColor::normalize_angle(self.h);
        let sector = (angle / 60.0).floor();
        let fraction = angle / 60.0 - sector;
        let p = bri * (1.0 - self.s);
        let q = bri * (1.0 - self.s * fraction);
        let t = bri * (1.0 - self.s * (1.0 - fraction));
        let (r, g, b) = match (sector as u8) % 6 {
            0 => (bri, t, p),
            1 => (q, bri, p),
            2 => (p, bri, t),
            3 => (p, q, bri),
            4 => (t, p, bri),
            _ => (bri, p, q),
        };
        RGBColor { r, g, b }
    }

    /// Converts from RGB. Same as `RGBColor::to_hsb`.
    pub fn from_rgb(rgb: &RGBColor) -> HSBColor {
        rgb.to_hsb()
    }

    /// The chromaticity of this color, by way of RGB.
    pub fn to_xy(&self) -> XYColor {
        self.to_rgb().to_xy()
    }
}

impl Bound for HSBColor {
    fn bounds() -> &'static [(f64, f64)] {
        static BOUNDS: [(f64, f64); 3] = [(0., 360.), (0., 1.), (0., 1.)];
        &BOUNDS
    }
    fn components(&self) -> Vec<f64> {
        vec![self.h, self.s, self.b]
    }
    fn from_components(components: &[f64]) -> HSBColor {
        HSBColor {
            h: components[0],
            s: components[1],
            b: components[2],
        }
    }
    fn in_bounds(&self) -> bool {
        self.h >= 0.0 && self.h < 360.0 && self.s >= 0.0 && self.s <= 1.0 && self.b >= 0.0
            && self.b <= 1.0
    }
    // hue is an angle: it wraps instead of stopping at the ends
    fn clamp(&self) -> HSBColor {
        let h = if self.h.is_finite() {
            HSBColor::normalize_angle(self.h)
        } else {
            0.0
        };
        HSBColor {
            h,
            s: clamp_component(self.s, 0., 1.),
            b: clamp_component(self.b, 0., 1.),
        }
    }
}

/// Converts device hue units, 0 to 65535, to degrees.
pub fn hue_to_angle(hue: f64) -> f64 {
    360.0 * hue / HUE_UNITS
}

/// Converts device hue units to degrees, correcting for the way lights stretch the reds and squeeze
/// the yellows and greens: angles up to 180 degrees are pulled back by as much as 17% of the distance
/// to the nearest end of the band.
///
/// ```
/// # use chromalight::colors::hsbcolor::skewed_hue_to_angle;
/// assert_eq!(skewed_hue_to_angle(0.0), 0.0);
/// // 90 degrees is hit hardest
/// assert!((skewed_hue_to_angle(65535.0 / 4.0) - 74.7).abs() <= 1e-9);
/// // blues are left alone
/// assert!((skewed_hue_to_angle(65535.0 * 2.0 / 3.0) - 240.0).abs() <= 1e-9);
/// ```
pub fn skewed_hue_to_angle(hue: f64) -> f64 {
    let angle = hue_to_angle(hue);
    if angle > 0.0 && angle < 90.0 {
        angle - angle * 0.17 * (angle / 90.0)
    } else if angle >= 90.0 && angle < 180.0 {
        angle - (180.0 - angle) * 0.17 * ((180.0 - angle) / 90.0)
    } else {
        angle
    }
}

/// Converts an angle in degrees to device hue units, wrapping it into [0, 360) first.
pub fn angle_to_hue(angle: f64) -> u16 {
    let hue = (HSBColor::normalize_angle(angle) / 360.0 * HUE_UNITS).round();
    clamp_component(hue, 0.0, HUE_UNITS) as u16
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;
    use std::f64;

    #[test]
    fn test_hsb_to_rgb_sectors() {
        let cases = [
            (0.0, (1., 0., 0.)),
            (60.0, (1., 1., 0.)),
            (120.0, (0., 1., 0.)),
            (180.0, (0., 1., 1.)),
            (240.0, (0., 0., 1.)),
            (300.0, (1., 0., 1.)),
        ];
        for &(h, (r, g, b)) in &cases {
            let rgb = HSBColor { h, s: 1., b: 1. }.to_rgb();
            assert!(rgb.approx_equal(&RGBColor { r, g, b }), "{} gave {:?}", h, rgb);
        }
        let half = HSBColor { h: 30.0, s: 0.5, b: 0.8 }.to_rgb();
        assert!(half.approx_equal(&RGBColor { r: 0.8, g: 0.6, b: 0.4 }));
    }

    #[test]
    fn test_zero_saturation_is_gray() {
        let gray = HSBColor { h: 200.0, s: 0.0, b: 0.3 }.to_rgb();
        assert_eq!(gray, RGBColor { r: 0.3, g: 0.3, b: 0.3 });
    }

    #[test]
    fn test_out_of_range_angle_still_converts() {
        let wrapped = HSBColor { h: 480.0, s: 1., b: 1. }.to_rgb();
        assert!(wrapped.approx_equal(&RGBColor { r: 0., g: 1., b: 0. }));
    }

    #[test]
    fn test_new_validates() {
        assert!(HSBColor::new(f64::NAN, 0.5, 0.5).is_err());
        assert!(HSBColor::new(10.0, 1.5, 0.5).is_err());
        assert!(HSBColor::new(10.0, 0.5, -0.5).is_err());
        assert_eq!(
            HSBColor::new(-30.0, 0.5, 0.5).unwrap(),
            HSBColor { h: 330.0, s: 0.5, b: 0.5 }
        );
    }

    #[test]
    fn test_hue_units() {
        assert_eq!(angle_to_hue(0.0), 0);
        assert_eq!(angle_to_hue(180.0), 32768);
        assert_eq!(angle_to_hue(-180.0), 32768);
        assert_eq!(angle_to_hue(359.9999), 65535);
        assert_eq!(angle_to_hue(360.0), 0);
        assert!((hue_to_angle(65535.0) - 360.0).abs() <= 1e-12);
        assert!((hue_to_angle(f64::from(angle_to_hue(123.0))) - 123.0).abs() <= 0.01);
    }

    #[test]
    fn test_skew_is_continuous_at_the_band_edges() {
        let just_below = skewed_hue_to_angle(65535.0 / 4.0 - 1e-6);
        let just_above = skewed_hue_to_angle(65535.0 / 4.0 + 1e-6);
        assert!((just_below - just_above).abs() <= 1e-3);
        assert!((skewed_hue_to_angle(65535.0 / 2.0) - 180.0).abs() <= 1e-9);
    }
}
