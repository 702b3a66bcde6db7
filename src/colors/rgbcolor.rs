//! This module implements device RGB: the sRGB color space with components as floats between 0 and
//! 1. Components are gamma-encoded, exactly as a color picker would hand them over; the conversion
//! to CIE chromaticity decodes them first, and the conversion back encodes them last.

use na::Vector3;

use bound::{clamp_component, Bound};
use colors::{HSBColor, XYColor};
use consts;
use consts::{STANDARD_RGB_TO_XYZ_MAT, XYZ_TO_STANDARD_RGB_MAT};
use error::{check_fraction, ColorError};
use gamut::gamut_for_model;

/// A color in device RGB, each component between 0 and 1.
///
/// # Example
/// ```
/// # use chromalight::prelude::*;
/// let orange = RGBColor::new(1.0, 0.5, 0.0).unwrap();
/// let hsb = orange.to_hsb();
/// assert!((hsb.h - 30.0).abs() <= 1e-10);
/// let xy = orange.to_xy();
/// assert!(xy.x > 0.5 && xy.y > 0.38);
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct RGBColor {
    /// The red component, between 0 and 1.
    pub r: f64,
    /// The green component, between 0 and 1.
    pub g: f64,
    /// The blue component, between 0 and 1.
    pub b: f64,
}

/// The sRGB transfer function, encoded to linear.
pub fn gamma_decode(c: f64) -> f64 {
    if c > consts::SRGB_DECODE_THRESHOLD {
        ((c + consts::SRGB_OFFSET) / (1.0 + consts::SRGB_OFFSET)).powf(consts::SRGB_GAMMA)
    } else {
        c / consts::SRGB_LINEAR_SLOPE
    }
}

/// The inverse sRGB transfer function, linear to encoded.
pub fn gamma_encode(c: f64) -> f64 {
    if c <= consts::SRGB_ENCODE_THRESHOLD {
        c * consts::SRGB_LINEAR_SLOPE
    } else {
        (1.0 + consts::SRGB_OFFSET) * c.powf(1.0 / consts::SRGB_GAMMA) - consts::SRGB_OFFSET
    }
}

/// Brings components back into [0, 1] without shifting hue: a dominant channel above 1 scales the
/// other two down by its own value and is set to 1, and negative channels become 0. The channels are
/// handled red, green, blue in turn, so a channel that is scaled by an earlier one is judged on its
/// scaled value. Ties for the largest channel above 1 have no dominant channel to scale by, so a last
/// pass clamps whatever is left outside [0, 1].
fn limit_to_unit(r: f64, g: f64, b: f64) -> (f64, f64, f64) {
    let (mut r, mut g, mut b) = (r, g, b);
    if r > b && r > g && r > 1.0 {
        g /= r;
        b /= r;
        r = 1.0;
    }
    if r < 0.0 {
        r = 0.0;
    }
    if g > b && g > r && g > 1.0 {
        r /= g;
        b /= g;
        g = 1.0;
    }
    if g < 0.0 {
        g = 0.0;
    }
    if b > r && b > g && b > 1.0 {
        r /= b;
        g /= b;
        b = 1.0;
    }
    if b < 0.0 {
        b = 0.0;
    }
    (
        clamp_component(r, 0.0, 1.0),
        clamp_component(g, 0.0, 1.0),
        clamp_component(b, 0.0, 1.0),
    )
}

impl RGBColor {
    /// Makes a new color, checking that every component is a number between 0 and 1.
    pub fn new(r: f64, g: f64, b: f64) -> Result<RGBColor, ColorError> {
        Ok(RGBColor {
            r: check_fraction("red", r)?,
            g: check_fraction("green", g)?,
            b: check_fraction("blue", b)?,
        })
    }

    /// Converts to angle, saturation and brightness using the RGB hexagon. Grays, where every channel
    /// is equal, have no hue: they get angle 0 and saturation 0.
    pub fn to_hsb(&self) -> HSBColor {
        let max_c = self.r.max(self.g).max(self.b);
        let min_c = self.r.min(self.g).min(self.b);
        if max_c == min_c {
            return HSBColor {
                h: 0.0,
                s: 0.0,
                b: max_c,
            };
        }
        let chroma = max_c - min_c;
        // which sector of the hexagon depends on the largest channel; the other two give the offset
        let sector = if self.r == max_c {
            (self.g - self.b) / chroma
        } else if self.g == max_c {
            2.0 + (self.b - self.r) / chroma
        } else {
            4.0 + (self.r - self.g) / chroma
        };
        HSBColor {
            h: HSBColor::normalize_angle(sector * 60.0),
            s: chroma / max_c,
            b: max_c,
        }
    }

    /// Converts to a CIE 1931 chromaticity point: decode the gamma, multiply by the sRGB matrix, and
    /// project. Black has no chromaticity and maps to (0, 0).
    pub fn to_xy(&self) -> XYColor {
        let linear = Vector3::new(
            gamma_decode(self.r),
            gamma_decode(self.g),
            gamma_decode(self.b),
        );
        let xyz = STANDARD_RGB_TO_XYZ_MAT() * linear;
        let sum = xyz[0] + xyz[1] + xyz[2];
        if sum == 0.0 {
            return XYColor { x: 0.0, y: 0.0 };
        }
        XYColor {
            x: xyz[0] / sum,
            y: xyz[1] / sum,
        }
    }

    /// Converts a chromaticity point at the given luminance back to RGB. Values that the matrix
    /// pushes outside [0, 1] are pulled back in proportion before gamma encoding, and again after it.
    /// A point with `y <= 0` carries no luminance and gives black.
    ///
    /// # Example
    /// ```
    /// # use chromalight::prelude::*;
    /// let gray = RGBColor{r: 0.5, g: 0.5, b: 0.5};
    /// let luminance = 0.2140; // Y of that gray
    /// let back = RGBColor::from_xy(gray.to_xy(), luminance);
    /// assert!((back.r - 0.5).abs() <= 1e-3);
    /// assert!((back.g - 0.5).abs() <= 1e-3);
    /// assert!((back.b - 0.5).abs() <= 1e-3);
    /// ```
    pub fn from_xy(xy: XYColor, luminance: f64) -> RGBColor {
        if !(xy.y > 0.0) {
            return RGBColor {
                r: 0.0,
                g: 0.0,
                b: 0.0,
            };
        }
        let z = 1.0 - xy.x - xy.y;
        let big_y = luminance;
        let big_x = (big_y / xy.y) * xy.x;
        let big_z = (big_y / xy.y) * z;
        let linear = XYZ_TO_STANDARD_RGB_MAT() * Vector3::new(big_x, big_y, big_z);

        let (r, g, b) = limit_to_unit(linear[0], linear[1], linear[2]);
        let (r, g, b) = limit_to_unit(gamma_encode(r), gamma_encode(g), gamma_encode(b));
        RGBColor { r, g, b }
    }

    /// Like [`from_xy`](RGBColor::from_xy), but the point is first clipped into the gamut of the given
    /// light model. Brightness defaults to full.
    pub fn from_xy_for_model(xy: XYColor, model_id: &str, brightness: Option<f64>) -> RGBColor {
        let clipped = gamut_for_model(model_id).clip(xy);
        RGBColor::from_xy(clipped, brightness.unwrap_or(1.0))
    }

    /// The luminance Y of this color, between 0 and 1.
    pub fn luminance(&self) -> f64 {
        let linear = Vector3::new(
            gamma_decode(self.r),
            gamma_decode(self.g),
            gamma_decode(self.b),
        );
        (STANDARD_RGB_TO_XYZ_MAT() * linear)[1]
    }

    /// Returns `true` if the two colors agree to within 1e-6 on each channel.
    pub fn approx_equal(&self, other: &RGBColor) -> bool {
        approx_eq!(f64, self.r, other.r, epsilon = 1e-6)
            && approx_eq!(f64, self.g, other.g, epsilon = 1e-6)
            && approx_eq!(f64, self.b, other.b, epsilon = 1e-6)
    }
}

impl Bound for RGBColor {
    fn bounds() -> &'static [(f64, f64)] {
        static BOUNDS: [(f64, f64); 3] = [(0., 1.), (0., 1.), (0., 1.)];
        &BOUNDS
    }
    fn components(&self) -> Vec<f64> {
        vec![self.r, self.g, self.b]
    }
    fn from_components(components: &[f64]) -> RGBColor {
        RGBColor {
            r: components[0],
            g: components[1],
            b: components[2],
        }
    }
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;
    use std::f64;

    #[test]
    fn test_rgb_hsb_primaries() {
        let red = RGBColor { r: 1., g: 0., b: 0. }.to_hsb();
        assert_eq!((red.h, red.s, red.b), (0., 1., 1.));
        let green = RGBColor { r: 0., g: 1., b: 0. }.to_hsb();
        assert!((green.h - 120.).abs() <= 1e-10);
        let blue = RGBColor { r: 0., g: 0., b: 1. }.to_hsb();
        assert!((blue.h - 240.).abs() <= 1e-10);
        // magenta-ish reds lie below zero on the red sector and have to wrap
        let rose = RGBColor { r: 1., g: 0., b: 0.5 }.to_hsb();
        assert!((rose.h - 330.).abs() <= 1e-10);
    }

    #[test]
    fn test_achromatic() {
        let black = RGBColor { r: 0., g: 0., b: 0. }.to_hsb();
        assert_eq!((black.h, black.s, black.b), (0., 0., 0.));
        let gray = RGBColor { r: 0.4, g: 0.4, b: 0.4 }.to_hsb();
        assert_eq!((gray.h, gray.s, gray.b), (0., 0., 0.4));
    }

    #[test]
    fn test_hsb_round_trip() {
        let steps = [0.0, 0.1, 0.25, 0.5, 0.8, 1.0];
        for &r in &steps {
            for &g in &steps {
                for &b in &steps {
                    let rgb = RGBColor { r, g, b };
                    let back = rgb.to_hsb().to_rgb();
                    assert!(rgb.approx_equal(&back), "{:?} came back as {:?}", rgb, back);
                }
            }
        }
    }

    #[test]
    fn test_gamma() {
        assert_eq!(gamma_decode(0.0), 0.0);
        assert!((gamma_decode(1.0) - 1.0).abs() <= 1e-12);
        assert!((gamma_decode(0.04) - 0.04 / 12.92).abs() <= 1e-12);
        for &c in &[0.001, 0.02, 0.3, 0.5, 0.9] {
            assert!((gamma_encode(gamma_decode(c)) - c).abs() <= 1e-9);
        }
    }

    #[test]
    fn test_rgb_to_xy() {
        // sRGB white is D65
        let white = RGBColor { r: 1., g: 1., b: 1. }.to_xy();
        assert!((white.x - 0.3127).abs() <= 1e-3);
        assert!((white.y - 0.3290).abs() <= 1e-3);
        let red = RGBColor { r: 1., g: 0., b: 0. }.to_xy();
        assert!((red.x - 0.64).abs() <= 1e-3);
        assert!((red.y - 0.33).abs() <= 1e-3);
        let black = RGBColor { r: 0., g: 0., b: 0. }.to_xy();
        assert_eq!(black, XYColor { x: 0., y: 0. });
    }

    #[test]
    fn test_xy_rgb_gray_round_trip() {
        let gray = RGBColor { r: 0.5, g: 0.5, b: 0.5 };
        let back = RGBColor::from_xy(gray.to_xy(), gray.luminance());
        assert!((back.r - 0.5).abs() <= 1e-3);
        assert!((back.g - 0.5).abs() <= 1e-3);
        assert!((back.b - 0.5).abs() <= 1e-3);
    }

    #[test]
    fn test_xy_to_rgb_stays_in_range() {
        // far outside sRGB: the matrix gives channels well above 1 and below 0
        let points = [(0.7, 0.29), (0.1, 0.8), (0.15, 0.02), (0.33, 0.33)];
        for &(x, y) in &points {
            for &lum in &[0.1, 1.0, 3.0] {
                let rgb = RGBColor::from_xy(XYColor { x, y }, lum);
                assert!(rgb.in_bounds(), "{:?} at {} gave {:?}", (x, y), lum, rgb);
            }
        }
    }

    #[test]
    fn test_xy_to_rgb_degenerate() {
        let rgb = RGBColor::from_xy(XYColor { x: 0.5, y: 0. }, 1.0);
        assert_eq!(rgb, RGBColor { r: 0., g: 0., b: 0. });
    }

    #[test]
    fn test_from_xy_for_model_clips_first() {
        // deep green is outside the hue bulb triangle
        let direct = RGBColor::from_xy(XYColor { x: 0.17, y: 0.7 }, 1.0);
        let clipped = RGBColor::from_xy_for_model(XYColor { x: 0.17, y: 0.7 }, "LCT001", None);
        assert!(!direct.approx_equal(&clipped));
        assert!(clipped.in_bounds());
    }

    #[test]
    fn test_new_validates() {
        assert!(RGBColor::new(0.2, 0.3, 0.4).is_ok());
        assert!(RGBColor::new(1.2, 0.3, 0.4).is_err());
        assert_eq!(
            RGBColor::new(0.2, f64::NAN, 0.4).map_err(|e| match e {
                ColorError::InvalidArgument { name, .. } => name,
                _ => "",
            }),
            Err("green")
        );
    }

    #[test]
    fn test_limit_to_unit() {
        let (r, g, b) = limit_to_unit(2.0, 1.0, 0.5);
        assert_eq!((r, g, b), (1.0, 0.5, 0.25));
        let (r, g, b) = limit_to_unit(-0.3, 0.4, 1.6);
        assert_eq!(r, 0.0);
        assert!((g - 0.25).abs() <= 1e-12);
        assert_eq!(b, 1.0);
    }

    #[test]
    fn test_limit_to_unit_with_tied_channels() {
        assert_eq!(limit_to_unit(2.0, 2.0, 0.0), (1.0, 1.0, 0.0));
        assert_eq!(limit_to_unit(0.5, 3.0, 3.0), (0.5, 1.0, 1.0));
        assert_eq!(limit_to_unit(1.5, 1.5, 1.5), (1.0, 1.0, 1.0));
    }
}
