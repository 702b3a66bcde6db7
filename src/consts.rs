//! This file provides the constants used for matrix multiplication, gamma transfer and device unit
//! scaling. The two sRGB matrices are the published pair from Bruce Lindbloom's tables rather than a
//! computed inverse, so that values agree with what light bridges expect to the last digit.

use na::Matrix3;

/// Linear sRGB (D65) to CIE 1931 XYZ.
#[allow(non_snake_case)]
#[cfg_attr(rustfmt, rustfmt_skip)]
pub fn STANDARD_RGB_TO_XYZ_MAT() -> Matrix3<f64> {
    Matrix3::new(
        0.4124564, 0.3575761, 0.1804375,
        0.2126729, 0.7151522, 0.0721750,
        0.0193339, 0.1191920, 0.9503041,
    )
}

/// CIE 1931 XYZ to linear sRGB (D65).
#[allow(non_snake_case)]
#[cfg_attr(rustfmt, rustfmt_skip)]
pub fn XYZ_TO_STANDARD_RGB_MAT() -> Matrix3<f64> {
    Matrix3::new(
        3.2404542, -1.5371385, -0.4985314,
        -0.9692660, 1.8760108, 0.0415560,
        0.0556434, -0.2040259, 1.0572252,
    )
}

/// Encoded values at or below this are on the linear segment of the sRGB curve.
pub const SRGB_DECODE_THRESHOLD: f64 = 0.04045;
/// Linear values at or below this are on the linear segment of the sRGB curve.
pub const SRGB_ENCODE_THRESHOLD: f64 = 0.0031308;
/// Slope of the linear segment.
pub const SRGB_LINEAR_SLOPE: f64 = 12.92;
/// Exponent of the power segment.
pub const SRGB_GAMMA: f64 = 2.4;
/// Offset of the power segment.
pub const SRGB_OFFSET: f64 = 0.055;

/// Largest device hue value, corresponding to a full turn.
pub const HUE_UNITS: f64 = 65535.0;
/// Largest device saturation and brightness value.
pub const LEVEL_UNITS: f64 = 255.0;
/// Mired per Kelvin, and Kelvin per Mired.
pub const MIRED_SCALE: f64 = 1_000_000.0;
