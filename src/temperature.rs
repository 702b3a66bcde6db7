//! This module handles white light given as a color temperature. Lights take it in mired, the
//! reciprocal of Kelvin scaled by a million, because equal steps in mired look like equal steps to the
//! eye. Kelvin is accepted as a convenience and converted straight away.
//!
//! Lights without a white channel cannot take a temperature at all. For those, the temperature is
//! turned into an RGB color with Tanner Helland's curve fit to blackbody radiation, and that color is
//! sent as a chromaticity instead. The fit is an approximation, good to a few percent over 1000 K to
//! 40000 K, and is not meant to be colorimetrically exact.

use colors::{RGBColor, XYColor};
use consts::MIRED_SCALE;
use error::{check_positive, ColorError};

/// `MIRED_SCALE / value`, rejecting values whose reciprocal overflows.
fn scaled_reciprocal(name: &'static str, value: f64) -> Result<f64, ColorError> {
    let scaled = MIRED_SCALE / check_positive(name, value)?;
    if scaled.is_finite() {
        Ok(scaled)
    } else {
        Err(ColorError::InvalidArgument { name, value })
    }
}

/// Converts Kelvin to mired. Kelvin has to be positive, and large enough that the result is finite.
///
/// # Example
/// ```
/// # use chromalight::temperature::{kelvin_to_mired, mired_to_kelvin};
/// assert_eq!(kelvin_to_mired(2700.0).unwrap().round(), 370.0);
/// assert_eq!(mired_to_kelvin(370.0).unwrap().round(), 2703.0);
/// assert!(kelvin_to_mired(0.0).is_err());
/// assert!(kelvin_to_mired(5e-324).is_err());
/// ```
pub fn kelvin_to_mired(kelvin: f64) -> Result<f64, ColorError> {
    scaled_reciprocal("kelvin", kelvin)
}

/// Converts mired to Kelvin. Same rules as [`kelvin_to_mired`].
///
/// [`kelvin_to_mired`]: fn.kelvin_to_mired.html
pub fn mired_to_kelvin(mired: f64) -> Result<f64, ColorError> {
    scaled_reciprocal("mired", mired)
}

/// Approximates the color of a blackbody at the given temperature as device RGB. Each channel is fit
/// separately on either side of 6600 K, and blue drops to nothing below 1900 K.
pub fn kelvin_to_rgb_approx(kelvin: f64) -> Result<RGBColor, ColorError> {
    let temp = check_positive("kelvin", kelvin)? / 100.0;
    // the fits work in 0-255 and are clamped there before scaling down
    let clamp = |c: f64| {
        if c < 0.0 {
            0.0
        } else if c > 255.0 {
            255.0
        } else {
            c
        }
    };

    let red = if temp <= 66.0 {
        255.0
    } else {
        clamp(329.698727466 * (temp - 60.0).powf(-0.1332047592))
    };
    let green = if temp <= 66.0 {
        clamp(99.4708025861 * temp.ln() - 161.1195681661)
    } else {
        clamp(288.1221695283 * (temp - 60.0).powf(-0.0755148492))
    };
    let blue = if temp >= 66.0 {
        255.0
    } else if temp <= 19.0 {
        0.0
    } else {
        clamp(138.5177312231 * (temp - 10.0).ln() - 305.0447927307)
    };

    Ok(RGBColor {
        r: red / 255.0,
        g: green / 255.0,
        b: blue / 255.0,
    })
}

/// A color temperature. Stored as mired, which is what lights consume. Both mired and Kelvin are
/// finite and positive.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorTemperature {
    mired: f64,
}

impl ColorTemperature {
    /// A temperature given in Kelvin.
    pub fn from_kelvin(kelvin: f64) -> Result<ColorTemperature, ColorError> {
        Ok(ColorTemperature {
            mired: kelvin_to_mired(kelvin)?,
        })
    }

    /// A temperature given in mired.
    pub fn from_mired(mired: f64) -> Result<ColorTemperature, ColorError> {
        mired_to_kelvin(mired)?;
        Ok(ColorTemperature { mired })
    }

    /// The temperature in mired.
    pub fn mired(&self) -> f64 {
        self.mired
    }

    /// The temperature in Kelvin.
    pub fn kelvin(&self) -> f64 {
        MIRED_SCALE / self.mired
    }

    /// The approximate RGB color of this temperature.
    pub fn to_rgb_approx(&self) -> Result<RGBColor, ColorError> {
        kelvin_to_rgb_approx(self.kelvin())
    }

    /// The chromaticity of the approximate RGB color of this temperature.
    pub fn to_xy(&self) -> Result<XYColor, ColorError> {
        Ok(self.to_rgb_approx()?.to_xy())
    }
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;
    use std::f64;

    #[test]
    fn test_mired_kelvin_inverse() {
        for &k in &[1.0, 153.0, 1000.0, 2000.0, 2700.0, 6500.0, 40000.0, 123456.7] {
            let back = mired_to_kelvin(kelvin_to_mired(k).unwrap()).unwrap();
            assert!(approx_eq!(f64, back, k, epsilon = 1e-9 * k), "{} came back as {}", k, back);
        }
    }

    #[test]
    fn test_invalid_temperatures() {
        assert!(kelvin_to_mired(-2700.0).is_err());
        assert!(kelvin_to_mired(f64::NAN).is_err());
        assert!(mired_to_kelvin(0.0).is_err());
        assert!(kelvin_to_rgb_approx(0.0).is_err());
        assert!(ColorTemperature::from_mired(-1.0).is_err());
        assert!(ColorTemperature::from_kelvin(f64::INFINITY).is_err());
    }

    #[test]
    fn test_reciprocal_overflow_is_rejected() {
        // the smallest subnormal is positive, but a million over it is not finite
        let tiny = 5e-324;
        assert_eq!(
            ColorTemperature::from_mired(tiny),
            Err(ColorError::InvalidArgument { name: "mired", value: tiny })
        );
        assert!(ColorTemperature::from_kelvin(tiny).is_err());
        assert!(mired_to_kelvin(tiny).is_err());
        let ct = ColorTemperature::from_mired(1e-300).unwrap();
        assert!(ct.kelvin().is_finite());
        assert!(ct.to_rgb_approx().is_ok());
    }

    #[test]
    fn test_warm_and_cool_rgb() {
        let candle = kelvin_to_rgb_approx(1500.0).unwrap();
        assert_eq!(candle.r, 1.0);
        assert_eq!(candle.b, 0.0);
        assert!(candle.g > 0.3 && candle.g < 0.5);

        let incandescent = kelvin_to_rgb_approx(2700.0).unwrap();
        assert_eq!(incandescent.r, 1.0);
        assert!(incandescent.g > incandescent.b);
        assert!(incandescent.b > 0.0);

        let sky = kelvin_to_rgb_approx(10000.0).unwrap();
        assert_eq!(sky.b, 1.0);
        assert!(sky.r < 1.0 && sky.g < 1.0);
    }

    #[test]
    fn test_rgb_is_always_in_range() {
        let mut kelvin = 1000.0;
        while kelvin <= 40000.0 {
            let rgb = kelvin_to_rgb_approx(kelvin).unwrap();
            for &c in &[rgb.r, rgb.g, rgb.b] {
                assert!(c >= 0.0 && c <= 1.0, "{} K gave {:?}", kelvin, rgb);
            }
            kelvin += 250.0;
        }
    }

    #[test]
    fn test_temperature_struct() {
        let ct = ColorTemperature::from_kelvin(2500.0).unwrap();
        assert_eq!(ct.mired(), 400.0);
        assert!((ct.kelvin() - 2500.0).abs() <= 1e-9);
        assert_eq!(ct, ColorTemperature::from_mired(400.0).unwrap());
        // warm white sits to the red side of the white point
        let xy = ct.to_xy().unwrap();
        assert!(xy.x > 0.4 && xy.y > 0.38);
    }
}
