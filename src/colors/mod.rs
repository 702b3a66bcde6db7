//! This module contains the color representations a light can be asked for: device RGB, hue,
//! saturation and brightness, and CIE chromaticity. For convenience, each main type is imported into
//! this module's namespace directly.
pub mod hsbcolor;
pub mod rgbcolor;
pub mod xycolor;

// for convenience, use this namespace for the color objects
pub use self::hsbcolor::HSBColor;
pub use self::rgbcolor::RGBColor;
pub use self::xycolor::XYColor;
