//! Chromalight turns the colors people ask for into the state changes networked color lights
//! understand. A light does not take RGB: it takes hue, saturation and brightness in its own units, a
//! CIE 1931 chromaticity, or a color temperature in mired, and it can only show the chromaticities
//! inside the triangle spanned by its LEDs. This crate does the color math between those forms,
//! clips chromaticities into the gamut of each light model, and assembles the result into a command
//! that carries only the fields that were set.
//!
//! The pieces, bottom up:
//!
//! - [`colors`]: device RGB, HSB and xy, and the conversions between them.
//! - [`temperature`]: Kelvin, mired, and the approximate color of a blackbody.
//! - [`gamut`]: per-model gamut triangles and clipping into them.
//! - [`command`]: the command builder.
//! - [`device`]: traits for finding a light's model and sending it a payload.
//!
//! [`colors`]: colors/index.html
//! [`temperature`]: temperature/index.html
//! [`gamut`]: gamut/index.html
//! [`command`]: command/index.html
//! [`device`]: device/index.html

#![doc(html_root_url = "https://docs.rs/chromalight/0.3.0")]
// we don't mess around with documentation
#![deny(missing_docs)]
// Clippy doesn't like long decimals, but adding separators in decimals isn't any more readable
// compare -0.96924 with -0.96_924
#![allow(clippy::unreadable_literal)]

#[macro_use]
extern crate float_cmp;
#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate log;
#[macro_use]
extern crate maplit;
extern crate nalgebra as na;
extern crate num;
extern crate serde;
#[macro_use]
extern crate serde_derive;
#[cfg_attr(test, macro_use)]
extern crate serde_json;

pub mod bound;
pub mod colors;
pub mod command;
pub mod config;
mod consts;
pub mod coord;
pub mod device;
pub mod error;
pub mod gamut;
pub mod prelude;
pub mod temperature;

#[cfg(test)]
mod tests {
    use prelude::*;

    #[test]
    fn test_primaries_for_a_bulb() {
        let bulb = gamut_for_model("LCT001");
        let mut builder = LightCommandBuilder::for_model("LCT001");
        builder.on().set_rgb(1.0, 0.0, 0.0).unwrap();
        let red = builder.build();
        assert_eq!(red.on(), Some(true));
        assert_eq!(red.hue(), Some(0));
        assert_eq!(red.brightness(), Some(255));
        // sRGB red is one the bulb can show, so it goes out as is
        let srgb_red = RGBColor { r: 1., g: 0., b: 0. }.to_xy();
        assert!(bulb.contains(srgb_red));
        assert!(red.xy().unwrap().approx_equal(&srgb_red));

        // sRGB green at (0.3, 0.6) is past the bulb's green primary
        builder.set_rgb(0.0, 1.0, 0.0).unwrap();
        let green = builder.build();
        assert_eq!(green.hue(), Some(21845));
        let srgb_green = RGBColor { r: 0., g: 1., b: 0. }.to_xy();
        assert!(!bulb.contains(srgb_green));
        assert_eq!(green.xy(), Some(bulb.green));
    }

    #[test]
    fn test_same_request_differs_by_model() {
        let request = ColorRequest::Xy(XYColor { x: 0.15, y: 0.75 });
        let mut bulb = LightCommandBuilder::for_model("LCT001");
        let mut strip = LightCommandBuilder::for_model("LST001");
        let mut other = LightCommandBuilder::for_model("XYZ001");
        let bulb_xy = bulb.apply(&request).unwrap().build().xy().unwrap();
        let strip_xy = strip.apply(&request).unwrap().build().xy().unwrap();
        let other_xy = other.apply(&request).unwrap().build().xy().unwrap();
        assert_eq!(bulb_xy, gamut_for_model("LCT001").green);
        assert!(gamut_for_model("LST001").contains(strip_xy));
        assert_ne!(bulb_xy, strip_xy);
        // the full triangle takes it as is
        assert_eq!(other_xy, XYColor { x: 0.15, y: 0.75 });
    }

    #[test]
    fn test_xy_back_to_rgb_for_a_model() {
        let rgb = RGBColor::from_xy_for_model(XYColor { x: 0.9, y: 0.9 }, "LCT001", None);
        assert!(rgb.in_bounds());
        assert!(rgb.r > rgb.b && rgb.g > rgb.b);
    }

    #[test]
    fn test_errors_display() {
        let err = LightCommandBuilder::for_model("LCT001")
            .set_color_temperature(-5.0)
            .err()
            .unwrap();
        assert_eq!(err.to_string(), "invalid argument kelvin: -5");
    }
}
