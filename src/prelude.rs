//! This module brings the most common Chromalight functionality under a single namespace, to prevent
//! excessive imports: the color types, the [`Bound`] trait, gamut lookup, the command builder and its
//! configuration, the device traits, and the error type. The unit conversion helpers in
//! [`colors::hsbcolor`] and [`temperature`] are not included.
//!
//! [`Bound`]: ../bound/trait.Bound.html
//! [`colors::hsbcolor`]: ../colors/hsbcolor/index.html
//! [`temperature`]: ../temperature/index.html

pub use bound::Bound;
pub use colors::{HSBColor, RGBColor, XYColor};
pub use command::{Alert, ColorRequest, Effect, LightCommand, LightCommandBuilder, Payload};
pub use config::BuilderConfig;
pub use device::{send_request, CommandSink, DispatchError, ModelResolver, RecordingSink};
pub use error::ColorError;
pub use gamut::{gamut_for_model, GamutProfile, ModelClass};
pub use temperature::ColorTemperature;
