//! This module builds the state change sent to a light. A [`LightCommandBuilder`] collects the
//! fields a caller asks for, each converted to the light's own units and checked before it is stored,
//! and [`build`](LightCommandBuilder::build) hands out an independent [`LightCommand`] that renders
//! only the fields that were actually set.
//!
//! There are two ways to set a color, and they are deliberately treated differently:
//!
//! - In device units, with `set_hsb`, `set_hue`, `set_saturation` and `set_brightness`. The values
//!   are rounded and clamped to the unit range, and passed through otherwise untouched: there is no
//!   gamut correction.
//! - As a color, with `set_hue_ang_sat_bri`, `set_rgb`, `set_gamut_hsb`, `set_xy`, and `set_ct` on
//!   lights without a white channel. These know which light they are for, so the chromaticity sent
//!   along is clipped into that light's gamut first.

use serde_json::{self, Map, Value};

use bound::{clamp_component, Bound};
use colors::hsbcolor::{angle_to_hue, hue_to_angle, skewed_hue_to_angle};
use colors::{HSBColor, RGBColor, XYColor};
use config::BuilderConfig;
use consts::{HUE_UNITS, LEVEL_UNITS};
use error::{check_finite, check_positive, ColorError};
use gamut::{gamut_for_model, GamutProfile};
use temperature::{kelvin_to_mired, kelvin_to_rgb_approx, mired_to_kelvin};

/// A flat set of fields, ready to be encoded for whatever transport delivers it.
pub type Payload = Map<String, Value>;

/// A short flash to identify a light.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Alert {
    /// Stop any running alert.
    #[serde(rename = "none")]
    None,
    /// Flash once.
    #[serde(rename = "select")]
    Select,
    /// Flash for about fifteen seconds.
    #[serde(rename = "lselect")]
    LongSelect,
}

/// A dynamic effect run by the light itself.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Effect {
    /// Stop any running effect.
    #[serde(rename = "none")]
    None,
    /// Cycle through all hues at the current brightness and saturation.
    #[serde(rename = "colorloop")]
    ColorLoop,
}

/// A finished state change for one light. Fields that were never set stay unset, and are left out
/// when the command is rendered, so the light keeps its current value or uses its own default.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LightCommand {
    #[serde(skip_serializing_if = "Option::is_none")]
    on: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    bri: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    hue: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    sat: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    ct: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    xy: Option<[f64; 2]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    alert: Option<Alert>,
    #[serde(skip_serializing_if = "Option::is_none")]
    effect: Option<Effect>,
    #[serde(skip_serializing_if = "Option::is_none")]
    transitiontime: Option<u16>,
}

impl LightCommand {
    /// Whether the light is switched on or off.
    pub fn on(&self) -> Option<bool> {
        self.on
    }
    /// Brightness, 0 to 255.
    pub fn brightness(&self) -> Option<u8> {
        self.bri
    }
    /// Hue, 0 to 65535 for a full turn.
    pub fn hue(&self) -> Option<u16> {
        self.hue
    }
    /// Saturation, 0 to 255.
    pub fn saturation(&self) -> Option<u8> {
        self.sat
    }
    /// Color temperature in mired.
    pub fn color_temperature(&self) -> Option<u16> {
        self.ct
    }
    /// The chromaticity, always inside the gamut of the light the command was built for.
    pub fn xy(&self) -> Option<XYColor> {
        self.xy.map(|xy| XYColor { x: xy[0], y: xy[1] })
    }
    /// The alert to run.
    pub fn alert(&self) -> Option<Alert> {
        self.alert
    }
    /// The effect to run.
    pub fn effect(&self) -> Option<Effect> {
        self.effect
    }
    /// Transition time in tenths of a second.
    pub fn transition_time(&self) -> Option<u16> {
        self.transitiontime
    }

    /// Returns `true` if no field was set.
    pub fn is_empty(&self) -> bool {
        *self == LightCommand::default()
    }

    /// Renders the fields that were set, under the names lights use: `on`, `bri`, `hue`, `sat`,
    /// `ct`, `xy`, `alert`, `effect` and `transitiontime`.
    pub fn to_payload(&self) -> Payload {
        match serde_json::to_value(self) {
            Ok(Value::Object(fields)) => fields,
            // a struct of optional plain values always renders as an object
            _ => Map::new(),
        }
    }

    /// The payload as a JSON string.
    pub fn to_json(&self) -> String {
        Value::Object(self.to_payload()).to_string()
    }
}

/// A color asked for in any of the supported representations.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub enum ColorRequest {
    /// Device RGB, each component in [0, 1].
    Rgb(RGBColor),
    /// Hue angle in degrees with saturation and brightness in [0, 1].
    Hsb(HSBColor),
    /// A CIE 1931 chromaticity point.
    Xy(XYColor),
    /// A color temperature in Kelvin.
    Kelvin(f64),
    /// A color temperature in mired.
    Mired(f64),
}

/// Rounds to the nearest whole unit, halves away from zero, and clamps into `min..=max`.
fn to_units(name: &'static str, value: f64, min: f64, max: f64) -> Result<f64, ColorError> {
    let rounded = check_finite(name, value)?.round();
    let clamped = clamp_component(rounded, min, max);
    if clamped != rounded {
        warn!("{} of {} is out of range, sending {}", name, value, clamped);
    }
    Ok(clamped)
}

/// Scales a fraction in [0, 1] to a 0-255 level.
fn fraction_to_level(fraction: f64) -> u8 {
    clamp_component((fraction * LEVEL_UNITS).round(), 0.0, LEVEL_UNITS) as u8
}

/// Collects the fields of a [`LightCommand`] for one light model.
///
/// Every setter either stores its field completely or returns an error and leaves the builder as it
/// was.
///
/// # Example
/// ```
/// # use chromalight::prelude::*;
/// # fn main() -> Result<(), ColorError> {
/// let mut builder = LightCommandBuilder::for_model("LCT001");
/// builder.on().set_rgb(1.0, 0.5, 0.0)?.set_transition_time(Some(10));
/// let command = builder.build();
/// assert_eq!(command.brightness(), Some(255));
/// assert_eq!(command.transition_time(), Some(10));
/// let payload = command.to_payload();
/// assert!(payload.contains_key("xy"));
/// assert!(!payload.contains_key("ct"));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct LightCommandBuilder {
    model_id: String,
    gamut: &'static GamutProfile,
    config: BuilderConfig,
    command: LightCommand,
}

impl LightCommandBuilder {
    /// Starts an empty command for a light of the given model, with the default configuration.
    pub fn for_model(model_id: &str) -> LightCommandBuilder {
        LightCommandBuilder::with_config(model_id, &BuilderConfig::default())
    }

    /// Starts an empty command for a light of the given model.
    pub fn with_config(model_id: &str, config: &BuilderConfig) -> LightCommandBuilder {
        LightCommandBuilder {
            model_id: model_id.to_string(),
            gamut: gamut_for_model(model_id),
            config: config.clone(),
            command: LightCommand::default(),
        }
    }

    /// The model this command is being built for.
    pub fn model_id(&self) -> &str {
        &self.model_id
    }

    /// The gamut colors are clipped into.
    pub fn gamut(&self) -> &'static GamutProfile {
        self.gamut
    }

    /// Switches the light on.
    pub fn on(&mut self) -> &mut LightCommandBuilder {
        self.set_on(true)
    }

    /// Switches the light off.
    pub fn off(&mut self) -> &mut LightCommandBuilder {
        self.set_on(false)
    }

    /// Switches the light on or off.
    pub fn set_on(&mut self, on: bool) -> &mut LightCommandBuilder {
        self.command.on = Some(on);
        self
    }

    /// Sets hue (0-65535), saturation (0-255) and brightness (0-255) in device units.
    pub fn set_hsb(
        &mut self,
        hue: f64,
        saturation: f64,
        brightness: f64,
    ) -> Result<&mut LightCommandBuilder, ColorError> {
        let hue = to_units("hue", hue, 0.0, HUE_UNITS)?;
        let sat = to_units("saturation", saturation, 0.0, LEVEL_UNITS)?;
        let bri = to_units("brightness", brightness, 0.0, LEVEL_UNITS)?;
        self.command.hue = Some(hue as u16);
        self.command.sat = Some(sat as u8);
        self.command.bri = Some(bri as u8);
        Ok(self)
    }

    /// Sets the hue in device units, 0 to 65535.
    pub fn set_hue(&mut self, hue: f64) -> Result<&mut LightCommandBuilder, ColorError> {
        self.command.hue = Some(to_units("hue", hue, 0.0, HUE_UNITS)? as u16);
        Ok(self)
    }

    /// Sets the saturation in device units, 0 to 255.
    pub fn set_saturation(&mut self, saturation: f64) -> Result<&mut LightCommandBuilder, ColorError> {
        self.command.sat = Some(to_units("saturation", saturation, 0.0, LEVEL_UNITS)? as u8);
        Ok(self)
    }

    /// Sets the brightness in device units, 0 to 255.
    pub fn set_brightness(&mut self, brightness: f64) -> Result<&mut LightCommandBuilder, ColorError> {
        self.command.bri = Some(to_units("brightness", brightness, 0.0, LEVEL_UNITS)? as u8);
        Ok(self)
    }

    /// Sets a color by hue angle in degrees, which may be any finite number, and saturation and
    /// brightness as fractions. Besides hue, saturation and brightness in device units, the
    /// gamut-clipped chromaticity of the color is sent along.
    pub fn set_hue_ang_sat_bri(
        &mut self,
        angle: f64,
        saturation: f64,
        brightness: f64,
    ) -> Result<&mut LightCommandBuilder, ColorError> {
        let hsb = HSBColor::new(angle, saturation, brightness)?;
        let xy = hsb.to_xy();
        self.store_color(&hsb, xy);
        Ok(self)
    }

    /// Sets a color in device RGB. Like [`set_hue_ang_sat_bri`], the color goes out both as hue,
    /// saturation and brightness and as a gamut-clipped chromaticity.
    ///
    /// [`set_hue_ang_sat_bri`]: #method.set_hue_ang_sat_bri
    pub fn set_rgb(&mut self, r: f64, g: f64, b: f64) -> Result<&mut LightCommandBuilder, ColorError> {
        let rgb = RGBColor::new(r, g, b)?;
        let hsb = rgb.to_hsb();
        self.store_color(&hsb, rgb.to_xy());
        Ok(self)
    }

    /// Sets a color given in device hue, saturation and brightness units, but sends it as brightness
    /// and a gamut-clipped chromaticity. Lights reproduce chromaticities more faithfully than hues.
    pub fn set_gamut_hsb(
        &mut self,
        hue: f64,
        saturation: f64,
        brightness: f64,
    ) -> Result<&mut LightCommandBuilder, ColorError> {
        let hue = to_units("hue", hue, 0.0, HUE_UNITS)?;
        let sat = to_units("saturation", saturation, 0.0, LEVEL_UNITS)?;
        let bri = to_units("brightness", brightness, 0.0, LEVEL_UNITS)?;
        let angle = if self.config.hue_skew_correction {
            skewed_hue_to_angle(hue)
        } else {
            hue_to_angle(hue)
        };
        let hsb = HSBColor {
            h: HSBColor::normalize_angle(angle),
            s: sat / LEVEL_UNITS,
            b: bri / LEVEL_UNITS,
        };
        let xy = self.gamut_xy(hsb.to_xy());
        self.command.bri = Some(bri as u8);
        self.command.xy = Some(xy);
        Ok(self)
    }

    /// Sets a color temperature in mired. Lights without a white channel get the chromaticity of the
    /// temperature instead, clipped into their gamut.
    pub fn set_ct(&mut self, mired: f64) -> Result<&mut LightCommandBuilder, ColorError> {
        let mired = check_positive("mired", mired)?;
        if self.config.is_rgb_only(&self.model_id) {
            let rgb = kelvin_to_rgb_approx(mired_to_kelvin(mired)?)?;
            let xy = self.gamut_xy(rgb.to_xy());
            debug!(
                "{} has no white channel, sending {} mired as ({}, {})",
                self.model_id, mired, xy[0], xy[1]
            );
            self.command.xy = Some(xy);
        } else {
            self.command.ct = Some(to_units("mired", mired, 1.0, f64::from(u16::max_value()))? as u16);
        }
        Ok(self)
    }

    /// Sets a color temperature in Kelvin. See [`set_ct`](#method.set_ct).
    pub fn set_color_temperature(&mut self, kelvin: f64) -> Result<&mut LightCommandBuilder, ColorError> {
        let mired = kelvin_to_mired(kelvin)?;
        self.set_ct(mired)
    }

    /// Sets a chromaticity, clipped into the light's gamut.
    pub fn set_xy(&mut self, x: f64, y: f64) -> Result<&mut LightCommandBuilder, ColorError> {
        let xy = self.gamut_xy(XYColor::new(x, y)?);
        self.command.xy = Some(xy);
        Ok(self)
    }

    /// Sets the alert.
    pub fn set_alert(&mut self, alert: Alert) -> &mut LightCommandBuilder {
        self.command.alert = Some(alert);
        self
    }

    /// Flashes the light once.
    pub fn alert_select(&mut self) -> &mut LightCommandBuilder {
        self.set_alert(Alert::Select)
    }

    /// Flashes the light for a while.
    pub fn alert_long_select(&mut self) -> &mut LightCommandBuilder {
        self.set_alert(Alert::LongSelect)
    }

    /// Stops flashing.
    pub fn alert_none(&mut self) -> &mut LightCommandBuilder {
        self.set_alert(Alert::None)
    }

    /// Sets the effect.
    pub fn set_effect(&mut self, effect: Effect) -> &mut LightCommandBuilder {
        self.command.effect = Some(effect);
        self
    }

    /// Starts cycling through hues.
    pub fn effect_colorloop(&mut self) -> &mut LightCommandBuilder {
        self.set_effect(Effect::ColorLoop)
    }

    /// Stops any effect.
    pub fn effect_none(&mut self) -> &mut LightCommandBuilder {
        self.set_effect(Effect::None)
    }

    /// Sets the transition time in tenths of a second. `None` leaves it unset, and the light uses its
    /// own default.
    pub fn set_transition_time(&mut self, deciseconds: Option<u16>) -> &mut LightCommandBuilder {
        if deciseconds.is_some() {
            self.command.transitiontime = deciseconds;
        }
        self
    }

    /// Sets a color given in any representation.
    pub fn apply(&mut self, request: &ColorRequest) -> Result<&mut LightCommandBuilder, ColorError> {
        match *request {
            ColorRequest::Rgb(rgb) => self.set_rgb(rgb.r, rgb.g, rgb.b),
            ColorRequest::Hsb(hsb) => self.set_hue_ang_sat_bri(hsb.h, hsb.s, hsb.b),
            ColorRequest::Xy(xy) => self.set_xy(xy.x, xy.y),
            ColorRequest::Kelvin(kelvin) => self.set_color_temperature(kelvin),
            ColorRequest::Mired(mired) => self.set_ct(mired),
        }
    }

    /// Returns the command so far. The builder can keep going; commands already built do not change.
    pub fn build(&self) -> LightCommand {
        let command = self.command.clone();
        trace!("built {} for {}", command.to_json(), self.model_id);
        command
    }

    fn store_color(&mut self, hsb: &HSBColor, xy: XYColor) {
        let xy = self.gamut_xy(xy);
        self.command.hue = Some(angle_to_hue(hsb.h));
        self.command.sat = Some(fraction_to_level(hsb.s));
        self.command.bri = Some(fraction_to_level(hsb.b));
        self.command.xy = Some(xy);
    }

    /// Clips into the gamut and clamps into [0, 1] for emission.
    fn gamut_xy(&self, xy: XYColor) -> [f64; 2] {
        let clipped = self.gamut.clip(xy);
        let emitted = clipped.clamp();
        if emitted != clipped {
            warn!("({}, {}) is outside [0, 1] after clipping", clipped.x, clipped.y);
        }
        [emitted.x, emitted.y]
    }
}
