//! This module describes which chromaticities a light can actually produce. Every light model has
//! three LED primaries, and the colors it can mix lie inside the triangle they span in the xy
//! plane. Asking for a point outside that triangle gets the nearest point on its edge instead.
//!
//! The profiles are a fixed table keyed by model class. Model identifiers are matched on their
//! three-letter family prefix; anything unrecognized gets the full (1, 0), (0, 1), (0, 0) triangle,
//! which leaves every sensible point alone.

use std::collections::HashMap;

use colors::XYColor;
use coord::Coord;

/// A family of light models sharing one gamut.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ModelClass {
    /// The original hue bulbs, model identifiers starting with `LCT`.
    HueBulb,
    /// LivingColors Bloom, Aura and Iris (`LLC`) and LightStrips (`LST`).
    LivingColors,
    /// Anything else.
    Unknown,
}

/// Model identifier prefixes and the class each one selects.
pub static MODEL_PREFIXES: [(&'static str, ModelClass); 3] = [
    ("LCT", ModelClass::HueBulb),
    ("LLC", ModelClass::LivingColors),
    ("LST", ModelClass::LivingColors),
];

/// The triangle of chromaticities a light can reproduce, given by its three primaries.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct GamutProfile {
    /// The red primary.
    pub red: XYColor,
    /// The green primary.
    pub green: XYColor,
    /// The blue primary.
    pub blue: XYColor,
}

lazy_static! {
    static ref GAMUT_PROFILES: HashMap<ModelClass, GamutProfile> = hashmap! {
        ModelClass::HueBulb => GamutProfile {
            red: XYColor { x: 0.674, y: 0.322 },
            green: XYColor { x: 0.408, y: 0.517 },
            blue: XYColor { x: 0.168, y: 0.041 },
        },
        ModelClass::LivingColors => GamutProfile {
            red: XYColor { x: 0.703, y: 0.296 },
            green: XYColor { x: 0.214, y: 0.709 },
            blue: XYColor { x: 0.139, y: 0.081 },
        },
        ModelClass::Unknown => GamutProfile {
            red: XYColor { x: 1.0, y: 0.0 },
            green: XYColor { x: 0.0, y: 1.0 },
            blue: XYColor { x: 0.0, y: 0.0 },
        },
    };
}

impl ModelClass {
    /// Classifies a model identifier such as `LCT001` by its prefix.
    pub fn from_model_id(model_id: &str) -> ModelClass {
        MODEL_PREFIXES
            .iter()
            .find(|&&(prefix, _)| model_id.starts_with(prefix))
            .map(|&(_, class)| class)
            .unwrap_or(ModelClass::Unknown)
    }

    /// The gamut shared by this class of lights.
    pub fn gamut(&self) -> &'static GamutProfile {
        match GAMUT_PROFILES.get(self) {
            Some(profile) => profile,
            None => &GAMUT_PROFILES[&ModelClass::Unknown],
        }
    }
}

/// Looks up the gamut for a model identifier. Unknown models get the full triangle.
///
/// # Example
/// ```
/// # use chromalight::prelude::*;
/// let bulb = gamut_for_model("LCT001");
/// assert_eq!(bulb.red, XYColor{x: 0.674, y: 0.322});
/// let anything = gamut_for_model("XYZ123");
/// assert_eq!(anything.green, XYColor{x: 0.0, y: 1.0});
/// ```
pub fn gamut_for_model(model_id: &str) -> &'static GamutProfile {
    let class = ModelClass::from_model_id(model_id);
    if class == ModelClass::Unknown {
        debug!("no gamut for model {:?}, using the full triangle", model_id);
    } else {
        trace!("model {:?} is {:?}", model_id, class);
    }
    class.gamut()
}

/// Clips a point into a gamut. Same as [`GamutProfile::clip`].
///
/// [`GamutProfile::clip`]: struct.GamutProfile.html#method.clip
pub fn clip_to_gamut(point: XYColor, profile: &GamutProfile) -> XYColor {
    profile.clip(point)
}

/// How far outside an edge, in units of `Edge::side`, a point may lie and still count as on it.
/// Projecting onto an edge leaves rounding residue of around 1e-18 on either side.
const BOUNDARY_TOLERANCE: f64 = 1e-12;

/// One directed edge of the triangle, with the sign the opposite vertex has relative to it.
struct Edge {
    start: Coord,
    end: Coord,
    opposite_sign: f64,
}

impl Edge {
    fn new(start: XYColor, end: XYColor, opposite: XYColor) -> Edge {
        let start: Coord = start.into();
        let end: Coord = end.into();
        let opposite: Coord = opposite.into();
        Edge {
            start,
            end,
            opposite_sign: (opposite - start).cross(&(end - start)),
        }
    }

    /// Positive when the point lies on the same side as the opposite vertex, zero on the line.
    fn side(&self, point: &Coord) -> f64 {
        self.opposite_sign * (*point - self.start).cross(&(self.end - self.start))
    }

    /// The closest point of the edge segment to `point`.
    fn project(&self, point: &Coord) -> XYColor {
        let edge = self.end - self.start;
        let t = (*point - self.start).dot(&edge) / edge.norm_squared();
        if t >= 0.0 && t <= 1.0 {
            (self.start + edge * t).into()
        } else if t < 0.0 {
            self.start.into()
        } else {
            self.end.into()
        }
    }
}

impl GamutProfile {
    /// The edges blue to red, red to green and green to blue, in that order.
    fn edges(&self) -> [Edge; 3] {
        [
            Edge::new(self.blue, self.red, self.green),
            Edge::new(self.red, self.green, self.blue),
            Edge::new(self.green, self.blue, self.red),
        ]
    }

    /// Returns `true` if the point lies inside the triangle or on its boundary. Points within rounding
    /// distance of an edge count as on it, so anything [`clip`](#method.clip) returns is contained.
    pub fn contains(&self, point: XYColor) -> bool {
        let p: Coord = point.into();
        self.edges()
            .iter()
            .all(|edge| edge.side(&p) >= -BOUNDARY_TOLERANCE)
    }

    /// Returns the point unchanged if the gamut contains it. Otherwise, the edges are tried blue to
    /// red, red to green, then green to blue, and the first one the point lies outside of decides:
    /// the point is projected onto that edge, landing on the nearer vertex if the projection falls
    /// past either end.
    ///
    /// # Example
    /// A saturated yellow-green is out of reach for the original hue bulb and lands on its red-green
    /// edge.
    ///
    /// ```
    /// # use chromalight::prelude::*;
    /// let bulb = gamut_for_model("LCT001");
    /// let clipped = bulb.clip(XYColor{x: 0.9, y: 0.9});
    /// assert!(bulb.contains(clipped));
    /// assert!(clipped.x > bulb.green.x && clipped.x < bulb.red.x);
    /// ```
    pub fn clip(&self, point: XYColor) -> XYColor {
        if self.contains(point) {
            return point;
        }
        let p: Coord = point.into();
        let edges = self.edges();
        let clipped = match edges
            .iter()
            .find(|edge| edge.side(&p) < -BOUNDARY_TOLERANCE)
        {
            Some(edge) => edge.project(&p),
            // unreachable for finite points, but NaN fails every comparison
            None => self.blue,
        };
        debug!(
            "clipped ({}, {}) into gamut at ({}, {})",
            point.x, point.y, clipped.x, clipped.y
        );
        clipped
    }
}
