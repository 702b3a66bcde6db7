//! This module describes the Bound trait, which describes the range each component of a color
//! representation may take before it is handed to a device. Conversions are allowed to wander a hair
//! outside these ranges through floating point error; clamping happens once, right before emission.

/// Describes a color representation whose components have explicit bounds.
///
/// # Example
/// ```
/// # use chromalight::prelude::*;
/// let rgb = RGBColor{r: 1.0000001, g: -0.2, b: 0.5};
/// assert!(!rgb.in_bounds());
/// let clamped = rgb.clamp();
/// assert!(clamped.in_bounds());
/// assert_eq!((clamped.r, clamped.g, clamped.b), (1.0, 0.0, 0.5));
/// ```
pub trait Bound: Sized {
    /// Returns a slice of (min, max) pairs, one for each component in the order that
    /// `components` lists them.
    fn bounds() -> &'static [(f64, f64)];
    /// The components of this color, in bound order.
    fn components(&self) -> Vec<f64>;
    /// Rebuilds a color from components in bound order.
    fn from_components(components: &[f64]) -> Self;

    /// Returns whether every component lies in its bounds. NaN is never in bounds.
    fn in_bounds(&self) -> bool {
        self.components()
            .iter()
            .zip(Self::bounds())
            .all(|(&c, &(min, max))| c >= min && c <= max)
    }

    /// Returns a copy with every component clamped into its bounds. NaN components become the lower
    /// bound.
    fn clamp(&self) -> Self {
        let clamped: Vec<f64> = self
            .components()
            .iter()
            .zip(Self::bounds())
            .map(|(&c, &(min, max))| clamp_component(c, min, max))
            .collect();
        Self::from_components(&clamped)
    }
}

/// Clamps a single value, sending NaN to `min`.
pub fn clamp_component(value: f64, min: f64, max: f64) -> f64 {
    if value > max {
        max
    } else if value >= min {
        value
    } else {
        min
    }
}
