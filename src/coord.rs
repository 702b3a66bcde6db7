//! This module contains a struct, [`Coord`], that models a vector in the CIE
//! chromaticity plane and supports the small amount of 2D math the gamut code needs: sums,
//! differences, scaling, dot products and the signed cross product used for half-plane tests.

use std::ops::{Add, Mul, Sub};
use num;
use num::{Num, NumCast};

/// Represents a scalar value that can be easily converted, described using the common numeric traits
/// in [`num`]. Anything that falls under this category can be multiplied by a [`Coord`] to scale
/// it. This has no added functionality: it's just for convenience.
pub trait Scalar: NumCast + Num {}

impl<T: NumCast + Num> Scalar for T {}

/// A point or displacement in the xy plane. Chromaticity points convert to and from `Coord` with `x`
/// and `y` on the matching axes.
///
/// # Example
/// ```
/// # use chromalight::coord::Coord;
/// let blue = Coord{x: 0.168, y: 0.041};
/// let red = Coord{x: 0.674, y: 0.322};
/// let edge = red - blue;
/// let halfway = blue + edge * 0.5;
/// assert!((halfway.x - 0.421).abs() <= 1e-10);
/// assert!((halfway.y - 0.1815).abs() <= 1e-10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct Coord {
    /// The first axis.
    pub x: f64,
    /// The second axis.
    pub y: f64,
}

impl Add for Coord {
    type Output = Coord;
    fn add(self, rhs: Coord) -> Coord {
        Coord {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

impl Sub for Coord {
    type Output = Coord;
    fn sub(self, rhs: Coord) -> Coord {
        Coord {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}

// scalar multiplication only: (a, b) * s = (sa, sb), not commutative
impl<U: Scalar> Mul<U> for Coord {
    type Output = Coord;
    fn mul(self, rhs: U) -> Coord {
        let r: f64 = num::cast(rhs).unwrap_or(::std::f64::NAN);
        Coord {
            x: self.x * r,
            y: self.y * r,
        }
    }
}

impl Coord {
    /// The dot product of two vectors.
    pub fn dot(&self, other: &Coord) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// The z component of the 3D cross product `self × other`. Its sign tells which side of the
    /// directed line `other` the vector `self` points to, with zero meaning collinear.
    ///
    /// ```
    /// # use chromalight::coord::Coord;
    /// let edge = Coord{x: 1., y: 0.};
    /// assert!(Coord{x: 0.5, y: 1.}.cross(&edge) < 0.);
    /// assert!(Coord{x: 0.5, y: -1.}.cross(&edge) > 0.);
    /// assert_eq!(Coord{x: 3., y: 0.}.cross(&edge), 0.);
    /// ```
    pub fn cross(&self, other: &Coord) -> f64 {
        self.x * other.y - self.y * other.x
    }

    /// The squared Euclidean length.
    pub fn norm_squared(&self) -> f64 {
        self.dot(self)
    }

    /// The Euclidean distance between two points.
    pub fn euclidean_distance(&self, other: &Coord) -> f64 {
        (*self - *other).norm_squared().sqrt()
    }
}
