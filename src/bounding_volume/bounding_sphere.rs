//! Bounding sphere.

use crate::bounding_volume::BoundingVolume;
use crate::math::{Point, Real, Vector};
use na;

/// A Bounding Sphere.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, PartialEq, Copy, Clone)]
pub struct BoundingSphere {
    /// The center of this bounding sphere.
    pub center: Point<Real>,
    /// The radius of this bounding sphere.
    pub radius: Real,
}

impl BoundingSphere {
    /// Creates a new bounding sphere.
    pub fn new(center: Point<Real>, radius: Real) -> BoundingSphere {
        BoundingSphere { center, radius }
    }

    /// The bounding sphere center.
    #[inline]
    pub fn center(&self) -> &Point<Real> {
        &self.center
    }

    /// The bounding sphere radius.
    #[inline]
    pub fn radius(&self) -> Real {
        self.radius
    }

    /// The distance between the centers of `self` and `other`.
    #[inline]
    pub fn distance_to(&self, other: &BoundingSphere) -> Real {
        na::distance(&self.center, &other.center)
    }

    /// Translates this bounding sphere by `shift`.
    #[inline]
    pub fn translate_by(&mut self, shift: &Vector<Real>) {
        self.center += shift;
    }

    /// Returns this bounding sphere, translated by `shift`.
    #[inline]
    pub fn translated(&self, shift: &Vector<Real>) -> BoundingSphere {
        BoundingSphere::new(self.center + shift, self.radius)
    }
}

impl BoundingVolume for BoundingSphere {
    #[inline]
    fn center(&self) -> Point<Real> {
        *self.center()
    }

    #[inline]
    fn intersects(&self, other: &BoundingSphere) -> bool {
        let delta_pos = other.center - self.center;
        let distance_squared = delta_pos.norm_squared();
        let sum_radius = self.radius + other.radius;

        distance_squared <= sum_radius * sum_radius
    }

    #[inline]
    fn contains(&self, other: &BoundingSphere) -> bool {
        let delta_pos = other.center - self.center;
        let distance = delta_pos.norm();

        distance + other.radius <= self.radius
    }
}
