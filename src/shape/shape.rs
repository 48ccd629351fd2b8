use crate::bounding_volume::BoundingSphere;
use crate::math::{Point, Real};
use crate::shape::{Ball, Cuboid};

/// A shape usable as the base geometry of a sphere tree.
///
/// This is a closed set of variants rather than a trait object: the tree
/// builder and the renderer are the only places that ever need shape
/// identity, and both dispatch with a single `match`. New shapes (e.g., a
/// cylinder) extend this enum.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
pub enum Shape {
    /// A ball shape.
    Ball(Ball),
    /// A cuboid shape.
    Cuboid(Cuboid),
}

impl Shape {
    /// Computes the bounding sphere of this shape, centered at `center`.
    #[inline]
    pub fn bounding_sphere(&self, center: &Point<Real>) -> BoundingSphere {
        match self {
            Shape::Ball(ball) => ball.bounding_sphere(center),
            Shape::Cuboid(cuboid) => cuboid.bounding_sphere(center),
        }
    }

    /// Computes the local-space bounding sphere of this shape.
    #[inline]
    pub fn local_bounding_sphere(&self) -> BoundingSphere {
        match self {
            Shape::Ball(ball) => ball.local_bounding_sphere(),
            Shape::Cuboid(cuboid) => cuboid.local_bounding_sphere(),
        }
    }
}

impl From<Ball> for Shape {
    fn from(ball: Ball) -> Self {
        Shape::Ball(ball)
    }
}

impl From<Cuboid> for Shape {
    fn from(cuboid: Cuboid) -> Self {
        Shape::Cuboid(cuboid)
    }
}
