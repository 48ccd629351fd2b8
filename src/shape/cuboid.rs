use crate::math::{Real, Vector};

/// Shape of a box.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Cuboid {
    /// The half-extents of the cuboid.
    pub half_extents: Vector<Real>,
}

impl Cuboid {
    /// Creates a new box from its half-extents. Half-extents are the box half-width along each
    /// axis. Each half-extent must be positive.
    #[inline]
    pub fn new(half_extents: Vector<Real>) -> Cuboid {
        Cuboid { half_extents }
    }

    /// Creates a new cube with the given half-side, i.e., a cuboid with equal half-extents along
    /// every axis.
    #[inline]
    pub fn cube(half_side: Real) -> Cuboid {
        Cuboid {
            half_extents: Vector::repeat(half_side),
        }
    }
}
