use crate::bounding_volume::BoundingSphere;
use crate::math::{Point, Real};
use crate::shape::Cuboid;

impl Cuboid {
    /// Computes the bounding sphere of this cuboid, centered at `center`.
    #[inline]
    pub fn bounding_sphere(&self, center: &Point<Real>) -> BoundingSphere {
        self.local_bounding_sphere().translated(&center.coords)
    }

    /// Computes the local-space bounding sphere of this cuboid.
    ///
    /// This is the circumscribing sphere: the smallest sphere containing all
    /// eight corners, with radius `half_extents.norm()`.
    #[inline]
    pub fn local_bounding_sphere(&self) -> BoundingSphere {
        let radius = self.half_extents.norm();
        BoundingSphere::new(Point::origin(), radius)
    }
}
