use crate::bounding_volume::BoundingSphere;
use crate::math::{Point, Real};
use crate::shape::Ball;

impl Ball {
    /// Computes the bounding sphere of this ball, centered at `center`.
    #[inline]
    pub fn bounding_sphere(&self, center: &Point<Real>) -> BoundingSphere {
        self.local_bounding_sphere().translated(&center.coords)
    }

    /// Computes the local-space bounding sphere of this ball.
    ///
    /// A ball is its own bounding sphere.
    #[inline]
    pub fn local_bounding_sphere(&self) -> BoundingSphere {
        BoundingSphere::new(Point::origin(), self.radius)
    }
}
