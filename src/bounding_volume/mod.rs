//! Bounding volumes.

#[doc(inline)]
pub use self::bounding_sphere::BoundingSphere;
#[doc(inline)]
pub use self::bounding_volume::BoundingVolume;

#[doc(hidden)]
pub mod bounding_sphere;
mod bounding_sphere_ball;
mod bounding_sphere_cuboid;
#[doc(hidden)]
pub mod bounding_volume;
