//! Shapes supported by spheretree3d.

pub use self::ball::Ball;
pub use self::cuboid::Cuboid;
pub use self::shape::Shape;

mod ball;
mod cuboid;
mod shape;
