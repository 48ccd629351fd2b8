use crate::bounding_volume::BoundingSphere;
use crate::math::{Point, Real, Vector};
use crate::partitioning::{SphereTree, SphereTreeBuilderError};
use crate::query;
use crate::shape::Shape;
use na;
use num::Zero;

/// A movable rigid object approximated by a sphere tree.
///
/// The tree is built once, at construction time, from the object's base
/// shape, and is never rebuilt afterwards: moving the object only translates
/// the tree. Each object owns its tree exclusively.
pub struct SceneObject {
    position: Point<Real>,
    velocity: Vector<Real>,
    acceleration: Vector<Real>,
    shape: Shape,
    tree: SphereTree,
    pub(super) colliding: bool,
}

impl SceneObject {
    /// Creates an object at `position`, building its sphere tree from `shape` subdivided
    /// `subdivisions` times.
    pub fn new(
        position: Point<Real>,
        shape: Shape,
        subdivisions: u32,
    ) -> Result<SceneObject, SphereTreeBuilderError> {
        let tree = SphereTree::from_shape(position, &shape, subdivisions)?;

        Ok(SceneObject {
            position,
            velocity: Vector::zeros(),
            acceleration: Vector::zeros(),
            shape,
            tree,
            colliding: false,
        })
    }

    /// The position of this object.
    #[inline]
    pub fn position(&self) -> &Point<Real> {
        &self.position
    }

    /// The velocity of this object.
    #[inline]
    pub fn velocity(&self) -> &Vector<Real> {
        &self.velocity
    }

    /// Sets the velocity of this object.
    #[inline]
    pub fn set_velocity(&mut self, velocity: Vector<Real>) {
        self.velocity = velocity;
    }

    /// The acceleration of this object.
    #[inline]
    pub fn acceleration(&self) -> &Vector<Real> {
        &self.acceleration
    }

    /// Sets the acceleration of this object.
    #[inline]
    pub fn set_acceleration(&mut self, acceleration: Vector<Real>) {
        self.acceleration = acceleration;
    }

    /// The base shape this object's tree was built from.
    #[inline]
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    /// The sphere tree approximating this object.
    #[inline]
    pub fn tree(&self) -> &SphereTree {
        &self.tree
    }

    /// The edge-triggered collision latch of this object.
    ///
    /// The latch flips to `true` on contact onset (so a response fires once
    /// per contact event, not every frame the pair keeps overlapping) and
    /// resets to `false` once the pair separates.
    #[inline]
    pub fn colliding(&self) -> bool {
        self.colliding
    }

    /// The magnitude of this object's velocity.
    #[inline]
    pub fn speed(&self) -> Real {
        self.velocity.norm()
    }

    /// The distance between the positions of `self` and `other`.
    #[inline]
    pub fn distance_to(&self, other: &SceneObject) -> Real {
        na::distance(&self.position, &other.position)
    }

    /// Moves this object by `shift`, translating its sphere tree along with it.
    pub fn translate(&mut self, shift: &Vector<Real>) {
        self.position += shift;
        self.tree.translate(shift);
    }

    /// Advances this object's velocity and position by `elapsed` seconds, translating its
    /// sphere tree along with it.
    pub fn integrate(&mut self, elapsed: Real) {
        self.velocity += self.acceleration * elapsed;

        // An object at rest hasn't moved: its tree is already in place.
        if !self.velocity.is_zero() {
            let shift = self.velocity * elapsed;
            self.translate(&shift);
        }
    }

    /// Tests whether the volumes approximated by the sphere trees of `self` and `other`
    /// overlap.
    #[inline]
    pub fn check_collision(&self, other: &SceneObject) -> bool {
        query::intersection_test(&self.tree, &other.tree)
    }

    /// Calls `f` on the bounding sphere of every occupied leaf of this object's tree, for
    /// visualization.
    #[inline]
    pub fn for_each_occupied_leaf(&self, f: &mut impl FnMut(&BoundingSphere)) {
        self.tree.for_each_occupied_leaf(f);
    }
}
