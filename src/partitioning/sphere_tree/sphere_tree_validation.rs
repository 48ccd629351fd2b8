use crate::math::DEFAULT_EPSILON;
use crate::partitioning::{SphereTree, SphereTreeNode};

impl SphereTreeNode {
    /// Panics if this subtree isn't well-formed.
    ///
    /// The subtree is well-formed if the sphere of every node fully contains
    /// the spheres of all of its children (up to a few ulps of slack). This
    /// is the invariant that makes pruning sound: if a parent pair cannot
    /// overlap, no descendant pair can.
    pub fn assert_well_formed(&self) {
        if let Some(children) = self.children() {
            let slack = self.sphere.radius * DEFAULT_EPSILON * 8.0;

            for child in children.iter() {
                let reach = self.sphere.distance_to(&child.sphere) + child.sphere.radius;
                assert!(
                    reach <= self.sphere.radius + slack,
                    "child sphere (reach {}) escapes its parent (radius {})",
                    reach,
                    self.sphere.radius,
                );

                child.assert_well_formed();
            }
        }
    }
}

impl SphereTree {
    /// Panics if this tree isn't well-formed.
    ///
    /// See [`SphereTreeNode::assert_well_formed`].
    #[inline]
    pub fn assert_well_formed(&self) {
        self.root.assert_well_formed();
    }
}
