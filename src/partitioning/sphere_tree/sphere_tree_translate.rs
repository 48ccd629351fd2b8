use crate::math::{Real, Vector};
use crate::partitioning::{SphereTree, SphereTreeNode};

impl SphereTreeNode {
    /// Translates this subtree by `shift`, in place.
    ///
    /// The whole subtree moves as one rigid body: the same shift is added to
    /// the center of every node. Child offsets never need re-derivation and
    /// nothing is allocated.
    pub fn translate(&mut self, shift: &Vector<Real>) {
        self.sphere.translate_by(shift);

        if let Some(children) = self.children_mut() {
            for child in children.iter_mut() {
                child.translate(shift);
            }
        }
    }
}

impl SphereTree {
    /// Translates every node of this tree by `shift`, in place.
    #[inline]
    pub fn translate(&mut self, shift: &Vector<Real>) {
        self.root.translate(shift);
    }
}
