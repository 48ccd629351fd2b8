use crate::bounding_volume::BoundingSphere;
use crate::partitioning::{SphereTree, SphereTreeNode};

impl SphereTreeNode {
    /// Calls `f` on the bounding sphere of every occupied leaf of this subtree.
    ///
    /// This is the read-only contract consumed by visualization code: only
    /// leaves are yielded, interior nodes exist for pruning and are never
    /// drawn.
    pub fn for_each_occupied_leaf(&self, f: &mut impl FnMut(&BoundingSphere)) {
        match self.children() {
            Some(children) => {
                for child in children.iter() {
                    child.for_each_occupied_leaf(f);
                }
            }
            None => {
                if self.occupied {
                    f(&self.sphere);
                }
            }
        }
    }

    /// Calls `f` on every node of this subtree, `self` included, parents before children.
    pub fn for_each_node(&self, f: &mut impl FnMut(&SphereTreeNode)) {
        f(self);

        if let Some(children) = self.children() {
            for child in children.iter() {
                child.for_each_node(f);
            }
        }
    }
}

impl SphereTree {
    /// Calls `f` on the bounding sphere of every occupied leaf of this tree.
    #[inline]
    pub fn for_each_occupied_leaf(&self, f: &mut impl FnMut(&BoundingSphere)) {
        self.root.for_each_occupied_leaf(f);
    }

    /// Calls `f` on every node of this tree, parents before children.
    #[inline]
    pub fn for_each_node(&self, f: &mut impl FnMut(&SphereTreeNode)) {
        self.root.for_each_node(f);
    }
}
