use crate::bounding_volume::BoundingSphere;

/// The number of children of an interior sphere-tree node: one per octant.
pub(super) const NUM_OCTANTS: usize = 8;

/// A node of a sphere tree.
///
/// A node is either a *leaf* (no children) or an *interior* node with exactly
/// eight children, one per octant of the volume it subdivides. Partial child
/// arrays cannot be represented. Children are owned exclusively, so dropping
/// a node tears down its whole subtree.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct SphereTreeNode {
    /// The bounding sphere of this node. It conservatively encloses the
    /// spheres of all of its descendants.
    pub sphere: BoundingSphere,
    /// Whether the volume of this node represents solid material.
    ///
    /// The current builders only ever produce occupied nodes; the `false`
    /// state is reserved for shapes with genuinely empty octants.
    pub occupied: bool,
    children: Option<Box<[SphereTreeNode; NUM_OCTANTS]>>,
}

impl SphereTreeNode {
    /// Creates a leaf node.
    pub fn leaf(sphere: BoundingSphere, occupied: bool) -> SphereTreeNode {
        SphereTreeNode {
            sphere,
            occupied,
            children: None,
        }
    }

    /// Creates an interior node from its eight, already built, children.
    pub fn with_children(
        sphere: BoundingSphere,
        occupied: bool,
        children: [SphereTreeNode; NUM_OCTANTS],
    ) -> SphereTreeNode {
        SphereTreeNode {
            sphere,
            occupied,
            children: Some(Box::new(children)),
        }
    }

    /// Is this node a leaf?
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.children.is_none()
    }

    /// The children of this node, or `None` if it is a leaf.
    #[inline]
    pub fn children(&self) -> Option<&[SphereTreeNode; NUM_OCTANTS]> {
        self.children.as_deref()
    }

    /// The children of this node, or `None` if it is a leaf.
    #[inline]
    pub fn children_mut(&mut self) -> Option<&mut [SphereTreeNode; NUM_OCTANTS]> {
        self.children.as_deref_mut()
    }

    /// The number of leaves reachable from this node.
    pub fn leaf_count(&self) -> usize {
        match &self.children {
            None => 1,
            Some(children) => children.iter().map(Self::leaf_count).sum(),
        }
    }

    /// The total number of nodes of this subtree, including `self`.
    pub fn node_count(&self) -> usize {
        match &self.children {
            None => 1,
            Some(children) => 1 + children.iter().map(Self::node_count).sum::<usize>(),
        }
    }

    /// The height of this subtree. A leaf has depth 0.
    pub fn depth(&self) -> usize {
        match &self.children {
            None => 0,
            Some(children) => 1 + children.iter().map(Self::depth).max().unwrap_or(0),
        }
    }
}

/// A sphere tree: an 8-ary bounding-volume hierarchy of nested spheres
/// approximating the volume of a single rigid object.
///
/// A tree is built once from the object's base shape
/// ([`SphereTree::from_shape`]) and afterwards only ever translated when the
/// object moves. A root always exists by construction.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct SphereTree {
    pub(super) root: SphereTreeNode,
}

impl SphereTree {
    /// The root node of this tree.
    #[inline]
    pub fn root(&self) -> &SphereTreeNode {
        &self.root
    }

    /// The number of leaves of this tree.
    #[inline]
    pub fn leaf_count(&self) -> usize {
        self.root.leaf_count()
    }

    /// The total number of nodes of this tree.
    #[inline]
    pub fn node_count(&self) -> usize {
        self.root.node_count()
    }

    /// The depth of this tree. A single-leaf tree has depth 0.
    #[inline]
    pub fn depth(&self) -> usize {
        self.root.depth()
    }
}
