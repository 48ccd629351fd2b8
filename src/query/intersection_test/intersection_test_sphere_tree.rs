use crate::bounding_volume::BoundingVolume;
use crate::partitioning::SphereTreeNode;

/// Which occupancy flags must hold for a node pair to count as overlapping.
///
/// The historical formulation of this traversal consulted only the first
/// tree's flag at each pruning step, an asymmetry that is likely a latent
/// defect but is observable behavior. Rather than silently picking one
/// interpretation, the policy is explicit.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Default, Clone, Debug, Copy, PartialEq, Eq)]
pub enum OccupancyCheck {
    /// Only the first tree's `occupied` flag is consulted; the second tree's
    /// flag is ignored. This reproduces the historical behavior.
    #[default]
    FirstOnly,
    /// Both trees' `occupied` flags must be set for a pair to overlap.
    Both,
}

impl OccupancyCheck {
    #[inline]
    fn accepts(self, node1: &SphereTreeNode, node2: &SphereTreeNode) -> bool {
        match self {
            OccupancyCheck::FirstOnly => node1.occupied,
            OccupancyCheck::Both => node1.occupied && node2.occupied,
        }
    }
}

/// Intersection test between two sphere-tree nodes, by recursive dual-tree traversal.
///
/// Compares the two bounding spheres first: if they don't intersect, no
/// descendant pair can either (every parent sphere bounds its children), so
/// the whole pair of subtrees is pruned. If they do, the traversal descends
/// into whichever sides have children, short-circuiting on the first
/// overlapping leaf pair.
pub fn intersection_test_sphere_tree_sphere_tree(
    node1: &SphereTreeNode,
    node2: &SphereTreeNode,
    occupancy: OccupancyCheck,
) -> bool {
    if !node1.sphere.intersects(&node2.sphere) || !occupancy.accepts(node1, node2) {
        return false;
    }

    match (node1.children(), node2.children()) {
        // Two overlapping occupied leaves: that is the positive verdict.
        (None, None) => true,
        (Some(children1), None) => children1
            .iter()
            .any(|child1| intersection_test_sphere_tree_sphere_tree(child1, node2, occupancy)),
        (None, Some(children2)) => children2
            .iter()
            .any(|child2| intersection_test_sphere_tree_sphere_tree(node1, child2, occupancy)),
        (Some(children1), Some(children2)) => children1.iter().any(|child1| {
            children2
                .iter()
                .any(|child2| intersection_test_sphere_tree_sphere_tree(child1, child2, occupancy))
        }),
    }
}
