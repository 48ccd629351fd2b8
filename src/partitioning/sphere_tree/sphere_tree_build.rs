use crate::bounding_volume::BoundingSphere;
use crate::math::{Point, Real, Vector};
use crate::partitioning::{SphereTree, SphereTreeNode};
use crate::shape::Shape;

/// The maximum supported subdivision depth of a sphere tree.
///
/// The node count grows as `8^depth`, so deep trees get expensive quickly.
pub const MAX_SUBDIVISION_DEPTH: u32 = 4;

/// Error indicating that the construction parameters of a sphere tree are malformed.
///
/// Malformed parameters are rejected rather than clamped: a sign flip on a
/// half-extent would silently break the invariant that every parent sphere
/// bounds its children.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq)]
pub enum SphereTreeBuilderError {
    /// The radius of a ball shape was negative.
    #[error("the ball radius must be non-negative (found {0})")]
    NegativeRadius(Real),
    /// At least one half-extent of a cuboid shape was negative.
    #[error("every cuboid half-extent must be non-negative (found {0})")]
    NegativeHalfExtent(Real),
    /// The requested subdivision depth exceeds [`MAX_SUBDIVISION_DEPTH`].
    #[error("the subdivision depth {0} exceeds the maximum supported depth {MAX_SUBDIVISION_DEPTH}")]
    DepthTooLarge(u32),
}

// Octant sign combinations, in child-index order: the i-th child lies on the
// -x/+x side if bit 0 of i is unset/set, and likewise for y (bit 1) and z (bit 2).
const OCTANT_SIGNS: [[Real; 3]; 8] = [
    [-1.0, -1.0, -1.0],
    [1.0, -1.0, -1.0],
    [-1.0, 1.0, -1.0],
    [1.0, 1.0, -1.0],
    [-1.0, -1.0, 1.0],
    [1.0, -1.0, 1.0],
    [-1.0, 1.0, 1.0],
    [1.0, 1.0, 1.0],
];

impl SphereTree {
    /// Builds the sphere tree approximating `shape`, centered at `center`, subdivided
    /// `subdivisions` times.
    ///
    /// A ball cannot be refined by subdivision (the shape is its own bound), so its tree is
    /// always a single occupied leaf regardless of `subdivisions`. A cuboid is subdivided
    /// into octants recursively: each level halves the half-extents and the bounding radius,
    /// leaves appearing exactly at the requested depth. Every generated node is occupied.
    pub fn from_shape(
        center: Point<Real>,
        shape: &Shape,
        subdivisions: u32,
    ) -> Result<SphereTree, SphereTreeBuilderError> {
        if subdivisions > MAX_SUBDIVISION_DEPTH {
            return Err(SphereTreeBuilderError::DepthTooLarge(subdivisions));
        }

        let root = match shape {
            Shape::Ball(ball) => {
                if ball.radius < 0.0 {
                    return Err(SphereTreeBuilderError::NegativeRadius(ball.radius));
                }
                SphereTreeNode::leaf(ball.bounding_sphere(&center), true)
            }
            Shape::Cuboid(cuboid) => {
                let min_extent = cuboid.half_extents.min();
                if min_extent < 0.0 {
                    return Err(SphereTreeBuilderError::NegativeHalfExtent(min_extent));
                }
                let radius = cuboid.half_extents.norm();
                subdivide_cuboid(center, cuboid.half_extents, radius, subdivisions)
            }
        };

        Ok(SphereTree { root })
    }
}

/// Recursively builds the subtree covering the sub-cuboid at `center` with the given
/// `half_extents`, bounded by a sphere of the given `radius`.
fn subdivide_cuboid(
    center: Point<Real>,
    half_extents: Vector<Real>,
    radius: Real,
    levels_left: u32,
) -> SphereTreeNode {
    let sphere = BoundingSphere::new(center, radius);

    if levels_left == 0 {
        return SphereTreeNode::leaf(sphere, true);
    }

    let child_half_extents = half_extents * 0.5;
    let child_radius = radius * 0.5;
    let children = core::array::from_fn(|i| {
        let signs = OCTANT_SIGNS[i];
        let offset = Vector::new(
            signs[0] * child_half_extents.x,
            signs[1] * child_half_extents.y,
            signs[2] * child_half_extents.z,
        );
        subdivide_cuboid(
            center + offset,
            child_half_extents,
            child_radius,
            levels_left - 1,
        )
    });

    SphereTreeNode::with_children(sphere, true, children)
}
