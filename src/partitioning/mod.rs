//! Spatial partitioning tools.

pub use self::sphere_tree::{
    SphereTree, SphereTreeBuilderError, SphereTreeNode, MAX_SUBDIVISION_DEPTH,
};

mod sphere_tree;
