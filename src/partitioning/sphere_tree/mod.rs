pub use sphere_tree::{SphereTree, SphereTreeNode};
pub use sphere_tree_build::{SphereTreeBuilderError, MAX_SUBDIVISION_DEPTH};

mod sphere_tree;
mod sphere_tree_build;
mod sphere_tree_translate;
mod sphere_tree_traverse;
mod sphere_tree_validation;
