//! Implementation details of the `intersection_test` function.

pub use self::intersection_test::intersection_test;
pub use self::intersection_test_sphere_tree::{
    intersection_test_sphere_tree_sphere_tree, OccupancyCheck,
};

mod intersection_test_sphere_tree;
