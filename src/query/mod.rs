//! Non-persistent geometric queries.
//!
//! The main entry point of this module is [`query::intersection_test()`](intersection_test()),
//! which determines whether the volumes approximated by two sphere trees overlap.
//!
//! The `details` submodule exposes the more specific version of that query, letting the
//! caller pick the [`OccupancyCheck`] policy and start the traversal from arbitrary nodes.

pub use self::intersection_test::{intersection_test, OccupancyCheck};

mod intersection_test;

/// Queries dedicated to specific tree-node pairs.
pub mod details {
    pub use super::intersection_test::intersection_test_sphere_tree_sphere_tree;
}
