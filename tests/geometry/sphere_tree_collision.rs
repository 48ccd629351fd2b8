use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use spheretree3d::bounding_volume::{BoundingSphere, BoundingVolume};
use spheretree3d::math::{Point, Real};
use spheretree3d::partitioning::{SphereTree, SphereTreeNode};
use spheretree3d::query::details::intersection_test_sphere_tree_sphere_tree;
use spheretree3d::query::{self, OccupancyCheck};
use spheretree3d::shape::{Ball, Cuboid, Shape};

fn random_sphere(rng: &mut StdRng) -> BoundingSphere {
    let center = Point::new(
        rng.gen_range(-10.0..10.0),
        rng.gen_range(-10.0..10.0),
        rng.gen_range(-10.0..10.0),
    );
    BoundingSphere::new(center, rng.gen_range(0.0..5.0))
}

#[test]
fn sphere_intersection_is_symmetric_and_reflexive() {
    let mut rng = StdRng::seed_from_u64(42);

    for _ in 0..1000 {
        let s1 = random_sphere(&mut rng);
        let s2 = random_sphere(&mut rng);

        assert_eq!(s1.intersects(&s2), s2.intersects(&s1));
        assert!(s1.intersects(&s1));
        assert!(s2.intersects(&s2));
    }
}

#[test]
fn disjoint_spheres_do_not_intersect() {
    let s1 = BoundingSphere::new(Point::new(0.0, 0.0, 0.0), 1.0);
    let s2 = BoundingSphere::new(Point::new(5.0, 0.0, 0.0), 2.0);
    assert!(!s1.intersects(&s2));

    // Exactly touching counts as intersecting.
    let s3 = BoundingSphere::new(Point::new(3.0, 0.0, 0.0), 2.0);
    assert!(s1.intersects(&s3));
}

#[test]
fn coincident_center_spheres_always_intersect() {
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0..100 {
        let center = Point::new(
            rng.gen_range(-10.0..10.0),
            rng.gen_range(-10.0..10.0),
            rng.gen_range(-10.0..10.0),
        );
        let s1 = BoundingSphere::new(center, rng.gen_range(0.0..5.0));
        let s2 = BoundingSphere::new(center, 0.0);

        assert!(s1.intersects(&s2));
        assert!(s2.intersects(&s1));
    }
}

#[test]
fn well_separated_trees_do_not_collide() {
    let ball = SphereTree::from_shape(Point::new(2.0, 0.0, 8.0), &Shape::Ball(Ball::new(1.0)), 0)
        .unwrap();

    for depth in 0..=2 {
        let cube = SphereTree::from_shape(
            Point::new(-2.0, 0.0, 8.0),
            &Shape::Cuboid(Cuboid::cube(1.0)),
            depth,
        )
        .unwrap();

        assert!(!query::intersection_test(&ball, &cube));
        assert!(!query::intersection_test(&cube, &ball));
    }
}

#[test]
fn penetrating_trees_collide_at_every_depth() {
    // The ball pushes half a unit deep into the cube's face, a real solid
    // overlap that no refinement of the cube can prune away.
    let ball = SphereTree::from_shape(Point::new(-0.5, 0.0, 8.0), &Shape::Ball(Ball::new(1.0)), 0)
        .unwrap();

    for depth in 0..=4 {
        let cube = SphereTree::from_shape(
            Point::new(-2.0, 0.0, 8.0),
            &Shape::Cuboid(Cuboid::cube(1.0)),
            depth,
        )
        .unwrap();

        assert!(query::intersection_test(&ball, &cube));
        assert!(query::intersection_test(&cube, &ball));
    }
}

#[test]
fn trees_of_different_depths_can_be_compared() {
    let shallow = SphereTree::from_shape(
        Point::new(-0.9, 0.0, 0.0),
        &Shape::Cuboid(Cuboid::cube(1.0)),
        1,
    )
    .unwrap();
    let deep = SphereTree::from_shape(
        Point::new(0.9, 0.0, 0.0),
        &Shape::Cuboid(Cuboid::cube(1.0)),
        4,
    )
    .unwrap();

    assert!(query::intersection_test(&shallow, &deep));
    assert!(query::intersection_test(&deep, &shallow));
}

#[test]
fn occupancy_first_only_reproduces_the_historical_asymmetry() {
    let sphere = BoundingSphere::new(Point::origin(), 1.0);
    let occupied = SphereTreeNode::leaf(sphere, true);
    let unoccupied = SphereTreeNode::leaf(sphere, false);

    // Only the first argument's flag is consulted.
    assert!(intersection_test_sphere_tree_sphere_tree(
        &occupied,
        &unoccupied,
        OccupancyCheck::FirstOnly
    ));
    assert!(!intersection_test_sphere_tree_sphere_tree(
        &unoccupied,
        &occupied,
        OccupancyCheck::FirstOnly
    ));
}

#[test]
fn occupancy_both_requires_both_sides_occupied() {
    let sphere = BoundingSphere::new(Point::origin(), 1.0);
    let occupied = SphereTreeNode::leaf(sphere, true);
    let unoccupied = SphereTreeNode::leaf(sphere, false);

    assert!(intersection_test_sphere_tree_sphere_tree(
        &occupied,
        &occupied,
        OccupancyCheck::Both
    ));
    assert!(!intersection_test_sphere_tree_sphere_tree(
        &occupied,
        &unoccupied,
        OccupancyCheck::Both
    ));
    assert!(!intersection_test_sphere_tree_sphere_tree(
        &unoccupied,
        &occupied,
        OccupancyCheck::Both
    ));
}

#[test]
fn unoccupied_interior_prunes_its_whole_subtree() {
    let occupied_leaf = |x: Real| SphereTreeNode::leaf(BoundingSphere::new(Point::new(x, 0.0, 0.0), 0.5), true);

    // An interior node marked unoccupied, with occupied leaves below it.
    let children = [
        occupied_leaf(-0.5),
        occupied_leaf(0.5),
        occupied_leaf(-0.5),
        occupied_leaf(0.5),
        occupied_leaf(-0.5),
        occupied_leaf(0.5),
        occupied_leaf(-0.5),
        occupied_leaf(0.5),
    ];
    let hollow = SphereTreeNode::with_children(
        BoundingSphere::new(Point::origin(), 1.0),
        false,
        children,
    );
    let probe = SphereTreeNode::leaf(BoundingSphere::new(Point::origin(), 1.0), true);

    assert!(!intersection_test_sphere_tree_sphere_tree(
        &hollow,
        &probe,
        OccupancyCheck::FirstOnly
    ));
    assert!(!intersection_test_sphere_tree_sphere_tree(
        &probe,
        &hollow,
        OccupancyCheck::Both
    ));
}
