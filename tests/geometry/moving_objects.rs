use spheretree3d::math::{Point, Real, Vector};
use spheretree3d::scene::{SceneObject, SimulationContext};
use spheretree3d::shape::{Ball, Cuboid, Shape};

fn moving_ball() -> SceneObject {
    let mut ball =
        SceneObject::new(Point::new(2.0, 0.0, 8.0), Shape::Ball(Ball::new(1.0)), 0).unwrap();
    ball.set_velocity(Vector::new(-1.0, 0.0, 0.0));
    ball
}

fn static_cube() -> SceneObject {
    SceneObject::new(
        Point::new(-2.0, 0.0, 8.0),
        Shape::Cuboid(Cuboid::cube(1.0)),
        1,
    )
    .unwrap()
}

#[test]
fn collision_starts_exactly_when_the_ball_reaches_a_leaf_sphere() {
    let mut ball = moving_ball();
    let cube = static_cube();

    // The depth-1 cube leaves closest to the ball's path sit at
    // (-1.5, ±0.5, 8 ± 0.5) with radius sqrt(3)/2. The first contact happens
    // when the ball's bound reaches one of them:
    // (x + 1.5)^2 + 0.5 = (1 + sqrt(3)/2)^2.
    let leaf_radius = (3.0 as Real).sqrt() / 2.0;
    let contact_x = -1.5 + ((1.0 + leaf_radius) * (1.0 + leaf_radius) - 0.5).sqrt();

    let dt = 0.01;
    let mut collided = false;

    for _ in 0..400 {
        let expected = ball.position().x <= contact_x;
        assert_eq!(
            ball.check_collision(&cube),
            expected,
            "at x = {}",
            ball.position().x
        );
        assert_eq!(cube.check_collision(&ball), expected);

        if expected {
            collided = true;
            break;
        }
        ball.integrate(dt);
    }

    assert!(collided);
}

#[test]
fn bounce_fires_once_per_contact_onset() {
    let mut context = SimulationContext::new();
    context.push(moving_ball());
    context.push(static_cube());

    let dt = 0.01;
    let mut onset_clock = None;

    for _ in 0..1000 {
        context.step(dt);

        if onset_clock.is_none() && context.objects()[0].colliding() {
            onset_clock = Some(context.clock());

            // The response is a velocity exchange: the ball hands its
            // velocity to the cube and stops.
            assert_eq!(*context.objects()[0].velocity(), Vector::zeros());
            assert_eq!(
                *context.objects()[1].velocity(),
                Vector::new(-1.0, 0.0, 0.0)
            );
        }
    }

    assert!(onset_clock.is_some());

    // The cube kept receding at the exchanged velocity the whole time: the
    // response fired exactly once.
    assert_eq!(*context.objects()[0].velocity(), Vector::zeros());
    assert_eq!(
        *context.objects()[1].velocity(),
        Vector::new(-1.0, 0.0, 0.0)
    );

    // And the pair has separated again, re-arming the latches.
    assert!(!context.objects()[0].colliding());
    assert!(!context.objects()[1].colliding());
}

#[test]
fn latch_rearms_after_separation() {
    let mut context = SimulationContext::new();
    context.push(moving_ball());
    context.push(static_cube());

    let dt = 0.01;
    let mut onsets = 0;
    let mut latched = false;

    for _ in 0..2000 {
        context.step(dt);
        let colliding = context.objects()[0].colliding();

        if colliding && !latched {
            onsets += 1;
        }
        latched = colliding;

        // Send the ball back toward the cube once it has stopped and separated.
        if onsets == 1 && !colliding && context.objects()[0].velocity().norm() == 0.0 {
            let second = context.objects()[1].distance_to(&context.objects()[0]);
            if second > 4.0 {
                context.objects_mut()[0].set_velocity(Vector::new(-2.0, 0.0, 0.0));
            }
        }
    }

    assert_eq!(onsets, 2);
}

#[test]
fn step_clamps_runaway_timesteps() {
    let mut context = SimulationContext::new();
    context.push(moving_ball());

    context.step(10.0);

    assert_eq!(context.clock(), 0.1);
    assert_eq!(*context.objects()[0].position(), Point::new(1.9, 0.0, 8.0));
}

#[test]
fn resting_overlapping_pairs_are_left_alone() {
    let mut context = SimulationContext::new();
    context.push(SceneObject::new(Point::origin(), Shape::Ball(Ball::new(1.0)), 0).unwrap());
    context.push(
        SceneObject::new(
            Point::new(0.5, 0.0, 0.0),
            Shape::Cuboid(Cuboid::cube(1.0)),
            2,
        )
        .unwrap(),
    );

    for _ in 0..10 {
        context.step(0.01);
    }

    // Neither object has moved since the last sweep, so the pair is skipped
    // and no response fires.
    assert!(!context.objects()[0].colliding());
    assert!(!context.objects()[1].colliding());
    assert_eq!(*context.objects()[0].velocity(), Vector::zeros());
}
