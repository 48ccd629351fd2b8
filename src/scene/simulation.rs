use crate::math::Real;
use crate::query::details::intersection_test_sphere_tree_sphere_tree;
use crate::query::OccupancyCheck;
use crate::scene::SceneObject;
use num::Zero;

/// The default clamp applied to a single timestep, in seconds.
///
/// A stalled caller (breakpoint, dropped frame) would otherwise feed a huge
/// elapsed time into the integration and teleport objects through each other.
pub const DEFAULT_MAX_TIMESTEP: Real = 0.1;

/// Speeds below this threshold don't drive the sampling heuristic; dividing
/// by them would produce a near-infinite or NaN interval.
const MIN_SAMPLING_SPEED: Real = 1.0e-9;

/// The simulation context: the object collection plus the clock and sampling timer that
/// drive per-frame collision sweeps.
///
/// `step` integrates the motion of every object first, fully serialized, and only then
/// runs the pairwise collision sweep, which is read-only with respect to the trees.
pub struct SimulationContext {
    objects: Vec<SceneObject>,
    occupancy: OccupancyCheck,
    max_timestep: Real,
    clock: Real,
    next_sample_time: Real,
}

impl SimulationContext {
    /// Creates an empty simulation context with the default occupancy policy.
    pub fn new() -> SimulationContext {
        SimulationContext::with_occupancy(OccupancyCheck::default())
    }

    /// Creates an empty simulation context using `occupancy` for every collision query.
    pub fn with_occupancy(occupancy: OccupancyCheck) -> SimulationContext {
        SimulationContext {
            objects: Vec::new(),
            occupancy,
            max_timestep: DEFAULT_MAX_TIMESTEP,
            clock: 0.0,
            next_sample_time: 0.0,
        }
    }

    /// Adds an object to the simulation.
    ///
    /// The sampling timer is reset so the new object is swept on the next step.
    pub fn push(&mut self, object: SceneObject) {
        self.objects.push(object);
        self.next_sample_time = self.clock;
    }

    /// The objects of this simulation.
    #[inline]
    pub fn objects(&self) -> &[SceneObject] {
        &self.objects
    }

    /// Mutable access to the objects of this simulation.
    #[inline]
    pub fn objects_mut(&mut self) -> &mut [SceneObject] {
        &mut self.objects
    }

    /// The current simulation clock, in seconds.
    #[inline]
    pub fn clock(&self) -> Real {
        self.clock
    }

    /// Sets the clamp applied to the timestep of each [`SimulationContext::step`].
    #[inline]
    pub fn set_max_timestep(&mut self, max_timestep: Real) {
        self.max_timestep = max_timestep;
    }

    /// Advances the simulation by `dt` seconds (clamped to the max timestep).
    ///
    /// Motion is integrated for all objects before any collision query runs, so tree
    /// writers and tree readers never interleave. The pairwise sweep itself only runs
    /// when the clock has caught up with the sampling timer.
    pub fn step(&mut self, dt: Real) {
        let dt = dt.clamp(0.0, self.max_timestep);

        for object in &mut self.objects {
            object.integrate(dt);
        }
        self.clock += dt;

        if self.clock >= self.next_sample_time {
            self.sweep();
            self.next_sample_time = self.clock + self.next_sample_interval();
        }
    }

    /// Checks every unordered pair of objects for collisions, firing the bounce response
    /// on contact onset.
    ///
    /// The response is edge-triggered: the velocities of a pair are exchanged once when
    /// the overlap starts, and the latches re-arm when the pair separates, so a later,
    /// separate contact triggers again.
    fn sweep(&mut self) {
        for i in 0..self.objects.len() {
            let (head, tail) = self.objects.split_at_mut(i + 1);
            let first = &mut head[i];

            for (j, second) in tail.iter_mut().enumerate() {
                // Neither object moved since the last sweep: their contact state can't change.
                if first.velocity().is_zero() && second.velocity().is_zero() {
                    continue;
                }

                let overlapping = intersection_test_sphere_tree_sphere_tree(
                    first.tree().root(),
                    second.tree().root(),
                    self.occupancy,
                );

                if overlapping {
                    if !first.colliding && !second.colliding {
                        log::debug!("contact onset between objects {} and {}", i, i + 1 + j);
                        let velocity1 = *first.velocity();
                        let velocity2 = *second.velocity();
                        first.set_velocity(velocity2);
                        second.set_velocity(velocity1);
                        first.colliding = true;
                        second.colliding = true;
                    }
                } else {
                    first.colliding = false;
                    second.colliding = false;
                }
            }
        }
    }

    /// Rough estimate of how long the sweep can wait before it must run again: half the
    /// time the closest pair needs to touch at the current maximum speed.
    fn next_sample_interval(&self) -> Real {
        let mut min_dist = Real::INFINITY;
        let mut max_speed: Real = 0.0;

        for (i, first) in self.objects.iter().enumerate() {
            max_speed = max_speed.max(first.speed());

            for second in &self.objects[i + 1..] {
                min_dist = min_dist.min(first.distance_to(second));
            }
        }

        if self.objects.len() < 2 {
            return self.max_timestep;
        }

        if max_speed < MIN_SAMPLING_SPEED {
            // Nothing is closing in on anything; keeps the divide below well-defined.
            log::debug!("all objects (nearly) at rest, deferring the next sweep");
            return self.max_timestep;
        }

        (min_dist / max_speed) / 2.0
    }
}

impl Default for SimulationContext {
    fn default() -> Self {
        Self::new()
    }
}
