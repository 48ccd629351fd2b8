//! Movable objects owning a sphere tree, and the simulation context that steps them.
//!
//! This is the glue between the collision core and whatever drives it: a
//! [`SceneObject`] pairs a point mass with the sphere tree built from its
//! shape, and a [`SimulationContext`] owns the object collection, the
//! simulation clock and the collision-sampling timer, replacing any need for
//! process-wide state.

pub use self::object::SceneObject;
pub use self::simulation::{SimulationContext, DEFAULT_MAX_TIMESTEP};

mod object;
mod simulation;
