#![warn(missing_docs)]
//! # Sprung
//!
//! Sprung is a crate providing a simple way to compute the forces inside a mass-spring particle
//! system in Rust.
//!
//! ## Goals
//!
//! The main goal of this crate is to provide users with a small data model of point masses
//! connected by damped springs and the computation of the net force acting on each of them, in a
//! way that can easily be integrated into existing game and physics engines. Thus it does not
//! include numerical integration, collision handling or rendering and instead only focuses on the
//! calculation of the spring forces.
//!
//! Forces can be accumulated on one CPU thread or, with the `parallel` feature, on multiple
//! threads using [rayon](https://github.com/rayon-rs/rayon).
//!
//! Vector types are provided by popular math libraries. Enable the `glam` (default), `nalgebra`
//! or `ultraviolet` features to use their vectors.
//!
//! ## Using Sprung
//!
//! ### Building a system
//!
//! A [`System`] owns [`Parts`](Part) (point masses with a position, a velocity and a mass) and
//! [`Links`](Link) (damped springs between two parts). Both are identified by dense indices
//! assigned in creation order.
//!
//! ```
//! use sprung::prelude::*;
//! use glam::Vec3;
//!
//! let mut system = System::<Vec3, f32>::new();
//!
//! let a = system.create_part(Vec3::new(1.0, 0.0, 0.0));
//! let b = system.create_part(Vec3::new(-1.0, 0.0, 0.0));
//! let c = system.create_part(Vec3::new(0.0, 1.0, 0.0));
//!
//! // The rest length of these links is the current distance between their endpoints.
//! system.create_link(a, b)?;
//! system.create_link(b, c)?;
//!
//! // Links can also be given an explicit rest length or explicit constants.
//! system.create_link_with(c, a, Some(0.5), SpringConstants::new(2.0, 0.1))?;
//!
//! // Links must reference existing parts.
//! assert!(system.create_link(a, 42).is_err());
//! # Ok::<(), sprung::Error>(())
//! ```
//!
//! ### Computing and using the forces
//!
//! [`compute_forces`] returns one force per part, indexed by [`PartId`]. Stepping positions and
//! velocities forward is left to the caller.
//!
//! ```
//! use sprung::prelude::*;
//! use glam::Vec3;
//!
//! # const DT: f32 = 1.0 / 60.0;
//! # let mut system = System::<Vec3, f32>::new();
//! # system.create_part(Vec3::X);
//! # system.create_part(Vec3::NEG_X);
//! # system.create_link_with_rest_length(0, 1, 1.0)?;
//! let mut forces = Vec::new();
//!
//! for _ in 0..100 {
//!     compute_forces_into(&system, &mut forces);
//!
//!     for (part, force) in system.parts_mut().iter_mut().zip(&forces) {
//!         part.velocity += *force / part.mass * DT;
//!         part.position += part.velocity * DT;
//!     }
//! }
//! # Ok::<(), sprung::Error>(())
//! ```
//!
//! <details>
//! <summary><h4>Advanced usage</h4></summary>
//!
//! #### Algorithms and interactions
//!
//! [`compute_forces`] is a shortcut for the [`sequential::Accumulate`] algorithm used with the
//! [`SpringDamper::checked`] interaction. Algorithms accumulate the pair of forces an
//! [`InteractionPair`] computes for every link. [`SpringDamper::unchecked`] skips the check for
//! coincident endpoints and [`parallel::Accumulate`] spreads the links over multiple threads.
//!
//! ```
//! use sprung::prelude::*;
//! use glam::DVec2;
//!
//! # let mut system = System::<DVec2, f64>::new();
//! # system.create_part(DVec2::X);
//! # system.create_part(DVec2::NEG_X);
//! # system.create_link(0, 1)?;
//! let forces = system.forces(SpringDamper::unchecked());
//! # Ok::<(), sprung::Error>(())
//! ```
//!
//! #### Custom [`InteractionPair`] implementations
//!
//! Implementing [`InteractionPair<&Link<S>, &Part<V, S>>`] for `YourInteraction` allows it to be
//! used with the accumulation algorithms.
//!
//! ```
//! use sprung::prelude::*;
//! use glam::Vec2;
//!
//! // A spring without damping, ignoring the rest length.
//! struct ZeroLengthSpring;
//!
//! impl InteractionPair<&Link<f32>, &Part<Vec2, f32>> for ZeroLengthSpring {
//!     type Output = Vec2;
//!
//!     fn compute_pair(
//!         &mut self,
//!         link: &Link<f32>,
//!         Between(part_i, part_j): Between<&Part<Vec2, f32>, &Part<Vec2, f32>>,
//!     ) -> (Vec2, Vec2) {
//!         let force = (part_j.position - part_i.position) * link.stiffness;
//!         (force, -force)
//!     }
//! }
//!
//! let mut system = System::<Vec2, f32>::new();
//! let a = system.create_part(Vec2::ZERO);
//! let b = system.create_part(Vec2::new(2.0, 0.0));
//! system.create_link(a, b)?;
//!
//! let forces = system.forces(ZeroLengthSpring);
//! assert_eq!(forces, [Vec2::new(1.0, 0.0), Vec2::new(-1.0, 0.0)]);
//! # Ok::<(), sprung::Error>(())
//! ```
//! </details>
//!
//! [`Part`]: system::Part
//! [`Link`]: system::Link
//! [`PartId`]: system::PartId
//! [`SpringDamper::checked`]: force::SpringDamper::checked
//! [`SpringDamper::unchecked`]: force::SpringDamper::unchecked

mod error;
/// Computation of the forces links exert on parts.
pub mod force;
/// Algorithms that use multiple CPU threads.
#[cfg(feature = "parallel")]
pub mod parallel;
/// Algorithms that use one CPU thread.
pub mod sequential;
/// Parts, links and the system storing them.
pub mod system;
/// Vector operations required from math libraries.
pub mod vector;

pub use error::{Error, IdKind, Result};
pub use force::{compute_forces, compute_forces_into};
pub use system::System;

/// Represents a pair of objects between which an interaction is computed.
///
/// For links, the first object is the first endpoint and the second object is the second
/// endpoint.
#[derive(Clone, Copy, Debug)]
pub struct Between<S1, S2>(pub S1, pub S2);

/// Trait to compute an interaction over a storage.
///
/// This is the main trait used throughout `sprung` to implement the available algorithms.
pub trait Interaction<Storage> {
    /// The computed interaction.
    type Output;

    /// Returns the interaction computed over the storage.
    fn compute(&mut self, storage: Storage) -> Self::Output;
}

/// Trait to compute the interaction a link of type `L` produces between two particles of type
/// `P`. Such implementations are used by the accumulation algorithms.
pub trait InteractionPair<L, P> {
    /// The computed interaction.
    type Output;

    /// Returns the interaction on the first and second particle, in that order.
    fn compute_pair(&mut self, link: L, pair: Between<P, P>) -> (Self::Output, Self::Output);
}

/// Commonly used types, re-exported.
pub mod prelude {
    pub use crate::{
        force::{compute_forces, compute_forces_into, SpringDamper, SpringForce},
        system::{Link, LinkId, Part, PartId, SpringConstants, System},
        vector::{Distance, Dot, Norm, Zero},
        Between, Error, Interaction, InteractionPair,
    };

    #[cfg(feature = "parallel")]
    pub use crate::parallel::ParallelCompute;
    pub use crate::sequential::SequentialCompute;
}
