mod impls;

/// Damped spring interaction between the endpoints of a link.
pub mod spring_damper;

pub use spring_damper::SpringDamper;

use crate::{
    sequential::Accumulate,
    system::{Link, Part, System},
    vector::Zero,
};
use std::ops::AddAssign;

/// Trait for links that exert a force on their two endpoints of type `P`.
///
/// It is implemented for [`Link`] for every supported vector type. The force law is, with
/// `dp = position_i - position_j` and `d2 = dp · dp`:
///
/// - `spring = k * (1 - l / sqrt(d2))`,
/// - `damp_i = c * (velocity_i · dp) / d2` and `damp_j = c * (velocity_j · dp) / d2`,
/// - `force_i = (-spring - damp_i) * dp` and `force_j = (spring - damp_j) * dp`.
///
/// The spring component is opposite on the two endpoints, each endpoint is damped independently.
pub trait SpringForce<P> {
    /// The type of the computed forces.
    type Output;

    /// Returns the forces this link exerts on its first and second endpoint, in that order.
    ///
    /// When `CHECKED` is true, endpoints that share their position get a zero force. Otherwise the
    /// forces of such endpoints are not finite.
    fn spring_force<const CHECKED: bool>(
        &self,
        part_i: &P,
        part_j: &P,
    ) -> (Self::Output, Self::Output);
}

/// Returns the net force exerted by all the links of the system on each of its parts, indexed by
/// [`PartId`](crate::system::PartId).
///
/// Links whose endpoints coincide contribute no force. Refer to [`SpringDamper`] and
/// [`Accumulate`] for other choices.
///
/// ```
/// # use sprung::prelude::*;
/// # use glam::Vec3;
/// let mut system = System::<Vec3, f32>::new();
/// let a = system.create_part(Vec3::new(1.0, 0.0, 0.0));
/// let b = system.create_part(Vec3::new(-1.0, 0.0, 0.0));
/// system.create_link_with_rest_length(a, b, 1.0)?;
///
/// let forces = compute_forces(&system);
///
/// assert_eq!(forces, [Vec3::new(-0.5, 0.0, 0.0), Vec3::new(0.5, 0.0, 0.0)]);
/// # Ok::<(), sprung::Error>(())
/// ```
#[inline]
pub fn compute_forces<V, S>(system: &System<V, S>) -> Vec<V>
where
    V: Zero + AddAssign + Clone,
    Link<S>: SpringForce<Part<V, S>, Output = V>,
{
    let mut forces = Vec::with_capacity(system.part_count());
    compute_forces_into(system, &mut forces);
    forces
}

/// Writes the net force exerted by all the links of the system on each of its parts in the given
/// buffer and returns it.
///
/// The buffer is resized to the number of parts and zeroed before accumulation, so it can be
/// reused across simulation steps without reallocating.
#[inline]
pub fn compute_forces_into<'b, V, S>(
    system: &System<V, S>,
    forces: &'b mut Vec<V>,
) -> &'b mut Vec<V>
where
    V: Zero + AddAssign + Clone,
    Link<S>: SpringForce<Part<V, S>, Output = V>,
{
    Accumulate(SpringDamper::checked()).compute_into(system, forces)
}
