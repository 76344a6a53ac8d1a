use crate::{
    force::SpringForce,
    system::{Link, Part},
    Between, InteractionPair,
};

/// [`InteractionPair`] computing the spring and damping forces a [`Link`] exerts on its endpoints.
///
/// The force law is described in [`SpringForce`]. It is undefined when the endpoints of a link
/// share their position. With `CHECKED` set to true, such links are skipped and contribute no
/// force. With `CHECKED` set to false, the division is carried out and the forces of both
/// endpoints become infinite or NaN, leaving every other part untouched. If the endpoints of
/// links are guaranteed to be distinct, the unchecked computation is slightly cheaper.
///
/// ```
/// # use sprung::prelude::*;
/// # use glam::Vec2;
/// let mut system = System::<Vec2, f32>::new();
/// let a = system.create_part(Vec2::new(0.0, 1.0));
/// let b = system.create_part(Vec2::new(0.0, 3.0));
/// system.create_link_with_rest_length(a, b, 1.0)?;
///
/// system.part_mut(b)?.position = Vec2::new(0.0, 1.0);
///
/// let checked = system.forces(SpringDamper::checked());
/// let unchecked = system.forces(SpringDamper::unchecked());
///
/// assert_eq!(checked, [Vec2::ZERO, Vec2::ZERO]);
/// assert!(unchecked.iter().all(|force| !force.is_finite()));
/// # Ok::<(), sprung::Error>(())
/// ```
#[derive(Clone, Copy, Debug)]
pub struct SpringDamper<const CHECKED: bool>;

impl Default for SpringDamper<true> {
    #[inline]
    fn default() -> Self {
        Self::checked()
    }
}

impl SpringDamper<true> {
    /// Creates a new [`SpringDamper`] that skips links whose endpoints coincide.
    #[inline]
    pub const fn checked() -> Self {
        Self
    }
}

impl SpringDamper<false> {
    /// Creates a new [`SpringDamper`] that does not check if the endpoints of links coincide.
    ///
    /// Unless the endpoints of every link are guaranteed to have different positions, use
    /// [`SpringDamper::checked`] instead.
    #[inline]
    pub const fn unchecked() -> Self {
        Self
    }
}

impl<const CHECKED: bool, V, S> InteractionPair<&Link<S>, &Part<V, S>> for SpringDamper<CHECKED>
where
    Link<S>: SpringForce<Part<V, S>>,
{
    type Output = <Link<S> as SpringForce<Part<V, S>>>::Output;

    #[inline]
    fn compute_pair(
        &mut self,
        link: &Link<S>,
        Between(part_i, part_j): Between<&Part<V, S>, &Part<V, S>>,
    ) -> (Self::Output, Self::Output) {
        link.spring_force::<CHECKED>(part_i, part_j)
    }
}
