use crate::{
    system::{Link, Part, System},
    vector::Zero,
    Between, Interaction, InteractionPair,
};
use std::ops::AddAssign;

/// Trait to compute the forces acting on the parts of a system using one CPU thread.
pub trait SequentialCompute<T>: Sized {
    /// Returns the net force exerted on each part by all the links, using the given interaction.
    ///
    /// Refer to [`Accumulate`] for more information.
    #[inline]
    fn forces(self, interaction: T) -> <Accumulate<T> as Interaction<Self>>::Output
    where
        Accumulate<T>: Interaction<Self>,
    {
        Accumulate(interaction).compute(self)
    }

    /// Writes the net force exerted on each part by all the links in the given buffer, using the
    /// given interaction.
    ///
    /// Refer to [`Accumulate::compute_into`] for more information.
    #[inline]
    fn forces_into<V>(self, interaction: T, forces: &mut Vec<V>) -> &mut Vec<V>
    where
        Accumulate<T>: AccumulateInto<Self, V>,
    {
        Accumulate(interaction).accumulate_into(self, forces)
    }
}

impl<T, V, S> SequentialCompute<T> for &System<V, S> {}

/// Trait for algorithms able to accumulate forces into a caller-owned buffer.
pub trait AccumulateInto<Storage, V> {
    /// Resizes and zeroes the buffer, then accumulates the forces of the storage into it.
    fn accumulate_into<'b>(&mut self, storage: Storage, forces: &'b mut Vec<V>) -> &'b mut Vec<V>;
}

/// Accumulation of the pair-wise interaction of every link using one CPU thread.
///
/// Each link contributes to the force of its two endpoints, and contributions of all the links
/// sharing a part add up. The computation reads the system and writes nothing but the output.
///
/// To use parts of type `Part<V, S>` with this algorithm, the interaction `T` should implement
/// [`InteractionPair<&Link<S>, &Part<V, S>>`] with `Output = V`.
#[derive(Clone, Copy, Default, Debug)]
pub struct Accumulate<T>(pub T);

impl<T> Accumulate<T> {
    /// Writes the net force on each part of the system in the given buffer and returns it.
    ///
    /// The buffer is resized to [`System::part_count`] and zeroed before the accumulation. Passing
    /// the same buffer every simulation step avoids any allocation.
    #[inline]
    pub fn compute_into<'b, V, S>(
        &mut self,
        system: &System<V, S>,
        forces: &'b mut Vec<V>,
    ) -> &'b mut Vec<V>
    where
        V: Zero + AddAssign + Clone,
        T: for<'a> InteractionPair<&'a Link<S>, &'a Part<V, S>, Output = V>,
    {
        let parts = system.parts();

        forces.clear();
        forces.resize(parts.len(), V::zero());

        for link in system.links() {
            let (i, j) = (link.i() as usize, link.j() as usize);
            let (force_i, force_j) = self.0.compute_pair(link, Between(&parts[i], &parts[j]));

            forces[i] += force_i;
            forces[j] += force_j;
        }

        forces
    }
}

impl<V, S, T> Interaction<&System<V, S>> for Accumulate<T>
where
    V: Zero + AddAssign + Clone,
    T: for<'a> InteractionPair<&'a Link<S>, &'a Part<V, S>, Output = V>,
{
    type Output = Vec<V>;

    #[inline]
    fn compute(&mut self, system: &System<V, S>) -> Self::Output {
        let mut forces = Vec::with_capacity(system.part_count());
        self.compute_into(system, &mut forces);
        forces
    }
}

impl<V, S, T> AccumulateInto<&System<V, S>, V> for Accumulate<T>
where
    V: Zero + AddAssign + Clone,
    T: for<'a> InteractionPair<&'a Link<S>, &'a Part<V, S>, Output = V>,
{
    #[inline]
    fn accumulate_into<'b>(
        &mut self,
        system: &System<V, S>,
        forces: &'b mut Vec<V>,
    ) -> &'b mut Vec<V> {
        self.compute_into(system, forces)
    }
}
