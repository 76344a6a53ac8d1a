use crate::{
    system::{Link, Part, System},
    vector::Zero,
    Between, Interaction, InteractionPair,
};
use rayon::iter::{IntoParallelRefIterator, ParallelIterator};
use std::ops::AddAssign;

/// Trait to compute the forces acting on the parts of a system using multiple CPU threads.
pub trait ParallelCompute<T>: Sized {
    /// Returns the net force exerted on each part by all the links using a parallel accumulation.
    ///
    /// Refer to [`Accumulate`] for more information.
    #[inline]
    fn par_forces(self, interaction: T) -> <Accumulate<T> as Interaction<Self>>::Output
    where
        Accumulate<T>: Interaction<Self>,
    {
        Accumulate(interaction).compute(self)
    }
}

impl<T, V, S> ParallelCompute<T> for &System<V, S> {}

/// Accumulation of the pair-wise interaction of every link using multiple CPU threads with
/// [rayon](https://github.com/rayon-rs/rayon).
///
/// The links are split between threads, each accumulating into its own force buffer, and the
/// buffers are summed at the end. The result only differs from
/// [`sequential::Accumulate`](crate::sequential::Accumulate) by the order in which floating point
/// contributions are summed.
///
/// To use parts of type `Part<V, S>` with this algorithm, the interaction `T` should implement
/// [`InteractionPair<&Link<S>, &Part<V, S>>`] with `Output = V`.
#[derive(Clone, Copy, Default, Debug)]
pub struct Accumulate<T>(pub T);

impl<T> Accumulate<T> {
    /// Writes the net force on each part of the system in the given buffer and returns it.
    ///
    /// The buffer is cleared and refilled with one force per part, keeping its allocation.
    #[inline]
    pub fn compute_into<'b, V, S>(
        &mut self,
        system: &System<V, S>,
        forces: &'b mut Vec<V>,
    ) -> &'b mut Vec<V>
    where
        V: Zero + AddAssign + Clone + Send + Sync,
        S: Sync,
        T: for<'a> InteractionPair<&'a Link<S>, &'a Part<V, S>, Output = V> + Clone + Send + Sync,
    {
        let parts = system.parts();
        let len = parts.len();
        let interaction = &self.0;

        let summed = system
            .links()
            .par_iter()
            .fold(
                || (interaction.clone(), vec![V::zero(); len]),
                |(mut interaction, mut forces), link| {
                    let (i, j) = (link.i() as usize, link.j() as usize);
                    let (force_i, force_j) =
                        interaction.compute_pair(link, Between(&parts[i], &parts[j]));

                    forces[i] += force_i;
                    forces[j] += force_j;

                    (interaction, forces)
                },
            )
            .map(|(_, forces)| forces)
            .reduce(
                || vec![V::zero(); len],
                |mut lhs, rhs| {
                    lhs.iter_mut().zip(rhs).for_each(|(lhs, rhs)| *lhs += rhs);
                    lhs
                },
            );

        forces.clear();
        forces.extend(summed);
        forces
    }
}

impl<V, S, T> Interaction<&System<V, S>> for Accumulate<T>
where
    V: Zero + AddAssign + Clone + Send + Sync,
    S: Sync,
    T: for<'a> InteractionPair<&'a Link<S>, &'a Part<V, S>, Output = V> + Clone + Send + Sync,
{
    type Output = Vec<V>;

    #[inline]
    fn compute(&mut self, system: &System<V, S>) -> Self::Output {
        let mut forces = Vec::new();
        self.compute_into(system, &mut forces);
        forces
    }
}

#[cfg(all(test, feature = "glam"))]
mod tests {
    use super::*;
    use crate::{force::SpringDamper, sequential::SequentialCompute};
    use glam::DVec3;
    use rand::prelude::*;

    fn random_system(rng: &mut StdRng, parts: usize, links: usize) -> System<DVec3, f64> {
        let mut system = System::with_capacity(parts, links);

        for _ in 0..parts {
            let position = DVec3::from([0.0; 3].map(|_: f64| rng.gen_range(-1e2..1e2)));
            let velocity = DVec3::from([0.0; 3].map(|_: f64| rng.gen_range(-1.0..1.0)));
            system.create_part_with(position, velocity, 1.0);
        }

        while system.link_count() < links {
            let i = rng.gen_range(0..parts as u32);
            let j = rng.gen_range(0..parts as u32);

            if i != j {
                let rest_length = rng.gen_range(0.0..50.0);
                system.create_link_with_rest_length(i, j, rest_length).unwrap();
            }
        }

        system
    }

    #[test]
    fn agrees_with_sequential() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        let system = random_system(&mut rng, 500, 2_000);

        let sequential = system.forces(SpringDamper::checked());
        let parallel = system.par_forces(SpringDamper::checked());

        assert_eq!(sequential.len(), parallel.len());
        for (sequential, parallel) in sequential.into_iter().zip(parallel) {
            assert!(sequential.abs_diff_eq(parallel, 1e-9 * sequential.length().max(1.0)));
        }
    }

    #[test]
    fn no_links() {
        let mut rng = StdRng::seed_from_u64(7);
        let system = random_system(&mut rng, 10, 0);

        assert_eq!(system.par_forces(SpringDamper::checked()), vec![DVec3::ZERO; 10]);
    }

    #[test]
    fn reuse_buffer() {
        let mut rng = StdRng::seed_from_u64(42);
        let system = random_system(&mut rng, 64, 128);
        let mut accumulate = Accumulate(SpringDamper::checked());

        let mut buffer = vec![DVec3::splat(f64::NAN); 3];
        accumulate.compute_into(&system, &mut buffer);

        assert_eq!(buffer.len(), 64);
        assert!(buffer.iter().all(|force| force.is_finite()));

        let mut large = Vec::with_capacity(256);
        large.push(DVec3::splat(f64::NAN));
        let allocation = large.as_ptr();
        accumulate.compute_into(&system, &mut large);

        assert_eq!(large.as_ptr(), allocation);
        assert_eq!(large.len(), buffer.len());
        for (large, buffer) in large.into_iter().zip(buffer) {
            assert!(large.abs_diff_eq(buffer, 1e-9 * buffer.length().max(1.0)));
        }
    }
}
