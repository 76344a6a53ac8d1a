#[cfg(feature = "glam")]
mod glam;
#[cfg(feature = "nalgebra")]
mod nalgebra;
#[cfg(feature = "ultraviolet")]
mod ultraviolet;

#[doc(hidden)]
#[macro_export]
macro_rules! impl_zero {
    ($vector: ty, $zero: expr $(, const $dim: ident)?) => {
        impl<$(const $dim: usize)?> $crate::vector::Zero for $vector {
            #[inline]
            fn zero() -> Self {
                $zero
            }
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! impl_dot {
    ($vector: ty, $scalar: ty, $dot_fn: expr $(, const $dim: ident)?) => {
        impl<$(const $dim: usize)?> $crate::vector::Dot for $vector {
            type Output = $scalar;

            #[inline]
            fn dot(self, rhs: Self) -> $scalar {
                $dot_fn(self, rhs)
            }
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! impl_norm {
    ($vector: ty, $scalar: ty, $norm_sq_fn: expr, $norm_fn: expr $(, const $dim: ident)?) => {
        impl<$(const $dim: usize)?> $crate::vector::Norm for $vector {
            type Output = $scalar;

            #[inline]
            fn norm_squared(self) -> $scalar {
                $norm_sq_fn(self)
            }

            #[inline]
            fn norm(self) -> $scalar {
                $norm_fn(self)
            }
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! impl_spring_force_cpu_scalar {
    ($vector: ty, $scalar: ty $(, const $dim: ident)?) => {
        impl<$(const $dim: usize)?> $crate::force::SpringForce<$crate::system::Part<$vector, $scalar>>
            for $crate::system::Link<$scalar>
        {
            type Output = $vector;

            #[inline]
            fn spring_force<const CHECKED: bool>(
                &self,
                part_i: &$crate::system::Part<$vector, $scalar>,
                part_j: &$crate::system::Part<$vector, $scalar>,
            ) -> (Self::Output, Self::Output) {
                let dp = part_i.position - part_j.position;
                let d2 = $crate::vector::Dot::dot(dp, dp);

                // Branch removed by the compiler when `CHECKED` is false.
                if CHECKED && d2 == 0.0 {
                    ::log::trace!(
                        "skipping link between coincident parts {} and {}",
                        self.i(),
                        self.j()
                    );

                    let zero = <$vector as $crate::vector::Zero>::zero();
                    return (zero, zero);
                }

                let spring = self.stiffness * (1.0 - self.rest_length / d2.sqrt());
                let damp_i = self.damping * $crate::vector::Dot::dot(part_i.velocity, dp) / d2;
                let damp_j = self.damping * $crate::vector::Dot::dot(part_j.velocity, dp) / d2;

                (dp * (-spring - damp_i), dp * (spring - damp_j))
            }
        }
    };
}

#[cfg(test)]
mod tests {
    #[doc(hidden)]
    #[macro_export]
    macro_rules! tests_spring_forces {
        ($vector: ty, $scalar: ident, $new: expr, $name: ident) => {
            mod $name {
                use super::*;
                use $crate::{
                    force::{SpringDamper, SpringForce},
                    sequential::{Accumulate, SequentialCompute},
                    system::{SpringConstants, System},
                    vector::{Dot, Norm, Zero},
                    Interaction,
                };

                const EPSILON: $scalar = 1e-6;

                fn vector(x: $scalar, y: $scalar) -> $vector {
                    $new(x, y)
                }

                fn assert_close(computed: $vector, expected: $vector) {
                    let error = Norm::norm_squared(computed - expected);
                    assert!(
                        error <= EPSILON,
                        "{computed:?} differs from {expected:?}"
                    );
                }

                fn two_parts() -> System<$vector, $scalar> {
                    let mut system = System::new();
                    system.create_part(vector(1.0, 0.0));
                    system.create_part(vector(-1.0, 0.0));
                    system
                }

                fn linked_pair<V, S>(position_i: V, position_j: V) -> System<V, S>
                where
                    V: Zero + Norm<Output = S> + std::ops::Sub<Output = V> + Clone,
                    S: From<f32> + Clone,
                {
                    let mut system = System::new();
                    let i = system.create_part(position_i);
                    let j = system.create_part(position_j);
                    system.create_link(i, j).unwrap();
                    system
                }

                fn mesh() -> System<$vector, $scalar> {
                    let mut system = System::new();
                    let positions = [
                        (0.0, 0.0),
                        (1.5, 0.2),
                        (-0.7, 2.0),
                        (3.0, -1.0),
                        (0.4, -2.5),
                    ];

                    for (x, y) in positions {
                        let id = system.create_part(vector(x, y));
                        system.part_mut(id).unwrap().velocity = vector(0.3 * y, -0.2 * x);
                    }

                    let constants = SpringConstants::new(1.5, 0.25);
                    for (i, j, l) in [(0, 1, 1.0), (1, 2, 2.5), (2, 0, 0.5), (3, 1, 4.0), (4, 0, 2.5), (3, 4, 1.0)] {
                        system.create_link_with(i, j, Some(l), constants).unwrap();
                    }

                    system
                }

                #[test]
                fn no_links() {
                    let forces = two_parts().forces(SpringDamper::checked());

                    assert_eq!(forces.len(), 2);
                    assert_close(forces[0], vector(0.0, 0.0));
                    assert_close(forces[1], vector(0.0, 0.0));
                }

                #[test]
                fn dot_product() {
                    assert_eq!(Dot::dot(vector(1.0, 2.0), vector(3.0, 4.0)), 11.0);
                    assert_eq!(Dot::dot(vector(1.0, 0.0), vector(0.0, 1.0)), 0.0);
                }

                #[test]
                fn automatic_rest_length() {
                    let system = linked_pair(vector(0.5, -1.0), vector(3.5, 3.0));
                    let rest_length: $scalar = system.link(0).unwrap().rest_length;

                    assert!((rest_length - 5.0).abs() <= EPSILON);
                }

                #[test]
                fn rest_length_equilibrium() {
                    let mut system = two_parts();
                    system.create_link(0, 1).unwrap();

                    for force in system.forces(SpringDamper::unchecked()) {
                        assert_close(force, vector(0.0, 0.0));
                    }
                }

                #[test]
                fn stretched_link() {
                    let mut system = two_parts();
                    system.create_link_with_rest_length(0, 1, 1.0).unwrap();

                    let forces = $crate::force::compute_forces(&system);

                    assert_close(forces[0], vector(-0.5, 0.0));
                    assert_close(forces[1], vector(0.5, 0.0));
                }

                #[test]
                fn compressed_link() {
                    let mut system = two_parts();
                    system.create_link_with_rest_length(0, 1, 4.0).unwrap();

                    // spring = 0.5 * (1 - 4 / 2) = -0.5, along dp = (2, 0).
                    let forces = $crate::force::compute_forces(&system);

                    assert_close(forces[0], vector(1.0, 0.0));
                    assert_close(forces[1], vector(-1.0, 0.0));
                }

                #[test]
                fn damping() {
                    let mut system = two_parts();
                    system.create_link(0, 1).unwrap();
                    system.part_mut(0).unwrap().velocity = vector(1.0, 0.0);

                    // At rest length, only part 0 moves along the link:
                    // damp_i = 0.5 * (1 * 2) / 4 = 0.25, damp_j = 0.
                    let forces = $crate::force::compute_forces(&system);

                    assert_close(forces[0], vector(-0.5, 0.0));
                    assert_close(forces[1], vector(0.0, 0.0));
                }

                #[test]
                fn orthogonal_velocity_is_not_damped() {
                    let mut system = two_parts();
                    system.create_link(0, 1).unwrap();
                    system.part_mut(0).unwrap().velocity = vector(0.0, 3.0);
                    system.part_mut(1).unwrap().velocity = vector(0.0, -3.0);

                    for force in $crate::force::compute_forces(&system) {
                        assert_close(force, vector(0.0, 0.0));
                    }
                }

                #[test]
                fn pairwise_spring_antisymmetry() {
                    let mut system = System::<$vector, $scalar>::new();
                    let a = system.create_part(vector(0.3, -1.2));
                    let b = system.create_part(vector(2.1, 0.7));
                    system.create_link_with_rest_length(a, b, 0.8).unwrap();

                    let forces = system.forces(SpringDamper::checked());

                    let dp = vector(0.3 - 2.1, -1.2 - 0.7);
                    let d = Norm::norm(dp);
                    let spring = 0.5 * (1.0 - 0.8 / d);

                    assert_close(forces[0] + forces[1], vector(0.0, 0.0));
                    assert_close(forces[0], dp * -spring);
                    assert_close(forces[1], dp * spring);
                }

                #[test]
                fn accumulation_is_additive() {
                    let system = mesh();
                    let forces = system.forces(SpringDamper::checked());

                    let mut expected = vec![vector(0.0, 0.0); system.part_count()];
                    for link in system.links() {
                        let (i, j) = (link.i() as usize, link.j() as usize);
                        let (force_i, force_j) = link
                            .spring_force::<true>(&system.parts()[i], &system.parts()[j]);
                        expected[i] = expected[i] + force_i;
                        expected[j] = expected[j] + force_j;
                    }

                    assert_eq!(forces.len(), expected.len());
                    for (computed, expected) in forces.into_iter().zip(expected) {
                        assert_close(computed, expected);
                    }
                }

                #[test]
                fn deterministic() {
                    let system = mesh();
                    let mut accumulate = Accumulate(SpringDamper::checked());

                    assert_eq!(accumulate.compute(&system), accumulate.compute(&system));
                }

                #[test]
                fn reuse_buffer() {
                    let system = mesh();
                    let mut buffer = vec![vector(9.0, 9.0); 11];

                    $crate::force::compute_forces_into(&system, &mut buffer);
                    assert_eq!(buffer, $crate::force::compute_forces(&system));

                    let mut small = vec![vector(9.0, 9.0); 1];
                    system.forces_into(SpringDamper::checked(), &mut small);
                    assert_eq!(small, buffer);
                }

                #[test]
                fn degenerate_link() {
                    let mut system = mesh();
                    let healthy = system.forces(SpringDamper::checked());

                    let extra = system.create_part(vector(10.0, 10.0));
                    let other = system.create_part(vector(11.0, 10.0));
                    system.create_link_with_rest_length(extra, other, 1.0).unwrap();
                    system.part_mut(other).unwrap().position = vector(10.0, 10.0);

                    let checked = system.forces(SpringDamper::checked());
                    assert_close(checked[extra as usize], vector(0.0, 0.0));
                    assert_close(checked[other as usize], vector(0.0, 0.0));

                    let unchecked = system.forces(SpringDamper::unchecked());
                    assert!(!Norm::norm_squared(unchecked[extra as usize]).is_finite());
                    assert!(!Norm::norm_squared(unchecked[other as usize]).is_finite());

                    for ((checked, unchecked), healthy) in checked.iter().zip(&unchecked).zip(healthy) {
                        assert_eq!(*checked, healthy);
                        assert_eq!(*unchecked, healthy);
                    }
                }

                #[cfg(feature = "parallel")]
                #[test]
                fn parallel_agrees() {
                    use $crate::parallel::ParallelCompute;

                    let system = mesh();
                    let sequential = system.forces(SpringDamper::checked());
                    let parallel = system.par_forces(SpringDamper::checked());

                    assert_eq!(sequential.len(), parallel.len());
                    for (sequential, parallel) in sequential.into_iter().zip(parallel) {
                        assert_close(sequential, parallel);
                    }
                }
            }
        };
    }
}
