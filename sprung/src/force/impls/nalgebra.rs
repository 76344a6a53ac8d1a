use nalgebra::SVector;

crate::impl_zero!(SVector<f32, D>, SVector::<f32, D>::zeros(), const D);
crate::impl_zero!(SVector<f64, D>, SVector::<f64, D>::zeros(), const D);

crate::impl_dot!(
    SVector<f32, D>,
    f32,
    |v1: SVector<f32, D>, v2: SVector<f32, D>| nalgebra::Matrix::dot(&v1, &v2),
    const D
);
crate::impl_dot!(
    SVector<f64, D>,
    f64,
    |v1: SVector<f64, D>, v2: SVector<f64, D>| nalgebra::Matrix::dot(&v1, &v2),
    const D
);

crate::impl_norm!(
    SVector<f32, D>,
    f32,
    |v: SVector<f32, D>| nalgebra::Matrix::norm_squared(&v),
    |v: SVector<f32, D>| nalgebra::Matrix::norm(&v),
    const D
);
crate::impl_norm!(
    SVector<f64, D>,
    f64,
    |v: SVector<f64, D>| nalgebra::Matrix::norm_squared(&v),
    |v: SVector<f64, D>| nalgebra::Matrix::norm(&v),
    const D
);

crate::impl_spring_force_cpu_scalar!(SVector<f32, D>, f32, const D);
crate::impl_spring_force_cpu_scalar!(SVector<f64, D>, f64, const D);

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::{Vector2, Vector3, Vector4};

    crate::tests_spring_forces!(SVector<f32, 2>, f32, |x, y| Vector2::new(x, y), vec2);
    crate::tests_spring_forces!(SVector<f32, 3>, f32, |x, y| Vector3::new(x, y, 0.0), vec3);
    crate::tests_spring_forces!(SVector<f32, 4>, f32, |x, y| Vector4::new(0.0, x, 0.0, y), vec4);
    crate::tests_spring_forces!(SVector<f64, 3>, f64, |x, y| Vector3::new(x, y, 0.0), dvec3);
}
