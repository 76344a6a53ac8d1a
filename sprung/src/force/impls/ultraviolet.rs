use ultraviolet::{DVec2, DVec3, Vec2, Vec3};

crate::impl_zero!(Vec2, Vec2::zero());
crate::impl_zero!(Vec3, Vec3::zero());
crate::impl_zero!(DVec2, DVec2::zero());
crate::impl_zero!(DVec3, DVec3::zero());

crate::impl_dot!(Vec2, f32, |v1: Vec2, v2: Vec2| Vec2::dot(&v1, v2));
crate::impl_dot!(Vec3, f32, |v1: Vec3, v2: Vec3| Vec3::dot(&v1, v2));
crate::impl_dot!(DVec2, f64, |v1: DVec2, v2: DVec2| DVec2::dot(&v1, v2));
crate::impl_dot!(DVec3, f64, |v1: DVec3, v2: DVec3| DVec3::dot(&v1, v2));

crate::impl_norm!(Vec2, f32, |v: Vec2| v.mag_sq(), |v: Vec2| v.mag());
crate::impl_norm!(Vec3, f32, |v: Vec3| v.mag_sq(), |v: Vec3| v.mag());
crate::impl_norm!(DVec2, f64, |v: DVec2| v.mag_sq(), |v: DVec2| v.mag());
crate::impl_norm!(DVec3, f64, |v: DVec3| v.mag_sq(), |v: DVec3| v.mag());

crate::impl_spring_force_cpu_scalar!(Vec2, f32);
crate::impl_spring_force_cpu_scalar!(Vec3, f32);
crate::impl_spring_force_cpu_scalar!(DVec2, f64);
crate::impl_spring_force_cpu_scalar!(DVec3, f64);
