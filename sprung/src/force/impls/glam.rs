use glam::{DVec2, DVec3, Vec2, Vec3, Vec3A};

crate::impl_zero!(Vec2, Vec2::default());
crate::impl_zero!(Vec3, Vec3::default());
crate::impl_zero!(Vec3A, Vec3A::default());
crate::impl_zero!(DVec2, DVec2::default());
crate::impl_zero!(DVec3, DVec3::default());

crate::impl_dot!(Vec2, f32, Vec2::dot);
crate::impl_dot!(Vec3, f32, Vec3::dot);
crate::impl_dot!(Vec3A, f32, Vec3A::dot);
crate::impl_dot!(DVec2, f64, DVec2::dot);
crate::impl_dot!(DVec3, f64, DVec3::dot);

crate::impl_norm!(Vec2, f32, Vec2::length_squared, Vec2::length);
crate::impl_norm!(Vec3, f32, Vec3::length_squared, Vec3::length);
crate::impl_norm!(Vec3A, f32, Vec3A::length_squared, Vec3A::length);
crate::impl_norm!(DVec2, f64, DVec2::length_squared, DVec2::length);
crate::impl_norm!(DVec3, f64, DVec3::length_squared, DVec3::length);

crate::impl_spring_force_cpu_scalar!(Vec2, f32);
crate::impl_spring_force_cpu_scalar!(Vec3, f32);
crate::impl_spring_force_cpu_scalar!(Vec3A, f32);
crate::impl_spring_force_cpu_scalar!(DVec2, f64);
crate::impl_spring_force_cpu_scalar!(DVec3, f64);
