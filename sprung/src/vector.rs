use std::ops::Sub;

/// Trait for vectors that have a zero value.
pub trait Zero {
    /// Returns the zero vector.
    fn zero() -> Self;
}

/// Trait for computing the inner product of two vectors.
pub trait Dot {
    /// The type of the inner product.
    type Output;

    /// Computes the inner product of this vector and the given vector.
    fn dot(self, rhs: Self) -> <Self as Dot>::Output;
}

/// Trait for computing the norm of a vector.
pub trait Norm {
    /// The type of the norm.
    type Output;

    /// Computes the squared norm of the vector.
    fn norm_squared(self) -> <Self as Norm>::Output;

    /// Computes the norm of the vector.
    fn norm(self) -> <Self as Norm>::Output;
}

/// Trait for computing the Euclidean distance between two vectors.
pub trait Distance: Norm + Sub<Output = Self> + Sized {
    /// Returns the squared Euclidean distance between this vector and the given vector.
    #[inline]
    fn distance_squared(self, other: Self) -> <Self as Norm>::Output {
        (self - other).norm_squared()
    }

    /// Returns the Euclidean distance between this vector and the given vector.
    #[inline]
    fn distance(self, other: Self) -> <Self as Norm>::Output {
        (self - other).norm()
    }
}

impl<V: Norm + Sub<Output = V> + Sized> Distance for V {}
