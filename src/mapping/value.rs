//! Scalar and array inputs for the mapping functions
//!
//! [`Mappable`] is the one seam every conversion goes through: a function is
//! written once against a scalar closure and applied elementwise to whatever
//! the caller passed in. Borrowed inputs are never written to; the result is
//! always a new value of the same shape.

use ndarray::{Array, ArrayBase, ArrayView, Data, Dimension};
use num_traits::Float;

/// A scalar or a homogeneous collection of floats that can be mapped elementwise
pub trait Mappable {
    /// Element type
    type Elem: Float;

    /// Result of mapping, same shape as the input
    type Output;

    /// Apply `f` to every element
    fn map_each<F>(self, f: F) -> Self::Output
    where
        F: Fn(Self::Elem) -> Self::Elem;

    /// Clamp every element into `[min, max]`
    ///
    /// Collections compose `max(min(x, max), min)` and propagate NaN from
    /// either side. Scalars compare against each bound in turn instead.
    fn clamp_each(self, min: Self::Elem, max: Self::Elem) -> Self::Output
    where
        Self: Sized,
    {
        self.map_each(|x| maximum(minimum(x, max), min))
    }
}

macro_rules! impl_scalar {
    ($($t:ty),*) => {
        $(
            impl Mappable for $t {
                type Elem = $t;
                type Output = $t;

                #[inline]
                fn map_each<F>(self, f: F) -> $t
                where
                    F: Fn($t) -> $t,
                {
                    f(self)
                }

                #[inline]
                fn clamp_each(self, min: $t, max: $t) -> $t {
                    if self < min {
                        min
                    } else if self > max {
                        max
                    } else {
                        self
                    }
                }
            }
        )*
    };
}

impl_scalar!(f32, f64);

impl<'a, T: Float> Mappable for &'a [T] {
    type Elem = T;
    type Output = Vec<T>;

    fn map_each<F>(self, f: F) -> Vec<T>
    where
        F: Fn(T) -> T,
    {
        self.iter().map(|&x| f(x)).collect()
    }
}

impl<'a, T: Float> Mappable for &'a Vec<T> {
    type Elem = T;
    type Output = Vec<T>;

    fn map_each<F>(self, f: F) -> Vec<T>
    where
        F: Fn(T) -> T,
    {
        self.as_slice().map_each(f)
    }
}

impl<T: Float> Mappable for Vec<T> {
    type Elem = T;
    type Output = Vec<T>;

    fn map_each<F>(self, f: F) -> Vec<T>
    where
        F: Fn(T) -> T,
    {
        self.into_iter().map(f).collect()
    }
}

impl<T: Float, const N: usize> Mappable for [T; N] {
    type Elem = T;
    type Output = [T; N];

    fn map_each<F>(self, f: F) -> [T; N]
    where
        F: Fn(T) -> T,
    {
        self.map(f)
    }
}

impl<'a, A, S, D> Mappable for &'a ArrayBase<S, D>
where
    A: Float,
    S: Data<Elem = A>,
    D: Dimension,
{
    type Elem = A;
    type Output = Array<A, D>;

    fn map_each<F>(self, f: F) -> Array<A, D>
    where
        F: Fn(A) -> A,
    {
        self.mapv(f)
    }
}

impl<'a, A: Float, D: Dimension> Mappable for ArrayView<'a, A, D> {
    type Elem = A;
    type Output = Array<A, D>;

    fn map_each<F>(self, f: F) -> Array<A, D>
    where
        F: Fn(A) -> A,
    {
        self.mapv(f)
    }
}

impl<A: Float, D: Dimension> Mappable for Array<A, D> {
    type Elem = A;
    type Output = Array<A, D>;

    fn map_each<F>(mut self, f: F) -> Array<A, D>
    where
        F: Fn(A) -> A,
    {
        self.mapv_inplace(f);
        self
    }
}

/// Convert an `f64` constant into the element type
#[inline]
pub(crate) fn constant<T: Float>(x: f64) -> T {
    T::from(x).unwrap_or_else(T::nan)
}

/// Elementwise minimum that propagates NaN from either side
#[inline]
pub(crate) fn minimum<T: Float>(a: T, b: T) -> T {
    if a.is_nan() || b.is_nan() {
        T::nan()
    } else {
        a.min(b)
    }
}

/// Elementwise maximum that propagates NaN from either side
#[inline]
pub(crate) fn maximum<T: Float>(a: T, b: T) -> T {
    if a.is_nan() || b.is_nan() {
        T::nan()
    } else {
        a.max(b)
    }
}
