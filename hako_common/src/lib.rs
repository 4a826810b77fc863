use num::cast::{FromPrimitive, ToPrimitive};
use num::traits::{Float, FloatConst, Num};
use std::fmt::{Debug, Display};

/// Generic type that can be stored in the lib containers
pub trait ValueType:
    Num + Mini + Maxi + PartialOrd + ToPrimitive + FromPrimitive + Copy + Debug
{
}

// Impl for all matching types
impl<T> ValueType for T where
    T: Num + Mini + Maxi + PartialOrd + ToPrimitive + FromPrimitive + Copy + Debug
{
}

/// Floating point [ValueType] that the shape predicates and metrics are defined over
pub trait FloatValueType: ValueType + Float + FloatConst + Display {}

impl<T> FloatValueType for T where T: ValueType + Float + FloatConst + Display {}

/// Component minimum that propagates NaN, see [nan_min]
pub trait Mini {
    fn mini(&self, other: Self) -> Self;
}

/// Component maximum that propagates NaN, see [nan_max]
pub trait Maxi {
    fn maxi(&self, other: Self) -> Self;
}

macro_rules! impl_mini_maxi_float {
    ( $( $t:ty ),+ ) => {
        $(
            impl Mini for $t {
                fn mini(&self, other: $t) -> $t {
                    nan_min(*self, other)
                }
            }

            impl Maxi for $t {
                fn maxi(&self, other: $t) -> $t {
                    nan_max(*self, other)
                }
            }
        )*
    }
}
impl_mini_maxi_float!(f32, f64);

macro_rules! impl_mini_maxi_integer {
    ( $( $t:ty ),+ ) => {
        $(
            impl Mini for $t {
                fn mini(&self, other: $t) -> $t {
                    *self.min(&other)
                }
            }

            impl Maxi for $t {
                fn maxi(&self, other: $t) -> $t {
                    *self.max(&other)
                }
            }
        )*
    }
}
impl_mini_maxi_integer!(u8, u16, u32, u64, i8, i16, i32, i64);

/// Returns the smaller of `a` and `b`, or NaN if either one is NaN.
///
/// `f32::min` and `f64::min` return the other argument on NaN.
#[inline]
pub fn nan_min<T>(a: T, b: T) -> T
where
    T: Float,
{
    if a.is_nan() || b.is_nan() {
        T::nan()
    } else if b < a {
        b
    } else {
        a
    }
}

/// Returns the larger of `a` and `b`, or NaN if either one is NaN.
#[inline]
pub fn nan_max<T>(a: T, b: T) -> T
where
    T: Float,
{
    if a.is_nan() || b.is_nan() {
        T::nan()
    } else if b > a {
        b
    } else {
        a
    }
}

/// Returns `2` without going through a fallible cast.
#[inline]
pub fn two<T>() -> T
where
    T: Num,
{
    T::one() + T::one()
}

/// Returns `a - b` if `a > b` and `0` otherwise.
///
/// Unlike `(a - b).max(0)`, a NaN in either argument is returned as NaN instead of being
/// swallowed by the comparison.
#[inline]
pub fn positive_difference<T>(a: T, b: T) -> T
where
    T: Float,
{
    if a.is_nan() || b.is_nan() {
        T::nan()
    } else if a > b {
        a - b
    } else {
        T::zero()
    }
}

/// Clamps `v` into `[lo, hi]`.
///
/// NaN falls through both comparisons and is returned as is.
#[inline]
pub fn clamp<T>(v: T, lo: T, hi: T) -> T
where
    T: PartialOrd,
{
    if v < lo {
        lo
    } else if v > hi {
        hi
    } else {
        v
    }
}
