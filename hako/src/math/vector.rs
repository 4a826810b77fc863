use approx::{AbsDiffEq, RelativeEq};
use std::{
    array,
    fmt::{Display, Formatter},
    ops::{
        Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
    },
};

use hako_common::{clamp, FloatValueType, ValueType};

/// A `D`-dimensional vector.
///
/// Points are vectors too, see [Point].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Vector<T, const D: usize>
where
    T: ValueType,
{
    /// The components of the vector.
    pub e: [T; D],
}

/// A point in `D`-dimensional space.
pub type Point<T, const D: usize> = Vector<T, D>;
pub type Vec2<T> = Vector<T, 2>;
pub type Vec3<T> = Vector<T, 3>;
pub type Point2<T> = Point<T, 2>;
pub type Point3<T> = Point<T, 3>;

/// Shorthand constructor
#[inline]
pub fn vec2<T>(x: T, y: T) -> Vec2<T>
where
    T: ValueType,
{
    Vector::new([x, y])
}

/// Shorthand constructor
#[inline]
pub fn vec3<T>(x: T, y: T, z: T) -> Vec3<T>
where
    T: ValueType,
{
    Vector::new([x, y, z])
}

/// Shorthand constructor
#[inline]
pub fn point2<T>(x: T, y: T) -> Point2<T>
where
    T: ValueType,
{
    vec2(x, y)
}

/// Shorthand constructor
#[inline]
pub fn point3<T>(x: T, y: T, z: T) -> Point3<T>
where
    T: ValueType,
{
    vec3(x, y, z)
}

impl<T, const D: usize> Vector<T, D>
where
    T: ValueType,
{
    /// Creates a new `Vector`.
    #[inline]
    pub fn new(e: [T; D]) -> Self {
        Self { e }
    }

    /// Creates a new `Vector` with all components set to zero.
    #[inline]
    pub fn zeros() -> Self {
        Self { e: [T::zero(); D] }
    }

    /// Creates a new `Vector` with all components set to one.
    #[inline]
    pub fn ones() -> Self {
        Self { e: [T::one(); D] }
    }

    /// Checks if this `Vector` contains NaNs.
    #[inline]
    #[allow(clippy::eq_op)]
    pub fn has_nans(&self) -> bool {
        // Not all T have is_nan() so rely on NaN != NaN
        self.e.iter().any(|&c| c != c)
    }

    /// Calculates the dot product of this `Vector` and `other`.
    #[inline]
    pub fn dot(&self, other: Self) -> T {
        self.e
            .iter()
            .zip(other.e.iter())
            .fold(T::zero(), |acc, (&a, &b)| acc + a * b)
    }

    /// Calculates the squared length of this `Vector`.
    #[inline]
    pub fn len_sqr(&self) -> T {
        self.dot(*self)
    }

    /// Calculates the squared distance between this `Vector` and `other`.
    #[inline]
    pub fn dist_sqr(&self, other: Self) -> T {
        (*self - other).len_sqr()
    }

    /// Returns the component-wise minimum of this `Vector` and `other`.
    ///
    /// A NaN in either input stays NaN in the result.
    #[inline]
    pub fn min(&self, other: Self) -> Self {
        Self {
            e: array::from_fn(|i| self.e[i].mini(other.e[i])),
        }
    }

    /// Returns the component-wise maximum of this `Vector` and `other`.
    #[inline]
    pub fn max(&self, other: Self) -> Self {
        Self {
            e: array::from_fn(|i| self.e[i].maxi(other.e[i])),
        }
    }

    /// Clamps each component of this `Vector` into `[lo, hi]`.
    ///
    /// NaN components are kept as they are.
    #[inline]
    pub fn clamp(&self, lo: Self, hi: Self) -> Self {
        Self {
            e: array::from_fn(|i| clamp(self.e[i], lo.e[i], hi.e[i])),
        }
    }

    /// Finds the value of the minimum component in this `Vector`.
    #[inline]
    pub fn min_comp(&self) -> T {
        debug_assert!(!self.has_nans());

        self.e.iter().skip(1).fold(self.e[0], |acc, &c| acc.mini(c))
    }

    /// Finds the value of the maximum component in this `Vector`.
    #[inline]
    pub fn max_comp(&self) -> T {
        debug_assert!(!self.has_nans());

        self.e.iter().skip(1).fold(self.e[0], |acc, &c| acc.maxi(c))
    }
}

impl<T, const D: usize> Vector<T, D>
where
    T: FloatValueType,
{
    /// Calculates the length of this `Vector`.
    #[inline]
    pub fn len(&self) -> T {
        self.len_sqr().sqrt()
    }

    /// Calculates the distance between this `Vector` and `other`.
    #[inline]
    pub fn dist(&self, other: Self) -> T {
        (*self - other).len()
    }

    /// Returns the normalized version of this `Vector`.
    ///
    /// A zero vector normalizes into NaNs.
    #[inline]
    pub fn normalized(&self) -> Self {
        *self / self.len()
    }

    /// Returns the component-wise absolute value of this `Vector`.
    #[inline]
    pub fn abs(&self) -> Self {
        Self {
            e: array::from_fn(|i| self.e[i].abs()),
        }
    }
}

impl<T> Vector<T, 3>
where
    T: ValueType,
{
    /// Calculates the cross product of this `Vec3` and `other`.
    #[inline]
    pub fn cross(&self, other: Self) -> Self {
        let [ax, ay, az] = self.e;
        let [bx, by, bz] = other.e;
        vec3(ay * bz - az * by, az * bx - ax * bz, ax * by - ay * bx)
    }
}

impl<T, const D: usize> From<T> for Vector<T, D>
where
    T: ValueType,
{
    fn from(v: T) -> Self {
        Self { e: [v; D] }
    }
}

impl<T, const D: usize> From<[T; D]> for Vector<T, D>
where
    T: ValueType,
{
    fn from(e: [T; D]) -> Self {
        Self { e }
    }
}

impl<T, const D: usize> Index<usize> for Vector<T, D>
where
    T: ValueType,
{
    type Output = T;

    #[inline]
    fn index(&self, i: usize) -> &T {
        &self.e[i]
    }
}

impl<T, const D: usize> IndexMut<usize> for Vector<T, D>
where
    T: ValueType,
{
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut T {
        &mut self.e[i]
    }
}

impl<T, const D: usize> Neg for Vector<T, D>
where
    T: ValueType + Neg<Output = T>,
{
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self {
            e: self.e.map(|c| -c),
        }
    }
}

impl<T, const D: usize> Add for Vector<T, D>
where
    T: ValueType,
{
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Self {
            e: array::from_fn(|i| self.e[i] + other.e[i]),
        }
    }
}

impl<T, const D: usize> Sub for Vector<T, D>
where
    T: ValueType,
{
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Self {
            e: array::from_fn(|i| self.e[i] - other.e[i]),
        }
    }
}

impl<T, const D: usize> Mul<T> for Vector<T, D>
where
    T: ValueType,
{
    type Output = Self;

    #[inline]
    fn mul(self, s: T) -> Self {
        Self {
            e: self.e.map(|c| c * s),
        }
    }
}

impl<T, const D: usize> Div<T> for Vector<T, D>
where
    T: ValueType,
{
    type Output = Self;

    #[inline]
    fn div(self, s: T) -> Self {
        Self {
            e: self.e.map(|c| c / s),
        }
    }
}

impl<T, const D: usize> AddAssign for Vector<T, D>
where
    T: ValueType,
{
    #[inline]
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl<T, const D: usize> SubAssign for Vector<T, D>
where
    T: ValueType,
{
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        *self = *self - other;
    }
}

impl<T, const D: usize> MulAssign<T> for Vector<T, D>
where
    T: ValueType,
{
    #[inline]
    fn mul_assign(&mut self, s: T) {
        *self = *self * s;
    }
}

impl<T, const D: usize> DivAssign<T> for Vector<T, D>
where
    T: ValueType,
{
    #[inline]
    fn div_assign(&mut self, s: T) {
        *self = *self / s;
    }
}

impl<T, const D: usize> Display for Vector<T, D>
where
    T: ValueType + Display,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "(")?;
        for (i, c) in self.e.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", c)?;
        }
        write!(f, ")")
    }
}

impl<T, const D: usize> AbsDiffEq for Vector<T, D>
where
    T: FloatValueType + AbsDiffEq<Epsilon = T>,
{
    type Epsilon = T::Epsilon;

    fn default_epsilon() -> Self::Epsilon {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.e
            .iter()
            .zip(other.e.iter())
            .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

impl<T, const D: usize> RelativeEq for Vector<T, D>
where
    T: FloatValueType + RelativeEq + AbsDiffEq<Epsilon = T>,
{
    fn default_max_relative() -> Self::Epsilon {
        T::default_max_relative()
    }

    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        self.e
            .iter()
            .zip(other.e.iter())
            .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
    }
}
