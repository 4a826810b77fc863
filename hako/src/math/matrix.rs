use approx::{AbsDiffEq, RelativeEq};
use std::{array, ops::Mul};

use hako_common::FloatValueType;

use super::vector::{Vec3, Vector};

/// A row-major `D`x`D` `Matrix`
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Matrix<T, const D: usize>
where
    T: FloatValueType,
{
    /// Raw values in row-major order.
    pub m: [[T; D]; D],
}

impl<T, const D: usize> Matrix<T, D>
where
    T: FloatValueType,
{
    /// Creates a new `Matrix`.
    pub fn new(m: [[T; D]; D]) -> Self {
        let ret = Self { m };
        debug_assert!(!ret.has_nans());
        ret
    }

    /// Creates a new identity `Matrix`.
    pub fn identity() -> Self {
        Self {
            m: array::from_fn(|row| {
                array::from_fn(|col| if row == col { T::one() } else { T::zero() })
            }),
        }
    }

    /// Creates a new `Matrix` filled with zeroes.
    pub fn zeros() -> Self {
        Self {
            m: [[T::zero(); D]; D],
        }
    }

    /// Creates a new `Matrix` with the given vectors as its columns.
    pub fn from_cols(cols: [Vector<T, D>; D]) -> Self {
        Self::new(array::from_fn(|row| array::from_fn(|col| cols[col][row])))
    }

    /// Checks if this `Matrix` contains NaNs.
    pub fn has_nans(&self) -> bool {
        // NaNs are the rare special case so no need to early out
        self.m
            .iter()
            .flat_map(|row| row.iter().map(|t| t.is_nan()))
            .any(|p| p)
    }

    /// Returns the `i`th row of this `Matrix`.
    pub fn row(&self, i: usize) -> Vector<T, D> {
        Vector::new(self.m[i])
    }

    /// Returns the `i`th column of this `Matrix`.
    pub fn col(&self, i: usize) -> Vector<T, D> {
        Vector::new(array::from_fn(|row| self.m[row][i]))
    }

    /// Returns the transpose of this `Matrix`.
    pub fn transposed(&self) -> Self {
        Self {
            m: array::from_fn(|row| array::from_fn(|col| self.m[col][row])),
        }
    }

    /// Returns the element-wise absolute value of this `Matrix`.
    pub fn abs(&self) -> Self {
        Self {
            m: self.m.map(|row| row.map(|t| t.abs())),
        }
    }
}

impl<T> Matrix<T, 2>
where
    T: FloatValueType,
{
    /// Creates a counter-clockwise rotation by `angle` radians.
    pub fn rotation_2d(angle: T) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self::new([[cos, -sin], [sin, cos]])
    }
}

impl<T> Matrix<T, 3>
where
    T: FloatValueType,
{
    /// Creates a rotation of `angle` radians around `axis`.
    ///
    /// `axis` doesn't need to be normalized.
    pub fn rotation_3d(axis: Vec3<T>, angle: T) -> Self {
        // Rodrigues' rotation formula
        let a = axis.normalized();
        let (sin, cos) = angle.sin_cos();
        let k = T::one() - cos;
        let [x, y, z] = a.e;

        Self::new([
            [
                cos + x * x * k,
                x * y * k - z * sin,
                x * z * k + y * sin,
            ],
            [
                y * x * k + z * sin,
                cos + y * y * k,
                y * z * k - x * sin,
            ],
            [
                z * x * k - y * sin,
                z * y * k + x * sin,
                cos + z * z * k,
            ],
        ])
    }
}

impl<T, const D: usize> Mul<Vector<T, D>> for Matrix<T, D>
where
    T: FloatValueType,
{
    type Output = Vector<T, D>;

    fn mul(self, v: Vector<T, D>) -> Vector<T, D> {
        Vector::new(array::from_fn(|row| self.row(row).dot(v)))
    }
}

// By ref to avoid copying both operands
impl<'a, 'b, T, const D: usize> Mul<&'b Matrix<T, D>> for &'a Matrix<T, D>
where
    T: FloatValueType,
{
    type Output = Matrix<T, D>;

    fn mul(self, other: &'b Matrix<T, D>) -> Matrix<T, D> {
        let ret = Matrix {
            m: array::from_fn(|row| array::from_fn(|col| self.row(row).dot(other.col(col)))),
        };
        debug_assert!(!ret.has_nans());
        ret
    }
}

impl<T, const D: usize> AbsDiffEq for Matrix<T, D>
where
    T: FloatValueType + AbsDiffEq<Epsilon = T>,
{
    type Epsilon = T::Epsilon;

    fn default_epsilon() -> Self::Epsilon {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        for row in 0..D {
            for col in 0..D {
                if !self.m[row][col].abs_diff_eq(&other.m[row][col], epsilon) {
                    return false;
                }
            }
        }
        true
    }
}

impl<T, const D: usize> RelativeEq for Matrix<T, D>
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
        for row in 0..D {
            for col in 0..D {
                if !self.m[row][col].relative_eq(&other.m[row][col], epsilon, max_relative) {
                    return false;
                }
            }
        }
        true
    }
}
