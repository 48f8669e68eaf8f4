//! Dynamically sized 2D matrix.
//!
//! Storage is row-major: element `(row, col)` lives at `row * columns + col`.
//! Every constructor checks the declared row/column counts against the data
//! it is given, so a `Matrix` is always rectangular and never empty.

use std::fmt;
use std::ops::{Add, AddAssign, Mul};

use rand::distributions::uniform::SampleUniform;
use rand::distributions::{Distribution, Uniform};
use rand::Rng;

use crate::error::{GeometryError, GeometryResult};

/// Numeric element type of a [`Matrix`].
pub trait Scalar:
    Copy + fmt::Debug + fmt::Display + PartialEq + Add<Output = Self> + AddAssign + Mul<Output = Self>
{
    const ZERO: Self;
    const ONE: Self;

    /// True when `[low, high)` is a non-empty range whose width is representable.
    fn is_sampling_range(low: Self, high: Self) -> bool;
}

macro_rules! impl_scalar_int {
    ($($t:ty),*) => {
        $(
            impl Scalar for $t {
                const ZERO: Self = 0;
                const ONE: Self = 1;

                fn is_sampling_range(low: Self, high: Self) -> bool {
                    low < high
                }
            }
        )*
    };
}

macro_rules! impl_scalar_float {
    ($($t:ty),*) => {
        $(
            impl Scalar for $t {
                const ZERO: Self = 0.0;
                const ONE: Self = 1.0;

                fn is_sampling_range(low: Self, high: Self) -> bool {
                    low < high && (high - low).is_finite()
                }
            }
        )*
    };
}

impl_scalar_int!(i32, i64);
impl_scalar_float!(f32, f64);

#[derive(Clone, Debug, PartialEq)]
pub struct Matrix<T: Scalar = f64> {
    rows: usize,
    columns: usize,
    data: Vec<T>,
}

fn check_shape(rows: usize, columns: usize) -> GeometryResult<()> {
    if rows == 0 || columns == 0 {
        return Err(GeometryError::invalid_argument(format!(
            "matrix dimensions must be non-zero, got {rows}x{columns}"
        )));
    }
    Ok(())
}

impl<T: Scalar> Matrix<T> {
    /// Creates a `rows` x `columns` matrix with every element set to `value`.
    pub fn filled(rows: usize, columns: usize, value: T) -> GeometryResult<Self> {
        check_shape(rows, columns)?;
        Ok(Self {
            rows,
            columns,
            data: vec![value; rows * columns],
        })
    }

    /// Creates a matrix filled with samples drawn uniformly from `[low, high)`.
    ///
    /// The generator is supplied by the caller; seed it for reproducible fills.
    /// An empty, NaN or infinite range is rejected before sampling.
    pub fn random<R>(
        rows: usize,
        columns: usize,
        low: T,
        high: T,
        rng: &mut R,
    ) -> GeometryResult<Self>
    where
        T: SampleUniform,
        R: Rng + ?Sized,
    {
        check_shape(rows, columns)?;
        if !T::is_sampling_range(low, high) {
            return Err(GeometryError::invalid_argument(format!(
                "random fill range [{low}, {high}) is empty or unbounded"
            )));
        }
        let dist = Uniform::new(low, high);
        let data = (0..rows * columns).map(|_| dist.sample(rng)).collect();
        Ok(Self {
            rows,
            columns,
            data,
        })
    }

    /// Creates a matrix from a literal array, checking it against the declared counts.
    pub fn from_array<const R: usize, const C: usize>(
        rows: usize,
        columns: usize,
        data: [[T; C]; R],
    ) -> GeometryResult<Self> {
        check_shape(rows, columns)?;
        if rows != R || columns != C {
            return Err(GeometryError::invalid_argument(format!(
                "declared {rows}x{columns} but initializer is {R}x{C}"
            )));
        }
        Ok(Self {
            rows,
            columns,
            data: data.iter().flatten().copied().collect(),
        })
    }

    /// Creates a matrix from existing nested rows, rejecting ragged or mis-sized input.
    pub fn from_vec(rows: usize, columns: usize, data: Vec<Vec<T>>) -> GeometryResult<Self> {
        check_shape(rows, columns)?;
        if data.len() != rows {
            return Err(GeometryError::invalid_argument(format!(
                "declared {rows} rows but got {}",
                data.len()
            )));
        }
        if let Some((i, row)) = data.iter().enumerate().find(|(_, r)| r.len() != columns) {
            return Err(GeometryError::invalid_argument(format!(
                "row {i} has {} entries, expected {columns}",
                row.len()
            )));
        }
        Ok(Self {
            rows,
            columns,
            data: data.into_iter().flatten().collect(),
        })
    }

    /// Square identity matrix.
    pub fn identity(size: usize) -> GeometryResult<Self> {
        let mut m = Self::filled(size, size, T::ZERO)?;
        for i in 0..size {
            m.data[i * size + i] = T::ONE;
        }
        Ok(m)
    }

    /// Single-column matrix holding `values` top to bottom.
    pub fn column(values: &[T]) -> GeometryResult<Self> {
        check_shape(values.len(), 1)?;
        Ok(Self {
            rows: values.len(),
            columns: 1,
            data: values.to_vec(),
        })
    }

    /// Single-row matrix holding `values` left to right.
    pub fn row(values: &[T]) -> GeometryResult<Self> {
        check_shape(1, values.len())?;
        Ok(Self {
            rows: 1,
            columns: values.len(),
            data: values.to_vec(),
        })
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// `(rows, columns)`.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.columns)
    }

    fn index(&self, row: usize, column: usize) -> GeometryResult<usize> {
        if row >= self.rows || column >= self.columns {
            return Err(GeometryError::IndexOutOfBounds {
                row,
                column,
                rows: self.rows,
                columns: self.columns,
            });
        }
        Ok(row * self.columns + column)
    }

    /// Element at `(row, column)`.
    pub fn get(&self, row: usize, column: usize) -> GeometryResult<T> {
        let i = self.index(row, column)?;
        Ok(self.data[i])
    }

    /// Mutable reference to the element at `(row, column)`.
    pub fn at(&mut self, row: usize, column: usize) -> GeometryResult<&mut T> {
        let i = self.index(row, column)?;
        Ok(&mut self.data[i])
    }

    /// Overwrites the element at `(row, column)`.
    pub fn set(&mut self, row: usize, column: usize, value: T) -> GeometryResult<()> {
        *self.at(row, column)? = value;
        Ok(())
    }

    /// Iterates the rows as slices.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[T]> {
        self.data.chunks_exact(self.columns)
    }

    pub fn transpose(&self) -> Self {
        let mut data = Vec::with_capacity(self.data.len());
        for col in 0..self.columns {
            for row in 0..self.rows {
                data.push(self.data[row * self.columns + col]);
            }
        }
        Self {
            rows: self.columns,
            columns: self.rows,
            data,
        }
    }

    /// Matrix multiplication with automatic operand ordering.
    ///
    /// - `self.columns == other.rows`: returns `self × other`
    /// - otherwise `self.rows == other.columns`: returns `other × self`
    ///
    /// Fails with [`GeometryError::IncompatibleOperands`] when neither holds.
    pub fn dot_product(&self, other: &Matrix<T>) -> GeometryResult<Matrix<T>> {
        if self.columns == other.rows {
            Ok(multiply(self, other))
        } else if self.rows == other.columns {
            Ok(multiply(other, self))
        } else {
            Err(GeometryError::IncompatibleOperands {
                left: self.shape(),
                right: other.shape(),
            })
        }
    }
}

/// `left × right`; caller guarantees `left.columns == right.rows`.
fn multiply<T: Scalar>(left: &Matrix<T>, right: &Matrix<T>) -> Matrix<T> {
    let (rows, inner, columns) = (left.rows, left.columns, right.columns);
    let mut data = vec![T::ZERO; rows * columns];
    for row in 0..rows {
        for col in 0..columns {
            let mut sum = T::ZERO;
            for k in 0..inner {
                sum += left.data[row * inner + k] * right.data[k * columns + col];
            }
            data[row * columns + col] = sum;
        }
    }
    Matrix {
        rows,
        columns,
        data,
    }
}

impl<T: Scalar> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Matrix {}x{}", self.rows, self.columns)?;
        for row in self.iter_rows() {
            write!(f, "[")?;
            for (i, value) in row.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{value}")?;
            }
            writeln!(f, "]")?;
        }
        Ok(())
    }
}
