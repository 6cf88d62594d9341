//! Dense row-major matrices.
//!
//! Shape-changing operations (`transpose`, constructors, indexing) work on
//! any element type. Arithmetic goes through an [`Algebra`], which is what
//! lets a matrix of expression operands produce an expression.

use std::ops::{Index, IndexMut, Mul};

use num_traits::{One, Zero};
use rayon::prelude::*;

use crate::algebra::Algebra;

/// Dense matrix stored in row-major order.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix<T> {
    /// Matrix entries in row-major order.
    data: Vec<T>,
    /// Number of rows.
    num_rows: usize,
    /// Number of columns.
    num_cols: usize,
}

impl<T> Matrix<T> {
    /// Creates a matrix from a list of rows.
    ///
    /// # Panics
    ///
    /// Panics if the rows have different lengths.
    #[must_use]
    pub fn from_rows(rows: Vec<Vec<T>>) -> Self {
        let num_rows = rows.len();
        let num_cols = rows.first().map_or(0, Vec::len);
        assert!(
            rows.iter().all(|r| r.len() == num_cols),
            "all rows must have the same length"
        );
        Self {
            data: rows.into_iter().flatten().collect(),
            num_rows,
            num_cols,
        }
    }

    /// Creates a column vector.
    #[must_use]
    pub fn from_column(entries: Vec<T>) -> Self {
        let num_rows = entries.len();
        Self {
            data: entries,
            num_rows,
            num_cols: 1,
        }
    }

    /// Creates a row vector.
    #[must_use]
    pub fn from_row(entries: Vec<T>) -> Self {
        let num_cols = entries.len();
        Self {
            data: entries,
            num_rows: 1,
            num_cols,
        }
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn num_cols(&self) -> usize {
        self.num_cols
    }

    /// Returns `(rows, cols)`.
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        (self.num_rows, self.num_cols)
    }

    /// Returns true for a single row or a single column.
    #[must_use]
    pub fn is_vector(&self) -> bool {
        self.num_rows == 1 || self.num_cols == 1
    }

    /// Number of entries of a row or column vector.
    ///
    /// # Panics
    ///
    /// Panics if the matrix is not a vector.
    #[must_use]
    pub fn len(&self) -> usize {
        assert!(self.is_vector(), "len of a {}x{} matrix", self.num_rows, self.num_cols);
        self.data.len()
    }

    /// Returns true if the matrix has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns a reference to the entry at (row, col).
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        if row < self.num_rows && col < self.num_cols {
            Some(&self.data[row * self.num_cols + col])
        } else {
            None
        }
    }

    /// Returns a slice of the specified row.
    #[must_use]
    pub fn row(&self, row: usize) -> &[T] {
        let start = row * self.num_cols;
        &self.data[start..start + self.num_cols]
    }

    /// Iterates the entries in row-major order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Consumes the matrix, returning its entries in row-major order.
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    fn map<U>(&self, f: impl FnMut(&T) -> U) -> Matrix<U> {
        Matrix {
            data: self.data.iter().map(f).collect(),
            num_rows: self.num_rows,
            num_cols: self.num_cols,
        }
    }

    fn zip_map<U>(&self, other: &Self, mut f: impl FnMut(&T, &T) -> U) -> Matrix<U> {
        assert_eq!(self.shape(), other.shape(), "shape mismatch");
        Matrix {
            data: self.data.iter().zip(&other.data).map(|(a, b)| f(a, b)).collect(),
            num_rows: self.num_rows,
            num_cols: self.num_cols,
        }
    }
}

impl<T: Clone> Matrix<T> {
    /// Returns the transpose of the matrix.
    #[must_use]
    pub fn transpose(&self) -> Self {
        let data = (0..self.num_cols)
            .flat_map(|j| (0..self.num_rows).map(move |i| (i, j)))
            .map(|(i, j)| self[(i, j)].clone())
            .collect();
        Self {
            data,
            num_rows: self.num_cols,
            num_cols: self.num_rows,
        }
    }

    /// Returns a column as a vector.
    #[must_use]
    pub fn col(&self, col: usize) -> Vec<T> {
        (0..self.num_rows)
            .map(|row| self[(row, col)].clone())
            .collect()
    }

    // === Element arithmetic ===

    /// Entrywise sum.
    ///
    /// # Panics
    ///
    /// Panics if the shapes differ.
    #[must_use]
    pub fn add<A: Algebra<Elem = T>>(&self, other: &Self, alg: &mut A) -> Self {
        self.zip_map(other, |a, b| alg.add(a, b))
    }

    /// Entrywise difference.
    ///
    /// # Panics
    ///
    /// Panics if the shapes differ.
    #[must_use]
    pub fn sub<A: Algebra<Elem = T>>(&self, other: &Self, alg: &mut A) -> Self {
        self.zip_map(other, |a, b| alg.sub(a, b))
    }

    /// Multiplies every entry by `scalar`.
    #[must_use]
    pub fn scale<A: Algebra<Elem = T>>(&self, scalar: &T, alg: &mut A) -> Self {
        self.map(|v| alg.mul(scalar, v))
    }

    /// Negates every entry.
    #[must_use]
    pub fn neg<A: Algebra<Elem = T>>(&self, alg: &mut A) -> Self {
        self.map(|v| alg.neg(v))
    }

    /// Matrix product `self @ other`.
    ///
    /// # Panics
    ///
    /// Panics if the inner dimensions differ.
    #[must_use]
    pub fn matmul<A: Algebra<Elem = T>>(&self, other: &Self, alg: &mut A) -> Self {
        assert_eq!(self.num_cols, other.num_rows, "inner dimension mismatch");

        let mut data = Vec::with_capacity(self.num_rows * other.num_cols);
        for i in 0..self.num_rows {
            for j in 0..other.num_cols {
                let mut sum = alg.zero();
                for k in 0..self.num_cols {
                    let p = alg.mul(&self[(i, k)], &other[(k, j)]);
                    sum = alg.add(&sum, &p);
                }
                data.push(sum);
            }
        }
        Self {
            data,
            num_rows: self.num_rows,
            num_cols: other.num_cols,
        }
    }

    /// Inner product of two vectors of equal length, regardless of their
    /// orientation.
    ///
    /// # Panics
    ///
    /// Panics if either operand is not a vector or the lengths differ.
    #[must_use]
    pub fn dot<A: Algebra<Elem = T>>(&self, other: &Self, alg: &mut A) -> T {
        assert_eq!(self.len(), other.len(), "vector length mismatch");
        self.data
            .iter()
            .zip(&other.data)
            .fold(alg.zero(), |acc, (a, b)| {
                let p = alg.mul(a, b);
                alg.add(&acc, &p)
            })
    }

    /// Euclidean norm of a vector, `(Σ vᵢ²)^0.5`.
    #[must_use]
    pub fn norm<A: Algebra<Elem = T>>(&self, alg: &mut A) -> T {
        let squares = self
            .iter()
            .fold(alg.zero(), |acc, v| {
                let sq = alg.pow(v, 2.0);
                alg.add(&acc, &sq)
            });
        alg.pow(&squares, 0.5)
    }

    /// Cosine of the angle between two vectors.
    ///
    /// When the dot product folds to a number below `tol` the result is the
    /// constant zero, without dividing by the norms.
    #[must_use]
    pub fn angle<A: Algebra<Elem = T>>(&self, other: &Self, tol: f64, alg: &mut A) -> T {
        let d = self.dot(other, alg);
        if alg.as_scalar(&d).is_some_and(|v| v < tol) {
            return alg.zero();
        }
        let na = self.norm(alg);
        let nb = other.norm(alg);
        let d = alg.div(&d, &na);
        alg.div(&d, &nb)
    }
}

impl<T: Clone + Zero> Matrix<T> {
    /// Creates a new matrix filled with zeros.
    #[must_use]
    pub fn zeros(num_rows: usize, num_cols: usize) -> Self {
        Self {
            data: vec![T::zero(); num_rows * num_cols],
            num_rows,
            num_cols,
        }
    }

    /// Creates an identity matrix.
    #[must_use]
    pub fn identity(n: usize) -> Self
    where
        T: One,
    {
        let mut m = Self::zeros(n, n);
        for i in 0..n {
            m[(i, i)] = T::one();
        }
        m
    }
}

impl<T> Matrix<T>
where
    T: Copy + Zero + Mul<Output = T> + Send + Sync,
{
    /// Numeric matrix product with one rayon task per output row.
    ///
    /// # Panics
    ///
    /// Panics if the inner dimensions differ.
    #[must_use]
    pub fn matmul_par(&self, other: &Self) -> Self {
        assert_eq!(self.num_cols, other.num_rows, "inner dimension mismatch");

        let mut data = vec![T::zero(); self.num_rows * other.num_cols];
        if other.num_cols > 0 {
            data.par_chunks_mut(other.num_cols)
                .enumerate()
                .for_each(|(i, out)| {
                    for (k, &a) in self.row(i).iter().enumerate() {
                        for (o, &b) in out.iter_mut().zip(other.row(k)) {
                            *o = *o + a * b;
                        }
                    }
                });
        }
        Self {
            data,
            num_rows: self.num_rows,
            num_cols: other.num_cols,
        }
    }
}

impl<T> From<Vec<T>> for Matrix<T> {
    /// A flat list becomes a column vector.
    fn from(entries: Vec<T>) -> Self {
        Self::from_column(entries)
    }
}

impl<T> Index<usize> for Matrix<T> {
    type Output = T;

    /// Entry `i` of a row or column vector.
    ///
    /// # Panics
    ///
    /// Panics if the matrix is not a vector or `i` is out of range.
    fn index(&self, i: usize) -> &T {
        assert!(self.is_vector(), "single index into a {}x{} matrix", self.num_rows, self.num_cols);
        &self.data[i]
    }
}

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &T {
        assert!(row < self.num_rows && col < self.num_cols);
        &self.data[row * self.num_cols + col]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        assert!(row < self.num_rows && col < self.num_cols);
        &mut self.data[row * self.num_cols + col]
    }
}
