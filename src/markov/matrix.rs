// src/markov/matrix.rs
//! Dense row-major matrix of `f64` and its multiplication kernel.

use crate::error::{RankpathError, Result};
use rayon::prelude::*;
use tracing::warn;

#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl Matrix {
    #[must_use]
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self::filled(rows, cols, 0.0)
    }

    #[must_use]
    pub fn filled(rows: usize, cols: usize, value: f64) -> Self {
        Self {
            rows,
            cols,
            data: vec![value; rows * cols],
        }
    }

    #[must_use]
    pub fn identity(n: usize) -> Self {
        let mut m = Self::zeros(n, n);
        for i in 0..n {
            m.set(i, i, 1.0);
        }
        m
    }

    /// Builds a matrix from row vectors.
    ///
    /// # Errors
    /// Returns `DimensionMismatch` if the rows have different lengths.
    pub fn from_rows(rows: &[Vec<f64>]) -> Result<Self> {
        let cols = rows.first().map_or(0, Vec::len);
        let mut data = Vec::with_capacity(rows.len() * cols);
        for row in rows {
            if row.len() != cols {
                return Err(RankpathError::DimensionMismatch {
                    left: (rows.len(), cols),
                    right: (1, row.len()),
                });
            }
            data.extend_from_slice(row);
        }
        Ok(Self {
            rows: rows.len(),
            cols,
            data,
        })
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Returns the entry at `(row, col)`, or 0 outside the matrix.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> f64 {
        if row >= self.rows || col >= self.cols {
            return 0.0;
        }
        self.data.get(row * self.cols + col).copied().unwrap_or(0.0)
    }

    /// Sets the entry at `(row, col)`. Writes outside the matrix are ignored.
    pub fn set(&mut self, row: usize, col: usize, value: f64) {
        if row >= self.rows || col >= self.cols {
            return;
        }
        if let Some(slot) = self.data.get_mut(row * self.cols + col) {
            *slot = value;
        }
    }

    #[must_use]
    pub fn column(&self, col: usize) -> Vec<f64> {
        (0..self.rows).map(|r| self.get(r, col)).collect()
    }

    #[must_use]
    pub fn column_sum(&self, col: usize) -> f64 {
        (0..self.rows).map(|r| self.get(r, col)).sum()
    }

    /// Applies `f` to every entry in place.
    pub fn map_in_place(&mut self, f: impl Fn(f64) -> f64) {
        for v in &mut self.data {
            *v = f(*v);
        }
    }

    /// Computes `self * other`.
    ///
    /// Output rows are independent and are computed in parallel.
    ///
    /// # Errors
    /// Returns `DimensionMismatch` unless `self.cols == other.rows`.
    pub fn multiply(&self, other: &Matrix) -> Result<Matrix> {
        if self.cols != other.rows {
            return Err(RankpathError::DimensionMismatch {
                left: self.shape(),
                right: other.shape(),
            });
        }
        let mut product = Matrix::zeros(self.rows, other.cols);
        if product.data.is_empty() {
            return Ok(product);
        }

        let inner = self.cols;
        let width = other.cols;
        product
            .data
            .par_chunks_mut(width)
            .enumerate()
            .for_each(|(i, out_row)| {
                let left = self.data.get(i * inner..(i + 1) * inner).unwrap_or_default();
                for (k, &a) in left.iter().enumerate() {
                    if a == 0.0 {
                        continue;
                    }
                    let right = other.data.get(k * width..(k + 1) * width).unwrap_or_default();
                    for (out, &b) in out_row.iter_mut().zip(right) {
                        *out += a * b;
                    }
                }
            });
        Ok(product)
    }

    /// Computes `self * other`, reporting a shape mismatch and returning a
    /// zero-filled `self.rows x other.cols` matrix instead of failing.
    #[must_use]
    pub fn multiply_or_zero(&self, other: &Matrix) -> Matrix {
        match self.multiply(other) {
            Ok(product) => product,
            Err(e) => {
                warn!("{e}");
                Matrix::zeros(self.rows, other.cols)
            }
        }
    }

    /// Computes `self * v`.
    ///
    /// # Errors
    /// Returns `DimensionMismatch` unless `v.len() == self.cols`.
    pub fn multiply_vector(&self, v: &[f64]) -> Result<Vec<f64>> {
        if v.len() != self.cols {
            return Err(RankpathError::DimensionMismatch {
                left: self.shape(),
                right: (v.len(), 1),
            });
        }
        if self.cols == 0 {
            return Ok(vec![0.0; self.rows]);
        }
        Ok(self
            .data
            .par_chunks(self.cols)
            .map(|row| row.iter().zip(v).map(|(a, b)| a * b).sum::<f64>())
            .collect())
    }

    /// Multiplies the matrix by itself `count - 1` times: 1 returns the
    /// matrix, 2 squares it, 3 cubes it.
    ///
    /// # Errors
    /// Returns `DimensionMismatch` for non-square matrices.
    pub fn power(&self, count: usize) -> Result<Matrix> {
        if self.rows != self.cols {
            return Err(RankpathError::DimensionMismatch {
                left: self.shape(),
                right: self.shape(),
            });
        }
        if count == 0 {
            return Ok(Matrix::identity(self.rows));
        }
        let mut output = self.clone();
        for _ in 1..count {
            output = self.multiply(&output)?;
        }
        Ok(output)
    }

    /// Euclidean distance between columns 0 and 1, or 0 with fewer than two
    /// columns.
    #[must_use]
    pub fn leading_column_distance(&self) -> f64 {
        if self.cols < 2 {
            return 0.0;
        }
        (0..self.rows)
            .map(|r| (self.get(r, 0) - self.get(r, 1)).powi(2))
            .sum::<f64>()
            .sqrt()
    }
}

/// Euclidean distance between two equal-length vectors.
#[must_use]
pub fn euclidean_distance(a: &[f64], b: &[f64]) -> f64 {
    a.iter()
        .zip(b)
        .map(|(x, y)| (x - y).powi(2))
        .sum::<f64>()
        .sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multiply_small() {
        let a = Matrix::from_rows(&[vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
        let b = Matrix::from_rows(&[vec![5.0, 6.0], vec![7.0, 8.0]]).unwrap();
        let p = a.multiply(&b).unwrap();
        assert_eq!(p, Matrix::from_rows(&[vec![19.0, 22.0], vec![43.0, 50.0]]).unwrap());
    }

    #[test]
    fn test_mismatch_returns_zero_result() {
        let a = Matrix::filled(2, 3, 1.0);
        let b = Matrix::filled(4, 2, 1.0);
        assert!(matches!(
            a.multiply(&b),
            Err(RankpathError::DimensionMismatch { left: (2, 3), right: (4, 2) })
        ));
        let z = a.multiply_or_zero(&b);
        assert_eq!(z.shape(), (2, 2));
        assert!((0..2).all(|c| z.column_sum(c) == 0.0));
    }

    #[test]
    fn test_power_matches_repeated_multiply() {
        let m = Matrix::from_rows(&[vec![0.5, 0.25], vec![0.5, 0.75]]).unwrap();
        let cubed = m.power(3).unwrap();
        let manual = m.multiply(&m).unwrap().multiply(&m).unwrap();
        for r in 0..2 {
            for c in 0..2 {
                assert!((cubed.get(r, c) - manual.get(r, c)).abs() < 1e-12);
            }
        }
        assert_eq!(m.power(1).unwrap(), m);
        assert_eq!(m.power(0).unwrap(), Matrix::identity(2));
    }

    #[test]
    fn test_multiply_vector() {
        let m = Matrix::from_rows(&[vec![1.0, 2.0], vec![0.0, 1.0]]).unwrap();
        assert_eq!(m.multiply_vector(&[1.0, 1.0]).unwrap(), vec![3.0, 1.0]);
        assert!(m.multiply_vector(&[1.0]).is_err());
    }

    #[test]
    fn test_ragged_rows_rejected() {
        assert!(Matrix::from_rows(&[vec![1.0], vec![1.0, 2.0]]).is_err());
    }

    #[test]
    fn test_leading_column_distance() {
        let m = Matrix::from_rows(&[vec![1.0, 0.0], vec![0.0, 1.0]]).unwrap();
        assert!((m.leading_column_distance() - 2f64.sqrt()).abs() < 1e-12);
        assert_eq!(Matrix::zeros(3, 1).leading_column_distance(), 0.0);
    }
}
