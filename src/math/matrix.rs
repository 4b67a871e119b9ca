use nalgebra::{DMatrix, DVector, Rotation2, Rotation3, Vector3 as NaVector3};

use super::round;
use crate::error::{MatrixError, Result};

/// An immutable `m x n` grid of rounded scalars.
///
/// Every entry is rounded to [`PRECISION`](super::PRECISION) digits when the
/// matrix is built, and every derived matrix is rounded again, so that zero
/// tests on pivots and determinants are stable against floating-point noise.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    entries: DMatrix<f64>,
}

impl Matrix {
    /// Creates the `n x n` identity matrix.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::Empty`] if `n` is zero.
    pub fn identity(n: usize) -> Result<Self> {
        if n == 0 {
            return Err(MatrixError::Empty.into());
        }
        Ok(Self {
            entries: DMatrix::identity(n, n),
        })
    }

    /// Creates a square diagonal matrix from its diagonal entries.
    ///
    /// # Errors
    ///
    /// Returns an error if `values` is empty or contains NaN.
    pub fn diagonal(values: &[f64]) -> Result<Self> {
        if values.is_empty() {
            return Err(MatrixError::Empty.into());
        }
        if values.iter().any(|v| v.is_nan()) {
            return Err(MatrixError::NotANumber.into());
        }
        let diagonal = DVector::from_iterator(values.len(), values.iter().map(|&v| round(v)));
        Ok(Self {
            entries: DMatrix::from_diagonal(&diagonal),
        })
    }

    /// Creates a dense matrix from a slice of rows.
    ///
    /// # Errors
    ///
    /// Returns an error if there are no rows or columns, if the rows differ in
    /// length, or if any entry is NaN.
    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R]) -> Result<Self> {
        let m = rows.len();
        let n = rows.first().map_or(0, |row| row.as_ref().len());
        if m == 0 || n == 0 {
            return Err(MatrixError::Empty.into());
        }
        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != n {
                return Err(MatrixError::Ragged {
                    row: i,
                    expected: n,
                    found: row.len(),
                }
                .into());
            }
            if row.iter().any(|v| v.is_nan()) {
                return Err(MatrixError::NotANumber.into());
            }
        }
        Ok(Self {
            entries: DMatrix::from_fn(m, n, |i, j| round(rows[i].as_ref()[j])),
        })
    }

    /// Wraps an already computed grid, rounding every entry.
    fn from_raw(entries: DMatrix<f64>) -> Self {
        Self {
            entries: entries.map(round),
        }
    }

    /// Number of rows.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.entries.nrows()
    }

    /// Number of columns.
    #[must_use]
    pub fn cols(&self) -> usize {
        self.entries.ncols()
    }

    /// `(rows, cols)`.
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        self.entries.shape()
    }

    /// `true` if the matrix has as many rows as columns.
    #[must_use]
    pub fn is_square(&self) -> bool {
        self.rows() == self.cols()
    }

    fn check_index(&self, row: usize, col: usize) -> Result<()> {
        let (rows, cols) = self.shape();
        if row >= rows || col >= cols {
            return Err(MatrixError::IndexOutOfRange {
                row,
                col,
                rows,
                cols,
            }
            .into());
        }
        Ok(())
    }

    /// Returns the entry at `(row, col)`.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::IndexOutOfRange`] for an index outside the grid.
    pub fn entry(&self, row: usize, col: usize) -> Result<f64> {
        self.check_index(row, col)?;
        Ok(self.entries[(row, col)])
    }

    /// Returns row `i` as a vector of entries.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::IndexOutOfRange`] if `i` is not a row index.
    pub fn row(&self, i: usize) -> Result<Vec<f64>> {
        self.check_index(i, 0)?;
        Ok(self.entries.row(i).iter().copied().collect())
    }

    /// Returns column `j` as a vector of entries.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::IndexOutOfRange`] if `j` is not a column index.
    pub fn column(&self, j: usize) -> Result<Vec<f64>> {
        self.check_index(0, j)?;
        Ok(self.entries.column(j).iter().copied().collect())
    }

    /// Deletes row `i` and column `j`.
    ///
    /// Returns `None` when the matrix has a single row or column.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::IndexOutOfRange`] for an index outside the grid.
    pub fn submatrix(&self, i: usize, j: usize) -> Result<Option<Self>> {
        self.check_index(i, j)?;
        if self.rows() == 1 || self.cols() == 1 {
            return Ok(None);
        }
        Ok(Some(Self {
            entries: self.entries.clone().remove_row(i).remove_column(j),
        }))
    }

    /// Returns the transpose.
    #[must_use]
    pub fn transpose(&self) -> Self {
        Self {
            entries: self.entries.transpose(),
        }
    }

    /// Determinant of a square matrix, `None` if the matrix is not square.
    ///
    /// Sizes up to 3 use closed forms; larger matrices expand along the first
    /// column, skipping zero entries.
    #[must_use]
    pub fn determinant(&self) -> Option<f64> {
        self.is_square().then(|| determinant_of(&self.entries))
    }

    /// Sum of the diagonal, `None` if the matrix is not square.
    #[must_use]
    pub fn trace(&self) -> Option<f64> {
        self.is_square().then(|| round(self.entries.trace()))
    }

    /// Row echelon form: pivots forced to 1, entries below them eliminated.
    #[must_use]
    pub fn row_echelon_form(&self) -> Self {
        Self {
            entries: self.eliminate(false).0,
        }
    }

    /// Reduced row echelon form: pivots forced to 1, entries above and below
    /// them eliminated.
    #[must_use]
    pub fn reduced_row_echelon_form(&self) -> Self {
        Self {
            entries: self.eliminate(true).0,
        }
    }

    /// `(row, column)` positions of the pivots of the echelon form.
    #[must_use]
    pub fn pivots(&self) -> Vec<(usize, usize)> {
        self.eliminate(false).1
    }

    /// Number of pivots in the row echelon form.
    #[must_use]
    pub fn rank(&self) -> usize {
        self.pivots().len()
    }

    /// Number of columns without a pivot.
    #[must_use]
    pub fn nullity(&self) -> usize {
        self.cols() - self.rank()
    }

    /// Determinant of the submatrix without row `i` and column `j`.
    ///
    /// A matrix with a single row or column has minor 1.
    ///
    /// # Errors
    ///
    /// Returns an error for an out-of-range index or a non-square matrix.
    pub fn minor(&self, i: usize, j: usize) -> Result<f64> {
        self.check_index(i, j)?;
        if !self.is_square() {
            return Err(MatrixError::NotSquare {
                rows: self.rows(),
                cols: self.cols(),
            }
            .into());
        }
        match self.submatrix(i, j)? {
            Some(sub) => Ok(determinant_of(&sub.entries)),
            None => Ok(1.0),
        }
    }

    /// Signed minor `(-1)^(i+j) * minor(i, j)`.
    ///
    /// # Errors
    ///
    /// Returns an error for an out-of-range index or a non-square matrix.
    pub fn cofactor(&self, i: usize, j: usize) -> Result<f64> {
        let minor = self.minor(i, j)?;
        if (i + j) % 2 == 0 {
            Ok(minor)
        } else {
            Ok(-minor)
        }
    }

    /// Transposed cofactor matrix.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::NotSquare`] for a non-square matrix.
    pub fn adjoint(&self) -> Result<Self> {
        let (rows, cols) = self.shape();
        if rows != cols {
            return Err(MatrixError::NotSquare { rows, cols }.into());
        }
        let mut adjoint = DMatrix::zeros(rows, cols);
        for i in 0..rows {
            for j in 0..cols {
                adjoint[(j, i)] = self.cofactor(i, j)?;
            }
        }
        Ok(Self::from_raw(adjoint))
    }

    /// Inverse via `adjoint / determinant`.
    ///
    /// Returns `None` for a non-square matrix or a zero determinant.
    #[must_use]
    pub fn inverse(&self) -> Option<Self> {
        let det = self.determinant()?;
        if det == 0.0 {
            return None;
        }
        let adjoint = self.adjoint().ok()?;
        Some(Self::from_raw(adjoint.entries * (1.0 / det)))
    }

    /// Columns of this matrix at the pivot columns of its echelon form.
    #[must_use]
    pub fn basis_for_column_space(&self) -> Vec<Vec<f64>> {
        self.pivots()
            .into_iter()
            .map(|(_, j)| self.entries.column(j).iter().copied().collect())
            .collect()
    }

    /// Rows of this matrix spanning its row space.
    #[must_use]
    pub fn basis_for_row_space(&self) -> Vec<Vec<f64>> {
        self.transpose().basis_for_column_space()
    }

    /// Entry-wise sum.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::DimensionMismatch`] if the shapes differ.
    pub fn add(a: &Self, b: &Self) -> Result<Self> {
        check_same_shape("add", a, b)?;
        Ok(Self::from_raw(&a.entries + &b.entries))
    }

    /// Entry-wise difference `a - b`.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::DimensionMismatch`] if the shapes differ.
    pub fn subtract(a: &Self, b: &Self) -> Result<Self> {
        check_same_shape("subtract", a, b)?;
        Ok(Self::from_raw(&a.entries - &b.entries))
    }

    /// Scalar multiple `k * a`.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::NotANumber`] if `k` is NaN.
    pub fn scale(k: f64, a: &Self) -> Result<Self> {
        if k.is_nan() {
            return Err(MatrixError::NotANumber.into());
        }
        Ok(Self::from_raw(&a.entries * k))
    }

    /// Matrix product `a * b`.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::DimensionMismatch`] unless `a.cols() == b.rows()`.
    pub fn multiply(a: &Self, b: &Self) -> Result<Self> {
        if a.cols() != b.rows() {
            return Err(MatrixError::DimensionMismatch {
                op: "multiply",
                left: a.shape(),
                right: b.shape(),
            }
            .into());
        }
        Ok(Self::from_raw(&a.entries * &b.entries))
    }

    /// Counter-clockwise rotation of the plane by `degrees`.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::NotANumber`] if `degrees` is NaN.
    pub fn rotation_2d(degrees: f64) -> Result<Self> {
        check_angle(degrees)?;
        let rotation = Rotation2::new(degrees.to_radians());
        Ok(Self::from_raw(DMatrix::from_column_slice(
            2,
            2,
            rotation.matrix().as_slice(),
        )))
    }

    /// Right-handed rotation about the x axis by `degrees`.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::NotANumber`] if `degrees` is NaN.
    pub fn rotation_3d_x(degrees: f64) -> Result<Self> {
        rotation_3d(&NaVector3::x_axis(), degrees)
    }

    /// Right-handed rotation about the y axis by `degrees`.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::NotANumber`] if `degrees` is NaN.
    pub fn rotation_3d_y(degrees: f64) -> Result<Self> {
        rotation_3d(&NaVector3::y_axis(), degrees)
    }

    /// Right-handed rotation about the z axis by `degrees`.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::NotANumber`] if `degrees` is NaN.
    pub fn rotation_3d_z(degrees: f64) -> Result<Self> {
        rotation_3d(&NaVector3::z_axis(), degrees)
    }

    /// Gaussian elimination.
    ///
    /// Before each pivot is chosen, the rows below the current pivot row are
    /// stably partitioned so that rows with a zero in the pivot column sink to
    /// the bottom. Each eliminated entry is rounded so that exact zero tests
    /// on later pivots are meaningful.
    fn eliminate(&self, reduced: bool) -> (DMatrix<f64>, Vec<(usize, usize)>) {
        let (m, n) = self.shape();
        let mut rows: Vec<Vec<f64>> = (0..m)
            .map(|i| self.entries.row(i).iter().copied().collect())
            .collect();
        let mut pivots = Vec::new();

        let (mut i, mut j) = (0, 0);
        while i < m && j < n {
            let (mut nonzero, zero): (Vec<Vec<f64>>, Vec<Vec<f64>>) =
                rows.drain(i..).partition(|row| row[j] != 0.0);
            let has_pivot = !nonzero.is_empty();
            rows.append(&mut nonzero);
            rows.extend(zero);

            if !has_pivot {
                j += 1;
                continue;
            }

            let pivot_row = rows[i].clone();
            let pivot = pivot_row[j];
            let first = if reduced { 0 } else { i + 1 };
            for (k, row) in rows.iter_mut().enumerate().skip(first) {
                if k == i || row[j] == 0.0 {
                    continue;
                }
                let factor = row[j] / pivot;
                row[j] = 0.0;
                for l in (j + 1)..n {
                    row[l] = round(row[l] - factor * pivot_row[l]);
                }
            }

            rows[i][j] = 1.0;
            for l in (j + 1)..n {
                rows[i][l] = round(pivot_row[l] / pivot);
            }

            pivots.push((i, j));
            i += 1;
            j += 1;
        }

        (DMatrix::from_fn(m, n, |r, c| rows[r][c]), pivots)
    }
}

#[allow(clippy::many_single_char_names)]
fn determinant_of(entries: &DMatrix<f64>) -> f64 {
    let e = |i: usize, j: usize| entries[(i, j)];
    match entries.nrows() {
        1 => e(0, 0),
        2 => round(e(0, 0) * e(1, 1) - e(0, 1) * e(1, 0)),
        3 => {
            let (a, b, c) = (e(0, 0), e(0, 1), e(0, 2));
            let (d, f, g) = (e(1, 0), e(1, 1), e(1, 2));
            let (h, k, l) = (e(2, 0), e(2, 1), e(2, 2));
            round(a * f * l + b * g * h + c * d * k - c * f * h - b * d * l - a * g * k)
        }
        n => {
            let mut det = 0.0;
            for i in 0..n {
                let v = e(i, 0);
                if v == 0.0 {
                    continue;
                }
                let minor = determinant_of(&entries.clone().remove_row(i).remove_column(0));
                if i % 2 == 0 {
                    det += v * minor;
                } else {
                    det -= v * minor;
                }
            }
            round(det)
        }
    }
}

fn check_same_shape(op: &'static str, a: &Matrix, b: &Matrix) -> Result<()> {
    if a.shape() != b.shape() {
        return Err(MatrixError::DimensionMismatch {
            op,
            left: a.shape(),
            right: b.shape(),
        }
        .into());
    }
    Ok(())
}

fn check_angle(degrees: f64) -> Result<()> {
    if degrees.is_nan() {
        return Err(MatrixError::NotANumber.into());
    }
    Ok(())
}

fn rotation_3d(axis: &nalgebra::Unit<NaVector3<f64>>, degrees: f64) -> Result<Matrix> {
    check_angle(degrees)?;
    let rotation = Rotation3::from_axis_angle(axis, degrees.to_radians());
    Ok(Matrix::from_raw(DMatrix::from_column_slice(
        3,
        3,
        rotation.matrix().as_slice(),
    )))
}

/// Coordinate tuples that can be laid out as matrix rows or columns.
///
/// Linear systems over vectors are assembled by stacking vectors into a
/// [`Matrix`], reduced there, and read back as vectors.
pub trait MatrixVector: Sized {
    /// Number of components.
    const DIM: usize;

    /// Components in order.
    fn components(&self) -> Vec<f64>;

    /// Builds a vector from exactly [`Self::DIM`] components.
    ///
    /// # Errors
    ///
    /// Returns an error on a wrong component count or a NaN component.
    fn from_components(components: &[f64]) -> Result<Self>;

    /// `1 x DIM` matrix holding this vector.
    fn row_matrix(&self) -> Matrix {
        Matrix::from_raw(DMatrix::from_row_slice(1, Self::DIM, &self.components()))
    }

    /// `DIM x 1` matrix holding this vector.
    fn column_matrix(&self) -> Matrix {
        Matrix::from_raw(DMatrix::from_column_slice(Self::DIM, 1, &self.components()))
    }

    /// Matrix whose rows are `vectors`.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::Empty`] if `vectors` is empty.
    fn stack_rows(vectors: &[Self]) -> Result<Matrix> {
        if vectors.is_empty() {
            return Err(MatrixError::Empty.into());
        }
        let data: Vec<f64> = vectors.iter().flat_map(Self::components).collect();
        Ok(Matrix::from_raw(DMatrix::from_row_slice(
            vectors.len(),
            Self::DIM,
            &data,
        )))
    }

    /// Matrix whose columns are `vectors`.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::Empty`] if `vectors` is empty.
    fn stack_columns(vectors: &[Self]) -> Result<Matrix> {
        if vectors.is_empty() {
            return Err(MatrixError::Empty.into());
        }
        let data: Vec<f64> = vectors.iter().flat_map(Self::components).collect();
        Ok(Matrix::from_raw(DMatrix::from_column_slice(
            Self::DIM,
            vectors.len(),
            &data,
        )))
    }

    /// Reads a vector back from a `1 x DIM` matrix.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::DimensionMismatch`] for any other shape.
    fn from_row_matrix(matrix: &Matrix) -> Result<Self> {
        expect_shape("from_row_matrix", matrix, (1, Self::DIM))?;
        Self::from_components(&matrix.row(0)?)
    }

    /// Reads a vector back from a `DIM x 1` matrix.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::DimensionMismatch`] for any other shape.
    fn from_column_matrix(matrix: &Matrix) -> Result<Self> {
        expect_shape("from_column_matrix", matrix, (Self::DIM, 1))?;
        Self::from_components(&matrix.column(0)?)
    }

    /// Reads every row of a `k x DIM` matrix as a vector.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::DimensionMismatch`] unless the matrix has
    /// [`Self::DIM`] columns.
    fn rows_of(matrix: &Matrix) -> Result<Vec<Self>> {
        if matrix.cols() != Self::DIM {
            return Err(MatrixError::DimensionMismatch {
                op: "rows_of",
                left: matrix.shape(),
                right: (matrix.rows(), Self::DIM),
            }
            .into());
        }
        (0..matrix.rows())
            .map(|i| Self::from_components(&matrix.row(i)?))
            .collect()
    }

    /// Reads every column of a `DIM x k` matrix as a vector.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::DimensionMismatch`] unless the matrix has
    /// [`Self::DIM`] rows.
    fn columns_of(matrix: &Matrix) -> Result<Vec<Self>> {
        if matrix.rows() != Self::DIM {
            return Err(MatrixError::DimensionMismatch {
                op: "columns_of",
                left: matrix.shape(),
                right: (Self::DIM, matrix.cols()),
            }
            .into());
        }
        (0..matrix.cols())
            .map(|j| Self::from_components(&matrix.column(j)?))
            .collect()
    }
}

fn expect_shape(op: &'static str, matrix: &Matrix, shape: (usize, usize)) -> Result<()> {
    if matrix.shape() != shape {
        return Err(MatrixError::DimensionMismatch {
            op,
            left: matrix.shape(),
            right: shape,
        }
        .into());
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    fn m(rows: &[&[f64]]) -> Matrix {
        Matrix::from_rows(rows).unwrap()
    }

    #[test]
    fn construction_rejects_bad_input() {
        assert!(Matrix::identity(0).is_err());
        assert!(Matrix::diagonal(&[]).is_err());
        assert!(Matrix::diagonal(&[1.0, f64::NAN]).is_err());
        let empty: [&[f64]; 0] = [];
        assert!(Matrix::from_rows(&empty).is_err());
        assert!(Matrix::from_rows(&[&[1.0, 2.0][..], &[3.0][..]]).is_err());
        assert!(Matrix::from_rows(&[[f64::NAN]]).is_err());
    }

    #[test]
    fn identity_and_diagonal() {
        let id = Matrix::identity(3).unwrap();
        assert_eq!(id.entry(1, 1).unwrap(), 1.0);
        assert_eq!(id.entry(0, 2).unwrap(), 0.0);
        let d = Matrix::diagonal(&[2.0, 3.0]).unwrap();
        assert_eq!(d, m(&[&[2.0, 0.0], &[0.0, 3.0]]));
    }

    #[test]
    fn accessors_bounds_check() {
        let a = m(&[&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]]);
        assert_eq!(a.shape(), (2, 3));
        assert_eq!(a.row(1).unwrap(), vec![4.0, 5.0, 6.0]);
        assert_eq!(a.column(2).unwrap(), vec![3.0, 6.0]);
        assert!(a.entry(2, 0).is_err());
        assert!(a.row(2).is_err());
        assert!(a.column(3).is_err());
    }

    #[test]
    fn entries_are_rounded() {
        let a = m(&[&[0.1 + 0.2]]);
        assert_eq!(a.entry(0, 0).unwrap(), 0.3);
    }

    #[test]
    fn submatrix_removes_row_and_column() {
        let a = m(&[&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0], &[7.0, 8.0, 9.0]]);
        let sub = a.submatrix(1, 1).unwrap().unwrap();
        assert_eq!(sub, m(&[&[1.0, 3.0], &[7.0, 9.0]]));
        assert!(m(&[&[1.0, 2.0]]).submatrix(0, 0).unwrap().is_none());
        assert!(a.submatrix(3, 0).is_err());
    }

    #[test]
    fn determinant_closed_forms() {
        assert_eq!(m(&[&[4.0]]).determinant(), Some(4.0));
        assert_eq!(m(&[&[1.0, 2.0], &[3.0, 4.0]]).determinant(), Some(-2.0));
        let a = m(&[&[2.0, 0.0, 1.0], &[1.0, 3.0, 2.0], &[1.0, 1.0, 2.0]]);
        assert_eq!(a.determinant(), Some(6.0));
        assert_eq!(m(&[&[1.0, 2.0]]).determinant(), None);
    }

    #[test]
    fn determinant_by_expansion() {
        let a = m(&[
            &[1.0, 0.0, 2.0, -1.0],
            &[3.0, 0.0, 0.0, 5.0],
            &[2.0, 1.0, 4.0, -3.0],
            &[1.0, 0.0, 5.0, 0.0],
        ]);
        assert_eq!(a.determinant(), Some(30.0));
    }

    #[test]
    fn trace_of_square_only() {
        assert_eq!(m(&[&[1.0, 2.0], &[3.0, 4.0]]).trace(), Some(5.0));
        assert_eq!(m(&[&[1.0, 2.0]]).trace(), None);
    }

    #[test]
    fn echelon_forms() {
        let a = m(&[&[0.0, 2.0, 4.0], &[1.0, 1.0, 1.0], &[2.0, 2.0, 2.0]]);
        let r = a.row_echelon_form();
        assert_eq!(r.row(0).unwrap(), vec![1.0, 1.0, 1.0]);
        assert_eq!(r.row(1).unwrap(), vec![0.0, 1.0, 2.0]);
        assert_eq!(r.row(2).unwrap(), vec![0.0, 0.0, 0.0]);

        let rr = a.reduced_row_echelon_form();
        assert_eq!(rr.row(0).unwrap(), vec![1.0, 0.0, -1.0]);
        assert_eq!(rr.row(1).unwrap(), vec![0.0, 1.0, 2.0]);
        assert_eq!(a.rank(), 2);
        assert_eq!(a.nullity(), 1);
        assert_eq!(a.pivots(), vec![(0, 0), (1, 1)]);
    }

    #[test]
    fn zero_rows_sink_before_pivoting() {
        let a = m(&[&[0.0, 1.0], &[0.0, 0.0], &[3.0, 0.0]]);
        let r = a.reduced_row_echelon_form();
        assert_eq!(r.row(0).unwrap(), vec![1.0, 0.0]);
        assert_eq!(r.row(1).unwrap(), vec![0.0, 1.0]);
        assert_eq!(r.row(2).unwrap(), vec![0.0, 0.0]);
        assert_eq!(a.rank(), 2);
    }

    #[test]
    fn rank_is_stable_under_noise() {
        let a = m(&[&[0.1, 0.2, 0.3], &[0.2, 0.4, 0.6], &[0.3, 0.6, 0.9]]);
        assert_eq!(a.rank(), 1);
    }

    #[test]
    fn minors_cofactors_adjoint() {
        let a = m(&[&[1.0, 2.0], &[3.0, 4.0]]);
        assert_eq!(a.minor(0, 0).unwrap(), 4.0);
        assert_eq!(a.cofactor(0, 1).unwrap(), -3.0);
        assert_eq!(a.adjoint().unwrap(), m(&[&[4.0, -2.0], &[-3.0, 1.0]]));
        assert_eq!(m(&[&[5.0]]).minor(0, 0).unwrap(), 1.0);
        assert!(m(&[&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]]).minor(0, 0).is_err());
    }

    #[test]
    fn inverse_of_invertible() {
        let a = m(&[&[4.0, 7.0], &[2.0, 6.0]]);
        let inv = a.inverse().unwrap();
        let product = Matrix::multiply(&a, &inv).unwrap();
        assert_eq!(product, Matrix::identity(2).unwrap());
        assert_eq!(m(&[&[2.0]]).inverse().unwrap(), m(&[&[0.5]]));
    }

    #[test]
    fn singular_or_rectangular_has_no_inverse() {
        assert!(m(&[&[1.0, 2.0], &[2.0, 4.0]]).inverse().is_none());
        assert!(m(&[&[1.0, 2.0, 3.0]]).inverse().is_none());
    }

    #[test]
    fn bases() {
        let a = m(&[&[1.0, 2.0, 0.0], &[2.0, 4.0, 1.0]]);
        assert_eq!(
            a.basis_for_column_space(),
            vec![vec![1.0, 2.0], vec![0.0, 1.0]]
        );
        assert_eq!(a.basis_for_row_space().len(), 2);
    }

    #[test]
    fn arithmetic_checks_dimensions() {
        let a = m(&[&[1.0, 2.0], &[3.0, 4.0]]);
        let b = m(&[&[1.0, 1.0]]);
        assert_eq!(
            Matrix::add(&a, &a).unwrap(),
            m(&[&[2.0, 4.0], &[6.0, 8.0]])
        );
        assert_eq!(
            Matrix::subtract(&a, &a).unwrap(),
            m(&[&[0.0, 0.0], &[0.0, 0.0]])
        );
        assert!(Matrix::add(&a, &b).is_err());
        assert!(Matrix::subtract(&a, &b).is_err());
        assert_eq!(Matrix::multiply(&b, &a).unwrap(), m(&[&[4.0, 6.0]]));
        assert!(Matrix::multiply(&a, &b).is_err());
        assert_eq!(
            Matrix::scale(0.5, &a).unwrap(),
            m(&[&[0.5, 1.0], &[1.5, 2.0]])
        );
        assert!(Matrix::scale(f64::NAN, &a).is_err());
    }

    #[test]
    fn rotation_2d_quarter_turn() {
        let r = Matrix::rotation_2d(90.0).unwrap();
        let v = Matrix::multiply(&r, &m(&[&[1.0], &[0.0]])).unwrap();
        assert_abs_diff_eq!(v.entry(0, 0).unwrap(), 0.0);
        assert_abs_diff_eq!(v.entry(1, 0).unwrap(), 1.0);
        assert!(Matrix::rotation_2d(f64::NAN).is_err());
    }

    #[test]
    fn rotation_3d_axes() {
        let e1 = m(&[&[1.0], &[0.0], &[0.0]]);
        let e2 = m(&[&[0.0], &[1.0], &[0.0]]);
        let rz = Matrix::rotation_3d_z(90.0).unwrap();
        assert_eq!(Matrix::multiply(&rz, &e1).unwrap(), e2);
        let rx = Matrix::rotation_3d_x(90.0).unwrap();
        assert_eq!(
            Matrix::multiply(&rx, &e2).unwrap(),
            m(&[&[0.0], &[0.0], &[1.0]])
        );
        let ry = Matrix::rotation_3d_y(90.0).unwrap();
        assert_eq!(
            Matrix::multiply(&ry, &e1).unwrap(),
            m(&[&[0.0], &[0.0], &[-1.0]])
        );
    }
}
