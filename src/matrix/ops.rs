//! Small dense symmetric matrix operations
//!
//! The Epps-Singleton statistic needs a quadratic form with the
//! pseudo-inverse of a covariance matrix of empirical characteristic
//! function values. Those matrices are tiny (2 × number of evaluation
//! points) and symmetric positive semi-definite, so a stack-allocated
//! Jacobi eigendecomposition covers everything.
//!
//! # Example
//!
//! ```
//! use twosample::matrix::Eigen;
//!
//! let cov = [
//!     [4.0, 2.0],
//!     [2.0, 3.0],
//! ];
//! let eig = Eigen::decompose_symmetric(&cov);
//! let pinv = eig.pseudo_inverse(1e-15);
//!
//! // Σ⁺ Σ = I for a full-rank matrix
//! let prod00 = pinv.matrix[0][0] * cov[0][0] + pinv.matrix[0][1] * cov[1][0];
//! assert!((prod00 - 1.0).abs() < 1e-10);
//! assert_eq!(pinv.rank, 2);
//! ```

/// Eigenvalue decomposition for symmetric matrices
/// Returns eigenvalues and eigenvectors
///
/// Eigenvectors are stored column-wise: `vectors[row][k]` is component `row`
/// of eigenvector `k`.
#[derive(Debug, Clone)]
pub struct Eigen<const N: usize> {
    values: [f64; N],
    vectors: [[f64; N]; N],
}

/// Moore-Penrose pseudo-inverse together with its rank.
#[derive(Debug, Clone)]
pub struct PseudoInverse<const N: usize> {
    pub matrix: [[f64; N]; N],
    pub rank: usize,
}

impl<const N: usize> Eigen<N> {
    /// Compute eigendecomposition using the classical Jacobi algorithm
    pub fn decompose_symmetric(matrix: &[[f64; N]; N]) -> Self {
        const TOLERANCE: f64 = 1e-14;
        let max_iterations = 50 * N * N;

        let mut a = *matrix;
        let mut v = [[0.0; N]; N];
        for i in 0..N {
            v[i][i] = 1.0;
        }

        // Off-diagonal tolerance is relative to the Frobenius norm
        let scale = a
            .iter()
            .flat_map(|row| row.iter())
            .map(|x| x * x)
            .sum::<f64>()
            .sqrt();
        if scale == 0.0 {
            return Self { values: [0.0; N], vectors: v };
        }

        for _ in 0..max_iterations {
            // Find largest off-diagonal element
            let mut max_val = 0.0;
            let mut p = 0;
            let mut q = 0;
            for i in 0..N {
                for j in (i + 1)..N {
                    if a[i][j].abs() > max_val {
                        max_val = a[i][j].abs();
                        p = i;
                        q = j;
                    }
                }
            }

            if max_val <= TOLERANCE * scale {
                break;
            }

            // Rotation angle that zeroes a[p][q]
            let theta = (a[q][q] - a[p][p]) / (2.0 * a[p][q]);
            let t = theta.signum() / (theta.abs() + (1.0 + theta * theta).sqrt());
            let c = 1.0 / (1.0 + t * t).sqrt();
            let s = t * c;

            let app = a[p][p];
            let aqq = a[q][q];
            let apq = a[p][q];

            a[p][p] = app - t * apq;
            a[q][q] = aqq + t * apq;
            a[p][q] = 0.0;
            a[q][p] = 0.0;

            for i in 0..N {
                if i != p && i != q {
                    let aip = a[i][p];
                    let aiq = a[i][q];
                    a[i][p] = c * aip - s * aiq;
                    a[p][i] = a[i][p];
                    a[i][q] = s * aip + c * aiq;
                    a[q][i] = a[i][q];
                }
            }

            for row in v.iter_mut() {
                let vip = row[p];
                let viq = row[q];
                row[p] = c * vip - s * viq;
                row[q] = s * vip + c * viq;
            }
        }

        let mut values = [0.0; N];
        for i in 0..N {
            values[i] = a[i][i];
        }

        Self { values, vectors: v }
    }

    /// Get eigenvalues (sorted descending)
    pub fn values(&self) -> [f64; N] {
        let mut sorted = self.values;
        sorted.sort_by(|a, b| b.total_cmp(a));
        sorted
    }

    /// Get eigenvectors
    #[inline]
    pub fn vectors(&self) -> &[[f64; N]; N] {
        &self.vectors
    }

    /// Pseudo-inverse keeping eigenvalues above `rcond` times the largest.
    ///
    /// Non-positive eigenvalues count as zero, so the quadratic form of the
    /// result is never negative.
    pub fn pseudo_inverse(&self, rcond: f64) -> PseudoInverse<N> {
        let largest = self.values.iter().fold(0.0f64, |m, &x| m.max(x.abs()));
        let cutoff = rcond * largest;

        let mut matrix = [[0.0; N]; N];
        let mut rank = 0;
        for k in 0..N {
            let lambda = self.values[k];
            if lambda <= cutoff || lambda <= 0.0 {
                continue;
            }
            rank += 1;
            let inv = 1.0 / lambda;
            for i in 0..N {
                for j in 0..N {
                    matrix[i][j] += inv * self.vectors[i][k] * self.vectors[j][k];
                }
            }
        }

        PseudoInverse { matrix, rank }
    }
}

impl<const N: usize> PseudoInverse<N> {
    /// Quadratic form `xᵀ M x`
    #[inline]
    pub fn quadratic_form(&self, x: &[f64; N]) -> f64 {
        let mut sum = 0.0;
        for i in 0..N {
            for j in 0..N {
                sum += x[i] * self.matrix[i][j] * x[j];
            }
        }
        sum
    }
}
