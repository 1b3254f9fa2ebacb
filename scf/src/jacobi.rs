//! Closed-form Jacobi rotation for a real symmetric 2x2 matrix.

use nalgebra::Matrix2;
use std::f64::consts::FRAC_PI_4;

/// Diagonal gap below which the rotation angle is taken as pi/4.
pub const DEGENERACY_THRESHOLD: f64 = 1.0e-20;

/// Eigenvectors (columns of `vectors`) and ascending eigenvalues.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Eigen2 {
    pub vectors: Matrix2<f64>,
    pub values: Matrix2<f64>,
}

impl Eigen2 {
    pub fn lowest(&self) -> f64 {
        self.values[(0, 0)]
    }

    pub fn highest(&self) -> f64 {
        self.values[(1, 1)]
    }

    pub fn energies(&self) -> [f64; 2] {
        [self.lowest(), self.highest()]
    }
}

/// Diagonalizes `m` with a single plane rotation.
///
/// When the eigenvalues come out descending they are swapped, and with them
/// only the diagonal entries of the eigenvector matrix; the off-diagonal
/// entries keep their rotated positions.
pub fn diagonalize(m: &Matrix2<f64>) -> Eigen2 {
    let gap = m[(0, 0)] - m[(1, 1)];
    let theta = if gap.abs() > DEGENERACY_THRESHOLD {
        0.5 * (2.0 * m[(0, 1)] / gap).atan()
    } else {
        FRAC_PI_4
    };
    let (sin, cos) = theta.sin_cos();
    let sin2 = (2.0 * theta).sin();

    let mut vectors = Matrix2::new(cos, sin, sin, -cos);
    let mut values = Matrix2::zeros();
    values[(0, 0)] = m[(0, 0)] * cos * cos + m[(1, 1)] * sin * sin + m[(0, 1)] * sin2;
    values[(1, 1)] = m[(1, 1)] * cos * cos + m[(0, 0)] * sin * sin - m[(0, 1)] * sin2;

    if values[(1, 1)] <= values[(0, 0)] {
        values.swap((0, 0), (1, 1));
        vectors.swap((0, 0), (1, 1));
    }

    Eigen2 { vectors, values }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_already_diagonal() {
        let eig = diagonalize(&Matrix2::new(2.0, 0.0, 0.0, 1.0));
        assert_eq!(eig.energies(), [1.0, 2.0]);
        assert_eq!(eig.values[(0, 1)], 0.0);
        assert_eq!(eig.values[(1, 0)], 0.0);
        // theta = 0, so only the diagonal of [[1, 0], [0, -1]] is exchanged
        assert_eq!(eig.vectors, Matrix2::new(-1.0, 0.0, 0.0, 1.0));
    }

    #[test]
    fn test_ascending_order() {
        let cases = [
            Matrix2::new(1.0, 0.3, 0.3, 2.0),
            Matrix2::new(2.0, 0.3, 0.3, 1.0),
            Matrix2::new(-1.5, -0.7, -0.7, 0.2),
            Matrix2::new(0.5, 1.0, 1.0, 0.5),
            Matrix2::new(-3.0, 0.0, 0.0, -3.0),
        ];
        for m in cases.iter() {
            let eig = diagonalize(m);
            assert!(eig.lowest() <= eig.highest(), "not ascending for {}", m);
        }
    }

    #[test]
    fn test_eigenvalues_match_characteristic_polynomial() {
        let m = Matrix2::new(-1.2, 0.4, 0.4, 0.3);
        let eig = diagonalize(&m);
        let mean = 0.5 * (m[(0, 0)] + m[(1, 1)]);
        let half_gap = (0.25 * (m[(0, 0)] - m[(1, 1)]).powi(2) + m[(0, 1)].powi(2)).sqrt();
        assert_abs_diff_eq!(eig.lowest(), mean - half_gap, epsilon = 1e-14);
        assert_abs_diff_eq!(eig.highest(), mean + half_gap, epsilon = 1e-14);
        assert_abs_diff_eq!(eig.lowest() + eig.highest(), m.trace(), epsilon = 1e-14);
    }

    #[test]
    fn test_degenerate_diagonal_uses_quarter_turn() {
        let m = Matrix2::new(0.5, 0.25, 0.25, 0.5);
        let eig = diagonalize(&m);
        assert_abs_diff_eq!(eig.lowest(), 0.25, epsilon = 1e-15);
        assert_abs_diff_eq!(eig.highest(), 0.75, epsilon = 1e-15);
        let c = FRAC_PI_4.cos();
        assert_abs_diff_eq!(eig.vectors[(1, 0)], FRAC_PI_4.sin(), epsilon = 1e-15);
        assert_abs_diff_eq!(eig.vectors[(0, 0)], -c, epsilon = 1e-15);
    }

    #[test]
    fn test_no_swap_keeps_rotation() {
        // M00 < M11 with a small coupling: the first rotated value is already the lowest
        let m = Matrix2::new(-2.0, 0.1, 0.1, 1.0);
        let eig = diagonalize(&m);
        let v0 = eig.vectors.column(0);
        let mv0 = m * v0;
        assert_abs_diff_eq!(mv0[0], eig.lowest() * v0[0], epsilon = 1e-14);
        assert_abs_diff_eq!(mv0[1], eig.lowest() * v0[1], epsilon = 1e-14);
    }
}
