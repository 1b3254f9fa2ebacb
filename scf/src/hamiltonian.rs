//! Core Hamiltonian, overlap, orthogonalizer and ERI tensor of the two-function basis.

use crate::conventions::OrthogonalizerScheme;
use crate::error::ScfError;
use basis::IntegralSet;
use nalgebra::Matrix2;
use serde::{Deserialize, Serialize};
use std::ops::Index;
use tracing::debug;

/// `(ij|kl)` over the two AOs, stored densely.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct EriTensor {
    values: [[[[f64; 2]; 2]; 2]; 2],
}

impl EriTensor {
    /// Spreads the six distinct values over all sixteen index combinations.
    pub fn from_integrals(ints: &IntegralSet) -> Self {
        let mut v = [[[[0.0; 2]; 2]; 2]; 2];
        v[0][0][0][0] = ints.v1111;
        v[0][0][0][1] = ints.v2111;
        v[0][0][1][0] = ints.v2111;
        v[0][0][1][1] = ints.v2211;
        v[0][1][0][0] = ints.v2111;
        v[0][1][0][1] = ints.v2121;
        v[0][1][1][0] = ints.v2121;
        v[0][1][1][1] = ints.v2221;
        v[1][0][0][0] = ints.v2111;
        v[1][0][0][1] = ints.v2121;
        v[1][0][1][0] = ints.v2121;
        v[1][0][1][1] = ints.v2221;
        v[1][1][0][0] = ints.v2211;
        v[1][1][0][1] = ints.v2221;
        v[1][1][1][0] = ints.v2221;
        v[1][1][1][1] = ints.v2222;
        Self { values: v }
    }
}

impl Index<(usize, usize, usize, usize)> for EriTensor {
    type Output = f64;

    fn index(&self, (i, j, k, l): (usize, usize, usize, usize)) -> &f64 {
        &self.values[i][j][k][l]
    }
}

/// Everything the SCF loop needs that does not depend on the density.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoreMatrices {
    pub h_core: Matrix2<f64>,
    pub overlap: Matrix2<f64>,
    pub x: Matrix2<f64>,
    pub eri: EriTensor,
}

impl CoreMatrices {
    pub fn build(ints: &IntegralSet, scheme: OrthogonalizerScheme) -> Result<Self, ScfError> {
        let (h11, h12, h22) = ints.core_hamiltonian();
        let h_core = Matrix2::new(h11, h12, h12, h22);
        let overlap = Matrix2::new(1.0, ints.s12, ints.s12, 1.0);
        let x = orthogonalizer(ints.s12, scheme)?;
        let eri = EriTensor::from_integrals(ints);

        debug!("H core = {}", h_core);
        debug!("X = {}", x);

        Ok(Self {
            h_core,
            overlap,
            x,
            eri,
        })
    }
}

/// Orthogonalizer for the overlap `[[1, s12], [s12, 1]]`.
pub fn orthogonalizer(s12: f64, scheme: OrthogonalizerScheme) -> Result<Matrix2<f64>, ScfError> {
    if !(1.0 - s12.abs() > f64::EPSILON) {
        return Err(ScfError::NumericDomain { s12 });
    }

    let mut x = Matrix2::zeros();
    x[(0, 0)] = 1.0 / (2.0 * (1.0 + s12)).sqrt();
    match scheme {
        OrthogonalizerScheme::Canonical => {
            x[(1, 0)] = x[(0, 0)];
            x[(0, 1)] = 1.0 / (2.0 * (1.0 - s12)).sqrt();
        }
        OrthogonalizerScheme::Reference => {
            // the first store is overwritten at once, X[1,0] stays zero
            x[(0, 1)] = x[(0, 0)];
            x[(0, 1)] = 1.0 / (2.0 * (1.0 - s12)).sqrt();
        }
    }
    x[(1, 1)] = -x[(0, 1)];
    Ok(x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use basis::StoDegree;

    fn heh_integrals() -> IntegralSet {
        IntegralSet::sto_ng(StoDegree::Sto3G, 1.4632, 1.24, 2.0925, 1.0, 2.0).unwrap()
    }

    #[test]
    fn test_overlap_unit_diagonal_and_symmetric() {
        for n in 1..=3 {
            for &r in &[0.5, 1.4632, 4.0] {
                let degree = StoDegree::try_from(n).unwrap();
                let ints = IntegralSet::sto_ng(degree, r, 1.24, 2.0925, 1.0, 2.0).unwrap();
                let core = CoreMatrices::build(&ints, OrthogonalizerScheme::Canonical).unwrap();
                assert_eq!(core.overlap[(0, 0)], 1.0);
                assert_eq!(core.overlap[(1, 1)], 1.0);
                assert_eq!(core.overlap, core.overlap.transpose());
                assert_eq!(core.h_core, core.h_core.transpose());
            }
        }
    }

    #[test]
    fn test_core_hamiltonian_elements() {
        let ints = heh_integrals();
        let core = CoreMatrices::build(&ints, OrthogonalizerScheme::Canonical).unwrap();
        assert_eq!(core.h_core[(0, 0)], ints.t11 + ints.v11_h + ints.v11_he);
        assert_eq!(core.h_core[(0, 1)], ints.t12 + ints.v12_h + ints.v12_he);
        assert_eq!(core.h_core[(1, 1)], ints.t22 + ints.v22_h + ints.v22_he);
        // textbook HeH+ values with the atoms relabelled
        assert_relative_eq!(core.h_core[(0, 0)], -1.731828, epsilon = 1e-5);
        assert_relative_eq!(core.h_core[(1, 1)], -2.652744, epsilon = 1e-5);
        assert_relative_eq!(core.h_core[(0, 1)], -1.347204, epsilon = 1e-5);
    }

    #[test]
    fn test_canonical_orthogonalizer_orthonormalises() {
        let s12 = 0.4507704116477877;
        let s = Matrix2::new(1.0, s12, s12, 1.0);
        let x = orthogonalizer(s12, OrthogonalizerScheme::Canonical).unwrap();
        let xsx = x.transpose() * s * x;
        assert_relative_eq!(xsx, Matrix2::identity(), epsilon = 1e-14);
    }

    #[test]
    fn test_reference_orthogonalizer_layout() {
        let s12 = 0.45;
        let x = orthogonalizer(s12, OrthogonalizerScheme::Reference).unwrap();
        assert_eq!(x[(0, 0)], 1.0 / (2.0 * (1.0 + s12)).sqrt());
        assert_eq!(x[(0, 1)], 1.0 / (2.0 * (1.0 - s12)).sqrt());
        assert_eq!(x[(1, 0)], 0.0);
        assert_eq!(x[(1, 1)], -x[(0, 1)]);
    }

    #[test]
    fn test_orthogonalizer_domain_guard() {
        assert_eq!(
            orthogonalizer(1.0, OrthogonalizerScheme::Canonical),
            Err(ScfError::NumericDomain { s12: 1.0 })
        );
        assert!(orthogonalizer(-1.0, OrthogonalizerScheme::Reference).is_err());
        assert!(orthogonalizer(f64::NAN, OrthogonalizerScheme::Canonical).is_err());
        assert!(orthogonalizer(0.999, OrthogonalizerScheme::Canonical).is_ok());
    }

    #[test]
    fn test_eri_permutational_symmetry() {
        let eri = EriTensor::from_integrals(&heh_integrals());
        for i in 0..2 {
            for j in 0..2 {
                for k in 0..2 {
                    for l in 0..2 {
                        let v = eri[(i, j, k, l)];
                        assert_eq!(v, eri[(j, i, k, l)]);
                        assert_eq!(v, eri[(i, j, l, k)]);
                        assert_eq!(v, eri[(k, l, i, j)]);
                    }
                }
            }
        }
        assert_eq!(eri[(0, 0, 1, 1)], heh_integrals().v2211);
        assert_eq!(eri[(1, 0, 1, 0)], heh_integrals().v2121);
    }
}
