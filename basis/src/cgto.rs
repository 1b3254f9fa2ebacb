/* STO-nG contracted s functions.

   Each atom of the diatomic carries one 1s Slater orbital, expanded in
   n = 1..3 normalised Gaussians whose exponents are scaled by zeta^2.
*/

use crate::error::BasisError;
use crate::gto::PrimitiveGaussian;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use std::fmt;

// STO-nG fits to a zeta = 1.0 Slater 1s orbital; row n-1 holds STO-nG.
const STO_COEFFICIENTS: [[f64; 3]; 3] = [
    [1.000000, 0.000000, 0.000000],
    [0.678914, 0.430129, 0.000000],
    [0.444635, 0.535328, 0.154329],
];

const STO_EXPONENTS: [[f64; 3]; 3] = [
    [0.270950, 0.000000, 0.000000],
    [0.151623, 0.851819, 0.000000],
    [0.109818, 0.405771, 2.227660],
];

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub enum StoDegree {
    Sto1G,
    Sto2G,
    Sto3G,
}

impl StoDegree {
    /// Number of primitives in the contraction.
    pub fn n(self) -> usize {
        match self {
            StoDegree::Sto1G => 1,
            StoDegree::Sto2G => 2,
            StoDegree::Sto3G => 3,
        }
    }

    fn row(self) -> usize {
        self.n() - 1
    }
}

impl TryFrom<usize> for StoDegree {
    type Error = BasisError;

    fn try_from(n: usize) -> Result<Self, Self::Error> {
        match n {
            1 => Ok(StoDegree::Sto1G),
            2 => Ok(StoDegree::Sto2G),
            3 => Ok(StoDegree::Sto3G),
            _ => Err(BasisError::InvalidBasisDegree(n)),
        }
    }
}

impl From<StoDegree> for usize {
    fn from(degree: StoDegree) -> usize {
        degree.n()
    }
}

impl fmt::Display for StoDegree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "STO-{}G", self.n())
    }
}

/// One contracted 1s function together with the nucleus it sits on.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContractedBasis {
    pub primitives: Vec<PrimitiveGaussian>,
    pub zeta: f64,
    pub charge: f64,
}

impl ContractedBasis {
    /// Builds the STO-nG expansion of a 1s Slater orbital with exponent `zeta`.
    pub fn sto_ng(degree: StoDegree, zeta: f64, charge: f64) -> Result<Self, BasisError> {
        if !(zeta.is_finite() && zeta > 0.0) {
            return Err(BasisError::NonPositiveExponent(zeta));
        }

        let row = degree.row();
        let primitives = (0..degree.n())
            .map(|i| {
                let alpha = STO_EXPONENTS[row][i] * zeta.powi(2);
                let coeff = STO_COEFFICIENTS[row][i] * (2.0 * alpha / PI).powf(0.75);
                PrimitiveGaussian::new(alpha, coeff)
            })
            .collect();

        Ok(Self {
            primitives,
            zeta,
            charge,
        })
    }

    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }

    pub fn alpha(&self, i: usize) -> f64 {
        self.primitives[i].alpha
    }

    pub fn coeff(&self, i: usize) -> f64 {
        self.primitives[i].coeff
    }

    /// `<phi|phi>` summed over all primitive pairs.
    pub fn self_overlap(&self) -> f64 {
        let mut s = 0.0;
        for a in &self.primitives {
            for b in &self.primitives {
                s += a.coeff * b.coeff * PrimitiveGaussian::Sab(a.alpha, b.alpha, 0.0);
            }
        }
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_degree_from_integer() {
        assert_eq!(StoDegree::try_from(1), Ok(StoDegree::Sto1G));
        assert_eq!(StoDegree::try_from(3), Ok(StoDegree::Sto3G));
        assert_eq!(StoDegree::try_from(0), Err(BasisError::InvalidBasisDegree(0)));
        assert_eq!(StoDegree::try_from(4), Err(BasisError::InvalidBasisDegree(4)));
        assert_eq!(StoDegree::Sto2G.to_string(), "STO-2G");
    }

    #[test]
    fn test_primitive_count() {
        for n in 1..=3 {
            let degree = StoDegree::try_from(n).unwrap();
            let cgto = ContractedBasis::sto_ng(degree, 1.24, 1.0).unwrap();
            assert_eq!(cgto.len(), n);
        }
    }

    #[test]
    fn test_exponents_scale_with_zeta_squared() {
        let unit = ContractedBasis::sto_ng(StoDegree::Sto3G, 1.0, 1.0).unwrap();
        let scaled = ContractedBasis::sto_ng(StoDegree::Sto3G, 2.0925, 2.0).unwrap();
        for i in 0..3 {
            assert_eq!(unit.alpha(i), STO_EXPONENTS[2][i]);
            assert_relative_eq!(scaled.alpha(i), unit.alpha(i) * 2.0925 * 2.0925, epsilon = 1e-15);
        }
        assert_eq!(scaled.charge, 2.0);
    }

    #[test]
    fn test_sto1g_is_a_single_normalised_gaussian() {
        let cgto = ContractedBasis::sto_ng(StoDegree::Sto1G, 1.24, 1.0).unwrap();
        let alpha = 0.270950 * 1.24 * 1.24;
        assert_relative_eq!(cgto.alpha(0), alpha, epsilon = 1e-15);
        assert_relative_eq!(cgto.coeff(0), (2.0 * alpha / PI).powf(0.75), epsilon = 1e-15);
    }

    #[test]
    fn test_contractions_are_nearly_normalised() {
        // tabulated coefficients are rounded to six digits
        for n in 1..=3 {
            let degree = StoDegree::try_from(n).unwrap();
            let cgto = ContractedBasis::sto_ng(degree, 2.0925, 2.0).unwrap();
            assert_relative_eq!(cgto.self_overlap(), 1.0, epsilon = 1e-4);
        }
    }

    #[test]
    fn test_rejects_bad_zeta() {
        assert_eq!(
            ContractedBasis::sto_ng(StoDegree::Sto3G, 0.0, 1.0).unwrap_err(),
            BasisError::NonPositiveExponent(0.0)
        );
        assert!(ContractedBasis::sto_ng(StoDegree::Sto3G, f64::NAN, 1.0).is_err());
    }
}
