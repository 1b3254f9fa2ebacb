use std::fmt;

/// Input validation failures raised before any integral is evaluated.
#[derive(Debug, Clone, PartialEq)]
pub enum BasisError {
    /// STO-nG is only tabulated for n = 1, 2, 3.
    InvalidBasisDegree(usize),
    NonPositiveExponent(f64),
    NonPositiveBondLength(f64),
    /// Both centers must be expanded in the same number of primitives.
    MismatchedContraction { h: usize, he: usize },
}

impl fmt::Display for BasisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BasisError::InvalidBasisDegree(n) => {
                write!(f, "invalid STO-nG degree {}: expected 1, 2 or 3", n)
            }
            BasisError::NonPositiveExponent(zeta) => {
                write!(f, "Slater exponent must be positive and finite, got {}", zeta)
            }
            BasisError::NonPositiveBondLength(r) => {
                write!(f, "bond length must be positive and finite, got {}", r)
            }
            BasisError::MismatchedContraction { h, he } => {
                write!(f, "contraction lengths differ: {} on H, {} on He", h, he)
            }
        }
    }
}

impl std::error::Error for BasisError {}
