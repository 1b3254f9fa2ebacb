use basis::BasisError;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum ScfError {
    Basis(BasisError),
    /// `1 -/+ S12` vanishes, so the orthogonalizer is undefined.
    NumericDomain { s12: f64 },
}

impl fmt::Display for ScfError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScfError::Basis(err) => write!(f, "basis setup failed: {}", err),
            ScfError::NumericDomain { s12 } => write!(
                f,
                "overlap S12 = {} is too close to +/-1 for canonical orthogonalization",
                s12
            ),
        }
    }
}

impl std::error::Error for ScfError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ScfError::Basis(err) => Some(err),
            ScfError::NumericDomain { .. } => None,
        }
    }
}

impl From<BasisError> for ScfError {
    fn from(err: BasisError) -> Self {
        ScfError::Basis(err)
    }
}
