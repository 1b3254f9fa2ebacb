//! Switches for the few steps that have a textbook form and a second,
//! literal form: the fill order of the reference program.

use serde::{Deserialize, Serialize};

/// How the 2x2 orthogonalizer X is filled from S12.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrthogonalizerScheme {
    /// `X = [[a, b], [a, -b]]`, `a = 1/sqrt(2(1+S12))`, `b = 1/sqrt(2(1-S12))`.
    #[default]
    Canonical,
    /// The reference program's fill order, which leaves `X[1,0] = 0`.
    Reference,
}

/// Which coefficients enter the closed-shell density.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DensityConvention {
    /// `P[i,j] = 2 C[i,0] C[j,0]`
    #[default]
    Occupied,
    /// `P[i,j] = 2 C[i,0] C[0,j]`
    Reference,
}

/// Which value is used as the Slater exponent of the second atom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExponentSource {
    #[default]
    AsGiven,
    /// The first nuclear charge is used in place of the second exponent.
    ReferenceDriver,
}

impl ExponentSource {
    /// Exponent actually used for the second center.
    pub fn second_zeta(self, zeta2: f64, z_h: f64) -> f64 {
        match self {
            ExponentSource::AsGiven => zeta2,
            ExponentSource::ReferenceDriver => z_h,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Conventions {
    #[serde(default)]
    pub orthogonalizer: OrthogonalizerScheme,
    #[serde(default)]
    pub density: DensityConvention,
    #[serde(default)]
    pub exponents: ExponentSource,
}

impl Conventions {
    /// Every step in the reference program's form.
    pub fn reference() -> Self {
        Self {
            orthogonalizer: OrthogonalizerScheme::Reference,
            density: DensityConvention::Reference,
            exponents: ExponentSource::ReferenceDriver,
        }
    }

    pub fn is_textbook(&self) -> bool {
        *self == Self::default()
    }
}
