//! STO-nG basis functions and integrals for a two-center, two-function
//! Hartree-Fock problem.

pub mod cgto;
pub mod error;
pub mod gto;
pub mod helper;
pub mod integrals;

pub use cgto::{ContractedBasis, StoDegree};
pub use error::BasisError;
pub use gto::PrimitiveGaussian;
pub use integrals::IntegralSet;
