//! Restricted Hartree-Fock for HeH+ in an STO-nG minimal basis.

pub mod app;
pub mod config;
pub mod conventions;
pub mod error;
pub mod hamiltonian;
pub mod io;
pub mod jacobi;
pub mod scf_impl;
pub mod system;

pub use conventions::{Conventions, DensityConvention, ExponentSource, OrthogonalizerScheme};
pub use error::ScfError;
pub use hamiltonian::{CoreMatrices, EriTensor};
pub use jacobi::{diagonalize, Eigen2};
pub use scf_impl::{IterationRecord, ScfOutcome, ScfSettings, ScfStatus, SimpleSCF};
pub use system::{Calculation, DiatomicSystem};
