//! The five physical inputs of a calculation and the pipeline that turns them
//! into an SCF outcome.

use crate::conventions::Conventions;
use crate::error::ScfError;
use crate::hamiltonian::CoreMatrices;
use crate::scf_impl::{ScfOutcome, ScfSettings, SimpleSCF};
use basis::{IntegralSet, StoDegree};
use serde::{Deserialize, Serialize};
use tracing::info;

/// Atom 1 ("H") at the origin, atom 2 ("He") at `bond_length` bohr.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DiatomicSystem {
    pub degree: StoDegree,
    pub bond_length: f64,
    pub zeta1: f64,
    pub zeta2: f64,
    pub z_h: f64,
    pub z_he: f64,
}

impl DiatomicSystem {
    /// HeH+ in STO-3G at R = 1.4632 bohr.
    pub fn heh_cation() -> Self {
        DiatomicSystem {
            degree: StoDegree::Sto3G,
            bond_length: 1.4632,
            zeta1: 1.24,
            zeta2: 2.0925,
            z_h: 1.0,
            z_he: 2.0,
        }
    }

    pub fn nuclear_repulsion(&self) -> f64 {
        self.z_h * self.z_he / self.bond_length
    }

    pub fn integrals(&self, conventions: &Conventions) -> Result<IntegralSet, ScfError> {
        let zeta2 = conventions.exponents.second_zeta(self.zeta2, self.z_h);
        let ints = IntegralSet::sto_ng(
            self.degree,
            self.bond_length,
            self.zeta1,
            zeta2,
            self.z_h,
            self.z_he,
        )?;
        Ok(ints)
    }

    pub fn run(&self, settings: &ScfSettings, conventions: &Conventions) -> Result<Calculation, ScfError> {
        info!(
            "Hartree-Fock calculation with {} at R = {:.4} bohr (zeta = {}, {}; Z = {}, {})",
            self.degree, self.bond_length, self.zeta1, self.zeta2, self.z_h, self.z_he
        );
        if !conventions.is_textbook() {
            info!("Using non-default conventions: {:?}", conventions);
        }

        let integrals = self.integrals(conventions)?;
        let core = CoreMatrices::build(&integrals, conventions.orthogonalizer)?;

        let mut scf = SimpleSCF::new(core.clone(), self.nuclear_repulsion(), conventions.density);
        scf.apply_settings(settings);
        scf.init_density_matrix();
        let outcome = scf.scf_cycle();

        Ok(Calculation {
            system: *self,
            conventions: *conventions,
            integrals,
            core,
            outcome,
        })
    }
}

/// Everything produced by one run, kept together for reporting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Calculation {
    pub system: DiatomicSystem,
    pub conventions: Conventions,
    pub integrals: IntegralSet,
    pub core: CoreMatrices,
    pub outcome: ScfOutcome,
}
