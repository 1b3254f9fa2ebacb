//! Restricted closed-shell SCF iteration for the two-function basis.
//!
//! One doubly occupied orbital, a zero initial density (core-Hamiltonian
//! guess) and convergence judged on the RMS change of the density matrix.

use crate::conventions::DensityConvention;
use crate::hamiltonian::CoreMatrices;
use crate::jacobi::diagonalize;
use nalgebra::Matrix2;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};


pub const DEFAULT_MAX_CYCLE: usize = 250;
pub const DEFAULT_CONVERGENCE_THRESHOLD: f64 = 1.0e-15;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScfSettings {
    pub max_cycle: usize,
    /// Bound on the RMS density change.
    pub convergence_threshold: f64,
}

impl Default for ScfSettings {
    fn default() -> Self {
        ScfSettings {
            max_cycle: DEFAULT_MAX_CYCLE,
            convergence_threshold: DEFAULT_CONVERGENCE_THRESHOLD,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScfStatus {
    Converged,
    MaxIterReached,
}

/// One line of the iteration trace.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IterationRecord {
    pub iteration: usize,
    /// Energy of the density the Fock matrix was built from.
    pub electronic_energy: f64,
    pub orbital_energies: [f64; 2],
    /// RMS change between the incoming and the new density.
    pub delta: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScfOutcome {
    pub status: ScfStatus,
    pub iterations: usize,
    pub electronic_energy: f64,
    pub nuclear_repulsion: f64,
    /// Only reported for a converged run.
    pub total_energy: Option<f64>,
    pub orbital_energies: [f64; 2],
    pub density_matrix: Matrix2<f64>,
    pub fock_matrix: Matrix2<f64>,
    pub coeffs: Matrix2<f64>,
    pub trace: Vec<IterationRecord>,
}

impl ScfOutcome {
    pub fn converged(&self) -> bool {
        self.status == ScfStatus::Converged
    }
}

pub struct SimpleSCF {
    pub core: CoreMatrices,
    pub density: DensityConvention,
    pub nuclear_repulsion: f64,
    pub max_cycle: usize,
    pub convergence_threshold: f64,
    pub density_matrix: Matrix2<f64>,
    pub fock_matrix: Matrix2<f64>,
    pub coeffs: Matrix2<f64>,
    pub e_level: [f64; 2],
    trace: Vec<IterationRecord>,
}

impl SimpleSCF {
    pub fn new(core: CoreMatrices, nuclear_repulsion: f64, density: DensityConvention) -> Self {
        SimpleSCF {
            core,
            density,
            nuclear_repulsion,
            max_cycle: DEFAULT_MAX_CYCLE,
            convergence_threshold: DEFAULT_CONVERGENCE_THRESHOLD,
            density_matrix: Matrix2::zeros(),
            fock_matrix: Matrix2::zeros(),
            coeffs: Matrix2::zeros(),
            e_level: [0.0; 2],
            trace: Vec::new(),
        }
    }

    pub fn apply_settings(&mut self, settings: &ScfSettings) {
        self.max_cycle = settings.max_cycle;
        self.convergence_threshold = settings.convergence_threshold;
    }

    /// Zero density, so the first Fock matrix is the bare core Hamiltonian.
    pub fn init_density_matrix(&mut self) {
        self.density_matrix = Matrix2::zeros();
        self.trace.clear();
    }

    /// `F = H + G(P)` with `G_ij = sum_kl P_kl [(ij|kl) - 1/2 (il|kj)]`.
    pub fn update_fock_matrix(&mut self) {
        let p = &self.density_matrix;
        let v = &self.core.eri;
        let mut g = Matrix2::zeros();
        for i in 0..2 {
            for j in 0..2 {
                for k in 0..2 {
                    for l in 0..2 {
                        g[(i, j)] += p[(k, l)] * (v[(i, j, k, l)] - 0.5 * v[(i, l, k, j)]);
                    }
                }
            }
        }
        self.fock_matrix = self.core.h_core + g;
    }

    /// `E = 1/2 sum_ij P_ij (H_ij + F_ij)`
    pub fn electronic_energy(&self) -> f64 {
        let mut energy = 0.0;
        for i in 0..2 {
            for j in 0..2 {
                energy += 0.5
                    * self.density_matrix[(i, j)]
                    * (self.core.h_core[(i, j)] + self.fock_matrix[(i, j)]);
            }
        }
        energy
    }

    /// Diagonalizes the current Fock matrix in the orthogonal basis and
    /// back-transforms the eigenvectors into AO coefficients.
    pub fn update_coefficients(&mut self) {
        let x = &self.core.x;
        let fx = self.fock_matrix * x;
        let f_prime = x.transpose() * fx;
        let eig = diagonalize(&f_prime);

        self.coeffs = x * eig.vectors;
        self.e_level = eig.energies();
    }

    /// Closed-shell density from the lowest orbital only.
    pub fn next_density_matrix(&self) -> Matrix2<f64> {
        let c = &self.coeffs;
        let mut p = Matrix2::zeros();
        for i in 0..2 {
            for j in 0..2 {
                p[(i, j)] = match self.density {
                    DensityConvention::Occupied => 2.0 * c[(i, 0)] * c[(j, 0)],
                    DensityConvention::Reference => 2.0 * c[(i, 0)] * c[(0, j)],
                };
            }
        }
        p
    }

    /// Runs one full cycle and returns its trace record.
    pub fn scf_step(&mut self, iteration: usize) -> IterationRecord {
        self.update_fock_matrix();
        let electronic_energy = self.electronic_energy();
        self.update_coefficients();

        let new_density = self.next_density_matrix();
        let delta = rms_change(&new_density, &self.density_matrix);
        self.density_matrix = new_density;

        let record = IterationRecord {
            iteration,
            electronic_energy,
            orbital_energies: self.e_level,
            delta,
        };
        self.trace.push(record);
        record
    }

    pub fn scf_cycle(&mut self) -> ScfOutcome {
        let mut iteration = 0;
        let status = loop {
            iteration += 1;
            let record = self.scf_step(iteration);
            info!(
                "Cycle {:>3}: E(elec) = {:.12} au, eps = [{:.8}, {:.8}], dP = {:.3e}",
                iteration,
                record.electronic_energy,
                record.orbital_energies[0],
                record.orbital_energies[1],
                record.delta
            );

            if record.delta < self.convergence_threshold {
                info!("SCF converged in {} cycles.", iteration);
                break ScfStatus::Converged;
            } else if iteration >= self.max_cycle {
                warn!(
                    "SCF not converged after {} cycles (dP = {:.3e})",
                    iteration, record.delta
                );
                break ScfStatus::MaxIterReached;
            }
        };

        let electronic_energy = self.trace.last().map_or(0.0, |r| r.electronic_energy);
        let total_energy = match status {
            ScfStatus::Converged => Some(electronic_energy + self.nuclear_repulsion),
            ScfStatus::MaxIterReached => None,
        };

        ScfOutcome {
            status,
            iterations: iteration,
            electronic_energy,
            nuclear_repulsion: self.nuclear_repulsion,
            total_energy,
            orbital_energies: self.e_level,
            density_matrix: self.density_matrix,
            fock_matrix: self.fock_matrix,
            coeffs: self.coeffs,
            trace: self.trace.clone(),
        }
    }

    pub fn trace(&self) -> &[IterationRecord] {
        &self.trace
    }
}

/// `sqrt(sum_ij (A_ij - B_ij)^2 / 4)`
pub fn rms_change(new: &Matrix2<f64>, old: &Matrix2<f64>) -> f64 {
    let mut sum = 0.0;
    for i in 0..2 {
        for j in 0..2 {
            let d = new[(i, j)] - old[(i, j)];
            sum += d * d;
        }
    }
    (sum / 4.0).sqrt()
}
