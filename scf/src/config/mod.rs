//! Configuration management for HeH+ SCF calculations
//!
//! YAML input structures, their defaults, and the merge with command-line
//! overrides.

mod args;

pub use args::Args;

use crate::conventions::Conventions;
use crate::scf_impl::{ScfSettings, DEFAULT_CONVERGENCE_THRESHOLD, DEFAULT_MAX_CYCLE};
use serde::{Deserialize, Serialize};

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub system: SystemConfig,

    #[serde(default)]
    pub scf_params: ScfParams,

    #[serde(default)]
    pub conventions: Conventions,
}

/// The diatomic molecule: atom 1 sits at the origin, atom 2 at `bond_length`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SystemConfig {
    /// STO-nG contraction length
    #[serde(default)]
    pub degree: Option<usize>,

    /// Internuclear distance in bohr
    #[serde(default)]
    pub bond_length: Option<f64>,

    #[serde(default)]
    pub atoms: Vec<AtomConfig>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AtomConfig {
    /// Element symbol (e.g., "H", "He")
    pub element: String,

    /// Slater exponent of the 1s function on this atom
    pub zeta: f64,

    /// Nuclear charge; the element's atomic number when absent
    #[serde(default)]
    pub charge: Option<u32>,
}

impl AtomConfig {
    fn new(element: &str, zeta: f64) -> Self {
        AtomConfig {
            element: element.to_string(),
            zeta,
            charge: None,
        }
    }
}

impl SystemConfig {
    pub fn with_defaults(mut self) -> Self {
        if self.degree.is_none() {
            self.degree = Some(3);
        }
        if self.bond_length.is_none() {
            self.bond_length = Some(1.4632);
        }
        if self.atoms.is_empty() {
            self.atoms = vec![AtomConfig::new("H", 1.24), AtomConfig::new("He", 2.0925)];
        }
        self
    }
}

/// SCF calculation parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScfParams {
    /// Maximum number of SCF cycles
    #[serde(default)]
    pub max_cycle: Option<usize>,

    /// Bound on the RMS change of the density matrix
    #[serde(default)]
    pub convergence_threshold: Option<f64>,
}

impl Default for ScfParams {
    fn default() -> Self {
        ScfParams {
            max_cycle: Some(DEFAULT_MAX_CYCLE),
            convergence_threshold: Some(DEFAULT_CONVERGENCE_THRESHOLD),
        }
    }
}

impl ScfParams {
    /// Apply default values to any missing fields
    pub fn with_defaults(mut self) -> Self {
        let defaults = ScfParams::default();
        if self.max_cycle.is_none() {
            self.max_cycle = defaults.max_cycle;
        }
        if self.convergence_threshold.is_none() {
            self.convergence_threshold = defaults.convergence_threshold;
        }
        self
    }
}

impl Config {
    /// Apply default values to any missing configuration fields
    pub fn with_defaults(mut self) -> Self {
        self.system = self.system.with_defaults();
        self.scf_params = self.scf_params.with_defaults();
        self
    }

    /// SCF settings with command-line overrides applied on top.
    pub fn scf_settings(&self, args: &Args) -> ScfSettings {
        let defaults = ScfSettings::default();
        ScfSettings {
            max_cycle: args
                .max_cycle
                .or(self.scf_params.max_cycle)
                .unwrap_or(defaults.max_cycle),
            convergence_threshold: args
                .convergence_threshold
                .or(self.scf_params.convergence_threshold)
                .unwrap_or(defaults.convergence_threshold),
        }
    }

    pub fn resolved_conventions(&self, args: &Args) -> Conventions {
        if args.reference_conventions {
            Conventions::reference()
        } else {
            self.conventions
        }
    }
}
