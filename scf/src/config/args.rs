//! Command-line argument parsing for HeH+ SCF calculations

use clap::Parser;

/// Minimal-basis Hartree-Fock for a two-centre, two-electron molecule
#[derive(Parser, Debug, Default)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the YAML configuration file
    #[arg(short, long, default_value = "scf/example/heh_sto3g.yaml")]
    pub config_file: String,

    /// Override the STO-nG contraction length (1, 2 or 3)
    #[arg(long)]
    pub degree: Option<usize>,

    /// Override the internuclear distance in bohr
    #[arg(long)]
    pub bond_length: Option<f64>,

    /// Override the Slater exponent of the first atom
    #[arg(long)]
    pub zeta1: Option<f64>,

    /// Override the Slater exponent of the second atom
    #[arg(long)]
    pub zeta2: Option<f64>,

    /// Override the nuclear charge of the first atom
    #[arg(long)]
    pub charge1: Option<u32>,

    /// Override the nuclear charge of the second atom
    #[arg(long)]
    pub charge2: Option<u32>,

    /// Override maximum SCF cycles
    #[arg(long)]
    pub max_cycle: Option<usize>,

    /// Override convergence threshold on the RMS density change
    #[arg(long)]
    pub convergence_threshold: Option<f64>,

    /// Use the reference orthogonalizer, density and exponent conventions
    #[arg(long)]
    pub reference_conventions: bool,

    /// Override output file: (default stdout)
    #[arg(short, long)]
    pub output: Option<String>,

    /// Write the full calculation as JSON to this path
    #[arg(long)]
    pub report: Option<String>,
}
