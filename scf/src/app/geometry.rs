use crate::config::{Args, AtomConfig, Config};
use crate::system::DiatomicSystem;
use ::basis::StoDegree;
use color_eyre::eyre::{eyre, Result, WrapErr};
use periodic_table_on_an_enum::Element;
use tracing::info;

/// One resolved center of the diatomic.
#[derive(Debug, Clone)]
pub struct Center {
    pub element: Element,
    pub zeta: f64,
    pub charge: u32,
}

/// Build the diatomic system from the YAML configuration with the
/// command-line overrides applied.
pub fn build_system(config: &Config, args: &Args) -> Result<DiatomicSystem> {
    info!("\nPreparing system...");

    let atoms = &config.system.atoms;
    if atoms.len() != 2 {
        return Err(eyre!(
            "Exactly two atoms are required, the configuration lists {}",
            atoms.len()
        ));
    }
    let first = resolve_center(&atoms[0])?;
    let second = resolve_center(&atoms[1])?;

    let n = args.degree.or(config.system.degree).unwrap_or(3);
    let degree = StoDegree::try_from(n).wrap_err("Unsupported basis")?;
    let bond_length = args
        .bond_length
        .or(config.system.bond_length)
        .ok_or_else(|| eyre!("No bond length given"))?;

    let system = DiatomicSystem {
        degree,
        bond_length,
        zeta1: args.zeta1.unwrap_or(first.zeta),
        zeta2: args.zeta2.unwrap_or(second.zeta),
        z_h: args.charge1.unwrap_or(first.charge) as f64,
        z_he: args.charge2.unwrap_or(second.charge) as f64,
    };

    info!(
        "  Atom 1: {} (zeta = {}, Z = {}) at 0.0",
        first.element.get_symbol(),
        system.zeta1,
        system.z_h
    );
    info!(
        "  Atom 2: {} (zeta = {}, Z = {}) at {:.6} bohr",
        second.element.get_symbol(),
        system.zeta2,
        system.z_he,
        system.bond_length
    );

    Ok(system)
}

fn resolve_center(atom: &AtomConfig) -> Result<Center> {
    let element = Element::from_symbol(&atom.element)
        .ok_or_else(|| eyre!("Invalid element symbol: {}", atom.element))?;
    let charge = atom
        .charge
        .unwrap_or(element.get_atomic_number() as u32);
    Ok(Center {
        element,
        zeta: atom.zeta,
        charge,
    })
}
