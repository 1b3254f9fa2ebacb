use crate::scf_impl::ScfStatus;
use crate::system::Calculation;
use tracing::{debug, info, warn};

pub fn report_summary(calc: &Calculation) {
    let outcome = &calc.outcome;
    let ints = &calc.integrals;

    debug!("\nAO integrals:");
    debug!("  S12 = {:.10}", ints.s12);
    debug!("  T11 = {:.10}  T12 = {:.10}  T22 = {:.10}", ints.t11, ints.t12, ints.t22);
    debug!(
        "  (11|11) = {:.10}  (21|11) = {:.10}  (21|21) = {:.10}",
        ints.v1111, ints.v2111, ints.v2121
    );
    debug!(
        "  (22|11) = {:.10}  (22|21) = {:.10}  (22|22) = {:.10}",
        ints.v2211, ints.v2221, ints.v2222
    );

    match outcome.status {
        ScfStatus::Converged => {
            info!("\nSCF calculation finished in {} cycles.", outcome.iterations)
        }
        ScfStatus::MaxIterReached => warn!(
            "\nSCF stopped after {} cycles without converging; the values below are not final.",
            outcome.iterations
        ),
    }

    info!("\nFinal Energy Levels:");
    for (i, energy) in outcome.orbital_energies.iter().enumerate() {
        info!("  Level {}: {:.8} au", i + 1, energy);
    }

    info!("\nDensity matrix:");
    for i in 0..2 {
        info!(
            "  [{:+.8}, {:+.8}]",
            outcome.density_matrix[(i, 0)],
            outcome.density_matrix[(i, 1)]
        );
    }

    info!("\nElectronic energy:         {:.10} au", outcome.electronic_energy);
    info!("Nuclear repulsion energy:  {:.10} au", outcome.nuclear_repulsion);
    match outcome.total_energy {
        Some(total) => info!("Hartree-Fock Total Energy: {:.10} au", total),
        None => warn!("Hartree-Fock Total Energy: not available"),
    }
}
