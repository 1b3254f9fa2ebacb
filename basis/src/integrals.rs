//! Contraction of primitive integrals into the AO integrals of the diatomic.
//!
//! Atom 1 (the "H" center) sits at the origin, atom 2 (the "He" center) at
//! distance `R` along the bond. Both carry a single contracted 1s function, so
//! the whole one- and two-electron problem reduces to sixteen scalars.

use crate::cgto::{ContractedBasis, StoDegree};
use crate::error::BasisError;
use crate::gto::PrimitiveGaussian as G;
use itertools::iproduct;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// The distinct AO integrals of a two-function basis.
///
/// `_h` / `_he` name the nucleus doing the attracting; two-electron labels
/// follow `(ij|kl)` with 1 = H function, 2 = He function.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IntegralSet {
    pub s12: f64,
    pub t11: f64,
    pub t12: f64,
    pub t22: f64,
    pub v11_h: f64,
    pub v12_h: f64,
    pub v22_h: f64,
    pub v11_he: f64,
    pub v12_he: f64,
    pub v22_he: f64,
    pub v1111: f64,
    pub v2111: f64,
    pub v2121: f64,
    pub v2211: f64,
    pub v2221: f64,
    pub v2222: f64,
}

impl IntegralSet {
    /// Builds both STO-nG contractions and assembles their integrals.
    pub fn sto_ng(
        degree: StoDegree,
        r: f64,
        zeta1: f64,
        zeta2: f64,
        z_h: f64,
        z_he: f64,
    ) -> Result<Self, BasisError> {
        let h = ContractedBasis::sto_ng(degree, zeta1, z_h)?;
        let he = ContractedBasis::sto_ng(degree, zeta2, z_he)?;
        Self::compute(r, &h, &he)
    }

    /// Sums primitive integrals over every pair and quadruple of primitives.
    pub fn compute(r: f64, h: &ContractedBasis, he: &ContractedBasis) -> Result<Self, BasisError> {
        if !(r.is_finite() && r > 0.0) {
            return Err(BasisError::NonPositiveBondLength(r));
        }
        if h.len() != he.len() {
            return Err(BasisError::MismatchedContraction {
                h: h.len(),
                he: he.len(),
            });
        }

        let mut ints = IntegralSet::default();
        ints.accumulate_one_electron(r, h, he);
        ints.accumulate_two_electron(r, h, he);

        debug!("AO integrals at R = {:.6}: {:?}", r, ints);
        Ok(ints)
    }

    fn accumulate_one_electron(&mut self, r: f64, h: &ContractedBasis, he: &ContractedBasis) {
        let r2 = r * r;
        let (z_h, z_he) = (h.charge, he.charge);
        let n = h.len();

        for (i, j) in iproduct!(0..n, 0..n) {
            // product center of H primitive i and He primitive j
            let r_ap = he.alpha(j) * r / (h.alpha(i) + he.alpha(j));
            let r2_ap = r_ap * r_ap;
            let r2_bp = (r - r_ap) * (r - r_ap);

            let (a_hi, a_hj) = (h.alpha(i), h.alpha(j));
            let (a_hei, a_hej) = (he.alpha(i), he.alpha(j));
            let d_hh = h.coeff(i) * h.coeff(j);
            let d_hhe = h.coeff(i) * he.coeff(j);
            let d_hehe = he.coeff(i) * he.coeff(j);

            self.s12 += G::Sab(a_hi, a_hej, r2) * d_hhe;

            self.t11 += G::Tab(a_hi, a_hj, 0.0) * d_hh;
            self.t12 += G::Tab(a_hi, a_hej, r2) * d_hhe;
            self.t22 += G::Tab(a_hei, a_hej, 0.0) * d_hehe;

            self.v11_h += G::Vab(a_hi, a_hj, z_h, 0.0, 0.0) * d_hh;
            self.v12_h += G::Vab(a_hi, a_hej, z_h, r2, r2_ap) * d_hhe;
            self.v22_h += G::Vab(a_hei, a_hej, z_h, 0.0, r2) * d_hehe;

            self.v11_he += G::Vab(a_hi, a_hj, z_he, 0.0, r2) * d_hh;
            self.v12_he += G::Vab(a_hi, a_hej, z_he, r2, r2_bp) * d_hhe;
            self.v22_he += G::Vab(a_hei, a_hej, z_he, 0.0, 0.0) * d_hehe;
        }
    }

    fn accumulate_two_electron(&mut self, r: f64, h: &ContractedBasis, he: &ContractedBasis) {
        let r2 = r * r;
        let n = h.len();

        for (i, j, k, l) in iproduct!(0..n, 0..n, 0..n, 0..n) {
            // P from (He_i, H_j), Q from (He_k, H_l), both measured from atom 1
            let r_ap = he.alpha(i) * r / (he.alpha(i) + h.alpha(j));
            let r_aq = he.alpha(k) * r / (he.alpha(k) + h.alpha(l));
            let r_bq = r - r_aq;
            let r2_ap = r_ap * r_ap;
            let r2_bq = r_bq * r_bq;
            let r_pq = r_ap - r_aq;
            let r2_pq = r_pq * r_pq;

            let (hi, hj, hk, hl) = (h.alpha(i), h.alpha(j), h.alpha(k), h.alpha(l));
            let (ei, ej, ek, el) = (he.alpha(i), he.alpha(j), he.alpha(k), he.alpha(l));
            let (dhi, dhj, dhk, dhl) = (h.coeff(i), h.coeff(j), h.coeff(k), h.coeff(l));
            let (dei, dej, dek, del) = (he.coeff(i), he.coeff(j), he.coeff(k), he.coeff(l));

            self.v1111 += G::JKabcd(hi, hj, hk, hl, 0.0, 0.0, 0.0) * dhi * dhj * dhk * dhl;
            self.v2111 += G::JKabcd(ei, hj, hk, hl, r2, 0.0, r2_ap) * dei * dhj * dhk * dhl;
            self.v2121 += G::JKabcd(ei, hj, ek, hl, r2, r2, r2_pq) * dei * dhj * dek * dhl;
            self.v2211 += G::JKabcd(ei, ej, hk, hl, 0.0, 0.0, r2) * dei * dej * dhk * dhl;
            self.v2221 += G::JKabcd(ei, ej, ek, hl, 0.0, r2, r2_bq) * dei * dej * dek * dhl;
            self.v2222 += G::JKabcd(ei, ej, ek, el, 0.0, 0.0, 0.0) * dei * dej * dek * del;
        }
    }

    /// Core-Hamiltonian elements `(H11, H12, H22)`.
    pub fn core_hamiltonian(&self) -> (f64, f64, f64) {
        (
            self.t11 + self.v11_h + self.v11_he,
            self.t12 + self.v12_h + self.v12_he,
            self.t22 + self.v22_h + self.v22_he,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn heh_sto3g() -> IntegralSet {
        IntegralSet::sto_ng(StoDegree::Sto3G, 1.4632, 1.24, 2.0925, 1.0, 2.0).unwrap()
    }

    #[test]
    fn test_heh_sto3g_one_electron() {
        let ints = heh_sto3g();
        assert_abs_diff_eq!(ints.s12, 0.450770411647788, epsilon = 1e-10);
        assert_abs_diff_eq!(ints.t11, 0.760032943565085, epsilon = 1e-10);
        assert_abs_diff_eq!(ints.t12, 0.167012865864049, epsilon = 1e-10);
        assert_abs_diff_eq!(ints.t22, 2.164312561949012, epsilon = 1e-10);
        assert_abs_diff_eq!(ints.v11_h, -1.226615468058253, epsilon = 1e-10);
        assert_abs_diff_eq!(ints.v12_h, -0.411305457690594, epsilon = 1e-10);
        assert_abs_diff_eq!(ints.v22_h, -0.677230060134389, epsilon = 1e-10);
        assert_abs_diff_eq!(ints.v11_he, -1.265245911432830, epsilon = 1e-10);
        assert_abs_diff_eq!(ints.v12_he, -1.102912432419634, epsilon = 1e-10);
        assert_abs_diff_eq!(ints.v22_he, -4.139827204696603, epsilon = 1e-10);
    }

    #[test]
    fn test_heh_sto3g_two_electron() {
        let ints = heh_sto3g();
        assert_abs_diff_eq!(ints.v1111, 0.774608360032879, epsilon = 1e-10);
        assert_abs_diff_eq!(ints.v2111, 0.311794581574053, epsilon = 1e-10);
        assert_abs_diff_eq!(ints.v2121, 0.177267110316163, epsilon = 1e-10);
        assert_abs_diff_eq!(ints.v2211, 0.605703366847184, epsilon = 1e-10);
        assert_abs_diff_eq!(ints.v2221, 0.437279317427946, epsilon = 1e-10);
        assert_abs_diff_eq!(ints.v2222, 1.307151607555482, epsilon = 1e-10);
    }

    #[test]
    fn test_single_center_terms_ignore_bond_length() {
        let near = IntegralSet::sto_ng(StoDegree::Sto2G, 1.0, 1.24, 2.0925, 1.0, 2.0).unwrap();
        let far = IntegralSet::sto_ng(StoDegree::Sto2G, 3.0, 1.24, 2.0925, 1.0, 2.0).unwrap();
        assert_eq!(near.t11, far.t11);
        assert_eq!(near.t22, far.t22);
        assert_eq!(near.v11_h, far.v11_h);
        assert_eq!(near.v22_he, far.v22_he);
        assert_eq!(near.v1111, far.v1111);
        assert_eq!(near.v2222, far.v2222);
        assert!(far.s12 < near.s12);
    }

    #[test]
    fn test_attraction_scales_with_charge() {
        let base = IntegralSet::sto_ng(StoDegree::Sto1G, 1.4632, 1.24, 2.0925, 1.0, 2.0).unwrap();
        let doubled = IntegralSet::sto_ng(StoDegree::Sto1G, 1.4632, 1.24, 2.0925, 2.0, 4.0).unwrap();
        assert_abs_diff_eq!(doubled.v12_h, 2.0 * base.v12_h, epsilon = 1e-14);
        assert_abs_diff_eq!(doubled.v22_he, 2.0 * base.v22_he, epsilon = 1e-14);
        assert_eq!(doubled.s12, base.s12);
        assert_eq!(doubled.v2121, base.v2121);
    }

    #[test]
    fn test_rejects_bad_input() {
        assert_eq!(
            IntegralSet::sto_ng(StoDegree::Sto3G, 0.0, 1.24, 2.0925, 1.0, 2.0).unwrap_err(),
            BasisError::NonPositiveBondLength(0.0)
        );
        assert_eq!(
            IntegralSet::sto_ng(StoDegree::Sto3G, 1.4632, -1.0, 2.0925, 1.0, 2.0).unwrap_err(),
            BasisError::NonPositiveExponent(-1.0)
        );
    }
}
