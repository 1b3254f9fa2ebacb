#![allow(non_snake_case)]

use crate::helper::boys_f0;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Normalised primitive s-type Gaussian `d * exp(-alpha r^2)`.
///
/// The center is implicit: a primitive always belongs to one of the two
/// atoms of the diatomic and is addressed through its `ContractedBasis`.
#[derive(Debug, Serialize, Deserialize, Copy, Clone, PartialEq)]
pub struct PrimitiveGaussian {
    pub alpha: f64,
    /// Contraction coefficient, already multiplied by `(2 alpha / pi)^(3/4)`.
    pub coeff: f64,
}

impl PrimitiveGaussian {
    pub fn new(alpha: f64, coeff: f64) -> Self {
        Self { alpha, coeff }
    }

    /// Overlap of two unnormalised s primitives separated by `sqrt(R2_ab)`.
    pub fn Sab(alpha: f64, beta: f64, R2_ab: f64) -> f64 {
        let p = alpha + beta;
        (PI / p).powf(1.5) * (-alpha * beta / p * R2_ab).exp()
    }

    /// Kinetic energy integral `<a| -1/2 nabla^2 |b>`.
    ///
    /// The overlap factor is expanded in place rather than taken from `Sab`.
    pub fn Tab(alpha: f64, beta: f64, R2_ab: f64) -> f64 {
        let p = alpha + beta;
        let q = alpha * beta / p;
        q * (3.0 - 2.0 * q * R2_ab) * (PI / p).powf(1.5) * (-q * R2_ab).exp()
    }

    /// Nuclear attraction to a point charge `Zc` sitting `sqrt(R2_pc)` away
    /// from the Gaussian product center P.
    pub fn Vab(alpha: f64, beta: f64, Zc: f64, R2_ab: f64, R2_pc: f64) -> f64 {
        let p = alpha + beta;
        -2.0 * PI / p * Zc * (-alpha * beta * R2_ab / p).exp() * boys_f0(p * R2_pc)
    }

    /// Two-electron repulsion `(ab|cd)` in chemists' notation.
    ///
    /// * `R2_ab`, `R2_cd` - squared separations inside each charge distribution
    /// * `R2_pq` - squared distance between the two product centers P and Q
    pub fn JKabcd(
        alpha: f64,
        beta: f64,
        gamma: f64,
        delta: f64,
        R2_ab: f64,
        R2_cd: f64,
        R2_pq: f64,
    ) -> f64 {
        let p = alpha + beta;
        let q = gamma + delta;
        2.0 * PI.powf(2.5) / (p * q * (p + q).sqrt())
            * (-alpha * beta * R2_ab / p - gamma * delta * R2_cd / q).exp()
            * boys_f0(p * q * R2_pq / (p + q))
    }
}
