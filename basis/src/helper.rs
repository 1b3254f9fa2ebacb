use std::f64::consts::PI;

/// Below this argument `boys_f0` switches to its Taylor expansion.
pub const BOYS_SMALL_T: f64 = 1.0e-6;

const ERF_P: f64 = 0.3275911;
const ERF_A: [f64; 5] = [
    0.254829592,
    -0.284496736,
    1.421413741,
    -1.453152027,
    1.061405429,
];

/// Error function, Abramowitz & Stegun 7.1.26.
///
/// Absolute error is below 3e-7. Only valid for `t >= 0`.
pub fn erf(t: f64) -> f64 {
    let tt = 1.0 / (1.0 + ERF_P * t);
    let mut polynomial = 0.0;
    for (i, a) in ERF_A.iter().enumerate() {
        polynomial += a * tt.powi(i as i32 + 1);
    }
    1.0 - polynomial * (-t * t).exp()
}

/// Zeroth-order Boys function F_0(t).
///
/// For tiny arguments the closed form is 0/0, so the first two Taylor terms
/// are used instead.
pub fn boys_f0(t: f64) -> f64 {
    if t < BOYS_SMALL_T {
        1.0 - t / 3.0
    } else {
        0.5 * (PI / t).sqrt() * erf(t.sqrt())
    }
}
