//! The combined multiple recursive generator.
//!
//! `cg[0..3]` follows `x_n = (a12 * x_{n-2} - a13n * x_{n-3}) mod m1` and
//! `cg[3..6]` follows `y_n = (a21 * y_{n-1} - a23n * y_{n-3}) mod m2`.
//! The output is `(x_n - y_n) mod m1` scaled into the open interval (0, 1).

use crate::params::{A12, A13N, A21, A23N, FACT, M1, M2, NORM};

/// Reduce `p` modulo `m` when `|p|` is small enough to be exact.
fn reduce(p: f64, m: f64) -> f64 {
    let k = (p / m).trunc();
    let p = p - k * m;
    if p < 0.0 {
        p + m
    } else {
        p
    }
}

/// Step both recurrences once and return the uniform draw in (0, 1).
pub fn next_u01(cg: &mut [f64; 6]) -> f64 {
    let p1 = reduce(A12 * cg[1] - A13N * cg[0], M1);
    cg[0] = cg[1];
    cg[1] = cg[2];
    cg[2] = p1;

    let p2 = reduce(A21 * cg[5] - A23N * cg[3], M2);
    cg[3] = cg[4];
    cg[4] = cg[5];
    cg[5] = p2;

    if p1 > p2 {
        (p1 - p2) * NORM
    } else {
        (p1 - p2 + M1) * NORM
    }
}

/// Draw once, complementing the result when `antithetic` is set.
pub fn draw(cg: &mut [f64; 6], antithetic: bool) -> f64 {
    let u = next_u01(cg);
    if antithetic {
        1.0 - u
    } else {
        u
    }
}

/// Combine two plain draws into one with finer resolution, wrapped into [0, 1).
pub fn combine_plain(u1: f64, u2: f64) -> f64 {
    let u = u1 + u2 * FACT;
    if u < 1.0 {
        u
    } else {
        u - 1.0
    }
}

/// Combine two antithetic draws (each already `1 - u`), wrapped into [0, 1).
pub fn combine_antithetic(u1: f64, u2: f64) -> f64 {
    let u = u1 + (u2 - 1.0) * FACT;
    if u < 0.0 {
        u + 1.0
    } else {
        u
    }
}

/// Two consecutive draws combined for increased precision.
pub fn draw_fine(cg: &mut [f64; 6], antithetic: bool) -> f64 {
    let u1 = draw(cg, antithetic);
    let u2 = draw(cg, antithetic);
    if antithetic {
        combine_antithetic(u1, u2)
    } else {
        combine_plain(u1, u2)
    }
}
