//! Exact modular arithmetic on `f64` operands.
//!
//! A double holds integers exactly only up to 2^53, and the product of two
//! values near 2^32 does not fit. `mult_mod_m` splits the multiplier when
//! the raw product would leave that range, so all operands (and the
//! modulus) must stay below 2^35.
//!
//! Every function here is pure: outputs are returned by value, so callers
//! may feed a result straight back in as an input.

use crate::params::{TWO17, TWO53};

pub type Matrix3 = [[f64; 3]; 3];
pub type Vector3 = [f64; 3];

pub const IDENTITY: Matrix3 = [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]];

/// Return `(a * s + c) mod m`, in `[0, m)`.
pub fn mult_mod_m(a: f64, s: f64, c: f64, m: f64) -> f64 {
    let mut a = a;
    let mut v = a * s + c;

    if v >= TWO53 || v <= -TWO53 {
        let a1 = (a / TWO17).trunc();
        a -= a1 * TWO17;
        v = a1 * s;
        let k = (v / m).trunc();
        v -= k * m;
        v = v * TWO17 + a * s + c;
    }

    let k = (v / m).trunc();
    v -= k * m;
    if v < 0.0 {
        v + m
    } else {
        v
    }
}

/// Return `A * s mod m`. Components of `s` must lie in `(-m, m)`.
pub fn mat_vec_mod_m(a: &Matrix3, s: &Vector3, m: f64) -> Vector3 {
    let mut x = [0.0; 3];
    for (xi, row) in x.iter_mut().zip(a.iter()) {
        let acc = mult_mod_m(row[0], s[0], 0.0, m);
        let acc = mult_mod_m(row[1], s[1], acc, m);
        *xi = mult_mod_m(row[2], s[2], acc, m);
    }
    x
}

/// Return `A * B mod m`, one column of `B` at a time.
pub fn mat_mat_mod_m(a: &Matrix3, b: &Matrix3, m: f64) -> Matrix3 {
    let mut w = [[0.0; 3]; 3];
    for col in 0..3 {
        let v = mat_vec_mod_m(a, &[b[0][col], b[1][col], b[2][col]], m);
        for (row, value) in v.into_iter().enumerate() {
            w[row][col] = value;
        }
    }
    w
}

/// Return `A^(2^e) mod m` by `e` successive squarings.
pub fn mat_two_pow_mod_m(a: &Matrix3, m: f64, e: u64) -> Matrix3 {
    (0..e).fold(*a, |b, _| mat_mat_mod_m(&b, &b, m))
}

/// Return `A^n mod m` by square-and-multiply. `n == 0` gives the identity.
pub fn mat_pow_mod_m(a: &Matrix3, m: f64, n: u64) -> Matrix3 {
    let mut w = *a;
    let mut b = IDENTITY;
    let mut n = n;
    while n > 0 {
        if n % 2 == 1 {
            b = mat_mat_mod_m(&w, &b, m);
        }
        w = mat_mat_mod_m(&w, &w, m);
        n /= 2;
    }
    b
}
