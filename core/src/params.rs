//! Fixed parameters of the combined MRG32k3a generator.
//!
//! Two order-3 recurrences, one modulo `M1` and one modulo `M2`, both primes
//! just under 2^32. The matrices below advance a three-component state by
//! one step, back by one step, or forward by 2^76 and 2^127 steps.
//! None of these change at runtime.

use crate::modmath::Matrix3;

pub const M1: f64 = 4294967087.0;
pub const M2: f64 = 4294944443.0;

/// Resolution of a single draw, `1 / (M1 + 1)`.
pub const NORM: f64 = 1.0 / (M1 + 1.0);

/// Weight of the second draw in increased-precision mode.
pub const FACT: f64 = NORM;

pub const A12: f64 = 1403580.0;
pub const A13N: f64 = 810728.0;
pub const A21: f64 = 527612.0;
pub const A23N: f64 = 1370589.0;

pub const TWO17: f64 = 131072.0;
pub const TWO53: f64 = 9007199254740992.0;

/// Integer bounds used by seed validation.
pub const M1_BOUND: u64 = 4294967087;
pub const M2_BOUND: u64 = 4294944443;

pub const A1P0: Matrix3 = [
    [0.0, 1.0, 0.0],
    [0.0, 0.0, 1.0],
    [-810728.0, 1403580.0, 0.0],
];

pub const A2P0: Matrix3 = [
    [0.0, 1.0, 0.0],
    [0.0, 0.0, 1.0],
    [-1370589.0, 0.0, 527612.0],
];

pub const INV_A1: Matrix3 = [
    [184888585.0, 0.0, 1945170933.0],
    [1.0, 0.0, 0.0],
    [0.0, 1.0, 0.0],
];

pub const INV_A2: Matrix3 = [
    [0.0, 360363334.0, 4225571728.0],
    [1.0, 0.0, 0.0],
    [0.0, 1.0, 0.0],
];

pub const A1P76: Matrix3 = [
    [82758667.0, 1871391091.0, 4127413238.0],
    [3672831523.0, 69195019.0, 1871391091.0],
    [3672091415.0, 3528743235.0, 69195019.0],
];

pub const A2P76: Matrix3 = [
    [1511326704.0, 3759209742.0, 1610795712.0],
    [4292754251.0, 1511326704.0, 3889917532.0],
    [3859662829.0, 4292754251.0, 3708466080.0],
];

pub const A1P127: Matrix3 = [
    [2427906178.0, 3580155704.0, 949770784.0],
    [226153695.0, 1230515664.0, 3580155704.0],
    [1988835001.0, 986791581.0, 1230515664.0],
];

pub const A2P127: Matrix3 = [
    [1464411153.0, 277697599.0, 1610723613.0],
    [32183930.0, 1464411153.0, 1022607788.0],
    [2824425944.0, 32183930.0, 2093834863.0],
];
