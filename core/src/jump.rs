//! Jump-ahead on the full six-component state.
//!
//! A [`JumpMatrices`] holds one transition matrix per component: `first`
//! acts on `state[0..3]` modulo `M1`, `second` on `state[3..6]` modulo `M2`.

use crate::modmath::{mat_mat_mod_m, mat_pow_mod_m, mat_two_pow_mod_m, mat_vec_mod_m, Matrix3, IDENTITY};
use crate::params::{A1P0, A1P127, A1P76, A2P0, A2P127, A2P76, INV_A1, INV_A2, M1, M2};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JumpMatrices {
    pub first: Matrix3,
    pub second: Matrix3,
}

/// Advance by one step.
pub const ONE_STEP: JumpMatrices = JumpMatrices { first: A1P0, second: A2P0 };

/// Rewind by one step.
pub const ONE_STEP_BACK: JumpMatrices = JumpMatrices { first: INV_A1, second: INV_A2 };

/// Advance by 2^76 steps, the distance between substream starts.
pub const SUBSTREAM: JumpMatrices = JumpMatrices { first: A1P76, second: A2P76 };

/// Advance by 2^127 steps, the distance between stream starts.
pub const STREAM: JumpMatrices = JumpMatrices { first: A1P127, second: A2P127 };

pub const IDENTITY_JUMP: JumpMatrices = JumpMatrices { first: IDENTITY, second: IDENTITY };

impl JumpMatrices {
    /// Jump of `2^e` times this one.
    pub fn two_pow(&self, e: u64) -> Self {
        Self {
            first: mat_two_pow_mod_m(&self.first, M1, e),
            second: mat_two_pow_mod_m(&self.second, M2, e),
        }
    }

    /// Jump of `n` times this one.
    pub fn pow(&self, n: u64) -> Self {
        Self {
            first: mat_pow_mod_m(&self.first, M1, n),
            second: mat_pow_mod_m(&self.second, M2, n),
        }
    }

    /// `self * other`: the jump `other` followed by `self`.
    pub fn compose(&self, other: &Self) -> Self {
        Self {
            first: mat_mat_mod_m(&self.first, &other.first, M1),
            second: mat_mat_mod_m(&self.second, &other.second, M2),
        }
    }

    pub fn apply(&self, state: &[f64; 6]) -> [f64; 6] {
        let a = mat_vec_mod_m(&self.first, &[state[0], state[1], state[2]], M1);
        let b = mat_vec_mod_m(&self.second, &[state[3], state[4], state[5]], M2);
        [a[0], a[1], a[2], b[0], b[1], b[2]]
    }
}
