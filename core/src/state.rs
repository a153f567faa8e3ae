//! Per-stream state: the three seed vectors and the output mode flags.

use crate::error::SeedError;
use crate::seed::{check_seed, from_state, to_state, Seed};
use serde::{Deserialize, Serialize};

/// Everything that determines a stream's future output.
///
/// - `ig`: start of the stream.
/// - `bg`: start of the current substream.
/// - `cg`: current generator state, stepped by every draw.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StreamState {
    pub(crate) ig: [f64; 6],
    pub(crate) bg: [f64; 6],
    pub(crate) cg: [f64; 6],
    #[serde(default)]
    pub(crate) antithetic: bool,
    #[serde(default)]
    pub(crate) increased_precision: bool,
}

impl StreamState {
    /// A fresh state at the start of a stream, with both modes off.
    pub(crate) fn starting_at(seed: [f64; 6]) -> Self {
        Self {
            ig: seed,
            bg: seed,
            cg: seed,
            antithetic: false,
            increased_precision: false,
        }
    }

    /// Check all three vectors, e.g. after deserializing a checkpoint.
    pub fn validate(&self) -> Result<(), SeedError> {
        for v in [&self.ig, &self.bg, &self.cg] {
            if let Some(index) = v.iter().position(|x| !(x.fract() == 0.0 && *x >= 0.0)) {
                log::error!("checkpoint component {index} = {} is not a non-negative integer", v[index]);
                return Err(SeedError::NotAnInteger { index });
            }
            check_seed(&from_state(v))?;
        }
        Ok(())
    }

    pub fn initial_seed(&self) -> Seed {
        from_state(&self.ig)
    }

    pub fn substream_seed(&self) -> Seed {
        from_state(&self.bg)
    }

    pub fn current(&self) -> Seed {
        from_state(&self.cg)
    }

    pub(crate) fn reseed(&mut self, seed: &Seed) {
        let s = to_state(seed);
        self.ig = s;
        self.bg = s;
        self.cg = s;
    }
}
