//! Seeds, seed validation, and the package seed that new streams start from.
//!
//! Every new stream takes the current package seed as its initial state,
//! and the package seed then jumps 2^127 steps ahead. Streams built from
//! the same [`PackageSeed`] therefore never overlap.
//!
//! Callers that want explicit control own a [`PackageSeed`] and build
//! streams from it. [`RngStream::new`](crate::RngStream::new) and
//! [`set_package_seed`] share one process-wide instance behind a mutex.

use crate::error::SeedError;
use crate::jump::STREAM;
use crate::params::{M1_BOUND, M2_BOUND};
use crate::stream::RngStream;
use serde::{Deserialize, Serialize};
use std::sync::{Mutex, PoisonError};

/// Six seed components: three for the first recurrence, three for the second.
pub type Seed = [u64; 6];

/// Package seed at process start.
pub const DEFAULT_SEED: Seed = [12345; 6];

/// Validate a seed. Logs the reason and returns it when the seed is rejected.
///
/// Components 0..3 must be below `m1` and components 3..6 below `m2`;
/// neither triple may be all zero. The C++ RngStream port this package
/// follows checks all six against `m1`; bounding the last three by `m2`
/// keeps them inside the second recurrence's domain.
pub fn check_seed(seed: &Seed) -> Result<(), SeedError> {
    let result = validate(seed);
    if let Err(err) = result {
        log::error!("{err}");
    }
    result
}

fn validate(seed: &Seed) -> Result<(), SeedError> {
    for (index, &value) in seed.iter().enumerate() {
        let bound = if index < 3 { M1_BOUND } else { M2_BOUND };
        if value >= bound {
            return Err(SeedError::ComponentTooLarge { index, value, bound });
        }
    }
    if seed[..3].iter().all(|&v| v == 0) {
        return Err(SeedError::FirstTripleZero);
    }
    if seed[3..].iter().all(|&v| v == 0) {
        return Err(SeedError::LastTripleZero);
    }
    Ok(())
}

pub(crate) fn to_state(seed: &Seed) -> [f64; 6] {
    seed.map(|v| v as f64)
}

pub(crate) fn from_state(state: &[f64; 6]) -> Seed {
    state.map(|v| v as u64)
}

/// The seed the next stream will start from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackageSeed {
    next: [f64; 6],
}

impl PackageSeed {
    pub const fn new() -> Self {
        Self { next: [12345.0; 6] }
    }

    pub fn from_seed(seed: &Seed) -> Result<Self, SeedError> {
        check_seed(seed)?;
        Ok(Self { next: to_state(seed) })
    }

    /// Replace the package seed. On error nothing changes.
    pub fn set(&mut self, seed: &Seed) -> Result<(), SeedError> {
        check_seed(seed)?;
        self.next = to_state(seed);
        log::debug!("package seed set to {seed:?}");
        Ok(())
    }

    /// Hand out the current seed and jump the package seed one stream ahead.
    pub(crate) fn advance(&mut self) -> [f64; 6] {
        let current = self.next;
        self.next = STREAM.apply(&current);
        current
    }

    /// Build the next stream from this package seed.
    pub fn next_stream(&mut self, name: impl Into<String>) -> RngStream {
        RngStream::from_package(self, name)
    }
}

impl Default for PackageSeed {
    fn default() -> Self {
        Self::new()
    }
}

static PACKAGE_SEED: Mutex<PackageSeed> = Mutex::new(PackageSeed::new());

/// Replace the process-wide package seed used by [`RngStream::new`](crate::RngStream::new).
pub fn set_package_seed(seed: &Seed) -> Result<(), SeedError> {
    PACKAGE_SEED
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .set(seed)
}

pub(crate) fn advance_global() -> [f64; 6] {
    PACKAGE_SEED
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .advance()
}
