//! A single random stream and its substreams.
//!
//! Each stream is a segment of length 2^127 of the MRG32k3a sequence, split
//! into 2^51 substreams of length 2^76. A stream can rewind to its own
//! start, to the start of the current substream, or move on to the next
//! substream, and can jump any number of steps either way.

use crate::error::{RngResult, SeedError};
use crate::generator;
use crate::jump::{JumpMatrices, ONE_STEP, ONE_STEP_BACK, SUBSTREAM};
use crate::seed::{advance_global, check_seed, PackageSeed, Seed};
use crate::state::StreamState;
use rand::RngCore;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub struct RngStream {
    name: String,
    state: StreamState,
}

impl RngStream {
    /// Create a stream from the process-wide package seed.
    pub fn new(name: impl Into<String>) -> Self {
        Self::starting_at(name.into(), advance_global())
    }

    /// Create a stream from an explicitly owned package seed.
    pub fn from_package(package: &mut PackageSeed, name: impl Into<String>) -> Self {
        Self::starting_at(name.into(), package.advance())
    }

    fn starting_at(name: String, seed: [f64; 6]) -> Self {
        log::debug!("stream '{name}' starts at {seed:?}");
        Self {
            name,
            state: StreamState::starting_at(seed),
        }
    }

    /// Rebuild a stream from a checkpoint taken with [`RngStream::snapshot`].
    pub fn restore(name: impl Into<String>, state: StreamState) -> RngResult<Self> {
        state.validate()?;
        Ok(Self {
            name: name.into(),
            state,
        })
    }

    pub fn snapshot(&self) -> StreamState {
        self.state.clone()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Uniform draw in (0, 1), or in [0, 1) with increased precision.
    pub fn rand_u01(&mut self) -> f64 {
        if self.state.increased_precision {
            generator::draw_fine(&mut self.state.cg, self.state.antithetic)
        } else {
            generator::draw(&mut self.state.cg, self.state.antithetic)
        }
    }

    /// Integer in `[low, high]` from a single scaled draw.
    ///
    /// This is not rejection sampling: ranges that do not evenly divide the
    /// generator's resolution carry a bias of order `(high - low) / 2^32`.
    /// The span is counted exactly in `i128`, so bounds anywhere in the
    /// `i64` range are honored.
    pub fn rand_int(&mut self, low: i64, high: i64) -> i64 {
        let span = high as i128 - low as i128 + 1;
        let offset = ((span as f64 * self.rand_u01()) as i128).min(span - 1);
        (low as i128 + offset) as i64
    }

    /// Back to the start of the stream: `Cg = Bg = Ig`.
    pub fn reset_start_stream(&mut self) {
        self.state.bg = self.state.ig;
        self.state.cg = self.state.ig;
    }

    /// Back to the start of the current substream: `Cg = Bg`.
    pub fn reset_start_substream(&mut self) {
        self.state.cg = self.state.bg;
    }

    /// On to the start of the next substream, 2^76 steps past the current one.
    pub fn reset_next_substream(&mut self) {
        self.state.bg = SUBSTREAM.apply(&self.state.bg);
        self.state.cg = self.state.bg;
        log::trace!("stream '{}' moved to substream {:?}", self.name, self.state.bg);
    }

    /// Jump the current state by `2^e + c` steps.
    ///
    /// A negative `e` jumps back by `2^-e` steps and a negative `c` jumps
    /// back by `-c` steps. `e == 0` means no power-of-two component, so
    /// `advance_state(0, c)` moves exactly `c` steps. `Ig` and `Bg` are
    /// left where they are.
    pub fn advance_state(&mut self, e: i64, c: i64) {
        let by_count = if c >= 0 {
            ONE_STEP.pow(c as u64)
        } else {
            ONE_STEP_BACK.pow(c.unsigned_abs())
        };

        let jump: JumpMatrices = if e > 0 {
            ONE_STEP.two_pow(e as u64).compose(&by_count)
        } else if e < 0 {
            ONE_STEP_BACK.two_pow(e.unsigned_abs()).compose(&by_count)
        } else {
            by_count
        };

        self.state.cg = jump.apply(&self.state.cg);
        log::trace!("stream '{}' advanced by 2^{e} + {c}", self.name);
    }

    /// Make `seed` the new start of this stream. On error nothing changes.
    pub fn set_seed(&mut self, seed: &Seed) -> Result<(), SeedError> {
        check_seed(seed)?;
        self.state.reseed(seed);
        Ok(())
    }

    /// Current generator state `Cg`.
    pub fn get_state(&self) -> Seed {
        self.state.current()
    }

    /// Start of the stream, `Ig`.
    pub fn initial_seed(&self) -> Seed {
        self.state.initial_seed()
    }

    /// Start of the current substream, `Bg`.
    pub fn substream_seed(&self) -> Seed {
        self.state.substream_seed()
    }

    pub fn set_antithetic(&mut self, antithetic: bool) {
        self.state.antithetic = antithetic;
    }

    pub fn is_antithetic(&self) -> bool {
        self.state.antithetic
    }

    pub fn set_increased_precision(&mut self, increased_precision: bool) {
        self.state.increased_precision = increased_precision;
    }

    pub fn is_increased_precision(&self) -> bool {
        self.state.increased_precision
    }

    /// Displayable dump of flags and all three seed vectors.
    pub fn full_state(&self) -> FullState<'_> {
        FullState(self)
    }
}

impl Default for RngStream {
    fn default() -> Self {
        Self::new("")
    }
}

/// Draws go through [`RngStream::rand_u01`], so both output modes apply.
impl RngCore for RngStream {
    fn next_u32(&mut self) -> u32 {
        (self.rand_u01() * 4294967296.0) as u32
    }

    fn next_u64(&mut self) -> u64 {
        rand_core::impls::next_u64_via_u32(self)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        rand_core::impls::fill_bytes_via_next(self, dest);
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

fn write_vector(f: &mut fmt::Formatter<'_>, label: &str, v: &Seed) -> fmt::Result {
    let parts: Vec<String> = v.iter().map(u64::to_string).collect();
    writeln!(f, "   {label} = {{ {} }}", parts.join(", "))
}

fn write_title(f: &mut fmt::Formatter<'_>, prefix: &str, name: &str) -> fmt::Result {
    write!(f, "{prefix}")?;
    if !name.is_empty() {
        write!(f, " {name}")?;
    }
    writeln!(f, ":")
}

/// Summary dump: the current state only.
impl fmt::Display for RngStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_title(f, "The current state of the Rngstream", &self.name)?;
        write_vector(f, "Cg", &self.get_state())
    }
}

pub struct FullState<'a>(&'a RngStream);

impl fmt::Display for FullState<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let stream = self.0;
        write_title(f, "The RngStream", &stream.name)?;
        writeln!(f, "   anti = {}", stream.is_antithetic())?;
        writeln!(f, "   incPrec = {}", stream.is_increased_precision())?;
        write_vector(f, "Ig", &stream.initial_seed())?;
        write_vector(f, "Bg", &stream.substream_seed())?;
        write_vector(f, "Cg", &stream.get_state())
    }
}
