//! Multiple independent random streams and substreams (MRG32k3a).
//!
//! Streams built one after another from the same [`PackageSeed`] start
//! 2^127 steps apart. Within a stream, substreams start 2^76 steps apart.
//! Any stream can jump forwards or backwards by an arbitrary number of
//! steps in logarithmic time.
//!
//! ```
//! use rngstreams_core::{PackageSeed, RngStream};
//!
//! let mut package = PackageSeed::new();
//! let mut a = package.next_stream("a");
//! let mut b = RngStream::from_package(&mut package, "b");
//!
//! let u = a.rand_u01();
//! assert!(u > 0.0 && u < 1.0);
//! assert_ne!(a.initial_seed(), b.initial_seed());
//!
//! b.reset_next_substream();
//! let k = b.rand_int(1, 6);
//! assert!((1..=6).contains(&k));
//! ```

pub mod config;
pub mod error;
pub mod generator;
pub mod jump;
pub mod modmath;
pub mod params;
pub mod seed;
pub mod state;
pub mod stream;

pub use config::{RunConfig, StreamConfig};
pub use error::{RngError, RngResult, SeedError};
pub use seed::{check_seed, set_package_seed, PackageSeed, Seed, DEFAULT_SEED};
pub use state::StreamState;
pub use stream::{FullState, RngStream};
