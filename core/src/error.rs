use thiserror::Error;

/// The one way a seed can be rejected. Nothing is mutated when this is returned.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedError {
    #[error("Seed[{index}] = {value} >= {bound}, seed is not set")]
    ComponentTooLarge { index: usize, value: u64, bound: u64 },

    #[error("First 3 seeds = 0, seed is not set")]
    FirstTripleZero,

    #[error("Last 3 seeds = 0, seed is not set")]
    LastTripleZero,

    #[error("Seed[{index}] is not a non-negative integer")]
    NotAnInteger { index: usize },
}

#[derive(Error, Debug)]
pub enum RngError {
    #[error("Invalid seed: {0}")]
    Seed(#[from] SeedError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type RngResult<T> = Result<T, RngError>;
