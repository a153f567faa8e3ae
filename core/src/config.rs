use crate::error::RngResult;
use crate::seed::{PackageSeed, Seed};
use crate::stream::RngStream;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// How to set up one stream.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StreamConfig {
    #[serde(default)]
    pub name: String,
    /// Overrides the seed handed out by the package seed.
    #[serde(default)]
    pub seed: Option<Seed>,
    #[serde(default)]
    pub antithetic: bool,
    #[serde(default)]
    pub increased_precision: bool,
    /// Number of times to move on to the next substream after construction.
    #[serde(default)]
    pub substream: u64,
}

/// A set of streams built in order from one package seed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RunConfig {
    #[serde(default)]
    pub package_seed: Option<Seed>,
    #[serde(default)]
    pub streams: Vec<StreamConfig>,
}

impl RunConfig {
    pub fn from_json_str(json: &str) -> RngResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> RngResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)?;
        log::debug!("loaded run config from {}", path.display());
        Self::from_json_str(&raw)
    }

    /// Build every configured stream. Any invalid seed aborts the whole build.
    pub fn build_streams(&self) -> RngResult<Vec<RngStream>> {
        let mut package = match &self.package_seed {
            Some(seed) => PackageSeed::from_seed(seed)?,
            None => PackageSeed::new(),
        };

        self.streams
            .iter()
            .map(|cfg| -> RngResult<RngStream> {
                let mut stream = package.next_stream(cfg.name.clone());
                if let Some(seed) = &cfg.seed {
                    stream.set_seed(seed)?;
                }
                stream.set_antithetic(cfg.antithetic);
                stream.set_increased_precision(cfg.increased_precision);
                for _ in 0..cfg.substream {
                    stream.reset_next_substream();
                }
                Ok(stream)
            })
            .collect()
    }
}
