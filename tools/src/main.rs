//! stream-runner: draw from a set of random streams and dump their state.
//!
//! Usage:
//!   stream-runner --seed 327612383,317095578,14704821,884064067,1017894425,16401881 --draws 3
//!   stream-runner --antithetic --inc-prec --full
//!   stream-runner --config run.json --draws 10

use anyhow::{anyhow, Context, Result};
use rngstreams_core::{RngStream, RunConfig, Seed, StreamConfig};
use std::env;

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let draws = parse_arg(&args, "--draws", 3usize)?;
    let full = has_flag(&args, "--full");

    let config = match find_value(&args, "--config") {
        Some(path) => RunConfig::load(path).with_context(|| format!("loading {path}"))?,
        None => config_from_flags(&args)?,
    };

    let mut streams = config.build_streams()?;
    if streams.is_empty() {
        log::warn!("No streams configured");
        return Ok(());
    }

    for stream in &mut streams {
        print_draws(stream, draws);
        stream.reset_next_substream();
        println!("  -- next substream --");
        print_draws(stream, draws);
        println!();

        if full {
            print!("{}", stream.full_state());
        } else {
            print!("{stream}");
        }
        println!();
    }

    Ok(())
}

/// One stream described entirely by command-line flags.
fn config_from_flags(args: &[String]) -> Result<RunConfig> {
    let package_seed = find_value(args, "--seed").map(parse_seed).transpose()?;
    let stream = StreamConfig {
        name: find_value(args, "--name").unwrap_or("R").to_string(),
        seed: None,
        antithetic: has_flag(args, "--antithetic"),
        increased_precision: has_flag(args, "--inc-prec"),
        substream: parse_arg(args, "--substream", 0u64)?,
    };
    Ok(RunConfig {
        package_seed,
        streams: vec![stream],
    })
}

fn print_draws(stream: &mut RngStream, draws: usize) {
    for _ in 0..draws {
        let u = stream.rand_u01();
        println!("  {:<10} {:.17}", stream.name(), u);
    }
}

fn parse_seed(raw: &str) -> Result<Seed> {
    let parts = raw
        .split(',')
        .map(|p| p.trim().parse::<u64>())
        .collect::<Result<Vec<_>, _>>()
        .with_context(|| format!("seed '{raw}' is not a list of integers"))?;
    parts
        .try_into()
        .map_err(|v: Vec<u64>| anyhow!("seed needs 6 components, got {}", v.len()))
}

fn find_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.windows(2)
        .find(|w| w[0] == flag)
        .map(|w| w[1].as_str())
}

fn has_flag(args: &[String], flag: &str) -> bool {
    args.iter().any(|a| a == flag)
}

fn parse_arg<T>(args: &[String], flag: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match find_value(args, flag) {
        Some(raw) => raw
            .parse()
            .with_context(|| format!("{flag} expects a number, got '{raw}'")),
        None => Ok(default),
    }
}
