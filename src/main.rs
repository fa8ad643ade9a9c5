//! betslip - price a betting slip from a YAML file
//!
//! Usage: betslip <slip.yaml> [--place]

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use betslip::config::AppConfig;
use betslip::odds::parlay_odds;
use betslip::{logging, AmericanOdds, BetSelection, BetSlip};

#[derive(Debug, Deserialize)]
struct SlipFile {
    selections: Vec<BetSelection>,
}

struct Args {
    path: PathBuf,
    place: bool,
}

fn parse_args() -> Result<Args> {
    let mut path = None;
    let mut place = false;
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--place" => place = true,
            flag if flag.starts_with("--") => bail!("unknown flag {}", flag),
            _ if path.is_none() => path = Some(PathBuf::from(&arg)),
            _ => bail!("unexpected argument {}", arg),
        }
    }
    let path = path.context("usage: betslip <slip.yaml> [--place]")?;
    Ok(Args { path, place })
}

fn load_slip(path: &Path, config: &AppConfig) -> Result<BetSlip> {
    let raw = fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    let file: SlipFile =
        serde_yaml::from_str(&raw).with_context(|| format!("Failed to parse {}", path.display()))?;

    let mut slip = BetSlip::with_config(&config.slip);
    for selection in file.selections {
        slip.add(selection)?;
    }
    Ok(slip)
}

fn main() -> Result<()> {
    let config = AppConfig::load()?;
    logging::init(&config.logging);
    info!("Config: {}", config);

    let args = parse_args()?;
    let mut slip = load_slip(&args.path, &config)?;
    info!(selections = slip.len(), path = %args.path.display(), "slip loaded");

    print!("{}", slip.summary(&config.slip.currency_symbol));

    if slip.len() >= 2 {
        let legs: Vec<AmericanOdds> = slip.iter().map(|s| s.odds).collect();
        match parlay_odds(&legs) {
            Ok(parlay) => println!("Parlay ({} legs): {}", legs.len(), parlay),
            Err(e) => warn!(legs = legs.len(), error = %e, "parlay line skipped"),
        }
    }

    if args.place {
        if !slip.can_place() {
            warn!("nothing staked, slip not placed");
            bail!("enter a stake on at least one selection before placing");
        }
        let receipt = slip.place()?;
        println!("{}", serde_json::to_string_pretty(&receipt)?);
    }

    Ok(())
}
