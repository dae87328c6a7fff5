use std::{collections::BTreeMap, num::NonZeroUsize, path::PathBuf};

use clap::Parser;
use serde::{Deserialize, Serialize};

use super::helpers::positive_int;

pub mod slot_model;

use slot_model::{SlotKey, TimeOfDay, Weekday};

/// A model of the availability document.
/// Every student is listed by name together with the slots they can attend.
#[derive(Debug, Deserialize, Serialize)]
pub struct Roster {
    pub students: BTreeMap<String, Student>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct Student {
    pub slots: Vec<SlotEntry>,
}

/// A single declared slot, e.g. `{ weekday = "Sun", slot = 13.5 }`.
#[derive(Debug, Deserialize, Serialize, Clone, Copy)]
pub struct SlotEntry {
    pub weekday: Weekday,
    pub slot: TimeOfDay,
}

impl SlotEntry {
    pub fn key(&self) -> SlotKey {
        SlotKey::new(self.weekday, self.slot)
    }
}

/// A model for describing ARGS of the tool.
/// Consists of:
/// 1. Path to the TOML (or JSON) document with the students' available slots.
/// 2. Amount of slots to pick. Overrides the value from the configuration.
/// 3. Path to config.json with the defaults of the tool.
/// 4. Whether to print the picked slots as JSON.
#[derive(Parser, Debug)]
#[command(
    version,
    about = "Pick N time slots such that everyone is available in at least one of them.",
    long_about = None
)]
pub struct Args {
    #[arg(value_name = "FILE")]
    pub data: PathBuf,
    #[arg(short = 'n', long, value_name = "N", value_parser = positive_int)]
    pub amount: Option<NonZeroUsize>,
    #[arg(long, value_name = "FILE", default_value = "config.json")]
    pub config_json_path: PathBuf,
    #[arg(long)]
    pub json: bool,
}

pub const DEFAULT_AMOUNT: NonZeroUsize = match NonZeroUsize::new(3) {
    Some(amount) => amount,
    None => unreachable!(),
};

/// A model for describing configuration of the tool.
/// Consists of:
/// 1. Amount of slots to pick when none is given on the command line
/// 2. Optional limit on how many slot combinations the search may try
#[derive(Debug, Deserialize, Serialize, PartialEq)]
pub struct Config {
    pub amount: NonZeroUsize,
    pub max_attempts: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            amount: DEFAULT_AMOUNT,
            max_attempts: None,
        }
    }
}
