use std::{error::Error, ffi::OsStr, num::NonZeroUsize, path::Path};

use figment::{
    providers::{Env, Format, Json, Serialized, Toml},
    Figment,
};
use log::{debug, info};

use super::models::{
    slot_model::{Availability, CoveredSlot},
    Args, Config, Roster,
};

pub fn log_all_students(roster: &Roster) -> () {
    for (name, student) in roster.students.iter() {
        debug!(
            "Serving {}, who is available at {} slot(s)",
            name,
            student.slots.len()
        );
    }
}

/// Reads the availability document. Files ending in `.json` are read as JSON, anything else as TOML.
pub fn get_roster(path: &Path) -> Result<Roster, Box<dyn Error>> {
    if !path.is_file() {
        return Err(format!("Cannot read availability file {}", path.display()).into());
    }
    info!(
        "Reading availability from {}",
        std::path::absolute(path)?.display()
    );
    let figment = match path.extension().and_then(OsStr::to_str) {
        Some("json") => Figment::from(Json::file(path)),
        _ => Figment::from(Toml::file(path)),
    };
    let roster: Roster = figment.extract()?;
    log_all_students(&roster);
    Ok(roster)
}

/// Groups the declared (student, slot) pairs by slot. Every student ends up in `people`,
/// even one without any slots.
pub fn aggregate_availability(roster: &Roster) -> Availability {
    let mut availability = Availability::default();

    for (name, student) in roster.students.iter() {
        availability.people.insert(name.to_owned());
        for entry in student.slots.iter() {
            availability
                .slots
                .entry(entry.key())
                .or_default()
                .insert(name.to_owned());
        }
    }

    availability
}

pub fn get_config(args: &Args) -> Result<Config, figment::Error> {
    let config: Config = Figment::from(Serialized::defaults(Config::default()))
        .merge(Json::file(&args.config_json_path))
        .merge(Env::prefixed("SCHED_"))
        .extract()?;
    debug!("Using {:?}", config);
    Ok(config)
}

/// Value parser for `--amount`.
pub fn positive_int(value: &str) -> Result<NonZeroUsize, String> {
    let integer: i64 = value
        .parse()
        .map_err(|_| format!("invalid integer '{}'", value))?;
    usize::try_from(integer)
        .ok()
        .and_then(NonZeroUsize::new)
        .ok_or_else(|| format!("expected positive integer, got {}", value))
}

pub fn format_cover(cover: &[CoveredSlot]) -> Vec<String> {
    cover
        .iter()
        .enumerate()
        .map(|(i, covered)| {
            format!(
                "Slot {}: {} (students: {})",
                i + 1,
                covered.slot,
                covered.people.join(", ")
            )
        })
        .collect()
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
