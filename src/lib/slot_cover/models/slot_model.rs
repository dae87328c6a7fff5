//! Module with the weekly slot model shared by the loader, the search and the reporters
use std::{
    collections::{BTreeMap, BTreeSet},
    fmt,
    str::FromStr,
};

use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(try_from = "String")]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl FromStr for Weekday {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "Mon" | "Monday" => Ok(Weekday::Monday),
            "Tue" | "Tuesday" => Ok(Weekday::Tuesday),
            "Wed" | "Wednesday" => Ok(Weekday::Wednesday),
            "Thu" | "Thursday" => Ok(Weekday::Thursday),
            "Fri" | "Friday" => Ok(Weekday::Friday),
            "Sat" | "Saturday" => Ok(Weekday::Saturday),
            "Sun" | "Sunday" => Ok(Weekday::Sunday),
            _ => Err(format!(
                "Invalid weekday, expected Mon/Tue/Wed/Thu/Fri/Sat/Sun, got '{}'",
                value
            )),
        }
    }
}

impl TryFrom<String> for Weekday {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
        };
        f.write_str(name)
    }
}

/// Time of day with half hour granularity, kept as the number of half hours since midnight.
/// Written in documents as a number: `12` for 12:00, `13.5` for 13:30.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(try_from = "f64", into = "f64")]
pub struct TimeOfDay(u8);

impl TimeOfDay {
    pub fn hour(&self) -> u8 {
        self.0 / 2
    }

    pub fn is_half_past(&self) -> bool {
        self.0 % 2 == 1
    }
}

impl TryFrom<f64> for TimeOfDay {
    type Error = String;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        let half_hours = value * 2.0;
        if !(0.0..48.0).contains(&half_hours) || half_hours.fract() != 0.0 {
            return Err(format!(
                "Invalid time slot {}, expected a whole or half hour between 0 and 23.5 (12 for 12:00, 13.5 for 13:30)",
                value
            ));
        }
        Ok(TimeOfDay(half_hours as u8))
    }
}

impl From<TimeOfDay> for f64 {
    fn from(time: TimeOfDay) -> Self {
        f64::from(time.0) / 2.0
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let minutes = if self.is_half_past() { 30 } else { 0 };
        write!(f, "{}:{:02}", self.hour(), minutes)
    }
}

/// Identity of a candidate slot. The derived ordering (weekday first, then time)
/// is the order results are presented in.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SlotKey {
    pub weekday: Weekday,
    pub time: TimeOfDay,
}

impl SlotKey {
    pub fn new(weekday: Weekday, time: TimeOfDay) -> Self {
        SlotKey { weekday, time }
    }
}

impl fmt::Display for SlotKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.weekday, self.time)
    }
}

/// For every requested slot, the students available at it.
/// A slot nobody asked for is simply absent.
pub type AvailabilityMap = BTreeMap<SlotKey, BTreeSet<String>>;

/// Aggregated availability of the whole group.
#[derive(Debug, Default, PartialEq)]
pub struct Availability {
    pub slots: AvailabilityMap,
    pub people: BTreeSet<String>,
}

/// One entry of a found cover: a slot and everyone available at it, sorted by name.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct CoveredSlot {
    pub slot: SlotKey,
    pub people: Vec<String>,
}

/// Chosen slots in ascending [`SlotKey`] order. Empty when no cover exists.
pub type CoverResult = Vec<CoveredSlot>;

#[cfg(test)]
#[path = "tests/slot_model_tests.rs"]
mod tests;
