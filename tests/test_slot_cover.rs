use std::cell::RefCell;
use std::collections::BTreeSet;
use std::error::Error;
use std::num::NonZeroUsize;
use std::path::Path;

use lib::slot_cover::availability_getter::AvailabilityGetter;
use lib::slot_cover::cover_reporter::{CoverReporter, JsonReporter, TextReporter};
use lib::slot_cover::cover_search::CoverSearch;
use lib::slot_cover::models::slot_model::{Availability, CoveredSlot, SlotKey, TimeOfDay, Weekday};
use lib::slot_cover::run_tool::{run, NO_COVER_MESSAGE};

pub struct TestGetter {
    pub students: Vec<(&'static str, Vec<(Weekday, f64)>)>,
}

impl AvailabilityGetter for TestGetter {
    fn get_availability(&self) -> Result<Availability, Box<dyn Error>> {
        let mut availability = Availability::default();
        for (name, slots) in self.students.iter() {
            availability.people.insert(name.to_string());
            for (weekday, time) in slots.iter() {
                let key = SlotKey::new(*weekday, TimeOfDay::try_from(*time)?);
                availability
                    .slots
                    .entry(key)
                    .or_default()
                    .insert(name.to_string());
            }
        }
        Ok(availability)
    }
}

// keeps whatever was reported so the test can look at it after `run` consumed the reporter
pub struct TestReporter<'a> {
    pub reported: &'a RefCell<Option<Vec<CoveredSlot>>>,
}

impl CoverReporter for TestReporter<'_> {
    fn report(self, cover: &[CoveredSlot]) -> Result<(), Box<dyn Error>> {
        *self.reported.borrow_mut() = Some(cover.to_vec());
        Ok(())
    }
}

fn search(amount: usize) -> CoverSearch {
    CoverSearch::new(NonZeroUsize::new(amount).unwrap())
}

fn text_output<AG: AvailabilityGetter + ?Sized>(getter: &AG, amount: usize) -> String {
    let mut out = Vec::new();
    run(getter, TextReporter(&mut out), &search(amount)).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn test_run_with_test_doubles() {
    let getter = TestGetter {
        students: vec![
            ("Bob", vec![(Weekday::Monday, 10.0), (Weekday::Tuesday, 9.0)]),
            ("Alice", vec![(Weekday::Tuesday, 9.0), (Weekday::Monday, 9.0)]),
        ],
    };
    let reported = RefCell::new(None);

    run(&getter, TestReporter { reported: &reported }, &search(3)).unwrap();

    let cover = reported.into_inner().unwrap();
    let slots: Vec<String> = cover.iter().map(|covered| covered.slot.to_string()).collect();
    assert_eq!(
        slots,
        vec!["Monday, 9:00", "Monday, 10:00", "Tuesday, 9:00"]
    );
    assert_eq!(cover[2].people, vec!["Alice".to_string(), "Bob".to_string()]);
}

#[test]
fn test_run_reports_missing_cover() {
    let getter = TestGetter {
        students: vec![
            ("Alice", vec![(Weekday::Monday, 9.0)]),
            ("Bob", vec![]),
        ],
    };
    let reported = RefCell::new(None);

    let err = run(&getter, TestReporter { reported: &reported }, &search(3)).unwrap_err();

    assert_eq!(err.to_string(), NO_COVER_MESSAGE);
    assert!(reported.into_inner().is_none());
}

#[test]
fn test_run_propagates_budget_exhaustion() {
    let getter = TestGetter {
        students: vec![
            ("Alice", vec![(Weekday::Monday, 9.0)]),
            ("Bob", vec![(Weekday::Tuesday, 9.0)]),
        ],
    };
    let reported = RefCell::new(None);
    let starved = search(2).with_max_attempts(Some(2));

    let err = run(&getter, TestReporter { reported: &reported }, &starved).unwrap_err();

    assert_eq!(
        err.to_string(),
        "Gave up after 2 combinations without finding a cover"
    );
}

#[test]
fn test_text_output_from_toml_file() {
    assert_eq!(
        text_output(Path::new("tests/test.students.toml"), 3),
        "Slot 1: Monday, 9:00 (students: Ada Lovelace)\n\
         Slot 2: Wednesday, 10:00 (students: Alan Turing, Grace Hopper)\n\
         Slot 3: Friday, 16:30 (students: Grace Hopper)\n"
    );
}

#[test]
fn test_json_file_gives_same_text() {
    assert_eq!(
        text_output(Path::new("tests/test.students.json"), 2),
        text_output(Path::new("tests/test.students.toml"), 2)
    );
    assert_eq!(text_output(Path::new("tests/test.students.json"), 2).lines().count(), 2);
}

#[test]
fn test_json_output() {
    let mut out = Vec::new();
    run(
        Path::new("tests/test.students.toml"),
        JsonReporter(&mut out),
        &search(2),
    )
    .unwrap();

    let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(
        value,
        serde_json::json!([
            {
                "slot": { "weekday": "Monday", "time": 9.0 },
                "people": ["Ada Lovelace"]
            },
            {
                "slot": { "weekday": "Wednesday", "time": 10.0 },
                "people": ["Alan Turing", "Grace Hopper"]
            }
        ])
    );

    let cover: Vec<CoveredSlot> = serde_json::from_slice(&out).unwrap();
    let people: BTreeSet<&str> = cover
        .iter()
        .flat_map(|covered| covered.people.iter().map(String::as_str))
        .collect();
    assert_eq!(
        people,
        BTreeSet::from(["Ada Lovelace", "Alan Turing", "Grace Hopper"])
    );
}

#[test]
fn test_file_errors_propagate() {
    let mut out = Vec::new();
    let err = run(
        Path::new("tests/test.bad_weekday.toml"),
        TextReporter(&mut out),
        &search(3),
    )
    .unwrap_err();
    assert!(err
        .to_string()
        .contains("Invalid weekday, expected Mon/Tue/Wed/Thu/Fri/Sat/Sun, got 'Funday'"));

    let err = run(
        Path::new("tests/test.unreachable.toml"),
        TextReporter(&mut out),
        &search(3),
    )
    .unwrap_err();
    assert_eq!(err.to_string(), NO_COVER_MESSAGE);
    assert!(out.is_empty());
}
