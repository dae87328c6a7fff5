//! Search for the smallest set of slots that every student can attend at least one of.
//!
//! The search is exhaustive: all single slots are tried first, then all pairs,
//! then all triples and so on up to the requested amount. The first covering
//! combination in enumeration order wins, so the same input always gives the
//! same answer. Worst case cost is `C(S, k)` combinations per size `k`.
use std::{
    collections::{BTreeSet, HashSet},
    error::Error,
    fmt,
    num::NonZeroUsize,
};

use log::{debug, info};

use super::models::slot_model::{AvailabilityMap, CoverResult, CoveredSlot, SlotKey};

type Candidate<'a> = (&'a SlotKey, &'a BTreeSet<String>);

/// Returned when the combination budget runs out before the search finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchInterrupted {
    pub attempts: u64,
}

impl fmt::Display for SearchInterrupted {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Gave up after {} combinations without finding a cover",
            self.attempts
        )
    }
}

impl Error for SearchInterrupted {}

#[derive(Debug, Clone, Copy)]
pub struct CoverSearch {
    max_slots: NonZeroUsize,
    max_attempts: Option<u64>,
}

impl CoverSearch {
    pub fn new(max_slots: NonZeroUsize) -> Self {
        CoverSearch {
            max_slots,
            max_attempts: None,
        }
    }

    /// Caps the number of combinations tried. `None` means no cap.
    pub fn with_max_attempts(mut self, max_attempts: Option<u64>) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    pub fn max_slots(&self) -> NonZeroUsize {
        self.max_slots
    }

    /// Finds a cover of `people` using at most `max_slots` slots of `availability`.
    ///
    /// `Ok` with an empty result means no cover of that size exists.
    /// `Err` is only possible when a combination budget is set.
    pub fn run(
        &self,
        availability: &AvailabilityMap,
        people: &BTreeSet<String>,
    ) -> Result<CoverResult, SearchInterrupted> {
        let candidates: Vec<Candidate> = availability.iter().collect();
        let mut attempts: u64 = 0;

        for size in 1..=self.max_slots.get() {
            if size > candidates.len() {
                break;
            }
            debug!(
                "Trying combinations of {} out of {} slots",
                size,
                candidates.len()
            );

            let mut combination: Vec<usize> = (0..size).collect();
            loop {
                if self.max_attempts.is_some_and(|limit| attempts >= limit) {
                    info!("Combination budget of {} exhausted", attempts);
                    return Err(SearchInterrupted { attempts });
                }
                attempts += 1;

                if covers_everyone(&candidates, &combination, people) {
                    info!(
                        "Found a cover of {} slot(s) after {} combination(s)",
                        size, attempts
                    );
                    return Ok(self.pad_and_sort(&candidates, &combination));
                }
                if !next_combination(&mut combination, candidates.len()) {
                    break;
                }
            }
        }

        info!(
            "No cover of at most {} slot(s) after {} combination(s)",
            self.max_slots, attempts
        );
        Ok(CoverResult::new())
    }

    /* fill up to max_slots from the tail of the enumeration, then order by slot */
    fn pad_and_sort(&self, candidates: &[Candidate], combination: &[usize]) -> CoverResult {
        let mut chosen: HashSet<usize> = combination.iter().copied().collect();
        for index in (0..candidates.len()).rev() {
            if chosen.len() >= self.max_slots.get() {
                break;
            }
            if chosen.insert(index) {
                debug!("Padding with slot {}", candidates[index].0);
            }
        }

        let mut cover: CoverResult = chosen
            .into_iter()
            .map(|index| {
                let (slot, people) = candidates[index];
                CoveredSlot {
                    slot: *slot,
                    people: people.iter().cloned().collect(),
                }
            })
            .collect();
        cover.sort_by_key(|covered| covered.slot);
        cover
    }
}

/// Runs an unbounded [`CoverSearch`]; an empty result means no cover exists.
pub fn find_cover(
    availability: &AvailabilityMap,
    people: &BTreeSet<String>,
    max_slots: NonZeroUsize,
) -> CoverResult {
    CoverSearch::new(max_slots)
        .run(availability, people)
        .unwrap_or_default()
}

fn covers_everyone(
    candidates: &[Candidate],
    combination: &[usize],
    people: &BTreeSet<String>,
) -> bool {
    let covered: BTreeSet<&String> = combination
        .iter()
        .flat_map(|&index| candidates[index].1.iter())
        .collect();
    covered.len() == people.len() && people.iter().all(|person| covered.contains(person))
}

/// Advances `indices` to the next `k`-combination of `0..n` in lexicographic order.
/// Returns `false` once the last combination has been passed. Requires `k <= n`.
fn next_combination(indices: &mut [usize], n: usize) -> bool {
    let k = indices.len();
    for i in (0..k).rev() {
        if indices[i] < n - k + i {
            indices[i] += 1;
            for j in i + 1..k {
                indices[j] = indices[j - 1] + 1;
            }
            return true;
        }
    }
    false
}

#[cfg(test)]
#[path = "tests/cover_search_tests.rs"]
mod tests;
