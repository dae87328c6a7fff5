use std::error::Error;

use log::info;

use super::{
    availability_getter::AvailabilityGetter, cover_reporter::CoverReporter,
    cover_search::CoverSearch,
};

pub const NO_COVER_MESSAGE: &str = "There aren't enough shared slots between the students.";

pub fn run<AG, CR>(
    availability_getter: &AG,
    cover_reporter: CR,
    search: &CoverSearch,
) -> Result<(), Box<dyn Error>>
where
    AG: AvailabilityGetter + ?Sized,
    CR: CoverReporter,
{
    let availability = availability_getter.get_availability()?;
    info!(
        "Searching for {} slot(s) among {} candidates",
        search.max_slots(),
        availability.slots.len()
    );
    let cover = search.run(&availability.slots, &availability.people)?;
    if cover.is_empty() {
        return Err(NO_COVER_MESSAGE.into());
    }
    cover_reporter.report(&cover)
}
