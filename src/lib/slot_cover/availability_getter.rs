use std::{error::Error, path::Path};

use log::info;

use super::{
    helpers::{aggregate_availability, get_roster},
    models::slot_model::Availability,
};

/// A trait, necessary for every entity that will be used for getting the students' availability.
pub trait AvailabilityGetter {
    fn get_availability(&self) -> Result<Availability, Box<dyn Error>>;
}

/// Allows to use a path to a TOML or JSON document as the source of availability.
impl AvailabilityGetter for Path {
    fn get_availability(&self) -> Result<Availability, Box<dyn Error>> {
        let roster = get_roster(self)?;
        let availability = aggregate_availability(&roster);
        info!(
            "Collected {} candidate slots for {} students",
            availability.slots.len(),
            availability.people.len()
        );
        Ok(availability)
    }
}
