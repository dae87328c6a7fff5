use std::{error::Error, io::Write};

use super::{helpers::format_cover, models::slot_model::CoveredSlot};

/// A trait, necessary for every entity that will present the picked slots.
pub trait CoverReporter {
    fn report(self, cover: &[CoveredSlot]) -> Result<(), Box<dyn Error>>;
}

/// Writes one `Slot N: Weekday, H:MM (students: ...)` line per picked slot.
pub struct TextReporter<W: Write>(pub W);

impl<W: Write> CoverReporter for TextReporter<W> {
    fn report(mut self, cover: &[CoveredSlot]) -> Result<(), Box<dyn Error>> {
        for line in format_cover(cover) {
            writeln!(self.0, "{}", line)?;
        }
        self.0.flush()?;
        Ok(())
    }
}

/// Writes the picked slots as a pretty printed JSON array.
pub struct JsonReporter<W: Write>(pub W);

impl<W: Write> CoverReporter for JsonReporter<W> {
    fn report(mut self, cover: &[CoveredSlot]) -> Result<(), Box<dyn Error>> {
        serde_json::to_writer_pretty(&mut self.0, cover)?;
        writeln!(self.0)?;
        self.0.flush()?;
        Ok(())
    }
}
