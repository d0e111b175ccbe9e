use crate::booking::record::{Booking, BookingStatus};
use crate::LedgerResult;
use serde::Serialize;
use std::fs::File;
use std::path::Path;

/// Totals shown on the history report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct LedgerSummary {
    pub total: usize,
    pub active: usize,
    pub cancelled: usize,
    /// Sum of `cost` over active bookings.
    pub active_revenue: u64,
}

pub fn summarize(bookings: &[Booking]) -> LedgerSummary {
    bookings
        .iter()
        .fold(LedgerSummary::default(), |mut summary, booking| {
            summary.total += 1;
            match booking.status {
                BookingStatus::Active => {
                    summary.active += 1;
                    summary.active_revenue += u64::from(booking.cost);
                }
                BookingStatus::Cancelled => summary.cancelled += 1,
            }
            summary
        })
}

/// Writes every booking to a CSV file with a header row, replacing any
/// existing file.
pub fn export_csv(path: &Path, bookings: &[Booking]) -> LedgerResult<()> {
    let file = File::create(path)?;
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(true)
        .from_writer(file);
    for booking in bookings {
        wtr.serialize(booking)?;
    }
    wtr.flush()?;
    Ok(())
}
