use crate::booking::record::Booking;
use crate::LedgerResult;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

/// Event kinds written to the audit trail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuditAction {
    Booked,
    Cancelled,
}

impl AuditAction {
    pub fn tag(&self) -> &'static str {
        match self {
            AuditAction::Booked => "BOOKED",
            AuditAction::Cancelled => "CANCELLED",
        }
    }
}

/// Renders one audit line (without the trailing newline).
pub fn format_entry(action: AuditAction, booking: &Booking, currency_symbol: &str) -> String {
    format!(
        "{} | ID: {} | {} | {} → {} | {:.1} km | {}{:.2} | {} | STATUS: {}",
        action.tag(),
        booking.id,
        booking.vehicle_type,
        booking.start,
        booking.end,
        booking.distance,
        currency_symbol,
        f64::from(booking.cost),
        booking.payment_method,
        booking.status,
    )
}

/// Appends one event line to the audit log, creating the file if needed.
pub fn append_entry(
    path: &Path,
    action: AuditAction,
    booking: &Booking,
    currency_symbol: &str,
) -> LedgerResult<()> {
    let mut file = OpenOptions::new().append(true).create(true).open(path)?;
    writeln!(file, "{}", format_entry(action, booking, currency_symbol))?;
    file.flush()?;
    Ok(())
}
