// booking/mod.rs
pub mod audit_log;
pub mod record;
pub mod ledger;
pub mod report;

pub use audit_log::{format_entry, AuditAction};
pub use record::{generate_booking_id, Booking, BookingStatus, PaymentMethod};
pub use ledger::{BookingLedger, CancelOutcome};
pub use report::{export_csv, summarize, LedgerSummary};
