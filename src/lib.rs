pub mod booking;
pub mod config;
pub mod fare_model;
pub mod global_variables;

use std::error::Error;

/// Result type for operations that touch the ledger's files.
pub type LedgerResult<T> = Result<T, Box<dyn Error>>;

pub use booking::{Booking, BookingLedger, BookingStatus, CancelOutcome, PaymentMethod};
pub use config::LedgerConfig;
pub use fare_model::{Location, VehicleClass};
