use crate::fare_model::{FareQuote, Location, ParseNameError, VehicleClass};
use crate::global_variables::BOOKING_ID_LEN;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PaymentMethod {
    #[default]
    Cash,
    Wallet,
}

impl PaymentMethod {
    pub fn name(&self) -> &'static str {
        match self {
            PaymentMethod::Cash => "Cash",
            PaymentMethod::Wallet => "Wallet",
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PaymentMethod {
    type Err = ParseNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Cash" => Ok(PaymentMethod::Cash),
            "Wallet" => Ok(PaymentMethod::Wallet),
            _ => Err(ParseNameError::new("payment method", s)),
        }
    }
}

/// Lifecycle of a booking: `Active -> Cancelled`, nothing else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    #[default]
    Active,
    Cancelled,
}

impl BookingStatus {
    pub fn name(&self) -> &'static str {
        match self {
            BookingStatus::Active => "active",
            BookingStatus::Cancelled => "cancelled",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, BookingStatus::Cancelled)
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One ride request as recorded in the ledger and its snapshot file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    pub id: String,
    pub vehicle_type: VehicleClass,
    pub start: Location,
    pub end: Location,
    /// Trip length in kilometres.
    pub distance: f64,
    pub cost: u32,
    #[serde(default)]
    pub payment_method: PaymentMethod,
    #[serde(default)]
    pub status: BookingStatus,
}

impl Booking {
    /// A new active booking for a priced trip.
    pub fn new(id: String, quote: FareQuote, payment_method: PaymentMethod) -> Self {
        Self {
            id,
            vehicle_type: quote.vehicle_type,
            start: quote.start,
            end: quote.end,
            distance: quote.distance,
            cost: quote.cost,
            payment_method,
            status: BookingStatus::Active,
        }
    }

    pub fn is_active(&self) -> bool {
        self.status == BookingStatus::Active
    }
}

/// Short booking token: the leading characters of a random UUID.
pub fn generate_booking_id() -> String {
    let mut id = Uuid::new_v4().to_string();
    id.truncate(BOOKING_ID_LEN);
    id
}
