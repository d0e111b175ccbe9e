// Persistence defaults
pub const DEFAULT_SNAPSHOT_PATH: &str = "bookings.json";
pub const DEFAULT_AUDIT_LOG_PATH: &str = "booking_log.txt";
pub const DEFAULT_CURRENCY_SYMBOL: &str = "₱";

// Environment overrides
pub const ENV_SNAPSHOT_PATH: &str = "BOOKING_SNAPSHOT_PATH";
pub const ENV_AUDIT_LOG_PATH: &str = "BOOKING_AUDIT_LOG_PATH";
pub const ENV_CURRENCY_SYMBOL: &str = "BOOKING_CURRENCY_SYMBOL";

// Pricing
pub const PER_KM_RATE: u32 = 10;
pub const FALLBACK_BASE_FARE: u32 = 75;
pub const FALLBACK_SURCHARGE: u32 = 0;

pub const DEFAULT_ROUTE_IMAGE: &str = "default_map.png";
pub const BOOKING_ID_LEN: usize = 8;
