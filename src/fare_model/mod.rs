// fare_model/mod.rs
pub mod distances;
pub mod locations;
pub mod pricing;
pub mod route_images;

pub use distances::{create_distance_table, DistanceTable};
pub use locations::{Location, ParseNameError};
pub use pricing::{cost, cost_for_name, quote, FareQuote, VehicleClass};
pub use route_images::route_image;
