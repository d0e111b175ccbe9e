use crate::fare_model::distances::DistanceTable;
use crate::fare_model::locations::{Location, ParseNameError};
use crate::global_variables::{FALLBACK_BASE_FARE, FALLBACK_SURCHARGE, PER_KM_RATE};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Fare tiers offered by the booking screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VehicleClass {
    #[serde(rename = "Enavroom-vroom")]
    Moto,
    #[serde(rename = "Car (4-seater)")]
    Car4,
    #[serde(rename = "Car (6-seater)")]
    Car6,
}

impl VehicleClass {
    pub const ALL: [VehicleClass; 3] = [VehicleClass::Moto, VehicleClass::Car4, VehicleClass::Car6];

    pub fn name(&self) -> &'static str {
        match self {
            VehicleClass::Moto => "Enavroom-vroom",
            VehicleClass::Car4 => "Car (4-seater)",
            VehicleClass::Car6 => "Car (6-seater)",
        }
    }

    /// Flat fare covering the first kilometre.
    pub fn base_fare(&self) -> u32 {
        match self {
            VehicleClass::Moto => 75,
            VehicleClass::Car4 => 250,
            VehicleClass::Car6 => 450,
        }
    }

    pub fn surcharge(&self) -> u32 {
        match self {
            VehicleClass::Moto => 0,
            VehicleClass::Car4 => 20,
            VehicleClass::Car6 => 30,
        }
    }

    pub fn passengers(&self) -> u8 {
        match self {
            VehicleClass::Moto => 1,
            VehicleClass::Car4 => 4,
            VehicleClass::Car6 => 6,
        }
    }
}

impl fmt::Display for VehicleClass {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for VehicleClass {
    type Err = ParseNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        VehicleClass::ALL
            .iter()
            .copied()
            .find(|class| class.name() == s)
            .ok_or_else(|| ParseNameError::new("vehicle class", s))
    }
}

/// Distance charge on top of the base fare: every started kilometre past
/// the first costs `PER_KM_RATE`. Saturates at `u32::MAX`.
fn extra_km_charge(km: f64) -> u32 {
    if km > 1.0 {
        ((km - 1.0).ceil() as u32).saturating_mul(PER_KM_RATE)
    } else {
        0
    }
}

/// Trip price for a vehicle class over `km` kilometres.
pub fn cost(class: VehicleClass, km: f64) -> u32 {
    class
        .base_fare()
        .saturating_add(extra_km_charge(km))
        .saturating_add(class.surcharge())
}

/// Trip price keyed by display name. Unknown names are priced as a moto
/// ride with no surcharge.
pub fn cost_for_name(name: &str, km: f64) -> u32 {
    match name.parse::<VehicleClass>() {
        Ok(class) => cost(class, km),
        Err(_) => {
            log::warn!("Unknown vehicle class '{}', using moto pricing", name);
            FALLBACK_BASE_FARE
                .saturating_add(extra_km_charge(km))
                .saturating_add(FALLBACK_SURCHARGE)
        }
    }
}

/// Distance and price for a prospective trip, shown before booking.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FareQuote {
    pub vehicle_type: VehicleClass,
    pub start: Location,
    pub end: Location,
    pub distance: f64,
    pub cost: u32,
}

pub fn quote(
    table: &DistanceTable,
    class: VehicleClass,
    start: Location,
    end: Location,
) -> FareQuote {
    let distance = table.distance(start, end);
    FareQuote {
        vehicle_type: class,
        start,
        end,
        distance,
        cost: cost(class, distance),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fare_model::distances::create_distance_table;

    #[test]
    fn moto_within_first_km_is_base_fare() {
        assert_eq!(cost(VehicleClass::Moto, 0.5), 75);
        assert_eq!(cost(VehicleClass::Moto, 0.0), 75);
    }

    #[test]
    fn started_kilometres_round_up() {
        // ceil(2.3 - 1) = 2
        assert_eq!(cost(VehicleClass::Moto, 2.3), 95);
        assert_eq!(cost(VehicleClass::Car4, 1.2), 250 + 10 + 20);
        assert_eq!(cost(VehicleClass::Car4, 5.0), 250 + 40 + 20);
    }

    #[test]
    fn exactly_one_km_has_no_distance_charge() {
        assert_eq!(cost(VehicleClass::Car6, 1.0), 480);
    }

    #[test]
    fn huge_distances_saturate_instead_of_overflowing() {
        assert_eq!(cost(VehicleClass::Car6, 5.0e8), u32::MAX);
        assert_eq!(cost(VehicleClass::Moto, f64::INFINITY), u32::MAX);
        assert_eq!(cost_for_name("Helicopter", 1.0e12), u32::MAX);
        assert_eq!(cost(VehicleClass::Moto, f64::NAN), 75);
    }

    #[test]
    fn unknown_class_name_falls_back_to_moto() {
        assert_eq!(cost_for_name("Helicopter", 0.5), 75);
        assert_eq!(cost_for_name("Helicopter", 2.3), 95);
        assert_eq!(cost_for_name("Car (6-seater)", 1.0), 480);
    }

    #[test]
    fn quote_uses_table_distance() {
        let table = create_distance_table();
        let q = quote(&table, VehicleClass::Car4, Location::Cea, Location::Coc);
        assert_eq!(q.distance, 4.5);
        assert_eq!(q.cost, 250 + 40 + 20);

        let same = quote(&table, VehicleClass::Moto, Location::Coc, Location::Coc);
        assert_eq!(same.distance, 0.0);
        assert_eq!(same.cost, 75);
    }

    #[test]
    fn class_names_round_trip() {
        for class in VehicleClass::ALL {
            assert_eq!(class.name().parse::<VehicleClass>(), Ok(class));
        }
        assert_eq!(
            serde_json::to_string(&VehicleClass::Car6).unwrap(),
            "\"Car (6-seater)\""
        );
    }
}
