use crate::fare_model::locations::Location;
use std::collections::HashMap;

/// Symmetric table of road distances (km) between pairs of locations.
#[derive(Debug, Clone, Default)]
pub struct DistanceTable {
    entries: HashMap<(Location, Location), f64>,
}

impl DistanceTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a table from one orientation of each pair.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (Location, Location, f64)>,
    {
        let mut table = Self::new();
        for (a, b, km) in pairs {
            table.insert(a, b, km);
        }
        table
    }

    /// Records `km` for both `(a, b)` and `(b, a)`.
    ///
    /// Only positive, finite distances between distinct locations are
    /// kept; anything else is skipped and `false` returned.
    pub fn insert(&mut self, a: Location, b: Location, km: f64) -> bool {
        if a == b || !km.is_finite() || km <= 0.0 {
            log::warn!("Ignoring distance entry {} -> {}: {} km", a, b, km);
            return false;
        }
        self.entries.insert((a, b), km);
        self.entries.insert((b, a), km);
        true
    }

    /// Distance between two locations.
    ///
    /// A trip to the same place is zero. A pair with no entry also reads as
    /// zero, which prices an unmapped route as a minimum-fare trip.
    pub fn distance(&self, a: Location, b: Location) -> f64 {
        if a == b {
            return 0.0;
        }
        match self.entries.get(&(a, b)) {
            Some(&km) => km,
            None => {
                log::warn!("No distance entry for {} -> {}, using 0 km", a, b);
                0.0
            }
        }
    }

    pub fn contains(&self, a: Location, b: Location) -> bool {
        self.entries.contains_key(&(a, b))
    }

    /// Number of unordered pairs in the table.
    pub fn pair_count(&self) -> usize {
        self.entries.len() / 2
    }
}

/// The campus map used by the booking screens.
pub fn create_distance_table() -> DistanceTable {
    use Location::*;

    DistanceTable::from_pairs([
        (PupMain, Cea, 2.0),
        (PupMain, Hasmin, 1.5),
        (PupMain, ITech, 1.2),
        (PupMain, Coc, 1.0),
        (PupMain, PupLhs, 1.7),
        (PupMain, Condotel, 1.5),
        (Cea, Hasmin, 2.0),
        (Cea, ITech, 5.0),
        (Cea, Coc, 4.5),
        (Cea, PupLhs, 4.0),
        (Cea, Condotel, 4.5),
        (Hasmin, ITech, 4.0),
        (Hasmin, Coc, 3.5),
        (Hasmin, PupLhs, 0.5),
        (Hasmin, Condotel, 1.5),
        (ITech, Coc, 0.5),
        (ITech, PupLhs, 2.5),
        (ITech, Condotel, 0.5),
        (Coc, PupLhs, 2.0),
        (Coc, Condotel, 1.0),
        (PupLhs, Condotel, 2.0),
    ])
}
