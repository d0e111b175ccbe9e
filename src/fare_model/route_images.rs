// route_images.rs
//
// Map artwork shown for a selected pickup/drop-off pair. Assets are named
// after the pair in campus-table order; lookups work in either direction.

use crate::fare_model::locations::Location;
use crate::global_variables::DEFAULT_ROUTE_IMAGE;

pub fn route_image(start: Location, end: Location) -> &'static str {
    use Location::*;

    match (start, end) {
        (PupMain, Cea) | (Cea, PupMain) => "pup_main_to_cea.jpg",
        (PupMain, Hasmin) | (Hasmin, PupMain) => "pup_main_to_hasmin.jpg",
        (PupMain, ITech) | (ITech, PupMain) => "pup_main_to_itech.jpg",
        (PupMain, Coc) | (Coc, PupMain) => "pup_main_to_coc.jpg",
        (PupMain, PupLhs) | (PupLhs, PupMain) => "pup_main_to_pup_lhs.png",
        (PupMain, Condotel) | (Condotel, PupMain) => "pup_main_to_condotel.jpg",
        (Cea, Hasmin) | (Hasmin, Cea) => "cea_to_hasmin.jpg",
        (Cea, ITech) | (ITech, Cea) => "cea_to_itech.jpg",
        (Cea, Coc) | (Coc, Cea) => "cea_to_coc.jpg",
        (Cea, PupLhs) | (PupLhs, Cea) => "cea_to_pup_lhs.jpg",
        (Cea, Condotel) | (Condotel, Cea) => "cea_to_condotel.jpg",
        (Hasmin, ITech) | (ITech, Hasmin) => "hasmin_to_itech.jpg",
        (Hasmin, Coc) | (Coc, Hasmin) => "hasmin_to_coc.jpg",
        (Hasmin, PupLhs) | (PupLhs, Hasmin) => "hasmin_to_pup_lhs.jpg",
        (Hasmin, Condotel) | (Condotel, Hasmin) => "hasmin_to_condotel.jpg",
        (ITech, Coc) | (Coc, ITech) => "itech_to_coc.jpg",
        (ITech, PupLhs) | (PupLhs, ITech) => "itech_to_pup_lhs.jpg",
        (ITech, Condotel) | (Condotel, ITech) => "itech_to_condotel.jpg",
        (Coc, PupLhs) | (PupLhs, Coc) => "coc_to_pup_lhs.jpg",
        (Coc, Condotel) | (Condotel, Coc) => "coc_to_condotel.jpg",
        (PupLhs, Condotel) | (Condotel, PupLhs) => "pup_lhs_to_condotel.jpg",
        _ => DEFAULT_ROUTE_IMAGE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_symmetric() {
        for a in Location::ALL {
            for b in Location::ALL {
                assert_eq!(route_image(a, b), route_image(b, a));
            }
        }
    }

    #[test]
    fn same_place_uses_default_map() {
        assert_eq!(route_image(Location::Coc, Location::Coc), "default_map.png");
        assert_eq!(
            route_image(Location::PupLhs, Location::PupMain),
            "pup_main_to_pup_lhs.png"
        );
    }
}
