//! Unit tests for the atlas crate.

use crate::city::{CityAtlas, CityAtlasBuilder};

fn tiny_atlas() -> CityAtlas {
    let mut b = CityAtlasBuilder::new();
    b.add_city("Alpha", 0.0, 0.0).unwrap();
    b.add_city("Beta", 0.0, 1.0).unwrap();
    b.add_city("Gamma", 1.0, 1.0).unwrap();
    b.build()
}

#[cfg(test)]
mod geo {
    use crate::geo::{Coord, haversine_km};

    #[test]
    fn zero_distance_is_exact() {
        let p = Coord::new(-17.8292, 31.0522);
        assert_eq!(p.distance_km(p), 0.0);
    }

    #[test]
    fn one_degree_of_latitude() {
        // ~1 degree of latitude ≈ 111.19 km
        let a = Coord::new(-18.0, 30.0);
        let b = Coord::new(-19.0, 30.0);
        let d = a.distance_km(b);
        assert!((d - 111.195).abs() < 0.5, "got {d}");
    }

    #[test]
    fn harare_bulawayo_great_circle() {
        // Straight-line distance; the curated road figure is 439 km, the
        // great circle is considerably shorter.
        let d = haversine_km(-17.8292, 31.0522, -20.1594, 28.5906);
        assert!((d - 366.0).abs() < 5.0, "got {d}");
    }

    #[test]
    fn symmetric_by_construction() {
        let a = Coord::new(-17.8292, 31.0522);
        let b = Coord::new(-20.1594, 28.5906);
        assert_eq!(a.distance_km(b), b.distance_km(a));
    }

    #[test]
    fn free_function_matches_method() {
        let a = Coord::new(-18.9707, 32.6709);
        let b = Coord::new(-19.4500, 29.8167);
        assert_eq!(haversine_km(a.lat, a.lon, b.lat, b.lon), a.distance_km(b));
    }
}

#[cfg(test)]
mod atlas {
    use super::tiny_atlas;
    use crate::city::CityAtlasBuilder;
    use crate::dataset;
    use crate::error::AtlasError;
    use crate::geo::Coord;

    #[test]
    fn find_is_exact_and_case_sensitive() {
        let atlas = tiny_atlas();
        assert_eq!(atlas.find("Alpha").unwrap().name, "Alpha");
        assert!(atlas.find("alpha").is_none());
        assert!(atlas.find("Alph").is_none());
        assert!(atlas.find("").is_none());
    }

    #[test]
    fn iteration_preserves_insertion_order() {
        let atlas = tiny_atlas();
        let names: Vec<&str> = atlas.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["Alpha", "Beta", "Gamma"]);

        // Re-iterable without side effects.
        let again: Vec<&str> = atlas.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, again);
    }

    #[test]
    fn duplicate_name_is_rejected() {
        let mut b = CityAtlasBuilder::new();
        b.add_city("Alpha", 0.0, 0.0).unwrap();
        let err = b.add_city("Alpha", 5.0, 5.0).unwrap_err();
        assert!(matches!(err, AtlasError::DuplicateCity(name) if name == "Alpha"));
    }

    #[test]
    fn nearest_city() {
        let (atlas, _) = dataset::zimbabwe().unwrap();
        let near_harare = Coord::new(-17.83, 31.05);
        assert_eq!(atlas.nearest(near_harare).unwrap().name, "Harare");

        let two = atlas.k_nearest(near_harare, 2);
        assert_eq!(two.len(), 2);
        assert_eq!(two[0].name, "Harare");
        assert_eq!(two[1].name, "Chitungwiza");
    }

    #[test]
    fn nearest_on_empty_atlas() {
        let atlas = CityAtlasBuilder::new().build();
        assert!(atlas.nearest(Coord::new(0.0, 0.0)).is_none());
        assert!(atlas.k_nearest(Coord::new(0.0, 0.0), 3).is_empty());
    }
}

#[cfg(test)]
mod roads {
    use super::tiny_atlas;
    use crate::error::AtlasError;
    use crate::roads::RoadTableBuilder;

    #[test]
    fn ordered_lookup_and_reverse() {
        let atlas = tiny_atlas();
        let mut b = RoadTableBuilder::new(&atlas);
        b.insert_pair("Alpha", "Beta", 100.0).unwrap();
        let table = b.build();

        assert_eq!(table.get("Alpha", "Beta"), Some(100.0));
        assert_eq!(table.get("Beta", "Alpha"), Some(100.0));
        assert_eq!(table.get("Alpha", "Gamma"), None);
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn unknown_endpoint_is_rejected() {
        let atlas = tiny_atlas();
        let mut b = RoadTableBuilder::new(&atlas);
        let err = b.insert("Alpha", "Delta", 50.0).unwrap_err();
        assert!(matches!(err, AtlasError::UnknownCity(name) if name == "Delta"));
    }

    #[test]
    fn invalid_distance_is_rejected() {
        let atlas = tiny_atlas();
        let mut b = RoadTableBuilder::new(&atlas);
        assert!(b.insert("Alpha", "Beta", -1.0).is_err());
        assert!(b.insert("Alpha", "Beta", f64::NAN).is_err());
        assert!(b.insert("Alpha", "Beta", f64::INFINITY).is_err());
    }

    #[test]
    fn later_insert_overwrites() {
        let atlas = tiny_atlas();
        let mut b = RoadTableBuilder::new(&atlas);
        b.insert("Alpha", "Beta", 100.0).unwrap();
        b.insert("Alpha", "Beta", 120.0).unwrap();
        let table = b.build();
        assert_eq!(table.get("Alpha", "Beta"), Some(120.0));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn audit_reports_mismatch_and_one_way() {
        let atlas = tiny_atlas();
        let mut b = RoadTableBuilder::new(&atlas);
        b.insert("Alpha", "Beta", 100.0).unwrap();
        b.insert("Beta", "Alpha", 120.0).unwrap(); // disagreeing reverse
        b.insert("Alpha", "Gamma", 50.0).unwrap(); // no reverse at all
        let table = b.build();

        let report = table.audit_symmetry();
        assert!(!report.is_clean());

        assert_eq!(report.mismatches.len(), 1);
        let m = &report.mismatches[0];
        assert_eq!((m.from.as_str(), m.to.as_str()), ("Alpha", "Beta"));
        assert_eq!(m.forward_km, 100.0);
        assert_eq!(m.reverse_km, 120.0);

        assert_eq!(report.one_way, [("Alpha".to_owned(), "Gamma".to_owned())]);
    }

    #[test]
    fn audit_tolerates_sub_tolerance_noise() {
        let atlas = tiny_atlas();
        let mut b = RoadTableBuilder::new(&atlas);
        b.insert("Alpha", "Beta", 100.0).unwrap();
        b.insert("Beta", "Alpha", 100.4).unwrap();
        let table = b.build();
        assert!(table.audit_symmetry().is_clean());
    }
}

#[cfg(test)]
mod dataset {
    use crate::dataset::{self, CITIES, ROAD_PAIRS_KM};

    #[test]
    fn builds_clean() {
        let (atlas, roads) = dataset::zimbabwe().unwrap();
        assert_eq!(atlas.len(), CITIES.len());
        assert_eq!(roads.len(), ROAD_PAIRS_KM.len() * 2);
        assert!(roads.audit_symmetry().is_clean());
    }

    #[test]
    fn curated_anchor_values() {
        let (_, roads) = dataset::zimbabwe().unwrap();
        assert_eq!(roads.get("Harare", "Bulawayo"), Some(439.0));
        assert_eq!(roads.get("Bulawayo", "Harare"), Some(439.0));
        assert_eq!(roads.get("Harare", "Bindura"), Some(88.0));
    }

    #[test]
    fn minor_cities_have_no_road_entries() {
        let (atlas, roads) = dataset::zimbabwe().unwrap();
        assert!(atlas.contains("Gokwe"));
        assert_eq!(roads.get("Harare", "Gokwe"), None);
        assert_eq!(roads.get("Gokwe", "Shurugwi"), None);
    }

    #[test]
    fn road_figures_at_least_great_circle() {
        // A road can never be shorter than the straight line between its
        // endpoints; catches transposed digits in the curated matrix.
        let (atlas, roads) = dataset::zimbabwe().unwrap();
        for &(a, b, km) in ROAD_PAIRS_KM {
            let ca = atlas.find(a).unwrap().coord;
            let cb = atlas.find(b).unwrap().coord;
            let straight = ca.distance_km(cb);
            assert!(
                km >= straight - 1.0,
                "{a} -> {b}: curated {km} km below great circle {straight:.1} km"
            );
            assert_eq!(roads.get(a, b), Some(km));
        }
    }

    #[test]
    fn geodesic_triangle_inequality_over_registry() {
        let (atlas, _) = dataset::zimbabwe().unwrap();
        let cities: Vec<_> = atlas.iter().collect();
        for a in &cities {
            for b in &cities {
                for c in &cities {
                    let direct = a.coord.distance_km(c.coord);
                    let via = a.coord.distance_km(b.coord) + b.coord.distance_km(c.coord);
                    assert!(
                        direct <= via + 1e-6,
                        "{} -> {} via {} violates triangle inequality",
                        a.name,
                        c.name,
                        b.name
                    );
                }
            }
        }
    }
}

#[cfg(test)]
mod loader {
    use std::io::Cursor;

    use crate::dataset;
    use crate::error::AtlasError;
    use crate::loader::{load_cities_reader, load_roads_reader};

    const CITIES_CSV: &str = "\
name,latitude,longitude
Harare,-17.8292,31.0522
Bulawayo,-20.1594,28.5906
Victoria Falls,-17.9316,25.8303
";

    #[test]
    fn cities_from_csv() {
        let atlas = load_cities_reader(Cursor::new(CITIES_CSV)).unwrap();
        assert_eq!(atlas.len(), 3);

        let vf = atlas.find("Victoria Falls").unwrap();
        assert_eq!(vf.coord.lat, -17.9316);
        assert_eq!(vf.coord.lon, 25.8303);
    }

    #[test]
    fn roads_from_csv() {
        let atlas = load_cities_reader(Cursor::new(CITIES_CSV)).unwrap();
        const ROADS_CSV: &str = "\
from,to,distance_km
Harare,Bulawayo,439
Bulawayo,Harare,439
Bulawayo,Victoria Falls,438
";
        let roads = load_roads_reader(Cursor::new(ROADS_CSV), &atlas).unwrap();
        assert_eq!(roads.get("Harare", "Bulawayo"), Some(439.0));
        assert_eq!(roads.get("Bulawayo", "Victoria Falls"), Some(438.0));
        // Directed: the file never declared the reverse of this row.
        assert_eq!(roads.get("Victoria Falls", "Bulawayo"), None);

        let report = roads.audit_symmetry();
        assert_eq!(
            report.one_way,
            [("Bulawayo".to_owned(), "Victoria Falls".to_owned())]
        );
    }

    #[test]
    fn malformed_row_is_a_parse_error() {
        let csv = "name,latitude,longitude\nHarare,not-a-number,31.0522\n";
        let err = load_cities_reader(Cursor::new(csv)).unwrap_err();
        assert!(matches!(err, AtlasError::Parse(_)));
    }

    #[test]
    fn duplicate_city_row_is_rejected() {
        let csv = "name,latitude,longitude\nHarare,-17.8,31.0\nHarare,-17.8,31.0\n";
        let err = load_cities_reader(Cursor::new(csv)).unwrap_err();
        assert!(matches!(err, AtlasError::DuplicateCity(_)));
    }

    #[test]
    fn road_row_with_unregistered_city_fails() {
        let (atlas, _) = dataset::zimbabwe().unwrap();
        let csv = "from,to,distance_km\nHarare,Atlantis,120\n";
        let err = load_roads_reader(Cursor::new(csv), &atlas).unwrap_err();
        assert!(matches!(err, AtlasError::UnknownCity(name) if name == "Atlantis"));
    }
}
