//! Embedded Zimbabwe dataset: city registry and curated road matrix.
//!
//! Coordinates are signed decimal degrees (south and west negative).  Road
//! figures are curated trunk-road distances along the A1/A3/A4/A5 and the
//! southern corridors; cross-corridor pairs are summed over the shortest
//! trunk path.  These are the values travellers see on signage and in
//! printed distance tables, not geodesic output.
//!
//! The registry is wider than the road matrix: the final block of cities
//! carries no curated entries and always resolves through the geodesic
//! path.

use crate::city::{CityAtlas, CityAtlasBuilder};
use crate::error::AtlasResult;
use crate::roads::{RoadDistanceTable, RoadTableBuilder};

/// `(name, latitude, longitude)` for every registered city.
///
/// The first twenty are the major cities covered by the road matrix; the
/// rest are geodesic-only.
pub const CITIES: &[(&str, f64, f64)] = &[
    ("Harare", -17.8292, 31.0522),
    ("Bulawayo", -20.1594, 28.5906),
    ("Chitungwiza", -18.0127, 31.0756),
    ("Mutare", -18.9707, 32.6709),
    ("Gweru", -19.4500, 29.8167),
    ("Kwekwe", -18.9281, 29.8149),
    ("Kadoma", -18.3400, 29.9152),
    ("Masvingo", -20.0637, 30.8277),
    ("Chinhoyi", -17.3667, 30.2000),
    ("Norton", -17.8833, 30.7000),
    ("Marondera", -18.1853, 31.5519),
    ("Bindura", -17.3019, 31.3306),
    ("Chegutu", -18.1300, 30.1400),
    ("Rusape", -18.5367, 32.1247),
    ("Kariba", -16.5167, 28.8000),
    ("Karoi", -16.8099, 29.6927),
    ("Victoria Falls", -17.9316, 25.8303),
    ("Hwange", -18.3645, 26.4981),
    ("Beitbridge", -22.2167, 30.0000),
    ("Zvishavane", -20.3333, 30.0333),
    // Geodesic-only from here down.
    ("Gokwe", -18.2048, 28.9349),
    ("Shurugwi", -19.6703, 30.0056),
    ("Redcliff", -19.0333, 29.7833),
    ("Plumtree", -20.4800, 27.8200),
    ("Gwanda", -20.9389, 29.0186),
    ("Chipinge", -20.1883, 32.6236),
    ("Chiredzi", -21.0500, 31.6667),
    ("Nyanga", -18.2167, 32.7500),
    ("Mvurwi", -17.0333, 30.8500),
    ("Shamva", -17.3119, 31.5658),
];

/// Curated road distances in kilometres, one row per unordered pair of
/// major cities.  Inserted in both directions, so the embedded table
/// audits clean.
pub const ROAD_PAIRS_KM: &[(&str, &str, f64)] = &[
    // Harare
    ("Harare", "Bulawayo", 439.0),
    ("Harare", "Chitungwiza", 27.0),
    ("Harare", "Mutare", 263.0),
    ("Harare", "Gweru", 275.0),
    ("Harare", "Kwekwe", 213.0),
    ("Harare", "Kadoma", 141.0),
    ("Harare", "Masvingo", 292.0),
    ("Harare", "Chinhoyi", 116.0),
    ("Harare", "Norton", 40.0),
    ("Harare", "Marondera", 72.0),
    ("Harare", "Bindura", 88.0),
    ("Harare", "Chegutu", 107.0),
    ("Harare", "Rusape", 170.0),
    ("Harare", "Kariba", 365.0),
    ("Harare", "Karoi", 204.0),
    ("Harare", "Victoria Falls", 877.0),
    ("Harare", "Hwange", 772.0),
    ("Harare", "Beitbridge", 580.0),
    ("Harare", "Zvishavane", 390.0),
    // Bulawayo
    ("Bulawayo", "Chitungwiza", 466.0),
    ("Bulawayo", "Mutare", 702.0),
    ("Bulawayo", "Gweru", 164.0),
    ("Bulawayo", "Kwekwe", 226.0),
    ("Bulawayo", "Kadoma", 298.0),
    ("Bulawayo", "Masvingo", 280.0),
    ("Bulawayo", "Chinhoyi", 555.0),
    ("Bulawayo", "Norton", 399.0),
    ("Bulawayo", "Marondera", 511.0),
    ("Bulawayo", "Bindura", 527.0),
    ("Bulawayo", "Chegutu", 332.0),
    ("Bulawayo", "Rusape", 609.0),
    ("Bulawayo", "Kariba", 804.0),
    ("Bulawayo", "Karoi", 643.0),
    ("Bulawayo", "Victoria Falls", 438.0),
    ("Bulawayo", "Hwange", 333.0),
    ("Bulawayo", "Beitbridge", 323.0),
    ("Bulawayo", "Zvishavane", 179.0),
    // Chitungwiza
    ("Chitungwiza", "Mutare", 290.0),
    ("Chitungwiza", "Gweru", 302.0),
    ("Chitungwiza", "Kwekwe", 240.0),
    ("Chitungwiza", "Kadoma", 168.0),
    ("Chitungwiza", "Masvingo", 319.0),
    ("Chitungwiza", "Chinhoyi", 143.0),
    ("Chitungwiza", "Norton", 67.0),
    ("Chitungwiza", "Marondera", 99.0),
    ("Chitungwiza", "Bindura", 115.0),
    ("Chitungwiza", "Chegutu", 134.0),
    ("Chitungwiza", "Rusape", 197.0),
    ("Chitungwiza", "Kariba", 392.0),
    ("Chitungwiza", "Karoi", 231.0),
    ("Chitungwiza", "Victoria Falls", 904.0),
    ("Chitungwiza", "Hwange", 799.0),
    ("Chitungwiza", "Beitbridge", 607.0),
    ("Chitungwiza", "Zvishavane", 417.0),
    // Mutare
    ("Mutare", "Gweru", 538.0),
    ("Mutare", "Kwekwe", 476.0),
    ("Mutare", "Kadoma", 404.0),
    ("Mutare", "Masvingo", 555.0),
    ("Mutare", "Chinhoyi", 379.0),
    ("Mutare", "Norton", 303.0),
    ("Mutare", "Marondera", 191.0),
    ("Mutare", "Bindura", 351.0),
    ("Mutare", "Chegutu", 370.0),
    ("Mutare", "Rusape", 93.0),
    ("Mutare", "Kariba", 628.0),
    ("Mutare", "Karoi", 467.0),
    ("Mutare", "Victoria Falls", 1140.0),
    ("Mutare", "Hwange", 1035.0),
    ("Mutare", "Beitbridge", 843.0),
    ("Mutare", "Zvishavane", 653.0),
    // Gweru
    ("Gweru", "Kwekwe", 62.0),
    ("Gweru", "Kadoma", 134.0),
    ("Gweru", "Masvingo", 214.0),
    ("Gweru", "Chinhoyi", 391.0),
    ("Gweru", "Norton", 235.0),
    ("Gweru", "Marondera", 347.0),
    ("Gweru", "Bindura", 363.0),
    ("Gweru", "Chegutu", 168.0),
    ("Gweru", "Rusape", 445.0),
    ("Gweru", "Kariba", 640.0),
    ("Gweru", "Karoi", 479.0),
    ("Gweru", "Victoria Falls", 602.0),
    ("Gweru", "Hwange", 497.0),
    ("Gweru", "Beitbridge", 487.0),
    ("Gweru", "Zvishavane", 116.0),
    // Kwekwe
    ("Kwekwe", "Kadoma", 72.0),
    ("Kwekwe", "Masvingo", 276.0),
    ("Kwekwe", "Chinhoyi", 329.0),
    ("Kwekwe", "Norton", 173.0),
    ("Kwekwe", "Marondera", 285.0),
    ("Kwekwe", "Bindura", 301.0),
    ("Kwekwe", "Chegutu", 106.0),
    ("Kwekwe", "Rusape", 383.0),
    ("Kwekwe", "Kariba", 578.0),
    ("Kwekwe", "Karoi", 417.0),
    ("Kwekwe", "Victoria Falls", 664.0),
    ("Kwekwe", "Hwange", 559.0),
    ("Kwekwe", "Beitbridge", 549.0),
    ("Kwekwe", "Zvishavane", 178.0),
    // Kadoma
    ("Kadoma", "Masvingo", 348.0),
    ("Kadoma", "Chinhoyi", 257.0),
    ("Kadoma", "Norton", 101.0),
    ("Kadoma", "Marondera", 213.0),
    ("Kadoma", "Bindura", 229.0),
    ("Kadoma", "Chegutu", 34.0),
    ("Kadoma", "Rusape", 311.0),
    ("Kadoma", "Kariba", 506.0),
    ("Kadoma", "Karoi", 345.0),
    ("Kadoma", "Victoria Falls", 736.0),
    ("Kadoma", "Hwange", 631.0),
    ("Kadoma", "Beitbridge", 621.0),
    ("Kadoma", "Zvishavane", 250.0),
    // Masvingo
    ("Masvingo", "Chinhoyi", 408.0),
    ("Masvingo", "Norton", 332.0),
    ("Masvingo", "Marondera", 364.0),
    ("Masvingo", "Bindura", 380.0),
    ("Masvingo", "Chegutu", 382.0),
    ("Masvingo", "Rusape", 462.0),
    ("Masvingo", "Kariba", 657.0),
    ("Masvingo", "Karoi", 496.0),
    ("Masvingo", "Victoria Falls", 718.0),
    ("Masvingo", "Hwange", 613.0),
    ("Masvingo", "Beitbridge", 288.0),
    ("Masvingo", "Zvishavane", 98.0),
    // Chinhoyi
    ("Chinhoyi", "Norton", 156.0),
    ("Chinhoyi", "Marondera", 188.0),
    ("Chinhoyi", "Bindura", 204.0),
    ("Chinhoyi", "Chegutu", 223.0),
    ("Chinhoyi", "Rusape", 286.0),
    ("Chinhoyi", "Kariba", 249.0),
    ("Chinhoyi", "Karoi", 88.0),
    ("Chinhoyi", "Victoria Falls", 993.0),
    ("Chinhoyi", "Hwange", 888.0),
    ("Chinhoyi", "Beitbridge", 696.0),
    ("Chinhoyi", "Zvishavane", 506.0),
    // Norton
    ("Norton", "Marondera", 112.0),
    ("Norton", "Bindura", 128.0),
    ("Norton", "Chegutu", 67.0),
    ("Norton", "Rusape", 210.0),
    ("Norton", "Kariba", 405.0),
    ("Norton", "Karoi", 244.0),
    ("Norton", "Victoria Falls", 837.0),
    ("Norton", "Hwange", 732.0),
    ("Norton", "Beitbridge", 620.0),
    ("Norton", "Zvishavane", 351.0),
    // Marondera
    ("Marondera", "Bindura", 160.0),
    ("Marondera", "Chegutu", 179.0),
    ("Marondera", "Rusape", 98.0),
    ("Marondera", "Kariba", 437.0),
    ("Marondera", "Karoi", 276.0),
    ("Marondera", "Victoria Falls", 949.0),
    ("Marondera", "Hwange", 844.0),
    ("Marondera", "Beitbridge", 652.0),
    ("Marondera", "Zvishavane", 462.0),
    // Bindura
    ("Bindura", "Chegutu", 195.0),
    ("Bindura", "Rusape", 258.0),
    ("Bindura", "Kariba", 453.0),
    ("Bindura", "Karoi", 292.0),
    ("Bindura", "Victoria Falls", 965.0),
    ("Bindura", "Hwange", 860.0),
    ("Bindura", "Beitbridge", 668.0),
    ("Bindura", "Zvishavane", 478.0),
    // Chegutu
    ("Chegutu", "Rusape", 277.0),
    ("Chegutu", "Kariba", 472.0),
    ("Chegutu", "Karoi", 311.0),
    ("Chegutu", "Victoria Falls", 770.0),
    ("Chegutu", "Hwange", 665.0),
    ("Chegutu", "Beitbridge", 655.0),
    ("Chegutu", "Zvishavane", 284.0),
    // Rusape
    ("Rusape", "Kariba", 535.0),
    ("Rusape", "Karoi", 374.0),
    ("Rusape", "Victoria Falls", 1047.0),
    ("Rusape", "Hwange", 942.0),
    ("Rusape", "Beitbridge", 750.0),
    ("Rusape", "Zvishavane", 560.0),
    // Kariba
    ("Kariba", "Karoi", 161.0),
    ("Kariba", "Victoria Falls", 1242.0),
    ("Kariba", "Hwange", 1137.0),
    ("Kariba", "Beitbridge", 945.0),
    ("Kariba", "Zvishavane", 755.0),
    // Karoi
    ("Karoi", "Victoria Falls", 1081.0),
    ("Karoi", "Hwange", 976.0),
    ("Karoi", "Beitbridge", 784.0),
    ("Karoi", "Zvishavane", 594.0),
    // Victoria Falls
    ("Victoria Falls", "Hwange", 105.0),
    ("Victoria Falls", "Beitbridge", 761.0),
    ("Victoria Falls", "Zvishavane", 617.0),
    // Hwange
    ("Hwange", "Beitbridge", 656.0),
    ("Hwange", "Zvishavane", 512.0),
    // Beitbridge
    ("Beitbridge", "Zvishavane", 386.0),
];

/// Build the embedded registry and road table.
///
/// Data is immutable after construction; build once at startup and pass
/// references down.  The error path exists because construction goes
/// through the same validating builders as user-supplied data; for the
/// constants above it is exercised only if the tables themselves are
/// edited into an inconsistent state, which the crate's tests catch.
pub fn zimbabwe() -> AtlasResult<(CityAtlas, RoadDistanceTable)> {
    let mut cities = CityAtlasBuilder::with_capacity(CITIES.len());
    for &(name, lat, lon) in CITIES {
        cities.add_city(name, lat, lon)?;
    }
    let atlas = cities.build();

    let mut roads = RoadTableBuilder::new(&atlas);
    for &(a, b, km) in ROAD_PAIRS_KM {
        roads.insert_pair(a, b, km)?;
    }
    let table = roads.build();

    Ok((atlas, table))
}
