use foundation::BodyId;
use survey::{CoverageKinds, GridSurvey};

pub const DEMO_BODY: BodyId = BodyId::new(1);
pub const DEMO_BODY_NAME: &str = "Demo";

/// A deterministic procedural survey covering most of the globe, with a
/// low-resolution southern band and an unsurveyed hole so every degraded
/// render path is visible in the output.
pub fn demo_survey() -> GridSurvey {
    let mut s = GridSurvey::new(DEMO_BODY, 6);

    for lon in -180..180 {
        for lat in -90..90 {
            let (lon, lat) = (f64::from(lon), f64::from(lat));
            s.set_height(lon, lat, demo_elevation(lon, lat));
            s.set_biome(lon, lat, demo_biome(lon, lat));
        }
    }

    // High-resolution altimetry and biome data north of 30 S.
    s.mark_covered_region(
        -180.0,
        179.5,
        -30.0,
        89.5,
        CoverageKinds::ALTIMETRY_HIRES | CoverageKinds::BIOME,
    );
    // The southern band was only swept at low resolution.
    s.mark_covered_region(
        -180.0,
        179.5,
        -90.0,
        -31.0,
        CoverageKinds::ALTIMETRY_LORES | CoverageKinds::BIOME,
    );
    // An unsurveyed hole in the north-east.
    strip_region(&mut s, 120.0, 150.0, 10.0, 40.0);

    s.mark_covered(42.0, -17.0, CoverageKinds::ANOMALY | CoverageKinds::ANOMALY_DETAIL);
    s.mark_covered(-63.0, 44.0, CoverageKinds::ANOMALY);

    s
}

fn demo_elevation(lon: f64, lat: f64) -> f64 {
    let lon_r = lon.to_radians();
    let lat_r = lat.to_radians();
    2400.0 * (2.0 * lon_r).sin() * (3.0 * lat_r).cos() + 1800.0 * (5.0 * lat_r).sin() - 300.0
}

fn demo_biome(lon: f64, lat: f64) -> u16 {
    let band = ((lat + 90.0) / 30.0).floor() as i64;
    let sector = ((lon + 180.0) / 60.0).floor() as i64;
    ((band + sector).rem_euclid(6)) as u16
}

fn strip_region(s: &mut GridSurvey, lon_min: f64, lon_max: f64, lat_min: f64, lat_max: f64) {
    let mut lon = lon_min;
    while lon <= lon_max {
        let mut lat = lat_min;
        while lat <= lat_max {
            s.clear_covered(lon, lat);
            lat += 1.0;
        }
        lon += 1.0;
    }
}

#[cfg(test)]
mod tests {
    use survey::{CoverageKinds, SurveySource};

    use super::demo_survey;

    #[test]
    fn demo_survey_is_deterministic() {
        assert_eq!(demo_survey(), demo_survey());
    }

    #[test]
    fn demo_survey_has_all_degraded_paths() {
        let s = demo_survey();
        // Hi-res in the north.
        assert!(s.is_covered(0.0, 30.0, CoverageKinds::ALTIMETRY_HIRES));
        // Lo-res only band in the far south.
        assert!(s.is_covered(0.0, -80.0, CoverageKinds::ALTIMETRY_LORES));
        assert!(!s.is_covered(0.0, -80.0, CoverageKinds::ALTIMETRY_HIRES));
        // The hole is dark.
        assert!(!s.is_covered(135.0, 25.0, CoverageKinds::EVERYTHING));
        // Biome fractions stay in range.
        let f = s.biome_index_fraction(10.0, 10.0);
        assert!((0.0..1.0).contains(&f));
    }
}
