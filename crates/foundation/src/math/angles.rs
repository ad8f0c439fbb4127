//! Angle normalization for geographic coordinates, in degrees.
//!
//! Callers accumulate offsets freely, so every entry point here must accept
//! arbitrarily large or negative inputs. Normalization uses `rem_euclid`,
//! which keeps the result independent of how many full turns the input has
//! drifted.

/// Reduce a longitude to `[-180, 180)`.
pub fn normalize_lon(lon: f64) -> f64 {
    (lon + 180.0).rem_euclid(360.0) - 180.0
}

/// Reduce a latitude to `[-90, 90)`.
pub fn normalize_lat(lat: f64) -> f64 {
    (lat + 90.0).rem_euclid(180.0) - 90.0
}

/// Fold a latitude outside `[-90, 90]` back into range by reflecting it
/// through the pole it crossed. Crossing a pole lands on the opposite
/// meridian, so the longitude shifts by 180.
///
/// Applied once before normalization when inverting a projection; inputs
/// further out of range are handled by the subsequent normalization.
pub fn fold_latitude(lon: f64, lat: f64) -> (f64, f64) {
    if lat > 90.0 {
        (lon + 180.0, 180.0 - lat)
    } else if lat < -90.0 {
        (lon + 180.0, -180.0 - lat)
    } else {
        (lon, lat)
    }
}

#[cfg(test)]
mod tests {
    use super::{fold_latitude, normalize_lat, normalize_lon};

    fn assert_close(a: f64, b: f64, eps: f64) {
        let diff = (a - b).abs();
        assert!(diff <= eps, "expected {a} ~= {b} (diff {diff})");
    }

    #[test]
    fn longitude_range_is_half_open() {
        assert_eq!(normalize_lon(180.0), -180.0);
        assert_eq!(normalize_lon(-180.0), -180.0);
        assert_eq!(normalize_lon(0.0), 0.0);
        assert_close(normalize_lon(179.5), 179.5, 1e-12);
    }

    #[test]
    fn latitude_range_is_half_open() {
        assert_eq!(normalize_lat(90.0), -90.0);
        assert_eq!(normalize_lat(-90.0), -90.0);
        assert_close(normalize_lat(45.0), 45.0, 1e-12);
    }

    #[test]
    fn normalization_is_idempotent() {
        for x in [-1234.5, -360.0, -180.0, -0.25, 0.0, 33.3, 180.0, 719.9, 99999.0] {
            let once = normalize_lon(x);
            assert_eq!(normalize_lon(once), once);
            let once = normalize_lat(x);
            assert_eq!(normalize_lat(once), once);
        }
    }

    #[test]
    fn full_turn_shifts_collapse() {
        for turns in [-3.0, -1.0, 1.0, 2.0, 10.0] {
            assert_close(normalize_lon(42.0 + 360.0 * turns), 42.0, 1e-9);
        }
    }

    #[test]
    fn huge_inputs_stay_in_range() {
        for x in [1.0e9, -1.0e9, 3781.0, -3781.0] {
            let lon = normalize_lon(x);
            assert!((-180.0..180.0).contains(&lon), "lon {x} -> {lon}");
            let lat = normalize_lat(x);
            assert!((-90.0..90.0).contains(&lat), "lat {x} -> {lat}");
        }
    }

    #[test]
    fn latitude_folds_through_the_pole() {
        let (lon, lat) = fold_latitude(10.0, 100.0);
        assert_eq!((lon, lat), (190.0, 80.0));
        let (lon, lat) = fold_latitude(10.0, -100.0);
        assert_eq!((lon, lat), (190.0, -80.0));
        let (lon, lat) = fold_latitude(10.0, 45.0);
        assert_eq!((lon, lat), (10.0, 45.0));
    }
}
