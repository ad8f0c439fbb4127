//! Cartographic projections between geographic and plane coordinates.
//!
//! All functions take and return degrees, normalize their inputs first, and
//! are total: every finite input produces a defined result. The one
//! deliberate exception is the polar projection's lobe centers, where the
//! azimuthal inverse degenerates to `0/0`; the resulting NaN is the "no
//! data here" signal consumers already handle per pixel.

use std::f64::consts::{FRAC_PI_2, PI};

use super::angles::{fold_latitude, normalize_lat, normalize_lon};

/// Scale factor for the two azimuthal lobes of [`Projection::Polar`].
///
/// Kept at exactly 1.3 for compatibility with existing maps; the slight
/// lobe overlap it produces is intentional.
pub const POLAR_LOBE_SCALE: f64 = 1.3;

/// The closed set of supported projections.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum Projection {
    /// Identity: plane coordinates are the normalized geographic ones.
    #[default]
    Rectangular,
    /// Kavrayskiy VII pseudo-cylindrical, for whole-globe views.
    KavrayskiyVii,
    /// Two azimuthal hemispheric lobes side by side: the southern lobe
    /// centered at plane longitude -90, the northern at +90.
    Polar,
}

impl Projection {
    pub const ALL: [Projection; 3] = [
        Projection::Rectangular,
        Projection::KavrayskiyVii,
        Projection::Polar,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Projection::Rectangular => "Rectangular",
            Projection::KavrayskiyVii => "KavrayskiyVII",
            Projection::Polar => "Polar",
        }
    }

    /// Forward-project the longitude of a geographic point.
    pub fn project_lon(self, lon: f64, lat: f64) -> f64 {
        let lon = normalize_lon(lon);
        let lat = normalize_lat(lat);
        match self {
            Projection::Rectangular => lon,
            Projection::KavrayskiyVii => {
                let lon = lon.to_radians();
                let lat = lat.to_radians();
                let x = (3.0 * lon / 2.0 / PI) * (PI * PI / 3.0 - lat * lat).sqrt();
                x.to_degrees()
            }
            Projection::Polar => {
                let lon_r = lon.to_radians();
                let lat_r = lat.to_radians();
                let x = if lat_r < 0.0 {
                    POLAR_LOBE_SCALE * lat_r.cos() * lon_r.sin() - FRAC_PI_2
                } else {
                    POLAR_LOBE_SCALE * lat_r.cos() * lon_r.sin() + FRAC_PI_2
                };
                x.to_degrees()
            }
        }
    }

    /// Forward-project the latitude of a geographic point.
    pub fn project_lat(self, lon: f64, lat: f64) -> f64 {
        let lon = normalize_lon(lon);
        let lat = normalize_lat(lat);
        match self {
            Projection::Rectangular | Projection::KavrayskiyVii => lat,
            Projection::Polar => {
                let lon_r = lon.to_radians();
                let lat_r = lat.to_radians();
                let y = if lat_r < 0.0 {
                    POLAR_LOBE_SCALE * lat_r.cos() * lon_r.cos()
                } else {
                    -POLAR_LOBE_SCALE * lat_r.cos() * lon_r.cos()
                };
                y.to_degrees()
            }
        }
    }

    /// Recover the geographic longitude from a plane point.
    pub fn unproject_lon(self, lon: f64, lat: f64) -> f64 {
        let (lon, lat) = fold_latitude(lon, lat);
        let lon = normalize_lon(lon);
        let lat = normalize_lat(lat);
        match self {
            Projection::Rectangular => lon,
            Projection::KavrayskiyVii => {
                let x = lon.to_radians();
                let lat = lat.to_radians();
                let lon = x / (PI * PI / 3.0 - lat * lat).sqrt() * 2.0 * PI / 3.0;
                lon.to_degrees()
            }
            Projection::Polar => {
                let (x, y, lat0) = polar_lobe(lon, lat);
                let rho = (x * x + y * y).sqrt();
                let c = rho.asin();
                let lon = (x * c.sin())
                    .atan2(rho * lat0.cos() * c.cos() - y * lat0.sin() * c.sin());
                let mut lon = (lon.to_degrees() + 180.0) % 360.0 - 180.0;
                if lon <= -180.0 {
                    lon = -180.0;
                }
                lon
            }
        }
    }

    /// Recover the geographic latitude from a plane point.
    pub fn unproject_lat(self, lon: f64, lat: f64) -> f64 {
        let (lon, lat) = fold_latitude(lon, lat);
        let lon = normalize_lon(lon);
        let lat = normalize_lat(lat);
        match self {
            Projection::Rectangular | Projection::KavrayskiyVii => lat,
            Projection::Polar => {
                let (x, y, lat0) = polar_lobe(lon, lat);
                let rho = (x * x + y * y).sqrt();
                let c = rho.asin();
                let lat = (c.cos() * lat0.sin() + (y * c.sin() * lat0.cos()) / rho).asin();
                lat.to_degrees()
            }
        }
    }
}

impl std::fmt::Display for Projection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Select the polar lobe for a plane point and shift it to the lobe center.
///
/// Returns `(x, y, lat0)` in radians, already divided by the lobe scale:
/// the azimuthal offsets from the lobe center and the lobe's pole latitude.
fn polar_lobe(lon_deg: f64, lat_deg: f64) -> (f64, f64, f64) {
    let mut x = lon_deg.to_radians();
    let y = lat_deg.to_radians();
    let lat0 = if x < 0.0 {
        x += FRAC_PI_2;
        -FRAC_PI_2
    } else {
        x -= FRAC_PI_2;
        FRAC_PI_2
    };
    (x / POLAR_LOBE_SCALE, y / POLAR_LOBE_SCALE, lat0)
}

#[cfg(test)]
mod tests {
    use super::Projection;

    fn assert_close(a: f64, b: f64, eps: f64) {
        let diff = (a - b).abs();
        assert!(diff <= eps, "expected {a} ~= {b} (diff {diff})");
    }

    fn round_trip(proj: Projection, lon: f64, lat: f64) -> (f64, f64) {
        let x = proj.project_lon(lon, lat);
        let y = proj.project_lat(lon, lat);
        (proj.unproject_lon(x, y), proj.unproject_lat(x, y))
    }

    #[test]
    fn rectangular_is_identity_after_normalization() {
        assert_eq!(Projection::Rectangular.project_lon(0.0, 0.0), 0.0);
        assert_eq!(Projection::Rectangular.project_lat(0.0, 0.0), 0.0);
        // 180 E normalizes onto the date line's western alias.
        assert_eq!(Projection::Rectangular.project_lon(180.0, 0.0), -180.0);
        assert_eq!(Projection::Rectangular.project_lat(180.0, 0.0), 0.0);
    }

    #[test]
    fn rectangular_round_trips_exactly() {
        for &(lon, lat) in &[(0.0, 0.0), (-179.9, 89.0), (45.0, -45.0), (720.5, -300.0)] {
            let (rlon, rlat) = round_trip(Projection::Rectangular, lon, lat);
            assert_close(rlon, Projection::Rectangular.project_lon(lon, lat), 1e-12);
            assert_close(rlat, Projection::Rectangular.project_lat(lon, lat), 1e-12);
        }
    }

    #[test]
    fn kavrayskiy_compresses_longitude_toward_poles() {
        let proj = Projection::KavrayskiyVii;
        let at_equator = proj.project_lon(120.0, 0.0);
        let at_60 = proj.project_lon(120.0, 60.0);
        assert!(at_60.abs() < at_equator.abs());
        // Latitude passes through unchanged.
        assert_eq!(proj.project_lat(120.0, 60.0), 60.0);
    }

    #[test]
    fn kavrayskiy_round_trips_away_from_poles() {
        let proj = Projection::KavrayskiyVii;
        for lon in [-170.0, -60.0, 0.0, 45.0, 179.0] {
            for lat in [-84.0, -45.0, 0.0, 30.0, 84.0] {
                let (rlon, rlat) = round_trip(proj, lon, lat);
                assert_close(rlon, lon, 1e-3);
                assert_close(rlat, lat, 1e-3);
            }
        }
    }

    #[test]
    fn polar_hemispheres_map_to_separate_lobes() {
        let proj = Projection::Polar;
        // Northern points land near +90 on the plane, southern near -90.
        assert!(proj.project_lon(0.0, 45.0) > 0.0);
        assert!(proj.project_lon(0.0, -45.0) < 0.0);
    }

    #[test]
    fn polar_round_trips_at_mid_latitudes() {
        let proj = Projection::Polar;
        for lon in [-150.0, -30.0, 10.0, 120.0] {
            for lat in [-70.0, -30.0, 25.0, 80.0] {
                let (rlon, rlat) = round_trip(proj, lon, lat);
                assert_close(rlon, lon, 1e-6);
                assert_close(rlat, lat, 1e-6);
            }
        }
    }

    #[test]
    fn polar_lobe_center_degenerates_to_nan_not_panic() {
        // The exact lobe center has rho == 0; the inverse is undefined there
        // and reports NaN, which renderers treat as "no data".
        let proj = Projection::Polar;
        let lat = proj.unproject_lat(90.0, 0.0);
        assert!(lat.is_nan());
    }

    #[test]
    fn polar_outside_lobe_is_nan() {
        // Plane points farther than one lobe radius from either center are
        // not on the globe.
        let proj = Projection::Polar;
        let lat = proj.unproject_lat(179.0, 80.0);
        assert!(lat.is_nan());
    }

    #[test]
    fn names_are_stable() {
        assert_eq!(Projection::KavrayskiyVii.name(), "KavrayskiyVII");
        assert_eq!(Projection::default(), Projection::Rectangular);
    }
}
