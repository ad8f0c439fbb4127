use foundation::BodyId;
use foundation::math::{normalize_lat, normalize_lon};

use crate::kinds::CoverageKinds;
use crate::source::SurveySource;

pub const GRID_WIDTH: usize = 360;
pub const GRID_HEIGHT: usize = 180;

/// In-memory survey data on a one-degree grid.
///
/// Coverage and biome identity are per-cell; elevation samples sit at cell
/// origins and queries interpolate bilinearly, wrapping across the date
/// line and clamping at the poles. Useful as the tool/test stand-in for a
/// live data provider.
#[derive(Debug, Clone, PartialEq)]
pub struct GridSurvey {
    body: BodyId,
    pub has_surface_model: bool,
    pub has_biome_map: bool,
    biome_count: u32,
    coverage: Vec<CoverageKinds>,
    heights: Vec<f64>,
    biomes: Vec<u16>,
}

impl GridSurvey {
    pub fn new(body: BodyId, biome_count: u32) -> Self {
        Self {
            body,
            has_surface_model: true,
            has_biome_map: true,
            biome_count,
            coverage: vec![CoverageKinds::NOTHING; GRID_WIDTH * GRID_HEIGHT],
            heights: vec![0.0; GRID_WIDTH * GRID_HEIGHT],
            biomes: vec![0; GRID_WIDTH * GRID_HEIGHT],
        }
    }

    pub fn body_id(&self) -> BodyId {
        self.body
    }

    pub fn biome_count(&self) -> u32 {
        self.biome_count
    }

    /// Cell coordinates for a geographic point, after normalization.
    fn cell(lon: f64, lat: f64) -> (usize, usize) {
        let x = (normalize_lon(lon) + 180.0).floor() as usize;
        let y = (normalize_lat(lat) + 90.0).floor() as usize;
        (x.min(GRID_WIDTH - 1), y.min(GRID_HEIGHT - 1))
    }

    fn index(lon: f64, lat: f64) -> usize {
        let (x, y) = Self::cell(lon, lat);
        y * GRID_WIDTH + x
    }

    pub fn set_height(&mut self, lon: f64, lat: f64, meters: f64) {
        let i = Self::index(lon, lat);
        self.heights[i] = meters;
    }

    /// Assign the biome for a cell. Indices at or beyond `biome_count` are
    /// clamped so fractions stay in `[0, 1)`.
    pub fn set_biome(&mut self, lon: f64, lat: f64, index: u16) {
        let max = self.biome_count.saturating_sub(1) as u16;
        let i = Self::index(lon, lat);
        self.biomes[i] = index.min(max);
    }

    pub fn mark_covered(&mut self, lon: f64, lat: f64, kinds: CoverageKinds) {
        let i = Self::index(lon, lat);
        self.coverage[i] |= kinds;
    }

    /// Remove all coverage from one cell. Live surveys only grow, but
    /// synthetic fixtures use this to carve out unsurveyed regions.
    pub fn clear_covered(&mut self, lon: f64, lat: f64) {
        let i = Self::index(lon, lat);
        self.coverage[i] = CoverageKinds::NOTHING;
    }

    /// Mark every cell in an inclusive geographic rectangle as covered.
    pub fn mark_covered_region(
        &mut self,
        lon_min: f64,
        lon_max: f64,
        lat_min: f64,
        lat_max: f64,
        kinds: CoverageKinds,
    ) {
        let (x0, y0) = Self::cell(lon_min, lat_min);
        let (x1, y1) = Self::cell(lon_max, lat_max);
        for y in y0..=y1.max(y0) {
            // Sweep eastward from x0, wrapping if the region crosses the
            // date line.
            let span = if x1 >= x0 {
                x1 - x0
            } else {
                GRID_WIDTH - x0 + x1
            };
            for dx in 0..=span {
                let x = (x0 + dx) % GRID_WIDTH;
                self.coverage[y * GRID_WIDTH + x] |= kinds;
            }
        }
    }

    pub(crate) fn raw_parts(&self) -> (&[CoverageKinds], &[f64], &[u16]) {
        (&self.coverage, &self.heights, &self.biomes)
    }

    pub(crate) fn from_raw_parts(
        body: BodyId,
        has_surface_model: bool,
        has_biome_map: bool,
        biome_count: u32,
        coverage: Vec<CoverageKinds>,
        heights: Vec<f64>,
        biomes: Vec<u16>,
    ) -> Self {
        Self {
            body,
            has_surface_model,
            has_biome_map,
            biome_count,
            coverage,
            heights,
            biomes,
        }
    }
}

impl SurveySource for GridSurvey {
    fn body(&self) -> BodyId {
        self.body
    }

    fn has_surface_model(&self) -> bool {
        self.has_surface_model
    }

    fn has_biome_map(&self) -> bool {
        self.has_biome_map
    }

    fn is_covered(&self, lon: f64, lat: f64, kinds: CoverageKinds) -> bool {
        self.coverage[Self::index(lon, lat)].intersects(kinds)
    }

    fn elevation(&self, lon: f64, lat: f64) -> f64 {
        let fx = normalize_lon(lon) + 180.0;
        let fy = (normalize_lat(lat) + 90.0).min((GRID_HEIGHT - 1) as f64);
        let x0 = (fx.floor() as usize).min(GRID_WIDTH - 1);
        let y0 = (fy.floor() as usize).min(GRID_HEIGHT - 1);
        let x1 = (x0 + 1) % GRID_WIDTH;
        let y1 = (y0 + 1).min(GRID_HEIGHT - 1);
        let tx = fx - fx.floor();
        let ty = fy - fy.floor();

        let h = |x: usize, y: usize| self.heights[y * GRID_WIDTH + x];
        let south = h(x0, y0) + (h(x1, y0) - h(x0, y0)) * tx;
        let north = h(x0, y1) + (h(x1, y1) - h(x0, y1)) * tx;
        south + (north - south) * ty
    }

    fn biome_index_fraction(&self, lon: f64, lat: f64) -> f64 {
        if self.biome_count == 0 {
            return 0.0;
        }
        f64::from(self.biomes[Self::index(lon, lat)]) / f64::from(self.biome_count)
    }
}
