use foundation::{BodyId, Rgba};
use foundation::color::palette as c;
use foundation::math::Projection;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use survey::{CoverageKinds, SurveySource};

use crate::budget::FrameBudget;
use crate::buffer::PixelBuffer;
use crate::palette::{ColorScheme, PaletteConfig, height_to_color, slope_to_color};

/// Base map width in pixels; one pixel per degree of longitude.
pub const BASE_WIDTH: u32 = 360;
/// Largest supported map width (4x the base unit).
pub const MAX_WIDTH: u32 = 4 * BASE_WIDTH;
/// Rows rendered between display commits.
const COMMIT_INTERVAL: u32 = 10;

/// Which data query and color policy the builder uses per pixel.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum RenderMode {
    #[default]
    Elevation,
    Slope,
    Biome,
}

impl RenderMode {
    pub const ALL: [RenderMode; 3] = [RenderMode::Elevation, RenderMode::Slope, RenderMode::Biome];

    pub fn name(self) -> &'static str {
        match self {
            RenderMode::Elevation => "elevation",
            RenderMode::Slope => "slope",
            RenderMode::Biome => "biome",
        }
    }
}

impl std::fmt::Display for RenderMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// One configured map render: projection, mode, dimensions, and the
/// progressive raster state.
///
/// The render advances one row per [`MapView::advance_one_row`] call, so a
/// full map amortizes across the host's frame loop. Reconfiguring the body,
/// width, or projection discards in-flight progress and the buffer; there
/// is no separate cancellation.
#[derive(Debug)]
pub struct MapView {
    width: u32,
    height: u32,
    /// Pixels per degree, `width / 360`.
    scale: f64,
    lon_offset: f64,
    lat_offset: f64,
    projection: Projection,
    mode: RenderMode,
    body: BodyId,
    fallback_width: u32,
    buffer: Option<PixelBuffer>,
    row: u32,
    /// Per-column scalar from the last completed row, for slope estimates
    /// and biome boundary detection. During a row pass, entries west of the
    /// cursor already hold the current row's values.
    line: Vec<f64>,
    rng: SmallRng,
}

impl MapView {
    /// `host_width` is the display width the view falls back to when asked
    /// for a zero-width map; it is snapped and capped like any other width.
    pub fn new(body: BodyId, host_width: u32) -> Self {
        Self {
            width: BASE_WIDTH,
            height: BASE_WIDTH / 2,
            scale: 1.0,
            lon_offset: 0.0,
            lat_offset: 0.0,
            projection: Projection::Rectangular,
            mode: RenderMode::Elevation,
            body,
            fallback_width: snap_width(host_width, BASE_WIDTH),
            buffer: None,
            row: 0,
            line: Vec::new(),
            rng: SmallRng::seed_from_u64(body.raw()),
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn projection(&self) -> Projection {
        self.projection
    }

    pub fn mode(&self) -> RenderMode {
        self.mode
    }

    pub fn body(&self) -> BodyId {
        self.body
    }

    pub fn buffer(&self) -> Option<&PixelBuffer> {
        self.buffer.as_ref()
    }

    pub fn is_complete(&self) -> bool {
        self.buffer.is_some() && self.row >= self.height
    }

    /// Retarget the view at another body. No-op if unchanged; otherwise the
    /// buffer is discarded and the render restarts.
    pub fn set_body(&mut self, body: BodyId) {
        if self.body == body {
            return;
        }
        self.body = body;
        self.buffer = None;
        self.row = 0;
    }

    /// Set the map width; height follows as `width / 2`. Zero falls back to
    /// the host-derived default; everything is snapped to a multiple of 360
    /// and capped at [`MAX_WIDTH`].
    pub fn set_width(&mut self, width: u32) {
        let width = snap_width(width, self.fallback_width);
        let height = width / 2;
        if width == self.width && height == self.height {
            return;
        }
        self.width = width;
        self.height = height;
        self.scale = f64::from(width) / 360.0;
        self.buffer = None;
        self.row = 0;
    }

    /// Set width and an explicit height override (`0` means `width / 2`).
    pub fn set_size(&mut self, width: u32, height: u32) {
        let width = snap_width(width, self.fallback_width);
        let height = if height == 0 { width / 2 } else { height };
        if width == self.width && height == self.height {
            return;
        }
        self.width = width;
        self.height = height;
        self.scale = f64::from(width) / 360.0;
        self.buffer = None;
        self.row = 0;
    }

    pub fn set_projection(&mut self, projection: Projection) {
        if self.projection == projection {
            return;
        }
        self.projection = projection;
        self.buffer = None;
        self.row = 0;
    }

    /// Change the render mode. Restarts the render but keeps the buffer
    /// dimensions; rows are repainted in place.
    pub fn set_mode(&mut self, mode: RenderMode) {
        self.mode = mode;
        self.row = 0;
    }

    /// Center the view on a geographic point by adjusting the offsets. Does
    /// not restart an in-flight render.
    pub fn center_on(&mut self, lon: f64, lat: f64) {
        self.lon_offset = 180.0 + lon - (f64::from(self.width) / self.scale) / 2.0;
        self.lat_offset = 90.0 + lat - (f64::from(self.height) / self.scale) / 2.0;
    }

    /// Plane longitude to fractional pixel column.
    pub fn scale_longitude(&self, lon: f64) -> f64 {
        (lon + 180.0 - self.lon_offset) * self.scale
    }

    /// Plane latitude to fractional pixel row (row 0 is south).
    pub fn scale_latitude(&self, lat: f64) -> f64 {
        (lat + 90.0 - self.lat_offset) * self.scale
    }

    /// Render the next row. Bounded work: exactly one row of pixels per
    /// call, idempotent once the render is complete.
    ///
    /// Never fails: invalid geometry degrades to transparent pixels,
    /// missing coverage to unpainted ones, missing physical models to a
    /// noise placeholder, all local to the affected pixel.
    pub fn advance_one_row(&mut self, data: &impl SurveySource, palette: &PaletteConfig) {
        if self.buffer.is_none() {
            self.buffer = Some(PixelBuffer::new(self.width, self.height));
            self.row = 0;
            self.rng = SmallRng::seed_from_u64(self.body.raw());
        } else if self.row >= self.height {
            return;
        }

        if self.row == 0 {
            self.line = vec![0.0; self.width as usize];
        }

        let mut pixels = vec![Rgba::CLEAR; self.width as usize];
        for col in 0..self.width {
            pixels[col as usize] = self.shade(col, data, palette);
        }

        let row = self.row;
        let height = self.height;
        let Some(buffer) = self.buffer.as_mut() else {
            return;
        };
        // Highlight strip one row ahead: a visual progress marker only.
        if row + 1 < height {
            buffer.fill_row(row + 1, Rgba::RED);
        }
        buffer.write_row(row, &pixels);
        self.row += 1;
        if self.row % COMMIT_INTERVAL == 0 || self.row >= height {
            buffer.commit();
        }
    }

    /// Advance up to one row per remaining budget unit. Returns the number
    /// of rows rendered.
    pub fn advance_with_budget(
        &mut self,
        data: &impl SurveySource,
        palette: &PaletteConfig,
        budget: &mut FrameBudget,
    ) -> u32 {
        let mut rows = 0;
        while !self.is_complete() && budget.try_consume(1) {
            self.advance_one_row(data, palette);
            rows += 1;
        }
        rows
    }

    /// Color for one pixel of the current row.
    fn shade(&mut self, col: u32, data: &impl SurveySource, palette: &PaletteConfig) -> Rgba {
        let plane_lat = f64::from(self.row) / self.scale - 90.0 + self.lat_offset;
        let plane_lon = f64::from(col) / self.scale - 180.0 + self.lon_offset;
        let lat = self.projection.unproject_lat(plane_lon, plane_lat);
        let lon = self.projection.unproject_lon(plane_lon, plane_lat);
        if !lat.is_finite()
            || !lon.is_finite()
            || !(-90.0..=90.0).contains(&lat)
            || !(-180.0..=180.0).contains(&lon)
        {
            return Rgba::CLEAR;
        }

        match self.mode {
            RenderMode::Elevation => self.shade_elevation(col, lon, lat, data, palette),
            RenderMode::Slope => self.shade_slope(col, lon, lat, data, palette),
            RenderMode::Biome => self.shade_biome(col, lon, lat, data, palette),
        }
    }

    fn shade_elevation(
        &mut self,
        col: u32,
        lon: f64,
        lat: f64,
        data: &impl SurveySource,
        palette: &PaletteConfig,
    ) -> Rgba {
        if !data.is_covered(lon, lat, CoverageKinds::ALTIMETRY) {
            return Rgba::GREY;
        }
        if !data.has_surface_model() {
            // Coverage claimed but physically meaningless.
            return self.noise();
        }
        let (value, color) = if data.is_covered(lon, lat, CoverageKinds::ALTIMETRY_HIRES) {
            let value = data.elevation(lon, lat);
            (value, height_to_color(value, palette.scheme, palette))
        } else {
            // Low resolution: coarse grid, forced grayscale to show the
            // reduced certainty.
            let value = data.elevation(snap_coarse(lon), snap_coarse(lat));
            (value, height_to_color(value, ColorScheme::Grayscale, palette))
        };
        self.line[col as usize] = value;
        color
    }

    fn shade_slope(
        &mut self,
        col: u32,
        lon: f64,
        lat: f64,
        data: &impl SurveySource,
        palette: &PaletteConfig,
    ) -> Rgba {
        if !data.is_covered(lon, lat, CoverageKinds::ALTIMETRY) {
            return Rgba::GREY;
        }
        if !data.has_surface_model() {
            return self.noise();
        }
        let value = if data.is_covered(lon, lat, CoverageKinds::ALTIMETRY_HIRES) {
            data.elevation(lon, lat)
        } else {
            data.elevation(snap_coarse(lon), snap_coarse(lat))
        };
        let i = col as usize;
        let color = if self.row == 0 {
            // No vertical neighbor yet.
            Rgba::GREY
        } else {
            // A cheap proxy for gradient magnitude, not a geometric slope:
            // it avoids extra elevation queries by comparing against the
            // north, west, and east values already in the line buffer.
            let mut neighbor = self.line[i];
            if i > 0 {
                neighbor = neighbor.max(self.line[i - 1]);
            }
            if i + 1 < self.line.len() {
                neighbor = neighbor.max(self.line[i + 1]);
            }
            let slope = ((value - neighbor).abs() / 1000.0).clamp(0.0, 2.0);
            slope_to_color(slope, palette.scheme)
        };
        self.line[i] = value;
        color
    }

    fn shade_biome(
        &mut self,
        col: u32,
        lon: f64,
        lat: f64,
        data: &impl SurveySource,
        palette: &PaletteConfig,
    ) -> Rgba {
        if !data.is_covered(lon, lat, CoverageKinds::BIOME) {
            return Rgba::GREY;
        }
        if !data.has_biome_map() {
            return self.noise();
        }
        let bio = data.biome_index_fraction(lon, lat);
        let i = col as usize;
        // Discontinuity against the west or north neighbor traces the
        // region outline.
        let boundary = (i > 0 && self.line[i - 1] != bio) || (self.row > 0 && self.line[i] != bio);
        let color = if boundary {
            Rgba::WHITE
        } else {
            match palette.scheme {
                ColorScheme::Grayscale => Rgba::lerp(Rgba::BLACK, Rgba::WHITE, bio as f32),
                ColorScheme::Color => {
                    // Terrain shading under the biome tint.
                    let shading = if data.is_covered(lon, lat, CoverageKinds::ALTIMETRY) {
                        let elev = data.elevation(lon, lat);
                        let t = ((elev + 1500.0).clamp(0.0, 9000.0) / 9000.0) as f32;
                        Rgba::lerp(Rgba::BLACK, Rgba::WHITE, t)
                    } else {
                        Rgba::GREY
                    };
                    let tint = Rgba::lerp(c::CAMO_GREEN, c::MARIGOLD, bio as f32);
                    Rgba::lerp(tint, shading, 0.5)
                }
            }
        };
        self.line[i] = bio;
        color
    }

    fn noise(&mut self) -> Rgba {
        Rgba::lerp(Rgba::BLACK, Rgba::WHITE, self.rng.gen_range(0.0..1.0))
    }
}

/// Snap a requested width to a whole multiple of [`BASE_WIDTH`] within
/// `[BASE_WIDTH, MAX_WIDTH]`; zero means "use the fallback".
fn snap_width(width: u32, fallback: u32) -> u32 {
    let width = if width == 0 { fallback } else { width };
    (width / BASE_WIDTH).clamp(1, MAX_WIDTH / BASE_WIDTH) * BASE_WIDTH
}

/// Truncate a coordinate to the 0.2-degree grid used for low-resolution
/// altimetry lookups.
fn snap_coarse(deg: f64) -> f64 {
    (deg * 5.0).trunc() / 5.0
}
