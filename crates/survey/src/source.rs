use foundation::BodyId;

use crate::kinds::CoverageKinds;

/// Read-only access to discovered surface data for one body.
///
/// All geographic arguments are degrees. Implementations must answer for
/// any in-range point; the renderer gates every measurement query behind
/// [`SurveySource::is_covered`], so uncovered points are never asked for
/// values.
pub trait SurveySource {
    /// Identity of the surveyed body, used by views to detect retargeting.
    fn body(&self) -> BodyId;

    /// Whether the body has a solid-surface model at all. Bodies without
    /// one can claim altimetry coverage that carries no physical meaning.
    fn has_surface_model(&self) -> bool;

    /// Whether the body has a biome classification.
    fn has_biome_map(&self) -> bool;

    /// True if the point satisfies any of the requested coverage kinds.
    fn is_covered(&self, lon: f64, lat: f64, kinds: CoverageKinds) -> bool;

    /// Terrain elevation in meters, signed (negative below datum).
    fn elevation(&self, lon: f64, lat: f64) -> f64;

    /// A stable per-biome scalar in `[0, 1)` identifying the biome at the
    /// point. Equal fractions mean the same biome; renderers detect region
    /// boundaries by discontinuity.
    fn biome_index_fraction(&self, lon: f64, lat: f64) -> f64;
}
