use foundation::Rgba;
use foundation::math::StableF64;

use crate::palette::{ColorScheme, PaletteConfig, height_to_color};

/// Number of samples in a legend strip (width of the 1-row preview image).
pub const LEGEND_SAMPLES: usize = 256;

/// The five parameters a legend depends on. Floats are wrapped so the
/// "unchanged?" comparison is total even for degenerate inputs.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
struct LegendKey {
    min: StableF64,
    max: StableF64,
    scheme: ColorScheme,
    gradient_start: StableF64,
    gradient_range: StableF64,
}

/// Memoized legend strip.
///
/// Owned by whichever component draws legends and passed by reference;
/// never process-global. The `&mut self` accessor structurally rules out a
/// rebuild happening while a previous strip is still borrowed.
#[derive(Debug, Default)]
pub struct LegendCache {
    key: Option<LegendKey>,
    samples: Vec<Rgba>,
    builds: u64,
}

impl LegendCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// A 256-sample strip of colors spanning `[min, max]` under `scheme`.
    ///
    /// Rebuilt only when one of (min, max, scheme, gradient start,
    /// gradient range) changed since the last call.
    pub fn legend(
        &mut self,
        min: f64,
        max: f64,
        scheme: ColorScheme,
        palette: &PaletteConfig,
    ) -> &[Rgba] {
        let key = LegendKey {
            min: StableF64(min),
            max: StableF64(max),
            scheme,
            gradient_start: StableF64(palette.gradient_start),
            gradient_range: StableF64(palette.gradient_range),
        };
        if self.key != Some(key) {
            self.samples = (0..LEGEND_SAMPLES)
                .map(|x| {
                    let value = (x as f64 * (max - min)) / LEGEND_SAMPLES as f64 + min;
                    height_to_color(value, scheme, palette)
                })
                .collect();
            self.key = Some(key);
            self.builds += 1;
        }
        &self.samples
    }

    /// How many times a strip has been (re)built; for cache verification.
    pub fn build_count(&self) -> u64 {
        self.builds
    }
}
