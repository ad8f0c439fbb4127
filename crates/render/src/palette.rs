use foundation::Rgba;
use foundation::color::palette as c;

/// How scalar values become colors.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum ColorScheme {
    #[default]
    Color,
    Grayscale,
}

/// Gradient parameters for elevation coloring.
///
/// Passed explicitly into every call that maps values to colors; there is
/// no ambient global palette state. Changing these invalidates any cached
/// legend keyed on them.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PaletteConfig {
    pub scheme: ColorScheme,
    /// Elevation mapped to the first gradient stop (meters).
    pub gradient_start: f64,
    /// Width of the gradient interval (meters).
    pub gradient_range: f64,
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            scheme: ColorScheme::Color,
            gradient_start: -1500.0,
            gradient_range: 10500.0,
        }
    }
}

/// Elevation gradient stops, low to high. The final stop is duplicated on
/// purpose: it flattens the top of the gradient so extreme elevations stop
/// shifting hue.
pub const HEIGHT_GRADIENT: [Rgba; 8] = [
    c::DARK_PURPLE,
    c::CERULEAN,
    c::ARMY_GREEN,
    c::YELLOW,
    c::RED,
    c::MAGENTA,
    Rgba::WHITE,
    Rgba::WHITE,
];

/// Map an elevation to a color.
///
/// `scheme` is passed separately from the config because renderers force
/// grayscale for low-certainty data regardless of the active scheme.
pub fn height_to_color(value: f64, scheme: ColorScheme, palette: &PaletteConfig) -> Rgba {
    let frac = (value - palette.gradient_start) / palette.gradient_range;
    match scheme {
        ColorScheme::Grayscale => {
            Rgba::lerp(Rgba::BLACK, Rgba::WHITE, frac.clamp(0.0, 1.0) as f32)
        }
        ColorScheme::Color => {
            if frac < 0.0 {
                HEIGHT_GRADIENT[0]
            } else if frac > 1.0 {
                HEIGHT_GRADIENT[HEIGHT_GRADIENT.len() - 1]
            } else {
                // Scale by len - 2 so frac == 1.0 lands inside the
                // duplicated final stop instead of past the array.
                let scaled = frac * (HEIGHT_GRADIENT.len() - 2) as f64;
                let i = scaled as usize;
                Rgba::lerp(
                    HEIGHT_GRADIENT[i],
                    HEIGHT_GRADIENT[i + 1],
                    (scaled - i as f64) as f32,
                )
            }
        }
    }
}

/// Map a clamped slope proxy in `[0, 2]` to a color: green to yellow over
/// `[0, 1)`, yellow to orange over `[1, 2]`, or a plain grayscale ramp.
pub fn slope_to_color(slope: f64, scheme: ColorScheme) -> Rgba {
    match scheme {
        ColorScheme::Grayscale => {
            Rgba::lerp(Rgba::BLACK, Rgba::WHITE, (slope / 2.0) as f32)
        }
        ColorScheme::Color => {
            if slope < 1.0 {
                Rgba::lerp(c::PUKE_GREEN, c::LEMON, slope as f32)
            } else {
                Rgba::lerp(c::LEMON, c::ORANGE_RED, (slope - 1.0) as f32)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use foundation::Rgba;

    use super::{ColorScheme, HEIGHT_GRADIENT, PaletteConfig, height_to_color, slope_to_color};

    fn grayscale_level(value: f64) -> f32 {
        let c = height_to_color(value, ColorScheme::Grayscale, &PaletteConfig::default());
        assert_eq!(c.r, c.g);
        assert_eq!(c.g, c.b);
        c.r
    }

    #[test]
    fn grayscale_is_monotonic_and_clamped() {
        // Default interval: [-1500, 9000].
        let mut prev = grayscale_level(-10_000.0);
        assert_eq!(prev, 0.0);
        for step in 0..=20 {
            let value = -1500.0 + 10_500.0 * f64::from(step) / 20.0;
            let level = grayscale_level(value);
            assert!(level >= prev, "level regressed at {value}");
            prev = level;
        }
        assert_eq!(grayscale_level(9000.0), 1.0);
        assert_eq!(grayscale_level(50_000.0), 1.0);
    }

    #[test]
    fn color_clamps_to_terminal_stops() {
        let palette = PaletteConfig::default();
        assert_eq!(
            height_to_color(-99_999.0, ColorScheme::Color, &palette),
            HEIGHT_GRADIENT[0]
        );
        assert_eq!(
            height_to_color(99_999.0, ColorScheme::Color, &palette),
            Rgba::WHITE
        );
        // The duplicated final stop keeps the top of the range flat.
        assert_eq!(
            height_to_color(9000.0, ColorScheme::Color, &palette),
            Rgba::WHITE
        );
    }

    #[test]
    fn color_interpolates_between_bracketing_stops() {
        let palette = PaletteConfig::default();
        // Exactly the first stop at the interval start.
        assert_eq!(
            height_to_color(-1500.0, ColorScheme::Color, &palette),
            HEIGHT_GRADIENT[0]
        );
        // One segment in: exactly the second stop.
        let segment = 10_500.0 / 6.0;
        let at_second = height_to_color(-1500.0 + segment, ColorScheme::Color, &palette);
        let d = (at_second.r - HEIGHT_GRADIENT[1].r).abs()
            + (at_second.g - HEIGHT_GRADIENT[1].g).abs()
            + (at_second.b - HEIGHT_GRADIENT[1].b).abs();
        assert!(d < 1e-5, "expected second stop, off by {d}");
    }

    #[test]
    fn gradient_interval_tracks_config() {
        let palette = PaletteConfig {
            scheme: ColorScheme::Grayscale,
            gradient_start: 0.0,
            gradient_range: 100.0,
        };
        let mid = height_to_color(50.0, ColorScheme::Grayscale, &palette);
        assert_eq!(mid, Rgba::opaque(0.5, 0.5, 0.5));
    }

    #[test]
    fn slope_ramp_has_two_segments() {
        use foundation::color::palette as c;
        assert_eq!(slope_to_color(0.0, ColorScheme::Color), c::PUKE_GREEN);
        assert_eq!(slope_to_color(1.0, ColorScheme::Color), c::LEMON);
        assert_eq!(slope_to_color(2.0, ColorScheme::Color), c::ORANGE_RED);
        assert_eq!(slope_to_color(1.0, ColorScheme::Grayscale), Rgba::GREY);
    }
}
