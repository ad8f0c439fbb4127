//! RGBA color with straight (non-premultiplied) alpha, components in `[0, 1]`.

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub const CLEAR: Rgba = Rgba::new(0.0, 0.0, 0.0, 0.0);
    pub const BLACK: Rgba = Rgba::opaque(0.0, 0.0, 0.0);
    pub const WHITE: Rgba = Rgba::opaque(1.0, 1.0, 1.0);
    pub const GREY: Rgba = Rgba::opaque(0.5, 0.5, 0.5);
    pub const RED: Rgba = Rgba::opaque(1.0, 0.0, 0.0);

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn opaque(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Component-wise blend from `a` to `b`; `t` is clamped to `[0, 1]`.
    pub fn lerp(a: Rgba, b: Rgba, t: f32) -> Rgba {
        let t = t.clamp(0.0, 1.0);
        Rgba::new(
            a.r + (b.r - a.r) * t,
            a.g + (b.g - a.g) * t,
            a.b + (b.b - a.b) * t,
            a.a + (b.a - a.a) * t,
        )
    }

    /// Pack into 8-bit RGBA for export.
    pub fn to_bytes(self) -> [u8; 4] {
        let q = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        [q(self.r), q(self.g), q(self.b), q(self.a)]
    }
}

/// Named surface-map colors, taken from the XKCD color survey so rendered
/// maps match the established palette.
pub mod palette {
    use super::Rgba;

    pub const DARK_PURPLE: Rgba = Rgba::opaque(53.0 / 255.0, 6.0 / 255.0, 62.0 / 255.0);
    pub const CERULEAN: Rgba = Rgba::opaque(4.0 / 255.0, 133.0 / 255.0, 209.0 / 255.0);
    pub const ARMY_GREEN: Rgba = Rgba::opaque(75.0 / 255.0, 93.0 / 255.0, 22.0 / 255.0);
    pub const YELLOW: Rgba = Rgba::opaque(1.0, 1.0, 20.0 / 255.0);
    pub const RED: Rgba = Rgba::opaque(229.0 / 255.0, 0.0, 0.0);
    pub const MAGENTA: Rgba = Rgba::opaque(194.0 / 255.0, 0.0, 120.0 / 255.0);

    pub const PUKE_GREEN: Rgba = Rgba::opaque(154.0 / 255.0, 174.0 / 255.0, 7.0 / 255.0);
    pub const LEMON: Rgba = Rgba::opaque(253.0 / 255.0, 1.0, 82.0 / 255.0);
    pub const ORANGE_RED: Rgba = Rgba::opaque(253.0 / 255.0, 65.0 / 255.0, 30.0 / 255.0);

    pub const CAMO_GREEN: Rgba = Rgba::opaque(82.0 / 255.0, 101.0 / 255.0, 37.0 / 255.0);
    pub const MARIGOLD: Rgba = Rgba::opaque(252.0 / 255.0, 192.0 / 255.0, 6.0 / 255.0);
}
