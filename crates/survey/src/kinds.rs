use std::ops::{BitOr, BitOrAssign};

use serde::{Deserialize, Serialize};

/// A set of independent coverage kinds a surveyed point may satisfy.
///
/// Bit values are part of the on-disk descriptor format and must not be
/// renumbered.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CoverageKinds(u32);

impl CoverageKinds {
    pub const NOTHING: CoverageKinds = CoverageKinds(0);
    /// Low-resolution altimetry.
    pub const ALTIMETRY_LORES: CoverageKinds = CoverageKinds(1 << 0);
    /// High-resolution altimetry.
    pub const ALTIMETRY_HIRES: CoverageKinds = CoverageKinds(1 << 1);
    /// Altimetry at either resolution.
    pub const ALTIMETRY: CoverageKinds = CoverageKinds(1 << 0 | 1 << 1);
    /// Biome classification.
    pub const BIOME: CoverageKinds = CoverageKinds(1 << 3);
    /// Anomaly presence.
    pub const ANOMALY: CoverageKinds = CoverageKinds(1 << 4);
    /// Anomaly detail.
    pub const ANOMALY_DETAIL: CoverageKinds = CoverageKinds(1 << 5);
    pub const EVERYTHING: CoverageKinds = CoverageKinds(u32::MAX);

    pub const fn bits(self) -> u32 {
        self.0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// True if every kind in `other` is present.
    pub const fn contains(self, other: CoverageKinds) -> bool {
        self.0 & other.0 == other.0
    }

    /// True if any kind in `other` is present. Coverage queries use this:
    /// `ALTIMETRY` is satisfied by either resolution.
    pub const fn intersects(self, other: CoverageKinds) -> bool {
        self.0 & other.0 != 0
    }

    pub const fn union(self, other: CoverageKinds) -> CoverageKinds {
        CoverageKinds(self.0 | other.0)
    }
}

impl BitOr for CoverageKinds {
    type Output = CoverageKinds;

    fn bitor(self, rhs: CoverageKinds) -> CoverageKinds {
        self.union(rhs)
    }
}

impl BitOrAssign for CoverageKinds {
    fn bitor_assign(&mut self, rhs: CoverageKinds) {
        *self = self.union(rhs);
    }
}

#[cfg(test)]
mod tests {
    use super::CoverageKinds;

    #[test]
    fn altimetry_covers_both_resolutions() {
        assert!(CoverageKinds::ALTIMETRY.contains(CoverageKinds::ALTIMETRY_LORES));
        assert!(CoverageKinds::ALTIMETRY.contains(CoverageKinds::ALTIMETRY_HIRES));
        assert!(CoverageKinds::ALTIMETRY_LORES.intersects(CoverageKinds::ALTIMETRY));
        assert!(!CoverageKinds::ALTIMETRY_LORES.contains(CoverageKinds::ALTIMETRY));
    }

    #[test]
    fn kinds_are_independent() {
        assert!(!CoverageKinds::BIOME.intersects(CoverageKinds::ALTIMETRY));
        assert!(!CoverageKinds::ANOMALY.intersects(CoverageKinds::ANOMALY_DETAIL));
        assert!(CoverageKinds::NOTHING.is_empty());
    }

    #[test]
    fn union_accumulates() {
        let mut k = CoverageKinds::NOTHING;
        k |= CoverageKinds::ALTIMETRY_HIRES;
        k |= CoverageKinds::BIOME;
        assert!(k.contains(CoverageKinds::ALTIMETRY_HIRES | CoverageKinds::BIOME));
        assert!(!k.contains(CoverageKinds::ANOMALY));
    }
}
