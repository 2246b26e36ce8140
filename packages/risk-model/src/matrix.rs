use serde::Serialize;
use std::fmt;

/// Lowest and highest tier on both axes of the matrix.
pub const MIN_TIER: u8 = 1;
pub const MAX_TIER: u8 = 5;

/// Probability that a threat of a given capability overcomes a given
/// resistance strength.
///
/// Row = TCap (1-5), column = RS (1-5). Indexed through [`vulnerability`].
const PROBABILITY_MATRIX: [[f64; 5]; 5] = [
    [0.20, 0.05, 0.01, 0.00, 0.00], // TCap 1 (Script kiddie)
    [0.50, 0.20, 0.05, 0.01, 0.00], // TCap 2 (Opportunistic)
    [0.80, 0.50, 0.20, 0.05, 0.01], // TCap 3 (Hacktivist)
    [0.95, 0.80, 0.50, 0.25, 0.05], // TCap 4 (Crime)
    [0.99, 0.95, 0.85, 0.60, 0.25], // TCap 5 (APT)
];

fn clamp_tier(raw: i64) -> u8 {
    raw.clamp(MIN_TIER as i64, MAX_TIER as i64) as u8
}

/// Attacker sophistication, 1 (script kiddie) to 5 (nation state).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct ThreatCapability(u8);

impl ThreatCapability {
    /// Clamp any integer into the 1..=5 tier range.
    pub fn clamped(raw: i64) -> Self {
        Self(clamp_tier(raw))
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// All tiers in ascending order.
    pub fn all() -> impl Iterator<Item = Self> {
        (MIN_TIER..=MAX_TIER).map(Self)
    }
}

impl fmt::Display for ThreatCapability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TCap {}", self.0)
    }
}

/// Defender control maturity, 1 (weak) to 5 (strong).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct ResistanceStrength(u8);

impl ResistanceStrength {
    pub fn clamped(raw: i64) -> Self {
        Self(clamp_tier(raw))
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

/// Exact table lookup, no interpolation.
pub fn vulnerability(tcap: ThreatCapability, rs: ResistanceStrength) -> f64 {
    PROBABILITY_MATRIX[(tcap.0 - MIN_TIER) as usize][(rs.0 - MIN_TIER) as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corner_values() {
        let lookup = |t: i64, r: i64| {
            vulnerability(ThreatCapability::clamped(t), ResistanceStrength::clamped(r))
        };

        assert_eq!(lookup(5, 1), 0.99);
        assert_eq!(lookup(5, 5), 0.25);
        assert_eq!(lookup(1, 1), 0.20);
        assert_eq!(lookup(1, 5), 0.00);
        assert_eq!(lookup(3, 3), 0.20);
        assert_eq!(lookup(4, 2), 0.80);
    }

    #[test]
    fn test_out_of_range_tiers_are_clamped() {
        assert_eq!(ThreatCapability::clamped(9), ThreatCapability::clamped(5));
        assert_eq!(ThreatCapability::clamped(-3).get(), 1);
        assert_eq!(ResistanceStrength::clamped(0).get(), 1);
        assert_eq!(ResistanceStrength::clamped(i64::MAX).get(), 5);
    }

    #[test]
    fn test_probability_falls_as_resistance_rises() {
        for tcap in ThreatCapability::all() {
            let row: Vec<f64> = (1..=5)
                .map(|rs| vulnerability(tcap, ResistanceStrength::clamped(rs)))
                .collect();
            assert!(row.windows(2).all(|w| w[0] >= w[1]), "{tcap}: {row:?}");
            assert!(row.iter().all(|p| (0.0..=1.0).contains(p)));
        }
    }

    #[test]
    fn test_tier_label() {
        assert_eq!(ThreatCapability::clamped(4).to_string(), "TCap 4");
    }
}
