use serde::Serialize;
use strum_macros::Display;

/// Verdict for a single-value impact ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display)]
pub enum ImpactVerdict {
    #[strum(serialize = "below one unit of coverage")]
    BelowOneUnit,
    #[strum(serialize = "localized/partial reach")]
    Localized,
    #[strum(serialize = "broad, verifiable reach")]
    Broad,
}

/// Verdict for a batch distortion index. The labels carry the quadrant
/// names from the methodology writeup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display)]
pub enum DistortionVerdict {
    #[strum(serialize = "severe distortion, audit flag")]
    Severe,
    #[strum(serialize = "high-cost")]
    HighCost,
    #[strum(serialize = "within normal range")]
    Normal,
    #[strum(serialize = "high-efficiency")]
    HighEfficiency,
}

/// Impact bands: [0, 1) error-level, [1, 10) localized, [10, inf) broad.
/// Exactly 1.0 and exactly 10.0 belong to the higher band.
pub fn classify_impact(impact: f64) -> ImpactVerdict {
    if impact < 1.0 {
        ImpactVerdict::BelowOneUnit
    } else if impact < 10.0 {
        ImpactVerdict::Localized
    } else {
        ImpactVerdict::Broad
    }
}

/// Distortion bands: (50, inf) severe, (10, 50] high-cost, [1, 10] normal,
/// [0, 1) high-efficiency. Note the placement differs from the impact
/// table: 10 and 50 sit in the *lower* band here. That asymmetry is a
/// policy decision and must not be "fixed".
pub fn classify_distortion(d: f64) -> DistortionVerdict {
    if d > 50.0 {
        DistortionVerdict::Severe
    } else if d > 10.0 {
        DistortionVerdict::HighCost
    } else if d < 1.0 {
        DistortionVerdict::HighEfficiency
    } else {
        DistortionVerdict::Normal
    }
}
