use rstest::rstest;
use sbcm::engine::verdict::{
    classify_distortion, classify_impact, DistortionVerdict, ImpactVerdict,
};

// --- SINGLE-VALUE IMPACT TABLE ---
// 1.0 and 10.0 belong to the higher band.

#[rstest]
#[case(0.0, ImpactVerdict::BelowOneUnit)]
#[case(0.0416, ImpactVerdict::BelowOneUnit)]
#[case(0.9999, ImpactVerdict::BelowOneUnit)]
#[case(1.0, ImpactVerdict::Localized)]
#[case(5.0, ImpactVerdict::Localized)]
#[case(9.9999, ImpactVerdict::Localized)]
#[case(10.0, ImpactVerdict::Broad)]
#[case(2500.0, ImpactVerdict::Broad)]
fn impact_bands(#[case] impact: f64, #[case] expected: ImpactVerdict) {
    assert_eq!(classify_impact(impact), expected);
}

// --- BATCH DISTORTION TABLE ---
// Opposite placement: 10 and 50 belong to the lower band, 1 to normal.

#[rstest]
#[case(0.0, DistortionVerdict::HighEfficiency)]
#[case(0.9999, DistortionVerdict::HighEfficiency)]
#[case(1.0, DistortionVerdict::Normal)]
#[case(5.0, DistortionVerdict::Normal)]
#[case(10.0, DistortionVerdict::Normal)]
#[case(10.0001, DistortionVerdict::HighCost)]
#[case(39.9, DistortionVerdict::HighCost)]
#[case(50.0, DistortionVerdict::HighCost)]
#[case(50.0001, DistortionVerdict::Severe)]
#[case(9999.0, DistortionVerdict::Severe)]
fn distortion_bands(#[case] d: f64, #[case] expected: DistortionVerdict) {
    assert_eq!(classify_distortion(d), expected);
}

#[test]
fn test_verdict_labels() {
    assert_eq!(
        DistortionVerdict::Severe.to_string(),
        "severe distortion, audit flag"
    );
    assert_eq!(DistortionVerdict::HighCost.to_string(), "high-cost");
    assert_eq!(
        DistortionVerdict::Normal.to_string(),
        "within normal range"
    );
    assert_eq!(
        DistortionVerdict::HighEfficiency.to_string(),
        "high-efficiency"
    );
    assert_eq!(
        ImpactVerdict::BelowOneUnit.to_string(),
        "below one unit of coverage"
    );
    assert_eq!(
        ImpactVerdict::Localized.to_string(),
        "localized/partial reach"
    );
    assert_eq!(
        ImpactVerdict::Broad.to_string(),
        "broad, verifiable reach"
    );
}

#[test]
fn test_classifier_is_idempotent() {
    // Re-classifying the same scalar always yields the same verdict.
    for d in [0.0, 0.5, 1.0, 9.9, 10.0, 10.1, 50.0, 51.0, 9999.0] {
        assert_eq!(classify_distortion(d), classify_distortion(d));
    }
}
