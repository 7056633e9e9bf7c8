use proptest::prelude::*;

use sbcm::config::ScaleConfig;
use sbcm::engine::distortion::{self, ProjectRecord, COVERAGE_EPSILON, SENTINEL_HIGH};
use sbcm::engine::report::BatchReport;
use sbcm::engine::verdict::classify_distortion;
use sbcm::engine::{impact, scale};

prop_compose! {
    fn arb_record()(
        budget in 0.0..1e12f64,
        users in 0.0..1e8f64,
        tag in 0u32..1000
    ) -> ProjectRecord {
        ProjectRecord {
            name: format!("program-{}", tag),
            settled_budget: budget,
            estimated_beneficiaries: users,
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    // impact() is exact division for any positive block, no rounding inside.
    #[test]
    fn prop_impact_is_exact(value in 0.0..1e12f64, block in 1.0..1e9f64) {
        prop_assert_eq!(impact::impact(value, block), value / block);
    }

    // The degenerate-block policy holds for any value.
    #[test]
    fn prop_impact_zero_block_is_zero(value in 0.0..1e12f64) {
        prop_assert_eq!(impact::impact(value, 0.0), 0.0);
    }

    // Every distortion index is finite and non-negative: either the exact
    // ratio or the sentinel, nothing else.
    #[test]
    fn prop_distortion_is_finite_and_exact(
        records in proptest::collection::vec(arb_record(), 1..20),
        pop in 1_000u64..40_000_000
    ) {
        let config = ScaleConfig::default();
        let results = distortion::evaluate(&records, &config, pop).unwrap();
        prop_assert_eq!(results.len(), records.len());

        for (record, result) in records.iter().zip(&results) {
            prop_assert!(result.distortion_index.is_finite());
            prop_assert!(result.distortion_index >= 0.0);

            if result.coverage_impact <= COVERAGE_EPSILON {
                prop_assert_eq!(result.distortion_index, SENTINEL_HIGH);
            } else {
                prop_assert_eq!(
                    result.distortion_index,
                    result.budget_impact / result.coverage_impact
                );
            }

            // coverage only depends on the record, not the municipality
            let expected_coverage =
                record.estimated_beneficiaries / config.standard_block_population as f64;
            prop_assert_eq!(result.coverage_impact, expected_coverage);
        }
    }

    // The report is always ordered worst-first, whatever the input order.
    #[test]
    fn prop_report_sorted_descending(
        records in proptest::collection::vec(arb_record(), 0..30),
        pop in 1_000u64..40_000_000
    ) {
        let config = ScaleConfig::default();
        let results = distortion::evaluate(&records, &config, pop).unwrap();
        let report = BatchReport::build(records, results);

        for pair in report.rows.windows(2) {
            prop_assert!(pair[0].1.distortion_index >= pair[1].1.distortion_index);
        }
    }

    // Feeding the engine's own indices back into the classifier reproduces
    // the stored verdicts: the classifier is a pure function of the scalar.
    #[test]
    fn prop_verdict_round_trip(
        records in proptest::collection::vec(arb_record(), 1..20),
        pop in 1_000u64..40_000_000
    ) {
        let config = ScaleConfig::default();
        let results = distortion::evaluate(&records, &config, pop).unwrap();
        for result in &results {
            prop_assert_eq!(classify_distortion(result.distortion_index), result.verdict);
        }
    }

    // scale_factor * block population reproduces the local population.
    #[test]
    fn prop_scale_factor_inverts(pop in 1u64..200_000_000) {
        let factor = scale::scale_factor(pop, 72_176).unwrap();
        let back = factor * 72_176.0;
        prop_assert!((back - pop as f64).abs() < 1e-3);
    }
}
