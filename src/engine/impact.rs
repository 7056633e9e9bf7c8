/// Single-value impact: how many standard blocks the reported figure covers.
///
/// A zero-sized block cannot express any coverage, so the impact of any
/// value against it is defined as 0. This is the single-value policy only;
/// the batch engine handles negligible coverage with a sentinel instead
/// (see `distortion`). The two policies are intentionally separate.
pub fn impact(value: f64, standard_block: f64) -> f64 {
    if standard_block == 0.0 {
        return 0.0;
    }
    value / standard_block
}
