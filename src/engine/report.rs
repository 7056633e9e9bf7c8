use crate::engine::distortion::{ImpactResult, ProjectRecord};

/// The packaged output of one batch run: records paired with their results,
/// worst distortion first.
#[derive(Debug, Clone)]
pub struct BatchReport {
    pub rows: Vec<(ProjectRecord, ImpactResult)>,
}

impl BatchReport {
    /// Pairs records with their results and orders them by distortion index
    /// descending. The sort is stable, so ties keep their input order.
    /// Indices are finite by construction (the sentinel policy), which makes
    /// `total_cmp` a total order here.
    pub fn build(records: Vec<ProjectRecord>, results: Vec<ImpactResult>) -> Self {
        let mut rows: Vec<(ProjectRecord, ImpactResult)> =
            records.into_iter().zip(results).collect();
        rows.sort_by(|a, b| b.1.distortion_index.total_cmp(&a.1.distortion_index));
        Self { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
