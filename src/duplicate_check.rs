use tracing::{debug, info, warn};

use crate::error::PlanError;
use crate::plan::{Plan, PlanSet};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicatePair {
    pub first: usize,
    pub second: usize,
    pub lines: usize,
    pub fingerprint: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckReport {
    pub duplicates: Vec<DuplicatePair>,
    /// Pair comparisons performed.
    pub comparisons: usize,
    /// Every pair was examined.
    pub completed: bool,
}

impl CheckReport {
    pub fn has_duplicates(&self) -> bool {
        !self.duplicates.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CheckMode {
    #[default]
    StopAtFirst,
    ReportAll,
}

/// Total pairs `(i, j)` with `i < j` for `count` plans.
pub fn pair_count(count: usize) -> usize {
    count * count.saturating_sub(1) / 2
}

/// Compares every pair of plans in `set`, in the order
/// `(1,2), (1,3) .. (1,N), (2,3) ..`.
///
/// Pair order needs plans in ascending index order, so each plan is read
/// once, the first time a pair needs it. In [`CheckMode::StopAtFirst`] a
/// duplicate is reported before any later plan is touched.
pub async fn check_duplicates(set: &PlanSet, mode: CheckMode) -> Result<CheckReport, PlanError> {
    let count = set.count();
    let mut plans: Vec<Plan> = Vec::with_capacity(count);
    let mut duplicates = vec![];
    let mut comparisons = 0;

    for first in 1..=count {
        load_through(set, &mut plans, first).await?;
        for second in first + 1..=count {
            load_through(set, &mut plans, second).await?;

            let a_plan = &plans[first - 1];
            let b_plan = &plans[second - 1];
            comparisons += 1;
            debug!(first, second, "comparing plans");

            if !a_plan.is_duplicate_of(b_plan) {
                continue;
            }

            warn!(first, second, "plans are identical");
            duplicates.push(DuplicatePair {
                first: a_plan.index(),
                second: b_plan.index(),
                lines: a_plan.len(),
                fingerprint: a_plan.fingerprint().to_string(),
            });

            if mode == CheckMode::StopAtFirst {
                return Ok(CheckReport {
                    duplicates,
                    comparisons,
                    completed: comparisons == pair_count(count),
                });
            }
        }
    }

    info!(
        count,
        comparisons,
        duplicates = duplicates.len(),
        "compared all plans"
    );
    Ok(CheckReport {
        duplicates,
        comparisons,
        completed: true,
    })
}

/// Reads plans until `plans` holds indices `1..=index`.
async fn load_through(
    set: &PlanSet,
    plans: &mut Vec<Plan>,
    index: usize,
) -> Result<(), PlanError> {
    while plans.len() < index {
        plans.push(Plan::load(set, plans.len() + 1).await?);
    }
    Ok(())
}
