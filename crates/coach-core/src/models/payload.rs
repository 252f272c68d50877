//! The serializable result of building a plan.

use serde::{Deserialize, Serialize};

use super::{Day, PlanKind, PlanType};

/// Plan type plus ordered days, as produced by the builder and stored in
/// drafts.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PlanPayload {
    pub kind: PlanKind,
    pub plan_type: PlanType,
    pub days: Vec<Day>,
}

impl PlanPayload {
    pub fn day_count(&self) -> u32 {
        self.days.last().map_or(0, |day| day.day_number)
    }

    /// Day numbers that would not pass completion checks.
    pub fn incomplete_days(&self) -> Vec<u32> {
        self.days
            .iter()
            .filter(|day| !day.is_completed(self.kind))
            .map(|day| day.day_number)
            .collect()
    }

    /// Days are numbered 1..=N without gaps.
    pub fn is_contiguous(&self) -> bool {
        (1..).zip(&self.days).all(|(n, day)| day.day_number == n)
    }
}
