//! Fluent builder for constructing a [`Plan`].

use std::sync::Arc;

use lp_catalog::ActivityCatalog;
use lp_core::{Minutes, ProgressState};

use crate::efficiency::{EfficiencyModel, NetGainPerMinute};
use crate::gaps::GapReport;
use crate::plan::{DEFAULT_HARD_GAP_THRESHOLD, Plan};
use crate::PlanResult;

/// Fluent builder for [`Plan<E>`].
///
/// # Required inputs
///
/// - shared [`ActivityCatalog`]
/// - start and goal progress states
/// - time budget
///
/// # Optional inputs (have defaults)
///
/// | Method                     | Default                        |
/// |----------------------------|--------------------------------|
/// | `.hard_gap_threshold(t)`   | [`DEFAULT_HARD_GAP_THRESHOLD`] |
/// | `.efficiency(model)`       | [`NetGainPerMinute`]           |
///
/// # Example
///
/// ```rust,ignore
/// let plan = PlanBuilder::new(catalog, start, goal, Minutes(90))
///     .hard_gap_threshold(0.15)
///     .build()?;
/// ```
pub struct PlanBuilder<E: EfficiencyModel = NetGainPerMinute> {
    catalog: Arc<ActivityCatalog>,
    start: ProgressState,
    goal: ProgressState,
    time_budget: Minutes,
    hard_gap_threshold: f32,
    efficiency: E,
}

impl PlanBuilder<NetGainPerMinute> {
    /// Create a builder with all required inputs and the default scoring
    /// model.
    pub fn new(
        catalog: Arc<ActivityCatalog>,
        start: ProgressState,
        goal: ProgressState,
        time_budget: Minutes,
    ) -> Self {
        Self {
            catalog,
            start,
            goal,
            time_budget,
            hard_gap_threshold: DEFAULT_HARD_GAP_THRESHOLD,
            efficiency: NetGainPerMinute,
        }
    }
}

impl<E: EfficiencyModel> PlanBuilder<E> {
    /// Override the distance above which a transition counts as a hard gap.
    pub fn hard_gap_threshold(mut self, threshold: f32) -> Self {
        self.hard_gap_threshold = threshold;
        self
    }

    /// Swap in a custom scoring model.
    pub fn efficiency<E2: EfficiencyModel>(self, efficiency: E2) -> PlanBuilder<E2> {
        PlanBuilder {
            catalog: self.catalog,
            start: self.start,
            goal: self.goal,
            time_budget: self.time_budget,
            hard_gap_threshold: self.hard_gap_threshold,
            efficiency,
        }
    }

    /// Build an empty plan and run the initial restructure pass, so the
    /// derived state (one boundary gap, global candidate batch) is valid
    /// from the first read.
    pub fn build(self) -> PlanResult<Plan<E>> {
        let counters = vec![0; self.catalog.len()];
        let mut plan = Plan {
            catalog: self.catalog,
            efficiency: self.efficiency,
            time_budget: self.time_budget,
            hard_gap_threshold: self.hard_gap_threshold,
            start: self.start,
            goal: self.goal,
            sequence: Vec::new(),
            counters,
            reached: self.start,
            total_time: Minutes::ZERO,
            gap_report: GapReport::default(),
            focus: None,
            candidates: Vec::new(),
        };
        plan.restructure()?;
        Ok(plan)
    }
}
