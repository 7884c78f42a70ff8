//! Unit tests for lp-engine.

use std::sync::Arc;

use lp_catalog::{ActivityCatalog, ActivityDefinition};
use lp_core::{ActivityId, Effect, EffectProfile, Minutes, PlaneId, ProgressState};

use crate::{
    CandidateFlags, CandidateScore, NetGainPerMinute, Plan, PlanBuilder, PlanError,
    ScheduledActivity, gaps, selector,
};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn fixed_def(
    id: u16,
    name: &str,
    precond: (f32, f32),
    effect: (f32, f32),
    minutes: u32,
    max_rep: u32,
) -> ActivityDefinition {
    ActivityDefinition {
        id: ActivityId(id),
        name: name.to_string(),
        precondition: ProgressState::new(precond.0, precond.1),
        profile: EffectProfile::fixed(Effect::new(effect.0, effect.1), Minutes(minutes)),
        min_minutes: Minutes(minutes),
        default_minutes: Minutes(minutes),
        max_minutes: Minutes(minutes),
        adjustable: false,
        max_repetitions: max_rep,
        plane: PlaneId(0),
    }
}

/// Three fixed-duration activities covering the (0,0) → (0.9,0.9) journey.
fn catalog() -> Arc<ActivityCatalog> {
    Arc::new(
        ActivityCatalog::new(vec![
            fixed_def(0, "basics", (0.0, 0.0), (0.4, 0.4), 30, 2),
            fixed_def(1, "practice", (0.3, 0.3), (0.3, 0.3), 20, 3),
            fixed_def(2, "project", (0.5, 0.5), (0.3, 0.3), 25, 1),
        ])
        .unwrap(),
    )
}

fn plan_with_budget(budget: u32) -> Plan<NetGainPerMinute> {
    PlanBuilder::new(
        catalog(),
        ProgressState::ZERO,
        ProgressState::new(0.9, 0.9),
        Minutes(budget),
    )
    .build()
    .unwrap()
}

/// A bare entry for gap-analysis tests (the analyzer never touches the
/// catalog, only resolved states).
fn entry(start: (f32, f32), end: (f32, f32)) -> ScheduledActivity {
    ScheduledActivity {
        definition_id: ActivityId(0),
        start: ProgressState::new(start.0, start.1),
        end: ProgressState::new(end.0, end.1),
        duration: Minutes(10),
        starts_after: Minutes::ZERO,
    }
}

fn candidate(score: Option<f32>, flags: CandidateFlags) -> CandidateScore {
    CandidateScore::new(ActivityId(0), score, flags)
}

/// Per-dimension approximate equality for states built by f32 arithmetic
/// (exact `==` against a literal fails on sums like `0.4 + 0.3`).
fn assert_state_eq(actual: ProgressState, expected: ProgressState) {
    for (a, e) in actual.dims.iter().zip(expected.dims.iter()) {
        assert!(
            (a - e).abs() < 1e-6,
            "state {actual} differs from expected {expected}"
        );
    }
}

const FLAGS_NONE: CandidateFlags = CandidateFlags {
    exhausted: false,
    too_long: false,
    no_progress: false,
};
const FLAGS_NO_PROGRESS: CandidateFlags = CandidateFlags {
    exhausted: false,
    too_long: false,
    no_progress: true,
};

// ── Gap analysis ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod gap_analysis {
    use super::*;

    #[test]
    fn empty_plan_single_full_gap() {
        // Start (0,0), goal (0.9,0.9), threshold 0.1.
        let report = gaps::analyze(
            &[],
            ProgressState::ZERO,
            ProgressState::new(0.9, 0.9),
            0.1,
        );
        assert_eq!(report.hard_indices(), vec![0]);
        assert!((report.total_distance - 1.8).abs() < 1e-6);
    }

    #[test]
    fn distance_equal_to_threshold_is_not_hard() {
        // Strictly-exceeds rule: a 0.1 gap with threshold 0.1 is soft.
        let report = gaps::analyze(
            &[],
            ProgressState::ZERO,
            ProgressState::new(0.1, 0.0),
            0.1,
        );
        assert!(report.hard.is_empty());
        assert_eq!(report.total_distance, 0.0);
    }

    #[test]
    fn classifies_every_transition() {
        // (0,0) →[gap 0.2]→ e1 →[gap 0.2]→ e2 →[no gap]→ goal
        let seq = vec![entry((0.2, 0.0), (0.2, 0.0)), entry((0.4, 0.0), (0.4, 0.0))];
        let report = gaps::analyze(
            &seq,
            ProgressState::ZERO,
            ProgressState::new(0.4, 0.0),
            0.1,
        );
        assert_eq!(report.hard_indices(), vec![0, 1]);
        assert!((report.total_distance - 0.4).abs() < 1e-6);
    }

    #[test]
    fn worst_breaks_ties_toward_higher_index() {
        let seq = vec![entry((0.2, 0.0), (0.2, 0.0)), entry((0.4, 0.0), (0.4, 0.0))];
        let report = gaps::analyze(
            &seq,
            ProgressState::ZERO,
            ProgressState::new(0.4, 0.0),
            0.1,
        );
        // Both hard gaps measure 0.2; the later one must win.
        assert_eq!(report.worst().unwrap().index, 1);
    }

    #[test]
    fn worst_of_empty_report_is_none() {
        let report = gaps::analyze(&[], ProgressState::ZERO, ProgressState::ZERO, 0.1);
        assert!(report.worst().is_none());
    }
}

// ── Tie-break ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tie_break {
    use super::*;

    fn recommended_index(batch: &[CandidateScore]) -> Option<usize> {
        batch.iter().position(|c| c.recommended)
    }

    #[test]
    fn takeable_never_displaced_by_non_takeable() {
        // The non-takeable candidate has fewer flags and a huge score, and
        // still must not displace a takeable running best.
        let mut batch = vec![
            candidate(
                Some(0.1),
                CandidateFlags { exhausted: true, too_long: true, no_progress: false },
            ),
            candidate(Some(9.0), FLAGS_NO_PROGRESS),
        ];
        selector::mark_best(&mut batch);
        assert_eq!(recommended_index(&batch), Some(0));
    }

    #[test]
    fn takeable_displaces_non_takeable() {
        let mut batch = vec![
            candidate(Some(9.0), FLAGS_NO_PROGRESS),
            candidate(
                Some(0.01),
                CandidateFlags { exhausted: true, too_long: true, no_progress: false },
            ),
        ];
        selector::mark_best(&mut batch);
        assert_eq!(recommended_index(&batch), Some(1));
    }

    #[test]
    fn lower_flag_count_beats_higher_score() {
        let mut batch = vec![
            candidate(
                Some(10.0),
                CandidateFlags { exhausted: true, too_long: false, no_progress: false },
            ),
            candidate(Some(0.1), FLAGS_NONE),
        ];
        selector::mark_best(&mut batch);
        assert_eq!(recommended_index(&batch), Some(1));
    }

    #[test]
    fn equal_flags_higher_score_wins() {
        let mut batch = vec![
            candidate(Some(0.1), FLAGS_NONE),
            candidate(Some(0.5), FLAGS_NONE),
        ];
        selector::mark_best(&mut batch);
        assert_eq!(recommended_index(&batch), Some(1));
    }

    #[test]
    fn first_seen_wins_on_exact_tie() {
        let mut batch = vec![
            candidate(Some(0.5), FLAGS_NONE),
            candidate(Some(0.5), FLAGS_NONE),
            candidate(Some(0.5), FLAGS_NONE),
        ];
        selector::mark_best(&mut batch);
        assert_eq!(recommended_index(&batch), Some(0));
    }

    #[test]
    fn empty_batch_is_a_noop() {
        let mut batch: Vec<CandidateScore> = vec![];
        selector::mark_best(&mut batch);
        assert!(batch.is_empty());
    }

    #[test]
    fn deterministic_across_reruns() {
        let base = vec![
            candidate(Some(0.3), FLAGS_NONE),
            candidate(
                Some(0.9),
                CandidateFlags { exhausted: true, too_long: false, no_progress: false },
            ),
            candidate(Some(0.3), FLAGS_NONE),
            candidate(Some(0.1), FLAGS_NO_PROGRESS),
        ];
        let mut first = base.clone();
        selector::mark_best(&mut first);
        for _ in 0..10 {
            let mut again = base.clone();
            selector::mark_best(&mut again);
            assert_eq!(again, first);
        }
        assert_eq!(first.iter().filter(|c| c.recommended).count(), 1);
    }
}

// ── Plan mutations ────────────────────────────────────────────────────────────

#[cfg(test)]
mod plan_mutations {
    use super::*;

    fn assert_counters_match<E: crate::EfficiencyModel>(plan: &Plan<E>) {
        for (i, &count) in plan.counters().iter().enumerate() {
            let actual = plan
                .sequence()
                .iter()
                .filter(|e| e.definition_id.index() == i)
                .count() as u32;
            assert_eq!(count, actual, "counter {i} out of sync");
        }
    }

    fn assert_elapsed_matches<E: crate::EfficiencyModel>(plan: &Plan<E>) {
        let sum: Minutes = plan.sequence().iter().map(|e| e.duration).sum();
        assert_eq!(plan.total_time(), sum);
    }

    #[test]
    fn insert_then_remove_roundtrip() {
        // Budget 50, activity of 30'.
        let mut plan = plan_with_budget(50);
        plan.insert(ActivityId(0), 0).unwrap();
        assert_eq!(plan.total_time(), Minutes(30));
        assert_eq!(plan.sequence()[0].starts_after, Minutes::ZERO);
        assert_eq!(plan.counters(), &[1, 0, 0]);

        plan.remove(0).unwrap();
        assert_eq!(plan.total_time(), Minutes::ZERO);
        assert_eq!(plan.counters(), &[0, 0, 0]);
        assert_eq!(plan.reached(), plan.start());
    }

    #[test]
    fn insert_resolves_states_through_the_chain() {
        let mut plan = plan_with_budget(120);
        plan.insert(ActivityId(0), 0).unwrap(); // basics: (0,0) → (0.4,0.4)
        plan.insert(ActivityId(1), 1).unwrap(); // practice after it

        let seq = plan.sequence();
        assert_eq!(seq[0].start, ProgressState::ZERO);
        assert_state_eq(seq[0].end, ProgressState::new(0.4, 0.4));
        // practice's precondition (0.3,0.3) is already met by the arrival.
        assert_state_eq(seq[1].start, ProgressState::new(0.4, 0.4));
        assert_state_eq(seq[1].end, ProgressState::new(0.7, 0.7));
        assert_eq!(seq[1].starts_after, Minutes(30));
        assert_state_eq(plan.reached(), ProgressState::new(0.7, 0.7));
    }

    #[test]
    fn exchange_flips_two_entries() {
        let mut plan = plan_with_budget(120);
        plan.insert(ActivityId(0), 0).unwrap(); // basics 30'
        plan.insert(ActivityId(1), 1).unwrap(); // practice 20'

        plan.exchange(0, 2).unwrap(); // move entry 0 past the end

        let seq = plan.sequence();
        assert_eq!(seq[0].definition_id, ActivityId(1));
        assert_eq!(seq[1].definition_id, ActivityId(0));
        // The entry previously at index 1 now starts at offset 0, and both
        // entries' states are re-resolved for the new order.
        assert_eq!(seq[0].starts_after, Minutes::ZERO);
        assert_state_eq(seq[0].start, ProgressState::new(0.3, 0.3)); // lifted to precondition
        assert_state_eq(seq[0].end, ProgressState::new(0.6, 0.6));
        assert_eq!(seq[1].starts_after, Minutes(20));
        assert_state_eq(seq[1].start, ProgressState::new(0.6, 0.6));
        assert_state_eq(seq[1].end, ProgressState::new(1.0, 1.0)); // clamped

        assert_elapsed_matches(&plan);
        assert_counters_match(&plan);
    }

    #[test]
    fn exchange_preserves_entry_identity() {
        let mut plan = plan_with_budget(120);
        plan.insert(ActivityId(0), 0).unwrap();
        plan.insert(ActivityId(1), 1).unwrap();
        let moved_id = plan.sequence()[0].definition_id;

        plan.exchange(0, 2).unwrap();
        assert_eq!(plan.sequence()[1].definition_id, moved_id);
        assert_counters_match(&plan);
    }

    #[test]
    fn reset_clears_everything() {
        let mut plan = plan_with_budget(120);
        plan.insert(ActivityId(0), 0).unwrap();
        plan.insert(ActivityId(1), 1).unwrap();

        plan.reset().unwrap();
        assert!(plan.sequence().is_empty());
        assert_eq!(plan.counters(), &[0, 0, 0]);
        assert_eq!(plan.total_time(), Minutes::ZERO);
        assert_eq!(plan.reached(), plan.start());
        assert_eq!(plan.hard_gap_indices(), vec![0]);
    }

    #[test]
    fn invariants_hold_across_a_mutation_storm() {
        let mut plan = plan_with_budget(500);
        plan.insert(ActivityId(0), 0).unwrap();
        plan.insert(ActivityId(1), 0).unwrap();
        plan.insert(ActivityId(1), 2).unwrap();
        plan.exchange(2, 0).unwrap();
        plan.remove(1).unwrap();
        plan.insert(ActivityId(2), 2).unwrap();

        assert_elapsed_matches(&plan);
        assert_counters_match(&plan);
    }

    #[test]
    fn restructure_is_idempotent() {
        let mut plan = plan_with_budget(120);
        plan.insert(ActivityId(0), 0).unwrap();
        plan.insert(ActivityId(1), 1).unwrap();
        plan.set_focus(Some(2)).unwrap();

        let seq_before = plan.sequence().to_vec();
        let candidates_before = plan.candidates().to_vec();
        let summary_before = plan.summary();

        plan.restructure().unwrap();

        assert_eq!(plan.sequence(), seq_before.as_slice());
        assert_eq!(plan.candidates(), candidates_before.as_slice());
        assert_eq!(plan.summary(), summary_before);
    }

    #[test]
    fn failed_mutations_leave_the_plan_untouched() {
        let mut plan = plan_with_budget(120);
        plan.insert(ActivityId(0), 0).unwrap();
        let before = plan.summary();

        assert!(matches!(
            plan.insert(ActivityId(0), 5),
            Err(PlanError::InvalidIndex { index: 5, len: 1 })
        ));
        assert!(matches!(
            plan.insert(ActivityId(9), 0),
            Err(PlanError::UnknownDefinition(_))
        ));
        assert!(matches!(plan.remove(3), Err(PlanError::InvalidIndex { .. })));
        assert!(matches!(plan.exchange(4, 0), Err(PlanError::InvalidIndex { .. })));
        assert!(matches!(plan.exchange(0, 4), Err(PlanError::InvalidIndex { .. })));

        assert_eq!(plan.summary(), before);
        assert_eq!(plan.counters(), &[1, 0, 0]);
    }
}

// ── Duration overrides ────────────────────────────────────────────────────────

#[cfg(test)]
mod durations {
    use super::*;

    fn catalog_with_adjustable() -> Arc<ActivityCatalog> {
        let reading = ActivityDefinition {
            id: ActivityId(1),
            name: "reading".to_string(),
            precondition: ProgressState::ZERO,
            profile: EffectProfile {
                low: Effect::new(0.05, 0.05),
                high: Effect::new(0.2, 0.2),
                low_minutes: Minutes(10),
                high_minutes: Minutes(40),
            },
            min_minutes: Minutes(10),
            default_minutes: Minutes(20),
            max_minutes: Minutes(40),
            adjustable: true,
            max_repetitions: 5,
            plane: PlaneId(1),
        };
        Arc::new(
            ActivityCatalog::new(vec![
                fixed_def(0, "basics", (0.0, 0.0), (0.4, 0.4), 30, 2),
                reading,
            ])
            .unwrap(),
        )
    }

    #[test]
    fn set_duration_rescales_effect_and_time() {
        let mut plan = PlanBuilder::new(
            catalog_with_adjustable(),
            ProgressState::ZERO,
            ProgressState::new(0.9, 0.9),
            Minutes(120),
        )
        .build()
        .unwrap();

        plan.insert(ActivityId(1), 0).unwrap();
        assert_eq!(plan.total_time(), Minutes(20));

        plan.set_duration(0, Minutes(40)).unwrap();
        assert_eq!(plan.total_time(), Minutes(40));
        // At the top endpoint the full high effect applies.
        assert_state_eq(plan.sequence()[0].end, ProgressState::new(0.2, 0.2));
    }

    #[test]
    fn sticky_duration_survives_restructure() {
        let mut plan = PlanBuilder::new(
            catalog_with_adjustable(),
            ProgressState::ZERO,
            ProgressState::new(0.9, 0.9),
            Minutes(120),
        )
        .build()
        .unwrap();

        plan.insert(ActivityId(1), 0).unwrap();
        plan.set_duration(0, Minutes(40)).unwrap();
        // Inserting before it restructures everything; the override stays.
        plan.insert(ActivityId(0), 0).unwrap();
        assert_eq!(plan.sequence()[1].duration, Minutes(40));
        assert_eq!(plan.total_time(), Minutes(70));
    }

    #[test]
    fn fixed_duration_rejects_override() {
        let mut plan = PlanBuilder::new(
            catalog_with_adjustable(),
            ProgressState::ZERO,
            ProgressState::new(0.9, 0.9),
            Minutes(120),
        )
        .build()
        .unwrap();

        plan.insert(ActivityId(0), 0).unwrap();
        assert!(matches!(
            plan.set_duration(0, Minutes(10)),
            Err(PlanError::DurationFixed(_))
        ));
    }

    #[test]
    fn out_of_range_duration_rejected() {
        let mut plan = PlanBuilder::new(
            catalog_with_adjustable(),
            ProgressState::ZERO,
            ProgressState::new(0.9, 0.9),
            Minutes(120),
        )
        .build()
        .unwrap();

        plan.insert(ActivityId(1), 0).unwrap();
        assert!(matches!(
            plan.set_duration(0, Minutes(5)),
            Err(PlanError::DurationOutOfRange { .. })
        ));
        assert_eq!(plan.sequence()[0].duration, Minutes(20));
    }
}

// ── Focus & candidate evaluation ──────────────────────────────────────────────

#[cfg(test)]
mod focus {
    use super::*;

    #[test]
    fn global_mode_has_flags_but_no_scores() {
        let plan = plan_with_budget(50);
        let batch = plan.candidates();
        assert_eq!(batch.len(), 3);
        assert!(batch.iter().all(|c| c.score.is_none()));
        assert!(batch.iter().all(|c| !c.recommended));
    }

    #[test]
    fn too_long_flag_tracks_remaining_budget() {
        let mut plan = plan_with_budget(50);
        plan.insert(ActivityId(0), 0).unwrap(); // 30' spent, 20' left
        let batch = plan.candidates();
        assert!(!batch[1].flags.too_long); // practice, 20'
        assert!(batch[0].flags.too_long); // basics, 30'
        assert!(batch[2].flags.too_long); // project, 25'
    }

    #[test]
    fn focused_mode_scores_and_recommends() {
        let mut plan = plan_with_budget(200);
        plan.set_focus(Some(0)).unwrap();
        let batch = plan.candidates();
        assert!(batch.iter().all(|c| c.score.is_some()));
        assert_eq!(batch.iter().filter(|c| c.recommended).count(), 1);
    }

    #[test]
    fn exhausted_candidate_is_not_recommended() {
        // project is capped at 1 repetition.
        let mut plan = plan_with_budget(200);
        plan.insert(ActivityId(2), 0).unwrap();
        plan.set_focus(Some(0)).unwrap(); // the gap before project

        let batch = plan.candidates();
        assert!(batch[2].flags.exhausted);
        assert!(!batch[2].recommended);
        // A non-exhausted candidate with positive score exists and wins.
        let winner = batch.iter().find(|c| c.recommended).unwrap();
        assert_ne!(winner.definition_id, ActivityId(2));
        assert!(winner.score.unwrap() > 0.0);
    }

    #[test]
    fn focus_survives_mutations() {
        let mut plan = plan_with_budget(200);
        plan.set_focus(Some(0)).unwrap();
        plan.insert(ActivityId(0), 0).unwrap();
        assert_eq!(plan.focus(), Some(0));
        // Still in focused mode: scores present.
        assert!(plan.candidates().iter().all(|c| c.score.is_some()));
    }

    #[test]
    fn focus_clamped_when_sequence_shrinks() {
        let mut plan = plan_with_budget(200);
        plan.insert(ActivityId(0), 0).unwrap();
        plan.set_focus(Some(1)).unwrap();
        plan.remove(0).unwrap();
        assert_eq!(plan.focus(), Some(0));
    }

    #[test]
    fn out_of_range_focus_rejected() {
        let mut plan = plan_with_budget(200);
        assert!(matches!(
            plan.set_focus(Some(1)),
            Err(PlanError::InvalidIndex { index: 1, len: 0 })
        ));
        assert_eq!(plan.focus(), None);
    }

    #[test]
    fn focusing_over_empty_catalog_errors() {
        let empty = Arc::new(ActivityCatalog::new(vec![]).unwrap());
        let mut plan = PlanBuilder::new(
            empty,
            ProgressState::ZERO,
            ProgressState::new(0.9, 0.9),
            Minutes(60),
        )
        .build()
        .unwrap();
        assert!(matches!(plan.set_focus(Some(0)), Err(PlanError::EmptyCatalog)));
        assert_eq!(plan.focus(), None);
    }

    #[test]
    fn unfocusing_returns_to_global_mode() {
        let mut plan = plan_with_budget(200);
        plan.set_focus(Some(0)).unwrap();
        plan.set_focus(None).unwrap();
        assert!(plan.candidates().iter().all(|c| c.score.is_none()));
    }

    #[test]
    fn is_focused_gap_hard() {
        let mut plan = plan_with_budget(200);
        assert!(!plan.is_focused_gap_hard());
        plan.set_focus(Some(0)).unwrap();
        assert!(plan.is_focused_gap_hard()); // the full start→goal gap
    }
}

// ── Auto-fill ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod auto_fill {
    use super::*;

    #[test]
    fn fills_until_no_hard_gap_remains() {
        let mut plan = plan_with_budget(90);
        plan.auto_fill_worst_gap().unwrap();
        plan.auto_fill_worst_gap().unwrap();
        plan.auto_fill_worst_gap().unwrap();
        assert!(matches!(plan.auto_fill_worst_gap(), Err(PlanError::NoHardGap)));

        assert_eq!(plan.hard_gap_count(), 0);
        assert_eq!(plan.reached().forward_distance(plan.goal()), 0.0);
        assert!(plan.total_time() <= plan.time_budget());
    }

    #[test]
    fn splitting_a_gap_never_worsens_it() {
        // Gap monotonicity: after filling, the two sub-gaps flanking the
        // inserted entry sum to less than the original undivided distance.
        let mut plan = plan_with_budget(90);
        let original = plan.remaining_gap_distance();
        plan.auto_fill_worst_gap().unwrap();

        let gap = plan.focus().unwrap();
        let inserted = &plan.sequence()[gap];
        let before = if gap == 0 {
            plan.start()
        } else {
            plan.sequence()[gap - 1].end
        };
        let after = match plan.sequence().get(gap + 1) {
            Some(next) => next.start,
            None => plan.goal(),
        };
        let split_sum =
            before.forward_distance(inserted.start) + inserted.end.forward_distance(after);
        assert!(split_sum < original);
    }

    #[test]
    fn focused_fill_requires_a_focus() {
        let mut plan = plan_with_budget(90);
        assert!(matches!(plan.auto_fill_focused_gap(), Err(PlanError::NoFocus)));
    }

    #[test]
    fn focused_fill_inserts_the_recommended_candidate() {
        let mut plan = plan_with_budget(200);
        plan.set_focus(Some(0)).unwrap();
        let recommended = plan
            .candidates()
            .iter()
            .find(|c| c.recommended)
            .unwrap()
            .definition_id;

        plan.auto_fill_focused_gap().unwrap();
        assert_eq!(plan.sequence()[0].definition_id, recommended);
    }

    #[test]
    fn worst_gap_fill_is_deterministic() {
        let run = || {
            let mut plan = plan_with_budget(90);
            plan.auto_fill_worst_gap().unwrap();
            plan.auto_fill_worst_gap().unwrap();
            plan.sequence()
                .iter()
                .map(|e| e.definition_id)
                .collect::<Vec<_>>()
        };
        let first = run();
        for _ in 0..5 {
            assert_eq!(run(), first);
        }
    }
}

// ── Summaries ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod summaries {
    use super::*;

    #[test]
    fn summary_reflects_plan_state() {
        let mut plan = plan_with_budget(120);
        plan.insert(ActivityId(0), 0).unwrap();
        plan.insert(ActivityId(1), 1).unwrap();

        let s = plan.summary();
        assert_eq!(s.activities.len(), 2);
        assert_eq!(s.activities[0].name, "basics");
        assert_eq!(s.activities[1].starts_after, Minutes(30));
        assert_eq!(s.total_time, Minutes(50));
        assert_eq!(s.time_budget, Minutes(120));
        assert_eq!(s.hard_gap_count, s.hard_gap_indices.len());
    }

    #[test]
    fn views_resolve_through_the_catalog() {
        let mut plan = plan_with_budget(120);
        plan.insert(ActivityId(1), 0).unwrap();

        let summary = plan.summary();
        assert_eq!(summary.activities[0].name, "practice");
        assert_eq!(summary.activities[0].plane, PlaneId(0));

        let names: Vec<String> = plan.candidate_views().into_iter().map(|v| v.name).collect();
        assert_eq!(names, ["basics", "practice", "project"]);
    }

    #[test]
    fn candidate_views_carry_recommendation() {
        let mut plan = plan_with_budget(200);
        plan.set_focus(Some(0)).unwrap();
        let views = plan.candidate_views();
        assert_eq!(views.len(), 3);
        assert_eq!(views.iter().filter(|v| v.is_recommended).count(), 1);
        assert!(views.iter().all(|v| !v.name.is_empty()));
    }

    #[test]
    fn summary_serializes_to_json() {
        let plan = plan_with_budget(60);
        let json = serde_json::to_string(&plan.summary()).unwrap();
        assert!(json.contains("\"hard_gap_count\":1"));
    }
}
