//! lesson — end-to-end demo of the lp lesson-planning engine.
//!
//! Loads a four-activity catalog from an embedded CSV, builds an empty plan
//! for a 90-minute session, lets the engine auto-fill the worst knowledge gap
//! until none is left, then prints the resulting timeline and candidate
//! batch and writes a JSON snapshot plus a CSV timeline to `output/lesson/`.

use std::io::Cursor;
use std::path::Path;
use std::sync::Arc;

use anyhow::Result;

use lp_catalog::load_catalog_reader;
use lp_core::{Minutes, PlaneRegistry, ProgressState};
use lp_engine::{PlanBuilder, PlanError};
use lp_output::{PlanSnapshot, save_json, save_timeline_csv};

// ── Constants ─────────────────────────────────────────────────────────────────

const TIME_BUDGET_MINUTES: u32 = 90;
const GOAL: (f32, f32) = (0.9, 0.9);
const MAX_AUTO_STEPS: usize = 8;

// ── Catalog CSV ───────────────────────────────────────────────────────────────

// Fixed-duration rows leave default_minutes empty; adjustable rows carry a
// min/max effect pair plus a default duration.
const CATALOG_CSV: &str = "\
name,precondition,min_effect,min_minutes,max_effect,max_minutes,default_minutes,max_repetitions,plane\n\
warmup,0;0,,,0.15;0.1,10,,1,class\n\
reading,0;0,0.1;0.05,10,0.35;0.2,30,20,3,individual\n\
group_exercise,0.2;0.1,,,0.25;0.35,25,,2,team\n\
presentation,0.5;0.5,,,0.2;0.3,15,,1,class\n\
";

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    println!("=== lesson — lp planning engine demo ===");
    println!();

    // 1. Load the catalog against the standard classroom planes.
    let planes = PlaneRegistry::classroom();
    let catalog = Arc::new(load_catalog_reader(Cursor::new(CATALOG_CSV), &planes)?);
    println!("Catalog: {} activities", catalog.len());
    for def in catalog.iter() {
        println!(
            "  {:<16} {:>4}  plane={}",
            def.name,
            def.default_minutes,
            planes.name_of(def.plane).unwrap_or("?"),
        );
    }
    println!();

    // 2. Empty plan: start from zero knowledge, aim for the session goal.
    let start = ProgressState::ZERO;
    let goal = ProgressState::new(GOAL.0, GOAL.1);
    let mut plan = PlanBuilder::new(
        Arc::clone(&catalog),
        start,
        goal,
        Minutes(TIME_BUDGET_MINUTES),
    )
    .build()?;
    println!(
        "Session: {} → {}, budget {}",
        start,
        goal,
        plan.time_budget()
    );

    // 3. Auto-fill the worst gap until none crosses the hardness threshold.
    for step in 1..=MAX_AUTO_STEPS {
        match plan.auto_fill_worst_gap() {
            Ok(()) => {
                let summary = plan.summary();
                println!(
                    "  step {step}: {} entries, {} scheduled, {} hard gap(s) left",
                    summary.activities.len(),
                    summary.total_time,
                    summary.hard_gap_count,
                );
            }
            Err(PlanError::NoHardGap) => {
                println!("  no hard gaps left after {} step(s)", step - 1);
                break;
            }
            Err(e) => return Err(e.into()),
        }
    }
    println!();

    // 4. Timeline table.
    let summary = plan.summary();
    println!("{:<16} {:>8} {:>10}  {:<10}", "Activity", "After", "Duration", "Plane");
    println!("{}", "-".repeat(48));
    for view in &summary.activities {
        println!(
            "{:<16} {:>8} {:>10}  {:<10}",
            view.name,
            view.starts_after,
            view.duration,
            planes.name_of(view.plane).unwrap_or("?"),
        );
    }
    println!(
        "Total {} of {} budget, reached {}",
        summary.total_time,
        summary.time_budget,
        plan.reached()
    );
    println!();

    // 5. Candidate batch for the focused gap (auto-fill leaves one focused).
    if plan.focus().is_some() {
        println!("{:<16} {:>9}  {:<12} {}", "Candidate", "Score", "Flags", "Best");
        println!("{}", "-".repeat(48));
        for cand in plan.candidate_views() {
            let mut flags = Vec::new();
            if cand.flags.exhausted {
                flags.push("exhausted");
            }
            if cand.flags.too_long {
                flags.push("too_long");
            }
            if cand.flags.no_progress {
                flags.push("no_progress");
            }
            println!(
                "{:<16} {:>9}  {:<12} {}",
                cand.name,
                cand.score.map_or("-".to_string(), |s| format!("{s:.4}")),
                flags.join(","),
                if cand.is_recommended { "*" } else { "" },
            );
        }
        println!();
    }

    // 6. Persist: JSON snapshot (round-trippable) + CSV timeline (export).
    std::fs::create_dir_all("output/lesson")?;
    let snapshot = PlanSnapshot::of(&plan);
    let json_path = save_json(Path::new("output/lesson/plan"), &snapshot)?;
    save_timeline_csv(Path::new("output/lesson/timeline.csv"), &plan, &planes)?;
    println!("Wrote {} and output/lesson/timeline.csv", json_path.display());

    Ok(())
}
