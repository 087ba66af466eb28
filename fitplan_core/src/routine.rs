//! Routine assembly: eligibility filter -> split planner -> prescriptions.
//!
//! `generate_routine` is the single entry point of the generation engine.
//! It always succeeds: empty eligible pools or small day counts degrade to
//! smaller or emptier plans rather than erroring.

use crate::eligibility::eligible_exercises;
use crate::prescription::assign_prescriptions;
use crate::split::plan_split;
use crate::{Catalog, UserProfile, WorkoutRoutine};
use chrono::Utc;
use rand::Rng;
use uuid::Uuid;

/// Generate a personalized weekly routine for a profile
///
/// Side-effect free apart from the fresh id and timestamp; the random source
/// is injected and only consumed by the full-body split path, so every other
/// split is structurally identical across calls with identical inputs.
pub fn generate_routine<R: Rng>(
    catalog: &Catalog,
    profile: &UserProfile,
    rng: &mut R,
) -> WorkoutRoutine {
    let info = &profile.personal_info;

    let pool = eligible_exercises(
        &catalog.exercises,
        profile.location,
        profile.level,
        &info.injuries,
    );

    let planned = plan_split(&pool, info.training_days, profile.level, rng);
    let days = assign_prescriptions(&planned, profile.goal, profile.level);

    let routine = WorkoutRoutine {
        id: Uuid::new_v4(),
        name: format!("Personalized plan - {}", profile.goal),
        description: format!(
            "{}x per week routine, {} level, focused on {}",
            info.training_days, profile.level, profile.goal
        ),
        days,
        created_at: Utc::now(),
    };

    tracing::info!(
        "Generated routine {} with {} day(s) for goal {}",
        routine.id,
        routine.days.len(),
        profile.goal
    );

    routine
}
