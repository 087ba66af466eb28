//! Eligibility filtering: narrows the catalog to exercises one person can use.
//!
//! Three rules are applied together:
//! - Location match (requested location, exercise location, or either "both")
//! - Level match (higher self-reported level unlocks easier exercises)
//! - Injury exclusion via a fixed keyword-to-muscle-group table

use crate::{Difficulty, Exercise, Location, MuscleGroup};

/// Injury keyword table: any injury tag containing the keyword excludes the
/// whole muscle group. A coarse, best-effort safety heuristic, not a medical
/// judgment.
const INJURY_KEYWORDS: [(&str, MuscleGroup); 3] = [
    ("knee", MuscleGroup::Legs),
    ("shoulder", MuscleGroup::Shoulders),
    ("back", MuscleGroup::Back),
];

/// Whether an exercise is available at the requested location
fn matches_location(exercise: &Exercise, requested: Location) -> bool {
    requested == Location::Both
        || exercise.location == requested
        || exercise.location == Location::Both
}

/// Whether an exercise's difficulty fits the requested level
///
/// Monotonic: beginner only unlocks beginner, intermediate adds beginner,
/// advanced unlocks everything.
fn matches_level(exercise: &Exercise, requested: Difficulty) -> bool {
    exercise.difficulty == requested
        || match requested {
            Difficulty::Beginner => false,
            Difficulty::Intermediate => exercise.difficulty == Difficulty::Beginner,
            Difficulty::Advanced => matches!(
                exercise.difficulty,
                Difficulty::Beginner | Difficulty::Intermediate
            ),
        }
}

/// Muscle groups implicated by the declared injuries
fn excluded_groups(injuries: &[String]) -> Vec<MuscleGroup> {
    let mut groups = Vec::new();
    for injury in injuries {
        let lower = injury.to_lowercase();
        for (keyword, group) in INJURY_KEYWORDS {
            if lower.contains(keyword) && !groups.contains(&group) {
                groups.push(group);
            }
        }
    }
    groups
}

/// The subset of the catalog usable by a specific person, in catalog order
///
/// May be empty; callers degrade to shorter or empty days rather than erroring.
pub fn eligible_exercises<'a>(
    exercises: &'a [Exercise],
    location: Location,
    level: Difficulty,
    injuries: &[String],
) -> Vec<&'a Exercise> {
    let excluded = excluded_groups(injuries);

    let pool: Vec<&Exercise> = exercises
        .iter()
        .filter(|ex| {
            matches_location(ex, location)
                && matches_level(ex, level)
                && !excluded.contains(&ex.muscle_group)
        })
        .collect();

    tracing::debug!(
        "Eligible pool: {} of {} exercises (location {}, level {}, {} excluded group(s))",
        pool.len(),
        exercises.len(),
        location,
        level,
        excluded.len()
    );

    pool
}
