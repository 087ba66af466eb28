//! Prescription assignment: sets, reps and rest per chosen exercise.
//!
//! An explicit lookup over the closed (goal, level) set rather than a
//! computed formula, so identical inputs always produce identical output
//! and the compiler checks exhaustiveness.

use crate::split::PlannedDay;
use crate::{Difficulty, ExercisePrescription, Goal, WorkoutDay};

/// Note attached to the body-part split's recovery day
const LIGHT_DAY_NOTE: &str = "lighter session for active recovery";

/// The numeric policy for one (goal, level) combination
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Prescription {
    pub sets: u8,
    pub reps: &'static str,
    pub rest: &'static str,
}

/// Look up the prescription for a goal and level
///
/// Four sets only for muscle gain past the beginner band; fat loss trades
/// rest and load for volume.
pub fn prescription_for(goal: Goal, level: Difficulty) -> Prescription {
    let sets = match (goal, level) {
        (Goal::MuscleGain, Difficulty::Intermediate | Difficulty::Advanced) => 4,
        (Goal::MuscleGain, Difficulty::Beginner)
        | (Goal::FatLoss, _)
        | (Goal::Maintenance, _) => 3,
    };

    let reps = match goal {
        Goal::FatLoss => "12-15",
        Goal::MuscleGain => "8-12",
        Goal::Maintenance => "10-12",
    };

    let rest = match goal {
        Goal::FatLoss => "45s",
        Goal::MuscleGain | Goal::Maintenance => "60-90s",
    };

    Prescription { sets, reps, rest }
}

/// Convert planned days into workout days with full prescriptions
pub fn assign_prescriptions(days: &[PlannedDay<'_>], goal: Goal, level: Difficulty) -> Vec<WorkoutDay> {
    let prescription = prescription_for(goal, level);

    days.iter()
        .map(|planned| WorkoutDay {
            day: planned.day.clone(),
            focus: planned.focus.clone(),
            exercises: planned
                .exercises
                .iter()
                .map(|ex| ExercisePrescription {
                    exercise_id: ex.id.clone(),
                    sets: prescription.sets,
                    reps: prescription.reps.into(),
                    rest: prescription.rest.into(),
                    note: planned.light.then(|| LIGHT_DAY_NOTE.into()),
                })
                .collect(),
        })
        .collect()
}
