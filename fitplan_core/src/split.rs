//! Split planning: maps requested training days to a weekly split and picks
//! the exercises for each day from the eligible pool.
//!
//! Thresholds are fixed:
//! - <=2 days: full-body (randomized picks, one per muscle group)
//! - 3 days: A/B/C split, first-N eligible per muscle in catalog order
//! - 4 days: upper/lower, always exactly 4 days
//! - >=5 days: body-part split capped at 6 weekday-labeled days

use crate::{Difficulty, Exercise, MuscleGroup};
use rand::Rng;

/// A day planned by the split, before prescriptions are assigned
#[derive(Clone, Debug)]
pub struct PlannedDay<'a> {
    pub day: String,
    pub focus: String,
    pub exercises: Vec<&'a Exercise>,
    /// True for the body-part split's light full-body day
    pub light: bool,
}

/// Plan the weekly split for an eligible pool
///
/// Pure function of its inputs apart from the injected random source, which
/// only the full-body path consumes. Empty pools degrade to empty days.
pub fn plan_split<'a, R: Rng>(
    pool: &[&'a Exercise],
    training_days: u8,
    level: Difficulty,
    rng: &mut R,
) -> Vec<PlannedDay<'a>> {
    let days = match training_days {
        0..=2 => full_body_split(pool, training_days, level, rng),
        3 => abc_split(pool),
        4 => upper_lower_split(pool, level),
        _ => body_part_split(pool, training_days, level),
    };

    tracing::info!(
        "Planned {} day(s) for {} requested training day(s)",
        days.len(),
        training_days
    );

    days
}

fn by_group<'a>(pool: &[&'a Exercise], group: MuscleGroup) -> Vec<&'a Exercise> {
    pool.iter()
        .filter(|ex| ex.muscle_group == group)
        .copied()
        .collect()
}

/// First `count` eligible exercises for a muscle group, in catalog order
fn first_n<'a>(pool: &[&'a Exercise], group: MuscleGroup, count: usize) -> Vec<&'a Exercise> {
    by_group(pool, group).into_iter().take(count).collect()
}

/// Out-of-range tolerant slice of an exercise list
fn slice<'a>(list: &[&'a Exercise], start: usize, end: usize) -> Vec<&'a Exercise> {
    if start >= list.len() {
        return Vec::new();
    }
    list[start..end.min(list.len())].to_vec()
}

/// Full-body split: one random eligible exercise per muscle group per day
///
/// Selection is uniform per group with no repeat-avoidance across days.
fn full_body_split<'a, R: Rng>(
    pool: &[&'a Exercise],
    days: u8,
    level: Difficulty,
    rng: &mut R,
) -> Vec<PlannedDay<'a>> {
    let cap = if level == Difficulty::Beginner { 6 } else { 8 };

    (0..days)
        .map(|i| {
            let mut exercises = Vec::new();
            for group in MuscleGroup::ALL {
                let candidates = by_group(pool, group);
                if !candidates.is_empty() {
                    exercises.push(candidates[rng.gen_range(0..candidates.len())]);
                }
            }
            exercises.truncate(cap);

            PlannedDay {
                day: format!("Day {}", i + 1),
                focus: "Full Body".into(),
                exercises,
                light: false,
            }
        })
        .collect()
}

/// Three-way split over fixed muscle-group day definitions
fn abc_split<'a>(pool: &[&'a Exercise]) -> Vec<PlannedDay<'a>> {
    let days: [(&str, &str, &[MuscleGroup]); 3] = [
        (
            "A",
            "Chest, Shoulders and Triceps",
            &[MuscleGroup::Chest, MuscleGroup::Shoulders, MuscleGroup::Triceps],
        ),
        ("B", "Back and Biceps", &[MuscleGroup::Back, MuscleGroup::Biceps]),
        (
            "C",
            "Legs, Glutes and Abdomen",
            &[MuscleGroup::Legs, MuscleGroup::Glutes, MuscleGroup::Abdomen],
        ),
    ];

    days.into_iter()
        .map(|(day, focus, groups)| {
            let exercises = groups
                .iter()
                .flat_map(|&group| {
                    // The big compound groups get three picks, the rest two
                    let count = match group {
                        MuscleGroup::Chest | MuscleGroup::Back | MuscleGroup::Legs => 3,
                        _ => 2,
                    };
                    first_n(pool, group, count)
                })
                .collect();

            PlannedDay {
                day: day.into(),
                focus: focus.into(),
                exercises,
                light: false,
            }
        })
        .collect()
}

const UPPER_GROUPS: [MuscleGroup; 5] = [
    MuscleGroup::Chest,
    MuscleGroup::Back,
    MuscleGroup::Shoulders,
    MuscleGroup::Biceps,
    MuscleGroup::Triceps,
];

const LOWER_GROUPS: [MuscleGroup; 3] = [MuscleGroup::Legs, MuscleGroup::Glutes, MuscleGroup::Abdomen];

/// Upper/lower split: always exactly 4 days regardless of the request
///
/// Days C and D continue from fixed offsets into the upper/lower pools so the
/// second half of the week covers different exercises than the first.
fn upper_lower_split<'a>(pool: &[&'a Exercise], level: Difficulty) -> Vec<PlannedDay<'a>> {
    let advanced = level == Difficulty::Advanced;

    let upper: Vec<&Exercise> = pool
        .iter()
        .filter(|ex| UPPER_GROUPS.contains(&ex.muscle_group))
        .copied()
        .collect();
    let lower: Vec<&Exercise> = pool
        .iter()
        .filter(|ex| LOWER_GROUPS.contains(&ex.muscle_group))
        .copied()
        .collect();

    let plan = [
        ("A", "Upper Body", slice(&upper, 0, if advanced { 8 } else { 6 })),
        ("B", "Lower Body", slice(&lower, 0, if advanced { 7 } else { 5 })),
        ("C", "Upper Body", slice(&upper, 6, if advanced { 14 } else { 12 })),
        ("D", "Lower Body", slice(&lower, 5, if advanced { 12 } else { 10 })),
    ];

    plan.into_iter()
        .map(|(day, focus, exercises)| PlannedDay {
            day: day.into(),
            focus: focus.into(),
            exercises,
            light: false,
        })
        .collect()
}

/// Body-part ("bro") split: fixed weekday table, capped at six days
///
/// Requested days beyond six are silently dropped.
fn body_part_split<'a>(
    pool: &[&'a Exercise],
    training_days: u8,
    level: Difficulty,
) -> Vec<PlannedDay<'a>> {
    let per_muscle = if level == Difficulty::Advanced { 5 } else { 4 };

    let week: [(&str, &str, &[MuscleGroup], bool); 6] = [
        ("Monday", "Chest", &[MuscleGroup::Chest], false),
        ("Tuesday", "Back", &[MuscleGroup::Back], false),
        ("Wednesday", "Shoulders", &[MuscleGroup::Shoulders], false),
        ("Thursday", "Legs", &[MuscleGroup::Legs, MuscleGroup::Glutes], false),
        (
            "Friday",
            "Arms and Abs",
            &[MuscleGroup::Biceps, MuscleGroup::Triceps, MuscleGroup::Abdomen],
            false,
        ),
        (
            "Saturday",
            "Light Full Body",
            &[MuscleGroup::Chest, MuscleGroup::Back, MuscleGroup::Legs],
            true,
        ),
    ];

    let emitted = (training_days as usize).min(week.len());

    week.into_iter()
        .take(emitted)
        .map(|(day, focus, groups, light)| {
            let exercises = groups
                .iter()
                .flat_map(|&group| first_n(pool, group, per_muscle))
                .collect();

            PlannedDay {
                day: day.into(),
                focus: focus.into(),
                exercises,
                light,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::build_default_catalog;
    use crate::eligibility::eligible_exercises;
    use crate::Location;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn pool(catalog: &crate::Catalog, level: Difficulty) -> Vec<&Exercise> {
        eligible_exercises(&catalog.exercises, Location::Both, level, &[])
    }

    #[test]
    fn test_full_body_covers_all_groups_before_cap() {
        let catalog = build_default_catalog();
        let pool = pool(&catalog, Difficulty::Advanced);
        let mut rng = StdRng::seed_from_u64(7);

        let days = plan_split(&pool, 2, Difficulty::Advanced, &mut rng);
        assert_eq!(days.len(), 2);
        for day in &days {
            assert_eq!(day.focus, "Full Body");
            assert_eq!(day.exercises.len(), 8);
            // One pick per muscle group
            for group in MuscleGroup::ALL {
                assert_eq!(
                    day.exercises
                        .iter()
                        .filter(|ex| ex.muscle_group == group)
                        .count(),
                    1
                );
            }
        }
    }

    #[test]
    fn test_full_body_beginner_capped_at_six() {
        let catalog = build_default_catalog();
        let pool = pool(&catalog, Difficulty::Beginner);
        let mut rng = StdRng::seed_from_u64(7);

        let days = plan_split(&pool, 1, Difficulty::Beginner, &mut rng);
        assert_eq!(days.len(), 1);
        assert!(days[0].exercises.len() <= 6);
    }

    #[test]
    fn test_full_body_same_seed_same_structure() {
        let catalog = build_default_catalog();
        let pool = pool(&catalog, Difficulty::Intermediate);

        let mut rng_a = StdRng::seed_from_u64(42);
        let mut rng_b = StdRng::seed_from_u64(42);
        let a = plan_split(&pool, 2, Difficulty::Intermediate, &mut rng_a);
        let b = plan_split(&pool, 2, Difficulty::Intermediate, &mut rng_b);

        let ids = |days: &[PlannedDay]| -> Vec<String> {
            days.iter()
                .flat_map(|d| d.exercises.iter().map(|ex| ex.id.clone()))
                .collect()
        };
        assert_eq!(ids(&a), ids(&b));
    }

    #[test]
    fn test_abc_split_fixed_days_and_focuses() {
        let catalog = build_default_catalog();
        let pool = pool(&catalog, Difficulty::Advanced);
        let mut rng = StdRng::seed_from_u64(0);

        let days = plan_split(&pool, 3, Difficulty::Advanced, &mut rng);
        assert_eq!(days.len(), 3);
        assert_eq!(days[0].day, "A");
        assert_eq!(days[0].focus, "Chest, Shoulders and Triceps");
        assert_eq!(days[1].day, "B");
        assert_eq!(days[1].focus, "Back and Biceps");
        assert_eq!(days[2].day, "C");
        assert_eq!(days[2].focus, "Legs, Glutes and Abdomen");

        // Chest gets 3 picks, shoulders and triceps 2 each
        assert_eq!(days[0].exercises.len(), 3 + 2 + 2);
        assert_eq!(days[1].exercises.len(), 3 + 2);
        assert_eq!(days[2].exercises.len(), 3 + 2 + 2);
    }

    #[test]
    fn test_abc_split_is_deterministic() {
        let catalog = build_default_catalog();
        let pool = pool(&catalog, Difficulty::Advanced);

        let mut rng_a = StdRng::seed_from_u64(1);
        let mut rng_b = StdRng::seed_from_u64(999);
        let a = plan_split(&pool, 3, Difficulty::Advanced, &mut rng_a);
        let b = plan_split(&pool, 3, Difficulty::Advanced, &mut rng_b);

        for (day_a, day_b) in a.iter().zip(&b) {
            let ids_a: Vec<_> = day_a.exercises.iter().map(|ex| &ex.id).collect();
            let ids_b: Vec<_> = day_b.exercises.iter().map(|ex| &ex.id).collect();
            assert_eq!(ids_a, ids_b);
        }
    }

    #[test]
    fn test_upper_lower_always_four_days() {
        let catalog = build_default_catalog();
        let pool = pool(&catalog, Difficulty::Advanced);
        let mut rng = StdRng::seed_from_u64(0);

        let days = plan_split(&pool, 4, Difficulty::Advanced, &mut rng);
        assert_eq!(days.len(), 4);
        assert_eq!(days[0].focus, "Upper Body");
        assert_eq!(days[1].focus, "Lower Body");
        assert_eq!(days[2].focus, "Upper Body");
        assert_eq!(days[3].focus, "Lower Body");

        assert!(days[0]
            .exercises
            .iter()
            .all(|ex| UPPER_GROUPS.contains(&ex.muscle_group)));
        assert!(days[1]
            .exercises
            .iter()
            .all(|ex| LOWER_GROUPS.contains(&ex.muscle_group)));
    }

    #[test]
    fn test_upper_lower_second_half_differs_from_first() {
        let catalog = build_default_catalog();
        // Intermediate slices are disjoint: upper 0..6 then 6..12
        let pool = pool(&catalog, Difficulty::Intermediate);
        let mut rng = StdRng::seed_from_u64(0);

        let days = plan_split(&pool, 4, Difficulty::Intermediate, &mut rng);
        let first: Vec<_> = days[0].exercises.iter().map(|ex| &ex.id).collect();
        for ex in &days[2].exercises {
            assert!(!first.contains(&&ex.id), "{} repeated from day A", ex.id);
        }
    }

    #[test]
    fn test_body_part_split_caps_at_six_days() {
        let catalog = build_default_catalog();
        let pool = pool(&catalog, Difficulty::Advanced);
        let mut rng = StdRng::seed_from_u64(0);

        let days = plan_split(&pool, 7, Difficulty::Advanced, &mut rng);
        assert_eq!(days.len(), 6);
        assert_eq!(days[0].day, "Monday");
        assert_eq!(days[5].day, "Saturday");
        assert!(days[5].light);
        assert!(days[..5].iter().all(|d| !d.light));
    }

    #[test]
    fn test_body_part_split_five_days_drops_saturday() {
        let catalog = build_default_catalog();
        let pool = pool(&catalog, Difficulty::Intermediate);
        let mut rng = StdRng::seed_from_u64(0);

        let days = plan_split(&pool, 5, Difficulty::Intermediate, &mut rng);
        assert_eq!(days.len(), 5);
        assert_eq!(days.last().unwrap().day, "Friday");
    }

    #[test]
    fn test_empty_pool_yields_empty_days() {
        let mut rng = StdRng::seed_from_u64(0);
        for requested in [1u8, 3, 4, 6] {
            let days = plan_split(&[], requested, Difficulty::Beginner, &mut rng);
            assert!(days.iter().all(|d| d.exercises.is_empty()));
        }
    }
}
