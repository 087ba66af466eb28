//! Built-in catalog of exercises and meals.
//!
//! This module provides the static reference data the planner consumes.
//! Ordering matters: the ABC, upper/lower and body-part splits take the
//! first N eligible entries in catalog order.

use crate::types::*;
use crate::{Goal, MealCategory, MuscleGroup};
use once_cell::sync::Lazy;

/// Cached default catalog - built once and reused across all operations
static DEFAULT_CATALOG: Lazy<Catalog> = Lazy::new(build_default_catalog);

/// Get a reference to the cached default catalog
///
/// Returns a reference to the pre-built catalog, avoiding the cost of
/// rebuilding the full exercise and meal lists on every operation.
pub fn get_default_catalog() -> &'static Catalog {
    &DEFAULT_CATALOG
}

fn exercise(
    id: &str,
    name: &str,
    muscle_group: MuscleGroup,
    location: Location,
    difficulty: Difficulty,
    description: &str,
    sets: &str,
    reps: &str,
    equipment: &str,
) -> Exercise {
    Exercise {
        id: id.into(),
        name: name.into(),
        muscle_group,
        location,
        difficulty,
        description: description.into(),
        sets: sets.into(),
        reps: reps.into(),
        equipment: if equipment.is_empty() {
            None
        } else {
            Some(equipment.into())
        },
    }
}

fn meal(
    id: &str,
    name: &str,
    category: MealCategory,
    calories: u32,
    protein_g: u32,
    carbs_g: u32,
    fats_g: u32,
    description: &str,
    ingredients: &[&str],
    goal: Goal,
) -> Meal {
    Meal {
        id: id.into(),
        name: name.into(),
        category,
        calories,
        protein_g,
        carbs_g,
        fats_g,
        description: description.into(),
        ingredients: ingredients.iter().map(|s| (*s).into()).collect(),
        goal,
    }
}

/// Builds the default catalog of exercises and meals
///
/// **Note**: For production use, prefer `get_default_catalog()` which returns
/// a cached reference. This function is retained for testing and custom
/// catalog creation.
pub fn build_default_catalog() -> Catalog {
    use Difficulty::{Advanced, Beginner, Intermediate};
    use Location::{Both, Gym, Home};
    use MuscleGroup::{Abdomen, Back, Biceps, Chest, Glutes, Legs, Shoulders, Triceps};

    let exercises = vec![
        // Chest
        exercise(
            "ex-1", "Push-up", Chest, Both, Beginner,
            "Classic movement for chest, shoulders and triceps strength",
            "3-4", "10-15", "Bodyweight",
        ),
        exercise(
            "ex-2", "Barbell Bench Press", Chest, Gym, Intermediate,
            "Fundamental lift for chest development",
            "4", "8-12", "Barbell and plates",
        ),
        exercise(
            "ex-3", "Dumbbell Fly", Chest, Gym, Intermediate,
            "Stretches and works the inner chest",
            "3", "12-15", "Dumbbells",
        ),
        // Back
        exercise(
            "ex-4", "Bent-over Row", Back, Gym, Intermediate,
            "Excellent for building back thickness",
            "4", "8-12", "Barbell and plates",
        ),
        exercise(
            "ex-5", "Pull-up", Back, Both, Advanced,
            "Complete movement for back width",
            "3-4", "6-10", "Pull-up bar",
        ),
        exercise(
            "ex-6", "Superman Hold", Back, Home, Beginner,
            "Strengthens the lower back and spinal erectors",
            "3", "15-20", "Bodyweight",
        ),
        // Shoulders
        exercise(
            "ex-7", "Dumbbell Shoulder Press", Shoulders, Gym, Intermediate,
            "Primary movement for complete shoulder development",
            "4", "10-12", "Dumbbells",
        ),
        exercise(
            "ex-8", "Lateral Raise", Shoulders, Both, Beginner,
            "Isolates the lateral deltoid for wider shoulders",
            "3", "12-15", "Dumbbells or bottles",
        ),
        exercise(
            "ex-9", "Front Raise", Shoulders, Both, Beginner,
            "Works the front of the shoulders",
            "3", "12-15", "Dumbbells or bottles",
        ),
        // Biceps
        exercise(
            "ex-10", "Barbell Curl", Biceps, Gym, Beginner,
            "Classic movement for biceps size",
            "3-4", "10-12", "Barbell and plates",
        ),
        exercise(
            "ex-11", "Alternating Dumbbell Curl", Biceps, Both, Beginner,
            "Allows greater range of motion and focus per arm",
            "3", "10-12 each", "Dumbbells",
        ),
        exercise(
            "ex-12", "Hammer Curl", Biceps, Both, Beginner,
            "Works biceps and forearms together",
            "3", "12-15", "Dumbbells",
        ),
        // Triceps
        exercise(
            "ex-13", "Skull Crusher", Triceps, Gym, Intermediate,
            "Excellent isolation for all triceps heads",
            "3-4", "10-12", "EZ bar",
        ),
        exercise(
            "ex-14", "Parallel Bar Dip", Triceps, Both, Intermediate,
            "Compound movement for strength and mass",
            "3", "8-12", "Parallel bars or chair",
        ),
        exercise(
            "ex-15", "Bench Dip", Triceps, Home, Beginner,
            "Effective bodyweight triceps movement",
            "3", "12-15", "Bench or chair",
        ),
        // Legs
        exercise(
            "ex-16", "Squat", Legs, Both, Intermediate,
            "King of lower-body movements",
            "4", "10-15", "Barbell (optional)",
        ),
        exercise(
            "ex-17", "Leg Press", Legs, Gym, Beginner,
            "Safe way to load the thighs with weight",
            "4", "12-15", "Leg press machine",
        ),
        exercise(
            "ex-18", "Lunge", Legs, Both, Beginner,
            "Works legs and glutes unilaterally",
            "3", "10-12 each", "Bodyweight or dumbbells",
        ),
        exercise(
            "ex-19", "Romanian Deadlift", Legs, Both, Intermediate,
            "Targets hamstrings and glutes",
            "3-4", "10-12", "Barbell or dumbbells",
        ),
        // Abdomen
        exercise(
            "ex-20", "Plank", Abdomen, Both, Beginner,
            "Strengthens the entire core",
            "3", "30-60s", "Bodyweight",
        ),
        exercise(
            "ex-21", "Crunch", Abdomen, Both, Beginner,
            "Classic movement for the rectus abdominis",
            "3-4", "15-20", "Bodyweight",
        ),
        exercise(
            "ex-22", "Leg Raise", Abdomen, Both, Intermediate,
            "Works the lower abdomen",
            "3", "12-15", "Bodyweight",
        ),
        exercise(
            "ex-23", "Bicycle Crunch", Abdomen, Both, Beginner,
            "Activates the obliques and rectus abdominis",
            "3", "20-30", "Bodyweight",
        ),
        // Glutes
        exercise(
            "ex-24", "Hip Thrust", Glutes, Both, Beginner,
            "Isolated glute movement",
            "3-4", "15-20", "Bodyweight or barbell",
        ),
        exercise(
            "ex-25", "Abductor Machine", Glutes, Gym, Beginner,
            "Isolates the gluteus medius",
            "3", "15-20", "Abductor machine",
        ),
        exercise(
            "ex-26", "Sumo Squat", Glutes, Both, Beginner,
            "Variation emphasizing glutes and inner thighs",
            "3-4", "12-15", "Bodyweight or dumbbell",
        ),
    ];

    let meals = vec![
        // Breakfast
        meal(
            "meal-1", "Protein Omelette", MealCategory::Breakfast, 280, 24, 8, 18,
            "Light omelette with vegetables and white cheese",
            &["3 eggs", "1 diced tomato", "Spinach", "30g white cheese", "Seasoning to taste"],
            Goal::FatLoss,
        ),
        meal(
            "meal-2", "Yogurt with Berries", MealCategory::Breakfast, 220, 18, 28, 4,
            "Plain Greek yogurt with berries and chia",
            &["200g plain Greek yogurt", "100g mixed berries", "1 tbsp chia seeds"],
            Goal::FatLoss,
        ),
        meal(
            "meal-3", "Oat Pancake", MealCategory::Breakfast, 310, 20, 35, 10,
            "Fit pancake with oats and banana",
            &["2 eggs", "3 tbsp oats", "1 mashed banana", "Cinnamon", "Honey (optional)"],
            Goal::FatLoss,
        ),
        meal(
            "meal-4", "Tapioca Wrap with Chicken", MealCategory::Breakfast, 420, 35, 48, 8,
            "Tapioca crepe filled with shredded chicken",
            &["4 tbsp tapioca starch", "100g shredded chicken", "1 slice of cheese", "Tomato and lettuce"],
            Goal::MuscleGain,
        ),
        meal(
            "meal-5", "Mass-gain Smoothie", MealCategory::Breakfast, 550, 32, 68, 16,
            "Calorie-dense smoothie with oats and peanut butter",
            &["300ml whole milk", "1 banana", "3 tbsp oats", "1 tbsp peanut butter", "1 scoop whey protein"],
            Goal::MuscleGain,
        ),
        // Lunch
        meal(
            "meal-6", "Grilled Chicken with Salad", MealCategory::Lunch, 380, 42, 28, 10,
            "Lean grilled chicken breast with mixed greens",
            &["150g chicken breast", "Mixed greens", "1 tbsp olive oil", "100g sweet potato"],
            Goal::FatLoss,
        ),
        meal(
            "meal-7", "Fish with Vegetables", MealCategory::Lunch, 340, 38, 24, 12,
            "Baked white fish with steamed vegetables",
            &["150g white fish", "Steamed broccoli and carrots", "1 tbsp olive oil", "Lemon"],
            Goal::FatLoss,
        ),
        meal(
            "meal-8", "Lean Beef with Quinoa", MealCategory::Lunch, 420, 40, 35, 14,
            "Lean beef strips over quinoa",
            &["130g lean beef", "4 tbsp cooked quinoa", "Arugula salad", "Seasoning to taste"],
            Goal::FatLoss,
        ),
        meal(
            "meal-9", "Chicken with Rice and Beans", MealCategory::Lunch, 620, 52, 72, 12,
            "Classic bulking plate with chicken, rice and beans",
            &["180g chicken breast", "6 tbsp rice", "1 ladle of beans", "Sauteed vegetables"],
            Goal::MuscleGain,
        ),
        meal(
            "meal-10", "Beef with Potato and Pasta", MealCategory::Lunch, 680, 48, 78, 18,
            "High-calorie plate for heavy training days",
            &["150g beef", "150g potato", "80g pasta", "Tomato sauce"],
            Goal::MuscleGain,
        ),
        meal(
            "meal-19", "Complete Salad Bowl", MealCategory::Lunch, 450, 32, 38, 18,
            "Balanced bowl with protein, grains and greens",
            &["120g grilled chicken", "3 tbsp chickpeas", "Mixed greens", "1 boiled egg", "Olive oil"],
            Goal::Maintenance,
        ),
        // Dinner
        meal(
            "meal-11", "Vegetable Soup with Chicken", MealCategory::Dinner, 280, 28, 22, 8,
            "Light soup with shredded chicken and vegetables",
            &["100g shredded chicken", "Zucchini, carrot and chayote", "Seasoning to taste"],
            Goal::FatLoss,
        ),
        meal(
            "meal-12", "Egg-white Omelette with Salad", MealCategory::Dinner, 240, 26, 12, 10,
            "Low-calorie dinner rich in protein",
            &["4 egg whites", "1 whole egg", "Mixed greens", "30g white cheese"],
            Goal::FatLoss,
        ),
        meal(
            "meal-13", "Salmon with Brown Rice", MealCategory::Dinner, 520, 42, 48, 18,
            "Salmon fillet with brown rice and asparagus",
            &["150g salmon", "5 tbsp brown rice", "Grilled asparagus", "Lemon"],
            Goal::MuscleGain,
        ),
        meal(
            "meal-20", "Light Chicken Risotto", MealCategory::Dinner, 480, 36, 54, 12,
            "Lighter risotto with chicken and vegetables",
            &["120g chicken breast", "5 tbsp arborio rice", "Zucchini and peas", "Light cream cheese"],
            Goal::Maintenance,
        ),
        // Snacks
        meal(
            "meal-14", "Fruit with Nuts", MealCategory::Snack, 180, 6, 22, 8,
            "Simple snack with fruit and mixed nuts",
            &["1 apple or banana", "20g mixed nuts"],
            Goal::FatLoss,
        ),
        meal(
            "meal-15", "Turkey Breast Wrap", MealCategory::Snack, 220, 18, 24, 6,
            "Whole-wheat wrap with turkey breast",
            &["1 whole-wheat tortilla", "4 slices turkey breast", "Cottage cheese", "Lettuce"],
            Goal::FatLoss,
        ),
        meal(
            "meal-16", "Natural Sandwich", MealCategory::Snack, 380, 28, 42, 12,
            "Whole-grain sandwich with chicken salad",
            &["2 slices whole-grain bread", "100g shredded chicken", "Light mayo", "Grated carrot"],
            Goal::MuscleGain,
        ),
        meal(
            "meal-17", "Banana Oat Shake", MealCategory::Snack, 420, 24, 52, 14,
            "Blended shake for extra calories between meals",
            &["300ml milk", "1 banana", "3 tbsp oats", "1 tbsp honey"],
            Goal::MuscleGain,
        ),
        meal(
            "meal-18", "Acai Bowl", MealCategory::Snack, 320, 12, 48, 10,
            "Acai bowl with granola and banana",
            &["200g unsweetened acai", "2 tbsp granola", "1 sliced banana"],
            Goal::Maintenance,
        ),
    ];

    Catalog { exercises, meals }
}

/// Meals from the catalog matching a goal, in catalog order
///
/// The nutrition plan is a filtered view of the catalog, not generated.
pub fn meals_for_goal<'a>(catalog: &'a Catalog, goal: Goal) -> Vec<&'a Meal> {
    catalog.meals.iter().filter(|m| m.goal == goal).collect()
}

impl Catalog {
    /// Validate the catalog for consistency and completeness
    ///
    /// Returns a list of validation errors, or empty Vec if valid.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        let mut seen_ids = std::collections::HashSet::new();

        for ex in &self.exercises {
            if ex.id.is_empty() {
                errors.push("Exercise has empty ID".to_string());
            } else if !seen_ids.insert(ex.id.clone()) {
                errors.push(format!("Duplicate exercise ID '{}'", ex.id));
            }
            if ex.name.is_empty() {
                errors.push(format!("Exercise '{}' has empty name", ex.id));
            }
        }

        let mut seen_meal_ids = std::collections::HashSet::new();
        for m in &self.meals {
            if m.id.is_empty() {
                errors.push("Meal has empty ID".to_string());
            } else if !seen_meal_ids.insert(m.id.clone()) {
                errors.push(format!("Duplicate meal ID '{}'", m.id));
            }
            if m.name.is_empty() {
                errors.push(format!("Meal '{}' has empty name", m.id));
            }
            if m.calories == 0 {
                errors.push(format!("Meal '{}' has zero calories", m.id));
            }
        }

        // Every muscle group must be represented or whole split days come out empty
        for group in MuscleGroup::ALL {
            if !self.exercises.iter().any(|ex| ex.muscle_group == group) {
                errors.push(format!("Catalog has no exercises for muscle group {}", group));
            }
        }

        // Every meal category should be covered
        for category in [
            MealCategory::Breakfast,
            MealCategory::Lunch,
            MealCategory::Dinner,
            MealCategory::Snack,
        ] {
            if !self.meals.iter().any(|m| m.category == category) {
                errors.push(format!("Catalog has no meals in category {}", category));
            }
        }

        errors
    }

    /// Look up an exercise by id
    pub fn exercise_by_id(&self, id: &str) -> Option<&Exercise> {
        self.exercises.iter().find(|ex| ex.id == id)
    }

    /// Look up a meal by id
    pub fn meal_by_id(&self, id: &str) -> Option<&Meal> {
        self.meals.iter().find(|m| m.id == id)
    }
}
