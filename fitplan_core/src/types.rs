//! Core domain types for the Fitplan system.
//!
//! This module defines the fundamental types used throughout the system:
//! - Exercises, meals and their catalog
//! - Personal info and training preferences
//! - Generated routines (days, prescriptions)
//! - Progress log entries

use crate::Error;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

// ============================================================================
// Catalog Types
// ============================================================================

/// The eight muscle groups exercises are tagged with
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MuscleGroup {
    Chest,
    Back,
    Shoulders,
    Biceps,
    Triceps,
    Legs,
    Abdomen,
    Glutes,
}

impl MuscleGroup {
    /// All muscle groups in the order splits iterate over them
    pub const ALL: [MuscleGroup; 8] = [
        MuscleGroup::Chest,
        MuscleGroup::Back,
        MuscleGroup::Shoulders,
        MuscleGroup::Biceps,
        MuscleGroup::Triceps,
        MuscleGroup::Legs,
        MuscleGroup::Abdomen,
        MuscleGroup::Glutes,
    ];
}

impl fmt::Display for MuscleGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            MuscleGroup::Chest => "chest",
            MuscleGroup::Back => "back",
            MuscleGroup::Shoulders => "shoulders",
            MuscleGroup::Biceps => "biceps",
            MuscleGroup::Triceps => "triceps",
            MuscleGroup::Legs => "legs",
            MuscleGroup::Abdomen => "abdomen",
            MuscleGroup::Glutes => "glutes",
        };
        f.write_str(s)
    }
}

/// Where an exercise can be performed
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Location {
    Home,
    Gym,
    Both,
}

impl FromStr for Location {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s.to_lowercase().as_str() {
            "home" => Ok(Location::Home),
            "gym" => Ok(Location::Gym),
            "both" => Ok(Location::Both),
            other => Err(Error::InvalidInput(format!(
                "unknown location '{}' (expected home, gym or both)",
                other
            ))),
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Location::Home => "home",
            Location::Gym => "gym",
            Location::Both => "both",
        };
        f.write_str(s)
    }
}

/// Difficulty band for exercises and self-reported skill level
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl FromStr for Difficulty {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s.to_lowercase().as_str() {
            "beginner" => Ok(Difficulty::Beginner),
            "intermediate" => Ok(Difficulty::Intermediate),
            "advanced" => Ok(Difficulty::Advanced),
            other => Err(Error::InvalidInput(format!(
                "unknown level '{}' (expected beginner, intermediate or advanced)",
                other
            ))),
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Difficulty::Beginner => "beginner",
            Difficulty::Intermediate => "intermediate",
            Difficulty::Advanced => "advanced",
        };
        f.write_str(s)
    }
}

/// An exercise catalog entry (static reference data)
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Exercise {
    pub id: String,
    pub name: String,
    pub muscle_group: MuscleGroup,
    pub location: Location,
    pub difficulty: Difficulty,
    pub description: String,
    /// Default set range as listed in the catalog (e.g. "3-4")
    pub sets: String,
    /// Default rep range as listed in the catalog (e.g. "10-15")
    pub reps: String,
    pub equipment: Option<String>,
}

/// Meal category within a day
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MealCategory {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

impl fmt::Display for MealCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            MealCategory::Breakfast => "breakfast",
            MealCategory::Lunch => "lunch",
            MealCategory::Dinner => "dinner",
            MealCategory::Snack => "snack",
        };
        f.write_str(s)
    }
}

/// A meal catalog entry (static reference data)
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Meal {
    pub id: String,
    pub name: String,
    pub category: MealCategory,
    pub calories: u32,
    pub protein_g: u32,
    pub carbs_g: u32,
    pub fats_g: u32,
    pub description: String,
    pub ingredients: Vec<String>,
    pub goal: Goal,
}

/// The complete catalog of exercises and meals
///
/// Entries are kept in a stable order; split selection depends on it.
#[derive(Clone, Debug)]
pub struct Catalog {
    pub exercises: Vec<Exercise>,
    pub meals: Vec<Meal>,
}

// ============================================================================
// User Types
// ============================================================================

/// Training goal
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    FatLoss,
    MuscleGain,
    Maintenance,
}

impl FromStr for Goal {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s.to_lowercase().as_str() {
            "fat-loss" | "fat_loss" | "fatloss" => Ok(Goal::FatLoss),
            "muscle-gain" | "muscle_gain" | "musclegain" => Ok(Goal::MuscleGain),
            "maintenance" => Ok(Goal::Maintenance),
            other => Err(Error::InvalidInput(format!(
                "unknown goal '{}' (expected fat-loss, muscle-gain or maintenance)",
                other
            ))),
        }
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Goal::FatLoss => "fat loss",
            Goal::MuscleGain => "muscle gain",
            Goal::Maintenance => "maintenance",
        };
        f.write_str(s)
    }
}

/// Self-reported gender, used by the calorie formula
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl FromStr for Gender {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s.to_lowercase().as_str() {
            "male" => Ok(Gender::Male),
            "female" => Ok(Gender::Female),
            "other" => Ok(Gender::Other),
            o => Err(Error::InvalidInput(format!(
                "unknown gender '{}' (expected male, female or other)",
                o
            ))),
        }
    }
}

/// Weekly activity level outside of the generated routine
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    Sedentary,
    Light,
    Moderate,
    Intense,
    VeryIntense,
}

impl FromStr for ActivityLevel {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s.to_lowercase().as_str() {
            "sedentary" => Ok(ActivityLevel::Sedentary),
            "light" => Ok(ActivityLevel::Light),
            "moderate" => Ok(ActivityLevel::Moderate),
            "intense" => Ok(ActivityLevel::Intense),
            "very-intense" | "very_intense" => Ok(ActivityLevel::VeryIntense),
            o => Err(Error::InvalidInput(format!(
                "unknown activity level '{}' (expected sedentary, light, moderate, intense or very-intense)",
                o
            ))),
        }
    }
}

/// Prior training experience, ordered from none to multi-year
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum Experience {
    NeverTrained,
    UnderSixMonths,
    SixToTwelveMonths,
    OneToTwoYears,
    OverTwoYears,
}

impl FromStr for Experience {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s.to_lowercase().as_str() {
            "never" | "never-trained" => Ok(Experience::NeverTrained),
            "under-6-months" | "under-six-months" => Ok(Experience::UnderSixMonths),
            "6-12-months" | "six-to-twelve-months" => Ok(Experience::SixToTwelveMonths),
            "1-2-years" | "one-to-two-years" => Ok(Experience::OneToTwoYears),
            "over-2-years" | "over-two-years" => Ok(Experience::OverTwoYears),
            o => Err(Error::InvalidInput(format!(
                "unknown experience '{}' (expected never, under-6-months, 6-12-months, 1-2-years or over-2-years)",
                o
            ))),
        }
    }
}

/// Biometric and preference data collected during onboarding
///
/// Generation never mutates this; it is taken by shared reference.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PersonalInfo {
    pub name: String,
    pub age: u32,
    pub gender: Gender,
    pub height_cm: f64,
    pub weight_kg: f64,
    pub target_weight_kg: Option<f64>,
    pub activity_level: ActivityLevel,
    /// Requested training days per week (1-7)
    pub training_days: u8,
    pub experience: Experience,
    #[serde(default)]
    pub health_conditions: Vec<String>,
    #[serde(default)]
    pub injuries: Vec<String>,
}

/// A user's stored profile: personal info plus training preferences
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct UserProfile {
    pub personal_info: PersonalInfo,
    pub goal: Goal,
    pub location: Location,
    pub level: Difficulty,
}

// ============================================================================
// Routine Types
// ============================================================================

/// Sets/reps/rest assigned to one exercise within one day
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExercisePrescription {
    pub exercise_id: String,
    pub sets: u8,
    pub reps: String,
    pub rest: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// One training day within a routine
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct WorkoutDay {
    pub day: String,
    pub focus: String,
    pub exercises: Vec<ExercisePrescription>,
}

/// A complete generated weekly routine
///
/// At most one current routine exists per user; regeneration replaces it.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct WorkoutRoutine {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub days: Vec<WorkoutDay>,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Progress Types
// ============================================================================

/// A single progress log entry
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ProgressEntry {
    pub id: Uuid,
    pub recorded_at: DateTime<Utc>,
    pub weight_kg: Option<f64>,
    #[serde(default)]
    pub exercises: Vec<String>,
    #[serde(default)]
    pub meals: Vec<String>,
    pub notes: Option<String>,
}
