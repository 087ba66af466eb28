//! Health metric formulas: BMI and daily caloric target.
//!
//! These are pure numeric functions, independent of routine generation.
//! The caloric target uses the Harris-Benedict equation with an activity
//! multiplier and a goal adjustment.

use crate::{ActivityLevel, Error, Gender, Goal, PersonalInfo, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// BMI classification bands
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            BmiCategory::Underweight => "underweight",
            BmiCategory::Normal => "normal",
            BmiCategory::Overweight => "overweight",
            BmiCategory::Obese => "obese",
        };
        f.write_str(s)
    }
}

/// Body mass index, rounded to one decimal place
///
/// Rejects non-positive weight or height rather than producing NaN/infinity.
pub fn bmi(weight_kg: f64, height_cm: f64) -> Result<f64> {
    if weight_kg <= 0.0 {
        return Err(Error::InvalidInput(format!(
            "weight must be positive, got {}",
            weight_kg
        )));
    }
    if height_cm <= 0.0 {
        return Err(Error::InvalidInput(format!(
            "height must be positive, got {}",
            height_cm
        )));
    }

    let height_m = height_cm / 100.0;
    let raw = weight_kg / (height_m * height_m);
    Ok((raw * 10.0).round() / 10.0)
}

/// Classify a BMI value; boundary values belong to the upper category
/// (18.5 is normal, 25.0 is overweight, 30.0 is obese)
pub fn bmi_category(bmi: f64) -> BmiCategory {
    if bmi < 18.5 {
        BmiCategory::Underweight
    } else if bmi < 25.0 {
        BmiCategory::Normal
    } else if bmi < 30.0 {
        BmiCategory::Overweight
    } else {
        BmiCategory::Obese
    }
}

/// Activity multiplier applied to BMR to obtain TDEE
fn activity_factor(level: ActivityLevel) -> f64 {
    match level {
        ActivityLevel::Sedentary => 1.2,
        ActivityLevel::Light => 1.375,
        ActivityLevel::Moderate => 1.55,
        ActivityLevel::Intense => 1.725,
        ActivityLevel::VeryIntense => 1.9,
    }
}

/// Daily caloric target in kcal for a person and goal
///
/// Harris-Benedict BMR, scaled by activity level, then shifted by goal:
/// fat loss subtracts 500 kcal, muscle gain adds 300, maintenance adds 0.
///
/// The equation has no coefficients for gender `other`; those users get the
/// female coefficients.
pub fn daily_calories(info: &PersonalInfo, goal: Goal) -> Result<i32> {
    if info.weight_kg <= 0.0 || info.height_cm <= 0.0 {
        return Err(Error::InvalidInput(format!(
            "weight and height must be positive, got {} kg / {} cm",
            info.weight_kg, info.height_cm
        )));
    }

    let age = info.age as f64;
    let bmr = match info.gender {
        Gender::Male => {
            88.362 + 13.397 * info.weight_kg + 4.799 * info.height_cm - 5.677 * age
        }
        Gender::Female | Gender::Other => {
            447.593 + 9.247 * info.weight_kg + 3.098 * info.height_cm - 4.330 * age
        }
    };

    let tdee = bmr * activity_factor(info.activity_level);

    let target = match goal {
        Goal::FatLoss => tdee - 500.0,
        Goal::MuscleGain => tdee + 300.0,
        Goal::Maintenance => tdee,
    };

    tracing::debug!(
        "BMR {:.1}, TDEE {:.1}, target {:.0} kcal for goal {}",
        bmr,
        tdee,
        target,
        goal
    );

    Ok(target.round() as i32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Experience, Gender};

    fn test_person(gender: Gender) -> PersonalInfo {
        PersonalInfo {
            name: "Test".into(),
            age: 30,
            gender,
            height_cm: 180.0,
            weight_kg: 80.0,
            target_weight_kg: None,
            activity_level: ActivityLevel::Moderate,
            training_days: 3,
            experience: Experience::OneToTwoYears,
            health_conditions: vec![],
            injuries: vec![],
        }
    }

    #[test]
    fn test_bmi_reference_value() {
        let value = bmi(70.0, 175.0).unwrap();
        assert!((value - 22.9).abs() < f64::EPSILON);
    }

    #[test]
    fn test_bmi_rejects_nonpositive_inputs() {
        assert!(matches!(bmi(0.0, 175.0), Err(Error::InvalidInput(_))));
        assert!(matches!(bmi(70.0, -1.0), Err(Error::InvalidInput(_))));
    }

    #[test]
    fn test_bmi_category_boundaries_are_upper_inclusive() {
        assert_eq!(bmi_category(18.4), BmiCategory::Underweight);
        assert_eq!(bmi_category(18.5), BmiCategory::Normal);
        assert_eq!(bmi_category(22.9), BmiCategory::Normal);
        assert_eq!(bmi_category(25.0), BmiCategory::Overweight);
        assert_eq!(bmi_category(30.0), BmiCategory::Obese);
    }

    #[test]
    fn test_daily_calories_male_fat_loss_reference() {
        // BMR = 88.362 + 13.397*80 + 4.799*180 - 5.677*30 = 1853.632
        // TDEE = BMR * 1.55 = 2873.13; fat loss subtracts 500
        let kcal = daily_calories(&test_person(Gender::Male), Goal::FatLoss).unwrap();
        assert_eq!(kcal, 2373);
    }

    #[test]
    fn test_daily_calories_goal_adjustments() {
        let info = test_person(Gender::Male);
        let maintain = daily_calories(&info, Goal::Maintenance).unwrap();
        let cut = daily_calories(&info, Goal::FatLoss).unwrap();
        let bulk = daily_calories(&info, Goal::MuscleGain).unwrap();

        assert_eq!(maintain - cut, 500);
        assert_eq!(bulk - maintain, 300);
    }

    #[test]
    fn test_other_gender_uses_female_coefficients() {
        let female = daily_calories(&test_person(Gender::Female), Goal::Maintenance).unwrap();
        let other = daily_calories(&test_person(Gender::Other), Goal::Maintenance).unwrap();
        assert_eq!(female, other);
    }

    #[test]
    fn test_daily_calories_rejects_nonpositive_biometrics() {
        let mut info = test_person(Gender::Male);
        info.weight_kg = 0.0;
        assert!(matches!(
            daily_calories(&info, Goal::Maintenance),
            Err(Error::InvalidInput(_))
        ));
    }
}
