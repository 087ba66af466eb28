#![forbid(unsafe_code)]

//! Core domain model and business logic for the Fitplan system.
//!
//! This crate provides:
//! - Domain types (exercises, meals, profiles, routines, progress)
//! - Built-in exercise and meal catalogs
//! - Health metrics (BMI, daily caloric target)
//! - The routine generation engine (eligibility, split, prescription)
//! - Per-user persistence (profile, routine, favorites, progress log)

pub mod types;
pub mod error;
pub mod catalog;
pub mod config;
pub mod logging;
pub mod metrics;
pub mod eligibility;
pub mod split;
pub mod prescription;
pub mod routine;
pub mod store;
pub mod progress;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
pub use catalog::{build_default_catalog, get_default_catalog, meals_for_goal};
pub use config::Config;
pub use metrics::{bmi, bmi_category, daily_calories, BmiCategory};
pub use eligibility::eligible_exercises;
pub use split::{plan_split, PlannedDay};
pub use prescription::{assign_prescriptions, prescription_for, Prescription};
pub use routine::generate_routine;
pub use store::UserStore;
