use clap::{Parser, Subcommand};
use fitplan_core::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "fitplan")]
#[command(about = "Personalized fitness planning system", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Override data directory
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// User identifier to operate on
    #[arg(long, global = true)]
    user: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage the user profile
    Profile {
        #[command(subcommand)]
        command: ProfileCommands,
    },

    /// Generate a routine from the stored profile and save it
    Generate {
        /// Seed for the randomized full-body split (reproducible output)
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Show the current routine
    Routine,

    /// Show BMI, BMI category and daily caloric target
    Metrics,

    /// List catalog meals matching the profile goal
    Meals,

    /// Manage favorite exercises and meals
    Favorites {
        #[command(subcommand)]
        command: FavoriteCommands,
    },

    /// Log and review progress
    Progress {
        #[command(subcommand)]
        command: ProgressCommands,
    },
}

#[derive(Subcommand)]
enum ProfileCommands {
    /// Create or replace the profile
    Set {
        #[arg(long)]
        name: String,
        #[arg(long)]
        age: u32,
        /// male, female or other
        #[arg(long)]
        gender: String,
        /// Height in cm
        #[arg(long)]
        height: f64,
        /// Weight in kg
        #[arg(long)]
        weight: f64,
        /// Target weight in kg
        #[arg(long)]
        target_weight: Option<f64>,
        /// sedentary, light, moderate, intense or very-intense
        #[arg(long, default_value = "moderate")]
        activity: String,
        /// Requested training days per week (1-7)
        #[arg(long)]
        training_days: u8,
        /// never, under-6-months, 6-12-months, 1-2-years or over-2-years
        #[arg(long, default_value = "never")]
        experience: String,
        /// fat-loss, muscle-gain or maintenance
        #[arg(long)]
        goal: String,
        /// home, gym or both
        #[arg(long, default_value = "both")]
        location: String,
        /// beginner, intermediate or advanced
        #[arg(long, default_value = "beginner")]
        level: String,
        /// Injury description, repeatable
        #[arg(long = "injury")]
        injuries: Vec<String>,
        /// Health condition, repeatable
        #[arg(long = "condition")]
        conditions: Vec<String>,
    },

    /// Show the stored profile
    Show,
}

#[derive(Subcommand)]
enum FavoriteCommands {
    /// Add an exercise to favorites
    AddExercise { exercise_id: String },
    /// Remove an exercise from favorites
    RemoveExercise { exercise_id: String },
    /// Add a meal to favorites
    AddMeal { meal_id: String },
    /// Remove a meal from favorites
    RemoveMeal { meal_id: String },
    /// List favorite exercises and meals
    List,
}

#[derive(Subcommand)]
enum ProgressCommands {
    /// Append a progress entry
    Log {
        /// Current weight in kg
        #[arg(long)]
        weight: Option<f64>,
        /// Completed exercise id, repeatable
        #[arg(long = "exercise")]
        exercises: Vec<String>,
        /// Eaten meal id, repeatable
        #[arg(long = "meal")]
        meals: Vec<String>,
        #[arg(long)]
        notes: Option<String>,
    },

    /// Show recent progress entries
    History {
        /// Window in days
        #[arg(long)]
        days: Option<i64>,
    },

    /// Export the full progress log to CSV
    Export {
        /// Output CSV path
        #[arg(long)]
        output: PathBuf,
    },
}

fn main() -> Result<()> {
    fitplan_core::logging::init();

    let cli = Cli::parse();

    let config = Config::load()?;
    let data_dir = cli.data_dir.unwrap_or_else(|| config.data.data_dir.clone());
    let user_id = cli.user.unwrap_or_else(|| config.defaults.user_id.clone());
    let store = UserStore::new(&data_dir);

    match cli.command {
        Commands::Profile { command } => cmd_profile(&store, &user_id, command),
        Commands::Generate { seed } => cmd_generate(&store, &user_id, seed),
        Commands::Routine => cmd_routine(&store, &user_id),
        Commands::Metrics => cmd_metrics(&store, &user_id),
        Commands::Meals => cmd_meals(&store, &user_id),
        Commands::Favorites { command } => cmd_favorites(&store, &user_id, command),
        Commands::Progress { command } => cmd_progress(&store, &user_id, &config, command),
    }
}

/// Load the stored profile or fail with a hint to run `profile set`
fn require_profile(store: &UserStore, user_id: &str) -> Result<UserProfile> {
    store.get_profile(user_id)?.ok_or_else(|| {
        Error::Store(format!(
            "no profile for user '{}' - run `fitplan profile set` first",
            user_id
        ))
    })
}

fn cmd_profile(store: &UserStore, user_id: &str, command: ProfileCommands) -> Result<()> {
    match command {
        ProfileCommands::Set {
            name,
            age,
            gender,
            height,
            weight,
            target_weight,
            activity,
            training_days,
            experience,
            goal,
            location,
            level,
            injuries,
            conditions,
        } => {
            let profile = UserProfile {
                personal_info: PersonalInfo {
                    name,
                    age,
                    gender: gender.parse()?,
                    height_cm: height,
                    weight_kg: weight,
                    target_weight_kg: target_weight,
                    activity_level: activity.parse()?,
                    training_days,
                    experience: experience.parse()?,
                    health_conditions: conditions,
                    injuries,
                },
                goal: goal.parse()?,
                location: location.parse()?,
                level: level.parse()?,
            };

            // Sanity-check biometrics up front so generation never sees them
            bmi(profile.personal_info.weight_kg, profile.personal_info.height_cm)?;

            store.upsert_profile(user_id, &profile)?;
            println!("✓ Profile saved for user '{}'", user_id);
            Ok(())
        }

        ProfileCommands::Show => {
            let profile = require_profile(store, user_id)?;
            let info = &profile.personal_info;

            println!("Profile for '{}'", user_id);
            println!("  Name:          {}", info.name);
            println!("  Age:           {}", info.age);
            println!("  Height:        {} cm", info.height_cm);
            println!("  Weight:        {} kg", info.weight_kg);
            if let Some(target) = info.target_weight_kg {
                println!("  Target weight: {} kg", target);
            }
            println!("  Training days: {}", info.training_days);
            println!("  Goal:          {}", profile.goal);
            println!("  Location:      {}", profile.location);
            println!("  Level:         {}", profile.level);
            if !info.injuries.is_empty() {
                println!("  Injuries:      {}", info.injuries.join(", "));
            }
            if !info.health_conditions.is_empty() {
                println!("  Conditions:    {}", info.health_conditions.join(", "));
            }
            Ok(())
        }
    }
}

fn cmd_generate(store: &UserStore, user_id: &str, seed: Option<u64>) -> Result<()> {
    let profile = require_profile(store, user_id)?;
    let catalog = get_default_catalog();

    let errors = catalog.validate();
    if !errors.is_empty() {
        eprintln!("Catalog validation errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        return Err(Error::CatalogValidation("Invalid catalog".into()));
    }

    let routine = match seed {
        Some(seed) => generate_routine(catalog, &profile, &mut StdRng::seed_from_u64(seed)),
        None => generate_routine(catalog, &profile, &mut rand::thread_rng()),
    };

    store.save_routine(user_id, &routine)?;

    println!("✓ Routine generated and saved");
    display_routine(&routine, catalog);
    Ok(())
}

fn cmd_routine(store: &UserStore, user_id: &str) -> Result<()> {
    match store.current_routine(user_id)? {
        Some(routine) => {
            display_routine(&routine, get_default_catalog());
            Ok(())
        }
        None => {
            println!("No routine yet - run `fitplan generate` first.");
            Ok(())
        }
    }
}

fn cmd_metrics(store: &UserStore, user_id: &str) -> Result<()> {
    let profile = require_profile(store, user_id)?;
    let info = &profile.personal_info;

    let bmi_value = bmi(info.weight_kg, info.height_cm)?;
    let category = bmi_category(bmi_value);
    let kcal = daily_calories(info, profile.goal)?;

    println!("Health metrics for '{}'", info.name);
    println!("  BMI:            {} ({})", bmi_value, category);
    println!("  Daily calories: {} kcal (goal: {})", kcal, profile.goal);
    Ok(())
}

fn cmd_meals(store: &UserStore, user_id: &str) -> Result<()> {
    let profile = require_profile(store, user_id)?;
    let catalog = get_default_catalog();
    let meals = meals_for_goal(catalog, profile.goal);

    println!("Meals for goal '{}':", profile.goal);
    for meal in meals {
        println!(
            "  [{}] {} ({}) - {} kcal, {}g protein",
            meal.id, meal.name, meal.category, meal.calories, meal.protein_g
        );
    }
    Ok(())
}

fn cmd_favorites(store: &UserStore, user_id: &str, command: FavoriteCommands) -> Result<()> {
    let catalog = get_default_catalog();

    match command {
        FavoriteCommands::AddExercise { exercise_id } => {
            if catalog.exercise_by_id(&exercise_id).is_none() {
                return Err(Error::InvalidInput(format!(
                    "unknown exercise id '{}'",
                    exercise_id
                )));
            }
            store.add_favorite_exercise(user_id, &exercise_id)?;
            println!("✓ Added exercise {} to favorites", exercise_id);
        }
        FavoriteCommands::RemoveExercise { exercise_id } => {
            store.remove_favorite_exercise(user_id, &exercise_id)?;
            println!("✓ Removed exercise {} from favorites", exercise_id);
        }
        FavoriteCommands::AddMeal { meal_id } => {
            if catalog.meal_by_id(&meal_id).is_none() {
                return Err(Error::InvalidInput(format!("unknown meal id '{}'", meal_id)));
            }
            store.add_favorite_meal(user_id, &meal_id)?;
            println!("✓ Added meal {} to favorites", meal_id);
        }
        FavoriteCommands::RemoveMeal { meal_id } => {
            store.remove_favorite_meal(user_id, &meal_id)?;
            println!("✓ Removed meal {} from favorites", meal_id);
        }
        FavoriteCommands::List => {
            println!("Favorite exercises:");
            for id in store.favorite_exercises(user_id)? {
                match catalog.exercise_by_id(&id) {
                    Some(ex) => println!("  [{}] {}", ex.id, ex.name),
                    None => println!("  [{}] (no longer in catalog)", id),
                }
            }
            println!("Favorite meals:");
            for id in store.favorite_meals(user_id)? {
                match catalog.meal_by_id(&id) {
                    Some(meal) => println!("  [{}] {}", meal.id, meal.name),
                    None => println!("  [{}] (no longer in catalog)", id),
                }
            }
        }
    }
    Ok(())
}

fn cmd_progress(
    store: &UserStore,
    user_id: &str,
    config: &Config,
    command: ProgressCommands,
) -> Result<()> {
    let log_path = store.progress_path(user_id)?;

    match command {
        ProgressCommands::Log {
            weight,
            exercises,
            meals,
            notes,
        } => {
            let entry = ProgressEntry {
                id: uuid::Uuid::new_v4(),
                recorded_at: chrono::Utc::now(),
                weight_kg: weight,
                exercises,
                meals,
                notes,
            };
            progress::append_entry(&log_path, &entry)?;
            println!("✓ Progress entry logged");
        }

        ProgressCommands::History { days } => {
            let days = days.unwrap_or(config.defaults.history_days);
            let entries = progress::recent_entries(&log_path, days)?;

            if entries.is_empty() {
                println!("No progress entries in the last {} days.", days);
                return Ok(());
            }

            println!("Progress over the last {} days:", days);
            for entry in entries {
                let weight = entry
                    .weight_kg
                    .map(|w| format!("{} kg", w))
                    .unwrap_or_else(|| "-".into());
                println!(
                    "  {}  weight: {}  exercises: {}  meals: {}{}",
                    entry.recorded_at.format("%Y-%m-%d"),
                    weight,
                    entry.exercises.len(),
                    entry.meals.len(),
                    entry
                        .notes
                        .map(|n| format!("  ({})", n))
                        .unwrap_or_default()
                );
            }
        }

        ProgressCommands::Export { output } => {
            let count = progress::export_csv(&log_path, &output)?;
            println!("✓ Exported {} progress entries to {}", count, output.display());
        }
    }
    Ok(())
}

fn display_routine(routine: &WorkoutRoutine, catalog: &Catalog) {
    println!();
    println!("╭─────────────────────────────────────────╮");
    println!("│  {}", routine.name);
    println!("╰─────────────────────────────────────────╯");
    println!("  {}", routine.description);
    println!();

    for day in &routine.days {
        println!("  {} - {}", day.day, day.focus);

        if day.exercises.is_empty() {
            println!("    (no eligible exercises for this day)");
        }

        for prescription in &day.exercises {
            // Dangling references are skipped, not treated as a fault
            let Some(exercise) = catalog.exercise_by_id(&prescription.exercise_id) else {
                tracing::warn!(
                    "Skipping unavailable exercise {} in routine {}",
                    prescription.exercise_id,
                    routine.id
                );
                continue;
            };

            print!(
                "    → {}: {} sets of {} reps, rest {}",
                exercise.name, prescription.sets, prescription.reps, prescription.rest
            );
            match &prescription.note {
                Some(note) => println!(" ({})", note),
                None => println!(),
            }
        }
        println!();
    }
}
