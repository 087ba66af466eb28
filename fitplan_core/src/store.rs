//! File-backed user store with file locking.
//!
//! Each user gets a directory under `<root>/users/<user_id>/` holding
//! `profile.json`, `routine.json` and `favorites.json`. Writes are atomic
//! (temp file + rename) and serialized with exclusive locks; corrupt or
//! missing files degrade to "not found" with a warning.
//!
//! The store only promises look-up-by-id and upsert semantics. There is at
//! most one current routine per user; saving a routine replaces it.

use crate::{Error, Result, UserProfile, WorkoutRoutine};
use fs2::FileExt;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Per-user favorite exercise and meal ids
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
struct Favorites {
    #[serde(default)]
    exercises: Vec<String>,
    #[serde(default)]
    meals: Vec<String>,
}

/// Key-value store for user records, keyed by an opaque user identifier
#[derive(Clone, Debug)]
pub struct UserStore {
    root: PathBuf,
}

impl UserStore {
    /// Create a store rooted at the given data directory
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn user_dir(&self, user_id: &str) -> Result<PathBuf> {
        if user_id.is_empty()
            || user_id.contains('/')
            || user_id.contains('\\')
            || user_id.contains("..")
        {
            return Err(Error::Store(format!("invalid user id '{}'", user_id)));
        }
        Ok(self.root.join("users").join(user_id))
    }

    fn profile_path(&self, user_id: &str) -> Result<PathBuf> {
        Ok(self.user_dir(user_id)?.join("profile.json"))
    }

    fn routine_path(&self, user_id: &str) -> Result<PathBuf> {
        Ok(self.user_dir(user_id)?.join("routine.json"))
    }

    fn favorites_path(&self, user_id: &str) -> Result<PathBuf> {
        Ok(self.user_dir(user_id)?.join("favorites.json"))
    }

    /// Path of the user's append-only progress log
    pub fn progress_path(&self, user_id: &str) -> Result<PathBuf> {
        Ok(self.user_dir(user_id)?.join("progress.jsonl"))
    }

    // ------------------------------------------------------------------
    // Profile
    // ------------------------------------------------------------------

    /// Load a user's profile, or None if never saved
    pub fn get_profile(&self, user_id: &str) -> Result<Option<UserProfile>> {
        read_json(&self.profile_path(user_id)?)
    }

    /// Create or replace a user's profile
    pub fn upsert_profile(&self, user_id: &str, profile: &UserProfile) -> Result<()> {
        write_json(&self.profile_path(user_id)?, profile)?;
        tracing::debug!("Saved profile for user {}", user_id);
        Ok(())
    }

    // ------------------------------------------------------------------
    // Routine
    // ------------------------------------------------------------------

    /// The user's current routine, or None if none was generated yet
    pub fn current_routine(&self, user_id: &str) -> Result<Option<WorkoutRoutine>> {
        read_json(&self.routine_path(user_id)?)
    }

    /// Save a routine, replacing any previous one (last write wins)
    pub fn save_routine(&self, user_id: &str, routine: &WorkoutRoutine) -> Result<()> {
        write_json(&self.routine_path(user_id)?, routine)?;
        tracing::debug!("Saved routine {} for user {}", routine.id, user_id);
        Ok(())
    }

    // ------------------------------------------------------------------
    // Favorites
    // ------------------------------------------------------------------

    fn load_favorites(&self, user_id: &str) -> Result<Favorites> {
        Ok(read_json(&self.favorites_path(user_id)?)?.unwrap_or_default())
    }

    fn save_favorites(&self, user_id: &str, favorites: &Favorites) -> Result<()> {
        write_json(&self.favorites_path(user_id)?, favorites)
    }

    /// Favorite exercise ids, in insertion order
    pub fn favorite_exercises(&self, user_id: &str) -> Result<Vec<String>> {
        Ok(self.load_favorites(user_id)?.exercises)
    }

    /// Add an exercise to favorites (no-op if already present)
    pub fn add_favorite_exercise(&self, user_id: &str, exercise_id: &str) -> Result<()> {
        let mut favorites = self.load_favorites(user_id)?;
        if !favorites.exercises.iter().any(|id| id == exercise_id) {
            favorites.exercises.push(exercise_id.to_string());
            self.save_favorites(user_id, &favorites)?;
        }
        Ok(())
    }

    /// Remove an exercise from favorites (no-op if absent)
    pub fn remove_favorite_exercise(&self, user_id: &str, exercise_id: &str) -> Result<()> {
        let mut favorites = self.load_favorites(user_id)?;
        let before = favorites.exercises.len();
        favorites.exercises.retain(|id| id != exercise_id);
        if favorites.exercises.len() != before {
            self.save_favorites(user_id, &favorites)?;
        }
        Ok(())
    }

    /// Favorite meal ids, in insertion order
    pub fn favorite_meals(&self, user_id: &str) -> Result<Vec<String>> {
        Ok(self.load_favorites(user_id)?.meals)
    }

    /// Add a meal to favorites (no-op if already present)
    pub fn add_favorite_meal(&self, user_id: &str, meal_id: &str) -> Result<()> {
        let mut favorites = self.load_favorites(user_id)?;
        if !favorites.meals.iter().any(|id| id == meal_id) {
            favorites.meals.push(meal_id.to_string());
            self.save_favorites(user_id, &favorites)?;
        }
        Ok(())
    }

    /// Remove a meal from favorites (no-op if absent)
    pub fn remove_favorite_meal(&self, user_id: &str, meal_id: &str) -> Result<()> {
        let mut favorites = self.load_favorites(user_id)?;
        let before = favorites.meals.len();
        favorites.meals.retain(|id| id != meal_id);
        if favorites.meals.len() != before {
            self.save_favorites(user_id, &favorites)?;
        }
        Ok(())
    }
}

/// Read a JSON record with a shared lock
///
/// Missing, unreadable or corrupt files all yield None with a warning;
/// the caller treats every one of these as "record not found".
fn read_json<T: DeserializeOwned>(path: &Path) -> Result<Option<T>> {
    if !path.exists() {
        return Ok(None);
    }

    let file = match File::open(path) {
        Ok(f) => f,
        Err(e) => {
            tracing::warn!("Unable to open {:?}: {}. Treating as missing.", path, e);
            return Ok(None);
        }
    };

    if let Err(e) = file.lock_shared() {
        tracing::warn!("Unable to lock {:?}: {}. Treating as missing.", path, e);
        return Ok(None);
    }

    let mut contents = String::new();
    let mut reader = std::io::BufReader::new(&file);
    if let Err(e) = reader.read_to_string(&mut contents) {
        let _ = file.unlock();
        tracing::warn!("Failed to read {:?}: {}. Treating as missing.", path, e);
        return Ok(None);
    }

    file.unlock()?;

    match serde_json::from_str::<T>(&contents) {
        Ok(record) => Ok(Some(record)),
        Err(e) => {
            tracing::warn!("Failed to parse {:?}: {}. Treating as missing.", path, e);
            Ok(None)
        }
    }
}

/// Atomically write a JSON record with an exclusive lock
///
/// Writes to a temp file in the same directory, syncs, then renames over
/// the destination.
fn write_json<T: Serialize>(path: &Path, record: &T) -> Result<()> {
    let parent = path
        .parent()
        .ok_or_else(|| Error::Store(format!("path {:?} has no parent directory", path)))?;
    std::fs::create_dir_all(parent)?;

    let temp = NamedTempFile::new_in(parent)?;
    temp.as_file().lock_exclusive()?;

    {
        let mut writer = std::io::BufWriter::new(temp.as_file());
        let contents = serde_json::to_string(record)?;
        writer.write_all(contents.as_bytes())?;
        writer.flush()?;
    }

    temp.as_file().sync_all()?;
    temp.as_file().unlock()?;
    temp.persist(path).map_err(|e| Error::Io(e.error))?;

    Ok(())
}
