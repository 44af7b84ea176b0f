//! Plan cache keyed by a fingerprint of the goal and settings.
//!
//! The fingerprint keeps only the first [`FINGERPRINT_GOAL_CHARS`] characters
//! of the normalized goal, so goals sharing a long common prefix are treated
//! as the same request. Entries are never evicted.

use log::{debug, warn};

use crate::{
    error::Result,
    models::{Plan, Settings},
    store::KeyValueStore,
};

/// Number of normalized goal characters that take part in the fingerprint.
pub const FINGERPRINT_GOAL_CHARS: usize = 50;

/// Derives the cache key for a goal submitted with the given settings.
///
/// The goal is trimmed, lowercased and cut to [`FINGERPRINT_GOAL_CHARS`]
/// characters before being combined with the model id and language.
///
/// ```rust
/// use waypoint_core::{cache::cache_key, Settings};
///
/// let settings = Settings::default();
/// assert_eq!(
///     cache_key("  Learn Piano ", &settings),
///     "cache_gemini-3-flash-preview_English_learn piano"
/// );
/// ```
pub fn cache_key(goal: &str, settings: &Settings) -> String {
    let normalized: String = goal
        .trim()
        .to_lowercase()
        .chars()
        .take(FINGERPRINT_GOAL_CHARS)
        .collect();

    format!(
        "cache_{}_{}_{}",
        settings.model.model_id(),
        settings.language.as_str(),
        normalized
    )
}

/// Returns the cached plan for a goal, if one exists.
///
/// An entry that no longer decodes as a plan is reported and treated as a
/// miss.
pub fn lookup(store: &dyn KeyValueStore, goal: &str, settings: &Settings) -> Result<Option<Plan>> {
    let key = cache_key(goal, settings);
    let Some(raw) = store.get(&key)? else {
        debug!("Cache miss for {key}");
        return Ok(None);
    };

    match serde_json::from_str::<Plan>(&raw) {
        Ok(plan) => {
            debug!("Cache hit for {key}");
            Ok(Some(plan))
        }
        Err(e) => {
            warn!("Ignoring unreadable cache entry {key}: {e}");
            Ok(None)
        }
    }
}

/// Caches a plan under the fingerprint of the goal and settings.
pub fn store(
    store: &mut dyn KeyValueStore,
    goal: &str,
    settings: &Settings,
    plan: &Plan,
) -> Result<()> {
    let key = cache_key(goal, settings);
    let value = serde_json::to_string(plan)?;
    store.set(&key, &value)
}
