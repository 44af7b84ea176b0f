//! Settings persistence.

use log::warn;

use super::{KeyValueStore, SETTINGS_KEY};
use crate::{error::Result, models::Settings};

/// Loads the stored settings, or the defaults when none are stored.
///
/// Unreadable settings are reported and replaced by the defaults.
pub fn load_settings(store: &dyn KeyValueStore) -> Result<Settings> {
    let Some(raw) = store.get(SETTINGS_KEY)? else {
        return Ok(Settings::default());
    };

    Ok(serde_json::from_str(&raw).unwrap_or_else(|e| {
        warn!("Stored settings are unreadable, using defaults: {e}");
        Settings::default()
    }))
}

pub fn save_settings(store: &mut dyn KeyValueStore, settings: &Settings) -> Result<()> {
    let value = serde_json::to_string(settings)?;
    store.set(SETTINGS_KEY, &value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        models::{Language, ModelTier},
        store::Database,
    };

    #[test]
    fn test_defaults_when_absent() {
        let db = Database::in_memory().unwrap();
        assert_eq!(load_settings(&db).unwrap(), Settings::default());
    }

    #[test]
    fn test_save_then_load() {
        let mut db = Database::in_memory().unwrap();
        let settings = Settings {
            model: ModelTier::Complex,
            language: Language::Chinese,
            custom_instructions: "Use metaphors".to_string(),
        };
        save_settings(&mut db, &settings).unwrap();
        assert_eq!(load_settings(&db).unwrap(), settings);
    }

    #[test]
    fn test_reads_browser_settings() {
        let mut db = Database::in_memory().unwrap();
        db.set(
            SETTINGS_KEY,
            r#"{"model":"gemini-3-pro-preview","customInstructions":"","language":"French"}"#,
        )
        .unwrap();
        let settings = load_settings(&db).unwrap();
        assert_eq!(settings.model, ModelTier::Complex);
        assert_eq!(settings.language, Language::French);
    }

    #[test]
    fn test_unreadable_settings_fall_back() {
        let mut db = Database::in_memory().unwrap();
        db.set(SETTINGS_KEY, r#"{"model":"gpt-4"}"#).unwrap();
        assert_eq!(load_settings(&db).unwrap(), Settings::default());
    }
}
