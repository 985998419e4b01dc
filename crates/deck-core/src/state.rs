//! Presentation settings

use std::path::{Path, PathBuf};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::DeckError;

/// Settings file looked up in the working directory
pub const SETTINGS_FILE: &str = "slidedeck.json";

/// Environment variable overriding the settings file location
pub const SETTINGS_ENV: &str = "SLIDEDECK_CONFIG";

/// Visual variant of the slide frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StyleVariant {
    /// Framed card with a drop shadow
    #[default]
    Card,
    /// Flat layout without a frame
    Plain,
}

/// How one slide replaces another
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransitionKind {
    /// Fade out to the left, fade in from the right
    #[default]
    Slide,
    /// Cross-fade in place
    Fade,
    /// Swap immediately
    None,
}

/// Transition timing
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TransitionSettings {
    pub kind: TransitionKind,
    /// Duration of each phase (exit, then enter) in seconds
    pub duration_secs: f32,
    /// Horizontal travel in points
    pub offset: f32,
}

impl Default for TransitionSettings {
    fn default() -> Self {
        Self {
            kind: TransitionKind::Slide,
            duration_secs: 0.3,
            offset: 100.0,
        }
    }
}

/// Application settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DeckSettings {
    pub window_title: String,
    pub window_size: [f32; 2],
    pub dark_mode: bool,
    pub variant: StyleVariant,
    pub transition: TransitionSettings,
    pub show_indicators: bool,
    /// CJK-capable font to install; system locations are searched when unset
    pub font_path: Option<PathBuf>,
}

impl Default for DeckSettings {
    fn default() -> Self {
        Self {
            window_title: "生成AI活用入門".to_string(),
            window_size: [1024.0, 768.0],
            dark_mode: false,
            variant: StyleVariant::Card,
            transition: TransitionSettings::default(),
            show_indicators: true,
            font_path: None,
        }
    }
}

impl DeckSettings {
    /// Parse and validate settings from JSON
    pub fn from_json(json: &str) -> Result<Self, DeckError> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a file
    pub fn load(path: &Path) -> Result<Self, DeckError> {
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        debug!("Loaded settings from {:?}", path);
        Ok(settings)
    }

    /// Settings file to use, if any: `$SLIDEDECK_CONFIG`, then `./slidedeck.json`
    pub fn locate() -> Option<PathBuf> {
        if let Some(path) = std::env::var_os(SETTINGS_ENV) {
            return Some(PathBuf::from(path));
        }
        let local = PathBuf::from(SETTINGS_FILE);
        local.exists().then_some(local)
    }

    pub fn validate(&self) -> Result<(), DeckError> {
        let duration = self.transition.duration_secs;
        if !duration.is_finite() || duration < 0.0 {
            return Err(DeckError::Settings(format!(
                "transition.duration_secs must be a non-negative number, got {duration}"
            )));
        }
        if !self.transition.offset.is_finite() {
            return Err(DeckError::Settings("transition.offset must be finite".to_string()));
        }
        if self.window_size.iter().any(|d| !d.is_finite() || *d <= 0.0) {
            return Err(DeckError::Settings(format!(
                "window_size must be positive, got {:?}",
                self.window_size
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_gives_defaults() {
        let settings = DeckSettings::from_json("{}").unwrap();
        assert_eq!(settings, DeckSettings::default());
        assert_eq!(settings.transition.duration_secs, 0.3);
        assert_eq!(settings.variant, StyleVariant::Card);
    }

    #[test]
    fn test_partial_settings() {
        let settings = DeckSettings::from_json(
            r#"{ "dark_mode": true, "variant": "plain", "transition": { "kind": "fade" } }"#,
        )
        .unwrap();
        assert!(settings.dark_mode);
        assert_eq!(settings.variant, StyleVariant::Plain);
        assert_eq!(settings.transition.kind, TransitionKind::Fade);
        assert_eq!(settings.transition.offset, 100.0);
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        let err = DeckSettings::from_json(r#"{ "dark": true }"#).unwrap_err();
        assert!(matches!(err, DeckError::Settings(_)));
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        assert!(DeckSettings::from_json(r#"{ "transition": { "duration_secs": -1.0 } }"#).is_err());
        assert!(DeckSettings::from_json(r#"{ "window_size": [0.0, 600.0] }"#).is_err());
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let err = DeckSettings::load(Path::new("definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, DeckError::Io(_)));
    }

    #[test]
    fn test_serialized_settings_load_back() {
        let mut settings = DeckSettings::default();
        settings.dark_mode = true;
        settings.transition.kind = TransitionKind::None;
        let json = serde_json::to_string(&settings).unwrap();
        assert_eq!(DeckSettings::from_json(&json).unwrap(), settings);
    }
}
