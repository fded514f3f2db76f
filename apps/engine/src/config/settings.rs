//! Application settings loaded from environment variables.

use std::env;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::state::DealMode;
use crate::error::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Language {
    En,
    He,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Theme {
    Light,
    Dark,
    Auto,
}

/// Engine-facing application settings. Presentation flags are carried for
/// persistence parity with consumers; only `default_deal_mode` and
/// `language` feed engine behavior.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppSettings {
    pub language: Language,
    pub theme: Theme,
    pub animations: bool,
    pub sound_enabled: bool,
    pub notifications: bool,
    pub default_deal_mode: DealMode,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            language: Language::En,
            theme: Theme::Auto,
            animations: true,
            sound_enabled: true,
            notifications: true,
            default_deal_mode: DealMode::Random,
        }
    }
}

impl AppSettings {
    /// Build settings from the environment, falling back to defaults for
    /// unset variables and failing on unparseable values.
    ///
    /// Recognized variables: `FAIRPLAY_LANG`, `FAIRPLAY_THEME`,
    /// `FAIRPLAY_DEFAULT_DEAL_MODE`, `FAIRPLAY_ANIMATIONS`,
    /// `FAIRPLAY_SOUND`, `FAIRPLAY_NOTIFICATIONS`.
    pub fn from_env() -> Result<Self, AppError> {
        let defaults = Self::default();
        Ok(Self {
            language: parse_var("FAIRPLAY_LANG", defaults.language, |s| match s {
                "en" => Some(Language::En),
                "he" => Some(Language::He),
                _ => None,
            })?,
            theme: parse_var("FAIRPLAY_THEME", defaults.theme, |s| match s {
                "light" => Some(Theme::Light),
                "dark" => Some(Theme::Dark),
                "auto" => Some(Theme::Auto),
                _ => None,
            })?,
            animations: bool_var("FAIRPLAY_ANIMATIONS", defaults.animations)?,
            sound_enabled: bool_var("FAIRPLAY_SOUND", defaults.sound_enabled)?,
            notifications: bool_var("FAIRPLAY_NOTIFICATIONS", defaults.notifications)?,
            default_deal_mode: parse_var(
                "FAIRPLAY_DEFAULT_DEAL_MODE",
                defaults.default_deal_mode,
                |s| DealMode::from_str(s).ok(),
            )?,
        })
    }
}

fn parse_var<T>(
    name: &str,
    default: T,
    parse: impl FnOnce(&str) -> Option<T>,
) -> Result<T, AppError> {
    match env::var(name) {
        Err(_) => Ok(default),
        Ok(raw) => parse(raw.as_str())
            .ok_or_else(|| AppError::config(format!("Invalid value for {name}: '{raw}'"))),
    }
}

fn bool_var(name: &str, default: bool) -> Result<bool, AppError> {
    parse_var(name, default, |s| match s {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    })
}
