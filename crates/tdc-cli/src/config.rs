//! Configuration loading and management.
//!
//! Settings are layered with `figment`, later sources winning:
//! built-in defaults, `<config_dir>/tdc/config.toml`, an explicit `--config`
//! file, `TDC_*` environment variables, then command-line overrides.

use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::NaiveDate;
use figment::Figment;
use figment::providers::{Env, Format, Json, Serialized, Toml};
use serde::{Deserialize, Serialize};

use tdc_core::{
    CountryCode, DEFAULT_THRESHOLD, HomeConfig, ReportConfig, ResidencyConfig, StatsError,
};

use crate::lang::Language;

/// Application configuration, as read from files and the environment.
///
/// Enum-like options stay strings here so that a bad value is reported by
/// [`Config::report_config`] with the offending text rather than by serde.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path to the `DATE,ENTERED` history file.
    pub source: PathBuf,
    /// Output language: en, ko, ko-hanja or zh.
    pub lang: String,
    pub track_home: bool,
    pub home_code: Option<String>,
    pub home_name: Option<String>,
    pub track_residency: bool,
    pub residency_code: Option<String>,
    pub residency_name: Option<String>,
    pub residency_begin: Option<NaiveDate>,
    /// short or full.
    pub table_style: String,
    /// chrono or disabled.
    pub report_style: String,
    /// Short-table cutoff in days.
    pub threshold: i64,
}

impl Default for Config {
    fn default() -> Self {
        let data_dir = dirs_data_path().unwrap_or_else(|| PathBuf::from("."));
        Self {
            source: data_dir.join("history.csv"),
            lang: Language::default().to_string(),
            track_home: false,
            home_code: None,
            home_name: None,
            track_residency: false,
            residency_code: None,
            residency_name: None,
            residency_begin: None,
            table_style: "short".to_string(),
            report_style: "chrono".to_string(),
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

/// Values given on the command line; unset fields leave lower layers alone.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ConfigOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lang: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table_style: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report_style: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub threshold: Option<i64>,
}

impl Config {
    /// Loads configuration and applies command-line overrides on top.
    #[expect(
        clippy::result_large_err,
        reason = "figment::Error is large but only returned at startup"
    )]
    pub fn load_with(
        config_path: Option<&Path>,
        overrides: &ConfigOverrides,
    ) -> Result<Self, figment::Error> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Load from default config location
        if let Some(config_dir) = dirs_config_path() {
            figment = figment.merge(Toml::file(config_dir.join("config.toml")));
        }

        // Load from specified config file; JSON keeps older config.json files working
        if let Some(path) = config_path {
            let is_json = path
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
            figment = if is_json {
                figment.merge(Json::file(path))
            } else {
                figment.merge(Toml::file(path))
            };
        }

        // Load from environment variables (TDC_*)
        figment = figment.merge(Env::prefixed("TDC_"));

        figment = figment.merge(Serialized::defaults(overrides));

        figment.extract()
    }

    /// Validates the settings into the engine's configuration.
    pub fn report_config(&self) -> Result<ReportConfig, StatsError> {
        let table_style = self.table_style.parse()?;
        let report_style = self.report_style.parse()?;

        let home = if self.track_home {
            let code = non_empty(self.home_code.as_deref()).ok_or(StatsError::MissingSetting {
                setting: "home_code",
                section: "track_home",
            })?;
            Some(HomeConfig {
                code,
                name: self.home_name.clone().filter(|name| !name.is_empty()),
            })
        } else {
            None
        };

        let residency = if self.track_residency {
            let begin = self.residency_begin.ok_or(StatsError::MissingSetting {
                setting: "residency_begin",
                section: "track_residency",
            })?;
            Some(ResidencyConfig {
                code: non_empty(self.residency_code.as_deref()),
                name: self.residency_name.clone().filter(|name| !name.is_empty()),
                begin,
            })
        } else {
            None
        };

        Ok(ReportConfig {
            home,
            residency,
            table_style,
            report_style,
            threshold: self.threshold,
        })
    }

    /// Parses the configured output language.
    pub fn language(&self) -> anyhow::Result<Language> {
        self.lang.parse().context("invalid lang setting")
    }
}

fn non_empty(code: Option<&str>) -> Option<CountryCode> {
    code.and_then(|code| CountryCode::new(code).ok())
}

/// Returns the platform-specific config directory for tdc.
fn dirs_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("tdc"))
}

/// Returns the platform-specific data directory for tdc.
///
/// On Linux: `~/.local/share/tdc`
pub fn dirs_data_path() -> Option<PathBuf> {
    dirs::data_dir().map(|p| p.join("tdc"))
}
