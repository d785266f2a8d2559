//! JSON configuration for building a converter: target zone, anchor and
//! extra calendar rows merged over the built-in table.
//!
//! ```json
//! {
//!   "timezone": "Asia/Kathmandu",
//!   "anchor": { "gregorian": "2025-01-14", "bs": "2081/10/01" },
//!   "calendar": { "2083": [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30] }
//! }
//! ```

use std::path::Path;

use chrono::NaiveDate;
use serde::Deserialize;
use tracing::info;

use crate::clock::Clock;
use crate::consts::TARGET_TIMEZONE;
use crate::converter::{AnchorPoint, BsConverter, ConversionError};
use crate::table::CalendarTable;
use crate::BsDate;

/// Error type for loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Could not read configuration: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Build(#[from] ConversionError),
}

/// Top-level converter configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConverterConfig {
    /// IANA zone whose wall clock defines the day.
    #[serde(default = "default_timezone")]
    pub timezone: String,

    /// Known Gregorian/BS correspondence.
    #[serde(default)]
    pub anchor: AnchorConfig,

    /// Rows added to (or replacing) the built-in table.
    #[serde(default)]
    pub calendar: CalendarTable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AnchorConfig {
    pub gregorian: NaiveDate,
    /// Short form, 1-based month: `2081/10/01`
    pub bs:        BsDate,
}

fn default_timezone() -> String {
    TARGET_TIMEZONE.to_string()
}

impl Default for AnchorConfig {
    fn default() -> Self {
        let anchor = AnchorPoint::builtin();
        Self {
            gregorian: anchor.gregorian(),
            bs:        anchor.bs(),
        }
    }
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            timezone: default_timezone(),
            anchor:   AnchorConfig::default(),
            calendar: CalendarTable::new(),
        }
    }
}

impl From<AnchorConfig> for AnchorPoint {
    fn from(config: AnchorConfig) -> Self {
        Self::new(config.gregorian, config.bs)
    }
}

impl ConverterConfig {
    /// # Errors
    /// Returns `ConfigError::Parse` for malformed JSON or invalid calendar rows.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// # Errors
    /// Returns `ConfigError::Io` if the file can't be read, otherwise as [`Self::from_json`].
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Builds a converter reading time from `clock`
    ///
    /// # Errors
    /// Returns `ConfigError::Build` for an unknown timezone or an anchor the
    /// merged table cannot place.
    pub fn build(self, clock: impl Clock + Send + Sync + 'static) -> Result<BsConverter, ConfigError> {
        let timezone = self
            .timezone
            .parse::<chrono_tz::Tz>()
            .map_err(|_| ConversionError::UnknownTimezone(self.timezone.clone()))?;

        let mut table = CalendarTable::builtin();
        let extra = self.calendar.len();
        table.extend(self.calendar);
        info!(
            timezone = %self.timezone,
            extra_years = extra,
            coverage = ?table.coverage(),
            "building converter from config"
        );

        Ok(BsConverter::try_new(table, self.anchor.into(), timezone, clock)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::{FixedClock, SystemClock};
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = ConverterConfig::from_json("{}").unwrap();
        assert_eq!(config, ConverterConfig::default());
        assert_eq!(config.timezone, "Asia/Kathmandu");

        let converter = config.build(SystemClock).unwrap();
        assert_eq!(converter.anchor(), &AnchorPoint::builtin());
        assert_eq!(converter.table().coverage(), Some((2081, 2082)));
    }

    #[test]
    fn test_calendar_rows_extend_builtin() {
        let config = ConverterConfig::from_json(
            r#"{
                "anchor": { "gregorian": "2025-01-14", "bs": "२०८१/१०/०१" },
                "calendar": { "2083": [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30] }
            }"#,
        )
        .unwrap();
        let instant = Utc.with_ymd_and_hms(2026, 4, 14, 6, 0, 0).unwrap();
        let converter = config.build(FixedClock::new(instant)).unwrap();
        assert_eq!(converter.table().coverage(), Some((2081, 2083)));
        assert_eq!(
            converter.current_bs_date_time().unwrap(),
            "२०८३ साल बैशाख १ गते, मंगलबार (समय: ११:४५ पूर्वाह्न)"
        );
    }

    #[test]
    fn test_rejects_bad_input() {
        assert!(matches!(
            ConverterConfig::from_json(r#"{"zone": "UTC"}"#),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            ConverterConfig::from_json(r#"{"calendar": {"2083": [30, 30]}}"#),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            ConverterConfig::from_json(r#"{"anchor": {"gregorian": "2025-01-14", "bs": "2081/13/01"}}"#),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_build_failures() {
        let config = ConverterConfig {
            timezone: "Nowhere/Special".to_owned(),
            ..ConverterConfig::default()
        };
        assert!(matches!(
            config.build(SystemClock),
            Err(ConfigError::Build(ConversionError::UnknownTimezone(_)))
        ));

        let config = ConverterConfig::from_json(
            r#"{"anchor": {"gregorian": "2000-01-01", "bs": "2056/09/17"}}"#,
        )
        .unwrap();
        assert!(matches!(
            config.build(SystemClock),
            Err(ConfigError::Build(ConversionError::AnchorOutOfRange { .. }))
        ));
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            ConverterConfig::from_path("/nonexistent/bs_date.json"),
            Err(ConfigError::Io(_))
        ));
    }
}
