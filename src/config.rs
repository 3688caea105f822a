//! Presentation settings for the booking wizard.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("booking config JSON is malformed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("year {year} and month {month} do not name a calendar month")]
    InvalidMonth { year: i32, month: u32 },
}

/// Values baked into the confirmation text.
///
/// Dates in the catalog only carry a day of month; the year and month shown
/// in the summary come from here.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BookingConfig {
    pub year: i32,
    pub month: u32,
}

impl Default for BookingConfig {
    fn default() -> Self {
        Self {
            year: 2025,
            month: 7,
        }
    }
}

impl BookingConfig {
    /// Parse and validate a config document. Missing fields keep their
    /// defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
            .map(|_| ())
            .ok_or(ConfigError::InvalidMonth {
                year: self.year,
                month: self.month,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_booking_season() {
        let config = BookingConfig::default();
        assert_eq!(config.year, 2025);
        assert_eq!(config.month, 7);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config = BookingConfig::from_json(r#"{ "month": 8 }"#).unwrap();
        assert_eq!(config.year, 2025);
        assert_eq!(config.month, 8);
    }

    #[test]
    fn rejects_month_out_of_range() {
        let result = BookingConfig::from_json(r#"{ "month": 13 }"#);
        assert!(matches!(
            result,
            Err(ConfigError::InvalidMonth { month: 13, .. })
        ));
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(matches!(
            BookingConfig::from_json("{ month: }"),
            Err(ConfigError::Json(_))
        ));
    }
}
