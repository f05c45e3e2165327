use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Largest `places` value accepted by [`EngineeringSettings::validate`].
pub const MAX_PLACES_CEILING: usize = 255;

/// How an explicit `places` argument interacts with a negative value in `DEC2BIN`-style
/// conversions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NegativePlaces {
    /// Treat the two's complement digit string like any other: it must fit in `places` and is
    /// left-padded with zeros.
    #[default]
    Pad,
    /// Ignore `places` for negative values and always return the full 10-digit pattern, as
    /// desktop spreadsheet applications do.
    Ignore,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineeringSettings {
    pub negative_places: NegativePlaces,
    /// Upper bound for the `places` argument. Larger requests fail with `#NUM!`. Defaults to
    /// [`MAX_PLACES_CEILING`]; set it to 10 to refuse padding past the digit limit.
    pub max_places: usize,
}

impl Default for EngineeringSettings {
    fn default() -> Self {
        Self {
            negative_places: NegativePlaces::Pad,
            max_places: MAX_PLACES_CEILING,
        }
    }
}

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("invalid engineering settings JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("max_places must be between 1 and 255, got {0}")]
    MaxPlaces(usize),
}

impl EngineeringSettings {
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        log::debug!("loaded engineering settings: {settings:?}");
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.max_places == 0 || self.max_places > MAX_PLACES_CEILING {
            return Err(SettingsError::MaxPlaces(self.max_places));
        }
        Ok(())
    }
}
