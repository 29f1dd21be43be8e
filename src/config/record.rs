//! Wire record used by configuration storage.
//!
//! The record is what the surrounding application writes to disk:
//!
//! ```json
//! {
//!   "radius": 1,
//!   "decayStates": 0,
//!   "agingEnabled": 0,
//!   "survivalInterval": [2, 3],
//!   "birthInterval": [3, 3],
//!   "neighbourhoodCode": "NM"
//! }
//! ```
//!
//! Fields are plain integers so that out-of-range values survive decoding
//! and get reported by validation instead of by the JSON layer.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::rules::Configuration;
use crate::core::{EngineError, Result};

/// Storage form of a [`Configuration`]: exactly six named fields.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ConfigRecord {
    pub radius: i64,
    pub decay_states: i64,
    /// 0 or 1.
    pub aging_enabled: i64,
    pub survival_interval: [i64; 2],
    pub birth_interval: [i64; 2],
    pub neighbourhood_code: String,
}

impl ConfigRecord {
    /// Field names as they appear in the stored record.
    pub const FIELDS: [&'static str; 6] = [
        "radius",
        "decayStates",
        "agingEnabled",
        "survivalInterval",
        "birthInterval",
        "neighbourhoodCode",
    ];

    /// Keys in `keys` that are not record fields, in input order.
    pub fn unknown_fields<'a>(keys: impl IntoIterator<Item = &'a str>) -> Vec<&'a str> {
        keys.into_iter()
            .filter(|key| !Self::FIELDS.iter().any(|field| field == key))
            .collect()
    }

    /// Validate and convert into a [`Configuration`].
    pub fn validate(&self) -> Result<Configuration> {
        let radius = narrow::<u8>("radius", self.radius)?;
        let aging_depth = narrow::<u8>("decayStates", self.decay_states)?;
        let aging_enabled = match self.aging_enabled {
            0 => false,
            1 => true,
            other => {
                return Err(EngineError::validation(
                    "agingEnabled",
                    format!("must be 0 or 1, got {other}"),
                ))
            }
        };
        let survival = narrow_pair("survivalInterval", self.survival_interval)?;
        let birth = narrow_pair("birthInterval", self.birth_interval)?;
        let shape = self.neighbourhood_code.parse()?;

        Configuration::new(radius, aging_depth, aging_enabled, survival, birth, shape)
    }
}

fn narrow<T: TryFrom<i64>>(field: &'static str, value: i64) -> Result<T> {
    T::try_from(value).map_err(|_| EngineError::validation(field, format!("{value} is out of range")))
}

fn narrow_pair(field: &'static str, [min, max]: [i64; 2]) -> Result<(u16, u16)> {
    Ok((narrow(field, min)?, narrow(field, max)?))
}

impl From<Configuration> for ConfigRecord {
    fn from(config: Configuration) -> Self {
        let survival = config.survival();
        let birth = config.birth();
        Self {
            radius: i64::from(config.radius()),
            decay_states: i64::from(config.aging_depth()),
            aging_enabled: i64::from(config.aging_enabled()),
            survival_interval: [i64::from(survival.min()), i64::from(survival.max())],
            birth_interval: [i64::from(birth.min()), i64::from(birth.max())],
            neighbourhood_code: config.shape().code().to_string(),
        }
    }
}

impl TryFrom<ConfigRecord> for Configuration {
    type Error = EngineError;

    fn try_from(record: ConfigRecord) -> Result<Self> {
        record.validate().map_err(|err| {
            debug!(%err, ?record, "rejected configuration record");
            err
        })
    }
}
