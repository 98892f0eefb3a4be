//! Configuration for the record store.

use serde::{Deserialize, Serialize};

/// Slot key used when none is configured.
pub const DEFAULT_SLOT_KEY: &str = "employees";

/// What to do when the slot holds a payload that cannot be decoded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CorruptPayloadPolicy {
    /// Return [`RosterError::Deserialization`](crate::RosterError) and stay
    /// unloaded; the next operation reads the slot again.
    #[default]
    Fail,
    /// Log the loss, clear the slot, and start from an empty collection.
    DiscardAndStartEmpty,
}

/// Configuration for an [`EmployeeStore`](crate::EmployeeStore).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RosterConfig {
    /// Name of the durable slot holding the collection.
    pub slot_key: String,
    /// Recovery policy for a malformed payload.
    pub corrupt_payload: CorruptPayloadPolicy,
}

impl RosterConfig {
    /// Use a different slot key.
    pub fn with_slot_key(mut self, key: impl Into<String>) -> Self {
        self.slot_key = key.into();
        self
    }

    /// Use a different corrupt-payload policy.
    pub fn with_corrupt_payload(mut self, policy: CorruptPayloadPolicy) -> Self {
        self.corrupt_payload = policy;
        self
    }
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            slot_key: DEFAULT_SLOT_KEY.to_string(),
            corrupt_payload: CorruptPayloadPolicy::Fail,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = RosterConfig::default();
        assert_eq!(config.slot_key, "employees");
        assert_eq!(config.corrupt_payload, CorruptPayloadPolicy::Fail);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: RosterConfig =
            serde_json::from_str(r#"{"corrupt_payload":"discard_and_start_empty"}"#).unwrap();
        assert_eq!(config.slot_key, DEFAULT_SLOT_KEY);
        assert_eq!(
            config.corrupt_payload,
            CorruptPayloadPolicy::DiscardAndStartEmpty
        );
    }

    #[test]
    fn test_builders() {
        let config = RosterConfig::default()
            .with_slot_key("staff")
            .with_corrupt_payload(CorruptPayloadPolicy::DiscardAndStartEmpty);
        assert_eq!(config.slot_key, "staff");
        assert_eq!(
            config.corrupt_payload,
            CorruptPayloadPolicy::DiscardAndStartEmpty
        );
    }
}
