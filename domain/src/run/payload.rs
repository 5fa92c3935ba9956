//! Run payload sent to `/v1/ci/run`

use crate::case::entities::TestCase;
use serde::{Deserialize, Serialize};

/// One provider/model pair to run every case against.
///
/// Unset values are omitted from the wire format rather than sent as null.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderTarget {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
}

impl ProviderTarget {
    pub fn new(provider: Option<String>, model: Option<String>) -> Self {
        Self { provider, model }
    }
}

/// Request body for a CI run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payload {
    pub provider_matrix: Vec<ProviderTarget>,
    pub seeds: Vec<u64>,
    pub cases: Vec<TestCase>,
    pub mode: String,
}

impl Payload {
    /// Assemble a payload for a single provider target.
    ///
    /// `seed_count` is clamped to `1..=MAX_SEEDS`, see [`seed_range`].
    pub fn new(
        target: ProviderTarget,
        seed_count: i64,
        cases: Vec<TestCase>,
        mode: impl Into<String>,
    ) -> Self {
        Self {
            provider_matrix: vec![target],
            seeds: seed_range(seed_count),
            cases,
            mode: mode.into(),
        }
    }

    pub fn case_names(&self) -> impl Iterator<Item = &str> {
        self.cases.iter().map(|c| c.name.as_str())
    }
}

/// Upper bound on seeds per run
pub const MAX_SEEDS: i64 = 10_000;

/// Seed indices `0..clamp(seed_count, 1, MAX_SEEDS)`; never empty
pub fn seed_range(seed_count: i64) -> Vec<u64> {
    let count = seed_count.clamp(1, MAX_SEEDS) as u64;
    (0..count).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_seed_range_floors_at_one() {
        assert_eq!(seed_range(0), vec![0]);
        assert_eq!(seed_range(-5), vec![0]);
        assert_eq!(seed_range(1), vec![0]);
        assert_eq!(seed_range(3), vec![0, 1, 2]);
    }

    #[test]
    fn test_seed_range_is_capped() {
        assert_eq!(seed_range(i64::MAX).len(), MAX_SEEDS as usize);
        assert_eq!(seed_range(MAX_SEEDS + 1).last(), Some(&(MAX_SEEDS as u64 - 1)));
    }

    #[test]
    fn test_payload_wire_shape() {
        let payload = Payload::new(
            ProviderTarget::new(Some("openai".into()), Some("gpt-4o".into())),
            2,
            vec![TestCase::new("foo", "describe a foo", json!({"type": "object"}))],
            "validate",
        );

        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!({
                "provider_matrix": [{"provider": "openai", "model": "gpt-4o"}],
                "seeds": [0, 1],
                "cases": [{"name": "foo", "prompt": "describe a foo", "schema": {"type": "object"}}],
                "mode": "validate"
            })
        );
    }

    #[test]
    fn test_unset_provider_fields_are_omitted() {
        let payload = Payload::new(ProviderTarget::default(), 1, vec![], "validate");
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["provider_matrix"], json!([{}]));
    }

    #[test]
    fn test_empty_provider_is_sent_as_empty_string() {
        let target = ProviderTarget::new(Some(String::new()), None);
        assert_eq!(serde_json::to_value(&target).unwrap(), json!({"provider": ""}));
    }

    #[test]
    fn test_case_names() {
        let payload = Payload::new(
            ProviderTarget::default(),
            1,
            vec![
                TestCase::new("a", "p", json!({})),
                TestCase::new("b", "p", json!({})),
            ],
            "validate",
        );
        assert_eq!(payload.case_names().collect::<Vec<_>>(), vec!["a", "b"]);
    }
}
