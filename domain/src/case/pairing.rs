//! Pairing of discovered schemas and prompts into test cases

use super::entities::TestCase;
use crate::discovery::DiscoveryReport;
use serde_json::Value;
use std::collections::HashSet;

/// Build the case list from discovered schemas and prompts.
///
/// A case exists for every base name present in both reports. Order follows
/// the schema report, and each name appears once.
pub fn pair_cases(schemas: &DiscoveryReport<Value>, prompts: &DiscoveryReport<String>) -> Vec<TestCase> {
    let mut seen = HashSet::new();
    schemas
        .entries()
        .iter()
        .filter(|entry| seen.insert(entry.file.base_name.as_str()))
        .filter_map(|entry| {
            let name = &entry.file.base_name;
            prompts
                .get(name)
                .map(|prompt| TestCase::new(name.clone(), prompt.clone(), entry.value.clone()))
        })
        .collect()
}
