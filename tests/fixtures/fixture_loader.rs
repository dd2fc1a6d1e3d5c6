/// Fixture loader
///
/// Each JSON entry is either a comment string or an operation case:
/// `{"op": "combine", "args": ["pear/", "/apple"], "expected": "pear/apple"}`.
/// `null` arguments stand for absent values. Integer operations carry their
/// `[min, max, default]` triple in `bounds`.
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Deserialize, Clone)]
#[serde(untagged)]
pub enum TestCase {
    /// An operation case
    Operation {
        op: String,
        #[serde(default)]
        args: Vec<Option<String>>,
        #[serde(default)]
        bounds: Option<[i64; 3]>,
        expected: Value,
    },
    /// A comment line (string)
    #[allow(dead_code)]
    Comment(String),
}

#[derive(Debug, Clone)]
pub struct FixtureFailure {
    pub test_num: usize,
    pub op: String,
    pub args: Vec<Option<String>>,
    pub expected: Value,
    pub actual: Value,
}

#[derive(Debug, Clone, Default)]
pub struct FixtureResult {
    pub passed: usize,
    pub failed: usize,
    pub failures: Vec<FixtureFailure>,
}

impl FixtureResult {
    pub fn summary(&self) -> String {
        format!("Passed: {}, Failed: {}", self.passed, self.failed)
    }
}

/// Parse a fixture table
pub fn load(data: &str) -> Vec<TestCase> {
    serde_json::from_str(data).expect("Failed to parse fixture data")
}
