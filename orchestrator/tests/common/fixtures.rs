//! Test fixtures and canned model output

use shared::ApiFailure;

/// Standard test data
pub struct TestFixtures;

impl TestFixtures {
    pub const CATEGORY: &'static str = "Tech";

    /// Twelve distinct names, more than one request returns
    pub const TWELVE_NAMES: [&'static str; 12] = [
        "Nova", "Brio", "Lumo", "Zest", "Kova", "Lyra", "Vexa", "Quil", "Orro", "Tavi", "Pyxo", "Mira",
    ];

    /// Numbered `Name - Meaning` lines, the format the prompt asks for
    pub fn model_output(names: &[&str]) -> String {
        names
            .iter()
            .enumerate()
            .map(|(i, name)| format!("{}. {} - Meaning of {}", i + 1, name, name))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// `count` generated names with a common prefix
    pub fn numbered_names(prefix: &str, count: usize) -> Vec<String> {
        (0..count).map(|i| format!("{prefix}{i}")).collect()
    }

    pub fn outage() -> ApiFailure {
        ApiFailure::ServiceUnavailable
    }
}
