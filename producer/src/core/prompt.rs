//! Prompt construction for name generation requests

/// Fewest names a single request asks for
pub const MIN_REQUEST_SIZE: usize = 20;
/// Most names a single request asks for
pub const MAX_REQUEST_SIZE: usize = 30;
/// Length limit stated to the model
pub const MAX_NAME_LETTERS: usize = 8;

/// Builds the category-parameterized prompt sent on every attempt
#[derive(Debug, Clone)]
pub struct PromptBuilder {
    request_size: usize,
    max_name_letters: usize,
}

impl PromptBuilder {
    /// Request size is clamped to 20..=30
    pub fn new(request_size: usize) -> Self {
        Self {
            request_size: request_size.clamp(MIN_REQUEST_SIZE, MAX_REQUEST_SIZE),
            max_name_letters: MAX_NAME_LETTERS,
        }
    }

    pub fn request_size(&self) -> usize {
        self.request_size
    }

    /// Build the prompt for a category (as typed by the user, trimmed)
    pub fn build(&self, category: &str) -> String {
        let request_size = self.request_size;
        let max_letters = self.max_name_letters;
        let category = category.trim();

        format!(
            r#"Suggest {request_size} very short (max {max_letters} letters), unique, and attractive brand names for a {category} startup.
Each name must also include a short and meaningful explanation in this format:
Name - Meaning
Example:
Nuvia - Fresh and new beginnings.
Write one name per line. Make sure the names are unique and do not repeat."#
        )
    }
}

impl Default for PromptBuilder {
    fn default() -> Self {
        Self::new(MAX_REQUEST_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_mentions_all_constraints() {
        let prompt = PromptBuilder::default().build("  coffee shop ");

        assert!(prompt.contains("Suggest 30 "));
        assert!(prompt.contains("max 8 letters"));
        assert!(prompt.contains("unique"));
        assert!(prompt.contains("for a coffee shop startup"));
        assert!(prompt.contains("Name - Meaning"));
    }

    #[test]
    fn test_request_size_is_clamped() {
        assert_eq!(PromptBuilder::new(5).request_size(), MIN_REQUEST_SIZE);
        assert_eq!(PromptBuilder::new(100).request_size(), MAX_REQUEST_SIZE);
        assert_eq!(PromptBuilder::new(25).request_size(), 25);
    }
}
