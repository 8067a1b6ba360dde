//! Name extraction from raw model text
//!
//! The model is asked to answer one `Name - Meaning` pair per line. Anything
//! that does not fit that shape is dropped silently; parsing never fails.

use regex::Regex;
use shared::NameCandidate;

/// Separator between a name and its meaning
pub const NAME_SEPARATOR: &str = " - ";

/// Longest name (in characters) that is still displayed
pub const MAX_NAME_CHARS: usize = 32;

const BULLET_MARKERS: &[char] = &['-', '*', '•'];
const WRAPPING_MARKS: &[char] = &['*', '_', '"', '`'];

/// Turns model output into `(name, meaning)` candidates in source line order
#[derive(Debug, Clone)]
pub struct NameParser {
    numbering: Regex,
    max_name_chars: usize,
}

impl NameParser {
    pub fn new() -> Self {
        Self::with_max_name_chars(MAX_NAME_CHARS)
    }

    pub fn with_max_name_chars(max_name_chars: usize) -> Self {
        // "3) ", "12. ", "7."
        let numbering = Regex::new(r"^\d+[.)]\s*").expect("numbering pattern is a valid regex");
        Self {
            numbering,
            max_name_chars,
        }
    }

    /// Lazily parse raw text; the iterator can be rebuilt from the same text any number of times
    pub fn parse<'a>(&'a self, raw: &'a str) -> impl Iterator<Item = NameCandidate> + 'a {
        raw.lines().filter_map(move |line| self.parse_line(line))
    }

    /// Parse raw text into an owned list
    pub fn parse_all(&self, raw: &str) -> Vec<NameCandidate> {
        self.parse(raw).collect()
    }

    /// Parse a single line, `None` when it is not a usable pair
    pub fn parse_line(&self, line: &str) -> Option<NameCandidate> {
        let (raw_name, meaning) = line.trim().split_once(NAME_SEPARATOR)?;

        let name = self.clean_name(raw_name)?;
        let meaning = meaning.trim();
        if meaning.is_empty() {
            return None;
        }

        Some(NameCandidate::new(name, meaning))
    }

    fn clean_name(&self, raw_name: &str) -> Option<String> {
        let unbulleted = raw_name.trim().trim_start_matches(BULLET_MARKERS).trim_start();
        let unnumbered = self.numbering.replace(unbulleted, "");
        let name = unnumbered.trim().trim_matches(WRAPPING_MARKS).trim();

        if name.is_empty() || name.chars().count() > self.max_name_chars {
            return None;
        }
        Some(name.to_string())
    }
}

impl Default for NameParser {
    fn default() -> Self {
        Self::new()
    }
}
