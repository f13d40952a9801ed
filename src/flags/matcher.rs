//! Flag format matching.
//!
//! # Responsibilities
//! - Compile the configured flag pattern once
//! - Test whether text begins with a flag (anchored match)
//! - Scan payloads for flags anywhere (unanchored, tagging only)
//!
//! # Design Decisions
//! - The anchored form wraps the pattern as `^(?:pattern)` so a top-level
//!   alternation cannot escape the anchor
//! - An invalid pattern is a construction error, never a silent default
//! - The pattern is captured at construction; environment changes afterwards
//!   do not reach an existing matcher

use regex::Regex;

/// Compiled flag pattern.
#[derive(Debug, Clone)]
pub struct FlagMatcher {
    pattern: String,
    anchored: Regex,
    scanner: Regex,
}

impl FlagMatcher {
    /// Compile a flag pattern.
    ///
    /// The raw pattern is compiled first so a syntax error quotes the pattern
    /// as written, not its anchored form.
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        let scanner = Regex::new(pattern)?;
        let anchored = Regex::new(&format!("^(?:{})", pattern))?;
        Ok(Self {
            pattern: pattern.to_string(),
            anchored,
            scanner,
        })
    }

    /// The pattern as configured, without the anchor.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// True if `text` starts with a flag.
    ///
    /// A flag appearing later in the text does not count; use
    /// [`FlagMatcher::find_flags`] to scan a whole payload.
    pub fn contains_flag(&self, text: &str) -> bool {
        self.anchored.is_match(text)
    }

    /// The flag at the start of `text`, if any.
    pub fn match_flag<'t>(&self, text: &'t str) -> Option<&'t str> {
        self.anchored.find(text).map(|m| m.as_str())
    }

    /// True if a flag appears anywhere in `text`.
    pub fn has_flag(&self, text: &str) -> bool {
        self.scanner.is_match(text)
    }

    /// Every non-overlapping flag anywhere in `text`.
    pub fn find_flags<'t>(&self, text: &'t str) -> Vec<&'t str> {
        self.scanner.find_iter(text).map(|m| m.as_str()).collect()
    }
}
