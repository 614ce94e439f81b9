//! Pattern rules for productive sentence templates
//!
//! A rule pairs a regular expression with a template such as
//! `"मेरो नाम {1} हो"`. `{n}` is replaced with the trimmed text of capture
//! group `n`; a group that did not participate in the match becomes empty.
//! Rules are tried in the order they were added and the first match wins.

use crate::lexicon::LanguagePair;
use regex::{Captures, Regex};
use std::collections::HashMap;
use std::sync::LazyLock;

static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{(\d+)\}").expect("placeholder regex is valid"));

/// A single regex → template rule
#[derive(Debug, Clone)]
pub struct PatternRule {
    regex: Regex,
    template: String,
}

impl PatternRule {
    pub fn new(pattern: &str, template: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            regex: Regex::new(pattern)?,
            template: template.to_string(),
        })
    }

    pub fn pattern(&self) -> &str {
        self.regex.as_str()
    }

    pub fn template(&self) -> &str {
        &self.template
    }

    /// Apply the rule, returning `None` when the regex does not match
    pub fn apply(&self, text: &str) -> Option<String> {
        let captures = self.regex.captures(text)?;
        Some(substitute(&self.template, &captures))
    }
}

/// Replace `{n}` placeholders with trimmed capture groups
fn substitute(template: &str, captures: &Captures<'_>) -> String {
    PLACEHOLDER
        .replace_all(template, |placeholder: &Captures<'_>| {
            placeholder[1]
                .parse::<usize>()
                .ok()
                .and_then(|group| captures.get(group))
                .map(|m| m.as_str().trim().to_string())
                .unwrap_or_default()
        })
        .into_owned()
}

/// Ordered rule lists per language pair
#[derive(Debug, Clone, Default)]
pub struct PatternMatcher {
    rules: HashMap<LanguagePair, Vec<PatternRule>>,
}

impl PatternMatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a rule to the pair's list
    pub fn add_rule(
        &mut self,
        source: &str,
        target: &str,
        pattern: &str,
        template: &str,
    ) -> Result<&mut Self, regex::Error> {
        let rule = PatternRule::new(pattern, template)?;
        self.rules
            .entry(LanguagePair::new(source, target))
            .or_default()
            .push(rule);
        Ok(self)
    }

    pub fn rules_for(&self, pair: &LanguagePair) -> &[PatternRule] {
        self.rules.get(pair).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Total number of rules across all pairs
    pub fn rule_count(&self) -> usize {
        self.rules.values().map(Vec::len).sum()
    }

    /// Try the pair's rules in order
    ///
    /// `None` means no rule matched; a matching rule may still produce an
    /// empty string.
    pub fn apply(&self, pair: &LanguagePair, text: &str) -> Option<String> {
        self.rules_for(pair)
            .iter()
            .find_map(|rule| rule.apply(text))
    }
}
