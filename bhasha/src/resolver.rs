//! Layered text resolution
//!
//! [`Resolver::resolve`] turns any span of text into a translation using the
//! bundled lexicons and pattern rules. It never fails: a missing dictionary
//! yields the input wrapped in a marker (see [`no_dictionary_marker`]) and
//! unknown words pass through unchanged.
//!
//! # Escalation order
//!
//! 1. Pick a lexicon: direct `src-tgt`, else pivot `src-en` + `en-tgt`, else
//!    English-only `src-en`, else give up with the marker.
//! 2. Exact whole-text match (case-folded, then original case).
//! 3. Classify the span and recurse:
//!    - paragraph: lines, then sentences, each resolved from step 2
//!    - sentence: pattern rules, then the long-phrase short-circuit, then
//!      delimiter chunks (or 3-word windows) resolved as phrases
//!    - phrase: exact match, then the first entry that contains or is
//!      contained in the phrase, then word by word
//!    - word: lowered, original case, then with punctuation stripped
//!
//! Wherever several lexicon entries could match, the first one in the
//! lexicon's iteration order wins.

use crate::data::{builtin_lexicons, builtin_patterns};
use crate::lexicon::{Lexicon, LanguagePair, LexiconStore, PIVOT_LANGUAGE};
use crate::pattern::PatternMatcher;
use crate::segmenter::{self, SpanKind};
use tracing::{debug, warn};

/// Minimum length (in characters) of an entry used by the long-phrase short-circuit
const LONG_PHRASE_MIN_CHARS: usize = 10;

/// Minimum length (in characters) of an entry used by partial phrase matching
const PARTIAL_MATCH_MIN_CHARS: usize = 3;

/// Marker prepended to text when no dictionary covers a pair
pub fn no_dictionary_marker(pair: &LanguagePair) -> String {
    format!("[no dictionary for {}]", pair)
}

/// How a resolution was carried out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// A direct lexicon for the pair
    Direct,
    /// Through English using `src-en` then `en-tgt`
    Pivot,
    /// Only `src-en` exists; the output is English
    EnglishOnly,
    /// Nothing covers the pair; the output is the marked input
    NoDictionary,
}

/// A translated text together with the route that produced it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub text: String,
    pub route: Route,
}

/// Lexicon choice for one request
enum Plan<'a> {
    Direct(&'a Lexicon),
    Pivot(&'a Lexicon, &'a Lexicon),
    EnglishOnly(&'a Lexicon),
    NoDictionary,
}

/// A lexicon and the pair whose pattern rules apply with it
#[derive(Clone, Copy)]
struct Scope<'a> {
    pair: &'a LanguagePair,
    lexicon: &'a Lexicon,
}

/// The dictionary-based resolution engine
#[derive(Debug, Clone)]
pub struct Resolver {
    lexicons: LexiconStore,
    patterns: PatternMatcher,
}

impl Default for Resolver {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Resolver {
    pub fn new(lexicons: LexiconStore, patterns: PatternMatcher) -> Self {
        Self { lexicons, patterns }
    }

    /// Resolver over the bundled lexicons and pattern rules
    pub fn builtin() -> Self {
        Self::new(builtin_lexicons(), builtin_patterns())
    }

    pub fn lexicons(&self) -> &LexiconStore {
        &self.lexicons
    }

    pub fn patterns(&self) -> &PatternMatcher {
        &self.patterns
    }

    /// Whether a direct lexicon exists for the pair
    pub fn is_pair_supported(&self, source: &str, target: &str) -> bool {
        self.lexicons.contains(&LanguagePair::new(source, target))
    }

    /// Every pair with a direct lexicon
    pub fn supported_pairs(&self) -> Vec<LanguagePair> {
        self.lexicons.pairs()
    }

    /// Translate `text`; never fails
    pub fn resolve(&self, text: &str, source: &str, target: &str) -> String {
        self.resolve_detailed(text, source, target).text
    }

    /// Translate `text` and report which route was taken
    pub fn resolve_detailed(&self, text: &str, source: &str, target: &str) -> Resolution {
        let pair = LanguagePair::new(source, target);

        match self.plan(&pair) {
            Plan::Direct(lexicon) => Resolution {
                text: self.translate_span(text, Scope { pair: &pair, lexicon }),
                route: Route::Direct,
            },
            Plan::Pivot(to_pivot, from_pivot) => {
                debug!(pair = %pair, "no direct lexicon, pivoting through {}", PIVOT_LANGUAGE);
                let first = pair.to_pivot();
                let second = pair.from_pivot();
                let intermediate = self.translate_span(
                    text,
                    Scope {
                        pair: &first,
                        lexicon: to_pivot,
                    },
                );
                let text = self.translate_span(
                    &intermediate,
                    Scope {
                        pair: &second,
                        lexicon: from_pivot,
                    },
                );
                Resolution {
                    text,
                    route: Route::Pivot,
                }
            }
            Plan::EnglishOnly(to_pivot) => {
                warn!(pair = %pair, "no lexicon into target, returning English");
                let first = pair.to_pivot();
                Resolution {
                    text: self.translate_span(
                        text,
                        Scope {
                            pair: &first,
                            lexicon: to_pivot,
                        },
                    ),
                    route: Route::EnglishOnly,
                }
            }
            Plan::NoDictionary => {
                warn!(pair = %pair, "no dictionary available");
                let text = if text.is_empty() {
                    String::new()
                } else {
                    format!("{} {}", no_dictionary_marker(&pair), text)
                };
                Resolution {
                    text,
                    route: Route::NoDictionary,
                }
            }
        }
    }

    fn plan(&self, pair: &LanguagePair) -> Plan<'_> {
        // A pair targeting the pivot language is always looked up directly here
        if let Some(lexicon) = self.lexicons.get(pair) {
            return Plan::Direct(lexicon);
        }
        let to_pivot = self.lexicons.get(&pair.to_pivot());
        let from_pivot = self.lexicons.get(&pair.from_pivot());
        match (to_pivot, from_pivot) {
            (Some(to_pivot), Some(from_pivot)) => Plan::Pivot(to_pivot, from_pivot),
            (Some(to_pivot), None) => Plan::EnglishOnly(to_pivot),
            _ => Plan::NoDictionary,
        }
    }

    fn translate_span(&self, text: &str, scope: Scope<'_>) -> String {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return text.to_string();
        }

        // Line breaks always get paragraph treatment so they survive translation
        let multiline = text.contains('\n');
        if !multiline && let Some(hit) = exact_match(scope.lexicon, trimmed) {
            return hit.to_string();
        }

        let kind = if multiline {
            SpanKind::Paragraph
        } else {
            segmenter::classify(trimmed)
        };

        match kind {
            SpanKind::Paragraph => self.translate_paragraph(text, scope),
            SpanKind::Sentence => self.translate_sentence(trimmed, scope),
            SpanKind::Phrase => self.translate_phrase(trimmed, scope),
            SpanKind::Word => translate_word(trimmed, scope.lexicon),
        }
    }

    fn translate_paragraph(&self, text: &str, scope: Scope<'_>) -> String {
        text.split('\n')
            .map(|line| {
                let line = line.trim();
                if line.is_empty() {
                    return String::new();
                }
                segmenter::split_sentences(line)
                    .iter()
                    .map(|sentence| {
                        // A span that cannot be split further is handled as one sentence
                        if sentence == text {
                            self.translate_sentence(sentence, scope)
                        } else {
                            self.translate_span(sentence, scope)
                        }
                    })
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn translate_sentence(&self, sentence: &str, scope: Scope<'_>) -> String {
        if let Some(output) = self.patterns.apply(scope.pair, sentence) {
            return output;
        }

        let lowered = sentence.to_lowercase();
        if let Some((source, target)) = scope.lexicon.find(|source| {
            source.chars().count() > LONG_PHRASE_MIN_CHARS && lowered.contains(source)
        }) {
            return lowered.replacen(source, target, 1);
        }

        segmenter::split_chunks(sentence, scope.pair.source())
            .iter()
            .map(|chunk| self.translate_phrase(chunk, scope))
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn translate_phrase(&self, phrase: &str, scope: Scope<'_>) -> String {
        if !segmenter::is_phrase(phrase) {
            return translate_word(phrase, scope.lexicon);
        }

        let lowered = phrase.to_lowercase();
        if let Some(hit) = scope.lexicon.get(&lowered) {
            return hit.to_string();
        }

        if let Some((_, target)) = scope.lexicon.find(|source| {
            source.chars().count() > PARTIAL_MATCH_MIN_CHARS
                && (lowered.contains(source) || source.contains(lowered.as_str()))
        }) {
            return target.to_string();
        }

        translate_words(phrase, scope.lexicon)
    }
}

/// Whole-text lookup: case-folded first, then as written
fn exact_match<'a>(lexicon: &'a Lexicon, text: &str) -> Option<&'a str> {
    lexicon
        .get(&text.to_lowercase())
        .or_else(|| lexicon.get(text))
}

/// Resolve each whitespace-separated token on its own
fn translate_words(text: &str, lexicon: &Lexicon) -> String {
    text.split_whitespace()
        .map(|word| translate_word(word, lexicon))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Single-token lookup; unknown tokens are returned unchanged
fn translate_word(word: &str, lexicon: &Lexicon) -> String {
    if let Some(hit) = exact_match(lexicon, word) {
        return hit.to_string();
    }
    let stripped = segmenter::strip_non_word_chars(&word.to_lowercase());
    if !stripped.is_empty() {
        if let Some(hit) = lexicon.get(&stripped) {
            return hit.to_string();
        }
    }
    word.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolver() -> Resolver {
        Resolver::builtin()
    }

    fn custom(entries: &[(&str, &str)]) -> Resolver {
        let mut store = LexiconStore::new();
        store.insert("en", "xx", entries.iter().copied().collect());
        Resolver::new(store, PatternMatcher::new())
    }

    // ========== Exact Match Tests ==========

    #[test]
    fn test_exact_word() {
        assert_eq!(resolver().resolve("hello", "en", "hi"), "नमस्ते");
    }

    #[test]
    fn test_exact_match_ignores_case_and_padding() {
        assert_eq!(resolver().resolve("  HeLLo ", "en", "hi"), "नमस्ते");
        assert_eq!(
            resolver().resolve("What is your name", "en", "ne"),
            "तपाईंको नाम के हो"
        );
    }

    #[test]
    fn test_every_entry_resolves_to_itself() {
        let resolver = resolver();
        let pair = LanguagePair::new("en", "fr");
        for (source, target) in resolver.lexicons().get(&pair).unwrap().iter() {
            assert_eq!(resolver.resolve(source, "en", "fr"), target);
            assert_eq!(resolver.resolve(&source.to_uppercase(), "en", "fr"), target);
        }
    }

    #[test]
    fn test_empty_text() {
        assert_eq!(resolver().resolve("", "en", "hi"), "");
        assert_eq!(resolver().resolve("", "en", "xx"), "");
    }

    // ========== Pattern Tests ==========

    #[test]
    fn test_pattern_rule() {
        assert_eq!(
            resolver().resolve("my name is Sam", "en", "ne"),
            "मेरो नाम Sam हो"
        );
        assert_eq!(
            resolver().resolve("My name is Priya.", "en", "hi"),
            "मेरा नाम Priya है"
        );
    }

    #[test]
    fn test_pattern_rule_reverse_direction() {
        assert_eq!(
            resolver().resolve("मेरो नाम सीता हो", "ne", "en"),
            "my name is सीता"
        );
    }

    // ========== Sentence Tests ==========

    #[test]
    fn test_long_phrase_short_circuit() {
        // "good morning" is longer than ten characters and is replaced in place
        assert_eq!(
            resolver().resolve("good morning dear old friend", "en", "hi"),
            "सुप्रभात dear old friend"
        );
    }

    #[test]
    fn test_long_phrase_first_entry_wins() {
        let resolver = custom(&[
            ("the quick brown", "FIRST"),
            ("the quick brown fox jumps", "SECOND"),
        ]);
        assert_eq!(
            resolver.resolve("see the quick brown fox jumps", "en", "xx"),
            "see FIRST fox jumps"
        );
    }

    #[test]
    fn test_sentence_split_on_delimiters() {
        assert_eq!(
            resolver().resolve("hello, water; book.", "en", "fr"),
            "bonjour eau livre"
        );
    }

    #[test]
    fn test_sentence_without_delimiters_uses_windows() {
        let resolver = custom(&[("a", "1"), ("b", "2"), ("c", "3"), ("d", "4")]);
        // Windows "a b c" and "d"; neither is an entry, so word by word
        assert_eq!(resolver.resolve("a b c d", "en", "xx"), "1 2 3 4");
    }

    // ========== Phrase Tests ==========

    #[test]
    fn test_phrase_exact() {
        assert_eq!(resolver().resolve("good night", "en", "de"), "gute nacht");
    }

    #[test]
    fn test_phrase_partial_match_first_entry_wins() {
        let resolver = custom(&[("blue", "bleu"), ("sky", "ciel"), ("blue sky", "ciel bleu")]);
        assert_eq!(resolver.resolve("blue sky", "en", "xx"), "ciel bleu");
        // "blue" comes first in iteration order and is contained in the phrase
        assert_eq!(resolver.resolve("the blue sea", "en", "xx"), "bleu");
    }

    #[test]
    fn test_phrase_contained_in_entry() {
        let resolver = custom(&[("very big house", "palace")]);
        assert_eq!(resolver.resolve("big house", "en", "xx"), "palace");
    }

    #[test]
    fn test_phrase_word_by_word() {
        // Both words are too short for partial matching
        assert_eq!(resolver().resolve("big day", "en", "hi"), "बड़ा दिन");
    }

    #[test]
    fn test_phrase_partial_match_shadows_word_by_word() {
        // "water" is the first entry contained in the phrase
        assert_eq!(resolver().resolve("water food", "en", "hi"), "पानी");
    }

    // ========== Word Tests ==========

    #[test]
    fn test_word_with_punctuation() {
        assert_eq!(resolver().resolve("hello!", "en", "fr"), "bonjour");
    }

    #[test]
    fn test_unknown_word_passthrough() {
        assert_eq!(resolver().resolve("Zyxwv", "en", "hi"), "Zyxwv");
        assert_eq!(resolver().resolve("xylophone qwerty", "en", "hi"), "xylophone qwerty");
    }

    // ========== Paragraph Tests ==========

    #[test]
    fn test_paragraph_two_sentences() {
        assert_eq!(
            resolver().resolve("नमस्ते। धन्यवाद।", "ne", "en"),
            "hello thank you"
        );
    }

    #[test]
    fn test_paragraph_preserves_lines() {
        let input = "hello\n\nthank you. goodbye.\n";
        let output = resolver().resolve(input, "en", "fr");
        assert_eq!(output, "bonjour\n\nmerci au revoir\n");
        assert_eq!(output.matches('\n').count(), input.matches('\n').count());
    }

    #[test]
    fn test_exact_entry_keeps_surrounding_line_breaks() {
        assert_eq!(resolver().resolve("hello\n", "en", "hi"), "नमस्ते\n");
        assert_eq!(resolver().resolve("\nthank you\n\n", "en", "fr"), "\nmerci\n\n");
        // Pivoted text keeps them on both legs
        assert_eq!(resolver().resolve("\nनमस्ते\n", "hi", "ne").matches('\n').count(), 2);
    }

    #[test]
    fn test_blank_lines_only() {
        assert_eq!(resolver().resolve("\n\n", "en", "hi"), "\n\n");
    }

    #[test]
    fn test_terminator_run_terminates() {
        // Three terminators but only one sentence to split into
        assert_eq!(resolver().resolve("hello...", "en", "de"), "hallo");
    }

    // ========== Routing Tests ==========

    #[test]
    fn test_pivot_through_english() {
        let resolution = resolver().resolve_detailed("bonjour", "fr", "de");
        assert_eq!(resolution.text, "hallo");
        assert_eq!(resolution.route, Route::Pivot);
    }

    #[test]
    fn test_pivot_equals_two_step_resolution() {
        let resolver = resolver();
        for text in ["bonjour", "merci", "bonne nuit", "je ne comprends pas", "maison, livre."] {
            let english = resolver.resolve(text, "fr", "en");
            assert_eq!(
                resolver.resolve(text, "fr", "de"),
                resolver.resolve(&english, "en", "de"),
                "pivot mismatch for {}",
                text
            );
        }
    }

    #[test]
    fn test_english_only_degradation() {
        let resolution = resolver().resolve_detailed("bonjour", "fr", "xx");
        assert_eq!(resolution.text, "hello");
        assert_eq!(resolution.route, Route::EnglishOnly);
    }

    #[test]
    fn test_no_dictionary_marker() {
        let resolver = resolver();
        assert!(!resolver.is_pair_supported("en", "xx"));
        let resolution = resolver.resolve_detailed("hello", "en", "xx");
        assert_eq!(resolution.route, Route::NoDictionary);
        assert!(resolution.text.contains("en-xx"));
        assert!(resolution.text.ends_with("hello"));
        assert_eq!(resolution.text, "[no dictionary for en-xx] hello");
    }

    #[test]
    fn test_supported_pairs() {
        let resolver = resolver();
        assert!(resolver.is_pair_supported("EN", "hi"));
        assert!(!resolver.is_pair_supported("fr", "de"));
        let pairs: Vec<String> = resolver.supported_pairs().iter().map(|p| p.key()).collect();
        assert!(pairs.contains(&"ne-en".to_string()));
        assert_eq!(pairs.len(), 10);
    }
}
