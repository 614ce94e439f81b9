//! Lexicons and the store that indexes them by language pair
//!
//! A [`Lexicon`] is an insertion-ordered mapping from a normalized source
//! string to its translation. Iteration order is part of the contract: the
//! resolver's substring scans take the first matching entry, so two stores
//! built from the same entries always resolve the same way.

use std::collections::{BTreeMap, HashMap};
use std::fmt;

/// Language every pivot translation passes through
pub const PIVOT_LANGUAGE: &str = "en";

/// Normalize a language code for use in a [`LanguagePair`]
///
/// Codes are trimmed and lower-cased; no validation is performed since an
/// unknown code simply has no lexicon.
pub fn normalize_code(code: &str) -> String {
    code.trim().to_lowercase()
}

/// Normalize a lexicon key: trimmed and case-folded
pub fn normalize_key(text: &str) -> String {
    text.trim().to_lowercase()
}

/// A source/target language pair, rendered as `"{source}-{target}"`
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LanguagePair {
    source: String,
    target: String,
}

impl LanguagePair {
    pub fn new(source: &str, target: &str) -> Self {
        Self {
            source: normalize_code(source),
            target: normalize_code(target),
        }
    }

    /// Parse a key such as `"en-hi"`
    ///
    /// Returns `None` unless the key is exactly two non-empty codes joined by
    /// a single `-`.
    pub fn parse(key: &str) -> Option<Self> {
        let (source, target) = key.split_once('-')?;
        if source.is_empty() || target.is_empty() || target.contains('-') {
            return None;
        }
        Some(Self::new(source, target))
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    /// The pair key, e.g. `"en-hi"`
    pub fn key(&self) -> String {
        self.to_string()
    }

    /// Pair from this pair's source into the pivot language
    pub fn to_pivot(&self) -> Self {
        Self::new(&self.source, PIVOT_LANGUAGE)
    }

    /// Pair from the pivot language into this pair's target
    pub fn from_pivot(&self) -> Self {
        Self::new(PIVOT_LANGUAGE, &self.target)
    }
}

impl fmt::Display for LanguagePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.source, self.target)
    }
}

/// Ordered word/phrase translation table for one language pair
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Lexicon {
    entries: Vec<(String, String)>,
    index: HashMap<String, usize>,
}

impl Lexicon {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entry, normalizing the source key
    ///
    /// Re-inserting an existing key replaces its translation but keeps its
    /// original position in the iteration order. Blank keys are ignored.
    pub fn insert(&mut self, source: &str, target: &str) -> &mut Self {
        let key = normalize_key(source);
        if key.is_empty() {
            return self;
        }
        match self.index.get(&key) {
            Some(&position) => self.entries[position].1 = target.to_string(),
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key, target.to_string()));
            }
        }
        self
    }

    /// Exact lookup against the stored (normalized) keys
    pub fn get(&self, source: &str) -> Option<&str> {
        self.index
            .get(source)
            .map(|&position| self.entries[position].1.as_str())
    }

    pub fn contains_key(&self, source: &str) -> bool {
        self.index.contains_key(source)
    }

    /// Entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(source, target)| (source.as_str(), target.as_str()))
    }

    /// First entry, in iteration order, accepted by `predicate`
    pub fn find<F>(&self, mut predicate: F) -> Option<(&str, &str)>
    where
        F: FnMut(&str) -> bool,
    {
        self.iter().find(|(source, _)| predicate(source))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Append every entry of `other`, keeping this lexicon's order first
    pub fn merge(&mut self, other: &Lexicon) {
        for (source, target) in other.iter() {
            self.insert(source, target);
        }
    }

    /// Swap sources and targets; later duplicates of a target keep the first mapping
    pub fn reversed(&self) -> Lexicon {
        let mut reversed = Lexicon::new();
        for (source, target) in self.iter() {
            if !reversed.contains_key(&normalize_key(target)) {
                reversed.insert(target, source);
            }
        }
        reversed
    }
}

impl<S: AsRef<str>, T: AsRef<str>> FromIterator<(S, T)> for Lexicon {
    fn from_iter<I: IntoIterator<Item = (S, T)>>(iter: I) -> Self {
        let mut lexicon = Lexicon::new();
        for (source, target) in iter {
            lexicon.insert(source.as_ref(), target.as_ref());
        }
        lexicon
    }
}

/// All lexicons known to the engine, keyed by language pair
#[derive(Debug, Clone, Default)]
pub struct LexiconStore {
    lexicons: BTreeMap<LanguagePair, Lexicon>,
}

impl LexiconStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a lexicon, merging into any existing table for the pair
    pub fn insert(&mut self, source: &str, target: &str, lexicon: Lexicon) -> &mut Self {
        let pair = LanguagePair::new(source, target);
        match self.lexicons.get_mut(&pair) {
            Some(existing) => existing.merge(&lexicon),
            None => {
                self.lexicons.insert(pair, lexicon);
            }
        }
        self
    }

    pub fn get(&self, pair: &LanguagePair) -> Option<&Lexicon> {
        self.lexicons.get(pair)
    }

    pub fn contains(&self, pair: &LanguagePair) -> bool {
        self.lexicons.contains_key(pair)
    }

    /// Every pair with a direct lexicon, sorted by key
    pub fn pairs(&self) -> Vec<LanguagePair> {
        self.lexicons.keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.lexicons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lexicons.is_empty()
    }
}
