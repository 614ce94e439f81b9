//! Dictionary and pattern based text translation
//!
//! The [`Resolver`] translates a word, phrase, sentence or whole document
//! between two languages using ordered [`Lexicon`] tables and
//! [`PatternMatcher`] rules, pivoting through English when no direct table
//! exists for a pair.
//!
//! ```
//! use bhasha::Resolver;
//!
//! let resolver = Resolver::builtin();
//! assert_eq!(resolver.resolve("hello", "en", "hi"), "नमस्ते");
//! // No fr-de table: pivots through English
//! assert_eq!(resolver.resolve("bonjour", "fr", "de"), "hallo");
//! ```

pub mod data;
pub mod error;
pub mod lexicon;
pub mod loader;
pub mod pattern;
pub mod resolver;
pub mod segmenter;

pub use data::{builtin_lexicons, builtin_patterns};
pub use error::LoadError;
pub use lexicon::{LanguagePair, Lexicon, LexiconStore, PIVOT_LANGUAGE, normalize_code};
pub use loader::{load_lexicon_from_file, load_lexicons_from_dir};
pub use pattern::{PatternMatcher, PatternRule};
pub use resolver::{Resolution, Resolver, Route, no_dictionary_marker};
pub use segmenter::SpanKind;
