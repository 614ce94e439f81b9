//! Dictionary matching over one installed pack direction
//!
//! Escalation for a text:
//! 1. canned whole-text outputs (substring containment), single-line text only
//! 2. exact whole-text match, single-line text only
//! 3. per line and sentence: exact sentence match, then tokens left to right,
//!    taking the longest multi-word dictionary phrase first
//! 4. per token: exact match, stripped match, compound decomposition, affix
//!    replacement, otherwise the token unchanged

use bhasha::Lexicon;
use bhasha::lexicon::normalize_key;
use bhasha::segmenter::{CHUNK_DELIMITERS, is_terminator, split_sentences, strip_non_word_chars};

pub const EXACT_CONFIDENCE: f32 = 1.0;
pub const CANNED_CONFIDENCE: f32 = 0.9;
/// Any result served from the translation cache
pub const CACHED_CONFIDENCE: f32 = 0.8;
pub const WORD_BY_WORD_CONFIDENCE: f32 = 0.7;
pub const PASSTHROUGH_CONFIDENCE: f32 = 0.5;
pub const NO_DICTIONARY_CONFIDENCE: f32 = 0.3;

/// Longest multi-word dictionary phrase tried at each token
const MAX_PHRASE_WORDS: usize = 4;

/// Minimum key length, in chars, for affix replacement
const AFFIX_MIN_CHARS: usize = 4;

#[derive(Debug, Clone, PartialEq)]
pub struct PackMatch {
    pub text: String,
    pub confidence: f32,
}

impl PackMatch {
    fn new(text: impl Into<String>, confidence: f32) -> Self {
        Self {
            text: text.into(),
            confidence,
        }
    }
}

/// Translate `text` with one dictionary direction
///
/// `canned` holds `(needle, output)` pairs checked before the dictionary.
pub fn match_text<'a, I>(lexicon: &Lexicon, canned: I, text: &str) -> PackMatch
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    // Whole-text outputs would drop line breaks
    if !text.contains('\n') {
        let lowered = text.to_lowercase();
        if let Some((_, output)) = canned
            .into_iter()
            .find(|(needle, _)| lowered.contains(needle))
        {
            return PackMatch::new(output, CANNED_CONFIDENCE);
        }

        if let Some(exact) = lexicon.get(&normalize_key(text)) {
            return PackMatch::new(exact, EXACT_CONFIDENCE);
        }
    }

    if lexicon.is_empty() {
        return PackMatch::new(text, NO_DICTIONARY_CONFIDENCE);
    }

    let mut translated = 0;
    let lines: Vec<String> = text
        .split('\n')
        .map(|line| {
            split_sentences(line)
                .iter()
                .map(|sentence| match_sentence(lexicon, sentence, &mut translated))
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect();

    if translated == 0 {
        PackMatch::new(text, PASSTHROUGH_CONFIDENCE)
    } else {
        PackMatch::new(lines.join("\n"), WORD_BY_WORD_CONFIDENCE)
    }
}

fn match_sentence(lexicon: &Lexicon, sentence: &str, translated: &mut usize) -> String {
    let body = sentence.trim_end_matches(is_terminator);
    let terminators = &sentence[body.len()..];
    if let Some(exact) = lexicon.get(&normalize_key(body)) {
        *translated += 1;
        return format!("{}{}", exact, terminators);
    }

    let tokens: Vec<&str> = sentence.split_whitespace().collect();
    let mut out = Vec::with_capacity(tokens.len());
    let mut i = 0;
    while i < tokens.len() {
        if let Some((taken, phrase)) = match_phrase(lexicon, &tokens[i..]) {
            out.push(phrase);
            *translated += 1;
            i += taken;
            continue;
        }
        match match_token(lexicon, tokens[i]) {
            Some(word) => {
                out.push(word);
                *translated += 1;
            }
            None => out.push(tokens[i].to_string()),
        }
        i += 1;
    }
    out.join(" ")
}

/// Longest dictionary phrase of two or more words at the start of `tokens`
fn match_phrase(lexicon: &Lexicon, tokens: &[&str]) -> Option<(usize, String)> {
    let longest = tokens.len().min(MAX_PHRASE_WORDS);
    (2..=longest).rev().find_map(|n| {
        let words = &tokens[..n];
        let key = words
            .iter()
            .map(|token| normalize_key(split_edges(token).1))
            .collect::<Vec<_>>()
            .join(" ");
        lexicon.get(&key).map(|target| {
            let prefix = split_edges(words[0]).0;
            let suffix = split_edges(words[n - 1]).2;
            (n, format!("{}{}{}", prefix, target, suffix))
        })
    })
}

/// Translate one whitespace-delimited token, keeping its edge punctuation
fn match_token(lexicon: &Lexicon, token: &str) -> Option<String> {
    let (prefix, core, suffix) = split_edges(token);
    if core.is_empty() {
        return None;
    }
    let key = normalize_key(core);
    let translated = lexicon
        .get(&key)
        .map(str::to_string)
        .or_else(|| lexicon.get(&strip_non_word_chars(&key)).map(str::to_string))
        .or_else(|| decompose(lexicon, &key))
        .or_else(|| replace_affix(lexicon, &key))?;
    Some(format!("{}{}{}", prefix, translated, suffix))
}

fn is_edge(c: char) -> bool {
    c.is_ascii_punctuation() || is_terminator(c) || CHUNK_DELIMITERS.contains(&c)
}

/// `(leading punctuation, core, trailing punctuation)`
fn split_edges(token: &str) -> (&str, &str, &str) {
    let rest = token.trim_start_matches(is_edge);
    let prefix = &token[..token.len() - rest.len()];
    let core = rest.trim_end_matches(is_edge);
    (prefix, core, &rest[core.len()..])
}

/// Split a compound into two dictionary words, longest prefix first
pub fn decompose(lexicon: &Lexicon, word: &str) -> Option<String> {
    word.char_indices()
        .skip(1)
        .map(|(at, _)| at)
        .collect::<Vec<_>>()
        .into_iter()
        .rev()
        .find_map(|at| {
            let (head, tail) = word.split_at(at);
            match (lexicon.get(head), lexicon.get(tail)) {
                (Some(head), Some(tail)) => Some(format!("{} {}", head, tail)),
                _ => None,
            }
        })
}

/// Replace the first dictionary key (in dictionary order) found inside `word`
///
/// The rest of the word is left as is, which can produce mixed-script output.
pub fn replace_affix(lexicon: &Lexicon, word: &str) -> Option<String> {
    lexicon
        .find(|key| key.chars().count() >= AFFIX_MIN_CHARS && word.contains(key))
        .map(|(key, target)| word.replacen(key, target, 1))
}
