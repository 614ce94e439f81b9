//! Span classification and splitting
//!
//! Everything here is pure. The resolver classifies a span in the fixed order
//! paragraph → sentence → phrase → word and splits it along the boundaries
//! below before recursing.

/// Sentence terminators across the supported scripts
pub const TERMINATORS: &[char] = &['.', '!', '?', '।', '॥', '。', '！', '？', '؟', '۔'];

/// Delimiters that break a sentence into chunks, besides the source full stop
pub const CHUNK_DELIMITERS: &[char] = &[
    ',', ';', ':', '(', ')', '[', ']', '{', '}', '"', '“', '”', '«', '»', '，', '、', '；', '：',
];

/// Window size used when a sentence has no delimiter to split on
pub const WORD_WINDOW: usize = 3;

/// Languages written with the danda as their full stop
const DANDA_LANGUAGES: &[&str] = &["hi", "ne", "mr", "sa", "bn", "pa"];

/// Kind of span, in classification precedence order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpanKind {
    Paragraph,
    Sentence,
    Phrase,
    Word,
}

pub fn is_terminator(c: char) -> bool {
    TERMINATORS.contains(&c)
}

pub fn terminator_count(text: &str) -> usize {
    text.chars().filter(|&c| is_terminator(c)).count()
}

pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// More than one sentence terminator
pub fn is_paragraph(text: &str) -> bool {
    terminator_count(text) > 1
}

/// Any terminator, or more than three words
pub fn is_sentence(text: &str) -> bool {
    text.chars().any(is_terminator) || word_count(text) > 3
}

/// More than one word
pub fn is_phrase(text: &str) -> bool {
    word_count(text) > 1
}

/// Classify a span; the first positive check wins
pub fn classify(text: &str) -> SpanKind {
    if is_paragraph(text) {
        SpanKind::Paragraph
    } else if is_sentence(text) {
        SpanKind::Sentence
    } else if is_phrase(text) {
        SpanKind::Phrase
    } else {
        SpanKind::Word
    }
}

/// Full stop character for a source language
pub fn full_stop_for(language: &str) -> char {
    if DANDA_LANGUAGES.contains(&language) {
        '।'
    } else {
        '.'
    }
}

/// Split a line into sentences
///
/// A sentence ends at a terminator that is followed by whitespace (or by the
/// end of the line); the terminator stays with its sentence. Runs of
/// terminators such as `"?!"` or `"..."` stay together.
pub fn split_sentences(line: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut current = String::new();
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        current.push(c);
        if !is_terminator(c) {
            continue;
        }
        match chars.peek() {
            Some(next) if next.is_whitespace() => {
                while chars.peek().is_some_and(|next| next.is_whitespace()) {
                    chars.next();
                }
                push_trimmed(&mut sentences, &current);
                current.clear();
            }
            _ => {}
        }
    }
    push_trimmed(&mut sentences, &current);
    sentences
}

/// Split a sentence into chunks for phrase-level resolution
///
/// Splits on [`CHUNK_DELIMITERS`] and the source language's full stop. A
/// sentence without any delimiter falls back to windows of [`WORD_WINDOW`]
/// words.
pub fn split_chunks(sentence: &str, source_language: &str) -> Vec<String> {
    let full_stop = full_stop_for(source_language);
    let is_delimiter = |c: char| c == full_stop || CHUNK_DELIMITERS.contains(&c);

    if !sentence.chars().any(is_delimiter) {
        return word_windows(sentence, WORD_WINDOW);
    }

    let mut chunks = Vec::new();
    for piece in sentence.split(is_delimiter) {
        push_trimmed(&mut chunks, piece);
    }
    chunks
}

/// Group whitespace-separated words into windows of `size` words
pub fn word_windows(text: &str, size: usize) -> Vec<String> {
    let words: Vec<&str> = text.split_whitespace().collect();
    words
        .chunks(size.max(1))
        .map(|window| window.join(" "))
        .collect()
}

/// Remove every character that is not a letter, combining mark or digit
///
/// Combining marks are kept so that Indic vowel signs survive.
pub fn strip_non_word_chars(word: &str) -> String {
    word.chars()
        .filter(|c| c.is_alphanumeric() || is_combining_mark(*c))
        .collect()
}

/// Combining marks in the Indic blocks plus the generic combining diacriticals
fn is_combining_mark(c: char) -> bool {
    matches!(c,
        '\u{0300}'..='\u{036F}'
        | '\u{0900}'..='\u{0903}'
        | '\u{093A}'..='\u{094F}'
        | '\u{0951}'..='\u{0957}'
        | '\u{0962}'..='\u{0963}'
        | '\u{0981}'..='\u{0983}'
        | '\u{09BC}'..='\u{09D7}'
        | '\u{0A01}'..='\u{0A03}'
        | '\u{0A3C}'..='\u{0A51}'
        | '\u{200C}'..='\u{200D}')
}

fn push_trimmed(out: &mut Vec<String>, piece: &str) {
    let piece = piece.trim();
    if !piece.is_empty() {
        out.push(piece.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classification_order() {
        assert_eq!(classify("One. Two."), SpanKind::Paragraph);
        assert_eq!(classify("नमस्ते। धन्यवाद।"), SpanKind::Paragraph);
        assert_eq!(classify("Hello."), SpanKind::Sentence);
        assert_eq!(classify("my name is Sam"), SpanKind::Sentence);
        assert_eq!(classify("good morning friend"), SpanKind::Phrase);
        assert_eq!(classify("hello"), SpanKind::Word);
    }

    #[test]
    fn test_sentence_needs_more_than_three_words() {
        assert!(!is_sentence("one two three"));
        assert!(is_sentence("one two three four"));
        assert!(is_sentence("one?"));
    }

    #[test]
    fn test_split_sentences_keeps_terminators() {
        assert_eq!(
            split_sentences("Hello there. How are you? Fine!"),
            vec!["Hello there.", "How are you?", "Fine!"]
        );
    }

    #[test]
    fn test_split_sentences_devanagari() {
        assert_eq!(split_sentences("नमस्ते। धन्यवाद।"), vec!["नमस्ते।", "धन्यवाद।"]);
    }

    #[test]
    fn test_split_sentences_requires_whitespace_after_terminator() {
        assert_eq!(split_sentences("version 1.2 is out"), vec!["version 1.2 is out"]);
        assert_eq!(split_sentences("Wait... what?!"), vec!["Wait...", "what?!"]);
    }

    #[test]
    fn test_split_chunks_on_delimiters() {
        assert_eq!(
            split_chunks("hello, my friend; thank you", "en"),
            vec!["hello", "my friend", "thank you"]
        );
    }

    #[test]
    fn test_split_chunks_uses_source_full_stop() {
        assert_eq!(split_chunks("नमस्ते।", "ne"), vec!["नमस्ते"]);
        // The danda is not a chunk delimiter for latin-script sources
        assert_eq!(split_chunks("a। b c d e", "en"), vec!["a। b c", "d e"]);
    }

    #[test]
    fn test_split_chunks_falls_back_to_windows() {
        assert_eq!(
            split_chunks("one two three four five six seven", "en"),
            vec!["one two three", "four five six", "seven"]
        );
    }

    #[test]
    fn test_strip_non_word_chars_keeps_vowel_signs() {
        assert_eq!(strip_non_word_chars("hello!"), "hello");
        assert_eq!(strip_non_word_chars("\"नमस्ते\","), "नमस्ते");
        assert_eq!(strip_non_word_chars("...?"), "");
    }

    #[test]
    fn test_full_stop_for() {
        assert_eq!(full_stop_for("hi"), '।');
        assert_eq!(full_stop_for("ne"), '।');
        assert_eq!(full_stop_for("fr"), '.');
    }
}
