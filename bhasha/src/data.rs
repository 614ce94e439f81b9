//! Bundled lexicon tables and pattern rules
//!
//! Every table is an ordered list of `(source, target)` entries. Order matters:
//! substring matching in the resolver picks the first matching entry, so
//! canned sentences come first, then phrases, then single words.

use crate::lexicon::{Lexicon, LexiconStore};
use crate::pattern::PatternMatcher;
use tracing::warn;

const EN_HI: &[(&str, &str)] = &[
    // Canned sentences
    ("how are you", "आप कैसे हैं"),
    ("what is your name", "आपका नाम क्या है"),
    ("where is the bathroom", "शौचालय कहाँ है"),
    ("i do not understand", "मुझे समझ नहीं आया"),
    ("nice to meet you", "आपसे मिलकर खुशी हुई"),
    ("i am fine", "मैं ठीक हूँ"),
    ("please help me", "कृपया मेरी मदद करें"),
    ("how much does this cost", "इसकी कीमत कितनी है"),
    ("see you tomorrow", "कल मिलते हैं"),
    // Phrases
    ("good morning", "सुप्रभात"),
    ("good afternoon", "नमस्कार"),
    ("good evening", "शुभ संध्या"),
    ("good night", "शुभ रात्रि"),
    ("thank you", "धन्यवाद"),
    ("excuse me", "क्षमा कीजिए"),
    ("you are welcome", "आपका स्वागत है"),
    ("i love you", "मैं तुमसे प्यार करता हूँ"),
    ("how old are you", "आपकी उम्र क्या है"),
    // Words
    ("hello", "नमस्ते"),
    ("hi", "नमस्ते"),
    ("goodbye", "अलविदा"),
    ("bye", "अलविदा"),
    ("yes", "हाँ"),
    ("no", "नहीं"),
    ("please", "कृपया"),
    ("sorry", "माफ़ कीजिए"),
    ("water", "पानी"),
    ("food", "खाना"),
    ("house", "घर"),
    ("home", "घर"),
    ("school", "विद्यालय"),
    ("book", "किताब"),
    ("friend", "दोस्त"),
    ("family", "परिवार"),
    ("mother", "माँ"),
    ("father", "पिता"),
    ("brother", "भाई"),
    ("sister", "बहन"),
    ("child", "बच्चा"),
    ("man", "आदमी"),
    ("woman", "औरत"),
    ("name", "नाम"),
    ("my", "मेरा"),
    ("your", "आपका"),
    ("i", "मैं"),
    ("you", "आप"),
    ("we", "हम"),
    ("they", "वे"),
    ("is", "है"),
    ("are", "हैं"),
    ("am", "हूँ"),
    ("good", "अच्छा"),
    ("bad", "बुरा"),
    ("big", "बड़ा"),
    ("small", "छोटा"),
    ("today", "आज"),
    ("tomorrow", "कल"),
    ("yesterday", "कल"),
    ("time", "समय"),
    ("day", "दिन"),
    ("night", "रात"),
    ("morning", "सुबह"),
    ("eat", "खाना"),
    ("drink", "पीना"),
    ("go", "जाना"),
    ("come", "आना"),
    ("love", "प्यार"),
    ("world", "दुनिया"),
    ("india", "भारत"),
    ("language", "भाषा"),
    ("help", "मदद"),
    ("money", "पैसा"),
    ("market", "बाज़ार"),
    ("doctor", "डॉक्टर"),
    ("hospital", "अस्पताल"),
];

const HI_EN: &[(&str, &str)] = &[
    ("आप कैसे हैं", "how are you"),
    ("आपका नाम क्या है", "what is your name"),
    ("मैं ठीक हूँ", "i am fine"),
    ("मुझे समझ नहीं आया", "i do not understand"),
    ("शुभ रात्रि", "good night"),
    ("सुप्रभात", "good morning"),
    ("नमस्ते", "hello"),
    ("नमस्कार", "hello"),
    ("धन्यवाद", "thank you"),
    ("शुक्रिया", "thank you"),
    ("अलविदा", "goodbye"),
    ("हाँ", "yes"),
    ("नहीं", "no"),
    ("कृपया", "please"),
    ("पानी", "water"),
    ("खाना", "food"),
    ("घर", "house"),
    ("किताब", "book"),
    ("दोस्त", "friend"),
    ("परिवार", "family"),
    ("माँ", "mother"),
    ("पिता", "father"),
    ("भाई", "brother"),
    ("बहन", "sister"),
    ("नाम", "name"),
    ("मेरा", "my"),
    ("मैं", "i"),
    ("आप", "you"),
    ("हम", "we"),
    ("है", "is"),
    ("हैं", "are"),
    ("अच्छा", "good"),
    ("आज", "today"),
    ("दिन", "day"),
    ("रात", "night"),
    ("दुनिया", "world"),
    ("भारत", "india"),
    ("भाषा", "language"),
    ("मदद", "help"),
];

const EN_NE: &[(&str, &str)] = &[
    // Canned sentences
    ("how are you", "तपाईंलाई कस्तो छ"),
    ("what is your name", "तपाईंको नाम के हो"),
    ("where is the bathroom", "शौचालय कहाँ छ"),
    ("i do not understand", "मैले बुझिनँ"),
    ("nice to meet you", "तपाईंलाई भेटेर खुशी लाग्यो"),
    ("i am fine", "म ठीक छु"),
    ("please help me", "कृपया मलाई मद्दत गर्नुहोस्"),
    ("see you tomorrow", "भोलि भेटौँला"),
    // Phrases
    ("good morning", "शुभ प्रभात"),
    ("good evening", "शुभ साँझ"),
    ("good night", "शुभ रात्री"),
    ("thank you", "धन्यवाद"),
    ("excuse me", "माफ गर्नुहोस्"),
    ("you are welcome", "स्वागत छ"),
    // Words
    ("hello", "नमस्ते"),
    ("hi", "नमस्ते"),
    ("goodbye", "बिदा"),
    ("yes", "हो"),
    ("no", "होइन"),
    ("please", "कृपया"),
    ("sorry", "माफ गर्नुहोस्"),
    ("water", "पानी"),
    ("food", "खाना"),
    ("rice", "भात"),
    ("house", "घर"),
    ("home", "घर"),
    ("school", "विद्यालय"),
    ("book", "किताब"),
    ("friend", "साथी"),
    ("family", "परिवार"),
    ("mother", "आमा"),
    ("father", "बुबा"),
    ("brother", "दाइ"),
    ("sister", "दिदी"),
    ("child", "बच्चा"),
    ("name", "नाम"),
    ("my", "मेरो"),
    ("your", "तपाईंको"),
    ("i", "म"),
    ("you", "तपाईं"),
    ("we", "हामी"),
    ("good", "राम्रो"),
    ("bad", "नराम्रो"),
    ("big", "ठूलो"),
    ("small", "सानो"),
    ("today", "आज"),
    ("tomorrow", "भोलि"),
    ("yesterday", "हिजो"),
    ("day", "दिन"),
    ("night", "रात"),
    ("eat", "खानु"),
    ("go", "जानु"),
    ("come", "आउनु"),
    ("love", "माया"),
    ("world", "संसार"),
    ("nepal", "नेपाल"),
    ("mountain", "हिमाल"),
    ("language", "भाषा"),
    ("help", "मद्दत"),
    ("money", "पैसा"),
];

const NE_EN: &[(&str, &str)] = &[
    ("तपाईंलाई कस्तो छ", "how are you"),
    ("तपाईंको नाम के हो", "what is your name"),
    ("म ठीक छु", "i am fine"),
    ("मैले बुझिनँ", "i do not understand"),
    ("शुभ प्रभात", "good morning"),
    ("शुभ रात्री", "good night"),
    ("नमस्ते", "hello"),
    ("नमस्कार", "hello"),
    ("धन्यवाद", "thank you"),
    ("बिदा", "goodbye"),
    ("हो", "yes"),
    ("होइन", "no"),
    ("कृपया", "please"),
    ("पानी", "water"),
    ("खाना", "food"),
    ("भात", "rice"),
    ("घर", "house"),
    ("किताब", "book"),
    ("साथी", "friend"),
    ("परिवार", "family"),
    ("आमा", "mother"),
    ("बुबा", "father"),
    ("नाम", "name"),
    ("मेरो", "my"),
    ("म", "i"),
    ("तपाईं", "you"),
    ("हामी", "we"),
    ("राम्रो", "good"),
    ("आज", "today"),
    ("भोलि", "tomorrow"),
    ("दिन", "day"),
    ("रात", "night"),
    ("संसार", "world"),
    ("नेपाल", "nepal"),
    ("हिमाल", "mountain"),
    ("भाषा", "language"),
];

const EN_FR: &[(&str, &str)] = &[
    ("how are you", "comment allez-vous"),
    ("what is your name", "comment vous appelez-vous"),
    ("i do not understand", "je ne comprends pas"),
    ("nice to meet you", "enchanté"),
    ("see you tomorrow", "à demain"),
    ("good morning", "bonjour"),
    ("good evening", "bonsoir"),
    ("good night", "bonne nuit"),
    ("thank you", "merci"),
    ("excuse me", "excusez-moi"),
    ("you are welcome", "de rien"),
    ("hello", "bonjour"),
    ("hi", "salut"),
    ("goodbye", "au revoir"),
    ("yes", "oui"),
    ("no", "non"),
    ("please", "s'il vous plaît"),
    ("sorry", "désolé"),
    ("water", "eau"),
    ("food", "nourriture"),
    ("bread", "pain"),
    ("house", "maison"),
    ("school", "école"),
    ("book", "livre"),
    ("friend", "ami"),
    ("family", "famille"),
    ("mother", "mère"),
    ("father", "père"),
    ("name", "nom"),
    ("my", "mon"),
    ("i", "je"),
    ("you", "vous"),
    ("good", "bon"),
    ("today", "aujourd'hui"),
    ("tomorrow", "demain"),
    ("day", "jour"),
    ("night", "nuit"),
    ("world", "monde"),
    ("love", "amour"),
    ("language", "langue"),
];

const FR_EN: &[(&str, &str)] = &[
    ("comment allez-vous", "how are you"),
    ("comment vous appelez-vous", "what is your name"),
    ("je ne comprends pas", "i do not understand"),
    ("bonne nuit", "good night"),
    ("au revoir", "goodbye"),
    ("de rien", "you are welcome"),
    ("bonjour", "hello"),
    ("salut", "hi"),
    ("bonsoir", "good evening"),
    ("merci", "thank you"),
    ("oui", "yes"),
    ("non", "no"),
    ("eau", "water"),
    ("pain", "bread"),
    ("maison", "house"),
    ("école", "school"),
    ("livre", "book"),
    ("ami", "friend"),
    ("famille", "family"),
    ("mère", "mother"),
    ("père", "father"),
    ("nom", "name"),
    ("je", "i"),
    ("vous", "you"),
    ("bon", "good"),
    ("demain", "tomorrow"),
    ("jour", "day"),
    ("nuit", "night"),
    ("monde", "world"),
    ("amour", "love"),
    ("langue", "language"),
];

const EN_ES: &[(&str, &str)] = &[
    ("how are you", "cómo estás"),
    ("what is your name", "cómo te llamas"),
    ("i do not understand", "no entiendo"),
    ("see you tomorrow", "hasta mañana"),
    ("good morning", "buenos días"),
    ("good evening", "buenas tardes"),
    ("good night", "buenas noches"),
    ("thank you", "gracias"),
    ("excuse me", "disculpe"),
    ("you are welcome", "de nada"),
    ("hello", "hola"),
    ("goodbye", "adiós"),
    ("yes", "sí"),
    ("no", "no"),
    ("please", "por favor"),
    ("sorry", "lo siento"),
    ("water", "agua"),
    ("food", "comida"),
    ("house", "casa"),
    ("school", "escuela"),
    ("book", "libro"),
    ("friend", "amigo"),
    ("family", "familia"),
    ("mother", "madre"),
    ("father", "padre"),
    ("name", "nombre"),
    ("my", "mi"),
    ("i", "yo"),
    ("you", "tú"),
    ("good", "bueno"),
    ("today", "hoy"),
    ("tomorrow", "mañana"),
    ("world", "mundo"),
    ("love", "amor"),
    ("language", "idioma"),
];

const ES_EN: &[(&str, &str)] = &[
    ("cómo estás", "how are you"),
    ("cómo te llamas", "what is your name"),
    ("no entiendo", "i do not understand"),
    ("buenos días", "good morning"),
    ("buenas noches", "good night"),
    ("por favor", "please"),
    ("de nada", "you are welcome"),
    ("hola", "hello"),
    ("adiós", "goodbye"),
    ("gracias", "thank you"),
    ("sí", "yes"),
    ("agua", "water"),
    ("comida", "food"),
    ("casa", "house"),
    ("libro", "book"),
    ("amigo", "friend"),
    ("familia", "family"),
    ("madre", "mother"),
    ("padre", "father"),
    ("nombre", "name"),
    ("mundo", "world"),
    ("amor", "love"),
];

const EN_DE: &[(&str, &str)] = &[
    ("how are you", "wie geht es dir"),
    ("what is your name", "wie heißt du"),
    ("i do not understand", "ich verstehe nicht"),
    ("see you tomorrow", "bis morgen"),
    ("good morning", "guten morgen"),
    ("good evening", "guten abend"),
    ("good night", "gute nacht"),
    ("thank you", "danke"),
    ("excuse me", "entschuldigung"),
    ("you are welcome", "bitte schön"),
    ("hello", "hallo"),
    ("goodbye", "auf wiedersehen"),
    ("yes", "ja"),
    ("no", "nein"),
    ("please", "bitte"),
    ("water", "wasser"),
    ("food", "essen"),
    ("bread", "brot"),
    ("house", "haus"),
    ("school", "schule"),
    ("book", "buch"),
    ("friend", "freund"),
    ("family", "familie"),
    ("mother", "mutter"),
    ("father", "vater"),
    ("name", "name"),
    ("i", "ich"),
    ("you", "du"),
    ("good", "gut"),
    ("today", "heute"),
    ("tomorrow", "morgen"),
    ("day", "tag"),
    ("night", "nacht"),
    ("world", "welt"),
    ("love", "liebe"),
    ("language", "sprache"),
];

const DE_EN: &[(&str, &str)] = &[
    ("wie geht es dir", "how are you"),
    ("ich verstehe nicht", "i do not understand"),
    ("guten morgen", "good morning"),
    ("gute nacht", "good night"),
    ("auf wiedersehen", "goodbye"),
    ("hallo", "hello"),
    ("danke", "thank you"),
    ("ja", "yes"),
    ("nein", "no"),
    ("bitte", "please"),
    ("wasser", "water"),
    ("brot", "bread"),
    ("haus", "house"),
    ("buch", "book"),
    ("freund", "friend"),
    ("familie", "family"),
    ("mutter", "mother"),
    ("vater", "father"),
    ("welt", "world"),
    ("liebe", "love"),
    ("sprache", "language"),
];

/// `(pair source, pair target, pattern, template)`; see [`PatternMatcher`] for
/// the template syntax.
const PATTERNS: &[(&str, &str, &str, &str)] = &[
    ("en", "hi", r"(?i)^my name is (.+?)[.!?]?$", "मेरा नाम {1} है"),
    ("en", "hi", r"(?i)^i am from (.+?)[.!?]?$", "मैं {1} से हूँ"),
    ("en", "hi", r"(?i)^i like (.+?)[.!?]?$", "मुझे {1} पसंद है"),
    ("en", "ne", r"(?i)^my name is (.+?)[.!?]?$", "मेरो नाम {1} हो"),
    ("en", "ne", r"(?i)^i am from (.+?)[.!?]?$", "म {1} बाट हुँ"),
    ("en", "ne", r"(?i)^i like (.+?)[.!?]?$", "मलाई {1} मन पर्छ"),
    ("hi", "en", r"^मेरा नाम (.+?) है[।.]?$", "my name is {1}"),
    ("ne", "en", r"^मेरो नाम (.+?) हो[।.]?$", "my name is {1}"),
    ("en", "fr", r"(?i)^my name is (.+?)[.!?]?$", "je m'appelle {1}"),
    ("en", "es", r"(?i)^my name is (.+?)[.!?]?$", "me llamo {1}"),
    ("en", "de", r"(?i)^my name is (.+?)[.!?]?$", "ich heiße {1}"),
    ("fr", "en", r"(?i)^je m'appelle (.+?)[.!?]?$", "my name is {1}"),
];

fn lexicon_from(entries: &[(&str, &str)]) -> Lexicon {
    entries.iter().copied().collect()
}

/// Build the lexicon store shipped with the engine
pub fn builtin_lexicons() -> LexiconStore {
    let mut store = LexiconStore::new();
    let tables: [(&str, &str, &[(&str, &str)]); 10] = [
        ("en", "hi", EN_HI),
        ("hi", "en", HI_EN),
        ("en", "ne", EN_NE),
        ("ne", "en", NE_EN),
        ("en", "fr", EN_FR),
        ("fr", "en", FR_EN),
        ("en", "es", EN_ES),
        ("es", "en", ES_EN),
        ("en", "de", EN_DE),
        ("de", "en", DE_EN),
    ];
    for (source, target, entries) in tables {
        store.insert(source, target, lexicon_from(entries));
    }
    store
}

/// Build the pattern rules shipped with the engine
pub fn builtin_patterns() -> PatternMatcher {
    let mut matcher = PatternMatcher::new();
    for &(source, target, pattern, template) in PATTERNS {
        if let Err(e) = matcher.add_rule(source, target, pattern, template) {
            warn!(source, target, pattern, "skipping invalid pattern rule: {}", e);
        }
    }
    matcher
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::LanguagePair;

    #[test]
    fn test_builtin_tables_are_registered() {
        let store = builtin_lexicons();
        assert_eq!(store.len(), 10);
        assert!(store.contains(&LanguagePair::new("en", "hi")));
        assert!(store.contains(&LanguagePair::new("ne", "en")));
        // No direct table between two non-English languages
        assert!(!store.contains(&LanguagePair::new("fr", "de")));
    }

    #[test]
    fn test_builtin_keys_are_normalized() {
        let store = builtin_lexicons();
        for pair in store.pairs() {
            let lexicon = store.get(&pair).unwrap();
            for (source, _) in lexicon.iter() {
                assert_eq!(source, source.trim().to_lowercase(), "{} in {}", source, pair);
            }
        }
    }

    #[test]
    fn test_builtin_patterns_compile() {
        let matcher = builtin_patterns();
        assert_eq!(matcher.rule_count(), PATTERNS.len());
    }
}
