//! Bundled offline language packs
//!
//! Every pack ships an English → language dictionary. The reverse direction
//! is derived from it when the pack is installed.

/// Static description of a downloadable pack
#[derive(Debug)]
pub struct PackSpec {
    pub code: &'static str,
    pub name: &'static str,
    pub native_name: &'static str,
    /// Declared download size in bytes
    pub size_bytes: u64,
    /// Download source identifier
    pub source: &'static str,
    /// English → language entries, in match order
    pub entries: &'static [(&'static str, &'static str)],
}

/// Hardcoded whole-text outputs: `(source, target, needle, output)`
///
/// A text whose lower-cased form contains `needle` translates to `output`
/// as a whole.
pub const CANNED: &[(&str, &str, &str, &str)] = &[
    ("en", "hi", "how are you", "आप कैसे हैं?"),
    ("en", "hi", "what is your name", "आपका नाम क्या है?"),
    ("en", "ne", "how are you", "तपाईंलाई कस्तो छ?"),
    ("en", "ne", "what is your name", "तपाईंको नाम के हो?"),
    ("en", "fr", "how are you", "comment allez-vous ?"),
    ("en", "es", "how are you", "¿cómo estás?"),
    ("en", "de", "how are you", "wie geht es dir?"),
    ("hi", "en", "आप कैसे हैं", "how are you?"),
    ("ne", "en", "तपाईंलाई कस्तो छ", "how are you?"),
    ("fr", "en", "comment allez-vous", "how are you?"),
    ("es", "en", "cómo estás", "how are you?"),
    ("de", "en", "wie geht es dir", "how are you?"),
];

/// Canned outputs for one direction, in declaration order
pub fn canned_for<'a>(
    source: &'a str,
    target: &'a str,
) -> impl Iterator<Item = (&'static str, &'static str)> + 'a {
    CANNED
        .iter()
        .filter(move |(s, t, _, _)| *s == source && *t == target)
        .map(|(_, _, needle, output)| (*needle, *output))
}

pub const CATALOG: &[PackSpec] = &[
    PackSpec {
        code: "en",
        name: "English",
        native_name: "English",
        size_bytes: 0,
        source: "builtin",
        entries: &[],
    },
    PackSpec {
        code: "hi",
        name: "Hindi",
        native_name: "हिन्दी",
        size_bytes: 12_400_000,
        source: "packs/hi-v1",
        entries: EN_HI,
    },
    PackSpec {
        code: "ne",
        name: "Nepali",
        native_name: "नेपाली",
        size_bytes: 9_800_000,
        source: "packs/ne-v1",
        entries: EN_NE,
    },
    PackSpec {
        code: "fr",
        name: "French",
        native_name: "Français",
        size_bytes: 15_200_000,
        source: "packs/fr-v1",
        entries: EN_FR,
    },
    PackSpec {
        code: "es",
        name: "Spanish",
        native_name: "Español",
        size_bytes: 14_700_000,
        source: "packs/es-v1",
        entries: EN_ES,
    },
    PackSpec {
        code: "de",
        name: "German",
        native_name: "Deutsch",
        size_bytes: 16_100_000,
        source: "packs/de-v1",
        entries: EN_DE,
    },
];

pub fn find_spec(code: &str) -> Option<&'static PackSpec> {
    CATALOG.iter().find(|spec| spec.code == code)
}

const EN_HI: &[(&str, &str)] = &[
    ("good morning", "सुप्रभात"),
    ("good night", "शुभ रात्रि"),
    ("thank you", "धन्यवाद"),
    ("see you later", "फिर मिलेंगे"),
    ("how much", "कितना"),
    ("hello", "नमस्ते"),
    ("goodbye", "अलविदा"),
    ("please", "कृपया"),
    ("yes", "हाँ"),
    ("no", "नहीं"),
    ("friend", "दोस्त"),
    ("family", "परिवार"),
    ("teacher", "शिक्षक"),
    ("student", "छात्र"),
    ("water", "पानी"),
    ("food", "खाना"),
    ("rice", "चावल"),
    ("milk", "दूध"),
    ("tea", "चाय"),
    ("house", "घर"),
    ("school", "विद्यालय"),
    ("book", "किताब"),
    ("sun", "सूरज"),
    ("moon", "चाँद"),
    ("flower", "फूल"),
    ("tree", "पेड़"),
    ("rain", "बारिश"),
    ("day", "दिन"),
    ("night", "रात"),
    ("today", "आज"),
    ("tomorrow", "कल"),
    ("good", "अच्छा"),
    ("bad", "बुरा"),
    ("big", "बड़ा"),
    ("small", "छोटा"),
    ("love", "प्यार"),
    ("i", "मैं"),
    ("you", "आप"),
    ("we", "हम"),
    ("is", "है"),
    ("are", "हैं"),
    ("market", "बाज़ार"),
    ("city", "शहर"),
    ("country", "देश"),
    ("language", "भाषा"),
];

const EN_NE: &[(&str, &str)] = &[
    ("good morning", "शुभ प्रभात"),
    ("good night", "शुभ रात्री"),
    ("thank you", "धन्यवाद"),
    ("see you later", "पछि भेटौंला"),
    ("how much", "कति"),
    ("hello", "नमस्ते"),
    ("goodbye", "बिदा"),
    ("please", "कृपया"),
    ("yes", "हो"),
    ("no", "होइन"),
    ("friend", "साथी"),
    ("family", "परिवार"),
    ("teacher", "शिक्षक"),
    ("student", "विद्यार्थी"),
    ("water", "पानी"),
    ("food", "खाना"),
    ("rice", "भात"),
    ("milk", "दूध"),
    ("tea", "चिया"),
    ("house", "घर"),
    ("school", "विद्यालय"),
    ("book", "किताब"),
    ("sun", "सूर्य"),
    ("moon", "चन्द्रमा"),
    ("flower", "फूल"),
    ("tree", "रूख"),
    ("mountain", "पहाड"),
    ("rain", "पानी पर्नु"),
    ("day", "दिन"),
    ("night", "रात"),
    ("today", "आज"),
    ("tomorrow", "भोलि"),
    ("good", "राम्रो"),
    ("bad", "नराम्रो"),
    ("big", "ठूलो"),
    ("small", "सानो"),
    ("love", "माया"),
    ("i", "म"),
    ("you", "तपाईं"),
    ("we", "हामी"),
    ("market", "बजार"),
    ("city", "शहर"),
    ("country", "देश"),
    ("language", "भाषा"),
];

const EN_FR: &[(&str, &str)] = &[
    ("hello", "bonjour"),
    ("good morning", "bonjour"),
    ("good night", "bonne nuit"),
    ("thank you", "merci"),
    ("see you later", "à plus tard"),
    ("how much", "combien"),
    ("goodbye", "au revoir"),
    ("please", "s'il vous plaît"),
    ("yes", "oui"),
    ("no", "non"),
    ("friend", "ami"),
    ("family", "famille"),
    ("teacher", "professeur"),
    ("student", "étudiant"),
    ("water", "eau"),
    ("food", "nourriture"),
    ("rice", "riz"),
    ("milk", "lait"),
    ("tea", "thé"),
    ("house", "maison"),
    ("school", "école"),
    ("book", "livre"),
    ("sun", "soleil"),
    ("moon", "lune"),
    ("flower", "fleur"),
    ("tree", "arbre"),
    ("rain", "pluie"),
    ("day", "jour"),
    ("night", "nuit"),
    ("today", "aujourd'hui"),
    ("tomorrow", "demain"),
    ("good", "bon"),
    ("bad", "mauvais"),
    ("big", "grand"),
    ("small", "petit"),
    ("love", "amour"),
    ("market", "marché"),
    ("city", "ville"),
    ("country", "pays"),
    ("language", "langue"),
];

const EN_ES: &[(&str, &str)] = &[
    ("good morning", "buenos días"),
    ("good night", "buenas noches"),
    ("thank you", "gracias"),
    ("see you later", "hasta luego"),
    ("how much", "cuánto"),
    ("hello", "hola"),
    ("goodbye", "adiós"),
    ("please", "por favor"),
    ("yes", "sí"),
    ("no", "no"),
    ("friend", "amigo"),
    ("family", "familia"),
    ("teacher", "profesor"),
    ("student", "estudiante"),
    ("water", "agua"),
    ("food", "comida"),
    ("rice", "arroz"),
    ("milk", "leche"),
    ("tea", "té"),
    ("house", "casa"),
    ("school", "escuela"),
    ("book", "libro"),
    ("sun", "sol"),
    ("moon", "luna"),
    ("flower", "flor"),
    ("tree", "árbol"),
    ("rain", "lluvia"),
    ("day", "día"),
    ("night", "noche"),
    ("today", "hoy"),
    ("tomorrow", "mañana"),
    ("good", "bueno"),
    ("bad", "malo"),
    ("big", "grande"),
    ("small", "pequeño"),
    ("love", "amor"),
    ("market", "mercado"),
    ("city", "ciudad"),
    ("country", "país"),
    ("language", "idioma"),
];

const EN_DE: &[(&str, &str)] = &[
    ("good morning", "guten morgen"),
    ("good night", "gute nacht"),
    ("thank you", "danke"),
    ("see you later", "bis später"),
    ("how much", "wie viel"),
    ("hello", "hallo"),
    ("goodbye", "auf wiedersehen"),
    ("please", "bitte"),
    ("yes", "ja"),
    ("no", "nein"),
    ("friend", "freund"),
    ("family", "familie"),
    ("teacher", "lehrer"),
    ("student", "student"),
    ("water", "wasser"),
    ("food", "essen"),
    ("rice", "reis"),
    ("milk", "milch"),
    ("tea", "tee"),
    ("house", "haus"),
    ("school", "schule"),
    ("book", "buch"),
    ("sun", "sonne"),
    ("moon", "mond"),
    ("flower", "blume"),
    ("tree", "baum"),
    ("rain", "regen"),
    ("day", "tag"),
    ("night", "nacht"),
    ("today", "heute"),
    ("tomorrow", "morgen"),
    ("good", "gut"),
    ("bad", "schlecht"),
    ("big", "groß"),
    ("small", "klein"),
    ("love", "liebe"),
    ("market", "markt"),
    ("city", "stadt"),
    ("country", "land"),
    ("language", "sprache"),
];
