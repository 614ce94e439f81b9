use crate::data::{builtin_lexicons, builtin_patterns};
use crate::error::LoadError;
use crate::lexicon::{LanguagePair, Lexicon, LexiconStore};
use crate::resolver::Resolver;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// Load a lexicon from a single JSON file
///
/// The JSON file should have the following structure:
/// ```json
/// {
///     "@metadata": { ... },  // Ignored
///     "good morning": "सुप्रभात",
///     "hello": "नमस्ते"
/// }
/// ```
///
/// Entry order in the file is kept, since it decides which entry wins when
/// several could match.
///
/// # Errors
/// - File not found or unreadable
/// - Invalid JSON, or a root that is not an object
pub fn load_lexicon_from_file(path: &Path) -> Result<Lexicon, LoadError> {
    let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let json: Value = serde_json::from_str(&content).map_err(|source| LoadError::Json {
        path: path.to_path_buf(),
        source,
    })?;

    let obj = json
        .as_object()
        .ok_or_else(|| LoadError::NotAnObject(path.to_path_buf()))?;

    let mut lexicon = Lexicon::new();
    for (source, target) in obj {
        if source.starts_with('@') {
            continue;
        }
        match target.as_str() {
            Some(target) => {
                lexicon.insert(source, target);
            }
            None => warn!(
                file = %path.display(),
                "entry '{}' is not a string, skipping", source
            ),
        }
    }

    Ok(lexicon)
}

/// Load every `{source}-{target}.json` file in a directory
///
/// Files are read in name order so the result does not depend on the
/// platform's directory listing order. Non-JSON files are ignored.
///
/// # Errors
/// - Directory not found
/// - A JSON file whose name is not a language pair
/// - File read/parse errors
pub fn load_lexicons_from_dir(dir: &Path) -> Result<Vec<(LanguagePair, Lexicon)>, LoadError> {
    if !dir.is_dir() {
        return Err(LoadError::NotADirectory(dir.to_path_buf()));
    }

    let entries = fs::read_dir(dir).map_err(|source| LoadError::Io {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut paths = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| LoadError::Io {
            path: dir.to_path_buf(),
            source,
        })?;
        let path = entry.path();
        if path.extension().and_then(|ext| ext.to_str()) == Some("json") {
            paths.push(path);
        }
    }
    paths.sort();

    let mut lexicons = Vec::with_capacity(paths.len());
    for path in paths {
        let pair = path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .and_then(LanguagePair::parse)
            .ok_or_else(|| LoadError::InvalidPairName(path.clone()))?;
        let lexicon = load_lexicon_from_file(&path)?;
        debug!(pair = %pair, entries = lexicon.len(), "loaded lexicon");
        lexicons.push((pair, lexicon));
    }

    if lexicons.is_empty() {
        warn!("no lexicon files found in {}", dir.display());
    }

    Ok(lexicons)
}

impl LexiconStore {
    /// Merge every lexicon file of a directory into the store
    pub fn load_dir(&mut self, dir: &Path) -> Result<usize, LoadError> {
        let lexicons = load_lexicons_from_dir(dir)?;
        let count = lexicons.len();
        for (pair, lexicon) in lexicons {
            self.insert(pair.source(), pair.target(), lexicon);
        }
        Ok(count)
    }
}

impl Resolver {
    /// Resolver over the bundled data with every lexicon file of `dir` merged in
    ///
    /// Entries for a bundled pair are appended after the bundled ones.
    pub fn builtin_with_dir(dir: &Path) -> Result<Self, LoadError> {
        let mut lexicons = builtin_lexicons();
        let loaded = lexicons.load_dir(dir)?;
        debug!(loaded, dir = %dir.display(), "merged lexicon files");
        Ok(Self::new(lexicons, builtin_patterns()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_file(dir: &Path, name: &str, content: &str) {
        let mut file = fs::File::create(dir.join(name)).unwrap();
        file.write_all(content.as_bytes()).unwrap();
    }

    #[test]
    fn test_load_file_keeps_order_and_skips_metadata() {
        let dir = tempfile::tempdir().unwrap();
        write_file(
            dir.path(),
            "en-mr.json",
            r#"{"@metadata": {"authors": []}, "Water": "पाणी", "hello": "नमस्कार", "count": 3}"#,
        );
        let lexicon = load_lexicon_from_file(&dir.path().join("en-mr.json")).unwrap();
        let entries: Vec<_> = lexicon.iter().collect();
        assert_eq!(entries, vec![("water", "पाणी"), ("hello", "नमस्कार")]);
    }

    #[test]
    fn test_load_file_rejects_non_object() {
        let dir = tempfile::tempdir().unwrap();
        write_file(dir.path(), "en-mr.json", r#"["hello"]"#);
        let result = load_lexicon_from_file(&dir.path().join("en-mr.json"));
        assert!(matches!(result, Err(LoadError::NotAnObject(_))));
    }

    #[test]
    fn test_load_file_invalid_json() {
        let dir = tempfile::tempdir().unwrap();
        write_file(dir.path(), "en-mr.json", "{ not json");
        let result = load_lexicon_from_file(&dir.path().join("en-mr.json"));
        assert!(matches!(result, Err(LoadError::Json { .. })));
    }

    #[test]
    fn test_load_dir_into_store() {
        let dir = tempfile::tempdir().unwrap();
        write_file(dir.path(), "en-mr.json", r#"{"hello": "नमस्कार"}"#);
        write_file(dir.path(), "mr-en.json", r#"{"नमस्कार": "hello"}"#);
        write_file(dir.path(), "README.txt", "ignored");

        let mut store = LexiconStore::new();
        assert_eq!(store.load_dir(dir.path()).unwrap(), 2);
        assert_eq!(
            store.get(&LanguagePair::new("en", "mr")).unwrap().get("hello"),
            Some("नमस्कार")
        );
        assert!(store.contains(&LanguagePair::new("mr", "en")));
    }

    #[test]
    fn test_builtin_resolver_with_extra_lexicons() {
        let dir = tempfile::tempdir().unwrap();
        write_file(dir.path(), "en-mr.json", r#"{"hello": "नमस्कार"}"#);
        write_file(dir.path(), "en-hi.json", r#"{"lantern": "लालटेन"}"#);

        let resolver = Resolver::builtin_with_dir(dir.path()).unwrap();
        assert_eq!(resolver.resolve("hello", "en", "mr"), "नमस्कार");
        assert_eq!(resolver.resolve("lantern", "en", "hi"), "लालटेन");
        // Bundled entries are still there
        assert_eq!(resolver.resolve("hello", "en", "hi"), "नमस्ते");
    }

    #[test]
    fn test_load_dir_rejects_bad_file_name() {
        let dir = tempfile::tempdir().unwrap();
        write_file(dir.path(), "marathi.json", r#"{"hello": "नमस्कार"}"#);
        let result = load_lexicons_from_dir(dir.path());
        assert!(matches!(result, Err(LoadError::InvalidPairName(_))));
    }

    #[test]
    fn test_load_missing_dir() {
        let result = load_lexicons_from_dir(Path::new("/definitely/not/here"));
        assert!(matches!(result, Err(LoadError::NotADirectory(_))));
    }
}
