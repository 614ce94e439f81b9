//! Machine Translation trait and utilities
//!
//! This module defines the `MachineTranslator` trait for provider abstraction,
//! so the fallback chain can talk to the remote endpoint, a mock, or any other
//! backend without knowing which one it has.
//!
//! # Example
//!
//! ```ignore
//! use bhasha_mt::{MachineTranslator, RemoteTranslator};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let provider = RemoteTranslator::from_env()?;
//!     let result = provider.translate("Hello, world!", "en", "hi").await?;
//!     println!("{}", result);
//!     Ok(())
//! }
//! ```

use crate::error::{MtError, MtResult};
use async_trait::async_trait;
use icu_locale::LanguageIdentifier;

/// Generic trait for machine translation providers
///
/// All methods are async to support I/O-bound operations like network requests.
#[async_trait]
pub trait MachineTranslator: Send + Sync {
    /// Translate a single text string from source to target locale
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - The translated text
    /// * `Err(MtError)` - If translation fails
    async fn translate(
        &self,
        text: &str,
        source_locale: &str,
        target_locale: &str,
    ) -> MtResult<String>;

    /// Translate multiple strings, keeping input order
    ///
    /// The default implementation translates one string at a time and stops
    /// at the first error.
    async fn translate_batch(
        &self,
        texts: &[String],
        source_locale: &str,
        target_locale: &str,
    ) -> MtResult<Vec<String>> {
        let mut results = Vec::with_capacity(texts.len());
        for text in texts {
            results.push(self.translate(text, source_locale, target_locale).await?);
        }
        Ok(results)
    }

    /// Name of this provider, for logs and API responses
    fn provider_name(&self) -> &str;
}

/// Normalize a locale code by stripping region and script information
///
/// - `en-US` → `en`
/// - `zh-Hans` → `zh`
/// - `EN` → `en`
///
/// Codes that are not valid BCP 47 are split on the first `-` or `_` and
/// lower-cased.
pub fn normalize_locale(locale: &str) -> String {
    let locale = locale.trim();
    match locale.parse::<LanguageIdentifier>() {
        Ok(id) => id.language.as_str().to_string(),
        Err(_) => locale
            .split(['-', '_'])
            .next()
            .unwrap_or(locale)
            .to_lowercase(),
    }
}

/// Validate that a locale code is in acceptable format
///
/// Checks that the locale code contains only alphanumeric characters,
/// hyphens, and underscores.
pub fn validate_locale(locale: &str) -> MtResult<()> {
    if locale.is_empty() {
        return Err(MtError::InvalidLocale("Locale code is empty".to_string()));
    }

    if !locale
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(MtError::InvalidLocale(format!(
            "Invalid characters in locale code: {}",
            locale
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_locale_with_region() {
        assert_eq!(normalize_locale("en-US"), "en");
        assert_eq!(normalize_locale("hi-IN"), "hi");
        assert_eq!(normalize_locale("ne-NP"), "ne");
    }

    #[test]
    fn test_normalize_locale_with_script() {
        assert_eq!(normalize_locale("zh-Hans"), "zh");
        assert_eq!(normalize_locale("sr-Latn"), "sr");
    }

    #[test]
    fn test_normalize_locale_case_insensitive() {
        assert_eq!(normalize_locale("EN"), "en");
        assert_eq!(normalize_locale("EN-US"), "en");
    }

    #[test]
    fn test_normalize_locale_invalid_tag_falls_back() {
        assert_eq!(normalize_locale("toolonglanguage_x"), "toolonglanguage");
    }

    #[test]
    fn test_validate_locale_valid_codes() {
        assert!(validate_locale("en").is_ok());
        assert!(validate_locale("en-US").is_ok());
        assert!(validate_locale("de_DE").is_ok());
    }

    #[test]
    fn test_validate_locale_invalid_codes() {
        assert!(validate_locale("").is_err());
        assert!(validate_locale("en@invalid").is_err());
        assert!(validate_locale("fr#bad").is_err());
    }

    #[test]
    fn test_validate_locale_error_messages() {
        match validate_locale("en@US") {
            Err(MtError::InvalidLocale(msg)) => {
                assert!(msg.contains("Invalid characters"));
            }
            _ => panic!("Expected InvalidLocale error"),
        }
    }
}
