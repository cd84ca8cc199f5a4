/*!
 * Localization service for display strings.
 *
 * One `Localizer` holds the active translation catalog for the process.
 * It is constructed once at startup and passed by reference to whatever
 * presents text to the user; there is no global instance.
 */

use log::{debug, warn};
use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use crate::app_config::Config;
use crate::errors::LocalizationError;
use crate::language_utils;

/// Default language code used when configuration or resources are missing
pub const DEFAULT_LANGUAGE: &str = "en";

/// One language's key-to-string mapping plus its directionality flag
///
/// A catalog is immutable once built; reloading a language replaces the
/// whole value in a single assignment, so code, entries, and the
/// right-to-left flag always change together.
#[derive(Debug, Clone)]
pub struct Catalog {
    /// Language code the catalog was loaded for
    code: String,
    /// Flat key-to-string mapping
    entries: HashMap<String, String>,
    /// True iff the language's script reads right-to-left
    rtl: bool,
}

impl Catalog {
    /// Build a catalog from a language code and its entries
    pub fn new(code: &str, entries: HashMap<String, String>) -> Self {
        let code = language_utils::normalize_language_code(code);
        let rtl = language_utils::is_rtl_language(&code);
        Self { code, entries, rtl }
    }

    /// Build an empty catalog for a code
    ///
    /// Used as the last fallback when no resource file can be read; every
    /// lookup then returns the key itself.
    pub fn empty(code: &str) -> Self {
        Self::new(code, HashMap::new())
    }

    /// Language code this catalog belongs to
    pub fn code(&self) -> &str {
        &self.code
    }

    /// True iff the catalog's language reads right-to-left
    pub fn is_rtl(&self) -> bool {
        self.rtl
    }

    /// Look up a key, returning the key itself when unmapped
    pub fn translate<'a>(&'a self, key: &'a str) -> &'a str {
        self.entries.get(key).map(String::as_str).unwrap_or(key)
    }
}

/// Process-wide source of display strings and text-direction hint
pub struct Localizer {
    /// Directory holding one `<code>.json` resource per language
    languages_dir: PathBuf,
    /// The active catalog
    catalog: Catalog,
}

impl Localizer {
    /// Create a localizer with the language taken from configuration
    ///
    /// Falls back to the default language when the configured code has no
    /// resource file.
    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.languages_dir, &config.app_language)
    }

    /// Create a localizer for a language code
    pub fn new<P: AsRef<Path>>(languages_dir: P, code: &str) -> Self {
        let mut localizer = Self {
            languages_dir: languages_dir.as_ref().to_path_buf(),
            catalog: Catalog::empty(DEFAULT_LANGUAGE),
        };
        localizer.load_language(code);
        localizer
    }

    /// Load translations for the specified language
    ///
    /// On a missing or malformed resource this falls back to the default
    /// language once; when the default resource is also unreadable an empty
    /// catalog is installed instead, so the fallback chain always terminates.
    pub fn load_language(&mut self, code: &str) {
        let code = language_utils::normalize_language_code(code);

        match self.read_catalog(&code) {
            Ok(catalog) => {
                debug!("Loaded {} translations for '{}'", catalog.entries.len(), code);
                self.catalog = catalog;
            }
            Err(err) => {
                warn!("{}. Falling back to default language.", err);

                if code == DEFAULT_LANGUAGE {
                    self.catalog = Catalog::empty(DEFAULT_LANGUAGE);
                    return;
                }

                match self.read_catalog(DEFAULT_LANGUAGE) {
                    Ok(catalog) => self.catalog = catalog,
                    Err(err) => {
                        warn!("{}. Using an empty catalog.", err);
                        self.catalog = Catalog::empty(DEFAULT_LANGUAGE);
                    }
                }
            }
        }
    }

    /// Read and parse the resource file for a language code
    fn read_catalog(&self, code: &str) -> Result<Catalog, LocalizationError> {
        let path = self.resource_path(code);

        let file = File::open(&path).map_err(|source| LocalizationError::ResourceMissing {
            code: code.to_string(),
            source,
        })?;

        let reader = BufReader::new(file);
        let entries: HashMap<String, String> = serde_json::from_reader(reader).map_err(
            |source| LocalizationError::ResourceMalformed {
                code: code.to_string(),
                source,
            },
        )?;

        Ok(Catalog::new(code, entries))
    }

    /// Path of the resource file for a language code
    pub fn resource_path(&self, code: &str) -> PathBuf {
        self.languages_dir.join(format!("{}.json", code))
    }

    /// Translate a key to the current language
    ///
    /// Returns the key itself when it has no mapping; never fails.
    pub fn translate<'a>(&'a self, key: &'a str) -> &'a str {
        self.catalog.translate(key)
    }

    /// The active language code
    pub fn current_language(&self) -> &str {
        self.catalog.code()
    }

    /// True iff the active language reads right-to-left
    pub fn is_rtl(&self) -> bool {
        self.catalog.is_rtl()
    }

    /// The active catalog
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }
}
