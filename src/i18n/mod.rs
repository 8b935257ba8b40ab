//! Internationalization (i18n) support
//!
//! Each language lives in its own `<lang>.json` (or `.yml` / `.yaml`)
//! document of namespaces mapping keys to strings:
//!
//! ```json
//! { "blog": { "title": "Christine Dodrill's Blog" } }
//! ```

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

const EXTENSIONS: [&str; 3] = ["json", "yml", "yaml"];

/// Locale loading and lookup errors
#[derive(Debug, Error)]
pub enum LocaleError {
    #[error("no locale file for language {lang:?} in {dir:?}")]
    MissingFile { lang: String, dir: PathBuf },

    #[error("failed to read locale {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse locale {path:?}: {message}")]
    Parse { path: PathBuf, message: String },

    #[error("language {0:?} is not loaded")]
    MissingLanguage(String),

    #[error("language {lang:?} has no value for {namespace}.{key}")]
    MissingKey {
        lang: String,
        namespace: String,
        key: String,
    },
}

/// Strings of a single language: namespace -> key -> value
#[derive(Debug, Clone, Default)]
pub struct Locale {
    lang: String,
    namespaces: HashMap<String, HashMap<String, String>>,
}

impl Locale {
    /// Build a locale from a parsed document
    fn from_value(lang: &str, document: serde_yaml::Value) -> Option<Self> {
        let serde_yaml::Value::Mapping(root) = document else {
            return None;
        };

        let mut namespaces = HashMap::new();
        for (namespace, entries) in root {
            let Some(namespace) = namespace.as_str() else {
                continue;
            };
            let mut values = HashMap::new();
            flatten_translations(&entries, "", &mut values);
            namespaces.insert(namespace.to_string(), values);
        }

        Some(Self {
            lang: lang.to_string(),
            namespaces,
        })
    }

    /// Look up `namespace.key`; a missing value is an error, never a default
    pub fn value(&self, namespace: &str, key: &str) -> Result<&str, LocaleError> {
        self.namespaces
            .get(namespace)
            .and_then(|values| values.get(key))
            .map(String::as_str)
            .ok_or_else(|| LocaleError::MissingKey {
                lang: self.lang.clone(),
                namespace: namespace.to_string(),
                key: key.to_string(),
            })
    }
}

/// Every loaded language, read-only after boot
#[derive(Debug, Clone, Default)]
pub struct LocaleStore {
    locales: HashMap<String, Locale>,
}

impl LocaleStore {
    /// Load one locale file per language from a directory
    pub fn load<P: AsRef<Path>, S: AsRef<str>>(
        dir: P,
        languages: &[S],
    ) -> Result<Self, LocaleError> {
        let dir = dir.as_ref();
        let mut locales = HashMap::new();

        for lang in languages {
            let lang = lang.as_ref();
            let path = EXTENSIONS
                .iter()
                .map(|ext| dir.join(format!("{}.{}", lang, ext)))
                .find(|path| path.is_file())
                .ok_or_else(|| LocaleError::MissingFile {
                    lang: lang.to_string(),
                    dir: dir.to_path_buf(),
                })?;

            let locale = load_locale(lang, &path)?;
            tracing::debug!("Loaded language file: {:?}", path);
            locales.insert(lang.to_string(), locale);
        }

        Ok(Self { locales })
    }

    /// Get a loaded language
    pub fn locale(&self, lang: &str) -> Result<&Locale, LocaleError> {
        self.locales
            .get(lang)
            .ok_or_else(|| LocaleError::MissingLanguage(lang.to_string()))
    }

    /// Look up `namespace.key` in `lang`
    pub fn value(&self, lang: &str, namespace: &str, key: &str) -> Result<&str, LocaleError> {
        self.locale(lang)?.value(namespace, key)
    }

    /// Loaded language codes, sorted
    pub fn languages(&self) -> Vec<&str> {
        let mut langs: Vec<&str> = self.locales.keys().map(String::as_str).collect();
        langs.sort_unstable();
        langs
    }
}

/// Read and parse one locale document
fn load_locale(lang: &str, path: &Path) -> Result<Locale, LocaleError> {
    let content = fs::read_to_string(path).map_err(|source| LocaleError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let parse_error = |message: String| LocaleError::Parse {
        path: path.to_path_buf(),
        message,
    };

    let document = if path.extension().and_then(|e| e.to_str()) == Some("json") {
        let json: serde_json::Value =
            serde_json::from_str(&content).map_err(|e| parse_error(e.to_string()))?;
        json_value_to_yaml(json)
    } else {
        serde_yaml::from_str(&content).map_err(|e| parse_error(e.to_string()))?
    };

    Locale::from_value(lang, document)
        .ok_or_else(|| parse_error("top level must be a map of namespaces".to_string()))
}

/// Flatten nested keys below a namespace using dot notation
fn flatten_translations(
    value: &serde_yaml::Value,
    prefix: &str,
    result: &mut HashMap<String, String>,
) {
    let serde_yaml::Value::Mapping(map) = value else {
        return;
    };

    for (key, value) in map {
        let Some(key) = key.as_str() else {
            continue;
        };
        let full_key = if prefix.is_empty() {
            key.to_string()
        } else {
            format!("{}.{}", prefix, key)
        };

        match value {
            serde_yaml::Value::String(s) => {
                result.insert(full_key, s.clone());
            }
            serde_yaml::Value::Number(n) => {
                result.insert(full_key, n.to_string());
            }
            serde_yaml::Value::Bool(b) => {
                result.insert(full_key, b.to_string());
            }
            serde_yaml::Value::Mapping(_) => flatten_translations(value, &full_key, result),
            _ => {}
        }
    }
}

fn json_value_to_yaml(json: serde_json::Value) -> serde_yaml::Value {
    match json {
        serde_json::Value::Null => serde_yaml::Value::Null,
        serde_json::Value::Bool(b) => serde_yaml::Value::Bool(b),
        serde_json::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                serde_yaml::Value::Number(i.into())
            } else if let Some(f) = n.as_f64() {
                serde_yaml::Value::Number(serde_yaml::Number::from(f))
            } else {
                serde_yaml::Value::Null
            }
        }
        serde_json::Value::String(s) => serde_yaml::Value::String(s),
        serde_json::Value::Array(arr) => {
            serde_yaml::Value::Sequence(arr.into_iter().map(json_value_to_yaml).collect())
        }
        serde_json::Value::Object(obj) => {
            let mut map = serde_yaml::Mapping::new();
            for (k, v) in obj {
                map.insert(serde_yaml::Value::String(k), json_value_to_yaml(v));
            }
            serde_yaml::Value::Mapping(map)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EN: &str = r#"{
        "blog": { "title": "Christine Dodrill's Blog", "description": "My blog posts" },
        "meta": { "rss_copyright": "This work is licensed under CC-BY-SA", "year": 2020 },
        "header": { "name": "Christine Dodrill", "nav": { "home": "Home" } }
    }"#;

    const TP: &str = r#"
blog:
  title: lipu pi jan Kitinan
"#;

    fn store() -> LocaleStore {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("en.json"), EN).unwrap();
        fs::write(dir.path().join("tp.yml"), TP).unwrap();
        LocaleStore::load(dir.path(), &["en", "tp"]).unwrap()
    }

    #[test]
    fn test_value() {
        let store = store();
        assert_eq!(
            store.value("en", "blog", "title").unwrap(),
            "Christine Dodrill's Blog"
        );
        assert_eq!(
            store.value("tp", "blog", "title").unwrap(),
            "lipu pi jan Kitinan"
        );
        assert_eq!(store.value("en", "meta", "year").unwrap(), "2020");
        assert_eq!(store.value("en", "header", "nav.home").unwrap(), "Home");
        assert_eq!(store.languages(), vec!["en", "tp"]);
    }

    #[test]
    fn test_missing_key_is_an_error() {
        let store = store();
        assert!(matches!(
            store.value("tp", "blog", "description"),
            Err(LocaleError::MissingKey { .. })
        ));
        assert!(matches!(
            store.value("en", "nope", "title"),
            Err(LocaleError::MissingKey { .. })
        ));
    }

    #[test]
    fn test_missing_language_is_an_error() {
        assert!(matches!(
            store().locale("fr"),
            Err(LocaleError::MissingLanguage(_))
        ));
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("en.json"), EN).unwrap();
        assert!(matches!(
            LocaleStore::load(dir.path(), &["en", "tp"]),
            Err(LocaleError::MissingFile { .. })
        ));
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("en.json"), "{ \"blog\": ").unwrap();
        assert!(matches!(
            LocaleStore::load(dir.path(), &["en"]),
            Err(LocaleError::Parse { .. })
        ));

        fs::write(dir.path().join("en.json"), "[\"not\", \"a\", \"map\"]").unwrap();
        assert!(matches!(
            LocaleStore::load(dir.path(), &["en"]),
            Err(LocaleError::Parse { .. })
        ));
    }
}
