//! Quote persistence.

use crate::error::{QuoteError, Result};
use crate::model::Quote;
use std::path::{Path, PathBuf};

/// Load and save whole quote trees.
pub trait QuoteStore {
    /// Load a quote with its sections and windows.
    fn load_quote_tree(&self, id: &str) -> Result<Quote>;
    /// Save a quote with its sections and windows, replacing any previous version.
    fn save_quote_tree(&self, quote: &Quote) -> Result<()>;
}

/// Stores each quote as `<id>.json` in a directory.
#[derive(Debug, Clone)]
pub struct JsonQuoteStore {
    root: PathBuf,
}

impl JsonQuoteStore {
    /// Create a store rooted at `root`, creating the directory if needed.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        std::fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    fn path_for(&self, id: &str) -> Result<PathBuf> {
        let valid = !id.is_empty()
            && id
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(QuoteError::InvalidTree {
                message: format!("quote id '{}' is not usable as a file name", id),
            });
        }
        Ok(self.root.join(format!("{}.json", id)))
    }

    /// Ids of all stored quotes, sorted.
    pub fn list_ids(&self) -> Result<Vec<String>> {
        let mut ids = Vec::new();
        for entry in std::fs::read_dir(&self.root)? {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) == Some("json") {
                if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                    ids.push(stem.to_string());
                }
            }
        }
        ids.sort();
        Ok(ids)
    }
}

impl QuoteStore for JsonQuoteStore {
    fn load_quote_tree(&self, id: &str) -> Result<Quote> {
        let path = self.path_for(id)?;
        if !path.exists() {
            return Err(QuoteError::QuoteNotFound { id: id.to_string() });
        }
        load_quote_file(&path)
    }

    fn save_quote_tree(&self, quote: &Quote) -> Result<()> {
        let path = self.path_for(&quote.id)?;
        let json = serde_json::to_string_pretty(quote)?;
        std::fs::write(&path, json)?;
        tracing::debug!("Saved quote {} to {}", quote.id, path.display());
        Ok(())
    }
}

/// Read a quote tree from a JSON file.
pub fn load_quote_file(path: &Path) -> Result<Quote> {
    if !path.exists() {
        return Err(QuoteError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let content = std::fs::read_to_string(path)?;
    serde_json::from_str(&content).map_err(|source| QuoteError::Json {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Section, Window};

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().expect("temp dir");
        let store = JsonQuoteStore::open(dir.path()).expect("store opens");

        let mut quote = Quote::new("q-1");
        let mut section = Section::new("s1");
        section.add_window(Window::new("w1", 36.0, 48.0).with_quantity(2));
        quote.add_section(section);

        store.save_quote_tree(&quote).expect("saves");
        let loaded = store.load_quote_tree("q-1").expect("loads");
        assert_eq!(loaded, quote);
        assert_eq!(store.list_ids().expect("lists"), vec!["q-1".to_string()]);
    }

    #[test]
    fn test_load_unknown_quote() {
        let dir = tempfile::tempdir().expect("temp dir");
        let store = JsonQuoteStore::open(dir.path()).expect("store opens");
        let err = store.load_quote_tree("missing").unwrap_err();
        assert!(matches!(err, QuoteError::QuoteNotFound { .. }));
    }

    #[test]
    fn test_rejects_path_like_ids() {
        let dir = tempfile::tempdir().expect("temp dir");
        let store = JsonQuoteStore::open(dir.path()).expect("store opens");
        let err = store.load_quote_tree("../etc/passwd").unwrap_err();
        assert!(matches!(err, QuoteError::InvalidTree { .. }));
    }

    #[test]
    fn test_load_malformed_file() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("bad.json");
        std::fs::write(&path, "{ not json").expect("writes");
        let err = load_quote_file(&path).unwrap_err();
        assert!(matches!(err, QuoteError::Json { .. }));
    }
}
