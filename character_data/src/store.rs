//! File-backed content store.
//!
//! Content lives on disk as `characters.json` (an array of summaries) plus
//! one `relationships/<characterId>.json` record per character that has
//! declared relationships. Shape validation of the records happens lazily in
//! [`relationships_for`](ContentStore::relationships_for), so a malformed
//! record degrades to "no relationships" instead of poisoning the whole
//! store.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::warn;

use crate::characters::{CharacterDirectory, CharacterId, CharacterSummary};
use crate::relationships::{parse_relationships, Relationship};

/// Failures while opening the content store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("failed to read {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Read-only view over the character content of one site.
#[derive(Debug, Clone, Default)]
pub struct ContentStore {
    directory: CharacterDirectory,
    records: HashMap<CharacterId, Value>,
}

impl ContentStore {
    /// Open the content rooted at `root`.
    ///
    /// `characters.json` must exist and parse; relationship records are
    /// loaded as raw JSON and validated only when asked for. A relationship
    /// file that is not even valid JSON is logged and skipped, matching the
    /// treatment of shape-malformed records.
    pub fn open(root: impl AsRef<Path>) -> Result<Self, StoreError> {
        let root = root.as_ref();

        let characters_path = root.join("characters.json");
        let text = fs::read_to_string(&characters_path).map_err(|source| StoreError::Io {
            path: characters_path.clone(),
            source,
        })?;
        let summaries: Vec<CharacterSummary> =
            serde_json::from_str(&text).map_err(|source| StoreError::Json {
                path: characters_path,
                source,
            })?;

        let mut records = HashMap::new();
        let records_dir = root.join("relationships");
        if records_dir.is_dir() {
            let entries = fs::read_dir(&records_dir).map_err(|source| StoreError::Io {
                path: records_dir.clone(),
                source,
            })?;
            for entry in entries {
                let entry = entry.map_err(|source| StoreError::Io {
                    path: records_dir.clone(),
                    source,
                })?;
                let path = entry.path();
                if path.extension().and_then(|e| e.to_str()) != Some("json") {
                    continue;
                }
                let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
                    continue;
                };
                let character_id = CharacterId::from(stem);

                let text = fs::read_to_string(&path).map_err(|source| StoreError::Io {
                    path: path.clone(),
                    source,
                })?;
                match serde_json::from_str::<Value>(&text) {
                    Ok(raw) => {
                        records.insert(character_id, raw);
                    }
                    Err(err) => {
                        warn!(
                            character_id = stem,
                            %err,
                            "relationship record is not valid JSON, ignoring file"
                        );
                    }
                }
            }
        }

        Ok(Self {
            directory: summaries.into_iter().collect(),
            records,
        })
    }

    /// The display-metadata directory built from `characters.json`.
    pub fn directory(&self) -> &CharacterDirectory {
        &self.directory
    }

    /// Look up one character's summary.
    pub fn character(&self, id: &CharacterId) -> Option<&CharacterSummary> {
        self.directory.get(id)
    }

    /// The validated relationships declared by a character.
    ///
    /// An absent record is the normal "no relationships declared" case and
    /// returns an empty list without logging; a present-but-malformed record
    /// also returns an empty list, after the validator logs the cause.
    pub fn relationships_for(&self, id: &CharacterId) -> Vec<Relationship> {
        match self.records.get(id) {
            Some(raw) => parse_relationships(raw, id.as_str()),
            None => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_fixture(root: &Path) {
        fs::write(
            root.join("characters.json"),
            r##"[
                { "id": "aurora", "displayName": "Aurora", "color": "#7c9cff" },
                { "id": "silas", "displayName": "Silas", "color": "#ff9c7c" }
            ]"##,
        )
        .unwrap();

        let records = root.join("relationships");
        fs::create_dir(&records).unwrap();
        fs::write(
            records.join("aurora.json"),
            r#"{
                "characterId": "aurora",
                "relationships": [
                    {
                        "targetId": "silas",
                        "type": "rival",
                        "label": "old rival",
                        "description": "They trained together."
                    }
                ]
            }"#,
        )
        .unwrap();
        // Shape-malformed record: must degrade to "no relationships".
        fs::write(records.join("silas.json"), r#"{ "characterId": "silas" }"#).unwrap();
    }

    #[test]
    fn test_open_and_lookup() {
        let dir = tempfile::tempdir().unwrap();
        write_fixture(dir.path());

        let store = ContentStore::open(dir.path()).unwrap();
        assert_eq!(store.directory().len(), 2);

        let aurora = CharacterId::from("aurora");
        assert_eq!(store.character(&aurora).unwrap().display_name, "Aurora");

        let relationships = store.relationships_for(&aurora);
        assert_eq!(relationships.len(), 1);
        assert_eq!(relationships[0].target_id.as_str(), "silas");
    }

    #[test]
    fn test_absent_record_is_silent_empty() {
        let dir = tempfile::tempdir().unwrap();
        write_fixture(dir.path());

        let store = ContentStore::open(dir.path()).unwrap();
        assert!(store
            .relationships_for(&CharacterId::from("maren"))
            .is_empty());
    }

    #[test]
    fn test_malformed_record_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        write_fixture(dir.path());

        let store = ContentStore::open(dir.path()).unwrap();
        assert!(store
            .relationships_for(&CharacterId::from("silas"))
            .is_empty());
    }

    #[test]
    fn test_missing_characters_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            ContentStore::open(dir.path()),
            Err(StoreError::Io { .. })
        ));
    }

    #[test]
    fn test_unparseable_record_file_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        write_fixture(dir.path());
        fs::write(
            dir.path().join("relationships").join("maren.json"),
            "not json at all",
        )
        .unwrap();

        let store = ContentStore::open(dir.path()).unwrap();
        assert!(store
            .relationships_for(&CharacterId::from("maren"))
            .is_empty());
    }
}
