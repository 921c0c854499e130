// Tournament team model and the team source it is read from.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::storage::Storage;

/// A tournament team as supplied by the team source.
///
/// `full_name` is the identity key everywhere in the engine: pool membership,
/// group membership, and result-log resolution all compare full names with
/// case-sensitive string equality.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub full_name: String,
    /// Short display name (e.g. "KOR").
    pub acronym: String,
    #[serde(default)]
    pub seed: u32,
    /// Aggregate ranking statistic across the team's players, if known.
    #[serde(default)]
    pub average_rank: Option<u32>,
    /// Player names, carried as opaque payload for display on selection.
    #[serde(default)]
    pub players: Vec<String>,
}

impl Team {
    /// Convenience constructor for the common fields.
    pub fn new(full_name: impl Into<String>, acronym: impl Into<String>, seed: u32) -> Self {
        Team {
            full_name: full_name.into(),
            acronym: acronym.into(),
            seed,
            average_rank: None,
            players: Vec::new(),
        }
    }
}

/// Read-only snapshot of the candidate teams for a drawing.
pub trait TeamList {
    fn teams(&self) -> &[Team];
}

impl TeamList for Vec<Team> {
    fn teams(&self) -> &[Team] {
        self
    }
}

/// Team list loaded from a JSON array in backing storage.
pub struct StorageBackedTeamList {
    teams: Vec<Team>,
}

impl StorageBackedTeamList {
    /// Load the team list from `name` in `storage`.
    ///
    /// A missing resource yields an empty list (the drawing is inert but not
    /// an error); malformed JSON is fatal.
    pub fn load(storage: &dyn Storage, name: &str) -> Result<Self> {
        if !storage.exists(name) {
            info!("team list {name} not found, starting with no teams");
            return Ok(StorageBackedTeamList { teams: Vec::new() });
        }

        let text = storage
            .read_to_string(name)
            .with_context(|| format!("failed to read team list {name}"))?;
        let teams: Vec<Team> = serde_json::from_str(&text)
            .with_context(|| format!("failed to parse team list {name}"))?;

        info!("loaded {} teams from {name}", teams.len());
        Ok(StorageBackedTeamList { teams })
    }
}

impl TeamList for StorageBackedTeamList {
    fn teams(&self) -> &[Team] {
        &self.teams
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::DirectoryStorage;
    use std::fs;
    use std::path::PathBuf;

    fn tmp_root(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("drawings_teams_{name}"));
        let _ = fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn load_parses_team_fields() {
        let root = tmp_root("parse");
        let storage = DirectoryStorage::new(&root).unwrap();
        storage
            .write(
                "teams.json",
                r#"[
                    {"full_name": "South Korea", "acronym": "KOR", "seed": 1,
                     "average_rank": 120, "players": ["p1", "p2"]},
                    {"full_name": "Germany", "acronym": "GER"}
                ]"#,
            )
            .unwrap();

        let list = StorageBackedTeamList::load(&storage, "teams.json").unwrap();
        let teams = list.teams();
        assert_eq!(teams.len(), 2);
        assert_eq!(teams[0].full_name, "South Korea");
        assert_eq!(teams[0].acronym, "KOR");
        assert_eq!(teams[0].seed, 1);
        assert_eq!(teams[0].average_rank, Some(120));
        assert_eq!(teams[0].players, vec!["p1", "p2"]);
        // Optional fields default
        assert_eq!(teams[1].seed, 0);
        assert_eq!(teams[1].average_rank, None);
        assert!(teams[1].players.is_empty());

        let _ = fs::remove_dir_all(&root);
    }

    #[test]
    fn load_missing_file_yields_empty_list() {
        let root = tmp_root("missing");
        let storage = DirectoryStorage::new(&root).unwrap();
        let list = StorageBackedTeamList::load(&storage, "teams.json").unwrap();
        assert!(list.teams().is_empty());
        let _ = fs::remove_dir_all(&root);
    }

    #[test]
    fn load_malformed_json_is_an_error() {
        let root = tmp_root("malformed");
        let storage = DirectoryStorage::new(&root).unwrap();
        storage.write("teams.json", "{ not json ]").unwrap();
        assert!(StorageBackedTeamList::load(&storage, "teams.json").is_err());
        let _ = fs::remove_dir_all(&root);
    }
}
