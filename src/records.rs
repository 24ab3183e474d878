//! Leaderboard persistence as a JSON array of records.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use anyhow::{Context, Result};

use crate::core::{HighScore, Record};

/// Load the leaderboard. A missing file is an empty table.
pub fn load(path: &Path) -> Result<HighScore> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(HighScore::default()),
        Err(e) => {
            return Err(e).with_context(|| format!("Failed to read {}", path.display()))
        }
    };
    let records: Vec<Record> = serde_json::from_str(&text)
        .with_context(|| format!("Failed to parse {}", path.display()))?;
    Ok(HighScore::new(records))
}

/// Write the leaderboard, best first.
pub fn save(path: &Path, high_score: &HighScore) -> Result<()> {
    let json = serde_json::to_string_pretty(high_score.records())?;
    fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("tetris-rules-{}-{}.json", name, std::process::id()))
    }

    #[test]
    fn test_missing_file_is_empty() {
        let hs = load(&temp_path("missing")).unwrap();
        assert!(hs.is_empty());
    }

    #[test]
    fn test_save_then_load() {
        let path = temp_path("save");
        let mut hs = HighScore::default();
        hs.add(30, "bob");
        hs.add(90, "ann");
        save(&path, &hs).unwrap();

        let loaded = load(&path).unwrap();
        assert_eq!(loaded, hs);
        assert_eq!(loaded.best(), Some(90));
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_corrupt_file_reports_path() {
        let path = temp_path("corrupt");
        fs::write(&path, "{not json").unwrap();
        let err = load(&path).unwrap_err();
        assert!(format!("{:#}", err).contains("Failed to parse"));
        let _ = fs::remove_file(&path);
    }
}
