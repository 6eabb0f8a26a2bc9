//! Creature loader for TOML files.
//!
//! ```toml
//! name = "Goblin"
//! attack = 1
//! defense = 1
//! ```

use std::path::Path;

use anyhow::{Context, Result};
use patterns::Creature;

/// Load a creature from a TOML file.
pub fn load(path: &Path) -> Result<Creature> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read file {}", path.display()))?;
    parse(&content).with_context(|| format!("Failed to parse creature TOML {}", path.display()))
}

fn parse(content: &str) -> Result<Creature> {
    Ok(toml::from_str(content)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_creature_table() {
        let creature = parse("name = \"Orc\"\nattack = 4\ndefense = 2\n").unwrap();
        assert_eq!(creature, Creature::new("Orc", 4, 2));
    }

    #[test]
    fn missing_field_is_an_error() {
        assert!(parse("name = \"Orc\"\nattack = 4\n").is_err());
    }

    #[test]
    fn creature_serde_shape_matches_json() {
        let dragon: Creature =
            serde_json::from_str(r#"{"name":"Dragon","attack":9,"defense":7}"#).unwrap();
        assert_eq!(dragon, Creature::new("Dragon", 9, 7));

        let round = parse(&toml::to_string(&dragon).unwrap()).unwrap();
        assert_eq!(round, dragon);
    }

    #[test]
    fn load_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load(&dir.path().join("nope.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read file"));
    }
}
