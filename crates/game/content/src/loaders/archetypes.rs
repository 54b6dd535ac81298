//! Archetype catalogue loader.

use std::path::Path;

use crate::catalog::ArchetypeCatalog;
use crate::loaders::{LoadResult, read_file};
use crate::specs::ArchetypeSpec;

/// Loader for extra archetype definitions from RON files.
pub struct ArchetypeLoader;

impl ArchetypeLoader {
    /// Loads a list of archetype specs.
    pub fn load(path: &Path) -> LoadResult<Vec<ArchetypeSpec>> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<Vec<ArchetypeSpec>> {
        let specs: Vec<ArchetypeSpec> = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse archetypes RON: {}", e))?;
        for spec in &specs {
            if spec.max_health < 1 {
                anyhow::bail!("archetype `{}` needs positive max_health", spec.name);
            }
        }
        Ok(specs)
    }

    /// The built-in catalogue extended (or overridden) by the file's entries.
    pub fn load_into_builtin(path: &Path) -> LoadResult<ArchetypeCatalog> {
        let mut catalog = ArchetypeCatalog::builtin();
        for spec in Self::load(path)? {
            catalog.insert(spec);
        }
        Ok(catalog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::specs::RuleSpec;
    use game_core::Team;

    #[test]
    fn file_entries_extend_the_builtin_catalog() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("archetypes.ron");
        std::fs::write(
            &path,
            r#"[
                (name: "archer", glyph: Some('A'), max_health: 2, attack: 2, rules: [Bishop, King]),
                (name: "rook", max_health: 9, attack: 1, rules: [Rook]),
            ]"#,
        )
        .expect("write");

        let catalog = ArchetypeLoader::load_into_builtin(&path).expect("catalog loads");
        let archer = catalog.get("archer", Team::Black).expect("archer");
        assert_eq!(archer.rules().len(), 2);
        assert_eq!(archer.glyph(), 'A');
        let rook = catalog.get("rook", Team::White).expect("rook");
        assert_eq!(rook.base_max_health(), 9);
        assert!(catalog.get("queen", Team::White).is_ok());
        assert_eq!(
            catalog.spec("archer").map(|s| s.rules.clone()),
            Some(vec![RuleSpec::Bishop, RuleSpec::King])
        );
    }

    #[test]
    fn non_positive_health_is_rejected() {
        let result =
            ArchetypeLoader::parse(r#"[(name: "ghost", max_health: 0, attack: 1, rules: [])]"#);
        assert!(result.is_err());
    }
}
