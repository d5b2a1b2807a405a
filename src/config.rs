use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::life::Rule;

/// Settings for one simulation run.
///
/// Every field has a default so a config file only needs the keys it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimConfig {
    /// Grid file to load.
    pub input: Option<PathBuf>,
    /// Where the final generation is written.
    pub output: PathBuf,
    /// Number of generations after the starting one.
    pub generations: usize,
    /// Directory for per-generation frames; none are written when unset.
    pub frames: Option<PathBuf>,
    /// Birth/survival rule.
    pub rule: Rule,
    /// Use the row-parallel multiply.
    pub parallel: bool,
}

impl SimConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("[config] Failed to read config file: {}", path.display()))?;
        Self::from_toml(&content)
            .with_context(|| format!("[config] Invalid config file: {}", path.display()))
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            input: None,
            output: PathBuf::from("final_state.txt"),
            generations: 25,
            frames: None,
            rule: Rule::CONWAY,
            parallel: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        assert_eq!(SimConfig::from_toml("").unwrap(), SimConfig::default());
    }

    #[test]
    fn overrides_selected_keys() {
        let config = SimConfig::from_toml(r#"
            input = "init.txt"
            generations = 100
            rule = "B36/S23"
            frames = "out/frames"
        "#).unwrap();

        assert_eq!(config.input, Some(PathBuf::from("init.txt")));
        assert_eq!(config.generations, 100);
        assert_eq!(config.rule, "B36/S23".parse().unwrap());
        assert_eq!(config.frames, Some(PathBuf::from("out/frames")));
        assert_eq!(config.output, PathBuf::from("final_state.txt"));
    }

    #[test]
    fn rejects_bad_rule_and_unknown_keys() {
        assert!(SimConfig::from_toml(r#"rule = "B3S23""#).is_err());
        assert!(SimConfig::from_toml("generation = 3").is_err());
    }

    #[test]
    fn reads_from_file() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("life.toml");
        fs::write(&path, "generations = 7\nparallel = true\n").unwrap();

        let config = SimConfig::from_file(&path).unwrap();
        assert_eq!(config.generations, 7);
        assert!(config.parallel);

        let err = SimConfig::from_file(tmp.path().join("missing.toml")).unwrap_err();
        assert!(err.to_string().starts_with("[config] Failed to read config file"));
    }

    #[test]
    fn serializes_rule_as_notation() {
        let text = toml::to_string(&SimConfig::default()).unwrap();
        assert!(text.contains(r#"rule = "B3/S23""#));
    }
}
