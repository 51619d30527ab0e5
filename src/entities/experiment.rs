//! Experiment - top-level saved project: ordered slides plus list registry.

use anyhow::{Context, Result, bail};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::list_db::ListDatabase;
use crate::entities::slide::Slide;

/// File format version written by `save`
pub const FORMAT_VERSION: u32 = 1;

/// Extension used for experiment files
pub const EXPERIMENT_EXT: &str = "json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Experiment {
    pub name: String,
    #[serde(default = "default_version")]
    pub version: u32,
    pub slides: Vec<Slide>,
    /// Snapshot of the list registry at export time
    #[serde(default)]
    pub lists: ListDatabase,
}

fn default_version() -> u32 {
    FORMAT_VERSION
}

impl Default for Experiment {
    fn default() -> Self {
        Self::new("Untitled Experiment")
    }
}

impl Experiment {
    /// New experiment with a single blank slide.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: FORMAT_VERSION,
            slides: vec![Slide::new("Slide 1")],
            lists: ListDatabase::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn slide(&self, index: usize) -> Option<&Slide> {
        self.slides.get(index)
    }

    /// Parse experiment JSON.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let experiment: Experiment =
            serde_json::from_str(json).context("Parse experiment error")?;
        if experiment.version > FORMAT_VERSION {
            bail!(
                "Experiment format v{} is newer than supported v{}",
                experiment.version,
                FORMAT_VERSION
            );
        }
        Ok(experiment)
    }

    /// Load experiment from a JSON file.
    pub fn load_experiment<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)
            .with_context(|| format!("Read experiment error: {}", path.display()))?;
        let experiment = Self::from_json_str(&json)
            .with_context(|| format!("Invalid experiment file: {}", path.display()))?;
        info!(
            "Loaded experiment '{}' ({} slides, {} lists) from {}",
            experiment.name,
            experiment.slides.len(),
            experiment.lists.len(),
            path.display()
        );
        Ok(experiment)
    }

    /// Save experiment as pretty JSON, forcing the `.json` extension.
    ///
    /// Returns the path actually written.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<PathBuf> {
        let json = serde_json::to_string_pretty(self).context("Serialize experiment error")?;

        let path = path.as_ref();
        let path = if path.extension().and_then(|s| s.to_str()) != Some(EXPERIMENT_EXT) {
            path.with_extension(EXPERIMENT_EXT)
        } else {
            path.to_path_buf()
        };

        fs::write(&path, json)
            .with_context(|| format!("Write experiment error: {}", path.display()))?;
        debug!("Experiment '{}' written to {}", self.name, path.display());
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::eblist::StringList;
    use crate::entities::slide::{Repeat, SlideElement};

    fn temp_path(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join("expbuilder_test_experiment");
        let _ = fs::create_dir_all(&dir);
        dir.join(name)
    }

    #[test]
    fn test_new_has_one_slide() {
        let exp = Experiment::new("Stroop");
        assert_eq!(exp.len(), 1);
        assert!(exp.lists.is_empty());
    }

    #[test]
    fn test_save_and_load() {
        let mut exp = Experiment::new("Memory");
        exp.slides[0].elements.push(SlideElement::text("Remember these"));
        exp.slides[0].repeat = Repeat::Times(2);
        exp.lists
            .add_string_list(StringList::with_items("words", vec!["cat".into(), "dog".into()]));

        let written = exp.save(temp_path("memory")).unwrap();
        assert_eq!(written.extension().and_then(|s| s.to_str()), Some("json"));

        let loaded = Experiment::load_experiment(&written).unwrap();
        assert_eq!(loaded, exp);
        let _ = fs::remove_file(written);
    }

    #[test]
    fn test_load_missing_file_is_error() {
        let err = Experiment::load_experiment(temp_path("does_not_exist.json")).unwrap_err();
        assert!(format!("{:#}", err).contains("Read experiment error"));
    }

    #[test]
    fn test_malformed_json_is_error() {
        let path = temp_path("broken.json");
        fs::write(&path, "{ not json").unwrap();
        assert!(Experiment::load_experiment(&path).is_err());
        let _ = fs::remove_file(path);
    }

    #[test]
    fn test_newer_version_rejected() {
        let json = r#"{"name":"x","version":99,"slides":[]}"#;
        assert!(Experiment::from_json_str(json).is_err());
    }

    #[test]
    fn test_lists_default_when_missing() {
        let json = r#"{"name":"x","slides":[]}"#;
        let exp = Experiment::from_json_str(json).unwrap();
        assert_eq!(exp.version, FORMAT_VERSION);
        assert!(exp.lists.is_empty());
    }
}
