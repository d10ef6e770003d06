//! Generator configuration, usually `actiongen.toml` next to the test suite.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};

use crate::generator::Settings;

const DEFAULT_MANIFEST: &str = "modules.toml";
const GENERATED_DIR: &str = "_generated";

/// Generator configuration (TOML).
///
/// Relative paths are resolved against the directory holding the config file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Prefix of the generated trait (`<class_name>Actions`).
    pub class_name: String,

    /// Target namespace of the generated trait.
    pub namespace: String,

    /// Enabled modules; earlier modules win action name conflicts.
    pub modules: Vec<String>,

    /// Module manifest path.
    pub manifest: PathBuf,

    /// Generated file path. Defaults to `_generated/<class_name>Actions.php`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<PathBuf>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            class_name: "Acceptance".to_string(),
            namespace: String::new(),
            modules: Vec::new(),
            manifest: PathBuf::from(DEFAULT_MANIFEST),
            output: None,
        }
    }
}

impl GeneratorConfig {
    pub fn validate(&self) -> Result<()> {
        if self.class_name.trim().is_empty() {
            return Err(anyhow!("class_name must be non-empty"));
        }
        if !self
            .class_name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_')
        {
            return Err(anyhow!(
                "class_name must be a plain identifier, got '{}'",
                self.class_name
            ));
        }
        if self.modules.iter().any(|module| module.trim().is_empty()) {
            return Err(anyhow!("modules must not contain empty names"));
        }
        if self.manifest.as_os_str().is_empty() {
            return Err(anyhow!("manifest must be a non-empty path"));
        }
        Ok(())
    }

    /// Generator inputs taken from this config.
    pub fn settings(&self) -> Settings {
        Settings {
            class_name: self.class_name.clone(),
            namespace: self.namespace.clone(),
            modules: self.modules.clone(),
        }
    }

    /// Manifest path resolved against `base`.
    pub fn manifest_path(&self, base: &Path) -> PathBuf {
        base.join(&self.manifest)
    }

    /// Output path resolved against `base`.
    pub fn output_path(&self, base: &Path) -> PathBuf {
        match &self.output {
            Some(output) => base.join(output),
            None => base
                .join(GENERATED_DIR)
                .join(format!("{}Actions.php", self.class_name)),
        }
    }
}

/// Load config from a TOML file.
///
/// Unlike the manifest, a missing config file is an error: without a module
/// list there is nothing to generate.
pub fn load_config(path: &Path) -> Result<GeneratorConfig> {
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: GeneratorConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()?;
    Ok(cfg)
}

/// Atomically write config to disk (temp file + rename).
pub fn write_config(path: &Path, cfg: &GeneratorConfig) -> Result<()> {
    cfg.validate()?;
    let mut buf = toml::to_string_pretty(cfg).context("serialize config toml")?;
    buf.push('\n');
    write_atomic(path, &buf)
}

pub(crate) fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let parent = path
        .parent()
        .with_context(|| format!("path missing parent {}", path.display()))?;
    fs::create_dir_all(parent).with_context(|| format!("create directory {}", parent.display()))?;
    let mut tmp_name = path.file_name().unwrap_or_default().to_os_string();
    tmp_name.push(".tmp");
    let tmp_path = path.with_file_name(tmp_name);
    fs::write(&tmp_path, contents)
        .with_context(|| format!("write temp file {}", tmp_path.display()))?;
    fs::rename(&tmp_path, path).with_context(|| format!("replace {}", path.display()))?;
    Ok(())
}
