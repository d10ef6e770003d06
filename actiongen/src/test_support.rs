//! Test-only fixtures: a small module manifest and settings helpers.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::generator::Settings;
use crate::io::config::{GeneratorConfig, write_config};

/// Manifest with three modules exercising inherited, interface and parent docs.
///
/// - `ModuleA`: `fillField` (own doc), `seeText` (doc from the `Web` interface),
///   plus a hook and a protected helper that are not actions.
/// - `ModuleB`: `amOnUrl` (doc from parent `Base`).
/// - `Shadow`: a second `fillField` used to exercise first-wins dedup.
pub const SAMPLE_MANIFEST: &str = r#"
[[modules]]
name = "ModuleA"
type = "Modules\\ModuleA"

[[modules]]
name = "ModuleB"
type = "Modules\\ModuleB"

[[modules]]
name = "Shadow"
type = "Modules\\Shadow"

[[types]]
name = "Modules\\Web"

[[types.methods]]
name = "seeText"
doc = '''
/**
     * Checks that the page contains the given text.
     */'''
params = [{ name = "text" }, { name = "selector" }]

[[types]]
name = "Modules\\ModuleA"
interfaces = ["Modules\\Web"]

[[types.methods]]
name = "_before"

[[types.methods]]
name = "fillField"
doc = '''
/**
     * Fills a field with the given value.
     *
     * @param $field
     * @param $value
     */'''
params = [{ name = "field" }, { name = "value" }]

[[types.methods]]
name = "seeText"
params = [{ name = "text" }, { name = "selector", default = "null" }]

[[types.methods]]
name = "locate"
visibility = "protected"
params = [{ name = "selector" }]

[[types]]
name = "Modules\\Base"

[[types.methods]]
name = "_initialize"

[[types.methods]]
name = "amOnUrl"
doc = "/** Opens the given URL. */"
params = [{ name = "url" }]

[[types]]
name = "Modules\\ModuleB"
parent = "Modules\\Base"

[[types.methods]]
name = "amOnUrl"
params = [{ name = "url" }]

[[types]]
name = "Modules\\Shadow"

[[types.methods]]
name = "fillField"
doc = "/** Shadowed fillField. */"
params = [{ name = "field" }, { name = "value", default = "''" }]
"#;

/// Build generator settings from string slices.
pub fn settings(class_name: &str, namespace: &str, modules: &[&str]) -> Settings {
    Settings {
        class_name: class_name.to_string(),
        namespace: namespace.to_string(),
        modules: modules.iter().map(|module| module.to_string()).collect(),
    }
}

/// Temporary project directory holding a config and the sample manifest.
pub struct TestProject {
    dir: tempfile::TempDir,
}

impl TestProject {
    /// Create a project whose config enables `modules` in order.
    pub fn new(modules: &[&str]) -> Result<Self> {
        let dir = tempfile::tempdir().context("create tempdir")?;
        let project = Self { dir };
        project.write_manifest(SAMPLE_MANIFEST)?;
        project.write_config(modules)?;
        Ok(project)
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn config_path(&self) -> PathBuf {
        self.path().join("actiongen.toml")
    }

    pub fn manifest_path(&self) -> PathBuf {
        self.path().join("modules.toml")
    }

    pub fn output_path(&self) -> PathBuf {
        self.path().join("_generated").join("AcceptanceActions.php")
    }

    pub fn write_manifest(&self, contents: &str) -> Result<()> {
        let path = self.manifest_path();
        fs::write(&path, contents).with_context(|| format!("write {}", path.display()))
    }

    pub fn write_config(&self, modules: &[&str]) -> Result<()> {
        let cfg = GeneratorConfig {
            namespace: "Tests\\Support".to_string(),
            modules: modules.iter().map(|module| module.to_string()).collect(),
            ..GeneratorConfig::default()
        };
        write_config(&self.config_path(), &cfg)
    }
}
