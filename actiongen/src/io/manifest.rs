//! Module manifest: the pre-parsed metadata table behind the module registry.
//!
//! The manifest is a TOML file with two arrays of tables:
//!
//! - `[[modules]]`: module name, implementing type and action filters.
//! - `[[types]]`: classes and interfaces with their parent, interfaces and
//!   declared methods (parameters, doc comment, visibility).

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::error::{GenerateError, GenerateResult};
use crate::core::introspect::{MetadataTable, TypeInfo, Visibility};
use crate::core::registry::ModuleRegistry;
use crate::core::types::ModuleInstance;

/// Hooks and other framework-internal methods start with this prefix.
const HOOK_PREFIX: char = '_';

/// A module the generator can be configured with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleEntry {
    pub name: String,
    /// Fully-qualified implementing type.
    #[serde(rename = "type")]
    pub type_name: String,
    /// Expose public methods inherited from ancestor types.
    #[serde(default = "default_include_inherited")]
    pub include_inherited: bool,
    /// When non-empty, only these methods become actions.
    #[serde(default)]
    pub only_actions: Vec<String>,
    /// Methods that never become actions.
    #[serde(default)]
    pub exclude_actions: Vec<String>,
}

fn default_include_inherited() -> bool {
    true
}

#[derive(Debug, Deserialize)]
struct ManifestFile {
    #[serde(default)]
    modules: Vec<ModuleEntry>,
    #[serde(default)]
    types: Vec<TypeInfo>,
}

/// Parsed manifest: module entries plus the metadata table.
#[derive(Debug, Clone)]
pub struct Manifest {
    modules: Vec<ModuleEntry>,
    table: MetadataTable,
}

impl Manifest {
    /// Load and validate a manifest file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("read manifest {}", path.display()))?;
        let manifest = Self::parse_str(&contents)
            .with_context(|| format!("load manifest {}", path.display()))?;
        debug!(
            path = %path.display(),
            modules = manifest.modules.len(),
            "manifest loaded"
        );
        Ok(manifest)
    }

    pub fn parse_str(contents: &str) -> Result<Self> {
        let file: ManifestFile = toml::from_str(contents).context("parse manifest")?;
        validate(&file)?;
        Ok(Self {
            modules: file.modules,
            table: MetadataTable::new(file.types),
        })
    }

    pub fn modules(&self) -> &[ModuleEntry] {
        &self.modules
    }

    pub fn module(&self, name: &str) -> Option<&ModuleEntry> {
        self.modules.iter().find(|entry| entry.name == name)
    }

    /// Metadata table used as the type introspector.
    pub fn types(&self) -> &MetadataTable {
        &self.table
    }
}

fn validate(file: &ManifestFile) -> Result<()> {
    let mut names = HashSet::new();
    for entry in &file.modules {
        if entry.name.trim().is_empty() {
            bail!("modules: name must be non-empty");
        }
        if entry.type_name.trim().is_empty() {
            bail!("module {}: type must be non-empty", entry.name);
        }
        if !names.insert(entry.name.as_str()) {
            bail!("duplicate module '{}'", entry.name);
        }
    }

    let mut types = HashSet::new();
    for info in &file.types {
        if !types.insert(info.name.as_str()) {
            bail!("duplicate type '{}'", info.name);
        }
        let mut methods = HashSet::new();
        for method in &info.methods {
            if !methods.insert(method.name.as_str()) {
                bail!("type {}: duplicate method '{}'", info.name, method.name);
            }
        }
    }
    Ok(())
}

impl ModuleRegistry for Manifest {
    fn instantiate(&self, module: &str) -> GenerateResult<ModuleInstance> {
        let entry = self.module(module).ok_or_else(|| {
            GenerateError::Configuration(format!("module '{}' is not in the manifest", module))
        })?;
        if !self.table.contains(&entry.type_name) {
            return Err(GenerateError::Configuration(format!(
                "module '{}': type {} is not described in the manifest",
                module, entry.type_name
            )));
        }
        Ok(ModuleInstance {
            name: entry.name.clone(),
            type_name: entry.type_name.clone(),
        })
    }

    /// Public, non-hook methods: own declarations first, then inherited ones
    /// nearest ancestor first. The nearest declaration decides visibility.
    fn actions(&self, module: &ModuleInstance) -> Vec<String> {
        let Some(entry) = self.module(&module.name) else {
            return Vec::new();
        };
        let mut chain = self.table.ancestry(&module.type_name);
        if !entry.include_inherited {
            chain.truncate(1);
        }

        let mut seen = HashSet::new();
        let mut actions = Vec::new();
        for info in chain {
            for method in &info.methods {
                if !seen.insert(method.name.as_str()) {
                    continue;
                }
                if method.visibility != Visibility::Public
                    || method.name.starts_with(HOOK_PREFIX)
                    || entry.exclude_actions.contains(&method.name)
                    || (!entry.only_actions.is_empty()
                        && !entry.only_actions.contains(&method.name))
                {
                    continue;
                }
                actions.push(method.name.clone());
            }
        }
        actions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::introspect::TypeIntrospector;
    use crate::test_support::SAMPLE_MANIFEST;

    fn instance(manifest: &Manifest, name: &str) -> ModuleInstance {
        manifest.instantiate(name).expect("instantiate")
    }

    #[test]
    fn actions_skip_hooks_and_non_public_methods() {
        let manifest = Manifest::parse_str(SAMPLE_MANIFEST).expect("manifest");
        let actions = manifest.actions(&instance(&manifest, "ModuleA"));
        assert_eq!(actions, vec!["fillField", "seeText"]);
    }

    #[test]
    fn inherited_methods_follow_own_methods() {
        let manifest = Manifest::parse_str(
            r#"
[[modules]]
name = "Web"
type = "Child"

[[types]]
name = "Base"
methods = [{ name = "click" }, { name = "amOnPage" }]

[[types]]
name = "Child"
parent = "Base"
methods = [{ name = "seeText" }, { name = "click" }]
"#,
        )
        .expect("manifest");
        let web = instance(&manifest, "Web");
        assert_eq!(manifest.actions(&web), vec!["seeText", "click", "amOnPage"]);
        assert_eq!(
            manifest.types().declaring_type("Child", "amOnPage").as_deref(),
            Some("Base")
        );
    }

    #[test]
    fn inherited_methods_can_be_disabled() {
        let manifest = Manifest::parse_str(
            r#"
[[modules]]
name = "Web"
type = "Child"
include_inherited = false

[[types]]
name = "Base"
methods = [{ name = "amOnPage" }]

[[types]]
name = "Child"
parent = "Base"
methods = [{ name = "click" }]
"#,
        )
        .expect("manifest");
        assert_eq!(manifest.actions(&instance(&manifest, "Web")), vec!["click"]);
    }

    #[test]
    fn only_and_exclude_filters_apply() {
        let manifest = Manifest::parse_str(
            r#"
[[modules]]
name = "Only"
type = "Web"
only_actions = ["seeText", "click"]

[[modules]]
name = "Except"
type = "Web"
exclude_actions = ["click"]

[[types]]
name = "Web"
methods = [{ name = "click" }, { name = "seeText" }, { name = "amOnPage" }]
"#,
        )
        .expect("manifest");
        assert_eq!(
            manifest.actions(&instance(&manifest, "Only")),
            vec!["click", "seeText"]
        );
        assert_eq!(
            manifest.actions(&instance(&manifest, "Except")),
            vec!["seeText", "amOnPage"]
        );
    }

    #[test]
    fn unknown_module_or_type_is_configuration_error() {
        let manifest = Manifest::parse_str(
            r#"
[[modules]]
name = "Ghost"
type = "Missing\\Type"
"#,
        )
        .expect("manifest");
        assert!(matches!(
            manifest.instantiate("Nope"),
            Err(GenerateError::Configuration(_))
        ));
        assert!(matches!(
            manifest.instantiate("Ghost"),
            Err(GenerateError::Configuration(_))
        ));
    }

    #[test]
    fn duplicate_entries_are_rejected() {
        let err = Manifest::parse_str(
            r#"
[[modules]]
name = "Web"
type = "A"

[[modules]]
name = "Web"
type = "B"
"#,
        )
        .unwrap_err();
        assert!(format!("{:#}", err).contains("duplicate module 'Web'"));

        let err = Manifest::parse_str(
            r#"
[[types]]
name = "A"
methods = [{ name = "click" }, { name = "click" }]
"#,
        )
        .unwrap_err();
        assert!(format!("{:#}", err).contains("duplicate method 'click'"));
    }

    #[test]
    fn load_reports_path_on_parse_error() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("modules.toml");
        fs::write(&path, "[[modules]]\nname = 1\n").expect("write");
        let err = Manifest::load(&path).unwrap_err();
        assert!(format!("{:#}", err).contains("modules.toml"));
    }
}
