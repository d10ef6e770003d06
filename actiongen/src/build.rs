//! Orchestration for `actiongen build` and `actiongen check`.
//!
//! Loads the config and manifest, constructs the generator, and compares the
//! current fingerprint with the one stamped into the existing generated file.
//! The file is rewritten only when the two differ (or when forced).

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{info, instrument};

use crate::generator::Generator;
use crate::io::artifact::{read_stamp, write_artifact};
use crate::io::config::{GeneratorConfig, load_config};
use crate::io::manifest::Manifest;

/// Config, manifest and the directory relative paths are resolved against.
#[derive(Debug, Clone)]
pub struct Project {
    pub config: GeneratorConfig,
    pub manifest: Manifest,
    pub base_dir: PathBuf,
}

impl Project {
    /// Load `config_path` and the manifest it points at.
    pub fn load(config_path: &Path) -> Result<Self> {
        let config = load_config(config_path)?;
        let base_dir = config_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();
        let manifest = Manifest::load(&config.manifest_path(&base_dir))?;
        Ok(Self {
            config,
            manifest,
            base_dir,
        })
    }

    pub fn generator(&self) -> Result<Generator<'_>> {
        Generator::new(self.config.settings(), &self.manifest, self.manifest.types())
            .context("construct generator")
    }

    pub fn output_path(&self) -> PathBuf {
        self.config.output_path(&self.base_dir)
    }
}

/// Freshness of the generated file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Freshness {
    /// Stored stamp equals the current fingerprint.
    UpToDate,
    /// File missing, unstamped, or stamped with another fingerprint.
    Stale { stored: Option<String> },
}

/// Result of a build or check.
#[derive(Debug, Clone)]
pub struct BuildOutcome {
    pub output_path: PathBuf,
    pub fingerprint: String,
    /// Freshness observed before any write.
    pub freshness: Freshness,
    /// Whether the file was (re)written.
    pub written: bool,
    /// Number of generated methods; `None` when generation was skipped.
    pub methods: Option<usize>,
}

/// Compare the stored stamp against the current fingerprint without writing.
#[instrument(skip_all, fields(config = %config_path.display()))]
pub fn check(config_path: &Path) -> Result<BuildOutcome> {
    let project = Project::load(config_path)?;
    let generator = project.generator()?;
    let output_path = project.output_path();
    let fingerprint = generator.fingerprint();
    let freshness = freshness(&output_path, &fingerprint)?;
    Ok(BuildOutcome {
        output_path,
        fingerprint,
        freshness,
        written: false,
        methods: None,
    })
}

/// Regenerate the file when stale, or unconditionally with `force`.
#[instrument(skip_all, fields(config = %config_path.display(), force = force))]
pub fn build(config_path: &Path, force: bool) -> Result<BuildOutcome> {
    let project = Project::load(config_path)?;
    let generator = project.generator()?;
    let output_path = project.output_path();
    let fingerprint = generator.fingerprint();
    let freshness = freshness(&output_path, &fingerprint)?;

    if freshness == Freshness::UpToDate && !force {
        info!(path = %output_path.display(), "generated file up to date");
        return Ok(BuildOutcome {
            output_path,
            fingerprint,
            freshness,
            written: false,
            methods: None,
        });
    }

    let document = generator.produce().context("generate actions")?;
    write_artifact(&output_path, &document.source)?;
    let methods = document.method_count();
    info!(path = %output_path.display(), methods, "generated file written");
    Ok(BuildOutcome {
        output_path,
        fingerprint: document.fingerprint,
        freshness,
        written: true,
        methods: Some(methods),
    })
}

fn freshness(output_path: &Path, fingerprint: &str) -> Result<Freshness> {
    let stored = read_stamp(output_path)?;
    if stored.as_deref() == Some(fingerprint) {
        Ok(Freshness::UpToDate)
    } else {
        Ok(Freshness::Stale { stored })
    }
}
