//! Orchestration of one generation pass.
//!
//! A [`Generator`] instantiates the configured modules once, builds the
//! first-wins action registry, and on every [`Generator::produce`] call walks the
//! registry to resolve, classify and emit forwarding methods before rendering
//! the final document.

use std::collections::HashSet;

use tracing::{debug, info, instrument};

use crate::core::classifier::classify;
use crate::core::emitter::MethodEmitter;
use crate::core::error::{GenerateError, GenerateResult};
use crate::core::fingerprint::fingerprint;
use crate::core::introspect::TypeIntrospector;
use crate::core::registry::{ActionRegistry, ModuleRegistry, build_action_registry};
use crate::core::resolver::resolve;
use crate::core::template::{DOCUMENT, Placeholders, Templates};
use crate::core::types::ModuleInstance;

/// Version seed mixed into every fingerprint.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

const NAMESPACE_SEPARATOR: char = '\\';

/// Inputs that shape the generated document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Prefix of the generated trait name (`<class_name>Actions`).
    pub class_name: String,
    /// Target namespace; trailing separators are ignored.
    pub namespace: String,
    /// Module names in precedence order. Also hashed into the fingerprint verbatim.
    pub modules: Vec<String>,
}

/// Result of one generation pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedDocument {
    pub namespace: String,
    pub fingerprint: String,
    /// `use` lines, one per referenced module type.
    pub imports: Vec<String>,
    /// Rendered forwarding methods in emission order.
    pub methods: Vec<String>,
    /// Generated container name (`<class_name>Actions`).
    pub name: String,
    /// Final rendered source text.
    pub source: String,
}

impl GeneratedDocument {
    pub fn method_count(&self) -> usize {
        self.methods.len()
    }
}

pub struct Generator<'a> {
    settings: Settings,
    introspector: &'a dyn TypeIntrospector,
    modules: Vec<ModuleInstance>,
    actions: ActionRegistry,
    version: String,
    templates: Templates,
}

impl<'a> Generator<'a> {
    /// Instantiate every configured module and build the action registry.
    ///
    /// Fails with [`GenerateError::Configuration`] if any module cannot be
    /// resolved; no generator is produced in that case.
    #[instrument(
        skip_all,
        fields(class_name = %settings.class_name, modules = settings.modules.len())
    )]
    pub fn new(
        settings: Settings,
        registry: &dyn ModuleRegistry,
        introspector: &'a dyn TypeIntrospector,
    ) -> GenerateResult<Self> {
        let mut modules = Vec::with_capacity(settings.modules.len());
        let mut contributions = Vec::with_capacity(settings.modules.len());
        for name in &settings.modules {
            let instance = registry.instantiate(name)?;
            let actions = registry.actions(&instance);
            debug!(
                module = %instance.name,
                type_name = %instance.type_name,
                actions = actions.len(),
                "module instantiated"
            );
            modules.push(instance.clone());
            contributions.push((instance, actions));
        }

        let actions = build_action_registry(&contributions);
        debug!(actions = actions.len(), "action registry built");

        Ok(Self {
            settings,
            introspector,
            modules,
            actions,
            version: VERSION.to_string(),
            templates: Templates::new()?,
        })
    }

    /// Replace the version seed used for fingerprinting.
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn actions(&self) -> &ActionRegistry {
        &self.actions
    }

    /// Module instances in configured order.
    pub fn modules(&self) -> &[ModuleInstance] {
        &self.modules
    }

    pub fn fingerprint(&self) -> String {
        fingerprint(&self.version, &self.actions, &self.settings.modules)
    }

    /// Generate the delegation document.
    ///
    /// Pure with respect to `self`: repeated calls return identical documents.
    /// A registry entry whose method cannot be found on its module aborts the
    /// pass with [`GenerateError::Invariant`] before anything is rendered.
    #[instrument(skip_all, fields(class_name = %self.settings.class_name))]
    pub fn produce(&self) -> GenerateResult<GeneratedDocument> {
        let namespace = self
            .settings
            .namespace
            .trim_end_matches(NAMESPACE_SEPARATOR)
            .to_string();
        let imports = self.imports();

        let emitter = MethodEmitter::new(&self.templates);
        let mut emitted: HashSet<&str> = HashSet::new();
        let mut methods = Vec::new();
        for (action, module_name) in self.actions.iter() {
            if !emitted.insert(action) {
                debug!(action, "action already emitted, skipping");
                continue;
            }
            let module = self
                .module(module_name)
                .ok_or_else(|| GenerateError::Invariant {
                    module: module_name.to_string(),
                    type_name: String::new(),
                    method: action.to_string(),
                })?;
            let descriptor = resolve(self.introspector, &module.type_name, action)
                .ok_or_else(|| GenerateError::Invariant {
                    module: module.name.clone(),
                    type_name: module.type_name.clone(),
                    method: action.to_string(),
                })?;
            for target in classify(&descriptor.method) {
                debug!(action, emitted = %target.name, kind = %target.kind, "emitting method");
                methods.push(emitter.emit(&descriptor, &target)?);
            }
        }

        let fingerprint = self.fingerprint();
        let name = format!("{}Actions", self.settings.class_name);
        let namespace_prefix = if namespace.is_empty() {
            String::new()
        } else {
            format!("{namespace}{NAMESPACE_SEPARATOR}")
        };
        let values = Placeholders::from([
            ("hash", fingerprint.clone()),
            ("namespace_prefix", namespace_prefix),
            ("name", self.settings.class_name.clone()),
            ("imports", imports.join("\n")),
            ("methods", methods.join("\n\n ")),
        ]);
        let source = self.templates.render(DOCUMENT, &values)?;

        info!(
            name = %name,
            methods = methods.len(),
            fingerprint = %fingerprint,
            "document generated"
        );

        Ok(GeneratedDocument {
            namespace,
            fingerprint,
            imports,
            methods,
            name,
            source,
        })
    }

    fn module(&self, name: &str) -> Option<&ModuleInstance> {
        self.modules.iter().find(|module| module.name == name)
    }

    /// One `use` line per distinct module type that owns at least one action.
    fn imports(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        self.modules
            .iter()
            .filter(|module| self.actions.iter().any(|(_, owner)| owner == module.name))
            .filter(|module| seen.insert(module.type_name.as_str()))
            .map(|module| format!("use {};", module.type_name))
            .collect()
    }
}
