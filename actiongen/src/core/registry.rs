//! Ordered, first-wins mapping of action names to owning modules.

use std::collections::HashSet;

use serde::ser::{Serialize, Serializer};

use crate::core::error::GenerateResult;
use crate::core::types::ModuleInstance;

/// Source of module instances and the actions each one exposes.
pub trait ModuleRegistry {
    /// Resolve a configured module name. Fails with
    /// [`GenerateError::Configuration`](crate::core::error::GenerateError::Configuration)
    /// when the module is unknown or cannot be instantiated.
    fn instantiate(&self, module: &str) -> GenerateResult<ModuleInstance>;

    /// Action-eligible method names of `module`, in declaration order.
    fn actions(&self, module: &ModuleInstance) -> Vec<String>;
}

/// Action name → module name, in registration order.
///
/// An action name appears at most once. The module that registers a name first
/// owns it; later registrations are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActionRegistry {
    entries: Vec<(String, String)>,
    seen: HashSet<String>,
}

impl ActionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `action` for `module` unless it is already owned.
    ///
    /// Returns `true` when the entry was added.
    pub fn register(&mut self, action: impl Into<String>, module: impl Into<String>) -> bool {
        let action = action.into();
        if !self.seen.insert(action.clone()) {
            return false;
        }
        self.entries.push((action, module.into()));
        true
    }

    /// Owning module of `action`, if registered.
    pub fn module_of(&self, action: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(name, _)| name == action)
            .map(|(_, module)| module.as_str())
    }

    /// Entries as `(action, module)` in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(action, module)| (action.as_str(), module.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Serializes as a map in registration order, which keeps fingerprints stable.
impl Serialize for ActionRegistry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}

/// Build the registry from modules in configured order.
///
/// Each module contributes its action names in declaration order. Names
/// already owned by an earlier module are skipped.
pub fn build_action_registry(modules: &[(ModuleInstance, Vec<String>)]) -> ActionRegistry {
    let mut registry = ActionRegistry::new();
    for (module, actions) in modules {
        for action in actions {
            registry.register(action.as_str(), module.name.as_str());
        }
    }
    registry
}
